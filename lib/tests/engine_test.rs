#[macro_use]
extern crate assert_matches;

use rs_words_solver::*;

use std::result::Result;

fn create_word_bank(words: &[&str]) -> WordBank {
    WordBank::new(words.iter().map(|word| Word::from(*word))).unwrap()
}

fn to_words(words: &[&str]) -> Vec<Word> {
    words.iter().map(|word| Word::from(*word)).collect()
}

#[test]
fn select_candidates_no_restrictions_sorts_by_score_then_bank_order() {
    // Scores: 7, 13, 15, 15, 13, 13
    let bank = create_word_bank(&["alpha", "allot", "begot", "below", "endow", "ingot"]);

    let candidates = select_candidates(&bank, &WordRestrictions::new(5));

    assert_eq!(
        candidates,
        to_words(&["begot", "below", "allot", "endow", "ingot", "alpha"])
    );
}

#[test]
fn select_candidates_ties_keep_bank_order() {
    let bank = create_word_bank(&["dcba", "abcd", "bcda", "cdab"]);

    let candidates = select_candidates(&bank, &WordRestrictions::new(4));

    assert_eq!(candidates, bank.words());
}

#[test]
fn select_candidates_filters_by_restrictions() -> Result<(), WordleError> {
    let bank = create_word_bank(&["alpha", "allot", "begot", "below", "endow", "ingot"]);
    let restrictions = WordRestrictions::from_result(&Word::from("begot"), &"-.-+-".parse::<Verdict>()?)?;

    assert_eq!(select_candidates(&bank, &restrictions), to_words(&["endow"]));
    Ok(())
}

#[test]
fn select_candidates_can_be_empty() -> Result<(), WordleError> {
    let bank = create_word_bank(&["alpha", "allot", "begot"]);
    let restrictions = WordRestrictions::from_result(&Word::from("zzzzz"), &"+----".parse::<Verdict>()?)?;

    assert!(select_candidates(&bank, &restrictions).is_empty());
    Ok(())
}

#[test]
fn session_starts_with_whole_bank() {
    let bank = create_word_bank(&["abcz", "wxyz", "defy", "ghix"]);
    let session = Session::new(&bank);

    assert_eq!(session.round(), 0);
    assert_eq!(session.candidates().len(), 4);
    // Scores: 5, 7, 5, 5
    assert_eq!(session.best_guess(), Some(Word::from("wxyz")));
}

#[test]
fn session_submit_modifies_next_guess() -> Result<(), WordleError> {
    let bank = create_word_bank(&["abcz", "weyz", "defy", "ghix"]);
    let mut session = Session::new(&bank);

    session.submit(&Word::from("weyz"), &"-+.-".parse::<Verdict>()?)?;

    assert_eq!(session.round(), 1);
    assert_eq!(session.best_guess(), Some(Word::from("defy")));
    assert_eq!(
        session.guesses(),
        &[(Word::from("weyz"), "-+.-".parse::<Verdict>()?)]
    );
    Ok(())
}

#[test]
fn session_rejects_contradiction_and_keeps_state() -> Result<(), WordleError> {
    let bank = create_word_bank(&["crane", "cloud", "chips", "sober"]);
    let mut session = Session::new(&bank);
    session.submit_encoded("crane", "+----")?;

    assert_matches!(
        session.submit_encoded("cloud", "-----"),
        Err(WordleError::Contradiction(_))
    );
    assert_eq!(session.round(), 1);
    assert_eq!(session.candidates(), to_words(&["cloud", "chips"]));
    Ok(())
}

#[test]
fn session_rejects_bad_input() {
    let bank = create_word_bank(&["crane", "cloud"]);
    let mut session = Session::new(&bank);

    assert_matches!(
        session.submit_encoded("crane", "+-?--"),
        Err(WordleError::InvalidSymbol('?'))
    );
    assert_matches!(
        session.submit_encoded("cranes", "+----+"),
        Err(WordleError::LengthMismatch {
            expected: 5,
            actual: 6
        })
    );
    assert_matches!(
        session.submit_encoded("crane", "+---"),
        Err(WordleError::LengthMismatch {
            expected: 5,
            actual: 4
        })
    );
    assert_eq!(session.round(), 0);
}

#[test]
fn session_submit_encoded_normalizes_guess() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(
        ["CRANE", "Trace", "ёлкаа"],
        &Normalizer::new().with_fold('ё', 'е'),
        None,
    )?;

    let mut session = Session::new(&bank);
    session.submit_encoded("CRANE", ".++-+")?;
    assert_eq!(session.candidates(), to_words(&["trace"]));
    assert_eq!(session.guesses()[0].0, Word::from("crane"));

    let mut session = Session::new(&bank);
    session.submit_encoded(" Ёлкаа", "+++++")?;
    assert_eq!(session.candidates(), to_words(&["елкаа"]));
    Ok(())
}

#[test]
fn session_submit_encoded_rejects_blank_guess() {
    let bank = create_word_bank(&["crane", "cloud"]);
    let mut session = Session::new(&bank);

    assert_matches!(
        session.submit_encoded("  ", "+++++"),
        Err(WordleError::LengthMismatch {
            expected: 5,
            actual: 0
        })
    );
    assert_eq!(session.round(), 0);
}

#[test]
fn play_game_rejects_objective_of_other_length() -> Result<(), WordleError> {
    let bank = create_word_bank(&["crane", "cloud"]);

    assert_eq!(play_game(&Word::from("cran"), 6, &bank)?, GameResult::UnknownWord);
    Ok(())
}

#[test]
fn session_accepts_guesses_outside_bank() -> Result<(), WordleError> {
    let bank = create_word_bank(&["crane", "cloud", "chips"]);
    let mut session = Session::new(&bank);

    session.submit_encoded("xyzzy", "-----")?;

    assert_eq!(session.candidates().len(), 3);
    assert!(session.restrictions().letter_fact('x').is_some());
    Ok(())
}

#[test]
fn play_game_unknown_word() -> Result<(), WordleError> {
    let bank = create_word_bank(&["abcz", "wxyz", "defy", "ghix"]);

    assert_eq!(play_game(&Word::from("nope"), 10, &bank)?, GameResult::UnknownWord);
    Ok(())
}

#[test]
fn play_game_solves_every_word() -> Result<(), WordleError> {
    let bank = create_word_bank(&[
        "alpha", "allot", "begot", "below", "endow", "ingot", "eerie", "speed", "geese",
    ]);

    for word in bank.words() {
        let result = play_game(word, bank.len() as u32, &bank)?;

        assert_matches!(result, GameResult::Success(ref guesses) if guesses.last() == Some(word));
    }
    Ok(())
}

#[test]
fn play_game_runs_out_of_guesses() -> Result<(), WordleError> {
    let bank = create_word_bank(&["alpha", "allot", "begot", "below", "endow", "ingot"]);

    assert_eq!(
        play_game(&Word::from("alpha"), 1, &bank)?,
        GameResult::Failure(to_words(&["begot"]))
    );
    Ok(())
}
