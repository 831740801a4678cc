use crate::data::*;
use crate::restrictions::WordRestrictions;
use crate::results::*;
use std::result::Result;

/// Gets the words in the word bank that meet the given restrictions, best guesses first.
///
/// Words are ordered by descending score. Words with equal scores keep their order from the
/// word bank.
pub fn select_candidates(bank: &WordBank, restrictions: &WordRestrictions) -> Vec<Word> {
    let mut candidates: Vec<(&Word, u32)> = bank
        .scored_words()
        .filter(|(word, _)| restrictions.is_satisfied_by(word))
        .collect();
    // `sort_by` is stable, which keeps ties in word bank order.
    candidates.sort_by(|(_, score), (_, other_score)| other_score.cmp(score));
    candidates
        .into_iter()
        .map(|(word, _)| word.clone())
        .collect()
}

/// Tracks a single game: the guesses made so far, and the restrictions they imply.
///
/// ```
/// use rs_words_solver::*;
///
/// let bank = WordBank::new(["abc", "abd", "xyz"].map(Word::from)).unwrap();
/// let mut session = Session::new(&bank);
///
/// session.submit_encoded("abc", "++-").unwrap();
///
/// assert_eq!(session.candidates(), vec![Word::from("abd")]);
/// ```
#[derive(Clone, Debug)]
pub struct Session<'a> {
    bank: &'a WordBank,
    restrictions: WordRestrictions,
    guesses: Vec<(Word, Verdict)>,
}

impl<'a> Session<'a> {
    /// Starts a new session with no known restrictions.
    pub fn new(bank: &'a WordBank) -> Session<'a> {
        Session {
            bank,
            restrictions: WordRestrictions::new(bank.word_length()),
            guesses: Vec::new(),
        }
    }

    /// Records the result of a guess.
    ///
    /// Nothing is recorded if this returns an error, so the caller may correct the input and
    /// try again.
    pub fn submit(&mut self, guess: &Word, verdict: &Verdict) -> Result<(), WordleError> {
        self.restrictions.update(guess, verdict)?;
        self.guesses.push((guess.clone(), verdict.clone()));
        Ok(())
    }

    /// Records the result of a guess given as text, such as `("crane", "+.--.")`.
    ///
    /// The guess is normalized like the words of the bank (see [`WordBank::parse_word`]). See
    /// [`LetterResult::from_char`] for the accepted symbols.
    pub fn submit_encoded(&mut self, guess: &str, verdict: &str) -> Result<(), WordleError> {
        let guess = self.bank.parse_word(guess)?;
        let verdict: Verdict = verdict.parse()?;
        self.submit(&guess, &verdict)
    }

    /// Returns the words that may still be the objective word, best guesses first.
    pub fn candidates(&self) -> Vec<Word> {
        select_candidates(self.bank, &self.restrictions)
    }

    /// Returns the best next guess, or `None` if no word fits the results so far.
    pub fn best_guess(&self) -> Option<Word> {
        self.candidates().into_iter().next()
    }

    /// Returns the number of results submitted so far.
    pub fn round(&self) -> usize {
        self.guesses.len()
    }

    pub fn guesses(&self) -> &[(Word, Verdict)] {
        &self.guesses
    }

    pub fn restrictions(&self) -> &WordRestrictions {
        &self.restrictions
    }

    pub fn word_bank(&self) -> &'a WordBank {
        self.bank
    }
}

/// Attempts to guess the given word within the maximum number of guesses, using words from the
/// word bank.
///
/// Each round guesses the best remaining candidate.
///
/// ```
/// use rs_words_solver::*;
///
/// let bank = WordBank::new(["abc", "bcd", "cde", "def"].map(Word::from)).unwrap();
///
/// let result = play_game(&Word::from("def"), 10, &bank).unwrap();
///
/// assert!(matches!(result, GameResult::Success(_)));
/// ```
pub fn play_game(
    word_to_guess: &Word,
    max_num_guesses: u32,
    bank: &WordBank,
) -> Result<GameResult, WordleError> {
    if !bank.contains(word_to_guess) {
        return Ok(GameResult::UnknownWord);
    }
    let mut session = Session::new(bank);
    let mut guesses: Vec<Word> = Vec::new();
    for _ in 1..=max_num_guesses {
        let guess = match session.best_guess() {
            Some(guess) => guess,
            None => return Ok(GameResult::Failure(guesses)),
        };
        let verdict = get_result_for_guess(word_to_guess, &guess)?;
        guesses.push(guess.clone());

        if verdict.is_solved() {
            return Ok(GameResult::Success(guesses));
        }
        session.submit(&guess, &verdict)?;
    }
    Ok(GameResult::Failure(guesses))
}
