use crate::data::Word;
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::iter::zip;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of a given letter at a specific location.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LetterResult {
    /// The letter occupies this exact location in the objective word.
    Correct,
    /// The letter is in the objective word, but not at this location.
    Present,
    /// The objective word has no more occurrences of this letter than those already marked
    /// `Correct` or `Present` elsewhere in the same guess.
    Absent,
}

impl LetterResult {
    /// Parses a single feedback symbol.
    ///
    /// The canonical symbols are `+` (correct), `.` (present elsewhere), and `-` (absent). The
    /// colour initials `g`, `y`, and `b` are accepted as aliases.
    pub fn from_char(symbol: char) -> Result<LetterResult, WordleError> {
        match symbol.to_ascii_lowercase() {
            '+' | 'g' => Ok(LetterResult::Correct),
            '.' | 'y' => Ok(LetterResult::Present),
            '-' | 'b' => Ok(LetterResult::Absent),
            _ => Err(WordleError::InvalidSymbol(symbol)),
        }
    }

    /// Returns the canonical symbol for this result.
    pub fn to_char(self) -> char {
        match self {
            LetterResult::Correct => '+',
            LetterResult::Present => '.',
            LetterResult::Absent => '-',
        }
    }
}

/// The per-letter results of a single guess, in the same order as the letters of the guess.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Verdict {
    results: Vec<LetterResult>,
}

impl Verdict {
    pub fn new(results: Vec<LetterResult>) -> Verdict {
        Verdict { results }
    }

    pub fn results(&self) -> &[LetterResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns `true` iff every letter was `Correct`, i.e. the guess was the objective word.
    pub fn is_solved(&self) -> bool {
        self.results
            .iter()
            .all(|result| *result == LetterResult::Correct)
    }
}

impl From<Vec<LetterResult>> for Verdict {
    fn from(results: Vec<LetterResult>) -> Self {
        Verdict::new(results)
    }
}

impl FromStr for Verdict {
    type Err = WordleError;

    /// Parses feedback such as `"+.-.-"`, one symbol per guessed letter.
    fn from_str(encoded: &str) -> Result<Self, Self::Err> {
        encoded
            .trim()
            .chars()
            .map(LetterResult::from_char)
            .collect::<Result<Vec<LetterResult>, WordleError>>()
            .map(Verdict::new)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.results {
            write!(f, "{}", result.to_char())?;
        }
        Ok(())
    }
}

/// Describes how newly reported results conflict with what is already known.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Conflict {
    #[error("'{letter}' was reported both at and not at position {position}")]
    HereAndNotHere { letter: char, position: usize },
    #[error("position {position} cannot hold '{letter}', it already holds '{other}'")]
    PositionTaken {
        letter: char,
        other: char,
        position: usize,
    },
    #[error("'{letter}' was known to appear exactly {known} time(s), now {found}")]
    CountChanged {
        letter: char,
        known: usize,
        found: usize,
    },
    #[error("'{letter}' must appear at least {minimum} time(s), but exactly {count} was reported")]
    CountBelowMinimum {
        letter: char,
        minimum: usize,
        count: usize,
    },
    #[error("'{letter}' must appear at least {minimum} time(s), but only {available} position(s) remain")]
    NoRoom {
        letter: char,
        minimum: usize,
        available: usize,
    },
    #[error("{required} letters are required, but words only have {word_length}")]
    TooManyLetters { required: usize, word_length: usize },
}

/// Indicates that an error occurred while building a dictionary or applying results.
#[derive(Debug, Error)]
pub enum WordleError {
    /// A word, guess, or verdict does not have the expected number of letters.
    #[error("expected {expected} letters, found {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    /// A verdict symbol is outside the three-symbol alphabet.
    #[error("'{0}' is not a result symbol, use '+' (correct), '.' (misplaced) or '-' (absent)")]
    InvalidSymbol(char),
    /// The given results are impossible given the results that came before them.
    #[error("contradictory results: {0}")]
    Contradiction(#[from] Conflict),
    /// No words were available to build the dictionary.
    #[error("the dictionary contains no words")]
    EmptyDictionary,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Whether the game was won or lost by the guesser.
#[derive(Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    /// Indicates that the guesser won the game, and provides the guesses that were given.
    Success(Vec<Word>),
    /// Indicates that the guesser failed to guess the word, and provides the guesses that were given.
    Failure(Vec<Word>),
    /// Indicates that the given word was not in the word bank.
    UnknownWord,
}

/// Determines the result of the given `guess` when applied to the given `objective`.
///
/// Exact matches are claimed first. The remaining letters of the objective are then handed out
/// to the misplaced letters of the guess from left to right, so a letter is never reported more
/// often than it occurs in the objective.
///
/// The word length is taken from `objective`; a `guess` of any other length fails with
/// [`WordleError::LengthMismatch`]. Check the objective against a [`WordBank`](crate::WordBank)
/// first (as [`play_game`](crate::play_game) does) to hold both words to the bank's length.
///
/// ```
/// use rs_words_solver::*;
///
/// let verdict = get_result_for_guess(&Word::from("aabbc"), &Word::from("aaaaa")).unwrap();
/// assert_eq!(verdict.to_string(), "++---");
/// ```
pub fn get_result_for_guess(objective: &Word, guess: &Word) -> Result<Verdict, WordleError> {
    if objective.len() != guess.len() {
        return Err(WordleError::LengthMismatch {
            expected: objective.len(),
            actual: guess.len(),
        });
    }
    let mut results = vec![LetterResult::Absent; guess.len()];
    let mut unclaimed: HashMap<char, usize> = HashMap::new();
    for (index, (objective_letter, guess_letter)) in
        zip(objective.letters(), guess.letters()).enumerate()
    {
        if objective_letter == guess_letter {
            results[index] = LetterResult::Correct;
        } else {
            *unclaimed.entry(*objective_letter).or_insert(0) += 1;
        }
    }
    for (index, guess_letter) in guess.letters().iter().enumerate() {
        if results[index] == LetterResult::Correct {
            continue;
        }
        if let Some(count) = unclaimed.get_mut(guess_letter) {
            if *count > 0 {
                *count -= 1;
                results[index] = LetterResult::Present;
            }
        }
    }
    Ok(Verdict::new(results))
}
