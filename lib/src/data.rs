use crate::results::WordleError;
use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt;
use std::io::BufRead;
use std::result::Result;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable sequence of letters.
///
/// Each `char` is one letter, so words in any alphabet have one location per letter. Cloning a
/// `Word` is cheap, as the letters are shared.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "String", into = "String")
)]
pub struct Word {
    letters: Arc<[char]>,
}

impl Word {
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Returns the number of letters in this word.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Iterates over each letter of this word once, in order of first appearance.
    pub fn distinct_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters
            .iter()
            .enumerate()
            .filter(|(index, letter)| !self.letters[..*index].contains(*letter))
            .map(|(_, letter)| *letter)
    }
}

impl From<&str> for Word {
    fn from(word: &str) -> Self {
        Word {
            letters: word.chars().collect(),
        }
    }
}

impl From<String> for Word {
    fn from(word: String) -> Self {
        Word::from(word.as_str())
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.letters.iter().collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters.iter() {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word(\"{}\")", self)
    }
}

/// Turns raw text into words: trims whitespace, converts to lower case, then folds letter
/// variants into a single letter.
///
/// ```
/// use rs_words_solver::Normalizer;
///
/// let normalizer = Normalizer::new().with_fold('ё', 'е');
/// let word = normalizer.normalize("  Ёлка\n").unwrap();
/// assert_eq!(word.to_string(), "елка");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Normalizer {
    folds: HashMap<char, char>,
}

impl Normalizer {
    /// Creates a normalizer with no folding rules.
    pub fn new() -> Normalizer {
        Normalizer::default()
    }

    /// Adds a rule replacing the letter `from` with `to`. Rules apply after lower-casing.
    pub fn with_fold(mut self, from: char, to: char) -> Normalizer {
        self.folds.insert(from, to);
        self
    }

    /// Normalizes the given text, returning `None` if nothing but whitespace remains.
    pub fn normalize(&self, raw: &str) -> Option<Word> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Word {
            letters: trimmed
                .chars()
                .flat_map(char::to_lowercase)
                .map(|letter| *self.folds.get(&letter).unwrap_or(&letter))
                .collect(),
        })
    }
}

/// Counts the number of words that contain each letter.
#[derive(Clone, Debug, Default)]
pub struct WordCounter {
    num_words_by_letter: HashMap<char, u32>,
}

impl WordCounter {
    /// Creates a new word counter based on the given word list.
    pub fn new(words: &[Word]) -> WordCounter {
        let mut num_words_by_letter: HashMap<char, u32> = HashMap::new();
        for word in words {
            for letter in word.distinct_letters() {
                *num_words_by_letter.entry(letter).or_insert(0) += 1;
            }
        }
        WordCounter {
            num_words_by_letter,
        }
    }

    /// Retrieves the count of words that contain the given letter.
    pub fn num_words_with_letter(&self, letter: char) -> u32 {
        *self.num_words_by_letter.get(&letter).unwrap_or(&0)
    }

    /// Sums the word counts of each unique letter in the word.
    pub fn score_word(&self, word: &Word) -> u32 {
        word.distinct_letters()
            .map(|letter| self.num_words_with_letter(letter))
            .sum()
    }
}

/// Contains all the possible words for this game, along with the score of each word.
///
/// Words keep the order in which they were given. Duplicate words are dropped, keeping the first
/// occurrence.
#[derive(Clone, Debug)]
pub struct WordBank {
    words: Vec<Word>,
    scores: Vec<u32>,
    index_by_word: HashMap<Word, usize>,
    counter: WordCounter,
    word_length: usize,
    normalizer: Normalizer,
}

impl WordBank {
    /// Constructs a new `WordBank` from already normalized words.
    ///
    /// The word length is taken from the first non-empty word. All words must have that length.
    /// Text parsed against this bank later on is normalized with [`Normalizer::new`].
    pub fn new<I>(words: I) -> Result<Self, WordleError>
    where
        I: IntoIterator<Item = Word>,
    {
        WordBank::build(words, None, Normalizer::new())
    }

    /// Constructs a new `WordBank` from already normalized words that must all have exactly
    /// `word_length` letters.
    pub fn with_word_length<I>(words: I, word_length: usize) -> Result<Self, WordleError>
    where
        I: IntoIterator<Item = Word>,
    {
        WordBank::build(words, Some(word_length), Normalizer::new())
    }

    /// Constructs a new `WordBank` from raw text, normalizing each entry. Blank entries are
    /// skipped.
    ///
    /// If `word_length` is `None`, the length of the first word is used. The bank keeps the
    /// normalizer, so that later text input is read the same way.
    pub fn from_iterator<I, S>(
        words: I,
        normalizer: &Normalizer,
        word_length: Option<usize>,
    ) -> Result<Self, WordleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        WordBank::build(
            words
                .into_iter()
                .filter_map(|word| normalizer.normalize(word.as_ref())),
            word_length,
            normalizer.clone(),
        )
    }

    /// Constructs a new `WordBank` by reading words from the given reader.
    ///
    /// The reader should provide one word per line.
    pub fn from_reader<R: BufRead>(
        word_reader: R,
        normalizer: &Normalizer,
        word_length: Option<usize>,
    ) -> Result<Self, WordleError> {
        let lines = word_reader
            .lines()
            .collect::<Result<Vec<String>, std::io::Error>>()?;
        WordBank::from_iterator(lines, normalizer, word_length)
    }

    fn build<I>(
        words: I,
        word_length: Option<usize>,
        normalizer: Normalizer,
    ) -> Result<Self, WordleError>
    where
        I: IntoIterator<Item = Word>,
    {
        let mut word_length = word_length;
        let mut seen: HashSet<Word> = HashSet::new();
        let mut unique_words: Vec<Word> = Vec::new();
        for word in words {
            if word.is_empty() {
                continue;
            }
            let expected = *word_length.get_or_insert(word.len());
            if word.len() != expected {
                return Err(WordleError::LengthMismatch {
                    expected,
                    actual: word.len(),
                });
            }
            if seen.insert(word.clone()) {
                unique_words.push(word);
            }
        }
        let word_length = match word_length {
            Some(length) if !unique_words.is_empty() => length,
            _ => return Err(WordleError::EmptyDictionary),
        };

        let counter = WordCounter::new(&unique_words);
        let scores = unique_words
            .iter()
            .map(|word| counter.score_word(word))
            .collect();
        let index_by_word = unique_words
            .iter()
            .enumerate()
            .map(|(index, word)| (word.clone(), index))
            .collect();
        Ok(WordBank {
            words: unique_words,
            scores,
            index_by_word,
            counter,
            word_length,
            normalizer,
        })
    }

    /// Retrieves the full list of available words, in their original order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Iterates over each word along with its score, in the original word order.
    pub fn scored_words(&self) -> impl Iterator<Item = (&Word, u32)> + '_ {
        self.words.iter().zip(self.scores.iter().copied())
    }

    /// Returns the number of possible words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`, as an empty bank cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the length of every word in the bank.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Reads the given text as a word, the same way the words of this bank were read.
    ///
    /// Fails with [`WordleError::LengthMismatch`] if the result doesn't have [`Self::word_length`]
    /// letters.
    pub fn parse_word(&self, raw: &str) -> Result<Word, WordleError> {
        match self.normalizer.normalize(raw) {
            Some(word) if word.len() == self.word_length => Ok(word),
            other => Err(WordleError::LengthMismatch {
                expected: self.word_length,
                actual: other.map_or(0, |word| word.len()),
            }),
        }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.index_by_word.contains_key(word)
    }

    /// Returns the score of the given word, or `None` if it isn't in the bank.
    ///
    /// A word's score is the sum, over its unique letters, of the number of words in the bank
    /// that contain that letter.
    pub fn score(&self, word: &Word) -> Option<u32> {
        self.index_by_word
            .get(word)
            .map(|index| self.scores[*index])
    }

    /// Returns the number of words in the bank that contain the given letter.
    pub fn letter_frequency(&self, letter: char) -> u32 {
        self.counter.num_words_with_letter(letter)
    }
}
