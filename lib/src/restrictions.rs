use crate::data::Word;
use crate::results::Conflict;
use crate::results::LetterResult;
use crate::results::Verdict;
use crate::results::WordleError;
use std::collections::HashMap;
use std::iter::zip;
use std::result::Result;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum LocatedLetterState {
    Unknown,
    Here,
    NotHere,
}

/// Everything known about one letter of the objective word.
///
/// Invariants, maintained by every update:
///
/// * no location is both confirmed and excluded,
/// * `min_count` is at least the number of confirmed locations,
/// * if the exact count is known, it equals `min_count`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LetterFact {
    letter: char,
    /// The letter must appear exactly this many times in the word.
    maybe_exact_count: Option<usize>,
    /// The minimum number of times this letter must appear in the word.
    min_count: usize,
    /// The number of locations we know the letter must appear.
    num_here: usize,
    /// The number of locations we know the letter must not appear.
    num_not_here: usize,
    /// The status of the letter at each location.
    located_state: Vec<LocatedLetterState>,
}

impl LetterFact {
    /// Constructs an empty `LetterFact` for use with words of the given length.
    fn new(letter: char, word_length: usize) -> LetterFact {
        LetterFact {
            letter,
            maybe_exact_count: None,
            min_count: 0,
            num_here: 0,
            num_not_here: 0,
            located_state: vec![LocatedLetterState::Unknown; word_length],
        }
    }

    /// Returns the minimum number of times this letter must appear in the word.
    pub fn min_count(&self) -> usize {
        self.min_count
    }

    /// Returns the number of times this letter must appear in the word, if this is known.
    pub fn exact_count(&self) -> Option<usize> {
        self.maybe_exact_count
    }

    /// Iterates over the locations known to hold this letter.
    pub fn confirmed_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions_in_state(LocatedLetterState::Here)
    }

    /// Iterates over the locations known not to hold this letter.
    pub fn excluded_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions_in_state(LocatedLetterState::NotHere)
    }

    /// Returns `true` iff the given word agrees with everything known about this letter.
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        let mut count_found = 0;
        for (state, word_letter) in zip(&self.located_state, word.letters()) {
            if *word_letter == self.letter {
                count_found += 1;
                if *state == LocatedLetterState::NotHere {
                    return false;
                }
            } else if *state == LocatedLetterState::Here {
                return false;
            }
        }
        match self.maybe_exact_count {
            Some(exact_count) => count_found == exact_count,
            None => count_found >= self.min_count,
        }
    }

    fn positions_in_state(&self, state: LocatedLetterState) -> impl Iterator<Item = usize> + '_ {
        self.located_state
            .iter()
            .enumerate()
            .filter(move |(_, other)| **other == state)
            .map(|(index, _)| index)
    }

    /// Sets that this letter must be at the given index.
    fn set_must_be_at(&mut self, index: usize) -> Result<(), Conflict> {
        match self.located_state[index] {
            LocatedLetterState::Here => return Ok(()),
            LocatedLetterState::NotHere => return Err(self.here_and_not_here(index)),
            LocatedLetterState::Unknown => {}
        }
        self.located_state[index] = LocatedLetterState::Here;
        self.num_here += 1;
        Ok(())
    }

    /// Sets that this letter must not be at the given index.
    fn set_must_not_be_at(&mut self, index: usize) -> Result<(), Conflict> {
        match self.located_state[index] {
            LocatedLetterState::NotHere => return Ok(()),
            LocatedLetterState::Here => return Err(self.here_and_not_here(index)),
            LocatedLetterState::Unknown => {}
        }
        self.located_state[index] = LocatedLetterState::NotHere;
        self.num_not_here += 1;
        Ok(())
    }

    /// Raises the minimum count to `count`, if it is higher.
    fn possibly_bump_min_count(&mut self, count: usize) -> Result<(), Conflict> {
        if self.min_count >= count {
            return Ok(());
        }
        if let Some(exact_count) = self.maybe_exact_count {
            return Err(Conflict::CountBelowMinimum {
                letter: self.letter,
                minimum: count,
                count: exact_count,
            });
        }
        self.min_count = count;
        Ok(())
    }

    /// Fixes the number of times this letter appears in the word.
    fn set_exact_count(&mut self, count: usize) -> Result<(), Conflict> {
        if let Some(known) = self.maybe_exact_count {
            if known != count {
                return Err(Conflict::CountChanged {
                    letter: self.letter,
                    known,
                    found: count,
                });
            }
            return Ok(());
        }
        if self.min_count > count {
            return Err(Conflict::CountBelowMinimum {
                letter: self.letter,
                minimum: self.min_count,
                count,
            });
        }
        self.min_count = count;
        self.maybe_exact_count = Some(count);
        Ok(())
    }

    /// Restores the count invariants after the locations have changed.
    fn check_counts(&mut self) -> Result<(), Conflict> {
        // Locations confirmed by separate guesses can add up to more than any single guess showed.
        self.possibly_bump_min_count(self.num_here)?;
        let available = self.located_state.len() - self.num_not_here;
        if self.min_count > available {
            return Err(Conflict::NoRoom {
                letter: self.letter,
                minimum: self.min_count,
                available,
            });
        }
        Ok(())
    }

    fn here_and_not_here(&self, index: usize) -> Conflict {
        Conflict::HereAndNotHere {
            letter: self.letter,
            position: index,
        }
    }
}

/// Accumulates everything learned about the objective word from the results of each guess.
///
/// Updates only ever tighten the restrictions: a word that fails them never passes again after
/// later updates.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct WordRestrictions {
    word_length: usize,
    letter_facts: HashMap<char, LetterFact>,
}

impl WordRestrictions {
    /// Creates a `WordRestrictions` object for the given word length with all letters unknown.
    pub fn new(word_length: usize) -> WordRestrictions {
        WordRestrictions {
            word_length,
            letter_facts: HashMap::new(),
        }
    }

    /// Returns the restrictions imposed by the given result.
    pub fn from_result(guess: &Word, verdict: &Verdict) -> Result<WordRestrictions, WordleError> {
        let mut restrictions = WordRestrictions::new(guess.len());
        restrictions.update(guess, verdict)?;
        Ok(restrictions)
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Returns what is known about the given letter, if it has appeared in any guess.
    pub fn letter_fact(&self, letter: char) -> Option<&LetterFact> {
        self.letter_facts.get(&letter)
    }

    /// Adds restrictions arising from the given guess result.
    ///
    /// If the result conflicts with what is already known, this returns
    /// [`WordleError::Contradiction`] and leaves the restrictions unchanged.
    pub fn update(&mut self, guess: &Word, verdict: &Verdict) -> Result<(), WordleError> {
        for length in [guess.len(), verdict.len()] {
            if length != self.word_length {
                return Err(WordleError::LengthMismatch {
                    expected: self.word_length,
                    actual: length,
                });
            }
        }

        let mut letter_facts = self.letter_facts.clone();
        for letter in guess.distinct_letters() {
            let fact = letter_facts
                .entry(letter)
                .or_insert_with(|| LetterFact::new(letter, self.word_length));
            WordRestrictions::apply_letter_results(fact, guess, verdict)?;
        }
        self.check_across_letters(&letter_facts)?;
        self.letter_facts = letter_facts;
        Ok(())
    }

    /// Returns `true` iff the given word satisfies these restrictions.
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        word.len() == self.word_length
            && self
                .letter_facts
                .values()
                .all(|fact| fact.is_satisfied_by(word))
    }

    fn apply_letter_results(
        fact: &mut LetterFact,
        guess: &Word,
        verdict: &Verdict,
    ) -> Result<(), Conflict> {
        let mut num_times_present = 0;
        let mut any_absent = false;
        for (index, (letter, result)) in zip(guess.letters(), verdict.results()).enumerate() {
            if *letter != fact.letter {
                continue;
            }
            match result {
                LetterResult::Correct => {
                    fact.set_must_be_at(index)?;
                    num_times_present += 1;
                }
                LetterResult::Present => {
                    fact.set_must_not_be_at(index)?;
                    num_times_present += 1;
                }
                LetterResult::Absent => {
                    // Had the letter been here, it would have been `Correct`.
                    fact.set_must_not_be_at(index)?;
                    any_absent = true;
                }
            }
        }
        fact.possibly_bump_min_count(num_times_present)?;
        if any_absent {
            // The objective word only has as many of this letter as were given a `Correct` or
            // `Present` result.
            fact.set_exact_count(num_times_present)?;
        }
        fact.check_counts()
    }

    fn check_across_letters(&self, letter_facts: &HashMap<char, LetterFact>) -> Result<(), Conflict> {
        let mut confirmed: Vec<Option<char>> = vec![None; self.word_length];
        let mut required = 0;
        for fact in letter_facts.values() {
            required += fact.min_count;
            for index in fact.confirmed_positions() {
                if let Some(other) = confirmed[index] {
                    return Err(Conflict::PositionTaken {
                        letter: fact.letter,
                        other,
                        position: index,
                    });
                }
                confirmed[index] = Some(fact.letter);
            }
        }
        if required > self.word_length {
            return Err(Conflict::TooManyLetters {
                required,
                word_length: self.word_length,
            });
        }
        Ok(())
    }
}
