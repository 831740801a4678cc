//! Helps solve Wordle-style word games.
//!
//! Given a [`WordBank`] of same-length words and the results of each guess so far, this narrows
//! the bank down to the words that are still possible, and ranks them by how many common letters
//! they cover.
//!
//! ```
//! use rs_words_solver::*;
//!
//! let bank = WordBank::from_iterator(
//!     ["crane", "slate", "trace", "caret"],
//!     &Normalizer::new(),
//!     None,
//! )
//! .unwrap();
//! let mut session = Session::new(&bank);
//!
//! // The objective word is "trace".
//! let verdict = get_result_for_guess(&Word::from("trace"), &Word::from("crane")).unwrap();
//! session.submit(&Word::from("crane"), &verdict).unwrap();
//!
//! assert_eq!(session.candidates(), vec![Word::from("trace")]);
//! ```

mod data;
mod engine;
mod restrictions;
mod results;

pub use data::Normalizer;
pub use data::Word;
pub use data::WordBank;
pub use engine::*;
pub use restrictions::WordRestrictions;
pub use results::*;

/// Lower-level building blocks used by the [`Session`].
pub mod details {
    pub use crate::data::WordCounter;
    pub use crate::restrictions::LetterFact;
}
