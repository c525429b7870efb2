//! A Japanese morphological analyzer: segmentation, part-of-speech
//! tagging and inflection analysis over a layered dictionary.
//!
//! The public surface is [`Analyzer`]: construct one, optionally load a
//! binary core dictionary and/or user dictionaries, then call
//! [`Analyzer::analyze`]. Everything else in this crate (the lattice,
//! the candidate generators, the inflection engine, the scorer) is
//! implementation detail reachable for tooling and tests but not meant
//! to be assembled by hand outside this crate.

pub mod analyzer;
pub mod candidates;
pub mod char_class;
pub mod conjugation;
pub mod debug;
pub mod dictionary;
pub mod error;
pub mod inflection;
pub mod lattice;
pub mod morpheme;
pub mod normalizer;
pub mod pos;
pub mod pretokenizer;
pub mod scorer;
pub mod tokenizer;
pub mod utf8;
pub mod viterbi;

pub use analyzer::Analyzer;
pub use error::{SuzumeError, SuzumeErrorKind, SuzumeResult};
pub use morpheme::Morpheme;
