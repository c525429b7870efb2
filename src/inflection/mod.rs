//! Reverse analysis of conjugated surface forms (§4.4): the hardest
//! subsystem. Peels auxiliary suffixes from the tail of a surface,
//! recursing until a verb ending grounds the remainder in a known stem
//! shape, and scores every resulting candidate by plausibility.

pub mod aux_table;
pub mod confidence;
pub mod engine;
pub mod verb_ending;

pub use engine::{InflectionCandidate, InflectionEngine, MIN_CONFIDENCE};
