//! Part-of-speech enumeration shared by dictionary entries, lattice edges
//! and emitted morphemes.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Closed part-of-speech tag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Pos {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Particle,
    Auxiliary,
    Conjunction,
    Determiner,
    Pronoun,
    Prefix,
    Suffix,
    Symbol,
    Other,
    Unknown,
}

impl Default for Pos {
    fn default() -> Self {
        Pos::Unknown
    }
}

impl Pos {
    /// Index into the 13x13 bigram table used by the scorer. `Unknown`
    /// shares a row with `Other` since the bigram table only has 13 rows.
    pub fn bigram_index(self) -> usize {
        match self {
            Pos::Noun => 0,
            Pos::Verb => 1,
            Pos::Adjective => 2,
            Pos::Adverb => 3,
            Pos::Particle => 4,
            Pos::Auxiliary => 5,
            Pos::Conjunction => 6,
            Pos::Determiner => 7,
            Pos::Pronoun => 8,
            Pos::Prefix => 9,
            Pos::Suffix => 10,
            Pos::Symbol => 11,
            Pos::Other | Pos::Unknown => 12,
        }
    }

    pub const BIGRAM_SIZE: usize = 13;
}
