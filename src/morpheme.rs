//! Output record emitted by the analyzer façade.

use serde::{Deserialize, Serialize};

use crate::conjugation::ConjugationType;
use crate::pos::Pos;

/// A single morpheme in the analyzer's output: surface text plus the
/// lexical and inflectional metadata the winning lattice edge carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Morpheme {
    pub surface: String,
    pub pos: Pos,
    pub lemma: String,
    pub reading: String,
    pub start: usize,
    pub end: usize,
    pub conj_type: ConjugationType,
    pub is_dictionary: bool,
    pub is_user_dict: bool,
    pub is_formal_noun: bool,
    pub is_low_info: bool,
    pub is_unknown: bool,
    pub score: f64,
}

impl Morpheme {
    /// Number of characters spanned, i.e. `end - start`.
    pub fn len_chars(&self) -> usize {
        self.end - self.start
    }
}
