//! The dictionary entry record (§3) and the transient lookup result that
//! carries a reference to one plus the number of characters it matched.

use serde::{Deserialize, Serialize};

use crate::conjugation::ConjugationType;
use crate::pos::Pos;

/// A single dictionary entry. Owned by whichever [`crate::dictionary::trie::PrefixTrie`]
/// holds it for the lifetime of that layer; never mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub surface: String,
    pub pos: Pos,
    pub cost: f64,
    pub lemma: String,
    pub reading: String,
    pub conj_type: ConjugationType,
    pub is_formal_noun: bool,
    pub is_low_info: bool,
    pub is_prefix: bool,
}

impl DictionaryEntry {
    /// Convenience constructor for entries with no special flags, used
    /// heavily by the core seed table where most entries are plain nouns.
    pub fn plain(surface: &str, pos: Pos, cost: f64, lemma: &str, reading: &str) -> Self {
        DictionaryEntry {
            surface: surface.to_string(),
            pos,
            cost,
            lemma: lemma.to_string(),
            reading: reading.to_string(),
            conj_type: ConjugationType::None,
            is_formal_noun: false,
            is_low_info: false,
            is_prefix: false,
        }
    }

    /// Convenience constructor for an inflecting entry (verb or adjective):
    /// carries a `conj_type` so [`crate::dictionary::conjugate`] can expand it
    /// into its conjugated surface forms at dictionary-build time (§4.3).
    pub fn inflecting(surface: &str, pos: Pos, cost: f64, lemma: &str, reading: &str, conj_type: ConjugationType) -> Self {
        DictionaryEntry {
            surface: surface.to_string(),
            pos,
            cost,
            lemma: lemma.to_string(),
            reading: reading.to_string(),
            conj_type,
            is_formal_noun: false,
            is_low_info: false,
            is_prefix: false,
        }
    }
}

/// A transient prefix-match hit: a reference to the matched entry plus how
/// many characters of the queried text it covers. Produced by
/// [`crate::dictionary::manager::Dictionary::prefix_match`]; consumed
/// immediately by the candidate generators, never stored.
#[derive(Debug, Clone, Copy)]
pub struct LookupResult<'a> {
    pub entry: &'a DictionaryEntry,
    pub match_len: usize,
    pub is_user_dict: bool,
}
