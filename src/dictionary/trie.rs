//! A single dictionary layer's prefix index: a double-array trie over
//! codepoint keys (§4.3), built once from a sorted map of surface → entries
//! and never mutated afterward.
//!
//! Grounded on `lindera-core`'s `PrefixDictionary`
//! (`lindera-core/src/dictionary/prefix_dictionary.rs`): a `yada::DoubleArray`
//! maps each surface to a packed `(offset << 5) | len` value indexing a flat
//! entries vector, exactly as the teacher's `WordEntry` offset/length scheme
//! works, minus the teacher's separate compressed `words_data` blob (our
//! entries are already in memory as plain Rust values, not a serialized
//! detail string to decode lazily).

use std::collections::BTreeMap;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use yada::builder::DoubleArrayBuilder;
use yada::DoubleArray;

use crate::dictionary::entry::DictionaryEntry;
use crate::error::{SuzumeErrorKind, SuzumeResult};

/// Max number of entries a single surface may carry in one layer: the
/// packed value reserves 5 bits for the count, mirroring the teacher's
/// "5bit for different parts of speech on the same surface" comment in
/// `lindera-core/src/dictionary_builder/dict.rs`.
const MAX_ENTRIES_PER_KEY: usize = (1 << 5) - 1;

#[derive(Serialize, Deserialize)]
#[serde(remote = "DoubleArray")]
struct DoubleArrayDef<T>(pub T)
where
    T: Deref<Target = [u8]>;

/// A built, read-only prefix trie over one set of dictionary entries.
#[derive(Serialize, Deserialize)]
pub struct PrefixTrie {
    #[serde(with = "DoubleArrayDef")]
    da: DoubleArray<Vec<u8>>,
    entries: Vec<DictionaryEntry>,
}

impl PrefixTrie {
    /// An empty trie: never matches anything. Used as the zero-entry case
    /// for optional layers before they're populated.
    pub fn empty() -> Self {
        PrefixTrie {
            da: DoubleArray::new(Vec::new()),
            entries: Vec::new(),
        }
    }

    /// Builds a trie from a surface → entries map. Keys are iterated in
    /// sorted (`BTreeMap`) order, which `DoubleArrayBuilder::build` requires.
    pub fn build(word_map: BTreeMap<String, Vec<DictionaryEntry>>) -> SuzumeResult<Self> {
        let mut entries = Vec::new();
        let mut keyset: Vec<(Vec<u8>, u32)> = Vec::new();
        for (key, group) in word_map {
            if group.is_empty() {
                continue;
            }
            if group.len() > MAX_ENTRIES_PER_KEY {
                return Err(SuzumeErrorKind::Deserialize.with_error(anyhow::anyhow!(
                    "surface {:?} has {} entries, exceeding the {} limit",
                    key,
                    group.len(),
                    MAX_ENTRIES_PER_KEY
                )));
            }
            let offset = entries.len() as u32;
            let len = group.len() as u32;
            let val = (offset << 5) | len;
            keyset.push((key.into_bytes(), val));
            entries.extend(group);
        }
        let keyset_refs: Vec<(&[u8], u32)> = keyset.iter().map(|(k, v)| (k.as_slice(), *v)).collect();
        let da_bytes = DoubleArrayBuilder::build(&keyset_refs).ok_or_else(|| {
            SuzumeErrorKind::Deserialize.with_error(anyhow::anyhow!("double array build failed"))
        })?;
        Ok(PrefixTrie {
            da: DoubleArray::new(da_bytes),
            entries,
        })
    }

    fn slice_for(&self, packed: u32) -> &[DictionaryEntry] {
        let len = (packed & (MAX_ENTRIES_PER_KEY as u32)) as usize;
        let offset = (packed >> 5) as usize;
        &self.entries[offset..offset + len]
    }

    /// Exact-match lookup: every entry keyed by `key` verbatim.
    pub fn lookup(&self, key: &str) -> &[DictionaryEntry] {
        match self.da.exact_match_search(key) {
            Some(packed) => self.slice_for(packed),
            None => &[],
        }
    }

    /// Every prefix of `text` (starting at byte 0 of `text`, i.e. the caller
    /// already sliced to the position of interest) that is a key in this
    /// trie, paired with the character length of that prefix and its
    /// entries.
    pub fn prefix_match<'a>(&'a self, text: &'a str) -> Vec<(usize, &'a [DictionaryEntry])> {
        self.da
            .common_prefix_search(text)
            .map(|(packed, byte_len)| {
                let char_len = text[..byte_len].chars().count();
                (char_len, self.slice_for(packed))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos::Pos;

    fn sample_map() -> BTreeMap<String, Vec<DictionaryEntry>> {
        let mut map = BTreeMap::new();
        map.insert(
            "水".to_string(),
            vec![DictionaryEntry::plain("水", Pos::Noun, 2.0, "水", "みず")],
        );
        map.insert(
            "書く".to_string(),
            vec![DictionaryEntry::plain("書く", Pos::Verb, 3.0, "書く", "かく")],
        );
        map
    }

    #[test]
    fn exact_match_finds_entry() {
        let trie = PrefixTrie::build(sample_map()).unwrap();
        let hits = trie.lookup("水");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].lemma, "水");
    }

    #[test]
    fn exact_match_misses_unknown_key() {
        let trie = PrefixTrie::build(sample_map()).unwrap();
        assert!(trie.lookup("火").is_empty());
    }

    #[test]
    fn prefix_match_finds_every_prefix_key() {
        let trie = PrefixTrie::build(sample_map()).unwrap();
        let hits = trie.prefix_match("書くとき");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, 2);
    }

    #[test]
    fn empty_trie_matches_nothing() {
        let trie = PrefixTrie::empty();
        assert!(trie.lookup("水").is_empty());
        assert!(trie.prefix_match("水").is_empty());
    }
}
