//! The dictionary manager (§4.3): four lookup layers — hardcoded core,
//! optional binary core, optional binary user, zero-or-more CSV user
//! dictionaries — queried together on every prefix match with no
//! deduplication across layers, so the same surface may legitimately
//! produce lattice edges from more than one layer.
//!
//! Grounded on the teacher's layered `UserDictionary` over a base
//! `PrefixDictionary` (`lindera-core/src/user_dictionary.rs`,
//! `lindera/src/dictionary/mod.rs`), generalized here to more than one
//! user layer since `spec.md §4.3` allows "zero or more" CSV dictionaries.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::dictionary::entry::{DictionaryEntry, LookupResult};
use crate::dictionary::trie::PrefixTrie;
use crate::dictionary::{binary, core_data, csv_loader};
use crate::error::SuzumeResult;

/// Environment variable consulted by [`Dictionary::try_auto_load_core_dictionary`].
pub const DATA_DIR_ENV: &str = "SUZUME_DATA_DIR";

const CORE_DICTIONARY_FILENAME: &str = "core.dic";

fn auto_load_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        paths.push(Path::new(&dir).join(CORE_DICTIONARY_FILENAME));
    }
    paths.push(Path::new("./data").join(CORE_DICTIONARY_FILENAME));
    if let Some(home) = std::env::var_os("HOME") {
        paths.push(Path::new(&home).join(".suzume").join(CORE_DICTIONARY_FILENAME));
    }
    paths.push(Path::new("/usr/local/share/suzume").join(CORE_DICTIONARY_FILENAME));
    paths.push(Path::new("/usr/share/suzume").join(CORE_DICTIONARY_FILENAME));
    paths
}

/// The full layered dictionary used by the tokenizer to resolve every
/// candidate surface at every lattice position.
pub struct Dictionary {
    builtin_core: PrefixTrie,
    binary_core: Option<PrefixTrie>,
    binary_user: Option<PrefixTrie>,
    csv_users: Vec<PrefixTrie>,
}

impl Default for Dictionary {
    fn default() -> Self {
        Dictionary {
            builtin_core: core_data::build_core_trie(),
            binary_core: None,
            binary_user: None,
            csv_users: Vec::new(),
        }
    }
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Probes the auto-load search path, in order, for a binary core
    /// dictionary and loads the first one found. A no-op (not an error) if
    /// none exist; returns the loaded path for diagnostics.
    pub fn try_auto_load_core_dictionary(&mut self) -> SuzumeResult<Option<PathBuf>> {
        for candidate in auto_load_search_paths() {
            if candidate.is_file() {
                let trie = binary::load(&candidate)?;
                log::info!("loaded core dictionary from {}", candidate.display());
                self.binary_core = Some(trie);
                return Ok(Some(candidate));
            }
        }
        Ok(None)
    }

    /// Loads `path` as a binary core dictionary unconditionally, bypassing
    /// the auto-load search path.
    pub fn load_binary_core_dictionary(&mut self, path: &Path) -> SuzumeResult<()> {
        self.binary_core = Some(binary::load(path)?);
        Ok(())
    }

    pub fn load_binary_user_dictionary(&mut self, path: &Path) -> SuzumeResult<()> {
        self.binary_user = Some(binary::load(path)?);
        Ok(())
    }

    /// Adds a CSV/TSV user dictionary as an additional layer. Each call
    /// appends a new layer; `spec.md §4.3` permits any number of these.
    pub fn add_user_dictionary(&mut self, path: &Path) -> SuzumeResult<usize> {
        let mut map: BTreeMap<String, Vec<DictionaryEntry>> = BTreeMap::new();
        let loaded = csv_loader::load_into(path, &mut map)?;
        let trie = PrefixTrie::build(map)?;
        self.csv_users.push(trie);
        Ok(loaded)
    }

    /// Every layer's prefix match against `text`, concatenated in layer
    /// order (builtin core, binary core, binary user, CSV users) without
    /// deduplication across layers.
    pub fn prefix_match<'a>(&'a self, text: &'a str) -> Vec<LookupResult<'a>> {
        let mut results = Vec::new();
        push_layer(&self.builtin_core, text, false, &mut results);
        if let Some(trie) = &self.binary_core {
            push_layer(trie, text, false, &mut results);
        }
        if let Some(trie) = &self.binary_user {
            push_layer(trie, text, true, &mut results);
        }
        for trie in &self.csv_users {
            push_layer(trie, text, true, &mut results);
        }
        results
    }

    /// Exact lookup across every layer, in the same order as [`Self::prefix_match`].
    pub fn lookup<'a>(&'a self, key: &'a str) -> Vec<LookupResult<'a>> {
        let mut results = Vec::new();
        push_exact(&self.builtin_core, key, false, &mut results);
        if let Some(trie) = &self.binary_core {
            push_exact(trie, key, false, &mut results);
        }
        if let Some(trie) = &self.binary_user {
            push_exact(trie, key, true, &mut results);
        }
        for trie in &self.csv_users {
            push_exact(trie, key, true, &mut results);
        }
        results
    }
}

fn push_layer<'a>(trie: &'a PrefixTrie, text: &'a str, is_user_dict: bool, out: &mut Vec<LookupResult<'a>>) {
    for (match_len, entries) in trie.prefix_match(text) {
        for entry in entries {
            out.push(LookupResult {
                entry,
                match_len,
                is_user_dict,
            });
        }
    }
}

fn push_exact<'a>(trie: &'a PrefixTrie, key: &'a str, is_user_dict: bool, out: &mut Vec<LookupResult<'a>>) {
    let char_len = key.chars().count();
    for entry in trie.lookup(key) {
        out.push(LookupResult {
            entry,
            match_len: char_len,
            is_user_dict,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_core_resolves_without_any_loaded_files() {
        let dict = Dictionary::new();
        let hits = dict.prefix_match("書いた");
        assert!(hits.iter().any(|h| h.entry.lemma == "書く"));
    }

    #[test]
    fn csv_user_dictionary_adds_a_layer() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "すずめ,Noun,1.0,すずめ,すずめ,None,false,false,false").unwrap();

        let mut dict = Dictionary::new();
        let loaded = dict.add_user_dictionary(file.path()).unwrap();
        assert_eq!(loaded, 1);

        let hits = dict.lookup("すずめ");
        assert!(hits.iter().any(|h| h.is_user_dict));
    }

    #[test]
    fn auto_load_with_no_candidate_files_is_a_harmless_no_op() {
        std::env::remove_var(DATA_DIR_ENV);
        let mut dict = Dictionary::new();
        let result = dict.try_auto_load_core_dictionary().unwrap();
        assert!(result.is_none() || result.is_some());
    }
}
