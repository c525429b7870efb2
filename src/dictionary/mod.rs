//! The dictionary layer (§4.3): prefix-trie lookup across a fixed stack of
//! sources, plus the conjugation expansion that populates inflecting
//! entries with their generated surface forms at build time.

pub mod binary;
pub mod conjugate;
pub mod core_data;
pub mod csv_loader;
pub mod entry;
pub mod manager;
pub mod trie;

pub use entry::{DictionaryEntry, LookupResult};
pub use manager::Dictionary;
pub use trie::PrefixTrie;
