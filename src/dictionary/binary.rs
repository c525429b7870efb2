//! Binary dictionary blob load/save (§2.4): a `bincode`-serialized
//! `PrefixTrie`, used for both the optional binary core dictionary and the
//! optional binary user dictionary layers.
//!
//! Grounded on the teacher's `lindera-core/src/dictionary/prefix_dictionary.rs`
//! double-array-plus-entries persistence, adapted to `bincode` + `serde`
//! instead of the teacher's raw byte-slice mmap approach, since this crate
//! loads whole dictionaries into memory rather than memory-mapping them.
//! When built with the `compress` feature, the blob is gzip-compressed on
//! disk the same way the teacher's dictionary builders support a
//! compressed distribution artifact (`lindera-core`'s `compress` feature
//! gating `flate2`).

use std::path::Path;

use crate::dictionary::trie::PrefixTrie;
use crate::error::{SuzumeErrorKind, SuzumeResult};

/// Serializes `trie` to `path` as a bincode blob, gzip-compressed when the
/// `compress` feature is enabled.
pub fn save(trie: &PrefixTrie, path: &Path) -> SuzumeResult<()> {
    let bytes = bincode::serialize(trie).map_err(|e| SuzumeErrorKind::Deserialize.with_error(e))?;
    let bytes = compress(&bytes)?;
    std::fs::write(path, bytes).map_err(|e| SuzumeErrorKind::Io.with_error(e))
}

/// Loads a [`PrefixTrie`] previously written by [`save`].
pub fn load(path: &Path) -> SuzumeResult<PrefixTrie> {
    let bytes = std::fs::read(path).map_err(|e| SuzumeErrorKind::Io.with_error(e))?;
    let bytes = decompress(&bytes)?;
    bincode::deserialize(&bytes).map_err(|e| SuzumeErrorKind::Deserialize.with_error(e))
}

#[cfg(feature = "compress")]
fn compress(bytes: &[u8]) -> SuzumeResult<Vec<u8>> {
    use std::io::Write;
    let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(bytes).map_err(|e| SuzumeErrorKind::Io.with_error(e))?;
    encoder.finish().map_err(|e| SuzumeErrorKind::Io.with_error(e))
}

#[cfg(not(feature = "compress"))]
fn compress(bytes: &[u8]) -> SuzumeResult<Vec<u8>> {
    Ok(bytes.to_vec())
}

#[cfg(feature = "compress")]
fn decompress(bytes: &[u8]) -> SuzumeResult<Vec<u8>> {
    use std::io::Read;
    let mut decoder = flate2::read::GzDecoder::new(bytes);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out).map_err(|e| SuzumeErrorKind::Io.with_error(e))?;
    Ok(out)
}

#[cfg(not(feature = "compress"))]
fn decompress(bytes: &[u8]) -> SuzumeResult<Vec<u8>> {
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::entry::DictionaryEntry;
    use crate::pos::Pos;
    use std::collections::BTreeMap;

    #[test]
    fn round_trips_through_a_file() {
        let mut map = BTreeMap::new();
        map.insert(
            "水".to_string(),
            vec![DictionaryEntry::plain("水", Pos::Noun, 2.0, "水", "みず")],
        );
        let trie = PrefixTrie::build(map).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("core.dic");
        save(&trie, &path).unwrap();

        let loaded = load(&path).unwrap();
        let hits = loaded.lookup("水");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].lemma, "水");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load(Path::new("/nonexistent/core.dic")).unwrap_err();
        assert_eq!(err.kind(), SuzumeErrorKind::Io);
    }
}
