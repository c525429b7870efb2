//! CSV/TSV user dictionary loading (§2.4): one entry per row,
//! `surface,pos,cost,lemma,reading,conj_type,is_formal_noun,is_low_info,is_prefix`.
//!
//! Grounded on the teacher's builder convention of parsing a dictionary
//! source with the `csv` crate and warning-and-skipping malformed rows
//! rather than aborting the whole load
//! (`lindera-dictionary/src/dictionary_builder/user_dictionary.rs`).

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use crate::conjugation::ConjugationType;
use crate::dictionary::entry::DictionaryEntry;
use crate::error::{SuzumeErrorKind, SuzumeResult};
use crate::pos::Pos;

impl FromStr for Pos {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Noun" => Pos::Noun,
            "Verb" => Pos::Verb,
            "Adjective" => Pos::Adjective,
            "Adverb" => Pos::Adverb,
            "Particle" => Pos::Particle,
            "Auxiliary" => Pos::Auxiliary,
            "Conjunction" => Pos::Conjunction,
            "Determiner" => Pos::Determiner,
            "Pronoun" => Pos::Pronoun,
            "Prefix" => Pos::Prefix,
            "Suffix" => Pos::Suffix,
            "Symbol" => Pos::Symbol,
            "Other" => Pos::Other,
            "Unknown" => Pos::Unknown,
            _ => return Err(()),
        })
    }
}

impl FromStr for ConjugationType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "None" => ConjugationType::None,
            "Ichidan" => ConjugationType::Ichidan,
            "GodanKa" => ConjugationType::GodanKa,
            "GodanGa" => ConjugationType::GodanGa,
            "GodanSa" => ConjugationType::GodanSa,
            "GodanTa" => ConjugationType::GodanTa,
            "GodanNa" => ConjugationType::GodanNa,
            "GodanBa" => ConjugationType::GodanBa,
            "GodanMa" => ConjugationType::GodanMa,
            "GodanRa" => ConjugationType::GodanRa,
            "GodanWa" => ConjugationType::GodanWa,
            "Suru" => ConjugationType::Suru,
            "Kuru" => ConjugationType::Kuru,
            "IAdjective" => ConjugationType::IAdjective,
            "NaAdjective" => ConjugationType::NaAdjective,
            _ => return Err(()),
        })
    }
}

fn row_to_entry(record: &csv::StringRecord) -> Option<DictionaryEntry> {
    if record.len() != 9 {
        return None;
    }
    let surface = record.get(0)?.to_string();
    let pos: Pos = record.get(1)?.parse().ok()?;
    let cost: f64 = record.get(2)?.parse().ok()?;
    let lemma = record.get(3)?.to_string();
    let reading = record.get(4)?.to_string();
    let conj_type: ConjugationType = record.get(5)?.parse().ok()?;
    let is_formal_noun: bool = record.get(6)?.parse().ok()?;
    let is_low_info: bool = record.get(7)?.parse().ok()?;
    let is_prefix: bool = record.get(8)?.parse().ok()?;
    if surface.is_empty() {
        return None;
    }
    Some(DictionaryEntry {
        surface,
        pos,
        cost,
        lemma,
        reading,
        conj_type,
        is_formal_noun,
        is_low_info,
        is_prefix,
    })
}

/// Parses a CSV/TSV user dictionary from `path`, inserting every well-formed
/// row into `map`. Malformed rows are logged and skipped, not fatal.
pub fn load_into(path: &Path, map: &mut BTreeMap<String, Vec<DictionaryEntry>>) -> SuzumeResult<usize> {
    let bytes = std::fs::read(path).map_err(|e| SuzumeErrorKind::Io.with_error(e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes.as_slice());

    let mut loaded = 0usize;
    for (line, result) in reader.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("user dictionary {}: line {} unreadable: {}", path.display(), line + 1, e);
                continue;
            }
        };
        match row_to_entry(&record) {
            Some(entry) => {
                map.entry(entry.surface.clone()).or_default().push(entry);
                loaded += 1;
            }
            None => {
                log::warn!("user dictionary {}: line {} malformed, skipping", path.display(), line + 1);
            }
        }
    }
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_well_formed_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "猫,Noun,2.0,猫,ねこ,None,false,false,false").unwrap();
        writeln!(file, "駆ける,Verb,3.0,駆ける,かける,Ichidan,false,false,false").unwrap();
        let mut map = BTreeMap::new();
        let loaded = load_into(file.path(), &mut map).unwrap();
        assert_eq!(loaded, 2);
        assert!(map.contains_key("猫"));
        assert!(map.contains_key("駆ける"));
    }

    #[test]
    fn skips_malformed_rows_without_aborting() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "猫,Noun,2.0,猫,ねこ,None,false,false,false").unwrap();
        writeln!(file, "bogus,row,too,few").unwrap();
        writeln!(file, "犬,Noun,2.0,犬,いぬ,None,false,false,false").unwrap();
        let mut map = BTreeMap::new();
        let loaded = load_into(file.path(), &mut map).unwrap();
        assert_eq!(loaded, 2);
        assert!(map.contains_key("猫"));
        assert!(map.contains_key("犬"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let mut map = BTreeMap::new();
        let err = load_into(Path::new("/nonexistent/path.csv"), &mut map).unwrap_err();
        assert_eq!(err.kind(), SuzumeErrorKind::Io);
    }
}
