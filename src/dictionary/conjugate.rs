//! Forward conjugation: expands a single inflecting dictionary entry (a verb
//! or adjective lemma with a known reading and [`ConjugationType`]) into its
//! conjugated surface forms at dictionary-build time (§4.3), so a lookup for
//! `高かった` succeeds even though only `高い` is listed in the source data.
//!
//! This is the mirror image of [`crate::inflection::engine`]: instead of
//! peeling auxiliaries off an unknown surface, it walks the same
//! [`VERB_ENDINGS`] and [`AUXILIARIES`] tables forward, composing every stem
//! shape with every auxiliary that may attach to it.

use crate::conjugation::conn::ConnId;
use crate::conjugation::{conj_type_to_verb_type, ConjugationType, VerbType};
use crate::dictionary::entry::DictionaryEntry;
use crate::inflection::aux_table::AUXILIARIES;
use crate::inflection::engine::is_direct_match_form;
use crate::inflection::verb_ending::VERB_ENDINGS;

fn base_conn_for(verb_type: VerbType) -> ConnId {
    if verb_type == VerbType::IAdjective {
        crate::conjugation::conn::I_ADJ_STEM
    } else {
        crate::conjugation::conn::VERB_BASE
    }
}

/// Strips the longest suffix of `hint` that `text` actually ends with.
/// Plain regular verbs/adjectives have `text` end in the full `hint`
/// (e.g. `書く` ends in the full base_suffix `く`); 来る's kanji spelling only
/// ever ends in the last kana mora of its base_suffix (`来る` ends in `る`,
/// not `くる`), so a literal `strip_suffix` would fail it outright. Trying
/// shorter and shorter suffixes of `hint` handles both uniformly.
fn strip_common_suffix<'a>(text: &'a str, hint: &str) -> &'a str {
    let hint_chars: Vec<char> = hint.chars().collect();
    for take in (0..=hint_chars.len()).rev() {
        let candidate: String = hint_chars[hint_chars.len() - take..].iter().collect();
        if text.ends_with(&candidate) {
            return &text[..text.len() - candidate.len()];
        }
    }
    text
}

/// Expands `entry` into its conjugated forms. Returns an empty vector for
/// entries that don't inflect (`ConjugationType::None` or `NaAdjective`) and,
/// as a deliberate simplification, for 来る written with its kanji — 来る's
/// okurigana absorbs a different number of kana morae per form (来ない vs.
/// 来れば), which the regular stem+suffix composition below cannot express;
/// its common conjugated forms are seeded directly in
/// [`crate::dictionary::core_data`] instead (see `DESIGN.md`).
pub fn expand(entry: &DictionaryEntry) -> Vec<DictionaryEntry> {
    let verb_type = conj_type_to_verb_type(entry.conj_type);
    if verb_type == VerbType::Unknown {
        return Vec::new();
    }
    if verb_type == VerbType::Kuru && entry.surface.chars().any(|c| c != 'く' && c != 'る') {
        return Vec::new();
    }

    let base_conn = base_conn_for(verb_type);
    let base_ending = match VERB_ENDINGS
        .iter()
        .find(|e| e.verb_type == verb_type && e.provides_conn == base_conn)
    {
        Some(e) => e,
        None => return Vec::new(),
    };

    let stem_surface = strip_common_suffix(&entry.surface, base_ending.base_suffix);
    let stem_reading = strip_common_suffix(&entry.reading, base_ending.base_suffix);

    let mut out = Vec::new();
    for ending in VERB_ENDINGS.iter().filter(|e| e.verb_type == verb_type) {
        let conj_stem_surface = format!("{stem_surface}{}", ending.suffix);
        let conj_stem_reading = format!("{stem_reading}{}", ending.suffix);

        if is_direct_match_form(ending) && ending.provides_conn != base_conn {
            out.push(make_form(entry, &conj_stem_surface, &conj_stem_reading));
        }

        for aux in AUXILIARIES.iter().filter(|a| a.required_conn == ending.provides_conn) {
            let surface = format!("{conj_stem_surface}{}", aux.surface);
            let reading = format!("{conj_stem_reading}{}", aux.surface);
            out.push(make_form(entry, &surface, &reading));
        }
    }

    out.retain(|e| e.surface != entry.surface);
    out
}

fn make_form(entry: &DictionaryEntry, surface: &str, reading: &str) -> DictionaryEntry {
    DictionaryEntry {
        surface: surface.to_string(),
        pos: entry.pos,
        cost: entry.cost,
        lemma: entry.lemma.clone(),
        reading: reading.to_string(),
        conj_type: entry.conj_type,
        is_formal_noun: entry.is_formal_noun,
        is_low_info: entry.is_low_info,
        is_prefix: entry.is_prefix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos::Pos;

    #[test]
    fn expands_i_adjective_to_past_and_negative() {
        let entry = DictionaryEntry::inflecting("高い", Pos::Adjective, 1.0, "高い", "たかい", ConjugationType::IAdjective);
        let forms = expand(&entry);
        assert!(forms.iter().any(|e| e.surface == "高かった"));
        assert!(forms.iter().any(|e| e.surface == "高くない"));
        assert!(forms.iter().any(|e| e.surface == "高くて"));
    }

    #[test]
    fn expands_godan_ka_to_te_and_ta_forms() {
        let entry = DictionaryEntry::inflecting("書く", Pos::Verb, 1.0, "書く", "かく", ConjugationType::GodanKa);
        let forms = expand(&entry);
        assert!(forms.iter().any(|e| e.surface == "書いて"));
        assert!(forms.iter().any(|e| e.surface == "書いた"));
        assert!(forms.iter().any(|e| e.surface == "書かない"));
    }

    #[test]
    fn expands_ichidan_to_rareru_form() {
        let entry = DictionaryEntry::inflecting("食べる", Pos::Verb, 1.0, "食べる", "たべる", ConjugationType::Ichidan);
        let forms = expand(&entry);
        assert!(forms.iter().any(|e| e.surface == "食べられる"));
        assert!(forms.iter().any(|e| e.surface == "食べます"));
    }

    #[test]
    fn na_adjective_does_not_expand() {
        let entry = DictionaryEntry::inflecting("静か", Pos::Adjective, 1.0, "静か", "しずか", ConjugationType::NaAdjective);
        assert!(expand(&entry).is_empty());
    }

    #[test]
    fn kanji_kuru_is_not_regularly_expanded() {
        let entry = DictionaryEntry::inflecting("来る", Pos::Verb, 1.0, "来る", "くる", ConjugationType::Kuru);
        assert!(expand(&entry).is_empty());
    }
}
