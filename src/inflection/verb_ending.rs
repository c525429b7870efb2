//! The verb ending table: the reverse index from a stem-final suffix back
//! to the verb type and connection it provides.
//!
//! Transcribed from the grammar's verb ending patterns (nine Godan rows,
//! Ichidan, Suru, Kuru, and the i-adjective stem boundary). Every row here
//! has a forward-conjugation counterpart: `suffix` is what the stem ends
//! in, `base_suffix` is what the dictionary form ends in instead.

use crate::conjugation::conn::{self, ConnId};
use crate::conjugation::VerbType;

/// A single reverse-lookup pattern: matching `suffix` at the tail of a
/// candidate stem means the stem provides `provides_conn` and its
/// dictionary form is obtained by replacing `suffix` with `base_suffix`.
#[derive(Debug, Clone, Copy)]
pub struct VerbEnding {
    pub suffix: &'static str,
    pub base_suffix: &'static str,
    pub verb_type: VerbType,
    pub provides_conn: ConnId,
    pub is_onbin: bool,
}

/// All verb ending patterns, in source order (longest/most specific
/// patterns are not pre-sorted here; the engine tries every entry and
/// lets stem length plus validity filters disambiguate).
pub static VERB_ENDINGS: &[VerbEnding] = &[
    // Godan Ka (書く)
    VerbEnding { suffix: "い", base_suffix: "く", verb_type: VerbType::GodanKa, provides_conn: conn::VERB_ONBINKEI, is_onbin: true },
    VerbEnding { suffix: "っ", base_suffix: "く", verb_type: VerbType::GodanKa, provides_conn: conn::VERB_ONBINKEI, is_onbin: true },
    VerbEnding { suffix: "き", base_suffix: "く", verb_type: VerbType::GodanKa, provides_conn: conn::VERB_RENYOKEI, is_onbin: false },
    VerbEnding { suffix: "か", base_suffix: "く", verb_type: VerbType::GodanKa, provides_conn: conn::VERB_MIZENKEI, is_onbin: false },
    VerbEnding { suffix: "く", base_suffix: "く", verb_type: VerbType::GodanKa, provides_conn: conn::VERB_BASE, is_onbin: false },
    VerbEnding { suffix: "け", base_suffix: "く", verb_type: VerbType::GodanKa, provides_conn: conn::VERB_POTENTIAL, is_onbin: false },
    VerbEnding { suffix: "け", base_suffix: "く", verb_type: VerbType::GodanKa, provides_conn: conn::VERB_KATEI, is_onbin: false },
    VerbEnding { suffix: "け", base_suffix: "く", verb_type: VerbType::GodanKa, provides_conn: conn::VERB_MEIREIKEI, is_onbin: false },
    VerbEnding { suffix: "こ", base_suffix: "く", verb_type: VerbType::GodanKa, provides_conn: conn::VERB_VOLITIONAL, is_onbin: false },
    // Godan Ga (泳ぐ)
    VerbEnding { suffix: "い", base_suffix: "ぐ", verb_type: VerbType::GodanGa, provides_conn: conn::VERB_ONBINKEI, is_onbin: true },
    VerbEnding { suffix: "ぎ", base_suffix: "ぐ", verb_type: VerbType::GodanGa, provides_conn: conn::VERB_RENYOKEI, is_onbin: false },
    VerbEnding { suffix: "が", base_suffix: "ぐ", verb_type: VerbType::GodanGa, provides_conn: conn::VERB_MIZENKEI, is_onbin: false },
    VerbEnding { suffix: "げ", base_suffix: "ぐ", verb_type: VerbType::GodanGa, provides_conn: conn::VERB_POTENTIAL, is_onbin: false },
    VerbEnding { suffix: "げ", base_suffix: "ぐ", verb_type: VerbType::GodanGa, provides_conn: conn::VERB_KATEI, is_onbin: false },
    VerbEnding { suffix: "げ", base_suffix: "ぐ", verb_type: VerbType::GodanGa, provides_conn: conn::VERB_MEIREIKEI, is_onbin: false },
    VerbEnding { suffix: "ご", base_suffix: "ぐ", verb_type: VerbType::GodanGa, provides_conn: conn::VERB_VOLITIONAL, is_onbin: false },
    VerbEnding { suffix: "ぐ", base_suffix: "ぐ", verb_type: VerbType::GodanGa, provides_conn: conn::VERB_BASE, is_onbin: false },
    // Godan Sa (話す) — no onbin
    VerbEnding { suffix: "し", base_suffix: "す", verb_type: VerbType::GodanSa, provides_conn: conn::VERB_RENYOKEI, is_onbin: false },
    VerbEnding { suffix: "し", base_suffix: "す", verb_type: VerbType::GodanSa, provides_conn: conn::VERB_ONBINKEI, is_onbin: true },
    VerbEnding { suffix: "さ", base_suffix: "す", verb_type: VerbType::GodanSa, provides_conn: conn::VERB_MIZENKEI, is_onbin: false },
    VerbEnding { suffix: "せ", base_suffix: "す", verb_type: VerbType::GodanSa, provides_conn: conn::VERB_POTENTIAL, is_onbin: false },
    VerbEnding { suffix: "せ", base_suffix: "す", verb_type: VerbType::GodanSa, provides_conn: conn::VERB_KATEI, is_onbin: false },
    VerbEnding { suffix: "せ", base_suffix: "す", verb_type: VerbType::GodanSa, provides_conn: conn::VERB_MEIREIKEI, is_onbin: false },
    VerbEnding { suffix: "そ", base_suffix: "す", verb_type: VerbType::GodanSa, provides_conn: conn::VERB_VOLITIONAL, is_onbin: false },
    VerbEnding { suffix: "す", base_suffix: "す", verb_type: VerbType::GodanSa, provides_conn: conn::VERB_BASE, is_onbin: false },
    // Godan Ra (取る) — っ-onbin is the common case, tried first by the engine
    VerbEnding { suffix: "っ", base_suffix: "る", verb_type: VerbType::GodanRa, provides_conn: conn::VERB_ONBINKEI, is_onbin: true },
    VerbEnding { suffix: "り", base_suffix: "る", verb_type: VerbType::GodanRa, provides_conn: conn::VERB_RENYOKEI, is_onbin: false },
    VerbEnding { suffix: "ら", base_suffix: "る", verb_type: VerbType::GodanRa, provides_conn: conn::VERB_MIZENKEI, is_onbin: false },
    VerbEnding { suffix: "れ", base_suffix: "る", verb_type: VerbType::GodanRa, provides_conn: conn::VERB_KATEI, is_onbin: false },
    VerbEnding { suffix: "れ", base_suffix: "る", verb_type: VerbType::GodanRa, provides_conn: conn::VERB_MEIREIKEI, is_onbin: false },
    VerbEnding { suffix: "ろ", base_suffix: "る", verb_type: VerbType::GodanRa, provides_conn: conn::VERB_VOLITIONAL, is_onbin: false },
    // Godan Ta (持つ)
    VerbEnding { suffix: "っ", base_suffix: "つ", verb_type: VerbType::GodanTa, provides_conn: conn::VERB_ONBINKEI, is_onbin: true },
    VerbEnding { suffix: "ち", base_suffix: "つ", verb_type: VerbType::GodanTa, provides_conn: conn::VERB_RENYOKEI, is_onbin: false },
    VerbEnding { suffix: "た", base_suffix: "つ", verb_type: VerbType::GodanTa, provides_conn: conn::VERB_MIZENKEI, is_onbin: false },
    VerbEnding { suffix: "て", base_suffix: "つ", verb_type: VerbType::GodanTa, provides_conn: conn::VERB_POTENTIAL, is_onbin: false },
    VerbEnding { suffix: "て", base_suffix: "つ", verb_type: VerbType::GodanTa, provides_conn: conn::VERB_KATEI, is_onbin: false },
    VerbEnding { suffix: "て", base_suffix: "つ", verb_type: VerbType::GodanTa, provides_conn: conn::VERB_MEIREIKEI, is_onbin: false },
    VerbEnding { suffix: "と", base_suffix: "つ", verb_type: VerbType::GodanTa, provides_conn: conn::VERB_VOLITIONAL, is_onbin: false },
    VerbEnding { suffix: "つ", base_suffix: "つ", verb_type: VerbType::GodanTa, provides_conn: conn::VERB_BASE, is_onbin: false },
    // Godan Ma (読む) — ん-onbin is the common case
    VerbEnding { suffix: "ん", base_suffix: "む", verb_type: VerbType::GodanMa, provides_conn: conn::VERB_ONBINKEI, is_onbin: true },
    VerbEnding { suffix: "み", base_suffix: "む", verb_type: VerbType::GodanMa, provides_conn: conn::VERB_RENYOKEI, is_onbin: false },
    VerbEnding { suffix: "ま", base_suffix: "む", verb_type: VerbType::GodanMa, provides_conn: conn::VERB_MIZENKEI, is_onbin: false },
    VerbEnding { suffix: "め", base_suffix: "む", verb_type: VerbType::GodanMa, provides_conn: conn::VERB_POTENTIAL, is_onbin: false },
    VerbEnding { suffix: "め", base_suffix: "む", verb_type: VerbType::GodanMa, provides_conn: conn::VERB_KATEI, is_onbin: false },
    VerbEnding { suffix: "め", base_suffix: "む", verb_type: VerbType::GodanMa, provides_conn: conn::VERB_MEIREIKEI, is_onbin: false },
    VerbEnding { suffix: "も", base_suffix: "む", verb_type: VerbType::GodanMa, provides_conn: conn::VERB_VOLITIONAL, is_onbin: false },
    VerbEnding { suffix: "む", base_suffix: "む", verb_type: VerbType::GodanMa, provides_conn: conn::VERB_BASE, is_onbin: false },
    // Godan Ba (遊ぶ)
    VerbEnding { suffix: "ん", base_suffix: "ぶ", verb_type: VerbType::GodanBa, provides_conn: conn::VERB_ONBINKEI, is_onbin: true },
    VerbEnding { suffix: "び", base_suffix: "ぶ", verb_type: VerbType::GodanBa, provides_conn: conn::VERB_RENYOKEI, is_onbin: false },
    VerbEnding { suffix: "ば", base_suffix: "ぶ", verb_type: VerbType::GodanBa, provides_conn: conn::VERB_MIZENKEI, is_onbin: false },
    VerbEnding { suffix: "べ", base_suffix: "ぶ", verb_type: VerbType::GodanBa, provides_conn: conn::VERB_POTENTIAL, is_onbin: false },
    VerbEnding { suffix: "べ", base_suffix: "ぶ", verb_type: VerbType::GodanBa, provides_conn: conn::VERB_KATEI, is_onbin: false },
    VerbEnding { suffix: "べ", base_suffix: "ぶ", verb_type: VerbType::GodanBa, provides_conn: conn::VERB_MEIREIKEI, is_onbin: false },
    VerbEnding { suffix: "ぼ", base_suffix: "ぶ", verb_type: VerbType::GodanBa, provides_conn: conn::VERB_VOLITIONAL, is_onbin: false },
    VerbEnding { suffix: "ぶ", base_suffix: "ぶ", verb_type: VerbType::GodanBa, provides_conn: conn::VERB_BASE, is_onbin: false },
    // Godan Na (死ぬ) — rare, only one verb in common use
    VerbEnding { suffix: "ん", base_suffix: "ぬ", verb_type: VerbType::GodanNa, provides_conn: conn::VERB_ONBINKEI, is_onbin: true },
    VerbEnding { suffix: "に", base_suffix: "ぬ", verb_type: VerbType::GodanNa, provides_conn: conn::VERB_RENYOKEI, is_onbin: false },
    VerbEnding { suffix: "な", base_suffix: "ぬ", verb_type: VerbType::GodanNa, provides_conn: conn::VERB_MIZENKEI, is_onbin: false },
    VerbEnding { suffix: "ね", base_suffix: "ぬ", verb_type: VerbType::GodanNa, provides_conn: conn::VERB_POTENTIAL, is_onbin: false },
    VerbEnding { suffix: "ね", base_suffix: "ぬ", verb_type: VerbType::GodanNa, provides_conn: conn::VERB_KATEI, is_onbin: false },
    VerbEnding { suffix: "ね", base_suffix: "ぬ", verb_type: VerbType::GodanNa, provides_conn: conn::VERB_MEIREIKEI, is_onbin: false },
    VerbEnding { suffix: "の", base_suffix: "ぬ", verb_type: VerbType::GodanNa, provides_conn: conn::VERB_VOLITIONAL, is_onbin: false },
    VerbEnding { suffix: "ぬ", base_suffix: "ぬ", verb_type: VerbType::GodanNa, provides_conn: conn::VERB_BASE, is_onbin: false },
    // Godan Wa (買う)
    VerbEnding { suffix: "っ", base_suffix: "う", verb_type: VerbType::GodanWa, provides_conn: conn::VERB_ONBINKEI, is_onbin: true },
    VerbEnding { suffix: "い", base_suffix: "う", verb_type: VerbType::GodanWa, provides_conn: conn::VERB_RENYOKEI, is_onbin: false },
    VerbEnding { suffix: "わ", base_suffix: "う", verb_type: VerbType::GodanWa, provides_conn: conn::VERB_MIZENKEI, is_onbin: false },
    VerbEnding { suffix: "え", base_suffix: "う", verb_type: VerbType::GodanWa, provides_conn: conn::VERB_POTENTIAL, is_onbin: false },
    VerbEnding { suffix: "え", base_suffix: "う", verb_type: VerbType::GodanWa, provides_conn: conn::VERB_KATEI, is_onbin: false },
    VerbEnding { suffix: "え", base_suffix: "う", verb_type: VerbType::GodanWa, provides_conn: conn::VERB_MEIREIKEI, is_onbin: false },
    VerbEnding { suffix: "お", base_suffix: "う", verb_type: VerbType::GodanWa, provides_conn: conn::VERB_VOLITIONAL, is_onbin: false },
    VerbEnding { suffix: "う", base_suffix: "う", verb_type: VerbType::GodanWa, provides_conn: conn::VERB_BASE, is_onbin: false },
    // Ichidan (食べる)
    VerbEnding { suffix: "", base_suffix: "る", verb_type: VerbType::Ichidan, provides_conn: conn::VERB_ONBINKEI, is_onbin: true },
    VerbEnding { suffix: "", base_suffix: "る", verb_type: VerbType::Ichidan, provides_conn: conn::VERB_RENYOKEI, is_onbin: false },
    VerbEnding { suffix: "", base_suffix: "る", verb_type: VerbType::Ichidan, provides_conn: conn::VERB_MIZENKEI, is_onbin: false },
    VerbEnding { suffix: "れ", base_suffix: "る", verb_type: VerbType::Ichidan, provides_conn: conn::VERB_KATEI, is_onbin: false },
    VerbEnding { suffix: "ろ", base_suffix: "る", verb_type: VerbType::Ichidan, provides_conn: conn::VERB_MEIREIKEI, is_onbin: false },
    VerbEnding { suffix: "よ", base_suffix: "る", verb_type: VerbType::Ichidan, provides_conn: conn::VERB_VOLITIONAL, is_onbin: false },
    VerbEnding { suffix: "る", base_suffix: "る", verb_type: VerbType::Ichidan, provides_conn: conn::VERB_BASE, is_onbin: false },
    // Suru (する)
    VerbEnding { suffix: "し", base_suffix: "する", verb_type: VerbType::Suru, provides_conn: conn::VERB_ONBINKEI, is_onbin: true },
    VerbEnding { suffix: "し", base_suffix: "する", verb_type: VerbType::Suru, provides_conn: conn::VERB_RENYOKEI, is_onbin: false },
    VerbEnding { suffix: "し", base_suffix: "する", verb_type: VerbType::Suru, provides_conn: conn::VERB_MIZENKEI, is_onbin: false },
    VerbEnding { suffix: "さ", base_suffix: "する", verb_type: VerbType::Suru, provides_conn: conn::VERB_MIZENKEI, is_onbin: false },
    // Empty-suffix patterns: 開催+された, 勉強+してる contraction.
    VerbEnding { suffix: "", base_suffix: "する", verb_type: VerbType::Suru, provides_conn: conn::VERB_MIZENKEI, is_onbin: false },
    VerbEnding { suffix: "", base_suffix: "する", verb_type: VerbType::Suru, provides_conn: conn::VERB_ONBINKEI, is_onbin: true },
    VerbEnding { suffix: "すれ", base_suffix: "する", verb_type: VerbType::Suru, provides_conn: conn::VERB_KATEI, is_onbin: false },
    VerbEnding { suffix: "しろ", base_suffix: "する", verb_type: VerbType::Suru, provides_conn: conn::VERB_MEIREIKEI, is_onbin: false },
    VerbEnding { suffix: "せよ", base_suffix: "する", verb_type: VerbType::Suru, provides_conn: conn::VERB_MEIREIKEI, is_onbin: false },
    VerbEnding { suffix: "しよ", base_suffix: "する", verb_type: VerbType::Suru, provides_conn: conn::VERB_VOLITIONAL, is_onbin: false },
    VerbEnding { suffix: "する", base_suffix: "する", verb_type: VerbType::Suru, provides_conn: conn::VERB_BASE, is_onbin: false },
    VerbEnding { suffix: "す", base_suffix: "する", verb_type: VerbType::Suru, provides_conn: conn::VERB_BASE, is_onbin: false },
    // Kuru (来る)
    VerbEnding { suffix: "き", base_suffix: "くる", verb_type: VerbType::Kuru, provides_conn: conn::VERB_ONBINKEI, is_onbin: true },
    VerbEnding { suffix: "き", base_suffix: "くる", verb_type: VerbType::Kuru, provides_conn: conn::VERB_RENYOKEI, is_onbin: false },
    VerbEnding { suffix: "こ", base_suffix: "くる", verb_type: VerbType::Kuru, provides_conn: conn::VERB_MIZENKEI, is_onbin: false },
    VerbEnding { suffix: "くれ", base_suffix: "くる", verb_type: VerbType::Kuru, provides_conn: conn::VERB_KATEI, is_onbin: false },
    VerbEnding { suffix: "こい", base_suffix: "くる", verb_type: VerbType::Kuru, provides_conn: conn::VERB_MEIREIKEI, is_onbin: false },
    VerbEnding { suffix: "こよ", base_suffix: "くる", verb_type: VerbType::Kuru, provides_conn: conn::VERB_VOLITIONAL, is_onbin: false },
    VerbEnding { suffix: "くる", base_suffix: "くる", verb_type: VerbType::Kuru, provides_conn: conn::VERB_BASE, is_onbin: false },
    // I-adjective stem boundary (美しい)
    VerbEnding { suffix: "", base_suffix: "い", verb_type: VerbType::IAdjective, provides_conn: conn::I_ADJ_STEM, is_onbin: false },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn godan_ka_base_ending_is_present() {
        assert!(VERB_ENDINGS
            .iter()
            .any(|e| e.suffix == "く" && e.verb_type == VerbType::GodanKa && e.provides_conn == conn::VERB_BASE));
    }

    #[test]
    fn ichidan_has_empty_suffix_onbinkei_entry() {
        assert!(VERB_ENDINGS
            .iter()
            .any(|e| e.suffix.is_empty() && e.verb_type == VerbType::Ichidan && e.provides_conn == conn::VERB_ONBINKEI));
    }

    #[test]
    fn kuru_remaps_base_suffix_to_kuru() {
        assert!(VERB_ENDINGS
            .iter()
            .any(|e| e.verb_type == VerbType::Kuru && e.base_suffix == "くる" && e.provides_conn == conn::VERB_BASE));
    }
}
