//! Confidence scoring for a single inflection candidate.
//!
//! Starts from a base value and applies a cascade of additive adjustments
//! bounded by a floor and ceiling, each one documented as a debug log
//! event (§4.4). The rules encode shape heuristics that disambiguate
//! plausible-but-wrong stem splits from the intended one: stem length,
//! auxiliary chain length, onbin-compatible final kana, and a handful of
//! per-verb-type disambiguation bonuses.

use crate::char_class::{classify, CharClass};
use crate::conjugation::VerbType;
use crate::debug::suzume_debug;

pub const FLOOR: f64 = 0.1;
pub const CEILING: f64 = 0.99;
const BASE: f64 = 0.6;

/// Inputs to the confidence cascade for one candidate stem/suffix split.
pub struct ConfidenceInput<'a> {
    pub stem: &'a str,
    pub verb_type: VerbType,
    pub suffix_chain: &'a str,
    pub is_onbin: bool,
}

/// Computes the clamped confidence for a candidate, logging every rule
/// that fires when `SUZUME_DEBUG` is set.
pub fn score(input: &ConfidenceInput) -> f64 {
    let mut c = BASE;
    let stem_chars: Vec<char> = input.stem.chars().collect();
    let stem_len = stem_chars.len();

    // Stem-length brackets.
    if stem_len >= 7 {
        c -= 0.1;
        suzume_debug!("confidence: very-long stem ({} chars) -0.1", stem_len);
    } else if stem_len == 2 {
        c += 0.1;
        suzume_debug!("confidence: 2-char stem bonus +0.1");
    } else if stem_len == 1 {
        c += 0.05;
        suzume_debug!("confidence: 1-char stem bonus +0.05");
    }

    // Auxiliary chain length bonus, proportional to bytes matched.
    if !input.suffix_chain.is_empty() {
        let bonus = (input.suffix_chain.len() as f64 * 0.01).min(0.15);
        c += bonus;
        suzume_debug!(
            "confidence: auxiliary chain bonus +{:.3} ({} bytes)",
            bonus,
            input.suffix_chain.len()
        );
    }

    if let Some(&last) = stem_chars.last() {
        if input.verb_type == VerbType::Ichidan {
            if is_u_row(last) {
                c -= 0.2;
                suzume_debug!("confidence: Ichidan stem ends in u-row kana -0.2");
            }
            if input.is_onbin && is_a_row(last) {
                c -= 0.15;
                suzume_debug!("confidence: Ichidan onbin stem ends in a-row kana -0.15");
            }
            if is_small_kana(last) {
                c -= 0.25;
                suzume_debug!("confidence: Ichidan stem ends in small kana -0.25");
            }
        }

        if input.verb_type == VerbType::GodanWa && input.is_onbin && stem_len >= 2 && is_kanji_only(&stem_chars) {
            c += 0.1;
            suzume_debug!("confidence: GodanWa multi-kanji onbin stem bonus +0.1");
        }

        if input.verb_type == VerbType::Suru {
            if stem_len == 2 && is_kanji_only(&stem_chars) {
                c += 0.15;
                suzume_debug!("confidence: Suru 2-kanji stem bonus +0.15");
            }
        }
        if input.verb_type == VerbType::GodanSa && stem_len == 1 && is_kanji_only(&stem_chars) {
            c += 0.1;
            suzume_debug!("confidence: GodanSa single-kanji stem bonus +0.1");
        }

        if input.verb_type == VerbType::IAdjective {
            if is_kanji_only(&stem_chars) {
                c -= 0.2;
                suzume_debug!("confidence: i-adjective all-kanji stem penalty -0.2");
            }
            if is_e_row(last) {
                c -= 0.15;
                suzume_debug!("confidence: i-adjective e-row-ending stem penalty -0.15");
            }
        }
    }

    c.clamp(FLOOR, CEILING)
}

fn is_kanji_only(chars: &[char]) -> bool {
    !chars.is_empty() && chars.iter().all(|&c| classify(c) == CharClass::Kanji)
}

pub(crate) fn is_u_row(c: char) -> bool {
    matches!(c, 'く' | 'す' | 'つ' | 'ぬ' | 'ふ' | 'む' | 'ゆ' | 'る' | 'う' | 'ぐ' | 'ず' | 'づ' | 'ぶ' | 'ぷ')
}

pub(crate) fn is_a_row(c: char) -> bool {
    matches!(c, 'か' | 'さ' | 'た' | 'な' | 'は' | 'ま' | 'や' | 'ら' | 'わ' | 'が' | 'ざ' | 'だ' | 'ば' | 'ぱ')
}

pub(crate) fn is_e_row(c: char) -> bool {
    matches!(c, 'け' | 'せ' | 'て' | 'ね' | 'へ' | 'め' | 'れ' | 'げ' | 'ぜ' | 'で' | 'べ' | 'ぺ')
}

pub(crate) fn is_small_kana(c: char) -> bool {
    matches!(c, 'っ' | 'ゃ' | 'ゅ' | 'ょ' | 'ぁ' | 'ぃ' | 'ぅ' | 'ぇ' | 'ぉ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_confidence_for_plain_stem_is_within_bounds() {
        let input = ConfidenceInput {
            stem: "話",
            verb_type: VerbType::GodanSa,
            suffix_chain: "",
            is_onbin: false,
        };
        let c = score(&input);
        assert!(c >= FLOOR && c <= CEILING);
    }

    #[test]
    fn ichidan_u_row_ending_is_penalized() {
        let penalized = ConfidenceInput {
            stem: "たべく",
            verb_type: VerbType::Ichidan,
            suffix_chain: "",
            is_onbin: false,
        };
        let normal = ConfidenceInput {
            stem: "たべ",
            verb_type: VerbType::Ichidan,
            suffix_chain: "",
            is_onbin: false,
        };
        assert!(score(&penalized) < score(&normal));
    }

    #[test]
    fn longer_auxiliary_chain_increases_confidence() {
        let short = ConfidenceInput {
            stem: "書",
            verb_type: VerbType::GodanKa,
            suffix_chain: "て",
            is_onbin: true,
        };
        let long = ConfidenceInput {
            stem: "書",
            verb_type: VerbType::GodanKa,
            suffix_chain: "ている",
            is_onbin: true,
        };
        assert!(score(&long) >= score(&short));
    }
}
