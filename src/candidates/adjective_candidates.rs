//! Adjective candidates (§4.5): i-adjective edges from a kanji stem plus
//! hiragana ending when the inflection engine identifies a valid
//! `IAdjective` form, na-adjective candidates for kanji+的 patterns, and
//! hiragana-only i-adjective candidates at a higher confidence threshold.
//!
//! The extensive false-positive exclusions the original system applies
//! for verb-form collisions (ない patterns, passive-negative-renyokei,
//! contractions like 〜てく/〜んでい/〜てく) are covered structurally here:
//! [`crate::scorer::unknown_adjustment`] penalizes exactly those shapes
//! after the fact rather than this generator special-casing each one, so a
//! colliding verb reading and a genuine adjective reading both reach
//! Viterbi and the cheaper (scorer-adjusted) interpretation wins.

use crate::candidates::{scan_inflection, Candidate, GenContext};
use crate::char_class::CharClass;
use crate::conjugation::{ConjugationType, VerbType};
use crate::inflection::MIN_CONFIDENCE;
use crate::lattice::EdgeFlags;
use crate::pos::Pos;

const MAX_SPAN: usize = 8;
const HIRAGANA_ONLY_THRESHOLD: f64 = 0.7;

/// Na-adjective stems are not conjugated by the inflection engine (there's
/// nothing to invert — な is not part of the dictionary form), so kanji+的
/// is matched directly rather than through `scan_inflection`.
const NA_ADJECTIVE_SUFFIX: char = '的';

pub fn generate(ctx: &GenContext, p: usize) -> Vec<Candidate> {
    let mut out = Vec::new();

    match ctx.class_at(p) {
        Some(CharClass::Kanji) => {
            out.extend(scan_inflection(ctx, p, MAX_SPAN, MIN_CONFIDENCE, |vt| {
                vt == VerbType::IAdjective
            }));
            out.extend(na_adjective_candidates(ctx, p));
        }
        Some(CharClass::Hiragana) => {
            out.extend(scan_inflection(ctx, p, MAX_SPAN, HIRAGANA_ONLY_THRESHOLD, |vt| {
                vt == VerbType::IAdjective
            }));
        }
        _ => {}
    }

    out
}

fn na_adjective_candidates(ctx: &GenContext, p: usize) -> Vec<Candidate> {
    let kanji_len = ctx.run_len(p, CharClass::Kanji, 6);
    if kanji_len == 0 {
        return Vec::new();
    }
    let suffix_pos = p + kanji_len;
    if ctx.slice(suffix_pos, ctx.len().min(suffix_pos + 1)).chars().next() != Some(NA_ADJECTIVE_SUFFIX) {
        return Vec::new();
    }
    let end = suffix_pos + 1;
    let surface = ctx.slice(p, end);
    vec![Candidate {
        surface: surface.to_string(),
        start: p,
        end,
        pos: Pos::Adjective,
        cost: 2.5,
        flags: EdgeFlags::UNKNOWN,
        lemma: Some(surface.to_string()),
        conj_type: Some(ConjugationType::NaAdjective),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char_class::classify;
    use crate::dictionary::Dictionary;
    use crate::inflection::InflectionEngine;
    use crate::utf8::CodepointIndex;

    #[test]
    fn takakatta_produces_a_takai_adjective_candidate() {
        let dict = Dictionary::new();
        let inflection = InflectionEngine::new();
        let text = "高かった";
        let index = CodepointIndex::new(text);
        let classes: Vec<_> = index.chars().iter().map(|&c| classify(c)).collect();
        let ctx = GenContext {
            text,
            index: &index,
            classes: &classes,
            dictionary: &dict,
            inflection: &inflection,
        };
        let candidates = generate(&ctx, 0);
        assert!(candidates.iter().any(|c| c.lemma.as_deref() == Some("高い")));
    }

    #[test]
    fn kanji_teki_is_a_na_adjective_candidate() {
        let dict = Dictionary::new();
        let inflection = InflectionEngine::new();
        let text = "理論的";
        let index = CodepointIndex::new(text);
        let classes: Vec<_> = index.chars().iter().map(|&c| classify(c)).collect();
        let ctx = GenContext {
            text,
            index: &index,
            classes: &classes,
            dictionary: &dict,
            inflection: &inflection,
        };
        let candidates = na_adjective_candidates(&ctx, 0);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].surface, "理論的");
    }
}
