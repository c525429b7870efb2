//! Hiragana-only verb candidates (§4.5): symmetric to
//! [`crate::candidates::verb_candidates`] for pure-hiragana stems, with a
//! stricter default threshold relaxed to [`MIN_CONFIDENCE`] when the
//! inferred base form is dictionary-verified (handles passive mizenkei
//! like いわ+れる, where いわ/言わ must exist in the dictionary to be
//! trusted at the lower threshold).

use crate::candidates::{scan_inflection, Candidate, GenContext};
use crate::char_class::CharClass;
use crate::conjugation::VerbType;
use crate::inflection::MIN_CONFIDENCE;

const MAX_SPAN: usize = 8;
const STRICT_THRESHOLD: f64 = 0.65;

pub fn generate(ctx: &GenContext, p: usize) -> Vec<Candidate> {
    if ctx.class_at(p) != Some(CharClass::Hiragana) {
        return Vec::new();
    }

    let loose = scan_inflection(ctx, p, MAX_SPAN, MIN_CONFIDENCE, |vt| {
        vt != VerbType::Unknown && vt != VerbType::IAdjective
    });

    loose
        .into_iter()
        .filter(|c| {
            let cost_implied_confidence = 1.0 - (c.cost - 0.5) / 4.0;
            if cost_implied_confidence >= STRICT_THRESHOLD {
                return true;
            }
            let base = c.lemma.as_deref().unwrap_or_default();
            !ctx.dictionary.lookup(base).is_empty()
        })
        .collect::<Vec<Candidate>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char_class::classify;
    use crate::dictionary::Dictionary;
    use crate::inflection::InflectionEngine;
    use crate::utf8::CodepointIndex;

    #[test]
    fn dictionary_verified_base_survives_at_the_loose_threshold() {
        let dict = Dictionary::new();
        let inflection = InflectionEngine::new();
        let text = "のんだ";
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
        assert!(candidates.iter().any(|c| c.lemma.as_deref() == Some("飲む")));
    }
}
