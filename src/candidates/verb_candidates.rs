//! Verb candidates, kanji+hiragana (§4.5): at a kanji position, every
//! kanji+hiragana substring starting there is run through the inflection
//! engine; surviving candidates (confidence ≥ [`MIN_CONFIDENCE`]) become
//! lattice edges. Covers Godan mizenkei+passive/potential/causative,
//! single-kanji Ichidan+polite/past/te/rareru, Godan onbin+contraction and
//! Ichidan renyokei+て/た uniformly, since each is just a different
//! auxiliary chain the inflection engine already knows how to peel.

use crate::candidates::{scan_inflection, Candidate, GenContext};
use crate::char_class::CharClass;
use crate::conjugation::VerbType;
use crate::inflection::MIN_CONFIDENCE;

const MAX_SPAN: usize = 10;

pub fn generate(ctx: &GenContext, p: usize) -> Vec<Candidate> {
    if ctx.class_at(p) != Some(CharClass::Kanji) {
        return Vec::new();
    }
    scan_inflection(ctx, p, MAX_SPAN, MIN_CONFIDENCE, |vt| {
        vt != VerbType::Unknown && vt != VerbType::IAdjective
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char_class::classify;
    use crate::dictionary::Dictionary;
    use crate::inflection::InflectionEngine;
    use crate::pos::Pos;
    use crate::utf8::CodepointIndex;

    #[test]
    fn kaite_produces_a_kaku_verb_candidate() {
        let dict = Dictionary::new();
        let inflection = InflectionEngine::new();
        let text = "書いて";
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
        assert!(candidates
            .iter()
            .any(|c| c.surface == "書いて" && c.pos == Pos::Verb && c.lemma.as_deref() == Some("書く")));
    }
}
