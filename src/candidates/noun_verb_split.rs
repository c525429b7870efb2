//! Noun-plus-verb splits (§4.5): a kanji run followed by a tail that the
//! inflection engine or dictionary recognizes as a conjugated verb is
//! split at that boundary, e.g. `水飲んだ` → `水` / `飲んだ`. Stacks a bonus
//! onto the noun edge when both the noun half and the inflected base form
//! are independently dictionary-verified.

use crate::candidates::{Candidate, GenContext};
use crate::char_class::CharClass;
use crate::inflection::MIN_CONFIDENCE;
use crate::lattice::EdgeFlags;
use crate::pos::Pos;

const MAX_NOUN_LEN: usize = 6;
const VERB_LOOKAHEAD: usize = 6;
const BOTH_VERIFIED_BONUS: f64 = -0.7;

pub fn generate(ctx: &GenContext, p: usize) -> Vec<Candidate> {
    if ctx.class_at(p) != Some(CharClass::Kanji) {
        return Vec::new();
    }
    let kanji_len = ctx.run_len(p, CharClass::Kanji, MAX_NOUN_LEN);
    if kanji_len == 0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    for noun_len in 1..=kanji_len {
        let split = p + noun_len;
        let tail_end = (split + VERB_LOOKAHEAD).min(ctx.len());
        let looks_like_verb_tail = (split + 1..=tail_end).any(|end| {
            ctx.inflection
                .analyze(ctx.slice(split, end))
                .into_iter()
                .any(|c| c.confidence > 0.5)
        });
        if !looks_like_verb_tail {
            continue;
        }

        let noun = ctx.slice(p, split);
        let noun_verified = !ctx.dictionary.lookup(noun).is_empty();
        let mut cost = if noun_verified { 1.0 } else { 2.2 };
        if noun_verified {
            let tail_verified = (split + 1..=tail_end).any(|end| {
                ctx.inflection.analyze(ctx.slice(split, end)).into_iter().any(|c| {
                    c.confidence >= MIN_CONFIDENCE && !ctx.dictionary.lookup(&c.base_form).is_empty()
                })
            });
            if tail_verified {
                cost += BOTH_VERIFIED_BONUS;
            }
        }

        out.push(Candidate {
            surface: noun.to_string(),
            start: p,
            end: split,
            pos: Pos::Noun,
            cost,
            flags: EdgeFlags::UNKNOWN,
            lemma: Some(noun.to_string()),
            conj_type: None,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char_class::classify;
    use crate::dictionary::Dictionary;
    use crate::inflection::InflectionEngine;
    use crate::utf8::CodepointIndex;

    #[test]
    fn mizu_nonda_splits_noun_from_verb_tail() {
        let dict = Dictionary::new();
        let inflection = InflectionEngine::new();
        let text = "水飲んだ";
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
        assert!(candidates.iter().any(|c| c.surface == "水"));
    }
}
