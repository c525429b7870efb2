//! Te-form contraction joins (§4.5, §9): hiragana て/で immediately
//! followed by a closed set of colloquial contractions (てく, ちゃう,
//! じゃう, とく, もらう, くれる, あげる, やる) forms a single auxiliary-chain
//! edge rather than splitting at the contraction boundary. Benefactive
//! forms are excluded when negated (〜てあげない etc. reverts to a normal
//! split — 〜ない belongs to the verb candidates / inflection engine, not
//! this contraction).

use crate::candidates::{Candidate, GenContext};
use crate::lattice::EdgeFlags;
use crate::pos::Pos;

const CONTRACTIONS: &[&str] = &["てく", "ちゃう", "じゃう", "とく", "もらう", "くれる", "あげる", "やる"];
const BENEFACTIVES: &[&str] = &["もらう", "くれる", "あげる", "やる"];
const NEGATION_TAIL: &str = "ない";

const JOIN_COST: f64 = 1.8;

pub fn generate(ctx: &GenContext, p: usize) -> Vec<Candidate> {
    let head = ctx.slice(p, (p + 1).min(ctx.len()));
    if head != "て" && head != "で" {
        return Vec::new();
    }

    let tail = ctx.tail_from(p + 1);
    let mut out = Vec::new();
    for &contraction in CONTRACTIONS {
        if !tail.starts_with(contraction) {
            continue;
        }
        let contraction_len = contraction.chars().count();
        let end = p + 1 + contraction_len;

        if BENEFACTIVES.contains(&contraction) {
            let after = ctx.slice(end, ctx.len());
            if after.starts_with(NEGATION_TAIL) {
                continue;
            }
        }

        let surface = ctx.slice(p, end);
        out.push(Candidate {
            surface: surface.to_string(),
            start: p,
            end,
            pos: Pos::Auxiliary,
            cost: JOIN_COST,
            flags: EdgeFlags::UNKNOWN,
            lemma: Some(surface.to_string()),
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

    fn ctx_for(text: &'static str) -> (Dictionary, InflectionEngine, CodepointIndex, Vec<crate::char_class::CharClass>) {
        let dict = Dictionary::new();
        let inflection = InflectionEngine::new();
        let index = CodepointIndex::new(text);
        let classes: Vec<_> = index.chars().iter().map(|&c| classify(c)).collect();
        (dict, inflection, index, classes)
    }

    #[test]
    fn techau_contraction_joins_as_one_edge() {
        let text = "てちゃう";
        let (dict, inflection, index, classes) = ctx_for(text);
        let ctx = GenContext {
            text,
            index: &index,
            classes: &classes,
            dictionary: &dict,
            inflection: &inflection,
        };
        let candidates = generate(&ctx, 0);
        assert!(candidates.iter().any(|c| c.surface == "てちゃう"));
    }

    #[test]
    fn benefactive_negation_is_excluded() {
        let text = "てあげない";
        let (dict, inflection, index, classes) = ctx_for(text);
        let ctx = GenContext {
            text,
            index: &index,
            classes: &classes,
            dictionary: &dict,
            inflection: &inflection,
        };
        let candidates = generate(&ctx, 0);
        assert!(!candidates.iter().any(|c| c.surface == "てあげ"));
    }
}
