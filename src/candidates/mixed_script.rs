//! Mixed-script merges (§4.5, §8 scenario 4): an alphabet/digit run
//! immediately followed by a kanji or katakana run is a single loanword
//! compound more often than two separate tokens (`Web開発`, `iPhone版`,
//! `3D映像`). Emits one merged edge with a modest bonus on top of the
//! unknown-token length cost; the unmerged two-edge reading still exists
//! via [`crate::candidates::unknown_candidates`], so Viterbi picks
//! whichever is cheaper once adjacent connection costs are in.

use crate::candidates::{Candidate, GenContext};
use crate::char_class::CharClass;
use crate::lattice::EdgeFlags;
use crate::pos::Pos;

const MERGE_BONUS: f64 = -0.6;
const MAX_HEAD_LEN: usize = 12;
const MAX_TAIL_LEN: usize = 6;

fn is_head_class(class: CharClass) -> bool {
    matches!(class, CharClass::Alphabet | CharClass::Digit)
}

fn is_tail_class(class: CharClass) -> bool {
    matches!(class, CharClass::Kanji | CharClass::Katakana)
}

pub fn generate(ctx: &GenContext, p: usize) -> Vec<Candidate> {
    let Some(head_class) = ctx.class_at(p) else {
        return Vec::new();
    };
    if !is_head_class(head_class) {
        return Vec::new();
    }

    let head_len = ctx.run_len(p, head_class, MAX_HEAD_LEN);
    let tail_start = p + head_len;
    let Some(tail_class) = ctx.class_at(tail_start) else {
        return Vec::new();
    };
    if !is_tail_class(tail_class) {
        return Vec::new();
    }
    let tail_len = ctx.run_len(tail_start, tail_class, MAX_TAIL_LEN);
    if tail_len == 0 {
        return Vec::new();
    }

    let end = tail_start + tail_len;
    let surface = ctx.slice(p, end);
    let base_cost = 1.5 + (head_len + tail_len) as f64 * 0.15;
    vec![Candidate {
        surface: surface.to_string(),
        start: p,
        end,
        pos: Pos::Noun,
        cost: base_cost + MERGE_BONUS,
        flags: EdgeFlags::UNKNOWN,
        lemma: Some(surface.to_string()),
        conj_type: None,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char_class::classify;
    use crate::dictionary::Dictionary;
    use crate::inflection::InflectionEngine;
    use crate::utf8::CodepointIndex;

    fn ctx_for(text: &'static str) -> (Dictionary, InflectionEngine, CodepointIndex, Vec<CharClass>) {
        let dict = Dictionary::new();
        let inflection = InflectionEngine::new();
        let index = CodepointIndex::new(text);
        let classes: Vec<_> = index.chars().iter().map(|&c| classify(c)).collect();
        (dict, inflection, index, classes)
    }

    #[test]
    fn web_kaihatsu_merges_into_one_edge() {
        let text = "Web開発";
        let (dict, inflection, index, classes) = ctx_for(text);
        let ctx = GenContext {
            text,
            index: &index,
            classes: &classes,
            dictionary: &dict,
            inflection: &inflection,
        };
        let candidates = generate(&ctx, 0);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].surface, "Web開発");
    }

    #[test]
    fn pure_kanji_start_produces_nothing() {
        let text = "開発";
        let (dict, inflection, index, classes) = ctx_for(text);
        let ctx = GenContext {
            text,
            index: &index,
            classes: &classes,
            dictionary: &dict,
            inflection: &inflection,
        };
        assert!(generate(&ctx, 0).is_empty());
    }
}
