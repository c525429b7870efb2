//! Compound-noun splits (§4.5): a kanji run of four or more characters is
//! tried at every internal split point, and the first half is emitted as
//! its own edge whenever either half resolves against the dictionary —
//! long kanji runs are usually two nouns stuck together (`情報処理`,
//! `自然言語`), not one four-kanji word.

use crate::candidates::{Candidate, GenContext};
use crate::char_class::CharClass;
use crate::lattice::EdgeFlags;
use crate::pos::Pos;

const MIN_RUN_LEN: usize = 4;
const MAX_RUN_LEN: usize = 8;

pub fn generate(ctx: &GenContext, p: usize) -> Vec<Candidate> {
    if ctx.class_at(p) != Some(CharClass::Kanji) {
        return Vec::new();
    }
    let run_len = ctx.run_len(p, CharClass::Kanji, MAX_RUN_LEN);
    if run_len < MIN_RUN_LEN {
        return Vec::new();
    }

    let mut out = Vec::new();
    for split in 2..=(run_len - 2) {
        let first_half = ctx.slice(p, p + split);
        let second_half = ctx.slice(p + split, p + run_len);
        let first_hit = !ctx.dictionary.lookup(first_half).is_empty();
        let second_hit = !ctx.dictionary.lookup(second_half).is_empty();
        if !first_hit && !second_hit {
            continue;
        }
        let cost = if first_hit { 0.5 } else { 2.0 };
        out.push(Candidate {
            surface: first_half.to_string(),
            start: p,
            end: p + split,
            pos: Pos::Noun,
            cost,
            flags: EdgeFlags::UNKNOWN,
            lemma: Some(first_half.to_string()),
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
    fn long_kanji_run_splits_at_a_dictionary_boundary() {
        let dict = Dictionary::new();
        let inflection = InflectionEngine::new();
        let text = "日本語学校";
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
        assert!(candidates.iter().any(|c| c.surface == "日本"));
    }
}
