//! Productive-prefix joins (§4.5, §9): a closed set of derivational
//! kanji prefixes (不, 未, 非, 無, …) joined to a following kanji run,
//! unless the combined surface already has its own dictionary entry (in
//! which case [`crate::candidates::dictionary_candidates`] already covers
//! it and this generator would only add a redundant, worse-scored edge).
//!
//! Honorific お/ご are handled separately as ordinary dictionary entries
//! in [`crate::dictionary::core_data`] rather than through this
//! generator — they attach productively to far more than kanji nouns
//! (hiragana verbs, i-adjectives) and reuse the dictionary's own
//! prefix-match machinery more naturally than a second closed-set join.

use crate::candidates::{Candidate, GenContext};
use crate::char_class::CharClass;
use crate::lattice::EdgeFlags;
use crate::pos::Pos;

const PREFIXES: &[char] = &[
    '不', '未', '非', '無', '超', '再', '準', '副', '総', '各', '両', '最', '半',
];

const MAX_NOUN_LEN: usize = 5;
const JOIN_BONUS: f64 = -0.4;

pub fn generate(ctx: &GenContext, p: usize) -> Vec<Candidate> {
    let Some(first) = ctx.slice(p, p + 1).chars().next() else {
        return Vec::new();
    };
    if !PREFIXES.contains(&first) {
        return Vec::new();
    }
    if ctx.class_at(p + 1) != Some(CharClass::Kanji) {
        return Vec::new();
    }

    let noun_len = ctx.run_len(p + 1, CharClass::Kanji, MAX_NOUN_LEN);
    if noun_len == 0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    for len in 1..=noun_len {
        let end = p + 1 + len;
        let surface = ctx.slice(p, end);
        if !ctx.dictionary.lookup(surface).is_empty() {
            continue;
        }
        let noun = ctx.slice(p + 1, end);
        let noun_verified = !ctx.dictionary.lookup(noun).is_empty();
        let cost = (if noun_verified { 1.2 } else { 2.8 }) + JOIN_BONUS;
        out.push(Candidate {
            surface: surface.to_string(),
            start: p,
            end,
            pos: Pos::Noun,
            cost,
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

    #[test]
    fn fukanou_joins_prefix_with_noun() {
        let dict = Dictionary::new();
        let inflection = InflectionEngine::new();
        let text = "不可能";
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
        assert!(candidates.iter().any(|c| c.surface == "不可能"));
    }

    #[test]
    fn non_prefix_start_produces_nothing() {
        let dict = Dictionary::new();
        let inflection = InflectionEngine::new();
        let text = "水曜日";
        let index = CodepointIndex::new(text);
        let classes: Vec<_> = index.chars().iter().map(|&c| classify(c)).collect();
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
