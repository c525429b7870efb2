//! Suffix-separated candidates (§4.5): kanji compounds ending in a closed
//! set of derivational suffixes emit both the whole compound and the bare
//! stem, e.g. `国際化` emits `国際化` and `国際`.

use crate::candidates::{Candidate, GenContext};
use crate::char_class::CharClass;
use crate::lattice::EdgeFlags;
use crate::pos::Pos;

/// Closed suffix set (§4.5: "化, 性, 者, 的, …").
const SUFFIXES: &[char] = &['化', '性', '者', '的', '家', '式', '型', '観', '力', '論', '学'];

pub fn generate(ctx: &GenContext, p: usize) -> Vec<Candidate> {
    if ctx.class_at(p) != Some(CharClass::Kanji) {
        return Vec::new();
    }
    let kanji_len = ctx.run_len(p, CharClass::Kanji, 8);
    if kanji_len < 2 {
        return Vec::new();
    }

    let chars: Vec<char> = ctx.slice(p, p + kanji_len).chars().collect();
    let mut out = Vec::new();
    for stem_len in 1..kanji_len {
        if !SUFFIXES.contains(&chars[stem_len]) {
            continue;
        }
        let compound_end = p + stem_len + 1;
        let compound = ctx.slice(p, compound_end);
        let stem = ctx.slice(p, p + stem_len);
        out.push(Candidate {
            surface: compound.to_string(),
            start: p,
            end: compound_end,
            pos: Pos::Noun,
            cost: 3.0,
            flags: EdgeFlags::UNKNOWN,
            lemma: Some(compound.to_string()),
            conj_type: None,
        });
        out.push(Candidate {
            surface: stem.to_string(),
            start: p,
            end: p + stem_len,
            pos: Pos::Noun,
            cost: 3.5,
            flags: EdgeFlags::UNKNOWN,
            lemma: Some(stem.to_string()),
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
    fn kokusaika_emits_compound_and_stem() {
        let dict = Dictionary::new();
        let inflection = InflectionEngine::new();
        let text = "国際化";
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
        assert!(candidates.iter().any(|c| c.surface == "国際化"));
        assert!(candidates.iter().any(|c| c.surface == "国際"));
    }
}
