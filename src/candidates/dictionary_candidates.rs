//! Dictionary candidates (§4.5): one edge per prefix-match hit at `p`,
//! flags copied from the matched entry and the layer it came from.

use crate::candidates::{Candidate, GenContext};
use crate::lattice::EdgeFlags;

pub fn generate(ctx: &GenContext, p: usize) -> Vec<Candidate> {
    let tail = ctx.tail_from(p);
    let mut out = Vec::new();
    for hit in ctx.dictionary.prefix_match(tail) {
        let end = p + hit.match_len;
        let mut flags = EdgeFlags::FROM_DICTIONARY;
        if hit.is_user_dict {
            flags |= EdgeFlags::FROM_USER_DICT;
        }
        if hit.entry.is_formal_noun {
            flags |= EdgeFlags::FROM_FORMAL_NOUN;
        }
        if hit.entry.is_low_info {
            flags |= EdgeFlags::FROM_LOW_INFO;
        }
        out.push(Candidate {
            surface: hit.entry.surface.clone(),
            start: p,
            end,
            pos: hit.entry.pos,
            cost: hit.entry.cost,
            flags,
            lemma: Some(hit.entry.lemma.clone()),
            conj_type: Some(hit.entry.conj_type),
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
    fn matches_every_prefix_at_position() {
        let dict = Dictionary::new();
        let inflection = InflectionEngine::new();
        let text = "水を飲む";
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
