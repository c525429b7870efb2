//! Unknown candidates by character class (§4.5): one-or-more same-class
//! runs starting at `p`, up to a class-specific maximum length, each with
//! a default POS and a class-dependent cost favoring typical word lengths.

use crate::candidates::{Candidate, GenContext};
use crate::char_class::CharClass;
use crate::lattice::EdgeFlags;
use crate::pos::Pos;

/// Hiragana that is never the start of a verb or noun stem on its own —
/// these are always particles in isolation, so a length-1 unknown run
/// starting here would only ever duplicate the dictionary particle edge.
const NEVER_STEM_START: &[char] = &['を', 'へ', 'が', 'は', 'の', 'も', 'と', 'で', 'に'];

fn default_pos(class: CharClass) -> Pos {
    match class {
        CharClass::Kanji | CharClass::Katakana | CharClass::Alphabet | CharClass::Digit => Pos::Noun,
        CharClass::Hiragana => Pos::Other,
        CharClass::Symbol => Pos::Symbol,
        CharClass::Emoji | CharClass::Unknown => Pos::Unknown,
    }
}

fn max_run_len(class: CharClass) -> usize {
    match class {
        CharClass::Kanji => 4,
        CharClass::Hiragana => 1,
        CharClass::Katakana => 6,
        CharClass::Alphabet => 12,
        CharClass::Digit => 6,
        CharClass::Symbol | CharClass::Emoji | CharClass::Unknown => 1,
    }
}

/// Cost for a class/length pair: favors the typical length for that class
/// (a small bonus at the sweet spot) and grows for implausibly long runs.
fn length_cost(class: CharClass, len: usize) -> f64 {
    let base = match class {
        CharClass::Kanji => 4.0,
        CharClass::Hiragana => 5.0,
        CharClass::Katakana => 3.5,
        CharClass::Alphabet => 3.0,
        CharClass::Digit => 2.5,
        CharClass::Symbol => 3.0,
        CharClass::Emoji | CharClass::Unknown => 4.0,
    };
    let sweet_spot: usize = match class {
        CharClass::Kanji => 2,
        CharClass::Katakana => 3,
        CharClass::Alphabet => 4,
        _ => 1,
    };
    let distance = (len as isize - sweet_spot as isize).unsigned_abs() as f64;
    base + distance * 0.3
}

fn is_demonstrative_start(chars: &[char], p: usize) -> bool {
    let head = match chars.get(p) {
        Some(&c) => c,
        None => return false,
    };
    let second = chars.get(p + 1).copied();
    matches!(head, 'こ' | 'そ' | 'あ' | 'ど') && matches!(second, Some('れ') | Some('こ') | Some('ち'))
}

pub fn generate(ctx: &GenContext, p: usize) -> Vec<Candidate> {
    let class = match ctx.class_at(p) {
        Some(c) => c,
        None => return Vec::new(),
    };
    let max_len = ctx.run_len(p, class, max_run_len(class));
    if max_len == 0 {
        return Vec::new();
    }

    let chars: Vec<char> = ctx.slice(p, ctx.len()).chars().take(max_len).collect();
    if class == CharClass::Hiragana && NEVER_STEM_START.contains(&chars[0]) {
        return Vec::new();
    }
    if class == CharClass::Hiragana && is_demonstrative_start(&chars, 0) {
        return Vec::new();
    }

    let pos = default_pos(class);
    let mut out = Vec::with_capacity(max_len);
    for len in 1..=max_len {
        let end = p + len;
        let surface = ctx.slice(p, end);
        out.push(Candidate {
            surface: surface.to_string(),
            start: p,
            end,
            pos,
            cost: length_cost(class, len),
            flags: EdgeFlags::UNKNOWN,
            lemma: None,
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

    fn ctx_for<'a>(
        text: &'a str,
        index: &'a CodepointIndex,
        classes: &'a [CharClass],
        dict: &'a Dictionary,
        inflection: &'a InflectionEngine,
    ) -> GenContext<'a> {
        GenContext {
            text,
            index,
            classes,
            dictionary: dict,
            inflection,
        }
    }

    #[test]
    fn emits_one_edge_per_length_up_to_the_class_max() {
        let dict = Dictionary::new();
        let inflection = InflectionEngine::new();
        let text = "東京都";
        let index = CodepointIndex::new(text);
        let classes: Vec<_> = index.chars().iter().map(|&c| classify(c)).collect();
        let ctx = ctx_for(text, &index, &classes, &dict, &inflection);
        let candidates = generate(&ctx, 0);
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0].surface, "東");
        assert_eq!(candidates[2].surface, "東京都");
    }

    #[test]
    fn single_never_stem_particle_is_skipped() {
        let dict = Dictionary::new();
        let inflection = InflectionEngine::new();
        let text = "を見る";
        let index = CodepointIndex::new(text);
        let classes: Vec<_> = index.chars().iter().map(|&c| classify(c)).collect();
        let ctx = ctx_for(text, &index, &classes, &dict, &inflection);
        assert!(generate(&ctx, 0).is_empty());
    }
}
