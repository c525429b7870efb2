//! Tokenizer orchestrator (§4.7): builds a lattice over a span by running
//! every candidate generator at each character position in a fixed
//! order, then applies the post-filter penalties that depend on more
//! than one generator's output.

use crate::candidates::{self, GenContext};
use crate::char_class::CharClass;
use crate::dictionary::Dictionary;
use crate::inflection::InflectionEngine;
use crate::lattice::{EdgeFlags, Lattice};
use crate::pos::Pos;
use crate::utf8::CodepointIndex;

/// Particles that can stand alone, used by the unknown-verb-hiragana-tail
/// penalty below.
const STANDALONE_PARTICLES: &[&str] = &["を", "が", "は", "に", "で", "と", "の", "も", "へ", "から", "まで"];

const UNKNOWN_BEYOND_DICTIONARY_PENALTY: f64 = 3.5;
const UNKNOWN_VERB_TAIL_IS_PARTICLE_PENALTY: f64 = 1.5;

/// Builds a lattice for one normalized, already-pretokenized span.
pub fn tokenize(
    text: &str,
    index: &CodepointIndex,
    classes: &[CharClass],
    dictionary: &Dictionary,
    inflection: &InflectionEngine,
) -> Lattice {
    let len = classes.len();
    let mut lattice = Lattice::new(len);
    let ctx = GenContext {
        text,
        index,
        classes,
        dictionary,
        inflection,
    };

    for p in 0..len {
        let mut generated = Vec::new();
        generated.extend(candidates::dictionary_candidates::generate(&ctx, p));
        generated.extend(candidates::unknown_candidates::generate(&ctx, p));
        generated.extend(candidates::verb_candidates::generate(&ctx, p));
        generated.extend(candidates::hiragana_verb_candidates::generate(&ctx, p));
        generated.extend(candidates::adjective_candidates::generate(&ctx, p));
        generated.extend(candidates::suffix_candidates::generate(&ctx, p));
        generated.extend(candidates::compound_verb::generate(&ctx, p));
        generated.extend(candidates::mixed_script::generate(&ctx, p));
        generated.extend(candidates::compound_noun::generate(&ctx, p));
        generated.extend(candidates::noun_verb_split::generate(&ctx, p));
        generated.extend(candidates::prefix_noun::generate(&ctx, p));
        generated.extend(candidates::te_aux::generate(&ctx, p));

        let dictionary_reach = longest_dictionary_end(&generated, p);

        for mut candidate in generated {
            if candidate.flags.contains(EdgeFlags::UNKNOWN) {
                apply_post_filters(&mut candidate, &ctx, dictionary_reach);
            }
            lattice.add_edge(
                candidate.surface,
                candidate.start,
                candidate.end,
                candidate.pos,
                candidate.cost,
                candidate.flags,
                candidate.lemma,
                candidate.conj_type,
            );
        }
    }

    lattice
}

/// Longest end position reached by a dictionary-backed edge starting at
/// `p` in this round, or `None` if none of the generated candidates came
/// from the dictionary.
fn longest_dictionary_end(generated: &[candidates::Candidate], p: usize) -> Option<usize> {
    generated
        .iter()
        .filter(|c| c.start == p && c.flags.contains(EdgeFlags::FROM_DICTIONARY))
        .map(|c| c.end)
        .max()
}

fn apply_post_filters(candidate: &mut candidates::Candidate, ctx: &GenContext, dictionary_reach: Option<usize>) {
    if let Some(reach) = dictionary_reach {
        if candidate.end > reach && !is_overlap_exempt(candidate, ctx) {
            candidate.cost += UNKNOWN_BEYOND_DICTIONARY_PENALTY;
        }
    }

    if matches!(candidate.pos, Pos::Verb) {
        if let Some(tail) = hiragana_tail(candidate, ctx) {
            if STANDALONE_PARTICLES.contains(&tail.as_str()) {
                candidate.cost += UNKNOWN_VERB_TAIL_IS_PARTICLE_PENALTY;
            }
        }
    }
}

/// Exempts the overlap penalty for candidates that are themselves verb or
/// adjective interpretations overlapping a dictionary verb/adjective, and
/// for pure-hiragana verb candidates of three or more characters
/// overlapping a short dictionary entry (§4.7).
fn is_overlap_exempt(candidate: &candidates::Candidate, ctx: &GenContext) -> bool {
    if matches!(candidate.pos, Pos::Verb | Pos::Adjective) {
        return true;
    }
    let len = candidate.end - candidate.start;
    if len >= 3 {
        let all_hiragana = (candidate.start..candidate.end).all(|p| ctx.class_at(p) == Some(CharClass::Hiragana));
        if all_hiragana {
            return true;
        }
    }
    false
}

/// The trailing hiragana run of a verb candidate's surface, if the whole
/// surface is hiragana-only (kanji-stemmed verbs never trigger this
/// penalty since their tail is never the whole surface).
fn hiragana_tail(candidate: &candidates::Candidate, ctx: &GenContext) -> Option<String> {
    if !(candidate.start..candidate.end).all(|p| ctx.class_at(p) == Some(CharClass::Hiragana)) {
        return None;
    }
    Some(candidate.surface.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char_class::classify;

    fn run(text: &'static str) -> Lattice {
        let dict = Dictionary::new();
        let inflection = InflectionEngine::new();
        let index = CodepointIndex::new(text);
        let classes: Vec<_> = index.chars().iter().map(|&c| classify(c)).collect();
        tokenize(text, &index, &classes, &dict, &inflection)
    }

    #[test]
    fn lattice_is_valid_for_a_simple_sentence() {
        let lattice = run("水を飲む");
        assert!(lattice.is_valid());
    }

    #[test]
    fn every_position_has_at_least_one_edge() {
        let lattice = run("書いて");
        for p in 0..3 {
            assert!(!lattice.edges_at(p).is_empty(), "no edges starting at {p}");
        }
    }
}
