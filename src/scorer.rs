//! The scorer: per-edge word cost and bigram connection cost (§4.6).
//!
//! `word_cost` combines an edge's intrinsic dictionary/generator cost, a
//! POS prior, and a cascade of linguistic adjustments. `connection_cost`
//! looks up a 13x13 POS bigram table, flat-indexed the way the teacher's
//! `ConnectionCostMatrix::cost` indexes its own table
//! (`lindera-core/src/connection.rs`: `backward_id + forward_id *
//! backward_size`), then applies per-pair overrides and pluggable
//! connection rules.

use std::collections::HashMap;

use crate::char_class::{classify, CharClass};
use crate::debug::suzume_debug;
use crate::inflection::confidence::{is_a_row, is_e_row};
use crate::lattice::{Edge, EdgeFlags};
use crate::pos::Pos;
use crate::viterbi::CostModel;

const N: usize = Pos::BIGRAM_SIZE;

/// Literal 13x13 bigram cost table (§9: "a literal constant"), flat-indexed
/// `row * N + col` where row is the previous edge's POS and col is the
/// next edge's. Negative entries are bonuses (favored adjacency), positive
/// entries are penalties. Indices follow [`Pos::bigram_index`]: Noun, Verb,
/// Adjective, Adverb, Particle, Auxiliary, Conjunction, Determiner,
/// Pronoun, Prefix, Suffix, Symbol, Other/Unknown.
#[rustfmt::skip]
const BIGRAM: [[f64; N]; N] = [
    // to:      Noun  Verb  Adj   Adv   Part  Aux   Conj  Det   Pron  Pref  Suf   Sym   Other
    /* Noun  */ [0.3,  0.1, -0.1,  0.1, -0.8,  0.0,  0.2,  0.0,  0.2,  0.1, -0.6,  0.0,  0.3],
    /* Verb  */ [0.2,  0.0,  0.1,  0.1, -0.7, -0.3,  0.2,  0.0,  0.1,  0.1,  0.1,  0.0,  0.3],
    /* Adj   */ [-0.3,  0.2,  0.1,  0.1, -0.6,  0.0,  0.2,  0.0,  0.1,  0.1,  0.2,  0.0,  0.3],
    /* Adv   */ [0.2,  -0.2,  0.0,  0.1,  0.2,  0.0,  0.2,  0.0,  0.2,  0.1,  0.2,  0.0,  0.3],
    /* Part  */ [-0.2, -0.3, -0.3,  0.1,  0.4,  0.0,  0.2,  0.0, -0.2,  0.1,  0.2,  0.1,  0.3],
    /* Aux   */ [0.2,   0.1,  0.1,  0.1,  0.0, -0.2,  0.2,  0.0,  0.2,  0.1,  0.2,  0.0,  0.3],
    /* Conj  */ [0.1,   0.1,  0.1,  0.1,  0.2,  0.0,  0.2,  0.0,  0.1,  0.1,  0.2,  0.0,  0.3],
    /* Det   */ [-0.3,  0.3,  0.1,  0.3,  0.3,  0.0,  0.2,  0.0,  0.3,  0.1,  0.2,  0.0,  0.3],
    /* Pron  */ [0.1,   0.1,  0.1,  0.1, -0.4,  0.0,  0.2,  0.0,  0.2,  0.1,  0.2,  0.0,  0.3],
    /* Pref  */ [-0.4,  0.2,  0.1,  0.2,  0.2,  0.0,  0.2,  0.0,  0.2,  0.1,  0.2,  0.0,  0.3],
    /* Suf   */ [0.2,   0.1,  0.1,  0.1,  0.0,  0.0,  0.2,  0.0,  0.2,  0.1,  0.2,  0.0,  0.3],
    /* Sym   */ [0.1,   0.1,  0.1,  0.1,  0.1,  0.0,  0.1,  0.0,  0.1,  0.1,  0.1,  0.0,  0.2],
    /* Other */ [0.2,   0.2,  0.2,  0.2,  0.2,  0.1,  0.2,  0.1,  0.2,  0.2,  0.2,  0.1,  0.2],
];

fn pos_prior(pos: Pos) -> f64 {
    match pos {
        Pos::Noun => 0.0,
        Pos::Verb => 0.2,
        Pos::Adjective => 0.3,
        Pos::Adverb => 0.4,
        Pos::Particle => 0.1,
        Pos::Auxiliary => 0.2,
        Pos::Pronoun => 0.1,
        _ => 0.5,
    }
}

/// Inclusive character-length band considered "optimal" for a POS, drawn
/// from typical Japanese word lengths: two-to-three-character nouns and
/// verbs are the common case, particles are almost always one character.
fn optimal_length_band(pos: Pos) -> Option<(usize, usize)> {
    match pos {
        Pos::Noun => Some((2, 3)),
        Pos::Verb => Some((2, 4)),
        Pos::Adjective => Some((2, 4)),
        Pos::Particle => Some((1, 1)),
        _ => None,
    }
}

/// A pluggable adjustment to the bigram connection cost, encoding a
/// cross-cutting linguistic restriction that doesn't fit neatly into the
/// flat POS table (§4.6: "connection rules that encode particle
/// restrictions, copula handling, suffix attachment, and so on").
pub trait ConnectionRule: Send + Sync {
    fn adjust(&self, prev: Option<&Edge>, next: &Edge) -> f64;
}

/// Two adjacent particles are almost never correct Japanese (particles
/// attach to content words, not to each other).
struct NoAdjacentParticles;
impl ConnectionRule for NoAdjacentParticles {
    fn adjust(&self, prev: Option<&Edge>, next: &Edge) -> f64 {
        match prev {
            Some(p) if p.pos == Pos::Particle && next.pos == Pos::Particle => 1.5,
            _ => 0.0,
        }
    }
}

/// A bare suffix morpheme needs a preceding noun or another suffix to
/// attach to; anything else is an unlikely join.
struct SuffixAttachment;
impl ConnectionRule for SuffixAttachment {
    fn adjust(&self, prev: Option<&Edge>, next: &Edge) -> f64 {
        if next.pos != Pos::Suffix {
            return 0.0;
        }
        match prev {
            Some(p) if p.pos == Pos::Noun || p.pos == Pos::Suffix => -0.3,
            _ => 0.8,
        }
    }
}

fn default_rules() -> Vec<Box<dyn ConnectionRule>> {
    vec![Box::new(NoAdjacentParticles), Box::new(SuffixAttachment)]
}

/// Tunable knobs exposed per §9's Open Question resolution: scorer penalty
/// constants are options, not hard-coded, and bigram pairs may be
/// overridden per specific POS pair (mirroring the source's
/// `ScorerOptions.BigramOverrides`).
pub struct ScorerOptions {
    pub bigram_overrides: HashMap<(Pos, Pos), f64>,
    pub rules: Vec<Box<dyn ConnectionRule>>,
    pub dictionary_bonus: f64,
    pub user_dict_bonus: f64,
    pub formal_noun_penalty: f64,
    pub low_info_penalty: f64,
    pub single_kanji_penalty: f64,
    pub single_hiragana_penalty: f64,
    pub optimal_length_bonus: f64,
}

impl Default for ScorerOptions {
    fn default() -> Self {
        ScorerOptions {
            bigram_overrides: HashMap::new(),
            rules: default_rules(),
            dictionary_bonus: -1.0,
            user_dict_bonus: -2.0,
            formal_noun_penalty: 1.0,
            low_info_penalty: 0.5,
            single_kanji_penalty: 2.0,
            single_hiragana_penalty: 1.5,
            optimal_length_bonus: -0.5,
        }
    }
}

/// Particles that a single hiragana character may legitimately be without
/// triggering the single-hiragana penalty.
const PARTICLE_EXCEPTIONS: &[&str] = &["を", "が", "は", "に", "で", "と", "の", "も", "へ", "や"];

/// Implements [`CostModel`] with the full linguistic rule cascade of §4.6.
pub struct Scorer {
    options: ScorerOptions,
}

impl Scorer {
    pub fn new(options: ScorerOptions) -> Self {
        Scorer { options }
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Scorer::new(ScorerOptions::default())
    }
}

impl CostModel for Scorer {
    fn word_cost(&self, edge: &Edge) -> f64 {
        let mut cost = edge.cost + pos_prior(edge.pos);
        let char_len = edge.num_chars();

        if edge.flags.contains(EdgeFlags::FROM_DICTIONARY) {
            cost += self.options.dictionary_bonus;
            suzume_debug!("scorer: {:?} dictionary bonus {:.2}", edge.surface, self.options.dictionary_bonus);
        }
        if edge.flags.contains(EdgeFlags::FROM_USER_DICT) {
            cost += self.options.user_dict_bonus;
            suzume_debug!("scorer: {:?} user-dict bonus {:.2}", edge.surface, self.options.user_dict_bonus);
        }
        if edge.flags.contains(EdgeFlags::FROM_FORMAL_NOUN) {
            cost += self.options.formal_noun_penalty;
            suzume_debug!("scorer: {:?} formal-noun penalty +{:.2}", edge.surface, self.options.formal_noun_penalty);
        }
        if edge.flags.contains(EdgeFlags::FROM_LOW_INFO) {
            cost += self.options.low_info_penalty;
            suzume_debug!("scorer: {:?} low-info penalty +{:.2}", edge.surface, self.options.low_info_penalty);
        }

        if char_len == 1 && edge.pos == Pos::Noun && classify(edge.surface.chars().next().unwrap()) == CharClass::Kanji {
            cost += self.options.single_kanji_penalty;
            suzume_debug!("scorer: {:?} single-kanji penalty +{:.2}", edge.surface, self.options.single_kanji_penalty);
        }
        if char_len == 1 && classify(edge.surface.chars().next().unwrap()) == CharClass::Hiragana
            && !PARTICLE_EXCEPTIONS.contains(&edge.surface.as_str())
        {
            cost += self.options.single_hiragana_penalty;
            suzume_debug!("scorer: {:?} single-hiragana penalty +{:.2}", edge.surface, self.options.single_hiragana_penalty);
        }

        if let Some((lo, hi)) = optimal_length_band(edge.pos) {
            if char_len >= lo && char_len <= hi {
                cost += self.options.optimal_length_bonus;
                suzume_debug!("scorer: {:?} optimal-length bonus {:.2}", edge.surface, self.options.optimal_length_bonus);
            }
        }

        cost += unknown_adjustment(edge);
        cost
    }

    fn connection_cost(&self, prev: Option<&Edge>, next: &Edge) -> f64 {
        let row = prev.map(|e| e.pos).unwrap_or(Pos::Other).bigram_index();
        let col = next.pos.bigram_index();
        let prev_pos = prev.map(|e| e.pos).unwrap_or(Pos::Other);

        let mut cost = match self.options.bigram_overrides.get(&(prev_pos, next.pos)) {
            Some(&override_cost) => override_cost,
            None => BIGRAM[row][col],
        };

        for rule in &self.options.rules {
            cost += rule.adjust(prev, next);
        }
        cost
    }
}

/// The unknown-word-specific adjustments of §4.6's table: a grab bag of
/// shape heuristics that fire only on generator-produced (non-dictionary)
/// edges, to suppress implausible unknown-word splits without touching
/// genuine dictionary hits.
fn unknown_adjustment(edge: &Edge) -> f64 {
    if !edge.flags.contains(EdgeFlags::UNKNOWN) {
        return 0.0;
    }

    let mut adj = 0.0;
    let surface = edge.surface.as_str();
    let lemma = edge.lemma.as_deref().unwrap_or(surface);

    if edge.pos == Pos::Adjective {
        if surface.ends_with("くない") {
            adj -= 0.4;
            suzume_debug!("scorer: {:?} unknown i-adj くない bonus -0.4", surface);
        }
        if surface.ends_with("そう") && !lemma.ends_with('い') {
            adj += 0.6;
            suzume_debug!("scorer: {:?} invalid-adj-そう penalty +0.6", surface);
        }
        if lemma.ends_with("たい") && lemma.chars().count() <= 1 {
            adj += 0.6;
            suzume_debug!("scorer: {:?} invalid-たい pattern penalty +0.6", surface);
        }
        if surface.ends_with("んどい") || surface.ends_with("とい") {
            adj += 0.5;
            suzume_debug!("scorer: {:?} verb-contraction-as-adj penalty +0.5", surface);
        }
        if surface == "しまい" || surface == "じまい" {
            adj += 0.7;
            suzume_debug!("scorer: {:?} しまい/じまい-as-adj penalty +0.7", surface);
        }
        if let Some(stem) = lemma.strip_suffix("ない") {
            if let Some(last) = stem.chars().last() {
                if is_a_row(last) || is_e_row(last) {
                    adj += 0.3;
                    suzume_debug!("scorer: {:?} verb-nai pattern penalty +0.3", surface);
                }
            }
        }
    }

    if edge.pos == Pos::Adjective || edge.pos == Pos::Verb {
        if contains_verb_aux_compound(surface) {
            adj += 0.4;
            suzume_debug!("scorer: {:?} verb-aux-in-adj / unified-verb-aux penalty +0.4", surface);
        }
    }

    if edge.pos == Pos::Verb {
        if surface.ends_with("たいらしい") {
            adj += 0.5;
            suzume_debug!("scorer: {:?} verb-tai-rashii split penalty +0.5", surface);
        }
        if looks_like_suru_verb(surface) && surface.ends_with("さん") {
            adj += 0.6;
            suzume_debug!("scorer: {:?} verb-さん honorific penalty +0.6", surface);
        }
        let chars: Vec<char> = surface.chars().collect();
        if chars.len() == 2 && chars.iter().all(|&c| classify(c) == CharClass::Hiragana) && chars.last() == Some(&'ん') {
            adj += 0.4;
            suzume_debug!("scorer: {:?} verb-contracted-neg short-stem penalty +0.4", surface);
        }
    }

    adj
}

fn contains_verb_aux_compound(surface: &str) -> bool {
    const MARKERS: &[&str] = &["んでい", "てい", "ちゃい", "じゃい"];
    MARKERS.iter().any(|m| surface.contains(m))
}

fn looks_like_suru_verb(surface: &str) -> bool {
    surface.contains("し") || surface.contains("する")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conjugation::ConjugationType;

    fn dict_edge(surface: &str, pos: Pos) -> Edge {
        Edge {
            start: 0,
            end: surface.chars().count(),
            surface: surface.to_string(),
            pos,
            cost: 3.0,
            flags: EdgeFlags::FROM_DICTIONARY,
            lemma: Some(surface.to_string()),
            conj_type: Some(ConjugationType::None),
        }
    }

    fn unknown_edge(surface: &str, pos: Pos, lemma: &str) -> Edge {
        Edge {
            start: 0,
            end: surface.chars().count(),
            surface: surface.to_string(),
            pos,
            cost: 3.0,
            flags: EdgeFlags::UNKNOWN,
            lemma: Some(lemma.to_string()),
            conj_type: None,
        }
    }

    #[test]
    fn dictionary_edges_are_cheaper_than_identical_unknown_edges() {
        let scorer = Scorer::default();
        let dict = dict_edge("水", Pos::Noun);
        let mut unk = dict_edge("水", Pos::Noun);
        unk.flags = EdgeFlags::UNKNOWN;
        assert!(scorer.word_cost(&dict) < scorer.word_cost(&unk));
    }

    #[test]
    fn single_kanji_noun_is_penalized_relative_to_two_char() {
        let scorer = Scorer::default();
        let one = dict_edge("水", Pos::Noun);
        let two = dict_edge("水道", Pos::Noun);
        assert!(scorer.word_cost(&one) > scorer.word_cost(&two) - 3.0);
    }

    #[test]
    fn kunai_unknown_adjective_gets_a_bonus() {
        let scorer = Scorer::default();
        let with_bonus = unknown_edge("高くない", Pos::Adjective, "高い");
        let base_cost = with_bonus.cost + pos_prior(Pos::Adjective);
        assert!(scorer.word_cost(&with_bonus) < base_cost);
    }

    #[test]
    fn adjacent_particles_are_penalized() {
        let scorer = Scorer::default();
        let prev = dict_edge("を", Pos::Particle);
        let next = dict_edge("は", Pos::Particle);
        let baseline = scorer.connection_cost(None, &next);
        assert!(scorer.connection_cost(Some(&prev), &next) > baseline);
    }

    #[test]
    fn bigram_override_replaces_table_lookup() {
        let mut options = ScorerOptions::default();
        options.bigram_overrides.insert((Pos::Noun, Pos::Verb), -5.0);
        let scorer = Scorer::new(options);
        let prev = dict_edge("水", Pos::Noun);
        let next = dict_edge("飲む", Pos::Verb);
        assert!(scorer.connection_cost(Some(&prev), &next) < -4.0);
    }
}
