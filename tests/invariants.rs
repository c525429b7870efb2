//! Universal invariants the analyzer must hold for any input (§7): full
//! surface coverage, well-formed offsets, Viterbi optimality on a known
//! lattice, inflection cache idempotence, confidence bounds, and the
//! empty/singleton edge cases.

use suzume::inflection::InflectionEngine;
use suzume::lattice::{EdgeFlags, Lattice};
use suzume::pos::Pos;
use suzume::scorer::Scorer;
use suzume::viterbi::{self, CostModel};
use suzume::Analyzer;

#[test]
fn empty_input_yields_no_morphemes() {
    let morphemes = Analyzer::new().analyze("").unwrap();
    assert!(morphemes.is_empty());
}

#[test]
fn single_character_input_yields_one_morpheme() {
    let morphemes = Analyzer::new().analyze("猫").unwrap();
    assert_eq!(morphemes.len(), 1);
    assert_eq!(morphemes[0].start, 0);
    assert_eq!(morphemes[0].end, 1);
}

#[test]
fn morphemes_cover_the_input_without_gaps_or_overlaps() {
    let text = "私は日本語を勉強しています";
    let morphemes = Analyzer::new().analyze(text).unwrap();
    assert!(!morphemes.is_empty());
    assert_eq!(morphemes[0].start, 0);
    let char_count = text.chars().count();
    assert_eq!(morphemes.last().unwrap().end, char_count);
    for window in morphemes.windows(2) {
        assert_eq!(window[0].end, window[1].start, "gap or overlap between morphemes");
    }
    for morpheme in &morphemes {
        assert!(morpheme.start < morpheme.end);
        assert!(morpheme.end <= char_count);
    }
}

#[test]
fn viterbi_picks_the_lower_cost_cover() {
    struct FlatCost;
    impl CostModel for FlatCost {
        fn word_cost(&self, edge: &suzume::lattice::Edge) -> f64 {
            edge.cost
        }
        fn connection_cost(&self, _prev: Option<&suzume::lattice::Edge>, _next: &suzume::lattice::Edge) -> f64 {
            0.0
        }
    }

    let mut lattice = Lattice::new(4);
    lattice.add_edge("abcd", 0, 4, Pos::Noun, 10.0, EdgeFlags::NONE, None, None);
    lattice.add_edge("ab", 0, 2, Pos::Noun, 1.0, EdgeFlags::NONE, None, None);
    lattice.add_edge("cd", 2, 4, Pos::Noun, 1.0, EdgeFlags::NONE, None, None);

    let path = viterbi::solve(&lattice, &FlatCost);
    let cost = viterbi::path_cost(&lattice, &FlatCost, &path);
    assert_eq!(cost, 2.0);
    assert_eq!(path.len(), 2);
}

#[test]
fn inflection_cache_is_idempotent() {
    let engine = InflectionEngine::new();
    let first = engine.analyze("食べさせられた");
    let second = engine.analyze("食べさせられた");
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.base_form, b.base_form);
        assert_eq!(a.verb_type, b.verb_type);
        assert!((a.confidence - b.confidence).abs() < f64::EPSILON);
    }
}

#[test]
fn inflection_confidences_stay_within_bounds() {
    let engine = InflectionEngine::new();
    for surface in ["書いて", "食べさせられた", "飲んだ", "高かった", "勉強しない"] {
        for candidate in engine.analyze(surface) {
            assert!(candidate.confidence >= 0.0);
            assert!(candidate.confidence <= 1.0);
        }
    }
}

#[test]
fn scorer_prefers_dictionary_edges_over_unknown_ones() {
    let scorer = Scorer::default();
    let dict_edge = suzume::lattice::Edge {
        start: 0,
        end: 1,
        surface: "水".to_string(),
        pos: Pos::Noun,
        cost: 1.0,
        flags: EdgeFlags::FROM_DICTIONARY,
        lemma: Some("水".to_string()),
        conj_type: None,
    };
    let unknown_edge = suzume::lattice::Edge {
        flags: EdgeFlags::UNKNOWN,
        ..dict_edge.clone()
    };
    assert!(scorer.word_cost(&dict_edge) < scorer.word_cost(&unknown_edge));
}
