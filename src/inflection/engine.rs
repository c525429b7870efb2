//! The inflection engine: reverse analysis of a conjugated surface form
//! into candidate (base form, verb type, confidence) tuples (§4.4).
//!
//! Peels auxiliary entries off the tail of a surface, recursing on the
//! remaining prefix with the constraint that it must `provide` the
//! peeled auxiliary's `required_conn`; the recursion terminates by
//! matching a verb ending whose `provides_conn` satisfies the
//! outstanding requirement. Also attempts direct stem matching against
//! the original surface for base/renyokei/imperative forms.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::conjugation::conn::{self, ConnId};
use crate::conjugation::VerbType;
use crate::debug::suzume_debug;
use crate::inflection::aux_table::AUXILIARIES;
use crate::inflection::confidence::{self, ConfidenceInput};
use crate::inflection::verb_ending::{VerbEnding, VERB_ENDINGS};

/// One reverse-analysis result: a candidate (base form, stem, suffix
/// chain, verb type, confidence) tuple.
#[derive(Debug, Clone, PartialEq)]
pub struct InflectionCandidate {
    pub base_form: String,
    pub stem: String,
    pub suffix_chain: String,
    pub verb_type: VerbType,
    pub confidence: f64,
    pub pattern: &'static str,
}

/// Minimum confidence for a candidate to survive into the candidate
/// generators as a lattice edge (§4.4). Some generators apply a stricter,
/// category-specific threshold on top of this.
pub const MIN_CONFIDENCE: f64 = 0.5;

/// Reverse-conjugation engine with a surface-keyed memoization cache.
///
/// The cache is the one piece of shared mutable state in the core (§5):
/// readers take a shared lock, writers an exclusive one, so concurrent
/// cache hits never serialize on each other.
pub struct InflectionEngine {
    cache: RwLock<HashMap<String, Vec<InflectionCandidate>>>,
}

impl Default for InflectionEngine {
    fn default() -> Self {
        InflectionEngine {
            cache: RwLock::new(HashMap::new()),
        }
    }
}

impl InflectionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every inflection candidate for `surface`, sorted by
    /// descending confidence (stable: ties preserve discovery order) and
    /// deduplicated on `(base_form, verb_type)`.
    pub fn analyze(&self, surface: &str) -> Vec<InflectionCandidate> {
        if let Some(hit) = self.cache.read().unwrap().get(surface) {
            return hit.clone();
        }
        let result = analyze_uncached(surface);
        self.cache
            .write()
            .unwrap()
            .insert(surface.to_string(), result.clone());
        result
    }
}

fn analyze_uncached(surface: &str) -> Vec<InflectionCandidate> {
    let mut out = Vec::new();
    decompose(surface, None, "", &mut out);

    let mut seen = std::collections::HashSet::new();
    out.retain(|c| seen.insert((c.base_form.clone(), c.verb_type)));
    out.sort_by(|a, b| b.confidence.partial_cmp(&a.confidence).unwrap_or(std::cmp::Ordering::Equal));
    out
}

/// Recursively decomposes `remainder`, accumulating peeled auxiliary
/// surfaces into `suffix_chain` (outermost-first concatenation order, so
/// it reads naturally: て+いる → "ている"). `required` is `None` only at
/// the top-level call, where direct stem matching against base/renyokei
/// (and specific imperative forms) is attempted in addition to auxiliary
/// peeling.
fn decompose(remainder: &str, required: Option<ConnId>, suffix_chain: &str, out: &mut Vec<InflectionCandidate>) {
    try_verb_ending_match(remainder, required, suffix_chain, out);

    for aux in AUXILIARIES {
        if remainder.len() <= aux.surface.len() {
            continue;
        }
        if !remainder.ends_with(aux.surface) {
            continue;
        }
        let prefix = &remainder[..remainder.len() - aux.surface.len()];
        let mut chain = aux.surface.to_string();
        chain.push_str(suffix_chain);
        decompose(prefix, Some(aux.required_conn), &chain, out);
    }
}

fn try_verb_ending_match(remainder: &str, required: Option<ConnId>, suffix_chain: &str, out: &mut Vec<InflectionCandidate>) {
    for ending in VERB_ENDINGS {
        match required {
            Some(c) => {
                if ending.provides_conn != c {
                    continue;
                }
            }
            None => {
                if !is_direct_match_form(ending) {
                    continue;
                }
            }
        }
        if !remainder.ends_with(ending.suffix) {
            continue;
        }
        let stem = &remainder[..remainder.len() - ending.suffix.len()];
        if let Some(candidate) = build_candidate(stem, ending, suffix_chain) {
            out.push(candidate);
        }
    }
}

/// Forms considered for direct (non-auxiliary-mediated) stem matching:
/// base, renyokei, and the Suru/Ichidan/Kuru imperatives (other
/// imperatives collide with the conditional form and are excluded).
pub(crate) fn is_direct_match_form(ending: &VerbEnding) -> bool {
    if ending.provides_conn == conn::VERB_BASE || ending.provides_conn == conn::VERB_RENYOKEI {
        return true;
    }
    if ending.provides_conn == conn::VERB_MEIREIKEI {
        return matches!(ending.verb_type, VerbType::Suru | VerbType::Ichidan | VerbType::Kuru);
    }
    false
}

fn build_candidate(stem: &str, ending: &VerbEnding, suffix_chain: &str) -> Option<InflectionCandidate> {
    let stem_char_count = stem.chars().count();
    let empty_stem_allowed = matches!(
        (ending.verb_type, ending.suffix),
        (VerbType::Suru, "し") | (VerbType::Suru, "さ") | (VerbType::Suru, "しろ") | (VerbType::Suru, "せよ") | (VerbType::Suru, "すれ")
            | (VerbType::Kuru, "こ") | (VerbType::Kuru, "き") | (VerbType::Kuru, "こい") | (VerbType::Kuru, "くれ")
    );
    if stem_char_count == 0 && !empty_stem_allowed {
        return None;
    }
    if stem.starts_with('て') {
        return None;
    }

    let mut verb_type = ending.verb_type;
    let mut base_suffix = ending.base_suffix;

    if verb_type == VerbType::Ichidan {
        if stem.ends_with('っ') {
            return None;
        }
        let reconstructed_tail = stem.chars().last();
        if matches!(reconstructed_tail, Some('く') | Some('す') | Some('こ')) {
            // くる/する/こる collisions: these belong to Kuru/Suru/GodanRa,
            // not Ichidan, except the genuine 来+る -> Kuru remap below.
            if reconstructed_tail != Some('来') {
                return None;
            }
        }
        if stem.ends_with('来') {
            verb_type = VerbType::Kuru;
            base_suffix = "る";
        }
    }

    if verb_type == VerbType::Suru {
        if stem_char_count == 1 && ending.suffix.is_empty() {
            return None;
        }
        if stem_char_count >= 1 {
            let tail = stem.chars().last().unwrap();
            if is_particle_like(tail) {
                return None;
            }
        }
        let body: String = stem.chars().take(stem_char_count.saturating_sub(1)).collect();
        if body.contains('て') || body.contains('で') {
            return None;
        }
    }

    let base_form = format!("{stem}{base_suffix}");

    let confidence = confidence::score(&ConfidenceInput {
        stem,
        verb_type,
        suffix_chain,
        is_onbin: ending.is_onbin,
    });

    suzume_debug!(
        "inflection: stem={:?} verb_type={:?} base_form={:?} chain={:?} confidence={:.3}",
        stem,
        verb_type,
        base_form,
        suffix_chain,
        confidence
    );

    Some(InflectionCandidate {
        base_form,
        stem: stem.to_string(),
        suffix_chain: suffix_chain.to_string(),
        verb_type,
        confidence,
        pattern: ending.suffix,
    })
}

fn is_particle_like(c: char) -> bool {
    matches!(c, 'は' | 'が' | 'を' | 'に' | 'へ' | 'で' | 'と' | 'も' | 'や' | 'の')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kaite_inverts_to_kaku() {
        let engine = InflectionEngine::new();
        let candidates = engine.analyze("書いて");
        assert!(candidates
            .iter()
            .any(|c| c.base_form == "書く" && c.verb_type == VerbType::GodanKa));
    }

    #[test]
    fn taberareta_inverts_to_taberu() {
        let engine = InflectionEngine::new();
        let candidates = engine.analyze("食べられた");
        assert!(candidates
            .iter()
            .any(|c| c.base_form == "食べる" && c.verb_type == VerbType::Ichidan));
    }

    #[test]
    fn benkyoushinai_inverts_to_suru_compound() {
        let engine = InflectionEngine::new();
        let candidates = engine.analyze("勉強しない");
        assert!(candidates
            .iter()
            .any(|c| c.base_form == "勉強する" && c.verb_type == VerbType::Suru));
    }

    #[test]
    fn analysis_is_cached_and_stable() {
        let engine = InflectionEngine::new();
        let first = engine.analyze("話した");
        let second = engine.analyze("話した");
        assert_eq!(first, second);
    }

    #[test]
    fn all_confidences_are_within_bounds() {
        let engine = InflectionEngine::new();
        for candidate in engine.analyze("食べさせられた") {
            assert!(candidate.confidence >= confidence::FLOOR);
            assert!(candidate.confidence <= confidence::CEILING);
        }
    }

    #[test]
    fn ichidan_stem_ending_in_small_tsu_is_rejected() {
        // "かっる" is not a real word but exercises the onbin-in-Ichidan guard.
        let engine = InflectionEngine::new();
        for candidate in engine.analyze("かっる") {
            assert_ne!(candidate.verb_type, VerbType::Ichidan);
        }
    }
}
