//! Analyzer façade (§4.8): normalize, pretokenize, then per-span decode,
//! classify, build lattice, run Viterbi and emit morphemes, translating
//! offsets back to the caller's original coordinate system throughout.

use std::path::Path;

use crate::char_class::classify;
use crate::conjugation::ConjugationType;
use crate::dictionary::Dictionary;
use crate::error::SuzumeResult;
use crate::inflection::InflectionEngine;
use crate::lattice::{EdgeFlags, Lattice};
use crate::morpheme::Morpheme;
use crate::normalizer;
use crate::pos::Pos;
use crate::pretokenizer;
use crate::scorer::Scorer;
use crate::tokenizer;
use crate::utf8::CodepointIndex;
use crate::viterbi;

/// Owns the dictionary, inflection engine, and scorer for repeated calls
/// to [`Analyzer::analyze`]. Each instance has no shared mutable state
/// with any other instance, so concurrent analyses on disjoint analyzers
/// are safe without any synchronization at this layer (§5); the only
/// shared mutable state in the whole crate is the inflection engine's
/// internal memoization cache, which guards its own lock.
pub struct Analyzer {
    dictionary: Dictionary,
    inflection: InflectionEngine,
    scorer: Scorer,
}

impl Analyzer {
    pub fn new() -> Self {
        Analyzer {
            dictionary: Dictionary::new(),
            inflection: InflectionEngine::new(),
            scorer: Scorer::default(),
        }
    }

    /// Searches the standard auto-load paths (§6) for a binary core
    /// dictionary and, if found, loads it on top of the built-in seed
    /// dictionary.
    pub fn try_auto_load_core_dictionary(&mut self) -> SuzumeResult<Option<std::path::PathBuf>> {
        self.dictionary.try_auto_load_core_dictionary()
    }

    /// Adds a CSV/TSV user dictionary layer, returning the number of
    /// entries loaded.
    pub fn add_user_dictionary(&mut self, path: &Path) -> SuzumeResult<usize> {
        self.dictionary.add_user_dictionary(path)
    }

    pub fn load_binary_user_dictionary(&mut self, path: &Path) -> SuzumeResult<()> {
        self.dictionary.load_binary_user_dictionary(path)
    }

    /// Analyzes `text`, returning the morphemes in left-to-right order.
    pub fn analyze(&self, text: &str) -> SuzumeResult<Vec<Morpheme>> {
        Ok(self.analyze_debug(text)?.0)
    }

    /// Like [`Analyzer::analyze`] but also returns the lattice built for
    /// the last analyzed span, for tooling and debugging (`--debug`).
    /// When the input pretokenizes into more than one span, only the
    /// final span's lattice is kept.
    pub fn analyze_debug(&self, text: &str) -> SuzumeResult<(Vec<Morpheme>, Lattice)> {
        let normalized = normalizer::normalize(text)?;
        let pretokenized = pretokenizer::split(&normalized.text, &[]);
        let normalized_index = CodepointIndex::new(&normalized.text);
        let original_index = CodepointIndex::new(text);

        let mut items: Vec<(usize, Morpheme)> = Vec::new();
        let mut last_lattice = Lattice::new(0);

        for fixed in &pretokenized.fixed {
            let morpheme = self.fixed_token_morpheme(fixed, &normalized_index, &normalized.offsets, &original_index);
            items.push((fixed.start, morpheme));
        }

        for span in &pretokenized.spans {
            let span_text = normalized_index.slice(&normalized.text, span.start, span.end);
            let span_index = CodepointIndex::new(span_text);
            let classes: Vec<_> = span_index.chars().iter().map(|&c| classify(c)).collect();

            let lattice = tokenizer::tokenize(span_text, &span_index, &classes, &self.dictionary, &self.inflection);

            let morphemes = if lattice.is_valid() {
                let path = viterbi::solve(&lattice, &self.scorer);
                path.into_iter()
                    .map(|edge_id| {
                        let edge = lattice.edge(edge_id);
                        self.edge_to_morpheme(edge, span.start, &normalized_index, &normalized.offsets, &original_index)
                    })
                    .collect::<Vec<_>>()
            } else {
                vec![self.fallback_morpheme(span_text, span.start, &normalized_index, &normalized.offsets, &original_index)]
            };

            for morpheme in morphemes {
                items.push((span.start, morpheme));
            }

            last_lattice = lattice;
        }

        items.sort_by_key(|(order, _)| *order);
        Ok((items.into_iter().map(|(_, m)| m).collect(), last_lattice))
    }

    fn fixed_token_morpheme(
        &self,
        fixed: &pretokenizer::FixedToken,
        normalized_index: &CodepointIndex,
        offsets: &normalizer::OffsetMap,
        original_index: &CodepointIndex,
    ) -> Morpheme {
        let (start, end) =
            translate_char_range(fixed.start, fixed.end, normalized_index, offsets, original_index);
        Morpheme {
            surface: fixed.surface.clone(),
            pos: fixed.pos,
            lemma: fixed.surface.clone(),
            reading: String::new(),
            start,
            end,
            conj_type: ConjugationType::None,
            is_dictionary: false,
            is_user_dict: false,
            is_formal_noun: false,
            is_low_info: false,
            is_unknown: false,
            score: 0.0,
        }
    }

    fn edge_to_morpheme(
        &self,
        edge: &crate::lattice::Edge,
        span_offset: usize,
        normalized_index: &CodepointIndex,
        offsets: &normalizer::OffsetMap,
        original_index: &CodepointIndex,
    ) -> Morpheme {
        let (start, end) = translate_char_range(
            span_offset + edge.start,
            span_offset + edge.end,
            normalized_index,
            offsets,
            original_index,
        );
        let lemma = edge.lemma.clone().unwrap_or_else(|| edge.surface.clone());
        let reading = self
            .dictionary
            .lookup(&edge.surface)
            .into_iter()
            .find(|hit| hit.entry.lemma == lemma)
            .map(|hit| hit.entry.reading.clone())
            .unwrap_or_default();
        Morpheme {
            surface: edge.surface.clone(),
            pos: edge.pos,
            lemma,
            reading,
            start,
            end,
            conj_type: edge.conj_type.unwrap_or(ConjugationType::None),
            is_dictionary: edge.flags.contains(EdgeFlags::FROM_DICTIONARY),
            is_user_dict: edge.flags.contains(EdgeFlags::FROM_USER_DICT),
            is_formal_noun: edge.flags.contains(EdgeFlags::FROM_FORMAL_NOUN),
            is_low_info: edge.flags.contains(EdgeFlags::FROM_LOW_INFO),
            is_unknown: edge.flags.contains(EdgeFlags::UNKNOWN),
            score: edge.cost,
        }
    }

    fn fallback_morpheme(
        &self,
        span_text: &str,
        span_offset: usize,
        normalized_index: &CodepointIndex,
        offsets: &normalizer::OffsetMap,
        original_index: &CodepointIndex,
    ) -> Morpheme {
        let span_index = CodepointIndex::new(span_text);
        let (start, end) = translate_char_range(
            span_offset,
            span_offset + span_index.len(),
            normalized_index,
            offsets,
            original_index,
        );
        Morpheme {
            surface: span_text.to_string(),
            pos: Pos::Noun,
            lemma: span_text.to_string(),
            reading: String::new(),
            start,
            end,
            conj_type: ConjugationType::None,
            is_dictionary: false,
            is_user_dict: false,
            is_formal_noun: false,
            is_low_info: false,
            is_unknown: true,
            score: 0.0,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Translates a `[start, end)` character range in normalized-text space
/// into the original text's character-offset space: normalized char index
/// -> normalized byte offset -> (via [`normalizer::OffsetMap`]) original
/// byte offset -> original char index.
fn translate_char_range(
    start: usize,
    end: usize,
    normalized_index: &CodepointIndex,
    offsets: &normalizer::OffsetMap,
    original_index: &CodepointIndex,
) -> (usize, usize) {
    let norm_start_byte = normalized_index.byte_offset(start);
    let norm_end_byte = normalized_index.byte_offset(end);
    let orig_start_byte = offsets.correct(norm_start_byte);
    let orig_end_byte = offsets.correct(norm_end_byte);
    let start_char = original_index.char_index_of_byte(orig_start_byte).unwrap_or(start);
    let end_char = original_index.char_index_of_byte(orig_end_byte).unwrap_or(end);
    (start_char, end_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyzes_a_simple_sentence_into_nonoverlapping_morphemes() {
        let analyzer = Analyzer::new();
        let morphemes = analyzer.analyze("水を飲む").unwrap();
        assert!(!morphemes.is_empty());
        for window in morphemes.windows(2) {
            assert!(window[0].end <= window[1].start);
        }
        assert!(morphemes.iter().all(|m| m.start < m.end));
    }

    #[test]
    fn empty_input_produces_no_morphemes() {
        let analyzer = Analyzer::new();
        let morphemes = analyzer.analyze("").unwrap();
        assert!(morphemes.is_empty());
    }

    #[test]
    fn single_character_input_produces_one_morpheme() {
        let analyzer = Analyzer::new();
        let morphemes = analyzer.analyze("水").unwrap();
        assert_eq!(morphemes.len(), 1);
        assert_eq!(morphemes[0].start, 0);
        assert_eq!(morphemes[0].end, 1);
    }

    #[test]
    fn kaku_verb_resolves_to_its_dictionary_base_form() {
        let analyzer = Analyzer::new();
        let morphemes = analyzer.analyze("書いて").unwrap();
        assert!(morphemes.iter().any(|m| m.lemma == "書く"));
    }
}
