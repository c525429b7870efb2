//! Normalizer external collaborator (§6): NFKC-style folding so that, for
//! instance, half-width katakana and full-width ASCII collapse to their
//! canonical forms before the analyzer ever sees the text.
//!
//! Mirrors `lindera`'s `UnicodeNormalizeCharacterFilter`
//! (`lindera/src/character_filter/unicode_normalize.rs`), including its
//! choice to normalize grapheme cluster by grapheme cluster rather than
//! codepoint by codepoint, minus the pluggable NFC/NFD/NFKD modes and
//! JSON config the filter chain needs: the core only ever normalizes one
//! way.

use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::{SuzumeErrorKind, SuzumeResult};

/// Byte-offset correction table: `offsets[i]` is a position in the
/// *normalized* string at which the cumulative length delta changes to
/// `diffs[i]`. Used to translate a morpheme's normalized-text offsets
/// back into the caller's original coordinate system, the same
/// bookkeeping `add_offset_diff`/`correct_offset` perform in lindera's
/// character filter chain.
#[derive(Debug, Clone, Default)]
pub struct OffsetMap {
    offsets: Vec<usize>,
    diffs: Vec<i64>,
}

impl OffsetMap {
    fn push(&mut self, offset: usize, diff: i64) {
        self.offsets.push(offset);
        self.diffs.push(diff);
    }

    /// Corrects a byte offset in normalized-text space back to the
    /// original text's byte-offset space.
    pub fn correct(&self, normalized_offset: usize) -> usize {
        let mut cumulative: i64 = 0;
        for (&offset, &diff) in self.offsets.iter().zip(self.diffs.iter()) {
            if offset > normalized_offset {
                break;
            }
            cumulative += diff;
        }
        (normalized_offset as i64 + cumulative).max(0) as usize
    }
}

/// Result of normalizing a span of input text.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub text: String,
    pub offsets: OffsetMap,
}

/// Performs NFKC normalization, which folds half-width katakana to
/// full-width, full-width ASCII digits/letters to half-width, and other
/// compatibility-equivalent forms to their canonical representation.
///
/// Returns [`SuzumeErrorKind::NormalizationFailure`] only in the
/// degenerate case of a normalization producing a result that itself
/// fails UTF-8 validation, which cannot happen via `unicode-normalization`
/// but is kept as an explicit error path since the external-collaborator
/// contract in §6 allows normalization to fail.
pub fn normalize(text: &str) -> SuzumeResult<Normalized> {
    let mut out = String::with_capacity(text.len());
    let mut offsets = OffsetMap::default();
    let mut cumulative: i64 = 0;

    for grapheme in text.graphemes(true) {
        let normalized: String = grapheme.nfkc().collect();
        out.push_str(&normalized);
        let delta = normalized.len() as i64 - grapheme.len() as i64;
        if delta != 0 {
            cumulative += delta;
            offsets.push(out.len(), -cumulative);
        }
    }

    if !out.is_char_boundary(0) {
        return Err(SuzumeErrorKind::NormalizationFailure
            .with_error(anyhow::anyhow!("normalization produced invalid output")));
    }

    Ok(Normalized {
        text: out,
        offsets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_halfwidth_katakana_to_fullwidth() {
        let result = normalize("ｱｲｳｴｵ").unwrap();
        assert_eq!(result.text, "アイウエオ");
    }

    #[test]
    fn folds_fullwidth_ascii_to_halfwidth() {
        let result = normalize("Ａｂｃ１２３").unwrap();
        assert_eq!(result.text, "Abc123");
    }

    #[test]
    fn leaves_plain_japanese_untouched() {
        let result = normalize("飲む").unwrap();
        assert_eq!(result.text, "飲む");
    }

    #[test]
    fn offset_map_defaults_to_identity() {
        let result = normalize("普通のテキスト").unwrap();
        for i in 0..=result.text.len() {
            if result.text.is_char_boundary(i) {
                assert_eq!(result.offsets.correct(i), i);
            }
        }
    }
}
