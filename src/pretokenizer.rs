//! Pretokenizer external collaborator (§6): carves out spans that should
//! bypass the lattice entirely — URLs, email addresses, emoji runs, and
//! caller-supplied pre-tagged spans — and hands back the remaining spans
//! for the per-span analyzer pass.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::char_class::{classify, CharClass};
use crate::pos::Pos;
use crate::utf8::CodepointIndex;

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:https?|ftp)://[^\s<>\x22]+").expect("static URL regex is valid")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}")
        .expect("static email regex is valid")
});

/// A span of the original text that the pretokenizer has claimed and
/// tagged, bypassing morphological analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedToken {
    pub surface: String,
    pub start: usize,
    pub end: usize,
    pub pos: Pos,
}

/// A span of character positions `[start, end)` still awaiting analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzeSpan {
    pub start: usize,
    pub end: usize,
}

/// Output of [`split`]: fixed tokens and spans to analyze, both given as
/// character-position ranges, interleaved such that concatenating them in
/// `start`-sorted order covers the entire input with no gaps or overlaps.
#[derive(Debug, Clone, Default)]
pub struct PretokenizeResult {
    pub fixed: Vec<FixedToken>,
    pub spans: Vec<AnalyzeSpan>,
}

/// A caller-supplied span that should be emitted verbatim (e.g. a
/// named-entity anchor from an upstream pass) instead of analyzed.
#[derive(Debug, Clone, Copy)]
pub struct PreTaggedSpan {
    pub start: usize,
    pub end: usize,
    pub pos: Pos,
}

/// Splits `text` into fixed tokens (URLs, emails, emoji runs, and any
/// `pre_tagged` spans the caller already knows about) and the remaining
/// spans to run through the full analyzer pipeline.
pub fn split(text: &str, pre_tagged: &[PreTaggedSpan]) -> PretokenizeResult {
    let index = CodepointIndex::new(text);
    let n = index.len();

    // Collect claimed char ranges from every source, then sort and merge.
    let mut claims: Vec<(usize, usize, Pos)> = Vec::new();

    for m in URL_RE.find_iter(text) {
        if Url::parse(m.as_str()).is_ok() || m.as_str().starts_with("http") {
            if let (Some(s), Some(e)) = (
                index.char_index_of_byte(m.start()),
                index.char_index_of_byte(m.end()),
            ) {
                claims.push((s, e, Pos::Symbol));
            }
        }
    }
    for m in EMAIL_RE.find_iter(text) {
        if let (Some(s), Some(e)) = (
            index.char_index_of_byte(m.start()),
            index.char_index_of_byte(m.end()),
        ) {
            claims.push((s, e, Pos::Symbol));
        }
    }
    claims.extend(emoji_runs(index.chars()));
    for tag in pre_tagged {
        claims.push((tag.start, tag.end, tag.pos));
    }

    claims.sort_by_key(|&(s, _, _)| s);
    claims.dedup_by(|a, b| a.0 < b.1 && b.0 < a.1); // drop exact adjacent dupes only

    let mut result = PretokenizeResult::default();
    let mut cursor = 0usize;
    for (start, end, pos) in claims {
        if start < cursor || end <= start || end > n {
            continue; // overlapping or out-of-range claim: first wins
        }
        if start > cursor {
            result.spans.push(AnalyzeSpan { start: cursor, end: start });
        }
        let surface = index.slice(text, start, end).to_string();
        result.fixed.push(FixedToken { surface, start, end, pos });
        cursor = end;
    }
    if cursor < n {
        result.spans.push(AnalyzeSpan { start: cursor, end: n });
    }
    result
}

fn emoji_runs(chars: &[char]) -> Vec<(usize, usize, Pos)> {
    let mut runs = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if classify(chars[i]) == CharClass::Emoji {
            let start = i;
            while i < chars.len() && classify(chars[i]) == CharClass::Emoji {
                i += 1;
            }
            runs.push((start, i, Pos::Symbol));
        } else {
            i += 1;
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_around_url() {
        let text = "見て https://example.com/page を開く";
        let result = split(text, &[]);
        assert_eq!(result.fixed.len(), 1);
        assert!(result.fixed[0].surface.starts_with("https://"));
        assert!(result.spans.len() >= 1);
    }

    #[test]
    fn no_special_spans_is_single_span() {
        let text = "飲む";
        let result = split(text, &[]);
        assert!(result.fixed.is_empty());
        assert_eq!(result.spans, vec![AnalyzeSpan { start: 0, end: 2 }]);
    }

    #[test]
    fn empty_text_has_no_spans() {
        let result = split("", &[]);
        assert!(result.fixed.is_empty());
        assert!(result.spans.is_empty());
    }

    #[test]
    fn emoji_run_is_claimed() {
        let text = "楽しい😀😀です";
        let result = split(text, &[]);
        assert_eq!(result.fixed.len(), 1);
        assert_eq!(result.fixed[0].surface, "😀😀");
    }
}
