//! Character classification by Unicode block.
//!
//! Mirrors the character-category machinery in `lindera-core`'s
//! `character_definition` module, but collapses it to the closed
//! enumeration the analyzer's candidate generators dispatch on instead of
//! a configurable `char.def` table: classification here is a pure function
//! of the codepoint, not data loaded from a file.

use strum_macros::{Display, EnumIter};

/// Character class assigned to a single codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum CharClass {
    Kanji,
    Hiragana,
    Katakana,
    Alphabet,
    Digit,
    Symbol,
    Emoji,
    Unknown,
}

/// Classifies a single codepoint by Unicode block membership.
///
/// Block boundaries follow §6 of the interface contract:
/// - Kanji: CJK Unified Ideographs, Extensions A-D, CJK Compatibility
///   Ideographs, Kangxi Radicals.
/// - Hiragana: U+3040-U+309F.
/// - Katakana: U+30A0-U+30FF, U+31F0-U+31FF, U+FF66-U+FF9F.
/// - Emoji: U+1F600-U+1F64F, U+1F300-U+1F5FF, U+1F680-U+1F6FF,
///   U+2600-U+27BF.
pub fn classify(c: char) -> CharClass {
    let cp = c as u32;
    if is_kanji_codepoint(cp) {
        return CharClass::Kanji;
    }
    if (0x3040..=0x309F).contains(&cp) {
        return CharClass::Hiragana;
    }
    if is_katakana_codepoint(cp) {
        return CharClass::Katakana;
    }
    if is_emoji_codepoint(cp) {
        return CharClass::Emoji;
    }
    if c.is_ascii_alphabetic() {
        return CharClass::Alphabet;
    }
    if c.is_ascii_digit() {
        return CharClass::Digit;
    }
    if is_fullwidth_latin(cp) {
        return if (0xFF10..=0xFF19).contains(&cp) {
            CharClass::Digit
        } else {
            CharClass::Alphabet
        };
    }
    if c.is_whitespace() {
        return CharClass::Unknown;
    }
    if c.is_ascii_punctuation() || is_cjk_symbol_codepoint(cp) {
        return CharClass::Symbol;
    }
    CharClass::Unknown
}

fn is_kanji_codepoint(cp: u32) -> bool {
    matches!(cp,
        0x4E00..=0x9FFF       // CJK Unified Ideographs
        | 0x3400..=0x4DBF     // Extension A
        | 0x20000..=0x2A6DF   // Extension B
        | 0x2A700..=0x2EBEF   // Extensions C-F (contiguous in practice)
        | 0x30000..=0x3134F   // Extension G onward
        | 0xF900..=0xFAFF     // CJK Compatibility Ideographs
        | 0x2F800..=0x2FA1F   // CJK Compatibility Ideographs Supplement
        | 0x2F00..=0x2FDF     // Kangxi Radicals
        | 0x2E80..=0x2EFF // CJK Radicals Supplement
    )
}

fn is_katakana_codepoint(cp: u32) -> bool {
    matches!(cp,
        0x30A0..=0x30FF    // Katakana
        | 0x31F0..=0x31FF  // Katakana Phonetic Extensions
        | 0xFF66..=0xFF9F // Halfwidth Katakana
    )
}

fn is_emoji_codepoint(cp: u32) -> bool {
    matches!(cp,
        0x1F600..=0x1F64F
        | 0x1F300..=0x1F5FF
        | 0x1F680..=0x1F6FF
        | 0x2600..=0x27BF
    )
}

fn is_fullwidth_latin(cp: u32) -> bool {
    (0xFF01..=0xFF5E).contains(&cp)
}

fn is_cjk_symbol_codepoint(cp: u32) -> bool {
    matches!(cp, 0x3000..=0x303F | 0xFF00..=0xFF0F | 0xFF1A..=0xFF20 | 0xFF3B..=0xFF40 | 0xFF5B..=0xFF65)
}

/// True if every character of `s` classifies as [`CharClass::Kanji`].
///
/// Used by candidate generators (mixed-script merges, compound-noun
/// splits) that need to know whether a matched span is pure kanji before
/// applying kanji-specific bonuses, the same role `is_kanji_only` plays
/// in lindera's lattice construction.
pub fn is_kanji_only(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| classify(c) == CharClass::Kanji)
}

/// True if every character of `s` classifies as [`CharClass::Hiragana`].
pub fn is_hiragana_only(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| classify(c) == CharClass::Hiragana)
}

/// True if every character of `s` classifies as [`CharClass::Katakana`].
pub fn is_katakana_only(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| classify(c) == CharClass::Katakana)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_kanji() {
        assert_eq!(classify('日'), CharClass::Kanji);
        assert_eq!(classify('本'), CharClass::Kanji);
    }

    #[test]
    fn classifies_hiragana_and_katakana() {
        assert_eq!(classify('あ'), CharClass::Hiragana);
        assert_eq!(classify('ア'), CharClass::Katakana);
        assert_eq!(classify('ｱ'), CharClass::Katakana);
    }

    #[test]
    fn classifies_latin_and_digits() {
        assert_eq!(classify('W'), CharClass::Alphabet);
        assert_eq!(classify('3'), CharClass::Digit);
    }

    #[test]
    fn classifies_emoji_and_symbol() {
        assert_eq!(classify('😀'), CharClass::Emoji);
        assert_eq!(classify('、'), CharClass::Symbol);
    }

    #[test]
    fn kanji_only_helper() {
        assert!(is_kanji_only("飛込"));
        assert!(!is_kanji_only("飛び込む"));
        assert!(!is_kanji_only(""));
    }
}
