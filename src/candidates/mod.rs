//! Candidate generators (§4.5): invoked by the tokenizer at every character
//! position, each contributing zero or more [`Candidate`] edges to the
//! lattice under construction.
//!
//! Split into one file per generator, mirroring the teacher's habit of
//! giving each character filter / token filter its own small file
//! (`lindera/src/character_filter/*.rs`, `lindera/src/token_filter/*.rs`)
//! rather than one large dispatch module.

pub mod adjective_candidates;
pub mod compound_noun;
pub mod compound_verb;
pub mod dictionary_candidates;
pub mod hiragana_verb_candidates;
pub mod mixed_script;
pub mod noun_verb_split;
pub mod prefix_noun;
pub mod suffix_candidates;
pub mod te_aux;
pub mod unknown_candidates;
pub mod verb_candidates;

use crate::char_class::CharClass;
use crate::conjugation::ConjugationType;
use crate::dictionary::Dictionary;
use crate::inflection::InflectionEngine;
use crate::lattice::EdgeFlags;
use crate::pos::Pos;
use crate::utf8::CodepointIndex;

/// One candidate edge a generator wants added to the lattice. Carries the
/// same fields [`crate::lattice::Lattice::add_edge`] needs, kept separate
/// from [`crate::lattice::Edge`] so generators can be unit-tested without
/// constructing a lattice.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub surface: String,
    pub start: usize,
    pub end: usize,
    pub pos: Pos,
    pub cost: f64,
    pub flags: EdgeFlags,
    pub lemma: Option<String>,
    pub conj_type: Option<ConjugationType>,
}

/// Read-only context shared by every generator: the normalized span text,
/// its codepoint index, a precomputed character-class vector, and handles
/// to the dictionary and inflection engine.
pub struct GenContext<'a> {
    pub text: &'a str,
    pub index: &'a CodepointIndex,
    pub classes: &'a [CharClass],
    pub dictionary: &'a Dictionary,
    pub inflection: &'a InflectionEngine,
}

impl<'a> GenContext<'a> {
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// The text from character position `start` to the end of the span,
    /// the form [`crate::dictionary::Dictionary::prefix_match`] expects
    /// (matches are measured from its first character).
    pub fn tail_from(&self, start: usize) -> &'a str {
        self.index.slice(self.text, start, self.len())
    }

    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        self.index.slice(self.text, start, end)
    }

    pub fn class_at(&self, p: usize) -> Option<CharClass> {
        self.classes.get(p).copied()
    }

    /// Length of the maximal run of `class` starting at `p`, capped at `max`.
    pub fn run_len(&self, p: usize, class: CharClass, max: usize) -> usize {
        let mut len = 0;
        while len < max && self.classes.get(p + len) == Some(&class) {
            len += 1;
        }
        len
    }
}

/// Converts an inflection confidence into an edge cost: higher confidence
/// produces a lower (more favorable) cost, scaled so a confidence of 1.0
/// lands near the dictionary-entry cost range and the floor confidence
/// lands well above it.
pub fn confidence_to_cost(confidence: f64) -> f64 {
    (1.0 - confidence) * 4.0 + 0.5
}

/// Shared core of the verb/adjective candidate generators: tries every end
/// position up to `max_len` characters past `p`, runs the inflection
/// engine over each substring, and keeps whichever candidates pass
/// `accept` at or above `min_confidence`. Used by
/// [`crate::candidates::verb_candidates`], [`crate::candidates::hiragana_verb_candidates`]
/// and [`crate::candidates::adjective_candidates`], which differ only in
/// their starting character class, length cap, threshold and verb-type
/// filter — the inflection engine itself doesn't care whether the stem it
/// peels auxiliaries off of contains kanji.
pub fn scan_inflection(
    ctx: &GenContext,
    p: usize,
    max_len: usize,
    min_confidence: f64,
    accept: impl Fn(crate::conjugation::VerbType) -> bool,
) -> Vec<Candidate> {
    let mut out = Vec::new();
    let upper = (p + max_len).min(ctx.len());
    for end in (p + 1)..=upper {
        let surface = ctx.slice(p, end);
        for candidate in ctx.inflection.analyze(surface) {
            if candidate.confidence < min_confidence || !accept(candidate.verb_type) {
                continue;
            }
            out.push(Candidate {
                surface: surface.to_string(),
                start: p,
                end,
                pos: if candidate.verb_type == crate::conjugation::VerbType::IAdjective {
                    Pos::Adjective
                } else {
                    Pos::Verb
                },
                cost: confidence_to_cost(candidate.confidence),
                flags: EdgeFlags::UNKNOWN,
                lemma: Some(candidate.base_form.clone()),
                conj_type: Some(crate::conjugation::verb_type_to_conj_type(candidate.verb_type)),
            });
        }
    }
    out
}
