//! Conjugation-related closed enumerations and the connection-id
//! namespace that ties stems to auxiliaries.
//!
//! `ConjugationType` is the tag carried by dictionary entries and emitted
//! morphemes. `VerbType` is the richer tag the inflection engine reasons
//! over internally while peeling auxiliary suffixes. The two maps between
//! them are deliberately asymmetric, matching the original analyzer: a
//! dictionary entry can be tagged `NaAdjective`, but `VerbType` has no
//! such variant (na-adjectives never conjugate, so the inflection engine
//! never needs to produce one), and `verb_type_to_conj_type` /
//! `conj_type_to_verb_type` are therefore not inverses of each other.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Conjugation type carried by dictionary entries and morphemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum ConjugationType {
    None,
    Ichidan,
    GodanKa,
    GodanGa,
    GodanSa,
    GodanTa,
    GodanNa,
    GodanBa,
    GodanMa,
    GodanRa,
    GodanWa,
    Suru,
    Kuru,
    IAdjective,
    NaAdjective,
}

impl Default for ConjugationType {
    fn default() -> Self {
        ConjugationType::None
    }
}

/// Verb conjugation type used internally by the inflection engine.
///
/// A strict subset of [`ConjugationType`]: there is no `NaAdjective`
/// variant because na-adjectives carry no inflection to reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum VerbType {
    Unknown,
    Ichidan,
    GodanKa,
    GodanGa,
    GodanSa,
    GodanTa,
    GodanNa,
    GodanBa,
    GodanMa,
    GodanRa,
    GodanWa,
    Suru,
    Kuru,
    IAdjective,
}

impl Default for VerbType {
    fn default() -> Self {
        VerbType::Unknown
    }
}

/// Converts a dictionary-facing [`ConjugationType`] to the inflection
/// engine's [`VerbType`]. `NaAdjective` has no counterpart and collapses
/// to `Unknown`.
pub fn conj_type_to_verb_type(conj_type: ConjugationType) -> VerbType {
    match conj_type {
        ConjugationType::None => VerbType::Unknown,
        ConjugationType::Ichidan => VerbType::Ichidan,
        ConjugationType::GodanKa => VerbType::GodanKa,
        ConjugationType::GodanGa => VerbType::GodanGa,
        ConjugationType::GodanSa => VerbType::GodanSa,
        ConjugationType::GodanTa => VerbType::GodanTa,
        ConjugationType::GodanNa => VerbType::GodanNa,
        ConjugationType::GodanBa => VerbType::GodanBa,
        ConjugationType::GodanMa => VerbType::GodanMa,
        ConjugationType::GodanRa => VerbType::GodanRa,
        ConjugationType::GodanWa => VerbType::GodanWa,
        ConjugationType::Suru => VerbType::Suru,
        ConjugationType::Kuru => VerbType::Kuru,
        ConjugationType::IAdjective => VerbType::IAdjective,
        ConjugationType::NaAdjective => VerbType::Unknown,
    }
}

/// Converts a [`VerbType`] back to a dictionary-facing [`ConjugationType`].
/// Total, unlike the reverse direction: every `VerbType` variant has an
/// exact `ConjugationType` counterpart.
pub fn verb_type_to_conj_type(verb_type: VerbType) -> ConjugationType {
    match verb_type {
        VerbType::Unknown => ConjugationType::None,
        VerbType::Ichidan => ConjugationType::Ichidan,
        VerbType::GodanKa => ConjugationType::GodanKa,
        VerbType::GodanGa => ConjugationType::GodanGa,
        VerbType::GodanSa => ConjugationType::GodanSa,
        VerbType::GodanTa => ConjugationType::GodanTa,
        VerbType::GodanNa => ConjugationType::GodanNa,
        VerbType::GodanBa => ConjugationType::GodanBa,
        VerbType::GodanMa => ConjugationType::GodanMa,
        VerbType::GodanRa => ConjugationType::GodanRa,
        VerbType::GodanWa => ConjugationType::GodanWa,
        VerbType::Suru => ConjugationType::Suru,
        VerbType::Kuru => ConjugationType::Kuru,
        VerbType::IAdjective => ConjugationType::IAdjective,
    }
}

/// Conjugation form (活用形): which stem shape a verb or adjective takes
/// before a given class of auxiliary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConjForm {
    Base,
    Mizenkei,
    Renyokei,
    Onbinkei,
    Katei,
    Meireikei,
    Volitional,
}

/// Connection-id namespace. A 16-bit id in a fixed namespace: sentence
/// boundaries, verb stem endings (what a stem *provides*), and auxiliary
/// inputs/outputs (what an auxiliary *requires* and what it *provides* to
/// the next auxiliary in the chain). Stems and auxiliaries may only join
/// when one's `provides` equals the other's `required_conn`.
pub mod conn {
    pub type ConnId = u16;

    // 0x00xx: sentence boundaries
    pub const BOS_EOS: ConnId = 0x0000;

    // 0x01xx: verb stem endings (what the stem provides)
    pub const VERB_BASE: ConnId = 0x0100;
    pub const VERB_MIZENKEI: ConnId = 0x0101;
    pub const VERB_RENYOKEI: ConnId = 0x0102;
    pub const VERB_ONBINKEI: ConnId = 0x0103;
    pub const VERB_KATEI: ConnId = 0x0104;
    pub const VERB_MEIREIKEI: ConnId = 0x0105;
    pub const VERB_POTENTIAL: ConnId = 0x0106;
    pub const VERB_VOLITIONAL: ConnId = 0x0107;
    pub const I_ADJ_STEM: ConnId = 0x0108;

    // 0x02xx: auxiliary inputs (what an auxiliary requires of its left side)
    pub const AUX_MASU: ConnId = 0x0200;
    pub const AUX_NAI: ConnId = 0x0201;
    pub const AUX_TA: ConnId = 0x0202;
    pub const AUX_TE: ConnId = 0x0203;
    pub const AUX_TEIRU: ConnId = 0x0204;
    pub const AUX_TESHIMAU: ConnId = 0x0205;
    pub const AUX_TEOKU: ConnId = 0x0206;
    pub const AUX_TEKURU: ConnId = 0x0207;
    pub const AUX_TEIKU: ConnId = 0x0208;
    pub const AUX_TEMIRU: ConnId = 0x0209;
    pub const AUX_TEMORAU: ConnId = 0x020A;
    pub const AUX_TEKURERU: ConnId = 0x020B;
    pub const AUX_TEAGERU: ConnId = 0x020C;
    pub const AUX_TAI: ConnId = 0x020D;
    pub const AUX_RARERU: ConnId = 0x020E;
    pub const AUX_SERU: ConnId = 0x020F;
    pub const AUX_SASERARERU: ConnId = 0x0210;
    pub const AUX_TEORU: ConnId = 0x0211;
    pub const AUX_TEITADAKU: ConnId = 0x0212;
    pub const AUX_TEKUDASARU: ConnId = 0x0213;
    pub const AUX_SOU: ConnId = 0x0214;
    pub const AUX_RASHII: ConnId = 0x0215;

    // 0x03xx: auxiliary outputs (what a fully-applied auxiliary provides
    // to the *next* auxiliary in the chain)
    pub const AUX_OUT_BASE: ConnId = 0x0300;
    pub const AUX_OUT_MASU: ConnId = 0x0301;
    pub const AUX_OUT_TA: ConnId = 0x0302;
    pub const AUX_OUT_TE: ConnId = 0x0303;

    // 0x04xx: particles
    pub const PARTICLE: ConnId = 0x0400;

    // 0x05xx: nouns
    pub const NOUN: ConnId = 0x0500;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verb_type_to_conj_type_is_total() {
        for vt in [
            VerbType::Unknown,
            VerbType::Ichidan,
            VerbType::GodanKa,
            VerbType::Suru,
            VerbType::Kuru,
            VerbType::IAdjective,
        ] {
            let _ = verb_type_to_conj_type(vt);
        }
    }

    #[test]
    fn na_adjective_has_no_verb_type_counterpart() {
        assert_eq!(
            conj_type_to_verb_type(ConjugationType::NaAdjective),
            VerbType::Unknown
        );
    }
}
