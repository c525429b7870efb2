//! The auxiliary entry table: literal, hand-maintained patterns for every
//! auxiliary verb and contraction the inflection engine can peel off a
//! stem's tail.
//!
//! The grammar's own auxiliary table is itself a flat hand-written list,
//! not the output of a generator (the generator design sketched in the
//! grammar's headers was never actually wired up), so this table follows
//! suit: a literal static array, organized by category with a short
//! comment per block, rather than a pattern-expansion scaffold.

use crate::conjugation::conn::{self, ConnId};

/// One auxiliary pattern. `required_conn` is what the stem (or inner
/// auxiliary, for chained forms) to its left must provide; `right_id` is
/// what this entry provides outward, consumed by an *outer* auxiliary's
/// `required_conn` when auxiliaries chain (e.g. て+いる). `left_id` is a
/// descriptive family tag only; the matching algorithm never consults it.
#[derive(Debug, Clone, Copy)]
pub struct AuxiliaryEntry {
    pub surface: &'static str,
    pub lemma: &'static str,
    pub left_id: ConnId,
    pub right_id: ConnId,
    pub required_conn: ConnId,
}

macro_rules! aux {
    ($surface:expr, $lemma:expr, $left:expr, $right:expr, $req:expr) => {
        AuxiliaryEntry {
            surface: $surface,
            lemma: $lemma,
            left_id: $left,
            right_id: $right,
            required_conn: $req,
        }
    };
}

/// All auxiliary patterns, longest surface first within each category so
/// the engine's greedy longest-suffix match prefers the most specific
/// pattern without needing a separate sort pass at load time.
pub static AUXILIARIES: &[AuxiliaryEntry] = &[
    // Polite ます系
    aux!("ません", "ます", conn::AUX_MASU, conn::AUX_OUT_MASU, conn::VERB_RENYOKEI),
    aux!("ました", "ます", conn::AUX_MASU, conn::AUX_OUT_TA, conn::VERB_RENYOKEI),
    aux!("ましょう", "ます", conn::AUX_MASU, conn::AUX_OUT_BASE, conn::VERB_RENYOKEI),
    aux!("ます", "ます", conn::AUX_MASU, conn::AUX_OUT_MASU, conn::VERB_RENYOKEI),

    // Past た系
    aux!("だった", "た", conn::AUX_TA, conn::AUX_OUT_TA, conn::VERB_ONBINKEI),
    aux!("た", "た", conn::AUX_TA, conn::AUX_OUT_TA, conn::VERB_ONBINKEI),
    aux!("だ", "た", conn::AUX_TA, conn::AUX_OUT_TA, conn::VERB_ONBINKEI),

    // Te-form て系
    aux!("では", "て", conn::AUX_TE, conn::AUX_OUT_TE, conn::VERB_ONBINKEI),
    aux!("で", "て", conn::AUX_TE, conn::AUX_OUT_TE, conn::VERB_ONBINKEI),
    aux!("て", "て", conn::AUX_TE, conn::AUX_OUT_TE, conn::VERB_ONBINKEI),

    // Progressive ている系
    aux!("ている", "いる", conn::AUX_TEIRU, conn::AUX_OUT_BASE, conn::AUX_OUT_TE),
    aux!("ています", "いる", conn::AUX_TEIRU, conn::AUX_OUT_MASU, conn::AUX_OUT_TE),
    aux!("ていた", "いる", conn::AUX_TEIRU, conn::AUX_OUT_TA, conn::AUX_OUT_TE),
    aux!("てる", "いる", conn::AUX_TEIRU, conn::AUX_OUT_BASE, conn::AUX_OUT_TE),
    aux!("てた", "いる", conn::AUX_TEIRU, conn::AUX_OUT_TA, conn::AUX_OUT_TE),

    // Completion てしまう系 / contractions ちゃう, じゃう
    aux!("てしまう", "しまう", conn::AUX_TESHIMAU, conn::AUX_OUT_BASE, conn::AUX_OUT_TE),
    aux!("てしまった", "しまう", conn::AUX_TESHIMAU, conn::AUX_OUT_TA, conn::AUX_OUT_TE),
    aux!("ちゃう", "しまう", conn::AUX_TESHIMAU, conn::AUX_OUT_BASE, conn::VERB_ONBINKEI),
    aux!("ちゃった", "しまう", conn::AUX_TESHIMAU, conn::AUX_OUT_TA, conn::VERB_ONBINKEI),
    aux!("じゃう", "しまう", conn::AUX_TESHIMAU, conn::AUX_OUT_BASE, conn::VERB_ONBINKEI),
    aux!("じゃった", "しまう", conn::AUX_TESHIMAU, conn::AUX_OUT_TA, conn::VERB_ONBINKEI),

    // Preparation ておく系 / とく
    aux!("ておく", "おく", conn::AUX_TEOKU, conn::AUX_OUT_BASE, conn::AUX_OUT_TE),
    aux!("ておいた", "おく", conn::AUX_TEOKU, conn::AUX_OUT_TA, conn::AUX_OUT_TE),
    aux!("とく", "おく", conn::AUX_TEOKU, conn::AUX_OUT_BASE, conn::VERB_ONBINKEI),
    aux!("といた", "おく", conn::AUX_TEOKU, conn::AUX_OUT_TA, conn::VERB_ONBINKEI),

    // Direction てくる / ていく系
    aux!("てくる", "くる", conn::AUX_TEKURU, conn::AUX_OUT_BASE, conn::AUX_OUT_TE),
    aux!("てきた", "くる", conn::AUX_TEKURU, conn::AUX_OUT_TA, conn::AUX_OUT_TE),
    aux!("ていく", "いく", conn::AUX_TEIKU, conn::AUX_OUT_BASE, conn::AUX_OUT_TE),
    aux!("ていった", "いく", conn::AUX_TEIKU, conn::AUX_OUT_TA, conn::AUX_OUT_TE),

    // Attempt てみる系
    aux!("てみる", "みる", conn::AUX_TEMIRU, conn::AUX_OUT_BASE, conn::AUX_OUT_TE),
    aux!("てみた", "みる", conn::AUX_TEMIRU, conn::AUX_OUT_TA, conn::AUX_OUT_TE),

    // Benefactive てもらう / てくれる / てあげる系
    aux!("てもらう", "もらう", conn::AUX_TEMORAU, conn::AUX_OUT_BASE, conn::AUX_OUT_TE),
    aux!("てもらった", "もらう", conn::AUX_TEMORAU, conn::AUX_OUT_TA, conn::AUX_OUT_TE),
    aux!("てくれる", "くれる", conn::AUX_TEKURERU, conn::AUX_OUT_BASE, conn::AUX_OUT_TE),
    aux!("てくれた", "くれる", conn::AUX_TEKURERU, conn::AUX_OUT_TA, conn::AUX_OUT_TE),
    aux!("てあげる", "あげる", conn::AUX_TEAGERU, conn::AUX_OUT_BASE, conn::AUX_OUT_TE),
    aux!("てあげた", "あげる", conn::AUX_TEAGERU, conn::AUX_OUT_TA, conn::AUX_OUT_TE),

    // Negation ない系
    aux!("ませんでした", "ない", conn::AUX_NAI, conn::AUX_OUT_TA, conn::VERB_RENYOKEI),
    aux!("なかった", "ない", conn::AUX_NAI, conn::AUX_OUT_TA, conn::VERB_MIZENKEI),
    aux!("ない", "ない", conn::AUX_NAI, conn::AUX_OUT_BASE, conn::VERB_MIZENKEI),

    // Desire たい系
    aux!("たくなかった", "たい", conn::AUX_TAI, conn::AUX_OUT_TA, conn::VERB_RENYOKEI),
    aux!("たかった", "たい", conn::AUX_TAI, conn::AUX_OUT_TA, conn::VERB_RENYOKEI),
    aux!("たくない", "たい", conn::AUX_TAI, conn::AUX_OUT_BASE, conn::VERB_RENYOKEI),
    aux!("たい", "たい", conn::AUX_TAI, conn::AUX_OUT_BASE, conn::VERB_RENYOKEI),

    // Passive / potential れる / られる系
    aux!("られなかった", "られる", conn::AUX_RARERU, conn::AUX_OUT_TA, conn::VERB_MIZENKEI),
    aux!("られない", "られる", conn::AUX_RARERU, conn::AUX_OUT_BASE, conn::VERB_MIZENKEI),
    aux!("られた", "られる", conn::AUX_RARERU, conn::AUX_OUT_TA, conn::VERB_MIZENKEI),
    aux!("られる", "られる", conn::AUX_RARERU, conn::AUX_OUT_BASE, conn::VERB_MIZENKEI),
    aux!("れなかった", "れる", conn::AUX_RARERU, conn::AUX_OUT_TA, conn::VERB_MIZENKEI),
    aux!("れない", "れる", conn::AUX_RARERU, conn::AUX_OUT_BASE, conn::VERB_MIZENKEI),
    aux!("れた", "れる", conn::AUX_RARERU, conn::AUX_OUT_TA, conn::VERB_MIZENKEI),
    aux!("れる", "れる", conn::AUX_RARERU, conn::AUX_OUT_BASE, conn::VERB_MIZENKEI),

    // Causative せる / させる系
    aux!("させなかった", "させる", conn::AUX_SERU, conn::AUX_OUT_TA, conn::VERB_MIZENKEI),
    aux!("させない", "させる", conn::AUX_SERU, conn::AUX_OUT_BASE, conn::VERB_MIZENKEI),
    aux!("させた", "させる", conn::AUX_SERU, conn::AUX_OUT_TA, conn::VERB_MIZENKEI),
    aux!("させる", "させる", conn::AUX_SERU, conn::AUX_OUT_BASE, conn::VERB_MIZENKEI),
    aux!("せなかった", "せる", conn::AUX_SERU, conn::AUX_OUT_TA, conn::VERB_MIZENKEI),
    aux!("せない", "せる", conn::AUX_SERU, conn::AUX_OUT_BASE, conn::VERB_MIZENKEI),
    aux!("せた", "せる", conn::AUX_SERU, conn::AUX_OUT_TA, conn::VERB_MIZENKEI),
    aux!("せる", "せる", conn::AUX_SERU, conn::AUX_OUT_BASE, conn::VERB_MIZENKEI),

    // Causative-passive させられる系 / せられる系 / される系
    aux!("させられなかった", "させられる", conn::AUX_SASERARERU, conn::AUX_OUT_TA, conn::VERB_MIZENKEI),
    aux!("させられない", "させられる", conn::AUX_SASERARERU, conn::AUX_OUT_BASE, conn::VERB_MIZENKEI),
    aux!("させられた", "させられる", conn::AUX_SASERARERU, conn::AUX_OUT_TA, conn::VERB_MIZENKEI),
    aux!("させられる", "させられる", conn::AUX_SASERARERU, conn::AUX_OUT_BASE, conn::VERB_MIZENKEI),
    aux!("せられなかった", "せられる", conn::AUX_SASERARERU, conn::AUX_OUT_TA, conn::VERB_MIZENKEI),
    aux!("せられない", "せられる", conn::AUX_SASERARERU, conn::AUX_OUT_BASE, conn::VERB_MIZENKEI),
    aux!("せられた", "せられる", conn::AUX_SASERARERU, conn::AUX_OUT_TA, conn::VERB_MIZENKEI),
    aux!("せられる", "せられる", conn::AUX_SASERARERU, conn::AUX_OUT_BASE, conn::VERB_MIZENKEI),
    aux!("された", "される", conn::AUX_SASERARERU, conn::AUX_OUT_TA, conn::VERB_MIZENKEI),
    aux!("される", "される", conn::AUX_SASERARERU, conn::AUX_OUT_BASE, conn::VERB_MIZENKEI),

    // Humble progressive ておる系
    aux!("ておった", "おる", conn::AUX_TEORU, conn::AUX_OUT_TA, conn::AUX_OUT_TE),
    aux!("ております", "おる", conn::AUX_TEORU, conn::AUX_OUT_MASU, conn::AUX_OUT_TE),
    aux!("ておる", "おる", conn::AUX_TEORU, conn::AUX_OUT_BASE, conn::AUX_OUT_TE),

    // Polite receiving ていただく系
    aux!("ていただいた", "いただく", conn::AUX_TEITADAKU, conn::AUX_OUT_TA, conn::AUX_OUT_TE),
    aux!("ていただく", "いただく", conn::AUX_TEITADAKU, conn::AUX_OUT_BASE, conn::AUX_OUT_TE),

    // Honorific giving てくださる系
    aux!("てくださった", "くださる", conn::AUX_TEKUDASARU, conn::AUX_OUT_TA, conn::AUX_OUT_TE),
    aux!("てください", "くださる", conn::AUX_TEKUDASARU, conn::AUX_OUT_BASE, conn::AUX_OUT_TE),
    aux!("てくださる", "くださる", conn::AUX_TEKUDASARU, conn::AUX_OUT_BASE, conn::AUX_OUT_TE),

    // Wanting てほしい系
    aux!("てほしかった", "ほしい", conn::AUX_TAI, conn::AUX_OUT_TA, conn::AUX_OUT_TE),
    aux!("てほしい", "ほしい", conn::AUX_TAI, conn::AUX_OUT_BASE, conn::AUX_OUT_TE),

    // Existence てある系
    aux!("てあった", "ある", conn::AUX_TEIRU, conn::AUX_OUT_TA, conn::AUX_OUT_TE),
    aux!("てある", "ある", conn::AUX_TEIRU, conn::AUX_OUT_BASE, conn::AUX_OUT_TE),

    // Negative te-form ないで系
    aux!("ないでください", "ないで", conn::AUX_NAI, conn::AUX_OUT_BASE, conn::VERB_MIZENKEI),
    aux!("ないで", "ないで", conn::AUX_NAI, conn::AUX_OUT_TE, conn::VERB_MIZENKEI),

    // そう (hearsay/appearance)
    aux!("そうだった", "そう", conn::AUX_SOU, conn::AUX_OUT_TA, conn::VERB_BASE),
    aux!("そうです", "そう", conn::AUX_SOU, conn::AUX_OUT_MASU, conn::VERB_BASE),
    aux!("そうだ", "そう", conn::AUX_SOU, conn::AUX_OUT_BASE, conn::VERB_BASE),

    // らしい (hearsay/apparent)
    aux!("らしかった", "らしい", conn::AUX_RASHII, conn::AUX_OUT_TA, conn::VERB_BASE),
    aux!("らしい", "らしい", conn::AUX_RASHII, conn::AUX_OUT_BASE, conn::VERB_BASE),

    // たり / だり (listing representative actions)
    aux!("だったり", "たり", conn::AUX_TA, conn::AUX_OUT_BASE, conn::VERB_ONBINKEI),
    aux!("たり", "たり", conn::AUX_TA, conn::AUX_OUT_BASE, conn::VERB_ONBINKEI),
    aux!("だり", "たり", conn::AUX_TA, conn::AUX_OUT_BASE, conn::VERB_ONBINKEI),

    // I-adjective endings
    aux!("くありませんでした", "い", conn::AUX_NAI, conn::AUX_OUT_TA, conn::I_ADJ_STEM),
    aux!("くありません", "い", conn::AUX_NAI, conn::AUX_OUT_MASU, conn::I_ADJ_STEM),
    aux!("くなかった", "い", conn::AUX_NAI, conn::AUX_OUT_TA, conn::I_ADJ_STEM),
    aux!("くない", "い", conn::AUX_NAI, conn::AUX_OUT_BASE, conn::I_ADJ_STEM),
    aux!("かったです", "い", conn::AUX_TA, conn::AUX_OUT_MASU, conn::I_ADJ_STEM),
    aux!("かった", "い", conn::AUX_TA, conn::AUX_OUT_TA, conn::I_ADJ_STEM),
    aux!("くて", "い", conn::AUX_TE, conn::AUX_OUT_TE, conn::I_ADJ_STEM),
    aux!("ければ", "い", conn::AUX_TA, conn::AUX_OUT_BASE, conn::I_ADJ_STEM),
    aux!("かったら", "い", conn::AUX_TA, conn::AUX_OUT_BASE, conn::I_ADJ_STEM),
    aux!("くなりました", "い", conn::AUX_TA, conn::AUX_OUT_TA, conn::I_ADJ_STEM),
    aux!("くなった", "い", conn::AUX_TA, conn::AUX_OUT_TA, conn::I_ADJ_STEM),
    aux!("くなる", "い", conn::AUX_TA, conn::AUX_OUT_BASE, conn::I_ADJ_STEM),
    aux!("くなって", "い", conn::AUX_TE, conn::AUX_OUT_TE, conn::I_ADJ_STEM),
    aux!("そうにない", "い", conn::AUX_SOU, conn::AUX_OUT_BASE, conn::I_ADJ_STEM),
    aux!("そうだった", "い", conn::AUX_SOU, conn::AUX_OUT_TA, conn::I_ADJ_STEM),
    aux!("そうに", "い", conn::AUX_SOU, conn::AUX_OUT_BASE, conn::I_ADJ_STEM),
    aux!("そうな", "い", conn::AUX_SOU, conn::AUX_OUT_BASE, conn::I_ADJ_STEM),
    aux!("すぎました", "い", conn::AUX_TA, conn::AUX_OUT_MASU, conn::I_ADJ_STEM),
    aux!("すぎる", "い", conn::AUX_TA, conn::AUX_OUT_BASE, conn::I_ADJ_STEM),
    aux!("さ", "い", conn::AUX_OUT_BASE, conn::AUX_OUT_BASE, conn::I_ADJ_STEM),
    aux!("い", "い", conn::AUX_OUT_BASE, conn::AUX_OUT_BASE, conn::I_ADJ_STEM),

    // Volitional + とする うとする / ようとする系
    aux!("ようとした", "ようとする", conn::AUX_OUT_BASE, conn::AUX_OUT_TA, conn::VERB_VOLITIONAL),
    aux!("ようとする", "ようとする", conn::AUX_OUT_BASE, conn::AUX_OUT_BASE, conn::VERB_VOLITIONAL),
    aux!("うとした", "うとする", conn::AUX_OUT_BASE, conn::AUX_OUT_TA, conn::VERB_VOLITIONAL),
    aux!("うとする", "うとする", conn::AUX_OUT_BASE, conn::AUX_OUT_BASE, conn::VERB_VOLITIONAL),

    // Obligation系
    aux!("なければならない", "なければならない", conn::AUX_NAI, conn::AUX_OUT_BASE, conn::VERB_MIZENKEI),
    aux!("なくてはいけない", "なくてはいけない", conn::AUX_NAI, conn::AUX_OUT_BASE, conn::VERB_MIZENKEI),
    aux!("ないといけない", "ないといけない", conn::AUX_NAI, conn::AUX_OUT_BASE, conn::VERB_MIZENKEI),
    aux!("なきゃいけない", "なきゃいけない", conn::AUX_NAI, conn::AUX_OUT_BASE, conn::VERB_MIZENKEI),
    aux!("なきゃならない", "なきゃならない", conn::AUX_NAI, conn::AUX_OUT_BASE, conn::VERB_MIZENKEI),
    aux!("なくちゃ", "なくちゃ", conn::AUX_NAI, conn::AUX_OUT_BASE, conn::VERB_MIZENKEI),
    aux!("なきゃ", "なきゃ", conn::AUX_NAI, conn::AUX_OUT_BASE, conn::VERB_MIZENKEI),

    // Ability ことができる系
    aux!("ことができなかった", "ことができる", conn::AUX_OUT_BASE, conn::AUX_OUT_TA, conn::VERB_BASE),
    aux!("ことができない", "ことができる", conn::AUX_OUT_BASE, conn::AUX_OUT_BASE, conn::VERB_BASE),
    aux!("ことができた", "ことができる", conn::AUX_OUT_BASE, conn::AUX_OUT_TA, conn::VERB_BASE),
    aux!("ことができる", "ことができる", conn::AUX_OUT_BASE, conn::AUX_OUT_BASE, conn::VERB_BASE),

    // ようになる系
    aux!("ようになった", "ようになる", conn::AUX_OUT_BASE, conn::AUX_OUT_TA, conn::VERB_BASE),
    aux!("ようになる", "ようになる", conn::AUX_OUT_BASE, conn::AUX_OUT_BASE, conn::VERB_BASE),

    // Casual explanatory んだ / のだ系
    aux!("んだった", "のだ", conn::AUX_OUT_BASE, conn::AUX_OUT_TA, conn::VERB_BASE),
    aux!("んです", "のだ", conn::AUX_OUT_BASE, conn::AUX_OUT_MASU, conn::VERB_BASE),
    aux!("んだ", "のだ", conn::AUX_OUT_BASE, conn::AUX_OUT_BASE, conn::VERB_BASE),
    aux!("のです", "のだ", conn::AUX_OUT_BASE, conn::AUX_OUT_MASU, conn::AUX_OUT_TA),
    aux!("のだ", "のだ", conn::AUX_OUT_BASE, conn::AUX_OUT_BASE, conn::AUX_OUT_TA),

    // Prohibition はいけない / はならない / はだめだ
    aux!("てはいけない", "てはいけない", conn::AUX_OUT_BASE, conn::AUX_OUT_BASE, conn::AUX_OUT_TE),
    aux!("てはならない", "てはならない", conn::AUX_OUT_BASE, conn::AUX_OUT_BASE, conn::AUX_OUT_TE),
    aux!("てはだめだ", "てはだめだ", conn::AUX_OUT_BASE, conn::AUX_OUT_BASE, conn::AUX_OUT_TE),

    // Permission もいい / もかまわない
    aux!("てもいい", "てもいい", conn::AUX_OUT_BASE, conn::AUX_OUT_BASE, conn::AUX_OUT_TE),
    aux!("てもかまわない", "てもかまわない", conn::AUX_OUT_BASE, conn::AUX_OUT_BASE, conn::AUX_OUT_TE),

    // べき patterns
    aux!("べきだった", "べきだ", conn::AUX_OUT_BASE, conn::AUX_OUT_TA, conn::VERB_BASE),
    aux!("べきだ", "べきだ", conn::AUX_OUT_BASE, conn::AUX_OUT_BASE, conn::VERB_BASE),
    aux!("べき", "べきだ", conn::AUX_OUT_BASE, conn::AUX_OUT_BASE, conn::VERB_BASE),

    // ところだ patterns (3 required_conn variants)
    aux!("たところだ", "ところだ", conn::AUX_OUT_BASE, conn::AUX_OUT_BASE, conn::AUX_OUT_TA),
    aux!("ているところだ", "ところだ", conn::AUX_OUT_BASE, conn::AUX_OUT_BASE, conn::AUX_OUT_BASE),
    aux!("ところだ", "ところだ", conn::AUX_OUT_BASE, conn::AUX_OUT_BASE, conn::VERB_BASE),

    // ばかり patterns
    aux!("たばかりだ", "ばかりだ", conn::AUX_OUT_BASE, conn::AUX_OUT_BASE, conn::AUX_OUT_TA),
    aux!("てばかりいる", "ばかりいる", conn::AUX_OUT_BASE, conn::AUX_OUT_BASE, conn::AUX_OUT_TE),

    // っぱなし patterns
    aux!("っぱなしだ", "っぱなしだ", conn::AUX_OUT_BASE, conn::AUX_OUT_BASE, conn::VERB_RENYOKEI),
    aux!("っぱなし", "っぱなしだ", conn::AUX_OUT_BASE, conn::AUX_OUT_BASE, conn::VERB_RENYOKEI),

    // ざるを得ない
    aux!("ざるを得ない", "ざるを得ない", conn::AUX_OUT_BASE, conn::AUX_OUT_BASE, conn::VERB_MIZENKEI),

    // ずにはいられない
    aux!("ずにはいられない", "ずにはいられない", conn::AUX_OUT_BASE, conn::AUX_OUT_BASE, conn::VERB_MIZENKEI),

    // わけにはいかない (2 required_conn variants)
    aux!("わけにはいかない", "わけにはいかない", conn::AUX_OUT_BASE, conn::AUX_OUT_BASE, conn::VERB_BASE),
    aux!("わけにはいかなかった", "わけにはいかない", conn::AUX_OUT_BASE, conn::AUX_OUT_TA, conn::VERB_BASE),

    // Potential + なくなる
    aux!("られなくなった", "られなくなる", conn::AUX_RARERU, conn::AUX_OUT_TA, conn::VERB_MIZENKEI),
    aux!("られなくなる", "られなくなる", conn::AUX_RARERU, conn::AUX_OUT_BASE, conn::VERB_MIZENKEI),
    aux!("れなくなった", "れなくなる", conn::AUX_RARERU, conn::AUX_OUT_TA, conn::VERB_MIZENKEI),
    aux!("れなくなる", "れなくなる", conn::AUX_RARERU, conn::AUX_OUT_BASE, conn::VERB_MIZENKEI),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn te_iru_chains_off_aux_out_te() {
        let entry = AUXILIARIES
            .iter()
            .find(|e| e.surface == "ている")
            .expect("ている entry present");
        assert_eq!(entry.required_conn, conn::AUX_OUT_TE);
    }

    #[test]
    fn negation_requires_mizenkei() {
        let entry = AUXILIARIES.iter().find(|e| e.surface == "ない").unwrap();
        assert_eq!(entry.required_conn, conn::VERB_MIZENKEI);
    }

    #[test]
    fn no_duplicate_surface_within_same_required_conn() {
        use std::collections::HashSet;
        let mut seen = HashSet::new();
        for e in AUXILIARIES {
            assert!(
                seen.insert((e.surface, e.required_conn)),
                "duplicate pattern: {} / {:?}",
                e.surface,
                e.required_conn
            );
        }
    }
}
