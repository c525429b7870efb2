//! Compound-verb join (§4.5, §9): at kanji+hiragana matching a Godan
//! renyokei or Ichidan stem pattern, check whether the following
//! characters match the surface (kanji form) or reading (hiragana form)
//! of one of the subsidiary verbs below. If so, emit one edge spanning
//! V1+V2 with a compound-verb bonus, plus an additional bonus when V1's
//! base form is dictionary-verified.
//!
//! The subsidiary-verb table is carried at the fidelity §9 calls for: a
//! constant array, not data-driven or config-loaded.

use crate::candidates::{Candidate, GenContext};
use crate::char_class::CharClass;
use crate::conjugation::ConjugationType;
use crate::inflection::MIN_CONFIDENCE;
use crate::lattice::EdgeFlags;
use crate::pos::Pos;

struct Subsidiary {
    kanji: &'static str,
    hiragana: &'static str,
    base_form: &'static str,
    conj_type: ConjugationType,
}

macro_rules! sub {
    ($kanji:expr, $hiragana:expr, $base:expr, $ct:expr) => {
        Subsidiary {
            kanji: $kanji,
            hiragana: $hiragana,
            base_form: $base,
            conj_type: $ct,
        }
    };
}

#[rustfmt::skip]
static SUBSIDIARY_VERBS: &[Subsidiary] = &[
    sub!("込む", "こむ", "込む", ConjugationType::GodanMa),
    sub!("込める", "こめる", "込める", ConjugationType::Ichidan),
    sub!("出す", "だす", "出す", ConjugationType::GodanSa),
    sub!("出る", "でる", "出る", ConjugationType::Ichidan),
    sub!("始める", "はじめる", "始める", ConjugationType::Ichidan),
    sub!("始まる", "はじまる", "始まる", ConjugationType::GodanRa),
    sub!("続ける", "つづける", "続ける", ConjugationType::Ichidan),
    sub!("続く", "つづく", "続く", ConjugationType::GodanKa),
    sub!("終える", "おえる", "終える", ConjugationType::Ichidan),
    sub!("終わる", "おわる", "終わる", ConjugationType::GodanRa),
    sub!("上げる", "あげる", "上げる", ConjugationType::Ichidan),
    sub!("下げる", "さげる", "下げる", ConjugationType::Ichidan),
    sub!("切る", "きる", "切る", ConjugationType::GodanRa),
    sub!("切れる", "きれる", "切れる", ConjugationType::Ichidan),
    sub!("過ぎる", "すぎる", "過ぎる", ConjugationType::Ichidan),
    sub!("合う", "あう", "合う", ConjugationType::GodanWa),
    sub!("合わせる", "あわせる", "合わせる", ConjugationType::Ichidan),
    sub!("直す", "なおす", "直す", ConjugationType::GodanSa),
    sub!("直る", "なおる", "直る", ConjugationType::GodanRa),
    sub!("尽くす", "つくす", "尽くす", ConjugationType::GodanSa),
    sub!("回る", "まわる", "回る", ConjugationType::GodanRa),
    sub!("返す", "かえす", "返す", ConjugationType::GodanSa),
    sub!("返る", "かえる", "返る", ConjugationType::GodanRa),
    sub!("抜く", "ぬく", "抜く", ConjugationType::GodanKa),
    sub!("抜ける", "ぬける", "抜ける", ConjugationType::Ichidan),
    sub!("通す", "とおす", "通す", ConjugationType::GodanSa),
    sub!("通る", "とおる", "通る", ConjugationType::GodanRa),
    sub!("忘れる", "わすれる", "忘れる", ConjugationType::Ichidan),
    sub!("付ける", "つける", "付ける", ConjugationType::Ichidan),
    sub!("付く", "つく", "付く", ConjugationType::GodanKa),
    sub!("払う", "はらう", "払う", ConjugationType::GodanWa),
    sub!("渡す", "わたす", "渡す", ConjugationType::GodanSa),
    sub!("渡る", "わたる", "渡る", ConjugationType::GodanRa),
    sub!("寄る", "よる", "寄る", ConjugationType::GodanRa),
    sub!("寄せる", "よせる", "寄せる", ConjugationType::Ichidan),
    sub!("立つ", "たつ", "立つ", ConjugationType::GodanTa),
    sub!("立てる", "たてる", "立てる", ConjugationType::Ichidan),
    sub!("果たす", "はたす", "果たす", ConjugationType::GodanSa),
    sub!("遂げる", "とげる", "遂げる", ConjugationType::Ichidan),
    sub!("取る", "とる", "取る", ConjugationType::GodanRa),
    sub!("取れる", "とれる", "取れる", ConjugationType::Ichidan),
    sub!("入れる", "いれる", "入れる", ConjugationType::Ichidan),
    sub!("入る", "はいる", "入る", ConjugationType::GodanRa),
    sub!("広げる", "ひろげる", "広げる", ConjugationType::Ichidan),
    sub!("広がる", "ひろがる", "広がる", ConjugationType::GodanRa),
    sub!("かける", "かける", "かける", ConjugationType::Ichidan),
    sub!("かかる", "かかる", "かかる", ConjugationType::GodanRa),
    sub!("あう", "あう", "あう", ConjugationType::GodanWa),
];

const COMPOUND_BONUS: f64 = -1.2;
const V1_DICTIONARY_BONUS: f64 = -0.6;
const MAX_V1_LEN: usize = 4;

pub fn generate(ctx: &GenContext, p: usize) -> Vec<Candidate> {
    if ctx.class_at(p) != Some(CharClass::Kanji) {
        return Vec::new();
    }

    let mut out = Vec::new();
    let max_v1 = (p + MAX_V1_LEN).min(ctx.len());
    for split in (p + 1)..max_v1 {
        let v1_surface = ctx.slice(p, split);
        let v1_candidate = ctx
            .inflection
            .analyze(v1_surface)
            .into_iter()
            .filter(|c| c.confidence >= MIN_CONFIDENCE)
            .max_by(|a, b| a.confidence.partial_cmp(&b.confidence).unwrap());
        let v1_candidate = match v1_candidate {
            Some(c) => c,
            None => continue,
        };

        let tail = ctx.tail_from(split);
        for sub in SUBSIDIARY_VERBS {
            let matched_len = if tail.starts_with(sub.kanji) {
                Some(sub.kanji.chars().count())
            } else if tail.starts_with(sub.hiragana) {
                Some(sub.hiragana.chars().count())
            } else {
                None
            };
            let Some(matched_len) = matched_len else { continue };

            let end = split + matched_len;
            let surface = ctx.slice(p, end);
            let lemma = format!("{v1_surface}{}", sub.base_form);
            let mut cost = confidence_cost(v1_candidate.confidence) + COMPOUND_BONUS;
            if !ctx.dictionary.lookup(&v1_candidate.base_form).is_empty() {
                cost += V1_DICTIONARY_BONUS;
            }
            out.push(Candidate {
                surface: surface.to_string(),
                start: p,
                end,
                pos: Pos::Verb,
                cost,
                flags: EdgeFlags::UNKNOWN,
                lemma: Some(lemma),
                conj_type: Some(sub.conj_type),
            });
        }
    }
    out
}

fn confidence_cost(confidence: f64) -> f64 {
    (1.0 - confidence) * 4.0 + 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char_class::classify;
    use crate::dictionary::Dictionary;
    use crate::inflection::InflectionEngine;
    use crate::utf8::CodepointIndex;

    #[test]
    fn tobikomu_joins_into_one_compound_edge() {
        let dict = Dictionary::new();
        let inflection = InflectionEngine::new();
        let text = "飛び込む";
        let index = CodepointIndex::new(text);
        let classes: Vec<_> = index.chars().iter().map(|&c| classify(c)).collect();
        let ctx = GenContext {
            text,
            index: &index,
            classes: &classes,
            dictionary: &dict,
            inflection: &inflection,
        };
        let candidates = generate(&ctx, 0);
        assert!(candidates
            .iter()
            .any(|c| c.surface == "飛び込む" && c.lemma.as_deref() == Some("飛び込む")));
    }
}
