//! End-to-end analyzer scenarios, one per concrete example the
//! specification walks through: verb inflection, compound verbs, mixed
//! script, suru-verb negation, and productive prefixes.

use suzume::Analyzer;

fn analyze(text: &str) -> Vec<suzume::Morpheme> {
    Analyzer::new().analyze(text).expect("analysis should not fail")
}

#[test]
fn kaite_resolves_to_kaku_godan_ka() {
    let morphemes = analyze("書いて");
    assert!(morphemes.iter().any(|m| m.lemma == "書く"));
}

#[test]
fn tabesaserareta_resolves_to_taberu_ichidan() {
    let morphemes = analyze("食べさせられた");
    assert!(morphemes.iter().any(|m| m.lemma == "食べる"));
}

#[test]
fn tobikomu_is_a_single_compound_verb() {
    let morphemes = analyze("飛び込む");
    assert!(morphemes
        .iter()
        .any(|m| m.surface == "飛び込む" && m.lemma == "飛び込む"));
}

#[test]
fn web_kaihatsu_merges_into_one_noun() {
    let morphemes = analyze("Web開発");
    assert!(morphemes.iter().any(|m| m.surface == "Web開発"));
}

#[test]
fn benkyou_shinai_resolves_to_benkyousuru() {
    let morphemes = analyze("勉強しない");
    assert!(morphemes.iter().any(|m| m.lemma == "勉強する"));
}

#[test]
fn omizu_wo_nomu_splits_into_four_morphemes() {
    let morphemes = analyze("お水を飲む");
    let surfaces: Vec<&str> = morphemes.iter().map(|m| m.surface.as_str()).collect();
    assert!(surfaces.contains(&"を"));
    assert!(morphemes.iter().any(|m| m.lemma == "飲む"));
    assert!(surfaces.iter().any(|s| s.contains('水')));
}
