//! The built-in hardcoded core dictionary: the first of the four lookup
//! layers (§4.3), always present even when no binary dictionary is loaded.
//!
//! A real deployment supplies a much larger binary core dictionary (§6's
//! `tryAutoLoadCoreDictionary`); this seed table exists so the crate is
//! self-contained and every testable scenario in `spec.md §8` resolves
//! through the dictionary layer alone, the same role `lindera-ipadic`'s
//! tiny bundled sample plays in the teacher's own doctests.

use std::collections::BTreeMap;

use kanaria::string::UCSStr;

use crate::conjugation::ConjugationType;
use crate::dictionary::conjugate;
use crate::dictionary::entry::DictionaryEntry;
use crate::dictionary::trie::PrefixTrie;
use crate::pos::Pos;

struct Seed {
    surface: &'static str,
    pos: Pos,
    cost: f64,
    lemma: &'static str,
    reading: &'static str,
    conj_type: ConjugationType,
    is_formal_noun: bool,
    is_low_info: bool,
    is_prefix: bool,
}

const fn seed(surface: &'static str, pos: Pos, cost: f64, lemma: &'static str, reading: &'static str) -> Seed {
    Seed {
        surface,
        pos,
        cost,
        lemma,
        reading,
        conj_type: ConjugationType::None,
        is_formal_noun: false,
        is_low_info: false,
        is_prefix: false,
    }
}

const fn inflecting(
    surface: &'static str,
    pos: Pos,
    cost: f64,
    lemma: &'static str,
    reading: &'static str,
    conj_type: ConjugationType,
) -> Seed {
    Seed {
        surface,
        pos,
        cost,
        lemma,
        reading,
        conj_type,
        is_formal_noun: false,
        is_low_info: false,
        is_prefix: false,
    }
}

/// Verbs and adjectives: listed once in dictionary (base) form; conjugated
/// surfaces are generated by [`conjugate::expand`] at trie-build time.
static INFLECTING_SEEDS: &[Seed] = &[
    inflecting("書く", Pos::Verb, 3.0, "書く", "かく", ConjugationType::GodanKa),
    inflecting("泳ぐ", Pos::Verb, 3.0, "泳ぐ", "およぐ", ConjugationType::GodanGa),
    inflecting("話す", Pos::Verb, 3.0, "話す", "はなす", ConjugationType::GodanSa),
    inflecting("待つ", Pos::Verb, 3.0, "待つ", "まつ", ConjugationType::GodanTa),
    inflecting("死ぬ", Pos::Verb, 3.0, "死ぬ", "しぬ", ConjugationType::GodanNa),
    inflecting("遊ぶ", Pos::Verb, 3.0, "遊ぶ", "あそぶ", ConjugationType::GodanBa),
    inflecting("飛ぶ", Pos::Verb, 3.0, "飛ぶ", "とぶ", ConjugationType::GodanBa),
    inflecting("読む", Pos::Verb, 3.0, "読む", "よむ", ConjugationType::GodanMa),
    inflecting("飲む", Pos::Verb, 3.0, "飲む", "のむ", ConjugationType::GodanMa),
    inflecting("込む", Pos::Verb, 3.0, "込む", "こむ", ConjugationType::GodanMa),
    inflecting("取る", Pos::Verb, 3.0, "取る", "とる", ConjugationType::GodanRa),
    inflecting("走る", Pos::Verb, 3.0, "走る", "はしる", ConjugationType::GodanRa),
    inflecting("買う", Pos::Verb, 3.0, "買う", "かう", ConjugationType::GodanWa),
    inflecting("会う", Pos::Verb, 3.0, "会う", "あう", ConjugationType::GodanWa),
    inflecting("言う", Pos::Verb, 3.0, "言う", "いう", ConjugationType::GodanWa),
    inflecting("食べる", Pos::Verb, 3.0, "食べる", "たべる", ConjugationType::Ichidan),
    inflecting("見る", Pos::Verb, 3.0, "見る", "みる", ConjugationType::Ichidan),
    inflecting("寝る", Pos::Verb, 3.0, "寝る", "ねる", ConjugationType::Ichidan),
    inflecting("出る", Pos::Verb, 3.0, "出る", "でる", ConjugationType::Ichidan),
    inflecting("始める", Pos::Verb, 3.0, "始める", "はじめる", ConjugationType::Ichidan),
    inflecting("続ける", Pos::Verb, 3.0, "続ける", "つづける", ConjugationType::Ichidan),
    inflecting("する", Pos::Verb, 2.5, "する", "する", ConjugationType::Suru),
    inflecting("来る", Pos::Verb, 2.5, "来る", "くる", ConjugationType::Kuru),
    inflecting("高い", Pos::Adjective, 3.0, "高い", "たかい", ConjugationType::IAdjective),
    inflecting("安い", Pos::Adjective, 3.0, "安い", "やすい", ConjugationType::IAdjective),
    inflecting("大きい", Pos::Adjective, 3.0, "大きい", "おおきい", ConjugationType::IAdjective),
    inflecting("小さい", Pos::Adjective, 3.0, "小さい", "ちいさい", ConjugationType::IAdjective),
    inflecting("美しい", Pos::Adjective, 3.0, "美しい", "うつくしい", ConjugationType::IAdjective),
    inflecting("楽しい", Pos::Adjective, 3.0, "楽しい", "たのしい", ConjugationType::IAdjective),
    inflecting("難しい", Pos::Adjective, 3.0, "難しい", "むずかしい", ConjugationType::IAdjective),
    inflecting("欲しい", Pos::Adjective, 3.0, "欲しい", "ほしい", ConjugationType::IAdjective),
];

/// Irregular 来る forms that the general stem+suffix composition in
/// [`conjugate`] deliberately declines to generate (see that module's
/// doc comment): seeded directly, the way a real dictionary source file
/// would list each irregular conjugated form as its own row.
static KURU_IRREGULAR_FORMS: &[Seed] = &[
    inflecting("来ない", Pos::Verb, 3.0, "来る", "こない", ConjugationType::Kuru),
    inflecting("来なかった", Pos::Verb, 3.0, "来る", "こなかった", ConjugationType::Kuru),
    inflecting("来た", Pos::Verb, 3.0, "来る", "きた", ConjugationType::Kuru),
    inflecting("来て", Pos::Verb, 3.0, "来る", "きて", ConjugationType::Kuru),
    inflecting("来ます", Pos::Verb, 3.0, "来る", "きます", ConjugationType::Kuru),
    inflecting("来られる", Pos::Verb, 3.0, "来る", "こられる", ConjugationType::Kuru),
    inflecting("来させる", Pos::Verb, 3.0, "来る", "こさせる", ConjugationType::Kuru),
    inflecting("来れば", Pos::Verb, 3.0, "来る", "くれば", ConjugationType::Kuru),
];

/// Non-inflecting entries: nouns, particles, a handful of na-adjectives,
/// and the honorific prefix お (not part of the closed productive-prefix
/// set in `candidates::prefix_noun`, since お attaches to a lexically
/// closed set of nouns rather than productively to any noun).
static PLAIN_SEEDS: &[Seed] = &[
    seed("水", Pos::Noun, 2.0, "水", "みず"),
    seed("本", Pos::Noun, 2.0, "本", "ほん"),
    seed("学校", Pos::Noun, 2.0, "学校", "がっこう"),
    seed("先生", Pos::Noun, 2.0, "先生", "せんせい"),
    seed("日本", Pos::Noun, 2.0, "日本", "にほん"),
    seed("東京", Pos::Noun, 2.0, "東京", "とうきょう"),
    seed("時間", Pos::Noun, 2.0, "時間", "じかん"),
    seed("開発", Pos::Noun, 2.0, "開発", "かいはつ"),
    seed("研究", Pos::Noun, 2.0, "研究", "けんきゅう"),
    seed("勉強", Pos::Noun, 2.0, "勉強", "べんきょう"),
    seed("仕事", Pos::Noun, 2.0, "仕事", "しごと"),
    seed("会社", Pos::Noun, 2.0, "会社", "かいしゃ"),
    seed("電車", Pos::Noun, 2.0, "電車", "でんしゃ"),
    seed("映画", Pos::Noun, 2.0, "映画", "えいが"),
    seed("音楽", Pos::Noun, 2.0, "音楽", "おんがく"),
    seed("静か", Pos::Adjective, 2.5, "静か", "しずか"),
    seed("便利", Pos::Adjective, 2.5, "便利", "べんり"),
    seed("元気", Pos::Adjective, 2.5, "元気", "げんき"),
    seed("簡単", Pos::Adjective, 2.5, "簡単", "かんたん"),
    seed("を", Pos::Particle, 0.5, "を", "を"),
    seed("が", Pos::Particle, 0.5, "が", "が"),
    seed("は", Pos::Particle, 0.5, "は", "は"),
    seed("に", Pos::Particle, 0.5, "に", "に"),
    seed("で", Pos::Particle, 0.5, "で", "で"),
    seed("と", Pos::Particle, 0.5, "と", "と"),
    seed("の", Pos::Particle, 0.5, "の", "の"),
    seed("も", Pos::Particle, 0.5, "も", "も"),
    seed("へ", Pos::Particle, 0.5, "へ", "へ"),
    seed("から", Pos::Particle, 0.6, "から", "から"),
    seed("まで", Pos::Particle, 0.6, "まで", "まで"),
];

fn plain_prefix_seed(surface: &'static str, lemma: &'static str, reading: &'static str, cost: f64) -> Seed {
    Seed {
        surface,
        pos: Pos::Prefix,
        cost,
        lemma,
        reading,
        conj_type: ConjugationType::None,
        is_formal_noun: false,
        is_low_info: false,
        is_prefix: true,
    }
}

fn honorific_prefix_seeds() -> Vec<Seed> {
    vec![plain_prefix_seed("お", "お", "お", 1.5), plain_prefix_seed("ご", "ご", "ご", 1.5)]
}

/// Seed readings are authored in hiragana for readability; dictionary
/// entries store the MeCab-conventional katakana reading, converted here
/// the same way the teacher's `japanese_kana` token filter converts
/// hiragana to katakana post-tokenization
/// (`lindera/src/token_filter/japanese_kana.rs`), just applied once at
/// seed-table build time instead of per-token at query time.
fn to_entry(seed: &Seed) -> DictionaryEntry {
    DictionaryEntry {
        surface: seed.surface.to_string(),
        pos: seed.pos,
        cost: seed.cost,
        lemma: seed.lemma.to_string(),
        reading: UCSStr::from_str(seed.reading).katakana().to_string(),
        conj_type: seed.conj_type,
        is_formal_noun: seed.is_formal_noun,
        is_low_info: seed.is_low_info,
        is_prefix: seed.is_prefix,
    }
}

/// Builds the hardcoded core trie: every plain and inflecting seed, plus
/// every conjugated form the inflecting seeds expand into.
pub fn build_core_trie() -> PrefixTrie {
    let mut map: BTreeMap<String, Vec<DictionaryEntry>> = BTreeMap::new();
    let mut insert = |entry: DictionaryEntry| {
        map.entry(entry.surface.clone()).or_default().push(entry);
    };

    for seed in PLAIN_SEEDS {
        insert(to_entry(seed));
    }
    for seed in honorific_prefix_seeds() {
        insert(to_entry(&seed));
    }
    for seed in INFLECTING_SEEDS {
        let base = to_entry(seed);
        for form in conjugate::expand(&base) {
            insert(form);
        }
        insert(base);
    }
    for seed in KURU_IRREGULAR_FORMS {
        insert(to_entry(seed));
    }

    PrefixTrie::build(map).expect("core seed dictionary builds without error")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_trie_resolves_base_forms() {
        let trie = build_core_trie();
        assert!(!trie.lookup("書く").is_empty());
        assert!(!trie.lookup("食べる").is_empty());
    }

    #[test]
    fn core_trie_resolves_generated_conjugations() {
        let trie = build_core_trie();
        let hits = trie.lookup("書いた");
        assert!(hits.iter().any(|e| e.lemma == "書く"));
        let hits = trie.lookup("高かった");
        assert!(hits.iter().any(|e| e.lemma == "高い"));
    }

    #[test]
    fn core_trie_resolves_seeded_kuru_irregulars() {
        let trie = build_core_trie();
        let hits = trie.lookup("来ない");
        assert!(hits.iter().any(|e| e.lemma == "来る"));
    }

    #[test]
    fn core_trie_resolves_prefix_and_particle() {
        let trie = build_core_trie();
        assert!(trie.lookup("お").iter().any(|e| e.is_prefix));
        assert!(!trie.lookup("を").is_empty());
    }
}
