use crate::errors::{Result, TangoError};
use crate::kana::normalize_reading;
use crate::record::{FieldLayout, TokenRecord, VocabEntry};
use crate::script::KanjiMode;
use crate::table::SortKey;
use crate::Pipeline;

const LAYOUT: FieldLayout = FieldLayout::new(0, 1, 2, 1);

/// 固定のレコード列を返す解析器
fn fixed_tagger(records: Vec<TokenRecord>) -> impl Fn(&str) -> Result<Vec<TokenRecord>> {
    move |_: &str| Ok(records.clone())
}

fn pipeline() -> Pipeline {
    Pipeline::new().layout(LAYOUT).unwrap()
}

/// 「学校に行く」から漢字のみの語だけが残る
#[test]
fn test_only_kanji_words_survive() {
    let tagger = fixed_tagger(vec![
        TokenRecord::new(["学校", "ガッコウ", "noun"]),
        TokenRecord::new(["に", "ニ", "particle"]),
        TokenRecord::new(["行く", "イク", "verb"]),
    ]);
    let table = pipeline()
        .exclude_pos(["particle"])
        .kanji_mode(KanjiMode::Only)
        .run_text(&tagger, "学校に行く")
        .unwrap();
    assert_eq!(table.rows(), &[VocabEntry::new("学校", "がっこう", "noun")]);
}

#[test]
fn test_reading_to_hiragana() {
    assert_eq!(normalize_reading("ガッコウ"), "がっこう");
}

#[test]
fn test_duplicates_are_merged() {
    let records = vec![
        TokenRecord::new(["犬", "イヌ", "noun"]),
        TokenRecord::new(["犬", "イヌ", "noun"]),
    ];
    let table = pipeline().run(&records).unwrap();
    assert_eq!(table.rows(), &[VocabEntry::new("犬", "いぬ", "noun")]);
}

#[test]
fn test_empty_text() {
    let tagger = fixed_tagger(vec![]);
    let table = pipeline().run_text(&tagger, "").unwrap();
    assert!(table.is_empty());
}

/// 除外なし・`mixed` の場合、漢字を含む語の異なる3つ組がすべて残る
#[test]
fn test_filter_conjunction() {
    let records = vec![
        TokenRecord::new(["日本", "ニホン", "名詞"]),
        TokenRecord::new(["日本", "ニッポン", "名詞"]),
        TokenRecord::new(["日本", "ニホン", "名詞"]),
        TokenRecord::new(["見る", "ミル", "動詞"]),
        TokenRecord::new(["見る", "ミル", "助詞もどき"]),
    ];
    let table = pipeline()
        .exclude_pos(Vec::<String>::new())
        .kanji_mode(KanjiMode::Mixed)
        .run(&records)
        .unwrap();
    assert_eq!(table.len(), 4);

    let table = pipeline()
        .exclude_pos(["助詞"])
        .kanji_mode(KanjiMode::Mixed)
        .run(&records)
        .unwrap();
    assert_eq!(table.len(), 3);
    assert!(table.iter().all(|e| !e.pos.contains("助詞")));
}

#[test]
fn test_kanji_none() {
    let records = vec![
        TokenRecord::new(["学校", "ガッコウ", "名詞"]),
        TokenRecord::new(["コーヒー", "コーヒー", "名詞"]),
        TokenRecord::new(["とても", "トテモ", "副詞"]),
    ];
    let table = pipeline().kanji_mode(KanjiMode::None).run(&records).unwrap();
    let surfaces: Vec<_> = table.iter().map(|e| e.surface.as_str()).collect();
    assert_eq!(surfaces, ["とても", "コーヒー"]);
    assert_eq!(table[1].reading, "こーひー");
}

#[test]
fn test_sorted_and_order_independent() {
    let records = vec![
        TokenRecord::new(["東京", "トウキョウ", "名詞-固有名詞"]),
        TokenRecord::new(["京都", "キョウト", "名詞-固有名詞"]),
        TokenRecord::new(["大阪", "オオサカ", "名詞-固有名詞"]),
        TokenRecord::new(["行", "ギョウ", "名詞"]),
        TokenRecord::new(["行", "コウ", "名詞"]),
        TokenRecord::new(["京都", "キョウト", "名詞-固有名詞"]),
    ];
    let mut reversed = records.clone();
    reversed.reverse();

    let pipeline = pipeline()
        .sort_keys([SortKey::Reading, SortKey::Surface]);
    let table = pipeline.run(&records).unwrap();
    let readings: Vec<_> = table.iter().map(|e| e.reading.as_str()).collect();
    assert_eq!(
        readings,
        ["おおさか", "きょうと", "ぎょう", "こう", "とうきょう"]
    );
    assert_eq!(table, pipeline.run(&reversed).unwrap());
}

#[test]
fn test_katakana_kept() {
    let records = vec![TokenRecord::new(["犬", "イヌ", "名詞"])];
    let table = pipeline().normalize_reading(false).run(&records).unwrap();
    assert_eq!(table[0].reading, "イヌ");
}

#[test]
fn test_malformed_record_produces_no_table() {
    let records = vec![
        TokenRecord::new(["犬", "イヌ", "名詞"]),
        TokenRecord::new(["猫"]),
    ];
    let result = pipeline().run(&records);
    assert!(matches!(result, Err(TangoError::MalformedRecord(_))));
}

#[test]
fn test_tagger_error_propagates() {
    let tagger = |_: &str| -> Result<Vec<TokenRecord>> { Err(TangoError::Tagger("down".into())) };
    let result = pipeline().run_text(&tagger, "学校");
    assert!(matches!(result, Err(TangoError::Tagger(_))));
}

#[test]
fn test_shared_between_threads() {
    let pipeline = pipeline();
    let records = vec![TokenRecord::new(["犬", "イヌ", "名詞"])];
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| pipeline.run(&records).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().len(), 1);
        }
    });
}
