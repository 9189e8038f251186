use crate::record::{FieldLayout, VocabEntry};
use crate::script::KanjiMode;
use crate::table::{ColumnNames, CsvOptions};
use crate::tagger::TaggedFormat;
use crate::Pipeline;

const IPADIC_OUTPUT: &str = include_str!("./resources/ipadic.txt");
const CHASEN_OUTPUT: &str = include_str!("./resources/chasen.txt");
const UNIDIC_OUTPUT: &str = include_str!("./resources/unidic.txt");

fn ipadic_pipeline() -> Pipeline {
    Pipeline::new().layout(FieldLayout::IPADIC).unwrap()
}

/// IPADIC形式の出力から漢字のみの語を抽出するテスト
#[test]
fn test_ipadic_only() {
    let table = ipadic_pipeline()
        .run_text(&TaggedFormat::Mecab, IPADIC_OUTPUT)
        .unwrap();
    assert_eq!(
        table.rows(),
        &[
            VocabEntry::new("名前", "なまえ", "名詞-一般"),
            VocabEntry::new("吾輩", "わがはい", "名詞-代名詞-一般"),
            VocabEntry::new("猫", "ねこ", "名詞-一般"),
        ]
    );
}

/// 漢字を含む語の抽出テスト
#[test]
fn test_ipadic_mixed() {
    let table = ipadic_pipeline()
        .kanji_mode(KanjiMode::Mixed)
        .run_text(&TaggedFormat::Mecab, IPADIC_OUTPUT)
        .unwrap();
    let surfaces: Vec<_> = table.iter().map(|e| e.surface.as_str()).collect();
    assert_eq!(surfaces, ["名前", "吾輩", "無い", "猫"]);
    assert_eq!(table[2], VocabEntry::new("無い", "ない", "形容詞-自立"));
}

/// 部分文字列一致のため「副詞-助詞類接続」も「助詞」として除外されるテスト
#[test]
fn test_ipadic_none_substring_exclusion() {
    let table = ipadic_pipeline()
        .kanji_mode(KanjiMode::None)
        .run_text(&TaggedFormat::Mecab, IPADIC_OUTPUT)
        .unwrap();
    assert_eq!(
        table.rows(),
        &[
            VocabEntry::new("ある", "ある", "助動詞"),
            VocabEntry::new("で", "で", "助動詞"),
        ]
    );
}

/// ChaSen形式とIPADIC形式から同じテーブルが得られるテスト
#[test]
fn test_chasen_matches_ipadic() {
    let chasen = Pipeline::new()
        .layout(FieldLayout::CHASEN)
        .unwrap()
        .run_text(&TaggedFormat::Tab, CHASEN_OUTPUT)
        .unwrap();
    let ipadic = ipadic_pipeline()
        .run_text(&TaggedFormat::Mecab, IPADIC_OUTPUT)
        .unwrap();
    assert_eq!(chasen, ipadic);
}

/// UniDic形式の出力からの抽出テスト
#[test]
fn test_unidic() {
    let pipeline = Pipeline::new().layout(FieldLayout::UNIDIC_TAB).unwrap();
    let table = pipeline
        .run_text(&TaggedFormat::Tab, UNIDIC_OUTPUT)
        .unwrap();
    assert_eq!(
        table.rows(),
        &[
            VocabEntry::new("名前", "なまえ", "名詞-普通名詞-一般"),
            VocabEntry::new("吾輩", "わがはい", "代名詞"),
            VocabEntry::new("猫", "ねこ", "名詞-普通名詞-一般"),
        ]
    );

    let table = pipeline
        .kanji_mode(KanjiMode::None)
        .run_text(&TaggedFormat::Tab, UNIDIC_OUTPUT)
        .unwrap();
    let readings: Vec<_> = table.iter().map(|e| e.reading.as_str()).collect();
    assert_eq!(readings, ["ある", "だ", "まだ"]);
}

/// 未知語の短い素性の扱いのテスト
#[test]
fn test_ipadic_unknown_word() {
    let tagged = "猫\t名詞,一般,*,*,*,*,猫,ネコ,ネコ\n吾妻鏡\t名詞,一般,*,*,*,*,*\nEOS\n";
    assert!(ipadic_pipeline()
        .run_text(&TaggedFormat::Mecab, tagged)
        .is_err());

    let table = ipadic_pipeline()
        .fill_missing_fields(true)
        .run_text(&TaggedFormat::Mecab, tagged)
        .unwrap();
    assert_eq!(
        table.rows(),
        &[
            VocabEntry::new("吾妻鏡", "*", "名詞-一般"),
            VocabEntry::new("猫", "ねこ", "名詞-一般"),
        ]
    );
}

/// テーブルのCSV出力テスト
#[test]
fn test_write_clean_csv() {
    let table = ipadic_pipeline()
        .run_text(&TaggedFormat::Mecab, IPADIC_OUTPUT)
        .unwrap();
    let options = CsvOptions {
        bom: false,
        index: true,
        columns: ColumnNames::Japanese,
    };
    let mut buf = vec![];
    table.write_csv(&mut buf, &options).unwrap();
    assert_eq!(
        "\
,単語,振り仮名,品詞
0,名前,なまえ,名詞-一般
1,吾輩,わがはい,名詞-代名詞-一般
2,猫,ねこ,名詞-一般
",
        String::from_utf8(buf).unwrap()
    );
}
