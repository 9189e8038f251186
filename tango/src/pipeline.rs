//! 語彙抽出パイプライン
//!
//! 形態素解析器の出力から語彙テーブルを構築するまでの全段階をまとめます。
//!
//! 1. 列の射影と読みの正規化、品詞による除外（[`filter::normalize_and_filter`]）
//! 2. 表層形の文字種による絞り込み（[`filter::retain_script`]）
//! 3. 重複除去と並べ替え（[`VocabularyTable::build`]）
//!
//! 各段階は入力をすべて読み終えてから新しい値を返し、共有された状態を変更しません。
//! そのため、1つの [`Pipeline`] を複数のスレッドから同時に使用できます。

use crate::errors::Result;
use crate::filter::{self, FilterOptions, PosFilter};
use crate::record::{FieldLayout, TokenRecord};
use crate::script::KanjiMode;
use crate::table::{SortKey, VocabularyTable, DEFAULT_SORT_KEYS};
use crate::tagger::Tagger;

/// 既定で除外する品詞ラベル（助詞と記号）
pub const DEFAULT_EXCLUDED_POS: [&str; 2] = ["助詞", "記号"];

/// 語彙抽出パイプラインとその設定
///
/// # 例
///
/// ```
/// use tango::Pipeline;
/// use tango::record::{FieldLayout, TokenRecord};
/// use tango::script::KanjiMode;
///
/// let pipeline = Pipeline::new()
///     .layout(FieldLayout::new(0, 1, 2, 1))?
///     .kanji_mode(KanjiMode::Only);
///
/// let records = vec![
///     TokenRecord::new(["学校", "ガッコウ", "名詞"]),
///     TokenRecord::new(["に", "ニ", "助詞"]),
///     TokenRecord::new(["行く", "イク", "動詞"]),
/// ];
/// let table = pipeline.run(&records)?;
/// assert_eq!(table.len(), 1);
/// assert_eq!(table[0].surface, "学校");
/// assert_eq!(table[0].reading, "がっこう");
/// # Ok::<(), tango::errors::TangoError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Pipeline {
    filter: FilterOptions,
    kanji_mode: KanjiMode,
    sort_keys: Vec<SortKey>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// 既定の設定でパイプラインを作成します。
    ///
    /// 既定値は、漢字のみの語を対象とし（[`KanjiMode::Only`]）、助詞と記号を除外し、
    /// 読みを平仮名に正規化し、表層形・読み・品詞の順に並べ替えます。
    /// フィールド配置は [`FieldLayout::UNIDIC_TAB`] です。
    pub fn new() -> Self {
        Self {
            filter: FilterOptions {
                layout: FieldLayout::default(),
                fill_missing: false,
                normalize_reading: true,
                pos_filter: PosFilter::new(DEFAULT_EXCLUDED_POS),
            },
            kanji_mode: KanjiMode::default(),
            sort_keys: DEFAULT_SORT_KEYS.to_vec(),
        }
    }

    /// レコード内のフィールド配置を設定します。
    ///
    /// # エラー
    ///
    /// 配置が無効な場合は [`TangoError::InvalidArgument`](crate::errors::TangoError::InvalidArgument) を返します。
    pub fn layout(mut self, layout: FieldLayout) -> Result<Self> {
        self.filter.layout = layout.validate()?;
        Ok(self)
    }

    /// 存在しないフィールドを `*` として読むかどうかを設定します。
    ///
    /// 既定では `false` で、必要なフィールドを持たないレコードがあると失敗します。
    pub fn fill_missing_fields(mut self, yes: bool) -> Self {
        self.filter.fill_missing = yes;
        self
    }

    /// 除外する品詞ラベルを設定します。
    ///
    /// 品詞がいずれかのラベルを部分文字列として含むレコードが除外されます。
    /// 空の集合を指定すると、品詞による除外は行われません。
    pub fn exclude_pos<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter.pos_filter = PosFilter::new(labels);
        self
    }

    /// 表層形の文字種の条件を設定します。
    pub fn kanji_mode(mut self, mode: KanjiMode) -> Self {
        self.kanji_mode = mode;
        self
    }

    /// 並べ替えに使用する列を優先順に設定します。
    ///
    /// 2回目以降に現れた同じ列は順序に影響しないため無視されます。
    pub fn sort_keys<I>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = SortKey>,
    {
        let mut sort_keys = vec![];
        for key in keys {
            if !sort_keys.contains(&key) {
                sort_keys.push(key);
            }
        }
        self.sort_keys = sort_keys;
        self
    }

    /// 読みを片仮名から平仮名に正規化するかどうかを設定します。
    pub fn normalize_reading(mut self, yes: bool) -> Self {
        self.filter.normalize_reading = yes;
        self
    }

    /// レコード列から語彙テーブルを構築します。
    ///
    /// # エラー
    ///
    /// 必要なフィールドを持たないレコードがある場合は
    /// [`TangoError::MalformedRecord`](crate::errors::TangoError::MalformedRecord) を返し、テーブルは生成されません。
    pub fn run(&self, records: &[TokenRecord]) -> Result<VocabularyTable> {
        log::debug!("{} records", records.len());

        let entries = filter::normalize_and_filter(records, &self.filter)?;
        log::debug!("{} entries after the part-of-speech filter", entries.len());

        let entries = filter::retain_script(entries, self.kanji_mode);
        log::debug!(
            "{} entries after the kanji filter ({})",
            entries.len(),
            self.kanji_mode
        );

        let table = VocabularyTable::build(entries, &self.sort_keys);
        log::debug!("{} unique entries", table.len());

        Ok(table)
    }

    /// テキストを形態素解析し、語彙テーブルを構築します。
    ///
    /// # エラー
    ///
    /// 形態素解析器のエラー、および [`Pipeline::run`] のエラーをそのまま返します。
    pub fn run_text<T>(&self, tagger: &T, text: &str) -> Result<VocabularyTable>
    where
        T: Tagger + ?Sized,
    {
        let records = tagger.tag(text)?;
        self.run(&records)
    }
}
