//! 列の射影・読みの正規化・品詞と文字種による絞り込み
//!
//! パイプラインの前段です。各段階は入力を読み取り、新しいベクターを返します。

use crate::errors::Result;
use crate::kana;
use crate::record::{FieldLayout, TokenRecord, VocabEntry};
use crate::script::KanjiMode;

/// 品詞による除外フィルタ
///
/// 品詞ラベルが除外ラベルのいずれかを**部分文字列として含む**場合に除外します。
/// 前方一致ではないため、例えば「助詞」を除外すると「助詞」を名前の途中に含む
/// 別の品詞も除外されます。既存の出力との互換性のためにこの挙動を維持しています。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PosFilter {
    labels: Vec<String>,
}

impl PosFilter {
    /// 除外ラベルの集合からフィルタを作成します。
    ///
    /// 空文字列のラベルはすべての品詞に一致してしまうため無視されます。
    /// ラベルが1つもない場合、このフィルタは何も除外しません。
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut labels: Vec<String> = labels
            .into_iter()
            .map(Into::into)
            .filter(|label| !label.is_empty())
            .collect();
        labels.sort_unstable();
        labels.dedup();
        Self { labels }
    }

    /// 除外ラベルを返します。
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// 品詞ラベルが除外対象かどうかを判定します。
    ///
    /// 空の品詞ラベルは除外対象になりません。
    ///
    /// # 例
    ///
    /// ```
    /// use tango::filter::PosFilter;
    ///
    /// let filter = PosFilter::new(["助詞", "記号"]);
    /// assert!(filter.is_excluded("助詞-格助詞"));
    /// assert!(!filter.is_excluded("名詞-普通名詞-一般"));
    /// assert!(!filter.is_excluded(""));
    /// ```
    pub fn is_excluded(&self, pos: &str) -> bool {
        !pos.is_empty() && self.labels.iter().any(|label| pos.contains(label.as_str()))
    }
}

/// 射影と品詞フィルタの設定
#[derive(Clone, Debug, Default)]
pub struct FilterOptions {
    /// 各役割のフィールド位置
    pub layout: FieldLayout,

    /// 存在しないフィールドを `*` として読むかどうか
    pub fill_missing: bool,

    /// 読みを平仮名に正規化するかどうか
    pub normalize_reading: bool,

    /// 品詞による除外フィルタ
    pub pos_filter: PosFilter,
}

/// レコード列を射影し、読みを正規化し、除外品詞を取り除きます。
///
/// 出力は入力の順序を保ち、重複はまだ取り除かれません。
///
/// # エラー
///
/// いずれかのレコードが必要なフィールドを持たない場合は
/// [`TangoError::MalformedRecord`](crate::errors::TangoError::MalformedRecord) を返し、
/// 途中までの結果は返しません。
pub fn normalize_and_filter(
    records: &[TokenRecord],
    options: &FilterOptions,
) -> Result<Vec<VocabEntry>> {
    let mut entries = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let mut entry = record.project(i, &options.layout, options.fill_missing)?;
        if options.normalize_reading {
            entry.reading = kana::normalize_reading(&entry.reading);
        }
        if entry.pos.is_empty() {
            log::warn!("record {i} ({}) has no part of speech", entry.surface);
        }
        if !options.pos_filter.is_excluded(&entry.pos) {
            entries.push(entry);
        }
    }
    Ok(entries)
}

/// 表層形が文字種の条件を満たすエントリだけを残します。
pub fn retain_script(entries: Vec<VocabEntry>, mode: KanjiMode) -> Vec<VocabEntry> {
    entries
        .into_iter()
        .filter(|entry| mode.passes(&entry.surface))
        .collect()
}
