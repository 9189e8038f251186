//! 重複除去と並べ替え、および語彙テーブルの出力
//!
//! [`VocabularyTable`] はパイプラインの最終成果物です。
//! 一度構築されたテーブルは変更されず、CSVなどの形式で書き出されるだけです。

use std::cmp::Ordering;
use std::fmt;
use std::io::Write;
use std::ops::Deref;
use std::str::FromStr;

use crate::errors::{Result, TangoError};
use crate::record::{TokenRecord, VocabEntry};
use crate::utils;

/// UTF-8のバイトオーダーマーク
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// 並べ替えに使用する列
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// 表層形
    Surface,

    /// 読み
    Reading,

    /// 品詞
    PartOfSpeech,
}

/// 既定の並べ替え順（表層形、読み、品詞）
pub const DEFAULT_SORT_KEYS: [SortKey; 3] =
    [SortKey::Surface, SortKey::Reading, SortKey::PartOfSpeech];

impl SortKey {
    /// 設定値としての列名を返します。
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surface => "surface",
            Self::Reading => "reading",
            Self::PartOfSpeech => "pos",
        }
    }

    #[inline(always)]
    fn get(self, entry: &VocabEntry) -> &str {
        match self {
            Self::Surface => &entry.surface,
            Self::Reading => &entry.reading,
            Self::PartOfSpeech => &entry.pos,
        }
    }

    /// このキーで2つのエントリを比較します。
    #[inline(always)]
    pub fn compare(self, a: &VocabEntry, b: &VocabEntry) -> Ordering {
        self.get(a).cmp(self.get(b))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortKey {
    type Err = TangoError;

    /// 英語の列名、または日本語の列見出しをパースします。
    fn from_str(key: &str) -> Result<Self> {
        match key {
            "surface" | "単語" => Ok(Self::Surface),
            "reading" | "振り仮名" | "フリガナ" | "ふりがな" => Ok(Self::Reading),
            "pos" | "part_of_speech" | "品詞" => Ok(Self::PartOfSpeech),
            _ => Err(TangoError::invalid_argument(
                "sort_keys",
                format!("'{key}' is not one of surface, reading, pos"),
            )),
        }
    }
}

/// 出力テーブルの列見出し
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColumnNames {
    /// `surface`, `reading`, `pos`
    #[default]
    English,

    /// `単語`, `振り仮名`, `品詞`
    Japanese,
}

impl ColumnNames {
    /// 表層形・読み・品詞の順に列見出しを返します。
    pub const fn headers(self) -> [&'static str; 3] {
        match self {
            Self::English => ["surface", "reading", "pos"],
            Self::Japanese => ["単語", "振り仮名", "品詞"],
        }
    }
}

impl FromStr for ColumnNames {
    type Err = TangoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "en" => Ok(Self::English),
            "ja" => Ok(Self::Japanese),
            _ => Err(TangoError::invalid_argument(
                "columns",
                format!("'{s}' is not one of en, ja"),
            )),
        }
    }
}

/// CSV出力の設定
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CsvOptions {
    /// 先頭にUTF-8のBOMを書き出すかどうか
    pub bom: bool,

    /// 先頭列に0始まりの行番号を書き出すかどうか
    pub index: bool,

    /// 列見出し
    pub columns: ColumnNames,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            bom: true,
            index: true,
            columns: ColumnNames::English,
        }
    }
}

/// 重複のない、並べ替え済みの語彙テーブル
///
/// 行番号は常に0から連続しています。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VocabularyTable {
    rows: Vec<VocabEntry>,
}

impl VocabularyTable {
    /// エントリ列から重複を除き、指定されたキーの昇順に並べたテーブルを構築します。
    ///
    /// 重複の判定は表層形・読み・品詞の完全一致です。指定されたキーで同順位となる
    /// 行は、残りの列（表層形、読み、品詞の順）で順序付けられるため、入力の順序に
    /// よって結果が変わることはありません。
    ///
    /// # 例
    ///
    /// ```
    /// use tango::record::VocabEntry;
    /// use tango::table::{VocabularyTable, SortKey};
    ///
    /// let table = VocabularyTable::build(
    ///     vec![
    ///         VocabEntry::new("猫", "ねこ", "名詞"),
    ///         VocabEntry::new("犬", "いぬ", "名詞"),
    ///         VocabEntry::new("猫", "ねこ", "名詞"),
    ///     ],
    ///     &[SortKey::Reading],
    /// );
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(table[0].surface, "犬");
    /// ```
    pub fn build<I>(entries: I, sort_keys: &[SortKey]) -> Self
    where
        I: IntoIterator<Item = VocabEntry>,
    {
        let mut rows: Vec<VocabEntry> = entries.into_iter().collect();
        // 末尾に3列すべてを比較するため、等しい行は必ず隣接する
        rows.sort_by(|a, b| {
            sort_keys
                .iter()
                .chain(DEFAULT_SORT_KEYS.iter())
                .fold(Ordering::Equal, |ord, key| ord.then_with(|| key.compare(a, b)))
        });
        rows.dedup();
        Self { rows }
    }

    /// 行のスライスを返します。
    #[inline(always)]
    pub fn rows(&self) -> &[VocabEntry] {
        &self.rows
    }

    /// テーブルを行のベクターに変換します。
    pub fn into_rows(self) -> Vec<VocabEntry> {
        self.rows
    }

    /// テーブルをCSV形式で書き出します。
    ///
    /// # エラー
    ///
    /// 書き込みに失敗した場合は [`TangoError::StdIo`] を返します。
    pub fn write_csv<W>(&self, mut wtr: W, options: &CsvOptions) -> Result<()>
    where
        W: Write,
    {
        if options.bom {
            wtr.write_all(UTF8_BOM)?;
        }
        write_row(&mut wtr, options.index.then_some(""), options.columns.headers())?;
        for (i, row) in self.rows.iter().enumerate() {
            let index = i.to_string();
            write_row(
                &mut wtr,
                options.index.then_some(index.as_str()),
                [&row.surface, &row.reading, &row.pos],
            )?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// 端末表示向けに、行番号とタブ区切りの列でテーブルを書き出します。
    pub fn write_text<W>(&self, mut wtr: W, columns: ColumnNames) -> Result<()>
    where
        W: Write,
    {
        let [surface, reading, pos] = columns.headers();
        writeln!(wtr, "\t{surface}\t{reading}\t{pos}")?;
        for (i, row) in self.rows.iter().enumerate() {
            writeln!(wtr, "{i}\t{}\t{}\t{}", row.surface, row.reading, row.pos)?;
        }
        Ok(())
    }
}

impl Deref for VocabularyTable {
    type Target = [VocabEntry];

    fn deref(&self) -> &Self::Target {
        &self.rows
    }
}

impl<'a> IntoIterator for &'a VocabularyTable {
    type Item = &'a VocabEntry;
    type IntoIter = std::slice::Iter<'a, VocabEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[inline(always)]
fn write_cell<W>(wtr: &mut W, cell: &str) -> std::io::Result<()>
where
    W: Write,
{
    if cell.is_empty() {
        return Ok(());
    }
    utils::quote_csv_cell(wtr, cell.as_bytes())
}

/// 1行分のセルをCSV形式で書き出します。
///
/// 空のセルは引用符なしの空文字列になります。
fn write_row<W, I, S>(wtr: &mut W, index: Option<&str>, cells: I) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut first = true;
    if let Some(index) = index {
        write_cell(wtr, index)?;
        first = false;
    }
    for cell in cells {
        if !first {
            wtr.write_all(b",")?;
        }
        write_cell(wtr, cell.as_ref())?;
        first = false;
    }
    wtr.write_all(b"\n")
}

/// 解析器が出力したレコード列をそのままCSV形式で書き出します。
///
/// 列見出しは `0` から始まる列番号です。フィールド数がレコードごとに異なる場合、
/// 足りないセルは空になります。`options.columns` は使用されません。
pub fn write_records_csv<W>(records: &[TokenRecord], mut wtr: W, options: &CsvOptions) -> Result<()>
where
    W: Write,
{
    if options.bom {
        wtr.write_all(UTF8_BOM)?;
    }
    let width = records
        .iter()
        .map(TokenRecord::num_fields)
        .max()
        .unwrap_or(0);
    write_row(
        &mut wtr,
        options.index.then_some(""),
        (0..width).map(|i| i.to_string()),
    )?;
    for (i, record) in records.iter().enumerate() {
        let index = i.to_string();
        let fields = record.fields();
        write_row(
            &mut wtr,
            options.index.then_some(index.as_str()),
            (0..width).map(|j| fields.get(j).map_or("", String::as_str)),
        )?;
    }
    wtr.flush()?;
    Ok(())
}
