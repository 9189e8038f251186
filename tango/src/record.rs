//! トークンレコードと語彙エントリ
//!
//! 形態素解析器が出力する1形態素分のレコード（[`TokenRecord`]）と、
//! そこから表層形・読み・品詞の3列を射影した語彙エントリ（[`VocabEntry`]）を定義します。
//! どの列がどの役割を持つかは [`FieldLayout`] で指定します。

use std::fmt;
use std::str::FromStr;

use crate::errors::{Result, TangoError};
use crate::utils;

/// 省略されたフィールドの代わりに読む値
const MISSING_FIELD: &str = "*";

/// 形態素解析器が出力した1形態素分のレコード
///
/// 各フィールドは解析器の出力順に保持されます。補助的なフィールドも含めて
/// そのまま保持し、パイプラインは [`FieldLayout`] で指定された列だけを参照します。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenRecord {
    fields: Vec<String>,
}

impl TokenRecord {
    /// フィールドの並びから新しいレコードを作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use tango::record::TokenRecord;
    ///
    /// let record = TokenRecord::new(["学校", "ガッコー", "ガッコウ", "学校", "名詞-普通名詞-一般"]);
    /// assert_eq!(record.num_fields(), 5);
    /// assert_eq!(record.field(2), Some("ガッコウ"));
    /// ```
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// MeCab形式の「表層形」と「CSV形式の素性文字列」からレコードを作成します。
    ///
    /// 表層形がフィールド0、素性の各要素がフィールド1以降になります。
    ///
    /// # 例
    ///
    /// ```
    /// use tango::record::TokenRecord;
    ///
    /// let record = TokenRecord::from_feature("学校", "名詞,一般,*,*,*,*,学校,ガッコウ,ガッコー");
    /// assert_eq!(record.field(0), Some("学校"));
    /// assert_eq!(record.field(1), Some("名詞"));
    /// assert_eq!(record.field(8), Some("ガッコウ"));
    /// ```
    pub fn from_feature(surface: &str, feature: &str) -> Self {
        let mut fields = Vec::with_capacity(16);
        fields.push(surface.to_string());
        fields.extend(utils::parse_csv_row(feature));
        Self { fields }
    }

    /// すべてのフィールドを返します。
    #[inline(always)]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// フィールド数を返します。
    #[inline(always)]
    pub fn num_fields(&self) -> usize {
        self.fields.len()
    }

    /// 指定したインデックスのフィールドを返します。
    #[inline(always)]
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// フィールドを取得し、存在しなければ形状エラーを返します。
    ///
    /// `fill_missing` が `true` の場合は、存在しないフィールドを `*` として読みます。
    fn required_field(&self, record: usize, index: usize, fill_missing: bool) -> Result<&str> {
        match self.field(index) {
            Some(field) => Ok(field),
            None if fill_missing => Ok(MISSING_FIELD),
            None => Err(TangoError::malformed_record(
                record,
                index,
                self.num_fields(),
            )),
        }
    }

    /// レコードを表層形・読み・品詞の3列に射影します。
    ///
    /// # 引数
    ///
    /// * `record` - 文書中のレコード番号（エラー報告用）
    /// * `layout` - 各役割のフィールド位置
    /// * `fill_missing` - 存在しないフィールドを `*` として読むかどうか
    ///
    /// # エラー
    ///
    /// `fill_missing` が `false` で、`layout` が指すフィールドが存在しない場合は
    /// [`TangoError::MalformedRecord`] を返します。
    /// `layout` が不正な場合は [`TangoError::InvalidArgument`] を返します。
    pub fn project(
        &self,
        record: usize,
        layout: &FieldLayout,
        fill_missing: bool,
    ) -> Result<VocabEntry> {
        let layout = layout.validate()?;
        let surface = self.required_field(record, layout.surface, fill_missing)?;
        let reading = self.required_field(record, layout.reading, fill_missing)?;
        let pos = if layout.pos_depth == 1 {
            self.required_field(record, layout.pos, fill_missing)?
                .to_string()
        } else {
            let mut labels = vec![];
            for index in layout.pos..layout.pos + layout.pos_depth {
                let label = self.required_field(record, index, fill_missing)?;
                if !label.is_empty() && label != MISSING_FIELD {
                    labels.push(label);
                }
            }
            labels.join("-")
        };
        Ok(VocabEntry::new(surface, reading, pos))
    }
}

/// 表層形・読み・品詞の3つ組
///
/// 比較・ハッシュは3つのフィールドすべての完全一致で行われます。
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VocabEntry {
    /// 表層形
    pub surface: String,

    /// 読み
    pub reading: String,

    /// 品詞
    pub pos: String,
}

impl VocabEntry {
    /// 新しいエントリを作成します。
    pub fn new<S, R, P>(surface: S, reading: R, pos: P) -> Self
    where
        S: Into<String>,
        R: Into<String>,
        P: Into<String>,
    {
        Self {
            surface: surface.into(),
            reading: reading.into(),
            pos: pos.into(),
        }
    }
}

/// 品詞として連結できるフィールド数の上限
pub const MAX_POS_DEPTH: usize = 16;

/// レコード内で表層形・読み・品詞がどのフィールドにあるかの指定
///
/// `pos_depth` が2以上の場合、品詞は `pos` から `pos_depth` 個のフィールドを
/// `*` と空文字列を除いて `-` で連結した階層ラベルになります。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldLayout {
    /// 表層形のフィールド位置
    pub surface: usize,

    /// 読みのフィールド位置
    pub reading: usize,

    /// 品詞の先頭フィールド位置
    pub pos: usize,

    /// 品詞として連結するフィールド数
    pub pos_depth: usize,
}

impl FieldLayout {
    /// `mecab -Ochasen` のタブ区切り出力
    pub const CHASEN: Self = Self::new(0, 1, 3, 1);

    /// UniDic辞書を用いたMeCabの標準タブ区切り出力
    pub const UNIDIC_TAB: Self = Self::new(0, 2, 4, 1);

    /// IPADICの「表層形\t素性CSV」出力
    pub const IPADIC: Self = Self::new(0, 8, 1, 4);

    /// UniDicの「表層形\t素性CSV」出力
    pub const UNIDIC: Self = Self::new(0, 7, 1, 4);

    /// 新しい配置を作成します。
    pub const fn new(surface: usize, reading: usize, pos: usize, pos_depth: usize) -> Self {
        Self {
            surface,
            reading,
            pos,
            pos_depth,
        }
    }

    /// プリセット名から配置を取得します。
    ///
    /// `chasen`、`unidic-tab`、`ipadic`、`unidic` のいずれかを受け付けます。
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "chasen" => Some(Self::CHASEN),
            "unidic-tab" => Some(Self::UNIDIC_TAB),
            "ipadic" => Some(Self::IPADIC),
            "unidic" => Some(Self::UNIDIC),
            _ => None,
        }
    }

    /// 配置の妥当性を検証します。
    ///
    /// # エラー
    ///
    /// `pos_depth` が1から [`MAX_POS_DEPTH`] の範囲にない場合、または品詞の
    /// フィールド範囲が `usize` に収まらない場合は [`TangoError::InvalidArgument`] を返します。
    pub fn validate(self) -> Result<Self> {
        if self.pos_depth == 0 || self.pos_depth > MAX_POS_DEPTH {
            return Err(TangoError::invalid_argument(
                "layout",
                format!("the part-of-speech depth must be in 1..={MAX_POS_DEPTH}"),
            ));
        }
        if self.pos.checked_add(self.pos_depth).is_none() {
            return Err(TangoError::invalid_argument(
                "layout",
                "the part-of-speech field range overflows",
            ));
        }
        Ok(self)
    }
}

impl Default for FieldLayout {
    fn default() -> Self {
        Self::UNIDIC_TAB
    }
}

impl fmt::Display for FieldLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.surface, self.reading, self.pos, self.pos_depth
        )
    }
}

impl FromStr for FieldLayout {
    type Err = TangoError;

    /// プリセット名、または `surface,reading,pos[,depth]` 形式のインデックス列をパースします。
    fn from_str(s: &str) -> Result<Self> {
        if let Some(layout) = Self::preset(s) {
            return Ok(layout);
        }
        let indices = s
            .split(',')
            .map(|x| x.trim().parse::<usize>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| {
                TangoError::invalid_argument("layout", format!("'{s}' is not a layout: {e}"))
            })?;
        let layout = match indices[..] {
            [surface, reading, pos] => Self::new(surface, reading, pos, 1),
            [surface, reading, pos, pos_depth] => Self::new(surface, reading, pos, pos_depth),
            _ => {
                return Err(TangoError::invalid_argument(
                    "layout",
                    format!("'{s}' must be a preset name or 3 or 4 comma-separated indices"),
                ))
            }
        };
        layout.validate()
    }
}
