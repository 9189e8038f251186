//! 表層形の文字種による絞り込み
//!
//! 表層形に含まれる漢字（CJK統合漢字）の有無によって単語を選別します。

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::errors::{Result, TangoError};

/// 漢字として扱うコードポイントの範囲
pub const IDEOGRAPH_RANGE: RangeInclusive<char> = '\u{4E00}'..='\u{9FD0}';

/// 文字が漢字かどうかを判定します。
#[inline(always)]
pub fn is_ideograph(c: char) -> bool {
    IDEOGRAPH_RANGE.contains(&c)
}

/// 表層形に要求する漢字の含まれ方
///
/// `Only` だけが文字列全体への一致で、`Mixed` と `None` は1文字でも漢字があるかを
/// 調べる探索です。漢字だけの熟語と、漢字を含む語を区別するための非対称性です。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KanjiMode {
    /// 表層形がすべて漢字で構成される（空文字列は不合格）
    #[default]
    Only,

    /// 表層形に漢字を1文字以上含む
    Mixed,

    /// 表層形に漢字を含まない
    None,
}

impl KanjiMode {
    /// 表層形がこのモードの条件を満たすかどうかを判定します。
    ///
    /// # 例
    ///
    /// ```
    /// use tango::script::KanjiMode;
    ///
    /// assert!(KanjiMode::Only.passes("学校"));
    /// assert!(!KanjiMode::Only.passes("行く"));
    /// assert!(KanjiMode::Mixed.passes("行く"));
    /// assert!(KanjiMode::None.passes("これ"));
    /// ```
    pub fn passes(self, surface: &str) -> bool {
        match self {
            Self::Only => !surface.is_empty() && surface.chars().all(is_ideograph),
            Self::Mixed => surface.chars().any(is_ideograph),
            Self::None => !surface.chars().any(is_ideograph),
        }
    }

    /// 設定値としての名前を返します。
    pub const fn name(self) -> &'static str {
        match self {
            Self::Only => "only",
            Self::Mixed => "mixed",
            Self::None => "none",
        }
    }
}

impl fmt::Display for KanjiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KanjiMode {
    type Err = TangoError;

    fn from_str(mode: &str) -> Result<Self> {
        match mode {
            "only" => Ok(Self::Only),
            "mixed" => Ok(Self::Mixed),
            "none" => Ok(Self::None),
            _ => Err(TangoError::invalid_argument(
                "kanji_mode",
                format!("'{mode}' is not one of only, mixed, none"),
            )),
        }
    }
}

/// 表層形が指定されたモードの条件を満たすかどうかを判定します。
///
/// [`KanjiMode::passes`] の関数形式です。
#[inline]
pub fn passes_script_gate(surface: &str, mode: KanjiMode) -> bool {
    mode.passes(surface)
}
