//! 形態素解析器との接続
//!
//! パイプラインは形態素解析器を、テキストを受け取ってレコード列を返す関数として扱います。
//! このモジュールはその境界となる [`Tagger`] トレイトと、いくつかの実装を提供します。
//!
//! - [`TaggedFormat`]: すでに解析済みの出力テキストを読み込みます
//! - [`CommandTagger`]: `mecab` などの外部プロセスを実行します
//! - [`VibratoTagger`]: vibratoの辞書を読み込み、プロセス内で解析します
//!   （`vibrato`フィーチャーが有効な場合のみ）

mod command;
#[cfg(feature = "vibrato")]
mod embedded;
mod tagged;

use std::fs;
use std::path::Path;

use crate::errors::Result;
use crate::record::TokenRecord;

pub use command::CommandTagger;
#[cfg(feature = "vibrato")]
#[cfg_attr(docsrs, doc(cfg(feature = "vibrato")))]
pub use embedded::VibratoTagger;
pub use tagged::TaggedFormat;

/// テキストを形態素のレコード列に変換する形態素解析器
///
/// レコードは文書中の出現順に並びます。空のテキストに対しては空のベクターを返します。
pub trait Tagger {
    /// テキストを解析します。
    ///
    /// # エラー
    ///
    /// 解析器が失敗した場合や、出力を解釈できない場合はエラーを返します。
    fn tag(&self, text: &str) -> Result<Vec<TokenRecord>>;
}

impl<F> Tagger for F
where
    F: Fn(&str) -> Result<Vec<TokenRecord>>,
{
    fn tag(&self, text: &str) -> Result<Vec<TokenRecord>> {
        self(text)
    }
}

/// 入力文書をUTF-8テキストとして読み込みます。
///
/// # エラー
///
/// ファイルを読み込めない場合は [`TangoError::StdIo`]、
/// UTF-8として不正な場合は [`TangoError::Utf8`] を返します。
///
/// [`TangoError::StdIo`]: crate::errors::TangoError::StdIo
/// [`TangoError::Utf8`]: crate::errors::TangoError::Utf8
pub fn read_text<P>(path: P) -> Result<String>
where
    P: AsRef<Path>,
{
    let bytes = fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}
