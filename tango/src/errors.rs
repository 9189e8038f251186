//! エラー型の定義
//!
//! このモジュールは、Tangoライブラリで使用されるすべてのエラー型を定義します。

use std::error::Error;
use std::fmt;

/// Tango専用のResult型
///
/// エラー型としてデフォルトで[`TangoError`]を使用します。
pub type Result<T, E = TangoError> = std::result::Result<T, E>;

/// Tangoのエラー型
///
/// パイプラインのどの段階で失敗しても、部分的な結果は返さずにこの型で失敗します。
#[derive(Debug, thiserror::Error)]
pub enum TangoError {
    /// 無効な引数エラー（設定値の誤り）
    ///
    /// [`InvalidArgumentError`]のエラーバリアント。
    #[error(transparent)]
    InvalidArgument(InvalidArgumentError),

    /// 無効なフォーマットエラー
    ///
    /// [`InvalidFormatError`]のエラーバリアント。
    #[error(transparent)]
    InvalidFormat(InvalidFormatError),

    /// レコードの形状エラー
    ///
    /// [`MalformedRecordError`]のエラーバリアント。
    #[error(transparent)]
    MalformedRecord(MalformedRecordError),

    /// 形態素解析器のエラー
    ///
    /// 外部プロセスの異常終了や辞書の読み込み失敗など、解析器側で発生したエラーです。
    #[error("Tagger failed: {0}")]
    Tagger(String),

    /// 標準I/Oエラー
    ///
    /// [`std::io::Error`]のエラーバリアント。
    #[error(transparent)]
    StdIo(#[from] std::io::Error),

    /// UTF-8デコードエラー
    ///
    /// [`std::string::FromUtf8Error`]のエラーバリアント。
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl TangoError {
    /// 無効な引数エラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - 引数の名前
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    /// 無効なフォーマットエラーを生成します
    ///
    /// # 引数
    ///
    /// * `arg` - フォーマット名
    /// * `msg` - エラーメッセージ
    pub(crate) fn invalid_format<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidFormat(InvalidFormatError {
            arg,
            msg: msg.into(),
        })
    }

    /// レコードの形状エラーを生成します
    ///
    /// # 引数
    ///
    /// * `record` - 文書中のレコード番号（0始まり）
    /// * `index` - 要求されたフィールドのインデックス
    /// * `num_fields` - レコードが実際に持っていたフィールド数
    pub(crate) const fn malformed_record(record: usize, index: usize, num_fields: usize) -> Self {
        Self::MalformedRecord(MalformedRecordError {
            record,
            index,
            num_fields,
        })
    }
}

/// 引数が無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// 引数の名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl InvalidArgumentError {
    /// 引数の名前を返します。
    pub fn arg(&self) -> &'static str {
        self.arg
    }
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

/// 入力フォーマットが無効な場合に使用されるエラー
#[derive(Debug)]
pub struct InvalidFormatError {
    /// フォーマットの名前
    pub(crate) arg: &'static str,

    /// エラーメッセージ
    pub(crate) msg: String,
}

impl fmt::Display for InvalidFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidFormatError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidFormatError {}

/// 設定されたインデックスのフィールドをレコードが持たない場合に使用されるエラー
///
/// フィールドの位置がずれたまま処理を続けると後段のフィルタがすべて誤るため、
/// 切り詰めずに即座に失敗します。
#[derive(Debug)]
pub struct MalformedRecordError {
    /// 文書中のレコード番号（0始まり）
    pub(crate) record: usize,

    /// 要求されたフィールドのインデックス
    pub(crate) index: usize,

    /// レコードのフィールド数
    pub(crate) num_fields: usize,
}

impl MalformedRecordError {
    /// 文書中のレコード番号を返します。
    pub fn record(&self) -> usize {
        self.record
    }

    /// 要求されたフィールドのインデックスを返します。
    pub fn index(&self) -> usize {
        self.index
    }

    /// レコードが持っていたフィールド数を返します。
    pub fn num_fields(&self) -> usize {
        self.num_fields
    }
}

impl fmt::Display for MalformedRecordError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "MalformedRecordError: record {} has {} fields, but field {} is required",
            self.record, self.num_fields, self.index
        )
    }
}

impl Error for MalformedRecordError {}
