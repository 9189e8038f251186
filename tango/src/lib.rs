//! # Tango
//!
//! Tangoは、日本語の形態素解析結果から学習用の語彙リストを作成するライブラリです。
//!
//! ## 概要
//!
//! 形態素解析器が出力したレコード列から表層形・読み・品詞の3列を取り出し、
//! 読みを平仮名に揃え、不要な品詞と文字種の語を取り除き、重複を除いて
//! 並べ替えた語彙テーブルを生成します。
//!
//! ## 主な機能
//!
//! - **読みの正規化**: 片仮名の読みを平仮名に変換
//! - **品詞による除外**: 助詞や記号などの機能語を除外
//! - **文字種による絞り込み**: 漢字のみ、漢字を含む、漢字を含まない語の選択
//! - **重複除去と並べ替え**: 指定した列の順に並べた重複のないテーブル
//! - **形態素解析器との接続**: 解析済みテキスト、外部コマンド、vibrato（`vibrato`フィーチャー有効時）
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use tango::record::FieldLayout;
//! use tango::script::KanjiMode;
//! use tango::tagger::TaggedFormat;
//! use tango::Pipeline;
//!
//! let tagged = "\
//! 学校\t名詞,一般,*,*,*,*,学校,ガッコウ,ガッコー
//! に\t助詞,格助詞,一般,*,*,*,に,ニ,ニ
//! 行く\t動詞,自立,*,*,五段・カ行促音便,基本形,行く,イク,イク
//! EOS
//! ";
//!
//! let pipeline = Pipeline::new()
//!     .layout(FieldLayout::IPADIC)?
//!     .kanji_mode(KanjiMode::Mixed);
//! let table = pipeline.run_text(&TaggedFormat::Mecab, tagged)?;
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table[0].surface, "学校");
//! assert_eq!(table[0].reading, "がっこう");
//! assert_eq!(table[0].pos, "名詞-一般");
//! assert_eq!(table[1].surface, "行く");
//! assert_eq!(table[1].pos, "動詞-自立");
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

/// エラー型の定義
pub mod errors;

/// 品詞と文字種による絞り込み
pub mod filter;

/// 読みの文字種変換
pub mod kana;

/// 語彙抽出パイプライン
pub mod pipeline;

/// トークンレコードと語彙エントリ
pub mod record;

/// 表層形の文字種の判定
pub mod script;

/// 重複除去・並べ替えとテーブルの出力
pub mod table;

/// 形態素解析器との接続
pub mod tagger;

/// CSV処理のユーティリティ関数
pub mod utils;

#[cfg(test)]
mod tests;

// Re-exports
pub use pipeline::Pipeline;
pub use record::{FieldLayout, TokenRecord, VocabEntry};
pub use script::KanjiMode;
pub use table::{SortKey, VocabularyTable};
pub use tagger::Tagger;

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
