//! Tangoのテストモジュール群
//!
//! 仕様上のシナリオ、解析器出力の読み込みからテーブル出力までの一連の流れ、
//! ファイル入出力の動作を検証するテストを含みます。

mod scenarios;
mod tagged_output;
