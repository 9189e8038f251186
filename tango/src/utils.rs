//! CSV処理のユーティリティ関数を提供するモジュール
//!
//! 形態素解析器の素性文字列の分割と、出力テーブルのセルの引用符処理を行います。

use std::io::Write;

use csv_core::{ReadFieldResult, WriteResult};

/// CSVセルのデータを必要に応じて引用符で囲んで書き出す
///
/// セル内にカンマ、ダブルクォート、改行が含まれる場合のみ引用符で囲み、
/// ダブルクォートはエスケープされます。
///
/// # 引数
///
/// * `wtr` - 書き込み先のWriterオブジェクト
/// * `data` - CSVセルとして書き込むバイト列
///
/// # エラー
///
/// 書き込み中にI/Oエラーが発生した場合は`std::io::Error`を返します。
pub fn quote_csv_cell<W>(mut wtr: W, mut data: &[u8]) -> std::io::Result<()>
where
    W: Write,
{
    let mut output = [0; 4096];
    let mut writer = csv_core::Writer::new();
    loop {
        let (result, nin, nout) = writer.field(data, &mut output);
        wtr.write_all(&output[..nout])?;
        if result == WriteResult::InputEmpty {
            break;
        }
        data = &data[nin..];
    }
    loop {
        let (result, nout) = writer.finish(&mut output);
        wtr.write_all(&output[..nout])?;
        if result == WriteResult::InputEmpty {
            break;
        }
    }
    Ok(())
}

/// CSV形式の行を解析してフィールドのベクターに分割する
///
/// ダブルクォートで囲まれたフィールドや、フィールド内のカンマも正しく処理します。
/// 出力バッファより長いフィールドも分割されずに1つのフィールドとして返されます。
///
/// # 例
///
/// ```
/// # use tango::utils::parse_csv_row;
/// let fields = parse_csv_row("名詞,ガッコウ");
/// assert_eq!(fields, vec!["名詞", "ガッコウ"]);
///
/// let fields_with_quote = parse_csv_row("名詞,\"1,2-ジクロロエタン\"");
/// assert_eq!(fields_with_quote, vec!["名詞", "1,2-ジクロロエタン"]);
/// ```
pub fn parse_csv_row(row: &str) -> Vec<String> {
    let mut features = vec![];
    let mut rdr = csv_core::Reader::new();
    let mut bytes = row.as_bytes();
    let mut output = [0; 4096];
    let mut field = vec![];
    loop {
        let (result, nin, nout) = rdr.read_field(bytes, &mut output);
        field.extend_from_slice(&output[..nout]);
        bytes = &bytes[nin..];
        let end = match result {
            ReadFieldResult::OutputFull => continue,
            ReadFieldResult::Field { record_end } => record_end,
            ReadFieldResult::InputEmpty | ReadFieldResult::End => true,
        };
        // Delimiters are ASCII, so a field cut out of a `&str` is always valid UTF-8.
        features.push(String::from_utf8_lossy(&field).into_owned());
        field.clear();
        if end {
            break;
        }
    }
    features
}
