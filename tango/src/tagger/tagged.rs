//! 解析済みテキストの読み込み

use std::fmt;
use std::io::{BufRead, BufReader, Read};
use std::str::FromStr;

use crate::errors::{Result, TangoError};
use crate::record::TokenRecord;
use crate::tagger::Tagger;

/// 形態素解析器の出力形式
///
/// どちらの形式でも、`EOS` の行と空行は文の区切りとして読み飛ばされます。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TaggedFormat {
    /// 各行が `表層形\t素性` で、素性はCSV形式（MeCabの標準出力、vibratoの`mecab`出力）
    #[default]
    Mecab,

    /// 各行がタブ区切りのフィールド列（`mecab -Ochasen` やUniDicの標準出力）
    Tab,
}

impl TaggedFormat {
    /// 解析器の出力を読み込み、レコード列に変換します。
    ///
    /// # エラー
    ///
    /// 入力がUTF-8として不正な場合は [`TangoError::StdIo`] を返します。
    /// [`TaggedFormat::Mecab`] で行にタブが1つも含まれない場合は
    /// [`TangoError::InvalidFormat`] を返します。
    pub fn parse<R>(self, rdr: R) -> Result<Vec<TokenRecord>>
    where
        R: Read,
    {
        let buf = BufReader::new(rdr);

        let mut records = vec![];
        for (i, line) in buf.lines().enumerate() {
            let line = line?;
            let line = line.strip_suffix('\r').unwrap_or(&line);
            if line.is_empty() || line == "EOS" {
                continue;
            }
            match self {
                Self::Mecab => match line.split_once('\t') {
                    Some((surface, feature)) => {
                        records.push(TokenRecord::from_feature(surface, feature));
                    }
                    None => {
                        return Err(TangoError::invalid_format(
                            "mecab",
                            format!(
                                "line {}: each line must be a pair of a surface and features or `EOS`",
                                i + 1
                            ),
                        ))
                    }
                },
                Self::Tab => records.push(TokenRecord::new(line.split('\t'))),
            }
        }

        Ok(records)
    }

    /// 設定値としての名前を返します。
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mecab => "mecab",
            Self::Tab => "tab",
        }
    }
}

impl Tagger for TaggedFormat {
    /// すでに解析済みのテキストを読み込みます。
    fn tag(&self, text: &str) -> Result<Vec<TokenRecord>> {
        self.parse(text.as_bytes())
    }
}

impl fmt::Display for TaggedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TaggedFormat {
    type Err = TangoError;

    fn from_str(format: &str) -> Result<Self> {
        match format {
            "mecab" => Ok(Self::Mecab),
            "tab" => Ok(Self::Tab),
            _ => Err(TangoError::invalid_argument(
                "format",
                format!("'{format}' is not one of mecab, tab"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mecab() {
        let data = "\
トスカーナ\t名詞,固有名詞,地域,一般,*,*,トスカーナ,トスカーナ,トスカーナ
地方\t名詞,一般,*,*,*,*,地方,チホウ,チホー
に\t助詞,格助詞,一般,*,*,*,に,ニ,ニ
行く\t動詞,自立,*,*,五段・カ行促音便,基本形,行く,イク,イク
EOS
火星\t名詞,一般,*,*,*,*,火星,カセイ,カセイ
EOS
";
        let records = TaggedFormat::Mecab.parse(data.as_bytes()).unwrap();
        assert_eq!(5, records.len());
        assert_eq!(Some("トスカーナ"), records[0].field(0));
        assert_eq!(Some("チホウ"), records[1].field(8));
        assert_eq!(Some("助詞"), records[2].field(1));
        assert_eq!(Some("火星"), records[4].field(0));
        assert_eq!(10, records[4].num_fields());
    }

    #[test]
    fn test_parse_tab() {
        let data = "学校\tガッコウ\t学校\t名詞-一般\t\t\r\nEOS\r\n";
        let records = TaggedFormat::Tab.parse(data.as_bytes()).unwrap();
        assert_eq!(
            records,
            vec![TokenRecord::new(["学校", "ガッコウ", "学校", "名詞-一般", "", ""])]
        );
    }

    #[test]
    fn test_parse_invalid_mecab() {
        let data = "学校\n";
        let result = TaggedFormat::Mecab.parse(data.as_bytes());
        assert!(matches!(result, Err(TangoError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_invalid_utf8() {
        let data = b"\xff\xfe\t\n";
        let result = TaggedFormat::Tab.parse(&data[..]);
        assert!(matches!(result, Err(TangoError::StdIo(_))));
    }

    #[test]
    fn test_tag_empty() {
        assert!(TaggedFormat::Mecab.tag("").unwrap().is_empty());
        assert!(TaggedFormat::Tab.tag("EOS\n").unwrap().is_empty());
    }
}
