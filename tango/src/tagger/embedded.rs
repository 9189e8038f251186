//! vibratoによるプロセス内での形態素解析

use std::fs::File;
use std::path::Path;

use crate::errors::{Result, TangoError};
use crate::record::TokenRecord;
use crate::tagger::Tagger;

/// vibratoのシステム辞書を用いる [`Tagger`]
///
/// テキストを行ごとに解析し、各形態素を `表層形` と `素性` のCSVに分割した
/// レコードとして返します。レコードの形は [`TaggedFormat::Mecab`] で
/// 読み込んだ場合と同じです。
///
/// [`TaggedFormat::Mecab`]: crate::tagger::TaggedFormat::Mecab
pub struct VibratoTagger {
    tokenizer: vibrato::Tokenizer,
}

impl VibratoTagger {
    /// 辞書から新しいインスタンスを作成します。
    pub fn new(dict: vibrato::Dictionary) -> Self {
        Self {
            tokenizer: vibrato::Tokenizer::new(dict),
        }
    }

    /// zstdで圧縮されたシステム辞書を読み込みます。
    ///
    /// # エラー
    ///
    /// ファイルを読み込めない場合は [`TangoError::StdIo`]、
    /// 辞書として不正な場合は [`TangoError::Tagger`] を返します。
    pub fn from_zstd<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let rdr = zstd::Decoder::new(File::open(path)?)?;
        let dict = vibrato::Dictionary::read(rdr).map_err(|e| TangoError::Tagger(e.to_string()))?;
        Ok(Self::new(dict))
    }

    /// 空白を形態素から除くかどうかを設定します（MeCab互換）。
    ///
    /// # エラー
    ///
    /// 辞書に`SPACE`カテゴリが定義されていない場合は [`TangoError::Tagger`] を返します。
    pub fn ignore_space(mut self, yes: bool) -> Result<Self> {
        self.tokenizer = self
            .tokenizer
            .ignore_space(yes)
            .map_err(|e| TangoError::Tagger(e.to_string()))?;
        Ok(self)
    }

    /// 未知語の最大グルーピング長を設定します。0は無制限です。
    pub fn max_grouping_len(mut self, max_grouping_len: usize) -> Self {
        self.tokenizer = self.tokenizer.max_grouping_len(max_grouping_len);
        self
    }
}

impl Tagger for VibratoTagger {
    fn tag(&self, text: &str) -> Result<Vec<TokenRecord>> {
        let mut worker = self.tokenizer.new_worker();
        let mut records = vec![];
        for line in text.lines() {
            worker.reset_sentence(line);
            worker.tokenize();
            for i in 0..worker.num_tokens() {
                let t = worker.token(i);
                records.push(TokenRecord::from_feature(t.surface(), t.feature()));
            }
        }
        Ok(records)
    }
}
