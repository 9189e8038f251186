//! 外部の形態素解析器プロセスの実行

use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

use crate::errors::{Result, TangoError};
use crate::record::TokenRecord;
use crate::tagger::{TaggedFormat, Tagger};

/// 外部コマンドとして形態素解析器を実行する [`Tagger`]
///
/// テキストを標準入力に書き込み、標準出力を `format` の形式で読み込みます。
///
/// # 例
///
/// ```no_run
/// use tango::tagger::{CommandTagger, TaggedFormat, Tagger};
///
/// let tagger = CommandTagger::new("mecab", TaggedFormat::Tab).arg("-Ochasen");
/// let records = tagger.tag("学校に行く")?;
/// # Ok::<(), tango::errors::TangoError>(())
/// ```
#[derive(Clone, Debug)]
pub struct CommandTagger {
    program: String,
    args: Vec<String>,
    format: TaggedFormat,
}

impl CommandTagger {
    /// 新しいインスタンスを作成します。
    ///
    /// # 引数
    ///
    /// * `program` - 実行するプログラム
    /// * `format` - プログラムの出力形式
    pub fn new<S>(program: S, format: TaggedFormat) -> Self
    where
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: vec![],
            format,
        }
    }

    /// 空白区切りのコマンドラインから作成します。
    ///
    /// # エラー
    ///
    /// コマンドラインが空の場合は [`TangoError::InvalidArgument`] を返します。
    pub fn from_command_line(command_line: &str, format: TaggedFormat) -> Result<Self> {
        let mut words = command_line.split_whitespace();
        let program = words.next().ok_or_else(|| {
            TangoError::invalid_argument("command_line", "the tagger command is empty")
        })?;
        Ok(Self::new(program, format).args(words))
    }

    /// 引数を1つ追加します。
    pub fn arg<S>(mut self, arg: S) -> Self
    where
        S: Into<String>,
    {
        self.args.push(arg.into());
        self
    }

    /// 引数を追加します。
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl Tagger for CommandTagger {
    fn tag(&self, text: &str) -> Result<Vec<TokenRecord>> {
        log::debug!("running {} {:?}", self.program, self.args);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| TangoError::Tagger("stdin of the tagger is not captured".into()))?;

        // The tagger may fill its stdout pipe before reading all of stdin.
        let (written, output) = thread::scope(|s| {
            let writer = s.spawn(move || {
                stdin.write_all(text.as_bytes())?;
                if !text.ends_with('\n') {
                    stdin.write_all(b"\n")?;
                }
                Ok::<_, std::io::Error>(())
            });
            let output = child.wait_with_output();
            (writer.join(), output)
        });
        let output = output?;

        if !output.status.success() {
            return Err(TangoError::Tagger(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim_end()
            )));
        }
        written.map_err(|_| TangoError::Tagger("stdin writer panicked".into()))??;

        let stdout = String::from_utf8(output.stdout)?;
        self.format.tag(&stdout)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_command_tagger() {
        // `cat` echoes already tagged text back.
        let tagger = CommandTagger::new("cat", TaggedFormat::Tab);
        let records = tagger.tag("学校\tガッコウ\t名詞\nEOS").unwrap();
        assert_eq!(records, vec![TokenRecord::new(["学校", "ガッコウ", "名詞"])]);
    }

    #[test]
    fn test_command_failure() {
        let tagger = CommandTagger::from_command_line("sh -c false", TaggedFormat::Tab).unwrap();
        assert!(matches!(tagger.tag("学校"), Err(TangoError::Tagger(_))));
    }

    #[test]
    fn test_empty_command_line() {
        let result = CommandTagger::from_command_line("  ", TaggedFormat::Tab);
        assert!(matches!(result, Err(TangoError::InvalidArgument(_))));
    }
}
