//! 語彙テーブルを作成するユーティリティ
//!
//! このバイナリは、入力テキストを形態素解析し、表層形・読み・品詞からなる
//! 重複のない語彙テーブルを作成して、標準出力とCSVファイルに書き出します。
//!
//! 形態素解析は次のいずれかで行います。
//!
//! - `--sysdic`: vibratoのシステム辞書を読み込んでプロセス内で解析
//! - `--command`: `mecab` などの外部コマンドを実行
//! - どちらも指定しない場合: 入力ファイルをすでに解析済みの出力として読み込み

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tango::errors::{Result, TangoError};
use tango::record::FieldLayout;
use tango::script::KanjiMode;
use tango::table::{write_records_csv, ColumnNames, CsvOptions, SortKey, VocabularyTable};
use tango::tagger::{read_text, CommandTagger, TaggedFormat, Tagger, VibratoTagger};
use tango::{Pipeline, TokenRecord};

use clap::Parser;

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "extract", version, about = "Builds a vocabulary table from a Japanese text")]
struct Args {
    /// Input file. Raw text with --sysdic or --command, tagger output otherwise.
    input: PathBuf,

    /// System dictionary (in zstd) used to tokenize the input.
    #[clap(short = 'i', long)]
    sysdic: Option<PathBuf>,

    /// External tagger command, e.g. "mecab -Ochasen".
    #[clap(short = 'c', long, conflicts_with = "sysdic")]
    command: Option<String>,

    /// Format of the tagger output. Choices are mecab and tab.
    #[clap(short = 'F', long, default_value = "mecab")]
    tagger_format: TaggedFormat,

    /// Field layout: chasen, unidic-tab, ipadic, unidic, or "surface,reading,pos[,depth]".
    ///
    /// Defaults to ipadic for the mecab format and chasen for the tab format.
    #[clap(short = 'l', long)]
    layout: Option<FieldLayout>,

    /// Kanji composition of the surface. Choices are only, mixed, and none.
    #[clap(short = 'k', long, default_value = "only")]
    kanji: KanjiMode,

    /// Comma-separated part-of-speech labels to exclude. Pass "" to keep everything.
    #[clap(short = 'x', long, value_delimiter(','), default_value = "助詞,記号")]
    exclude_pos: Vec<String>,

    /// Comma-separated sort keys. Choices are surface, reading, and pos.
    #[clap(short = 's', long, value_delimiter(','), default_value = "surface,reading,pos")]
    sort_by: Vec<SortKey>,

    /// Keeps readings in katakana.
    #[clap(long)]
    keep_katakana: bool,

    /// Reads missing fields as "*" instead of failing.
    #[clap(long)]
    fill_missing: bool,

    /// Output directory. Defaults to the directory of the input file.
    #[clap(short = 'o', long)]
    out_dir: Option<PathBuf>,

    /// Also writes the raw tagger records to <stem>_initial.csv.
    #[clap(long)]
    dump_initial: bool,

    /// Column headers. Choices are en and ja.
    #[clap(long, default_value = "en")]
    columns: ColumnNames,

    /// Omits the UTF-8 BOM from the CSV files.
    #[clap(long)]
    no_bom: bool,

    /// Omits the row index column from the CSV files.
    #[clap(long)]
    no_index: bool,

    /// Ignores white spaces in input strings (with --sysdic).
    #[clap(short = 'S', long)]
    ignore_space: bool,

    /// Maximum length of unknown words (with --sysdic).
    #[clap(short = 'M', long)]
    max_grouping_len: Option<usize>,
}

impl Args {
    /// 引数から形態素解析器を作成する
    fn tagger(&self) -> Result<Box<dyn Tagger>> {
        if let Some(command) = &self.command {
            return Ok(Box::new(CommandTagger::from_command_line(
                command,
                self.tagger_format,
            )?));
        }
        if let Some(sysdic) = &self.sysdic {
            eprintln!("Loading the dictionary...");
            let tagger = VibratoTagger::from_zstd(sysdic)?
                .ignore_space(self.ignore_space)?
                .max_grouping_len(self.max_grouping_len.unwrap_or(0));
            return Ok(Box::new(tagger));
        }
        Ok(Box::new(self.tagger_format))
    }

    /// 引数からパイプラインを作成する
    fn pipeline(&self) -> Result<Pipeline> {
        let layout = self.layout.unwrap_or(
            if self.sysdic.is_some() || self.tagger_format == TaggedFormat::Mecab {
                FieldLayout::IPADIC
            } else {
                FieldLayout::CHASEN
            },
        );
        Ok(Pipeline::new()
            .layout(layout)?
            .fill_missing_fields(self.fill_missing)
            .exclude_pos(self.exclude_pos.iter().cloned())
            .kanji_mode(self.kanji)
            .sort_keys(self.sort_by.iter().copied())
            .normalize_reading(!self.keep_katakana))
    }

    fn csv_options(&self) -> CsvOptions {
        CsvOptions {
            bom: !self.no_bom,
            index: !self.no_index,
            columns: self.columns,
        }
    }

    /// 出力ファイルのパスを返す
    fn out_path(&self, suffix: &str) -> PathBuf {
        let dir = self
            .out_dir
            .clone()
            .or_else(|| self.input.parent().map(Path::to_path_buf))
            .unwrap_or_default();
        let stem = self
            .input
            .file_stem()
            .map_or_else(|| "output".into(), |s| s.to_string_lossy().into_owned());
        dir.join(format!("{stem}_{suffix}.csv"))
    }
}

/// テーブルとレコードをCSVファイルに書き出す
fn write_files(args: &Args, records: &[TokenRecord], table: &VocabularyTable) -> Result<()> {
    let options = args.csv_options();
    if args.dump_initial {
        let path = args.out_path("initial");
        eprintln!("Writing {}", path.display());
        write_records_csv(records, BufWriter::new(File::create(path)?), &options)?;
    }
    let path = args.out_path("clean");
    eprintln!("Writing {}", path.display());
    table.write_csv(BufWriter::new(File::create(path)?), &options)?;
    Ok(())
}

/// メイン関数
///
/// 入力を形態素解析して語彙テーブルを作成し、CSVファイルに書き出した上で、
/// 標準出力にも表示します。標準出力が端末でない場合はCSV形式で出力します。
///
/// # 戻り値
///
/// 実行が成功した場合は `Ok(())`、エラーが発生した場合はエラー情報
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let pipeline = args.pipeline()?;
    let tagger = args.tagger()?;

    let text = read_text(&args.input)?;

    eprintln!("Tokenizing...");
    let records = tagger.tag(&text)?;
    let table = pipeline.run(&records).map_err(|e| {
        if let TangoError::MalformedRecord(_) = e {
            eprintln!("Records of unknown words may be shorter; see --fill-missing and --layout.");
        }
        e
    })?;
    eprintln!("{} records, {} words", records.len(), table.len());

    write_files(&args, &records, &table)?;

    let out = std::io::stdout();
    let mut out = BufWriter::new(out.lock());
    if atty::is(atty::Stream::Stdout) {
        table.write_text(&mut out, args.columns)?;
    } else {
        let options = CsvOptions {
            bom: false,
            ..args.csv_options()
        };
        table.write_csv(&mut out, &options)?;
    }
    out.flush()?;

    Ok(())
}
