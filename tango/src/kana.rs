//! 読みの文字種変換
//!
//! 形態素解析器が片仮名で出力する読みを平仮名に変換します。
//! 変換表は片仮名ブロックと平仮名ブロックの同じ並びを位置で対応させた固定配列で、
//! コンパイル時に一度だけ構築され、以後変更されません。

/// 変換対象となる片仮名の先頭（`ァ`）
const KATAKANA_FIRST: u32 = 0x30A1;

/// 変換対象となる片仮名の末尾（`ヶ`）
const KATAKANA_LAST: u32 = 0x30F6;

/// 対応する平仮名の先頭（`ぁ`）
const HIRAGANA_FIRST: u32 = 0x3041;

const TABLE_LEN: usize = (KATAKANA_LAST - KATAKANA_FIRST + 1) as usize;

/// 片仮名のコードポイントから平仮名への変換表
///
/// `KATA_TO_HIRA[c - KATAKANA_FIRST]` が片仮名 `c` に対応する平仮名です。
static KATA_TO_HIRA: [char; TABLE_LEN] = build_table();

const fn build_table() -> [char; TABLE_LEN] {
    let mut table = ['\0'; TABLE_LEN];
    let mut i = 0;
    while i < TABLE_LEN {
        // U+3041..=U+3096 contains no surrogates, so every offset is a valid char.
        table[i] = match char::from_u32(HIRAGANA_FIRST + i as u32) {
            Some(c) => c,
            None => '\0',
        };
        i += 1;
    }
    table
}

/// 1文字を片仮名から平仮名に変換します。
///
/// 変換表にない文字（平仮名、長音符 `ー`、ASCII、記号など）はそのまま返します。
///
/// # 例
///
/// ```
/// use tango::kana::katakana_to_hiragana;
///
/// assert_eq!(katakana_to_hiragana('ガ'), 'が');
/// assert_eq!(katakana_to_hiragana('ー'), 'ー');
/// assert_eq!(katakana_to_hiragana('a'), 'a');
/// ```
#[inline(always)]
pub fn katakana_to_hiragana(c: char) -> char {
    let code = u32::from(c);
    if (KATAKANA_FIRST..=KATAKANA_LAST).contains(&code) {
        KATA_TO_HIRA[(code - KATAKANA_FIRST) as usize]
    } else {
        c
    }
}

/// 読みの文字列を片仮名から平仮名に正規化します。
///
/// 入力長に対して線形時間で動作し、失敗することはありません。
/// 出力に片仮名は残らないため、2回適用しても結果は変わりません。
///
/// # 例
///
/// ```
/// use tango::kana::normalize_reading;
///
/// assert_eq!(normalize_reading("ガッコウ"), "がっこう");
/// assert_eq!(normalize_reading("スーパー"), "すーぱー");
/// ```
pub fn normalize_reading(reading: &str) -> String {
    reading.chars().map(katakana_to_hiragana).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HIRAGANA: &str = "あいうえおぁぃぅぇぉかきくけこがぎぐげごさしすせそざじずぜぞたちつてとっだぢづでどなにぬねのはひふへほばびぶべぼぱぴぷぺぽまみむめもやゆよゃゅょらりるれろわをん";
    const KATAKANA: &str = "アイウエオァィゥェォカキクケコガギグゲゴサシスセソザジズゼゾタチツテトッダヂヅデドナニヌネノハヒフヘホバビブベボパピプペポマミムメモヤユヨャュョラリルレロワヲン";

    #[test]
    fn test_syllabary() {
        assert_eq!(HIRAGANA, normalize_reading(KATAKANA));
    }

    #[test]
    fn test_table_bounds() {
        assert_eq!(katakana_to_hiragana('ァ'), 'ぁ');
        assert_eq!(katakana_to_hiragana('ヴ'), 'ゔ');
        assert_eq!(katakana_to_hiragana('ヵ'), 'ゕ');
        assert_eq!(katakana_to_hiragana('ヶ'), 'ゖ');
        assert_eq!(katakana_to_hiragana('ヷ'), 'ヷ');
        assert_eq!(katakana_to_hiragana('゠'), '゠');
    }

    #[test]
    fn test_pass_through() {
        assert_eq!(normalize_reading("がっこう"), "がっこう");
        assert_eq!(normalize_reading("コーヒー・ブレイク"), "こーひー・ぶれいく");
        assert_eq!(normalize_reading("ABC 123"), "ABC 123");
        assert_eq!(normalize_reading(""), "");
    }

    #[test]
    fn test_idempotent() {
        for s in ["ガッコウ", "トウキョウト", "ヴァイオリン", "mixed カナ かな 漢字", "ー"] {
            let once = normalize_reading(s);
            assert_eq!(once, normalize_reading(&once));
        }
    }
}
