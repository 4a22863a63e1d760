//! Compiled-in gojuon rows and romaji spellings.

use super::GojuonRow;

const fn row(
    romaji: &'static str,
    hiragana: &'static [&'static str],
    katakana: &'static [&'static str],
) -> GojuonRow {
    GojuonRow {
        romaji,
        hiragana,
        katakana,
    }
}

pub const GOJUON: &[GojuonRow] = &[
    // basic
    row("a", &["あ", "い", "う", "え", "お"], &["ア", "イ", "ウ", "エ", "オ"]),
    row("ka", &["か", "き", "く", "け", "こ"], &["カ", "キ", "ク", "ケ", "コ"]),
    row("sa", &["さ", "し", "す", "せ", "そ"], &["サ", "シ", "ス", "セ", "ソ"]),
    row("ta", &["た", "ち", "つ", "て", "と"], &["タ", "チ", "ツ", "テ", "ト"]),
    row("na", &["な", "に", "ぬ", "ね", "の"], &["ナ", "ニ", "ヌ", "ネ", "ノ"]),
    row("ha", &["は", "ひ", "ふ", "へ", "ほ"], &["ハ", "ヒ", "フ", "ヘ", "ホ"]),
    row("ma", &["ま", "み", "む", "め", "も"], &["マ", "ミ", "ム", "メ", "モ"]),
    row("ya", &["や", "ゆ", "よ"], &["ヤ", "ユ", "ヨ"]),
    row("ra", &["ら", "り", "る", "れ", "ろ"], &["ラ", "リ", "ル", "レ", "ロ"]),
    row("wa", &["わ", "を", "ん"], &["ワ", "ヲ", "ン"]),
    // voiced and semi-voiced
    row("ga", &["が", "ぎ", "ぐ", "げ", "ご"], &["ガ", "ギ", "グ", "ゲ", "ゴ"]),
    row("za", &["ざ", "じ", "ず", "ぜ", "ぞ"], &["ザ", "ジ", "ズ", "ゼ", "ゾ"]),
    row("da", &["だ", "ぢ", "づ", "で", "ど"], &["ダ", "ヂ", "ヅ", "デ", "ド"]),
    row("ba", &["ば", "び", "ぶ", "べ", "ぼ"], &["バ", "ビ", "ブ", "ベ", "ボ"]),
    row("pa", &["ぱ", "ぴ", "ぷ", "ぺ", "ぽ"], &["パ", "ピ", "プ", "ペ", "ポ"]),
    // contracted
    row("kya", &["きゃ", "きゅ", "きょ"], &["キャ", "キュ", "キョ"]),
    row("gya", &["ぎゃ", "ぎゅ", "ぎょ"], &["ギャ", "ギュ", "ギョ"]),
    row("sha", &["しゃ", "しゅ", "しょ"], &["シャ", "シュ", "ショ"]),
    row("ja", &["じゃ", "じゅ", "じょ"], &["ジャ", "ジュ", "ジョ"]),
    row("cha", &["ちゃ", "ちゅ", "ちょ"], &["チャ", "チュ", "チョ"]),
    row("nya", &["にゃ", "にゅ", "にょ"], &["ニャ", "ニュ", "ニョ"]),
    row("hya", &["ひゃ", "ひゅ", "ひょ"], &["ヒャ", "ヒュ", "ヒョ"]),
    row("bya", &["びゃ", "びゅ", "びょ"], &["ビャ", "ビュ", "ビョ"]),
    row("pya", &["ぴゃ", "ぴゅ", "ぴょ"], &["ピャ", "ピュ", "ピョ"]),
    row("mya", &["みゃ", "みゅ", "みょ"], &["ミャ", "ミュ", "ミョ"]),
    row("rya", &["りゃ", "りゅ", "りょ"], &["リャ", "リュ", "リョ"]),
];

/// Accepted spellings per glyph. The first spelling is the one shown to the user.
pub const ROMAJI: &[(&str, &[&str])] = &[
    ("あ", &["a"]), ("い", &["i"]), ("う", &["u"]), ("え", &["e"]), ("お", &["o"]),
    ("か", &["ka"]), ("き", &["ki"]), ("く", &["ku"]), ("け", &["ke"]), ("こ", &["ko"]),
    ("が", &["ga"]), ("ぎ", &["gi"]), ("ぐ", &["gu"]), ("げ", &["ge"]), ("ご", &["go"]),
    ("さ", &["sa"]), ("し", &["shi", "si"]), ("す", &["su"]), ("せ", &["se"]), ("そ", &["so"]),
    ("ざ", &["za"]), ("じ", &["ji", "zi"]), ("ず", &["zu"]), ("ぜ", &["ze"]), ("ぞ", &["zo"]),
    ("た", &["ta"]), ("ち", &["chi", "ti"]), ("つ", &["tsu", "tu"]), ("て", &["te"]), ("と", &["to"]),
    ("だ", &["da"]), ("ぢ", &["ji(di)", "ji", "di"]), ("づ", &["zu(du)", "zu", "du"]), ("で", &["de"]), ("ど", &["do"]),
    ("な", &["na"]), ("に", &["ni"]), ("ぬ", &["nu"]), ("ね", &["ne"]), ("の", &["no"]),
    ("は", &["ha"]), ("ひ", &["hi"]), ("ふ", &["fu", "hu"]), ("へ", &["he"]), ("ほ", &["ho"]),
    ("ば", &["ba"]), ("び", &["bi"]), ("ぶ", &["bu"]), ("べ", &["be"]), ("ぼ", &["bo"]),
    ("ぱ", &["pa"]), ("ぴ", &["pi"]), ("ぷ", &["pu"]), ("ぺ", &["pe"]), ("ぽ", &["po"]),
    ("ま", &["ma"]), ("み", &["mi"]), ("む", &["mu"]), ("め", &["me"]), ("も", &["mo"]),
    ("や", &["ya"]), ("ゆ", &["yu"]), ("よ", &["yo"]), ("ゃ", &["ya"]), ("ゅ", &["yu"]), ("ょ", &["yo"]),
    ("ら", &["ra"]), ("り", &["ri"]), ("る", &["ru"]), ("れ", &["re"]), ("ろ", &["ro"]),
    ("わ", &["wa"]), ("を", &["o(wo)", "o", "wo"]), ("ん", &["n"]),
    ("きゃ", &["kya"]), ("きゅ", &["kyu"]), ("きょ", &["kyo"]),
    ("ぎゃ", &["gya"]), ("ぎゅ", &["gyu"]), ("ぎょ", &["gyo"]),
    ("しゃ", &["sha"]), ("しゅ", &["shu"]), ("しょ", &["sho"]),
    ("じゃ", &["ja"]), ("じゅ", &["ju"]), ("じょ", &["jo"]),
    ("ちゃ", &["cha"]), ("ちゅ", &["chu"]), ("ちょ", &["cho"]),
    ("にゃ", &["nya"]), ("にゅ", &["nyu"]), ("にょ", &["nyo"]),
    ("ひゃ", &["hya"]), ("ひゅ", &["hyu"]), ("ひょ", &["hyo"]),
    ("びゃ", &["bya"]), ("びゅ", &["byu"]), ("びょ", &["byo"]),
    ("ぴゃ", &["pya"]), ("ぴゅ", &["pyu"]), ("ぴょ", &["pyo"]),
    ("みゃ", &["mya"]), ("みゅ", &["myu"]), ("みょ", &["myo"]),
    ("りゃ", &["rya"]), ("りゅ", &["ryu"]), ("りょ", &["ryo"]),
    ("ア", &["a"]), ("イ", &["i"]), ("ウ", &["u"]), ("エ", &["e"]), ("オ", &["o"]),
    ("カ", &["ka"]), ("キ", &["ki"]), ("ク", &["ku"]), ("ケ", &["ke"]), ("コ", &["ko"]),
    ("ガ", &["ga"]), ("ギ", &["gi"]), ("グ", &["gu"]), ("ゲ", &["ge"]), ("ゴ", &["go"]),
    ("サ", &["sa"]), ("シ", &["shi", "si"]), ("ス", &["su"]), ("セ", &["se"]), ("ソ", &["so"]),
    ("ザ", &["za"]), ("ジ", &["ji", "zi"]), ("ズ", &["zu"]), ("ゼ", &["ze"]), ("ゾ", &["zo"]),
    ("タ", &["ta"]), ("チ", &["chi", "ti"]), ("ツ", &["tsu", "tu"]), ("テ", &["te"]), ("ト", &["to"]),
    ("ダ", &["da"]), ("ヂ", &["ji(di)", "ji", "di"]), ("ヅ", &["zu(du)", "zu", "du"]), ("デ", &["de"]), ("ド", &["do"]),
    ("ナ", &["na"]), ("ニ", &["ni"]), ("ヌ", &["nu"]), ("ネ", &["ne"]), ("ノ", &["no"]),
    ("ハ", &["ha"]), ("ヒ", &["hi"]), ("フ", &["fu", "hu"]), ("ヘ", &["he"]), ("ホ", &["ho"]),
    ("バ", &["ba"]), ("ビ", &["bi"]), ("ブ", &["bu"]), ("ベ", &["be"]), ("ボ", &["bo"]),
    ("パ", &["pa"]), ("ピ", &["pi"]), ("プ", &["pu"]), ("ペ", &["pe"]), ("ポ", &["po"]),
    ("マ", &["ma"]), ("ミ", &["mi"]), ("ム", &["mu"]), ("メ", &["me"]), ("モ", &["mo"]),
    ("ヤ", &["ya"]), ("ユ", &["yu"]), ("ヨ", &["yo"]), ("ャ", &["ya"]), ("ュ", &["yu"]), ("ョ", &["yo"]),
    ("ラ", &["ra"]), ("リ", &["ri"]), ("ル", &["ru"]), ("レ", &["re"]), ("ロ", &["ro"]),
    ("ワ", &["wa"]), ("ヲ", &["o(wo)", "o", "wo"]), ("ン", &["n"]),
    ("キャ", &["kya"]), ("キュ", &["kyu"]), ("キョ", &["kyo"]),
    ("ギャ", &["gya"]), ("ギュ", &["gyu"]), ("ギョ", &["gyo"]),
    ("シャ", &["sha"]), ("シュ", &["shu"]), ("ショ", &["sho"]),
    ("ジャ", &["ja"]), ("ジュ", &["ju"]), ("ジョ", &["jo"]),
    ("チャ", &["cha"]), ("チュ", &["chu"]), ("チョ", &["cho"]),
    ("ニャ", &["nya"]), ("ニュ", &["nyu"]), ("ニョ", &["nyo"]),
    ("ヒャ", &["hya"]), ("ヒュ", &["hyu"]), ("ヒョ", &["hyo"]),
    ("ビャ", &["bya"]), ("ビュ", &["byu"]), ("ビョ", &["byo"]),
    ("ピャ", &["pya"]), ("ピュ", &["pyu"]), ("ピョ", &["pyo"]),
    ("ミャ", &["mya"]), ("ミュ", &["myu"]), ("ミョ", &["myo"]),
    ("リャ", &["rya"]), ("リュ", &["ryu"]), ("リョ", &["ryo"]),
];
