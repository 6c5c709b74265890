//! Built-in kana → romaji data, grouped by category.
//!
//! Several symbols share a romanization (ぢ/じ both read "ji", づ/ず both
//! read "zu", and every hiragana/katakana pair matches), so the values are
//! not unique across the table.

use crate::types::KanaCategory;

/// A single (symbol, transliteration) entry.
pub type KanaEntry = (&'static str, &'static str);

pub const HIRAGANA: &[KanaEntry] = &[
    ("あ", "a"), ("い", "i"), ("う", "u"), ("え", "e"), ("お", "o"),
    ("か", "ka"), ("き", "ki"), ("く", "ku"), ("け", "ke"), ("こ", "ko"),
    ("さ", "sa"), ("し", "shi"), ("す", "su"), ("せ", "se"), ("そ", "so"),
    ("た", "ta"), ("ち", "chi"), ("つ", "tsu"), ("て", "te"), ("と", "to"),
    ("な", "na"), ("に", "ni"), ("ぬ", "nu"), ("ね", "ne"), ("の", "no"),
    ("は", "ha"), ("ひ", "hi"), ("ふ", "fu"), ("へ", "he"), ("ほ", "ho"),
    ("ま", "ma"), ("み", "mi"), ("む", "mu"), ("め", "me"), ("も", "mo"),
    ("や", "ya"), ("ゆ", "yu"), ("よ", "yo"),
    ("ら", "ra"), ("り", "ri"), ("る", "ru"), ("れ", "re"), ("ろ", "ro"),
    ("わ", "wa"), ("を", "wo"), ("ん", "n"),
];

pub const KATAKANA: &[KanaEntry] = &[
    ("ア", "a"), ("イ", "i"), ("ウ", "u"), ("エ", "e"), ("オ", "o"),
    ("カ", "ka"), ("キ", "ki"), ("ク", "ku"), ("ケ", "ke"), ("コ", "ko"),
    ("サ", "sa"), ("シ", "shi"), ("ス", "su"), ("セ", "se"), ("ソ", "so"),
    ("タ", "ta"), ("チ", "chi"), ("ツ", "tsu"), ("テ", "te"), ("ト", "to"),
    ("ナ", "na"), ("ニ", "ni"), ("ヌ", "nu"), ("ネ", "ne"), ("ノ", "no"),
    ("ハ", "ha"), ("ヒ", "hi"), ("フ", "fu"), ("ヘ", "he"), ("ホ", "ho"),
    ("マ", "ma"), ("ミ", "mi"), ("ム", "mu"), ("メ", "me"), ("モ", "mo"),
    ("ヤ", "ya"), ("ユ", "yu"), ("ヨ", "yo"),
    ("ラ", "ra"), ("リ", "ri"), ("ル", "ru"), ("レ", "re"), ("ロ", "ro"),
    ("ワ", "wa"), ("ヲ", "wo"), ("ン", "n"),
];

pub const DAKUTEN: &[KanaEntry] = &[
    ("が", "ga"), ("ぎ", "gi"), ("ぐ", "gu"), ("げ", "ge"), ("ご", "go"),
    ("ざ", "za"), ("じ", "ji"), ("ず", "zu"), ("ぜ", "ze"), ("ぞ", "zo"),
    ("だ", "da"), ("ぢ", "ji"), ("づ", "zu"), ("で", "de"), ("ど", "do"),
    ("ば", "ba"), ("び", "bi"), ("ぶ", "bu"), ("べ", "be"), ("ぼ", "bo"),
    ("ガ", "ga"), ("ギ", "gi"), ("グ", "gu"), ("ゲ", "ge"), ("ゴ", "go"),
    ("ザ", "za"), ("ジ", "ji"), ("ズ", "zu"), ("ゼ", "ze"), ("ゾ", "zo"),
    ("ダ", "da"), ("ヂ", "ji"), ("ヅ", "zu"), ("デ", "de"), ("ド", "do"),
    ("バ", "ba"), ("ビ", "bi"), ("ブ", "bu"), ("ベ", "be"), ("ボ", "bo"),
];

pub const HANDAKUTEN: &[KanaEntry] = &[
    ("ぱ", "pa"), ("ぴ", "pi"), ("ぷ", "pu"), ("ぺ", "pe"), ("ぽ", "po"),
    ("パ", "pa"), ("ピ", "pi"), ("プ", "pu"), ("ペ", "pe"), ("ポ", "po"),
];

pub const YOUON: &[KanaEntry] = &[
    ("きゃ", "kya"), ("きゅ", "kyu"), ("きょ", "kyo"),
    ("しゃ", "sha"), ("しゅ", "shu"), ("しょ", "sho"),
    ("ちゃ", "cha"), ("ちゅ", "chu"), ("ちょ", "cho"),
    ("にゃ", "nya"), ("にゅ", "nyu"), ("にょ", "nyo"),
    ("ひゃ", "hya"), ("ひゅ", "hyu"), ("ひょ", "hyo"),
    ("みゃ", "mya"), ("みゅ", "myu"), ("みょ", "myo"),
    ("りゃ", "rya"), ("りゅ", "ryu"), ("りょ", "ryo"),
    ("キャ", "kya"), ("キュ", "kyu"), ("キョ", "kyo"),
    ("シャ", "sha"), ("シュ", "shu"), ("ショ", "sho"),
    ("チャ", "cha"), ("チュ", "chu"), ("チョ", "cho"),
    ("ニャ", "nya"), ("ニュ", "nyu"), ("ニョ", "nyo"),
    ("ヒャ", "hya"), ("ヒュ", "hyu"), ("ヒョ", "hyo"),
    ("ミャ", "mya"), ("ミュ", "myu"), ("ミョ", "myo"),
    ("リャ", "rya"), ("リュ", "ryu"), ("リョ", "ryo"),
];

pub const YOUON_DAKUTEN: &[KanaEntry] = &[
    ("ぎゃ", "gya"), ("ぎゅ", "gyu"), ("ぎょ", "gyo"),
    ("じゃ", "ja"), ("じゅ", "ju"), ("じょ", "jo"),
    ("びゃ", "bya"), ("びゅ", "byu"), ("びょ", "byo"),
    ("ギャ", "gya"), ("ギュ", "gyu"), ("ギョ", "gyo"),
    ("ジャ", "ja"), ("ジュ", "ju"), ("ジョ", "jo"),
    ("ビャ", "bya"), ("ビュ", "byu"), ("ビョ", "byo"),
];

pub const YOUON_HANDAKUTEN: &[KanaEntry] = &[
    ("ぴゃ", "pya"), ("ぴゅ", "pyu"), ("ぴょ", "pyo"),
    ("ピャ", "pya"), ("ピュ", "pyu"), ("ピョ", "pyo"),
];

pub const CHOUON: &[KanaEntry] = &[
    ("あー", "aa"), ("いー", "ii"), ("うー", "uu"), ("えー", "ee"), ("おー", "oo"),
    ("かー", "kaa"), ("きー", "kii"), ("くー", "kuu"), ("けー", "kee"), ("こー", "koo"),
    ("さー", "saa"), ("しー", "shii"), ("すー", "suu"), ("せー", "see"), ("そー", "soo"),
    ("たー", "taa"), ("ちー", "chii"), ("つー", "tsuu"), ("てー", "tee"), ("とー", "too"),
    ("なー", "naa"), ("にー", "nii"), ("ぬー", "nuu"), ("ねー", "nee"), ("のー", "noo"),
    ("はー", "haa"), ("ひー", "hii"), ("ふー", "fuu"), ("へー", "hee"), ("ほー", "hoo"),
    ("まー", "maa"), ("みー", "mii"), ("むー", "muu"), ("めー", "mee"), ("もー", "moo"),
    ("やー", "yaa"), ("ゆー", "yuu"), ("よー", "yoo"),
    ("らー", "raa"), ("りー", "rii"), ("るー", "ruu"), ("れー", "ree"), ("ろー", "roo"),
    ("わー", "waa"), ("をー", "woo"),
    ("アー", "aa"), ("イー", "ii"), ("ウー", "uu"), ("エー", "ee"), ("オー", "oo"),
    ("カー", "kaa"), ("キー", "kii"), ("クー", "kuu"), ("ケー", "kee"), ("コー", "koo"),
    ("サー", "saa"), ("シー", "shii"), ("スー", "suu"), ("セー", "see"), ("ソー", "soo"),
    ("ター", "taa"), ("チー", "chii"), ("ツー", "tsuu"), ("テー", "tee"), ("トー", "too"),
    ("ナー", "naa"), ("ニー", "nii"),
];

/// Entries belonging to a category.
pub fn entries(category: KanaCategory) -> &'static [KanaEntry] {
    match category {
        KanaCategory::Hiragana => HIRAGANA,
        KanaCategory::Katakana => KATAKANA,
        KanaCategory::Dakuten => DAKUTEN,
        KanaCategory::Handakuten => HANDAKUTEN,
        KanaCategory::Youon => YOUON,
        KanaCategory::YouonDakuten => YOUON_DAKUTEN,
        KanaCategory::YouonHandakuten => YOUON_HANDAKUTEN,
        KanaCategory::Chouon => CHOUON,
    }
}
