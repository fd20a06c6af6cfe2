use std::collections::HashMap;
use std::sync::OnceLock;

/// The Rahmu ⇄ kana correspondence list, in declaration order.
///
/// Order matters: several Rahmu tokens appear more than once (the small-kana
/// rows reuse the plain vowel and `z`/`7`/`8`/`9` symbols, and the katakana
/// block repeats the entire hiragana block's source column). Lookup always
/// resolves to the first occurrence, so this list must never be reordered
/// or deduplicated.
///
/// Source tokens are one ASCII glyph, optionally followed by `@` (dakuten)
/// or `[` (handakuten). Target tokens are exactly one kana character, except
/// the last two entries which map the bare diacritic marks themselves.
#[rustfmt::skip]
pub(crate) static PAIRS: &[(&str, &str)] = &[
    // hiragana
    ("3", "あ"), ("e", "い"), ("4", "う"), ("5", "え"), ("6", "お"),
    ("t", "か"), ("g", "き"), ("h", "く"), (":", "け"), ("b", "こ"),
    ("x", "さ"), ("d", "し"), ("r", "す"), ("p", "せ"), ("c", "そ"),
    ("q", "た"), ("a", "ち"), ("z", "つ"), ("w", "て"), ("s", "と"),
    ("u", "な"), ("i", "に"), ("1", "ぬ"), ("<", "ね"), ("k", "の"),
    ("f", "は"), ("v", "ひ"), ("2", "ふ"), ("^", "へ"), ("-", "ほ"),
    ("j", "ま"), ("n", "み"), ("]", "む"), ("/", "め"), ("m", "も"),
    ("7", "や"), ("8", "ゆ"), ("9", "よ"),
    ("o", "ら"), ("l", "り"), (".", "る"), (";", "れ"), ("\\", "ろ"),
    ("0", "わ"), ("=", "を"), ("y", "ん"),
    ("t@", "が"), ("g@", "ぎ"), ("h@", "ぐ"), (":@", "げ"), ("b@", "ご"),
    ("x@", "ざ"), ("d@", "じ"), ("r@", "ず"), ("p@", "ぜ"), ("c@", "ぞ"),
    ("q@", "だ"), ("a@", "ぢ"), ("z@", "づ"), ("w@", "で"), ("s@", "ど"),
    ("f@", "ば"), ("v@", "び"), ("2@", "ぶ"), ("^@", "べ"), ("-@", "ぼ"),
    ("f[", "ぱ"), ("v[", "ぴ"), ("2[", "ぷ"), ("^[", "ぺ"), ("-[", "ぽ"),
    ("3", "ぁ"), ("e", "ぃ"), ("4", "ぅ"), ("5", "ぇ"), ("6", "ぉ"),
    ("z", "っ"), ("7", "ゃ"), ("8", "ゅ"), ("9", "ょ"),
    // katakana, same source column again
    ("3", "ア"), ("e", "イ"), ("4", "ウ"), ("5", "エ"), ("6", "オ"),
    ("t", "カ"), ("g", "キ"), ("h", "ク"), (":", "ケ"), ("b", "コ"),
    ("x", "サ"), ("d", "シ"), ("r", "ス"), ("p", "セ"), ("c", "ソ"),
    ("q", "タ"), ("a", "チ"), ("z", "ツ"), ("w", "テ"), ("s", "ト"),
    ("u", "ナ"), ("i", "ニ"), ("1", "ヌ"), ("<", "ネ"), ("k", "ノ"),
    ("f", "ハ"), ("v", "ヒ"), ("2", "フ"), ("^", "ヘ"), ("-", "ホ"),
    ("j", "マ"), ("n", "ミ"), ("]", "ム"), ("/", "メ"), ("m", "モ"),
    ("7", "ヤ"), ("8", "ユ"), ("9", "ヨ"),
    ("o", "ラ"), ("l", "リ"), (".", "ル"), (";", "レ"), ("\\", "ロ"),
    ("0", "ワ"), ("=", "ヲ"), ("y", "ン"),
    ("t@", "ガ"), ("g@", "ギ"), ("h@", "グ"), (":@", "ゲ"), ("b@", "ゴ"),
    ("x@", "ザ"), ("d@", "ジ"), ("r@", "ズ"), ("p@", "ゼ"), ("c@", "ゾ"),
    ("q@", "ダ"), ("a@", "ヂ"), ("z@", "ヅ"), ("w@", "デ"), ("s@", "ド"),
    ("f@", "バ"), ("v@", "ビ"), ("2@", "ブ"), ("^@", "ベ"), ("-@", "ボ"),
    ("f[", "パ"), ("v[", "ピ"), ("2[", "プ"), ("^[", "ペ"), ("-[", "ポ"),
    ("3", "ァ"), ("e", "ィ"), ("4", "ゥ"), ("5", "ェ"), ("6", "ォ"),
    ("z", "ッ"), ("7", "ャ"), ("8", "ュ"), ("9", "ョ"),
    // bare diacritic marks
    ("@", "゛"), ("[", "゜"),
];

/// Bidirectional first-match lookup over [`PAIRS`].
///
/// Both directions are precomputed at initialization; because the pairing is
/// not injective they are independent maps, not inverses of each other.
pub struct ScriptTable {
    to_kana: HashMap<&'static str, &'static str>,
    to_rahmu: HashMap<&'static str, &'static str>,
}

impl ScriptTable {
    /// Get or initialize the global singleton.
    pub fn global() -> &'static ScriptTable {
        static INSTANCE: OnceLock<ScriptTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let mut to_kana = HashMap::with_capacity(PAIRS.len());
            let mut to_rahmu = HashMap::with_capacity(PAIRS.len());
            for &(rahmu, kana) in PAIRS {
                // or_insert keeps the first occurrence, matching the
                // ascending-index scan of the reference table.
                to_kana.entry(rahmu).or_insert(kana);
                to_rahmu.entry(kana).or_insert(rahmu);
            }
            ScriptTable { to_kana, to_rahmu }
        })
    }

    /// Look up the kana token paired with a Rahmu token.
    pub fn kana_for(&self, rahmu: &str) -> Option<&'static str> {
        self.to_kana.get(rahmu).copied()
    }

    /// Look up the Rahmu token paired with a kana token.
    pub fn rahmu_for(&self, kana: &str) -> Option<&'static str> {
        self.to_rahmu.get(kana).copied()
    }

    /// The ordered correspondence list, for index-based inspection.
    pub fn pairs() -> &'static [(&'static str, &'static str)] {
        PAIRS
    }
}
