/// Character-level Unicode classification for Japanese text.

pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// The standalone dakuten (゛) and handakuten (゜) marks.
pub fn is_kana_mark(c: char) -> bool {
    c == '\u{309B}' || c == '\u{309C}'
}

/// Check if a string is a single token the kana column may contain:
/// one hiragana or katakana character, or a bare diacritic mark.
pub fn is_kana_token(s: &str) -> bool {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => is_hiragana(c) || is_katakana(c) || is_kana_mark(c),
        _ => false,
    }
}
