use serde::Serialize;
use tracing::debug_span;

use super::table::ScriptTable;

/// Translation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    RahmuToKana,
    KanaToRahmu,
}

impl Direction {
    /// The direction that undoes this one.
    pub fn reversed(self) -> Direction {
        match self {
            Direction::RahmuToKana => Direction::KanaToRahmu,
            Direction::KanaToRahmu => Direction::RahmuToKana,
        }
    }
}

/// Convert a single token, passing it through unchanged when the table has
/// no pairing for it.
///
/// `token` is expected to be one Unicode code point (what [`translate`]
/// feeds in) or one of the table's own source tokens such as `"t@"`; the
/// engine does no segmentation, so a multi-code-point cluster is simply an
/// unknown token and passes through.
///
/// Total and pure: never fails, never allocates, safe to call from any
/// number of threads concurrently.
pub fn convert<'a>(direction: Direction, token: &'a str) -> &'a str {
    let table = ScriptTable::global();
    let mapped = match direction {
        Direction::RahmuToKana => table.kana_for(token),
        Direction::KanaToRahmu => table.rahmu_for(token),
    };
    mapped.unwrap_or(token)
}

/// Translate a whole string, one code point at a time.
///
/// Splits per Unicode code point (not grapheme cluster), converts each token
/// independently in order, and concatenates the results. Unmapped characters
/// — whitespace, punctuation, newlines — survive verbatim, so mixed text is
/// safe to feed in whole.
pub fn translate(direction: Direction, text: &str) -> String {
    let _span = debug_span!("translate", ?direction, chars = text.chars().count()).entered();
    let mut out = String::with_capacity(text.len());
    let mut buf = [0u8; 4];
    for c in text.chars() {
        out.push_str(convert(direction, c.encode_utf8(&mut buf)));
    }
    out
}
