//! Rahmu ⇄ Japanese kana transliteration.
//!
//! A fixed correspondence table pairs each Rahmu symbol with one kana
//! character (or a bare dakuten/handakuten mark); conversion is a per-token
//! first-match lookup with pass-through for everything unmapped.

mod convert;
mod table;

#[cfg(test)]
mod props;

pub use convert::{convert, translate, Direction};
pub use table::ScriptTable;
