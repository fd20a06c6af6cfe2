//! Property-based tests for the transliteration engine.
//!
//! Generates arbitrary input via proptest and verifies the totality,
//! pass-through, and compositionality guarantees.

use proptest::prelude::*;

use super::{convert, translate, Direction, ScriptTable};

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::RahmuToKana),
        Just(Direction::KanaToRahmu),
    ]
}

/// True when a token appears in neither column of the table.
fn outside_alphabet(token: &str) -> bool {
    !ScriptTable::pairs()
        .iter()
        .any(|&(rahmu, kana)| rahmu == token || kana == token)
}

proptest! {
    #[test]
    fn unmapped_tokens_pass_through(c in any::<char>(), direction in arb_direction()) {
        let token = c.to_string();
        prop_assume!(outside_alphabet(&token));
        prop_assert_eq!(convert(direction, &token), token.as_str());
    }

    #[test]
    fn translate_is_total(text in ".*", direction in arb_direction()) {
        // Must return for arbitrary input; output is non-empty iff input is.
        let out = translate(direction, &text);
        prop_assert_eq!(out.is_empty(), text.is_empty());
    }

    #[test]
    fn translate_distributes_over_concat(
        a in ".*",
        b in ".*",
        direction in arb_direction(),
    ) {
        let joined = translate(direction, &format!("{a}{b}"));
        let split = format!("{}{}", translate(direction, &a), translate(direction, &b));
        prop_assert_eq!(joined, split);
    }

    #[test]
    fn translate_is_deterministic(text in ".*", direction in arb_direction()) {
        prop_assert_eq!(translate(direction, &text), translate(direction, &text));
    }

    #[test]
    fn every_pair_converts_forward_to_first_match(
        index in 0..ScriptTable::pairs().len(),
    ) {
        let (rahmu, _) = ScriptTable::pairs()[index];
        let first = ScriptTable::pairs()
            .iter()
            .find(|&&(r, _)| r == rahmu)
            .map(|&(_, k)| k)
            .unwrap();
        prop_assert_eq!(convert(Direction::RahmuToKana, rahmu), first);
    }
}
