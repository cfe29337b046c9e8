//! Parsing a generated phrase yields the original value.

use cardinal::{PhraseGenerator, PhraseParser, Vocabulary, generate, parse};
use proptest::prelude::*;

#[test]
fn round_trip_small_values() {
    for n in 0u32..=1_000 {
        let phrase = generate(n).unwrap();
        assert_eq!(parse(&phrase).unwrap(), u128::from(n), "{phrase}");
    }
}

#[test]
fn round_trip_powers() {
    for power in 0..36 {
        let n = 10u128.pow(power);
        assert_eq!(parse(&generate(n).unwrap()).unwrap(), n);
    }
}

#[test]
fn round_trip_limit() {
    let max = Vocabulary::english().max_value();
    assert_eq!(parse(&generate(max).unwrap()).unwrap(), max);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Any renderable value survives generate then parse.
    #[test]
    fn round_trip_any_value(n in 0u128..=999_999_999_999_999_999_999_999_999_999_999_999u128) {
        let phrase = generate(n).unwrap();
        prop_assert_eq!(parse(&phrase).unwrap(), n);
    }

    /// Round trip holds under a truncated vocabulary, too.
    #[test]
    fn round_trip_truncated_vocabulary(n in 0u64..1_000_000_000_000_000u64) {
        let vocabulary = Vocabulary::with_scale_limit("trillion").unwrap();
        let phrase = PhraseGenerator::new(&vocabulary).generate(n).unwrap();
        let parser = PhraseParser::builder().vocabulary(&vocabulary).build();
        prop_assert_eq!(parser.parse(&phrase).unwrap(), u128::from(n));
    }

    /// The parser never panics on arbitrary input.
    #[test]
    fn parser_never_panics(input in ".*") {
        let _ = parse(&input);
    }
}
