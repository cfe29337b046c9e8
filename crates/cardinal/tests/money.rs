//! Integration tests for monetary amounts in words.

use cardinal::money::{Amount, MoneyConverter, MoneyError, MoneyWords};
use cardinal::{GenerateError, ParseMode, Vocabulary};

fn naira() -> MoneyConverter<'static> {
    MoneyConverter::builder()
        .whole_currency("naira")
        .decimal_currency("kobo")
        .build()
}

// =============================================================================
// Whole amounts
// =============================================================================

#[test]
fn whole_numbers() {
    let cases = [
        ("345", "three hundred and forty-five"),
        ("34", "thirty-four"),
        ("23455", "twenty-three thousand, four hundred and fifty-five"),
        ("345003", "three hundred and forty-five thousand, three"),
        (
            "475923455",
            "four hundred and seventy-five million, nine hundred and twenty-three thousand, \
             four hundred and fifty-five",
        ),
    ];
    for (input, whole) in cases {
        let words = naira().convert(input).unwrap();
        assert_eq!(words.whole, whole);
        assert_eq!(words.decimal, None);
        assert_eq!(words.full, format!("{whole} naira only"));
    }
}

#[test]
fn large_numbers() {
    let words = naira().convert("900070000000").unwrap();
    assert_eq!(words.whole, "nine hundred billion, seventy million");
    assert_eq!(words.full, "nine hundred billion, seventy million naira only");

    let words = naira().convert("50000000").unwrap();
    assert_eq!(words.full, "fifty million naira only");
}

#[test]
fn zero_prefixed_numbers() {
    assert_eq!(naira().convert("0000000").unwrap(), MoneyWords::zero());
    assert_eq!(
        naira().convert("050003").unwrap().full,
        "fifty thousand, three naira only"
    );
    assert_eq!(
        naira().convert("050303").unwrap().whole,
        "fifty thousand, three hundred and three"
    );
}

// =============================================================================
// Decimal amounts
// =============================================================================

#[test]
fn zero_fraction_is_not_decimal() {
    let words = naira().convert("23.0").unwrap();
    assert_eq!(words.whole, "twenty-three");
    assert_eq!(words.decimal, None);
    assert_eq!(words.full, "twenty-three naira only");
}

#[test]
fn decimal_numbers() {
    let words = naira().convert("345003.09").unwrap();
    assert_eq!(words.whole, "three hundred and forty-five thousand, three");
    assert_eq!(words.decimal.as_deref(), Some("nine"));
    assert_eq!(
        words.full,
        "three hundred and forty-five thousand, three naira, nine kobo only"
    );
}

#[test]
fn third_decimal_digit_rounds_half_up() {
    let words = naira().convert("233464773.457").unwrap();
    assert_eq!(words.decimal.as_deref(), Some("forty-six"));
    assert_eq!(
        words.full,
        "two hundred and thirty-three million, four hundred and sixty-four thousand, seven \
         hundred and seventy-three naira, forty-six kobo only"
    );

    let words = naira().convert("1.999").unwrap();
    assert_eq!(words.full, "two naira only");
}

#[test]
fn fraction_only() {
    let words = naira().convert("0.50").unwrap();
    assert_eq!(words.whole, "");
    assert_eq!(words.decimal.as_deref(), Some("fifty"));
    assert_eq!(words.full, "fifty kobo only");
}

#[test]
fn missing_currency_is_left_out() {
    let converter = MoneyConverter::builder().whole_currency(" dollars ").build();
    assert_eq!(converter.whole_currency(), "dollars");
    assert_eq!(converter.convert("2.05").unwrap().full, "two dollars, five only");
}

// =============================================================================
// Phrase amounts
// =============================================================================

#[test]
fn phrases_are_normalized_through_the_parser() {
    let words = naira().convert("three hundred and forty-five").unwrap();
    assert_eq!(words.full, "three hundred and forty-five naira only");

    let strict = MoneyConverter::builder()
        .whole_currency("naira")
        .mode(ParseMode::Strict)
        .build();
    assert!(matches!(
        strict.convert("three hundred naira"),
        Err(MoneyError::Parse(_))
    ));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn malformed_numbers_are_rejected() {
    for input in ["-5", "1,000", "1.2.3", "12abc"] {
        assert!(
            matches!(naira().convert(input), Err(MoneyError::InvalidAmount { .. })),
            "{input}"
        );
    }
    insta::assert_snapshot!(
        naira().convert("-5").unwrap_err(),
        @"invalid amount '-5': expected digits with an optional decimal point"
    );
}

#[test]
fn amounts_beyond_the_vocabulary_fail() {
    let vocabulary = Vocabulary::with_scale_limit("thousand").unwrap();
    let converter = MoneyConverter::builder()
        .whole_currency("naira")
        .vocabulary(&vocabulary)
        .build();
    assert_eq!(
        converter.convert("1000000"),
        Err(MoneyError::Generate(GenerateError::UnsupportedMagnitude {
            value: 1_000_000,
            largest: "thousand",
        }))
    );
}

#[test]
fn amount_parsing() {
    let amount: Amount = "0012.5".parse().unwrap();
    assert_eq!((amount.whole(), amount.cents()), (12, 50));
    assert!(amount.is_decimal());
    assert_eq!(amount.to_string(), "12.50");

    let amount: Amount = ".005".parse().unwrap();
    assert_eq!((amount.whole(), amount.cents()), (0, 1));

    assert!("".parse::<Amount>().is_err());
    assert!(Amount::from_whole(0).is_zero());
    assert_eq!(Amount::new(u128::MAX, 100), None);
}

#[test]
fn words_serialize_to_json() {
    let words = naira().convert("34.5").unwrap();
    let json = serde_json::to_value(&words).unwrap();
    assert_eq!(json["whole"], "thirty-four");
    assert_eq!(json["decimal"], "fifty");
    assert_eq!(json["full"], "thirty-four naira, fifty kobo only");
}
