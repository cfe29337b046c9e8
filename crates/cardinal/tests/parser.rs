//! Integration tests for parsing cardinal phrases.

use cardinal::{ParseError, ParseMode, PhraseParser, Vocabulary, parse};

// =============================================================================
// Basic parsing
// =============================================================================

#[test]
fn empty_input_is_zero() {
    assert_eq!(parse("").unwrap(), 0);
    assert_eq!(parse("   ").unwrap(), 0);
    assert_eq!(parse(" , , ").unwrap(), 0);
}

#[test]
fn units_teens_and_tens() {
    assert_eq!(parse("zero").unwrap(), 0);
    assert_eq!(parse("seven").unwrap(), 7);
    assert_eq!(parse("nineteen").unwrap(), 19);
    assert_eq!(parse("twelve thousand").unwrap(), 12_000);
    assert_eq!(parse("ninety").unwrap(), 90);
}

#[test]
fn hyphenated_and_spaced_compounds() {
    assert_eq!(parse("forty-five").unwrap(), 45);
    assert_eq!(parse("forty five").unwrap(), 45);
    assert_eq!(parse("three hundred and forty-five").unwrap(), 345);
}

#[test]
fn multiple_groups() {
    assert_eq!(
        parse("nine hundred billion, seventy million").unwrap(),
        900_070_000_000
    );
    assert_eq!(
        parse(
            "four hundred and seventy-five million, nine hundred and twenty-three thousand, \
             four hundred and fifty-five"
        )
        .unwrap(),
        475_923_455
    );
    assert_eq!(parse("fifty thousand, three").unwrap(), 50_003);
}

#[test]
fn trailing_group_is_added_unscaled() {
    assert_eq!(parse("one million three").unwrap(), 1_000_003);
}

// =============================================================================
// Tolerance
// =============================================================================

#[test]
fn separators_and_punctuation_collapse() {
    assert_eq!(parse("  ,  nine   hundred ,  ").unwrap(), 900);
    assert_eq!(parse("nine\thundred\n").unwrap(), 900);
    assert_eq!(parse("(three) hundred.").unwrap(), 300);
    assert_eq!(parse("forty--five").unwrap(), 45);
}

#[test]
fn case_insensitive() {
    assert_eq!(parse("Three HUNDRED And Forty-Five").unwrap(), 345);
}

#[test]
fn unknown_words_are_noise_by_default() {
    assert_eq!(parse("exactly three hundred naira only").unwrap(), 300);
    assert_eq!(parse("fourty two").unwrap(), 2);
}

// =============================================================================
// Strict mode
// =============================================================================

#[test]
fn strict_mode_rejects_unknown_words() {
    let parser = PhraseParser::builder().mode(ParseMode::Strict).build();
    assert_eq!(parser.mode(), ParseMode::Strict);
    assert_eq!(parser.parse("three hundred and forty-five").unwrap(), 345);

    let err = parser.parse("fourty two").unwrap_err();
    match &err {
        ParseError::Lexical {
            word,
            offset,
            suggestions,
        } => {
            assert_eq!(word, "fourty");
            assert_eq!(*offset, 0);
            assert_eq!(suggestions[0], "forty");
        }
        ParseError::Overflow { .. } => panic!("expected lexical error"),
    }
    insta::assert_snapshot!(
        err,
        @"unknown number word 'fourty' at byte 0; did you mean: forty, four?"
    );
}

#[test]
fn strict_mode_reports_compound_part_offsets() {
    let parser = PhraseParser::builder().mode(ParseMode::Strict).build();
    let err = parser.parse("one hundred and forty-fiv").unwrap_err();
    assert_eq!(err.span(), (22, 3));
    assert!(matches!(err, ParseError::Lexical { ref word, .. } if word == "fiv"));
}

#[test]
fn strict_mode_still_discards_punctuation() {
    let parser = PhraseParser::builder().mode(ParseMode::Strict).build();
    assert_eq!(parser.parse("nine hundred - and , ten").unwrap(), 910);
}

// =============================================================================
// Vocabulary and overflow
// =============================================================================

#[test]
fn truncated_vocabulary_does_not_know_larger_scales() {
    let vocabulary = Vocabulary::with_scale_limit("million").unwrap();
    let parser = PhraseParser::builder()
        .vocabulary(&vocabulary)
        .mode(ParseMode::Strict)
        .build();
    assert_eq!(parser.parse("two million").unwrap(), 2_000_000);
    assert!(matches!(
        parser.parse("two billion"),
        Err(ParseError::Lexical { .. })
    ));
}

#[test]
fn overflow_is_reported() {
    let err = parse("one hundred hundred hundred decillion").unwrap_err();
    assert_eq!(
        err,
        ParseError::Overflow {
            word: "decillion".to_string(),
            offset: 28,
        }
    );
    insta::assert_snapshot!(err, @"value overflows at 'decillion' (byte 28)");
}
