//! Word scanner using winnow.
//!
//! Whitespace and commas are pure separators: runs of them collapse and never
//! reach the parser. Everything between separators is one word.

use std::ops::Range;

use winnow::combinator::{preceded, repeat};
use winnow::prelude::*;
use winnow::stream::LocatingSlice;
use winnow::token::take_while;

type Input<'i> = LocatingSlice<&'i str>;

/// A raw word with its byte offset in the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Word<'a> {
    pub text: &'a str,
    pub offset: usize,
}

impl<'a> Word<'a> {
    /// Strip leading and trailing punctuation, keeping the offset accurate.
    ///
    /// Returns `None` if nothing alphanumeric remains.
    pub fn trimmed(self) -> Option<Word<'a>> {
        let start = self.text.trim_start_matches(|c: char| !c.is_alphanumeric());
        let text = start.trim_end_matches(|c: char| !c.is_alphanumeric());
        if text.is_empty() {
            return None;
        }
        Some(Word {
            text,
            offset: self.offset + (self.text.len() - start.len()),
        })
    }

    /// Split a hyphenated compound ("forty-five") into its parts.
    pub fn parts(self) -> impl Iterator<Item = Word<'a>> {
        let mut offset = self.offset;
        self.text.split('-').filter_map(move |text| {
            let part = Word { text, offset };
            offset += text.len() + 1;
            (!text.is_empty()).then_some(part)
        })
    }
}

/// Scan text into words.
pub(crate) fn scan_words(text: &str) -> Vec<Word<'_>> {
    // Every character is either a separator or part of a word, so scanning
    // consumes the whole input and cannot fail.
    words.parse(LocatingSlice::new(text)).unwrap_or_default()
}

fn words<'i>(input: &mut Input<'i>) -> ModalResult<Vec<Word<'i>>> {
    let words = repeat(0.., preceded(separators, word)).parse_next(input)?;
    separators.parse_next(input)?;
    Ok(words)
}

fn word<'i>(input: &mut Input<'i>) -> ModalResult<Word<'i>> {
    take_while(1.., |c: char| !is_separator(c))
        .with_span()
        .map(|(text, span): (&'i str, Range<usize>)| Word {
            text,
            offset: span.start,
        })
        .parse_next(input)
}

fn separators(input: &mut Input<'_>) -> ModalResult<()> {
    take_while(0.., is_separator).void().parse_next(input)
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<&str> {
        scan_words(text).into_iter().map(|w| w.text).collect()
    }

    #[test]
    fn separators_collapse() {
        assert_eq!(texts("  ,  nine   hundred ,  "), vec!["nine", "hundred"]);
        assert_eq!(texts("one,two\tthree\nfour"), vec!["one", "two", "three", "four"]);
        assert!(texts("").is_empty());
        assert!(texts(" , ,, ").is_empty());
    }

    #[test]
    fn offsets_point_into_source() {
        let text = "  forty-five, (six)";
        let words = scan_words(text);
        assert_eq!(words[0].offset, 2);
        assert_eq!(words[1].text, "(six)");
        assert_eq!(words[1].offset, 14);

        let trimmed = words[1].trimmed().unwrap();
        assert_eq!(trimmed.text, "six");
        assert_eq!(&text[trimmed.offset..trimmed.offset + 3], "six");
    }

    #[test]
    fn compounds_split_at_hyphens() {
        let word = scan_words("xx forty-five").remove(1);
        let parts: Vec<(&str, usize)> = word.parts().map(|p| (p.text, p.offset)).collect();
        assert_eq!(parts, vec![("forty", 3), ("five", 9)]);
    }

    #[test]
    fn punctuation_only_words_trim_to_nothing() {
        let word = scan_words("--").remove(0);
        assert_eq!(word.trimmed(), None);
    }
}
