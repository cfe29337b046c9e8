//! Rendering of a single 3-digit group.

use std::iter;

use cardinal_vocab::{HUNDRED, TEENS, TENS, UNITS};

/// Split a value into 3-digit groups, least significant first.
///
/// Zero yields no groups at all.
pub(crate) fn digit_groups(mut value: u128) -> impl Iterator<Item = u16> {
    iter::from_fn(move || {
        if value == 0 {
            return None;
        }
        let group = value.rem_euclid(1000) as u16;
        value = value.div_euclid(1000);
        Some(group)
    })
}

/// Render a group in `1..=999`.
///
/// "and" joins the hundreds term to a following tens/units term and is never
/// emitted otherwise.
pub(crate) fn render_group(group: u16) -> String {
    let hundreds = group.div_euclid(100) as u8;
    let rest = group.rem_euclid(100) as u8;

    if hundreds == 0 {
        return render_two_digit(rest);
    }

    let mut words = format!("{} {}", unit(hundreds), HUNDRED.word);
    if rest > 0 {
        words.push_str(" and ");
        words.push_str(&render_two_digit(rest));
    }
    words
}

/// Render a value in `0..=99`, hyphenating compound tens.
fn render_two_digit(value: u8) -> String {
    match value {
        0..=9 => unit(value).to_string(),
        10..=19 => TEENS[usize::from(value - 10)].to_string(),
        _ => {
            let tens = TENS[usize::from(value.div_euclid(10) - 2)];
            match value.rem_euclid(10) {
                0 => tens.to_string(),
                digit => format!("{tens}-{}", unit(digit)),
            }
        }
    }
}

fn unit(digit: u8) -> &'static str {
    UNITS[usize::from(digit)]
}
