//! Decimal amounts split into whole and fractional parts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::money::MoneyError;

/// A non-negative amount with two decimal places.
///
/// Parsing rounds half up on the third decimal digit, carrying into the whole
/// part when the fraction reaches one hundred.
///
/// ```
/// use cardinal::money::Amount;
///
/// let amount: Amount = "233464773.457".parse().unwrap();
/// assert_eq!(amount.whole(), 233_464_773);
/// assert_eq!(amount.cents(), 46);
///
/// let amount: Amount = "9.999".parse().unwrap();
/// assert_eq!((amount.whole(), amount.cents()), (10, 0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Amount {
    whole: u128,
    cents: u8,
}

impl Amount {
    /// Create an amount. Cents of 100 or more carry into the whole part.
    pub fn new(whole: u128, cents: u8) -> Option<Self> {
        let carry = u128::from(cents.div_euclid(100));
        Some(Self {
            whole: whole.checked_add(carry)?,
            cents: cents.rem_euclid(100),
        })
    }

    /// A whole amount with no fractional part.
    pub const fn from_whole(whole: u128) -> Self {
        Self { whole, cents: 0 }
    }

    /// The whole (major unit) part.
    pub const fn whole(&self) -> u128 {
        self.whole
    }

    /// The fractional (minor unit) part, 0 to 99.
    pub const fn cents(&self) -> u8 {
        self.cents
    }

    /// Whether the amount has a non-zero fractional part.
    pub const fn is_decimal(&self) -> bool {
        self.cents != 0
    }

    /// Whether both parts are zero.
    pub const fn is_zero(&self) -> bool {
        self.whole == 0 && self.cents == 0
    }
}

impl FromStr for Amount {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let invalid = || MoneyError::InvalidAmount {
            input: input.to_string(),
        };

        if !is_plain_digits(input) {
            return Err(invalid());
        }

        let (whole, fraction) = input.split_once('.').unwrap_or((input, ""));
        let whole: u128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        let mut digits = [0u8; 3];
        for (slot, byte) in digits.iter_mut().zip(fraction.bytes()) {
            *slot = byte - b'0';
        }
        let [tenths, hundredths, thousandths] = digits;
        let round_up = u8::from(thousandths >= 5);

        Amount::new(whole, tenths * 10 + hundredths + round_up).ok_or_else(invalid)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.whole, self.cents)
    }
}

/// Whether `s` is a plain decimal number: ASCII digits with at most one `.`.
///
/// ```
/// use cardinal::money::is_plain_digits;
///
/// assert!(is_plain_digits("050003"));
/// assert!(is_plain_digits("345003.09"));
/// assert!(!is_plain_digits("1,000"));
/// assert!(!is_plain_digits("-5"));
/// assert!(!is_plain_digits("."));
/// ```
pub fn is_plain_digits(s: &str) -> bool {
    let mut digits = 0usize;
    let mut points = 0usize;
    for c in s.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return false,
        }
    }
    digits > 0 && points <= 1
}
