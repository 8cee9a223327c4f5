// WHY: Integer-to-English conversion by walking decimal digits in 3-digit columns
// Works on a digit sequence so magnitudes beyond u64 need no big-integer arithmetic

use std::str::FromStr;

use bitflags::bitflags;
use tracing::debug;

use crate::error::{Result, TextError};

const ONES: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TEENS: [&str; 10] = [
    "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen",
    "eighteen", "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Magnitude word per thousand-group, least significant first
pub const MAGNITUDES: [&str; 10] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
];

/// Exclusive upper bound on the magnitude of a convertible integer
pub const MAX_MAGNITUDE: u128 = 1 << 96;

/// Longest digit run below `MAX_MAGNITUDE`
const MAX_DIGITS: usize = 29;

bitflags! {
    /// Which columns of the current thousand-group have produced words
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ColumnState: u8 {
        const ONES = 1;
        const TENS = 1 << 1;
        const HUNDREDS = 1 << 2;
    }
}

/// Sign-stripped decimal digits of an integer, most significant first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitSequence {
    digits: Vec<u8>,
    negative: bool,
}

impl DigitSequence {
    /// Build from an integer whose magnitude fits in 96 bits
    pub fn from_integer(n: i128) -> Result<Self> {
        let magnitude = n.unsigned_abs();
        if magnitude >= MAX_MAGNITUDE {
            return Err(TextError::range(
                "n",
                format!("magnitude of {n} does not fit in 96 bits"),
            ));
        }
        Ok(Self {
            digits: magnitude.to_string().bytes().map(|b| b - b'0').collect(),
            negative: n < 0,
        })
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }
}

impl FromStr for DigitSequence {
    type Err = TextError;

    /// Parse `[+-]?[0-9]+`; surrounding whitespace is ignored
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (negative, body) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TextError::InvalidNumber(s.to_string()));
        }

        let significant = body.trim_start_matches('0');
        if significant.is_empty() {
            return Ok(Self {
                digits: vec![0],
                negative: false,
            });
        }
        if significant.len() > MAX_DIGITS {
            return Err(TextError::range("n", format!("{s} does not fit in 96 bits")));
        }
        let magnitude: u128 = significant
            .parse()
            .map_err(|_| TextError::InvalidNumber(s.to_string()))?;
        if magnitude >= MAX_MAGNITUDE {
            return Err(TextError::range("n", format!("{s} does not fit in 96 bits")));
        }

        Ok(Self {
            digits: significant.bytes().map(|b| b - b'0').collect(),
            negative,
        })
    }
}

fn push_word(out: &mut String, word: &str) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(word);
}

/// Render a digit sequence as English words
///
/// Digits are walked most significant first. Each digit's place decides its
/// column; reaching a ones column closes the thousand-group, emits the
/// group's magnitude word if any column produced output, and resets the
/// column state.
pub fn to_words(sequence: &DigitSequence) -> String {
    if sequence.is_zero() {
        return ONES[0].to_string();
    }

    let digits = &sequence.digits;
    let count = digits.len();
    debug!(digits = count, negative = sequence.negative, "Wording digit sequence");

    let mut out = String::with_capacity(count * 12);
    if sequence.negative {
        out.push_str("negative");
    }

    let mut state = ColumnState::empty();
    for (i, &digit) in digits.iter().enumerate() {
        let place = count - 1 - i;
        let digit = usize::from(digit);

        match place % 3 {
            2 => {
                if digit != 0 {
                    push_word(&mut out, ONES[digit]);
                    push_word(&mut out, "hundred");
                    state |= ColumnState::HUNDREDS;
                }
            }
            1 => {
                if digit == 1 {
                    // Teen consumes the ones digit of this group
                    push_word(&mut out, TEENS[usize::from(digits[i + 1])]);
                    state |= ColumnState::TENS | ColumnState::ONES;
                } else if digit >= 2 {
                    push_word(&mut out, TENS[digit]);
                    state |= ColumnState::TENS;
                }
            }
            _ => {
                if digit != 0 && !state.contains(ColumnState::ONES) {
                    if state.contains(ColumnState::TENS) {
                        out.push('-');
                        out.push_str(ONES[digit]);
                    } else {
                        push_word(&mut out, ONES[digit]);
                    }
                    state |= ColumnState::ONES;
                }

                let group = place / 3;
                if group > 0 && !state.is_empty() {
                    push_word(&mut out, MAGNITUDES[group]);
                }
                state = ColumnState::empty();
            }
        }
    }

    out
}

/// Convert an integer with a magnitude below 2^96 into English words
pub fn number_to_words(n: i128) -> Result<String> {
    Ok(to_words(&DigitSequence::from_integer(n)?))
}
