// WHY: Fractional quantities rendered exactly, e.g. 2.5 -> "two and one half"
// Combines the approximator, the wordifier, ordinal denominators and pluralization

use crate::error::{Result, TextError};
use crate::fraction::{Fraction, MixedNumber};
use crate::nouns::NounRegistry;
use crate::transform::inflect::pluralize;
use crate::transform::ordinal::ordinal_words;
use crate::wordify::number_to_words;

fn to_signed(n: u128) -> Result<i128> {
    i128::try_from(n).map_err(|_| TextError::range("value", format!("{n} is too large")))
}

fn fraction_words(registry: &NounRegistry, fraction: Fraction) -> Result<String> {
    let numerator = number_to_words(i128::from(fraction.numerator))?;
    let denominator = match fraction.denominator {
        2 => "half".to_string(),
        d => ordinal_words(i128::from(d))?,
    };
    let denominator = if fraction.numerator == 1 {
        denominator
    } else {
        pluralize(registry, &denominator)
    };
    Ok(format!("{numerator} {denominator}"))
}

/// Words for `value`, with the fractional part approximated within `accuracy`
pub fn quantity_to_words(registry: &NounRegistry, value: f64, accuracy: f64) -> Result<String> {
    let mixed = MixedNumber::from_real(value, accuracy)?;
    let sign = if mixed.negative { -1 } else { 1 };

    match (mixed.whole, mixed.fraction.is_empty()) {
        (whole, true) => number_to_words(sign * to_signed(whole)?),
        (0, false) => {
            let words = fraction_words(registry, mixed.fraction)?;
            Ok(if mixed.negative {
                format!("negative {words}")
            } else {
                words
            })
        }
        (whole, false) => Ok(format!(
            "{} and {}",
            number_to_words(sign * to_signed(whole)?)?,
            fraction_words(registry, mixed.fraction)?
        )),
    }
}

/// Digits-and-slash form of `value`, e.g. `"2 1/2"`
pub fn quantity_to_mixed(value: f64, accuracy: f64) -> Result<String> {
    Ok(MixedNumber::from_real(value, accuracy)?.to_string())
}
