// WHY: Render fractional quantities exactly as n/d instead of printing float artifacts
// Stern-Brocot mediant search with exponential seek keeps iteration count logarithmic

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, TextError};
use crate::wordify::MAX_MAGNITUDE;

/// Numerator/denominator pair produced by the approximator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fraction {
    pub numerator: u64,
    pub denominator: u64,
}

impl Fraction {
    /// "No fractional remainder"
    pub const EMPTY: Fraction = Fraction {
        numerator: 0,
        denominator: 1,
    };

    pub const fn new(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Empty iff numerator == denominator, or either is zero
    pub fn is_empty(&self) -> bool {
        self.numerator == self.denominator || self.numerator == 0 || self.denominator == 0
    }

    /// True for `n/n` with `n > 0`: the caller should round its integral part up
    pub fn is_whole(&self) -> bool {
        self.numerator == self.denominator && self.numerator != 0
    }

    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Smallest-denominator fraction within `accuracy` of `value`
    ///
    /// `value` must lie in `[0, 1)` and `accuracy` in `(0, 1)`. Values within
    /// `accuracy` of zero give `0/1`; values within `accuracy` of one give `1/1`.
    pub fn from_real(value: f64, accuracy: f64) -> Result<Fraction> {
        if !(accuracy > 0.0 && accuracy < 1.0) {
            return Err(TextError::range(
                "accuracy",
                format!("{accuracy} is not inside (0, 1)"),
            ));
        }
        if !(0.0..1.0).contains(&value) {
            return Err(TextError::range(
                "value",
                format!("{value} is not inside [0, 1)"),
            ));
        }

        if value <= accuracy {
            return Ok(Fraction::EMPTY);
        }
        if 1.0 - accuracy <= value {
            return Ok(Fraction::new(1, 1));
        }

        let high = value + accuracy;
        let low = value - accuracy;
        let mut lower = Term::new(0, 1);
        let mut upper = Term::new(1, 1);
        let mut rounds = 0u32;

        loop {
            rounds += 1;
            let Some(mediant) = lower.plus(upper, 1) else {
                return Err(TextError::range(
                    "accuracy",
                    format!("{accuracy} needs terms wider than 64 bits"),
                ));
            };

            if mediant.d as f64 * high < mediant.n as f64 {
                // Mediant lies above the window: pull the upper bound down
                upper = seek(upper, lower, |t| {
                    (lower.d as f64 + t.d as f64) * high < lower.n as f64 + t.n as f64
                });
            } else if (mediant.n as f64) < low * mediant.d as f64 {
                // Mediant lies below the window: push the lower bound up
                lower = seek(lower, upper, |t| {
                    (t.n as f64 + upper.n as f64) < low * (t.d as f64 + upper.d as f64)
                });
            } else {
                debug!(
                    value,
                    accuracy,
                    rounds,
                    n = mediant.n,
                    d = mediant.d,
                    "Approximated fraction"
                );
                return Ok(Fraction::new(mediant.n, mediant.d));
            }
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Term {
    n: u64,
    d: u64,
}

impl Term {
    fn new(n: u64, d: u64) -> Self {
        Self { n, d }
    }

    /// `self + weight * step`, or `None` on overflow
    fn plus(self, step: Term, weight: u64) -> Option<Term> {
        Some(Term {
            n: self.n.checked_add(step.n.checked_mul(weight)?)?,
            d: self.d.checked_add(step.d.checked_mul(weight)?)?,
        })
    }

    /// Undo a previous `plus`
    fn minus(self, step: Term, weight: u64) -> Term {
        Term {
            n: self.n - step.n * weight,
            d: self.d - step.d * weight,
        }
    }
}

/// Move `bound` toward `step` until `keep_going` turns false
///
/// Steps double until the predicate fails (or arithmetic would overflow),
/// then halve back to land on the first position where it fails.
fn seek(bound: Term, step: Term, keep_going: impl Fn(Term) -> bool) -> Term {
    let Some(mut current) = bound.plus(step, 1) else {
        return bound;
    };
    if !keep_going(current) {
        return current;
    }

    let mut weight = 1u64;
    loop {
        let Some(next_weight) = weight.checked_mul(2) else {
            break;
        };
        let Some(next) = current.plus(step, next_weight) else {
            break;
        };
        weight = next_weight;
        current = next;
        if !keep_going(current) {
            break;
        }
    }

    while weight > 1 {
        weight /= 2;
        let candidate = current.minus(step, weight);
        if !keep_going(candidate) {
            current = candidate;
        }
    }
    current
}

/// Signed value split into whole part and approximated remainder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MixedNumber {
    pub negative: bool,
    pub whole: u128,
    pub fraction: Fraction,
}

impl MixedNumber {
    /// Split a finite value whose magnitude fits in 96 bits
    ///
    /// A remainder that approximates to `1/1` rounds the whole part up.
    pub fn from_real(value: f64, accuracy: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(TextError::range("value", format!("{value} is not finite")));
        }
        let magnitude = value.abs();
        if magnitude >= MAX_MAGNITUDE as f64 {
            return Err(TextError::range(
                "value",
                format!("{value} does not fit in 96 bits"),
            ));
        }

        let integral = magnitude.trunc();
        let mut whole = integral as u128;
        let mut fraction = Fraction::from_real(magnitude - integral, accuracy)?;
        if fraction.is_whole() {
            whole += 1;
            fraction = Fraction::EMPTY;
        } else if fraction.is_empty() {
            fraction = Fraction::EMPTY;
        }
        if whole >= MAX_MAGNITUDE {
            return Err(TextError::range(
                "value",
                format!("{value} does not fit in 96 bits"),
            ));
        }

        Ok(Self {
            negative: value < 0.0 && (whole > 0 || !fraction.is_empty()),
            whole,
            fraction,
        })
    }
}

impl fmt::Display for MixedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        match (self.whole, self.fraction.is_empty()) {
            (whole, true) => write!(f, "{whole}"),
            (0, false) => write!(f, "{}", self.fraction),
            (whole, false) => write!(f, "{whole} {}", self.fraction),
        }
    }
}
