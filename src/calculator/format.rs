//! Number to text conversion for the display.
//!
//! Results are kept as `f64` inside the engine and only turned into text
//! here. The canonical form is the shortest decimal string that round-trips,
//! written in plain notation for moderate magnitudes and `1.5e+21` style
//! otherwise. Display formatting then switches to fixed-width exponential
//! notation once that text grows past the display width.

use serde::{Deserialize, Serialize};

/// Text shown after a failed evaluation or for a non-finite value.
pub const ERROR_TEXT: &str = "Error";

/// Plain notation is used while the decimal point position is in `(-6, 21]`.
const PLAIN_MAX_EXP: i32 = 21;
const PLAIN_MIN_EXP: i32 = -6;

/// Display width rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayFormat {
    /// Longest text shown verbatim, in characters.
    pub max_len: usize,
    /// Fractional digits used once the value is shown in exponential form.
    pub exp_digits: usize,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            max_len: 16,
            exp_digits: 8,
        }
    }
}

impl DisplayFormat {
    /// Format an entry's text for the display.
    ///
    /// Text longer than `max_len` is re-read as a number and rendered in
    /// exponential notation; if it does not read back as a finite number the
    /// error text is shown instead. Shorter text is returned unchanged.
    pub fn format(&self, text: &str) -> String {
        if text.chars().count() <= self.max_len {
            return text.to_string();
        }
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => to_exponential(value, self.exp_digits),
            _ => ERROR_TEXT.to_string(),
        }
    }

    /// Format a computed value for the display.
    pub fn format_value(&self, value: f64) -> String {
        if !value.is_finite() {
            return ERROR_TEXT.to_string();
        }
        self.format(&canonical_string(value))
    }
}

/// Shortest round-trip decimal text for `value`.
///
/// Integers print without a fractional part, `-0` prints as `0`, and very
/// large or very small magnitudes switch to `d.ddde±x`.
pub fn canonical_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let sci = format!("{:e}", value.abs());
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return format!("{sign}{sci}");
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return format!("{sign}{sci}");
    };

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let n = exp + 1;

    let body = if k <= n && n <= PLAIN_MAX_EXP {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= PLAIN_MAX_EXP {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if PLAIN_MIN_EXP < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{exp_sign}{}", exp.abs())
        } else {
            format!("{lead}.{rest}e{exp_sign}{}", exp.abs())
        }
    };

    format!("{sign}{body}")
}

/// Enough significant digits to print any `f64` exactly.
const EXACT_DIGITS: usize = 800;

/// Exponential notation with `digits` fractional digits and a signed
/// exponent, e.g. `1.23456789e+16`.
///
/// Rounding is half-up on the exact binary value, so a value lying exactly
/// halfway between two candidates takes the larger magnitude.
pub fn to_exponential(value: f64, digits: usize) -> String {
    let exact = format!("{:.*e}", EXACT_DIGITS, value.abs());
    let Some((mantissa, exp)) = exact.split_once('e') else {
        return exact;
    };
    let Ok(mut exp) = exp.parse::<i32>() else {
        return exact;
    };

    let all: Vec<u8> = mantissa.bytes().filter(|b| *b != b'.').collect();
    let keep = (digits + 1).min(all.len());
    let mut kept = all[..keep].to_vec();
    kept.resize(digits + 1, b'0');

    if all.get(keep).is_some_and(|d| *d >= b'5') && round_up(&mut kept) {
        // Carried out of the leading digit: 9.99 -> 10.0
        kept.insert(0, b'1');
        kept.truncate(digits + 1);
        exp += 1;
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let exp_sign = if exp < 0 { '-' } else { '+' };
    let (lead, rest) = kept.split_at(1);
    let lead = char::from(lead[0]);
    let rest = String::from_utf8_lossy(rest);
    if rest.is_empty() {
        format!("{sign}{lead}e{exp_sign}{}", exp.abs())
    } else {
        format!("{sign}{lead}.{rest}e{exp_sign}{}", exp.abs())
    }
}

/// Add one unit in the last place of a decimal digit string. Returns `true`
/// when the carry runs off the front.
fn round_up(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return false;
        }
    }
    true
}
