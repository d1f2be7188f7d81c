//! Numeric coercion and printf-style value formatting
//!
//! Metrics values arrive as untyped strings. Reports either print them as-is
//! or coerce them with [`coerce`], which never fails: anything that is not a
//! number counts as `0.0`.

use crate::types::NOT_AVAILABLE;

/// Coerce a raw metrics value into a number
///
/// Returns `0.0` when the value is absent, empty, the `N/A` sentinel, or
/// does not parse as a float. Surrounding whitespace is ignored.
pub fn coerce(raw: Option<&str>) -> f64 {
    match raw.map(str::trim) {
        None | Some("") | Some(NOT_AVAILABLE) => 0.0,
        Some(s) => s.parse::<f64>().unwrap_or(0.0),
    }
}

/// Fixed-point formatting with `precision` decimals (`%.Nf`)
pub fn fixed(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    format!("{:.*}", precision, value)
}

/// Truncate toward zero and print without decimals, like `int()` on a float
pub fn truncated(value: f64) -> String {
    let whole = value.trunc();
    // -0.5 truncates to -0.0, which would print as "-0"
    fixed(if whole == 0.0 { 0.0 } else { whole }, 0)
}

/// Scientific formatting in the C `%e` style
///
/// The exponent always carries a sign and at least two digits, so
/// `1.0` with precision 6 renders as `1.000000e+00`.
pub fn scientific(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }

    let formatted = format!("{:.*e}", precision, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => formatted,
    }
}

/// Round to an integer and insert `,` thousands separators (`%,.0f`)
pub fn grouped(value: f64) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }

    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", rounded.as_str()),
    };

    let mut out = String::with_capacity(rounded.len() + digits.len() / 3);
    out.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_sign_negative() {
        "-inf".to_string()
    } else {
        "inf".to_string()
    }
}
