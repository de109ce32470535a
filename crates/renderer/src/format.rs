//! Fixed-point number formatting for labels and tooltips.
//!
//! `format!("{:.2}", v)` rounds exact ties to even (`8.125` becomes `8.12`).
//! Chart text rounds ties away from zero instead (`8.13`), so labels are
//! produced from the exact decimal expansion of the value.

/// Extra digits past the requested precision. An `f64` that is not an exact
/// tie differs from one well within this many places.
const GUARD_DIGITS: usize = 30;

/// Format `value` with `digits` decimals, rounding half away from zero.
///
/// Negative values keep their sign even when they round to zero
/// (`-0.001` gives `-0.00`). Non-finite values use their default display.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let negative = value < 0.0;
    let expanded = format!("{:.*}", digits + GUARD_DIGITS, value.abs());
    let (int_part, frac_part) = expanded.split_once('.').unwrap_or((expanded.as_str(), ""));

    let mut kept: Vec<char> = int_part.chars().chain(frac_part.chars().take(digits)).collect();
    let round_up = frac_part.chars().nth(digits).map_or(false, |d| d >= '5');

    if round_up {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == '9' {
                *d = '0';
            } else {
                *d = char::from(*d as u8 + 1);
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, '1');
        }
    }

    let split = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if negative {
        out.push('-');
    }
    out.extend(&kept[..split]);
    if digits > 0 {
        out.push('.');
        out.extend(&kept[split..]);
    }
    out
}

/// Like [`to_fixed`], with an explicit `+` on zero and positive values.
pub fn to_fixed_signed(value: f64, digits: usize) -> String {
    if value.is_nan() || value < 0.0 {
        to_fixed(value, digits)
    } else {
        format!("+{}", to_fixed(value, digits))
    }
}
