//! Per-element number formatting shared by the `Display` impls.
//!
//! Width, fill, alignment, sign and precision requested by the caller are
//! applied to each element on its own, so separators and braces are never
//! padded. The `0` flag zero-pads finite elements after their sign, the
//! way `f64` itself does.

use std::fmt::{self, Alignment, Write};

/// Render one element honoring the formatter's state.
///
/// A precision selects that many fixed decimals. The decimal point is always
/// shown for finite values, so `3.0` prints as `3.0` and as `3.` with `{:.0}`.
/// Elements are right-aligned unless the caller asks otherwise.
pub(crate) fn write_element(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let mut text = match f.precision() {
        Some(precision) => format!("{:.*}", precision, value),
        None => format!("{}", value),
    };
    if value.is_finite() && !text.contains('.') {
        text.push('.');
        if f.precision().is_none() {
            text.push('0');
        }
    }
    if f.sign_plus() && (value > 0.0 || (value == 0.0 && value.is_sign_positive())) {
        text.insert(0, '+');
    }

    let width = f.width().unwrap_or(0);
    let len = text.chars().count();
    if len >= width {
        return f.write_str(&text);
    }

    let pad = width - len;
    if f.sign_aware_zero_pad() && value.is_finite() {
        let digits = text.trim_start_matches(|c| c == '+' || c == '-');
        let sign = &text[..text.len() - digits.len()];
        f.write_str(sign)?;
        for _ in 0..pad {
            f.write_char('0')?;
        }
        return f.write_str(digits);
    }
    let (before, after) = match f.align() {
        Some(Alignment::Left) => (0, pad),
        Some(Alignment::Center) => (pad / 2, pad - pad / 2),
        Some(Alignment::Right) | None => (pad, 0),
    };
    let fill = f.fill();
    for _ in 0..before {
        f.write_char(fill)?;
    }
    f.write_str(&text)?;
    for _ in 0..after {
        f.write_char(fill)?;
    }
    Ok(())
}
