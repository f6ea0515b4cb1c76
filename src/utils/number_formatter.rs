//! Number formatting shared by the readout, tooltip and axis labels.
//!
//! Output follows the page conventions: `W.Pg` means `P` significant digits
//! right-aligned in `W` columns, switching to exponential notation when the
//! decimal exponent is below -6 or at least `P`.

/// Tooltip formatting: `6.3g`.
pub const TOOLTIP_WIDTH: usize = 6;
/// Readout and y-axis formatting: `5.3g`.
pub const VALUE_WIDTH: usize = 5;
pub const SIGNIFICANT_DIGITS: usize = 3;

pub fn format_general(value: f64, precision: usize, width: usize) -> String {
    let body = to_precision(value, precision.max(1));
    format!("{:>width$}", body, width = width)
}

fn to_precision(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // Scientific rendering rounds first, so the exponent already accounts for carry (999.6 -> 1.00e3).
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -6 || exp >= precision as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{}", mantissa, sign, exp.abs())
    } else {
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        format!("{:.*}", decimals, value)
    }
}

/// `Wd` integer formatting. Non-integers produce an empty label.
pub fn format_integer(value: f64, width: usize) -> String {
    if !value.is_finite() || value.fract() != 0.0 {
        return String::new();
    }
    format!("{:>width$}", value as i64, width = width)
}

/// Readout / axis value (`5.3g`).
pub fn format_value(value: f64) -> String {
    format_general(value, SIGNIFICANT_DIGITS, VALUE_WIDTH)
}

/// Tooltip content for a point: `"x, y"` each as `6.3g`.
pub fn format_tooltip(x: f64, y: f64) -> String {
    format!(
        "{}, {}",
        format_general(x, SIGNIFICANT_DIGITS, TOOLTIP_WIDTH),
        format_general(y, SIGNIFICANT_DIGITS, TOOLTIP_WIDTH)
    )
}

/// Zoom percentage, truncated toward zero.
pub fn format_zoom(scale: f64) -> String {
    format!("{}%", (scale * 100.0).trunc() as i64)
}
