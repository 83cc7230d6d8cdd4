/// Render an evaluation result for display.
///
/// Integers are shown without a fractional part, and very large or very
/// small magnitudes use exponent notation with an explicit sign.
///
/// # Examples
///
/// ```
/// # use plotcalc::format_value;
/// assert_eq!(format_value(98.0), "98");
/// assert_eq!(format_value(0.125), "0.125");
/// assert_eq!(format_value(f64::NAN), "NaN");
/// assert_eq!(format_value(1e21), "1e+21");
/// ```
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        let infinity = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return infinity.into();
    }
    if value == 0.0 {
        // also covers -0
        return "0".into();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }
    return value.to_string();
}
