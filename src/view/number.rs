//! Number formatting for the result and table rows

/// Format `value` right-justified in `width` cells with `precision` fraction
/// digits.
///
/// Values too wide for fixed point switch to scientific notation, dropping
/// fraction digits until they fit.
pub fn format_number(value: f64, width: usize, precision: usize) -> String {
    let fixed = format!("{:>width$.precision$}", value);
    if fixed.len() <= width || !value.is_finite() {
        return fixed;
    }

    (0..=precision)
        .rev()
        .map(|p| format!("{:>width$.p$e}", value))
        .find(|s| s.len() <= width)
        .unwrap_or(fixed)
}
