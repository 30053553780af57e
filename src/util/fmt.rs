/// Formats a real number for display.
///
/// Values are rounded to four decimal places and trailing zeros are
/// trimmed, so whole numbers print without a fractional part. A negative
/// zero rounds up to plain `0`. Non-finite values fall back to their
/// standard spelling (`inf`, `NaN`).
///
/// # Example
/// ```
/// use equara::util::fmt::fmt_number;
///
/// assert_eq!(fmt_number(4.0), "4");
/// assert_eq!(fmt_number(2.5), "2.5");
/// assert_eq!(fmt_number(1.0 / 3.0), "0.3333");
/// assert_eq!(fmt_number(-0.00001), "0");
/// assert_eq!(fmt_number(f64::INFINITY), "inf");
/// ```
#[must_use]
pub fn fmt_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let text = format!("{value:.4}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
