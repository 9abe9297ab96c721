/// Renders a number the way the AST printer and the `tokenize` listing do:
/// one fractional digit when the value is integer-valued, the shortest
/// round-trip form otherwise.
///
/// The evaluator's stringification is different on purpose: it strips the
/// trailing `.0` (see `Value`'s `Display`).
///
/// ## Example
/// ```
/// use loxide::util::num::format_number;
///
/// assert_eq!(format_number(42.0), "42.0");
/// assert_eq!(format_number(42.5), "42.5");
/// assert_eq!(format_number(-3.0), "-3.0");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == value.trunc() && value.is_finite() {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
