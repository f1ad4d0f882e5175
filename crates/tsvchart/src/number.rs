/// Largest magnitude below which integral floats are written without a
/// fractional part or exponent.
const PLAIN_INTEGER_LIMIT: f64 = 1e15;

/// Format a finite f64 the shortest way strict JSON reads back unchanged.
/// - integral values below 1e15 print as integers (`700.0` -> `700`)
/// - -0 normalized to 0
/// - otherwise ryu's shortest representation, which may use an exponent
pub(crate) fn format_canonical_f64(value: f64) -> String {
    if !value.is_finite() {
        debug_assert!(false, "format_canonical_f64 called with non-finite value");
        return String::from("null");
    }
    if value == 0.0 {
        return String::from("0");
    }
    if value.fract() == 0.0 && value.abs() < PLAIN_INTEGER_LIMIT {
        return format!("{}", value as i64);
    }
    let mut buf = ryu::Buffer::new();
    let raw = buf.format_finite(value);
    raw.strip_suffix(".0").unwrap_or(raw).to_string()
}
