use std::fmt;

/// A calculator result as shown to the user.
///
/// Magnitudes in `[1e-4, 1e6)` print in plain notation with the shortest
/// digits that round-trip; anything else switches to scientific notation
/// with a signed, two-digit minimum exponent (`1e+06`, `2.5e-07`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number(pub f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return write!(f, "NaN");
        }
        if value.is_infinite() {
            return write!(f, "{}", if value > 0.0 { "+Inf" } else { "-Inf" });
        }
        if value == 0.0 {
            return write!(f, "{}", if value.is_sign_negative() { "-0" } else { "0" });
        }
        if (1e-4..1e6).contains(&value.abs()) {
            return write!(f, "{value}");
        }

        let scientific = format!("{value:e}");
        let (mantissa, exponent) = scientific
            .split_once('e')
            .unwrap_or((scientific.as_str(), "0"));
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        write!(f, "{mantissa}e{sign}{digits:0>2}")
    }
}
