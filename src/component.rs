use ndarray::LinalgScalar;
use std::fmt::Debug;

/// Number of decimal digits kept by the rounding operations
/// (`sub`, `project`, `reject`).
pub const ROUND_DIGITS: usize = 6;

/// A primitive number that can be stored in a [`Vector`](crate::Vector).
///
/// Integers keep integer arithmetic for addition, subtraction, scaling and
/// the dot product. Operations that produce fractional values (Hadamard
/// product, projection, rejection, norm) go through [`Component::to_f64`]
/// before multiplying, so they never overflow the integer type.
///
/// Integer arithmetic is fixed width: `add`, `sub`, `scale` and `dot` on
/// `i32`/`i64` vectors overflow like the primitive does (panic in debug
/// builds, wrap in release). Convert with [`Vector::to_f64`](crate::Vector::to_f64)
/// first when magnitudes may exceed the integer range.
pub trait Component: LinalgScalar + PartialEq + Debug + Send + Sync {
    fn to_f64(self) -> f64;

    /// Round to `digits` decimal places, ties to even on the exact binary
    /// value. Integers are returned unchanged.
    fn round_digits(self, digits: usize) -> Self;

    /// Convert from `f64` only when the value is representable without loss
    /// of its integral part (integers reject fractions and out of range values).
    fn from_f64_exact(value: f64) -> Option<Self>;

    /// Convert from `i64`, rejecting values out of range for integers.
    fn from_i64_exact(value: i64) -> Option<Self>;

    /// Text used by `Display`: `2` for integers, `4.0`, `1e-07` or `1.5e+16`
    /// for floats.
    fn repr(self) -> String {
        format!("{:?}", self)
    }
}

// Fixed-precision formatting rounds the exact binary value, so a format and
// parse round trip avoids the error a multiply by 10^digits would introduce.
pub(crate) fn round_f64(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", digits, value).parse().unwrap_or(value)
}

// Debug already switches to exponent form at the same magnitudes Python's
// repr does; only the exponent needs a sign and two digits.
fn float_repr(debug: String, is_nan: bool) -> String {
    if is_nan {
        return "nan".to_string();
    }
    match debug.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.abs())
            }
            Err(_) => debug,
        },
        None => debug,
    }
}

macro_rules! int_component {
    ($($t:ty),*) => {$(
        impl Component for $t {
            fn to_f64(self) -> f64 {
                self as f64
            }

            fn round_digits(self, _digits: usize) -> Self {
                self
            }

            fn from_f64_exact(value: f64) -> Option<Self> {
                // -MIN is the exclusive upper bound; MAX itself may round up to it as f64
                let bound = -(<$t>::MIN as f64);
                if value.fract() != 0.0 || value < -bound || value >= bound {
                    return None;
                }
                Some(value as $t)
            }

            fn from_i64_exact(value: i64) -> Option<Self> {
                <$t>::try_from(value).ok()
            }
        }
    )*};
}

macro_rules! float_component {
    ($($t:ty),*) => {$(
        impl Component for $t {
            fn to_f64(self) -> f64 {
                self as f64
            }

            fn round_digits(self, digits: usize) -> Self {
                round_f64(self as f64, digits) as $t
            }

            fn from_f64_exact(value: f64) -> Option<Self> {
                Some(value as $t)
            }

            fn from_i64_exact(value: i64) -> Option<Self> {
                Some(value as $t)
            }

            fn repr(self) -> String {
                float_repr(format!("{:?}", self), self.is_nan())
            }
        }
    )*};
}

int_component!(i32, i64);
float_component!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_floats() {
        assert_eq!(1.000_000_000_000_000_2_f64.round_digits(ROUND_DIGITS), 1.0);
        assert_eq!(0.123_456_789_f64.round_digits(ROUND_DIGITS), 0.123_457);
        assert_eq!((-0.000_000_4_f64).round_digits(ROUND_DIGITS), 0.0);
    }

    #[test]
    fn test_round_uses_exact_binary_value() {
        // Each literal is stored just above or below the decimal tie
        assert_eq!(0.770_430_5_f64.round_digits(ROUND_DIGITS), 0.770_431);
        assert_eq!((-0.549_148_5_f64).round_digits(ROUND_DIGITS), -0.549_149);
        assert_eq!(0.123_456_5_f64.round_digits(ROUND_DIGITS), 0.123_456);
        assert_eq!(1.000_001_5_f64.round_digits(ROUND_DIGITS), 1.000_001);
    }

    #[test]
    fn test_round_integers_is_identity() {
        assert_eq!(7i64.round_digits(ROUND_DIGITS), 7);
        assert_eq!((-3i32).round_digits(0), -3);
    }

    #[test]
    fn test_round_keeps_non_finite() {
        assert!(f64::NAN.round_digits(ROUND_DIGITS).is_nan());
        assert_eq!(f64::INFINITY.round_digits(ROUND_DIGITS), f64::INFINITY);
    }

    #[test]
    fn test_from_f64_exact() {
        assert_eq!(i64::from_f64_exact(3.0), Some(3));
        assert_eq!(i64::from_f64_exact(3.5), None);
        assert_eq!(i32::from_f64_exact(1e12), None);
        assert_eq!(f64::from_f64_exact(3.5), Some(3.5));
    }

    #[test]
    fn test_from_f64_exact_rejects_upper_bound() {
        assert_eq!(i64::from_f64_exact(9_223_372_036_854_775_808.0), None);
        assert_eq!(i64::from_f64_exact(-9_223_372_036_854_775_808.0), Some(i64::MIN));
        assert_eq!(i32::from_f64_exact(2_147_483_648.0), None);
        assert_eq!(i32::from_f64_exact(2_147_483_647.0), Some(i32::MAX));
    }

    #[test]
    fn test_from_i64_exact() {
        assert_eq!(i64::from_i64_exact(9_007_199_254_740_993), Some(9_007_199_254_740_993));
        assert_eq!(i32::from_i64_exact(1 << 40), None);
        assert_eq!(f64::from_i64_exact(-4), Some(-4.0));
    }

    #[test]
    fn test_repr() {
        assert_eq!(2i64.repr(), "2");
        assert_eq!(4.0f64.repr(), "4.0");
        assert_eq!((-1.0f64).repr(), "-1.0");
        assert_eq!(0.0001f64.repr(), "0.0001");
        assert_eq!(1e-7f64.repr(), "1e-07");
        assert_eq!((-2.5e-5f64).repr(), "-2.5e-05");
        assert_eq!(1.5e16f64.repr(), "1.5e+16");
        assert_eq!(1e100f64.repr(), "1e+100");
        assert_eq!(f64::NAN.repr(), "nan");
        assert_eq!(f64::NEG_INFINITY.repr(), "-inf");
    }
}
