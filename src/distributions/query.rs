//! Validation of query points against the support `{0, 1, ..., n}`.

use crate::core::QueryViolation;

/// A numeric value that may name a point of the support `{0, 1, ..., n}`.
///
/// Integer types only need sign and range checks; floating-point types must also be
/// integral-valued (`3.0` is accepted, `1.5` and `NaN` are not).
pub trait SupportPoint: Copy {
    /// Returns the support index, or the first constraint the value violates
    /// (integrality, then sign, then range).
    fn to_support_index(self, n: usize) -> Result<usize, QueryViolation>;
}

macro_rules! unsigned_support_point {
    ($($ty:ty),*) => {$(
        impl SupportPoint for $ty {
            #[inline]
            fn to_support_index(self, n: usize) -> Result<usize, QueryViolation> {
                match usize::try_from(self) {
                    Ok(index) if index <= n => Ok(index),
                    _ => Err(QueryViolation::OutOfRange { value: self as f64, n }),
                }
            }
        }
    )*};
}

macro_rules! signed_support_point {
    ($($ty:ty),*) => {$(
        impl SupportPoint for $ty {
            #[inline]
            fn to_support_index(self, n: usize) -> Result<usize, QueryViolation> {
                if self < 0 {
                    return Err(QueryViolation::Negative(self as f64));
                }
                match usize::try_from(self) {
                    Ok(index) if index <= n => Ok(index),
                    _ => Err(QueryViolation::OutOfRange { value: self as f64, n }),
                }
            }
        }
    )*};
}

macro_rules! float_support_point {
    ($($ty:ty),*) => {$(
        impl SupportPoint for $ty {
            #[inline]
            fn to_support_index(self, n: usize) -> Result<usize, QueryViolation> {
                let value = f64::from(self);
                if !is_integral(value) {
                    return Err(QueryViolation::NonInteger(value));
                }
                if value < 0.0 {
                    return Err(QueryViolation::Negative(value));
                }
                if value > n as f64 {
                    return Err(QueryViolation::OutOfRange { value, n });
                }
                Ok(value as usize)
            }
        }
    )*};
}

unsigned_support_point!(u8, u16, u32, u64, usize);
signed_support_point!(i8, i16, i32, i64, isize);
float_support_point!(f32, f64);

/// `true` when `value` is finite and has no fractional part.
#[inline]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Validates every query point, failing on the first violation.
pub fn support_indices<K: SupportPoint>(ks: &[K], n: usize) -> Result<Vec<usize>, QueryViolation> {
    ks.iter().map(|k| k.to_support_index(n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_within_support_map_to_themselves() {
        assert_eq!(0usize.to_support_index(3), Ok(0));
        assert_eq!(3u8.to_support_index(3), Ok(3));
        assert_eq!(2i64.to_support_index(3), Ok(2));
        assert_eq!(3.0f64.to_support_index(3), Ok(3));
        assert_eq!((-0.0f64).to_support_index(3), Ok(0));
    }

    #[test]
    fn violations_are_identified() {
        assert_eq!((-1i32).to_support_index(3), Err(QueryViolation::Negative(-1.0)));
        assert_eq!(1.5f64.to_support_index(3), Err(QueryViolation::NonInteger(1.5)));
        assert_eq!(
            4u32.to_support_index(3),
            Err(QueryViolation::OutOfRange { value: 4.0, n: 3 })
        );
        assert_eq!(
            4.0f32.to_support_index(3),
            Err(QueryViolation::OutOfRange { value: 4.0, n: 3 })
        );
        assert!(matches!(
            f64::NAN.to_support_index(3),
            Err(QueryViolation::NonInteger(_))
        ));
        assert!(matches!(
            f64::INFINITY.to_support_index(3),
            Err(QueryViolation::NonInteger(_))
        ));
    }

    #[test]
    fn integrality_is_checked_before_sign() {
        assert_eq!((-1.5f64).to_support_index(3), Err(QueryViolation::NonInteger(-1.5)));
    }

    #[test]
    fn batch_validation_stops_at_first_violation() {
        assert_eq!(support_indices(&[0, 1, 2], 2), Ok(vec![0, 1, 2]));
        assert_eq!(
            support_indices(&[0, -1, 7], 2),
            Err(QueryViolation::Negative(-1.0))
        );
    }
}
