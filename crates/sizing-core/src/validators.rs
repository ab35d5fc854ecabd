//! Numeric validators.
//!
//! Pure predicates; callers inspect the boolean and build field messages
//! themselves.

/// A value that may hold a finite real number.
pub trait RawNumber {
    /// The value as a finite `f64`, if it is one.
    fn to_finite(&self) -> Option<f64>;
}

impl RawNumber for f64 {
    fn to_finite(&self) -> Option<f64> {
        self.is_finite().then_some(*self)
    }
}

impl RawNumber for str {
    fn to_finite(&self) -> Option<f64> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<f64>().ok().and_then(|v| v.to_finite())
    }
}

impl RawNumber for String {
    fn to_finite(&self) -> Option<f64> {
        self.as_str().to_finite()
    }
}

impl<T: RawNumber> RawNumber for Option<T> {
    fn to_finite(&self) -> Option<f64> {
        self.as_ref().and_then(RawNumber::to_finite)
    }
}

impl<T: RawNumber + ?Sized> RawNumber for &T {
    fn to_finite(&self) -> Option<f64> {
        (**self).to_finite()
    }
}

/// True iff the value is a finite real number.
///
/// Empty strings, `None`, NaN and infinities all fail.
pub fn is_valid_number(value: impl RawNumber) -> bool {
    value.to_finite().is_some()
}

/// True iff the value is a finite number greater than zero.
pub fn is_positive_number(value: impl RawNumber) -> bool {
    value.to_finite().is_some_and(|v| v > 0.0)
}

/// True iff the value is a finite number in `[0, 100]`.
pub fn is_percentage(value: impl RawNumber) -> bool {
    value
        .to_finite()
        .is_some_and(|v| (0.0..=100.0).contains(&v))
}

/// True iff every value is a valid number. Sign and range are not checked.
pub fn validate_inputs<I, K, V>(inputs: I) -> bool
where
    I: IntoIterator<Item = (K, V)>,
    V: RawNumber,
{
    inputs.into_iter().all(|(_, value)| is_valid_number(value))
}
