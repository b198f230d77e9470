//! A Domain represents the set of points where something is defined.
//!
//! We use it in 2 places:
//!  - [ContinuousDomain]: the support of a distribution. It tells the
//!     quantile functions where to look for a bracket.
//!  - [ParameterDomain]: the valid values of a parameter given by the user.
//!

use crate::errors::{ParameterError, PowerError};

/// A [domain](https://en.wikipedia.org/wiki/Domain_of_a_function) of a region
/// of the real numbers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ContinuousDomain {
    /// All real numbers
    #[default]
    Reals,
    /// The values contained in the range.
    ///
    /// The first number is the minimum, and the last is the maximum.
    ///
    /// Has the **invariant** that `min <= max`.
    Range(f64, f64),
    /// All the numbers from the given value onwards.
    From(f64),
    /// All the numbers until the given value.
    To(f64),
}

impl ContinuousDomain {
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        match self {
            ContinuousDomain::Reals => true,
            ContinuousDomain::Range(min, max) => (*min <= x) && (x <= *max),
            ContinuousDomain::From(min) => *min <= x,
            ContinuousDomain::To(max) => x <= *max,
        }
    }

    /// Returns the upper and lower bounds of the domain.
    ///
    /// Take into account that the values can also include positive and negative infinity.
    /// It is guaranteed that return.0 <= return.1. If the bounds are finite, the values
    /// themselves are included.
    #[must_use]
    pub const fn get_bounds(&self) -> (f64, f64) {
        match *self {
            ContinuousDomain::Reals => (f64::NEG_INFINITY, f64::INFINITY),
            ContinuousDomain::Range(min, max) => (min, max),
            ContinuousDomain::From(min) => (min, f64::INFINITY),
            ContinuousDomain::To(max) => (f64::NEG_INFINITY, max),
        }
    }
}

/// The set of valid values of a parameter.
///
/// Every variant rejects NaN and `+-inf`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterDomain {
    /// Any finite number.
    Reals,
    /// A probability in the **open** interval `(0, 1)`. Used for `alpha` and `power`.
    Probability,
    /// Stricly positive numbers. (`0 < x`)
    Positive,
    /// Non-negative numbers. (`0 <= x`)
    NonNegative,
    /// Numbers stricly greater than the value.
    Above(f64),
    /// Numbers greater or equal than the value.
    AtLeast(f64),
    /// The **open** interval `(min, max)`.
    Open(f64, f64),
    /// The half open interval `[min, max)`.
    ClosedOpen(f64, f64),
    /// Integers greater or equal than the value. Used for the counts of
    /// groups, clusters, predictors and degrees of freedom.
    Count(f64),
}

impl ParameterDomain {
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        if !x.is_finite() {
            return false;
        }

        return match *self {
            ParameterDomain::Reals => true,
            ParameterDomain::Probability => 0.0 < x && x < 1.0,
            ParameterDomain::Positive => 0.0 < x,
            ParameterDomain::NonNegative => 0.0 <= x,
            ParameterDomain::Above(min) => min < x,
            ParameterDomain::AtLeast(min) => min <= x,
            ParameterDomain::Open(min, max) => min < x && x < max,
            ParameterDomain::ClosedOpen(min, max) => min <= x && x < max,
            ParameterDomain::Count(min) => min <= x && x.fract() == 0.0,
        };
    }

    /// A short human readable description of the domain.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        return match *self {
            ParameterDomain::Reals => "must be a finite number",
            ParameterDomain::Probability => "must be a probability in the open interval (0, 1)",
            ParameterDomain::Positive => "must be stricly positive",
            ParameterDomain::NonNegative => "must be non-negative",
            ParameterDomain::Above(_) => "is below (or at) the minimum allowed value",
            ParameterDomain::AtLeast(_) => "is below the minimum allowed value",
            ParameterDomain::Open(_, _) | ParameterDomain::ClosedOpen(_, _) => {
                "is outside the allowed interval"
            }
            ParameterDomain::Count(_) => "must be an integer not below the minimum allowed value",
        };
    }

    /// Returns `value` if it belongs to the domain, otherwise returns a
    /// [ParameterError::OutOfDomain] naming `field`.
    pub fn check(&self, field: &'static str, value: f64) -> Result<f64, PowerError> {
        if self.contains(value) {
            return Ok(value);
        }

        let reason: &'static str = if value.is_nan() {
            "is a NaN"
        } else if value.is_infinite() {
            "must be finite"
        } else {
            self.describe()
        };

        return Err(ParameterError::OutOfDomain {
            field,
            value,
            reason,
        }
        .into());
    }

    /// Same as [ParameterDomain::check] for an optional (possibly unknown) value.
    pub fn check_optional(
        &self,
        field: &'static str,
        value: Option<f64>,
    ) -> Result<Option<f64>, PowerError> {
        return value.map(|v| self.check(field, v)).transpose();
    }
}
