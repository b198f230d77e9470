//! Errors returned by the power analysis functions.
//!
//! Every public function of the library returns a [PowerError] when something
//! goes wrong. No partial results are ever returned: a call either produces a
//! complete [PowerResult](crate::result::PowerResult) or one of these errors.

use thiserror::Error;

/// Top level error of the library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PowerError {
    /// A provided parameter violates its domain, a parameter is not used by the
    /// selected test, or the number of unknown parameters is not exactly one.
    /// Always user-correctable.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),
    /// A distribution was evaluated with arguments outside its domain.
    /// The public functions validate their inputs first, so seeing this error
    /// means some internal computation produced an unexpected value.
    #[error("The {distribution} distribution was evaluated outside its domain: {reason}")]
    Domain {
        distribution: &'static str,
        reason: String,
    },
    /// The search interval of the solver does not contain a value that reaches
    /// the target power. The requested combination is not achievable inside the
    /// supported range of `field`.
    #[error(
        "The target power {target} cannot be reached for `{field}` inside the interval [{lower}, {upper}]. "
    )]
    Bounds {
        field: &'static str,
        lower: f64,
        upper: f64,
        target: f64,
    },
    /// The solver exceeded its iteration cap.
    #[error("The search for `{field}` did not converge after {iterations} iterations (last value: {last}). ")]
    Convergence {
        field: &'static str,
        iterations: usize,
        last: f64,
    },
}

impl PowerError {
    /// Returns true if the error is an [PowerError::InvalidParameter].
    #[must_use]
    pub const fn is_invalid_parameter(&self) -> bool {
        return matches!(self, PowerError::InvalidParameter(_));
    }

    /// Returns true if the error is a [PowerError::Bounds].
    #[must_use]
    pub const fn is_bounds(&self) -> bool {
        return matches!(self, PowerError::Bounds { .. });
    }
}

/// What was wrong with the parameters given by the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// The value is not inside the valid domain of the parameter. (Or it was
    /// a NaN or `+-inf`)
    #[error("`{field}` = {value} {reason}")]
    OutOfDomain {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// The parameter can not be solved (or is meaningless) for the selected test.
    #[error("`{field}` {reason}")]
    Unsupported {
        field: &'static str,
        reason: &'static str,
    },
    /// Exactly one of the solvable parameters must be left unknown.
    #[error("exactly one parameter must be left unknown, but {count} were: [{fields}]")]
    UnknownCount { count: usize, fields: String },
}
