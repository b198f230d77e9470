//! This file contains the default values and other numerical choices used
//! through the library.
//!
//! There are no perfect values that will work for every design. Making the
//! tolerances tighter comes with an extra computational cost. The values are
//! compile time constants: the results of the library are reproducible and
//! do not depend on any global state.

/// The library uses numerical integration to compute the expectations over the
/// distribution of a covariate (Poisson and logistic regression).
///
/// We use the [Simpson's rule](https://en.wikipedia.org/wiki/Simpson%27s_rule#Composite_Simpson's_1/3_rule)
/// with a fixed number of steps. Integrals over an infinite range are first
/// mapped to `[0, 1]` or `[-1, 1]` (see [crate::euclid::numerical_integration]),
/// so every integral is done over a small interval.
pub mod integration {
    /// The number of steps used to integrate among a small interval
    /// (such as `[0, 1]` or `[-1, 1]`). The value is relatively large because we want
    /// to make sure to capture the shape of the function in the small interval.
    ///
    /// `32768` = `2^15`. Must be even.
    pub const SMALL_INTEGRATION_NUM_STEPS: usize = 1 << 15;

    /// Discrete covariates are summed term by term until the probability mass
    /// of the remaining terms is below this value.
    pub const DISCRETE_SUM_TOLERANCE: f64 = 1e-17;

    /// Hard limit on the number of terms of a discrete sum.
    pub const DISCRETE_SUM_MAX_TERMS: usize = 100_000;
}

/// Constants for the Poisson mixture series of the noncentral distributions.
pub mod series {
    /// The series stops in each direction once the Poisson weight of the
    /// current term is below this value.
    pub const SERIES_TOLERANCE: f64 = 1e-16;

    /// Maximum number of terms in each direction. If it is reached a warning is
    /// logged and the partial sum is used.
    pub const SERIES_MAX_TERMS: usize = 1_000_000;

    /// Above this Poisson mean (half the noncentrality) the F and chi-squared
    /// distributions use a normal approximation instead of the series.
    pub const SERIES_MAX_POISSON_MEAN: f64 = 1e6;

    /// The continued fraction of the incomplete beta function in `statrs`
    /// loses accuracy when both shape parameters are above this value.
    /// The F distribution switches to a normal approximation there.
    pub const BETA_SHAPE_LIMIT: f64 = 5000.0;

    /// The noncentral t distribution is approximated by a normal when the
    /// degrees of freedom are above this value...
    pub const T_APPROXIMATION_DF: f64 = 4e5;

    /// ... or when the squared noncentrality is above this value
    /// (`2 * ln(2) * 1021`, where the Poisson weights underflow).
    pub const T_APPROXIMATION_NCP_SQUARED: f64 = 1415.4;
}

/// Constants used to invert the cumulative distribution functions.
pub mod quantile {
    /// Relative width of the final bracket.
    pub const QUANTILE_TOLERANCE: f64 = 1e-13;

    /// Maximum number of bisection steps.
    pub const QUANTILE_MAX_ITERATIONS: usize = 400;

    /// If the bracket needs to grow beyond this value the quantile is reported
    /// as infinite. (It happens for the t distribution with a tiny number of
    /// degrees of freedom.)
    pub const QUANTILE_BRACKET_LIMIT: f64 = 1e150;
}

/// Constants of the unknown-parameter solver.
pub mod solver {
    /// The search stops when the bracket is narrower than
    /// `SOLVER_X_TOLERANCE * max(1, |x|)`.
    pub const SOLVER_X_TOLERANCE: f64 = 1e-10;

    /// The search stops when `|power(x) - target| <= SOLVER_POWER_TOLERANCE`.
    pub const SOLVER_POWER_TOLERANCE: f64 = 1e-12;

    /// Maximum number of bisection steps before a
    /// [Convergence](crate::errors::PowerError::Convergence) error.
    pub const SOLVER_MAX_ITERATIONS: usize = 1000;

    /// Number of points of the grid used to scan for a bracket.
    pub const GRID_POINTS: usize = 100;

    /// After rounding a sample size up, we step it up again at most this many
    /// times if the power is still below the target.
    pub const SAMPLE_SIZE_MAX_STEP_UP: usize = 16;
}
