//! This script contains the interface used to communicate with the
//! distributions of the test statistics.
//!
//! The power of a test only needs the tails of a distribution: the
//! [cdf](Distribution::cdf), the [survival function](Distribution::sf) and
//! their inverses (to find critical values). The pdf is never needed, so
//! unlike a general purpose statistics library the only required methods are
//! the [cdf](Distribution::cdf) and the [domain](Distribution::get_domain).

use crate::configuration::quantile::{
    QUANTILE_BRACKET_LIMIT, QUANTILE_MAX_ITERATIONS, QUANTILE_TOLERANCE,
};
use crate::domain::ContinuousDomain;
use crate::errors::PowerError;

/// The trait for the (continuous) distribution of a test statistic.
///
/// Implementors must be valid distributions: the [Distribution::cdf] must be
/// non-decreasing, go from `0.0` to `1.0`, and be consistent with the
/// [Distribution::sf] (`cdf(x) + sf(x) = 1`).
pub trait Distribution {
    // Required methods:

    /// Evaluates the [CDF](https://en.wikipedia.org/wiki/Cumulative_distribution_function)
    /// (Cumulative distribution function) `P(X <= x)`.
    ///
    /// If the function is evaluated outside the domain it returns `0.0` or `1.0`.
    fn cdf(&self, x: f64) -> f64;

    /// Returns the [ContinuousDomain] of the distribution.
    fn get_domain(&self) -> ContinuousDomain;

    /// Name of the distribution, used in the error messages.
    fn name(&self) -> &'static str;

    // Provided methods:
    // Manual implementation for a specific distribution is recommended.

    /// Evaluates the [survival function](https://en.wikipedia.org/wiki/Survival_function)
    /// `P(X > x)`.
    ///
    /// The default implementation is `1 - cdf(x)`, wich loses precision in the
    /// upper tail.
    fn sf(&self, x: f64) -> f64 {
        return 1.0 - self.cdf(x);
    }

    /// Evaluates the [quantile function](https://en.wikipedia.org/wiki/Quantile_function):
    /// the value `x` such that `cdf(x) = p`.
    ///
    /// Returns a [PowerError::Domain] if `p` is not in the open interval `(0, 1)`.
    /// The result may be `+-inf` if the quantile is beyond what a [f64] can hold.
    fn quantile(&self, p: f64) -> Result<f64, PowerError> {
        check_probability(self.name(), p)?;
        return Ok(invert_increasing(|x| self.cdf(x) - p, self.get_domain()));
    }

    /// Evaluates the inverse of the [Distribution::sf]: the value `x` such that
    /// `sf(x) = p`. This is the critical value of an upper tailed test with
    /// significance level `p`.
    ///
    /// Returns a [PowerError::Domain] if `p` is not in the open interval `(0, 1)`.
    /// The result may be `+-inf` if the quantile is beyond what a [f64] can hold.
    fn inverse_sf(&self, p: f64) -> Result<f64, PowerError> {
        check_probability(self.name(), p)?;
        return Ok(invert_increasing(|x| p - self.sf(x), self.get_domain()));
    }
}

/// Returns an error if `p` is not a valid probability for a quantile function.
pub fn check_probability(distribution: &'static str, p: f64) -> Result<(), PowerError> {
    #[allow(clippy::nonminimal_bool)]
    if p.is_nan() || !(0.0 < p && p < 1.0) {
        return Err(PowerError::Domain {
            distribution,
            reason: format!("the quantile function needs 0 < p < 1, got {p}"),
        });
    }
    return Ok(());
}

/// Finds the root of the non-decreasing function `h` inside `domain`.
///
/// The bracket is first expanded (by doubling) until it contains the root
/// and then it is refined with bisection. If the bracket would need to go
/// beyond [QUANTILE_BRACKET_LIMIT] the corresponding infinity is returned.
fn invert_increasing(h: impl Fn(f64) -> f64, domain: ContinuousDomain) -> f64 {
    let (min, max): (f64, f64) = domain.get_bounds();

    let mut lower: f64 = if min.is_finite() {
        min
    } else {
        let mut x: f64 = -1.0;
        while 0.0 < h(x) {
            x = x * 2.0;
            if x < -QUANTILE_BRACKET_LIMIT {
                return f64::NEG_INFINITY;
            }
        }
        x
    };

    let mut upper: f64 = if max.is_finite() {
        max
    } else {
        let mut x: f64 = lower.max(0.0) + 1.0;
        while h(x) < 0.0 {
            x = x * 2.0;
            if QUANTILE_BRACKET_LIMIT < x {
                return f64::INFINITY;
            }
        }
        x
    };

    for _ in 0..QUANTILE_MAX_ITERATIONS {
        let middle: f64 = 0.5 * (lower + upper);
        if h(middle) < 0.0 {
            lower = middle;
        } else {
            upper = middle;
        }

        if upper - lower <= QUANTILE_TOLERANCE * middle.abs().max(1.0) {
            break;
        }
    }

    return 0.5 * (lower + upper);
}
