//! # Power function
//!
//! Every test of the library can be reduced to a [NoncentralityContext]: the
//! distribution of the test statistic under the alternative hypothesis (a
//! [Statistic]) and the direction of the test (a [Hypothesis]). From it, the
//! power for a given significance level `alpha` is:
//!
//!  - F and chi squared statistics: the probability that the noncentral
//!     statistic is beyond the critical value of the null (central)
//!     distribution.
//!  - Scaled F statistics (variance components): the probability that
//!     `(1 + scale)` times a central F is beyond the critical value.
//!  - t and normal statistics: the probability of falling in the rejection
//!     region selected by the alternative (one or both tails).
//!
//! The context is computed from scratch on each evaluation, nothing is cached.

use crate::{
    distribution_trait::Distribution,
    distributions::{ChiSquared::ChiSquared, F::F, Normal::STD_NORMAL, StudentT::StudentT},
    domain::ParameterDomain,
    errors::PowerError,
    hypothesis::Hypothesis,
};

/// The distribution of a test statistic under the alternative hypothesis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Statistic {
    /// Noncentral t with `df` degrees of freedom and noncentrality `ncp`.
    /// The null distribution is the central t with the same `df`.
    T { df: f64, ncp: f64 },
    /// Noncentral F. The null distribution is the central F(`df1`, `df2`).
    /// Always upper tailed.
    F { df1: f64, df2: f64, ncp: f64 },
    /// Noncentral chi squared. The null distribution is a chi squared with the
    /// same `df` and noncentrality `null_ncp` (`0.0` for the usual tests).
    ///
    /// Upper tailed unless the tail is [Hypothesis::LeftTail].
    ChiSquared { df: f64, null_ncp: f64, ncp: f64 },
    /// `N(mean, sd^2)`. The null distribution is the standard normal.
    Normal { mean: f64, sd: f64 },
    /// `(1 + scale)` times a central F(`df1`, `df2`). The null distribution is
    /// the central F (`scale = 0`). Used by the tests of variance components.
    /// Always upper tailed.
    ScaledF { df1: f64, df2: f64, scale: f64 },
}

/// A [Statistic] together with the direction of the test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoncentralityContext {
    pub statistic: Statistic,
    pub tail: Hypothesis,
}

impl NoncentralityContext {
    #[must_use]
    pub const fn new(statistic: Statistic, tail: Hypothesis) -> NoncentralityContext {
        return NoncentralityContext { statistic, tail };
    }

    /// Upper tailed test (the tail of F and chi squared tests).
    #[must_use]
    pub const fn upper(statistic: Statistic) -> NoncentralityContext {
        return NoncentralityContext {
            statistic,
            tail: Hypothesis::RightTail,
        };
    }

    /// Computes the power of the test at the significance level `alpha`.
    ///
    /// `alpha` must be in `(0, 1)`, otherwise an
    /// [InvalidParameter](PowerError::InvalidParameter) error is returned.
    pub fn power(&self, alpha: f64) -> Result<f64, PowerError> {
        ParameterDomain::Probability.check("alpha", alpha)?;

        let power: f64 = match self.statistic {
            Statistic::T { df, ncp } => {
                let null: StudentT = StudentT::new(df)?;
                let alternative: StudentT = StudentT::noncentral(df, ncp)?;
                match self.tail {
                    Hypothesis::TwoTailed => {
                        let critical: f64 = null.inverse_sf(0.5 * alpha)?;
                        alternative.sf(critical) + alternative.cdf(-critical)
                    }
                    Hypothesis::RightTail => {
                        let critical: f64 = null.inverse_sf(alpha)?;
                        alternative.sf(critical)
                    }
                    Hypothesis::LeftTail => {
                        let critical: f64 = null.inverse_sf(alpha)?;
                        alternative.cdf(-critical)
                    }
                }
            }
            Statistic::F { df1, df2, ncp } => {
                let critical: f64 = F::new(df1, df2)?.inverse_sf(alpha)?;
                F::noncentral(df1, df2, ncp)?.sf(critical)
            }
            Statistic::ScaledF { df1, df2, scale } => {
                let null: F = F::new(df1, df2)?;
                let critical: f64 = null.inverse_sf(alpha)?;
                null.sf(critical / (1.0 + scale))
            }
            Statistic::ChiSquared { df, null_ncp, ncp } => {
                let null: ChiSquared = ChiSquared::noncentral(df, null_ncp)?;
                let alternative: ChiSquared = ChiSquared::noncentral(df, ncp)?;
                if self.tail == Hypothesis::LeftTail {
                    let critical: f64 = null.quantile(alpha)?;
                    alternative.cdf(critical)
                } else {
                    let critical: f64 = null.inverse_sf(alpha)?;
                    alternative.sf(critical)
                }
            }
            Statistic::Normal { mean, sd } => match self.tail {
                Hypothesis::TwoTailed => {
                    let critical: f64 = STD_NORMAL.inverse_sf(0.5 * alpha)?;
                    STD_NORMAL.sf((critical - mean) / sd) + STD_NORMAL.cdf((-critical - mean) / sd)
                }
                Hypothesis::RightTail => {
                    let critical: f64 = STD_NORMAL.inverse_sf(alpha)?;
                    STD_NORMAL.sf((critical - mean) / sd)
                }
                Hypothesis::LeftTail => {
                    let critical: f64 = STD_NORMAL.inverse_sf(alpha)?;
                    STD_NORMAL.cdf((-critical - mean) / sd)
                }
            },
        };

        return Ok(power.clamp(0.0, 1.0));
    }
}
