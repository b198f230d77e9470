//! # Covariate distributions
//!
//! The power of the Wald test for the slope of a Poisson or logistic
//! regression depends on the distribution of the covariate `X` through the
//! expectations
//!
//! ```text
//!     d = E[w(X)]
//!     e = E[X w(X)]
//!     f = E[X^2 w(X)]
//! ```
//!
//! where `w` is the variance function of the model evaluated at the linear
//! predictor. [Covariate::expectation] computes `E[g(X)]` for any `g`:
//! continuous covariates are integrated numerically (see
//! [numerical_integration]) and discrete ones are summed.
//!

use crate::{
    configuration::integration::{DISCRETE_SUM_MAX_TERMS, DISCRETE_SUM_TOLERANCE},
    domain::ParameterDomain,
    errors::PowerError,
    euclid::{ln_poisson_weight, numerical_integration},
};

/// The distribution of the covariate of a Poisson or logistic regression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Covariate {
    /// `P(X = 1) = p`, `P(X = 0) = 1 - p`.
    Bernoulli { p: f64 },
    /// Exponential distribution with the given `rate` (`1 / mean`).
    Exponential { rate: f64 },
    /// `ln(X) ~ N(meanlog, sdlog^2)`
    Lognormal { meanlog: f64, sdlog: f64 },
    /// `X ~ N(mean, sd^2)`
    Normal { mean: f64, sd: f64 },
    /// Poisson distribution with mean `lambda`.
    Poisson { lambda: f64 },
    /// Continuous uniform in `[min, max]`.
    Uniform { min: f64, max: f64 },
}

impl Default for Covariate {
    fn default() -> Self {
        return Covariate::bernoulli();
    }
}

impl Covariate {
    /// Bernoulli with `p = 0.5`.
    #[must_use]
    pub const fn bernoulli() -> Covariate {
        return Covariate::Bernoulli { p: 0.5 };
    }

    /// Exponential with `rate = 1`.
    #[must_use]
    pub const fn exponential() -> Covariate {
        return Covariate::Exponential { rate: 1.0 };
    }

    /// Standard lognormal (`meanlog = 0`, `sdlog = 1`).
    #[must_use]
    pub const fn lognormal() -> Covariate {
        return Covariate::Lognormal {
            meanlog: 0.0,
            sdlog: 1.0,
        };
    }

    /// Standard normal.
    #[must_use]
    pub const fn normal() -> Covariate {
        return Covariate::Normal { mean: 0.0, sd: 1.0 };
    }

    /// Poisson with `lambda = 1`.
    #[must_use]
    pub const fn poisson() -> Covariate {
        return Covariate::Poisson { lambda: 1.0 };
    }

    /// Uniform in `[0, 1]`.
    #[must_use]
    pub const fn uniform() -> Covariate {
        return Covariate::Uniform { min: 0.0, max: 1.0 };
    }

    /// The name of the family.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        return match self {
            Covariate::Bernoulli { .. } => "Bernoulli",
            Covariate::Exponential { .. } => "exponential",
            Covariate::Lognormal { .. } => "lognormal",
            Covariate::Normal { .. } => "normal",
            Covariate::Poisson { .. } => "Poisson",
            Covariate::Uniform { .. } => "uniform",
        };
    }

    /// Checks that the parameters of the distribution are valid.
    pub fn validate(&self) -> Result<(), PowerError> {
        match *self {
            Covariate::Bernoulli { p } => {
                ParameterDomain::Probability.check("covariate p", p)?;
            }
            Covariate::Exponential { rate } => {
                ParameterDomain::Positive.check("covariate rate", rate)?;
            }
            Covariate::Lognormal { meanlog, sdlog } => {
                ParameterDomain::Reals.check("covariate meanlog", meanlog)?;
                ParameterDomain::Positive.check("covariate sdlog", sdlog)?;
            }
            Covariate::Normal { mean, sd } => {
                ParameterDomain::Reals.check("covariate mean", mean)?;
                ParameterDomain::Positive.check("covariate sd", sd)?;
            }
            Covariate::Poisson { lambda } => {
                ParameterDomain::Positive.check("covariate lambda", lambda)?;
            }
            Covariate::Uniform { min, max } => {
                ParameterDomain::Reals.check("covariate min", min)?;
                ParameterDomain::Above(min).check("covariate max", max)?;
            }
        }
        return Ok(());
    }

    /// Computes `E[g(X)]`.
    ///
    /// The parameters must be valid (see [Covariate::validate]).
    #[must_use]
    pub fn expectation(&self, g: impl Fn(f64) -> f64) -> f64 {
        return match *self {
            Covariate::Bernoulli { p } => (1.0 - p) * g(0.0) + p * g(1.0),
            Covariate::Exponential { rate } => {
                numerical_integration(|x| g(x) * rate * (-rate * x).exp(), (0.0, f64::INFINITY))
            }
            Covariate::Lognormal { meanlog, sdlog } => {
                // X = exp(meanlog + sdlog * Z), Z standard normal
                gaussian_expectation(|z| g((meanlog + sdlog * z).exp()))
            }
            Covariate::Normal { mean, sd } => gaussian_expectation(|z| g(mean + sd * z)),
            Covariate::Poisson { lambda } => poisson_expectation(g, lambda),
            Covariate::Uniform { min, max } => {
                numerical_integration(&g, (min, max)) / (max - min)
            }
        };
    }
}

/// `E[h(Z)]` for `Z ~ N(0, 1)`.
fn gaussian_expectation(h: impl Fn(f64) -> f64) -> f64 {
    let inv_sqrt_2pi: f64 = 1.0 / (2.0 * std::f64::consts::PI).sqrt();
    return numerical_integration(
        |z| h(z) * (-0.5 * z * z).exp() * inv_sqrt_2pi,
        (f64::NEG_INFINITY, f64::INFINITY),
    );
}

/// `E[g(K)]` for `K ~ Poisson(lambda)`, summing until the terms are negligible.
fn poisson_expectation(g: impl Fn(f64) -> f64, lambda: f64) -> f64 {
    let mut accumulator: f64 = 0.0;
    for k in 0..DISCRETE_SUM_MAX_TERMS {
        let x: f64 = k as f64;
        let mass: f64 = ln_poisson_weight(lambda, x).exp();
        let term: f64 = g(x) * mass;
        if term.is_finite() {
            accumulator += term;
        }

        if lambda < x
            && mass < DISCRETE_SUM_TOLERANCE
            && term.abs() <= DISCRETE_SUM_TOLERANCE * accumulator.abs()
        {
            break;
        }
    }
    return accumulator;
}
