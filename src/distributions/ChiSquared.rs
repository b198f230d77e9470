//! # Chi squared distribution
//!
//! The (noncentral) [Chi squared distribution](https://en.wikipedia.org/wiki/Noncentral_chi-squared_distribution)
//! is the distribution of the test statistic of the ANOVA analogues for
//! binary and count data and of the structural equation model tests.
//!
//! The noncentral cdf is a Poisson mixture of regularized lower incomplete
//! gamma functions:
//!
//! ```text
//!     P(X <= x) = sum {j = 0 -> inf} Pois(j; lambda/2) * P(k/2 + j, x/2)
//! ```
//!
//! Like the [F](crate::distributions::F) distribution, the sum starts at the
//! mode of the weights and the incomplete gamma function is advanced with
//! `P(a + 1, h) = P(a, h) - h^a e^(-h) / Gamma(a + 1)`.
//!

use log::warn;
use statrs::function::gamma::{gamma_lr, gamma_ur, ln_gamma};

use crate::{
    configuration::series::{SERIES_MAX_POISSON_MEAN, SERIES_MAX_TERMS, SERIES_TOLERANCE},
    distribution_trait::Distribution,
    distributions::Normal::STD_NORMAL,
    domain::ContinuousDomain,
    errors::PowerError,
    euclid::{ln_poisson_weight, poisson_mode},
};

pub const CHI_SQUARED_DOMAIN: ContinuousDomain = ContinuousDomain::From(0.0);

#[derive(Debug, Clone, PartialEq)]
pub struct ChiSquared {
    degrees_of_freedom: f64,
    ncp: f64,
}

impl ChiSquared {
    /// Creates a new (central) [ChiSquared] distribution.
    ///
    ///  - `degrees_of_freedom` indicates the number of degrees of freedom.
    ///      - Must be finite and stricly positive. It does not need to be an integer.
    pub fn new(degrees_of_freedom: f64) -> Result<ChiSquared, PowerError> {
        return ChiSquared::noncentral(degrees_of_freedom, 0.0);
    }

    /// Creates a new noncentral [ChiSquared] distribution.
    ///
    ///  - `ncp` must be finite and non-negative.
    pub fn noncentral(degrees_of_freedom: f64, ncp: f64) -> Result<ChiSquared, PowerError> {
        #[allow(clippy::nonminimal_bool)]
        if !degrees_of_freedom.is_finite() || !(0.0 < degrees_of_freedom) {
            return Err(PowerError::Domain {
                distribution: "chi squared",
                reason: format!(
                    "the degrees of freedom must be finite and positive, got {degrees_of_freedom}"
                ),
            });
        }

        #[allow(clippy::nonminimal_bool)]
        if !ncp.is_finite() || !(0.0 <= ncp) {
            return Err(PowerError::Domain {
                distribution: "chi squared",
                reason: format!(
                    "the noncentrality parameter must be finite and non-negative, got {ncp}"
                ),
            });
        }

        return Ok(ChiSquared {
            degrees_of_freedom,
            ncp,
        });
    }

    #[must_use]
    pub const fn get_degrees_of_freedom(&self) -> f64 {
        return self.degrees_of_freedom;
    }

    #[must_use]
    pub const fn get_ncp(&self) -> f64 {
        return self.ncp;
    }

    /// Returns `(P(X <= x), P(X > x))`.
    fn tails(&self, x: f64) -> (f64, f64) {
        if x.is_nan() || x <= 0.0 {
            return (0.0, 1.0);
        }
        if x.is_infinite() {
            return (1.0, 0.0);
        }

        let h: f64 = 0.5 * x;
        let a: f64 = 0.5 * self.degrees_of_freedom;
        let mu: f64 = 0.5 * self.ncp;

        if SERIES_MAX_POISSON_MEAN < mu {
            return self.normal_approximation(x);
        }

        let mode: f64 = poisson_mode(mu);
        let a_mode: f64 = a + mode;
        let (lower_mode, upper_mode): (f64, f64) = gamma_reg_pair(a_mode, h);

        if self.ncp == 0.0 {
            return (lower_mode, upper_mode);
        }

        // h^a e^(-h) / Gamma(a + 1) at a = a_mode
        let term_mode: f64 = (a_mode * h.ln() - h - ln_gamma(a_mode + 1.0)).exp();
        let weight_mode: f64 = ln_poisson_weight(mu, mode).exp();

        let mut cdf: f64 = weight_mode * lower_mode;
        let mut sf: f64 = weight_mode * upper_mode;

        // forward
        let (mut weight, mut lower, mut upper, mut term): (f64, f64, f64, f64) =
            (weight_mode, lower_mode, upper_mode, term_mode);
        let mut j: f64 = mode;
        let mut num_terms: usize = 0;
        loop {
            let shape: f64 = a + j;
            lower = (lower - term).max(0.0);
            upper = (upper + term).min(1.0);
            term = term * h / (shape + 1.0);
            j = j + 1.0;
            weight = weight * mu / j;

            cdf += weight * lower;
            sf += weight * upper;

            num_terms += 1;
            if weight < SERIES_TOLERANCE {
                break;
            }
            if SERIES_MAX_TERMS <= num_terms {
                warn!(
                    "Noncentral chi squared series truncated after {num_terms} terms (x = {x}, df = {}, ncp = {}). ",
                    self.degrees_of_freedom, self.ncp
                );
                break;
            }
        }

        // backward
        let (mut weight, mut lower, mut upper, mut term): (f64, f64, f64, f64) =
            (weight_mode, lower_mode, upper_mode, term_mode);
        let mut j: f64 = mode;
        while 0.0 < j {
            let shape: f64 = a + j;
            term = term * shape / h;
            lower = (lower + term).min(1.0);
            upper = (upper - term).max(0.0);
            weight = weight * j / mu;
            j = j - 1.0;

            cdf += weight * lower;
            sf += weight * upper;

            if weight < SERIES_TOLERANCE {
                break;
            }
        }

        return (cdf.clamp(0.0, 1.0), sf.clamp(0.0, 1.0));
    }

    /// Patnaik's approximation combined with the Wilson-Hilferty cube root.
    fn normal_approximation(&self, x: f64) -> (f64, f64) {
        let m: f64 = self.degrees_of_freedom + self.ncp;
        let s: f64 = self.degrees_of_freedom + 2.0 * self.ncp;
        let variance: f64 = 2.0 * s / (9.0 * m * m);

        let z: f64 = ((x / m).cbrt() - (1.0 - variance)) / variance.sqrt();
        return (STD_NORMAL.cdf(z), STD_NORMAL.sf(z));
    }
}

/// The regularized incomplete gamma functions `(P(a, h), Q(a, h))`.
/// The smaller one is computed directly.
fn gamma_reg_pair(a: f64, h: f64) -> (f64, f64) {
    if h < a + 1.0 {
        let lower: f64 = gamma_lr(a, h);
        return (lower, 1.0 - lower);
    }
    let upper: f64 = gamma_ur(a, h);
    return (1.0 - upper, upper);
}

impl Distribution for ChiSquared {
    fn cdf(&self, x: f64) -> f64 {
        return self.tails(x).0;
    }

    fn get_domain(&self) -> ContinuousDomain {
        return CHI_SQUARED_DOMAIN;
    }

    fn name(&self) -> &'static str {
        return "chi squared";
    }

    fn sf(&self, x: f64) -> f64 {
        return self.tails(x).1;
    }
}
