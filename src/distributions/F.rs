//! # F distribution
//!
//! The (noncentral) [F distribution](https://en.wikipedia.org/wiki/Noncentral_F-distribution)
//! is the distribution of the test statistic of the ANOVA family, the multiple
//! regression test and some of the multilevel designs.
//!
//! ### Parameters
//!
//!  - `d1`: degrees of freedom of the numerator (stricly positive)
//!  - `d2`: degrees of freedom of the denominator (stricly positive)
//!  - `ncp`: noncentrality parameter `lambda` (non-negative). With `ncp = 0`
//!     this is the usual central F distribution.
//!
//! ### Computation
//!
//! The noncentral cdf is a Poisson mixture of regularized incomplete beta
//! functions:
//!
//! ```text
//!     P(F <= x) = sum {j = 0 -> inf} Pois(j; lambda/2) * I_y(d1/2 + j, d2/2)
//!     y = d1 x / (d1 x + d2)
//! ```
//!
//! The sum starts at the mode of the Poisson weights and moves outwards in both
//! directions. The incomplete beta function is only evaluated once (at the
//! mode), the other terms follow from the recurrence
//! `I_y(a + 1, b) = I_y(a, b) - y^a (1 - y)^b / (a B(a, b))`.
//!
//! When the noncentrality is huge, or both degrees of freedom are large, a
//! normal approximation is used instead.
//!

use log::warn;
use statrs::function::gamma::ln_gamma;

use crate::{
    configuration::series::{
        BETA_SHAPE_LIMIT, SERIES_MAX_POISSON_MEAN, SERIES_MAX_TERMS, SERIES_TOLERANCE,
    },
    distribution_trait::Distribution,
    distributions::Normal::STD_NORMAL,
    domain::ContinuousDomain,
    errors::PowerError,
    euclid::{beta_reg_pair, ln_poisson_weight, poisson_mode},
};

pub const F_DOMAIN: ContinuousDomain = ContinuousDomain::From(0.0);

#[derive(Debug, Clone, PartialEq)]
pub struct F {
    d1: f64,
    d2: f64,
    ncp: f64,
}

impl F {
    /// Creates a new central [F] distribution with parameters `d1` and `d2`.
    /// Where `d1` is the degrees of freedom of the numerator and `d2` are
    /// the degrees of freedom of the denominator.
    ///
    /// It will return error under the following conditions:
    ///  - `d1` or `d2` is `+-inf` or a NaN
    ///  - `d1 <= 0.0` or `d2 <= 0.0`
    pub fn new(d1: f64, d2: f64) -> Result<F, PowerError> {
        return F::noncentral(d1, d2, 0.0);
    }

    /// Creates a new noncentral [F] distribution.
    ///
    /// Same conditions as [F::new], and additionally `ncp` must be finite and
    /// non-negative.
    pub fn noncentral(d1: f64, d2: f64, ncp: f64) -> Result<F, PowerError> {
        #[allow(clippy::nonminimal_bool)]
        if !d1.is_finite() || !(0.0 < d1) {
            return Err(domain_error(format!(
                "the numerator degrees of freedom must be finite and positive, got {d1}"
            )));
        }

        #[allow(clippy::nonminimal_bool)]
        if !d2.is_finite() || !(0.0 < d2) {
            return Err(domain_error(format!(
                "the denominator degrees of freedom must be finite and positive, got {d2}"
            )));
        }

        #[allow(clippy::nonminimal_bool)]
        if !ncp.is_finite() || !(0.0 <= ncp) {
            return Err(domain_error(format!(
                "the noncentrality parameter must be finite and non-negative, got {ncp}"
            )));
        }

        return Ok(F { d1, d2, ncp });
    }

    #[must_use]
    pub const fn get_d1(&self) -> f64 {
        return self.d1;
    }

    #[must_use]
    pub const fn get_d2(&self) -> f64 {
        return self.d2;
    }

    #[must_use]
    pub const fn get_ncp(&self) -> f64 {
        return self.ncp;
    }

    /// Returns `(P(F <= x), P(F > x))`.
    fn tails(&self, x: f64) -> (f64, f64) {
        if x.is_nan() || x <= 0.0 {
            return (0.0, 1.0);
        }

        let scaled: f64 = self.d1 * x;
        if !scaled.is_finite() {
            return (1.0, 0.0);
        }

        let y: f64 = scaled / (scaled + self.d2);
        let y_complement: f64 = self.d2 / (scaled + self.d2);
        let a: f64 = 0.5 * self.d1;
        let b: f64 = 0.5 * self.d2;

        let mu: f64 = 0.5 * self.ncp;
        let mode: f64 = poisson_mode(mu);
        let a_mode: f64 = a + mode;

        if SERIES_MAX_POISSON_MEAN < mu || BETA_SHAPE_LIMIT < a_mode.min(b) {
            return self.normal_approximation(x);
        }

        if self.ncp == 0.0 {
            return beta_reg_pair(a, b, y, y_complement);
        }

        let (lower_mode, upper_mode): (f64, f64) = beta_reg_pair(a_mode, b, y, y_complement);
        // y^a (1 - y)^b / (a B(a, b)) at a = a_mode
        let term_mode: f64 = (ln_gamma(a_mode + b) - ln_gamma(a_mode + 1.0) - ln_gamma(b)
            + a_mode * y.ln()
            + b * y_complement.ln())
        .exp();
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
            term = term * y * (shape + b) / (shape + 1.0);
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
                    "Noncentral F series truncated after {num_terms} terms (x = {x}, d1 = {}, d2 = {}, ncp = {}). ",
                    self.d1, self.d2, self.ncp
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
            // term at shape - 1
            term = term * shape / (y * (shape - 1.0 + b));
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

    /// Severo-Zelen normal approximation, based on the Wilson-Hilferty cube
    /// root transformation of both chi-squared variables.
    ///
    /// Accurate when both degrees of freedom (or the noncentrality) are large,
    /// wich is where the series becomes impractical.
    fn normal_approximation(&self, x: f64) -> (f64, f64) {
        let m: f64 = self.d1 + self.ncp;
        let s: f64 = self.d1 + 2.0 * self.ncp;
        let u: f64 = (self.d1 * x / m).cbrt();
        let denominator_term: f64 = 2.0 / (9.0 * self.d2);
        let numerator_term: f64 = 2.0 * s / (9.0 * m * m);

        let z: f64 = (u * (1.0 - denominator_term) - (1.0 - numerator_term))
            / (numerator_term + u * u * denominator_term).sqrt();

        return (STD_NORMAL.cdf(z), STD_NORMAL.sf(z));
    }
}

fn domain_error(reason: String) -> PowerError {
    return PowerError::Domain {
        distribution: "F",
        reason,
    };
}

impl Distribution for F {
    fn cdf(&self, x: f64) -> f64 {
        return self.tails(x).0;
    }

    fn get_domain(&self) -> ContinuousDomain {
        return F_DOMAIN;
    }

    fn name(&self) -> &'static str {
        return "F";
    }

    fn sf(&self, x: f64) -> f64 {
        return self.tails(x).1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn central_critical_value() {
        let f: F = F::new(3.0, 96.0).expect("Parameters are valid. ");
        let critical: f64 = f.inverse_sf(0.05).expect("valid probability");
        assert_approx_eq!(critical, 2.699392597552105, 1e-8);
        assert_approx_eq!(f.sf(critical), 0.05, 1e-12);
    }

    #[test]
    fn noncentral_tails() {
        let f: F = F::noncentral(3.0, 20.0, 4.0).expect("Parameters are valid. ");
        assert_approx_eq!(f.cdf(2.5), 0.5919306492361615, 1e-9);
        assert_approx_eq!(f.sf(2.5), 0.4080693507638389, 1e-9);
        assert_approx_eq!(f.cdf(2.5) + f.sf(2.5), 1.0, 1e-12);
    }

    #[test]
    fn large_noncentrality_is_stable() {
        let f: F = F::noncentral(4.0, 500.0, 1e4).expect("Parameters are valid. ");
        // the mean is roughly (d1 + ncp) / d1 * d2 / (d2 - 2)
        let mean: f64 = (4.0 + 1e4) / 4.0 * 500.0 / 498.0;
        assert!(f.cdf(mean * 0.6) < 1e-6);
        assert!(f.sf(mean * 1.5) < 1e-6);
        let median: f64 = f.quantile(0.5).expect("valid probability");
        assert!((median - mean).abs() / mean < 0.05);
    }

    #[test]
    fn large_degrees_of_freedom() {
        // close to a scaled chi-squared: F(20000, 1e7) is concentrated around 1
        let f: F = F::new(20000.0, 1e7).expect("Parameters are valid. ");
        assert_approx_eq!(f.cdf(1.0), 0.5, 0.01);
        assert!(f.sf(1.1) < 1e-6);
        assert_approx_eq!(f.cdf(1.05) + f.sf(1.05), 1.0, 1e-12);
    }

    #[test]
    fn invalid_parameters() {
        assert!(F::new(0.0, 10.0).is_err());
        assert!(F::new(3.0, f64::NAN).is_err());
        assert!(F::noncentral(3.0, 10.0, -1.0).is_err());
    }
}
