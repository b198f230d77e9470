//! # Student's T distribution
//!
//! The (noncentral) [Student's T distribution](https://en.wikipedia.org/wiki/Noncentral_t-distribution)
//! is the distribution of the t-tests, the contrasts of the ANOVA and the
//! main effects of the multilevel trials.
//!
//! If `Z ~ N(delta, 1)` and `V ~ Chi^2(nu)` are independent, `T = Z / sqrt(V / nu)`
//! follows a noncentral t with `nu` degrees of freedom and noncentrality `delta`.
//!
//! The cdf is computed with the decomposition of Lenth (Applied Statistics
//! algorithm AS 243). The upper tail `P(T > t)` (for `t >= 0`) is summed
//! directly:
//!
//! ```text
//!     P(T > t) = 1/2 * sum {j = 0 -> inf} p_j I_y(nu/2, j + 1/2) + q_j I_y(nu/2, j + 1)
//!     y = nu / (t^2 + nu)
//!     p_j = e^(-mu) mu^j / j!
//!     q_j = delta / sqrt(2) * e^(-mu) mu^j / Gamma(j + 3/2)
//!     mu = delta^2 / 2
//! ```
//!
//! The lower tail for negative `t` follows from `P(T <= t | delta) = P(T > -t | -delta)`.
//!
//! For very large degrees of freedom or noncentrality the normal approximation
//! `P(T <= t) ~ Phi((t (1 - s) - delta) / sqrt(1 + 2 s t^2))` with `s = 1 / (4 nu)`
//! is used.
//!

use std::f64::consts::SQRT_2;

use log::warn;
use statrs::function::gamma::ln_gamma;

use crate::{
    configuration::series::{
        SERIES_MAX_TERMS, SERIES_TOLERANCE, T_APPROXIMATION_DF, T_APPROXIMATION_NCP_SQUARED,
    },
    distribution_trait::Distribution,
    distributions::Normal::STD_NORMAL,
    domain::ContinuousDomain,
    errors::PowerError,
    euclid::{beta_reg_pair, ln_poisson_weight, poisson_mode},
};

pub const STUDENT_T_DOMAIN: ContinuousDomain = ContinuousDomain::Reals;

#[derive(Debug, Clone, PartialEq)]
pub struct StudentT {
    degrees_of_freedom: f64,
    ncp: f64,
}

/// One of the 2 chains of incomplete beta functions `J(a) = I_y(b, a)` of the
/// Lenth decomposition, together with its Poisson-like weight.
#[derive(Debug, Clone, Copy)]
struct Chain {
    /// current shape `a`
    shape: f64,
    /// `J(a) = I_y(b, a)`
    value: f64,
    /// `J(a + 1) - J(a) = Gamma(a + b) / (Gamma(a + 1) Gamma(b)) x^a y^b`
    step: f64,
    weight: f64,
}

impl Chain {
    fn new(shape: f64, b: f64, x: f64, y: f64, weight: f64) -> Chain {
        let value: f64 = beta_reg_pair(shape, b, x, y).1;
        let step: f64 =
            (ln_gamma(shape + b) - ln_gamma(shape + 1.0) - ln_gamma(b) + shape * x.ln() + b * y.ln())
                .exp();
        return Chain {
            shape,
            value,
            step,
            weight,
        };
    }

    /// Moves from `a` to `a + 1`.
    fn forward(&mut self, b: f64, x: f64) {
        self.value = (self.value + self.step).min(1.0);
        self.step = self.step * x * (self.shape + b) / (self.shape + 1.0);
        self.shape = self.shape + 1.0;
    }

    /// Moves from `a` to `a - 1`.
    fn backward(&mut self, b: f64, x: f64) {
        self.step = self.step * self.shape / (x * (self.shape - 1.0 + b));
        self.value = (self.value - self.step).max(0.0);
        self.shape = self.shape - 1.0;
    }

    fn contribution(&self) -> f64 {
        return self.weight * self.value;
    }
}

impl StudentT {
    /// Creates a new (central) [StudentT] distribution.
    ///
    ///  - `degrees_of_freedom` must be finite and stricly positive. It does not
    ///     need to be an integer.
    pub fn new(degrees_of_freedom: f64) -> Result<StudentT, PowerError> {
        return StudentT::noncentral(degrees_of_freedom, 0.0);
    }

    /// Creates a new noncentral [StudentT] distribution.
    ///
    ///  - `ncp` can be any finite number.
    pub fn noncentral(degrees_of_freedom: f64, ncp: f64) -> Result<StudentT, PowerError> {
        #[allow(clippy::nonminimal_bool)]
        if !degrees_of_freedom.is_finite() || !(0.0 < degrees_of_freedom) {
            return Err(PowerError::Domain {
                distribution: "Student's t",
                reason: format!(
                    "the degrees of freedom must be finite and positive, got {degrees_of_freedom}"
                ),
            });
        }

        if !ncp.is_finite() {
            return Err(PowerError::Domain {
                distribution: "Student's t",
                reason: format!("the noncentrality parameter must be finite, got {ncp}"),
            });
        }

        return Ok(StudentT {
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

    /// Returns `(P(T <= t), P(T > t))`.
    fn tails(&self, t: f64) -> (f64, f64) {
        if t.is_nan() {
            return (f64::NAN, f64::NAN);
        }
        if t == f64::INFINITY {
            return (1.0, 0.0);
        }
        if t == f64::NEG_INFINITY {
            return (0.0, 1.0);
        }

        if T_APPROXIMATION_DF < self.degrees_of_freedom
            || T_APPROXIMATION_NCP_SQUARED < self.ncp * self.ncp
        {
            let s: f64 = 0.25 / self.degrees_of_freedom;
            let z: f64 = (t * (1.0 - s) - self.ncp) / (1.0 + 2.0 * s * t * t).sqrt();
            return (STD_NORMAL.cdf(z), STD_NORMAL.sf(z));
        }

        if t == 0.0 {
            // P(T > 0) = P(Z > -delta)
            return (STD_NORMAL.sf(self.ncp), STD_NORMAL.cdf(self.ncp));
        }

        if 0.0 < t {
            let upper: f64 = upper_tail(t, self.degrees_of_freedom, self.ncp);
            return (1.0 - upper, upper);
        }

        let lower: f64 = upper_tail(-t, self.degrees_of_freedom, -self.ncp);
        return (lower, 1.0 - lower);
    }
}

/// `P(T > t)` for `0 < t < inf`.
fn upper_tail(t: f64, nu: f64, delta: f64) -> f64 {
    // y = nu / (t^2 + nu) and x = 1 - y without squaring t
    let r: f64 = nu / t;
    let y: f64 = r / (t + r);
    let x: f64 = t / (t + r);
    let b: f64 = 0.5 * nu;

    if delta == 0.0 {
        return 0.5 * beta_reg_pair(0.5, b, x, y).1;
    }

    let mu: f64 = 0.5 * delta * delta;
    let mode: f64 = poisson_mode(mu);

    let p_mode: f64 = ln_poisson_weight(mu, mode).exp();
    let q_mode: f64 = delta / SQRT_2 * (-mu + mode * mu.ln() - ln_gamma(mode + 1.5)).exp();

    let p_chain: Chain = Chain::new(mode + 0.5, b, x, y, p_mode);
    let q_chain: Chain = Chain::new(mode + 1.0, b, x, y, q_mode);

    let mut accumulator: f64 = p_chain.contribution() + q_chain.contribution();

    // forward
    let (mut p, mut q): (Chain, Chain) = (p_chain, q_chain);
    let mut j: f64 = mode;
    let mut num_terms: usize = 0;
    loop {
        p.forward(b, x);
        q.forward(b, x);
        j = j + 1.0;
        p.weight = p.weight * mu / j;
        q.weight = q.weight * mu / (j + 0.5);

        accumulator += p.contribution() + q.contribution();

        num_terms += 1;
        if p.weight < SERIES_TOLERANCE && q.weight.abs() < SERIES_TOLERANCE {
            break;
        }
        if SERIES_MAX_TERMS <= num_terms {
            warn!(
                "Noncentral t series truncated after {num_terms} terms (t = {t}, df = {nu}, ncp = {delta}). "
            );
            break;
        }
    }

    // backward
    let (mut p, mut q): (Chain, Chain) = (p_chain, q_chain);
    let mut j: f64 = mode;
    while 0.0 < j {
        p.backward(b, x);
        q.backward(b, x);
        p.weight = p.weight * j / mu;
        q.weight = q.weight * (j + 0.5) / mu;
        j = j - 1.0;

        accumulator += p.contribution() + q.contribution();

        if p.weight < SERIES_TOLERANCE && q.weight.abs() < SERIES_TOLERANCE {
            break;
        }
    }

    return (0.5 * accumulator).clamp(0.0, 1.0);
}

impl Distribution for StudentT {
    fn cdf(&self, x: f64) -> f64 {
        return self.tails(x).0;
    }

    fn get_domain(&self) -> ContinuousDomain {
        return STUDENT_T_DOMAIN;
    }

    fn name(&self) -> &'static str {
        return "Student's t";
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
    fn central_values() {
        let t: StudentT = StudentT::new(10.0).expect("Parameters are valid. ");
        assert_approx_eq!(t.cdf(2.228138851986274), 0.975, 1e-10);
        assert_approx_eq!(t.cdf(0.0), 0.5, 1e-15);
        // symmetry
        assert_approx_eq!(t.cdf(-1.3), t.sf(1.3), 1e-14);

        let critical: f64 = t.inverse_sf(0.025).expect("valid probability");
        assert_approx_eq!(critical, 2.228138851986274, 1e-8);
    }

    #[test]
    fn noncentral_values() {
        let t: StudentT = StudentT::noncentral(10.0, 0.5).expect("Parameters are valid. ");
        assert_approx_eq!(t.cdf(1.3), 0.7696840458984099, 1e-9);
        assert_approx_eq!(t.cdf(1.3) + t.sf(1.3), 1.0, 1e-12);

        let t: StudentT = StudentT::noncentral(5.0, -1.2).expect("Parameters are valid. ");
        assert_approx_eq!(t.sf(-0.7), 0.30070546050766345, 1e-9);

        let t: StudentT = StudentT::noncentral(7.0, 0.8).expect("Parameters are valid. ");
        assert_approx_eq!(t.cdf(-1.0), 0.04373797821910169, 1e-9);
    }

    #[test]
    fn at_zero_is_normal() {
        let t: StudentT = StudentT::noncentral(3.0, 1.0).expect("Parameters are valid. ");
        assert_approx_eq!(t.sf(0.0), STD_NORMAL.cdf(1.0), 1e-15);
    }

    #[test]
    fn tiny_degrees_of_freedom() {
        // the quantile does not fit in a f64
        let t: StudentT = StudentT::new(1e-10).expect("Parameters are valid. ");
        let critical: f64 = t.inverse_sf(0.025).expect("valid probability");
        assert!(critical.is_infinite());
        assert_eq!(t.sf(critical), 0.0);
    }

    #[test]
    fn large_degrees_of_freedom_is_normal() {
        let t: StudentT = StudentT::noncentral(1e7, 2.0).expect("Parameters are valid. ");
        assert_approx_eq!(t.cdf(1.959963984540054), STD_NORMAL.cdf(-0.040036015459946), 1e-6);
    }

    #[test]
    fn invalid_parameters() {
        assert!(StudentT::new(0.0).is_err());
        assert!(StudentT::noncentral(4.0, f64::NAN).is_err());
    }
}
