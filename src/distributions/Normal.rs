//! # Normal distribution
//!
//! The [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution)
//! is the reference distribution of every test based on a normal
//! approximation (proportions, correlation, mediation, Poisson and logistic
//! regression).
//!
//! The tests only need the standard normal: a shifted statistic `Z + delta`
//! is handled by evaluating the [StdNormal] at `x - delta`.
//!

use std::f64::consts::SQRT_2;

use statrs::function::erf::{erfc, erfc_inv};

use crate::{
    distribution_trait::{Distribution, check_probability},
    domain::ContinuousDomain,
    errors::PowerError,
};

pub const NORMAL_DOMAIN: ContinuousDomain = ContinuousDomain::Reals;

/// A normal distribution with `mean = 0.0` and `std_dev = 1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StdNormal;

/// A ready to use [StdNormal].
pub const STD_NORMAL: StdNormal = StdNormal;

impl Distribution for StdNormal {
    fn cdf(&self, x: f64) -> f64 {
        // Phi(x) = erfc(-x / sqrt(2)) / 2
        // erfc does not cancel in the lower tail.
        return 0.5 * erfc(-x / SQRT_2);
    }

    fn get_domain(&self) -> ContinuousDomain {
        return NORMAL_DOMAIN;
    }

    fn name(&self) -> &'static str {
        return "standard normal";
    }

    fn sf(&self, x: f64) -> f64 {
        return 0.5 * erfc(x / SQRT_2);
    }

    fn quantile(&self, p: f64) -> Result<f64, PowerError> {
        check_probability(self.name(), p)?;
        return Ok(-SQRT_2 * erfc_inv(2.0 * p));
    }

    fn inverse_sf(&self, p: f64) -> Result<f64, PowerError> {
        check_probability(self.name(), p)?;
        return Ok(SQRT_2 * erfc_inv(2.0 * p));
    }
}
