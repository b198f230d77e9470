//! Power of the test for a [Pearson correlation](https://en.wikipedia.org/wiki/Pearson_correlation_coefficient).

use crate::{
    distribution_trait::Distribution,
    distributions::Normal::STD_NORMAL,
    domain::ParameterDomain,
    errors::PowerError,
    families::{ALPHA_BOUNDS, check_probabilities},
    hypothesis::Hypothesis,
    parameter::{Role, Unknown, find_unknown},
    result::PowerResult,
    solver::{Design, SolverBounds, solve},
};

/// The solvable parameters of [correlation].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationRole {
    N,
    R,
    Alpha,
}

impl Role for CorrelationRole {
    fn name(self) -> &'static str {
        return match self {
            CorrelationRole::N => "n",
            CorrelationRole::R => "r",
            CorrelationRole::Alpha => "alpha",
        };
    }
}

#[derive(Debug, Clone, PartialEq)]
struct CorrelationTest {
    n: f64,
    r: f64,
    p: f64,
    rho0: f64,
    alpha: f64,
    alternative: Hypothesis,
}

impl CorrelationTest {
    /// Mean and standard deviation of the (bias corrected) Fisher z statistic
    /// under the alternative, standardized with the null standard error.
    fn statistic(&self) -> (f64, f64) {
        let r: f64 = if self.alternative == Hypothesis::TwoTailed {
            self.r.abs()
        } else {
            self.r
        };
        let m: f64 = self.n - 1.0 - self.p;
        let r2: f64 = r * r;

        let bias: f64 = r / m / 2.0
            * (1.0 + (5.0 + r2) / 4.0 / m + (11.0 + 2.0 * r2 + 3.0 * r2 * r2) / 8.0 / (m * m));
        let mean: f64 = (self.n - 3.0 - self.p).sqrt()
            * (r.atanh() + bias - self.rho0.atanh() - self.rho0 / m / 2.0);
        let variance: f64 = (self.n - 3.0 - self.p) / m
            * (1.0 + (4.0 - r2) / 2.0 / m + (22.0 - 6.0 * r2 - 3.0 * r2 * r2) / 6.0 / (m * m));

        return (mean, variance.sqrt());
    }
}

impl Design for CorrelationTest {
    type Role = CorrelationRole;

    fn value(&self, role: CorrelationRole) -> f64 {
        return match role {
            CorrelationRole::N => self.n,
            CorrelationRole::R => self.r,
            CorrelationRole::Alpha => self.alpha,
        };
    }

    fn set_value(&mut self, role: CorrelationRole, value: f64) {
        match role {
            CorrelationRole::N => self.n = value,
            CorrelationRole::R => self.r = value,
            CorrelationRole::Alpha => self.alpha = value,
        }
    }

    fn bounds(&self, role: CorrelationRole) -> Result<SolverBounds, PowerError> {
        return Ok(match role {
            CorrelationRole::N => SolverBounds::sample_size(4.0 + self.p + 1e-10, 1e7),
            CorrelationRole::R => match self.alternative {
                Hypothesis::TwoTailed => SolverBounds::continuous(1e-10, 1.0 - 1e-10),
                Hypothesis::RightTail | Hypothesis::LeftTail => {
                    SolverBounds::continuous(-1.0 + 1e-10, 1.0 - 1e-10)
                }
            },
            CorrelationRole::Alpha => ALPHA_BOUNDS,
        });
    }

    fn power(&self) -> Result<f64, PowerError> {
        let (mean, sd): (f64, f64) = self.statistic();
        // the statistic is normal but its variance is not 1, so the tails
        // are computed here instead of with a `Statistic::Normal`
        let power: f64 = match self.alternative {
            Hypothesis::TwoTailed => {
                let z: f64 = STD_NORMAL.inverse_sf(0.5 * self.alpha)?;
                STD_NORMAL.cdf((mean - z) / sd) + STD_NORMAL.cdf((-mean - z) / sd)
            }
            Hypothesis::RightTail => {
                let z: f64 = STD_NORMAL.inverse_sf(self.alpha)?;
                STD_NORMAL.cdf((mean - z) / sd)
            }
            Hypothesis::LeftTail => {
                let z: f64 = STD_NORMAL.quantile(self.alpha)?;
                STD_NORMAL.cdf((z - mean) / sd)
            }
        };
        return Ok(power.clamp(0.0, 1.0));
    }

    fn method(&self) -> &'static str {
        return "Power for correlation";
    }

    fn url(&self) -> &'static str {
        return "http://psychstat.org/correlation";
    }

    fn alternative(&self) -> Option<Hypothesis> {
        return Some(self.alternative);
    }

    fn entries(&self) -> Vec<(&'static str, f64)> {
        return vec![
            ("n", self.n),
            ("r", self.r),
            ("p", self.p),
            ("rho0", self.rho0),
            ("alpha", self.alpha),
        ];
    }
}

/// Power analysis of the test for a correlation coefficient.
///
/// The test uses the [Fisher transformation](https://en.wikipedia.org/wiki/Fisher_transformation)
/// of the sample correlation, with the corrections of its mean and variance
/// for small samples.
///
/// ## Inputs:
///
/// 1. `n`: sample size. `3 + p < n`
/// 2. `r`: the correlation under the alternative hypothesis. `-1 < r < 1`
/// 3. `p`: (optional) number of variables partialled out. Default: `0`.
/// 4. `rho0`: (optional) the correlation under the null hypothesis. Default: `0`.
/// 5. `alpha`: significance level.
/// 6. `power`: statistical power.
/// 7. `alternative`: (optional) the alternative hypothesis. Default: two tailed.
///
/// Exactly one of `n`, `r`, `alpha` and `power` must be left empty.
/// In a two tailed test the sign of `r` is ignored (and a solved `r` is positive).
#[bon::builder]
pub fn correlation(
    n: Option<f64>,
    r: Option<f64>,
    #[builder(default)] p: f64,
    #[builder(default)] rho0: f64,
    alpha: Option<f64>,
    power: Option<f64>,
    #[builder(default)] alternative: Hypothesis,
) -> Result<PowerResult, PowerError> {
    check_probabilities(alpha, power)?;
    ParameterDomain::Open(-1.0, 1.0).check_optional("r", r)?;
    ParameterDomain::Count(0.0).check("p", p)?;
    ParameterDomain::Open(-1.0, 1.0).check("rho0", rho0)?;
    ParameterDomain::Above(3.0 + p).check_optional("n", n)?;

    let unknown: Unknown<CorrelationRole> = find_unknown(
        &[
            (CorrelationRole::N, n),
            (CorrelationRole::R, r),
            (CorrelationRole::Alpha, alpha),
        ],
        power,
    )?;

    let design: CorrelationTest = CorrelationTest {
        n: n.unwrap_or(f64::NAN),
        r: r.unwrap_or(f64::NAN),
        p,
        rho0,
        alpha: alpha.unwrap_or(f64::NAN),
        alternative,
    };

    return solve(design, unknown);
}
