//! Power of the F test of a (set of) predictor(s) in a
//! [linear regression](https://en.wikipedia.org/wiki/Linear_regression).
//!
//! The full model has `p1` predictors and the reduced model `p2`, so the test
//! has `u = p1 - p2` and `v = n - p1 - 1` degrees of freedom. The effect size
//! is [Cohen's f2](https://en.wikipedia.org/wiki/Effect_size#Cohen's_f2).

use crate::{
    domain::ParameterDomain,
    errors::PowerError,
    families::{ALPHA_BOUNDS, check_probabilities},
    parameter::{Role, Unknown, find_unknown},
    power::{NoncentralityContext, Statistic},
    result::PowerResult,
    solver::{Design, SolverBounds, solve},
};

/// How the noncentrality parameter is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum NoncentralityConvention {
    /// `lambda = f2 n`
    #[default]
    Regular,
    /// `lambda = f2 (u + v + 1)`, as in Cohen (1988).
    Cohen,
}

/// The solvable parameters of [regression].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegressionRole {
    N,
    F2,
    Alpha,
}

impl Role for RegressionRole {
    fn name(self) -> &'static str {
        return match self {
            RegressionRole::N => "n",
            RegressionRole::F2 => "f2",
            RegressionRole::Alpha => "alpha",
        };
    }
}

#[derive(Debug, Clone, PartialEq)]
struct RegressionTest {
    n: f64,
    p1: f64,
    p2: f64,
    f2: f64,
    alpha: f64,
    convention: NoncentralityConvention,
}

impl Design for RegressionTest {
    type Role = RegressionRole;

    fn value(&self, role: RegressionRole) -> f64 {
        return match role {
            RegressionRole::N => self.n,
            RegressionRole::F2 => self.f2,
            RegressionRole::Alpha => self.alpha,
        };
    }

    fn set_value(&mut self, role: RegressionRole, value: f64) {
        match role {
            RegressionRole::N => self.n = value,
            RegressionRole::F2 => self.f2 = value,
            RegressionRole::Alpha => self.alpha = value,
        }
    }

    fn bounds(&self, role: RegressionRole) -> Result<SolverBounds, PowerError> {
        return Ok(match role {
            RegressionRole::N => SolverBounds::sample_size(5.0 + self.p1 + 1e-10, 1e5),
            RegressionRole::F2 => SolverBounds::continuous(1e-7, 1e7),
            RegressionRole::Alpha => ALPHA_BOUNDS,
        });
    }

    fn power(&self) -> Result<f64, PowerError> {
        let u: f64 = self.p1 - self.p2;
        let v: f64 = self.n - self.p1 - 1.0;
        let ncp: f64 = match self.convention {
            NoncentralityConvention::Regular => self.f2 * self.n,
            NoncentralityConvention::Cohen => self.f2 * (u + v + 1.0),
        };
        return NoncentralityContext::upper(Statistic::F { df1: u, df2: v, ncp }).power(self.alpha);
    }

    fn method(&self) -> &'static str {
        return "Power for multiple regression";
    }

    fn url(&self) -> &'static str {
        return "http://psychstat.org/regression";
    }

    fn entries(&self) -> Vec<(&'static str, f64)> {
        return vec![
            ("n", self.n),
            ("p1", self.p1),
            ("p2", self.p2),
            ("f2", self.f2),
            ("alpha", self.alpha),
        ];
    }
}

/// Power analysis of a linear regression.
///
/// ## Inputs:
///
/// 1. `n`: sample size. `p1 + 1 < n`
/// 2. `p1`: (optional) number of predictors of the full model. Default: `1`.
/// 3. `p2`: (optional) number of predictors of the reduced model. Default: `0`.
///      - `p2 < p1`
/// 4. `f2`: effect size (Cohen's f2).
/// 5. `alpha`: significance level.
/// 6. `power`: statistical power.
/// 7. `convention`: (optional) how the noncentrality is computed.
///     Default: [NoncentralityConvention::Regular].
///
/// Exactly one of `n`, `f2`, `alpha` and `power` must be left empty.
#[bon::builder]
pub fn regression(
    n: Option<f64>,
    #[builder(default = 1.0)] p1: f64,
    #[builder(default)] p2: f64,
    f2: Option<f64>,
    alpha: Option<f64>,
    power: Option<f64>,
    #[builder(default)] convention: NoncentralityConvention,
) -> Result<PowerResult, PowerError> {
    check_probabilities(alpha, power)?;
    ParameterDomain::Count(0.0).check("p2", p2)?;
    ParameterDomain::Count(p2 + 1.0).check("p1", p1)?;
    ParameterDomain::Above(p1 + 1.0).check_optional("n", n)?;
    ParameterDomain::NonNegative.check_optional("f2", f2)?;

    let unknown: Unknown<RegressionRole> = find_unknown(
        &[
            (RegressionRole::N, n),
            (RegressionRole::F2, f2),
            (RegressionRole::Alpha, alpha),
        ],
        power,
    )?;

    let design: RegressionTest = RegressionTest {
        n: n.unwrap_or(f64::NAN),
        p1,
        p2,
        f2: f2.unwrap_or(f64::NAN),
        alpha: alpha.unwrap_or(f64::NAN),
        convention,
    };

    return solve(design, unknown);
}
