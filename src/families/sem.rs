//! # Structural equation models
//!
//! Power of the likelihood ratio (chi squared) test of a structural equation
//! model with `df` degrees of freedom.
//!
//!  - [sem_chisq]: the misfit of the model is given directly as the minimum of
//!     the fit function in the population (`effect`), following
//!     Satorra & Saris (1985). `ncp = (n - 1) effect`.
//!  - [sem_rmsea]: the misfit is given as an
//!     [RMSEA](https://en.wikipedia.org/wiki/Root_mean_square_error_of_approximation)
//!     for the null and the alternative hypothesis (MacCallum, Browne & Sugawara, 1996).
//!     `ncp_i = (n - 1) df rmsea_i^2`.

use crate::{
    domain::ParameterDomain,
    errors::PowerError,
    families::{ALPHA_BOUNDS, check_probabilities},
    hypothesis::Hypothesis,
    parameter::{Role, Unknown, find_unknown},
    power::{NoncentralityContext, Statistic},
    result::PowerResult,
    solver::{Design, SolverBounds, solve},
};

/// Search interval of the degrees of freedom of the model.
const DF_BOUNDS: SolverBounds = SolverBounds::discrete(1.0, 1e4);

/// The solvable parameters of [sem_chisq].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemChisqRole {
    N,
    Df,
    Effect,
    Alpha,
}

impl Role for SemChisqRole {
    fn name(self) -> &'static str {
        return match self {
            SemChisqRole::N => "n",
            SemChisqRole::Df => "df",
            SemChisqRole::Effect => "effect",
            SemChisqRole::Alpha => "alpha",
        };
    }
}

#[derive(Debug, Clone, PartialEq)]
struct SemChisq {
    n: f64,
    df: f64,
    effect: f64,
    alpha: f64,
}

impl Design for SemChisq {
    type Role = SemChisqRole;

    fn value(&self, role: SemChisqRole) -> f64 {
        return match role {
            SemChisqRole::N => self.n,
            SemChisqRole::Df => self.df,
            SemChisqRole::Effect => self.effect,
            SemChisqRole::Alpha => self.alpha,
        };
    }

    fn set_value(&mut self, role: SemChisqRole, value: f64) {
        match role {
            SemChisqRole::N => self.n = value,
            SemChisqRole::Df => self.df = value,
            SemChisqRole::Effect => self.effect = value,
            SemChisqRole::Alpha => self.alpha = value,
        }
    }

    fn bounds(&self, role: SemChisqRole) -> Result<SolverBounds, PowerError> {
        return Ok(match role {
            SemChisqRole::N => SolverBounds::sample_size(2.0 + 1e-10, 1e9),
            SemChisqRole::Df => DF_BOUNDS,
            SemChisqRole::Effect => SolverBounds::continuous(0.0, 1.0),
            SemChisqRole::Alpha => ALPHA_BOUNDS,
        });
    }

    fn power(&self) -> Result<f64, PowerError> {
        return NoncentralityContext::upper(Statistic::ChiSquared {
            df: self.df,
            null_ncp: 0.0,
            ncp: (self.n - 1.0) * self.effect,
        })
        .power(self.alpha);
    }

    fn method(&self) -> &'static str {
        return "Power for SEM (Satorra & Saris, 1985)";
    }

    fn url(&self) -> &'static str {
        return "http://psychstat.org/semchisq";
    }

    fn entries(&self) -> Vec<(&'static str, f64)> {
        return vec![
            ("n", self.n),
            ("df", self.df),
            ("effect", self.effect),
            ("alpha", self.alpha),
        ];
    }
}

/// Power analysis of a structural equation model with the chi squared
/// method of Satorra & Saris (1985).
///
/// ## Inputs:
///
/// 1. `n`: sample size. `1 < n`
/// 2. `df`: degrees of freedom of the model.
/// 3. `effect`: misfit of the model in the population (minimum of the
///     maximum likelihood fit function). `0 <= effect`
/// 4. `alpha`: significance level.
/// 5. `power`: statistical power.
///
/// Exactly one of them must be left empty. A solved `df` is rounded up.
///
/// ## Example
///
/// ```
/// use PowerAnalysis::families::sem::sem_chisq;
///
/// let result = sem_chisq().df(4.0).effect(0.054).alpha(0.05).power(0.8).call().unwrap();
/// assert_eq!(result.get("n"), Some(223.0));
/// ```
#[bon::builder]
pub fn sem_chisq(
    n: Option<f64>,
    df: Option<f64>,
    effect: Option<f64>,
    alpha: Option<f64>,
    power: Option<f64>,
) -> Result<PowerResult, PowerError> {
    check_probabilities(alpha, power)?;
    ParameterDomain::Above(1.0).check_optional("n", n)?;
    ParameterDomain::Count(1.0).check_optional("df", df)?;
    ParameterDomain::NonNegative.check_optional("effect", effect)?;

    let unknown: Unknown<SemChisqRole> = find_unknown(
        &[
            (SemChisqRole::N, n),
            (SemChisqRole::Df, df),
            (SemChisqRole::Effect, effect),
            (SemChisqRole::Alpha, alpha),
        ],
        power,
    )?;

    let design: SemChisq = SemChisq {
        n: n.unwrap_or(f64::NAN),
        df: df.unwrap_or(f64::NAN),
        effect: effect.unwrap_or(f64::NAN),
        alpha: alpha.unwrap_or(f64::NAN),
    };

    return solve(design, unknown);
}

/// The hypothesis tested by [sem_rmsea].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum FitTest {
    /// Test of close fit: `H0: rmsea <= rmsea0` against `H1: rmsea = rmsea1 > rmsea0`.
    /// It is rejected for large values of the statistic.
    #[default]
    Close,
    /// Test of not-close fit: `H0: rmsea >= rmsea0` against `H1: rmsea = rmsea1 < rmsea0`.
    /// It is rejected for small values of the statistic.
    NotClose,
}

impl FitTest {
    const fn tail(self) -> Hypothesis {
        return match self {
            FitTest::Close => Hypothesis::RightTail,
            FitTest::NotClose => Hypothesis::LeftTail,
        };
    }
}

/// The solvable parameters of [sem_rmsea].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RmseaRole {
    N,
    Df,
    Rmsea0,
    Rmsea1,
    Alpha,
}

impl Role for RmseaRole {
    fn name(self) -> &'static str {
        return match self {
            RmseaRole::N => "n",
            RmseaRole::Df => "df",
            RmseaRole::Rmsea0 => "rmsea0",
            RmseaRole::Rmsea1 => "rmsea1",
            RmseaRole::Alpha => "alpha",
        };
    }
}

#[derive(Debug, Clone, PartialEq)]
struct SemRmsea {
    n: f64,
    df: f64,
    rmsea0: f64,
    rmsea1: f64,
    alpha: f64,
    fit_test: FitTest,
}

impl SemRmsea {
    fn ncp(&self, rmsea: f64) -> f64 {
        return (self.n - 1.0) * self.df * rmsea * rmsea;
    }
}

impl Design for SemRmsea {
    type Role = RmseaRole;

    fn value(&self, role: RmseaRole) -> f64 {
        return match role {
            RmseaRole::N => self.n,
            RmseaRole::Df => self.df,
            RmseaRole::Rmsea0 => self.rmsea0,
            RmseaRole::Rmsea1 => self.rmsea1,
            RmseaRole::Alpha => self.alpha,
        };
    }

    fn set_value(&mut self, role: RmseaRole, value: f64) {
        match role {
            RmseaRole::N => self.n = value,
            RmseaRole::Df => self.df = value,
            RmseaRole::Rmsea0 => self.rmsea0 = value,
            RmseaRole::Rmsea1 => self.rmsea1 = value,
            RmseaRole::Alpha => self.alpha = value,
        }
    }

    fn bounds(&self, role: RmseaRole) -> Result<SolverBounds, PowerError> {
        return Ok(match role {
            RmseaRole::N => SolverBounds::sample_size(2.0 + 1e-10, 1e9),
            RmseaRole::Df => DF_BOUNDS,
            RmseaRole::Rmsea0 | RmseaRole::Rmsea1 => SolverBounds::continuous(0.0, 1.0),
            RmseaRole::Alpha => ALPHA_BOUNDS,
        });
    }

    fn power(&self) -> Result<f64, PowerError> {
        let statistic: Statistic = Statistic::ChiSquared {
            df: self.df,
            null_ncp: self.ncp(self.rmsea0),
            ncp: self.ncp(self.rmsea1),
        };
        return NoncentralityContext::new(statistic, self.fit_test.tail()).power(self.alpha);
    }

    fn method(&self) -> &'static str {
        return "Power for SEM based on RMSEA";
    }

    fn url(&self) -> &'static str {
        return "http://psychstat.org/rmsea";
    }

    fn entries(&self) -> Vec<(&'static str, f64)> {
        return vec![
            ("n", self.n),
            ("df", self.df),
            ("rmsea0", self.rmsea0),
            ("rmsea1", self.rmsea1),
            ("alpha", self.alpha),
        ];
    }
}

/// Power analysis of a structural equation model based on the RMSEA.
///
/// ## Inputs:
///
/// 1. `n`: sample size. `1 < n`
/// 2. `df`: degrees of freedom of the model.
/// 3. `rmsea0`: RMSEA under the null hypothesis. `0 <= rmsea0`
/// 4. `rmsea1`: RMSEA under the alternative hypothesis. `0 <= rmsea1`
/// 5. `alpha`: significance level.
/// 6. `power`: statistical power.
/// 7. `fit_test`: (optional) test of close or not-close fit. Default: [FitTest::Close].
///
/// Exactly one of `n`, `df`, `rmsea0`, `rmsea1`, `alpha` and `power` must be
/// left empty. A solved `df` is rounded up.
///
/// ## Results
///
/// For the test of close fit the power is the probability of the noncentral
/// chi squared with `ncp1` above the upper `alpha` quantile of the one with
/// `ncp0`. For the test of not-close fit it is the probability below the lower
/// `alpha` quantile.
#[bon::builder]
pub fn sem_rmsea(
    n: Option<f64>,
    df: Option<f64>,
    rmsea0: Option<f64>,
    rmsea1: Option<f64>,
    alpha: Option<f64>,
    power: Option<f64>,
    #[builder(default)] fit_test: FitTest,
) -> Result<PowerResult, PowerError> {
    check_probabilities(alpha, power)?;
    ParameterDomain::Above(1.0).check_optional("n", n)?;
    ParameterDomain::Count(1.0).check_optional("df", df)?;
    ParameterDomain::NonNegative.check_optional("rmsea0", rmsea0)?;
    ParameterDomain::NonNegative.check_optional("rmsea1", rmsea1)?;

    let unknown: Unknown<RmseaRole> = find_unknown(
        &[
            (RmseaRole::N, n),
            (RmseaRole::Df, df),
            (RmseaRole::Rmsea0, rmsea0),
            (RmseaRole::Rmsea1, rmsea1),
            (RmseaRole::Alpha, alpha),
        ],
        power,
    )?;

    let design: SemRmsea = SemRmsea {
        n: n.unwrap_or(f64::NAN),
        df: df.unwrap_or(f64::NAN),
        rmsea0: rmsea0.unwrap_or(f64::NAN),
        rmsea1: rmsea1.unwrap_or(f64::NAN),
        alpha: alpha.unwrap_or(f64::NAN),
        fit_test,
    };

    return solve(design, unknown);
}
