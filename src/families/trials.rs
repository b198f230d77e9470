//! # Randomized trials
//!
//! Power analysis of multilevel randomized trials:
//!
//!  - [mrt2arm] and [mrt3arm]: multisite randomized trials, where the
//!     subjects are randomized to the arms inside each of the `J` sites.
//!  - [crt2arm] and [crt3arm]: cluster randomized trials, where whole
//!     clusters are randomized to the arms.
//!
//! In every design `n` is the number of subjects **per site (cluster)** and
//! `J` the number of sites (clusters). Both are rounded up when solved.
//!
//! The effects are standardized mean differences. The variance components
//! are `sg2` (level 1 residual variance), `tau00` (variance of the site means),
//! `tau11` / `tau` (variance of the treatment effects across sites) and
//! `icc` (intraclass correlation of the clusters).

use crate::{
    domain::ParameterDomain,
    errors::PowerError,
    families::{ALPHA_BOUNDS, check_probabilities, unsupported},
    hypothesis::Hypothesis,
    parameter::{Role, Unknown, find_unknown},
    power::{NoncentralityContext, Statistic},
    result::PowerResult,
    solver::{Design, SolverBounds, solve},
};

const NOTE: &str = "n is the number of subjects per cluster";

/// Search interval of an effect tested with a t statistic.
const fn effect_bounds(alternative: Hypothesis) -> SolverBounds {
    return match alternative {
        Hypothesis::LeftTail => SolverBounds::continuous(-1e7, -1e-7),
        Hypothesis::TwoTailed | Hypothesis::RightTail => SolverBounds::continuous(1e-7, 1e7),
    };
}

fn t_power(df: f64, ncp: f64, alternative: Hypothesis, alpha: f64) -> Result<f64, PowerError> {
    return NoncentralityContext::new(Statistic::T { df, ncp }, alternative).power(alpha);
}

/// Which hypothesis of a 2 arm multisite trial is tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Mrt2ArmTest {
    /// The average treatment effect (t test).
    #[default]
    Main,
    /// The variance of the site means, `tau00` (F test).
    Site,
    /// The variance of the treatment effect across sites, `tau11` (F test).
    Variance,
}

/// The solvable parameters of [mrt2arm].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mrt2ArmRole {
    N,
    F,
    J,
    Alpha,
}

impl Role for Mrt2ArmRole {
    fn name(self) -> &'static str {
        return match self {
            Mrt2ArmRole::N => "n",
            Mrt2ArmRole::F => "f",
            Mrt2ArmRole::J => "J",
            Mrt2ArmRole::Alpha => "alpha",
        };
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Mrt2Arm {
    n: f64,
    f: f64,
    j: f64,
    tau00: f64,
    tau11: f64,
    sg2: f64,
    alpha: f64,
    alternative: Hypothesis,
    test: Mrt2ArmTest,
}

impl Design for Mrt2Arm {
    type Role = Mrt2ArmRole;

    fn value(&self, role: Mrt2ArmRole) -> f64 {
        return match role {
            Mrt2ArmRole::N => self.n,
            Mrt2ArmRole::F => self.f,
            Mrt2ArmRole::J => self.j,
            Mrt2ArmRole::Alpha => self.alpha,
        };
    }

    fn set_value(&mut self, role: Mrt2ArmRole, value: f64) {
        match role {
            Mrt2ArmRole::N => self.n = value,
            Mrt2ArmRole::F => self.f = value,
            Mrt2ArmRole::J => self.j = value,
            Mrt2ArmRole::Alpha => self.alpha = value,
        }
    }

    fn bounds(&self, role: Mrt2ArmRole) -> Result<SolverBounds, PowerError> {
        return match role {
            // 2 subjects per site leave no error degrees of freedom for the F tests
            Mrt2ArmRole::N => Ok(SolverBounds::sample_size(3.0 - 1e-10, 1e6)),
            Mrt2ArmRole::J => Ok(SolverBounds::sample_size(2.0, 1e5)),
            Mrt2ArmRole::F => match self.test {
                Mrt2ArmTest::Main => Ok(effect_bounds(self.alternative)),
                Mrt2ArmTest::Site | Mrt2ArmTest::Variance => Err(unsupported(
                    "f",
                    "the tests of the variance components do not depend on the effect size",
                )),
            },
            Mrt2ArmRole::Alpha => Ok(ALPHA_BOUNDS),
        };
    }

    fn power(&self) -> Result<f64, PowerError> {
        let df: f64 = self.j - 1.0;
        return match self.test {
            Mrt2ArmTest::Main => {
                let ncp: f64 =
                    self.j.sqrt() * self.f / (4.0 / self.n + self.tau11 / self.sg2).sqrt();
                t_power(df, ncp, self.alternative, self.alpha)
            }
            Mrt2ArmTest::Site | Mrt2ArmTest::Variance => {
                let scale: f64 = if self.test == Mrt2ArmTest::Site {
                    self.n * self.tau00 / self.sg2
                } else {
                    self.n * self.tau11 / self.sg2 / 4.0
                };
                NoncentralityContext::upper(Statistic::ScaledF {
                    df1: df,
                    df2: self.j * (self.n - 2.0),
                    scale,
                })
                .power(self.alpha)
            }
        };
    }

    fn method(&self) -> &'static str {
        return "Multisite randomized trials with 2 arms";
    }

    fn note(&self) -> Option<&'static str> {
        return Some(NOTE);
    }

    fn url(&self) -> &'static str {
        return "http://psychstat.org/mrt2arm";
    }

    fn alternative(&self) -> Option<Hypothesis> {
        return match self.test {
            Mrt2ArmTest::Main => Some(self.alternative),
            Mrt2ArmTest::Site | Mrt2ArmTest::Variance => None,
        };
    }

    fn entries(&self) -> Vec<(&'static str, f64)> {
        let mut entries: Vec<(&'static str, f64)> = vec![("J", self.j), ("n", self.n)];
        match self.test {
            Mrt2ArmTest::Main => {
                entries.push(("f", self.f));
                entries.push(("tau11", self.tau11));
            }
            Mrt2ArmTest::Site => entries.push(("tau00", self.tau00)),
            Mrt2ArmTest::Variance => entries.push(("tau11", self.tau11)),
        }
        entries.push(("sg2", self.sg2));
        entries.push(("alpha", self.alpha));
        return entries;
    }
}

/// Power analysis of a multisite randomized trial with 2 arms.
///
/// ## Inputs:
///
/// 1. `n`: number of subjects per site. `2 < n` for the tests of variance.
/// 2. `f`: standardized effect of the treatment. Only used by the main test.
/// 3. `j`: number of sites. `1 < j`
/// 4. `tau00`: (optional) variance of the site means. Default: `1`.
/// 5. `tau11`: (optional) variance of the treatment effect across sites. Default: `1`.
/// 6. `sg2`: (optional) level 1 residual variance. Default: `1`.
/// 7. `alpha`: significance level.
/// 8. `power`: statistical power.
/// 9. `alternative`: (optional) direction of the main test. Default: two tailed.
/// 10. `test`: (optional) the hypothesis tested. Default: [Mrt2ArmTest::Main].
///
/// Exactly one of `n`, `f`, `j`, `alpha` and `power` must be left empty
/// (`f` is not needed by the tests of variance).
///
/// ## Results
///
///  - Main: t test with `J - 1` degrees of freedom and noncentrality
///     `sqrt(J) f / sqrt(4 / n + tau11 / sg2)`.
///  - Site and variance: the F statistic with `(J - 1, J (n - 2))` degrees of
///     freedom is `1 + n tau00 / sg2` (`1 + n tau11 / (4 sg2)`) times a central F.
///
/// ## Example
///
/// ```
/// use PowerAnalysis::families::trials::mrt2arm;
///
/// let result = mrt2arm()
///     .n(45.0)
///     .f(0.5)
///     .j(20.0)
///     .tau11(0.5)
///     .sg2(1.25)
///     .alpha(0.05)
///     .call()
///     .unwrap();
/// assert!((result.power() - 0.8583253).abs() < 1e-5);
/// ```
#[bon::builder]
#[allow(clippy::too_many_arguments)]
pub fn mrt2arm(
    n: Option<f64>,
    f: Option<f64>,
    j: Option<f64>,
    #[builder(default = 1.0)] tau00: f64,
    #[builder(default = 1.0)] tau11: f64,
    #[builder(default = 1.0)] sg2: f64,
    alpha: Option<f64>,
    power: Option<f64>,
    #[builder(default)] alternative: Hypothesis,
    #[builder(default)] test: Mrt2ArmTest,
) -> Result<PowerResult, PowerError> {
    check_probabilities(alpha, power)?;
    match test {
        Mrt2ArmTest::Main => ParameterDomain::Count(1.0).check_optional("n", n)?,
        Mrt2ArmTest::Site | Mrt2ArmTest::Variance => {
            ParameterDomain::Count(3.0).check_optional("n", n)?
        }
    };
    ParameterDomain::Reals.check_optional("f", f)?;
    ParameterDomain::Count(2.0).check_optional("J", j)?;
    ParameterDomain::NonNegative.check("tau00", tau00)?;
    ParameterDomain::NonNegative.check("tau11", tau11)?;
    ParameterDomain::Positive.check("sg2", sg2)?;

    let mut parameters: Vec<(Mrt2ArmRole, Option<f64>)> =
        vec![(Mrt2ArmRole::N, n), (Mrt2ArmRole::J, j)];
    if test == Mrt2ArmTest::Main {
        parameters.push((Mrt2ArmRole::F, f));
    }
    parameters.push((Mrt2ArmRole::Alpha, alpha));
    let unknown: Unknown<Mrt2ArmRole> = find_unknown(&parameters, power)?;

    let design: Mrt2Arm = Mrt2Arm {
        n: n.unwrap_or(f64::NAN),
        f: f.unwrap_or(f64::NAN),
        j: j.unwrap_or(f64::NAN),
        tau00,
        tau11,
        sg2,
        alpha: alpha.unwrap_or(f64::NAN),
        alternative,
        test,
    };

    return solve(design, unknown);
}

/// Which hypothesis of a 3 arm trial is tested.
///
/// The 3 arms are a control and 2 treatments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ThreeArmTest {
    /// The average of the 2 treatments against the control (t test).
    #[default]
    Main,
    /// The difference between the 2 treatments (t test).
    Treatment,
    /// Both contrasts at once (F test).
    Omnibus,
}

/// The solvable parameters of [mrt3arm].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mrt3ArmRole {
    N,
    F1,
    J,
    Alpha,
}

impl Role for Mrt3ArmRole {
    fn name(self) -> &'static str {
        return match self {
            Mrt3ArmRole::N => "n",
            Mrt3ArmRole::F1 => "f1",
            Mrt3ArmRole::J => "J",
            Mrt3ArmRole::Alpha => "alpha",
        };
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Mrt3Arm {
    n: f64,
    f1: f64,
    f2: f64,
    j: f64,
    tau: f64,
    sg2: f64,
    alpha: f64,
    alternative: Hypothesis,
    test: ThreeArmTest,
}

impl Mrt3Arm {
    fn main_ncp(&self) -> f64 {
        return self.j.sqrt() * self.f1 / (4.5 / self.n + 1.5 * self.tau / self.sg2).sqrt();
    }

    fn treatment_ncp(&self) -> f64 {
        return self.j.sqrt() * self.f2 / (6.0 / self.n + 2.0 * self.tau / self.sg2).sqrt();
    }
}

impl Design for Mrt3Arm {
    type Role = Mrt3ArmRole;

    fn value(&self, role: Mrt3ArmRole) -> f64 {
        return match role {
            Mrt3ArmRole::N => self.n,
            Mrt3ArmRole::F1 => self.f1,
            Mrt3ArmRole::J => self.j,
            Mrt3ArmRole::Alpha => self.alpha,
        };
    }

    fn set_value(&mut self, role: Mrt3ArmRole, value: f64) {
        match role {
            Mrt3ArmRole::N => self.n = value,
            Mrt3ArmRole::F1 => self.f1 = value,
            Mrt3ArmRole::J => self.j = value,
            Mrt3ArmRole::Alpha => self.alpha = value,
        }
    }

    fn bounds(&self, role: Mrt3ArmRole) -> Result<SolverBounds, PowerError> {
        return match role {
            Mrt3ArmRole::N => Ok(SolverBounds::sample_size(2.0, 1e7)),
            Mrt3ArmRole::J => Ok(SolverBounds::sample_size(2.0, 1e5)),
            Mrt3ArmRole::F1 => match self.test {
                ThreeArmTest::Main => Ok(effect_bounds(self.alternative)),
                ThreeArmTest::Omnibus => Ok(SolverBounds::continuous(1e-7, 1e7)),
                ThreeArmTest::Treatment => Err(unsupported(
                    "f1",
                    "the treatment test only depends on the difference between the treatments (f2)",
                )),
            },
            Mrt3ArmRole::Alpha => Ok(ALPHA_BOUNDS),
        };
    }

    fn power(&self) -> Result<f64, PowerError> {
        let df: f64 = self.j - 1.0;
        return match self.test {
            ThreeArmTest::Main => t_power(df, self.main_ncp(), self.alternative, self.alpha),
            ThreeArmTest::Treatment => {
                t_power(df, self.treatment_ncp(), self.alternative, self.alpha)
            }
            ThreeArmTest::Omnibus => {
                let main: f64 = self.main_ncp();
                let treatment: f64 = self.treatment_ncp();
                NoncentralityContext::upper(Statistic::F {
                    df1: 2.0,
                    df2: 2.0 * df,
                    ncp: main * main + treatment * treatment,
                })
                .power(self.alpha)
            }
        };
    }

    fn method(&self) -> &'static str {
        return "Multisite randomized trials with 3 arms";
    }

    fn note(&self) -> Option<&'static str> {
        return Some(NOTE);
    }

    fn url(&self) -> &'static str {
        return "http://psychstat.org/mrt3arm";
    }

    fn alternative(&self) -> Option<Hypothesis> {
        return match self.test {
            ThreeArmTest::Main | ThreeArmTest::Treatment => Some(self.alternative),
            ThreeArmTest::Omnibus => None,
        };
    }

    fn entries(&self) -> Vec<(&'static str, f64)> {
        let mut entries: Vec<(&'static str, f64)> = vec![("J", self.j), ("n", self.n)];
        if self.test != ThreeArmTest::Treatment {
            entries.push(("f1", self.f1));
        }
        entries.push(("f2", self.f2));
        entries.push(("tau", self.tau));
        entries.push(("sg2", self.sg2));
        entries.push(("alpha", self.alpha));
        return entries;
    }
}

/// Power analysis of a multisite randomized trial with 3 arms (a control
/// and 2 treatments).
///
/// ## Inputs:
///
/// 1. `n`: number of subjects per site.
/// 2. `f1`: standardized effect of the average of the treatments against the
///     control. Not used by the treatment test.
/// 3. `f2`: (optional) standardized difference between the 2 treatments. Default: `0`.
/// 4. `j`: number of sites. `1 < j`
/// 5. `tau`: (optional) variance of the treatment effects across sites. Default: `1`.
/// 6. `sg2`: (optional) level 1 residual variance. Default: `1`.
/// 7. `alpha`: significance level.
/// 8. `power`: statistical power.
/// 9. `alternative`: (optional) direction of the t tests. Default: two tailed.
/// 10. `test`: (optional) the hypothesis tested. Default: [ThreeArmTest::Main].
///
/// Exactly one of `n`, `f1`, `j`, `alpha` and `power` must be left empty
/// (`f1` is not needed by the treatment test).
///
/// ## Results
///
/// The t tests have `J - 1` degrees of freedom and noncentrality
/// `sqrt(J) f1 / sqrt(4.5 / n + 1.5 tau / sg2)` (main) or
/// `sqrt(J) f2 / sqrt(6 / n + 2 tau / sg2)` (treatment). The omnibus test is
/// an F test with `(2, 2 (J - 1))` degrees of freedom and the sum of both
/// squared noncentralities.
#[bon::builder]
#[allow(clippy::too_many_arguments)]
pub fn mrt3arm(
    n: Option<f64>,
    f1: Option<f64>,
    #[builder(default)] f2: f64,
    j: Option<f64>,
    #[builder(default = 1.0)] tau: f64,
    #[builder(default = 1.0)] sg2: f64,
    alpha: Option<f64>,
    power: Option<f64>,
    #[builder(default)] alternative: Hypothesis,
    #[builder(default)] test: ThreeArmTest,
) -> Result<PowerResult, PowerError> {
    check_probabilities(alpha, power)?;
    ParameterDomain::Count(1.0).check_optional("n", n)?;
    ParameterDomain::Reals.check_optional("f1", f1)?;
    ParameterDomain::Reals.check("f2", f2)?;
    ParameterDomain::Count(2.0).check_optional("J", j)?;
    ParameterDomain::NonNegative.check("tau", tau)?;
    ParameterDomain::Positive.check("sg2", sg2)?;

    let mut parameters: Vec<(Mrt3ArmRole, Option<f64>)> =
        vec![(Mrt3ArmRole::N, n), (Mrt3ArmRole::J, j)];
    if test != ThreeArmTest::Treatment {
        parameters.push((Mrt3ArmRole::F1, f1));
    }
    parameters.push((Mrt3ArmRole::Alpha, alpha));
    let unknown: Unknown<Mrt3ArmRole> = find_unknown(&parameters, power)?;

    let design: Mrt3Arm = Mrt3Arm {
        n: n.unwrap_or(f64::NAN),
        // unused by the treatment test
        f1: f1.unwrap_or(if test == ThreeArmTest::Treatment {
            0.0
        } else {
            f64::NAN
        }),
        f2,
        j: j.unwrap_or(f64::NAN),
        tau,
        sg2,
        alpha: alpha.unwrap_or(f64::NAN),
        alternative,
        test,
    };

    return solve(design, unknown);
}

/// The solvable parameters of [crt2arm] and [crt3arm].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterRole {
    N,
    F,
    J,
    Icc,
    Alpha,
}

impl Role for ClusterRole {
    fn name(self) -> &'static str {
        return match self {
            ClusterRole::N => "n",
            ClusterRole::F => "f",
            ClusterRole::J => "J",
            ClusterRole::Icc => "icc",
            ClusterRole::Alpha => "alpha",
        };
    }
}

/// Number of arms of a cluster randomized trial, and the test of the 3 arm design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClusterArms {
    Two,
    Three(ThreeArmTest),
}

#[derive(Debug, Clone, PartialEq)]
struct ClusterTrial {
    n: f64,
    f: f64,
    j: f64,
    icc: f64,
    alpha: f64,
    alternative: Hypothesis,
    arms: ClusterArms,
}

impl ClusterTrial {
    /// Variance of a cluster mean (in units of the total variance).
    fn cluster_variance(&self) -> f64 {
        return self.icc + (1.0 - self.icc) / self.n;
    }
}

impl Design for ClusterTrial {
    type Role = ClusterRole;

    fn value(&self, role: ClusterRole) -> f64 {
        return match role {
            ClusterRole::N => self.n,
            ClusterRole::F => self.f,
            ClusterRole::J => self.j,
            ClusterRole::Icc => self.icc,
            ClusterRole::Alpha => self.alpha,
        };
    }

    fn set_value(&mut self, role: ClusterRole, value: f64) {
        match role {
            ClusterRole::N => self.n = value,
            ClusterRole::F => self.f = value,
            ClusterRole::J => self.j = value,
            ClusterRole::Icc => self.icc = value,
            ClusterRole::Alpha => self.alpha = value,
        }
    }

    fn bounds(&self, role: ClusterRole) -> Result<SolverBounds, PowerError> {
        return Ok(match role {
            ClusterRole::N => SolverBounds::sample_size(1.0, 1e6),
            // the t tests have J - 2 (J - 3) degrees of freedom
            ClusterRole::J => match self.arms {
                ClusterArms::Two => SolverBounds::sample_size(2.0 + 1e-10, 1e5),
                ClusterArms::Three(_) => SolverBounds::sample_size(3.0 + 1e-10, 1e5),
            },
            ClusterRole::F => match self.arms {
                ClusterArms::Three(ThreeArmTest::Omnibus) => SolverBounds::continuous(1e-7, 1e7),
                ClusterArms::Two | ClusterArms::Three(_) => effect_bounds(self.alternative),
            },
            ClusterRole::Icc => SolverBounds::continuous(0.0, 1.0 - 1e-10),
            ClusterRole::Alpha => ALPHA_BOUNDS,
        });
    }

    fn power(&self) -> Result<f64, PowerError> {
        let variance: f64 = self.cluster_variance();
        return match self.arms {
            ClusterArms::Two => {
                let ncp: f64 = (self.j / (4.0 * variance)).sqrt() * self.f;
                t_power(self.j - 2.0, ncp, self.alternative, self.alpha)
            }
            ClusterArms::Three(ThreeArmTest::Main) => {
                let ncp: f64 = self.j.sqrt() * self.f / (4.5 * variance).sqrt();
                t_power(self.j - 3.0, ncp, self.alternative, self.alpha)
            }
            ClusterArms::Three(ThreeArmTest::Treatment) => {
                let ncp: f64 = self.j.sqrt() * self.f / (6.0 * variance).sqrt();
                t_power(self.j - 3.0, ncp, self.alternative, self.alpha)
            }
            ClusterArms::Three(ThreeArmTest::Omnibus) => NoncentralityContext::upper(
                Statistic::F {
                    df1: 2.0,
                    df2: self.j - 3.0,
                    ncp: self.j * self.f * self.f / variance,
                },
            )
            .power(self.alpha),
        };
    }

    fn method(&self) -> &'static str {
        return match self.arms {
            ClusterArms::Two => "Cluster randomized trials with 2 arms",
            ClusterArms::Three(_) => "Cluster randomized trials with 3 arms",
        };
    }

    fn note(&self) -> Option<&'static str> {
        return Some(NOTE);
    }

    fn url(&self) -> &'static str {
        return match self.arms {
            ClusterArms::Two => "http://psychstat.org/crt2arm",
            ClusterArms::Three(_) => "http://psychstat.org/crt3arm",
        };
    }

    fn alternative(&self) -> Option<Hypothesis> {
        return match self.arms {
            ClusterArms::Three(ThreeArmTest::Omnibus) => None,
            ClusterArms::Two | ClusterArms::Three(_) => Some(self.alternative),
        };
    }

    fn entries(&self) -> Vec<(&'static str, f64)> {
        return vec![
            ("J", self.j),
            ("n", self.n),
            ("f", self.f),
            ("icc", self.icc),
            ("alpha", self.alpha),
        ];
    }
}

#[allow(clippy::too_many_arguments)]
fn cluster_trial(
    n: Option<f64>,
    f: Option<f64>,
    j: Option<f64>,
    icc: Option<f64>,
    alpha: Option<f64>,
    power: Option<f64>,
    alternative: Hypothesis,
    arms: ClusterArms,
) -> Result<PowerResult, PowerError> {
    check_probabilities(alpha, power)?;
    ParameterDomain::Count(1.0).check_optional("n", n)?;
    ParameterDomain::Reals.check_optional("f", f)?;
    let min_clusters: f64 = match arms {
        ClusterArms::Two => 2.0,
        ClusterArms::Three(_) => 3.0,
    };
    ParameterDomain::Count(min_clusters + 1.0).check_optional("J", j)?;
    ParameterDomain::ClosedOpen(0.0, 1.0).check_optional("icc", icc)?;

    let unknown: Unknown<ClusterRole> = find_unknown(
        &[
            (ClusterRole::N, n),
            (ClusterRole::F, f),
            (ClusterRole::J, j),
            (ClusterRole::Icc, icc),
            (ClusterRole::Alpha, alpha),
        ],
        power,
    )?;

    let design: ClusterTrial = ClusterTrial {
        n: n.unwrap_or(f64::NAN),
        f: f.unwrap_or(f64::NAN),
        j: j.unwrap_or(f64::NAN),
        icc: icc.unwrap_or(f64::NAN),
        alpha: alpha.unwrap_or(f64::NAN),
        alternative,
        arms,
    };

    return solve(design, unknown);
}

/// Power analysis of a cluster randomized trial with 2 arms.
///
/// ## Inputs:
///
/// 1. `n`: number of subjects per cluster. `1 <= n`
/// 2. `f`: standardized effect of the treatment.
/// 3. `j`: number of clusters. `2 < j`
/// 4. `icc`: intraclass correlation. `0 <= icc < 1`
/// 5. `alpha`: significance level.
/// 6. `power`: statistical power.
/// 7. `alternative`: (optional) direction of the test. Default: two tailed.
///
/// Exactly one of `n`, `f`, `j`, `icc`, `alpha` and `power` must be left empty.
///
/// ## Results
///
/// t test with `J - 2` degrees of freedom and noncentrality
/// `sqrt(J f^2 / (4 icc + 4 (1 - icc) / n))`.
///
/// ## Example
///
/// ```
/// use PowerAnalysis::families::trials::crt2arm;
///
/// let result = crt2arm().f(0.8).j(10.0).icc(0.1).alpha(0.05).power(0.8).call().unwrap();
/// assert_eq!(result.get("n"), Some(17.0));
/// ```
#[bon::builder]
pub fn crt2arm(
    n: Option<f64>,
    f: Option<f64>,
    j: Option<f64>,
    icc: Option<f64>,
    alpha: Option<f64>,
    power: Option<f64>,
    #[builder(default)] alternative: Hypothesis,
) -> Result<PowerResult, PowerError> {
    return cluster_trial(n, f, j, icc, alpha, power, alternative, ClusterArms::Two);
}

/// Power analysis of a cluster randomized trial with 3 arms (a control and
/// 2 treatments).
///
/// Same inputs as [crt2arm] (with `3 < j`), plus `test`: (optional) the
/// hypothesis tested. Default: [ThreeArmTest::Main].
///
/// ## Results
///
///  - Main: t test with `J - 3` degrees of freedom and noncentrality
///     `sqrt(J) f / sqrt(4.5 (icc + (1 - icc) / n))`.
///  - Treatment: same, with `6` instead of `4.5`.
///  - Omnibus: F test with `(2, J - 3)` degrees of freedom and noncentrality
///     `J f^2 / (icc + (1 - icc) / n)`.
#[bon::builder]
#[allow(clippy::too_many_arguments)]
pub fn crt3arm(
    n: Option<f64>,
    f: Option<f64>,
    j: Option<f64>,
    icc: Option<f64>,
    alpha: Option<f64>,
    power: Option<f64>,
    #[builder(default)] alternative: Hypothesis,
    #[builder(default)] test: ThreeArmTest,
) -> Result<PowerResult, PowerError> {
    return cluster_trial(n, f, j, icc, alpha, power, alternative, ClusterArms::Three(test));
}
