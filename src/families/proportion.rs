//! # Tests for proportions
//!
//! Power of the z tests for proportions, using the normal approximation and
//! [Cohen's h](https://en.wikipedia.org/wiki/Cohen%27s_h) as the effect size:
//!
//! ```text
//!     h = 2 arcsin(sqrt(p1)) - 2 arcsin(sqrt(p2))
//! ```
//!
//! Under the alternative the statistic is normal with unit variance and mean
//! `h sqrt(m)`, where `m` is the effective sample size of the design.

use crate::{
    domain::ParameterDomain,
    errors::PowerError,
    families::{ALPHA_BOUNDS, check_probabilities, signed_effect_bounds},
    hypothesis::Hypothesis,
    parameter::{Role, Unknown, find_unknown},
    power::{NoncentralityContext, Statistic},
    result::PowerResult,
    solver::{Design, SolverBounds, solve},
};

/// Computes Cohen's h for the proportions `p1` and `p2`.
///
/// Returns `None` if they are not in `[0, 1]`.
#[must_use]
pub fn cohen_h(p1: f64, p2: f64) -> Option<f64> {
    #[allow(clippy::nonminimal_bool)]
    if !(0.0 <= p1 && p1 <= 1.0) || !(0.0 <= p2 && p2 <= 1.0) {
        return None;
    }
    return Some(2.0 * p1.sqrt().asin() - 2.0 * p2.sqrt().asin());
}

/// The solvable parameters of the proportion tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProportionRole {
    H,
    N,
    N1,
    N2,
    Alpha,
}

impl Role for ProportionRole {
    fn name(self) -> &'static str {
        return match self {
            ProportionRole::H => "h",
            ProportionRole::N => "n",
            ProportionRole::N1 => "n1",
            ProportionRole::N2 => "n2",
            ProportionRole::Alpha => "alpha",
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Samples {
    /// One sample of size `n`.
    One { n: f64 },
    /// 2 samples of size `n` each.
    Equal { n: f64 },
    Unequal { n1: f64, n2: f64 },
}

#[derive(Debug, Clone, PartialEq)]
struct ProportionTest {
    h: f64,
    samples: Samples,
    alpha: f64,
    alternative: Hypothesis,
}

impl ProportionTest {
    fn effective_size(&self) -> f64 {
        return match self.samples {
            Samples::One { n } => n,
            Samples::Equal { n } => n / 2.0,
            Samples::Unequal { n1, n2 } => n1 * n2 / (n1 + n2),
        };
    }
}

impl Design for ProportionTest {
    type Role = ProportionRole;

    fn value(&self, role: ProportionRole) -> f64 {
        return match (role, self.samples) {
            (ProportionRole::H, _) => self.h,
            (ProportionRole::Alpha, _) => self.alpha,
            (ProportionRole::N, Samples::One { n } | Samples::Equal { n }) => n,
            (ProportionRole::N1, Samples::Unequal { n1, .. }) => n1,
            (ProportionRole::N2, Samples::Unequal { n2, .. }) => n2,
            _ => f64::NAN,
        };
    }

    fn set_value(&mut self, role: ProportionRole, value: f64) {
        match (role, &mut self.samples) {
            (ProportionRole::H, _) => self.h = value,
            (ProportionRole::Alpha, _) => self.alpha = value,
            (ProportionRole::N, Samples::One { n } | Samples::Equal { n }) => *n = value,
            (ProportionRole::N1, Samples::Unequal { n1, .. }) => *n1 = value,
            (ProportionRole::N2, Samples::Unequal { n2, .. }) => *n2 = value,
            _ => {}
        }
    }

    fn bounds(&self, role: ProportionRole) -> Result<SolverBounds, PowerError> {
        return Ok(match role {
            ProportionRole::H => signed_effect_bounds(self.alternative),
            ProportionRole::N | ProportionRole::N1 | ProportionRole::N2 => {
                SolverBounds::sample_size(2.0 + 1e-10, 1e9)
            }
            ProportionRole::Alpha => ALPHA_BOUNDS,
        });
    }

    fn power(&self) -> Result<f64, PowerError> {
        let statistic: Statistic = Statistic::Normal {
            mean: self.h * self.effective_size().sqrt(),
            sd: 1.0,
        };
        return NoncentralityContext::new(statistic, self.alternative).power(self.alpha);
    }

    fn method(&self) -> &'static str {
        return match self.samples {
            Samples::One { .. } => "Power for one-sample proportion test",
            Samples::Equal { .. } => "Power for two-sample proportion (equal n)",
            Samples::Unequal { .. } => "Power for two-sample proportion (unequal n)",
        };
    }

    fn note(&self) -> Option<&'static str> {
        return Some(match self.samples {
            Samples::Equal { .. } => "Sample sizes for EACH group",
            Samples::One { .. } | Samples::Unequal { .. } => "Sample size for each group",
        });
    }

    fn url(&self) -> &'static str {
        return match self.samples {
            Samples::One { .. } => "http://psychstat.org/prop",
            Samples::Equal { .. } => "http://psychstat.org/prop2p",
            Samples::Unequal { .. } => "http://psychstat.org/prop2p2n",
        };
    }

    fn alternative(&self) -> Option<Hypothesis> {
        return Some(self.alternative);
    }

    fn entries(&self) -> Vec<(&'static str, f64)> {
        let mut entries: Vec<(&'static str, f64)> = vec![("h", self.h)];
        match self.samples {
            Samples::One { n } | Samples::Equal { n } => entries.push(("n", n)),
            Samples::Unequal { n1, n2 } => {
                entries.push(("n1", n1));
                entries.push(("n2", n2));
            }
        }
        entries.push(("alpha", self.alpha));
        return entries;
    }
}

fn proportion_test(
    h: Option<f64>,
    sizes: &[(ProportionRole, Option<f64>)],
    samples: Samples,
    alpha: Option<f64>,
    power: Option<f64>,
    alternative: Hypothesis,
) -> Result<PowerResult, PowerError> {
    check_probabilities(alpha, power)?;
    ParameterDomain::Reals.check_optional("h", h)?;
    for (role, size) in sizes {
        ParameterDomain::Positive.check_optional(role.name(), *size)?;
    }

    let mut parameters: Vec<(ProportionRole, Option<f64>)> = vec![(ProportionRole::H, h)];
    parameters.extend_from_slice(sizes);
    parameters.push((ProportionRole::Alpha, alpha));
    let unknown: Unknown<ProportionRole> = find_unknown(&parameters, power)?;

    let design: ProportionTest = ProportionTest {
        h: h.unwrap_or(f64::NAN),
        samples,
        alpha: alpha.unwrap_or(f64::NAN),
        alternative,
    };

    return solve(design, unknown);
}

/// Power analysis of the one sample test for a proportion.
///
/// ## Inputs:
///
/// 1. `h`: effect size (Cohen's h, see [cohen_h]).
/// 2. `n`: sample size.
/// 3. `alpha`: significance level.
/// 4. `power`: statistical power.
/// 5. `alternative`: (optional) the alternative hypothesis. Default: two tailed.
///
/// Exactly one of `h`, `n`, `alpha` and `power` must be left empty.
///
/// ## Example
///
/// ```
/// use PowerAnalysis::families::proportion::one_proportion;
///
/// let result = one_proportion().h(0.25).n(100.0).alpha(0.05).call().unwrap();
/// assert!((result.power() - 0.705418).abs() < 1e-5);
/// ```
#[bon::builder]
pub fn one_proportion(
    h: Option<f64>,
    n: Option<f64>,
    alpha: Option<f64>,
    power: Option<f64>,
    #[builder(default)] alternative: Hypothesis,
) -> Result<PowerResult, PowerError> {
    return proportion_test(
        h,
        &[(ProportionRole::N, n)],
        Samples::One {
            n: n.unwrap_or(f64::NAN),
        },
        alpha,
        power,
        alternative,
    );
}

/// Power analysis of the test comparing 2 proportions with the same sample
/// size `n` in **each** group. Same inputs as [one_proportion].
#[bon::builder]
pub fn two_proportions(
    h: Option<f64>,
    n: Option<f64>,
    alpha: Option<f64>,
    power: Option<f64>,
    #[builder(default)] alternative: Hypothesis,
) -> Result<PowerResult, PowerError> {
    return proportion_test(
        h,
        &[(ProportionRole::N, n)],
        Samples::Equal {
            n: n.unwrap_or(f64::NAN),
        },
        alpha,
        power,
        alternative,
    );
}

/// Power analysis of the test comparing 2 proportions with samples of
/// different sizes `n1` and `n2`.
///
/// Exactly one of `h`, `n1`, `n2`, `alpha` and `power` must be left empty.
#[bon::builder]
pub fn two_proportions_unequal(
    h: Option<f64>,
    n1: Option<f64>,
    n2: Option<f64>,
    alpha: Option<f64>,
    power: Option<f64>,
    #[builder(default)] alternative: Hypothesis,
) -> Result<PowerResult, PowerError> {
    return proportion_test(
        h,
        &[(ProportionRole::N1, n1), (ProportionRole::N2, n2)],
        Samples::Unequal {
            n1: n1.unwrap_or(f64::NAN),
            n2: n2.unwrap_or(f64::NAN),
        },
        alpha,
        power,
        alternative,
    );
}
