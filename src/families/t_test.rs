//! # t-tests
//!
//! Power of the [t-tests](https://en.wikipedia.org/wiki/Student%27s_t-test)
//! for means, with [Cohen's d](https://en.wikipedia.org/wiki/Effect_size#Cohen's_d)
//! as the effect size. Under the alternative the statistic follows a
//! noncentral t distribution.
//!
//! The solver looks for `d` in an interval that depends on the alternative:
//! `(0, 10]` for two sided tests, `[-5, 10]` for [Hypothesis::RightTail] and
//! `[-10, 5]` for [Hypothesis::LeftTail].

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

/// The kind of t-test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum TTestKind {
    /// Compares the mean of one sample against a known value.
    OneSample,
    /// Compares 2 paired measurements (`n` is the number of pairs).
    Paired,
    /// Compares the means of 2 independent samples of the same size
    /// (`n` is the size of **each** group).
    #[default]
    TwoSample,
}

impl TTestKind {
    /// Number of samples that contribute to the degrees of freedom.
    const fn samples(self) -> f64 {
        return match self {
            TTestKind::OneSample | TTestKind::Paired => 1.0,
            TTestKind::TwoSample => 2.0,
        };
    }
}

/// The solvable parameters of [t_test].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TTestRole {
    N,
    D,
    Alpha,
}

impl Role for TTestRole {
    fn name(self) -> &'static str {
        return match self {
            TTestRole::N => "n",
            TTestRole::D => "d",
            TTestRole::Alpha => "alpha",
        };
    }
}

#[derive(Debug, Clone, PartialEq)]
struct MeanTest {
    n: f64,
    d: f64,
    alpha: f64,
    kind: TTestKind,
    alternative: Hypothesis,
}

impl Design for MeanTest {
    type Role = TTestRole;

    fn value(&self, role: TTestRole) -> f64 {
        return match role {
            TTestRole::N => self.n,
            TTestRole::D => self.d,
            TTestRole::Alpha => self.alpha,
        };
    }

    fn set_value(&mut self, role: TTestRole, value: f64) {
        match role {
            TTestRole::N => self.n = value,
            TTestRole::D => self.d = value,
            TTestRole::Alpha => self.alpha = value,
        }
    }

    fn bounds(&self, role: TTestRole) -> Result<SolverBounds, PowerError> {
        return Ok(match role {
            TTestRole::N => SolverBounds::sample_size(2.0 + 1e-10, 1e9),
            TTestRole::D => signed_effect_bounds(self.alternative),
            TTestRole::Alpha => ALPHA_BOUNDS,
        });
    }

    fn power(&self) -> Result<f64, PowerError> {
        let samples: f64 = self.kind.samples();
        let statistic: Statistic = Statistic::T {
            df: (self.n - 1.0) * samples,
            ncp: (self.n / samples).sqrt() * self.d,
        };
        return NoncentralityContext::new(statistic, self.alternative).power(self.alpha);
    }

    fn method(&self) -> &'static str {
        return match self.kind {
            TTestKind::OneSample => "One Sample t test power calculation",
            TTestKind::Paired => "Paired Sample t test power calculation",
            TTestKind::TwoSample => "Two Sample t test power calculation",
        };
    }

    fn note(&self) -> Option<&'static str> {
        return match self.kind {
            TTestKind::OneSample => None,
            TTestKind::Paired => Some("n is number of *pairs*"),
            TTestKind::TwoSample => Some("n is the number in *each* group"),
        };
    }

    fn url(&self) -> &'static str {
        return "http://psychstat.org/ttest";
    }

    fn alternative(&self) -> Option<Hypothesis> {
        return Some(self.alternative);
    }

    fn entries(&self) -> Vec<(&'static str, f64)> {
        return vec![("n", self.n), ("d", self.d), ("alpha", self.alpha)];
    }
}

/// Power analysis of a one sample, paired or two sample t-test.
///
/// ## Inputs:
///
/// 1. `n`: sample size. For two sample tests it is the size of **each** group
///     and for paired tests the number of pairs.
/// 2. `d`: effect size (Cohen's d).
/// 3. `alpha`: significance level.
/// 4. `power`: statistical power.
/// 5. `kind`: (optional) the kind of test. Default: [TTestKind::TwoSample].
/// 6. `alternative`: (optional) the alternative hypothesis. Default: two tailed.
///
/// Exactly one of `n`, `d`, `alpha` and `power` must be left empty.
///
/// ## Results
///
/// A [PowerResult] with `n`, `d`, `alpha` and `power`. If `n` was solved, it
/// is the smallest integer with a power of at least `power`.
///
/// ## Example
///
/// ```
/// use PowerAnalysis::families::t_test::{TTestKind, t_test};
///
/// let result = t_test()
///     .n(150.0)
///     .d(0.2)
///     .alpha(0.05)
///     .kind(TTestKind::OneSample)
///     .call()
///     .unwrap();
/// assert!((result.power() - 0.682153).abs() < 1e-5);
/// ```
#[bon::builder]
pub fn t_test(
    n: Option<f64>,
    d: Option<f64>,
    alpha: Option<f64>,
    power: Option<f64>,
    #[builder(default)] kind: TTestKind,
    #[builder(default)] alternative: Hypothesis,
) -> Result<PowerResult, PowerError> {
    check_probabilities(alpha, power)?;
    ParameterDomain::Above(1.0).check_optional("n", n)?;
    ParameterDomain::Reals.check_optional("d", d)?;

    let unknown: Unknown<TTestRole> = find_unknown(
        &[
            (TTestRole::N, n),
            (TTestRole::D, d),
            (TTestRole::Alpha, alpha),
        ],
        power,
    )?;

    let design: MeanTest = MeanTest {
        n: n.unwrap_or(f64::NAN),
        d: d.unwrap_or(f64::NAN),
        alpha: alpha.unwrap_or(f64::NAN),
        kind,
        alternative,
    };

    return solve(design, unknown);
}

/// The solvable parameters of [t_test_unequal].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnequalTTestRole {
    N1,
    N2,
    D,
    Alpha,
}

impl Role for UnequalTTestRole {
    fn name(self) -> &'static str {
        return match self {
            UnequalTTestRole::N1 => "n1",
            UnequalTTestRole::N2 => "n2",
            UnequalTTestRole::D => "d",
            UnequalTTestRole::Alpha => "alpha",
        };
    }
}

#[derive(Debug, Clone, PartialEq)]
struct UnbalancedMeanTest {
    n1: f64,
    n2: f64,
    d: f64,
    alpha: f64,
    alternative: Hypothesis,
}

impl Design for UnbalancedMeanTest {
    type Role = UnequalTTestRole;

    fn value(&self, role: UnequalTTestRole) -> f64 {
        return match role {
            UnequalTTestRole::N1 => self.n1,
            UnequalTTestRole::N2 => self.n2,
            UnequalTTestRole::D => self.d,
            UnequalTTestRole::Alpha => self.alpha,
        };
    }

    fn set_value(&mut self, role: UnequalTTestRole, value: f64) {
        match role {
            UnequalTTestRole::N1 => self.n1 = value,
            UnequalTTestRole::N2 => self.n2 = value,
            UnequalTTestRole::D => self.d = value,
            UnequalTTestRole::Alpha => self.alpha = value,
        }
    }

    fn bounds(&self, role: UnequalTTestRole) -> Result<SolverBounds, PowerError> {
        return Ok(match role {
            UnequalTTestRole::N1 | UnequalTTestRole::N2 => {
                SolverBounds::sample_size(2.0 + 1e-10, 1e9)
            }
            UnequalTTestRole::D => signed_effect_bounds(self.alternative),
            UnequalTTestRole::Alpha => ALPHA_BOUNDS,
        });
    }

    fn power(&self) -> Result<f64, PowerError> {
        let statistic: Statistic = Statistic::T {
            df: self.n1 + self.n2 - 2.0,
            ncp: self.d / (1.0 / self.n1 + 1.0 / self.n2).sqrt(),
        };
        return NoncentralityContext::new(statistic, self.alternative).power(self.alpha);
    }

    fn method(&self) -> &'static str {
        return "Unbalanced two-sample t-test";
    }

    fn note(&self) -> Option<&'static str> {
        return Some("n1 and n2 are number in *each* group");
    }

    fn url(&self) -> &'static str {
        return "http://psychstat.org/ttest2n";
    }

    fn alternative(&self) -> Option<Hypothesis> {
        return Some(self.alternative);
    }

    fn entries(&self) -> Vec<(&'static str, f64)> {
        return vec![
            ("n1", self.n1),
            ("n2", self.n2),
            ("d", self.d),
            ("alpha", self.alpha),
        ];
    }
}

/// Power analysis of a two sample t-test where the groups have different sizes.
///
/// ## Inputs:
///
/// 1. `n1`: size of the first group.
/// 2. `n2`: size of the second group.
///      - `2 < n1 + n2`
/// 3. `d`: effect size (Cohen's d).
/// 4. `alpha`: significance level.
/// 5. `power`: statistical power.
/// 6. `alternative`: (optional) the alternative hypothesis. Default: two tailed.
///
/// Exactly one of `n1`, `n2`, `d`, `alpha` and `power` must be left empty.
#[bon::builder]
pub fn t_test_unequal(
    n1: Option<f64>,
    n2: Option<f64>,
    d: Option<f64>,
    alpha: Option<f64>,
    power: Option<f64>,
    #[builder(default)] alternative: Hypothesis,
) -> Result<PowerResult, PowerError> {
    check_probabilities(alpha, power)?;
    ParameterDomain::Positive.check_optional("n1", n1)?;
    ParameterDomain::Positive.check_optional("n2", n2)?;
    ParameterDomain::Reals.check_optional("d", d)?;
    if let (Some(n1), Some(n2)) = (n1, n2) {
        ParameterDomain::Above(2.0).check("n1 + n2", n1 + n2)?;
    }

    let unknown: Unknown<UnequalTTestRole> = find_unknown(
        &[
            (UnequalTTestRole::N1, n1),
            (UnequalTTestRole::N2, n2),
            (UnequalTTestRole::D, d),
            (UnequalTTestRole::Alpha, alpha),
        ],
        power,
    )?;

    let design: UnbalancedMeanTest = UnbalancedMeanTest {
        n1: n1.unwrap_or(f64::NAN),
        n2: n2.unwrap_or(f64::NAN),
        d: d.unwrap_or(f64::NAN),
        alpha: alpha.unwrap_or(f64::NAN),
        alternative,
    };

    return solve(design, unknown);
}
