//! # Analysis of variance
//!
//! Power analysis of the [ANOVA](https://en.wikipedia.org/wiki/Analysis_of_variance)
//! family:
//!
//!  - [anova]: one-way ANOVA, with the overall F test or a contrast test.
//!  - [anova_binary] and [anova_count]: the analogous chi squared tests for
//!     binary and count data.
//!  - [kanova]: a main effect or interaction of a multiple way ANOVA.
//!  - [rmanova]: repeated measures ANOVA (between, within and interaction effects).
//!
//! The effect size of the (continuous) ANOVA tests is
//! [Cohen's f](https://en.wikipedia.org/wiki/Effect_size#Cohen's_f2) and the
//! sample size is always the **total** sample size.
//!

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

/// Which hypothesis of a one-way ANOVA is tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum AnovaTest {
    /// The overall F test: all the group means are equal.
    #[default]
    Overall,
    /// A two sided contrast.
    TwoSided,
    /// A one sided contrast (the contrast is positive).
    Greater,
    /// A one sided contrast (the contrast is negative).
    Less,
}

/// The solvable parameters of [anova].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneWayRole {
    K,
    N,
    F,
    Alpha,
}

impl Role for OneWayRole {
    fn name(self) -> &'static str {
        return match self {
            OneWayRole::K => "k",
            OneWayRole::N => "n",
            OneWayRole::F => "f",
            OneWayRole::Alpha => "alpha",
        };
    }
}

#[derive(Debug, Clone, PartialEq)]
struct OneWayAnova {
    k: f64,
    n: f64,
    f: f64,
    alpha: f64,
    test: AnovaTest,
}

impl OneWayAnova {
    fn context(&self) -> NoncentralityContext {
        let ddf: f64 = self.n - self.k;
        return match self.test {
            AnovaTest::Overall => NoncentralityContext::upper(Statistic::F {
                df1: self.k - 1.0,
                df2: ddf,
                ncp: self.n * self.f * self.f,
            }),
            AnovaTest::TwoSided => NoncentralityContext::upper(Statistic::F {
                df1: 1.0,
                df2: ddf,
                ncp: self.n * self.f * self.f,
            }),
            AnovaTest::Greater => NoncentralityContext::new(
                Statistic::T {
                    df: ddf,
                    ncp: self.n.sqrt() * self.f,
                },
                Hypothesis::RightTail,
            ),
            AnovaTest::Less => NoncentralityContext::new(
                Statistic::T {
                    df: ddf,
                    ncp: self.n.sqrt() * self.f,
                },
                Hypothesis::LeftTail,
            ),
        };
    }
}

impl Design for OneWayAnova {
    type Role = OneWayRole;

    fn value(&self, role: OneWayRole) -> f64 {
        return match role {
            OneWayRole::K => self.k,
            OneWayRole::N => self.n,
            OneWayRole::F => self.f,
            OneWayRole::Alpha => self.alpha,
        };
    }

    fn set_value(&mut self, role: OneWayRole, value: f64) {
        match role {
            OneWayRole::K => self.k = value,
            OneWayRole::N => self.n = value,
            OneWayRole::F => self.f = value,
            OneWayRole::Alpha => self.alpha = value,
        }
    }

    fn bounds(&self, role: OneWayRole) -> Result<SolverBounds, PowerError> {
        return Ok(match role {
            // the error degrees of freedom (n - k) must stay positive
            OneWayRole::K => SolverBounds::discrete(2.0 + 1e-10, 100.0_f64.min(self.n - 1e-10)),
            OneWayRole::N => SolverBounds::sample_size(2.0 + self.k + 1e-10, 1e5),
            OneWayRole::F => {
                if self.test == AnovaTest::Less {
                    SolverBounds::continuous(-1e7, -1e-7)
                } else {
                    SolverBounds::continuous(1e-7, 1e7)
                }
            }
            OneWayRole::Alpha => ALPHA_BOUNDS,
        });
    }

    fn power(&self) -> Result<f64, PowerError> {
        return self.context().power(self.alpha);
    }

    fn method(&self) -> &'static str {
        return "Power for One-way ANOVA";
    }

    fn note(&self) -> Option<&'static str> {
        return Some(match self.test {
            AnovaTest::Overall => "n is the total sample size (overall)",
            AnovaTest::TwoSided => "n is the total sample size (contrast, two-sided)",
            AnovaTest::Greater => "n is the total sample size (contrast, greater)",
            AnovaTest::Less => "n is the total sample size (contrast, less)",
        });
    }

    fn url(&self) -> &'static str {
        return "http://psychstat.org/anova";
    }

    fn alternative(&self) -> Option<Hypothesis> {
        return match self.test {
            AnovaTest::Overall => None,
            AnovaTest::TwoSided => Some(Hypothesis::TwoTailed),
            AnovaTest::Greater => Some(Hypothesis::RightTail),
            AnovaTest::Less => Some(Hypothesis::LeftTail),
        };
    }

    fn entries(&self) -> Vec<(&'static str, f64)> {
        return vec![
            ("k", self.k),
            ("n", self.n),
            ("f", self.f),
            ("alpha", self.alpha),
        ];
    }
}

/// Power analysis of a [one-way ANOVA](https://en.wikipedia.org/wiki/One-way_analysis_of_variance).
///
/// ## Inputs:
///
/// 1. `k`: number of groups. `1 < k`
/// 2. `n`: total sample size. `k < n`
/// 3. `f`: effect size ([Cohen's f](https://en.wikipedia.org/wiki/Effect_size#Cohen's_f2)).
///      - Must be non-negative for the overall and two sided tests.
///      - For [AnovaTest::Less] a negative contrast is expected.
/// 4. `alpha`: significance level.
/// 5. `power`: statistical power.
/// 6. `test`: (optional) the hypothesis tested. Default: [AnovaTest::Overall].
///
/// Exactly one of `k`, `n`, `f`, `alpha` and `power` must be left empty.
/// `k` and `n` are rounded up when solved.
///
/// ## Results
///
/// A [PowerResult] with `k`, `n`, `f`, `alpha` and `power`.
///
/// ## Example
///
/// ```
/// use PowerAnalysis::families::anova::anova;
///
/// let result = anova().k(4.0).f(0.25).alpha(0.05).power(0.8).call().unwrap();
/// assert_eq!(result.get("n"), Some(179.0));
/// ```
#[bon::builder]
pub fn anova(
    k: Option<f64>,
    n: Option<f64>,
    f: Option<f64>,
    alpha: Option<f64>,
    power: Option<f64>,
    #[builder(default)] test: AnovaTest,
) -> Result<PowerResult, PowerError> {
    check_probabilities(alpha, power)?;
    ParameterDomain::Count(2.0).check_optional("k", k)?;
    ParameterDomain::Above(1.0).check_optional("n", n)?;
    match test {
        AnovaTest::Overall | AnovaTest::TwoSided => {
            ParameterDomain::NonNegative.check_optional("f", f)?;
        }
        AnovaTest::Greater | AnovaTest::Less => {
            ParameterDomain::Reals.check_optional("f", f)?;
        }
    }
    if let (Some(k), Some(n)) = (k, n) {
        ParameterDomain::Above(k).check("n", n)?;
    }

    let unknown: Unknown<OneWayRole> = find_unknown(
        &[
            (OneWayRole::K, k),
            (OneWayRole::N, n),
            (OneWayRole::F, f),
            (OneWayRole::Alpha, alpha),
        ],
        power,
    )?;

    let design: OneWayAnova = OneWayAnova {
        k: k.unwrap_or(f64::NAN),
        n: n.unwrap_or(f64::NAN),
        f: f.unwrap_or(f64::NAN),
        alpha: alpha.unwrap_or(f64::NAN),
        test,
    };

    return solve(design, unknown);
}

/// The solvable parameters of [anova_binary] and [anova_count].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalogousRole {
    K,
    N,
    V,
    Alpha,
}

impl Role for AnalogousRole {
    fn name(self) -> &'static str {
        return match self {
            AnalogousRole::K => "k",
            AnalogousRole::N => "n",
            AnalogousRole::V => "V",
            AnalogousRole::Alpha => "alpha",
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DataKind {
    Binary,
    Count,
}

/// Chi squared analogue of the one-way ANOVA.
#[derive(Debug, Clone, PartialEq)]
struct AnalogousAnova {
    k: f64,
    n: f64,
    v: f64,
    alpha: f64,
    data: DataKind,
}

impl Design for AnalogousAnova {
    type Role = AnalogousRole;

    fn value(&self, role: AnalogousRole) -> f64 {
        return match role {
            AnalogousRole::K => self.k,
            AnalogousRole::N => self.n,
            AnalogousRole::V => self.v,
            AnalogousRole::Alpha => self.alpha,
        };
    }

    fn set_value(&mut self, role: AnalogousRole, value: f64) {
        match role {
            AnalogousRole::K => self.k = value,
            AnalogousRole::N => self.n = value,
            AnalogousRole::V => self.v = value,
            AnalogousRole::Alpha => self.alpha = value,
        }
    }

    fn bounds(&self, role: AnalogousRole) -> Result<SolverBounds, PowerError> {
        return Ok(match role {
            AnalogousRole::K => SolverBounds::discrete(2.0 + 1e-10, 100.0),
            AnalogousRole::N => SolverBounds::sample_size(2.0 + self.k + 1e-10, 1e5),
            AnalogousRole::V => SolverBounds::continuous(1e-7, 1e7),
            AnalogousRole::Alpha => ALPHA_BOUNDS,
        });
    }

    fn power(&self) -> Result<f64, PowerError> {
        let df: f64 = self.k - 1.0;
        return NoncentralityContext::upper(Statistic::ChiSquared {
            df,
            null_ncp: 0.0,
            ncp: self.v * self.v * self.n * df,
        })
        .power(self.alpha);
    }

    fn method(&self) -> &'static str {
        return match self.data {
            DataKind::Binary => "One-way Analogous ANOVA with Binary Data",
            DataKind::Count => "One-way Analogous ANOVA with Count Data",
        };
    }

    fn note(&self) -> Option<&'static str> {
        return Some("n is the total sample size");
    }

    fn url(&self) -> &'static str {
        return match self.data {
            DataKind::Binary => "http://psychstat.org/anovabinary",
            DataKind::Count => "http://psychstat.org/anovacount",
        };
    }

    fn entries(&self) -> Vec<(&'static str, f64)> {
        return vec![
            ("k", self.k),
            ("n", self.n),
            ("V", self.v),
            ("alpha", self.alpha),
        ];
    }
}

fn analogous_anova(
    data: DataKind,
    k: Option<f64>,
    n: Option<f64>,
    v: Option<f64>,
    alpha: Option<f64>,
    power: Option<f64>,
) -> Result<PowerResult, PowerError> {
    check_probabilities(alpha, power)?;
    ParameterDomain::Count(2.0).check_optional("k", k)?;
    ParameterDomain::Positive.check_optional("n", n)?;
    ParameterDomain::NonNegative.check_optional("V", v)?;

    let unknown: Unknown<AnalogousRole> = find_unknown(
        &[
            (AnalogousRole::K, k),
            (AnalogousRole::N, n),
            (AnalogousRole::V, v),
            (AnalogousRole::Alpha, alpha),
        ],
        power,
    )?;

    let design: AnalogousAnova = AnalogousAnova {
        k: k.unwrap_or(f64::NAN),
        n: n.unwrap_or(f64::NAN),
        v: v.unwrap_or(f64::NAN),
        alpha: alpha.unwrap_or(f64::NAN),
        data,
    };

    return solve(design, unknown);
}

/// Power analysis of the ANOVA analogue for **binary** data: a chi squared
/// test with `k - 1` degrees of freedom and noncentrality `V^2 n (k - 1)`.
///
/// ## Inputs:
///
/// 1. `k`: number of groups. `1 < k`
/// 2. `n`: total sample size.
/// 3. `v`: effect size (Cramér's `V`). Set with `.v(...)`.
/// 4. `alpha`: significance level.
/// 5. `power`: statistical power.
///
/// Exactly one of them must be left empty.
#[bon::builder]
pub fn anova_binary(
    k: Option<f64>,
    n: Option<f64>,
    v: Option<f64>,
    alpha: Option<f64>,
    power: Option<f64>,
) -> Result<PowerResult, PowerError> {
    return analogous_anova(DataKind::Binary, k, n, v, alpha, power);
}

/// Power analysis of the ANOVA analogue for **count** data. Same test as
/// [anova_binary].
#[bon::builder]
pub fn anova_count(
    k: Option<f64>,
    n: Option<f64>,
    v: Option<f64>,
    alpha: Option<f64>,
    power: Option<f64>,
) -> Result<PowerResult, PowerError> {
    return analogous_anova(DataKind::Count, k, n, v, alpha, power);
}

/// The solvable parameters of [kanova].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KAnovaRole {
    N,
    Ndf,
    F,
    Ng,
    Alpha,
}

impl Role for KAnovaRole {
    fn name(self) -> &'static str {
        return match self {
            KAnovaRole::N => "n",
            KAnovaRole::Ndf => "ndf",
            KAnovaRole::F => "f",
            KAnovaRole::Ng => "ng",
            KAnovaRole::Alpha => "alpha",
        };
    }
}

#[derive(Debug, Clone, PartialEq)]
struct MultiWayAnova {
    n: f64,
    ndf: f64,
    f: f64,
    ng: f64,
    alpha: f64,
}

impl Design for MultiWayAnova {
    type Role = KAnovaRole;

    fn value(&self, role: KAnovaRole) -> f64 {
        return match role {
            KAnovaRole::N => self.n,
            KAnovaRole::Ndf => self.ndf,
            KAnovaRole::F => self.f,
            KAnovaRole::Ng => self.ng,
            KAnovaRole::Alpha => self.alpha,
        };
    }

    fn set_value(&mut self, role: KAnovaRole, value: f64) {
        match role {
            KAnovaRole::N => self.n = value,
            KAnovaRole::Ndf => self.ndf = value,
            KAnovaRole::F => self.f = value,
            KAnovaRole::Ng => self.ng = value,
            KAnovaRole::Alpha => self.alpha = value,
        }
    }

    fn bounds(&self, role: KAnovaRole) -> Result<SolverBounds, PowerError> {
        return Ok(match role {
            KAnovaRole::N => SolverBounds::sample_size(1.0 + self.ng, 1e7),
            KAnovaRole::Ndf => SolverBounds::discrete(1.0 + 1e-10, 1e5),
            KAnovaRole::F => SolverBounds::continuous(1e-7, 1e7),
            KAnovaRole::Ng => SolverBounds::discrete(1.0, self.n - 1.0),
            KAnovaRole::Alpha => ALPHA_BOUNDS,
        });
    }

    fn power(&self) -> Result<f64, PowerError> {
        return NoncentralityContext::upper(Statistic::F {
            df1: self.ndf,
            df2: self.n - self.ng,
            ncp: self.f * self.f * self.n,
        })
        .power(self.alpha);
    }

    fn method(&self) -> &'static str {
        return "Multiple way ANOVA analysis";
    }

    fn note(&self) -> Option<&'static str> {
        return Some("Sample size is the total sample size");
    }

    fn url(&self) -> &'static str {
        return "http://psychstat.org/kanova";
    }

    fn entries(&self) -> Vec<(&'static str, f64)> {
        return vec![
            ("n", self.n),
            ("ndf", self.ndf),
            ("ddf", self.n - self.ng),
            ("f", self.f),
            ("ng", self.ng),
            ("alpha", self.alpha),
        ];
    }
}

/// Power analysis of a main effect or interaction in a
/// [multiple way ANOVA](https://en.wikipedia.org/wiki/Two-way_analysis_of_variance).
///
/// The test is an F test with `ndf` and `n - ng` degrees of freedom and
/// noncentrality `f^2 n`.
///
/// ## Inputs:
///
/// 1. `n`: total sample size. `ng < n`
/// 2. `ndf`: numerator degrees of freedom of the effect. For a main effect
///     of a factor with `a` levels it is `a - 1`, for the interaction of two
///     factors with `a` and `b` levels it is `(a - 1) (b - 1)`.
/// 3. `f`: effect size (Cohen's f).
/// 4. `ng`: total number of groups (cells) of the design.
/// 5. `alpha`: significance level.
/// 6. `power`: statistical power.
///
/// Exactly one of them must be left empty. `n`, `ndf` and `ng` are rounded up
/// when solved.
///
/// ## Results
///
/// A [PowerResult] that also contains the denominator degrees of freedom
/// (`ddf = n - ng`).
#[bon::builder]
pub fn kanova(
    n: Option<f64>,
    ndf: Option<f64>,
    f: Option<f64>,
    ng: Option<f64>,
    alpha: Option<f64>,
    power: Option<f64>,
) -> Result<PowerResult, PowerError> {
    check_probabilities(alpha, power)?;
    ParameterDomain::Positive.check_optional("n", n)?;
    ParameterDomain::Count(1.0).check_optional("ndf", ndf)?;
    ParameterDomain::NonNegative.check_optional("f", f)?;
    ParameterDomain::Count(1.0).check_optional("ng", ng)?;
    if let (Some(n), Some(ng)) = (n, ng) {
        ParameterDomain::Above(ng).check("n", n)?;
    }

    let unknown: Unknown<KAnovaRole> = find_unknown(
        &[
            (KAnovaRole::N, n),
            (KAnovaRole::Ndf, ndf),
            (KAnovaRole::F, f),
            (KAnovaRole::Ng, ng),
            (KAnovaRole::Alpha, alpha),
        ],
        power,
    )?;

    let design: MultiWayAnova = MultiWayAnova {
        n: n.unwrap_or(f64::NAN),
        ndf: ndf.unwrap_or(f64::NAN),
        f: f.unwrap_or(f64::NAN),
        ng: ng.unwrap_or(f64::NAN),
        alpha: alpha.unwrap_or(f64::NAN),
    };

    return solve(design, unknown);
}

/// The effect tested in a repeated measures ANOVA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum RepeatedMeasuresEffect {
    /// Differences between the groups.
    #[default]
    Between,
    /// Differences between the measurements.
    Within,
    /// Interaction between groups and measurements.
    Interaction,
}

/// The solvable parameters of [rmanova].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RmAnovaRole {
    N,
    Ng,
    Nm,
    F,
    Alpha,
}

impl Role for RmAnovaRole {
    fn name(self) -> &'static str {
        return match self {
            RmAnovaRole::N => "n",
            RmAnovaRole::Ng => "ng",
            RmAnovaRole::Nm => "nm",
            RmAnovaRole::F => "f",
            RmAnovaRole::Alpha => "alpha",
        };
    }
}

#[derive(Debug, Clone, PartialEq)]
struct RepeatedMeasuresAnova {
    n: f64,
    ng: f64,
    nm: f64,
    f: f64,
    nscor: f64,
    alpha: f64,
    effect: RepeatedMeasuresEffect,
}

impl RepeatedMeasuresAnova {
    /// Numerator and denominator degrees of freedom.
    fn degrees_of_freedom(&self) -> (f64, f64) {
        let measurements: f64 = (self.nm - 1.0) * self.nscor;
        return match self.effect {
            RepeatedMeasuresEffect::Between => (self.ng - 1.0, self.n - self.ng),
            RepeatedMeasuresEffect::Within => (measurements, (self.n - self.ng) * measurements),
            RepeatedMeasuresEffect::Interaction => (
                (self.ng - 1.0) * measurements,
                (self.n - self.ng) * measurements,
            ),
        };
    }
}

impl Design for RepeatedMeasuresAnova {
    type Role = RmAnovaRole;

    fn value(&self, role: RmAnovaRole) -> f64 {
        return match role {
            RmAnovaRole::N => self.n,
            RmAnovaRole::Ng => self.ng,
            RmAnovaRole::Nm => self.nm,
            RmAnovaRole::F => self.f,
            RmAnovaRole::Alpha => self.alpha,
        };
    }

    fn set_value(&mut self, role: RmAnovaRole, value: f64) {
        match role {
            RmAnovaRole::N => self.n = value,
            RmAnovaRole::Ng => self.ng = value,
            RmAnovaRole::Nm => self.nm = value,
            RmAnovaRole::F => self.f = value,
            RmAnovaRole::Alpha => self.alpha = value,
        }
    }

    fn bounds(&self, role: RmAnovaRole) -> Result<SolverBounds, PowerError> {
        return match role {
            RmAnovaRole::N => Ok(SolverBounds::sample_size(
                5.0_f64.max(self.ng + 1e-10),
                1e7,
            )),
            RmAnovaRole::Ng => Ok(match self.effect {
                RepeatedMeasuresEffect::Within => SolverBounds::discrete(1.0, self.n - 1.0),
                // the tests with a between-groups part need 2 groups
                RepeatedMeasuresEffect::Between | RepeatedMeasuresEffect::Interaction => {
                    SolverBounds::discrete(2.0, self.n - 1.0)
                }
            }),
            RmAnovaRole::Nm => {
                if self.effect == RepeatedMeasuresEffect::Between {
                    return Err(unsupported(
                        "nm",
                        "does not affect the between-effect test and can not be solved",
                    ));
                }
                Ok(SolverBounds::discrete(1.0 + 1e-10, 1e5))
            }
            RmAnovaRole::F => Ok(SolverBounds::continuous(1e-7, 1e7)),
            RmAnovaRole::Alpha => Ok(ALPHA_BOUNDS),
        };
    }

    fn power(&self) -> Result<f64, PowerError> {
        let (df1, df2): (f64, f64) = self.degrees_of_freedom();
        return NoncentralityContext::upper(Statistic::F {
            df1,
            df2,
            ncp: self.f * self.f * self.n * self.nscor,
        })
        .power(self.alpha);
    }

    fn method(&self) -> &'static str {
        return "Repeated-measures ANOVA analysis";
    }

    fn note(&self) -> Option<&'static str> {
        return Some(match self.effect {
            RepeatedMeasuresEffect::Between => "Power analysis for between-effect test",
            RepeatedMeasuresEffect::Within => "Power analysis for within-effect test",
            RepeatedMeasuresEffect::Interaction => "Power analysis for interaction-effect test",
        });
    }

    fn url(&self) -> &'static str {
        return "http://psychstat.org/rmanova";
    }

    fn entries(&self) -> Vec<(&'static str, f64)> {
        return vec![
            ("n", self.n),
            ("ng", self.ng),
            ("nm", self.nm),
            ("f", self.f),
            ("nscor", self.nscor),
            ("alpha", self.alpha),
        ];
    }
}

/// Power analysis of a [repeated measures ANOVA](https://en.wikipedia.org/wiki/Repeated_measures_design).
///
/// ## Inputs:
///
/// 1. `n`: total sample size. `ng < n`
/// 2. `ng`: number of groups.
/// 3. `nm`: number of measurements. `1 < nm`
/// 4. `f`: effect size (Cohen's f).
/// 5. `nscor`: (optional) nonsphericity correction coefficient, in `(0, 1]`.
///     `1` (the default) means that the sphericity assumption holds.
/// 6. `alpha`: significance level.
/// 7. `power`: statistical power.
/// 8. `effect`: (optional) the effect tested. Default: [RepeatedMeasuresEffect::Between].
///
/// Exactly one of `n`, `ng`, `nm`, `f`, `alpha` and `power` must be left empty.
/// `nm` can not be solved for the between effect (the test does not depend on it).
#[bon::builder]
pub fn rmanova(
    n: Option<f64>,
    ng: Option<f64>,
    nm: Option<f64>,
    f: Option<f64>,
    #[builder(default = 1.0)] nscor: f64,
    alpha: Option<f64>,
    power: Option<f64>,
    #[builder(default)] effect: RepeatedMeasuresEffect,
) -> Result<PowerResult, PowerError> {
    check_probabilities(alpha, power)?;
    ParameterDomain::Positive.check_optional("n", n)?;
    ParameterDomain::Count(1.0).check_optional("ng", ng)?;
    ParameterDomain::Count(2.0).check_optional("nm", nm)?;
    ParameterDomain::NonNegative.check_optional("f", f)?;
    ParameterDomain::Open(0.0, 1.0 + f64::EPSILON).check("nscor", nscor)?;
    if let (Some(n), Some(ng)) = (n, ng) {
        ParameterDomain::Above(ng).check("n", n)?;
    }

    let unknown: Unknown<RmAnovaRole> = find_unknown(
        &[
            (RmAnovaRole::N, n),
            (RmAnovaRole::Ng, ng),
            (RmAnovaRole::Nm, nm),
            (RmAnovaRole::F, f),
            (RmAnovaRole::Alpha, alpha),
        ],
        power,
    )?;

    let design: RepeatedMeasuresAnova = RepeatedMeasuresAnova {
        n: n.unwrap_or(f64::NAN),
        ng: ng.unwrap_or(f64::NAN),
        nm: nm.unwrap_or(f64::NAN),
        f: f.unwrap_or(f64::NAN),
        nscor,
        alpha: alpha.unwrap_or(f64::NAN),
        effect,
    };

    return solve(design, unknown);
}
