//! # Simple mediation
//!
//! Power of the [Sobel test](https://en.wikipedia.org/wiki/Sobel_test) for the
//! indirect effect `a b` in the model
//!
//! ```text
//!     M = a X + e1
//!     Y = b M + c X + e2
//! ```
//!
//! The standardized indirect effect is
//!
//! ```text
//!     delta = sqrt(n) a b / sqrt(a^2 var_y / (var_m - a^2 var_x) + b^2 (var_m - a^2 var_x) / var_x)
//! ```
//!
//! and the test is a two tailed normal test. The residual variance of the
//! mediator, `var_m - a^2 var_x`, must be positive.
//!
//! The power is **not** monotone in `a`, `var_x` and `var_m` (it goes back to
//! `alpha` at both ends of their ranges). See [mediation] for how they are solved.

use crate::{
    domain::ParameterDomain,
    errors::PowerError,
    families::{ALPHA_BOUNDS, check_probabilities},
    hypothesis::Hypothesis,
    parameter::{Role, Unknown, find_unknown},
    power::{NoncentralityContext, Statistic},
    result::PowerResult,
    solver::{Design, Scan, SolverBounds, solve},
};

/// The solvable parameters of [mediation].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediationRole {
    N,
    A,
    B,
    VarX,
    VarY,
    VarM,
    Alpha,
}

impl Role for MediationRole {
    fn name(self) -> &'static str {
        return match self {
            MediationRole::N => "n",
            MediationRole::A => "a",
            MediationRole::B => "b",
            MediationRole::VarX => "var_x",
            MediationRole::VarY => "var_y",
            MediationRole::VarM => "var_m",
            MediationRole::Alpha => "alpha",
        };
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Mediation {
    n: f64,
    a: f64,
    b: f64,
    var_x: f64,
    var_y: f64,
    var_m: f64,
    alpha: f64,
}

impl Mediation {
    fn delta(&self) -> f64 {
        let residual: f64 = self.var_m - self.a * self.a * self.var_x;
        let denominator: f64 = (self.a * self.a * self.var_y / residual
            + self.b * self.b * residual / self.var_x)
            .sqrt();
        return self.n.sqrt() * self.a * self.b / denominator;
    }
}

impl Design for Mediation {
    type Role = MediationRole;

    fn value(&self, role: MediationRole) -> f64 {
        return match role {
            MediationRole::N => self.n,
            MediationRole::A => self.a,
            MediationRole::B => self.b,
            MediationRole::VarX => self.var_x,
            MediationRole::VarY => self.var_y,
            MediationRole::VarM => self.var_m,
            MediationRole::Alpha => self.alpha,
        };
    }

    fn set_value(&mut self, role: MediationRole, value: f64) {
        match role {
            MediationRole::N => self.n = value,
            MediationRole::A => self.a = value,
            MediationRole::B => self.b = value,
            MediationRole::VarX => self.var_x = value,
            MediationRole::VarY => self.var_y = value,
            MediationRole::VarM => self.var_m = value,
            MediationRole::Alpha => self.alpha = value,
        }
    }

    fn bounds(&self, role: MediationRole) -> Result<SolverBounds, PowerError> {
        let a2: f64 = self.a * self.a;
        return Ok(match role {
            MediationRole::N => SolverBounds::sample_size(2.0 + 1e-10, 1e9),
            MediationRole::A => {
                // |a| < sqrt(var_m / var_x); the largest root is reported
                let limit: f64 = (self.var_m / self.var_x).sqrt();
                SolverBounds::continuous(-limit + 1e-6, limit - 1e-6).with_scan(Scan::Descending)
            }
            MediationRole::B => {
                SolverBounds::continuous(-10.0, 10.0).with_scan(Scan::Ascending)
            }
            MediationRole::VarX => {
                let upper: f64 = if a2 == 0.0 {
                    1e7
                } else {
                    (self.var_m / a2 - 1e-10).min(1e7)
                };
                SolverBounds::continuous(1e-10, upper).with_scan(Scan::Descending)
            }
            MediationRole::VarY => SolverBounds::continuous(1e-10, 1e7),
            MediationRole::VarM => {
                // delta is maximum when the residual variance of the mediator
                // is |a| sqrt(var_x var_y) / |b|, after that the power decreases
                let best: f64 = (self.a * (self.var_x * self.var_y).sqrt() / self.b).abs();
                let lower: f64 = a2 * self.var_x + if best.is_finite() { best } else { 1e-10 };
                SolverBounds::continuous(lower, 1e7)
            }
            MediationRole::Alpha => ALPHA_BOUNDS,
        });
    }

    fn power(&self) -> Result<f64, PowerError> {
        return NoncentralityContext::new(
            Statistic::Normal {
                mean: self.delta(),
                sd: 1.0,
            },
            Hypothesis::TwoTailed,
        )
        .power(self.alpha);
    }

    fn method(&self) -> &'static str {
        return "Power for simple mediation";
    }

    fn url(&self) -> &'static str {
        return "http://psychstat.org/mediation";
    }

    fn entries(&self) -> Vec<(&'static str, f64)> {
        return vec![
            ("n", self.n),
            ("a", self.a),
            ("b", self.b),
            ("var_x", self.var_x),
            ("var_y", self.var_y),
            ("var_m", self.var_m),
            ("alpha", self.alpha),
        ];
    }
}

/// Power analysis of a simple mediation (Sobel test).
///
/// ## Inputs:
///
/// 1. `n`: sample size.
/// 2. `a`: path from `X` to the mediator `M`.
/// 3. `b`: path from `M` to `Y`.
/// 4. `var_x`: variance of `X`.
/// 5. `var_y`: residual variance of `Y`.
/// 6. `var_m`: variance of `M`.
///      - `a^2 var_x < var_m`
/// 7. `alpha`: significance level.
/// 8. `power`: statistical power.
///
/// Exactly one of them must be left empty.
///
/// The power goes back to `alpha` at both ends of the ranges of some
/// parameters, so there can be 2 solutions:
///  - `a` is searched from the largest possible value downwards, and `var_x`
///     too. The largest solution is returned.
///  - `b` is searched from `-10` upwards. The smallest solution is returned.
///  - For `var_m` the solution above the value with the maximum power is returned.
///
/// ## Example
///
/// ```
/// use PowerAnalysis::families::mediation::mediation;
///
/// let result = mediation()
///     .n(100.0)
///     .a(0.5)
///     .b(0.5)
///     .var_x(1.0)
///     .var_y(1.0)
///     .var_m(1.0)
///     .alpha(0.05)
///     .call()
///     .unwrap();
/// assert!((result.power() - 0.9337271).abs() < 1e-5);
/// ```
#[bon::builder]
#[allow(clippy::too_many_arguments)]
pub fn mediation(
    n: Option<f64>,
    a: Option<f64>,
    b: Option<f64>,
    var_x: Option<f64>,
    var_y: Option<f64>,
    var_m: Option<f64>,
    alpha: Option<f64>,
    power: Option<f64>,
) -> Result<PowerResult, PowerError> {
    check_probabilities(alpha, power)?;
    ParameterDomain::Positive.check_optional("n", n)?;
    ParameterDomain::Reals.check_optional("a", a)?;
    ParameterDomain::Reals.check_optional("b", b)?;
    ParameterDomain::Positive.check_optional("var_x", var_x)?;
    ParameterDomain::Positive.check_optional("var_y", var_y)?;
    ParameterDomain::Positive.check_optional("var_m", var_m)?;
    if let (Some(a), Some(var_x), Some(var_m)) = (a, var_x, var_m) {
        ParameterDomain::Above(a * a * var_x).check("var_m", var_m)?;
    }

    let unknown: Unknown<MediationRole> = find_unknown(
        &[
            (MediationRole::N, n),
            (MediationRole::A, a),
            (MediationRole::B, b),
            (MediationRole::VarX, var_x),
            (MediationRole::VarY, var_y),
            (MediationRole::VarM, var_m),
            (MediationRole::Alpha, alpha),
        ],
        power,
    )?;

    let design: Mediation = Mediation {
        n: n.unwrap_or(f64::NAN),
        a: a.unwrap_or(f64::NAN),
        b: b.unwrap_or(f64::NAN),
        var_x: var_x.unwrap_or(f64::NAN),
        var_y: var_y.unwrap_or(f64::NAN),
        var_m: var_m.unwrap_or(f64::NAN),
        alpha: alpha.unwrap_or(f64::NAN),
    };

    return solve(design, unknown);
}
