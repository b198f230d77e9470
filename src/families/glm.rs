//! # Generalized linear models
//!
//! Power of the [Wald test](https://en.wikipedia.org/wiki/Wald_test) for the
//! slope `beta1` of a [Poisson regression](https://en.wikipedia.org/wiki/Poisson_regression)
//! or a [logistic regression](https://en.wikipedia.org/wiki/Logistic_regression)
//! with a single covariate `X`.
//!
//! With `w` the variance function of the model at the linear predictor
//! `beta0 + beta1 X`, the large sample variance of the estimate of `beta1`
//! (for one observation) is
//!
//! ```text
//!     v1 = d / (d f - e^2)
//!     d = E[w(X)], e = E[X w(X)], f = E[X^2 w(X)]
//! ```
//!
//! and the test statistic is normal with mean `sqrt(n) beta1 / sqrt(v1)` and
//! unit variance. The expectations depend on the distribution of the
//! covariate (see [Covariate]).

use log::debug;

use crate::{
    covariate::Covariate,
    domain::ParameterDomain,
    errors::{ParameterError, PowerError},
    families::{ALPHA_BOUNDS, check_probabilities},
    hypothesis::Hypothesis,
    parameter::{Role, Unknown, find_unknown},
    power::{NoncentralityContext, Statistic},
    result::PowerResult,
    solver::{Design, SolverBounds, solve},
};

/// The solvable parameters of [poisson] and [logistic].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlmRole {
    N,
    Alpha,
}

impl Role for GlmRole {
    fn name(self) -> &'static str {
        return match self {
            GlmRole::N => "n",
            GlmRole::Alpha => "alpha",
        };
    }
}

/// The model and the parameters that determine its coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Model {
    Poisson { exp0: f64, exp1: f64 },
    Logistic { p0: f64, p1: f64 },
}

impl Model {
    /// `(beta0, beta1)`
    fn coefficients(&self) -> (f64, f64) {
        return match *self {
            Model::Poisson { exp0, exp1 } => (exp0.ln(), exp1.ln()),
            Model::Logistic { p0, p1 } => {
                let logit = |p: f64| -> f64 { (p / (1.0 - p)).ln() };
                (logit(p0), logit(p1) - logit(p0))
            }
        };
    }

    /// The variance function of the model at the linear predictor `eta`.
    fn weight(&self, eta: f64) -> f64 {
        return match self {
            Model::Poisson { .. } => eta.exp(),
            Model::Logistic { .. } => {
                let mean: f64 = 1.0 / (1.0 + (-eta).exp());
                mean * (1.0 - mean)
            }
        };
    }

    /// Returns false if `E[X^2 w(X)]` diverges. Only the exponential weight of
    /// the Poisson model can grow faster than the tails of the covariate.
    fn has_finite_moments(&self, covariate: &Covariate) -> bool {
        let beta1: f64 = self.coefficients().1;
        return match (self, covariate) {
            (Model::Poisson { .. }, Covariate::Exponential { rate }) => beta1 < *rate,
            (Model::Poisson { .. }, Covariate::Lognormal { .. }) => beta1 <= 0.0,
            _ => true,
        };
    }

    /// The large sample variance of the slope (`v1`).
    fn slope_variance(&self, covariate: &Covariate) -> f64 {
        let (beta0, beta1): (f64, f64) = self.coefficients();
        let w = |x: f64| -> f64 { self.weight(beta0 + beta1 * x) };

        let d: f64 = covariate.expectation(w);
        let e: f64 = covariate.expectation(|x| x * w(x));
        let f: f64 = covariate.expectation(|x| x * x * w(x));
        debug!("Covariate expectations ({}): d = {d}, e = {e}, f = {f}", covariate.name());

        return d / (d * f - e * e);
    }
}

#[derive(Debug, Clone, PartialEq)]
struct WaldTest {
    n: f64,
    alpha: f64,
    model: Model,
    beta1: f64,
    /// Variance of the slope, see [Model::slope_variance].
    v1: f64,
    alternative: Hypothesis,
}

impl WaldTest {
    fn new(
        n: f64,
        alpha: f64,
        model: Model,
        covariate: Covariate,
        alternative: Hypothesis,
    ) -> Result<WaldTest, PowerError> {
        let v1: f64 = if model.has_finite_moments(&covariate) {
            model.slope_variance(&covariate)
        } else {
            f64::NAN
        };
        #[allow(clippy::nonminimal_bool)]
        if !v1.is_finite() || !(0.0 < v1) {
            let (field, value): (&'static str, f64) = match model {
                Model::Poisson { exp1, .. } => ("exp1", exp1),
                Model::Logistic { p1, .. } => ("p1", p1),
            };
            return Err(ParameterError::OutOfDomain {
                field,
                value,
                reason: "gives a slope without a finite variance for this covariate",
            }
            .into());
        }

        return Ok(WaldTest {
            n,
            alpha,
            model,
            beta1: model.coefficients().1,
            v1,
            alternative,
        });
    }
}

impl Design for WaldTest {
    type Role = GlmRole;

    fn value(&self, role: GlmRole) -> f64 {
        return match role {
            GlmRole::N => self.n,
            GlmRole::Alpha => self.alpha,
        };
    }

    fn set_value(&mut self, role: GlmRole, value: f64) {
        match role {
            GlmRole::N => self.n = value,
            GlmRole::Alpha => self.alpha = value,
        }
    }

    fn bounds(&self, role: GlmRole) -> Result<SolverBounds, PowerError> {
        return Ok(match role {
            GlmRole::N => SolverBounds::sample_size(2.0 + 1e-10, 1e7),
            GlmRole::Alpha => ALPHA_BOUNDS,
        });
    }

    fn power(&self) -> Result<f64, PowerError> {
        let statistic: Statistic = Statistic::Normal {
            mean: self.n.sqrt() * self.beta1 / self.v1.sqrt(),
            sd: 1.0,
        };
        return NoncentralityContext::new(statistic, self.alternative).power(self.alpha);
    }

    fn method(&self) -> &'static str {
        return match self.model {
            Model::Poisson { .. } => "Power for Poisson regression",
            Model::Logistic { .. } => "Power for Logistic regression",
        };
    }

    fn url(&self) -> &'static str {
        return match self.model {
            Model::Poisson { .. } => "http://psychstat.org/poisson",
            Model::Logistic { .. } => "http://psychstat.org/logistic",
        };
    }

    fn alternative(&self) -> Option<Hypothesis> {
        return Some(self.alternative);
    }

    fn entries(&self) -> Vec<(&'static str, f64)> {
        let (beta0, beta1): (f64, f64) = self.model.coefficients();
        let (first, second): ((&'static str, f64), (&'static str, f64)) = match self.model {
            Model::Poisson { exp0, exp1 } => (("exp0", exp0), ("exp1", exp1)),
            Model::Logistic { p0, p1 } => (("p0", p0), ("p1", p1)),
        };
        return vec![
            ("n", self.n),
            first,
            second,
            ("beta0", beta0),
            ("beta1", beta1),
            ("alpha", self.alpha),
        ];
    }
}

fn wald_test(
    n: Option<f64>,
    model: Model,
    alpha: Option<f64>,
    power: Option<f64>,
    alternative: Hypothesis,
    covariate: Covariate,
) -> Result<PowerResult, PowerError> {
    let unknown: Unknown<GlmRole> =
        find_unknown(&[(GlmRole::N, n), (GlmRole::Alpha, alpha)], power)?;

    let design: WaldTest = WaldTest::new(
        n.unwrap_or(f64::NAN),
        alpha.unwrap_or(f64::NAN),
        model,
        covariate,
        alternative,
    )?;

    return solve(design, unknown);
}

/// Power analysis of a Poisson regression.
///
/// The model is `log(E[Y | X]) = beta0 + beta1 X`.
///
/// ## Inputs:
///
/// 1. `n`: sample size.
/// 2. `exp0`: (optional) the base rate, `exp(beta0)`. Default: `1`.
/// 3. `exp1`: (optional) the rate ratio of a unit increase of `X`,
///     `exp(beta1)`. Default: `0.5`.
/// 4. `alpha`: significance level. For two tailed tests it is split
///     between both tails.
/// 5. `power`: statistical power.
/// 6. `alternative`: (optional) the alternative hypothesis. Default: two tailed.
/// 7. `covariate`: (optional) the distribution of `X`. Default: Bernoulli with `p = 0.5`.
///
/// Exactly one of `n`, `alpha` and `power` must be left empty.
///
/// ## Example
///
/// ```
/// use PowerAnalysis::{covariate::Covariate, families::glm::poisson};
///
/// let result = poisson()
///     .n(4406.0)
///     .exp0(2.798)
///     .exp1(0.8938)
///     .alpha(0.05)
///     .covariate(Covariate::Bernoulli { p: 0.53 })
///     .call()
///     .unwrap();
/// assert!((result.power() - 0.9999789).abs() < 1e-5);
/// ```
#[bon::builder]
pub fn poisson(
    n: Option<f64>,
    #[builder(default = 1.0)] exp0: f64,
    #[builder(default = 0.5)] exp1: f64,
    alpha: Option<f64>,
    power: Option<f64>,
    #[builder(default)] alternative: Hypothesis,
    #[builder(default)] covariate: Covariate,
) -> Result<PowerResult, PowerError> {
    check_probabilities(alpha, power)?;
    ParameterDomain::Positive.check_optional("n", n)?;
    ParameterDomain::Positive.check("exp0", exp0)?;
    ParameterDomain::Positive.check("exp1", exp1)?;
    covariate.validate()?;

    return wald_test(
        n,
        Model::Poisson { exp0, exp1 },
        alpha,
        power,
        alternative,
        covariate,
    );
}

/// Power analysis of a logistic regression.
///
/// The model is `logit(P(Y = 1 | X)) = beta0 + beta1 X`, given through the
/// probabilities `p0 = P(Y = 1 | X = 0)` and `p1 = P(Y = 1 | X = 1)`.
///
/// ## Inputs:
///
/// 1. `n`: sample size.
/// 2. `p0`: (optional) Default: `0.5`.
/// 3. `p1`: (optional) Default: `0.5`.
/// 4. `alpha`: significance level. For two tailed tests it is split
///     between both tails.
/// 5. `power`: statistical power.
/// 6. `alternative`: (optional) the alternative hypothesis. Default: two tailed.
/// 7. `covariate`: (optional) the distribution of `X`. Default: Bernoulli with `p = 0.5`.
///
/// Exactly one of `n`, `alpha` and `power` must be left empty.
#[bon::builder]
pub fn logistic(
    n: Option<f64>,
    #[builder(default = 0.5)] p0: f64,
    #[builder(default = 0.5)] p1: f64,
    alpha: Option<f64>,
    power: Option<f64>,
    #[builder(default)] alternative: Hypothesis,
    #[builder(default)] covariate: Covariate,
) -> Result<PowerResult, PowerError> {
    check_probabilities(alpha, power)?;
    ParameterDomain::Positive.check_optional("n", n)?;
    ParameterDomain::Probability.check("p0", p0)?;
    ParameterDomain::Probability.check("p1", p1)?;
    covariate.validate()?;

    return wald_test(
        n,
        Model::Logistic { p0, p1 },
        alpha,
        power,
        alternative,
        covariate,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn bernoulli_variance_closed_form() {
        // logistic with a Bernoulli covariate: d = p w1 + (1 - p) w0, e = f = p w1
        let model: Model = Model::Logistic { p0: 0.2, p1: 0.3 };
        let p: f64 = 0.4;
        let w0: f64 = 0.2 * 0.8;
        let w1: f64 = 0.3 * 0.7;
        let d: f64 = p * w1 + (1.0 - p) * w0;
        let e: f64 = p * w1;
        let expected: f64 = d / (d * e - e * e);

        let v1: f64 = model.slope_variance(&Covariate::Bernoulli { p });
        assert_approx_eq!(v1, expected, 1e-10);
    }

    #[test]
    fn coefficients() {
        let (beta0, beta1): (f64, f64) = Model::Poisson {
            exp0: 2.0,
            exp1: 0.5,
        }
        .coefficients();
        assert_approx_eq!(beta0, 2.0_f64.ln(), 1e-15);
        assert_approx_eq!(beta1, -(2.0_f64.ln()), 1e-15);

        let (beta0, beta1): (f64, f64) = Model::Logistic { p0: 0.5, p1: 0.75 }.coefficients();
        assert_approx_eq!(beta0, 0.0, 1e-15);
        assert_approx_eq!(beta1, 3.0_f64.ln(), 1e-12);
    }

    #[test]
    fn divergent_expectations_are_rejected() {
        // E[exp(beta1 X)] diverges for an exponential covariate if beta1 >= rate
        let err: PowerError = poisson()
            .n(100.0)
            .exp1(5.0)
            .alpha(0.05)
            .covariate(Covariate::Exponential { rate: 1.0 })
            .call()
            .expect_err("infinite moments");
        assert!(err.is_invalid_parameter());
    }
}
