//! Euclid contains useful math functions: the weights of the Poisson mixtures
//! used by the noncentral distributions and the numerical integration used to
//! compute expectations over a covariate.

use statrs::function::{beta::beta_reg, gamma::ln_gamma};

use crate::configuration::integration::SMALL_INTEGRATION_NUM_STEPS;

/// The [regularized incomplete beta function](https://en.wikipedia.org/wiki/Beta_function#Incomplete_beta_function)
/// and its complement: returns `(I_x(a, b), I_{1-x}(b, a))`, where both values add up to 1.
///
/// `x_complement` must be `1 - x`, computed by the caller without cancellation
/// (for example `d2 / (d1 * x + d2)` instead of `1 - d1 * x / (d1 * x + d2)`).
/// The value on the side where the continued fraction converges best is
/// computed directly and the other one as its complement.
///
/// `a` and `b` must be stricly positive.
#[must_use]
pub fn beta_reg_pair(a: f64, b: f64, x: f64, x_complement: f64) -> (f64, f64) {
    if x <= 0.0 {
        return (0.0, 1.0);
    }
    if x_complement <= 0.0 {
        return (1.0, 0.0);
    }

    if x < (a + 1.0) / (a + b + 2.0) {
        let lower: f64 = beta_reg(a, b, x.min(1.0));
        return (lower, 1.0 - lower);
    }

    let upper: f64 = beta_reg(b, a, x_complement.min(1.0));
    return (1.0 - upper, upper);
}

/// The logarithm of the [Poisson](https://en.wikipedia.org/wiki/Poisson_distribution)
/// probability mass function `ln(e^(-mu) * mu^j / j!)`.
///
/// `mu` must be stricly positive.
#[must_use]
pub fn ln_poisson_weight(mu: f64, j: f64) -> f64 {
    return -mu + j * mu.ln() - ln_gamma(j + 1.0);
}

/// The index of the largest Poisson weight (the mode), `floor(mu)`.
///
/// The Poisson mixtures are summed starting from here in both directions.
#[must_use]
pub fn poisson_mode(mu: f64) -> f64 {
    return mu.floor().max(0.0);
}

/// Indicates how an integral over the given bounds has to be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationType {
    /// closed interval `[a, b]`
    Finite,
    /// `[-inf, b]`
    InfiniteToConst,
    /// `[a, inf]`
    ConstToInfinite,
    /// `[-inf, inf]`
    FullInfinite,
}

impl IntegrationType {
    #[must_use]
    pub const fn from_bounds(bounds: (f64, f64)) -> IntegrationType {
        return match (bounds.0.is_finite(), bounds.1.is_finite()) {
            (true, true) => IntegrationType::Finite,
            (false, true) => IntegrationType::InfiniteToConst,
            (true, false) => IntegrationType::ConstToInfinite,
            (false, false) => IntegrationType::FullInfinite,
        };
    }
}

/// Numerical integration of `func` over `bounds`.
///
/// We use the composite [Simpson's rule](https://en.wikipedia.org/wiki/Simpson%27s_rule#Composite_Simpson's_1/3_rule)
/// with [SMALL_INTEGRATION_NUM_STEPS] steps. Infinite ranges are mapped to a
/// finite interval with a [change of variables](https://en.wikipedia.org/wiki/Numerical_integration#Integrals_over_infinite_intervals):
///
/// ```text
///     integral {-inf -> b} f(x) dx = integral {0 -> 1} f(b - (1 - t)/t)  /  t^2  dt
///     integral {a -> inf} f(x) dx  = integral {0 -> 1} f(a + t/(1 - t))  /  (1 - t)^2  dt
///     integral {-inf -> inf} f(x) dx  = integral {-1 -> 1} f(t/(1 - t^2))  *  (1 + t^2) / (1 - t^2)^2  dt
/// ```
///
/// The singular end points of the mapped integrals are skipped (they count as
/// `0.0`), and so is any sample of the integrand that is not finite.
///
/// The result is deterministic: the same function and bounds always give the
/// same value.
#[must_use]
pub fn numerical_integration(func: impl Fn(f64) -> f64, bounds: (f64, f64)) -> f64 {
    let integration_type: IntegrationType = IntegrationType::from_bounds(bounds);

    let integrand = |t: f64| -> f64 {
        let value: f64 = match integration_type {
            IntegrationType::Finite => func(t),
            IntegrationType::InfiniteToConst => {
                if t.abs() < f64::EPSILON {
                    // too near singularity, skip
                    return 0.0;
                }
                let inv_t: f64 = 1.0 / t;
                func(bounds.1 - (1.0 - t) * inv_t) * inv_t * inv_t
            }
            IntegrationType::ConstToInfinite => {
                let one_minus: f64 = 1.0 - t;
                if one_minus.abs() < f64::EPSILON {
                    // too near singularity, skip
                    return 0.0;
                }
                let u: f64 = 1.0 / one_minus;
                func(bounds.0 + t * u) * u * u
            }
            IntegrationType::FullInfinite => {
                let one_minus: f64 = 1.0 - t * t;
                if one_minus.abs() < f64::EPSILON {
                    // too near singularity, skip
                    return 0.0;
                }
                let v: f64 = 1.0 / one_minus;
                func(t * v) * (1.0 + t * t) * v * v
            }
        };

        if value.is_finite() { value } else { 0.0 }
    };

    let (start, end): (f64, f64) = match integration_type {
        IntegrationType::Finite => bounds,
        IntegrationType::InfiniteToConst | IntegrationType::ConstToInfinite => (0.0, 1.0),
        IntegrationType::FullInfinite => (-1.0, 1.0),
    };

    return simpson(integrand, start, end, SMALL_INTEGRATION_NUM_STEPS);
}

/// Composite Simpson's rule over `[start, end]` with `num_steps` (even) steps.
#[must_use]
pub fn simpson(func: impl Fn(f64) -> f64, start: f64, end: f64, num_steps: usize) -> f64 {
    let steps: usize = num_steps + num_steps % 2;
    let step_length: f64 = (end - start) / steps as f64;

    let mut accumulator: f64 = func(start) + func(end);
    for i in 1..steps {
        let x: f64 = start + step_length * i as f64;
        let weight: f64 = if i % 2 == 1 { 4.0 } else { 2.0 };
        accumulator += weight * func(x);
    }

    return accumulator * step_length / 3.0;
}
