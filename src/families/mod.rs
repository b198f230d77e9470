//! # Test families
//!
//! Each submodule contains the power analysis of a family of tests. Every
//! analysis is a function with a builder (generated with [bon]) where the
//! parameters that can be solved for are optional. Exactly one of them (or
//! the power) must be left empty:
//!
//! ```
//! use PowerAnalysis::families::anova::anova;
//!
//! // power of a one-way ANOVA
//! let result = anova().k(4.0).n(100.0).f(0.25).alpha(0.05).call().unwrap();
//! assert!((result.power() - 0.5181755).abs() < 1e-6);
//!
//! // sample size needed for a power of 0.8
//! let result = anova().k(4.0).f(0.25).alpha(0.05).power(0.8).call().unwrap();
//! assert_eq!(result.get("n"), Some(179.0));
//! ```
//!
//! The significance level `alpha` has no default value: it must be given
//! explicitly (or left empty to solve for it).

use crate::{
    domain::ParameterDomain,
    errors::{ParameterError, PowerError},
    hypothesis::Hypothesis,
    solver::SolverBounds,
};

pub mod anova;
pub mod correlation;
pub mod glm;
pub mod mediation;
pub mod proportion;
pub mod regression;
pub mod sem;
pub mod t_test;
pub mod trials;

/// Search interval of the significance level.
pub(crate) const ALPHA_BOUNDS: SolverBounds = SolverBounds::continuous(1e-10, 1.0 - 1e-10);

/// Checks that the given `alpha` and `power` are probabilities.
pub(crate) fn check_probabilities(
    alpha: Option<f64>,
    power: Option<f64>,
) -> Result<(), PowerError> {
    ParameterDomain::Probability.check_optional("alpha", alpha)?;
    ParameterDomain::Probability.check_optional("power", power)?;
    return Ok(());
}

pub(crate) fn unsupported(field: &'static str, reason: &'static str) -> PowerError {
    return ParameterError::Unsupported { field, reason }.into();
}

/// Search interval of a standardized effect size (Cohen's `d` or `h`) that
/// has a sign. The direction of the alternative selects where to look.
pub(crate) const fn signed_effect_bounds(alternative: Hypothesis) -> SolverBounds {
    return match alternative {
        Hypothesis::TwoTailed => SolverBounds::continuous(1e-7, 10.0),
        Hypothesis::RightTail => SolverBounds::continuous(-5.0, 10.0),
        Hypothesis::LeftTail => SolverBounds::continuous(-10.0, 5.0),
    };
}
