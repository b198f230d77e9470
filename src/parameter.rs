//! Which parameter of a design is unknown.
//!
//! Every test family has a small enum with the parameters that can be
//! solved for (its *roles*). The user leaves exactly one of them (or the
//! power) as `None` and [find_unknown] turns that into an [Unknown].

use crate::errors::{ParameterError, PowerError};

/// A parameter of a test family that can be solved for.
pub trait Role: Copy + std::fmt::Debug + PartialEq {
    /// The name of the parameter, as the user writes it in the builder.
    fn name(self) -> &'static str;
}

/// What the solver has to find.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Unknown<R: Role> {
    /// Every parameter is known, only the power has to be computed.
    Power,
    /// `role` is unknown and has to be found so that the test reaches `power`.
    Parameter { role: R, power: f64 },
}

impl<R: Role> Unknown<R> {
    /// The name of the value that will be solved.
    #[must_use]
    pub fn name(&self) -> &'static str {
        return match self {
            Unknown::Power => "power",
            Unknown::Parameter { role, .. } => role.name(),
        };
    }
}

/// Determines the unknown of a design.
///
/// ## Inputs:
///
/// 1. `parameters`: every solvable role together with the value given by the
///     user (`None` if unknown).
/// 2. `power`: the desired power (`None` if unknown).
///
/// ## Results
///
/// The [Unknown] if exactly one of the values is `None`. Otherwise
/// returns a [ParameterError::UnknownCount] listing the unknown names.
pub fn find_unknown<R: Role>(
    parameters: &[(R, Option<f64>)],
    power: Option<f64>,
) -> Result<Unknown<R>, PowerError> {
    let missing: Vec<R> = parameters
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(role, _)| *role)
        .collect();

    let count: usize = missing.len() + usize::from(power.is_none());

    if count != 1 {
        let mut names: Vec<&'static str> = missing.iter().map(|role| role.name()).collect();
        if power.is_none() {
            names.push("power");
        }
        return Err(ParameterError::UnknownCount {
            count,
            fields: names.join(", "),
        }
        .into());
    }

    return Ok(match (missing.first(), power) {
        (Some(role), Some(power)) => Unknown::Parameter { role: *role, power },
        _ => Unknown::Power,
    });
}
