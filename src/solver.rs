//! # Unknown-parameter solver
//!
//! Every test family implements [Design]: it knows how to compute its power
//! and the search interval of each of its parameters. With that, [solve]
//! finds the unknown parameter:
//!
//!  - If the power is unknown, it is evaluated directly.
//!  - Otherwise the parameter is found with [bisection](https://en.wikipedia.org/wiki/Bisection_method)
//!     on `g(x) = power(x) - target` over the [SolverBounds] of the parameter.
//!     Some parameters first scan a grid of [GRID_POINTS] points to find the
//!     first subinterval where `g` changes sign (see [Scan]).
//!
//! After that the value is rounded (see [Rounding]) and the power of the
//! final design is evaluated again.
//!

use log::{debug, trace};

use crate::{
    configuration::solver::{
        GRID_POINTS, SAMPLE_SIZE_MAX_STEP_UP, SOLVER_MAX_ITERATIONS, SOLVER_POWER_TOLERANCE,
        SOLVER_X_TOLERANCE,
    },
    errors::PowerError,
    hypothesis::Hypothesis,
    parameter::{Role, Unknown},
    result::PowerResult,
};

/// How the root is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// As is.
    #[default]
    Continuous,
    /// Ceiling of the root. Used for structural counts (groups, degrees of
    /// freedom, measurements).
    Discrete,
    /// Ceiling of the root, and then increased by one until the power reaches
    /// the target. Used for sample sizes (and numbers of sites or clusters).
    SampleSize,
}

/// How the bracket of the root is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scan {
    /// The bounds themselves must bracket the root.
    #[default]
    Direct,
    /// Scan a grid from the lower bound upwards and use the first
    /// subinterval that brackets the root.
    Ascending,
    /// Scan a grid from the upper bound downwards and use the first
    /// subinterval that brackets the root.
    Descending,
}

/// The search interval of a parameter, how to find the bracket and how to
/// round the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverBounds {
    pub lower: f64,
    pub upper: f64,
    pub rounding: Rounding,
    pub scan: Scan,
}

impl SolverBounds {
    /// A continuous parameter searched in `[lower, upper]`.
    #[must_use]
    pub const fn continuous(lower: f64, upper: f64) -> SolverBounds {
        return SolverBounds {
            lower,
            upper,
            rounding: Rounding::Continuous,
            scan: Scan::Direct,
        };
    }

    /// A structural count searched in `[lower, upper]`, reported as the ceiling.
    #[must_use]
    pub const fn discrete(lower: f64, upper: f64) -> SolverBounds {
        return SolverBounds {
            lower,
            upper,
            rounding: Rounding::Discrete,
            scan: Scan::Direct,
        };
    }

    /// A sample size searched in `[lower, upper]`.
    #[must_use]
    pub const fn sample_size(lower: f64, upper: f64) -> SolverBounds {
        return SolverBounds {
            lower,
            upper,
            rounding: Rounding::SampleSize,
            scan: Scan::Direct,
        };
    }

    /// The same bounds, but scanning a grid in the given direction first.
    #[must_use]
    pub const fn with_scan(self, scan: Scan) -> SolverBounds {
        return SolverBounds { scan, ..self };
    }
}

/// A test design where (at most) one value is unknown.
///
/// The value of the unknown parameter is `NaN` until the solver sets it.
pub trait Design {
    type Role: Role;

    /// The current value of `role`.
    fn value(&self, role: Self::Role) -> f64;

    /// Sets the value of `role`.
    fn set_value(&mut self, role: Self::Role, value: f64);

    /// The search interval of `role`. Returns a
    /// [ParameterError::Unsupported](crate::errors::ParameterError::Unsupported)
    /// if `role` can not be solved for this design.
    fn bounds(&self, role: Self::Role) -> Result<SolverBounds, PowerError>;

    /// The power of the design. Every value must be known.
    fn power(&self) -> Result<f64, PowerError>;

    /// Description of the test.
    fn method(&self) -> &'static str;

    /// Extra information about the design.
    fn note(&self) -> Option<&'static str> {
        return None;
    }

    /// Where to find more information.
    fn url(&self) -> &'static str;

    /// The direction of the test, if it has one.
    fn alternative(&self) -> Option<Hypothesis> {
        return None;
    }

    /// Every parameter of the design except the power, in order.
    fn entries(&self) -> Vec<(&'static str, f64)>;
}

/// Solves the `unknown` of `design` and packs everything in a [PowerResult].
///
/// A solved sample size always reaches the target power: if it is still below
/// after [SAMPLE_SIZE_MAX_STEP_UP] steps, a [PowerError::Convergence] is returned.
pub fn solve<D: Design>(
    mut design: D,
    unknown: Unknown<D::Role>,
) -> Result<PowerResult, PowerError> {
    let power: f64 = match unknown {
        Unknown::Power => design.power()?,
        Unknown::Parameter { role, power: target } => {
            let bounds: SolverBounds = design.bounds(role)?;

            let root: f64 = find_root(
                |x: f64| -> Result<f64, PowerError> {
                    design.set_value(role, x);
                    return Ok(design.power()? - target);
                },
                role.name(),
                bounds,
                target,
            )?;

            let value: f64 = match bounds.rounding {
                Rounding::Continuous => root,
                Rounding::Discrete | Rounding::SampleSize => root.ceil(),
            };
            design.set_value(role, value);
            let mut power: f64 = design.power()?;

            if bounds.rounding == Rounding::SampleSize {
                let mut steps: usize = 0;
                while power < target && steps < SAMPLE_SIZE_MAX_STEP_UP {
                    let next: f64 = design.value(role) + 1.0;
                    debug!(
                        "Stepping `{}` up to {next}: power {power} is below the target {target}. ",
                        role.name()
                    );
                    design.set_value(role, next);
                    power = design.power()?;
                    steps += 1;
                }

                if power < target {
                    return Err(PowerError::Convergence {
                        field: role.name(),
                        iterations: steps,
                        last: design.value(role),
                    });
                }
            }

            power
        }
    };

    let mut values: Vec<(&'static str, f64)> = design.entries();
    values.push(("power", power));

    return Ok(PowerResult::new(
        design.method(),
        design.note(),
        design.url(),
        unknown.name(),
        design.alternative(),
        values,
    ));
}

/// Finds `x` in `bounds` with `g(x) = 0`.
///
/// ## Inputs:
///
/// 1. `g`: the function, `power(x) - target`. It does not need to be monotone,
///     but it must change sign inside the selected bracket.
/// 2. `field`: name of the parameter (for the logs and errors).
/// 3. `bounds`: the search interval and the [Scan] strategy. Rounding is
///     ignored here.
/// 4. `target`: the target power (for the errors).
///
/// ## Results
///
/// The root, or:
///  - [PowerError::Bounds] if no bracket is found.
///  - [PowerError::Convergence] if the bisection exceeds [SOLVER_MAX_ITERATIONS]
///     or `g` returns a NaN.
///  - Any error returned by `g`.
pub fn find_root(
    mut g: impl FnMut(f64) -> Result<f64, PowerError>,
    field: &'static str,
    bounds: SolverBounds,
    target: f64,
) -> Result<f64, PowerError> {
    let no_bracket = || -> PowerError {
        return PowerError::Bounds {
            field,
            lower: bounds.lower,
            upper: bounds.upper,
            target,
        };
    };

    #[allow(clippy::nonminimal_bool)]
    if !(bounds.lower < bounds.upper) {
        return Err(no_bracket());
    }

    let mut evaluate = |x: f64| -> Result<f64, PowerError> {
        let value: f64 = g(x)?;
        if value.is_nan() {
            return Err(PowerError::Convergence {
                field,
                iterations: 0,
                last: x,
            });
        }
        return Ok(value);
    };

    let ((mut lower, mut g_lower), (mut upper, g_upper)): ((f64, f64), (f64, f64)) =
        match bounds.scan {
            Scan::Direct => {
                let g_lower: f64 = evaluate(bounds.lower)?;
                let g_upper: f64 = evaluate(bounds.upper)?;
                ((bounds.lower, g_lower), (bounds.upper, g_upper))
            }
            Scan::Ascending | Scan::Descending => {
                let step: f64 = (bounds.upper - bounds.lower) / GRID_POINTS as f64;
                let grid: Vec<f64> = (0..=GRID_POINTS)
                    .map(|i| {
                        if i == GRID_POINTS {
                            bounds.upper
                        } else {
                            bounds.lower + step * i as f64
                        }
                    })
                    .collect();

                let mut values: Vec<f64> = Vec::with_capacity(grid.len());
                for &x in &grid {
                    values.push(evaluate(x)?);
                }

                let mut indices: Vec<usize> = (0..GRID_POINTS).collect();
                if bounds.scan == Scan::Descending {
                    indices.reverse();
                }

                let first: usize = indices
                    .into_iter()
                    .find(|&i| changes_sign(values[i], values[i + 1]))
                    .ok_or_else(no_bracket)?;

                ((grid[first], values[first]), (grid[first + 1], values[first + 1]))
            }
        };

    if g_lower == 0.0 {
        return Ok(lower);
    }
    if g_upper == 0.0 {
        return Ok(upper);
    }
    if !changes_sign(g_lower, g_upper) {
        return Err(no_bracket());
    }

    debug!(
        "Solving `{field}` for power {target} in the bracket [{lower}, {upper}] (g = [{g_lower}, {g_upper}]). "
    );

    for iteration in 0..SOLVER_MAX_ITERATIONS {
        let middle: f64 = 0.5 * (lower + upper);
        let g_middle: f64 = evaluate(middle)?;
        trace!("Iteration {iteration}: g({middle}) = {g_middle}");

        if g_middle.abs() <= SOLVER_POWER_TOLERANCE
            || upper - lower <= SOLVER_X_TOLERANCE * middle.abs().max(1.0)
        {
            debug!("Found `{field}` = {middle} after {iteration} iterations. ");
            return Ok(middle);
        }

        if (g_middle < 0.0) == (g_lower < 0.0) {
            lower = middle;
            g_lower = g_middle;
        } else {
            upper = middle;
        }
    }

    return Err(PowerError::Convergence {
        field,
        iterations: SOLVER_MAX_ITERATIONS,
        last: 0.5 * (lower + upper),
    });
}

/// True if `[a, b]` contains a root.
fn changes_sign(a: f64, b: f64) -> bool {
    return (a <= 0.0 && 0.0 <= b) || (b <= 0.0 && 0.0 <= a);
}
