#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::assign_op_pattern,
    clippy::excessive_precision
)]

#![warn(
    clippy::all,
    clippy::restriction,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]
// ^Disable warning "crate `PowerAnalysis` should have a snake case name convert the identifier to snake case: `power_analysis`"
// The rest of the names will follow the snake_case convention.

//! # Power Analysis
//!
//!
//! This library computes the [statistical power](https://en.wikipedia.org/wiki/Power_(statistics))
//! of common tests. Given every parameter of a design except one, it finds the
//! missing one:
//!
//! - [x] Power
//! - [x] Sample size (rounded up, the power is never below the target)
//! - [x] Effect size
//! - [x] Significance level (`alpha`)
//! - [x] Structural parameters (number of groups, degrees of freedom, variances...)
//!
//! ## Usage
//!
//! Every test is a function with a builder. Leave exactly one of the
//! parameters (or the power) empty:
//!
//! ```
//! use PowerAnalysis::families::t_test::{TTestKind, t_test};
//!
//! let result = t_test()
//!     .d(0.5)
//!     .alpha(0.05)
//!     .power(0.8)
//!     .kind(TTestKind::TwoSample)
//!     .call()
//!     .unwrap();
//!
//! // 64 subjects in each group
//! assert_eq!(result.get("n"), Some(64.0));
//! println!("{result}");
//! ```
//!
//! The result is a [PowerResult](result::PowerResult) with every parameter of
//! the design, a description of the method and a reference. The errors are
//! described in [errors].
//!
//! ## Tests
//!
//!  - [x] [One-way ANOVA](families::anova::anova) (overall and contrasts)
//!  - [x] [ANOVA with binary data](families::anova::anova_binary) and [with count data](families::anova::anova_count)
//!  - [x] [k-way ANOVA](families::anova::kanova)
//!  - [x] [Repeated measures ANOVA](families::anova::rmanova)
//!  - [x] [t-test](families::t_test::t_test) (one sample, paired, two samples) ([Wiki](https://en.wikipedia.org/wiki/Student%27s_t-test))
//!  - [x] [t-test with unequal sample sizes](families::t_test::t_test_unequal)
//!  - [x] [Proportions](families::proportion) (one sample, two samples with equal or unequal sizes)
//!  - [x] [Correlation](families::correlation::correlation)
//!  - [x] [Linear regression](families::regression::regression)
//!  - [x] [Poisson regression](families::glm::poisson) ([Wiki](https://en.wikipedia.org/wiki/Poisson_regression))
//!  - [x] [Logistic regression](families::glm::logistic) ([Wiki](https://en.wikipedia.org/wiki/Logistic_regression))
//!  - [x] [Mediation](families::mediation::mediation) ([Wiki](https://en.wikipedia.org/wiki/Sobel_test))
//!  - [x] [SEM](families::sem) (chi squared and RMSEA methods)
//!  - [x] [Multisite](families::trials::mrt2arm) and [cluster](families::trials::crt2arm) randomized trials
//!
//! ## Distributions
//!
//! The power is computed with the noncentral [t](distributions::StudentT),
//! [F](distributions::F) and [chi squared](distributions::ChiSquared)
//! distributions and the [normal](distributions::Normal) distribution. They
//! implement the [Distribution](distribution_trait::Distribution) trait.
//!
//! The numerical choices (tolerances, number of steps...) are in [configuration].
//!
//! ***
//!

pub mod configuration;
pub mod covariate;
pub mod distribution_trait;
pub mod distributions;
pub mod domain;
pub mod errors;
pub mod euclid;
pub mod families;
pub mod hypothesis;
pub mod parameter;
pub mod power;
pub mod result;
pub mod solver;
