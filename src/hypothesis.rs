//! # Hypothesis testing and power
//!
//! This module contains the definition of [Hypothesis]: the direction of the
//! alternative hypothesis of a test.
//!
//! ## Introduction:
//!
//! *This section is a brief introduction to statistical concepts*
//!
//! When we perform a hypothesis test we have 2 hypothesis:
//!  - The null hypothesis (`H0`): there is no effect.
//!  - The alternative hypothesis (`Ha` or `H1`): there is an effect.
//!
//! There are 2 ways of being wrong:
//!
//!  - **Type 1 error**: rejecting `H0` when it is true. The probability of
//!     commiting it is the significance level `alpha`, wich we choose
//!     (tipically `0.05` or `0.01`).
//!  - **Type 2 error**: failing to reject `H0` when `Ha` is true. Its
//!     probability is denoted by `beta`.
//!
//! The [power](https://en.wikipedia.org/wiki/Power_(statistics)) of a test
//! is `1 - beta`: the probability of detecting an effect that actually exists.
//!
//! > power = P( Rejecting H0 | Ha is true )
//!
//! The power depends on 4 quantities:
//!  - The significance level `alpha`: a bigger `alpha` makes rejecting easier.
//!  - The sample size: more data gives a more precise statistic.
//!  - The effect size: bigger effects are easier to detect.
//!  - The power itself.
//!
//! Fixing 3 of them determines the fourth. This is what the functions of
//! [families](crate::families) compute: leave exactly one of them unknown
//! (`None`) and it will be found.
//!
//! Under `Ha` the test statistic does not follow the null distribution but a
//! *noncentral* version of it (noncentral [t](crate::distributions::StudentT),
//! [F](crate::distributions::F) or [chi squared](crate::distributions::ChiSquared)).
//! The power is the probability that this noncentral statistic falls in the
//! rejection region of the null distribution.
//!

/// The direction of the alternative hypothesis, wich selects the rejection
/// region(s) of the test statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[allow(clippy::exhaustive_enums)]
pub enum Hypothesis {
    /// The effect is positive: `H0` is rejected for large values of the
    /// statistic. Also known as the `greater` alternative.
    RightTail,
    /// The effect is negative: `H0` is rejected for small values of the
    /// statistic. Also known as the `less` alternative.
    LeftTail,
    /// The effect can have any sign. `alpha` is split evenly between both
    /// tails, so each critical value uses `alpha / 2`.
    #[default]
    TwoTailed,
}

impl Hypothesis {
    /// The usual name of the alternative: `"two.sided"`, `"greater"` or `"less"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        return match self {
            Hypothesis::RightTail => "greater",
            Hypothesis::LeftTail => "less",
            Hypothesis::TwoTailed => "two.sided",
        };
    }
}

impl std::fmt::Display for Hypothesis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "{}", self.name());
    }
}
