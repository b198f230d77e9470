//! Tests of [Poisson and logistic regression](PowerAnalysis::families::glm).
//!
//! The expected values can be reproduced with:
//!
//! ```R
//! library(WebPower)
//! wp.poisson(n = 4406, exp0 = 2.798, exp1 = 0.8938, family = "Bernoulli", parameter = 0.53)
//! wp.logistic(n = 1000, p0 = 0.2, p1 = 0.25, alpha = 0.1, alternative = "greater", family = "Bernoulli")
//! ```
//!
//! ***
//!

use PowerAnalysis::covariate::Covariate;
use PowerAnalysis::families::glm::*;
use PowerAnalysis::hypothesis::Hypothesis;
use PowerAnalysis::result::PowerResult;
use assert_approx_eq::assert_approx_eq;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct Round {
    n: Option<f64>,
    baseline: f64,
    effect: f64,
    alpha: f64,
    power: Option<f64>,
    alternative: Hypothesis,
    covariate: Covariate,
    expected: f64,
    tolerance: f64,
}

#[test]
fn poisson_regression() {
    init();

    let rounds: [Round; 6] = [
        Round {
            n: Some(4406.0),
            baseline: 2.798,
            effect: 0.8938,
            alpha: 0.05,
            power: None,
            alternative: Hypothesis::TwoTailed,
            covariate: Covariate::Bernoulli { p: 0.53 },
            expected: 0.9999789,
            tolerance: 1e-6,
        },
        Round {
            n: None,
            baseline: 2.798,
            effect: 0.8938,
            alpha: 0.05,
            power: Some(0.8),
            alternative: Hypothesis::LeftTail,
            covariate: Covariate::Exponential { rate: 0.53 },
            expected: 88.0,
            tolerance: 0.5,
        },
        Round {
            n: Some(40.0),
            baseline: 1.5,
            effect: 0.9,
            alpha: 0.05,
            power: None,
            alternative: Hypothesis::RightTail,
            covariate: Covariate::lognormal(),
            expected: 0.003109859,
            tolerance: 1e-6,
        },
        Round {
            n: None,
            baseline: 1.5,
            effect: 0.9,
            alpha: 0.05,
            power: Some(0.8),
            alternative: Hypothesis::TwoTailed,
            covariate: Covariate::normal(),
            expected: 469.0,
            tolerance: 0.5,
        },
        Round {
            n: Some(450.0),
            baseline: 1.5,
            effect: 0.9,
            alpha: 0.05,
            power: None,
            alternative: Hypothesis::LeftTail,
            covariate: Covariate::poisson(),
            expected: 0.7954193,
            tolerance: 1e-5,
        },
        Round {
            n: None,
            baseline: 1.5,
            effect: 0.9,
            alpha: 0.05,
            power: Some(0.7),
            alternative: Hypothesis::TwoTailed,
            covariate: Covariate::uniform(),
            expected: 4689.0,
            tolerance: 0.5,
        },
    ];

    for round in rounds {
        let result: PowerResult = poisson()
            .maybe_n(round.n)
            .exp0(round.baseline)
            .exp1(round.effect)
            .alpha(round.alpha)
            .maybe_power(round.power)
            .alternative(round.alternative)
            .covariate(round.covariate)
            .call()
            .expect("valid design");
        assert_approx_eq!(result.solved_value(), round.expected, round.tolerance);
        assert_eq!(result.method(), "Power for Poisson regression");
    }
}

#[test]
fn logistic_regression() {
    init();

    let rounds: [Round; 5] = [
        Round {
            n: Some(1000.0),
            baseline: 0.2,
            effect: 0.25,
            alpha: 0.1,
            power: None,
            alternative: Hypothesis::RightTail,
            covariate: Covariate::bernoulli(),
            expected: 0.7285827,
            tolerance: 1e-6,
        },
        Round {
            n: None,
            baseline: 0.15,
            effect: 0.1,
            alpha: 0.1,
            power: Some(0.8),
            alternative: Hypothesis::TwoTailed,
            covariate: Covariate::lognormal(),
            expected: 469.0,
            tolerance: 0.5,
        },
        Round {
            n: Some(200.0),
            baseline: 0.2,
            effect: 0.1,
            alpha: 0.1,
            power: None,
            alternative: Hypothesis::TwoTailed,
            covariate: Covariate::exponential(),
            expected: 0.692976,
            tolerance: 1e-5,
        },
        Round {
            n: None,
            baseline: 0.15,
            effect: 0.1,
            alpha: 0.05,
            power: Some(0.8),
            alternative: Hypothesis::TwoTailed,
            covariate: Covariate::normal(),
            expected: 299.0,
            tolerance: 0.5,
        },
        Round {
            n: Some(100.0),
            baseline: 0.05,
            effect: 0.25,
            alpha: 0.1,
            power: None,
            alternative: Hypothesis::LeftTail,
            covariate: Covariate::uniform(),
            expected: 0.001653495,
            tolerance: 1e-6,
        },
    ];

    for round in rounds {
        let result: PowerResult = logistic()
            .maybe_n(round.n)
            .p0(round.baseline)
            .p1(round.effect)
            .alpha(round.alpha)
            .maybe_power(round.power)
            .alternative(round.alternative)
            .covariate(round.covariate)
            .call()
            .expect("valid design");
        assert_approx_eq!(result.solved_value(), round.expected, round.tolerance);
    }
}

#[test]
fn only_n_and_alpha_are_solvable() {
    let err = logistic()
        .p0(0.15)
        .p1(0.1)
        .call()
        .expect_err("n and alpha are unknown");
    assert!(err.is_invalid_parameter());
}

#[test]
fn invalid_covariates_are_rejected() {
    let err = poisson()
        .n(100.0)
        .alpha(0.05)
        .covariate(Covariate::Uniform { min: 1.0, max: 0.0 })
        .call()
        .expect_err("empty support");
    assert!(err.is_invalid_parameter());

    let err = logistic()
        .n(100.0)
        .alpha(0.05)
        .covariate(Covariate::Bernoulli { p: 1.5 })
        .call()
        .expect_err("p is not a probability");
    assert!(err.is_invalid_parameter());
}
