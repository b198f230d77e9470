//! Tests of the [t-test family](PowerAnalysis::families::t_test).
//!
//! ```R
//! library(WebPower)
//! wp.t(n1 = 150, d = 0.2, type = "one.sample")
//! wp.t(n1 = 30, n2 = 40, d = 0.356, type = "two.sample.2n")
//! ```
//!
//! ***
//!

use PowerAnalysis::families::t_test::*;
use PowerAnalysis::hypothesis::Hypothesis;
use PowerAnalysis::result::PowerResult;
use assert_approx_eq::assert_approx_eq;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn t_test_equal_sizes() {
    init();

    struct Round {
        n: Option<f64>,
        d: Option<f64>,
        alpha: Option<f64>,
        power: Option<f64>,
        kind: TTestKind,
        alternative: Hypothesis,
        expected: f64,
        tolerance: f64,
    }

    let rounds: [Round; 4] = [
        Round {
            n: Some(150.0),
            d: Some(0.2),
            alpha: Some(0.05),
            power: None,
            kind: TTestKind::OneSample,
            alternative: Hypothesis::TwoTailed,
            expected: 0.682153,
            tolerance: 1e-5,
        },
        Round {
            n: None,
            d: Some(0.4),
            alpha: Some(0.05),
            power: Some(0.8),
            kind: TTestKind::Paired,
            alternative: Hypothesis::RightTail,
            expected: 41.0,
            tolerance: 0.5,
        },
        Round {
            n: Some(250.0),
            d: None,
            alpha: Some(0.1),
            power: Some(0.8),
            kind: TTestKind::OneSample,
            alternative: Hypothesis::TwoTailed,
            expected: 0.1576834,
            tolerance: 1e-3,
        },
        Round {
            n: Some(100.0),
            d: Some(-0.1),
            alpha: None,
            power: Some(0.75),
            kind: TTestKind::Paired,
            alternative: Hypothesis::LeftTail,
            expected: 0.3724988,
            tolerance: 1e-4,
        },
    ];

    for round in rounds {
        let result: PowerResult = t_test()
            .maybe_n(round.n)
            .maybe_d(round.d)
            .maybe_alpha(round.alpha)
            .maybe_power(round.power)
            .kind(round.kind)
            .alternative(round.alternative)
            .call()
            .expect("valid design");
        assert_approx_eq!(result.solved_value(), round.expected, round.tolerance);
        assert_eq!(result.alternative(), Some(round.alternative));
    }
}

#[test]
fn two_sample_sizes_are_per_group() {
    init();

    let result: PowerResult = t_test()
        .d(0.5)
        .alpha(0.05)
        .power(0.8)
        .kind(TTestKind::TwoSample)
        .call()
        .expect("valid design");
    assert_eq!(result.get("n"), Some(64.0));
    assert_eq!(result.method(), "Two Sample t test power calculation");
    assert!(0.8 <= result.power());
}

#[test]
fn t_test_unequal_sizes() {
    init();

    struct Round {
        n1: Option<f64>,
        n2: Option<f64>,
        d: Option<f64>,
        alpha: Option<f64>,
        alternative: Hypothesis,
        expected: f64,
        tolerance: f64,
    }

    let rounds: [Round; 4] = [
        Round {
            n1: None,
            n2: Some(400.0),
            d: Some(0.356),
            alpha: Some(0.05),
            alternative: Hypothesis::RightTail,
            expected: 56.0,
            tolerance: 0.5,
        },
        Round {
            n1: Some(1000.0),
            n2: None,
            d: Some(0.4),
            alpha: Some(0.05),
            alternative: Hypothesis::TwoTailed,
            expected: 52.0,
            tolerance: 0.5,
        },
        Round {
            n1: Some(2000.0),
            n2: Some(2500.0),
            d: None,
            alpha: Some(0.1),
            alternative: Hypothesis::RightTail,
            expected: 0.063701,
            tolerance: 1e-4,
        },
        Round {
            n1: Some(500.0),
            n2: Some(50.0),
            d: Some(-0.03),
            alpha: None,
            alternative: Hypothesis::LeftTail,
            expected: 0.7387184,
            tolerance: 1e-4,
        },
    ];

    for round in rounds {
        let result: PowerResult = t_test_unequal()
            .maybe_n1(round.n1)
            .maybe_n2(round.n2)
            .maybe_d(round.d)
            .maybe_alpha(round.alpha)
            .power(0.8)
            .alternative(round.alternative)
            .call()
            .expect("valid design");
        assert_approx_eq!(result.solved_value(), round.expected, round.tolerance);
    }

    let result: PowerResult = t_test_unequal()
        .n1(30.0)
        .n2(40.0)
        .d(0.356)
        .alpha(0.05)
        .call()
        .expect("valid design");
    assert_approx_eq!(result.power(), 0.3064767, 1e-5);
}

#[test]
fn missing_parameters() {
    let err = t_test()
        .d(0.5)
        .power(0.8)
        .call()
        .expect_err("n and alpha are both unknown");
    assert!(err.is_invalid_parameter());

    let err = t_test()
        .n(20.0)
        .d(0.5)
        .alpha(0.05)
        .power(0.8)
        .call()
        .expect_err("nothing is unknown");
    assert!(err.is_invalid_parameter());
}
