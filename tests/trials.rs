//! Tests of the [randomized trials](PowerAnalysis::families::trials).
//!
//! ```R
//! library(WebPower)
//! wp.mrt2arm(n = 45, f = 0.5, J = 20, tau11 = 0.5, sg2 = 1.25, alpha = 0.05)
//! wp.crt2arm(f = 0.6, n = 20, J = 10, icc = 0.1, alpha = 0.05)
//! ```
//!
//! The omnibus test of the 3 arm cluster trial uses `F(2, J - 3)`.
//!
//! ***
//!

use PowerAnalysis::families::trials::*;
use PowerAnalysis::hypothesis::Hypothesis;
use PowerAnalysis::result::PowerResult;
use assert_approx_eq::assert_approx_eq;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn multisite_two_arms() {
    init();

    let result: PowerResult = mrt2arm()
        .n(45.0)
        .f(0.5)
        .j(20.0)
        .tau11(0.5)
        .sg2(1.25)
        .alpha(0.05)
        .call()
        .expect("valid design");
    assert_approx_eq!(result.power(), 0.8583253, 1e-5);
    assert_eq!(result.note(), Some("n is the number of subjects per cluster"));

    let result: PowerResult = mrt2arm()
        .n(45.0)
        .j(20.0)
        .tau11(0.5)
        .sg2(1.25)
        .alpha(0.05)
        .test(Mrt2ArmTest::Variance)
        .call()
        .expect("f is not needed");
    assert_approx_eq!(result.power(), 0.9987823, 1e-5);

    let result: PowerResult = mrt2arm()
        .n(5.0)
        .j(20.0)
        .tau00(2.5)
        .sg2(1.25)
        .alpha(0.05)
        .test(Mrt2ArmTest::Site)
        .call()
        .expect("f is not needed");
    assert_approx_eq!(result.power(), 0.9999719, 1e-5);

    let result: PowerResult = mrt2arm()
        .f(0.5)
        .j(20.0)
        .tau11(0.5)
        .sg2(1.25)
        .alpha(0.05)
        .power(0.8)
        .alternative(Hypothesis::RightTail)
        .call()
        .expect("valid design");
    assert_eq!(result.get("n"), Some(12.0));

    let result: PowerResult = mrt2arm()
        .n(10.0)
        .f(0.5)
        .tau11(2.5)
        .sg2(1.25)
        .alpha(0.05)
        .power(0.8)
        .call()
        .expect("valid design");
    assert_eq!(result.get("J"), Some(78.0));

    let result: PowerResult = mrt2arm()
        .n(200.0)
        .j(30.0)
        .tau00(1.5)
        .tau11(1.5)
        .sg2(1.25)
        .alpha(0.05)
        .power(0.8)
        .call()
        .expect("valid design");
    assert_approx_eq!(result.get("f").expect("solved"), 0.5845826, 1e-3);
}

#[test]
fn multisite_variance_tests_do_not_solve_the_effect() {
    // without `f` the unknown of the variance test is the power
    let result: PowerResult = mrt2arm()
        .n(45.0)
        .j(20.0)
        .alpha(0.05)
        .test(Mrt2ArmTest::Site)
        .call()
        .expect("valid design");
    assert_eq!(result.solved(), "power");

    // without the variance components the F statistic is central
    let result: PowerResult = mrt2arm()
        .n(45.0)
        .j(20.0)
        .tau00(0.0)
        .alpha(0.05)
        .test(Mrt2ArmTest::Site)
        .call()
        .expect("valid design");
    assert_approx_eq!(result.power(), 0.05, 1e-5);
}

#[test]
fn multisite_three_arms() {
    init();

    let result: PowerResult = mrt3arm()
        .n(30.0)
        .f1(0.43)
        .j(20.0)
        .tau(0.4)
        .sg2(2.25)
        .alpha(0.05)
        .call()
        .expect("valid design");
    assert_approx_eq!(result.power(), 0.8066964, 1e-5);

    let result: PowerResult = mrt3arm()
        .f2(0.43)
        .j(20.0)
        .tau(0.4)
        .sg2(2.25)
        .alpha(0.05)
        .power(0.8)
        .test(ThreeArmTest::Treatment)
        .call()
        .expect("f1 is not needed");
    assert_eq!(result.get("n"), Some(88.0));

    let result: PowerResult = mrt3arm()
        .n(200.0)
        .f1(0.15)
        .f2(0.43)
        .tau(0.4)
        .sg2(2.25)
        .alpha(0.05)
        .power(0.8)
        .test(ThreeArmTest::Omnibus)
        .call()
        .expect("valid design");
    assert_eq!(result.get("J"), Some(19.0));

    let result: PowerResult = mrt3arm()
        .n(250.0)
        .j(24.0)
        .tau(0.5)
        .sg2(3.2)
        .alpha(0.1)
        .power(0.8)
        .alternative(Hypothesis::RightTail)
        .call()
        .expect("valid design");
    assert_approx_eq!(result.get("f1").expect("solved"), 0.2217522, 1e-4);
}

#[test]
fn cluster_two_arms() {
    init();

    struct Round {
        n: Option<f64>,
        f: Option<f64>,
        j: Option<f64>,
        icc: Option<f64>,
        alpha: Option<f64>,
        power: Option<f64>,
        expected: f64,
        tolerance: f64,
    }

    let rounds: [Round; 5] = [
        Round {
            n: Some(20.0),
            f: Some(0.6),
            j: Some(10.0),
            icc: Some(0.1),
            alpha: Some(0.05),
            power: None,
            expected: 0.5901684,
            tolerance: 1e-5,
        },
        Round {
            n: None,
            f: Some(0.8),
            j: Some(10.0),
            icc: Some(0.1),
            alpha: Some(0.05),
            power: Some(0.8),
            expected: 17.0,
            tolerance: 0.5,
        },
        Round {
            n: Some(100.0),
            f: Some(0.8),
            j: Some(10.0),
            icc: None,
            alpha: Some(0.05),
            power: Some(0.8),
            expected: 0.1476605,
            tolerance: 1e-3,
        },
        Round {
            n: Some(200.0),
            f: None,
            j: Some(20.0),
            icc: Some(0.15),
            alpha: Some(0.05),
            power: Some(0.8),
            expected: 0.5203701,
            tolerance: 1e-4,
        },
        Round {
            n: Some(200.0),
            f: Some(0.3),
            j: Some(20.0),
            icc: Some(0.15),
            alpha: None,
            power: Some(0.8),
            expected: 0.3860032,
            tolerance: 1e-3,
        },
    ];

    for round in rounds {
        let result: PowerResult = crt2arm()
            .maybe_n(round.n)
            .maybe_f(round.f)
            .maybe_j(round.j)
            .maybe_icc(round.icc)
            .maybe_alpha(round.alpha)
            .maybe_power(round.power)
            .call()
            .expect("valid design");
        assert_approx_eq!(result.solved_value(), round.expected, round.tolerance);
    }
}

#[test]
fn cluster_three_arms() {
    init();

    struct Round {
        n: Option<f64>,
        f: Option<f64>,
        j: Option<f64>,
        icc: Option<f64>,
        alpha: Option<f64>,
        power: Option<f64>,
        alternative: Hypothesis,
        test: ThreeArmTest,
        expected: f64,
        tolerance: f64,
    }

    let rounds: [Round; 6] = [
        Round {
            n: Some(20.0),
            f: Some(0.5),
            j: Some(10.0),
            icc: Some(0.1),
            alpha: Some(0.05),
            power: None,
            alternative: Hypothesis::TwoTailed,
            test: ThreeArmTest::Main,
            expected: 0.3940027,
            tolerance: 1e-5,
        },
        Round {
            n: Some(100.0),
            f: None,
            j: Some(15.0),
            icc: Some(0.15),
            alpha: Some(0.05),
            power: Some(0.8),
            alternative: Hypothesis::RightTail,
            test: ThreeArmTest::Treatment,
            expected: 0.6646342,
            tolerance: 1e-4,
        },
        Round {
            n: None,
            f: Some(0.8),
            j: Some(10.0),
            icc: Some(0.1),
            alpha: Some(0.05),
            power: Some(0.8),
            alternative: Hypothesis::TwoTailed,
            test: ThreeArmTest::Main,
            expected: 28.0,
            tolerance: 0.5,
        },
        Round {
            n: Some(200.0),
            f: Some(0.5),
            j: None,
            icc: Some(0.4),
            alpha: Some(0.05),
            power: Some(0.8),
            alternative: Hypothesis::TwoTailed,
            test: ThreeArmTest::Omnibus,
            expected: 19.0,
            tolerance: 0.5,
        },
        Round {
            n: Some(575.0),
            f: Some(0.8),
            j: Some(50.0),
            icc: None,
            alpha: Some(0.05),
            power: Some(0.8),
            alternative: Hypothesis::TwoTailed,
            test: ThreeArmTest::Main,
            expected: 0.868855,
            tolerance: 1e-4,
        },
        Round {
            n: Some(575.0),
            f: Some(0.8),
            j: Some(50.0),
            icc: Some(0.8),
            alpha: None,
            power: Some(0.8),
            alternative: Hypothesis::TwoTailed,
            test: ThreeArmTest::Treatment,
            expected: 0.08915664,
            tolerance: 1e-4,
        },
    ];

    for round in rounds {
        let result: PowerResult = crt3arm()
            .maybe_n(round.n)
            .maybe_f(round.f)
            .maybe_j(round.j)
            .maybe_icc(round.icc)
            .maybe_alpha(round.alpha)
            .maybe_power(round.power)
            .alternative(round.alternative)
            .test(round.test)
            .call()
            .expect("valid design");
        assert_approx_eq!(result.solved_value(), round.expected, round.tolerance);
    }
}

#[test]
fn cluster_trials_need_enough_clusters() {
    let err = crt3arm()
        .n(20.0)
        .f(0.5)
        .j(3.0)
        .icc(0.1)
        .alpha(0.05)
        .call()
        .expect_err("J - 3 degrees of freedom");
    assert!(err.is_invalid_parameter());

    let err = crt2arm()
        .n(20.0)
        .f(0.5)
        .j(10.0)
        .icc(1.0)
        .alpha(0.05)
        .call()
        .expect_err("icc must be below 1");
    assert!(err.is_invalid_parameter());
}

#[test]
fn subjects_and_clusters_must_be_integers() {
    let err = crt2arm()
        .n(20.5)
        .f(0.6)
        .j(17.0)
        .icc(0.1)
        .alpha(0.05)
        .call()
        .expect_err("20.5 subjects per cluster");
    assert!(err.is_invalid_parameter());
    assert!(err.to_string().contains("`n`"));

    let err = crt2arm()
        .n(20.0)
        .f(0.6)
        .j(17.3)
        .icc(0.1)
        .alpha(0.05)
        .call()
        .expect_err("17.3 clusters");
    assert!(err.to_string().contains("`J`"));

    let err = crt3arm()
        .n(20.0)
        .f(0.5)
        .j(10.5)
        .icc(0.1)
        .alpha(0.05)
        .call()
        .expect_err("10.5 clusters");
    assert!(err.is_invalid_parameter());

    let err = mrt2arm()
        .n(45.0)
        .f(0.5)
        .j(20.5)
        .tau11(0.5)
        .sg2(1.25)
        .alpha(0.05)
        .call()
        .expect_err("20.5 sites");
    assert!(err.to_string().contains("`J`"));

    let err = mrt3arm()
        .n(30.5)
        .f1(0.43)
        .j(20.0)
        .tau(0.4)
        .sg2(2.25)
        .alpha(0.05)
        .call()
        .expect_err("30.5 subjects per site");
    assert!(err.is_invalid_parameter());
}
