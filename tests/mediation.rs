//! Tests of [simple mediation](PowerAnalysis::families::mediation).
//!
//! ```R
//! library(WebPower)
//! wp.mediation(n = 100, power = NULL, a = 0.5, b = 0.5, varx = 1, vary = 1, varm = 1, alpha = 0.05)
//! ```
//!
//! ***
//!

use PowerAnalysis::families::mediation::mediation;
use PowerAnalysis::result::PowerResult;
use assert_approx_eq::assert_approx_eq;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn mediation_test() {
    init();

    struct Round {
        n: Option<f64>,
        a: Option<f64>,
        b: Option<f64>,
        var_y: Option<f64>,
        alpha: Option<f64>,
        power: Option<f64>,
        expected: f64,
        tolerance: f64,
    }

    let rounds: [Round; 6] = [
        Round {
            n: Some(100.0),
            a: Some(0.5),
            b: Some(0.5),
            var_y: Some(1.0),
            alpha: Some(0.05),
            power: None,
            expected: 0.9337271,
            tolerance: 1e-5,
        },
        Round {
            n: None,
            a: Some(0.5),
            b: Some(0.5),
            var_y: Some(1.0),
            alpha: Some(0.05),
            power: Some(0.9),
            expected: 88.0,
            tolerance: 0.5,
        },
        Round {
            n: Some(100.0),
            a: None,
            b: Some(0.5),
            var_y: Some(1.0),
            alpha: Some(0.05),
            power: Some(0.9),
            expected: 0.7335,
            tolerance: 1e-3,
        },
        Round {
            n: Some(150.0),
            a: Some(0.5),
            b: None,
            var_y: Some(1.0),
            alpha: Some(0.05),
            power: Some(0.8),
            expected: -0.2876785,
            tolerance: 1e-4,
        },
        Round {
            n: Some(200.0),
            a: Some(0.5),
            b: Some(-0.2),
            var_y: Some(1.0),
            alpha: None,
            power: Some(0.8),
            expected: 0.1323821,
            tolerance: 1e-4,
        },
        Round {
            n: Some(150.0),
            a: Some(0.3),
            b: Some(-0.2876635),
            var_y: None,
            alpha: Some(0.05),
            power: Some(0.8),
            expected: 0.6777206,
            tolerance: 1e-3,
        },
    ];

    for round in rounds {
        let result: PowerResult = mediation()
            .maybe_n(round.n)
            .maybe_a(round.a)
            .maybe_b(round.b)
            .var_x(1.0)
            .maybe_var_y(round.var_y)
            .var_m(1.0)
            .maybe_alpha(round.alpha)
            .maybe_power(round.power)
            .call()
            .expect("valid design");
        assert_approx_eq!(result.solved_value(), round.expected, round.tolerance);
        assert_eq!(result.url(), "http://psychstat.org/mediation");
    }
}

#[test]
fn mediator_variance_must_cover_the_first_path() {
    let err = mediation()
        .n(100.0)
        .a(2.0)
        .b(0.5)
        .var_x(1.0)
        .var_y(1.0)
        .var_m(1.0)
        .alpha(0.05)
        .call()
        .expect_err("a^2 var_x is above var_m");
    assert!(err.is_invalid_parameter());
}

#[test]
fn unreachable_power() {
    // with such a small effect no sample size below the cap reaches the power
    let err = mediation()
        .a(1e-6)
        .b(1e-6)
        .var_x(1.0)
        .var_y(1.0)
        .var_m(1.0)
        .alpha(0.05)
        .power(0.99)
        .call()
        .expect_err("the target is not reachable");
    assert!(err.is_bounds());
}
