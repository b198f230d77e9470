//! Tests of the [proportion tests](PowerAnalysis::families::proportion).
//!
//! ```R
//! library(WebPower)
//! wp.prop(h = 0.25, n1 = 100, type = "1p")
//! wp.prop(h = 0.2, n1 = 1000, n2 = 750, alpha = 0.1, alternative = "greater", type = "2p2n")
//! ```
//!
//! ***
//!

use PowerAnalysis::families::proportion::*;
use PowerAnalysis::hypothesis::Hypothesis;
use PowerAnalysis::result::PowerResult;
use assert_approx_eq::assert_approx_eq;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn effect_size() {
    assert_approx_eq!(cohen_h(0.5, 0.5).expect("valid"), 0.0, 1e-12);
    // 2 asin(sqrt(0.65)) - 2 asin(sqrt(0.45))
    assert_approx_eq!(cohen_h(0.65, 0.45).expect("valid"), 0.4048601, 1e-6);
    assert!(cohen_h(1.5, 0.5).is_none());
}

#[test]
fn one_sample() {
    init();

    let result: PowerResult = one_proportion()
        .h(0.25)
        .n(100.0)
        .alpha(0.05)
        .call()
        .expect("valid design");
    assert_approx_eq!(result.power(), 0.705418, 1e-5);

    let result: PowerResult = one_proportion()
        .n(250.0)
        .alpha(0.1)
        .power(0.8)
        .alternative(Hypothesis::LeftTail)
        .call()
        .expect("valid design");
    assert_approx_eq!(result.get("h").expect("solved"), -0.1342812, 1e-5);

    let result: PowerResult = one_proportion()
        .h(0.52)
        .alpha(0.05)
        .power(0.8)
        .alternative(Hypothesis::RightTail)
        .call()
        .expect("valid design");
    assert_eq!(result.get("n"), Some(23.0));

    let result: PowerResult = one_proportion()
        .h(0.1)
        .n(500.0)
        .power(0.8)
        .call()
        .expect("valid design");
    assert_approx_eq!(result.alpha(), 0.1630304, 1e-4);
}

#[test]
fn two_samples_equal_sizes() {
    init();

    let result: PowerResult = two_proportions()
        .h(0.1)
        .n(500.0)
        .alpha(0.1)
        .call()
        .expect("valid design");
    assert_approx_eq!(result.power(), 0.4752263, 1e-5);
    assert_eq!(result.note(), Some("Sample sizes for EACH group"));

    let result: PowerResult = two_proportions()
        .n(1000.0)
        .alpha(0.1)
        .power(0.8)
        .alternative(Hypothesis::RightTail)
        .call()
        .expect("valid design");
    assert_approx_eq!(result.get("h").expect("solved"), 0.09495117, 1e-5);

    let result: PowerResult = two_proportions()
        .h(-0.1)
        .alpha(0.05)
        .power(0.8)
        .alternative(Hypothesis::LeftTail)
        .call()
        .expect("valid design");
    assert_eq!(result.get("n"), Some(1237.0));

    let result: PowerResult = two_proportions()
        .h(0.1)
        .n(1000.0)
        .power(0.8)
        .call()
        .expect("valid design");
    assert_approx_eq!(result.alpha(), 0.1630304, 1e-4);
}

#[test]
fn two_samples_unequal_sizes() {
    init();

    let result: PowerResult = two_proportions_unequal()
        .h(0.2)
        .n1(1000.0)
        .n2(750.0)
        .alpha(0.1)
        .alternative(Hypothesis::RightTail)
        .call()
        .expect("valid design");
    assert_approx_eq!(result.power(), 0.997874, 1e-5);

    let result: PowerResult = two_proportions_unequal()
        .n1(10.0)
        .n2(5.0)
        .alpha(0.05)
        .power(0.8)
        .call()
        .expect("valid design");
    assert_approx_eq!(result.get("h").expect("solved"), 1.534504, 1e-4);

    let result: PowerResult = two_proportions_unequal()
        .h(-0.2)
        .n2(750.0)
        .alpha(0.05)
        .power(0.8)
        .alternative(Hypothesis::LeftTail)
        .call()
        .expect("valid design");
    assert_eq!(result.get("n1"), Some(195.0));

    let result: PowerResult = two_proportions_unequal()
        .h(0.1)
        .n1(1500.0)
        .alpha(0.1)
        .power(0.8)
        .call()
        .expect("valid design");
    assert_eq!(result.get("n2"), Some(1052.0));

    let result: PowerResult = two_proportions_unequal()
        .h(0.1)
        .n1(1000.0)
        .n2(500.0)
        .power(0.8)
        .call()
        .expect("valid design");
    assert_approx_eq!(result.alpha(), 0.3208521, 1e-4);
}
