//! tests for the error term G
use consecutive_powers::condition::error_term::{g, interval_length};
use consecutive_powers::condition::{ConditionError, Constants, RangeSelector};

type TestResult = Result<(), ConditionError>;

#[test]
fn interval_between_squares() {
    let k = Constants::default();
    let h = interval_length(&k.real(2.0), &k.real(100.0));

    let err = (h - 20_i32).abs();
    assert!(err < 1e-90, "error {err}");
}

#[test]
fn ranges_differ_only_through_m() -> TestResult {
    let k     = Constants::default();
    let power = k.real(90.0);
    let a     = k.real(0.0113);
    let y     = k.real(5_000.0);

    let g0 = g(&k, RangeSelector::X_M_1000, &y, &power, &a)?;
    let g1 = g(&k, RangeSelector::X_M_4000, &y, &power, &a)?;

    let expected = k.ratio(RangeSelector::X_M_1000.m_const()) / k.ratio(RangeSelector::X_M_4000.m_const());
    let ratio    = g0 / g1;
    let err      = (ratio / expected - 1_i32).abs();
    assert!(err < 1e-90, "relative error {err}");
    Ok(())
}

#[test]
fn decreases_with_parameter() -> TestResult {
    let k     = Constants::default();
    let power = k.real(90.0);
    let y     = k.real(10_000.0);

    let lo = g(&k, RangeSelector::X_M_4000, &y, &power, &k.real(0.0112))?;
    let hi = g(&k, RangeSelector::X_M_4000, &y, &power, &k.real(0.0120))?;

    assert!(lo > hi);
    Ok(())
}

#[test]
fn invalid_range_index() {
    let err = RangeSelector::new(2).unwrap_err();
    assert!(matches!(err, ConditionError::InvalidRange { got: 2, len: 2 }));
}

#[test]
fn range_rows() -> TestResult {
    assert_eq!(RangeSelector::new(0)?, RangeSelector::X_M_1000);
    assert_eq!(RangeSelector::new(1)?.order(), 4_000.0);
    assert_eq!(RangeSelector::X_M_1000.order(), 1_000.0);
    Ok(())
}

#[test]
fn non_positive_log_x() {
    let k   = Constants::default();
    let err = g(&k, RangeSelector::X_M_4000, &k.real(0.0), &k.real(90.0), &k.real(0.01)).unwrap_err();

    assert!(matches!(err, ConditionError::NonPositiveArgument { function: "G", argument: "log x", .. }));
}
