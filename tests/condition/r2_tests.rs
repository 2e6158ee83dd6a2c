//! tests for the condition function R2
use consecutive_powers::condition::r2::{condition, w};
use consecutive_powers::condition::{ConditionError, Constants, RangeSelector};

type TestResult = Result<(), ConditionError>;

#[test]
fn bit_identical_on_repeat() -> TestResult {
    let k     = Constants::default();
    let power = k.real(90.0);
    let a     = k.real(0.0113);
    let y     = k.real(6_000.0);

    let first  = condition(&k, RangeSelector::X_M_4000, &y, &power, &a, &k.s0)?;
    let second = condition(&k, RangeSelector::X_M_4000, &y, &power, &a, &k.s0)?;

    assert_eq!(first, second);
    assert_eq!(first.prec(), k.prec());
    Ok(())
}

#[test]
fn fresh_constants_agree() -> TestResult {
    let power = 90.0;
    let (k1, k2) = (Constants::default(), Constants::default());

    let r1 = condition(&k1, RangeSelector::X_M_4000, &k1.real(8e3), &k1.real(power), &k1.real(0.0115), &k1.s0)?;
    let r2 = condition(&k2, RangeSelector::X_M_4000, &k2.real(8e3), &k2.real(power), &k2.real(0.0115), &k2.s0)?;

    assert_eq!(r1, r2);
    Ok(())
}

#[test]
fn negative_below_one_over_m() -> TestResult {
    let k     = Constants::default();
    let power = k.real(90.0);
    // G grows like x^(1/m - a)
    let a     = k.real(1.0 / 90.0 - 1e-3);

    let r = condition(&k, RangeSelector::X_M_4000, &k.real(10_000.0), &power, &a, &k.s0)?;
    assert!(r < 0);
    Ok(())
}

#[test]
fn bounded_above_by_one() -> TestResult {
    let k     = Constants::default();
    let power = k.real(90.0);

    for y in [4_000.0, 7_000.0, 10_000.0] { 
        let r = condition(&k, RangeSelector::X_M_4000, &k.real(y), &power, &k.real(0.0115), &k.s0)?;
        assert!(r < 1);
    }
    Ok(())
}

#[test]
fn w_is_positive() -> TestResult {
    let k = Constants::default();
    let v = w(&k, &k.real(0.0113), &k.real(5_000.0))?;

    assert!(v > 0);
    Ok(())
}

#[test]
fn zero_parameter_is_a_domain_error() {
    let k   = Constants::default();
    let err = condition(
        &k, 
        RangeSelector::X_M_4000, 
        &k.real(5_000.0), 
        &k.real(90.0), 
        &k.real(0.0), 
        &k.s0
    ).unwrap_err();

    assert!(matches!(err, ConditionError::NonPositiveArgument { .. }));
}
