//! tests for the minimal-y search
use consecutive_powers::condition::{ConditionError, Constants, RangeSelector};
use consecutive_powers::search::minimal_y::{descend, minimal_y, Y_STEP};
use consecutive_powers::search::problem::PowerProblem;

type TestResult = Result<(), ConditionError>;

const Y0: f64 = 10_000.0;

#[test]
fn viable_parameter_descends() -> TestResult {
    let k       = Constants::default();
    let problem = PowerProblem::new(&k, RangeSelector::X_M_4000, 90.0);
    let a       = k.real(0.0113);

    let Some(y) = descend(&problem, &a, Y0)? else { 
        panic!("a=0.0113 should be viable for m=90");
    };

    assert!(y >= 4_000.0 && y <= Y0);
    assert_eq!((Y0 - y) % Y_STEP, 0.0);
    assert!(problem.r2(&k.real(y), &a)? > 0);
    Ok(())
}

#[test]
fn parameter_below_one_over_m_is_not_viable() -> TestResult {
    let k       = Constants::default();
    let problem = PowerProblem::new(&k, RangeSelector::X_M_4000, 90.0);
    let a       = k.real(1.0 / 90.0 - 1e-3);

    assert!(descend(&problem, &a, Y0)?.is_none());
    assert!(minimal_y(&problem, &[a], Y0)?.is_none());
    Ok(())
}

#[test]
fn first_sample_wins_ties() -> TestResult {
    let k       = Constants::default();
    let problem = PowerProblem::new(&k, RangeSelector::X_M_4000, 90.0);
    let good    = k.real(0.0113);
    let bad     = k.real(1.0 / 90.0 - 1e-3);

    let cert = minimal_y(&problem, &[good.clone(), good.clone()], Y0)?
        .expect("viable sample");
    assert_eq!(cert.sample_index, 0);

    let cert = minimal_y(&problem, &[bad, good.clone(), good], Y0)?
        .expect("viable sample");
    assert_eq!(cert.sample_index, 1);
    Ok(())
}

#[test]
fn empty_sample() -> TestResult {
    let k       = Constants::default();
    let problem = PowerProblem::new(&k, RangeSelector::X_M_4000, 90.0);

    assert!(minimal_y(&problem, &[], Y0)?.is_none());
    Ok(())
}
