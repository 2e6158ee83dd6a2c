//! end-to-end certification runs
use consecutive_powers::condition::Constants;
use consecutive_powers::search::{self, Exhaustion, Outcome, SearchCfg, SearchError};
use consecutive_powers::search::problem::PowerProblem;

type TestResult = Result<(), SearchError>;

#[test]
fn ninetieth_powers_are_certified() -> TestResult {
    let cfg    = SearchCfg::new(90.0)?;
    let k      = Constants::new(cfg.precision());
    let report = search::run_with(&k, &cfg)?;

    let cert = report.certificate().expect("m=90 should be certified");
    assert!(cert.y_min <= cfg.y0());
    assert!(cert.y_min >= cfg.range().order());
    assert!(cert.a > 1.0 / 90.0);

    let window = report.window.as_ref().expect("window");
    assert!(cert.a >= window.lower && cert.a <= window.upper);

    let problem = PowerProblem::new(&k, cfg.range(), cfg.power());
    assert!(problem.r2(&k.real(cert.y_min), &cert.a)? > 0);

    assert!(report.verdict().starts_with("Condition function >0 for"));
    assert!(report.verdict().ends_with(&format!("with a={:.10}", cert.a.to_f64())));
    Ok(())
}

#[test]
fn thirtieth_powers_are_not_possible() -> TestResult {
    let cfg    = SearchCfg::new(30.0)?.set_max_fine_steps(2_000)?;
    let report = search::run(&cfg)?;

    assert!(!report.is_certified());
    assert!(report.window.is_none());
    assert!(report.final_parameter().is_none());
    assert!(matches!(
        report.outcome, 
        Outcome::NotPossible(Exhaustion::NoLowerParameter { steps: 2_000, .. })
    ));
    assert_eq!(report.verdict(), "m=30 is not possible");
    Ok(())
}
