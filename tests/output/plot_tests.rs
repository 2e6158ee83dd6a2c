//! tests for SVG plot output
use std::fs;

use consecutive_powers::condition::{Constants, RangeSelector};
use consecutive_powers::plot::{render_report, render_series, sample_condition, PlotError};
use consecutive_powers::search::minimal_y::Certificate;
use consecutive_powers::search::problem::PowerProblem;
use consecutive_powers::search::switch::SwitchPoints;
use consecutive_powers::search::{Exhaustion, Outcome, SearchReport};

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn report(k: &Constants, outcome: Outcome) -> SearchReport { 
    SearchReport { 
        power         : 90.0, 
        range         : RangeSelector::X_M_4000, 
        y0            : 10_000.0, 
        switch_points : SwitchPoints { 
            vk_littlewood      : k.real(4.7e5), 
            littlewood_refined : k.real(4.8), 
        }, 
        window        : None, 
        outcome, 
    }
}

#[test]
fn samples_span_interval() -> TestResult {
    let k       = Constants::default();
    let problem = PowerProblem::new(&k, RangeSelector::X_M_4000, 90.0);

    let series = sample_condition(&problem, &k.real(0.0113), 4_000.0, 5_000.0, 11)?;
    assert_eq!(series.len(), 11);
    assert_eq!(series[0].0, 4_000.0);
    assert_eq!(series[10].0, 5_000.0);
    assert!(series.iter().all(|p| p.1.is_finite()));
    Ok(())
}

#[test]
fn invalid_interval() {
    let k       = Constants::default();
    let problem = PowerProblem::new(&k, RangeSelector::X_M_4000, 90.0);

    let err = sample_condition(&problem, &k.real(0.0113), 5_000.0, 4_000.0, 10).unwrap_err();
    assert!(matches!(err, PlotError::InvalidInterval { points: 10, .. }));

    let err = sample_condition(&problem, &k.real(0.0113), 4_000.0, 5_000.0, 1).unwrap_err();
    assert!(matches!(err, PlotError::InvalidInterval { points: 1, .. }));
}

#[test]
fn writes_svg() -> TestResult {
    let dir  = tempfile::tempdir()?;
    let path = dir.path().join("line.svg");

    render_series(&path, "line", &[(0.0, 0.0), (1.0, 0.5), (2.0, 1.0)])?;

    let svg = fs::read_to_string(&path)?;
    assert!(svg.starts_with("<svg"));
    Ok(())
}

#[test]
fn report_plots_both_windows() -> TestResult {
    let k    = Constants::default();
    let dir  = tempfile::tempdir()?;
    let cert = Certificate { a: k.real(0.0113), y_min: 6_000.0, sample_index: 0 };

    let written = render_report(dir.path(), &k, &report(&k, Outcome::Certified(cert)), 5)?;

    assert_eq!(written.len(), 2);
    for path in &written { 
        assert!(fs::read_to_string(path)?.starts_with("<svg"));
    }
    Ok(())
}

#[test]
fn nothing_to_plot_without_parameter() -> TestResult {
    let k   = Constants::default();
    let dir = tempfile::tempdir()?;
    let out = report(&k, Outcome::NotPossible(Exhaustion::NoLowerParameter { start: 0.0, last: 0.0, steps: 1 }));

    let written = render_report(dir.path(), &k, &out, 5)?;
    assert!(written.is_empty());
    Ok(())
}
