//! tests for search configuration
use consecutive_powers::condition::{ConditionError, RangeSelector};
use consecutive_powers::search::config::{DEFAULT_SAMPLES, DEFAULT_Y0};
use consecutive_powers::search::{ConfigError, SearchCfg};

type TestResult = Result<(), ConfigError>;

#[test]
fn defaults() -> TestResult {
    let cfg = SearchCfg::new(90.0)?;

    assert_eq!(cfg.power(), 90.0);
    assert_eq!(cfg.range(), RangeSelector::X_M_4000);
    assert_eq!(cfg.y0(), DEFAULT_Y0);
    assert_eq!(cfg.samples(), DEFAULT_SAMPLES);
    assert_eq!(cfg.precision(), 336);
    Ok(())
}

#[test]
fn invalid_power() {
    for m in [1.0, 0.5, f64::NAN, f64::INFINITY] { 
        let err = SearchCfg::new(m).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPower { .. }));
    }
}

#[test]
fn y0_below_order() {
    let err = SearchCfg::default().set_y0(3_999.0).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidY0 { order, .. } if order == 4_000.0));
}

#[test]
fn lower_range_admits_smaller_y0() -> TestResult {
    let cfg = SearchCfg::default().set_range(0)?.set_y0(1_500.0)?;

    assert_eq!(cfg.range().order(), 1_000.0);
    assert_eq!(cfg.y0(), 1_500.0);
    Ok(())
}

#[test]
fn range_must_fit_current_y0() -> TestResult {
    let cfg = SearchCfg::default().set_range(0)?.set_y0(1_500.0)?;
    let err = cfg.set_range(1).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidY0 { got, .. } if got == 1_500.0));
    Ok(())
}

#[test]
fn unknown_range() {
    let err = SearchCfg::default().set_range(7).unwrap_err();
    assert!(matches!(err, ConfigError::Condition(ConditionError::InvalidRange { got: 7, .. })));
}

#[test]
fn invalid_caps_and_sizes() {
    let cfg = SearchCfg::default();

    assert!(matches!(cfg.set_samples(0), Err(ConfigError::InvalidSamples { got: 0 })));
    assert!(matches!(cfg.set_precision(10), Err(ConfigError::InvalidPrecision { got: 10, .. })));
    assert!(matches!(
        cfg.set_max_fine_steps(0), 
        Err(ConfigError::InvalidStepCap { name: "max_fine_steps", .. })
    ));
    assert!(matches!(
        cfg.set_max_coarse_steps(0), 
        Err(ConfigError::InvalidStepCap { name: "max_coarse_steps", .. })
    ));
}
