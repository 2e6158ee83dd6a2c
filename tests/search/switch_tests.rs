//! tests for the zero-free switch points
use consecutive_powers::condition::zero_free::ZeroFreeBound;
use consecutive_powers::condition::{ConditionError, Constants};
use consecutive_powers::search::config::VK_LITTLEWOOD_GUESS;
use consecutive_powers::search::switch::{find_switch, log_x_at_switch, SwitchPoints};
use consecutive_powers::search::SwitchError;

type TestResult = Result<(), SwitchError>;

#[test]
fn switch_points_in_known_ranges() -> TestResult {
    let k  = Constants::default();
    let sp = SwitchPoints::find(&k)?;

    let vk = sp.vk_littlewood.to_f64();
    let lr = sp.littlewood_refined.to_f64();
    assert!((4e5..=7e5).contains(&vk), "vk/littlewood at {vk}");
    assert!((1.0..=10.0).contains(&lr), "littlewood/refined at {lr}");
    Ok(())
}

#[test]
fn bounds_agree_at_switch() -> TestResult {
    let k   = Constants::default();
    let one = k.real(1.0);
    let t   = find_switch(
        &k, 
        ZeroFreeBound::VinogradovKorobov, 
        ZeroFreeBound::Littlewood, 
        VK_LITTLEWOOD_GUESS
    )?;

    let vk = ZeroFreeBound::VinogradovKorobov.eval(&k, &one, &t)?;
    let lw = ZeroFreeBound::Littlewood.eval(&k, &one, &t)?;

    let rel = ((vk.clone() - &lw) / vk).abs();
    assert!(rel < 1e-60, "relative gap {rel}");
    Ok(())
}

#[test]
fn vk_wins_above_switch() -> TestResult {
    let k   = Constants::default();
    let one = k.real(1.0);
    let t   = find_switch(
        &k, 
        ZeroFreeBound::VinogradovKorobov, 
        ZeroFreeBound::Littlewood, 
        VK_LITTLEWOOD_GUESS
    )?;

    let above = t.clone() + 1_000;
    let below = t - 1_000;
    assert!(
        ZeroFreeBound::VinogradovKorobov.eval(&k, &one, &above)? 
            > ZeroFreeBound::Littlewood.eval(&k, &one, &above)?
    );
    assert!(
        ZeroFreeBound::Littlewood.eval(&k, &one, &below)? 
            > ZeroFreeBound::VinogradovKorobov.eval(&k, &one, &below)?
    );
    Ok(())
}

#[test]
fn domain_error_surfaces() {
    let k   = Constants::default();
    let err = find_switch(&k, ZeroFreeBound::Littlewood, ZeroFreeBound::Classical, -5.0).unwrap_err();

    assert!(matches!(err, SwitchError::Condition(ConditionError::NonPositiveArgument { .. })));
}

#[test]
fn reference_log_x() {
    let k = Constants::default();
    let y = log_x_at_switch(&k, &k.real(0.5), &k.real(10.0));

    let expected = k.ln2.clone() * 2_i32 + 20_i32;
    assert!((y - expected).abs() < 1e-90);
}
