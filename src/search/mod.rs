//! Search for the parameter and the interval of `log x` on which the 
//! condition function stays positive. 
//!
//! ┌ [`switch`]    : zero-free switch points (secant)  
//! ├ [`sweep`]     : admissible range `[aLower, aUpper]` at the reference point  
//! ├ [`minimal_y`] : smallest certified `y` over a sample of that range  
//! └ [`run`]       : the three stages in order  
pub mod config; 
pub mod errors; 
pub mod report; 

pub mod problem; 
pub mod switch; 
pub mod sweep; 
pub mod minimal_y; 

pub use config::SearchCfg; 
pub use errors::{ConfigError, SearchError, SwitchError}; 
pub use report::{Exhaustion, Outcome, SearchReport}; 

use tracing::info;

use crate::condition::Constants;

use problem::PowerProblem;
use switch::SwitchPoints;
use sweep::SweepOutcome;


/// Runs a full certification for `cfg` at its working precision.
pub fn run(cfg: &SearchCfg) -> Result<SearchReport, SearchError> { 
    let k = Constants::new(cfg.precision()); 
    run_with(&k, cfg)
}

/// As [`run`], with constants already materialised.
///
/// # Errors 
/// - [`SearchError::Switch`]    : a switch point could not be located  
/// - [`SearchError::Condition`] : R2 left its domain during a scan  
pub fn run_with(k: &Constants, cfg: &SearchCfg) -> Result<SearchReport, SearchError> { 
    info!(power = cfg.power(), range = cfg.range().index(), y0 = cfg.y0(), "search start"); 

    let switch_points = SwitchPoints::find(k)?; 
    let problem       = PowerProblem::new(k, cfg.range(), cfg.power()); 

    let sweep = sweep::admissible_window(
        &problem, 
        &switch_points.vk_littlewood, 
        cfg.max_fine_steps(), 
        cfg.max_coarse_steps()
    )?; 

    let (window, outcome) = match sweep { 
        SweepOutcome::NoLowerBound { start, last, steps } => (
            None, 
            Outcome::NotPossible(Exhaustion::NoLowerParameter { 
                start : start.to_f64(), 
                last  : last.to_f64(), 
                steps 
            })
        ), 
        SweepOutcome::Window(window) => { 
            let sample  = window.sample(cfg.samples()); 
            let outcome = match minimal_y::minimal_y(&problem, &sample, cfg.y0())? { 
                Some(cert) => Outcome::Certified(cert), 
                None       => Outcome::NotPossible(Exhaustion::NoViableSample { 
                    samples: sample.len() 
                }), 
            };
            (Some(window), outcome)
        }
    };

    Ok(SearchReport { 
        power : cfg.power(), 
        range : cfg.range(), 
        y0    : cfg.y0(), 
        switch_points, 
        window, 
        outcome, 
    })
}
