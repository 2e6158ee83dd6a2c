//! Smallest `y` certified by a sample of parameters. 
//!
//! For each sampled `a` (in order) with `R2(y0) > 0` and `R2(order) > 0`, 
//! `y` is stepped down from `y0` by [`Y_STEP`] while the next value stays 
//! `>= order` and keeps `R2 > 0`. The best `y` over the sample is kept; it is 
//! only replaced on strict improvement, so the first parameter reaching a 
//! given `y` wins.

use rug::Float;
use tracing::{debug, info};

use crate::condition::ConditionError;

use super::problem::PowerProblem;


pub const Y_STEP: f64 = 100.0; 


/// Smallest certified `y` and the parameter that achieved it.
#[derive(Debug, Clone)]
pub struct Certificate { 
    pub a            : Float, 
    pub y_min        : f64, 
    /// Position of `a` in the sample.
    pub sample_index : usize, 
}


/// Steps `y` down from `y0` for a single parameter.
///
/// Returns `None` if `a` is not viable at `y0` or at the Range order.
pub fn descend(
    problem : &PowerProblem<'_>, 
    a       : &Float, 
    y0      : f64, 
) -> Result<Option<f64>, ConditionError> { 
    let k     = problem.constants(); 
    let order = problem.range().order(); 

    if problem.r2(&k.real(y0), a)? <= 0 || problem.r2(&k.real(order), a)? <= 0 { 
        return Ok(None);
    }

    let max_steps = ((y0 - order) / Y_STEP).floor().max(0.0) as usize; 
    let mut y = y0; 
    for _ in 0..max_steps { 
        let next = y - Y_STEP; 
        if next < order || problem.r2(&k.real(next), a)? <= 0 { 
            break;
        }
        y = next; 
    }
    Ok(Some(y))
}

/// Greedy best-of-sample search for the smallest certified `y <= y0`.
///
/// # Returns 
/// - `Ok(Some(certificate))` : at least one sampled `a` is viable 
/// - `Ok(None)`              : no sampled `a` keeps R2 positive at `y0` and `order` 
pub fn minimal_y(
    problem : &PowerProblem<'_>, 
    sample  : &[Float], 
    y0      : f64, 
) -> Result<Option<Certificate>, ConditionError> { 
    let mut best: Option<Certificate> = None; 

    for (idx, a) in sample.iter().enumerate() { 
        let Some(y) = descend(problem, a, y0)? else { 
            debug!(a = a.to_f64(), "not viable"); 
            continue; 
        };

        let improves = best.as_ref().map_or(true, |b| b.y_min > y); 
        if improves { 
            info!(a = a.to_f64(), y, "smaller certified y"); 
            best = Some(Certificate { a: a.clone(), y_min: y, sample_index: idx }); 
        }
    }

    Ok(best)
}
