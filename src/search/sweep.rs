//! Admissible-parameter sweep. 
//!
//! At the reference point `y(a) = (log 2 + switch) / a` the parameter `a` is 
//! scanned upwards from just above `1/m`: 
//!
//! ┌ fine scan   (step `1e-8`) while `R2 <= 0` → `aLower`, the first positive `a`  
//! └ coarse scan (step `1e-6`) while `R2 > 0`  → `aUpper`, the last positive `a`  
//!
//! Iterates are `start + i * step`, computed exactly at the working precision. 
//! Both scans are capped; a fine scan that never turns positive means the 
//! power cannot be handled and is returned as [`SweepOutcome::NoLowerBound`].

use rug::Float;
use tracing::{debug, info, warn};

use crate::condition::constants::Ratio;
use crate::condition::ConditionError;

use super::problem::PowerProblem;


pub const FINE_STEP   : Ratio = Ratio::new(1, 100_000_000); 
pub const COARSE_STEP : Ratio = Ratio::new(1, 1_000_000); 

/// Decimal places of the starting parameter.
const START_SCALE : f64 = 1e8; 


/// `[aLower, aUpper]` with the scan statistics that produced it.
#[derive(Debug, Clone)]
pub struct AdmissibleWindow { 
    pub lower         : Float, 
    pub upper         : Float, 
    /// Fine steps taken from the start to reach `lower`.
    pub fine_steps    : usize, 
    /// Coarse steps from `lower` to `upper`.
    pub coarse_steps  : usize, 
    /// `true` if the coarse scan hit its cap while still positive.
    pub coarse_capped : bool, 
}

impl AdmissibleWindow { 
    /// `n` evenly spaced values from `lower` to `upper`, both included.
    pub fn sample(&self, n: usize) -> Vec<Float> { 
        match n { 
            0 => Vec::new(), 
            1 => vec![self.lower.clone()], 
            _ => { 
                let width = Float::with_val(self.lower.prec(), &self.upper - &self.lower); 
                let denom = (n - 1) as u64; 
                (0..n)
                    .map(|i| self.lower.clone() + width.clone() * (i as u64) / denom)
                    .collect()
            }
        }
    }
}


#[derive(Debug, Clone)]
pub enum SweepOutcome { 
    Window(AdmissibleWindow), 
    /// The fine scan exhausted its cap without R2 turning positive.
    NoLowerBound { start: Float, last: Float, steps: usize }, 
}


/// `round(1/m + 1e-8, 8)` as an exact ratio.
pub fn initial_parameter(power: f64) -> Ratio { 
    let scaled = ((1.0 / power + 1.0 / START_SCALE) * START_SCALE).round(); 
    Ratio::new(scaled as i64, START_SCALE as i64)
}

/// Runs the fine and coarse scans at the reference point of `switch`.
///
/// # Errors 
/// Domain failures of R2 at any scanned parameter. 
pub fn admissible_window(
    problem    : &PowerProblem<'_>, 
    switch     : &Float, 
    max_fine   : usize, 
    max_coarse : usize, 
) -> Result<SweepOutcome, ConditionError> { 
    let k      = problem.constants(); 
    let prec   = k.prec(); 
    let start  = k.ratio(initial_parameter(problem.power().to_f64())); 
    let fine   = k.ratio(FINE_STEP); 
    let coarse = k.ratio(COARSE_STEP); 

    // fine scan for aLower
    let mut found = None; 
    let mut last  = start.clone(); 
    for i in 0..=max_fine { 
        let a = start.clone() + Float::with_val(prec, i as u64) * &fine; 
        if problem.r2_at_switch(&a, switch)? > 0 { 
            found = Some((a, i)); 
            break; 
        }
        last = a; 
    }
    let Some((lower, fine_steps)) = found else { 
        warn!(
            start = start.to_f64(), 
            last  = last.to_f64(), 
            steps = max_fine, 
            "fine scan exhausted without R2 > 0"
        ); 
        return Ok(SweepOutcome::NoLowerBound { start, last, steps: max_fine });
    };
    debug!(a_lower = lower.to_f64(), fine_steps, "lower end of admissible range"); 

    // coarse scan for aUpper
    let mut upper         = lower.clone(); 
    let mut coarse_steps  = 0; 
    let mut coarse_capped = true; 
    for j in 1..=max_coarse { 
        let a = lower.clone() + Float::with_val(prec, j as u64) * &coarse; 
        if problem.r2_at_switch(&a, switch)? > 0 { 
            upper        = a; 
            coarse_steps = j; 
        } else { 
            coarse_capped = false; 
            break; 
        }
    }
    if coarse_capped { 
        warn!(
            a_upper = upper.to_f64(), 
            steps   = max_coarse, 
            "coarse scan hit its cap while R2 > 0; upper end is a lower estimate"
        ); 
    }

    info!(
        a_lower = lower.to_f64(), 
        a_upper = upper.to_f64(), 
        "admissible range of a"
    ); 
    Ok(SweepOutcome::Window(AdmissibleWindow { 
        lower, 
        upper, 
        fine_steps, 
        coarse_steps, 
        coarse_capped 
    }))
}
