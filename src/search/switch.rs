//! Switch points between zero-free regions. 
//!
//! A switch point is the `log T` at which one zero-free-region bound 
//! overtakes another as the larger (better) one. Both are found at `a = 1` 
//! with the secant method seeded at `(guess, guess + 1/4)`.
//!
//! ┌ `vk_littlewood`      : Vinogradov–Korobov beats Littlewood above it  
//! └ `littlewood_refined` : Littlewood beats refined classical above it  

use rug::Float;
use rug::float::Special;
use tracing::{debug, info};

use crate::condition::zero_free::ZeroFreeBound;
use crate::condition::{ConditionError, Constants};
use crate::root_finding::config::MAX_REL_X_BITS;
use crate::root_finding::secant::{secant, SecantCfg};

use super::config::{LITTLEWOOD_REFINED_GUESS, VK_LITTLEWOOD_GUESS};
use super::errors::SwitchError;


/// Offset of the second secant seed from the first.
const SECOND_SEED_OFFSET : f64   = 0.25; 
const SWITCH_MAX_ITER    : usize = 200; 


/// Relative step tolerance in bits, three quarters of the working precision.
fn switch_rel_bits(prec: u32) -> u32 { 
    (prec / 4 * 3).min(MAX_REL_X_BITS)
}


#[derive(Debug, Clone)]
pub struct SwitchPoints { 
    pub vk_littlewood      : Float, 
    pub littlewood_refined : Float, 
}

impl SwitchPoints { 
    /// Locates both switch points from their standard seeds.
    pub fn find(k: &Constants) -> Result<Self, SwitchError> { 
        let vk_littlewood = find_switch(
            k, 
            ZeroFreeBound::VinogradovKorobov, 
            ZeroFreeBound::Littlewood, 
            VK_LITTLEWOOD_GUESS
        )?; 
        let littlewood_refined = find_switch(
            k, 
            ZeroFreeBound::Littlewood, 
            ZeroFreeBound::RefinedClassical, 
            LITTLEWOOD_REFINED_GUESS
        )?; 

        Ok(Self { vk_littlewood, littlewood_refined })
    }
}


/// Finds `log T` where `upper(1, log T) = lower(1, log T)`.
///
/// # Errors 
/// - [`SwitchError::Condition`]       : a bound left its domain during the iteration 
/// - [`SwitchError::Secant`]          : the secant iteration failed outright 
/// - [`SwitchError::NoConvergence`]   : iteration limit reached 
/// - [`SwitchError::NonPositiveRoot`] : converged to `log T <= 0`
pub fn find_switch(
    k     : &Constants, 
    upper : ZeroFreeBound, 
    lower : ZeroFreeBound, 
    guess : f64, 
) -> Result<Float, SwitchError> { 
    let prec = k.prec(); 
    let cfg  = SecantCfg::new()
        .set_abs_fx(f64::MIN_POSITIVE)?
        .set_rel_x_bits(switch_rel_bits(prec))?
        .set_max_iter(SWITCH_MAX_ITER)?; 

    let one = k.real(1.0); 
    let x0  = k.real(guess); 
    let x1  = k.real(guess) + SECOND_SEED_OFFSET; 

    // first domain failure seen inside the iteration, if any
    let mut failure: Option<ConditionError> = None; 
    let result = secant(
        |t: &Float| match (upper.eval(k, &one, t), lower.eval(k, &one, t)) { 
            (Ok(u), Ok(l)) => u - l, 
            (Err(e), _) | (_, Err(e)) => { 
                failure.get_or_insert(e); 
                Float::with_val(prec, Special::Nan)
            }
        }, 
        &x0, 
        &x1, 
        cfg
    ); 

    let report = match result { 
        Ok(report) => report, 
        Err(e)     => return Err(match failure.take() { 
            Some(domain) => domain.into(), 
            None         => e.into(), 
        }), 
    };

    debug!(
        upper      = upper.name(), 
        lower      = lower.name(), 
        iterations = report.iterations, 
        evals      = report.evaluations, 
        "secant finished"
    ); 

    if !report.converged() { 
        return Err(SwitchError::NoConvergence { 
            upper      : upper.name(), 
            lower      : lower.name(), 
            guess, 
            iterations : report.iterations 
        });
    }
    if report.root <= 0 { 
        return Err(SwitchError::NonPositiveRoot { 
            upper : upper.name(), 
            lower : lower.name(), 
            got   : report.root.to_f64() 
        });
    }

    info!(
        upper = upper.name(), 
        lower = lower.name(), 
        log_t = report.root.to_f64(), 
        "switch point located"
    ); 
    Ok(report.root)
}


/// `y = log x` at which the zero-free region is used at height `log T = switch`, 
/// from `2T = x^a`: `y = (log 2 + switch) / a`.
pub fn log_x_at_switch(k: &Constants, a: &Float, switch: &Float) -> Float { 
    (k.ln2.clone() + switch) / a
}
