use rug::Float;
use rug::ops::Pow;

use super::algorithms::{Algorithm, GLOBAL_MAX_ITER_FALLBACK}; 
use super::report::{RootFindingReport, TerminationReason, ToleranceSatisfied, Stencil}; 
use super::tolerances::DynamicTolerance; 
use super::errors::{RootFindingError, ToleranceError}; 
use super::config::{CommonCfg, impl_common_cfg}; 
use thiserror::Error; 


#[derive(Debug, Error)] 
pub enum SecantError{ 
    #[error(transparent)] 
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid initial guesses: x0 and x1 must be finite and distinct. got {x0} and {x1}")]
    InvalidGuess { x0: f64, x1: f64 }, 

    #[error("degenerate secant: |fx2 - fx1| near 0")]
    DegenerateSecantStep 
}


/// Secant configuration 
///
/// # Fields 
/// - `common` : [`CommonCfg`] with tolerances and optional `max_iter`.
///
/// # Construction 
/// - Use [`SecantCfg::new`] then optional setters. 
///
/// # Defaults 
/// - If `common.max_iter` is `None`, [`secant`] resolves it using 
///   [`Algorithm::default_max_iter`], or [`GLOBAL_MAX_ITER_FALLBACK`] 
///   if unavailable. 
#[derive(Debug, Copy, Clone)]
pub struct SecantCfg { 
    common: CommonCfg, 
}
impl SecantCfg { 
    pub fn new() -> Self { 
        Self { 
            common: CommonCfg::new()
        }
    }

    pub fn abs_fx(&self)   -> f64 { self.common.abs_fx() }
    pub fn abs_x(&self)    -> f64 { self.common.abs_x() }
    pub fn rel_x(&self)    -> f64 { self.common.rel_x() }
    pub fn max_iter(&self) -> Option<usize> { self.common.max_iter() }
}
impl Default for SecantCfg { 
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(SecantCfg);


/// Relative machine epsilon `2^(1 - prec)` for a working precision in bits.
#[inline]
fn machine_epsilon(prec: u32) -> Float { 
    Float::with_val(prec, 2).pow(1 - prec as i32)
}


/// Calculates the secant x-intercept for the line 
/// connecting `(x1, fx1)` and `(x2, fx2)` 
///
/// # Arguments 
/// - `(x1, fx1)` : secant endpoint 1 and function value
/// - `(x2, fx2)` : secant endpoint 2 and function value 
///
/// # Returns 
/// - `Ok(x_secant)` if denominator `fx2 - fx1` is well-scaled 
/// - `Err(DegenerateSecantStep)` if denominator is too small 
///   relative to the working precision. 
#[inline]
pub(crate) fn calculate_secant_x_intercept(
    (x1, fx1): (&Float, &Float), 
    (x2, fx2): (&Float, &Float), 
)-> Result<Float, SecantError> {
    let prec   = x1.prec().max(x2.prec());
    let denom  = Float::with_val(prec, fx2 - fx1);
    let scale  = Float::with_val(prec, fx1.abs_ref())
        .max(&Float::with_val(prec, fx2.abs_ref()))
        .max(&Float::with_val(prec, 1));
    let thresh = scale * machine_epsilon(prec);

    if denom.is_zero() || Float::with_val(prec, denom.abs_ref()) <= thresh {
        return Err(SecantError::DegenerateSecantStep );
    } 

    let numer = Float::with_val(prec, x1 * fx2) - Float::with_val(prec, x2 * fx1);
    Ok(numer / denom)
}


/// Calculates the secant x-intersection point for the line 
/// connecting `(x1, fx1)` and `(x2, fx2)` and its function eval 
///
/// # Returns 
/// - `Ok(x_next, f(x_next))`     : if denominator `fx2 - fx1` is well-scaled 
/// - `Err(DegenerateSecantStep)` : if denominator is too small 
///     - *Handled internally. Replaces with a bisection step.*   
#[inline] 
fn next_sol_estimate<F> (
    (x1, fx1): (&Float, &Float), 
    (x2, fx2): (&Float, &Float), 
    eval: &mut F 
) -> Result<(Float, Float), SecantError> 
where F: FnMut(&Float) -> Result<Float, SecantError> { 
    let x_next = match calculate_secant_x_intercept((x1, fx1), (x2, fx2)) { 
        Ok(x)                                  => x, 
        // default to bisection  
        Err(SecantError::DegenerateSecantStep) => {
            let half = Float::with_val(x1.prec(), x1 - x2) * 0.5; 
            x1.clone() - half
        },
        Err(e)                                 => return Err(e),
    };
    let f_next  = eval(&x_next)?;

    Ok((x_next, f_next))
}


/// Calculates the step tolerance for the [`secant`] algorithm 
/// using the two points (stencil) used in the update formula.  
///
/// # Returns 
/// - `Ok(step_tol)` : if tolerance finite and > 0 
/// - `Err(ToleranceError::InvalidTolerance)` if tolerance non-finite or <= 0
#[inline]
fn step_tolerance(
    x1: &Float, 
    x2: &Float,
    abs_x: f64, 
    rel_x: f64, 
) -> Result<f64, ToleranceError> {
    Algorithm::Secant.calculate_tolerance(
        &DynamicTolerance::StepTol { x: &[x1, x2] }, 
        abs_x, 
        rel_x
    )
}


/// Finds a root of a function using the 
/// [secant method](https://en.wikipedia.org/wiki/Secant_method) 
/// in extended precision.
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `x0`   : First initial guess.  Must be finite and not equal to `x1`
/// - `x1`   : Second initial guess. Must be finite and not equal to `x0`
/// - `cfg`  : [`SecantCfg`] (tolerances, optional `max_iter`)
///
/// Iterates are carried at the larger precision of `x0` and `x1`. 
///
/// # Returns
/// [`RootFindingReport`] with 
/// - `root`                : approximate root
/// - `f_root`              : function value at `root`
/// - `iterations`          : number of iterations performed
/// - `evaluations`         : total function evaluations 
/// - `termination_reason`  : why it stopped
/// - `tolerance_satisfied` : which tolerance triggered
/// - `stencil`             : previous iterates used to form the step
/// - `algorithm_name`      : "secant"
///
/// # Errors
/// - [`SecantError::InvalidGuess`]             : `x0` or `x1` is NaN/inf or equal
/// 
/// * Propagated via [`SecantError::RootFinding`]
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
/// - [`RootFindingError::InvalidMaxIter`]      : `max_iter` = 0
/// 
/// * Propagated via [`SecantError::Tolerance`] 
/// - [`ToleranceError::InvalidTolerance`]      : computed step tolerance <= 0 or inf
///
/// # Behavior
/// - Update:
///     - secant step: 
///       x_{k+1} = x_k - f(x_k) * (x_k - x_{k-1}) / (f(x_k) - f(x_{k-1}))
///     - denominator collapse (f(x_k) ~ f(x_{k-1})) triggers a safeguard:
///       fall back to a half-step between x_k and x_{k-1}
/// - Tolerances: 
///     - if |x_{k+1} - x_k| <= tolerance, return with [`ToleranceSatisfied::StepSizeReached`]
///     - if |f(x_k)| <= abs_fx at any stage, [`ToleranceSatisfied::AbsFxReached`]
///
/// # Warning 
/// - Poor initial guesses may lead to divergence or extremely slow convergence.
///   Callers that need a root must check [`RootFindingReport::converged`].
pub fn secant<F> ( 
    mut func: F, 
    x0: &Float, 
    x1: &Float,
    cfg: SecantCfg
) -> Result<RootFindingReport, SecantError> 
where F: FnMut(&Float) -> Float { 
    
    if !(x0.is_finite() && x1.is_finite()) || x0 == x1 { 
        return Err(SecantError::InvalidGuess { x0: x0.to_f64(), x1: x1.to_f64() });
    }

    let prec       = x0.prec().max(x1.prec()); 
    let x0         = Float::with_val(prec, x0); 
    let x1         = Float::with_val(prec, x1); 
    let abs_x      = cfg.common.abs_x(); 
    let rel_x      = cfg.common.rel_x(); 
    let abs_fx     = cfg.common.abs_fx(); 
    let max_iter   = cfg.common.max_iter(); 
    let algorithm  = Algorithm::Secant;
    let algo_name  = algorithm.algorithm_name(); 

    let num_iter = match max_iter {
        // already validated via building config; redundant guard
        Some(0) => return Err(RootFindingError::InvalidMaxIter { got: 0 }.into()), 

        Some(v) => v, 
        None    => algorithm.default_max_iter().unwrap_or(GLOBAL_MAX_ITER_FALLBACK),
    };

    // track function evaluations 
    let mut evals = 0; 

    // wraps func, increments evals, enforces finiteness
    let mut eval = |x: &Float| -> Result<Float, SecantError> { 
        let fx = { evals += 1; func(x) }; 
        if !fx.is_finite() { 
            return Err(RootFindingError::NonFiniteEvaluation { 
                x  : x.to_f64(), 
                fx : fx.to_f64() 
            }.into()) 
        } 

        Ok(fx) 
    };

    let finish = |root: Float, f_root: Float, iterations: usize, evaluations: usize, 
                  satisfied: ToleranceSatisfied, stencil: Stencil| { 
        let termination_reason = match satisfied { 
            ToleranceSatisfied::ToleranceNotReached => TerminationReason::IterationLimit, 
            _                                       => TerminationReason::ToleranceReached, 
        };
        RootFindingReport { 
            root, 
            f_root, 
            iterations, 
            evaluations, 
            termination_reason, 
            tolerance_satisfied : satisfied, 
            stencil, 
            algorithm_name      : algo_name, 
        }
    };

    // either seed may already be a root
    let fx0 = eval(&x0)?; 
    if fx0.clone().abs() <= abs_fx { 
        let stencil = Stencil::singleton(&x0); 
        return Ok(finish(x0, fx0, 0, evals, ToleranceSatisfied::AbsFxReached, stencil));
    }
    let fx1 = eval(&x1)?; 
    if fx1.clone().abs() <= abs_fx { 
        let stencil = Stencil::singleton(&x1); 
        return Ok(finish(x1, fx1, 0, evals, ToleranceSatisfied::AbsFxReached, stencil));
    }

    // seeds already within the step tolerance 
    let step_tol = step_tolerance(&x0, &x1, abs_x, rel_x)?; 
    if Float::with_val(prec, &x1 - &x0).abs() <= step_tol { 
        let stencil = Stencil::doubleton(&x0, &x1); 
        return Ok(finish(x1, fx1, 0, evals, ToleranceSatisfied::StepSizeReached, stencil));
    }

    let (mut x_prev, mut f_prev) = (x0, fx0); 
    let (mut x_curr, mut f_curr) = (x1, fx1); 
    for iter in 1..=num_iter { 
        let (x_next, f_next) = next_sol_estimate(
            (&x_curr, &f_curr), (&x_prev, &f_prev), 
            &mut eval
        )?;

        let satisfied = if f_next.clone().abs() <= abs_fx { 
            Some(ToleranceSatisfied::AbsFxReached)
        } else { 
            let step_tol = step_tolerance(&x_next, &x_curr, abs_x, rel_x)?;
            let step     = Float::with_val(prec, &x_next - &x_curr).abs(); 
            (step <= step_tol).then_some(ToleranceSatisfied::StepSizeReached)
        };
        if let Some(satisfied) = satisfied { 
            let stencil = Stencil::doubleton(&x_curr, &x_prev); 
            return Ok(finish(x_next, f_next, iter, evals, satisfied, stencil));
        }

        x_prev = std::mem::replace(&mut x_curr, x_next); 
        f_prev = std::mem::replace(&mut f_curr, f_next); 
    }

    let stencil = Stencil::doubleton(&x_curr, &x_prev); 
    Ok(finish(x_curr, f_curr, num_iter, evals, ToleranceSatisfied::ToleranceNotReached, stencil))
}
