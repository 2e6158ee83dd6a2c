//! Defines the [`RootFindingReport`] struct returned by all 
//! root-finding algorithms. 

use rug::Float;

/// Reasons a root-finding algorithm may terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)] 
pub enum TerminationReason { 
    ToleranceReached, 
    IterationLimit,
}


/// Which tolerance condition was satisfied (or not).
/// - [`ToleranceSatisfied::AbsFxReached`]    
///     - |f(x)| <= tol
/// - [`ToleranceSatisfied::StepSizeReached`]
///     - |x_n - x_{n - 1}| <= tol 
/// - [`ToleranceSatisfied::ToleranceNotReached`] 
///     - Tolerance not reached, usually with [`TerminationReason::IterationLimit`] 
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSatisfied { 
    AbsFxReached, 
    StepSizeReached, 
    ToleranceNotReached
}


/// Last set of points used in the update formula. 
/// - `x` = previous iterates used to compute the root (1 or 2 entries) 
#[derive(Debug, Clone)]
pub struct Stencil { 
    x: Vec<Float>, 
}
impl Stencil { 
    pub fn stencil(&self) -> &[Float] { 
        &self.x
    }
    pub fn singleton(x: &Float) -> Self { 
        Stencil { x: vec![x.clone()] }
    }
    pub fn doubleton(x1: &Float, x2: &Float) -> Self { 
        Stencil { x: vec![x1.clone(), x2.clone()] }
    }
}


/// Final report returned by all root-finding algorithms.  
/// 
/// [`RootFindingReport`]
/// - `root`                : best root estimate  
/// - `f_root`              : function value at `root`  
/// - `iterations`          : total iterations  
/// - `evaluations`         : total function evaluations  
/// - `termination_reason`  : why the solver stopped  ([`TerminationReason`])  
/// - `tolerance_satisfied` : which tolerance was met ([`ToleranceSatisfied`]) 
/// - `stencil`             : last set of points used in update formula    
/// - `algorithm_name`      : algorithm name (e.g. `"secant"`)  
#[derive(Debug, Clone)] 
pub struct RootFindingReport {
    pub root                : Float, 
    pub f_root              : Float, 
    pub iterations          : usize, 
    pub evaluations         : usize, 
    pub termination_reason  : TerminationReason, 
    pub tolerance_satisfied : ToleranceSatisfied, 
    pub stencil             : Stencil, 
    pub algorithm_name      : &'static str, 
}

impl RootFindingReport { 
    /// `true` when a tolerance, not the iteration cap, stopped the solver.
    pub fn converged(&self) -> bool { 
        self.termination_reason == TerminationReason::ToleranceReached
    }
}
