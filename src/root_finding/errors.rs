//! Root-finding error types.  
//! 
//! ┌ [`RootFindingError`] : common runtime errors  
//! │   ├ non-finite function evaluation  
//! │   └ invalid global parameters (e.g. max_iter) 
//! │
//! └ [`ToleranceError`]   : tolerance-related errors  
//!     ├ invalid input tolerances  
//!     └ invalid or non-finite computed tolerances  
//!
//! Iterates are extended-precision values; errors carry `f64` 
//! snapshots of them so they stay `Copy` and printable.


use thiserror::Error; 


/// Root-finding runtime errors.  
/// 
/// ┌ Non-finite function evaluation  
/// └ Invalid global configuration (e.g. max_iter < 1)
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter   { got: usize },
}


/// Tolerance configuration and evaluation errors.  
/// 
/// ┌ Invalid input tolerances (`abs_fx`, `abs_x`, `rel_x`, `rel_x` bits)  
/// └ Computed tolerance invalid (<= 0 or non-finite)  
#[derive(Debug, Error)]
pub enum ToleranceError { 
    #[error("invalid `abs_fx` tolerance: must be finite and > 0. got {got}")]
    InvalidAbsFx { got: f64 },

    #[error("invalid `abs_x` tolerance: must be finite and >= 0. got {got}")]
    InvalidAbsX  { got: f64 },

    #[error("invalid `rel_x` tolerance: must be finite and >= 0. got {got}")]
    InvalidRelX  { got: f64 },

    #[error("invalid `rel_x` bits: must be <= {max}. got {got}")]
    InvalidRelXBits { got: u32, max: u32 },

    #[error("either `abs_x` or `rel_x` must be > 0. got {abs_x} and {rel_x}")]
    InvalidAbsRelX { abs_x: f64, rel_x: f64}, 

    #[error("invalid computed tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },
}
