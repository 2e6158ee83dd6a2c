//! Closed-form pieces of the condition function. 
//!
//! ┌ [`constants`]  : extended-precision constants and the Range tables  
//! ├ [`zero_free`]  : the four zero-free-region bounds and their maximum  
//! ├ [`error_term`] : the table-driven error term G  
//! └ [`r2`]         : the condition function R2 itself 
pub mod constants;
pub mod errors;

pub mod zero_free;
pub mod error_term;
pub mod r2;

pub use constants::{Constants, RangeSelector};
pub use errors::ConditionError;
