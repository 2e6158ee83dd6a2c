//! Certifies primes between consecutive perfect m-th powers by locating 
//! where an explicit-formula condition function stays positive. 
//!
//! ┌ [`condition`]    : zero-free bounds, error term G and the condition function R2  
//! ├ [`root_finding`] : extended-precision secant method  
//! ├ [`search`]       : switch points, admissible parameter range and minimal `log x`  
//! ├ [`bertrand`]     : ranges already covered by Bertrand intervals  
//! └ [`plot`]         : SVG plots of R2  
pub mod root_finding;
pub mod condition;
pub mod search;
pub mod bertrand;
pub mod plot;
