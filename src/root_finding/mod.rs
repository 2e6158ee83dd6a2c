// common helpers 
pub mod algorithms; 
pub mod report; 
pub mod errors; 
pub(crate) mod config;
pub(crate) mod tolerances; 

// algorithms 
pub mod secant;
