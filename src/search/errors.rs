//! Search error types.  
//! 
//! ┌ [`ConfigError`] : invalid [`SearchCfg`](super::config::SearchCfg) values  
//! ├ [`SwitchError`] : a zero-free switch point could not be located  
//! └ [`SearchError`] : everything a full run can fail with  
//!
//! Failing to find an admissible parameter is *not* an error; it is 
//! reported as [`Outcome::NotPossible`](super::report::Outcome::NotPossible).

use thiserror::Error;

use crate::condition::ConditionError;
use crate::root_finding::errors::{RootFindingError, ToleranceError};
use crate::root_finding::secant::SecantError;


#[derive(Debug, Error)]
pub enum ConfigError { 
    #[error("invalid power m: must be finite and > 1. got {got}")]
    InvalidPower { got: f64 },

    #[error("invalid y0: must be finite and >= the Range order {order}. got {got}")]
    InvalidY0 { got: f64, order: f64 },

    #[error("invalid sample count: must be >= 1. got {got}")]
    InvalidSamples { got: usize },

    #[error("invalid precision: must be in [{min}, {max}] bits. got {got}")]
    InvalidPrecision { got: u32, min: u32, max: u32 },

    #[error("invalid step cap `{name}`: must be >= 1. got {got}")]
    InvalidStepCap { name: &'static str, got: usize },

    #[error(transparent)]
    Condition(#[from] ConditionError),
}


#[derive(Debug, Error)]
pub enum SwitchError { 
    #[error(transparent)]
    Secant(#[from] SecantError),

    #[error(transparent)]
    Condition(#[from] ConditionError),

    #[error("no switch point between {upper} and {lower} from guess {guess}: \
             secant stopped after {iterations} iterations without convergence")]
    NoConvergence { 
        upper      : &'static str, 
        lower      : &'static str, 
        guess      : f64, 
        iterations : usize 
    },

    #[error("switch point between {upper} and {lower} outside log(T) > 0: got {got}")]
    NonPositiveRoot { upper: &'static str, lower: &'static str, got: f64 },
}

impl From<RootFindingError> for SwitchError { 
    fn from(e: RootFindingError) -> Self { SwitchError::Secant(e.into()) }
}

impl From<ToleranceError> for SwitchError { 
    fn from(e: ToleranceError) -> Self { SwitchError::Secant(e.into()) }
}


#[derive(Debug, Error)]
pub enum SearchError { 
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Switch(#[from] SwitchError),

    #[error(transparent)]
    Condition(#[from] ConditionError),
}
