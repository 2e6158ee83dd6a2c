//! Condition-function error types.  
//! 
//! ┌ [`ConditionError::NonPositiveArgument`] : log/power of a value <= 0  
//! ├ [`ConditionError::NonFinite`]           : overflow or division by zero  
//! └ [`ConditionError::InvalidRange`]        : Range index outside the tables  
//!
//! Domain failures carry `f64` snapshots of the inputs that produced them. 

use thiserror::Error;


#[derive(Debug, Error)]
pub enum ConditionError { 
    #[error("{function}: argument {argument} must be > 0 at a={a}, y={y}")]
    NonPositiveArgument { function: &'static str, argument: &'static str, a: f64, y: f64 },

    #[error("{function}: non-finite value at a={a}, y={y}")]
    NonFinite { function: &'static str, a: f64, y: f64 },

    #[error("invalid Range index {got}: tables have {len} entries")]
    InvalidRange { got: usize, len: usize },
}


/// Passes `value` through if finite, otherwise reports which function 
/// produced the overflow or division by zero.
#[inline]
pub(crate) fn ensure_finite(
    function: &'static str, 
    a: &rug::Float, 
    y: &rug::Float, 
    value: rug::Float
) -> Result<rug::Float, ConditionError> { 
    if value.is_finite() { 
        Ok(value)
    } else { 
        Err(ConditionError::NonFinite { function, a: a.to_f64(), y: y.to_f64() })
    }
}

/// Rejects `value <= 0` (or NaN) before a logarithm or fractional power is taken.
#[inline]
pub(crate) fn ensure_positive(
    function: &'static str, 
    argument: &'static str, 
    a: &rug::Float, 
    y: &rug::Float, 
    value: &rug::Float
) -> Result<(), ConditionError> { 
    if *value > 0 { 
        Ok(())
    } else { 
        Err(ConditionError::NonPositiveArgument { function, argument, a: a.to_f64(), y: y.to_f64() })
    }
}
