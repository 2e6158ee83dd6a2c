//! The error term `G(y, k, a)` built from the Theorem 1.2 constants.
//!
//! With `x = e^y`, `h = k x^(1 - 1/k)` and `(M, p)` taken from the active 
//! [`RangeSelector`] row: 
//!
//! `G = xi M [ (x + h) log(x + h)^p + x log(x)^p ] / (x^a h)`

use rug::Float;
use rug::ops::Pow;

use super::constants::{Constants, RangeSelector};
use super::errors::{ensure_finite, ensure_positive, ConditionError};

const NAME: &str = "G";


/// Length `h = k x^(1 - 1/k)` of the interval `(x, x + h]` between 
/// consecutive k-th powers near `x`.
pub fn interval_length(power: &Float, x: &Float) -> Float { 
    let exponent = Float::with_val(power.prec(), 1) - power.clone().recip(); 
    power.clone() * x.clone().pow(&exponent)
}

/// Evaluates `G(y, k, a)` for the Range row `range`.
///
/// # Errors 
/// - [`ConditionError::NonPositiveArgument`] : `y <= 0` (log of `x <= 1`) 
///   or `k <= 0` 
/// - [`ConditionError::NonFinite`]           : overflow of `x^a h`
pub fn g(
    k     : &Constants, 
    range : RangeSelector, 
    y     : &Float, 
    power : &Float, 
    a     : &Float, 
) -> Result<Float, ConditionError> { 
    ensure_positive(NAME, "log x", a, y, y)?;
    ensure_positive(NAME, "k", a, y, power)?;

    let m = k.ratio(range.m_const()); 
    let p = k.ratio(range.log_power()); 

    let x  = y.clone().exp(); 
    let h  = interval_length(power, &x); 
    let xh = x.clone() + &h; 

    let upper = xh.clone().ln().pow(&p) * xh; 
    let lower = y.clone().pow(&p) * &x; 
    let denom = Float::with_val(k.prec(), a * y).exp() * h; 

    let value = k.xi.clone() * m * (upper + lower) / denom; 
    ensure_finite(NAME, a, y, value)
}
