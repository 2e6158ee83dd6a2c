//! The condition function 
//!
//! `R2(y, k, a, s) = 1 - F1 - F2 - F3 - G` 
//!
//! ┌ `F1 = (a/pi) y x^(a + s - 1)`  
//! ├ `F2 = 2A a^3 y^4 (W^(-v) - W^(s - 1)) / log W`  
//! ├ `F3 = 2B a^2 y^2 x^(-v)`  
//! └ `G`  : [`error_term::g`]
//!
//! with `x = e^y`, `v = v(a, y)` ([`zero_free::max_bound`]) and 
//! `W(a, y) = 2^(8/3) e^(y - 8ya/3) / (ya - log 2)^2`. 
//!
//! Positivity of R2 at `y = log x` certifies a prime in `(x, x + h]`. The 
//! subtracted terms differ by many orders of magnitude near the boundary of 
//! positivity, so everything is evaluated at the precision of [`Constants`].

use rug::Float;
use rug::ops::Pow;

use super::constants::{Constants, RangeSelector};
use super::errors::{ensure_finite, ensure_positive, ConditionError};
use super::error_term;
use super::zero_free;


/// `x = e^y`
pub fn x_of(y: &Float) -> Float { 
    y.clone().exp()
}

/// `W(a, y) = 2^(8/3) e^(y - 8ya/3) / (ya - log 2)^2`
///
/// # Errors 
/// - [`ConditionError::NonFinite`] : `ya = log 2` or overflow 
pub fn w(k: &Constants, a: &Float, y: &Float) -> Result<Float, ConditionError> { 
    let ya  = Float::with_val(k.prec(), a * y); 
    let gap = ya.clone() - &k.ln2; 
    let exponent = y.clone() - ya * &k.eight_thirds; 

    let value = k.w_scale.clone() * exponent.exp() / gap.square(); 
    ensure_finite("W", a, y, value)
}

/// Evaluates `R2(y, k, a, s)`.
///
/// # Arguments 
/// - `y`     : `log x`, must be > 0 
/// - `power` : the power `k = m` of the consecutive-powers interval 
/// - `a`     : the optimisation parameter (mu), must be > 0 
/// - `s`     : the sigma at which the zero-density integral is split 
///             (usually [`Constants::s0`]) 
///
/// # Errors 
/// Domain failures of any constituent function, reported with the name of 
/// the function that failed. 
pub fn condition(
    k     : &Constants, 
    range : RangeSelector, 
    y     : &Float, 
    power : &Float, 
    a     : &Float, 
    s     : &Float, 
) -> Result<Float, ConditionError> { 
    let prec = k.prec(); 
    let v    = zero_free::max_bound(k, a, y)?; 

    // (a/pi) y x^(a + s - 1)
    let shift = a.clone() + s - 1_i32; 
    let f1 = a.clone() / &k.pi * y * (shift * y).exp(); 

    // 2A a^3 y^4 (W^(-v) - W^(s - 1)) / log W
    let w_val = w(k, a, y)?; 
    ensure_positive("W", "W", a, y, &w_val)?; 
    let log_w = w_val.ln(); 
    if log_w.is_zero() { 
        return Err(ConditionError::NonFinite { function: "log W", a: a.to_f64(), y: y.to_f64() });
    }
    let w_neg_v   = (-v.clone() * &log_w).exp(); 
    let w_s_minus = ((s.clone() - 1_i32) * &log_w).exp(); 
    let f2 = k.density_c1.clone() * 2 
        * a.clone().pow(3u32) 
        * y.clone().pow(4u32) 
        * (w_neg_v - w_s_minus) / log_w; 

    // 2B a^2 y^2 x^(-v)
    let f3 = k.density_c2.clone() * 2 
        * a.clone().square() 
        * y.clone().square() 
        * (-(v * y)).exp(); 

    let g = error_term::g(k, range, y, power, a)?; 

    let value = Float::with_val(prec, 1) - f1 - f2 - f3 - g; 
    ensure_finite("R2", a, y, value)
}
