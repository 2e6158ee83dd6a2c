//! Zero-free-region bounds.
//!
//! Each bound is used at height `2T = x^a`, i.e. it is a function of 
//! `t = a * y` where `y = log x`. The condition function uses the largest 
//! (tightest) of the four via [`max_bound`].
//!
//! | bound                 | value                                            |
//! |-----------------------|--------------------------------------------------|
//! | Vinogradov–Korobov    | `1 / (c t^(2/3) (log t)^(1/3))`                  |
//! | classical             | `1 / (R t)`                                      |
//! | Littlewood            | `log t / (21.333 t)`                             |
//! | refined classical     | `1 / (R(t) t)`, `R(t)` rational in `J(t)`        |

use rug::Float;

use super::constants::Constants;
use super::errors::{ensure_finite, ensure_positive, ConditionError};


#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZeroFreeBound { 
    /// Bellotti.
    VinogradovKorobov, 
    /// Mossinghoff, Trudgian and Yang.
    Classical, 
    /// Yang.
    Littlewood, 
    /// Hiary, Patel and Yang.
    RefinedClassical, 
}

impl ZeroFreeBound { 
    pub const ALL: [ZeroFreeBound; 4] = [
        ZeroFreeBound::VinogradovKorobov, 
        ZeroFreeBound::Littlewood, 
        ZeroFreeBound::RefinedClassical, 
        ZeroFreeBound::Classical, 
    ];

    pub const fn name(self) -> &'static str { 
        match self { 
            ZeroFreeBound::VinogradovKorobov => "vinogradov_korobov", 
            ZeroFreeBound::Classical         => "classical", 
            ZeroFreeBound::Littlewood        => "littlewood", 
            ZeroFreeBound::RefinedClassical  => "refined_classical", 
        }
    }

    /// Evaluates the bound at `(a, y)`.
    ///
    /// # Errors 
    /// - [`ConditionError::NonPositiveArgument`] : `a * y <= 0`, or `log(a * y) <= 0` 
    ///   for the Vinogradov–Korobov bound 
    /// - [`ConditionError::NonFinite`]           : division by zero or overflow
    pub fn eval(self, k: &Constants, a: &Float, y: &Float) -> Result<Float, ConditionError> { 
        let name = self.name(); 
        let t    = Float::with_val(k.prec(), a * y); 
        ensure_positive(name, "a*y", a, y, &t)?;

        let value = match self { 
            ZeroFreeBound::VinogradovKorobov => { 
                let log_t = t.clone().ln(); 
                ensure_positive(name, "log(a*y)", a, y, &log_t)?;
                let denom = k.vk_c.clone() * t.cbrt().square() * log_t.cbrt(); 
                denom.recip()
            }, 
            ZeroFreeBound::Classical => { 
                (k.classical_r.clone() * t).recip()
            }, 
            ZeroFreeBound::Littlewood => { 
                let log_t = t.clone().ln(); 
                log_t / (k.littlewood_denom.clone() * t)
            }, 
            ZeroFreeBound::RefinedClassical => refined_classical(k, t), 
        };

        ensure_finite(name, a, y, value)
    }
}


/// `J(t) = t/6 + log t + log 0.618`
fn refined_j(k: &Constants, t: &Float, log_t: &Float) -> Float { 
    k.refined_j_slope.clone() * t + log_t + &k.refined_j_log
}

/// `1 / (R(t) t)` with 
/// `R(t) = (J + 0.685 + 0.155 log t) / (t (0.04962 - 0.0196 / (J + 1.15)))`
fn refined_classical(k: &Constants, t: Float) -> Float { 
    let log_t = t.clone().ln(); 
    let j     = refined_j(k, &t, &log_t); 

    let numer = j.clone() + &k.refined_offset + k.refined_log_slope.clone() * &log_t; 
    let slope = k.refined_numer.clone() 
        - k.refined_correction.clone() / (j + &k.refined_shift); 
    let r_t   = numer / (t.clone() * slope); 

    (r_t * t).recip()
}


/// `v(a, y)`: the largest of the four zero-free-region bounds.
pub fn max_bound(k: &Constants, a: &Float, y: &Float) -> Result<Float, ConditionError> { 
    let mut best = ZeroFreeBound::ALL[0].eval(k, a, y)?; 
    for bound in &ZeroFreeBound::ALL[1..] { 
        best = best.max(&bound.eval(k, a, y)?); 
    }
    Ok(best)
}
