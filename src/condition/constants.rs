//! Constants of the explicit-formula bound. 
//!
//! Literals are kept as exact ratios ([`Ratio`]) and materialised once per 
//! working precision by [`Constants::new`], so every evaluation at a given 
//! precision sees identical values.
//!
//! ┌ zero-free regions  : `c` (Vinogradov–Korobov), `R` (classical), Littlewood, refined classical  
//! ├ zero density       : `A = C1` (sigma < 1), `B = C2` (sigma >= 0.6)  
//! ├ explicit formula   : split point `s0 = 3/5`, `xi = 2`  
//! └ Range tables       : `M`, `1 - omega`, `x_M` indexed by [`RangeSelector`] 

use rug::Float;
use rug::float::Constant;

use super::errors::ConditionError;


/// Exact rational literal `num / den`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Ratio { 
    num: i64, 
    den: i64, 
}
impl Ratio { 
    pub const fn new(num: i64, den: i64) -> Self { 
        Self { num, den }
    }

    /// Value at `prec` bits, rounded once.
    pub fn to_float(self, prec: u32) -> Float { 
        Float::with_val(prec, self.num) / self.den
    }

    pub fn to_f64(self) -> f64 { 
        self.num as f64 / self.den as f64
    }
}


/// Working precision in bits; ~100 significant decimal digits.
pub const DEFAULT_PRECISION: u32 = 336;

// zero-free regions
pub const VINOGRADOV_KOROBOV_C : Ratio = Ratio::new(53_989, 1_000); 
pub const CLASSICAL_R          : Ratio = Ratio::new(5_558_691, 1_000_000); 
pub const LITTLEWOOD_DENOM     : Ratio = Ratio::new(21_333, 1_000); 

// refined classical region, J(a, y) and R(t)
pub const REFINED_J_SLOPE      : Ratio = Ratio::new(1, 6); 
pub const REFINED_J_LOG_ARG    : Ratio = Ratio::new(618, 1_000); 
pub const REFINED_OFFSET       : Ratio = Ratio::new(685, 1_000); 
pub const REFINED_LOG_SLOPE    : Ratio = Ratio::new(155, 1_000); 
pub const REFINED_NUMER        : Ratio = Ratio::new(4_962, 100_000); 
pub const REFINED_CORRECTION   : Ratio = Ratio::new(196, 10_000); 
pub const REFINED_SHIFT        : Ratio = Ratio::new(115, 100); 

// zero density
pub const DENSITY_C1           : Ratio = Ratio::new(17_418, 1_000); 
pub const DENSITY_C2           : Ratio = Ratio::new(5_272, 1_000); 

/// Height to which the Riemann hypothesis has been verified.
pub const RH_VERIFIED_HEIGHT   : u64   = 3_000_175_332_800; 

/// The sigma at which the zero-density integral is split.
pub const SPLIT_SIGMA          : Ratio = Ratio::new(3, 5); 
pub const XI                   : Ratio = Ratio::new(2, 1); 

/// `M` for `log x > x_M`, one entry per Range.
pub const M_TABLE     : [Ratio; 2] = [Ratio::new(6_391, 1_000), Ratio::new(5_462, 1_000)]; 
/// `1 - omega`, the power of log in `M (x/T) (log x)^(1 - omega)`.
pub const P_TABLE     : [Ratio; 2] = [Ratio::new(1, 10), Ratio::new(1, 10)]; 
/// `x_M`: the smallest `log x` at which the matching `M` applies.
pub const ORDER_TABLE : [u32; 2]   = [1_000, 4_000]; 


/// Validated index into the Range tables.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RangeSelector { 
    index: usize, 
}
impl RangeSelector { 
    /// Row for `log x >= 10^3`.
    pub const X_M_1000: RangeSelector = RangeSelector { index: 0 }; 
    /// Row for `log x >= 4 * 10^3`.
    pub const X_M_4000: RangeSelector = RangeSelector { index: 1 }; 

    pub fn new(index: usize) -> Result<Self, ConditionError> { 
        let len = M_TABLE.len().min(P_TABLE.len()).min(ORDER_TABLE.len()); 
        if index >= len { 
            return Err(ConditionError::InvalidRange { got: index, len });
        }
        Ok(Self { index })
    }

    pub fn index(&self) -> usize { self.index }

    /// `M` of the active row.
    pub fn m_const(&self) -> Ratio { M_TABLE[self.index] }

    /// `1 - omega` of the active row.
    pub fn log_power(&self) -> Ratio { P_TABLE[self.index] }

    /// Lower bound on `y = log x` for which the row is valid.
    pub fn order(&self) -> f64 { f64::from(ORDER_TABLE[self.index]) }
}
impl std::fmt::Display for RangeSelector { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        write!(f, "Range {} (log x >= {})", self.index, ORDER_TABLE[self.index])
    }
}


/// Every constant used by the condition function at one precision.
#[derive(Debug, Clone)]
pub struct Constants { 
    prec: u32, 

    pub pi  : Float, 
    pub ln2 : Float, 

    pub vk_c             : Float, 
    pub classical_r      : Float, 
    pub littlewood_denom : Float, 

    pub refined_j_slope    : Float, 
    pub refined_j_log      : Float, 
    pub refined_offset     : Float, 
    pub refined_log_slope  : Float, 
    pub refined_numer      : Float, 
    pub refined_correction : Float, 
    pub refined_shift      : Float, 

    pub density_c1 : Float, 
    pub density_c2 : Float, 
    pub s0         : Float, 
    pub xi         : Float, 

    /// `2^(8/3)` in `W(a, y)`.
    pub w_scale    : Float, 
    pub eight_thirds : Float, 
}

impl Constants { 
    pub fn new(prec: u32) -> Self { 
        let eight_thirds = Ratio::new(8, 3).to_float(prec);
        let ln2 = Float::with_val(prec, Constant::Log2);
        let w_scale = (ln2.clone() * &eight_thirds).exp();

        Self { 
            prec, 
            pi  : Float::with_val(prec, Constant::Pi), 
            ln2, 

            vk_c             : VINOGRADOV_KOROBOV_C.to_float(prec), 
            classical_r      : CLASSICAL_R.to_float(prec), 
            littlewood_denom : LITTLEWOOD_DENOM.to_float(prec), 

            refined_j_slope    : REFINED_J_SLOPE.to_float(prec), 
            refined_j_log      : REFINED_J_LOG_ARG.to_float(prec).ln(), 
            refined_offset     : REFINED_OFFSET.to_float(prec), 
            refined_log_slope  : REFINED_LOG_SLOPE.to_float(prec), 
            refined_numer      : REFINED_NUMER.to_float(prec), 
            refined_correction : REFINED_CORRECTION.to_float(prec), 
            refined_shift      : REFINED_SHIFT.to_float(prec), 

            density_c1 : DENSITY_C1.to_float(prec), 
            density_c2 : DENSITY_C2.to_float(prec), 
            s0         : SPLIT_SIGMA.to_float(prec), 
            xi         : XI.to_float(prec), 

            w_scale, 
            eight_thirds, 
        }
    }

    /// Working precision in bits.
    pub fn prec(&self) -> u32 { self.prec }

    /// `v` at the working precision.
    pub fn real(&self, v: f64) -> Float { 
        Float::with_val(self.prec, v)
    }

    /// Exact ratio at the working precision.
    pub fn ratio(&self, r: Ratio) -> Float { 
        r.to_float(self.prec)
    }
}

impl Default for Constants { 
    fn default() -> Self { Self::new(DEFAULT_PRECISION) }
}
