//! Range of consecutive m-th power intervals already covered by a Bertrand 
//! interval (Cully-Hugill & Lee, 2024). 
//!
//! A prime in `(x, x (1 + 1/d)]` for all `x >= x0` gives a prime between 
//! `n^m` and `(n + 1)^m` up to `log x = m log m + m log(d - 1)`.

use rug::Float;

use crate::condition::constants::Ratio;
use crate::condition::Constants;


/// `(x0, d)`: Bertrand-interval constant `d` valid from `x0`.
pub const BERTRAND_INTERVALS: [(&str, Ratio); 2] = [
    ("4*10^(18)", Ratio::new(39_097_000, 1)), 
    ("e^600",     Ratio::new(251_949_000_000, 1)), 
];


#[derive(Debug, Clone)]
pub struct BertrandCoverage { 
    /// Where the interval constant becomes valid.
    pub x0          : &'static str, 
    /// Upper end of the covered range, as `log x`.
    pub log_x_upper : Float, 
}

/// `m log m + m log(d - 1)`
pub fn log_upper(k: &Constants, d: Ratio, power: f64) -> Float { 
    let m = k.real(power); 
    let d = k.ratio(d); 
    m.clone() * m.clone().ln() + m * (d - 1_i32).ln()
}

/// Coverage for every known Bertrand interval.
pub fn coverage(k: &Constants, power: f64) -> Vec<BertrandCoverage> { 
    BERTRAND_INTERVALS 
        .iter()
        .map(|&(x0, d)| BertrandCoverage { x0, log_x_upper: log_upper(k, d, power) })
        .collect()
}
