//! Configuration for one certification run.  
//! 
//! [`SearchCfg`]  
//! ├ `power`            : the power m  
//! ├ `range`            : Range row ([`RangeSelector`])  
//! ├ `y0`               : largest `log x` the result must hold for  
//! ├ `samples`          : size of the parameter sample between `aLower` and `aUpper`  
//! ├ `precision`        : working precision in bits  
//! ├ `max_fine_steps`   : cap on the `1e-8` scan for `aLower`  
//! └ `max_coarse_steps` : cap on the `1e-6` scan for `aUpper`  
//!
//! Setters validate and return `Result<Self, ConfigError>`. 

use crate::condition::constants::DEFAULT_PRECISION;
use crate::condition::RangeSelector;

use super::errors::ConfigError;


pub const DEFAULT_POWER            : f64   = 90.0; 
pub const DEFAULT_Y0               : f64   = 10_000.0; 
pub const DEFAULT_SAMPLES          : usize = 50; 
pub const DEFAULT_MAX_FINE_STEPS   : usize = 2_000_000; 
pub const DEFAULT_MAX_COARSE_STEPS : usize = 200_000; 

pub const MIN_PRECISION : u32 = 53; 
pub const MAX_PRECISION : u32 = 1 << 16; 

/// Seed of the Vinogradov–Korobov / Littlewood switch point, in `log T`.
pub const VK_LITTLEWOOD_GUESS      : f64 = 5e5; 
/// Seed of the Littlewood / refined classical switch point, in `log T`.
pub const LITTLEWOOD_REFINED_GUESS : f64 = 2.0; 


#[derive(Debug, Copy, Clone)]
pub struct SearchCfg { 
    power            : f64, 
    range            : RangeSelector, 
    y0               : f64, 
    samples          : usize, 
    precision        : u32, 
    max_fine_steps   : usize, 
    max_coarse_steps : usize, 
}

impl SearchCfg { 
    /// Configuration for power `m` with every other field at its default.
    pub fn new(power: f64) -> Result<Self, ConfigError> { 
        Self::default().set_power(power)
    }

    // getters 
    pub fn power(&self)            -> f64 { self.power }
    pub fn range(&self)            -> RangeSelector { self.range }
    pub fn y0(&self)               -> f64 { self.y0 }
    pub fn samples(&self)          -> usize { self.samples }
    pub fn precision(&self)        -> u32 { self.precision }
    pub fn max_fine_steps(&self)   -> usize { self.max_fine_steps }
    pub fn max_coarse_steps(&self) -> usize { self.max_coarse_steps }

    pub fn set_power(mut self, v: f64) -> Result<Self, ConfigError> { 
        if !v.is_finite() || v <= 1.0 { 
            return Err(ConfigError::InvalidPower { got: v });
        }
        self.power = v; 
        Ok(self)
    }

    /// Selects the Range row; `y0` must still cover its order.
    pub fn set_range(mut self, index: usize) -> Result<Self, ConfigError> { 
        let range = RangeSelector::new(index)?; 
        if self.y0 < range.order() { 
            return Err(ConfigError::InvalidY0 { got: self.y0, order: range.order() });
        }
        self.range = range; 
        Ok(self)
    }

    pub fn set_y0(mut self, v: f64) -> Result<Self, ConfigError> { 
        let order = self.range.order(); 
        if !v.is_finite() || v < order { 
            return Err(ConfigError::InvalidY0 { got: v, order });
        }
        self.y0 = v; 
        Ok(self)
    }

    pub fn set_samples(mut self, v: usize) -> Result<Self, ConfigError> { 
        if v == 0 { 
            return Err(ConfigError::InvalidSamples { got: v });
        }
        self.samples = v; 
        Ok(self)
    }

    pub fn set_precision(mut self, v: u32) -> Result<Self, ConfigError> { 
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&v) { 
            return Err(ConfigError::InvalidPrecision { 
                got: v, 
                min: MIN_PRECISION, 
                max: MAX_PRECISION 
            });
        }
        self.precision = v; 
        Ok(self)
    }

    pub fn set_max_fine_steps(mut self, v: usize) -> Result<Self, ConfigError> { 
        if v == 0 { 
            return Err(ConfigError::InvalidStepCap { name: "max_fine_steps", got: v });
        }
        self.max_fine_steps = v; 
        Ok(self)
    }

    pub fn set_max_coarse_steps(mut self, v: usize) -> Result<Self, ConfigError> { 
        if v == 0 { 
            return Err(ConfigError::InvalidStepCap { name: "max_coarse_steps", got: v });
        }
        self.max_coarse_steps = v; 
        Ok(self)
    }
}

impl Default for SearchCfg { 
    fn default() -> Self { 
        Self { 
            power            : DEFAULT_POWER, 
            range            : RangeSelector::X_M_4000, 
            y0               : DEFAULT_Y0, 
            samples          : DEFAULT_SAMPLES, 
            precision        : DEFAULT_PRECISION, 
            max_fine_steps   : DEFAULT_MAX_FINE_STEPS, 
            max_coarse_steps : DEFAULT_MAX_COARSE_STEPS, 
        }
    }
}
