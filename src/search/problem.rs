//! The condition function with the power and Range row fixed.

use rug::Float;

use crate::condition::r2::condition;
use crate::condition::{ConditionError, Constants, RangeSelector};

use super::switch::log_x_at_switch;


/// R2 specialised to one power `m` and Range row, split at `s0`.
#[derive(Debug, Clone)]
pub struct PowerProblem<'a> { 
    k     : &'a Constants, 
    range : RangeSelector, 
    power : Float, 
}

impl<'a> PowerProblem<'a> { 
    pub fn new(k: &'a Constants, range: RangeSelector, power: f64) -> Self { 
        Self { k, range, power: k.real(power) }
    }

    pub fn constants(&self) -> &'a Constants { self.k }
    pub fn range(&self)     -> RangeSelector { self.range }
    pub fn power(&self)     -> &Float { &self.power }

    /// `R2(y, m, a, s0)`
    pub fn r2(&self, y: &Float, a: &Float) -> Result<Float, ConditionError> { 
        condition(self.k, self.range, y, &self.power, a, &self.k.s0)
    }

    /// `R2` at the `y` where the zero-free region is used at height `log T = switch`.
    pub fn r2_at_switch(&self, a: &Float, switch: &Float) -> Result<Float, ConditionError> { 
        let y = log_x_at_switch(self.k, a, switch); 
        self.r2(&y, a)
    }
}
