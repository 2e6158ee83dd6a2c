//! Result of a certification run.

use rug::Float;

use crate::condition::RangeSelector;

use super::minimal_y::Certificate;
use super::sweep::AdmissibleWindow;
use super::switch::SwitchPoints;


/// Why a power could not be certified.
#[derive(Debug, Clone)]
pub enum Exhaustion { 
    /// No `a` in the fine scan made R2 positive at the reference point.
    NoLowerParameter { start: f64, last: f64, steps: usize }, 
    /// No sampled `a` kept R2 positive at both `y0` and the Range order.
    NoViableSample { samples: usize }, 
}

impl std::fmt::Display for Exhaustion { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        match self { 
            Exhaustion::NoLowerParameter { start, last, steps } => write!(
                f, "R2 <= 0 at the reference point for a in [{start}, {last}] ({steps} steps)"
            ), 
            Exhaustion::NoViableSample { samples } => write!(
                f, "none of {samples} sampled parameters keeps R2 > 0 at y0 and the Range order"
            ), 
        }
    }
}


#[derive(Debug, Clone)]
pub enum Outcome { 
    Certified(Certificate), 
    NotPossible(Exhaustion), 
}


/// Everything one run produced.
///
/// [`SearchReport`]
/// - `power`         : the power m  
/// - `range`         : Range row used for G and the order  
/// - `y0`            : upper end of the certified interval  
/// - `switch_points` : zero-free switch points  
/// - `window`        : admissible `[aLower, aUpper]`, if the fine scan succeeded  
/// - `outcome`       : certificate or reason for failure  
#[derive(Debug, Clone)]
pub struct SearchReport { 
    pub power         : f64, 
    pub range         : RangeSelector, 
    pub y0            : f64, 
    pub switch_points : SwitchPoints, 
    pub window        : Option<AdmissibleWindow>, 
    pub outcome       : Outcome, 
}

impl SearchReport { 
    pub fn is_certified(&self) -> bool { 
        matches!(self.outcome, Outcome::Certified(_))
    }

    pub fn certificate(&self) -> Option<&Certificate> { 
        match &self.outcome { 
            Outcome::Certified(c)  => Some(c), 
            Outcome::NotPossible(_) => None, 
        }
    }

    /// Final parameter: the certified one, or the first sampled one.
    pub fn final_parameter(&self) -> Option<&Float> { 
        match &self.outcome { 
            Outcome::Certified(c)   => Some(&c.a), 
            Outcome::NotPossible(_) => self.window.as_ref().map(|w| &w.lower), 
        }
    }

    /// One-line verdict.
    pub fn verdict(&self) -> String { 
        match &self.outcome { 
            Outcome::Certified(c) => format!(
                "Condition function >0 for {} <= log(x) <= {} with a={:.10}", 
                c.y_min, self.y0, c.a.to_f64()
            ), 
            Outcome::NotPossible(_) => format!("m={} is not possible", self.power), 
        }
    }
}
