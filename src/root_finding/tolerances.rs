//! Tolerance utilities for root-finding algorithms.
//!
//! `DynamicTolerance::StepTol` carries the iterates that feed the next 
//! estimate of an open method. The tolerance is evaluated in `f64`; the 
//! iterates themselves are only needed for their magnitude.


use rug::Float;

use crate::root_finding::errors::ToleranceError;  
use crate::root_finding::algorithms::Algorithm;


/// Open methods use DynamicTolerance::StepTol
#[derive(Debug, Clone)]
pub(crate) enum DynamicTolerance<'a> { 
    StepTol { x: &'a [&'a Float] } 
}


impl Algorithm {
    /// Compute the method-specific dynamic tolerance for an algorithm.
    /// - [`Algorithm::Secant`] ([`DynamicTolerance::StepTol`]): 
    ///   `abs_x + rel_x * max(|x|, 1.0)` 
    ///
    /// # Notes 
    /// - The effective step tolerance is the *maximum* tolerance across all 
    ///   iterates `x` that contribute to the next root estimate, not just the 
    ///   most recent one.
    ///
    /// # Errors 
    /// - Returns [`ToleranceError::InvalidTolerance`] if the result is 
    ///   non-finite or <= 0.
    pub(crate) fn calculate_tolerance( 
        &self, 
        dynamic_tol : &DynamicTolerance<'_>, 
        abs_x   : f64, 
        rel_x   : f64 
    ) -> Result<f64, ToleranceError> {

        let calculated_tol = match (self, dynamic_tol) { 
            (Algorithm::Secant, DynamicTolerance::StepTol { x }) => { 
                // use max |x| over stencil 
                let mut max_abs = 0.0_f64; 
                for xi in x.iter() { 
                    let val = xi.to_f64().abs(); 
                    if val > max_abs { 
                        max_abs = val; 
                    }
                } 

                abs_x + rel_x * max_abs.max(1.0)
            },
        };

        if calculated_tol <= 0.0 || !calculated_tol.is_finite() {
            return Err(ToleranceError::InvalidTolerance { got: calculated_tol });
        }

        Ok(calculated_tol)
    }   
}
