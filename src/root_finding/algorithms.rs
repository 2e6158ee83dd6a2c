//! Root-finding algorithm definitions.  
//!
//! Provides the [`Algorithm`] enum along with the shared 
//! [`GLOBAL_MAX_ITER_FALLBACK`] hard cap.  


/// Applied when an algorithm has no heuristic default in 
/// [`Algorithm::default_max_iter`]. 
///
/// Serves as a practical safeguard against iteration counts that are 
/// mathematically valid but computationally excessive at high precision.
pub const GLOBAL_MAX_ITER_FALLBACK: usize = 500; 


/// Root-finding algorithm variants. 
/// - [`Algorithm::Secant`] : derivative-free open method on two seeds  
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm { 
    Secant, 
}

impl Algorithm { 
    /// Default iteration count if `max_iter` is unset in config. 
    ///  
    /// # Notes 
    /// - Applied only when `max_iter` is unset.  
    /// - Values are heuristic and method-specific.  
    pub const fn default_max_iter(self) -> Option<usize> { 
        match self { 
            Algorithm::Secant => Some(100), 
        }
    }

    pub const fn algorithm_name(self) -> &'static str { 
        match self { 
            Algorithm::Secant => "secant", 
        }
    }
}
impl std::fmt::Display for Algorithm { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        write!(f, "{}", self.algorithm_name())
    }
}
