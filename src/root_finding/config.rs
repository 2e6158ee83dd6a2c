//! Shared solver configuration.
//!
//! [`CommonCfg`]
//! ├ `abs_fx`   : stop once `|f(x)| <= abs_fx`
//! ├ `abs_x`    : absolute part of the step tolerance
//! ├ `rel_x`    : relative part of the step tolerance
//! └ `max_iter` : iteration cap (optional)
//!
//! Tolerances stay `f64`: they are compared against extended-precision
//! iterates, so values far below `f64::EPSILON` (e.g. `1e-60`) are meaningful.
//! [`CommonCfg::try_rel_x_bits`] expresses `rel_x` as a number of bits, to
//! tie it to a working precision.

use super::errors::{RootFindingError, ToleranceError};


pub const DEFAULT_ABS_FX : f64 = 1e-12;
pub const DEFAULT_ABS_X  : f64 = 0.0;
pub const DEFAULT_REL_X  : f64 = 1e-30;

/// `2^-MAX_REL_X_BITS` is the smallest relative tolerance an `f64` can hold.
pub const MAX_REL_X_BITS : u32 = 1_000;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg {
    abs_fx   : f64,
    abs_x    : f64,
    rel_x    : f64,
    max_iter : Option<usize>,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            abs_fx   : DEFAULT_ABS_FX,
            abs_x    : DEFAULT_ABS_X,
            rel_x    : DEFAULT_REL_X,
            max_iter : None
        }
    }

    pub fn abs_fx(&self)   -> f64 { self.abs_fx }
    pub fn abs_x(&self)    -> f64 { self.abs_x }
    pub fn rel_x(&self)    -> f64 { self.rel_x }
    pub fn max_iter(&self) -> Option<usize> { self.max_iter }

    pub(crate) fn try_abs_fx(&mut self, v: f64) -> Result<(), ToleranceError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ToleranceError::InvalidAbsFx { got: v });
        }
        self.abs_fx = v;
        Ok(())
    }

    /// `abs_x` and `rel_x` may not both be zero.
    pub(crate) fn try_abs_x(&mut self, v: f64) -> Result<(), ToleranceError> {
        if !v.is_finite() || v < 0.0 {
            return Err(ToleranceError::InvalidAbsX { got: v });
        }
        if v == 0.0 && self.rel_x == 0.0 {
            return Err(ToleranceError::InvalidAbsRelX { abs_x: v, rel_x: self.rel_x });
        }
        self.abs_x = v;
        Ok(())
    }

    pub(crate) fn try_rel_x(&mut self, v: f64) -> Result<(), ToleranceError> {
        if !v.is_finite() || v < 0.0 {
            return Err(ToleranceError::InvalidRelX { got: v });
        }
        if v == 0.0 && self.abs_x == 0.0 {
            return Err(ToleranceError::InvalidAbsRelX { abs_x: self.abs_x, rel_x: v });
        }
        self.rel_x = v;
        Ok(())
    }

    /// `rel_x = 2^-bits`
    pub(crate) fn try_rel_x_bits(&mut self, bits: u32) -> Result<(), ToleranceError> {
        if bits > MAX_REL_X_BITS {
            return Err(ToleranceError::InvalidRelXBits { got: bits, max: MAX_REL_X_BITS });
        }
        self.try_rel_x(2f64.powi(-(bits as i32)))
    }

    pub(crate) fn try_max_iter(&mut self, v: usize) -> Result<(), RootFindingError> {
        if v == 0 {
            return Err(RootFindingError::InvalidMaxIter { got: v });
        }
        self.max_iter = Some(v);
        Ok(())
    }
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}

/// Builder setters over a `common: CommonCfg` field.
macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_abs_fx(mut self, v: f64)
                -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                self.common.try_abs_fx(v).map(|_| self)
            }
            pub fn set_abs_x(mut self, v: f64)
                -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                self.common.try_abs_x(v).map(|_| self)
            }
            pub fn set_rel_x(mut self, v: f64)
                -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                self.common.try_rel_x(v).map(|_| self)
            }
            pub fn set_rel_x_bits(mut self, bits: u32)
                -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                self.common.try_rel_x_bits(bits).map(|_| self)
            }
            pub fn set_max_iter(mut self, v: usize)
                -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                self.common.try_max_iter(v).map(|_| self)
            }
        }
    };
}
pub(crate) use impl_common_cfg;
