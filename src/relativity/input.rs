//! Boundary validation for user-supplied values.
//!
//! The functions in [`super::special`] are pure arithmetic and do not
//! defend their domains. Everything arriving from the velocity slider or
//! the mass input field passes through here first, so NaN and infinity
//! never reach a rendered value.

use thiserror::Error;

use super::special;

/// Number of discrete slider positions; position 999 maps to 0.999c.
pub const SLIDER_STEPS: u16 = 1000;

/// Largest mass accepted from the input field, in pounds.
pub const MAX_MASS_LBS: f64 = 1e12;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("velocity must be at least 0 and below the speed of light, got {0}c")]
    InvalidVelocity(f64),
    #[error("mass must be a positive number of at most {MAX_MASS_LBS:e} lbs, got {0}")]
    InvalidMass(f64),
}

/// A velocity as a fraction of c, guaranteed finite and in [0, 1).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct VelocityRatio(f64);

impl VelocityRatio {
    pub fn new(ratio: f64) -> Result<Self, InputError> {
        if !ratio.is_finite() || !(0.0..1.0).contains(&ratio) {
            return Err(InputError::InvalidVelocity(ratio));
        }
        Ok(Self(ratio))
    }

    /// Map an integer slider position (0..=999) to a ratio. Overshoot from
    /// the widget is clamped rather than rejected, so this cannot fail.
    pub fn from_slider(position: u16) -> Self {
        let clamped = position.min(SLIDER_STEPS - 1);
        Self(f64::from(clamped) / f64::from(SLIDER_STEPS))
    }

    pub fn ratio(self) -> f64 {
        self.0
    }

    /// Speed in m/s, for display.
    pub fn speed_m_per_s(self) -> f64 {
        self.0 * special::C
    }
}

/// A validated rest mass, stored in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RestMass(f64);

impl RestMass {
    /// Validate a pounds figure from the mass input field.
    pub fn from_lbs(lbs: f64) -> Result<Self, InputError> {
        if !lbs.is_finite() || lbs <= 0.0 || lbs > MAX_MASS_LBS {
            return Err(InputError::InvalidMass(lbs));
        }
        Ok(Self(special::mass_lbs_to_kg(lbs)))
    }

    pub fn from_kg(kg: f64) -> Result<Self, InputError> {
        if !kg.is_finite() || kg <= 0.0 || kg > special::mass_lbs_to_kg(MAX_MASS_LBS) {
            return Err(InputError::InvalidMass(kg));
        }
        Ok(Self(kg))
    }

    pub fn kg(self) -> f64 {
        self.0
    }

    /// Pounds equivalent, using the truncated display factor.
    pub fn lbs(self) -> f64 {
        special::mass_kg_to_lbs(self.0)
    }
}
