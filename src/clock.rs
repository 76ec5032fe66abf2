//! Cooperative clock pair for the time-dilation animation.
//!
//! There is no timer thread here: the host event loop calls
//! [`DilationClocks::tick`] at its own cadence. The stationary clock
//! accumulates real elapsed time and the moving clock's reading is
//! re-derived from it through the current dilation factor, so changing
//! the velocity mid-flight retroactively rescales nothing.

use crate::relativity::input::VelocityRatio;
use crate::relativity::special;

/// The dial completes a revolution every 12 seconds, like a miniature
/// hour hand.
const SECONDS_PER_REVOLUTION: f64 = 12.0;

#[derive(Debug)]
pub struct DilationClocks {
    elapsed: f64,
    dilation_factor: f64,
}

impl DilationClocks {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            dilation_factor: 1.0,
        }
    }

    /// Re-derive the dilation factor for a new velocity.
    pub fn set_velocity(&mut self, velocity: VelocityRatio) {
        self.dilation_factor = special::time_dilation(velocity.ratio());
    }

    /// Advance the stationary clock by `dt_secs` of real time.
    pub fn tick(&mut self, dt_secs: f64) {
        self.elapsed += dt_secs;
    }

    pub fn stationary_seconds(&self) -> f64 {
        self.elapsed
    }

    pub fn dilated_seconds(&self) -> f64 {
        self.elapsed * self.dilation_factor
    }

    /// Fraction of the normal rate at which the moving clock runs.
    pub fn dilation_factor(&self) -> f64 {
        self.dilation_factor
    }

    /// Hand position in degrees clockwise from 12 o'clock for a dial
    /// reading `seconds`.
    pub fn hand_angle_degrees(seconds: f64) -> f64 {
        (seconds % SECONDS_PER_REVOLUTION) * (360.0 / SECONDS_PER_REVOLUTION)
    }
}

impl Default for DilationClocks {
    fn default() -> Self {
        Self::new()
    }
}
