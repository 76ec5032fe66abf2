//! Special-relativity calculations.
//!
//! Everything here is a pure function of a velocity ratio v/c in [0, 1)
//! (and, for energy, a rest mass in kilograms). Working in ratios rather
//! than raw m/s keeps the arithmetic away from precision loss against C².
//!
//! Mass is treated as invariant throughout: the velocity dependence lives
//! in the energy, never in a "relativistic mass", following the modern
//! convention.

use std::f64::consts::PI;

/// Speed of light in vacuum, m/s (exact).
pub const C: f64 = 299_792_458.0;

/// Pounds to kilograms.
pub const LBS_TO_KG: f64 = 0.45359237;

/// Kilograms to pounds, as used for display. Deliberately not the exact
/// reciprocal of [`LBS_TO_KG`] (that would be 2.2046226...); the truncated
/// constant is kept as-is since the gap is invisible at display precision.
pub const KG_TO_LBS: f64 = 2.20462;

/// Lorentz factor γ = 1 / sqrt(1 - v²) for a velocity ratio v = v/c.
///
/// Defined on [0, 1): returns +infinity at `velocity_ratio == 1.0` and NaN
/// beyond. Domain enforcement belongs to [`super::input`]; this function
/// never masks an out-of-range input.
pub fn gamma(velocity_ratio: f64) -> f64 {
    1.0 / (1.0 - velocity_ratio * velocity_ratio).sqrt()
}

/// Time dilation factor 1/γ: the fraction of its normal rate at which a
/// moving clock ticks. Range (0, 1], with 1 at rest.
pub fn time_dilation(velocity_ratio: f64) -> f64 {
    1.0 / gamma(velocity_ratio)
}

/// Energy breakdown for one rest mass at one velocity, in joules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Energies {
    /// Rest energy E₀ = mc².
    pub rest: f64,
    /// Total energy E = γmc².
    pub total: f64,
    /// Kinetic energy K = E - E₀ = mc²(γ - 1).
    pub kinetic: f64,
}

/// Rest, total, and kinetic energy of `rest_mass_kg` at `velocity_ratio`.
///
/// Pure arithmetic: the mass is assumed already validated as positive by
/// the input boundary.
pub fn energy_calculations(rest_mass_kg: f64, velocity_ratio: f64) -> Energies {
    let gamma_val = gamma(velocity_ratio);
    let rest = rest_mass_kg * C * C;
    Energies {
        rest,
        total: rest * gamma_val,
        kinetic: rest * (gamma_val - 1.0),
    }
}

/// (time, space) components (1/γ, v) for the circle diagrams.
///
/// This is a pedagogical circle, not Minkowski geometry: real spacetime
/// intervals are hyperbolic. The circle (time² + space² = 1) only builds
/// the intuition that more motion through space means less through time,
/// and any text presenting it must say so.
pub fn spacetime_components(velocity_ratio: f64) -> (f64, f64) {
    (1.0 / gamma(velocity_ratio), velocity_ratio)
}

/// Bearing of the direction arrow: π/2 - atan2(space, time).
///
/// π/2 at rest (arrow straight up the time axis of the compass diagram),
/// approaching 0 as v → 1 (arrow flat along the space axis). The display
/// layer converts this to degrees measured from the time axis.
pub fn direction_angle(velocity_ratio: f64) -> f64 {
    let (time_component, space_component) = spacetime_components(velocity_ratio);
    PI / 2.0 - space_component.atan2(time_component)
}

/// Polyline for a direction arrow at `angle` (radians, from the x axis):
/// origin to tip, then each arrowhead barb with the tip revisited between
/// them so the whole arrow draws as a single line series. Barbs sit ±20°
/// off the reverse bearing.
pub fn create_arrow_coordinates(angle: f64, length: f64, head_size: f64) -> [(f64, f64); 5] {
    let tip = (angle.cos() * length, angle.sin() * length);

    let head_angle = 20.0 * PI / 180.0;
    let left = angle + PI - head_angle;
    let right = angle + PI + head_angle;

    [
        (0.0, 0.0),
        tip,
        (tip.0 + left.cos() * head_size, tip.1 + left.sin() * head_size),
        tip,
        (tip.0 + right.cos() * head_size, tip.1 + right.sin() * head_size),
    ]
}

/// Convert mass from pounds to kilograms.
pub fn mass_lbs_to_kg(mass_lbs: f64) -> f64 {
    mass_lbs * LBS_TO_KG
}

/// Convert mass from kilograms to pounds (display factor, see
/// [`KG_TO_LBS`]).
pub fn mass_kg_to_lbs(mass_kg: f64) -> f64 {
    mass_kg * KG_TO_LBS
}
