// End-to-end checks of the relativistic quantities as the binary's
// subsystems consume them: validated inputs in, rendered-ready scalars out.

use approx::assert_relative_eq;
use std::f64::consts::{FRAC_PI_2, PI};

use stmv::metrics;
use stmv::relativity::input::{InputError, RestMass, VelocityRatio};
use stmv::relativity::special;

#[test]
fn sixty_percent_c_scenario() {
    let velocity = VelocityRatio::new(0.6).unwrap();
    let mass = RestMass::from_kg(1.0).unwrap();
    let dp = metrics::sample(velocity, mass);

    assert_relative_eq!(dp.gamma, 1.25, max_relative = 1e-12);
    assert_relative_eq!(dp.time_dilation, 0.8, max_relative = 1e-12);
    assert_relative_eq!(dp.rest_energy, 8.9876e16, max_relative = 1e-4);
    assert_relative_eq!(dp.total_energy, 1.1235e17, max_relative = 1e-4);
    assert_relative_eq!(dp.kinetic_energy, 2.247e16, max_relative = 1e-3);
}

#[test]
fn at_rest_everything_collapses_to_rest_values() {
    let velocity = VelocityRatio::new(0.0).unwrap();
    let mass = RestMass::from_kg(3.0).unwrap();
    let dp = metrics::sample(velocity, mass);

    assert_relative_eq!(dp.gamma, 1.0);
    assert_relative_eq!(dp.time_dilation, 1.0);
    assert_relative_eq!(dp.total_energy, dp.rest_energy);
    assert_relative_eq!(dp.kinetic_energy, 0.0);
    // The direction arrow points straight up the time axis.
    assert_relative_eq!(special::direction_angle(0.0), FRAC_PI_2);
}

#[test]
fn gamma_grows_without_bound_toward_light_speed() {
    assert!(special::gamma(0.999) > 22.0);
    assert!(special::gamma(0.999999) > 700.0);
    assert_eq!(special::gamma(1.0), f64::INFINITY);
    // The boundary keeps such inputs away from the calculator.
    assert_eq!(
        VelocityRatio::new(1.0),
        Err(InputError::InvalidVelocity(1.0))
    );
}

#[test]
fn circle_identity_holds_across_the_domain() {
    for i in 0..1000 {
        let v = i as f64 / 1000.0;
        let (t, s) = special::spacetime_components(v);
        assert_relative_eq!(t * t + s * s, 1.0, max_relative = 1e-12);
        assert_relative_eq!(t, special::time_dilation(v));
    }
}

#[test]
fn displayed_angle_runs_from_zero_to_ninety_degrees() {
    // The raw bearing is π/2 at rest; the display convention measures
    // from the time axis, so it reads 0° at rest and approaches 90°.
    let from_time_axis = |v: f64| (FRAC_PI_2 - special::direction_angle(v)).to_degrees();
    assert_relative_eq!(from_time_axis(0.0), 0.0);
    assert!(from_time_axis(0.999) > 87.0);
    assert!(from_time_axis(0.999) < 90.0);
}

#[test]
fn arrow_polyline_traces_shaft_then_barbs() {
    let angle = special::direction_angle(0.6);
    let coords = special::create_arrow_coordinates(angle, 1.0, 0.1);

    // Tip sits on the unit circle at the spacetime point, with axes
    // swapped into compass orientation (space right, time up).
    let (t, s) = special::spacetime_components(0.6);
    assert_relative_eq!(coords[1].0, s, max_relative = 1e-12);
    assert_relative_eq!(coords[1].1, t, max_relative = 1e-12);

    let tip = coords[1];
    let dist = |p: (f64, f64)| ((p.0 - tip.0).powi(2) + (p.1 - tip.1).powi(2)).sqrt();
    assert_relative_eq!(dist(coords[2]), dist(coords[4]), max_relative = 1e-12);

    // Barbs point back toward the origin.
    let head_angle = 20.0 * PI / 180.0;
    let expected = (angle + PI - head_angle).cos() * 0.1 + tip.0;
    assert_relative_eq!(coords[2].0, expected, max_relative = 1e-12);
}

#[test]
fn pound_entry_matches_displayed_kilograms() {
    let mass = RestMass::from_lbs(154.3).unwrap();
    assert_relative_eq!(mass.kg(), 154.3 * 0.45359237);
    assert_relative_eq!(mass.lbs(), 154.3, max_relative = 1e-5);
}

#[test]
fn invalid_inputs_never_reach_the_calculator() {
    assert!(VelocityRatio::new(-0.2).is_err());
    assert!(VelocityRatio::new(1.2).is_err());
    assert!(RestMass::from_lbs(-1.0).is_err());
    assert!(RestMass::from_lbs(f64::INFINITY).is_err());

    // The slider path is total: any position yields a valid ratio.
    for pos in [0u16, 1, 500, 999, 1000, u16::MAX] {
        let v = VelocityRatio::from_slider(pos);
        assert!(v.ratio() >= 0.0 && v.ratio() < 1.0);
        assert!(special::gamma(v.ratio()).is_finite());
    }
}
