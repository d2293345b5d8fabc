//! Aerodynamic load distributor
//!
//! Builds the spanwise lift of the half wing from a section lift coefficient
//! profile, then rescales it so the whole wing carries the trimmed lift
//! `n * m * g`. Only the spanwise shape of the profile matters; its level is
//! set by trim.

use log::debug;

use super::AnalysisOptions;
use crate::elements::WingGeometry;
use crate::error::{LoadsError, LoadsResult};
use crate::loads::{AerodynamicData, LiftProfile, LoadCase};
use crate::math::{remap, shear_and_bending, trapezoid, Diagram};
use crate::results::AerodynamicLoads;

/// Compute the trimmed ultimate lift loads for one load case
pub fn distribute(
    geometry: &WingGeometry,
    aero: &AerodynamicData,
    case: LoadCase,
    options: &AnalysisOptions,
) -> LoadsResult<AerodynamicLoads> {
    options.validate()?;
    geometry.validate()?;
    if !case.load_factor.is_finite() || !case.mass.is_finite() || case.mass < 0.0 {
        return Err(LoadsError::InvalidInput(format!(
            "load case must be finite with non-negative mass, got {case}"
        )));
    }

    let x = geometry.span.as_slice();
    let chord = geometry.chord();

    let mut raw = section_lift(x, chord, &aero.clean, options.air_density)?;

    if let Some(slipstream) = &aero.slipstream {
        slipstream.zone.validate("slipstream zone", &geometry.span)?;
        let increment = section_lift(x, chord, &slipstream.profile, options.air_density)?;
        raw += increment.component_mul(&slipstream.zone.indicator(x));
    }

    let total = options.symmetry_factor * trapezoid(x, raw.as_slice());
    if total == 0.0 || !total.is_finite() {
        return Err(LoadsError::TrimInfeasible);
    }

    let target = options.ultimate_acceleration(case.load_factor) * case.mass;
    let trim_factor = target / total;
    let force_distribution = raw * trim_factor;

    let (shear, bending) = shear_and_bending(
        x,
        force_distribution.as_slice(),
        Diagram::zeros(x.len()).as_slice(),
    );

    debug!(
        "lift trimmed for {case}: factor {trim_factor:.4}, root shear {:.1} N",
        shear[0]
    );

    Ok(AerodynamicLoads {
        load_factor: case.load_factor,
        mass: case.mass,
        trim_factor,
        force_distribution,
        shear,
        bending,
    })
}

/// Untrimmed lift per unit span, `CL * q * c`, on the shared stations (N/m)
fn section_lift(
    x: &[f64],
    chord: &Diagram,
    profile: &LiftProfile,
    air_density: f64,
) -> LoadsResult<Diagram> {
    profile.validate()?;
    profile.check_velocities()?;

    let cl = remap(&profile.positions, &profile.lift_coefficients, x);
    let velocity = remap(&profile.positions, &profile.velocities, x);

    let mut lift = Diagram::zeros(x.len());
    for i in 0..x.len() {
        if cl[i] == 0.0 {
            continue;
        }
        if velocity[i] <= 0.0 {
            return Err(LoadsError::ZeroVelocity {
                position: x[i],
                velocity: velocity[i],
            });
        }
        let dynamic_pressure = 0.5 * air_density * velocity[i] * velocity[i];
        lift[i] = cl[i] * dynamic_pressure * chord[i];
    }
    Ok(lift)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{SpanDiscretization, SpanExtent};
    use crate::loads::Slipstream;
    use approx::assert_relative_eq;

    fn rectangular_wing() -> WingGeometry {
        let span = SpanDiscretization::uniform(0.0, 5.0, 11).unwrap();
        WingGeometry::constant_chord(span, 1.5).unwrap()
    }

    fn constant_cl(cl: f64, velocity: f64) -> AerodynamicData {
        AerodynamicData::clean(
            LiftProfile::at_velocity(vec![0.0, 5.0], vec![cl, cl], velocity).unwrap(),
        )
    }

    fn elliptic_cl() -> AerodynamicData {
        let positions: Vec<f64> = (0..=20).map(|i| 5.0 * i as f64 / 20.0).collect();
        let cl = positions
            .iter()
            .map(|y| 0.6 * (1.0 - (y / 5.0) * (y / 5.0)).max(0.0).sqrt())
            .collect();
        AerodynamicData::clean(LiftProfile::at_velocity(positions, cl, 60.0).unwrap())
    }

    #[test]
    fn test_uniform_lift() {
        let loads = distribute(
            &rectangular_wing(),
            &constant_cl(0.5, 50.0),
            LoadCase::new(2.5, 1000.0),
            &AnalysisOptions::default(),
        )
        .unwrap();

        for f in loads.force_distribution.iter() {
            assert_relative_eq!(*f, 2452.5, epsilon = 1e-9);
        }
        assert_relative_eq!(loads.shear[0], 12262.5, epsilon = 1e-8);
        assert_relative_eq!(loads.bending[0], 30656.25, epsilon = 1e-7);
        assert_eq!(loads.bending[10], 0.0);
        // raw level: 0.5 * (0.5 * 1.225 * 50^2) * 1.5
        assert_relative_eq!(loads.trim_factor, 2452.5 / 1148.4375, epsilon = 1e-12);
    }

    #[test]
    fn test_trim_consistency() {
        let geometry = rectangular_wing();
        let options = AnalysisOptions::default().with_ultimate_factor(1.5);
        let case = LoadCase::new(3.8, 1700.0);
        let loads = distribute(&geometry, &elliptic_cl(), case, &options).unwrap();

        let total =
            2.0 * trapezoid(geometry.span.as_slice(), loads.force_distribution.as_slice());
        assert_relative_eq!(total, 3.8 * 1.5 * 1700.0 * 9.81, max_relative = 1e-12);
        assert_relative_eq!(loads.shear[0], total / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_slipstream_only_inside_zone() {
        let slipstream = Slipstream::new(
            LiftProfile::at_velocity(vec![0.0, 5.0], vec![0.1, 0.1], 60.0).unwrap(),
            SpanExtent::new(1.0, 2.0),
        );
        let aero = constant_cl(0.5, 50.0).with_slipstream(slipstream);
        let loads = distribute(
            &rectangular_wing(),
            &aero,
            LoadCase::new(1.0, 1000.0),
            &AnalysisOptions::default(),
        )
        .unwrap();

        let f = &loads.force_distribution;
        let ratio = (0.5 * 2500.0 + 0.1 * 3600.0) / (0.5 * 2500.0);
        for i in [2, 3, 4] {
            assert_relative_eq!(f[i] / f[0], ratio, epsilon = 1e-12);
        }
        for i in [0, 1, 5, 10] {
            assert_relative_eq!(f[i], f[0], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_negative_load_factor_gives_download() {
        let loads = distribute(
            &rectangular_wing(),
            &elliptic_cl(),
            LoadCase::new(-1.5, 1200.0),
            &AnalysisOptions::default(),
        )
        .unwrap();
        assert!(loads.shear[0] < 0.0);
        assert!(loads.bending[0] < 0.0);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let geometry = rectangular_wing();
        let case = LoadCase::new(3.8, 1700.0);
        let options = AnalysisOptions::default();
        let first = distribute(&geometry, &elliptic_cl(), case, &options).unwrap();
        let second = distribute(&geometry, &elliptic_cl(), case, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_velocity_with_lift() {
        let aero = AerodynamicData::clean(
            LiftProfile::new(vec![0.0, 2.5, 5.0], vec![0.5, 0.5, 0.5], vec![50.0, 0.0, 50.0])
                .unwrap(),
        );
        let err = distribute(
            &rectangular_wing(),
            &aero,
            LoadCase::new(1.0, 1000.0),
            &AnalysisOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, LoadsError::ZeroVelocity { position, .. } if position == 2.5));
    }

    #[test]
    fn test_zero_lift_cannot_be_trimmed() {
        let err = distribute(
            &rectangular_wing(),
            &constant_cl(0.0, 50.0),
            LoadCase::new(1.0, 1000.0),
            &AnalysisOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, LoadsError::TrimInfeasible));
    }

    #[test]
    fn test_slipstream_zone_outside_span() {
        let slipstream = Slipstream::new(
            LiftProfile::at_velocity(vec![0.0, 5.0], vec![0.1, 0.1], 60.0).unwrap(),
            SpanExtent::new(4.0, 6.0),
        );
        let aero = constant_cl(0.5, 50.0).with_slipstream(slipstream);
        let err = distribute(
            &rectangular_wing(),
            &aero,
            LoadCase::new(1.0, 1000.0),
            &AnalysisOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, LoadsError::InvalidExtent { .. }));
    }

    #[test]
    fn test_profile_edited_out_of_shape() {
        let mut aero = constant_cl(0.5, 50.0);
        aero.clean.lift_coefficients.pop();
        let err = distribute(
            &rectangular_wing(),
            &aero,
            LoadCase::new(1.0, 1000.0),
            &AnalysisOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LoadsError::DimensionMismatch { expected: 2, found: 1, .. }
        ));
    }

    #[test]
    fn test_trimmed_lift_ignores_air_density() {
        let geometry = rectangular_wing();
        let case = LoadCase::new(2.5, 1000.0);
        let sea_level = distribute(&geometry, &elliptic_cl(), case, &AnalysisOptions::default())
            .unwrap();
        let thin_air = AnalysisOptions::default().with_air_density(0.9);
        let altitude = distribute(&geometry, &elliptic_cl(), case, &thin_air).unwrap();

        for (a, b) in sea_level.force_distribution.iter().zip(altitude.force_distribution.iter()) {
            assert_relative_eq!(*a, *b, max_relative = 1e-12);
        }
        assert_relative_eq!(
            altitude.trim_factor,
            sea_level.trim_factor * 1.225 / 0.9,
            max_relative = 1e-12
        );
    }
}
