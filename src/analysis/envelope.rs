//! Aerostructural envelope search
//!
//! Sweeps the flight envelope, runs both distributors for every condition
//! and keeps the two conditions that govern root shear and root bending.

use log::{debug, info};

use super::{aerodynamic, structural, AnalysisOptions};
use crate::elements::{MassBreakdown, WingGeometry};
use crate::error::{LoadsError, LoadsResult};
use crate::loads::{AerodynamicData, FlightEnvelope, LoadCase};
use crate::results::{EnvelopeResult, GoverningCondition};

/// Find the governing root shear and root bending conditions of an envelope
///
/// Candidates are evaluated in sweep order (vertices first) and a later one
/// only replaces the current maximum when it is strictly larger in magnitude,
/// so ties go to the earliest condition.
pub fn search(
    geometry: &WingGeometry,
    masses: &MassBreakdown,
    aero: &AerodynamicData,
    envelope: &FlightEnvelope,
    options: &AnalysisOptions,
) -> LoadsResult<EnvelopeResult> {
    options.validate()?;
    let candidates = envelope.candidates()?;
    info!("searching {} flight conditions", candidates.len());

    let mut max_shear: Option<GoverningCondition> = None;
    let mut max_bending: Option<GoverningCondition> = None;

    for case in &candidates {
        let condition = evaluate(geometry, masses, aero, *case, options)?;
        debug!(
            "{case}: root shear {:.1} N, root bending {:.1} N·m",
            condition.root_shear(),
            condition.root_bending()
        );

        let shear_governs = max_shear
            .as_ref()
            .map_or(true, |c| condition.root_shear().abs() > c.root_shear().abs());
        let bending_governs = max_bending
            .as_ref()
            .map_or(true, |c| condition.root_bending().abs() > c.root_bending().abs());

        if shear_governs {
            max_shear = Some(condition.clone());
        }
        if bending_governs {
            max_bending = Some(condition);
        }
    }

    let (Some(max_shear), Some(max_bending)) = (max_shear, max_bending) else {
        return Err(LoadsError::InvalidEnvelope(
            "no flight condition to evaluate".to_string(),
        ));
    };

    info!(
        "max root shear {:.1} N at n = {}, m = {} kg",
        max_shear.root_shear(),
        max_shear.load_factor,
        max_shear.mass
    );
    info!(
        "max root bending {:.1} N·m at n = {}, m = {} kg",
        max_bending.root_bending(),
        max_bending.load_factor,
        max_bending.mass
    );

    Ok(EnvelopeResult {
        max_shear,
        max_bending,
        candidates: candidates.len(),
    })
}

/// Lift and weight diagrams of a single flight condition
pub fn evaluate(
    geometry: &WingGeometry,
    masses: &MassBreakdown,
    aero: &AerodynamicData,
    case: LoadCase,
    options: &AnalysisOptions,
) -> LoadsResult<GoverningCondition> {
    let fuel_mass = masses.fuel_for(case.mass);
    let weight = structural::distribute(geometry, masses, case.load_factor, fuel_mass, options)?;
    let lift = aerodynamic::distribute(geometry, aero, case, options)?;

    let expected = geometry.len();
    for (what, contribution) in weight.contributions() {
        for found in contribution.lengths() {
            check_length(&format!("{what} diagram"), expected, found)?;
        }
    }
    for found in [
        lift.force_distribution.len(),
        lift.shear.len(),
        lift.bending.len(),
    ] {
        check_length("lift diagram", expected, found)?;
    }

    Ok(GoverningCondition {
        load_factor: case.load_factor,
        mass: case.mass,
        fuel_mass,
        lift_shear: lift.shear,
        weight_shear: weight.total_shear(),
        lift_bending: lift.bending,
        weight_bending: weight.total_bending(),
    })
}

fn check_length(what: &str, expected: usize, found: usize) -> LoadsResult<()> {
    if expected != found {
        return Err(LoadsError::DimensionMismatch {
            what: what.to_string(),
            expected,
            found,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{FuelTank, MassShape, PointMass, SpanDiscretization, WingMass};
    use crate::loads::LiftProfile;
    use approx::assert_relative_eq;

    fn geometry() -> WingGeometry {
        let span = SpanDiscretization::uniform(0.0, 5.0, 21)
            .unwrap()
            .with_breakpoints(&[1.0, 1.5, 2.0, 3.5])
            .unwrap();
        WingGeometry::from_chord_table(span, &[0.0, 5.0], &[1.8, 1.0]).unwrap()
    }

    fn masses() -> MassBreakdown {
        let mut masses = MassBreakdown {
            wing: WingMass::Total {
                mass: 220.0,
                shape: MassShape::ChordProportional,
            },
            fuel_tank: Some(FuelTank::new(1.0, 3.5, 200.0)),
            zero_fuel_mass: 1500.0,
            ..Default::default()
        };
        masses
            .point_masses
            .insert("engine".to_string(), PointMass::with_width(150.0, 1.5, 1.0));
        masses
    }

    fn aero() -> AerodynamicData {
        let positions: Vec<f64> = (0..=10).map(|i| 0.5 * i as f64).collect();
        let cl = positions.iter().map(|y| 0.7 - 0.06 * y).collect();
        AerodynamicData::clean(LiftProfile::at_velocity(positions, cl, 55.0).unwrap())
    }

    #[test]
    fn test_single_vertex() {
        let case = LoadCase::new(3.8, 1650.0);
        let result = search(
            &geometry(),
            &masses(),
            &aero(),
            &FlightEnvelope::single(case),
            &AnalysisOptions::default(),
        )
        .unwrap();

        assert_eq!(result.candidates, 1);
        assert_eq!(result.max_shear, result.max_bending);
        assert_eq!(result.max_shear.load_factor, 3.8);
        assert_relative_eq!(result.max_shear.fuel_mass, 150.0, epsilon = 1e-9);
        assert_relative_eq!(
            result.max_shear.lift_shear[0],
            3.8 * 1650.0 * 9.81 / 2.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_matches_brute_force() {
        let envelope =
            FlightEnvelope::rectangular((-1.52, 3.8), (1500.0, 1700.0)).with_sampling(5, 3);
        let options = AnalysisOptions::default().with_ultimate_factor(1.5);
        let result = search(&geometry(), &masses(), &aero(), &envelope, &options).unwrap();

        let candidates = envelope.candidates().unwrap();
        assert_eq!(result.candidates, candidates.len());

        let mut best_shear = 0.0_f64;
        let mut best_bending = 0.0_f64;
        for case in candidates {
            let condition = evaluate(&geometry(), &masses(), &aero(), case, &options).unwrap();
            best_shear = best_shear.max(condition.root_shear().abs());
            best_bending = best_bending.max(condition.root_bending().abs());
        }
        assert_eq!(result.max_shear.root_shear().abs(), best_shear);
        assert_eq!(result.max_bending.root_bending().abs(), best_bending);
    }

    #[test]
    fn test_heaviest_pull_up_governs_without_fuel() {
        // Without wing fuel the wing-carried weight is fixed, so net root loads
        // grow with aircraft mass and with |n|
        let masses = MassBreakdown {
            fuel_tank: None,
            ..masses()
        };
        let envelope = FlightEnvelope::rectangular((-1.52, 3.8), (1500.0, 1700.0));
        let result = search(
            &geometry(),
            &masses,
            &aero(),
            &envelope,
            &AnalysisOptions::default(),
        )
        .unwrap();

        assert_eq!(result.max_bending.load_factor, 3.8);
        assert_eq!(result.max_bending.mass, 1700.0);
        assert_eq!(result.max_shear.load_factor, 3.8);
        assert_eq!(result.max_shear.mass, 1700.0);
        assert_eq!(result.max_shear.fuel_mass, 0.0);
    }

    #[test]
    fn test_net_is_lift_plus_weight() {
        let options = AnalysisOptions::default();
        let case = LoadCase::new(2.5, 1600.0);
        let condition = evaluate(&geometry(), &masses(), &aero(), case, &options).unwrap();
        let weight = structural::distribute(&geometry(), &masses(), 2.5, 100.0, &options).unwrap();
        let lift = aerodynamic::distribute(&geometry(), &aero(), case, &options).unwrap();

        assert_eq!(condition.lift_shear, lift.shear);
        assert_eq!(condition.weight_bending, weight.total_bending());
        assert_relative_eq!(
            condition.root_bending(),
            lift.bending[0] + weight.total_bending()[0],
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_ties_keep_first_condition() {
        // Same |n| with the same mass: only the sign differs, so root loads tie
        let envelope = FlightEnvelope::new(vec![
            LoadCase::new(2.0, 1600.0),
            LoadCase::new(-2.0, 1600.0),
        ]);
        let result = search(
            &geometry(),
            &masses(),
            &aero(),
            &envelope,
            &AnalysisOptions::default(),
        )
        .unwrap();
        assert_eq!(result.max_shear.load_factor, 2.0);
        assert_eq!(result.max_bending.load_factor, 2.0);
    }

    #[test]
    fn test_empty_envelope() {
        let err = search(
            &geometry(),
            &masses(),
            &aero(),
            &FlightEnvelope::new(Vec::new()),
            &AnalysisOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, LoadsError::InvalidEnvelope(_)));
    }

    #[test]
    fn test_error_propagates_from_distributor() {
        let mut masses = masses();
        masses
            .point_masses
            .insert("pod".to_string(), PointMass::new(20.0, 7.0));
        let err = search(
            &geometry(),
            &masses,
            &aero(),
            &FlightEnvelope::single(LoadCase::new(1.0, 1600.0)),
            &AnalysisOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, LoadsError::UnplacedMass { .. }));
    }
}
