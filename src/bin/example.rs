//! Wing Loads Example - Light Twin
//!
//! Without arguments, builds a light twin half wing and prints the governing
//! conditions of its flight envelope. With `<inputs.json> [outputs.json]`,
//! reads the model from a variable store and writes the results back.

use anyhow::{Context, Result};
use std::env;

use wing_loads::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    match args.get(1) {
        Some(inputs) => run_store(inputs, args.get(2).map(String::as_str)),
        None => run_light_twin(),
    }
}

fn run_store(inputs: &str, outputs: Option<&str>) -> Result<()> {
    let store = VariableStore::load(inputs).with_context(|| format!("reading {inputs}"))?;
    let model = WingModel::from_store(&store, AnalysisOptions::default())?;
    let envelope = FlightEnvelope::from_store(&store)?;
    let result = model.analyze_envelope(&envelope)?;
    print_result(&result);

    if let Some(outputs) = outputs {
        let mut results = VariableStore::new();
        model.geometry.span.write_to(&mut results);
        result.write_to(&mut results);

        let governing = LoadCase::new(result.max_bending.load_factor, result.max_bending.mass);
        model.structural_loads_for(governing)?.write_to(&mut results);
        model.aerodynamic_loads(governing)?.write_to(&mut results);

        results.save(outputs).with_context(|| format!("writing {outputs}"))?;
        println!("\nResults written to {outputs}");
    }
    Ok(())
}

fn run_light_twin() -> Result<()> {
    println!("=== Wing Loads Example: Light Twin ===\n");

    // Half span from the fuselage side (0.6 m) to the tip (5.8 m), tapered
    let span = SpanDiscretization::uniform(0.6, 5.8, 41)?.with_breakpoints(&[0.9, 1.6, 2.4, 3.2])?;
    let geometry = WingGeometry::from_chord_table(span, &[0.6, 2.0, 5.8], &[1.65, 1.65, 1.1])?;

    let mut model = WingModel::new(geometry)
        .with_options(AnalysisOptions::default().with_ultimate_factor(1.5));

    // Engine and nacelle smeared over the nacelle width, main gear concentrated
    model.add_point_mass(
        "engine",
        PointMass::new(210.0, 2.0).with_extent(SpanExtent::new(1.6, 2.4)),
    )?;
    model.add_point_mass("main_gear", PointMass::new(38.0, 1.9))?;
    model.set_wing_mass(WingMass::Total {
        mass: 230.0,
        shape: MassShape::ChordProportional,
    });
    model.set_fuel_tank(FuelTank::new(0.9, 3.2, 300.0), 1520.0)?;

    // Roughly elliptic clean wing loading, plus a slipstream behind the propeller
    let positions: Vec<f64> = (0..=13).map(|i| 0.6 + 0.4 * i as f64).collect();
    let cl: Vec<f64> = positions
        .iter()
        .map(|y| 0.75 * (1.0 - (y / 6.0).powi(2)).max(0.0).sqrt())
        .collect();
    let clean = LiftProfile::at_velocity(positions.clone(), cl, 52.0)?;
    let increment = LiftProfile::at_velocity(positions, vec![0.08; 14], 61.0)?;
    let slipstream = Slipstream::new(increment, SpanExtent::new(1.6, 2.4));
    model.set_aerodynamics(AerodynamicData::clean(clean).with_slipstream(slipstream));

    // Limit manoeuvre envelope, positive and negative, at MZFW and MTOW
    let envelope = FlightEnvelope::rectangular((-1.52, 3.8), (1520.0, 1780.0)).with_sampling(5, 3);

    println!("Running envelope search...\n");
    let result = model.analyze_envelope(&envelope)?;
    print_result(&result);

    println!("\n=== Analysis Complete ===");
    Ok(())
}

fn print_result(result: &EnvelopeResult) {
    println!("Conditions evaluated: {}", result.candidates);
    for (title, condition) in [
        ("Max root shear", &result.max_shear),
        ("Max root bending", &result.max_bending),
    ] {
        println!("\n{title}:");
        println!(
            "  n = {:.2}, m = {:.1} kg, wing fuel = {:.1} kg",
            condition.load_factor, condition.mass, condition.fuel_mass
        );
        println!(
            "  Root shear: {:.2} kN (lift {:.2}, weight {:.2})",
            condition.root_shear() / 1000.0,
            condition.lift_shear[0] / 1000.0,
            condition.weight_shear[0] / 1000.0
        );
        println!(
            "  Root bending: {:.2} kN·m (lift {:.2}, weight {:.2})",
            condition.root_bending() / 1000.0,
            condition.lift_bending[0] / 1000.0,
            condition.weight_bending[0] / 1000.0
        );
    }
}
