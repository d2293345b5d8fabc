//! Structural load distributor
//!
//! Turns the masses carried by the half wing into ultimate weight forces
//! (downward, hence negative) and integrates them into shear and bending
//! moment diagrams. Point masses, wing structure and fuel are kept apart so
//! downstream sizing can use each one separately.

use log::debug;

use super::AnalysisOptions;
use crate::elements::{
    FuelTank, MassBreakdown, MassShape, SpanDiscretization, SpanExtent, WingGeometry, WingMass,
};
use crate::error::{LoadsError, LoadsResult};
use crate::math::{trapezoid, Diagram};
use crate::results::{LoadContribution, StructuralLoads};

/// Compute the ultimate weight loads for one load factor
///
/// # Arguments
/// * `geometry` - Span stations and chords of the half wing
/// * `masses` - Point masses, wing mass and fuel tank
/// * `load_factor` - Load factor applied to every mass
/// * `fuel_mass` - Wing fuel of both wings (kg)
/// * `options` - Gravity, symmetry and ultimate factors
pub fn distribute(
    geometry: &WingGeometry,
    masses: &MassBreakdown,
    load_factor: f64,
    fuel_mass: f64,
    options: &AnalysisOptions,
) -> LoadsResult<StructuralLoads> {
    options.validate()?;
    validate(geometry, masses, load_factor, fuel_mass)?;

    let acceleration = options.ultimate_acceleration(load_factor);

    let point_mass = point_mass_loads(&geometry.span, masses, acceleration);
    let wing = wing_loads(geometry, &masses.wing, acceleration, options)?;
    let fuel = fuel_loads(
        &geometry.span,
        masses.fuel_tank.as_ref(),
        fuel_mass,
        acceleration,
        options,
    );

    debug!(
        "structural loads at n = {load_factor}: fuel {fuel_mass:.1} kg, \
         root shear point/wing/fuel = {:.1}/{:.1}/{:.1} N",
        point_mass.root_shear(),
        wing.root_shear(),
        fuel.root_shear()
    );

    Ok(StructuralLoads {
        load_factor,
        fuel_mass,
        point_mass,
        wing,
        fuel,
    })
}

fn validate(
    geometry: &WingGeometry,
    masses: &MassBreakdown,
    load_factor: f64,
    fuel_mass: f64,
) -> LoadsResult<()> {
    geometry.validate()?;
    let span = &geometry.span;

    if !load_factor.is_finite() {
        return Err(LoadsError::InvalidInput(format!(
            "load factor must be finite, got {load_factor}"
        )));
    }

    for (name, point_mass) in &masses.point_masses {
        point_mass.validate(name, span)?;
    }

    match &masses.wing {
        WingMass::PerUnitSpan(values) => {
            if values.len() != span.len() {
                return Err(LoadsError::DimensionMismatch {
                    what: "wing mass per unit span".to_string(),
                    expected: span.len(),
                    found: values.len(),
                });
            }
            if values.iter().any(|v| !v.is_finite()) {
                return Err(LoadsError::InvalidInput(
                    "wing mass per unit span contains non-finite values".to_string(),
                ));
            }
        }
        WingMass::Total { mass, .. } => {
            if !mass.is_finite() || *mass < 0.0 {
                return Err(LoadsError::InvalidInput(format!(
                    "wing mass must be finite and non-negative, got {mass}"
                )));
            }
        }
    }

    if !fuel_mass.is_finite() || fuel_mass < 0.0 {
        return Err(LoadsError::InvalidInput(format!(
            "fuel mass must be finite and non-negative, got {fuel_mass}"
        )));
    }
    match &masses.fuel_tank {
        Some(tank) => {
            tank.extent.validate("fuel tank", span)?;
            if !tank.capacity.is_finite() || tank.capacity < 0.0 {
                return Err(LoadsError::InvalidInput(format!(
                    "fuel tank capacity must be finite and non-negative, got {}",
                    tank.capacity
                )));
            }
            if fuel_mass > tank.capacity {
                return Err(LoadsError::InvalidInput(format!(
                    "{fuel_mass} kg of wing fuel exceeds the tank capacity of {} kg",
                    tank.capacity
                )));
            }
        }
        None if fuel_mass > 0.0 => {
            return Err(LoadsError::InvalidInput(format!(
                "{fuel_mass} kg of wing fuel but no fuel tank defined"
            )));
        }
        None => {}
    }

    Ok(())
}

fn point_mass_loads(
    span: &SpanDiscretization,
    masses: &MassBreakdown,
    acceleration: f64,
) -> LoadContribution {
    let x = span.as_slice();
    let mut distributed = Diagram::zeros(x.len());
    let mut concentrated = Diagram::zeros(x.len());

    for (name, point_mass) in &masses.point_masses {
        let force = -point_mass.mass * acceleration;
        let spread = point_mass
            .extent
            .filter(|extent| extent.width() > 0.0)
            .and_then(|extent| spread_uniform(x, &extent, force));

        match spread {
            Some(forces) => distributed += forces,
            None => {
                if point_mass.extent.is_some() {
                    debug!(
                        "point mass '{name}' extent covers no span station, applied at y = {} m",
                        point_mass.position
                    );
                }
                add_concentrated(span, &mut concentrated, point_mass.position, force);
            }
        }
    }

    LoadContribution::from_forces(x, distributed, concentrated)
}

fn wing_loads(
    geometry: &WingGeometry,
    wing: &WingMass,
    acceleration: f64,
    options: &AnalysisOptions,
) -> LoadsResult<LoadContribution> {
    let x = geometry.span.as_slice();
    let n = x.len();

    let mass_per_span = match wing {
        WingMass::PerUnitSpan(values) => Diagram::from_vec(values.clone()),
        WingMass::Total { mass, .. } if *mass == 0.0 => Diagram::zeros(n),
        WingMass::Total { mass, shape } => {
            let shape_values = match shape {
                MassShape::Uniform => Diagram::from_element(n, 1.0),
                MassShape::ChordProportional => geometry.chord().clone(),
            };
            let integral = trapezoid(x, shape_values.as_slice());
            if integral <= 0.0 {
                return Err(LoadsError::InvalidGeometry(
                    "wing mass shape integrates to zero over the span".to_string(),
                ));
            }
            shape_values * (mass / options.symmetry_factor / integral)
        }
    };

    let force = mass_per_span * -acceleration;
    Ok(LoadContribution::from_forces(x, force, Diagram::zeros(n)))
}

fn fuel_loads(
    span: &SpanDiscretization,
    tank: Option<&FuelTank>,
    fuel_mass: f64,
    acceleration: f64,
    options: &AnalysisOptions,
) -> LoadContribution {
    let x = span.as_slice();
    let Some(tank) = tank.filter(|_| fuel_mass > 0.0) else {
        return LoadContribution::zero(x.len());
    };

    let force = -fuel_mass / options.symmetry_factor * acceleration;
    let mut distributed = Diagram::zeros(x.len());
    let mut concentrated = Diagram::zeros(x.len());

    match spread_uniform(x, &tank.extent, force) {
        Some(forces) => distributed = forces,
        None => add_concentrated(span, &mut concentrated, tank.extent.center(), force),
    }

    LoadContribution::from_forces(x, distributed, concentrated)
}

/// Force per unit span spreading `force` uniformly over `extent`
///
/// The level is chosen so the trapezoidal integral equals `force` exactly.
/// Returns `None` when no station lies inside the extent.
fn spread_uniform(x: &[f64], extent: &SpanExtent, force: f64) -> Option<Diagram> {
    let indicator = extent.indicator(x);
    let width = trapezoid(x, indicator.as_slice());
    if width <= 0.0 {
        return None;
    }
    Some(indicator * (force / width))
}

/// Split a concentrated force between the two stations around `position`
fn add_concentrated(span: &SpanDiscretization, forces: &mut Diagram, position: f64, force: f64) {
    if let Some(split) = span.split(position) {
        forces[split.inboard] += force * (1.0 - split.outboard_weight);
        forces[split.outboard] += force * split.outboard_weight;
    }
}
