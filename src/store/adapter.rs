//! Reading a wing model from the store and publishing results into it

use log::debug;
use std::collections::{BTreeMap, BTreeSet};

use super::keys;
use super::{Quantity, VariableStore};
use crate::analysis::AnalysisOptions;
use crate::elements::{
    FuelTank, MassShape, PointMass, SpanDiscretization, SpanExtent, WingGeometry, WingMass,
};
use crate::error::{LoadsError, LoadsResult};
use crate::loads::{
    unpadded_len, AerodynamicData, FlightEnvelope, LiftProfile, LoadCase, Slipstream,
};
use crate::math::remap;
use crate::model::WingModel;
use crate::results::{
    AerodynamicLoads, EnvelopeResult, GoverningCondition, LoadContribution, StructuralLoads,
};

impl WingModel {
    /// Build a model from stored inputs
    ///
    /// Span stations come from `data:loads:wing:span_stations` when present,
    /// otherwise from the chord table. Point mass extents, fuel tank edges and
    /// the slipstream zone edges are inserted as breakpoints.
    pub fn from_store(store: &VariableStore, options: AnalysisOptions) -> LoadsResult<Self> {
        options.validate()?;

        let (chord_y, chord) = read_chord_table(store)?;
        let base = if store.contains(keys::SPAN_STATIONS) {
            SpanDiscretization::new(store.get_vector(keys::SPAN_STATIONS, Quantity::Length)?)?
        } else {
            SpanDiscretization::new(chord_y.clone())?
        };

        let point_masses = read_point_masses(store)?;
        let tank = read_fuel_tank(store)?;
        let aero = read_aerodynamics(store)?;

        let mut breakpoints = Vec::new();
        for extent in point_masses.values().filter_map(|m| m.extent) {
            breakpoints.extend([extent.start, extent.end]);
        }
        if let Some(tank) = &tank {
            breakpoints.extend([tank.extent.start, tank.extent.end]);
        }
        if let Some(slipstream) = aero.as_ref().and_then(|a| a.slipstream.as_ref()) {
            breakpoints.extend([slipstream.zone.start, slipstream.zone.end]);
        }
        let span = base.with_breakpoints(&breakpoints)?;
        let geometry = WingGeometry::from_chord_table(span, &chord_y, &chord)?;
        let wing = read_wing_mass(store, &base, &geometry.span)?;

        let mut model = WingModel::new(geometry).with_options(options);
        for (name, mass) in point_masses {
            model.add_point_mass(&name, mass)?;
        }
        model.set_wing_mass(wing);
        if let Some(tank) = tank {
            let zero_fuel_mass = store.get_scalar(keys::MAX_ZERO_FUEL_WEIGHT, Quantity::Mass)?;
            model.set_fuel_tank(tank, zero_fuel_mass)?;
        }
        if let Some(aero) = aero {
            model.set_aerodynamics(aero);
        }

        debug!(
            "wing model read from store: {} stations, {} point masses",
            model.geometry.len(),
            model.masses.point_masses.len()
        );
        Ok(model)
    }
}

impl FlightEnvelope {
    /// Read envelope vertices from paired load factor and mass vectors
    pub fn from_store(store: &VariableStore) -> LoadsResult<Self> {
        let load_factors = store.get_vector(keys::ENVELOPE_LOAD_FACTOR, Quantity::Dimensionless)?;
        let masses = store.get_vector(keys::ENVELOPE_MASS, Quantity::Mass)?;
        if load_factors.len() != masses.len() {
            return Err(LoadsError::DimensionMismatch {
                what: "envelope masses".to_string(),
                expected: load_factors.len(),
                found: masses.len(),
            });
        }

        let vertices = load_factors
            .into_iter()
            .zip(masses)
            .map(|(n, m)| LoadCase::new(n, m))
            .collect();
        Ok(FlightEnvelope::new(vertices))
    }
}

impl SpanDiscretization {
    /// Publish the stations all result vectors refer to
    pub fn write_to(&self, store: &mut VariableStore) {
        store.set_vector(keys::Y_VECTOR, self.as_slice().to_vec(), Some("m"));
    }
}

impl EnvelopeResult {
    /// Publish both governing conditions
    pub fn write_to(&self, store: &mut VariableStore) {
        write_condition(store, keys::MAX_SHEAR, &self.max_shear);
        write_condition(store, keys::MAX_RBM, &self.max_bending);
    }
}

impl StructuralLoads {
    /// Publish the weight diagrams of each mass group
    pub fn write_to(&self, store: &mut VariableStore) {
        for (group, contribution) in [
            ("point_mass", &self.point_mass),
            ("wing", &self.wing),
            ("fuel", &self.fuel),
        ] {
            write_contribution(store, group, contribution);
        }
    }
}

impl AerodynamicLoads {
    /// Publish the lift diagrams
    pub fn write_to(&self, store: &mut VariableStore) {
        let prefix = keys::AERODYNAMIC_ULTIMATE;
        store.set_vector(
            &format!("{prefix}:force_distribution"),
            self.force_distribution.as_slice().to_vec(),
            Some("N/m"),
        );
        store.set_vector(
            &format!("{prefix}:shear"),
            self.shear.as_slice().to_vec(),
            Some("N"),
        );
        store.set_vector(
            &format!("{prefix}:root_bending"),
            self.bending.as_slice().to_vec(),
            Some("N*m"),
        );
    }
}

fn write_condition(store: &mut VariableStore, prefix: &str, condition: &GoverningCondition) {
    store.set_scalar(&format!("{prefix}:load_factor"), condition.load_factor, None);
    store.set_scalar(&format!("{prefix}:mass"), condition.mass, Some("kg"));
    store.set_scalar(&format!("{prefix}:fuel_mass"), condition.fuel_mass, Some("kg"));
    for (name, diagram, units) in [
        ("lift_shear", &condition.lift_shear, "N"),
        ("weight_shear", &condition.weight_shear, "N"),
        ("lift_rbm", &condition.lift_bending, "N*m"),
        ("weight_rbm", &condition.weight_bending, "N*m"),
    ] {
        store.set_vector(
            &format!("{prefix}:{name}"),
            diagram.as_slice().to_vec(),
            Some(units),
        );
    }
}

fn write_contribution(store: &mut VariableStore, group: &str, contribution: &LoadContribution) {
    let prefix = keys::STRUCTURE_ULTIMATE;
    for (name, diagram, units) in [
        ("force_distribution", &contribution.force_distribution, "N/m"),
        ("point_forces", &contribution.point_forces, "N"),
        ("shear", &contribution.shear, "N"),
        ("root_bending", &contribution.bending, "N*m"),
    ] {
        store.set_vector(
            &format!("{prefix}:{name}:{group}"),
            diagram.as_slice().to_vec(),
            Some(units),
        );
    }
}

fn read_chord_table(store: &VariableStore) -> LoadsResult<(Vec<f64>, Vec<f64>)> {
    let mut y = store.get_vector(keys::WING_Y_VECTOR, Quantity::Length)?;
    let mut chord = store.get_vector(keys::WING_CHORD_VECTOR, Quantity::Length)?;
    let len = unpadded_len(keys::WING_Y_VECTOR, &y);
    y.truncate(len);
    chord.truncate(len);
    Ok((y, chord))
}

fn read_point_masses(store: &VariableStore) -> LoadsResult<BTreeMap<String, PointMass>> {
    let prefix = keys::POINT_MASS_PREFIX;
    let names: BTreeSet<&str> = store
        .keys_with_prefix(prefix)
        .filter_map(|key| key[prefix.len()..].split(':').next())
        .filter(|name| !name.is_empty())
        .collect();

    let mut point_masses = BTreeMap::new();
    for name in names {
        let mass = store.get_scalar(&format!("{prefix}{name}:mass"), Quantity::Mass)?;
        let position = store.get_scalar(&format!("{prefix}{name}:y"), Quantity::Length)?;
        let width = store.get_scalar_opt(&format!("{prefix}{name}:span"), Quantity::Length)?;

        let point_mass = match width {
            Some(width) if width > 0.0 => PointMass::with_width(mass, position, width),
            _ => PointMass::new(mass, position),
        };
        point_masses.insert(name.to_string(), point_mass);
    }
    Ok(point_masses)
}

fn read_fuel_tank(store: &VariableStore) -> LoadsResult<Option<FuelTank>> {
    if !store.contains(keys::TANK_Y_START) && !store.contains(keys::TANK_Y_END) {
        return Ok(None);
    }
    let start = store.get_scalar(keys::TANK_Y_START, Quantity::Length)?;
    let end = store.get_scalar(keys::TANK_Y_END, Quantity::Length)?;
    let capacity = store.get_scalar(keys::MAX_FUEL_WEIGHT, Quantity::Mass)?;
    Ok(Some(FuelTank::new(start, end, capacity)))
}

fn read_wing_mass(
    store: &VariableStore,
    base: &SpanDiscretization,
    span: &SpanDiscretization,
) -> LoadsResult<WingMass> {
    if store.contains(keys::WING_MASS_PER_UNIT_SPAN) {
        let values = store.get_vector(keys::WING_MASS_PER_UNIT_SPAN, Quantity::MassPerLength)?;
        if values.len() != base.len() {
            return Err(LoadsError::DimensionMismatch {
                what: "wing mass per unit span".to_string(),
                expected: base.len(),
                found: values.len(),
            });
        }
        let on_stations = remap(base.as_slice(), &values, span.as_slice());
        return Ok(WingMass::PerUnitSpan(on_stations.as_slice().to_vec()));
    }

    match store.get_scalar_opt(keys::WING_MASS, Quantity::Mass)? {
        Some(mass) => Ok(WingMass::Total {
            mass,
            shape: MassShape::ChordProportional,
        }),
        None => Ok(WingMass::default()),
    }
}

fn read_aerodynamics(store: &VariableStore) -> LoadsResult<Option<AerodynamicData>> {
    if !store.contains(keys::CLEAN_CL_VECTOR) {
        return Ok(None);
    }
    let clean = read_profile(
        store,
        keys::CLEAN_Y_VECTOR,
        keys::CLEAN_CL_VECTOR,
        keys::CLEAN_VELOCITY,
    )?;
    let mut aero = AerodynamicData::clean(clean);

    if store.contains(keys::SLIPSTREAM_CL_VECTOR) {
        let profile = read_profile(
            store,
            keys::SLIPSTREAM_Y_VECTOR,
            keys::SLIPSTREAM_CL_VECTOR,
            keys::SLIPSTREAM_VELOCITY,
        )?;
        let start = store.get_scalar_opt(keys::SLIPSTREAM_Y_START, Quantity::Length)?;
        let end = store.get_scalar_opt(keys::SLIPSTREAM_Y_END, Quantity::Length)?;
        let slipstream = match (start, end) {
            (Some(start), Some(end)) => Slipstream::new(profile, SpanExtent::new(start, end)),
            _ => Slipstream::over_profile(profile)?,
        };
        aero = aero.with_slipstream(slipstream);
    }

    Ok(Some(aero))
}

fn read_profile(
    store: &VariableStore,
    y_key: &str,
    cl_key: &str,
    velocity_key: &str,
) -> LoadsResult<LiftProfile> {
    let mut y = store.get_vector(y_key, Quantity::Length)?;
    let mut cl = store.get_vector(cl_key, Quantity::Dimensionless)?;
    let velocity = store.get_scalar(velocity_key, Quantity::Velocity)?;

    let len = unpadded_len(y_key, &y);
    y.truncate(len);
    cl.truncate(len);
    LiftProfile::at_velocity(y, cl, velocity)
}
