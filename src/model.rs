//! Wing model - the half wing with everything it carries

use serde::{Deserialize, Serialize};

use crate::analysis::{aerodynamic, envelope, structural, AnalysisOptions};
use crate::elements::{FuelTank, MassBreakdown, PointMass, WingGeometry, WingMass};
use crate::error::{LoadsError, LoadsResult};
use crate::loads::{AerodynamicData, FlightEnvelope, LoadCase};
use crate::results::{AerodynamicLoads, EnvelopeResult, GoverningCondition, StructuralLoads};

/// Geometry, masses and aerodynamics of one half wing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WingModel {
    /// Span stations and chord
    pub geometry: WingGeometry,
    /// Point masses, wing structure and fuel
    pub masses: MassBreakdown,
    /// Lift coefficient profiles; required for lift and envelope analysis
    pub aero: Option<AerodynamicData>,
    /// Analysis options
    pub options: AnalysisOptions,
}

impl WingModel {
    /// Create a model with no masses and no aerodynamic data
    pub fn new(geometry: WingGeometry) -> Self {
        Self {
            geometry,
            masses: MassBreakdown::default(),
            aero: None,
            options: AnalysisOptions::default(),
        }
    }

    /// Set analysis options
    pub fn with_options(mut self, options: AnalysisOptions) -> Self {
        self.options = options;
        self
    }

    // ========================
    // Model Building Methods
    // ========================

    /// Add a named point mass
    pub fn add_point_mass(&mut self, name: &str, mass: PointMass) -> LoadsResult<()> {
        if self.masses.point_masses.contains_key(name) {
            return Err(LoadsError::DuplicateName(name.to_string()));
        }
        mass.validate(name, &self.geometry.span)?;
        self.masses.point_masses.insert(name.to_string(), mass);
        Ok(())
    }

    /// Set the wing structural mass
    pub fn set_wing_mass(&mut self, wing: WingMass) {
        self.masses.wing = wing;
    }

    /// Set the wing fuel tank and the aircraft zero fuel mass (kg)
    pub fn set_fuel_tank(&mut self, tank: FuelTank, zero_fuel_mass: f64) -> LoadsResult<()> {
        tank.extent.validate("fuel tank", &self.geometry.span)?;
        self.masses.fuel_tank = Some(tank);
        self.masses.zero_fuel_mass = zero_fuel_mass;
        Ok(())
    }

    /// Set the lift coefficient profiles
    pub fn set_aerodynamics(&mut self, aero: AerodynamicData) {
        self.aero = Some(aero);
    }

    // ========================
    // Analysis Methods
    // ========================

    /// Wing fuel (both wings) carried at an aircraft mass (kg)
    pub fn fuel_mass_for(&self, aircraft_mass: f64) -> f64 {
        self.masses.fuel_for(aircraft_mass)
    }

    /// Weight loads for a load factor and an explicit wing fuel mass
    pub fn structural_loads(
        &self,
        load_factor: f64,
        fuel_mass: f64,
    ) -> LoadsResult<StructuralLoads> {
        structural::distribute(&self.geometry, &self.masses, load_factor, fuel_mass, &self.options)
    }

    /// Weight loads for a load case, with the fuel that case carries
    pub fn structural_loads_for(&self, case: LoadCase) -> LoadsResult<StructuralLoads> {
        self.structural_loads(case.load_factor, self.fuel_mass_for(case.mass))
    }

    /// Trimmed lift loads for a load case
    pub fn aerodynamic_loads(&self, case: LoadCase) -> LoadsResult<AerodynamicLoads> {
        aerodynamic::distribute(&self.geometry, self.aerodynamics()?, case, &self.options)
    }

    /// Lift and weight diagrams for a single load case
    pub fn evaluate(&self, case: LoadCase) -> LoadsResult<GoverningCondition> {
        envelope::evaluate(&self.geometry, &self.masses, self.aerodynamics()?, case, &self.options)
    }

    /// Governing root shear and root bending conditions over an envelope
    pub fn analyze_envelope(
        &self,
        flight_envelope: &FlightEnvelope,
    ) -> LoadsResult<EnvelopeResult> {
        envelope::search(
            &self.geometry,
            &self.masses,
            self.aerodynamics()?,
            flight_envelope,
            &self.options,
        )
    }

    fn aerodynamics(&self) -> LoadsResult<&AerodynamicData> {
        self.aero.as_ref().ok_or_else(|| {
            LoadsError::InvalidInput("model has no aerodynamic data".to_string())
        })
    }
}
