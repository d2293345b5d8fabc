//! Result types for wing load analysis
//!
//! Sign convention: positive force is upward, shear is the load outboard of a
//! station, and positive bending moment bends the wing tip upward. Weight
//! contributions are therefore negative and lift contributions positive.

use serde::{Deserialize, Serialize};

use crate::math::{shear_and_bending, Diagram};

/// Loads from one group of items along the half wing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadContribution {
    /// Distributed force at each station (N/m)
    pub force_distribution: Diagram,
    /// Concentrated force attached to each station (N)
    pub point_forces: Diagram,
    /// Shear force (N)
    pub shear: Diagram,
    /// Bending moment (N·m)
    pub bending: Diagram,
}

impl LoadContribution {
    /// Integrate distributed and concentrated forces into shear and bending
    pub fn from_forces(
        stations: &[f64],
        force_distribution: Diagram,
        point_forces: Diagram,
    ) -> Self {
        let (shear, bending) = shear_and_bending(
            stations,
            force_distribution.as_slice(),
            point_forces.as_slice(),
        );
        Self {
            force_distribution,
            point_forces,
            shear,
            bending,
        }
    }

    /// A contribution that is zero everywhere
    pub fn zero(len: usize) -> Self {
        Self {
            force_distribution: Diagram::zeros(len),
            point_forces: Diagram::zeros(len),
            shear: Diagram::zeros(len),
            bending: Diagram::zeros(len),
        }
    }

    /// Shear at the root (N)
    pub fn root_shear(&self) -> f64 {
        self.shear[0]
    }

    /// Bending moment at the root (N·m)
    pub fn root_bending(&self) -> f64 {
        self.bending[0]
    }

    /// Length of every diagram in this contribution
    pub fn lengths(&self) -> [usize; 4] {
        [
            self.force_distribution.len(),
            self.point_forces.len(),
            self.shear.len(),
            self.bending.len(),
        ]
    }
}

/// Ultimate structural (weight) loads on the half wing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralLoads {
    /// Load factor the weights were scaled by
    pub load_factor: f64,
    /// Wing fuel of both wings used for this case (kg)
    pub fuel_mass: f64,
    /// Engines, nacelles, landing gear and other point masses
    pub point_mass: LoadContribution,
    /// Wing structural mass
    pub wing: LoadContribution,
    /// Fuel in the wing tank
    pub fuel: LoadContribution,
}

impl StructuralLoads {
    /// Total weight shear (N)
    pub fn total_shear(&self) -> Diagram {
        &self.point_mass.shear + &self.wing.shear + &self.fuel.shear
    }

    /// Total weight bending moment (N·m)
    pub fn total_bending(&self) -> Diagram {
        &self.point_mass.bending + &self.wing.bending + &self.fuel.bending
    }

    pub(crate) fn contributions(&self) -> [(&'static str, &LoadContribution); 3] {
        [
            ("point mass", &self.point_mass),
            ("wing", &self.wing),
            ("fuel", &self.fuel),
        ]
    }
}

/// Ultimate aerodynamic (lift) loads on the half wing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AerodynamicLoads {
    /// Load factor the lift is trimmed to
    pub load_factor: f64,
    /// Aircraft mass the lift is trimmed to (kg)
    pub mass: f64,
    /// Factor applied to the raw CL·q·c distribution to reach trim
    pub trim_factor: f64,
    /// Lift per unit span (N/m)
    pub force_distribution: Diagram,
    /// Lift shear (N)
    pub shear: Diagram,
    /// Lift bending moment (N·m)
    pub bending: Diagram,
}

/// A sizing condition retained by the envelope search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoverningCondition {
    /// Load factor
    pub load_factor: f64,
    /// Aircraft mass (kg)
    pub mass: f64,
    /// Wing fuel of both wings (kg)
    pub fuel_mass: f64,
    /// Shear from lift alone (N)
    pub lift_shear: Diagram,
    /// Shear from weight alone (N)
    pub weight_shear: Diagram,
    /// Bending moment from lift alone (N·m)
    pub lift_bending: Diagram,
    /// Bending moment from weight alone (N·m)
    pub weight_bending: Diagram,
}

impl GoverningCondition {
    /// Net shear, lift plus weight (N)
    pub fn net_shear(&self) -> Diagram {
        &self.lift_shear + &self.weight_shear
    }

    /// Net bending moment, lift plus weight (N·m)
    pub fn net_bending(&self) -> Diagram {
        &self.lift_bending + &self.weight_bending
    }

    /// Net shear at the root (N)
    pub fn root_shear(&self) -> f64 {
        self.lift_shear[0] + self.weight_shear[0]
    }

    /// Net bending moment at the root (N·m)
    pub fn root_bending(&self) -> f64 {
        self.lift_bending[0] + self.weight_bending[0]
    }
}

/// Outcome of an envelope search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeResult {
    /// Condition with the largest root shear magnitude
    pub max_shear: GoverningCondition,
    /// Condition with the largest root bending moment magnitude
    pub max_bending: GoverningCondition,
    /// Number of conditions evaluated
    pub candidates: usize,
}
