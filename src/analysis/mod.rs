//! Load distributors, envelope search and their options

pub mod aerodynamic;
pub mod envelope;
pub mod structural;

use serde::{Deserialize, Serialize};

use crate::error::{LoadsError, LoadsResult};

/// Options shared by every load computation
///
/// All values are SI. Missing fields take their defaults when read from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Gravitational acceleration (m/s²)
    pub gravity: f64,
    /// Air density used for dynamic pressure (kg/m³)
    pub air_density: f64,
    /// Ratio of full-wing to half-wing load; 2 for a symmetric wing
    pub symmetry_factor: f64,
    /// Multiplier turning limit load factors into ultimate ones
    pub ultimate_factor: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            air_density: 1.225,
            symmetry_factor: 2.0,
            ultimate_factor: 1.0,
        }
    }
}

impl AnalysisOptions {
    /// Read options from JSON
    pub fn from_json(json: &str) -> LoadsResult<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Set gravitational acceleration
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set air density
    pub fn with_air_density(mut self, air_density: f64) -> Self {
        self.air_density = air_density;
        self
    }

    /// Set the half-wing to full-wing factor
    pub fn with_symmetry_factor(mut self, symmetry_factor: f64) -> Self {
        self.symmetry_factor = symmetry_factor;
        self
    }

    /// Set the ultimate load multiplier
    pub fn with_ultimate_factor(mut self, ultimate_factor: f64) -> Self {
        self.ultimate_factor = ultimate_factor;
        self
    }

    /// Check that every option is finite and positive
    pub fn validate(&self) -> LoadsResult<()> {
        for (name, value) in [
            ("gravity", self.gravity),
            ("air_density", self.air_density),
            ("symmetry_factor", self.symmetry_factor),
            ("ultimate_factor", self.ultimate_factor),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LoadsError::InvalidInput(format!(
                    "option '{name}' must be finite and positive, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Acceleration applied to every mass for a load factor (m/s²)
    pub fn ultimate_acceleration(&self, load_factor: f64) -> f64 {
        load_factor * self.ultimate_factor * self.gravity
    }
}
