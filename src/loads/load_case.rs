//! Load cases

use serde::{Deserialize, Serialize};
use std::fmt;

/// A flight condition: load factor applied to an aircraft mass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// Load factor (g multiples, negative for push-over)
    pub load_factor: f64,
    /// Aircraft mass (kg)
    pub mass: f64,
}

impl LoadCase {
    /// Create a new load case
    pub fn new(load_factor: f64, mass: f64) -> Self {
        Self { load_factor, mass }
    }

    /// Check that both values are finite and the mass is positive
    pub fn is_valid(&self) -> bool {
        self.load_factor.is_finite() && self.mass.is_finite() && self.mass > 0.0
    }
}

impl fmt::Display for LoadCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n = {:.3}, m = {:.1} kg", self.load_factor, self.mass)
    }
}
