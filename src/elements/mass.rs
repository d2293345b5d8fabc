//! Mass items carried by the wing: point masses, wing structure and fuel

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::elements::SpanDiscretization;
use crate::error::{LoadsError, LoadsResult};
use crate::math::Diagram;

/// A spanwise interval `[start, end]` in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpanExtent {
    /// Inboard edge (m)
    pub start: f64,
    /// Outboard edge (m)
    pub end: f64,
}

impl SpanExtent {
    /// Create a new extent
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Create an extent of the given width centred on a position
    pub fn centered(center: f64, width: f64) -> Self {
        Self::new(center - width / 2.0, center + width / 2.0)
    }

    /// Width of the extent (m)
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Midpoint of the extent (m)
    pub fn center(&self) -> f64 {
        0.5 * (self.start + self.end)
    }

    /// 1 at stations covered by the extent, 0 elsewhere
    ///
    /// On a doubled station at an edge only the station facing the extent is
    /// covered, so a piecewise-constant load starts and stops exactly there.
    pub fn indicator(&self, stations: &[f64]) -> Diagram {
        let n = stations.len();
        Diagram::from_fn(n, |i, _| {
            let y = stations[i];
            let outside = y < self.start || y > self.end;
            let inboard_of_start = y == self.start && i + 1 < n && stations[i + 1] == y;
            let outboard_of_end = y == self.end && i > 0 && stations[i - 1] == y;
            if outside || inboard_of_start || outboard_of_end {
                0.0
            } else {
                1.0
            }
        })
    }

    /// Check that the extent is ordered and lies on the span
    pub fn validate(&self, what: &str, span: &SpanDiscretization) -> LoadsResult<()> {
        let ordered = self.start.is_finite() && self.end.is_finite() && self.start <= self.end;
        if !ordered || !span.contains(self.start) || !span.contains(self.end) {
            return Err(LoadsError::InvalidExtent {
                what: what.to_string(),
                start: self.start,
                end: self.end,
                root: span.root(),
                tip: span.tip(),
            });
        }
        Ok(())
    }
}

/// A mass attached to the half wing (engine, nacelle, landing gear)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointMass {
    /// Mass carried by one half wing (kg)
    pub mass: f64,
    /// Span position of the centre of gravity (m)
    pub position: f64,
    /// Optional extent over which the weight is smeared
    pub extent: Option<SpanExtent>,
}

impl PointMass {
    /// Create a concentrated mass
    pub fn new(mass: f64, position: f64) -> Self {
        Self {
            mass,
            position,
            extent: None,
        }
    }

    /// Create a mass smeared over `width` centred on `position`
    pub fn with_width(mass: f64, position: f64, width: f64) -> Self {
        Self {
            mass,
            position,
            extent: Some(SpanExtent::centered(position, width)),
        }
    }

    /// Set an explicit extent
    pub fn with_extent(mut self, extent: SpanExtent) -> Self {
        self.extent = Some(extent);
        self
    }

    /// Check placement against the span
    pub fn validate(&self, name: &str, span: &SpanDiscretization) -> LoadsResult<()> {
        if !self.mass.is_finite() || self.mass < 0.0 {
            return Err(LoadsError::InvalidInput(format!(
                "point mass '{name}' has invalid mass {}",
                self.mass
            )));
        }
        if !span.contains(self.position) {
            return Err(LoadsError::UnplacedMass {
                name: name.to_string(),
                position: self.position,
                root: span.root(),
                tip: span.tip(),
            });
        }
        if let Some(extent) = &self.extent {
            extent.validate(&format!("point mass '{name}'"), span)?;
        }
        Ok(())
    }
}

/// Spanwise shape used to spread a total wing mass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MassShape {
    /// Constant mass per unit span
    Uniform,
    /// Mass per unit span proportional to the local chord
    #[default]
    ChordProportional,
}

/// Structural mass of the wing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WingMass {
    /// Half-wing mass per unit span at each station (kg/m)
    PerUnitSpan(Vec<f64>),
    /// Total mass of both wings spread with a shape function (kg)
    Total { mass: f64, shape: MassShape },
}

impl Default for WingMass {
    fn default() -> Self {
        WingMass::Total {
            mass: 0.0,
            shape: MassShape::default(),
        }
    }
}

/// Wing fuel tank
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelTank {
    /// Spanwise extent of the tank
    pub extent: SpanExtent,
    /// Fuel capacity of both wings (kg)
    pub capacity: f64,
}

impl FuelTank {
    /// Create a new tank
    pub fn new(start: f64, end: f64, capacity: f64) -> Self {
        Self {
            extent: SpanExtent::new(start, end),
            capacity,
        }
    }
}

/// Every mass item the structural distributor needs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MassBreakdown {
    /// Point masses by name
    pub point_masses: BTreeMap<String, PointMass>,
    /// Wing structural mass
    pub wing: WingMass,
    /// Wing fuel tank, if any
    pub fuel_tank: Option<FuelTank>,
    /// Maximum zero fuel mass of the aircraft (kg)
    pub zero_fuel_mass: f64,
}

impl MassBreakdown {
    /// Wing fuel (both wings) carried at a given aircraft mass (kg)
    ///
    /// Everything above the zero fuel mass is fuel, up to the tank capacity.
    pub fn fuel_for(&self, aircraft_mass: f64) -> f64 {
        match &self.fuel_tank {
            Some(tank) => (aircraft_mass - self.zero_fuel_mass)
                .max(0.0)
                .min(tank.capacity.max(0.0)),
            None => 0.0,
        }
    }
}
