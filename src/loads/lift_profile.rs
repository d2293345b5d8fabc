//! Lift coefficient profiles supplied by the aerodynamic models

use log::warn;
use serde::{Deserialize, Serialize};

use crate::elements::SpanExtent;
use crate::error::{LoadsError, LoadsResult};

/// Section lift coefficient and local velocity tabulated along the span
///
/// The profile's stations need not match the shared span discretization;
/// it is re-mapped by linear interpolation before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LiftProfileData")]
pub struct LiftProfile {
    /// Span positions (m), non-decreasing
    pub positions: Vec<f64>,
    /// Section lift coefficient at each position
    pub lift_coefficients: Vec<f64>,
    /// Local velocity at each position (m/s)
    pub velocities: Vec<f64>,
}

#[derive(Deserialize)]
struct LiftProfileData {
    positions: Vec<f64>,
    lift_coefficients: Vec<f64>,
    velocities: Vec<f64>,
}

impl TryFrom<LiftProfileData> for LiftProfile {
    type Error = LoadsError;

    fn try_from(data: LiftProfileData) -> LoadsResult<Self> {
        Self::new(data.positions, data.lift_coefficients, data.velocities)
    }
}

impl LiftProfile {
    /// Create a profile with a local velocity per position
    pub fn new(
        positions: Vec<f64>,
        lift_coefficients: Vec<f64>,
        velocities: Vec<f64>,
    ) -> LoadsResult<Self> {
        let profile = Self {
            positions,
            lift_coefficients,
            velocities,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Create a profile at a single velocity
    pub fn at_velocity(
        positions: Vec<f64>,
        lift_coefficients: Vec<f64>,
        velocity: f64,
    ) -> LoadsResult<Self> {
        let velocities = vec![velocity; positions.len()];
        Self::new(positions, lift_coefficients, velocities)
    }

    /// Check lengths, finiteness and ordering of the tabulated values
    pub fn validate(&self) -> LoadsResult<()> {
        for (what, len) in [
            ("lift coefficients", self.lift_coefficients.len()),
            ("local velocities", self.velocities.len()),
        ] {
            if len != self.positions.len() {
                return Err(LoadsError::DimensionMismatch {
                    what: what.to_string(),
                    expected: self.positions.len(),
                    found: len,
                });
            }
        }
        if self.positions.is_empty() {
            return Err(LoadsError::InvalidInput(
                "lift profile has no stations".to_string(),
            ));
        }
        let all_finite = self
            .positions
            .iter()
            .chain(&self.lift_coefficients)
            .chain(&self.velocities)
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(LoadsError::InvalidInput(
                "lift profile contains non-finite values".to_string(),
            ));
        }
        if self.positions.windows(2).any(|w| w[1] < w[0]) {
            return Err(LoadsError::InvalidInput(
                "lift profile positions must be non-decreasing".to_string(),
            ));
        }
        Ok(())
    }

    /// Fail when a station with lift has no dynamic pressure
    pub fn check_velocities(&self) -> LoadsResult<()> {
        let stalled = self
            .positions
            .iter()
            .zip(&self.lift_coefficients)
            .zip(&self.velocities)
            .find(|((_, cl), v)| **cl != 0.0 && **v <= 0.0);

        match stalled {
            Some(((&position, _), &velocity)) => {
                Err(LoadsError::ZeroVelocity { position, velocity })
            }
            None => Ok(()),
        }
    }

    /// Number of stations
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false for a validated profile
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Number of leading entries kept once trailing zero padding is removed
///
/// Stored span vectors often have a fixed length with the unused tail
/// filled with zeros; a zero position after the first one is padding.
/// `what` names the vector in the warning.
pub fn unpadded_len(what: &str, positions: &[f64]) -> usize {
    let mut len = positions.len();
    while len > 1 && positions[len - 1] == 0.0 {
        len -= 1;
    }
    if len < positions.len() {
        warn!(
            "dropping {} zero-padded entries from {what}",
            positions.len() - len
        );
    }
    len
}

/// Lift increment from the propeller slipstream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slipstream {
    /// Lift coefficient increment and prop-on local velocity
    pub profile: LiftProfile,
    /// Span zone washed by the slipstream; the increment is zero outside it
    pub zone: SpanExtent,
}

impl Slipstream {
    /// Create a slipstream increment over an explicit zone
    pub fn new(profile: LiftProfile, zone: SpanExtent) -> Self {
        Self { profile, zone }
    }

    /// Create a slipstream increment acting over the profile's own positions
    pub fn over_profile(profile: LiftProfile) -> LoadsResult<Self> {
        profile.validate()?;
        let zone = match (profile.positions.first(), profile.positions.last()) {
            (Some(&start), Some(&end)) => SpanExtent::new(start, end),
            _ => {
                return Err(LoadsError::InvalidInput(
                    "lift profile has no stations".to_string(),
                ))
            }
        };
        Ok(Self { profile, zone })
    }
}

/// Aerodynamic inputs to the lift distributor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AerodynamicData {
    /// Clean-wing lift profile at free-stream velocity
    pub clean: LiftProfile,
    /// Optional propeller slipstream increment
    pub slipstream: Option<Slipstream>,
}

impl AerodynamicData {
    /// Create aerodynamic data without slipstream
    pub fn clean(profile: LiftProfile) -> Self {
        Self {
            clean: profile,
            slipstream: None,
        }
    }

    /// Add a slipstream increment
    pub fn with_slipstream(mut self, slipstream: Slipstream) -> Self {
        self.slipstream = Some(slipstream);
        self
    }
}
