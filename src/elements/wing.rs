//! Wing geometry - span stations and the local chord at each one

use serde::{Deserialize, Serialize};

use crate::elements::SpanDiscretization;
use crate::error::{LoadsError, LoadsResult};
use crate::math::{self, Diagram};

/// Half-wing planform sampled on the shared span stations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeometryData")]
pub struct WingGeometry {
    /// Span stations, root to tip
    pub span: SpanDiscretization,
    /// Local chord at each station (m)
    chord: Diagram,
}

#[derive(Deserialize)]
struct GeometryData {
    span: SpanDiscretization,
    chord: Diagram,
}

impl TryFrom<GeometryData> for WingGeometry {
    type Error = LoadsError;

    fn try_from(data: GeometryData) -> LoadsResult<Self> {
        Self::new(data.span, data.chord.iter().copied().collect())
    }
}

impl WingGeometry {
    /// Create a geometry from a chord value per station
    pub fn new(span: SpanDiscretization, chord: Vec<f64>) -> LoadsResult<Self> {
        let geometry = Self {
            span,
            chord: Diagram::from_vec(chord),
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Create a rectangular planform
    pub fn constant_chord(span: SpanDiscretization, chord: f64) -> LoadsResult<Self> {
        let n = span.len();
        Self::new(span, vec![chord; n])
    }

    /// Create a geometry by interpolating a chord table onto the stations
    pub fn from_chord_table(
        span: SpanDiscretization,
        y: &[f64],
        chord: &[f64],
    ) -> LoadsResult<Self> {
        if y.len() != chord.len() {
            return Err(LoadsError::DimensionMismatch {
                what: "chord table".to_string(),
                expected: y.len(),
                found: chord.len(),
            });
        }
        if y.is_empty() {
            return Err(LoadsError::InvalidGeometry(
                "chord table is empty".to_string(),
            ));
        }
        let remapped = math::remap(y, chord, span.as_slice());
        Self::new(span, remapped.iter().copied().collect())
    }

    /// Local chord at each station (m)
    pub fn chord(&self) -> &Diagram {
        &self.chord
    }

    /// Check that one finite, non-negative chord is given per station
    pub fn validate(&self) -> LoadsResult<()> {
        if self.span.len() < 2 {
            return Err(LoadsError::InvalidGeometry(format!(
                "span discretization needs at least 2 stations, got {}",
                self.span.len()
            )));
        }
        if self.chord.len() != self.span.len() {
            return Err(LoadsError::DimensionMismatch {
                what: "chord distribution".to_string(),
                expected: self.span.len(),
                found: self.chord.len(),
            });
        }
        if let Some(c) = self.chord.iter().find(|c| !c.is_finite() || **c < 0.0) {
            return Err(LoadsError::InvalidGeometry(format!(
                "chord must be finite and non-negative, got {c}"
            )));
        }
        Ok(())
    }

    /// Number of span stations
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Always false for a validated geometry
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tapered_chord_table() {
        let span = SpanDiscretization::uniform(0.0, 5.0, 11).unwrap();
        let geometry = WingGeometry::from_chord_table(span, &[0.0, 5.0], &[2.0, 1.0]).unwrap();
        assert_relative_eq!(geometry.chord()[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(geometry.chord()[5], 1.5, epsilon = 1e-12);
        assert_relative_eq!(geometry.chord()[10], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_chord_length_must_match() {
        let span = SpanDiscretization::uniform(0.0, 5.0, 4).unwrap();
        let err = WingGeometry::new(span, vec![1.0; 3]).unwrap_err();
        assert!(matches!(
            err,
            LoadsError::DimensionMismatch { expected: 4, found: 3, .. }
        ));
    }

    #[test]
    fn test_deserialize_checks_chord_length() {
        let span = SpanDiscretization::uniform(0.0, 5.0, 11).unwrap();
        let geometry = WingGeometry::constant_chord(span, 1.5).unwrap();
        let mut json = serde_json::to_value(&geometry).unwrap();
        json["chord"] = serde_json::to_value(Diagram::from_vec(vec![1.5; 3])).unwrap();

        let err = serde_json::from_value::<WingGeometry>(json).unwrap_err();
        assert!(err.to_string().contains("chord distribution"));
    }

    #[test]
    fn test_validate_catches_chord_mismatch() {
        let span = SpanDiscretization::uniform(0.0, 5.0, 4).unwrap();
        let geometry = WingGeometry {
            span,
            chord: Diagram::from_element(2, 1.0),
        };
        assert!(matches!(
            geometry.validate().unwrap_err(),
            LoadsError::DimensionMismatch { expected: 4, found: 2, .. }
        ));
    }
}
