//! Span discretization - ordered stations from wing root to tip

use serde::{Deserialize, Serialize};

use crate::error::{LoadsError, LoadsResult};
use crate::math::Diagram;

/// Span stations shared by every load distributor
///
/// Stations are in meters, non-decreasing, root first. A station may appear
/// twice: the pair marks a jump in a piecewise-constant load (tank or nacelle
/// edge) and integrates over zero width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SpanData")]
pub struct SpanDiscretization {
    stations: Diagram,
}

/// Unchecked serialized form, validated by [`SpanDiscretization::new`]
#[derive(Deserialize)]
struct SpanData {
    stations: Diagram,
}

impl TryFrom<SpanData> for SpanDiscretization {
    type Error = LoadsError;

    fn try_from(data: SpanData) -> LoadsResult<Self> {
        Self::new(data.stations.iter().copied().collect())
    }
}

/// Linear split of a position between its two neighbouring stations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationSplit {
    /// Inboard station index
    pub inboard: usize,
    /// Outboard station index
    pub outboard: usize,
    /// Share carried by the outboard station (0 to 1)
    pub outboard_weight: f64,
}

impl SpanDiscretization {
    /// Create a discretization from explicit stations
    pub fn new(stations: Vec<f64>) -> LoadsResult<Self> {
        if stations.len() < 2 {
            return Err(LoadsError::InvalidGeometry(format!(
                "span discretization needs at least 2 stations, got {}",
                stations.len()
            )));
        }
        if let Some(bad) = stations.iter().find(|y| !y.is_finite()) {
            return Err(LoadsError::InvalidGeometry(format!(
                "non-finite span station {bad}"
            )));
        }
        if let Some(i) = stations.windows(2).position(|w| w[1] < w[0]) {
            return Err(LoadsError::InvalidGeometry(format!(
                "span stations decrease at index {}: {} -> {}",
                i + 1,
                stations[i],
                stations[i + 1]
            )));
        }
        let root = stations[0];
        let tip = stations[stations.len() - 1];
        if tip <= root {
            return Err(LoadsError::InvalidGeometry(format!(
                "wing tip ({tip} m) must lie outboard of the root ({root} m)"
            )));
        }

        Ok(Self {
            stations: Diagram::from_vec(stations),
        })
    }

    /// Create `count` evenly spaced stations between root and tip
    pub fn uniform(root: f64, tip: f64, count: usize) -> LoadsResult<Self> {
        if count < 2 {
            return Err(LoadsError::InvalidGeometry(format!(
                "span discretization needs at least 2 stations, got {count}"
            )));
        }
        let step = (tip - root) / (count - 1) as f64;
        let mut stations: Vec<f64> = (0..count).map(|i| root + step * i as f64).collect();
        // Avoid round-off on the tip station
        stations[count - 1] = tip;
        Self::new(stations)
    }

    /// Copy of this discretization with every interior breakpoint present twice
    ///
    /// Breakpoints at or beyond the root and tip are ignored.
    pub fn with_breakpoints(&self, breakpoints: &[f64]) -> LoadsResult<Self> {
        let root = self.root();
        let tip = self.tip();
        let mut stations: Vec<f64> = self.stations.iter().copied().collect();

        for &b in breakpoints {
            if !(b > root && b < tip) {
                continue;
            }
            let present = stations.iter().filter(|&&y| y == b).count();
            for _ in present..2 {
                stations.push(b);
            }
        }

        stations.sort_by(f64::total_cmp);
        Self::new(stations)
    }

    /// Number of stations
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always false for a validated discretization
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Root station (m)
    pub fn root(&self) -> f64 {
        self.stations[0]
    }

    /// Tip station (m)
    pub fn tip(&self) -> f64 {
        self.stations[self.stations.len() - 1]
    }

    /// Stations as a vector
    pub fn stations(&self) -> &Diagram {
        &self.stations
    }

    /// Stations as a slice
    pub fn as_slice(&self) -> &[f64] {
        self.stations.as_slice()
    }

    /// Check whether a position lies between root and tip (inclusive)
    pub fn contains(&self, y: f64) -> bool {
        y >= self.root() && y <= self.tip()
    }

    /// Locate a position between its neighbouring stations
    ///
    /// A position that coincides with a station is carried entirely by the
    /// first station at that position. Returns `None` outside the span.
    pub fn split(&self, y: f64) -> Option<StationSplit> {
        if !self.contains(y) {
            return None;
        }
        let x = self.as_slice();

        let first_at_or_beyond = x.partition_point(|&v| v < y);
        if x[first_at_or_beyond] == y {
            return Some(StationSplit {
                inboard: first_at_or_beyond,
                outboard: first_at_or_beyond,
                outboard_weight: 0.0,
            });
        }

        let outboard = first_at_or_beyond;
        let inboard = outboard - 1;
        Some(StationSplit {
            inboard,
            outboard,
            outboard_weight: (y - x[inboard]) / (x[outboard] - x[inboard]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_stations() {
        let span = SpanDiscretization::uniform(0.5, 5.5, 11).unwrap();
        assert_eq!(span.len(), 11);
        assert_eq!(span.root(), 0.5);
        assert_eq!(span.tip(), 5.5);
        assert_relative_eq!(span.as_slice()[2], 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_decreasing_stations() {
        let err = SpanDiscretization::new(vec![0.0, 1.0, 0.5, 2.0]).unwrap_err();
        assert!(matches!(err, LoadsError::InvalidGeometry(_)));
    }

    #[test]
    fn test_rejects_single_station() {
        assert!(SpanDiscretization::new(vec![1.0]).is_err());
        assert!(SpanDiscretization::new(vec![1.0, 1.0]).is_err());
    }

    #[test]
    fn test_breakpoints_are_doubled() {
        let span = SpanDiscretization::uniform(0.0, 4.0, 5).unwrap();
        let refined = span.with_breakpoints(&[1.0, 2.5, 4.0, 7.0]).unwrap();
        assert_eq!(
            refined.as_slice(),
            &[0.0, 1.0, 1.0, 2.0, 2.5, 2.5, 3.0, 4.0]
        );
        // Applying the same breakpoints again changes nothing
        let again = refined.with_breakpoints(&[1.0, 2.5]).unwrap();
        assert_eq!(again, refined);
    }

    #[test]
    fn test_deserialize_validates_stations() {
        let span = SpanDiscretization::uniform(0.0, 2.0, 5).unwrap();
        let json = serde_json::to_value(&span).unwrap();
        let back: SpanDiscretization = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(back, span);

        for stations in [vec![], vec![1.0], vec![0.0, 2.0, 1.0]] {
            let mut edited = json.clone();
            edited["stations"] = serde_json::to_value(Diagram::from_vec(stations)).unwrap();
            assert!(serde_json::from_value::<SpanDiscretization>(edited).is_err());
        }
    }

    #[test]
    fn test_split_between_stations() {
        let span = SpanDiscretization::uniform(0.0, 2.0, 5).unwrap();
        let split = span.split(1.2).unwrap();
        assert_eq!((split.inboard, split.outboard), (2, 3));
        assert_relative_eq!(split.outboard_weight, 0.4, epsilon = 1e-12);

        let on_station = span.split(1.5).unwrap();
        assert_eq!((on_station.inboard, on_station.outboard), (3, 3));

        assert!(span.split(2.1).is_none());
        assert!(span.split(-0.1).is_none());
    }
}
