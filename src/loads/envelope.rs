//! Flight envelope - the (load factor, mass) combinations swept for sizing loads

use serde::{Deserialize, Serialize};

use super::LoadCase;
use crate::error::{LoadsError, LoadsResult};

/// Tolerance on normalized coordinates for boundary tests
const BOUNDARY_TOLERANCE: f64 = 1e-9;

/// Regular grid sampled over the envelope's bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSampling {
    /// Number of load factor levels (at least 2)
    pub load_factor_steps: usize,
    /// Number of mass levels (at least 2)
    pub mass_steps: usize,
}

/// Envelope boundary in the (load factor, mass) plane
///
/// Vertices are evaluated in the given order. With three or more vertices
/// the envelope is a polygon, and an optional grid adds the interior points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightEnvelope {
    /// Boundary vertices
    pub vertices: Vec<LoadCase>,
    /// Interior sampling, if any
    pub sampling: Option<GridSampling>,
}

impl FlightEnvelope {
    /// Create an envelope from its vertices
    pub fn new(vertices: Vec<LoadCase>) -> Self {
        Self {
            vertices,
            sampling: None,
        }
    }

    /// Create an envelope made of a single condition
    pub fn single(case: LoadCase) -> Self {
        Self::new(vec![case])
    }

    /// Create the four corners of a load factor × mass rectangle
    pub fn rectangular(load_factors: (f64, f64), masses: (f64, f64)) -> Self {
        let (n_min, n_max) = load_factors;
        let (m_min, m_max) = masses;
        Self::new(vec![
            LoadCase::new(n_max, m_max),
            LoadCase::new(n_max, m_min),
            LoadCase::new(n_min, m_min),
            LoadCase::new(n_min, m_max),
        ])
    }

    /// Sample the interior on a regular grid
    pub fn with_sampling(mut self, load_factor_steps: usize, mass_steps: usize) -> Self {
        self.sampling = Some(GridSampling {
            load_factor_steps,
            mass_steps,
        });
        self
    }

    /// Check that the envelope can be swept
    pub fn validate(&self) -> LoadsResult<()> {
        if self.vertices.is_empty() {
            return Err(LoadsError::InvalidEnvelope(
                "envelope has no vertices".to_string(),
            ));
        }
        if let Some((i, case)) = self
            .vertices
            .iter()
            .enumerate()
            .find(|(_, c)| !c.is_valid())
        {
            return Err(LoadsError::InvalidEnvelope(format!(
                "vertex {i} is not a valid condition ({case})"
            )));
        }
        if let Some(s) = &self.sampling {
            if s.load_factor_steps < 2 || s.mass_steps < 2 {
                return Err(LoadsError::InvalidEnvelope(format!(
                    "grid sampling needs at least 2 levels per axis, got {} x {}",
                    s.load_factor_steps, s.mass_steps
                )));
            }
        }
        Ok(())
    }

    /// Bounding box as ((min load factor, max load factor), (min mass, max mass))
    pub fn bounds(&self) -> ((f64, f64), (f64, f64)) {
        let mut n = (f64::INFINITY, f64::NEG_INFINITY);
        let mut m = (f64::INFINITY, f64::NEG_INFINITY);
        for v in &self.vertices {
            n = (n.0.min(v.load_factor), n.1.max(v.load_factor));
            m = (m.0.min(v.mass), m.1.max(v.mass));
        }
        (n, m)
    }

    /// Check whether a condition lies inside the envelope or on its boundary
    pub fn contains(&self, case: &LoadCase) -> bool {
        let points = self.normalized_vertices();
        let p = self.normalize(case);

        match points.len() {
            0 => false,
            1 => distance(p, points[0]) <= BOUNDARY_TOLERANCE,
            2 => on_segment(p, points[0], points[1]),
            n => {
                let on_boundary = (0..n).any(|i| on_segment(p, points[i], points[(i + 1) % n]));
                on_boundary || ray_cast(p, &points)
            }
        }
    }

    /// Every condition to evaluate, in sweep order
    ///
    /// Vertices come first in their given order, followed by interior grid
    /// points ordered by load factor then mass.
    pub fn candidates(&self) -> LoadsResult<Vec<LoadCase>> {
        self.validate()?;
        let mut candidates = self.vertices.clone();

        let Some(sampling) = self.sampling else {
            return Ok(candidates);
        };
        if self.vertices.len() < 3 {
            return Ok(candidates);
        }

        let ((n_min, n_max), (m_min, m_max)) = self.bounds();
        for i in 0..sampling.load_factor_steps {
            let load_factor = level(n_min, n_max, i, sampling.load_factor_steps);
            for j in 0..sampling.mass_steps {
                let mass = level(m_min, m_max, j, sampling.mass_steps);
                let case = LoadCase::new(load_factor, mass);
                if self.contains(&case) && !candidates.contains(&case) {
                    candidates.push(case);
                }
            }
        }

        Ok(candidates)
    }

    fn normalize(&self, case: &LoadCase) -> (f64, f64) {
        let ((n_min, n_max), (m_min, m_max)) = self.bounds();
        let n_range = if n_max > n_min { n_max - n_min } else { 1.0 };
        let m_range = if m_max > m_min { m_max - m_min } else { 1.0 };
        (
            (case.load_factor - n_min) / n_range,
            (case.mass - m_min) / m_range,
        )
    }

    fn normalized_vertices(&self) -> Vec<(f64, f64)> {
        self.vertices.iter().map(|v| self.normalize(v)).collect()
    }
}

/// Grid level `i` of `steps` between `min` and `max`, exact at both ends
fn level(min: f64, max: f64, i: usize, steps: usize) -> f64 {
    if i + 1 == steps {
        max
    } else {
        min + (max - min) * i as f64 / (steps - 1) as f64
    }
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

fn on_segment(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> bool {
    let ab = (b.0 - a.0, b.1 - a.1);
    let ap = (p.0 - a.0, p.1 - a.1);
    let cross = ab.0 * ap.1 - ab.1 * ap.0;
    if cross.abs() > BOUNDARY_TOLERANCE {
        return false;
    }
    let dot = ab.0 * ap.0 + ab.1 * ap.1;
    let len_sq = ab.0 * ab.0 + ab.1 * ab.1;
    if len_sq <= BOUNDARY_TOLERANCE {
        return distance(p, a) <= BOUNDARY_TOLERANCE;
    }
    dot >= -BOUNDARY_TOLERANCE && dot <= len_sq + BOUNDARY_TOLERANCE
}

fn ray_cast(p: (f64, f64), polygon: &[(f64, f64)]) -> bool {
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (xi, yi) = polygon[i];
        let (xj, yj) = polygon[j];
        if (yi > p.1) != (yj > p.1) && p.0 < (xj - xi) * (p.1 - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
