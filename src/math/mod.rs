//! Numerical utilities shared by the load distributors

pub mod integrate;
pub mod interp;

use nalgebra::DVector;

pub use integrate::{cumulative_from_tip, shear_and_bending, trapezoid};
pub use interp::{interp_clamped, remap};

/// Per-station values aligned index-for-index with the span stations
pub type Diagram = DVector<f64>;
