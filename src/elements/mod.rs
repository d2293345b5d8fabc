//! Wing elements: span stations, planform and mass items

mod mass;
mod span;
mod wing;

pub use mass::{FuelTank, MassBreakdown, MassShape, PointMass, SpanExtent, WingMass};
pub use span::{SpanDiscretization, StationSplit};
pub use wing::WingGeometry;
