//! Wing Loads - spanwise shear and bending sizing loads for a half wing
//!
//! This library computes the loads a wing structure has to be sized for:
//! - Structural (weight) loads from point masses, wing structure and fuel
//! - Aerodynamic (lift) loads trimmed to the load factor and aircraft mass,
//!   with an optional propeller slipstream increment
//! - An envelope search returning the conditions with maximum root shear
//!   and maximum root bending moment
//!
//! Forces are positive upward; weight loads are negative and lift positive.
//! Every diagram is sampled on the same span stations, root to tip.
//!
//! ## Example
//! ```rust
//! use wing_loads::prelude::*;
//!
//! let span = SpanDiscretization::uniform(0.0, 5.0, 21)
//!     .unwrap()
//!     .with_breakpoints(&[1.0, 2.0])
//!     .unwrap();
//! let mut model = WingModel::new(WingGeometry::constant_chord(span, 1.5).unwrap());
//!
//! // One engine per wing, smeared over its nacelle width
//! model.add_point_mass("engine", PointMass::with_width(150.0, 1.5, 1.0)).unwrap();
//! model.set_wing_mass(WingMass::Total { mass: 220.0, shape: MassShape::ChordProportional });
//!
//! // Constant section lift coefficient
//! let profile = LiftProfile::at_velocity(vec![0.0, 5.0], vec![0.5, 0.5], 50.0).unwrap();
//! model.set_aerodynamics(AerodynamicData::clean(profile));
//!
//! let envelope = FlightEnvelope::rectangular((-1.52, 3.8), (1500.0, 1700.0));
//! let result = model.analyze_envelope(&envelope).unwrap();
//! assert_eq!(result.candidates, 4);
//! assert!(result.max_bending.root_bending() > 0.0);
//! ```

pub mod analysis;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod model;
pub mod results;
pub mod store;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::AnalysisOptions;
    pub use crate::elements::{
        FuelTank, MassBreakdown, MassShape, PointMass, SpanDiscretization, SpanExtent,
        WingGeometry, WingMass,
    };
    pub use crate::error::{LoadsError, LoadsResult};
    pub use crate::loads::{AerodynamicData, FlightEnvelope, LiftProfile, LoadCase, Slipstream};
    pub use crate::model::WingModel;
    pub use crate::results::{
        AerodynamicLoads, EnvelopeResult, GoverningCondition, LoadContribution, StructuralLoads,
    };
    pub use crate::store::VariableStore;
}
