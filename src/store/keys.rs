//! Variable names read and written by the store adapter

// Geometry
pub const WING_Y_VECTOR: &str = "data:geometry:wing:Y_vector";
pub const WING_CHORD_VECTOR: &str = "data:geometry:wing:chord_vector";
pub const TANK_Y_START: &str = "data:geometry:wing:tank:y_start";
pub const TANK_Y_END: &str = "data:geometry:wing:tank:y_end";
pub const SPAN_STATIONS: &str = "data:loads:wing:span_stations";

// Weights
pub const WING_MASS: &str = "data:weight:airframe:wing:mass";
pub const WING_MASS_PER_UNIT_SPAN: &str = "data:loads:wing:mass_per_unit_span";
pub const MAX_FUEL_WEIGHT: &str = "data:weight:aircraft:MFW";
pub const MAX_ZERO_FUEL_WEIGHT: &str = "data:weight:aircraft:MZFW";
/// Followed by `<name>:mass`, `<name>:y` and optionally `<name>:span`
pub const POINT_MASS_PREFIX: &str = "data:loads:point_mass:";

// Aerodynamics
pub const CLEAN_Y_VECTOR: &str = "data:aerodynamics:wing:low_speed:Y_vector";
pub const CLEAN_CL_VECTOR: &str = "data:aerodynamics:wing:low_speed:CL_vector";
pub const CLEAN_VELOCITY: &str = "data:aerodynamics:wing:low_speed:velocity";
pub const SLIPSTREAM_CL_VECTOR: &str =
    "data:aerodynamics:slipstream:wing:cruise:only_prop:CL_vector";
pub const SLIPSTREAM_Y_VECTOR: &str = "data:aerodynamics:slipstream:wing:cruise:prop_on:Y_vector";
pub const SLIPSTREAM_VELOCITY: &str = "data:aerodynamics:slipstream:wing:cruise:prop_on:velocity";
pub const SLIPSTREAM_Y_START: &str = "data:aerodynamics:slipstream:wing:zone:y_start";
pub const SLIPSTREAM_Y_END: &str = "data:aerodynamics:slipstream:wing:zone:y_end";

// Envelope
pub const ENVELOPE_LOAD_FACTOR: &str = "data:loads:envelope:load_factor";
pub const ENVELOPE_MASS: &str = "data:loads:envelope:mass";

// Results
pub const Y_VECTOR: &str = "data:loads:y_vector";
pub const MAX_SHEAR: &str = "data:loads:max_shear";
pub const MAX_RBM: &str = "data:loads:max_rbm";
pub const STRUCTURE_ULTIMATE: &str = "data:loads:structure:ultimate";
pub const AERODYNAMIC_ULTIMATE: &str = "data:loads:aerodynamic:ultimate";
