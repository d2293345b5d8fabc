//! Load cases, flight envelopes and aerodynamic input profiles

mod envelope;
mod lift_profile;
mod load_case;

pub use envelope::{FlightEnvelope, GridSampling};
pub use lift_profile::{unpadded_len, AerodynamicData, LiftProfile, Slipstream};
pub use load_case::LoadCase;
