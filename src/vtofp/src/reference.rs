//! Reference data for VTOL VR
//!
//! Hardcoded data about the flyable aircraft, used to fill derived fields
//! of a flight plan.

mod aircraft;

pub use aircraft::{aircraft_by_code, is_double_seater, Aircraft, AIRCRAFT};
