//! # vtofp
//!
//! Flight plan generation for VTOL VR custom missions.
//!
//! This library provides functionality to:
//! - Decode obfuscated `.vtsb`/`.vtmb` files (and read plain `.vts`/`.vtm`)
//! - Extract mission fields, unit rosters, bases and briefing notes
//! - Recommend a weapons loadout for the enemy roster
//! - Assemble everything into a [`FlightPlan`] for rendering
//!
//! ## Example
//!
//! ```no_run
//! use std::fs;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mission = fs::read("raid.vtsb")?;
//! let map = fs::read("canyon.vtm")?;
//!
//! let decoder = vtofp::Decoder::new(vtofp::FormulaConstants::new(3, 256)?);
//! let docs = vtofp::MissionDocuments::load(&decoder, Some(mission.as_slice()), Some(map.as_slice()))?;
//! let plan = vtofp::FlightPlan::generate(&docs);
//!
//! println!("{} in the {}", plan.mission_name, plan.aircraft);
//! println!("Armament: {}", plan.armament);
//! # Ok(())
//! # }
//! ```

pub mod armament;
pub mod decoder;
pub mod grammar;
pub mod plan;
pub mod reference;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used items
#[doc(inline)]
pub use armament::{loadout_line, recommend};
#[doc(inline)]
pub use decoder::{DecodeError, DecodedText, Decoder, FormulaConstants, SourceEncoding};
#[doc(inline)]
pub use grammar::{Base, MapInfo, MissionInfo, Team, Unit, Waypoint};
#[doc(inline)]
pub use plan::{DocumentKind, FlightPlan, MissionDocuments, PlanError};
#[doc(inline)]
pub use reference::{aircraft_by_code, is_double_seater, Aircraft};
