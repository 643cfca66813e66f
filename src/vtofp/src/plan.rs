//! Flight plan assembly from a mission/map pair.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::armament;
use crate::decoder::{DecodedText, Decoder};
use crate::grammar::{self, Base, MapInfo, MissionInfo, Team, Unit, Waypoint};
use crate::reference;

/// Fuel figure printed on every plan until it can be derived from the mission
pub const PLACEHOLDER_FUEL: &str = "5000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Mission,
    Map,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Mission => write!(f, "Mission"),
            DocumentKind::Map => write!(f, "Map"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("{0} data is not loaded")]
    NotLoaded(DocumentKind),
}

/// Decoded mission and map documents, ready for extraction
///
/// Built once by [`MissionDocuments::load`] and never modified.
#[derive(Debug, Clone)]
pub struct MissionDocuments {
    mission: DecodedText,
    map: DecodedText,
}

impl MissionDocuments {
    /// Decode both files
    ///
    /// Both buffers are required; a missing one fails with
    /// [`PlanError::NotLoaded`].
    pub fn load(
        decoder: &Decoder,
        mission: Option<&[u8]>,
        map: Option<&[u8]>,
    ) -> Result<Self, PlanError> {
        let mission = mission.ok_or(PlanError::NotLoaded(DocumentKind::Mission))?;
        let map = map.ok_or(PlanError::NotLoaded(DocumentKind::Map))?;

        Ok(Self::from_decoded(decoder.decode(mission), decoder.decode(map)))
    }

    pub fn from_decoded(mission: DecodedText, map: DecodedText) -> Self {
        tracing::debug!(
            mission_encoding = ?mission.encoding(),
            map_encoding = ?map.encoding(),
            "loaded mission documents"
        );
        Self { mission, map }
    }

    pub fn mission(&self) -> &DecodedText {
        &self.mission
    }

    pub fn map(&self) -> &DecodedText {
        &self.map
    }

    pub fn mission_info(&self) -> MissionInfo {
        grammar::mission_info(self.mission.as_str())
    }

    pub fn map_info(&self) -> MapInfo {
        grammar::map_info(self.map.as_str())
    }

    pub fn units(&self, team: Team) -> Vec<Unit> {
        grammar::units(self.mission.as_str(), team)
    }

    pub fn waypoints(&self) -> Vec<Waypoint> {
        grammar::waypoints(self.mission.as_str())
    }

    pub fn objectives(&self) -> Vec<String> {
        grammar::objectives(self.mission.as_str())
    }

    pub fn briefing_notes(&self) -> Vec<String> {
        grammar::briefing_notes(self.mission.as_str())
    }

    pub fn bases(&self) -> Vec<Base> {
        grammar::bases(self.mission.as_str())
    }
}

/// Everything the flight plan document shows, in rendering order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightPlan {
    pub mission_name: String,
    pub flight_date: String,
    pub aircraft: String,
    pub release_time: String,
    pub double_seater: bool,
    pub armament: String,
    pub fuel: String,
    pub waypoints: Vec<Waypoint>,
    pub objectives: Vec<String>,
    pub briefing: Vec<String>,
    pub allied_units: Vec<Unit>,
    pub enemy_units: Vec<Unit>,
    pub bases: Vec<Base>,
}

impl FlightPlan {
    /// Build a plan stamped with the current local time
    pub fn generate(docs: &MissionDocuments) -> Self {
        Self::assemble(docs, &Local::now())
    }

    /// Build a plan stamped with `stamp`
    pub fn assemble<Tz>(docs: &MissionDocuments, stamp: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let MissionInfo {
            mission_name,
            aircraft,
        } = docs.mission_info();
        let terrain = docs.map_info().terrain_type;
        tracing::debug!(%mission_name, %aircraft, %terrain, "assembling flight plan");

        let allied_units = docs.units(Team::Allied);
        let enemy_units = docs.units(Team::Enemy);

        FlightPlan {
            double_seater: reference::is_double_seater(&aircraft),
            armament: armament::loadout_line(&enemy_units),
            flight_date: flight_date(stamp),
            release_time: release_time(stamp),
            fuel: PLACEHOLDER_FUEL.to_string(),
            waypoints: docs.waypoints(),
            objectives: docs.objectives(),
            briefing: docs.briefing_notes(),
            bases: docs.bases(),
            mission_name,
            aircraft,
            allied_units,
            enemy_units,
        }
    }
}

/// Date as `MON OCT 19 2026`
fn flight_date<Tz>(stamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    stamp.format("%a %b %d %Y").to_string().to_uppercase()
}

/// Time as `HHMM`
fn release_time<Tz>(stamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    stamp.format("%H%M").to_string()
}
