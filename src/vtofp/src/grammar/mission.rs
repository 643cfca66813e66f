//! Top-level mission fields: name, aircraft, objectives and waypoints

use super::{assignments, first_assignment};

pub const UNKNOWN_MISSION: &str = "Unknown Mission";
pub const UNKNOWN_AIRCRAFT: &str = "unknown";

/// A point on the flight path as `(x, y)`
pub type Waypoint = (f64, f64);

/// Header fields of a mission document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionInfo {
    pub mission_name: String,
    pub aircraft: String,
}

/// Value of the first `campaignID = ...` line
pub fn mission_name(text: &str) -> String {
    first_assignment(text, "campaignID")
        .unwrap_or(UNKNOWN_MISSION)
        .to_string()
}

/// Value of the first `vehicle = ...` line
pub fn aircraft(text: &str) -> String {
    first_assignment(text, "vehicle")
        .unwrap_or(UNKNOWN_AIRCRAFT)
        .to_string()
}

pub fn mission_info(text: &str) -> MissionInfo {
    MissionInfo {
        mission_name: mission_name(text),
        aircraft: aircraft(text),
    }
}

/// Every `scenarioDescription = ...` value, trimmed, in document order
pub fn objectives(text: &str) -> Vec<String> {
    assignments(text, "scenarioDescription")
        .map(|v| v.trim().to_string())
        .collect()
}

/// Every `waypoint = (x, y)` in document order
///
/// Assignments that are not exactly two numeric coordinates are skipped.
pub fn waypoints(text: &str) -> Vec<Waypoint> {
    assignments(text, "waypoint")
        .filter_map(parse_waypoint)
        .collect()
}

fn parse_waypoint(value: &str) -> Option<Waypoint> {
    let inner = value.strip_prefix('(')?;
    let inner = &inner[..inner.find(')')?];
    let (x, y) = inner.split_once(',')?;
    Some((parse_coordinate(x)?, parse_coordinate(y)?))
}

fn parse_coordinate(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    raw.parse().ok()
}
