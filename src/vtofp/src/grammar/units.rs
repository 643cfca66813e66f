//! Unit rosters from the `UNITS` section

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::{assignments, entries, leaf_blocks, region};

/// Faction a spawned unit is classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Allied,
    Enemy,
}

impl Team {
    /// Lowercase substring of `unitGroup` that marks this team
    pub fn marker(self) -> &'static str {
        match self {
            Team::Allied => "allied",
            Team::Enemy => "enemy",
        }
    }

    /// Case-insensitive containment of the team marker
    pub fn matches_group(self, unit_group: &str) -> bool {
        unit_group.to_lowercase().contains(self.marker())
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Allied => write!(f, "ally"),
            Team::Enemy => write!(f, "enemy"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    pub name: String,
}

/// Distinct units spawned for `team`, in first-seen order
///
/// A unit is counted when its `UnitFields.unitGroup` contains the team
/// marker. Groups are matched independently per team, so a group naming
/// both markers puts the unit on both rosters.
pub fn units(text: &str, team: Team) -> Vec<Unit> {
    let Some(section) = region(text, "UNITS", "PATHS") else {
        tracing::debug!(%team, "no UNITS block found");
        return Vec::new();
    };

    let mut seen = HashSet::new();
    entries(section, "UnitSpawner")
        .into_iter()
        .filter_map(spawned_unit)
        .filter(|(_, group)| team.matches_group(group))
        .filter(|(name, _)| seen.insert(*name))
        .map(|(name, _)| Unit {
            name: name.to_string(),
        })
        .collect()
}

/// `(unitName, unitGroup)` of one spawner, if it declares both
fn spawned_unit(spawner: &str) -> Option<(&str, &str)> {
    let name = statement_value(spawner, "unitName")?;
    let fields = leaf_blocks(spawner, "UnitFields").next()?;
    let group = statement_value(fields, "unitGroup")?;
    Some((name, group))
}

/// First non-empty value of `key`, cut at `;` or the end of the line
fn statement_value<'a>(text: &'a str, key: &'a str) -> Option<&'a str> {
    assignments(text, key)
        .map(|v| v.split(';').next().unwrap_or(v).trim())
        .find(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawner(name: &str, group: &str) -> String {
        format!(
            "\tUnitSpawner\n\t{{\n\t\tunitName = {name}\n\t\tunitID = {name}_ID\n\t\tUnitFields\n\t\t{{\n\t\t\tunitGroup = {group}\n\t\t\tdefaultBehavior = Path\n\t\t}}\n\t}}\n"
        )
    }

    fn mission(spawners: &[(&str, &str)]) -> String {
        let body: String = spawners.iter().map(|(n, g)| spawner(n, g)).collect();
        format!("UNITS\n{{\n{body}}}\nPATHS\n{{\n}}\n")
    }

    fn names(units: Vec<Unit>) -> Vec<String> {
        units.into_iter().map(|u| u.name).collect()
    }

    #[test]
    fn test_classifies_by_group() {
        let text = mission(&[
            ("Enemy Tank Co", "Enemy_Armor"),
            ("AWACS", "Allied:Alpha"),
            ("SAM Radar", "ENEMY:Bravo"),
        ]);
        assert_eq!(
            names(units(&text, Team::Enemy)),
            vec!["Enemy Tank Co", "SAM Radar"]
        );
        assert_eq!(names(units(&text, Team::Allied)), vec!["AWACS"]);
    }

    #[test]
    fn test_every_spawner_is_read() {
        let text = mission(&[
            ("A", "Enemy"),
            ("B", "Enemy"),
            ("C", "Enemy"),
            ("D", "Enemy"),
        ]);
        assert_eq!(names(units(&text, Team::Enemy)), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_deduplicates_names() {
        let text = mission(&[("Infantry", "Enemy"), ("Infantry", "Enemy:B")]);
        assert_eq!(names(units(&text, Team::Enemy)), vec!["Infantry"]);
    }

    #[test]
    fn test_group_matching_both_markers() {
        let text = mission(&[("Turncoat", "allied_enemy")]);
        assert_eq!(names(units(&text, Team::Allied)), vec!["Turncoat"]);
        assert_eq!(names(units(&text, Team::Enemy)), vec!["Turncoat"]);
    }

    #[test]
    fn test_neutral_and_incomplete_spawners() {
        let text = format!(
            "UNITS\n{{\n{}\tUnitSpawner\n\t{{\n\t\tunitName = NoFields\n\t}}\n}}\nPATHS\n",
            spawner("Civilian", "null")
        );
        assert!(units(&text, Team::Allied).is_empty());
        assert!(units(&text, Team::Enemy).is_empty());
    }

    #[test]
    fn test_missing_units_block() {
        assert!(units("campaignID = x\n", Team::Allied).is_empty());
        assert!(units("UNITS\n{\n}\n", Team::Enemy).is_empty());
    }

    #[test]
    fn test_semicolon_terminates_values() {
        let text = "UNITS { UnitSpawner { unitName = Frigate; UnitFields { unitGroup = Enemy; } } } PATHS";
        assert_eq!(names(units(text, Team::Enemy)), vec!["Frigate"]);
    }
}
