//! Weapons loadout recommendation from the enemy roster

use crate::grammar::Unit;

/// Air-to-air threats that call for missiles by exact name
const AIR_THREATS: [&str; 2] = ["ASF-30", "MQ-31"];

fn any_name_contains(enemies: &[Unit], needles: &[&str]) -> bool {
    enemies.iter().any(|unit| {
        let name = unit.name.to_lowercase();
        needles.iter().any(|needle| name.contains(needle))
    })
}

/// Suggest ordnance for the given enemy units
///
/// Rules are applied in a fixed order and never suppress each other:
///
/// 1. tanks or ships: `LGB`
/// 2. `ASF-30` / `MQ-31` present: `RDR AAM`, `IR AAM`
/// 3. infantry: `DUMB`
/// 4. radars or launchers: `ARM`, `AGM`, `GPS`
pub fn recommend(enemies: &[Unit]) -> Vec<&'static str> {
    let mut loadout = Vec::new();

    if any_name_contains(enemies, &["tank", "ship"]) {
        loadout.push("LGB");
    }

    if enemies
        .iter()
        .any(|unit| AIR_THREATS.contains(&unit.name.as_str()))
    {
        loadout.extend(["RDR AAM", "IR AAM"]);
    }

    if any_name_contains(enemies, &["infantry"]) {
        loadout.push("DUMB");
    }

    if any_name_contains(enemies, &["radar", "launcher"]) {
        loadout.extend(["ARM", "AGM", "GPS"]);
    }

    loadout
}

/// Recommendation as a single comma separated line
pub fn loadout_line(enemies: &[Unit]) -> String {
    recommend(enemies).join(", ")
}
