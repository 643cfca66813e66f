//! Plain-text OFP (operational flight plan) card
//!
//! Section order and wording follow the printed kneeboard card: header, then
//! objectives, briefing, rosters and bases, each separated by a rule, and the
//! self-briefing footer.

use std::fmt::Write;
use vtofp::{Base, FlightPlan, Unit};

/// Card width in columns
const WIDTH: usize = 80;
const INDENT: &str = "  ";

const FOOTER: [&str; 5] = [
    "NO TANKERING RECOMMENDED (P)",
    "I HEREWITH CONFIRM THAT I HAVE PERFORMED A THOROUGH SELF BRIEFING",
    "ABOUT THE DESTINATION AND ALTERNATE AIRPORTS OF THIS FLIGHT",
    "INCLUDING THE APPLICABLE INSTRUMENT APPROACH PROCEDURES,",
    "AIRPORT FACILITIES, NOTAMS AND ALL OTHER RELEVANT PARTICULAR INFORMATION.",
];

/// Render the plan as a monospace card
pub fn render(plan: &FlightPlan) -> String {
    let mut out = String::new();
    let rule = "-".repeat(WIDTH);

    let _ = writeln!(out, "[ OFP ]");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "{} {}",
        plan.mission_name.to_uppercase(),
        plan.flight_date
    );
    let _ = writeln!(
        out,
        "{} RELEASE {} {}",
        plan.aircraft, plan.release_time, plan.flight_date
    );
    let _ = writeln!(
        out,
        "DOUBLE SEATER A/C {}",
        plan.double_seater.to_string().to_uppercase()
    );
    let _ = writeln!(out, "ARMAMENT {}", plan.armament);
    let _ = writeln!(out, "FUEL {}", plan.fuel);
    let _ = writeln!(out, "{rule}");

    text_section(&mut out, "MISSION OBJECTIVES:", &plan.objectives);
    let _ = writeln!(out, "{rule}");
    text_section(&mut out, "MISSION BRIEFING:", &plan.briefing);
    let _ = writeln!(out, "{rule}");
    unit_section(&mut out, "ALLIED UNITS:", &plan.allied_units);
    let _ = writeln!(out, "{rule}");
    unit_section(&mut out, "ENEMY UNITS:", &plan.enemy_units);
    let _ = writeln!(out, "{rule}");
    base_section(&mut out, "BASES:", &plan.bases);
    let _ = writeln!(out, "{rule}");

    for line in FOOTER {
        let _ = writeln!(out, "{line}");
    }
    let _ = writeln!(out, "{rule}");

    out
}

fn text_section(out: &mut String, title: &str, paragraphs: &[String]) {
    let _ = writeln!(out, "{title}");
    for paragraph in paragraphs {
        for line in paragraph.lines() {
            for wrapped in wrap(line, WIDTH - INDENT.len()) {
                let _ = writeln!(out, "{INDENT}{wrapped}");
            }
        }
    }
    out.push('\n');
}

fn unit_section(out: &mut String, title: &str, units: &[Unit]) {
    let _ = writeln!(out, "{title}");
    for unit in units {
        let _ = writeln!(out, "{INDENT}{}", unit.name);
    }
    out.push('\n');
}

fn base_section(out: &mut String, title: &str, bases: &[Base]) {
    let _ = writeln!(out, "{title}");
    for base in bases {
        let _ = writeln!(out, "{INDENT}{} ({}) - {}", base.name, base.id, base.team);
    }
    out.push('\n');
}

/// Greedy word wrap; words longer than `width` get a line of their own
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = current.chars().count() + 1 + word.chars().count();
        if !current.is_empty() && needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> FlightPlan {
        FlightPlan {
            mission_name: "Raid_01".to_string(),
            flight_date: "MON OCT 19 2026".to_string(),
            aircraft: "T-55".to_string(),
            release_time: "0705".to_string(),
            double_seater: true,
            armament: "LGB, DUMB".to_string(),
            fuel: "5000".to_string(),
            waypoints: vec![(1.0, 2.0)],
            objectives: vec!["Destroy the bridge".to_string()],
            briefing: vec!["Line one\nLine two".to_string()],
            allied_units: vec![Unit {
                name: "Carrier".to_string(),
            }],
            enemy_units: vec![Unit {
                name: "Infantry".to_string(),
            }],
            bases: vec![Base {
                id: "3".to_string(),
                name: "Camp North".to_string(),
                team: "Allied".to_string(),
            }],
        }
    }

    #[test]
    fn test_header() {
        let card = render(&plan());
        let lines: Vec<&str> = card.lines().collect();
        assert_eq!(lines[0], "[ OFP ]");
        assert_eq!(lines[2], "RAID_01 MON OCT 19 2026");
        assert_eq!(lines[3], "T-55 RELEASE 0705 MON OCT 19 2026");
        assert_eq!(lines[4], "DOUBLE SEATER A/C TRUE");
        assert_eq!(lines[5], "ARMAMENT LGB, DUMB");
    }

    #[test]
    fn test_sections_in_order() {
        let card = render(&plan());
        let order = [
            "MISSION OBJECTIVES:",
            "MISSION BRIEFING:",
            "ALLIED UNITS:",
            "ENEMY UNITS:",
            "BASES:",
            "NO TANKERING RECOMMENDED (P)",
        ];
        let positions: Vec<usize> = order.iter().map(|s| card.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(card.contains("  Camp North (3) - Allied\n"));
    }

    #[test]
    fn test_briefing_line_breaks() {
        let card = render(&plan());
        assert!(card.contains("  Line one\n  Line two\n"));
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("aaa bbb ccc", 7), vec!["aaa bbb", "ccc"]);
        assert_eq!(wrap("", 10), Vec::<String>::new());
        assert_eq!(wrap("unbreakable", 4), vec!["unbreakable"]);
    }
}
