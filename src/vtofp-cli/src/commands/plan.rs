//! Flight plan and decode command handlers

use anyhow::{Context, Result};
use std::path::Path;
use vtofp::{Decoder, FlightPlan, MissionDocuments};

use crate::cli::OutputFormat;
use crate::file_io;
use crate::ofp;

/// Serialize a plan in the requested format
pub fn format_plan(plan: &FlightPlan, format: OutputFormat) -> Result<Vec<u8>> {
    let rendered = match format {
        OutputFormat::Text => ofp::render(plan),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(plan).context("Failed to serialize plan as JSON")?;
            json.push('\n');
            json
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(plan).context("Failed to serialize plan as YAML")?
        }
    };
    Ok(rendered.into_bytes())
}

/// Build a flight plan from raw mission and map bytes
pub fn build_plan(decoder: &Decoder, mission: &[u8], map: &[u8]) -> Result<FlightPlan> {
    let docs = MissionDocuments::load(decoder, Some(mission), Some(map))
        .context("Failed to load mission documents")?;

    for (kind, doc) in [("mission", docs.mission()), ("map", docs.map())] {
        if doc.anomalies() > 0 {
            tracing::warn!(
                file = kind,
                anomalies = doc.anomalies(),
                "decoded text contains replacement characters; check the formula constants"
            );
        }
    }

    Ok(FlightPlan::generate(&docs))
}

/// Handle `plan` command
pub fn generate(
    mission: &Path,
    map: &Path,
    format: OutputFormat,
    output: Option<&Path>,
    decoder: &Decoder,
) -> Result<()> {
    let mission_data = file_io::read_file(mission, "mission")?;
    let map_data = file_io::read_file(map, "map")?;

    let plan = build_plan(decoder, &mission_data, &map_data)?;
    tracing::info!(
        mission = %plan.mission_name,
        waypoints = plan.waypoints.len(),
        enemies = plan.enemy_units.len(),
        "flight plan generated"
    );

    file_io::write_output(output, &format_plan(&plan, format)?)
}

/// Handle `decode` command
pub fn decode(
    input: Option<&Path>,
    output: Option<&Path>,
    raw: bool,
    decoder: &Decoder,
) -> Result<()> {
    let data = file_io::read_input(input)?;

    let decoded = if raw {
        decoder.decode_raw(&data)
    } else {
        let text = decoder.decode(&data);
        tracing::debug!(encoding = ?text.encoding(), anomalies = text.anomalies(), "decoded input");
        text.into_string().into_bytes()
    };

    file_io::write_output(output, &decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vtofp::FormulaConstants;

    const MISSION: &str = "campaignID = Canyon Run\nvehicle = AV-42C\nwaypoint = (1.5, 2)\n";
    const MAP: &str = "biome = Arctic\n";

    fn test_decoder() -> Decoder {
        Decoder::new(FormulaConstants::new(4, 256).unwrap())
    }

    #[test]
    fn test_build_plan_from_plain_files() {
        let plan = build_plan(&test_decoder(), MISSION.as_bytes(), MAP.as_bytes()).unwrap();
        assert_eq!(plan.mission_name, "Canyon Run");
        assert_eq!(plan.aircraft, "AV-42C");
        assert!(!plan.double_seater);
        assert_eq!(plan.waypoints, vec![(1.5, 2.0)]);
    }

    #[test]
    fn test_format_json_and_yaml() {
        let plan = build_plan(&test_decoder(), MISSION.as_bytes(), MAP.as_bytes()).unwrap();

        let json = format_plan(&plan, OutputFormat::Json).unwrap();
        let parsed: FlightPlan = serde_json::from_slice(&json).unwrap();
        assert_eq!(parsed, plan);

        let yaml = String::from_utf8(format_plan(&plan, OutputFormat::Yaml).unwrap()).unwrap();
        assert!(yaml.contains("mission_name: Canyon Run"));
    }

    #[test]
    fn test_format_text() {
        let plan = build_plan(&test_decoder(), MISSION.as_bytes(), MAP.as_bytes()).unwrap();
        let text = String::from_utf8(format_plan(&plan, OutputFormat::Text).unwrap()).unwrap();
        assert!(text.starts_with("[ OFP ]\n"));
        assert!(text.contains("CANYON RUN"));
    }

    #[test]
    fn test_generate_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mission = dir.path().join("run.vts");
        let map = dir.path().join("canyon.vtm");
        let output = dir.path().join("plan.json");
        std::fs::write(&mission, MISSION).unwrap();
        std::fs::write(&map, MAP).unwrap();

        generate(&mission, &map, OutputFormat::Json, Some(&output), &test_decoder()).unwrap();

        let plan: FlightPlan = serde_json::from_slice(&std::fs::read(&output).unwrap()).unwrap();
        assert_eq!(plan.mission_name, "Canyon Run");
    }

    #[test]
    fn test_decode_raw_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("icon.pngb");
        let output = dir.path().join("icon.png");
        std::fs::write(&input, [14u8, 24, b'b']).unwrap();

        decode(Some(&input), Some(&output), true, &test_decoder()).unwrap();
        assert_eq!(std::fs::read(&output).unwrap(), vec![10, 20, b'b' - 4]);
    }

    #[test]
    fn test_decode_text_writes_plaintext() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("run.vtsb");
        let output = dir.path().join("run.vts");
        std::fs::write(&input, [b'O' + 4, b'K' + 4, b'b']).unwrap();

        decode(Some(&input), Some(&output), false, &test_decoder()).unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "OK^");
    }
}
