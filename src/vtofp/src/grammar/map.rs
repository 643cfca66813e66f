//! Map document fields

use super::{assignments, is_ident_byte, leading};

pub const UNKNOWN_TERRAIN: &str = "Unknown Terrain";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapInfo {
    pub terrain_type: String,
}

/// First word assigned to `biome` in a map document
pub fn terrain_type(text: &str) -> String {
    assignments(text, "biome")
        .find_map(|v| leading(v, is_ident_byte))
        .unwrap_or(UNKNOWN_TERRAIN)
        .to_string()
}

pub fn map_info(text: &str) -> MapInfo {
    MapInfo {
        terrain_type: terrain_type(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_type() {
        let map = "VTMapCustom\n{\n\tmapID = desert_canyon\n\tbiome = Desert\n}\n";
        assert_eq!(terrain_type(map), "Desert");
    }

    #[test]
    fn test_terrain_takes_leading_word() {
        assert_eq!(terrain_type("biome = Boreal forest"), "Boreal");
    }

    #[test]
    fn test_terrain_default() {
        assert_eq!(map_info("").terrain_type, UNKNOWN_TERRAIN);
        assert_eq!(terrain_type("biome = \n"), UNKNOWN_TERRAIN);
    }
}
