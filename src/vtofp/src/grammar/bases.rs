//! Air bases from the `BASES` section

use serde::{Deserialize, Serialize};

use super::{assignments, leading, leaf_blocks, region};

pub const UNKNOWN_ID: &str = "Unknown ID";
pub const UNKNOWN_BASE: &str = "Unknown Base";
pub const UNKNOWN_TEAM: &str = "Unknown Team";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base {
    pub id: String,
    pub name: String,
    pub team: String,
}

impl Base {
    fn from_block(body: &str) -> Self {
        let id = assignments(body, "id").find_map(|v| leading(v, |b| b.is_ascii_digit()));
        let team = assignments(body, "baseTeam")
            .find_map(|v| leading(v, |b| b.is_ascii_alphabetic()));
        let name = assignments(body, "overrideBaseName")
            .next()
            .map(base_name)
            .filter(|name| !name.is_empty());

        Base {
            id: id.unwrap_or(UNKNOWN_ID).to_string(),
            name: name.unwrap_or(UNKNOWN_BASE).to_string(),
            team: team.unwrap_or(UNKNOWN_TEAM).to_string(),
        }
    }
}

/// The override name runs until the `baseTeam` field when both share a line
fn base_name(value: &str) -> &str {
    value
        .find("baseTeam")
        .map_or(value, |end| &value[..end])
        .trim()
}

/// Every `BaseInfo` block inside `BASES { ... } GlobalValues`
pub fn bases(text: &str) -> Vec<Base> {
    let Some(section) = region(text, "BASES", "GlobalValues") else {
        tracing::debug!("no bases section found");
        return Vec::new();
    };

    leaf_blocks(section, "BaseInfo").map(Base::from_block).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(id: &str, name: &str, team: &str) -> Base {
        Base {
            id: id.to_string(),
            name: name.to_string(),
            team: team.to_string(),
        }
    }

    #[test]
    fn test_single_line_base() {
        let text = "BASES { BaseInfo { overrideBaseName = Camp North baseTeam = Allied id = 3 } } GlobalValues";
        assert_eq!(bases(text), vec![base("3", "Camp North", "Allied")]);
    }

    #[test]
    fn test_multi_line_bases() {
        let text = "BASES\n{\n\tBaseInfo\n\t{\n\t\tid = 0\n\t\toverrideBaseName = Carrier Alpha\n\t\tbaseTeam = Allied\n\t}\n\tBaseInfo\n\t{\n\t\tid = 1\n\t\toverrideBaseName = \n\t\tbaseTeam = Enemy\n\t}\n}\nGlobalValues\n{\n}\n";
        assert_eq!(
            bases(text),
            vec![
                base("0", "Carrier Alpha", "Allied"),
                base("1", UNKNOWN_BASE, "Enemy"),
            ]
        );
    }

    #[test]
    fn test_missing_fields_default() {
        let text = "BASES { BaseInfo { overrideBaseName = Outpost baseTeam = Enemy } BaseInfo { } } GlobalValues";
        assert_eq!(
            bases(text),
            vec![
                base(UNKNOWN_ID, "Outpost", "Enemy"),
                base(UNKNOWN_ID, UNKNOWN_BASE, UNKNOWN_TEAM),
            ]
        );
    }

    #[test]
    fn test_non_numeric_id_ignored() {
        let text = "BASES { BaseInfo { id = abc\nbaseTeam = Allied } } GlobalValues";
        assert_eq!(bases(text)[0].id, UNKNOWN_ID);
    }

    #[test]
    fn test_missing_section() {
        assert!(bases("BaseInfo { id = 1 }").is_empty());
        assert!(bases("BASES { BaseInfo { id = 1 } }").is_empty());
    }
}
