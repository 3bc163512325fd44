//! Loading tier tables from JSON
//!
//! ```json
//! {
//!   "tiers": [
//!     { "name": "Common", "chance": 0.7, "categories": [{ "name": "human", "weight": 2 }] }
//!   ]
//! }
//! ```

use anyhow::Context as _;
use std::path::Path;
use ttrpg_tools_core as core;

pub fn load(path: &Path) -> anyhow::Result<core::PopulationTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    parse(std::io::BufReader::new(file)).with_context(|| format!("failed to read {}", path.display()))
}

fn parse(reader: impl std::io::Read) -> anyhow::Result<core::PopulationTable> {
    let table: core::PopulationTable = serde_json::from_reader(reader)?;
    if table.tiers.is_empty() {
        anyhow::bail!("the file does not define any tiers");
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttrpg_tools_core::{presets, PopulationTable, Tier};

    #[test]
    fn parse_tiers() {
        let json = r#"{
            "tiers": [
                {
                    "name": "Common",
                    "chance": 0.7,
                    "categories": [
                        { "name": "human", "weight": 2 },
                        { "name": "elf", "weight": 1 }
                    ]
                },
                { "name": "Rare", "chance": 0.05, "categories": [] }
            ]
        }"#;

        let table = parse(json.as_bytes()).unwrap();

        pretty_assertions::assert_eq!(
            table,
            PopulationTable::new(vec![
                Tier::new("Common", 0.7).category("human", 2).category("elf", 1),
                Tier::new("Rare", 0.05),
            ])
        );
    }

    #[test]
    fn written_table_reads_back() {
        let table = presets::default_ancestries();
        let json = serde_json::to_string(&table).unwrap();
        pretty_assertions::assert_eq!(parse(json.as_bytes()).unwrap(), table);
    }

    #[test]
    fn no_tiers() {
        let err = parse(r#"{ "tiers": [] }"#.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("does not define any tiers"), "{err}");
    }

    #[test]
    fn negative_weight() {
        let json = r#"{ "tiers": [{ "name": "Common", "chance": 0.7,
            "categories": [{ "name": "human", "weight": -1 }] }] }"#;
        assert!(parse(json.as_bytes()).is_err());
    }

    #[test]
    fn missing_file() {
        let err = load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("failed to open"), "{err}");
    }
}
