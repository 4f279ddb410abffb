use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{BaseStats, CreatureStats};
use crate::domain::ports::Catalog;

/// Variants that share an id with their base form and are left out
const EXCLUDED_VARIANTS: [&str; 2] = ["SHADOW", "PURIFIED"];

/// Extra lookup keys for regional and alternate forms. A key containing the
/// pattern gains an alias: the template with `{}` replaced by the key minus
/// the pattern, so `rattata-alola` is also found as `alolan-rattata`.
const ALIASES: [(&str, &str); 8] = [
    ("mewtwo-a", "mewtwo-armored{}"),
    ("-alola", "alolan-{}"),
    ("castform-", "{}-castform"),
    ("shellos-east-sea", "shellos-east{}"),
    ("shellos-west-sea", "shellos-west{}"),
    ("-normal", "{}"),
    ("deoxys-", "{}-deoxys"),
    ("galarian-", "{}-galarian"),
];

#[derive(Debug, Deserialize)]
struct CreatureRecord {
    id: String,
    name: String,
    dex: u32,
    stats: BaseStats,
    #[serde(rename = "maxCP", default)]
    max_cp: u32,
    #[serde(default)]
    forms: Option<Vec<FormRecord>>,
}

#[derive(Debug, Deserialize)]
struct FormRecord {
    id: String,
    name: String,
}

fn is_excluded(id: &str) -> bool {
    let upper = id.to_uppercase();
    EXCLUDED_VARIANTS.iter().any(|v| upper.contains(v))
}

/// Lower-cases and joins words with `-` so ids and names share one key space
fn normalize(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .replace(['_', ' '], "-")
}

/// In-memory catalog keyed by normalized id and display name
#[derive(Debug, Clone, Default)]
pub struct JsonCatalog {
    by_key: HashMap<String, CreatureStats>,
    by_dex: HashMap<u32, String>,
    count: usize,
}

impl JsonCatalog {
    /// Builds a catalog from already-resolved creatures
    pub fn from_creatures(creatures: impl IntoIterator<Item = CreatureStats>) -> Self {
        let mut catalog = Self::default();
        for creature in creatures {
            catalog.insert(creature);
        }
        catalog
    }

    /// Parses a catalog from a JSON array of creature records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<CreatureRecord> =
            serde_json::from_str(json).context("Failed to parse creature catalog JSON")?;

        let mut catalog = Self::default();
        for record in records {
            if is_excluded(&record.id) {
                debug!(id = %record.id, "skipping variant");
                continue;
            }

            let base = CreatureStats::new(
                normalize(&record.id),
                record.name,
                record.dex,
                record.stats,
                record.max_cp,
            );

            catalog.insert(base.clone());

            for form in record.forms.into_iter().flatten() {
                if is_excluded(&form.id) {
                    continue;
                }
                catalog.insert(CreatureStats {
                    id: normalize(&form.id),
                    name: form.name,
                    ..base.clone()
                });
            }
        }

        catalog.add_aliases();
        Ok(catalog)
    }

    /// Loads a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read creature catalog {}", path.display()))?;
        let catalog = Self::from_json_str(&json)
            .with_context(|| format!("Failed to load creature catalog {}", path.display()))?;

        info!(path = %path.display(), creatures = catalog.count, "creature catalog loaded");
        Ok(catalog)
    }

    fn insert(&mut self, creature: CreatureStats) {
        if self.by_key.contains_key(&creature.id) {
            return;
        }
        self.by_dex.entry(creature.dex).or_insert_with(|| creature.id.clone());
        self.by_key
            .entry(normalize(&creature.name))
            .or_insert_with(|| creature.clone());
        self.by_key.insert(creature.id.clone(), creature);
        self.count += 1;
    }

    /// Registers alias keys for every creature id; existing keys win
    fn add_aliases(&mut self) {
        let mut ids: Vec<&String> = self
            .by_key
            .iter()
            .filter(|(key, creature)| **key == creature.id)
            .map(|(key, _)| key)
            .collect();
        ids.sort();

        let aliases: Vec<(String, CreatureStats)> = ids
            .into_iter()
            .flat_map(|id| {
                ALIASES.iter().filter_map(move |(pattern, template)| {
                    id.contains(pattern)
                        .then(|| template.replace("{}", &id.replacen(pattern, "", 1)))
                })
                .filter(|alias| !alias.is_empty())
                .map(move |alias| (alias, id.clone()))
            })
            .filter_map(|(alias, id)| self.by_key.get(&id).map(|c| (alias, c.clone())))
            .collect();

        for (alias, creature) in aliases {
            debug!(alias = %alias, id = %creature.id, "registering alias");
            self.by_key.entry(alias).or_insert(creature);
        }
    }
}

impl Catalog for JsonCatalog {
    fn find_creature(&self, name_or_index: &str) -> DomainResult<CreatureStats> {
        let query = name_or_index.trim();
        let key = query
            .parse::<u32>()
            .ok()
            .and_then(|dex| self.by_dex.get(&dex).cloned())
            .unwrap_or_else(|| normalize(query));

        self.by_key
            .get(&key)
            .cloned()
            .ok_or_else(|| DomainError::CreatureNotFound(query.to_string()))
    }

    fn len(&self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {
            "id": "BULBASAUR",
            "name": "Bulbasaur",
            "dex": 1,
            "stats": { "baseAttack": 118, "baseDefense": 111, "baseStamina": 128 },
            "maxCP": 1115
        },
        {
            "id": "RATTATA",
            "name": "Rattata",
            "dex": 19,
            "stats": { "baseAttack": 103, "baseDefense": 70, "baseStamina": 102 },
            "maxCP": 581,
            "forms": [
                { "id": "RATTATA_ALOLA", "name": "Rattata (Alola)" },
                { "id": "RATTATA_SHADOW", "name": "Rattata (Shadow)" }
            ]
        },
        {
            "id": "MEWTWO_SHADOW",
            "name": "Mewtwo",
            "dex": 150,
            "stats": { "baseAttack": 300, "baseDefense": 182, "baseStamina": 214 },
            "maxCP": 4178
        },
        {
            "id": "MR_MIME",
            "name": "Mr. Mime",
            "dex": 122,
            "stats": { "baseAttack": 192, "baseDefense": 205, "baseStamina": 120 },
            "maxCP": 2228,
            "forms": null
        }
    ]"#;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = JsonCatalog::from_json_str(SAMPLE).unwrap();
        let creature = catalog.find_creature("BuLbAsAuR").unwrap();
        assert_eq!(creature.id, "bulbasaur");
        assert_eq!(creature.stats, BaseStats::new(118, 111, 128));
        assert_eq!(creature.max_cp, 1115);
    }

    #[test]
    fn test_lookup_by_dex_number() {
        let catalog = JsonCatalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.find_creature("19").unwrap().id, "rattata");
        assert_eq!(catalog.find_creature("1").unwrap().name, "Bulbasaur");
        assert!(catalog.find_creature("999").is_err());
    }

    #[test]
    fn test_forms_share_base_stats() {
        let catalog = JsonCatalog::from_json_str(SAMPLE).unwrap();
        let alola = catalog.find_creature("rattata-alola").unwrap();
        assert_eq!(alola.name, "Rattata (Alola)");
        assert_eq!(alola.stats, BaseStats::new(103, 70, 102));
        assert_eq!(catalog.find_creature("rattata_alola").unwrap().id, "rattata-alola");
    }

    #[test]
    fn test_shadow_variants_are_skipped() {
        let catalog = JsonCatalog::from_json_str(SAMPLE).unwrap();
        assert!(matches!(
            catalog.find_creature("mewtwo"),
            Err(DomainError::CreatureNotFound(_))
        ));
        assert!(catalog.find_creature("mewtwo-shadow").is_err());
        assert!(catalog.find_creature("rattata-shadow").is_err());
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_regional_form_alias() {
        let catalog = JsonCatalog::from_json_str(SAMPLE).unwrap();
        let alolan = catalog.find_creature("alolan-rattata").unwrap();
        assert_eq!(alolan.id, "rattata-alola");
        assert_eq!(catalog.find_creature("Alolan Rattata").unwrap().id, "rattata-alola");
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_alias_never_replaces_existing_key() {
        let json = r#"[
            {
                "id": "CASTFORM",
                "name": "Weather Castform",
                "dex": 351,
                "stats": { "baseAttack": 1, "baseDefense": 1, "baseStamina": 1 },
                "maxCP": 10
            },
            {
                "id": "CASTFORM_NORMAL",
                "name": "Castform",
                "dex": 351,
                "stats": { "baseAttack": 139, "baseDefense": 139, "baseStamina": 172 },
                "maxCP": 1652
            }
        ]"#;
        let catalog = JsonCatalog::from_json_str(json).unwrap();

        // `castform-normal` would alias to both `normal-castform` and `castform`
        assert_eq!(catalog.find_creature("normal-castform").unwrap().id, "castform-normal");
        assert_eq!(catalog.find_creature("castform").unwrap().stats, BaseStats::new(1, 1, 1));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_lookup_by_display_name() {
        let catalog = JsonCatalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.find_creature("mr mime").unwrap().id, "mr-mime");
        assert_eq!(catalog.find_creature("Mr. Mime").unwrap().id, "mr-mime");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = JsonCatalog::load(file.path()).unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.find_creature("bulbasaur").is_ok());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = JsonCatalog::load("/nonexistent/creatures.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_json_fails() {
        assert!(JsonCatalog::from_json_str("{ not json").is_err());
    }
}
