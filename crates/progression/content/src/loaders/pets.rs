//! Companion species loader.

use std::path::Path;

use progression_core::{PetAbility, PetAbilityKind, PetAbilityRegistry};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// One ability entry. Omitted coefficients use the family defaults.
#[derive(Debug, Deserialize)]
struct AbilitySpec {
    kind: String,
    #[serde(default)]
    primary: Option<f64>,
    #[serde(default)]
    secondary: Option<f64>,
}

impl AbilitySpec {
    /// Builds the ability; an unknown kind is dropped with a warning.
    fn build(&self, species: &str) -> Option<PetAbility> {
        let Ok(kind) = self.kind.parse::<PetAbilityKind>() else {
            tracing::warn!("pet '{}': unknown ability kind '{}' dropped", species, self.kind);
            return None;
        };
        let (primary, secondary) = kind.default_coefficients();
        Some(PetAbility::with_coefficients(
            kind,
            self.primary.unwrap_or(primary),
            self.secondary.unwrap_or(secondary),
        ))
    }
}

#[derive(Debug, Deserialize)]
struct SpeciesSpec {
    species: String,
    #[serde(default)]
    abilities: Vec<AbilitySpec>,
}

/// Loader for the species registry from RON files.
///
/// # Format
///
/// ```ron
/// [
///     (species: "tiger", abilities: [(kind: "combat")]),
///     (species: "wolf", abilities: [(kind: "combat", primary: Some(0.08))]),
/// ]
/// ```
pub struct PetLoader;

impl PetLoader {
    /// Load the species registry from a RON file.
    pub fn load(path: &Path) -> LoadResult<PetAbilityRegistry> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse the species registry from RON text.
    pub fn parse(content: &str) -> LoadResult<PetAbilityRegistry> {
        let specs: Vec<SpeciesSpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse pets RON: {}", e))?;

        if specs.is_empty() {
            tracing::warn!("no pet species configured");
        }

        let mut registry = PetAbilityRegistry::new();
        for spec in specs {
            let abilities = spec
                .abilities
                .iter()
                .filter_map(|ability| ability.build(&spec.species))
                .collect();
            registry.insert(&spec.species, abilities);
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use progression_core::{PetRarity, StatKind};

    #[test]
    fn test_parse_pets() {
        let registry = PetLoader::parse(
            r#"[
                (species: "tiger", abilities: [(kind: "combat")]),
                (species: "wolf", abilities: [(kind: "combat", primary: Some(0.2))]),
                (species: "rock"),
            ]"#,
        )
        .unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.abilities_for("TIGER")[0], PetAbility::new(PetAbilityKind::Combat));

        let wolf = registry.abilities_for("wolf")[0];
        assert_eq!(wolf.primary_coefficient, 0.2);
        assert_eq!(wolf.secondary_coefficient, 0.005);

        assert!(registry.abilities_for("rock").is_empty());
        assert!(registry.contribution("rock", 100, PetRarity::Mythic).is_empty());
    }

    #[test]
    fn test_override_changes_contribution() {
        let registry = PetLoader::parse(
            r#"[(species: "wolf", abilities: [(kind: "combat", primary: Some(0.2))])]"#,
        )
        .unwrap();
        let bag = registry.contribution("wolf", 10, PetRarity::Common);
        assert!((bag.get(StatKind::Strength) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_kind_dropped() {
        let registry = PetLoader::parse(
            r#"[(species: "x", abilities: [(kind: "cooking"), (kind: "mining")])]"#,
        )
        .unwrap();
        assert_eq!(registry.abilities_for("x"), &[PetAbility::new(PetAbilityKind::Mining)]);
    }

    #[test]
    fn test_malformed_pets_fail() {
        assert!(PetLoader::parse(r#"[(species: 5)]"#).is_err());
    }
}
