//! Show a companion's abilities and stat contribution

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;

use progression_core::PetRarity;

use crate::utils;

/// Show a companion's abilities and stat contribution
#[derive(Parser)]
pub struct Pet {
    /// Species id (case-insensitive)
    #[arg(value_name = "SPECIES")]
    species: String,

    /// Pet level (clamped to the configured maximum)
    #[arg(short, long, default_value_t = 100)]
    level: u32,

    /// Pet rarity; unknown names fall back to common
    #[arg(short, long, default_value = "legendary")]
    rarity: String,

    /// Content directory (defaults to the shipped data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl Pet {
    pub fn execute(self) -> Result<()> {
        let catalogs = utils::load_catalogs(self.data_dir)?;
        let rarity = PetRarity::from_str_lenient(&self.rarity);
        let level = catalogs.config.clamp_pet_level(self.level);

        if !catalogs.pets.contains(&self.species) {
            println!(
                "{} '{}' has no abilities",
                style("Note:").bold().yellow(),
                self.species
            );
            return Ok(());
        }

        println!(
            "{} {} (level {}, {} ×{})",
            style("Pet:").bold().cyan(),
            self.species.to_ascii_uppercase(),
            level,
            rarity,
            rarity.stat_multiplier()
        );
        for line in catalogs.pets.describe(&self.species, level, rarity) {
            println!("  {}", line);
        }
        println!();
        utils::print_bag(
            "Total contribution:",
            &catalogs.pets.contribution(&self.species, level, rarity),
        );
        Ok(())
    }
}
