//! Roll reforges for an item category

use anyhow::Result;
use clap::Parser;
use console::style;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

use progression_core::{ItemCategory, Rarity};

use crate::utils;

/// Roll reforges for an item category
#[derive(Parser)]
pub struct Roll {
    /// Item category (weapon, armor, tool, accessory)
    #[arg(value_name = "CATEGORY")]
    category: ItemCategory,

    /// Item rarity; unknown names fall back to common
    #[arg(short, long, default_value = "legendary")]
    rarity: String,

    /// Number of successive rerolls
    #[arg(short = 'n', long, default_value_t = 5)]
    count: usize,

    /// RNG seed for reproducible rolls
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Content directory (defaults to the shipped data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl Roll {
    pub fn execute(self) -> Result<()> {
        let catalogs = utils::load_catalogs(self.data_dir)?;
        let rarity = Rarity::from_str_lenient(&self.rarity);
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);

        println!(
            "{} {} {} (cost {} per roll)",
            style("Rolling:").bold().cyan(),
            rarity.display_name(),
            self.category,
            rarity.reforge_cost()
        );

        let mut current: Option<String> = None;
        for roll in 1..=self.count {
            let reforge = catalogs
                .reforges
                .reroll(current.as_deref(), self.category, &mut rng)?;
            let bonus = catalogs.reforges.stats_for(reforge, rarity);
            println!(
                "  {:>2}. {:<10} {}",
                roll,
                reforge.id(),
                style(bonus.describe().join(", ")).dim()
            );
            current = Some(reforge.id().to_string());
        }
        Ok(())
    }
}
