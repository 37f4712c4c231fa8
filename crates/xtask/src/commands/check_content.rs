//! Load all content files and summarize them
//!
//! Exits with an error if any file is unreadable or a curve is corrupt.
//! Recoverable problems (unknown stats, unknown rarities) are printed as
//! warnings by the loaders.

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;

use progression_core::{Catalogs, ItemCategory, SkillType};

use crate::utils;

/// Load every content file and report what was found
#[derive(Parser)]
pub struct CheckContent {
    /// Content directory (defaults to the shipped data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable summary
    Summary,
    /// JSON object with per-table counts
    Json,
}

impl CheckContent {
    pub fn execute(self) -> Result<()> {
        let catalogs = utils::load_catalogs(self.data_dir)?;

        match self.format {
            OutputFormat::Summary => print_summary(&catalogs),
            OutputFormat::Json => print_json(&catalogs)?,
        }
        Ok(())
    }
}

fn print_summary(catalogs: &Catalogs) {
    println!("{}", style("=== Content Summary ===").bold().green());
    println!();

    println!("{}", style("Reforges:").bold().yellow());
    for category in ItemCategory::ALL {
        let ids: Vec<&str> = catalogs.reforges.reforges(category).map(|r| r.id()).collect();
        println!("  {:<10} {:>3}  {}", category, ids.len(), style(ids.join(", ")).dim());
    }
    println!();

    println!("{}", style("Skills:").bold().yellow());
    for skill in SkillType::ALL {
        let curve = catalogs.curves.curve_for(skill);
        let state = if catalogs.config.is_enabled(skill) {
            style("enabled").green()
        } else {
            style("disabled").red()
        };
        println!(
            "  {:<13} max {:>2}  curve top {:>2}  sources {:>2}  {}",
            skill.display_name(),
            skill.max_level(),
            curve.top_level(),
            catalogs.sources.count(skill),
            state
        );
    }
    println!();

    println!("{}", style("Pets:").bold().yellow());
    let mut species: Vec<&str> = catalogs.pets.species().collect();
    species.sort_unstable();
    for name in species {
        let kinds: Vec<String> = catalogs
            .pets
            .abilities_for(name)
            .iter()
            .map(|a| a.kind.to_string())
            .collect();
        println!("  {:<12} {}", name, kinds.join(", "));
    }
    println!();
    println!("  Max pet level: {}", catalogs.config.max_pet_level);
}

fn print_json(catalogs: &Catalogs) -> Result<()> {
    let reforges: serde_json::Map<String, serde_json::Value> = ItemCategory::ALL
        .iter()
        .map(|c| (c.to_string(), catalogs.reforges.count(*c).into()))
        .collect();
    let curves: serde_json::Map<String, serde_json::Value> = SkillType::ALL
        .iter()
        .map(|s| (s.to_string(), catalogs.curves.curve_for(*s).top_level().into()))
        .collect();

    let summary = serde_json::json!({
        "reforges": reforges,
        "curve_top_levels": curves,
        "pet_species": catalogs.pets.len(),
        "config": catalogs.config,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
