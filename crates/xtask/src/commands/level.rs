//! Resolve a discipline's level from an XP total

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;

use progression_core::{SkillProgress, SkillType};

use crate::utils;

/// Resolve a discipline's level from an XP total
#[derive(Parser)]
pub struct Level {
    /// Discipline name (e.g. mining, runecrafting)
    #[arg(value_name = "SKILL")]
    skill: SkillType,

    /// Cumulative XP
    #[arg(value_name = "XP")]
    xp: f64,

    /// Content directory (defaults to the shipped data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl Level {
    pub fn execute(self) -> Result<()> {
        let catalogs = utils::load_catalogs(self.data_dir)?;
        let curve = catalogs.curves.curve_for(self.skill);
        let progress = SkillProgress::restore(self.xp, curve, self.skill.max_level());
        let level = progress.level();

        println!(
            "{} {} (max {})",
            style(format!("{}:", self.skill.display_name())).bold().cyan(),
            level,
            self.skill.max_level()
        );
        println!("  XP:       {}", progress.xp());
        if level >= self.skill.max_level() {
            println!("  Progress: {}", style("maxed").green());
        } else {
            println!(
                "  Progress: {:.1}% toward {} ({} XP)",
                curve.progress_to_next_level(progress.xp(), level),
                level + 1,
                curve.xp_for_next_level(level)
            );
        }
        println!();
        utils::print_bag("Passive bonus:", &self.skill.passive_bonus(level));
        Ok(())
    }
}
