//! Utility functions for xtask commands

use anyhow::{Context, Result};
use console::style;
use std::path::{Path, PathBuf};

use progression_content::ContentFactory;
use progression_core::{Catalogs, StatBag};

/// Default content directory shipped with `progression-content`.
pub fn default_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../progression/content/data")
}

/// Load catalogs from `data_dir` (or the shipped data).
pub fn load_catalogs(data_dir: Option<PathBuf>) -> Result<Catalogs> {
    let data_dir = data_dir.unwrap_or_else(default_data_dir);
    ContentFactory::new(&data_dir)
        .load_catalogs()
        .with_context(|| format!("Failed to load content from {}", data_dir.display()))
}

/// Print a stat bag, one line per stat.
pub fn print_bag(title: &str, bag: &StatBag) {
    println!("{}", style(title).bold().yellow());
    if bag.is_empty() {
        println!("  {}", style("(none)").dim());
    }
    for line in bag.describe() {
        println!("  {}", line);
    }
}
