//! `shelfwatch status` — Show bucket counts and configuration.
//!
//! Loads and classifies the inventory but never calls a provider and never
//! writes files.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use shelfwatch_config::AppConfig;
use shelfwatch_core::inventory::Bucket;
use shelfwatch_inventory::classifier::classify;
use shelfwatch_inventory::loader::{LoaderOptions, load_inventory};

pub async fn run(
    csv: Option<PathBuf>,
    window: Option<u32>,
    today: Option<NaiveDate>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let csv_path = csv.unwrap_or_else(|| PathBuf::from(&config.inventory.csv_path));
    let window_days = window.unwrap_or(config.window_days);
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    println!("🥫 Shelfwatch Status");
    println!("===================");
    println!("  Config dir:  {}", AppConfig::config_dir().display());
    println!("  Inventory:   {}", csv_path.display());
    println!("  Reference:   {today}");
    println!("  Window:      {window_days} days");
    println!("  Provider:    {}", config.default_provider);
    println!("  Model:       {}", config.default_model);
    println!(
        "  Narrative:   {}",
        if config.narrative.enabled { "enabled" } else { "disabled" }
    );

    let loader_options = LoaderOptions {
        expiration_aliases: config.inventory.expiration_aliases.clone(),
    };
    let rows = load_inventory(&csv_path, &loader_options)?;
    let buckets = classify(rows, today, window_days);

    println!();
    println!(
        "  Expired:        {:>4} items, {:>5} units",
        buckets.expired.len(),
        buckets.units(Bucket::Expired)
    );
    println!(
        "  Expiring soon:  {:>4} items, {:>5} units",
        buckets.expiring_soon.len(),
        buckets.units(Bucket::ExpiringSoon)
    );
    println!(
        "  Fresh:          {:>4} items, {:>5} units",
        buckets.fresh.len(),
        buckets.units(Bucket::Fresh)
    );

    // Nudge toward onboard if there is no config yet
    let config_path = AppConfig::config_dir().join("config.toml");
    if !config_path.exists() {
        println!("\n  ⚠️  No config file — run `shelfwatch onboard` first");
    }

    Ok(())
}
