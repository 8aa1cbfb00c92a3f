//! `shelfwatch report` — Generate the expiration report.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{Local, NaiveDate, Utc};
use shelfwatch_config::AppConfig;
use shelfwatch_core::error::NarrativeError;
use shelfwatch_core::narrative::NarrativeProvider;
use shelfwatch_inventory::classifier::classify;
use shelfwatch_inventory::export::export_slices;
use shelfwatch_inventory::loader::{LoaderOptions, load_inventory};
use shelfwatch_providers::static_stub::FailingNarrative;
use shelfwatch_report::builder::{NarrativeOptions, build_report};
use shelfwatch_report::format::ReportParams;
use tracing::info;

pub struct ReportArgs {
    pub csv: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub window: Option<u32>,
    pub today: Option<NaiveDate>,
    pub limit: Option<usize>,
    pub no_narrative: bool,
    pub slices: bool,
}

pub async fn run(args: ReportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let csv_path = args
        .csv
        .unwrap_or_else(|| PathBuf::from(&config.inventory.csv_path));
    let output_path = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.report.output_path));
    let window_days = args.window.unwrap_or(config.window_days);
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let table_limit = args.limit.or(match config.report.table_limit {
        0 => None,
        n => Some(n),
    });

    let loader_options = LoaderOptions {
        expiration_aliases: config.inventory.expiration_aliases.clone(),
    };
    let rows = load_inventory(&csv_path, &loader_options)?;
    let buckets = classify(rows, today, window_days);

    info!(
        expired = buckets.expired.len(),
        expiring_soon = buckets.expiring_soon.len(),
        fresh = buckets.fresh.len(),
        "Inventory classified"
    );

    let params = ReportParams {
        today,
        window_days,
        generated_at: Utc::now(),
        table_limit,
    };

    let provider = narrative_provider(&config, args.no_narrative);
    let narrative_options = NarrativeOptions {
        model: config.default_model.clone(),
        temperature: config.default_temperature,
        max_tokens: Some(config.default_max_tokens),
        prompt_rows: config.narrative.prompt_rows,
    };

    let report = match &provider {
        Some(p) => build_report(&buckets, &params, Some((p.as_ref(), &narrative_options))).await,
        None => build_report(&buckets, &params, None).await,
    };

    std::fs::write(&output_path, &report)?;

    println!("✅ Analysis complete.");
    println!("  Report:   {}", output_path.display());
    println!(
        "  Counts:   {} expired, {} expiring within {} days, {} fresh",
        buckets.expired.len(),
        buckets.expiring_soon.len(),
        window_days,
        buckets.fresh.len()
    );

    if args.slices || config.report.export_slices {
        let dir = output_path.parent().unwrap_or_else(|| Path::new("."));
        let written = export_slices(&buckets, dir)?;
        for path in written {
            println!("  Slice:    {}", path.display());
        }
    }

    Ok(())
}

/// Decide whether and how to run the narrative step.
///
/// A missing API key does not abort the report: the failing stand-in makes
/// the pipeline emit its "recommendations unavailable" note instead.
fn narrative_provider(
    config: &AppConfig,
    no_narrative: bool,
) -> Option<Arc<dyn NarrativeProvider>> {
    if no_narrative || !config.narrative.enabled {
        return None;
    }

    // Local and stub backends work without a key
    let keyless_ok = matches!(
        config.default_provider.as_str(),
        "static" | "ollama" | "vllm"
    );

    if config.has_api_key() || keyless_ok {
        let router = shelfwatch_providers::router::build_from_config(config);
        return router.default();
    }

    eprintln!();
    eprintln!("  No API key configured — the report will note that");
    eprintln!("  recommendations are unavailable. Set one of:");
    eprintln!("    SHELFWATCH_API_KEY, OPENROUTER_API_KEY, OPENAI_API_KEY");
    eprintln!("  or add it to {}", AppConfig::config_dir().join("config.toml").display());
    eprintln!();

    Some(Arc::new(FailingNarrative::new(
        NarrativeError::NotConfigured(format!(
            "no API key for provider '{}'",
            config.default_provider
        )),
    )))
}
