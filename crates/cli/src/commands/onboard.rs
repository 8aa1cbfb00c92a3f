//! `shelfwatch onboard` — First-time setup.

use shelfwatch_config::AppConfig;

const SAMPLE_INVENTORY: &str = "\
item,quantity,expiration_date,category
Whole Milk 1L,8,2025-10-15,Dairy
Greek Yogurt 500g,12,2025-10-17,Dairy
Eggs (dozen),30,2025-10-20,Protein
Chicken Breast 1kg,6,2025-10-22,Protein
Romaine Lettuce,10,2025-10-19,Produce
Roma Tomatoes 1kg,15,2025-10-24,Produce
Basmati Rice 5kg,4,2026-03-01,Dry Goods
Olive Oil 1L,9,2026-06-30,Pantry
";

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = AppConfig::config_dir();
    let config_path = config_dir.join("config.toml");
    let sample_path = config_dir.join("sample_inventory.csv");

    println!("🥫 Shelfwatch — First-Time Setup");
    println!("================================\n");

    // Create directories
    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
        println!("✅ Created config directory: {}", config_dir.display());
    } else {
        println!("  Config directory exists: {}", config_dir.display());
    }

    // Create sample data for a first run
    if !sample_path.exists() {
        std::fs::write(&sample_path, SAMPLE_INVENTORY)?;
        println!("✅ Created sample inventory: {}", sample_path.display());
    }

    // Create config file
    if config_path.exists() {
        println!("\n⚠️  Config already exists at: {}", config_path.display());
        println!("   Edit it manually or delete and re-run onboard.\n");
    } else {
        let default_toml = AppConfig::default_toml();
        std::fs::write(&config_path, &default_toml)?;
        println!("✅ Created config.toml at: {}", config_path.display());
        println!("\n📝 Next steps:");
        println!("   1. Edit {} and add your API key", config_path.display());
        println!("   2. Point inventory.csv_path at your inventory export");
        println!(
            "   3. Try it: shelfwatch report --csv {} --today 2025-10-18",
            sample_path.display()
        );
        println!();
    }

    println!("🎉 Setup complete! Run `shelfwatch status` to check your inventory.\n");

    Ok(())
}
