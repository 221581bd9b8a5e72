//! Lookup commands: vehicle tables, categories and API health.

use super::api_client;
use crate::config::Config;
use crate::constants::catalog::PART_CATEGORIES;
use crate::models::vehicle;

pub async fn cmd_health(config: &Config) -> anyhow::Result<()> {
    let client = api_client(config)?;
    let health = client.health().await?;
    println!("✓ {} ({})", health.message, health.status);
    println!("  {}", client.base_url());
    Ok(())
}

pub async fn cmd_makes(config: &Config) -> anyhow::Result<()> {
    let makes = api_client(config)?.get_makes().await?;

    println!("Vehicle Makes ({} total)", makes.len());
    println!("{:-<40}", "");
    for make in makes {
        println!("• {make}");
    }
    Ok(())
}

pub async fn cmd_models(config: &Config, make: &str) -> anyhow::Result<()> {
    let models = api_client(config)?.get_models(make).await?;

    if models.is_empty() {
        println!("No models listed for {make}.");
        return Ok(());
    }

    println!("{make} Models ({} total)", models.len());
    println!("{:-<40}", "");
    for model in models {
        println!("• {model}");
    }
    Ok(())
}

pub fn cmd_categories() {
    println!("Part Categories");
    println!("{:-<40}", "");
    for category in PART_CATEGORIES {
        println!("• {category}");
    }
}

pub fn cmd_years() {
    let years: Vec<String> = vehicle::current_model_years()
        .iter()
        .map(ToString::to_string)
        .collect();

    println!("Model Years ({} total)", years.len());
    println!("{:-<40}", "");
    for row in years.chunks(10) {
        println!("{}", row.join("  "));
    }
}
