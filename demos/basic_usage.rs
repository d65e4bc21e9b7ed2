//! Basic usage example for regionmatch-rs
//!
//! This example demonstrates how to:
//! - Load the bundled dataset
//! - Look regions up by name
//! - Find the nearest cross-pool regions on one field
//! - Format stats and relative deltas

use regionmatch_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== regionmatch Basic Usage Example ===\n");

    let db = Dataset::bundled()?;
    let stats = db.stats();
    println!(
        "✓ Dataset loaded: {} US regions, {} European countries\n",
        stats.domestic, stats.foreign
    );

    // Example 1: Look a region up
    println!("--- Example 1: Find a region by name ---");
    if let Some(r) = db.find("colorado") {
        println!("Found: {} ({})", r.name(), r.group());
        println!("Land: {}", format_stat(r, Field::Land, LandUnit::Imperial));
        println!("Population: {}", format_stat(r, Field::Population, LandUnit::Imperial));
        println!("GDP: ${}", format_stat(r, Field::Gdp, LandUnit::Imperial));
    }
    println!();

    // Example 2: Nearest regions by population
    println!("--- Example 2: European countries closest to Ohio by population ---");
    if let Some(ohio) = db.find("Ohio") {
        let row = nearest(ohio, Field::Population, db.pool(RegionGroup::Foreign), 5);
        for r in row {
            let delta = if r.name == ohio.name {
                String::new()
            } else {
                format_relative_delta(ohio.population, r.population)
            };
            println!(
                "  {:<16} {:>8} {:>8}",
                r.name,
                format_stat(r, Field::Population, LandUnit::Imperial),
                delta
            );
        }
    }
    println!();

    // Example 3: Per-capita ranking
    println!("--- Example 3: US regions closest to Switzerland in GDP per capita ---");
    if let Some(ch) = db.find("Switzerland") {
        for r in nearest(ch, Field::GdpPerCapita, db.pool(RegionGroup::Domestic), 3) {
            println!(
                "  {:<16} ${}",
                r.name,
                format_stat(r, Field::GdpPerCapita, LandUnit::Imperial)
            );
        }
    }

    Ok(())
}
