//! Session walkthrough for regionmatch-rs
//!
//! Drives an `AppState` the way a UI would: type into the picker, commit a
//! suggestion, switch axis and units, and read the table after each step.

use regionmatch_rs::prelude::*;

fn print_table(state: &AppState<'_>) {
    let Some(table) = state.comparison() else {
        println!("  (nothing selected)");
        return;
    };
    println!(
        "  Comparables for {} by {} [{} | {} | {} | {}]",
        table.source,
        table.field,
        table.headers[0],
        table.headers[1],
        table.headers[2],
        table.headers[3]
    );
    for row in &table.rows {
        let marker = if row.is_source { "*" } else { " " };
        println!(
            "  {marker} {:<24} {:>6} {:>8}  {:>7} {:>8}  {:>8} {:>8}  {:>6}",
            row.name,
            row.land.value,
            row.land.delta.as_deref().unwrap_or(""),
            row.population.value,
            row.population.delta.as_deref().unwrap_or(""),
            row.gdp.value,
            row.gdp.delta.as_deref().unwrap_or(""),
            row.hdi.value,
        );
    }
}

fn main() -> Result<()> {
    println!("=== regionmatch Session Walkthrough ===\n");

    let db = Dataset::bundled()?;
    let mut picker = Autocomplete::for_dataset(db);
    let mut state = AppState::new(db);

    println!("--- Step 1: Type 'mas' and press Enter ---");
    picker.input("mas");
    println!("  suggestions: {:?}", picker.suggestions());
    if let Some(name) = picker.enter() {
        state.select_region(name);
    }
    print_table(&state);
    println!();

    println!("--- Step 2: Unknown names keep the selection ---");
    let ok = state.select_region("Atlantis");
    println!("  resolved: {ok}, still showing: {:?}", state.selected().map(|r| r.name()));
    println!();

    println!("--- Step 3: Rank by GDP, then per capita ---");
    state.set_axis(Axis::Gdp);
    print_table(&state);
    state.set_gdp_mode(GdpMode::PerCapita);
    print_table(&state);
    println!();

    println!("--- Step 4: Metric land units (no re-ranking) ---");
    let before = state.recomputations();
    state.set_land_unit(LandUnit::Metric);
    print_table(&state);
    println!("  recomputations: {} -> {}", before, state.recomputations());

    Ok(())
}
