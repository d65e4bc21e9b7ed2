//! Plain-text rendering of the core view models.
use regionmatch_core::{
    format::format_stat, Comparison, Dataset, Field, LandUnit, Region, RegionGroup,
    SelectedSummary,
};
use std::fmt::Write;

/// Renders the comparison table. The selected region is marked with `*`.
pub fn comparison_table(table: &Comparison) -> String {
    let name_width = table
        .rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(6);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Comparables for {} ({}), by {}",
        table.source, table.group, table.field
    );
    let _ = writeln!(
        out,
        "  {:<name_width$}  {:>17}  {:>17}  {:>17}  {:>6}",
        "",
        table.headers[0],
        table.headers[1],
        table.headers[2],
        table.headers[3],
    );
    for row in &table.rows {
        let marker = if row.is_source { '*' } else { ' ' };
        let cell = |value: &str, delta: Option<&str>| {
            format!("{:>8} {:>8}", value, delta.unwrap_or(""))
        };
        let _ = writeln!(
            out,
            "{marker} {:<name_width$}  {:>17}  {:>17}  {:>17}  {:>6}",
            row.name,
            cell(&row.land.value, row.land.delta.as_deref()),
            cell(&row.population.value, row.population.delta.as_deref()),
            cell(&row.gdp.value, row.gdp.delta.as_deref()),
            row.hdi.value,
        );
    }
    out
}

pub fn summary(s: &SelectedSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Region: {} ({})", s.name, s.group);
    let _ = writeln!(out, "  Land:       {}", s.land);
    let _ = writeln!(out, "  Population: {}", s.population);
    let _ = writeln!(out, "  GDP:        {}", s.gdp);
    let _ = writeln!(out, "  HDI:        {}", s.hdi);
    out
}

pub fn stats(db: &Dataset) -> String {
    let stats = db.stats();
    let mut out = String::new();
    let _ = writeln!(out, "Dataset statistics:");
    let _ = writeln!(out, "  US states and territories: {}", stats.domestic);
    let _ = writeln!(out, "  European countries: {}", stats.foreign);
    let _ = writeln!(out, "  Total: {}", stats.total());
    out
}

fn region_line(r: &Region) -> String {
    format!(
        "{:<26} {:>3}  land {:>6}  pop {:>7}  gdp {:>8}  hdi {}",
        r.name,
        r.group.code(),
        format_stat(r, Field::Land, LandUnit::Imperial),
        format_stat(r, Field::Population, LandUnit::Imperial),
        format_stat(r, Field::Gdp, LandUnit::Imperial),
        format_stat(r, Field::Hdi, LandUnit::Imperial),
    )
}

pub fn region_list(db: &Dataset, group: Option<RegionGroup>) -> String {
    let groups: Vec<RegionGroup> = match group {
        Some(g) => vec![g],
        None => RegionGroup::ALL.to_vec(),
    };
    let mut out = String::new();
    for g in groups {
        for r in db.pool(g) {
            let _ = writeln!(out, "{}", region_line(r));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use regionmatch_core::AppState;

    #[test]
    fn table_marks_the_source() {
        let db = Dataset::bundled().unwrap();
        let mut state = AppState::new(db);
        state.select_region("Vermont");
        let text = comparison_table(&state.comparison().unwrap());
        let marked: Vec<&str> = text.lines().filter(|l| l.starts_with('*')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("Vermont"));
        assert!(text.contains("Land (sq mi)"));
    }

    #[test]
    fn list_can_filter_by_group() {
        let db = Dataset::bundled().unwrap();
        let text = region_list(db, Some(RegionGroup::Foreign));
        assert_eq!(text.lines().count(), 50);
        assert!(text.lines().all(|l| l.contains(" eu ")));
    }
}
