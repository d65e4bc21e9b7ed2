// crates/regionmatch-core/src/view.rs
//! Serializable view models consumed by the CLI and WASM front ends.
use crate::format::{format_field_delta, format_stat};
use crate::model::{Axis, Field, GdpMode, LandUnit, Region, RegionGroup};
use serde::Serialize;

/// One formatted stat, with its delta against the source for candidate rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCell {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub name: String,
    pub group: RegionGroup,
    pub is_source: bool,
    pub land: StatCell,
    pub population: StatCell,
    pub gdp: StatCell,
    pub hdi: StatCell,
}

/// The comparison table: the source among its nearest cross-pool neighbours,
/// ordered by the ranking field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub source: String,
    pub group: RegionGroup,
    pub axis: Axis,
    pub field: Field,
    pub gdp_mode: GdpMode,
    pub land_unit: LandUnit,
    pub headers: [String; 4],
    pub rows: Vec<ComparisonRow>,
}

impl Comparison {
    /// Builds the table. `rows` must contain `source` (compared by address).
    pub fn build(
        source: &Region,
        rows: &[&Region],
        axis: Axis,
        gdp_mode: GdpMode,
        land_unit: LandUnit,
    ) -> Self {
        let gdp_field = Axis::Gdp.effective_field(gdp_mode);

        let rows = rows
            .iter()
            .map(|r| {
                let is_source = std::ptr::eq(*r, source);
                let cell = |field: Field, with_delta: bool| StatCell {
                    value: format_stat(r, field, land_unit),
                    delta: (with_delta && !is_source).then(|| format_field_delta(source, r, field)),
                };
                ComparisonRow {
                    name: r.name.clone(),
                    group: r.group,
                    is_source,
                    land: cell(Field::Land, true),
                    population: cell(Field::Population, true),
                    gdp: cell(gdp_field, true),
                    hdi: cell(Field::Hdi, false),
                }
            })
            .collect();

        Comparison {
            source: source.name.clone(),
            group: source.group,
            axis,
            field: axis.effective_field(gdp_mode),
            gdp_mode,
            land_unit,
            headers: headers(gdp_mode, land_unit),
            rows,
        }
    }
}

/// Column titles for the land, population, GDP and HDI columns.
pub fn headers(gdp_mode: GdpMode, land_unit: LandUnit) -> [String; 4] {
    let gdp = match gdp_mode {
        GdpMode::Absolute => "GDP ($)".to_string(),
        GdpMode::PerCapita => "GDP ($/person)".to_string(),
    };
    [
        format!("Land ({})", land_unit.symbol()),
        "Population".to_string(),
        gdp,
        "HDI".to_string(),
    ]
}

/// The verbose stats of the single selected region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedSummary {
    pub name: String,
    pub group: RegionGroup,
    pub land: String,
    pub population: String,
    pub gdp: String,
    pub hdi: String,
}

impl SelectedSummary {
    pub fn build(region: &Region, gdp_mode: GdpMode, land_unit: LandUnit) -> Self {
        let gdp_field = Axis::Gdp.effective_field(gdp_mode);
        let per = match gdp_mode {
            GdpMode::Absolute => "",
            GdpMode::PerCapita => " per capita",
        };
        SelectedSummary {
            name: region.name.clone(),
            group: region.group,
            land: format!(
                "{} {}",
                format_stat(region, Field::Land, land_unit),
                land_unit.symbol()
            ),
            population: format_stat(region, Field::Population, land_unit),
            gdp: format!("${} USD{per}", format_stat(region, gdp_field, land_unit)),
            hdi: format_stat(region, Field::Hdi, land_unit),
        }
    }
}
