// crates/regionmatch-core/src/model.rs
use crate::error::RegionError;
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Square kilometres per square mile, as used for display conversion.
pub const KM2_PER_MI2: f64 = 2.59;

/// Which of the two fixed pools a region belongs to.
///
/// Comparisons always run against the opposite pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RegionGroup {
    /// US states and territories.
    #[serde(rename = "us")]
    Domestic,
    /// European countries.
    #[serde(rename = "eu")]
    Foreign,
}

impl RegionGroup {
    pub const ALL: [RegionGroup; 2] = [RegionGroup::Domestic, RegionGroup::Foreign];

    /// The pool a region of this group is compared against.
    pub fn opposite(self) -> Self {
        match self {
            RegionGroup::Domestic => RegionGroup::Foreign,
            RegionGroup::Foreign => RegionGroup::Domestic,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            RegionGroup::Domestic => "us",
            RegionGroup::Foreign => "eu",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RegionGroup::Domestic => "US",
            RegionGroup::Foreign => "Europe",
        }
    }
}

impl fmt::Display for RegionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RegionGroup {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "us" | "usa" | "domestic" => Ok(RegionGroup::Domestic),
            "eu" | "europe" | "foreign" => Ok(RegionGroup::Foreign),
            other => Err(RegionError::InvalidData(format!("unknown region group '{other}'"))),
        }
    }
}

/// Stable handle to a region: its pool plus its position in that pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionId {
    pub group: RegionGroup,
    pub index: u16,
}

/// A region record. Immutable once loaded.
///
/// All numbers are normalized at load time: `gdp` in millions of USD,
/// `land_area` in square kilometres.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub group: RegionGroup,
    pub name: String,
    /// Millions of USD.
    pub gdp: f64,
    /// Square kilometres.
    pub land_area: f64,
    pub population: f64,
    /// 0 means "not available".
    pub hdi: f64,
    /// Millions of USD per person. Non-finite when population is zero.
    pub gdp_per_capita: f64,
}

impl Region {
    /// Builds a record and derives `gdp_per_capita`.
    pub fn new(
        group: RegionGroup,
        name: impl Into<String>,
        gdp: f64,
        land_area: f64,
        population: f64,
        hdi: f64,
    ) -> Self {
        Region {
            group,
            name: name.into(),
            gdp,
            land_area,
            population,
            hdi,
            gdp_per_capita: gdp / population,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> RegionGroup {
        self.group
    }

    /// HDI, or `None` for the "not available" sentinel.
    pub fn hdi(&self) -> Option<f64> {
        (self.hdi > 0.0).then_some(self.hdi)
    }

    /// GDP per person in millions of USD, or `None` when population is zero.
    pub fn gdp_per_capita(&self) -> Option<f64> {
        self.gdp_per_capita.is_finite().then_some(self.gdp_per_capita)
    }

    /// Shorthand for [`Field::value`].
    #[inline]
    pub fn value(&self, field: Field) -> f64 {
        field.value(self)
    }
}

impl NameMatch for Region {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// A numeric attribute a region can be ranked on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Gdp,
    GdpPerCapita,
    Land,
    Population,
    Hdi,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Land,
        Field::Population,
        Field::Gdp,
        Field::GdpPerCapita,
        Field::Hdi,
    ];

    /// Reads this field from a region.
    #[inline]
    pub fn value(self, region: &Region) -> f64 {
        match self {
            Field::Gdp => region.gdp,
            Field::GdpPerCapita => region.gdp_per_capita,
            Field::Land => region.land_area,
            Field::Population => region.population,
            Field::Hdi => region.hdi,
        }
    }

    /// Whether `region` carries a usable value for this field.
    ///
    /// False for the HDI sentinel and for non-finite values.
    pub fn is_available(self, region: &Region) -> bool {
        let v = self.value(region);
        match self {
            Field::Hdi => v.is_finite() && v > 0.0,
            _ => v.is_finite(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Gdp => "GDP",
            Field::GdpPerCapita => "GDP per capita",
            Field::Land => "Land",
            Field::Population => "Population",
            Field::Hdi => "HDI",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The ranking axis a user can pick.
///
/// Combined with [`GdpMode`] it yields the effective [`Field`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    Land,
    #[serde(alias = "population")]
    Pop,
    Gdp,
    Hdi,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Land, Axis::Pop, Axis::Gdp, Axis::Hdi];

    /// The field this axis ranks on for the given GDP mode.
    pub fn effective_field(self, gdp_mode: GdpMode) -> Field {
        match (self, gdp_mode) {
            (Axis::Gdp, GdpMode::PerCapita) => Field::GdpPerCapita,
            (Axis::Gdp, GdpMode::Absolute) => Field::Gdp,
            (Axis::Land, _) => Field::Land,
            (Axis::Pop, _) => Field::Population,
            (Axis::Hdi, _) => Field::Hdi,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Axis::Land => "land",
            Axis::Pop => "pop",
            Axis::Gdp => "gdp",
            Axis::Hdi => "hdi",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Axis {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "land" | "area" => Ok(Axis::Land),
            "pop" | "population" => Ok(Axis::Pop),
            "gdp" => Ok(Axis::Gdp),
            "hdi" => Ok(Axis::Hdi),
            _ => Err(RegionError::UnknownAxis(s.to_string())),
        }
    }
}

/// Whether GDP is shown and ranked as a total or per person.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GdpMode {
    #[default]
    Absolute,
    PerCapita,
}

impl FromStr for GdpMode {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "abs" | "absolute" | "total" => Ok(GdpMode::Absolute),
            "per-capita" | "per capita" | "percapita" | "pc" => Ok(GdpMode::PerCapita),
            _ => Err(RegionError::UnknownUnit(s.to_string())),
        }
    }
}

/// Unit for displaying land area. Never affects ranking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandUnit {
    #[default]
    #[serde(rename = "mi2", alias = "mi", alias = "imperial")]
    Imperial,
    #[serde(rename = "km2", alias = "km", alias = "metric")]
    Metric,
}

impl LandUnit {
    /// Converts an area in square kilometres into this unit.
    #[inline]
    pub fn from_km2(self, km2: f64) -> f64 {
        match self {
            LandUnit::Imperial => km2 / KM2_PER_MI2,
            LandUnit::Metric => km2,
        }
    }

    /// Converts an area in this unit into square kilometres.
    #[inline]
    pub fn to_km2(self, value: f64) -> f64 {
        match self {
            LandUnit::Imperial => value * KM2_PER_MI2,
            LandUnit::Metric => value,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LandUnit::Imperial => "sq mi",
            LandUnit::Metric => "sq km",
        }
    }
}

impl FromStr for LandUnit {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mi" | "mi2" | "sq mi" | "imperial" => Ok(LandUnit::Imperial),
            "km" | "km2" | "sq km" | "metric" => Ok(LandUnit::Metric),
            _ => Err(RegionError::UnknownUnit(s.to_string())),
        }
    }
}

/// Simple aggregate statistics for a loaded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub domestic: usize,
    pub foreign: usize,
}

impl DatasetStats {
    pub fn total(&self) -> usize {
        self.domestic + self.foreign
    }
}
