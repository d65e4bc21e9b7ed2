// crates/regionmatch-core/src/raw.rs
//! Raw input structures as they appear in the source JSON.
//!
//! These mirror the external layout and are converted into
//! [`Dataset`](crate::Dataset) by [`Dataset::from_raw`](crate::Dataset::from_raw).
use crate::model::LandUnit;
use serde::{Deserialize, Serialize};

/// One source row: `[name, gdp (millions USD), land, population, hdi]`.
///
/// `land` is in the unit declared for the row's pool in [`RawUnits`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRow(pub String, pub f64, pub f64, pub f64, pub f64);

/// Land units of each pool in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawUnits {
    #[serde(default = "source_unit")]
    pub us: LandUnit,
    #[serde(default = "source_unit")]
    pub eu: LandUnit,
}

fn source_unit() -> LandUnit {
    LandUnit::Metric
}

impl Default for RawUnits {
    fn default() -> Self {
        RawUnits {
            us: source_unit(),
            eu: source_unit(),
        }
    }
}

/// The whole source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDataset {
    #[serde(default)]
    pub units: RawUnits,
    #[serde(default)]
    pub us: Vec<RawRow>,
    #[serde(default)]
    pub eu: Vec<RawRow>,
}
