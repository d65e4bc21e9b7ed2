// crates/regionmatch-core/src/settings.rs
use crate::error::Result;
use crate::matcher::DEFAULT_CANDIDATES;
use crate::model::{Axis, GdpMode, LandUnit};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Initial values for a session. Every field is optional in the JSON form.
///
/// ```
/// use regionmatch_core::{Axis, Settings};
///
/// let s = Settings::from_json_str(r#"{ "axis": "gdp", "candidates": 5 }"#).unwrap();
/// assert_eq!(s.axis, Axis::Gdp);
/// assert_eq!(s.candidates, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub axis: Axis,
    pub gdp_mode: GdpMode,
    pub land_unit: LandUnit,
    /// How many candidates to show next to the selected region.
    pub candidates: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            axis: Axis::Land,
            gdp_mode: GdpMode::Absolute,
            land_unit: LandUnit::Imperial,
            candidates: DEFAULT_CANDIDATES,
        }
    }
}

impl Settings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(Settings::from_json_str("{}").unwrap(), Settings::default());
    }

    #[test]
    fn reads_every_field() {
        let s = Settings::from_json_str(
            r#"{"axis":"pop","gdp_mode":"per-capita","land_unit":"km2","candidates":3}"#,
        )
        .unwrap();
        assert_eq!(s.axis, Axis::Pop);
        assert_eq!(s.gdp_mode, GdpMode::PerCapita);
        assert_eq!(s.land_unit, LandUnit::Metric);
        assert_eq!(s.candidates, 3);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Settings::from_json_str(r#"{"colour":"red"}"#).is_err());
    }
}
