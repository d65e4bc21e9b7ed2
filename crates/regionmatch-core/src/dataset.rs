// crates/regionmatch-core/src/dataset.rs
use crate::error::{RegionError, Result};
use crate::model::{DatasetStats, Region, RegionGroup, RegionId};
use crate::raw::{RawDataset, RawRow};
use crate::traits::NameMatch;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The source document compiled into the crate.
pub const BUNDLED_JSON: &str = include_str!("../data/regions.json");

// Parsed once per process.
static BUNDLED: OnceCell<Dataset> = OnceCell::new();

/// The two fixed pools of regions.
///
/// Land areas are normalized to square kilometres when the dataset is built,
/// so records of both pools compare directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    domestic: Vec<Region>,
    foreign: Vec<Region>,
}

impl Dataset {
    /// The dataset bundled with the crate.
    ///
    /// ```
    /// use regionmatch_core::{Dataset, RegionGroup};
    ///
    /// let db = Dataset::bundled().unwrap();
    /// let texas = db.find("texas").unwrap();
    /// assert_eq!(texas.group, RegionGroup::Domestic);
    /// ```
    pub fn bundled() -> Result<&'static Dataset> {
        BUNDLED.get_or_try_init(|| {
            let db = Self::from_json_str(BUNDLED_JSON)?;
            tracing::debug!(
                domestic = db.domestic.len(),
                foreign = db.foreign.len(),
                "loaded bundled dataset"
            );
            Ok(db)
        })
    }

    /// Parses a source document and builds the dataset.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawDataset = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// **Converter:** Raw -> Dataset.
    ///
    /// Normalizes land area to square kilometres, derives GDP per capita and
    /// validates every row.
    pub fn from_raw(raw: RawDataset) -> Result<Self> {
        let units = raw.units;
        let build = |group: RegionGroup, rows: Vec<RawRow>| -> Vec<Region> {
            let unit = match group {
                RegionGroup::Domestic => units.us,
                RegionGroup::Foreign => units.eu,
            };
            rows.into_iter()
                .map(|RawRow(name, gdp, land, pop, hdi)| {
                    Region::new(group, name.trim(), gdp, unit.to_km2(land), pop, hdi)
                })
                .collect()
        };

        let db = Dataset {
            domestic: build(RegionGroup::Domestic, raw.us),
            foreign: build(RegionGroup::Foreign, raw.eu),
        };
        db.validate()?;
        Ok(db)
    }

    /// Builds a dataset from already-normalized records.
    pub fn from_regions(regions: impl IntoIterator<Item = Region>) -> Result<Self> {
        let (domestic, foreign): (Vec<_>, Vec<_>) = regions
            .into_iter()
            .partition(|r| r.group == RegionGroup::Domestic);
        let db = Dataset { domestic, foreign };
        db.validate()?;
        Ok(db)
    }

    /// Checks the record invariants. Run on every construction path.
    pub(crate) fn validate(&self) -> Result<()> {
        for group in RegionGroup::ALL {
            let pool = self.pool(group);
            if pool.len() > u16::MAX as usize {
                return Err(RegionError::InvalidData(format!(
                    "{} pool has {} rows; at most {} are supported",
                    group.code(),
                    pool.len(),
                    u16::MAX
                )));
            }

            let mut seen = HashSet::new();
            for r in pool {
                if r.group != group {
                    return Err(RegionError::InvalidData(format!(
                        "{} is tagged {} but stored in the {} pool",
                        r.name,
                        r.group.code(),
                        group.code()
                    )));
                }
                if r.name.is_empty() {
                    return Err(RegionError::InvalidData(format!(
                        "empty region name in the {} pool",
                        group.code()
                    )));
                }
                if !seen.insert(r.name.as_str()) {
                    return Err(RegionError::InvalidData(format!(
                        "duplicate name '{}' in the {} pool",
                        r.name,
                        group.code()
                    )));
                }
                for (label, v) in [
                    ("gdp", r.gdp),
                    ("land", r.land_area),
                    ("population", r.population),
                ] {
                    if !v.is_finite() || v < 0.0 {
                        return Err(RegionError::InvalidData(format!(
                            "{}: {label} must be a finite non-negative number, got {v}",
                            r.name
                        )));
                    }
                }
                if !(0.0..=1.0).contains(&r.hdi) {
                    return Err(RegionError::InvalidData(format!(
                        "{}: hdi must be within [0, 1], got {}",
                        r.name, r.hdi
                    )));
                }
            }
        }
        Ok(())
    }

    /// All records of one pool, in source order.
    pub fn pool(&self, group: RegionGroup) -> &[Region] {
        match group {
            RegionGroup::Domestic => &self.domestic,
            RegionGroup::Foreign => &self.foreign,
        }
    }

    /// Ids of one pool, in source order.
    pub fn ids(&self, group: RegionGroup) -> impl Iterator<Item = RegionId> + '_ {
        (0..self.pool(group).len()).map(move |i| RegionId {
            group,
            index: i as u16,
        })
    }

    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.pool(id.group).get(id.index as usize)
    }

    /// Every record, domestic pool first.
    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.domestic.iter().chain(self.foreign.iter())
    }

    /// Looks a name up in one pool (accent- and case-insensitive).
    pub fn find_in(&self, group: RegionGroup, name: &str) -> Option<RegionId> {
        let name = name.trim();
        self.pool(group)
            .iter()
            .position(|r| r.is_named(name))
            .map(|i| RegionId {
                group,
                index: i as u16,
            })
    }

    /// Looks a name up in the domestic pool, then in the foreign pool.
    ///
    /// Names shared by both pools (e.g. `Georgia`) resolve to the domestic
    /// record; use [`Dataset::find_in`] to pick the other one.
    pub fn find_id(&self, name: &str) -> Option<RegionId> {
        RegionGroup::ALL
            .into_iter()
            .find_map(|group| self.find_in(group, name))
    }

    /// Like [`Dataset::find_id`] but returns the record.
    pub fn find(&self, name: &str) -> Option<&Region> {
        self.find_id(name).and_then(|id| self.get(id))
    }

    /// Combined, sorted, de-duplicated list of names across both pools.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.iter().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            domestic: self.domestic.len(),
            foreign: self.foreign.len(),
        }
    }
}
