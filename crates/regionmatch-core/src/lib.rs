// crates/regionmatch-core/src/lib.rs
//! regionmatch-core
//! ================
//!
//! Compares US states with European countries. Pick a region and the crate
//! finds the regions of the other pool closest to it on land area,
//! population, GDP (total or per capita) or HDI, with relative deltas.
//!
//! ```
//! use regionmatch_core::prelude::*;
//!
//! let db = Dataset::bundled()?;
//! let mut state = AppState::new(db);
//! state.set_axis(Axis::Pop);
//! state.select_region("Ohio");
//!
//! let rows = state.match_results();
//! assert_eq!(rows.len(), 8);
//! assert!(rows.iter().any(|r| r.name == "Ohio"));
//! # Ok::<(), regionmatch_core::RegionError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod autocomplete;
pub mod dataset;
pub mod error;
pub mod format;
pub mod loader;
pub mod matcher;
pub mod memo;
pub mod model;
pub mod prelude;
#[doc(hidden)]
pub mod raw;
pub mod settings;
pub mod state;
pub mod text;
pub mod traits;
pub mod view;

// Re-exports
pub use crate::autocomplete::Autocomplete;
pub use crate::dataset::Dataset;
pub use crate::error::{RegionError, Result};
pub use crate::model::{
    Axis, DatasetStats, Field, GdpMode, LandUnit, Region, RegionGroup, RegionId,
};
pub use crate::settings::Settings;
pub use crate::state::AppState;
pub use crate::view::{Comparison, ComparisonRow, SelectedSummary, StatCell};
