//! regionmatch prelude: bring common types and traits into scope for demos.

pub use crate::autocomplete::{Autocomplete, MAX_SUGGESTIONS};
pub use crate::dataset::Dataset;
pub use crate::error::{RegionError, Result};
pub use crate::format::{format_relative_delta, format_stat};
pub use crate::matcher::{nearest, DEFAULT_CANDIDATES};
pub use crate::model::{Axis, Field, GdpMode, LandUnit, Region, RegionGroup, RegionId};
pub use crate::settings::Settings;
pub use crate::state::AppState;
pub use crate::traits::NameMatch;
pub use crate::view::{Comparison, SelectedSummary};
