// crates/regionmatch-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading, validating or exporting a dataset, or while
/// parsing user-facing enum values.
#[derive(Debug, Error)]
pub enum RegionError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("unknown axis '{0}' (expected one of: land, pop, gdp, hdi)")]
    UnknownAxis(String),

    #[error("unknown unit '{0}'")]
    UnknownUnit(String),
}

pub type Result<T> = std::result::Result<T, RegionError>;
