//! regionmatch-cli
//! ===============
//!
//! Command-line interface for the `regionmatch-core` comparison engine.
//!
//! The binary (`regionmatch`) is the primary deliverable. The library target
//! holds the text rendering and the interactive session so they can be tested
//! without spawning the binary.
//!
//! Basic usage:
//!
//! ```text
//! regionmatch --help
//! regionmatch stats
//! regionmatch compare texas --by pop
//! regionmatch compare switzerland --by gdp --per-capita --count 5
//! regionmatch interactive
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod render;
pub mod session;
