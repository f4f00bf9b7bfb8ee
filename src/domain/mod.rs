//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - scraped player rows and the records built from them (`RenderedRow`, `PlayerRecord`)
//! - roster configuration (`TeamRoster`, `Rosters`)
//! - aggregation output (`TeamResult`) and run settings (`RunConfig`)

pub mod types;

pub use types::*;
