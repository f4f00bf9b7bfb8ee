//! Team scoring.
//!
//! - `lookup`: roster name → scraped player record (substring match)
//! - `aggregate`: roster → sorted records + top-11 total

pub mod aggregate;
pub mod lookup;

pub use aggregate::*;
pub use lookup::*;
