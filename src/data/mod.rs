//! Built-in input data.
//!
//! - the reference deployment's six fantasy rosters (`rosters`)

pub mod rosters;

pub use rosters::default_rosters;
