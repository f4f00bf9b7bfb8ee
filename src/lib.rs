//! `ipl-tally` library crate.
//!
//! The binary (`tally`) is a thin wrapper around this library so that:
//!
//! - scoring and report layout are testable without a browser
//! - the live session can be swapped for a saved page or an in-memory fake

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
pub mod score;
pub mod session;
