//! `sales-dash` library crate.
//!
//! The binary (`sd`) is a thin wrapper around this library so that:
//!
//! - the aggregation and chart-building logic is testable without a terminal
//! - modules are reusable (e.g., future web front-end, scripting, notebooks)
//! - code stays easy to navigate as the project grows

pub mod agg;
pub mod app;
pub mod chart;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
pub mod tui;
