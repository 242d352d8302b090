//! Terminal report formatting for the non-interactive subcommands.

mod format;

pub use format::{format_region_report, format_regions};
