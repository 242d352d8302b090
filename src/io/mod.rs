//! File input/output: CSV ingest and totals export.

pub mod export;
pub mod ingest;
