//! Shared domain types.

mod types;

pub use types::{CategoryTotal, DashConfig, RegionSummary, SaleRecord, SalesTable};
