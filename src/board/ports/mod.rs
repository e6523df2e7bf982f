//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod regions;
pub mod store;

pub use regions::{COLUMN_STATUS_ATTRIBUTE, CardRegion, ColumnRegion, RegionProvider};
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
