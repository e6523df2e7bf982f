//! Adapters implementing the board ports.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryTaskStore`]: thread-safe in-memory [`TaskStore`]
//! - [`regions::StaticRegions`]: [`RegionProvider`] over a fixed snapshot of
//!   rendered rectangles
//!
//! [`TaskStore`]: crate::board::ports::TaskStore
//! [`RegionProvider`]: crate::board::ports::RegionProvider

pub mod memory;
pub mod regions;
