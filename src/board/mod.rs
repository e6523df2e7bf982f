//! Task board drag-and-reclassify engine.
//!
//! Lets a user move a task between the pending, in-progress and done
//! columns with pointer or touch dragging. Both input protocols drive one
//! drag session; drops are hit-tested against the rendered columns, and a
//! move into `done` is held until the user confirms it, optionally
//! attaching a grade. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Interaction services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
