//! Planboard: the task board of an academic planning dashboard.
//!
//! This crate implements the board's drag-and-reclassify interaction: moving
//! tasks between workflow columns with pointer or touch input, hit-testing
//! drops against rendered regions, and holding completions for confirmation
//! so a grade can be captured when a task is marked done.
//!
//! # Architecture
//!
//! Planboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`board`]: Drag session, hit-testing, input adapters and completion gate
//! - [`config`]: Interaction tunables

pub mod board;
pub mod config;
