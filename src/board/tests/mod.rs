//! Unit tests for the task board module.
//!
//! Tests are organised by component: domain values, the drag session,
//! hit-testing, each input adapter, the completion gate and the board.
