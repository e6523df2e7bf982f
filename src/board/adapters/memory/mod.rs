//! In-memory adapters.
//!
//! Thread-safe storage for unit tests and offline use. Not suitable for
//! production persistence.

mod store;

pub use store::InMemoryTaskStore;
