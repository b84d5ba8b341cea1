//! Storage layer for paddock.
//!
//! - [`Store`]: repository interface used by the GraphQL resolvers
//! - [`MemoryStore`]: the in-memory implementation, optionally seeded with
//!   the built-in drivers and races

mod memory;
mod repository;
pub mod seed;

pub use memory::MemoryStore;
pub use repository::Store;

use std::sync::Arc;

/// Store handle shared between the schema and its resolvers.
pub type SharedStore = Arc<dyn Store>;
