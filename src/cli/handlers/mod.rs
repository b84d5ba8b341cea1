mod mutate;
mod query;
mod schema;
mod serve;
mod utils;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::PaddockConfig;
use crate::graphql::{PaddockSchema, build_schema};
use crate::storage::{MemoryStore, SharedStore};
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: PaddockConfig,
}

impl CommandContext {
    pub fn new(config: PaddockConfig) -> Self {
        Self { config }
    }

    /// Drop the built-in drivers and races from the store this context builds.
    pub fn without_seed(mut self, no_seed: bool) -> Self {
        if no_seed {
            self.config.store.seed = false;
        }
        self
    }

    pub fn store(&self) -> SharedStore {
        Arc::new(MemoryStore::new(&self.config.store))
    }

    pub fn schema(&self) -> PaddockSchema {
        build_schema(self.store(), &self.config.server)
    }
}
