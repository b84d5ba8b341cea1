//! GraphQL schema, resolvers and HTTP transport for paddock.
//!
//! ## Usage
//!
//! ```bash
//! # Start the server (GraphiQL at http://localhost:5000/graphql)
//! paddock serve
//!
//! # Run a query against a fresh, seeded store
//! paddock query '{ driver(id: 2) { name raceWins { location } } }'
//!
//! # Run a mutation
//! paddock mutate 'addDriver(name: "Lando Norris") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `races`, `race`, `drivers`, `driver`
//! - **Mutations**: `addRace`, `addDriver`, `removeDriver`

mod schema;
mod server;
mod types;

pub use schema::{MutationRoot, PaddockSchema, QueryRoot, build_schema};
pub use server::{build_router, run_server};
pub use types::*;
