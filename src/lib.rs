//! # Paddock - a GraphQL API for drivers and races
//!
//! Paddock keeps two small collections in memory, drivers and the races
//! they won, and exposes them through a GraphQL endpoint with an optional
//! GraphiQL console.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on port 5000 with the built-in drivers and races
//! paddock serve
//!
//! # Query without starting a server
//! paddock query '{ races { location driver { name } } }'
//!
//! # Print the schema
//! paddock schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: `.paddock.toml` loading and defaults
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (`Driver`, `Race`)
//! - [`storage`]: The `Store` repository trait and its in-memory implementation

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.paddock.toml` discovery and defaults.
pub mod config;

/// Error types and result aliases.
///
/// Defines `PaddockError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and the axum server.
pub mod graphql;

/// Logging setup (stderr and optional JSON file).
pub mod logging;

/// Data models for drivers and races.
pub mod model;

/// Storage layer.
///
/// Resolvers reach the collections only through the `Store` trait.
pub mod storage;
