//! # zodgen-cli
//!
//! CLI library for generating TypeScript Zod schemas from IR documents.
//!
//! ## Architecture
//!
//! - [`config`] - Configuration management and TOML parsing
//! - [`loader`] - IR document loading and deserialization
//! - [`generator`] - Schema generation via the zodgen core compiler
//! - [`writer`] - File output and dry-run support
//! - [`watcher`] - File system watching for development mode
//! - [`error`] - Error types and handling

pub mod config;
pub mod error;
pub mod generator;
pub mod loader;
pub mod watcher;
pub mod writer;

// Re-export main types for convenience
pub use config::{Config, ConfigManager};
pub use error::{CliError, CliResult};
pub use generator::SchemaGenerator;
pub use loader::IrLoader;
pub use watcher::FileWatcher;
pub use writer::FileWriter;
