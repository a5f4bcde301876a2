//! Project source abstraction for buildplan
//!
//! Provides a read-only view over a project tree, either on disk or in
//! memory, plus format-agnostic loading of project configuration.

pub mod config;
pub mod error;
pub mod path;
pub mod source;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use source::{DirSource, MemorySource, Source};
