//! Filesystem primitives for git-hooks
//!
//! Provides normalized path handling, plain file I/O, and format-agnostic
//! config file loading.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigLoader;
pub use error::{Error, Result};
pub use path::NormalizedPath;
