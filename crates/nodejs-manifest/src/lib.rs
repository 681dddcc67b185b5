//! Node.js project manifest reader
//!
//! Parses a project's `package.json` into a typed, read-only [`Manifest`]
//! so build tooling can inspect declared dependencies, scripts, the
//! entry point, engine constraints and the pinned package manager without
//! running any project code.
//!
//! The file is read through a [`FileAccess`] implementation, either
//! [`DirFs`] for a real directory or [`MemoryFs`] for an in-memory tree.

pub mod config;
pub mod errors;
pub mod fs;
pub mod loader;
pub mod read_only;
pub mod types;

pub use config::{LoaderConfig, MANIFEST_FILE_NAME};
pub use errors::ManifestError;
pub use fs::{DirFs, FileAccess, MemoryFs};
pub use loader::{load, load_with_config};
pub use read_only::ReadOnlyMap;
pub use types::{Engines, Manifest};
