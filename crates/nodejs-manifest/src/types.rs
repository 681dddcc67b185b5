//! Typed model of a Node.js `package.json`
//!
//! Only the keys the build pipeline reads are modelled; any other key in the
//! document is ignored during decoding. Every recognised key is optional and
//! an explicit `null` is treated the same as an absent key.

use serde::{Deserialize, Deserializer};
use std::sync::Arc;

use crate::read_only::ReadOnlyMap;

// =============================================================================
// MANIFEST
// =============================================================================

/// Parsed `package.json`. Immutable once constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default, deserialize_with = "null_as_default")]
    dependencies: ReadOnlyMap,
    #[serde(default, deserialize_with = "null_as_default")]
    dev_dependencies: ReadOnlyMap,
    #[serde(default, deserialize_with = "null_as_default")]
    scripts: ReadOnlyMap,
    #[serde(default, deserialize_with = "null_as_default")]
    engines: Engines,
    #[serde(default, deserialize_with = "null_as_default")]
    main: Arc<str>,
    /// Kept as an `Option` so "not declared" and "declared empty" stay distinct
    #[serde(default)]
    package_manager: Option<Arc<str>>,
}

impl Manifest {
    /// Empty manifest, usable as a placeholder when a project has none.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runtime dependencies (`dependencies`).
    pub fn dependencies(&self) -> &ReadOnlyMap {
        &self.dependencies
    }

    /// Development dependencies (`devDependencies`).
    pub fn dev_dependencies(&self) -> &ReadOnlyMap {
        &self.dev_dependencies
    }

    pub fn scripts(&self) -> &ReadOnlyMap {
        &self.scripts
    }

    pub fn engines(&self) -> &Engines {
        &self.engines
    }

    /// Entry-point module path, empty when not declared.
    pub fn main(&self) -> &str {
        &self.main
    }

    /// Pinned package manager such as `yarn@1.2.3`, verbatim.
    pub fn package_manager(&self) -> Option<&str> {
        self.package_manager.as_deref()
    }

    /// Version specifier for `name`, checking `dependencies` before
    /// `devDependencies`.
    pub fn find_dependency(&self, name: &str) -> Option<&str> {
        self.dependencies
            .get(name)
            .or_else(|| self.dev_dependencies.get(name))
    }

    #[inline]
    pub fn has_dependency(&self, name: &str) -> bool {
        self.find_dependency(name).is_some()
    }

    /// Shell command for script `name`, if declared.
    #[inline]
    pub fn script(&self, name: &str) -> Option<&str> {
        self.scripts.get(name)
    }
}

// =============================================================================
// ENGINES
// =============================================================================

/// The `engines` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Engines {
    #[serde(default, deserialize_with = "null_as_default")]
    node: Arc<str>,
}

impl Engines {
    /// Required Node.js version range, empty when not declared.
    pub fn node(&self) -> &str {
        &self.node
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
