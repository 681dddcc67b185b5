//! Manifest loading - one read through a `FileAccess`, one JSON decode
//!
//! A missing or unreadable file is always an error; the loader never
//! substitutes an empty manifest. Callers that want "no manifest means empty
//! project" fall back to `Manifest::default()` themselves.

use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::config::LoaderConfig;
use crate::errors::ManifestError;
use crate::fs::FileAccess;
use crate::types::Manifest;

/// Load `package.json` from the root of `fs`.
pub fn load<F: FileAccess + ?Sized>(fs: &F) -> Result<Manifest, ManifestError> {
    load_with_config(fs, &LoaderConfig::default())
}

/// Load the manifest at the location described by `config`.
pub fn load_with_config<F: FileAccess + ?Sized>(
    fs: &F,
    config: &LoaderConfig,
) -> Result<Manifest, ManifestError> {
    let path = config.manifest_path();
    debug!("Reading manifest: {:?}", path);

    let bytes = fs
        .read(&path)
        .map_err(|source| ManifestError::from_read(path.clone(), source))?;

    let manifest = decode(&path, &bytes).inspect_err(|err| warn!("{}", err))?;

    debug!(
        "Manifest loaded: {} dependencies, {} devDependencies, {} scripts",
        manifest.dependencies().len(),
        manifest.dev_dependencies().len(),
        manifest.scripts().len()
    );

    Ok(manifest)
}

fn decode(path: &Path, bytes: &[u8]) -> Result<Manifest, ManifestError> {
    serde_json::from_slice(bytes).map_err(|source| {
        debug!("Manifest decode failed for {:?}: {}", path, source);
        ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })
}

impl Manifest {
    /// Decode a manifest from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ManifestError> {
        decode(Path::new(crate::config::MANIFEST_FILE_NAME), bytes)
    }
}

impl FromStr for Manifest {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFs;

    #[test]
    fn test_load_reads_package_json() {
        let fs = MemoryFs::new().with_file("package.json", r#"{"main": "server.js"}"#);
        assert!(load(&fs).is_ok_and(|m| m.main() == "server.js"));
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let result = load(&MemoryFs::new());
        assert!(result.is_err_and(|e| e.is_not_found()));
    }

    #[test]
    fn test_load_invalid_is_parse_error() {
        let fs = MemoryFs::new().with_file("package.json", "\\0");
        assert!(load(&fs).is_err_and(|e| e.is_parse() && !e.is_not_found()));
    }

    #[test]
    fn test_load_with_config_uses_root() {
        let fs = MemoryFs::new()
            .with_file("package.json", r#"{"main": "root.js"}"#)
            .with_file(
                Path::new("apps").join("web").join("package.json"),
                r#"{"main": "web.js"}"#,
            );
        let config = LoaderConfig {
            root: Some(Path::new("apps").join("web")),
            ..Default::default()
        };
        assert!(load_with_config(&fs, &config).is_ok_and(|m| m.main() == "web.js"));
    }

    #[test]
    fn test_parse_error_names_path() {
        let fs = MemoryFs::new().with_file("package.json", "{");
        let message = load(&fs).err().map(|e| e.to_string()).unwrap_or_default();
        assert!(message.starts_with("Failed to parse manifest package.json"));
    }

    #[test]
    fn test_from_str_and_from_slice() {
        let parsed: Result<Manifest, _> = r#"{"packageManager": "pnpm@9.1.0"}"#.parse();
        assert!(parsed.is_ok_and(|m| m.package_manager() == Some("pnpm@9.1.0")));
        assert!(Manifest::from_slice(b"\0").is_err_and(|e| e.is_parse()));
        assert!(Manifest::from_slice(b"").is_err());
    }
}
