use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a project manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Manifest not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read manifest {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse manifest {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse loader config: {0}")]
    Config(#[from] toml::de::Error),
}

impl ManifestError {
    /// Map a read failure onto `NotFound` or `Io` depending on its kind.
    pub(crate) fn from_read(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            ManifestError::NotFound { path }
        } else {
            ManifestError::Io { path, source }
        }
    }

    /// True when no manifest exists at the looked-up path.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ManifestError::NotFound { .. })
    }

    /// True when the manifest exists but is not a valid document.
    pub fn is_parse(&self) -> bool {
        matches!(self, ManifestError::Parse { .. })
    }
}
