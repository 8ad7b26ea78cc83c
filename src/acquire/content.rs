use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

use super::DecodeError;

/// Opaque reference to an image the picker handed back
///
/// On the desktop this is a local file: either a plain path or a
/// `file://` URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentRef {
    path: PathBuf,
}

impl ContentRef {
    /// Resolve a reference string into a local file reference
    pub fn parse(reference: &str) -> Result<Self, DecodeError> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(DecodeError::Unresolvable {
                reference: String::new(),
                reason: "empty reference".into(),
            });
        }

        match Url::parse(reference) {
            // Single-letter schemes are Windows drive letters, not URIs
            Ok(url) if url.scheme().len() > 1 => {
                if url.scheme() != "file" {
                    return Err(DecodeError::Unresolvable {
                        reference: reference.to_string(),
                        reason: format!("unsupported scheme '{}'", url.scheme()),
                    });
                }
                let path = url.to_file_path().map_err(|()| DecodeError::Unresolvable {
                    reference: reference.to_string(),
                    reason: "not a local file".into(),
                })?;
                Ok(Self { path })
            }
            _ => Ok(Self::from_path(reference)),
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lowercased file extension, if any
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
    }
}

impl fmt::Display for ContentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
