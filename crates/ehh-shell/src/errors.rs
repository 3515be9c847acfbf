//! Error types for the site shell.
use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Errors returned from main are shown through Debug, redirect it to the thiserror message.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

#[derive(Error)]
pub enum ShellError {
    #[error("Failed to serialize structured data")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to create output directory: {path}")]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write page: {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl_debug_for_error!(ShellError);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_matches_display() {
        let error = ShellError::WriteFailed {
            path: PathBuf::from("dist/index.html"),
            source: std::io::Error::other("disk full"),
        };
        assert_eq!(format!("{:?}", error), "Failed to write page: dist/index.html");
        assert_eq!(format!("{:?}", error), error.to_string());
    }
}
