//! Stylesheet configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a stylesheet, scale, or style config is invalid.
///
/// These errors only surface while building a stylesheet. Resolving an
/// attribute never fails: a resolver with nothing to say returns `None`.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Scale control points must be strictly increasing.
    #[error("scale domain must be strictly increasing, got {domain:?}")]
    UnorderedDomain { domain: [f64; 3] },

    /// A control point is NaN or infinite.
    #[error("scale control point '{value}' is not finite")]
    NonFinite { value: f64 },

    /// A derived table names a base table that was never registered.
    #[error("table '{name}' is derived from missing table '{base}'")]
    MissingSourceTable { name: String, base: String },

    /// An override block names a table that doesn't exist.
    #[error("unknown style table '{name}'")]
    UnknownTable { name: String },

    /// A label orientation override uses a code outside the compass set.
    #[error("unknown label orientation '{code}'")]
    UnknownOrientation { code: String },

    /// A palette entry is empty.
    #[error("color '{field}' must not be empty")]
    EmptyColor { field: String },

    /// The config file couldn't be read.
    #[error("failed to read style config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config document isn't valid YAML for [`StyleConfig`](crate::StyleConfig).
    #[error("invalid style config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unordered_domain_display() {
        let err = ConfigurationError::UnorderedDomain {
            domain: [1.0, 0.25, 4.0],
        };
        let msg = err.to_string();
        assert!(msg.contains("strictly increasing"));
        assert!(msg.contains("0.25"));
    }

    #[test]
    fn test_missing_source_table_display() {
        let err = ConfigurationError::MissingSourceTable {
            name: "multipoints_merged".to_string(),
            base: "stops_merged".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("multipoints_merged"));
        assert!(msg.contains("stops_merged"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let err = ConfigurationError::Io {
            path: PathBuf::from("/missing/styles.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/missing/styles.yaml"));
        assert!(err.source().is_some());
    }
}
