//! Error types for gnuplot discovery.
//!
//! Every failure in this crate is fatal to discovery: a caller that needs a
//! working gnuplot cannot proceed without one, so there is no retry and no
//! degraded mode. Each variant carries a `fix_suggestion()` with an
//! actionable remediation for the user.

use thiserror::Error;

/// Errors that can occur while locating, probing, or verifying gnuplot.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error types
/// in future versions.
///
/// # Example
///
/// ```rust
/// use gnuplot_discovery::DiscoveryError;
///
/// fn handle_error(error: DiscoveryError) {
///     eprintln!("gnuplot discovery failed: {}", error);
///     eprintln!("To fix: {}", error.fix_suggestion());
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DiscoveryError {
    /// No usable gnuplot executable was found.
    ///
    /// Raised when neither the `GNUPLOT` override variable nor a scan of the
    /// search path produced a candidate, or when the final candidate is not
    /// an executable file.
    #[error("gnuplot executable not found: {reason}")]
    NotFound {
        /// What the locator was missing (no PATH, candidate not executable, ...).
        reason: String,
    },

    /// The probe subprocess could not be created or driven.
    #[error("failed to run gnuplot probe: {source}")]
    Spawn {
        /// Underlying I/O error from process or temp-file handling.
        #[source]
        source: std::io::Error,
    },

    /// The probed executable did not identify itself as gnuplot.
    ///
    /// The transcript of a genuine gnuplot contains the spaced-out banner
    /// `G N U P L O T`; anything else is treated as the wrong tool.
    #[error("executable did not identify itself as gnuplot")]
    Identity,

    /// The transcript did not contain a recognizable version line.
    #[error("unrecognized gnuplot version output: {detail}")]
    Parse {
        /// What failed to parse.
        detail: String,
    },

    /// The discovered gnuplot is older than a caller-required minimum.
    ///
    /// Raised only by [`GnuplotInfo::require_version`], never during
    /// discovery itself.
    ///
    /// [`GnuplotInfo::require_version`]: crate::GnuplotInfo::require_version
    #[error("gnuplot {found} is older than required version {required}")]
    VersionTooLow {
        /// The version that was discovered.
        found: String,
        /// The minimum the caller asked for.
        required: String,
    },
}

impl DiscoveryError {
    /// Get an actionable suggestion for fixing this error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gnuplot_discovery::DiscoveryError;
    ///
    /// let error = DiscoveryError::Identity;
    /// assert!(error.fix_suggestion().contains("GNUPLOT"));
    /// ```
    pub fn fix_suggestion(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => {
                "Install gnuplot, or set the GNUPLOT environment variable to the executable path"
            }
            Self::Spawn { .. } => {
                "Check that the gnuplot executable is runnable by the current user"
            }
            Self::Identity => {
                "The GNUPLOT variable or PATH points at a different program; point it at a real gnuplot"
            }
            Self::Parse { .. } => {
                "The installed gnuplot produced unexpected output; reinstall or upgrade it"
            }
            Self::VersionTooLow { .. } => "Upgrade gnuplot to a newer version",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = DiscoveryError::NotFound {
            reason: "no PATH variable and no GNUPLOT override".to_string(),
        };
        assert!(error.to_string().contains("not found"));
        assert!(error.to_string().contains("no PATH variable"));
    }

    #[test]
    fn test_spawn_display_includes_source() {
        let error = DiscoveryError::Spawn {
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(error.to_string().contains("probe"));
        assert!(error.to_string().contains("no such file"));
    }

    #[test]
    fn test_version_too_low_display() {
        let error = DiscoveryError::VersionTooLow {
            found: "4.6".to_string(),
            required: "5.5".to_string(),
        };
        assert!(error.to_string().contains("4.6"));
        assert!(error.to_string().contains("5.5"));
    }

    #[test]
    fn test_all_variants_have_fix() {
        let errors = vec![
            DiscoveryError::NotFound {
                reason: "x".to_string(),
            },
            DiscoveryError::Spawn {
                source: std::io::Error::other("boom"),
            },
            DiscoveryError::Identity,
            DiscoveryError::Parse {
                detail: "x".to_string(),
            },
            DiscoveryError::VersionTooLow {
                found: "4.6".to_string(),
                required: "5.5".to_string(),
            },
        ];

        for error in errors {
            assert!(
                !error.fix_suggestion().is_empty(),
                "fix_suggestion() should return non-empty string for {:?}",
                error
            );
        }
    }
}
