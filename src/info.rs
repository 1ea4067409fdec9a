//! Result types describing a discovered gnuplot installation.

use crate::DiscoveryError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// One output terminal supported by the discovered gnuplot.
///
/// A terminal in gnuplot's vocabulary is an output driver (a file format or
/// display device such as `png` or `x11`), not a user console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terminal {
    /// The terminal identifier as gnuplot reports it (e.g., "png").
    pub name: String,

    /// One-line description from gnuplot's terminal listing.
    pub description: String,
}

/// Metadata for a discovered and verified gnuplot installation.
///
/// Returned by [`discover`] and [`discover_at`]; immutable after discovery.
/// Callers hold and pass this value explicitly rather than reading hidden
/// process-wide state, which keeps concurrent readers lock-free and makes
/// testing straightforward.
///
/// [`discover`]: crate::discover
/// [`discover_at`]: crate::discover_at
///
/// # Example
///
/// ```rust,no_run
/// use gnuplot_discovery::discover;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let info = discover().await.expect("gnuplot is required");
///     println!("gnuplot {} at {:?}", info.version, info.path);
///     if info.supports_terminal("png") {
///         println!("PNG output available");
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GnuplotInfo {
    /// Path to the verified executable.
    pub path: PathBuf,

    /// Reported version as the exact `major.minor` string (e.g., "5.2").
    ///
    /// Kept as a string, not a float, to preserve gnuplot's formatting.
    pub version: String,

    /// Reported patch level, when the build prints one (e.g., "4").
    pub patch_level: Option<String>,

    /// Supported terminals in the order gnuplot listed them.
    ///
    /// Duplicate names are retained here; see [`terminal_map`] for the
    /// name-keyed view where later duplicates overwrite earlier ones.
    ///
    /// [`terminal_map`]: GnuplotInfo::terminal_map
    pub terminals: Vec<Terminal>,
}

impl GnuplotInfo {
    /// Name-to-description map over the discovered terminals.
    ///
    /// When gnuplot lists a terminal name more than once, the later entry
    /// wins here while [`terminals`](GnuplotInfo::terminals) keeps every
    /// occurrence in order.
    pub fn terminal_map(&self) -> HashMap<String, String> {
        self.terminals
            .iter()
            .map(|t| (t.name.clone(), t.description.clone()))
            .collect()
    }

    /// Check whether a terminal with the given name was reported.
    pub fn supports_terminal(&self, name: &str) -> bool {
        self.terminals.iter().any(|t| t.name == name)
    }

    /// Fail if the discovered version is below a required minimum.
    ///
    /// Comparison is numeric on the `(major, minor)` pair, so "5.0" meets a
    /// "4.6" requirement even though "5.0" < "4.6" lexically. A caller that
    /// cannot run without the minimum should treat the error as fatal and
    /// surface [`DiscoveryError::fix_suggestion`] to the user.
    ///
    /// # Errors
    ///
    /// - [`DiscoveryError::VersionTooLow`] when the requirement is not met
    /// - [`DiscoveryError::Parse`] when `required` is not a `major.minor`
    ///   string
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use gnuplot_discovery::discover;
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() {
    ///     let info = discover().await.unwrap();
    ///     if let Err(e) = info.require_version("4.6") {
    ///         eprintln!("{} ({})", e, e.fix_suggestion());
    ///         std::process::exit(1);
    ///     }
    /// }
    /// ```
    pub fn require_version(&self, required: &str) -> Result<(), DiscoveryError> {
        let need = parse_major_minor(required)?;
        let have = parse_major_minor(&self.version)?;

        if have < need {
            return Err(DiscoveryError::VersionTooLow {
                found: self.version.clone(),
                required: required.to_string(),
            });
        }
        Ok(())
    }
}

/// Split a `major.minor` string into a numerically comparable pair.
fn parse_major_minor(version: &str) -> Result<(u32, u32), DiscoveryError> {
    let parse = |s: &str| {
        s.parse::<u32>().map_err(|_| DiscoveryError::Parse {
            detail: format!("not a major.minor version string: {version:?}"),
        })
    };

    match version.trim().split_once('.') {
        Some((major, minor)) => Ok((parse(major)?, parse(minor)?)),
        None => Err(DiscoveryError::Parse {
            detail: format!("not a major.minor version string: {version:?}"),
        }),
    }
}
