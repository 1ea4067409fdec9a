//! Discovery orchestration.

use crate::discovery::{locate, parse_transcript, run_probe};
use crate::{DiscoveryError, GnuplotInfo};
use std::path::PathBuf;
use tracing::debug;

/// Discover and verify the gnuplot installation.
///
/// This is the full procedure: locate a candidate executable, probe it as a
/// subprocess, and parse the transcript into metadata.
///
/// # Discovery Process
///
/// 1. Take the `GNUPLOT` environment variable as the candidate if set,
///    otherwise scan `PATH` entries in order for an executable `gnuplot`
/// 2. Run the candidate with version and terminal-listing commands on
///    stdin, capturing combined output, bounded by a 2-second timeout
/// 3. Verify the `G N U P L O T` identity banner and extract version,
///    patch level, and the supported terminal list
///
/// Discovery is meant to run once; the returned [`GnuplotInfo`] is an
/// immutable value callers keep for the life of the process.
///
/// # Errors
///
/// All failures are fatal to discovery, with no retry:
/// - [`DiscoveryError::NotFound`] — no candidate, or candidate not executable
/// - [`DiscoveryError::Spawn`] — the probe subprocess could not be run
/// - [`DiscoveryError::Identity`] — the candidate is not a real gnuplot
/// - [`DiscoveryError::Parse`] — the version output was unrecognizable
///
/// # Example
///
/// ```rust,no_run
/// use gnuplot_discovery::discover;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     match discover().await {
///         Ok(info) => println!("gnuplot {} at {:?}", info.version, info.path),
///         Err(e) => {
///             eprintln!("{} ({})", e, e.fix_suggestion());
///             std::process::exit(1);
///         }
///     }
/// }
/// ```
pub async fn discover() -> Result<GnuplotInfo, DiscoveryError> {
    let path = locate()?;
    discover_at(path).await
}

/// Probe and verify a specific executable path.
///
/// Skips the locator stage; useful when the caller already knows where the
/// executable should be. The path is still subject to the full probe and
/// parse verification.
///
/// # Errors
///
/// Same as [`discover`], minus [`DiscoveryError::NotFound`] (a missing file
/// surfaces as a [`DiscoveryError::Spawn`] here).
pub async fn discover_at(path: impl Into<PathBuf>) -> Result<GnuplotInfo, DiscoveryError> {
    let path = path.into();
    debug!(path = %path.display(), "probing gnuplot candidate");

    let transcript = run_probe(&path).await?;
    let parsed = parse_transcript(&transcript)?;

    debug!(
        version = %parsed.version,
        patch_level = ?parsed.patch_level,
        terminals = parsed.terminals.len(),
        "gnuplot verified"
    );

    Ok(GnuplotInfo {
        path,
        version: parsed.version,
        patch_level: parsed.patch_level,
        terminals: parsed.terminals,
    })
}
