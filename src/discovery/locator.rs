//! Executable location via override variable or search-path scan.

use crate::DiscoveryError;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// The executable name to look for on the search path.
const EXECUTABLE_NAME: &str = "gnuplot";

/// Environment variable holding an explicit executable path override.
const OVERRIDE_ENV: &str = "GNUPLOT";

/// Locate the gnuplot executable from the process environment.
///
/// The `GNUPLOT` variable, when set, names the candidate unconditionally;
/// otherwise the `PATH` entries are scanned in order and the first one
/// containing an executable `gnuplot` wins. Either way the final candidate
/// must be an executable file.
///
/// # Errors
///
/// `NotFound` if no `PATH` variable exists and no override is given, if the
/// scan finds nothing, or if the final candidate is not an executable file.
pub(crate) fn locate() -> Result<PathBuf, DiscoveryError> {
    locate_in(
        std::env::var_os(OVERRIDE_ENV).as_deref(),
        std::env::var_os("PATH").as_deref(),
    )
}

/// Locate with both environment inputs injected, for testability.
pub(crate) fn locate_in(
    override_path: Option<&OsStr>,
    path_var: Option<&OsStr>,
) -> Result<PathBuf, DiscoveryError> {
    let candidate = match (override_path, path_var) {
        // Override wins unconditionally at the candidate stage; it is only
        // checked for executability below, like any other candidate.
        (Some(explicit), _) => PathBuf::from(explicit),
        (None, Some(paths)) => {
            // which_in scans entries in order and skips non-executable files,
            // matching first-hit-wins semantics.
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
            which::which_in(EXECUTABLE_NAME, Some(paths), cwd).map_err(|_| {
                DiscoveryError::NotFound {
                    reason: format!("no executable {EXECUTABLE_NAME} on the search path"),
                }
            })?
        }
        (None, None) => {
            return Err(DiscoveryError::NotFound {
                reason: format!("no PATH variable and no {OVERRIDE_ENV} override set"),
            })
        }
    };

    if !is_executable_file(&candidate) {
        return Err(DiscoveryError::NotFound {
            reason: format!("{} is not an executable file", candidate.display()),
        });
    }

    Ok(candidate)
}

#[cfg(unix)]
fn is_executable_file(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable_file(path: &Path) -> bool {
    path.is_file()
}
