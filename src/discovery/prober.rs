//! Bounded subprocess probe with temp-file transcript capture.

use crate::DiscoveryError;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Command sequence sent to the probed executable's stdin.
///
/// `show version` prints the identity banner and version line, `set terminal`
/// lists the available terminal types, and the trailing blank lines flush any
/// interactive pager prompt.
const PROBE_COMMANDS: &[u8] = b"show version\nset terminal\n\n\n\n\n";

/// Upper bound on how long the probed process may run.
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Probe an executable and return the captured transcript.
///
/// Combined stdout/stderr is captured through a temporary file that exists
/// only for the duration of the call; it is removed on every path, including
/// when the caller's parsing fails afterwards. A probe that exceeds the
/// timeout has its process killed and reaped, and the transcript captured up
/// to that point is returned.
///
/// # Errors
///
/// `Spawn` if the process cannot be created or the transcript file cannot be
/// managed. A timeout is not an error; the transcript decides.
pub(crate) async fn run_probe(executable: &Path) -> Result<String, DiscoveryError> {
    run_probe_in(executable, &std::env::temp_dir()).await
}

/// Probe with the transcript file created inside `dir`, for testability.
pub(crate) async fn run_probe_in(
    executable: &Path,
    dir: &Path,
) -> Result<String, DiscoveryError> {
    // One file, two reopened handles: the child interleaves stdout and
    // stderr into the same transcript.
    let transcript = tempfile::NamedTempFile::new_in(dir).map_err(spawn_err)?;
    let stdout = transcript.reopen().map_err(spawn_err)?;
    let stderr = transcript.reopen().map_err(spawn_err)?;

    let mut child = Command::new(executable)
        .stdin(Stdio::piped())
        .stdout(Stdio::from(stdout))
        .stderr(Stdio::from(stderr))
        .spawn()
        .map_err(spawn_err)?;

    if let Some(mut stdin) = child.stdin.take() {
        // A child that exits before reading all commands breaks the pipe;
        // that is not a probe failure, the transcript decides.
        let _ = stdin.write_all(PROBE_COMMANDS).await;
        let _ = stdin.shutdown().await;
    }

    match timeout(PROBE_TIMEOUT, child.wait()).await {
        Ok(status) => {
            let status = status.map_err(spawn_err)?;
            debug!(%status, "probe process exited");
        }
        Err(_) => {
            // Hung or misbehaving executable: kill it, then always reap so
            // no zombie outlives the probe.
            warn!(
                executable = %executable.display(),
                timeout_secs = PROBE_TIMEOUT.as_secs(),
                "probe timed out, killing process"
            );
            let _ = child.start_kill();
            let _ = child.wait().await;
        }
    }

    std::fs::read_to_string(transcript.path()).map_err(spawn_err)
}

fn spawn_err(source: std::io::Error) -> DiscoveryError {
    DiscoveryError::Spawn { source }
}
