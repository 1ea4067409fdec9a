//! Integration tests for gnuplot discovery.
//!
//! These tests probe fake gnuplot executables (shell scripts that replay
//! realistic transcripts), so they run everywhere without a real gnuplot
//! installed.

use gnuplot_discovery::{discover_at, DiscoveryError};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

fn write_fake_gnuplot(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("gnuplot");
    fs::write(&path, format!("#!/bin/sh\n{body}")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// A script replaying what `show version` and `set terminal` print on a
/// typical 5.2 build.
fn realistic_script() -> &'static str {
    r#"cat <<'EOF'

	G N U P L O T
	Version 5.2 patchlevel 4    last modified 2017-11-01

	Copyright (C) 1986-1993, 1998, 2004, 2007-2017
	Thomas Williams, Colin Kelley and many others

Available terminal types:
  canvas  HTML Canvas object
  png PNG file output
  svg  W3C Scalable Vector Graphics
  x11 X11 window output
EOF
"#
}

#[tokio::test]
async fn test_full_discovery_of_fake_gnuplot() {
    let dir = tempfile::tempdir().unwrap();
    let exe = write_fake_gnuplot(dir.path(), realistic_script());

    let info = discover_at(&exe).await.unwrap();

    assert_eq!(info.path, exe);
    assert_eq!(info.version, "5.2");
    assert_eq!(info.patch_level.as_deref(), Some("4"));

    let names: Vec<&str> = info.terminals.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["canvas", "png", "svg", "x11"]);

    assert!(info.supports_terminal("png"));
    assert!(!info.supports_terminal("pdf"));

    let map = info.terminal_map();
    assert_eq!(map.get("png").map(String::as_str), Some("PNG file output"));
}

#[tokio::test]
async fn test_version_gate_against_discovered_version() {
    let dir = tempfile::tempdir().unwrap();
    let exe = write_fake_gnuplot(dir.path(), realistic_script());

    let info = discover_at(&exe).await.unwrap();

    // Discovered 5.2: a 4.6 minimum passes, a 5.5 minimum does not
    assert!(info.require_version("4.6").is_ok());
    let result = info.require_version("5.5");
    assert!(matches!(
        result,
        Err(DiscoveryError::VersionTooLow { found, required })
            if found == "5.2" && required == "5.5"
    ));
}

#[tokio::test]
async fn test_discovery_without_patchlevel() {
    let dir = tempfile::tempdir().unwrap();
    let exe = write_fake_gnuplot(
        dir.path(),
        r#"cat <<'EOF'
	G N U P L O T
	Version 4.6    last modified September 2012

Available terminal types:
  png PNG file output
EOF
"#,
    );

    let info = discover_at(&exe).await.unwrap();
    assert_eq!(info.version, "4.6");
    assert_eq!(info.patch_level, None);
}

#[tokio::test]
async fn test_wrong_tool_fails_identity_check() {
    let dir = tempfile::tempdir().unwrap();
    let exe = write_fake_gnuplot(
        dir.path(),
        "echo 'gnuplot 5.2 wrapper script'\necho 'Version 5.2 patchlevel 4'\n",
    );

    // Version line alone is not enough without the spaced-out banner
    let result = discover_at(&exe).await;
    assert!(matches!(result, Err(DiscoveryError::Identity)));
}

#[tokio::test]
async fn test_banner_without_version_fails_parse() {
    let dir = tempfile::tempdir().unwrap();
    let exe = write_fake_gnuplot(dir.path(), "echo 'G N U P L O T'\necho 'development build'\n");

    let result = discover_at(&exe).await;
    assert!(matches!(result, Err(DiscoveryError::Parse { .. })));
}

#[tokio::test]
async fn test_hung_executable_is_bounded_and_partial_transcript_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let exe = write_fake_gnuplot(
        dir.path(),
        &format!("{}sleep 30\n", realistic_script()),
    );

    let start = std::time::Instant::now();
    let info = discover_at(&exe).await.unwrap();
    let elapsed = start.elapsed();

    // Output emitted before the hang is still usable
    assert_eq!(info.version, "5.2");
    assert!(
        elapsed.as_secs() < 5,
        "discovery was not bounded: {elapsed:?}"
    );
}

#[tokio::test]
async fn test_stderr_only_transcript_is_captured() {
    let dir = tempfile::tempdir().unwrap();
    // gnuplot writes the terminal listing to stderr in interactive use
    let exe = write_fake_gnuplot(
        dir.path(),
        r#"cat >&2 <<'EOF'
	G N U P L O T
	Version 5.2 patchlevel 4
Available terminal types:
  png PNG file output
EOF
"#,
    );

    let info = discover_at(&exe).await.unwrap();
    assert_eq!(info.version, "5.2");
    assert_eq!(info.terminals.len(), 1);
}
