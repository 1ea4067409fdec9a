//! Transcript parsing: identity banner, version line, terminal listing.
//!
//! The accepted patterns are a contract with gnuplot's textual output
//! format. Any deviation fails with a clear error rather than a silent
//! misparse.

use crate::{DiscoveryError, Terminal};
use regex::Regex;

/// Banner a genuine gnuplot prints in its `show version` output.
const IDENTITY_BANNER: &str = "G N U P L O T";

/// Header line that precedes the terminal listing.
const TERMINALS_HEADER: &str = "Available terminal types:";

/// Pager prompt gnuplot emits when the listing is longer than one screen.
const PAGER_PROMPT: &str = "Press return for more";

/// Everything extracted from a probe transcript.
pub(crate) struct ParsedTranscript {
    pub version: String,
    pub patch_level: Option<String>,
    pub terminals: Vec<Terminal>,
}

/// Parse a probe transcript into version and terminal metadata.
///
/// # Errors
///
/// - `Identity` if the transcript lacks the `G N U P L O T` banner; nothing
///   else is extracted from an unverified transcript
/// - `Parse` if no `Version <major>.<minor>` line is present
pub(crate) fn parse_transcript(transcript: &str) -> Result<ParsedTranscript, DiscoveryError> {
    if !transcript.contains(IDENTITY_BANNER) {
        return Err(DiscoveryError::Identity);
    }

    let (version, patch_level) = parse_version(transcript)?;
    let terminals = parse_terminals(transcript);

    Ok(ParsedTranscript {
        version,
        patch_level,
        terminals,
    })
}

/// Extract `major.minor` and the optional patch level.
///
/// The version is kept as the exact matched string to preserve gnuplot's
/// formatting ("5.0" must not become "5").
fn parse_version(transcript: &str) -> Result<(String, Option<String>), DiscoveryError> {
    let re = Regex::new(r"Version\s+(\d+\.\d+)(?:\s+patchlevel\s+(\S+))?")
        .expect("Invalid regex pattern");

    let caps = re.captures(transcript).ok_or_else(|| DiscoveryError::Parse {
        detail: "no 'Version <major>.<minor>' line in transcript".to_string(),
    })?;

    let version = caps
        .get(1)
        .expect("Capture group 1 should exist")
        .as_str()
        .to_string();
    let patch_level = caps.get(2).map(|m| m.as_str().to_string());

    Ok((version, patch_level))
}

/// Line-scanner state for the terminal listing.
enum ScanState {
    SearchingHeader,
    ReadingTerms,
}

/// Collect terminal entries following the listing header.
///
/// Scanning starts after the header line, skips pager prompts, and stops at
/// the first line that is not a `<name> <description>` pair. Stopping is
/// end-of-list, not an error. Order is preserved and duplicate names are
/// kept.
fn parse_terminals(transcript: &str) -> Vec<Terminal> {
    let mut state = ScanState::SearchingHeader;
    let mut terminals = Vec::new();

    for line in transcript.lines() {
        match state {
            ScanState::SearchingHeader => {
                if line.trim_start().starts_with(TERMINALS_HEADER) {
                    state = ScanState::ReadingTerms;
                }
            }
            ScanState::ReadingTerms => {
                if line.contains(PAGER_PROMPT) {
                    continue;
                }
                match split_terminal_line(line) {
                    Some(terminal) => terminals.push(terminal),
                    None => break,
                }
            }
        }
    }

    terminals
}

/// Split one listing line into name and trimmed description.
fn split_terminal_line(line: &str) -> Option<Terminal> {
    let (name, rest) = line.trim().split_once(char::is_whitespace)?;
    let description = rest.trim();
    if description.is_empty() {
        return None;
    }

    Some(Terminal {
        name: name.to_string(),
        description: description.to_string(),
    })
}
