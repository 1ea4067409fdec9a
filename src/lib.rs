//! # gnuplot-discovery
//!
//! Discovery and verification of a gnuplot installation.
//!
//! This crate locates the gnuplot executable (via the `GNUPLOT` override
//! variable or a `PATH` scan), runs it as a bounded subprocess to confirm it
//! is genuine, and parses its self-reported version, patch level, and
//! supported output terminals into an immutable [`GnuplotInfo`] value.
//!
//! ## Features
//!
//! - `discover()` async function running the full locate → probe → parse
//!   procedure
//! - `discover_at()` for probing an explicitly chosen executable path
//! - `GnuplotInfo` with the ordered terminal list, a name-keyed terminal
//!   map, and a `require_version()` gate for callers with a minimum version
//! - `DiscoveryError` with an actionable `fix_suggestion()` per failure
//!
//! ## Example
//!
//! ```rust,no_run
//! use gnuplot_discovery::discover;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let info = match discover().await {
//!         Ok(info) => info,
//!         Err(e) => {
//!             eprintln!("{} ({})", e, e.fix_suggestion());
//!             std::process::exit(1);
//!         }
//!     };
//!
//!     println!("gnuplot {} at {:?}", info.version, info.path);
//!     if let Err(e) = info.require_version("4.6") {
//!         eprintln!("{} ({})", e, e.fix_suggestion());
//!         std::process::exit(1);
//!     }
//! }
//! ```

mod discover;
mod discovery;
mod error;
mod info;

pub use discover::{discover, discover_at};
pub use error::DiscoveryError;
pub use info::{GnuplotInfo, Terminal};
