//! # oserror — semantic OS error kinds
//!
//! Classifies raw OS error codes into named kinds so callers can branch on
//! "connection refused" or "file not found" instead of errno values.
//!
//! ## Design
//!
//! Classification is structural. A failure belongs to a kind when its
//! numeric code is in that kind's code set, regardless of how the failure
//! was built. A plain `io::Error` from a socket write with `EPIPE` is a
//! `BrokenPipe` and, since `Connection` is the union of its four children,
//! also a `Connection`.
//!
//! - [`belongs_to`]: membership test, composite kinds included.
//! - [`most_specific_kind`]: deepest matching kind, leaf over composite.
//! - [`construct`]: build an [`OsError`] tagged with a kind.
//! - [`match_kind!`]: ordered structural match, like `except` clauses.
//!
//! ## Quick Start
//!
//! ```rust
//! use oserror::{match_kind, most_specific_kind, ErrorKind, FailureExt};
//!
//! fn on_write_error(err: &std::io::Error) -> &'static str {
//!     match_kind!(err, {
//!         BrokenPipe => "peer closed",
//!         Connection => "network trouble",
//!         Interrupted => "retry",
//!         _ => "generic failure",
//!     })
//! }
//!
//! let err = std::io::Error::from_raw_os_error(libc::EPIPE);
//! assert_eq!(on_write_error(&err), "peer closed");
//! assert!(err.is_kind(ErrorKind::Connection));
//!
//! // Tag-based matching goes through the structural kind first.
//! match most_specific_kind(&err) {
//!     Some(ErrorKind::BrokenPipe) => {}
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```
//!
//! ## Logging
//!
//! Leveled stderr records via `kerror!` .. `ktrace!`, configured with
//! `OSERROR_LOG_LEVEL` and `OSERROR_FLUSH_EPRINT`. See [`kprint`].

#[cfg(not(unix))]
compile_error!("oserror supports unix targets only");

pub mod kprint;
pub mod env;
mod kind;
pub mod codes;
mod failure;
mod classify;
mod error;
#[macro_use]
mod macros;
mod convert;

// ── Public API ────────────────────────────────────────────────────

pub use kind::{ErrorKind, ParseKindError};
pub use failure::{describe, Failure};
pub use classify::{belongs_to, kinds_of, most_specific_kind, resolve, FailureExt};
pub use error::{construct, KindMismatch, OsError};
pub use convert::{Classified, ResultExt};
pub use kprint::{set_log_level, LogLevel};
