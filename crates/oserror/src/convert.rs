use std::error::Error;
use std::fmt;
use std::io;

use crate::{belongs_to, ErrorKind, Failure, OsError};

// ── OsError → io::Error ───────────────────────────────────────────

impl From<OsError> for io::Error {
    /// Wrap an `OsError` as a custom `io::Error`.
    ///
    /// The std kind follows the structural kind where std has one. The
    /// wrapped value stays reachable, so the result still reports the
    /// original code and message through [`Failure`].
    fn from(err: OsError) -> Self {
        let std_kind = err
            .kind()
            .and_then(ErrorKind::std_kind)
            .unwrap_or(io::ErrorKind::Other);
        io::Error::new(std_kind, err)
    }
}

// ── Classified ────────────────────────────────────────────────────

/// An `io::Error` after classification.
///
/// `Os` holds failures whose code maps to a builtin kind. Everything
/// else, codeless or unclassified, stays in `Other` exactly as received.
#[derive(Debug)]
pub enum Classified {
    Os(OsError),
    Other(io::Error),
}

impl Classified {
    pub fn classify(err: io::Error) -> Self {
        match OsError::from_io(&err) {
            Some(os) => Classified::Os(os),
            None => Classified::Other(err),
        }
    }

    /// The structural kind, `None` for `Other`.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Classified::Os(e) => e.kind(),
            Classified::Other(_) => None,
        }
    }
}

impl Failure for Classified {
    fn os_code(&self) -> Option<i32> {
        match self {
            Classified::Os(e) => e.os_code(),
            Classified::Other(e) => e.os_code(),
        }
    }
}

impl fmt::Display for Classified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classified::Os(e) => fmt::Display::fmt(e, f),
            Classified::Other(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl Error for Classified {}

impl From<Classified> for io::Error {
    fn from(c: Classified) -> Self {
        match c {
            Classified::Os(e) => e.into(),
            Classified::Other(e) => e,
        }
    }
}

// ── ResultExt — kind-aware handling on io::Result ─────────────────

/// Extension trait for branching on kinds during propagation.
///
/// ```no_run
/// use oserror::{ErrorKind, ResultExt};
///
/// // mkdir -p style: an existing directory is fine, anything else is not.
/// std::fs::create_dir("out")
///     .ignore_kind(ErrorKind::FileExists)?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub trait ResultExt<T> {
    /// Turn a failure of `kind` into `Ok(None)`; pass every other failure through.
    fn ignore_kind(self, kind: ErrorKind) -> io::Result<Option<T>>;

    /// Split the error into [`Classified::Os`] or [`Classified::Other`].
    fn classified(self) -> Result<T, Classified>;
}

impl<T> ResultExt<T> for io::Result<T> {
    fn ignore_kind(self, kind: ErrorKind) -> io::Result<Option<T>> {
        match self {
            Ok(v) => Ok(Some(v)),
            Err(e) if belongs_to(&e, kind) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn classified(self) -> Result<T, Classified> {
        self.map_err(Classified::classify)
    }
}
