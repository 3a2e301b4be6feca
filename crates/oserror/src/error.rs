use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::io;

use crate::codes::{self, BUILTIN};
use crate::{kdebug, most_specific_kind, ErrorKind, Failure};

/// An OS-level failure tagged with a semantic kind.
///
/// Carries the raw code and message unchanged. The tag given at
/// construction is kept as [`nominal_kind`](OsError::nominal_kind), but
/// every membership question goes through the code: an `OsError` is a
/// [`Failure`] like any other.
#[derive(Clone, PartialEq, Eq)]
pub struct OsError {
    kind: ErrorKind,
    code: i32,
    message: String,
}

/// Build a failure of `kind` with an explicit code and message.
///
/// ```
/// use oserror::{belongs_to, construct, ErrorKind};
///
/// let err = construct(ErrorKind::ConnectionReset, libc::ECONNRESET, "peer went away");
/// assert!(belongs_to(&err, ErrorKind::ConnectionReset));
/// assert!(belongs_to(&err, ErrorKind::Connection));
/// ```
#[inline]
pub fn construct(kind: ErrorKind, code: i32, message: impl Into<String>) -> OsError {
    OsError::new(kind, code, message)
}

impl OsError {
    /// Infallible construction.
    ///
    /// A code that does not realise `kind` is accepted and logged; the
    /// value then classifies by its code, not its tag.
    pub fn new(kind: ErrorKind, code: i32, message: impl Into<String>) -> Self {
        if !BUILTIN.contains(kind, code) {
            kdebug!("OsError::new: errno {} does not realise {}", code, kind);
        }
        Self { kind, code, message: message.into() }
    }

    /// Construction that rejects a code outside `kind`'s set.
    pub fn checked(
        kind: ErrorKind,
        code: i32,
        message: impl Into<String>,
    ) -> Result<Self, KindMismatch> {
        if !BUILTIN.contains(kind, code) {
            return Err(KindMismatch { kind, code });
        }
        Ok(Self { kind, code, message: message.into() })
    }

    /// Construction with the kind's canonical code.
    ///
    /// For `Connection` this is the first code of its first child.
    pub fn of_kind(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: codes::canonical_code(kind),
            message: message.into(),
        }
    }

    /// Capture an `io::Error` that carries an OS code.
    ///
    /// Returns `None` for codeless errors; those stay generic failures.
    /// The tag is the most specific kind, or `None` when unclassified.
    pub fn from_io(err: &io::Error) -> Option<Self> {
        let code = err.os_code()?;
        let kind = most_specific_kind(&code)?;
        let message = err
            .message()
            .map(Cow::into_owned)
            .unwrap_or_default();
        Some(Self { kind, code, message })
    }

    #[inline]
    pub fn code(&self) -> i32 {
        self.code
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The tag given at construction.
    #[inline]
    pub fn nominal_kind(&self) -> ErrorKind {
        self.kind
    }

    /// The structural kind, derived from the code.
    #[inline]
    pub fn kind(&self) -> Option<ErrorKind> {
        most_specific_kind(self)
    }
}

impl Failure for OsError {
    #[inline]
    fn os_code(&self) -> Option<i32> {
        Some(self.code)
    }

    fn message(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(&self.message))
    }
}

impl fmt::Display for OsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [errno {}] ", self.kind, self.code)?;
        if self.message.is_empty() {
            f.write_str(crate::describe(self.code))
        } else {
            f.write_str(&self.message)
        }
    }
}

impl fmt::Debug for OsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OsError")
            .field("kind", &self.kind)
            .field("code", &self.code)
            .field("message", &self.message)
            .finish()
    }
}

impl Error for OsError {}

/// Returned by [`OsError::checked`] when the code does not realise the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindMismatch {
    pub kind: ErrorKind,
    pub code: i32,
}

impl fmt::Display for KindMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "errno {} is not a {}", self.code, self.kind)
    }
}

impl Error for KindMismatch {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::belongs_to;

    #[test]
    fn construct_belongs_to_its_kind() {
        for (kind, codes) in BUILTIN.entries() {
            for code in *codes {
                let err = construct(*kind, *code, "x");
                assert!(belongs_to(&err, *kind));
                assert_eq!(err.nominal_kind(), *kind);
                assert_eq!(
                    belongs_to(&err, ErrorKind::Connection),
                    kind.parent() == Some(ErrorKind::Connection)
                );
            }
        }
    }

    #[test]
    fn construct_connection_composite() {
        let err = construct(ErrorKind::Connection, libc::ECONNABORTED, "aborted");
        assert!(belongs_to(&err, ErrorKind::Connection));
        assert_eq!(err.nominal_kind(), ErrorKind::Connection);
        assert_eq!(err.kind(), Some(ErrorKind::ConnectionAborted));
    }

    #[test]
    fn mismatched_tag_classifies_by_code() {
        let err = OsError::new(ErrorKind::BrokenPipe, libc::ENOENT, "odd");
        assert_eq!(err.nominal_kind(), ErrorKind::BrokenPipe);
        assert_eq!(err.kind(), Some(ErrorKind::FileNotFound));
        assert!(!belongs_to(&err, ErrorKind::BrokenPipe));
    }

    #[test]
    fn checked_rejects_mismatch() {
        let mismatch = OsError::checked(ErrorKind::Timeout, libc::EPIPE, "x").unwrap_err();
        assert_eq!(mismatch, KindMismatch { kind: ErrorKind::Timeout, code: libc::EPIPE });
        assert!(mismatch.to_string().contains("TimeoutError"));

        let ok = OsError::checked(ErrorKind::Timeout, libc::ETIMEDOUT, "slow").unwrap();
        assert_eq!(ok.code(), libc::ETIMEDOUT);
    }

    #[test]
    fn of_kind_uses_canonical_code() {
        let err = OsError::of_kind(ErrorKind::FileExists, "exists");
        assert_eq!(err.code(), libc::EEXIST);
        assert!(belongs_to(&err, ErrorKind::FileExists));

        let err = OsError::of_kind(ErrorKind::Connection, "conn");
        assert!(belongs_to(&err, ErrorKind::Connection));
    }

    #[test]
    fn from_io_keeps_code_and_message() {
        let io_err = io::Error::from_raw_os_error(libc::EACCES);
        let err = OsError::from_io(&io_err).unwrap();
        assert_eq!(err.code(), libc::EACCES);
        assert_eq!(err.nominal_kind(), ErrorKind::Permission);
        assert_eq!(err.message(), io_err.to_string());
    }

    #[test]
    fn from_io_unclassified_or_codeless() {
        assert!(OsError::from_io(&io::Error::from_raw_os_error(libc::EIO)).is_none());
        assert!(OsError::from_io(&io::Error::new(io::ErrorKind::Other, "x")).is_none());
    }

    #[test]
    fn display_with_message() {
        let err = construct(ErrorKind::BrokenPipe, libc::EPIPE, "write failed");
        assert_eq!(err.to_string(), format!("BrokenPipeError: [errno {}] write failed", libc::EPIPE));
    }

    #[test]
    fn display_falls_back_to_platform_description() {
        let err = construct(ErrorKind::FileNotFound, libc::ENOENT, "");
        let s = err.to_string();
        assert!(s.starts_with("FileNotFoundError: [errno"));
        assert!(s.ends_with(crate::describe(libc::ENOENT)));
    }

    #[test]
    fn send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<OsError>();
        assert_send_sync::<KindMismatch>();
    }
}
