//! Semantic OS error kinds and the hierarchy between them.
//!
//! Fourteen leaf kinds plus one composite, [`ErrorKind::Connection`], whose
//! membership is the union of its four connection children. The hierarchy
//! is at most two levels deep.

use core::fmt;
use core::str::FromStr;
use std::io;

/// A semantic category of OS-level failure.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKind {
    /// Operation would block on a non-blocking object.
    BlockingIO,
    /// Operation on a child process failed (no children to wait on).
    ChildProcess,
    /// Composite: any of the four connection kinds below.
    Connection,
    /// Write on a pipe or socket whose other end is closed.
    BrokenPipe,
    /// Connection attempt aborted by the peer.
    ConnectionAborted,
    /// Connection attempt refused by the peer.
    ConnectionRefused,
    /// Connection reset by the peer.
    ConnectionReset,
    /// Creating a file or directory that already exists.
    FileExists,
    /// File or directory does not exist.
    FileNotFound,
    /// System call interrupted by a signal.
    Interrupted,
    /// File operation requested on a directory.
    IsADirectory,
    /// Directory operation requested on something that is not a directory.
    NotADirectory,
    /// Insufficient access rights.
    Permission,
    /// Process does not exist.
    ProcessLookup,
    /// System-level timeout.
    Timeout,
}

impl ErrorKind {
    /// Every kind, composite included.
    pub const ALL: [ErrorKind; 15] = [
        ErrorKind::BlockingIO,
        ErrorKind::ChildProcess,
        ErrorKind::Connection,
        ErrorKind::BrokenPipe,
        ErrorKind::ConnectionAborted,
        ErrorKind::ConnectionRefused,
        ErrorKind::ConnectionReset,
        ErrorKind::FileExists,
        ErrorKind::FileNotFound,
        ErrorKind::Interrupted,
        ErrorKind::IsADirectory,
        ErrorKind::NotADirectory,
        ErrorKind::Permission,
        ErrorKind::ProcessLookup,
        ErrorKind::Timeout,
    ];

    /// Leaf kinds in resolution priority order.
    ///
    /// When a code is claimed by more than one leaf, the earlier entry wins.
    pub const LEAVES: [ErrorKind; 14] = [
        ErrorKind::BlockingIO,
        ErrorKind::ChildProcess,
        ErrorKind::BrokenPipe,
        ErrorKind::ConnectionAborted,
        ErrorKind::ConnectionRefused,
        ErrorKind::ConnectionReset,
        ErrorKind::FileExists,
        ErrorKind::FileNotFound,
        ErrorKind::Interrupted,
        ErrorKind::IsADirectory,
        ErrorKind::NotADirectory,
        ErrorKind::Permission,
        ErrorKind::ProcessLookup,
        ErrorKind::Timeout,
    ];

    const CONNECTION_CHILDREN: [ErrorKind; 4] = [
        ErrorKind::BrokenPipe,
        ErrorKind::ConnectionAborted,
        ErrorKind::ConnectionRefused,
        ErrorKind::ConnectionReset,
    ];

    /// The composite kind this kind refines, if any.
    #[inline]
    pub const fn parent(self) -> Option<ErrorKind> {
        match self {
            ErrorKind::BrokenPipe
            | ErrorKind::ConnectionAborted
            | ErrorKind::ConnectionRefused
            | ErrorKind::ConnectionReset => Some(ErrorKind::Connection),
            _ => None,
        }
    }

    /// Direct children. Empty for leaf kinds.
    #[inline]
    pub fn children(self) -> &'static [ErrorKind] {
        match self {
            ErrorKind::Connection => &Self::CONNECTION_CHILDREN,
            _ => &[],
        }
    }

    #[inline]
    pub fn is_composite(self) -> bool {
        !self.children().is_empty()
    }

    #[inline]
    pub fn is_leaf(self) -> bool {
        !self.is_composite()
    }

    /// Subclass check: `self` is `other` or one of its descendants.
    ///
    /// ```
    /// use oserror::ErrorKind;
    ///
    /// assert!(ErrorKind::BrokenPipe.is_a(ErrorKind::Connection));
    /// assert!(ErrorKind::Connection.is_a(ErrorKind::Connection));
    /// assert!(!ErrorKind::Connection.is_a(ErrorKind::BrokenPipe));
    /// ```
    #[inline]
    pub fn is_a(self, other: ErrorKind) -> bool {
        self == other || self.parent() == Some(other)
    }

    /// Exception-style name, e.g. `"BrokenPipeError"`.
    pub const fn name(self) -> &'static str {
        match self {
            ErrorKind::BlockingIO => "BlockingIOError",
            ErrorKind::ChildProcess => "ChildProcessError",
            ErrorKind::Connection => "ConnectionError",
            ErrorKind::BrokenPipe => "BrokenPipeError",
            ErrorKind::ConnectionAborted => "ConnectionAbortedError",
            ErrorKind::ConnectionRefused => "ConnectionRefusedError",
            ErrorKind::ConnectionReset => "ConnectionResetError",
            ErrorKind::FileExists => "FileExistsError",
            ErrorKind::FileNotFound => "FileNotFoundError",
            ErrorKind::Interrupted => "InterruptedError",
            ErrorKind::IsADirectory => "IsADirectoryError",
            ErrorKind::NotADirectory => "NotADirectoryError",
            ErrorKind::Permission => "PermissionError",
            ErrorKind::ProcessLookup => "ProcessLookupError",
            ErrorKind::Timeout => "TimeoutError",
        }
    }

    /// Nearest `std::io::ErrorKind`, where std has a stable equivalent.
    pub fn std_kind(self) -> Option<io::ErrorKind> {
        match self {
            ErrorKind::BlockingIO => Some(io::ErrorKind::WouldBlock),
            ErrorKind::BrokenPipe => Some(io::ErrorKind::BrokenPipe),
            ErrorKind::ConnectionAborted => Some(io::ErrorKind::ConnectionAborted),
            ErrorKind::ConnectionRefused => Some(io::ErrorKind::ConnectionRefused),
            ErrorKind::ConnectionReset => Some(io::ErrorKind::ConnectionReset),
            ErrorKind::FileExists => Some(io::ErrorKind::AlreadyExists),
            ErrorKind::FileNotFound => Some(io::ErrorKind::NotFound),
            ErrorKind::Interrupted => Some(io::ErrorKind::Interrupted),
            ErrorKind::Permission => Some(io::ErrorKind::PermissionDenied),
            ErrorKind::Timeout => Some(io::ErrorKind::TimedOut),
            ErrorKind::ChildProcess
            | ErrorKind::Connection
            | ErrorKind::IsADirectory
            | ErrorKind::NotADirectory
            | ErrorKind::ProcessLookup => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown kind name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError {
    input: String,
}

impl ParseKindError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error kind: {:?}", self.input)
    }
}

impl std::error::Error for ParseKindError {}

impl FromStr for ErrorKind {
    type Err = ParseKindError;

    /// Accepts both `"BrokenPipeError"` and `"BrokenPipe"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let short = s.strip_suffix("Error").unwrap_or(s);
        ErrorKind::ALL
            .iter()
            .copied()
            .find(|k| k.name() == s || format!("{:?}", k) == short)
            .ok_or_else(|| ParseKindError { input: s.to_string() })
    }
}
