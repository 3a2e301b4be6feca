//! Platform errno code sets for each [`ErrorKind`].
//!
//! Values come from `libc` for the compile target, so the tables always
//! agree with what the platform's I/O layer reports. On Linux `EWOULDBLOCK`
//! equals `EAGAIN`; the duplicate is harmless since sets are only probed.
//!
//! The composite `Connection` set is never stored. It is the union of its
//! children, computed on lookup.

use crate::ErrorKind;

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        use libc::{
            EACCES, EAGAIN, EALREADY, ECHILD, ECONNABORTED, ECONNREFUSED,
            ECONNRESET, EEXIST, EINPROGRESS, EINTR, EISDIR, ENOENT, ENOTDIR,
            EPERM, EPIPE, ESHUTDOWN, ESRCH, ETIMEDOUT, EWOULDBLOCK,
        };
    } else {
        compile_error!("oserror: errno tables are only defined for unix targets");
    }
}

// ── Non-blocking / process ────────────────────────────────────────

pub const BLOCKING_IO:        &[i32] = &[EAGAIN, EALREADY, EWOULDBLOCK, EINPROGRESS];
pub const CHILD_PROCESS:      &[i32] = &[ECHILD];
pub const PROCESS_LOOKUP:     &[i32] = &[ESRCH];
pub const INTERRUPTED:        &[i32] = &[EINTR];

// ── Connection family ─────────────────────────────────────────────

pub const BROKEN_PIPE:        &[i32] = &[EPIPE, ESHUTDOWN];
pub const CONNECTION_ABORTED: &[i32] = &[ECONNABORTED];
pub const CONNECTION_REFUSED: &[i32] = &[ECONNREFUSED];
pub const CONNECTION_RESET:   &[i32] = &[ECONNRESET];

// ── Filesystem / access ───────────────────────────────────────────

pub const FILE_EXISTS:        &[i32] = &[EEXIST];
pub const FILE_NOT_FOUND:     &[i32] = &[ENOENT];
pub const IS_A_DIRECTORY:     &[i32] = &[EISDIR];
pub const NOT_A_DIRECTORY:    &[i32] = &[ENOTDIR];
pub const PERMISSION:         &[i32] = &[EACCES, EPERM];
pub const TIMEOUT:            &[i32] = &[ETIMEDOUT];

/// An ordered leaf table: `(kind, codes)` pairs in resolution priority.
///
/// Entries must be leaf kinds. Composite membership is derived from
/// [`ErrorKind::children`].
#[derive(Debug, Clone, Copy)]
pub struct CodeTable {
    entries: &'static [(ErrorKind, &'static [i32])],
}

impl CodeTable {
    pub const fn new(entries: &'static [(ErrorKind, &'static [i32])]) -> Self {
        Self { entries }
    }

    /// Leaf entries in priority order.
    #[inline]
    pub fn entries(&self) -> &'static [(ErrorKind, &'static [i32])] {
        self.entries
    }

    /// Codes stored for a leaf kind. Empty for composites and absent kinds.
    pub fn leaf_codes(&self, kind: ErrorKind) -> &'static [i32] {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, codes)| *codes)
            .unwrap_or(&[])
    }

    /// Membership test. Composite kinds consult every child.
    pub fn contains(&self, kind: ErrorKind, code: i32) -> bool {
        if kind.is_composite() {
            return kind.children().iter().any(|child| self.contains(*child, code));
        }
        self.leaf_codes(kind).contains(&code)
    }

    /// All codes realising `kind`, deduplicated, in table order.
    pub fn codes(&self, kind: ErrorKind) -> Vec<i32> {
        let mut out: Vec<i32> = Vec::new();
        let mut push = |codes: &[i32]| {
            for c in codes {
                if !out.contains(c) {
                    out.push(*c);
                }
            }
        };
        if kind.is_composite() {
            for child in kind.children() {
                push(self.leaf_codes(*child));
            }
        } else {
            push(self.leaf_codes(kind));
        }
        out
    }
}

/// The process-wide table.
pub static BUILTIN: CodeTable = CodeTable::new(&[
    (ErrorKind::BlockingIO,        BLOCKING_IO),
    (ErrorKind::ChildProcess,      CHILD_PROCESS),
    (ErrorKind::BrokenPipe,        BROKEN_PIPE),
    (ErrorKind::ConnectionAborted, CONNECTION_ABORTED),
    (ErrorKind::ConnectionRefused, CONNECTION_REFUSED),
    (ErrorKind::ConnectionReset,   CONNECTION_RESET),
    (ErrorKind::FileExists,        FILE_EXISTS),
    (ErrorKind::FileNotFound,      FILE_NOT_FOUND),
    (ErrorKind::Interrupted,       INTERRUPTED),
    (ErrorKind::IsADirectory,      IS_A_DIRECTORY),
    (ErrorKind::NotADirectory,     NOT_A_DIRECTORY),
    (ErrorKind::Permission,        PERMISSION),
    (ErrorKind::ProcessLookup,     PROCESS_LOOKUP),
    (ErrorKind::Timeout,           TIMEOUT),
]);

/// Codes realising `kind` on this platform, composites expanded.
///
/// ```
/// use oserror::{codes, ErrorKind};
///
/// assert!(codes::codes_of(ErrorKind::Connection).contains(&libc::EPIPE));
/// ```
pub fn codes_of(kind: ErrorKind) -> Vec<i32> {
    BUILTIN.codes(kind)
}

/// The first code of `kind`'s set, used when constructing without an explicit code.
pub fn canonical_code(kind: ErrorKind) -> i32 {
    let kind = if kind.is_composite() { kind.children()[0] } else { kind };
    BUILTIN.leaf_codes(kind).first().copied().unwrap_or(0)
}
