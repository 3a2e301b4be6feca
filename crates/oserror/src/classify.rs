//! Structural classification of failures.
//!
//! Membership is decided by the failure's numeric code alone. Composite
//! kinds match when any child matches; specificity resolution always
//! prefers a leaf over its composite ancestor.
//!
//! # Ambiguous codes
//!
//! If a code is claimed by more than one leaf, the leaf that comes first
//! in [`ErrorKind::LEAVES`] wins. The builtin table has no such overlap;
//! the rule exists so that resolution is deterministic on any table.

use crate::codes::{CodeTable, BUILTIN};
use crate::{ktrace, ErrorKind, Failure};

/// Does `failure` belong to `kind`?
///
/// Total: a failure without an OS code belongs to nothing.
///
/// ```
/// use oserror::{belongs_to, ErrorKind};
///
/// let err = std::io::Error::from_raw_os_error(libc::EPIPE);
/// assert!(belongs_to(&err, ErrorKind::BrokenPipe));
/// assert!(belongs_to(&err, ErrorKind::Connection));
/// assert!(!belongs_to(&err, ErrorKind::FileNotFound));
/// ```
#[inline]
pub fn belongs_to<F: Failure + ?Sized>(failure: &F, kind: ErrorKind) -> bool {
    match failure.os_code() {
        Some(code) => BUILTIN.contains(kind, code),
        None => false,
    }
}

/// The most specific builtin kind for `failure`, or `None` if unclassified.
///
/// ```
/// use oserror::{most_specific_kind, ErrorKind};
///
/// assert_eq!(most_specific_kind(&libc::ETIMEDOUT), Some(ErrorKind::Timeout));
/// assert_eq!(most_specific_kind(&libc::EPIPE), Some(ErrorKind::BrokenPipe));
/// assert_eq!(most_specific_kind(&libc::EIO), None);
/// ```
pub fn most_specific_kind<F: Failure + ?Sized>(failure: &F) -> Option<ErrorKind> {
    let code = failure.os_code()?;
    let kind = resolve(&BUILTIN, code);
    ktrace!("classify errno={} -> {:?}", code, kind);
    kind
}

/// Every kind `failure` belongs to, most specific first.
///
/// A connection failure yields its leaf followed by `Connection`.
pub fn kinds_of<F: Failure + ?Sized>(failure: &F) -> Vec<ErrorKind> {
    let Some(code) = failure.os_code() else {
        return Vec::new();
    };
    let mut out: Vec<ErrorKind> = BUILTIN
        .entries()
        .iter()
        .filter(|(_, codes)| codes.contains(&code))
        .map(|(kind, _)| *kind)
        .collect();
    let parents: Vec<ErrorKind> = out.iter().filter_map(|k| k.parent()).collect();
    for parent in parents {
        if !out.contains(&parent) {
            out.push(parent);
        }
    }
    out
}

/// Resolve `code` against an arbitrary table.
///
/// Leaves are scanned in table order and the first hit wins. Only when no
/// leaf matches is a composite considered; with leaf-union composites that
/// never happens, but it keeps the contract "deepest match wins" explicit.
pub fn resolve(table: &CodeTable, code: i32) -> Option<ErrorKind> {
    if let Some((kind, _)) = table.entries().iter().find(|(_, codes)| codes.contains(&code)) {
        return Some(*kind);
    }
    ErrorKind::ALL
        .iter()
        .copied()
        .filter(|k| k.is_composite())
        .find(|k| table.contains(*k, code))
}

/// Classification helpers available on every [`Failure`].
///
/// ```
/// use oserror::{ErrorKind, FailureExt};
///
/// let err = std::io::Error::from_raw_os_error(libc::ECONNREFUSED);
/// assert!(err.is_kind(ErrorKind::Connection));
/// assert_eq!(err.os_kind(), Some(ErrorKind::ConnectionRefused));
/// ```
pub trait FailureExt: Failure {
    #[inline]
    fn is_kind(&self, kind: ErrorKind) -> bool {
        belongs_to(self, kind)
    }

    #[inline]
    fn os_kind(&self) -> Option<ErrorKind> {
        most_specific_kind(self)
    }

    fn os_kinds(&self) -> Vec<ErrorKind> {
        kinds_of(self)
    }
}

impl<F: Failure + ?Sized> FailureExt for F {}
