//! The failure boundary: anything that may carry a numeric OS error code.
//!
//! Classification never looks at a failure's static type. It asks for the
//! code and consults the tables, so an `io::Error` produced by a socket
//! write classifies exactly like an [`OsError`](crate::OsError) built by
//! hand with the same code.

use std::borrow::Cow;
use std::io;

/// An opaque failure value produced by the platform I/O layer or by callers.
pub trait Failure {
    /// The raw OS error code, if this is an OS-level failure.
    fn os_code(&self) -> Option<i32>;

    /// Human-readable message, if one is attached.
    fn message(&self) -> Option<Cow<'_, str>> {
        None
    }
}

impl Failure for i32 {
    #[inline]
    fn os_code(&self) -> Option<i32> {
        Some(*self)
    }
}

impl Failure for io::Error {
    /// Raw OS errors report their code directly. Custom errors wrapping an
    /// `OsError` (see `From<OsError> for io::Error`) report the wrapped code.
    fn os_code(&self) -> Option<i32> {
        self.raw_os_error().or_else(|| {
            self.get_ref()
                .and_then(|inner| inner.downcast_ref::<crate::OsError>())
                .map(|e| e.code())
        })
    }

    fn message(&self) -> Option<Cow<'_, str>> {
        if let Some(inner) = self.get_ref().and_then(|e| e.downcast_ref::<crate::OsError>()) {
            return Some(Cow::Borrowed(inner.message()));
        }
        Some(Cow::Owned(self.to_string()))
    }
}

#[cfg(unix)]
impl Failure for nix::errno::Errno {
    #[inline]
    fn os_code(&self) -> Option<i32> {
        Some(*self as i32)
    }

    fn message(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.desc()))
    }
}

impl<F: Failure + ?Sized> Failure for &F {
    #[inline]
    fn os_code(&self) -> Option<i32> {
        (**self).os_code()
    }

    fn message(&self) -> Option<Cow<'_, str>> {
        (**self).message()
    }
}

impl<F: Failure + ?Sized> Failure for Box<F> {
    #[inline]
    fn os_code(&self) -> Option<i32> {
        (**self).os_code()
    }

    fn message(&self) -> Option<Cow<'_, str>> {
        (**self).message()
    }
}

/// Platform description for a raw code, e.g. `"Broken pipe"`.
#[cfg(unix)]
pub fn describe(code: i32) -> &'static str {
    nix::errno::Errno::from_raw(code).desc()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_code_is_its_own_failure() {
        assert_eq!(libc::EPIPE.os_code(), Some(libc::EPIPE));
        assert!(libc::EPIPE.message().is_none());
    }

    #[test]
    fn io_error_with_raw_code() {
        let err = io::Error::from_raw_os_error(libc::ENOENT);
        assert_eq!(err.os_code(), Some(libc::ENOENT));
        assert!(err.message().is_some());
    }

    #[test]
    fn io_error_without_code() {
        let err = io::Error::new(io::ErrorKind::Other, "synthetic");
        assert_eq!(err.os_code(), None);
        assert_eq!(err.message().as_deref(), Some("synthetic"));
    }

    #[test]
    fn errno_reports_code_and_description() {
        let e = nix::errno::Errno::ECONNRESET;
        assert_eq!(e.os_code(), Some(libc::ECONNRESET));
        assert_eq!(e.message().as_deref(), Some(e.desc()));
    }

    #[test]
    fn references_and_boxes_forward() {
        let err = io::Error::from_raw_os_error(libc::EINTR);
        assert_eq!((&err).os_code(), Some(libc::EINTR));
        let boxed: Box<dyn Failure> = Box::new(libc::EINTR);
        assert_eq!(boxed.os_code(), Some(libc::EINTR));
    }

    #[test]
    fn describe_known_code() {
        assert!(!describe(libc::EPIPE).is_empty());
    }
}
