/// Structural match on a failure's kind.
///
/// Arms are tried top to bottom with [`belongs_to`](crate::belongs_to), so
/// a composite arm such as `Connection` catches every connection leaf not
/// handled above it, the same way ordered `except` clauses behave. A `_`
/// fallback arm is required; unclassified failures land there with their
/// code and message untouched.
///
/// ```
/// use oserror::match_kind;
///
/// let err = std::io::Error::from_raw_os_error(libc::ECONNRESET);
/// let action = match_kind!(err, {
///     BrokenPipe => "stop writing",
///     Connection => "reconnect",
///     BlockingIO | Interrupted => "retry",
///     _ => "give up",
/// });
/// assert_eq!(action, "reconnect");
/// ```
#[macro_export]
macro_rules! match_kind {
    ($failure:expr, { $($arms:tt)* }) => {{
        let __f = &$failure;
        $crate::__match_kind_arms!(__f; $($arms)*)
    }};
}

/// Internal helper for match_kind!: peels one arm per step.
#[doc(hidden)]
#[macro_export]
macro_rules! __match_kind_arms {
    // Ran out of arms without a fallback
    ($f:ident; ) => {
        compile_error!("match_kind! requires a `_ =>` fallback arm")
    };

    // Fallback
    ($f:ident; _ => $handler:expr $(, $($rest:tt)*)?) => {
        $handler
    };

    // One or more kinds joined by `|`
    ($f:ident; $($kind:ident)|+ => $handler:expr $(, $($rest:tt)*)?) => {
        if false $(|| $crate::belongs_to($f, $crate::ErrorKind::$kind))+ {
            $handler
        } else {
            $crate::__match_kind_arms!($f; $($($rest)*)?)
        }
    };
}
