/// Formats to standard output, converting each argument with [`Arg::from`].
///
/// [`Arg::from`]: crate::print::Arg
///
/// # Examples
/// ```no_run
/// # use foundation_lib::printf;
/// printf!("%s has %u items\n", "cart", 3_u32).unwrap();
/// ```
#[cfg(feature = "io")]
#[macro_export]
macro_rules! printf {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::print::printf($format, &[$($crate::print::Arg::from($arg)),*])
    };
}

/// Formats to a file descriptor, converting each argument with [`Arg::from`].
///
/// [`Arg::from`]: crate::print::Arg
#[cfg(feature = "io")]
#[macro_export]
macro_rules! dprintf {
    ($fd:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::print::dprintf($fd, $format, &[$($crate::print::Arg::from($arg)),*])
    };
}

/// Formats into a new byte Vector, converting each argument with [`Arg::from`].
///
/// [`Arg::from`]: crate::print::Arg
///
/// # Examples
/// ```
/// # use foundation_lib::sprintf;
/// let out = sprintf!("%d-%s-%%", 42_i32, "hi").unwrap();
/// assert_eq!(&*out, b"42-hi-%");
/// ```
#[cfg(feature = "contiguous")]
#[macro_export]
macro_rules! sprintf {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::print::sprintf($format, &[$($crate::print::Arg::from($arg)),*])
    };
}
