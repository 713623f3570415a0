use std::slice;

#[cfg(feature = "io")]
use libc::c_int;
use tracing::debug;

use super::error::{ArgMismatchError, FormatError, MissingArgError};
use super::{Arg, Case, Digits, Sink};
use crate::bytes;
#[cfg(feature = "contiguous")]
use crate::collections::contiguous::Vector;
#[cfg(feature = "io")]
use super::FdSink;

/// Writes `format` to `sink`, replacing each conversion specifier with the next argument from
/// `args`. Returns the total number of bytes written.
///
/// Recognised specifiers are `%c`, `%s`, `%p`, `%d`, `%i`, `%u`, `%x`, `%X` and `%%`. Width,
/// precision and flags aren't supported. Any other character following a `%` is written out
/// unchanged along with the `%`, as is a `%` at the very end of `format`. Surplus arguments are
/// ignored.
///
/// # Errors
/// Fails if the sink rejects a write, if there are fewer arguments than specifiers, or if an
/// argument doesn't match its specifier (see [`Arg`]). Output written before the failure stays
/// in the sink.
///
/// # Examples
/// ```
/// # use foundation_lib::collections::contiguous::Vector;
/// # use foundation_lib::print::{self, Arg};
/// let mut out = Vector::new();
/// let len = print::format_to(&mut out, "%d-%s-%%", &[Arg::Int(42), Arg::from("hi")]).unwrap();
/// assert_eq!(len, 7);
/// assert_eq!(&*out, b"42-hi-%");
/// ```
pub fn format_to<S: Sink + ?Sized>(
    sink: &mut S,
    format: &str,
    args: &[Arg<'_>],
) -> Result<usize, FormatError> {
    let mut engine = Engine {
        sink,
        args: args.iter(),
        next_index: 0,
        written: 0,
    };
    let format = format.as_bytes();

    let mut pos = 0;
    while pos < format.len() {
        let literal_end = bytes::find(&format[pos..], b'%').map_or(format.len(), |i| pos + i);
        if literal_end > pos {
            engine.emit(&format[pos..literal_end])?;
            pos = literal_end;
            continue;
        }

        match format.get(pos + 1) {
            Some(&specifier) => {
                engine.convert(specifier)?;
                pos += 2;
            },
            None => {
                engine.emit(b"%")?;
                pos += 1;
            },
        }
    }

    Ok(engine.written)
}

/// Formats to standard output. See [`format_to`].
///
/// # Errors
/// See [`format_to`].
#[cfg(feature = "io")]
#[doc(cfg(feature = "io"))]
pub fn printf(format: &str, args: &[Arg<'_>]) -> Result<usize, FormatError> {
    format_to(&mut FdSink::STDOUT, format, args)
}

/// Formats to the file descriptor `fd`. See [`format_to`].
///
/// # Errors
/// See [`format_to`].
#[cfg(feature = "io")]
#[doc(cfg(feature = "io"))]
pub fn dprintf(fd: c_int, format: &str, args: &[Arg<'_>]) -> Result<usize, FormatError> {
    format_to(&mut FdSink(fd), format, args)
}

/// Formats into a new byte Vector. See [`format_to`].
///
/// # Errors
/// See [`format_to`].
#[cfg(feature = "contiguous")]
#[doc(cfg(feature = "contiguous"))]
pub fn sprintf(format: &str, args: &[Arg<'_>]) -> Result<Vector<u8>, FormatError> {
    let mut out = Vector::new();
    format_to(&mut out, format, args)?;
    Ok(out)
}

struct Engine<'s, 'a, S: Sink + ?Sized> {
    sink: &'s mut S,
    args: slice::Iter<'a, Arg<'a>>,
    next_index: usize,
    written: usize,
}

impl<'a, S: Sink + ?Sized> Engine<'_, 'a, S> {
    fn emit(&mut self, bytes: &[u8]) -> Result<(), FormatError> {
        if let Err(e) = self.sink.write(bytes) {
            debug!(error = %e, written = self.written, "formatted output aborted");
            Err(e)?
        }
        self.written += bytes.len();
        Ok(())
    }

    fn next_arg(&mut self) -> Result<(usize, Arg<'a>), MissingArgError> {
        let index = self.next_index;
        self.next_index += 1;
        self.args.next().map(|arg| (index, *arg)).ok_or(MissingArgError { index })
    }

    fn convert(&mut self, specifier: u8) -> Result<(), FormatError> {
        let mismatch = |index, arg: Arg<'_>| ArgMismatchError {
            specifier: char::from(specifier),
            index,
            found: arg.kind(),
        };

        match specifier {
            b'%' => self.emit(b"%"),
            b'c' => match self.next_arg()? {
                (_, Arg::Char(c)) => self.emit(c.encode_utf8(&mut [0; 4]).as_bytes()),
                (i, arg) => Err(mismatch(i, arg).into()),
            },
            b's' => match self.next_arg()? {
                (_, Arg::Str(s)) => self.emit(s.unwrap_or("(null)").as_bytes()),
                (i, arg) => Err(mismatch(i, arg).into()),
            },
            b'p' => match self.next_arg()? {
                (_, Arg::Ptr(0)) => self.emit(b"(nil)"),
                (_, Arg::Ptr(addr)) => {
                    self.emit(b"0x")?;
                    self.emit(Digits::hex(addr as u64, Case::Lower).as_bytes())
                },
                (i, arg) => Err(mismatch(i, arg).into()),
            },
            b'd' | b'i' => match self.next_arg()? {
                (_, Arg::Int(n)) => self.emit(Digits::signed(n.into()).as_bytes()),
                (i, arg) => Err(mismatch(i, arg).into()),
            },
            b'u' | b'x' | b'X' => match self.next_arg()? {
                (_, Arg::Uint(n)) => self.emit(match specifier {
                    b'u' => Digits::unsigned(n.into()),
                    b'x' => Digits::hex(n.into(), Case::Lower),
                    _ => Digits::hex(n.into(), Case::Upper),
                }.as_bytes()),
                (i, arg) => Err(mismatch(i, arg).into()),
            },
            other => self.emit(&[b'%', other]),
        }
    }
}
