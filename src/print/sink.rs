#[cfg(feature = "io")]
use libc::c_int;

use super::error::{BufferFullError, WriteError};
use crate::bytes;
#[cfg(feature = "contiguous")]
use crate::collections::contiguous::Vector;
#[cfg(feature = "io")]
use super::error::OsError;
#[cfg(feature = "io")]
use crate::util::syscall;

/// A destination for formatted output.
///
/// A write either accepts every byte it is given or fails. Sinks never report partial writes.
pub trait Sink {
    /// Writes all of `bytes` to the sink.
    ///
    /// # Errors
    /// Returns a [`WriteError`] describing why the bytes couldn't be written.
    fn write(&mut self, bytes: &[u8]) -> Result<(), WriteError>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write(&mut self, bytes: &[u8]) -> Result<(), WriteError> {
        (**self).write(bytes)
    }
}

/// A sink writing to a raw file descriptor with `write(2)`.
///
/// The descriptor is borrowed, not owned: dropping an FdSink doesn't close it.
#[cfg(feature = "io")]
#[doc(cfg(feature = "io"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FdSink(pub c_int);

#[cfg(feature = "io")]
impl FdSink {
    pub const STDOUT: FdSink = FdSink(libc::STDOUT_FILENO);
    pub const STDERR: FdSink = FdSink(libc::STDERR_FILENO);
}

#[cfg(feature = "io")]
impl Sink for FdSink {
    fn write(&mut self, mut bytes: &[u8]) -> Result<(), WriteError> {
        while !bytes.is_empty() {
            // SAFETY: bytes is valid for reads of bytes.len() bytes for the duration of the call.
            match unsafe { libc::write(self.0, bytes.as_ptr().cast(), bytes.len()) } {
                -1 => match syscall::err_no() {
                    libc::EINTR => continue,
                    e => Err(OsError(e))?,
                },
                // A descriptor that accepts nothing would otherwise loop forever.
                0 => Err(OsError(libc::EIO))?,
                count => bytes = &bytes[count as usize..],
            }
        }
        Ok(())
    }
}

/// A sink filling a borrowed byte buffer. Writes that don't fit in the remaining space fail
/// without writing anything.
///
/// # Examples
/// ```
/// # use foundation_lib::print::{Sink, SliceSink};
/// let mut buf = [0_u8; 4];
/// let mut sink = SliceSink::new(&mut buf);
/// sink.write(b"abc").unwrap();
/// assert!(sink.write(b"de").is_err());
/// assert_eq!(sink.written(), b"abc");
/// ```
#[derive(Debug)]
pub struct SliceSink<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceSink<'a> {
    pub const fn new(buf: &'a mut [u8]) -> SliceSink<'a> {
        SliceSink {
            buf,
            pos: 0,
        }
    }

    /// Returns the bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }
}

impl Sink for SliceSink<'_> {
    fn write(&mut self, bytes: &[u8]) -> Result<(), WriteError> {
        if bytes.len() > self.remaining() {
            Err(BufferFullError)?
        }
        self.pos += bytes::copy(&mut self.buf[self.pos..], bytes);
        Ok(())
    }
}

#[cfg(feature = "contiguous")]
impl Sink for Vector<u8> {
    fn write(&mut self, bytes: &[u8]) -> Result<(), WriteError> {
        Ok(self.try_extend_from_slice(bytes)?)
    }
}
