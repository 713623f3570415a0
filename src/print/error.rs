use std::io::RawOsError;

use derive_more::{Display, Error, From, IsVariant};

use crate::util::error::ReserveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("write failed with OS error code: {_0}")]
pub struct OsError(#[error(not(source))] pub RawOsError);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("output buffer is full")]
pub struct BufferFullError;

/// The ways in which a [`Sink`](super::Sink) can fail to accept bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum WriteError {
    Os(OsError),
    BufferFull(BufferFullError),
    Reserve(ReserveError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("no argument supplied for conversion {index}")]
pub struct MissingArgError {
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("argument {index} can't be rendered by %{specifier}, found {found}")]
pub struct ArgMismatchError {
    pub specifier: char,
    pub index: usize,
    pub found: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum FormatError {
    Write(WriteError),
    MissingArg(MissingArgError),
    ArgMismatch(ArgMismatchError),
}
