//! The allocation layer shared by the growable collections.

mod raw_buf;

pub(crate) use raw_buf::*;
