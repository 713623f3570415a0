#[cfg(test)]
pub mod alloc;
pub mod error;
pub mod panic;
pub mod result;
#[cfg(feature = "io")]
pub mod syscall;
