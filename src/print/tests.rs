#![cfg(all(test, feature = "contiguous"))]

use std::ptr;

use super::*;
use crate::collections::contiguous::Vector;

fn render(format: &str, args: &[Arg<'_>]) -> (usize, String) {
    let mut out = Vector::new();
    let len = format_to(&mut out, format, args).unwrap();
    (len, String::try_from(out).unwrap())
}

#[test]
fn test_mixed_conversions() {
    assert_eq!(
        render("%d-%s-%%", &[Arg::Int(42), Arg::from("hi")]),
        (7, "42-hi-%".to_string())
    );

    let out = crate::sprintf!("%c%c|%i|%u|%x|%X", 'o', 'k', -7_i32, 7_u32, 255_u32, 255_u32).unwrap();
    assert_eq!(&*out, b"ok|-7|7|ff|FF");
}

#[test]
fn test_literals_and_percent() {
    assert_eq!(render("", &[]), (0, String::new()));
    assert_eq!(render("plain text", &[]), (10, "plain text".to_string()));
    assert_eq!(render("100%", &[]), (4, "100%".to_string()), "A trailing % should be literal.");
    assert_eq!(render("%%%%", &[]), (2, "%%".to_string()));
    assert_eq!(
        render("%q %w", &[]),
        (5, "%q %w".to_string()),
        "Unknown specifiers should be written unchanged without consuming arguments."
    );
    assert_eq!(render("héllo %s", &[Arg::from("wörld")]), (13, "héllo wörld".to_string()));
}

#[test]
fn test_strings_and_pointers() {
    assert_eq!(render("%s", &[Arg::Str(None)]), (6, "(null)".to_string()));
    assert_eq!(render("%p", &[Arg::from(ptr::null::<u8>())]), (5, "(nil)".to_string()));
    assert_eq!(render("%p", &[Arg::Ptr(0xdead_beef)]), (10, "0xdeadbeef".to_string()));
    assert_eq!(render("%p", &[Arg::Ptr(1)]), (3, "0x1".to_string()));

    let value = 5_u64;
    let addr = ptr::from_ref(&value).addr();
    let (_, text) = render("%p", &[Arg::from(ptr::from_ref(&value))]);
    assert_eq!(text, format!("{addr:#x}"), "Pointers should render as their address.");
}

#[test]
fn test_integer_extremes() {
    assert_eq!(render("%d", &[Arg::Int(i32::MIN)]).1, "-2147483648");
    assert_eq!(render("%d", &[Arg::Int(i32::MAX)]).1, "2147483647");
    assert_eq!(render("%i", &[Arg::Int(0)]).1, "0");
    assert_eq!(render("%u", &[Arg::Uint(u32::MAX)]).1, "4294967295");
    assert_eq!(render("%x", &[Arg::Uint(0)]).1, "0");
    assert_eq!(render("%X", &[Arg::Uint(u32::MAX)]).1, "FFFFFFFF");
}

#[test]
fn test_digits() {
    assert_eq!(Digits::signed(i64::MIN).as_str(), "-9223372036854775808");
    assert_eq!(Digits::unsigned(u64::MAX).as_str(), "18446744073709551615");
    assert_eq!(Digits::hex(u64::MAX, Case::Lower).as_str(), "ffffffffffffffff");
    assert_eq!(Digits::hex(0x0a0b, Case::Upper).to_string(), "A0B");
}

#[test]
fn test_argument_errors() {
    let mut out = Vector::new();
    assert_eq!(
        format_to(&mut out, "a%db%d", &[Arg::Int(1)]),
        Err(FormatError::MissingArg(MissingArgError { index: 1 }))
    );
    assert_eq!(&*out, b"a1b", "Output before the failure should be kept.");

    assert_eq!(
        format_to(&mut Vector::new(), "%s", &[Arg::Int(1)]),
        Err(FormatError::ArgMismatch(ArgMismatchError { specifier: 's', index: 0, found: "Int" }))
    );
    assert!(format_to(&mut Vector::new(), "%u", &[Arg::Int(1)]).unwrap_err().is_arg_mismatch());
    assert_eq!(
        render("%d", &[Arg::Int(1), Arg::Int(2)]),
        (1, "1".to_string()),
        "Surplus arguments should be ignored."
    );
}

#[test]
fn test_slice_sink() {
    let mut buf = [0_u8; 8];
    let mut sink = SliceSink::new(&mut buf);
    assert_eq!(format_to(&mut sink, "%u!", &[Arg::Uint(1234)]), Ok(5));
    assert_eq!(sink.remaining(), 3);
    assert_eq!(
        format_to(&mut sink, "%s", &[Arg::from("long")]),
        Err(FormatError::Write(WriteError::BufferFull(BufferFullError))),
        "A write that doesn't fit should fail."
    );
    assert_eq!(sink.written(), b"1234!", "A failed write shouldn't be partially applied.");
}

#[test]
fn test_vector_sink_appends() {
    let mut out = Vector::with_cap(2);
    out.extend_from_slice(b"> ");
    assert_eq!(format_to(&mut out, "%s %u", &[Arg::from("items:"), Arg::Uint(12)]), Ok(9));
    assert_eq!(&*out, b"> items: 12", "Formatting should append to existing contents.");
}

#[cfg(feature = "io")]
#[test]
fn test_fd_sink() {
    let mut fds = [0; 2];
    // SAFETY: fds has room for the two descriptors pipe writes.
    assert_eq!(unsafe { libc::pipe(fds.as_mut_ptr()) }, 0);
    let [read_fd, write_fd] = fds;

    assert_eq!(dprintf(write_fd, "%s=%d\n", &[Arg::from("answer"), Arg::Int(42)]), Ok(10));

    let mut buf = [0_u8; 16];
    // SAFETY: buf is valid for writes of buf.len() bytes.
    let count = unsafe { libc::read(read_fd, buf.as_mut_ptr().cast(), buf.len()) };
    assert_eq!(&buf[..count as usize], b"answer=42\n");

    // SAFETY: Both descriptors were opened above and aren't used again.
    unsafe {
        libc::close(read_fd);
        libc::close(write_fd);
    }

    assert_eq!(
        format_to(&mut FdSink(write_fd), "x", &[]),
        Err(FormatError::Write(WriteError::Os(OsError(libc::EBADF)))),
        "Writing to a closed descriptor should fail with the OS error."
    );
}
