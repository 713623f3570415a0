use std::fmt::{self, Display, Formatter};

const DEC_DIGITS: &[u8; 10] = b"0123456789";
const HEX_LOWER: &[u8; 16] = b"0123456789abcdef";
const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Long enough for `-9223372036854775808`.
const MAX_DIGITS: usize = 20;

/// The letter case used for hexadecimal digits above 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Lower,
    Upper,
}

/// The textual representation of an integer, rendered into a fixed stack buffer.
///
/// # Examples
/// ```
/// # use foundation_lib::print::{Case, Digits};
/// assert_eq!(Digits::signed(-42).as_str(), "-42");
/// assert_eq!(Digits::unsigned(0).as_str(), "0");
/// assert_eq!(Digits::hex(0xbeef, Case::Upper).as_str(), "BEEF");
/// ```
#[derive(Clone, Copy)]
pub struct Digits {
    buf: [u8; MAX_DIGITS],
    start: usize,
}

impl Digits {
    /// Renders `value` in decimal.
    pub fn unsigned(value: u64) -> Digits {
        Self::radix(value, DEC_DIGITS)
    }

    /// Renders `value` in decimal with a leading `-` when negative. The magnitude is taken as an
    /// unsigned value, so [`i64::MIN`] is rendered correctly.
    pub fn signed(value: i64) -> Digits {
        let mut digits = Self::unsigned(value.unsigned_abs());
        if value < 0 {
            digits.start -= 1;
            digits.buf[digits.start] = b'-';
        }
        digits
    }

    /// Renders `value` in hexadecimal, without a prefix or leading zeros.
    pub fn hex(value: u64, case: Case) -> Digits {
        Self::radix(value, match case {
            Case::Lower => HEX_LOWER,
            Case::Upper => HEX_UPPER,
        })
    }

    /// Fills the buffer from the back by repeated division by the number of digits.
    fn radix<const BASE: usize>(mut value: u64, digits: &[u8; BASE]) -> Digits {
        let base = BASE as u64;
        let mut buf = [0_u8; MAX_DIGITS];
        let mut start = MAX_DIGITS;

        loop {
            start -= 1;
            buf[start] = digits[(value % base) as usize];
            value /= base;
            if value == 0 {
                break;
            }
        }

        Digits { buf, start }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[self.start..]
    }

    pub fn as_str(&self) -> &str {
        // SAFETY: The buffer is only ever filled with ASCII digits, letters and '-'.
        unsafe { std::str::from_utf8_unchecked(self.as_bytes()) }
    }
}

impl Display for Digits {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Digits {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Digits({:?})", self.as_str())
    }
}
