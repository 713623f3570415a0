/// A single argument consumed by a conversion specifier.
///
/// | Variant | Specifiers |
/// |-|-|
/// | `Char` | `%c` |
/// | `Str` | `%s` |
/// | `Ptr` | `%p` |
/// | `Int` | `%d`, `%i` |
/// | `Uint` | `%u`, `%x`, `%X` |
///
/// Arguments are usually built with [`From`], which the formatting macros do implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    Char(char),
    /// A string which may be absent. [`None`] renders as `(null)`.
    Str(Option<&'a str>),
    /// A pointer address. The null address renders as `(nil)`.
    Ptr(usize),
    Int(i32),
    Uint(u32),
}

impl Arg<'_> {
    /// The name of the variant, for error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Arg::Char(_) => "Char",
            Arg::Str(_) => "Str",
            Arg::Ptr(_) => "Ptr",
            Arg::Int(_) => "Int",
            Arg::Uint(_) => "Uint",
        }
    }
}

impl From<char> for Arg<'_> {
    fn from(value: char) -> Self {
        Arg::Char(value)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg::Str(Some(value))
    }
}

impl<'a> From<Option<&'a str>> for Arg<'a> {
    fn from(value: Option<&'a str>) -> Self {
        Arg::Str(value)
    }
}

impl<T: ?Sized> From<*const T> for Arg<'_> {
    fn from(value: *const T) -> Self {
        Arg::Ptr(value.cast::<()>().addr())
    }
}

impl<T: ?Sized> From<*mut T> for Arg<'_> {
    fn from(value: *mut T) -> Self {
        Arg::Ptr(value.cast::<()>().addr())
    }
}

impl From<i32> for Arg<'_> {
    fn from(value: i32) -> Self {
        Arg::Int(value)
    }
}

impl From<u32> for Arg<'_> {
    fn from(value: u32) -> Self {
        Arg::Uint(value)
    }
}
