//! Contains the Error and Result type used throughout the crate.

/// An error while reading or writing NBT.
#[derive(Debug)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
    source: Option<std::io::Error>,
}

/// The category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The file to load does not exist. Reported before any decompression is
    /// attempted.
    NotFound,

    /// The data was readable but is not valid NBT. This covers invalid tags,
    /// a root that is not a compound, negative lengths, non-unicode strings,
    /// and data that ends part way through a value.
    Format,

    /// The underlying reader or writer failed, including corrupt compressed
    /// streams.
    Io,

    /// A save was requested for a file that has no root compound.
    NoRoot,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn is_format(&self) -> bool {
        self.kind == ErrorKind::Format
    }

    fn new(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind,
            source: None,
        }
    }

    pub(crate) fn format(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Format, msg)
    }

    pub(crate) fn invalid_tag(tag: u8) -> Self {
        Self::format(format!("invalid nbt tag value: {}", tag))
    }

    pub(crate) fn unexpected_end() -> Self {
        Self::format("invalid nbt: end tag outside of a compound")
    }

    pub(crate) fn no_root_compound(first: Option<u8>) -> Self {
        match first {
            Some(tag) => Self::format(format!(
                "invalid nbt: stream does not begin with a Compound (found tag {})",
                tag
            )),
            None => Self::format("invalid nbt: stream does not begin with a Compound (empty)"),
        }
    }

    pub(crate) fn negative_len(len: i32) -> Self {
        Self::format(format!("invalid nbt: negative length {}", len))
    }

    pub(crate) fn nonunicode_string(data: &[u8]) -> Self {
        Self::format(format!(
            "invalid nbt string: nonunicode: {}",
            String::from_utf8_lossy(data)
        ))
    }

    pub(crate) fn unexpected_eof() -> Self {
        Self::format("eof: unexpectedly ran out of input")
    }

    pub(crate) fn too_deep(depth: usize) -> Self {
        Self::format(format!("invalid nbt: nesting deeper than {}", depth))
    }

    pub(crate) fn not_found(path: &std::path::Path) -> Self {
        Self::new(
            ErrorKind::NotFound,
            format!("could not find nbt file: {}", path.display()),
        )
    }

    pub(crate) fn no_root() -> Self {
        Self::new(ErrorKind::NoRoot, "nothing to save: file has no root compound")
    }

    /// Wrap an IO error as [`ErrorKind::Io`] regardless of its IO kind. Used
    /// where an early EOF means the transport is broken rather than the NBT.
    pub(crate) fn io(e: std::io::Error) -> Self {
        Self {
            msg: format!("io error: {}", e),
            kind: ErrorKind::Io,
            source: Some(e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            // Running out of input while decoding is a truncated value.
            std::io::ErrorKind::UnexpectedEof => Self::unexpected_eof(),
            _ => Self::io(e),
        }
    }
}
