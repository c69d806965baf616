//! Crate-wide error type.
//!
//! Loader and layout failures are fatal and abort the whole invocation;
//! recoverable input problems (a household with the wrong parent count)
//! are logged and skipped instead of surfacing here.

/// Errors raised while loading a family description or laying out a tree.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A lookup query matched nobody, neither by id nor by display name.
    #[error("cannot find person \"{0}\"")]
    PersonNotFound(String),

    /// No starting person could be chosen automatically.
    #[error("no starting person found: every individual has recorded parents")]
    NoStartingPerson,

    /// The layout places a person's unions around them, one on each side at
    /// most; a third union has no side left to go to.
    #[error("person \"{name}\" has {count} spousal unions; drawing more than 2 is not implemented")]
    TooManyUnions { name: String, count: usize },

    /// A JSON household referenced an id absent from `individuals`.
    #[error("household references unknown person \"{0}\"")]
    UnknownPersonRef(String),

    /// Input format name not recognized.
    #[error("unsupported input format \"{0}\"; use json or text")]
    UnsupportedFormat(String),

    /// Tree type name not recognized.
    #[error("unknown tree type \"{0}\"; use ascending, descending, or both")]
    UnknownTreeKind(String),

    /// Malformed JSON input (syntax error or missing required keys).
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for Result with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
