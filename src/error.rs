//! Error kinds for the analyzer pipeline.
//!
//! Follows the `kind` + `anyhow::Error` source pattern: callers match on
//! [`SuzumeErrorKind`] while the underlying cause is preserved for display
//! and `?`-propagation.

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SuzumeErrorKind {
    InvalidUtf8,
    NormalizationFailure,
    InvalidLattice,
    DictionaryLoadFailure,
    Io,
    Parse,
    Deserialize,
}

impl SuzumeErrorKind {
    pub fn with_error<E>(self, source: E) -> SuzumeError
    where
        anyhow::Error: From<E>,
    {
        SuzumeError {
            kind: self,
            source: From::from(source),
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("SuzumeError(kind={kind:?}, source={source})")]
pub struct SuzumeError {
    pub kind: SuzumeErrorKind,
    #[source]
    source: anyhow::Error,
}

impl SuzumeError {
    pub fn kind(&self) -> SuzumeErrorKind {
        self.kind
    }
}

pub type SuzumeResult<T> = Result<T, SuzumeError>;
