use super::Error;

/// Error when embedding a sub-form would recurse into a class already on the
/// parent chain.
///
/// Mutually-referencing classes with inline edit modes would otherwise embed
/// each other without bound. The cycle is rejected at build time.
#[derive(Debug)]
pub(super) struct RecursiveEmbedError {
    class: Box<str>,
    field: Box<str>,
}

impl std::error::Error for RecursiveEmbedError {}

impl core::fmt::Display for RecursiveEmbedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "embedding field `{}` would recurse into `{}`, which is already being embedded",
            self.field, self.class
        )
    }
}

impl Error {
    /// Creates a recursive embed error.
    pub fn recursive_embed(class: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::RecursiveEmbed(RecursiveEmbedError {
            class: class.into().into(),
            field: field.into().into(),
        }))
    }

    /// Returns `true` if this error is a recursive embed error.
    pub fn is_recursive_embed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RecursiveEmbed(_))
    }
}
