use super::Error;

/// Error when a field's semantic type could not be determined.
///
/// This occurs when:
/// - No explicit type was declared and no guesser produced a guess
/// - A form field was declared without an explicit type (forms never guess)
///
/// Raised during field normalization; almost always a mistake in the field
/// declaration rather than an end-user input problem.
#[derive(Debug)]
pub(super) struct MissingTypeError {
    class: Box<str>,
    field: Box<str>,
}

impl std::error::Error for MissingTypeError {}

impl core::fmt::Display for MissingTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unable to determine a field type for `{}::{}`",
            self.class, self.field
        )
    }
}

impl Error {
    /// Creates a missing type error for the given class and field.
    pub fn missing_type(class: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingType(MissingTypeError {
            class: class.into().into(),
            field: field.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing type error.
    pub fn is_missing_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingType(_))
    }
}
