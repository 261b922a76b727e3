use super::Error;

/// Error when a field's type has no entry in the form type table and no
/// override was supplied, and the generic field factory could not build a
/// widget either.
#[derive(Debug)]
pub(super) struct UnknownFormTypeError {
    field: Box<str>,
    ty: Box<str>,
}

impl std::error::Error for UnknownFormTypeError {}

impl core::fmt::Display for UnknownFormTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "no form widget registered for type `{}` (field `{}`)",
            self.ty, self.field
        )
    }
}

impl Error {
    /// Creates an unknown form type error.
    pub fn unknown_form_type(field: impl Into<String>, ty: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownFormType(UnknownFormTypeError {
            field: field.into().into(),
            ty: ty.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown form type error.
    pub fn is_unknown_form_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownFormType(_))
    }
}
