use super::Error;

/// Error when a field's type has no entry in the filter type table and no
/// override was supplied.
#[derive(Debug)]
pub(super) struct UnknownFilterTypeError {
    field: Box<str>,
    ty: Box<str>,
}

impl std::error::Error for UnknownFilterTypeError {}

impl core::fmt::Display for UnknownFilterTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "no filter registered for type `{}` (field `{}`)",
            self.ty, self.field
        )
    }
}

impl Error {
    /// Creates an unknown filter type error.
    pub fn unknown_filter_type(field: impl Into<String>, ty: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownFilterType(UnknownFilterTypeError {
            field: field.into().into(),
            ty: ty.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown filter type error.
    pub fn is_unknown_filter_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownFilterType(_))
    }
}
