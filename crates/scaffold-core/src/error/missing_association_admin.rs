use super::Error;

/// Error when an association field requires delegation but no association
/// admin is bound.
///
/// Inline embeds and embedded lists delegate widget construction to the
/// admin of the related class. Building such a field without a bound
/// association admin is a hard error; falling back to a plain scalar widget
/// would silently lose the relation.
#[derive(Debug)]
pub(super) struct MissingAssociationAdminError {
    field: Box<str>,
}

impl std::error::Error for MissingAssociationAdminError {}

impl core::fmt::Display for MissingAssociationAdminError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no association admin bound for field `{}`", self.field)
    }
}

impl Error {
    /// Creates a missing association admin error for the given field.
    pub fn missing_association_admin(field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingAssociationAdmin(
            MissingAssociationAdminError {
                field: field.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a missing association admin error.
    pub fn is_missing_association_admin(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingAssociationAdmin(_))
    }
}
