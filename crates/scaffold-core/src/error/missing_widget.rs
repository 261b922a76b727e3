use super::Error;

/// Error when a named widget or filter kind does not resolve.
///
/// This occurs when:
/// - A `*_field_widget` override names a kind that is not registered
/// - A type table entry names a kind missing from the registry
///
/// Kinds form a closed set; an unregistered name is a construction-time
/// error, never a silent fallback.
#[derive(Debug)]
pub(super) struct MissingWidgetError {
    name: Box<str>,
}

impl std::error::Error for MissingWidgetError {}

impl core::fmt::Display for MissingWidgetError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "widget kind `{}` is not registered", self.name)
    }
}

impl Error {
    /// Creates a missing widget error for the given kind name.
    pub fn missing_widget(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingWidget(MissingWidgetError {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing widget error.
    pub fn is_missing_widget(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingWidget(_))
    }
}
