use super::{FieldDescription, FieldOptions};
use crate::FieldType;

/// A declarative field request: the raw input a builder normalizes into a
/// [`FieldDescription`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRequest {
    pub name: String,

    /// Explicit semantic type, when declared
    pub ty: Option<FieldType>,

    pub options: FieldOptions,
}

impl FieldRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            options: FieldOptions::new(),
        }
    }

    pub fn typed(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
            options: FieldOptions::new(),
        }
    }

    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }

    /// Seeds an unnormalized description from this request.
    pub fn into_description(self) -> FieldDescription {
        let mut desc = FieldDescription::new(self.name);
        desc.ty = self.ty;
        desc.options = self.options;
        desc
    }
}

impl From<&str> for FieldRequest {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
