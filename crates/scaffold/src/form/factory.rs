use super::Widget;
use scaffold_core::describe::FieldOptions;
use scaffold_core::metadata::{ClassId, MappingType, MetadataProvider, ScalarKind};
use scaffold_core::{Error, Result};

/// The generic field factory: the fallback construction path when no
/// explicit widget override or type table entry applies.
pub trait FieldFactory {
    fn instance(
        &self,
        provider: &dyn MetadataProvider,
        class: ClassId,
        field: &str,
        options: &FieldOptions,
    ) -> Result<Widget>;
}

/// A [`FieldFactory`] keyed on persistence metadata.
///
/// Mapped scalars get the widget matching their storage kind; mapped
/// associations get a model select over the target class. A field with no
/// mapping cannot be built generically.
#[derive(Debug, Default)]
pub struct MappingFieldFactory;

impl MappingFieldFactory {
    pub fn new() -> Self {
        Self
    }
}

impl FieldFactory for MappingFieldFactory {
    fn instance(
        &self,
        provider: &dyn MetadataProvider,
        class: ClassId,
        field: &str,
        _options: &FieldOptions,
    ) -> Result<Widget> {
        let metadata = provider.metadata(class);

        match metadata.and_then(|metadata| metadata.mapping_type(field)) {
            Some(MappingType::Scalar(kind)) => Ok(scalar_widget(kind)),
            Some(MappingType::Association(kind)) => {
                let target = metadata
                    .and_then(|metadata| metadata.association_mapping(field))
                    .map(|mapping| mapping.target)
                    .expect("mapping type said association");

                Ok(Widget::ModelSelect {
                    class: target,
                    multiple: kind.is_to_many(),
                })
            }
            None => Err(Error::unknown_form_type(field, "virtual")),
        }
    }
}

fn scalar_widget(kind: ScalarKind) -> Widget {
    match kind {
        ScalarKind::Boolean => Widget::Checkbox,
        ScalarKind::Integer => Widget::Integer,
        ScalarKind::Float | ScalarKind::Decimal => Widget::Number,
        ScalarKind::String => Widget::Text,
        ScalarKind::Text => Widget::Textarea,
        ScalarKind::Date => Widget::Date,
        ScalarKind::Time => Widget::Time,
        ScalarKind::DateTime => Widget::DateTime,
        ScalarKind::Array => Widget::Choice { choices: Vec::new() },
    }
}
