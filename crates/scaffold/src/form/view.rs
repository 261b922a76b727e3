use super::{ModelToIdTransformer, Widget};
use indexmap::IndexMap;
use scaffold_core::metadata::ClassId;
use scaffold_core::FieldDescription;

/// One editable field: its finished description, the widget that edits it,
/// and the model ↔ identifier transformer for detached association widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub description: FieldDescription,
    pub widget: Widget,
    pub transformer: Option<ModelToIdTransformer>,
}

/// The ordered set of editable fields for one class.
///
/// Embedded sub-forms are `FormView`s of their own, nested inside a
/// collection widget.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    class: ClassId,
    fields: IndexMap<String, FormField>,
}

impl FormView {
    pub fn new(class: ClassId) -> Self {
        Self {
            class,
            fields: IndexMap::new(),
        }
    }

    pub fn class(&self) -> ClassId {
        self.class
    }

    pub fn add(&mut self, field: FormField) {
        self.fields.insert(field.description.name.clone(), field);
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        self.fields.values()
    }
}
