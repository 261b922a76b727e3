use super::FormView;
use indexmap::IndexMap;
use scaffold_core::metadata::ClassId;
use scaffold_core::{Error, FieldDescription, Result, Value};

/// Constructor for a registered widget kind.
pub type WidgetCtor = fn(&FieldDescription) -> Widget;

/// An editable-field widget.
///
/// The widget toolkit itself is not this crate's concern; these variants are
/// the normalized description the rendering layer consumes.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Text,
    Textarea,
    Integer,
    Number,
    Checkbox,
    Date,
    Time,
    DateTime,

    /// A fixed choice set
    Choice { choices: Vec<(Value, String)> },

    /// A select over instances of a related class
    ModelSelect { class: ClassId, multiple: bool },

    /// A plain textual reference to a related object (`edit == "list"`)
    ModelReference { class: ClassId },

    /// An embedded sub-form; repeatable for to-many collections
    Collection { form: Box<FormView>, repeatable: bool },
}

/// The closed set of widget kinds, keyed by name.
///
/// A type table or `form_field_widget` override resolves through here; an
/// unregistered name is a construction-time configuration error.
#[derive(Debug, Clone)]
pub struct WidgetRegistry {
    ctors: IndexMap<String, WidgetCtor>,
}

impl WidgetRegistry {
    pub fn with_defaults() -> Self {
        let mut registry = Self {
            ctors: IndexMap::new(),
        };
        registry
            .register("text", |_| Widget::Text)
            .register("textarea", |_| Widget::Textarea)
            .register("integer", |_| Widget::Integer)
            .register("number", |_| Widget::Number)
            .register("checkbox", |_| Widget::Checkbox)
            .register("date", |_| Widget::Date)
            .register("time", |_| Widget::Time)
            .register("datetime", |_| Widget::DateTime)
            .register("choice", |_| Widget::Choice { choices: Vec::new() });
        registry
    }

    pub fn register(&mut self, name: impl Into<String>, ctor: WidgetCtor) -> &mut Self {
        self.ctors.insert(name.into(), ctor);
        self
    }

    pub fn resolve(&self, name: &str) -> Result<WidgetCtor> {
        self.ctors
            .get(name)
            .copied()
            .ok_or_else(|| Error::missing_widget(name))
    }
}
