use super::FieldDescription;
use indexmap::IndexMap;
use std::fmt;

/// A display context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Context {
    List,
    Filter,
    Form,
    Show,
}

impl Context {
    pub const ALL: &'static [Context] = &[Self::List, Self::Filter, Self::Form, Self::Show];

    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Filter => "filter",
            Self::Form => "form",
            Self::Show => "show",
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered collection of finished field descriptions for one context.
///
/// Insertion order is rendering order. Re-adding a name replaces the
/// description in place, so re-running a declaration is idempotent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldDescriptionCollection {
    fields: IndexMap<String, FieldDescription>,
}

impl FieldDescriptionCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, description: FieldDescription) {
        self.fields.insert(description.name.clone(), description);
    }

    pub fn get(&self, name: &str) -> Option<&FieldDescription> {
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

    pub fn iter(&self) -> impl Iterator<Item = &FieldDescription> {
        self.fields.values()
    }
}

/// Per-context collections of field descriptions, owned by one admin.
///
/// Each context is published exactly once, whole: a failed build publishes
/// nothing, so a partially-normalized registry is never observable. Not
/// designed for concurrent writers.
#[derive(Debug, Clone, Default)]
pub struct FieldDescriptionRegistry {
    list: FieldDescriptionCollection,
    filter: FieldDescriptionCollection,
    form: FieldDescriptionCollection,
    show: FieldDescriptionCollection,
}

impl FieldDescriptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn context(&self, context: Context) -> &FieldDescriptionCollection {
        match context {
            Context::List => &self.list,
            Context::Filter => &self.filter,
            Context::Form => &self.form,
            Context::Show => &self.show,
        }
    }

    /// Replaces a context's collection wholesale.
    pub fn publish(&mut self, context: Context, fields: FieldDescriptionCollection) {
        let slot = match context {
            Context::List => &mut self.list,
            Context::Filter => &mut self.filter,
            Context::Form => &mut self.form,
            Context::Show => &mut self.show,
        };
        *slot = fields;
    }

    pub fn get(&self, context: Context, name: &str) -> Option<&FieldDescription> {
        self.context(context).get(name)
    }

    pub fn has(&self, context: Context, name: &str) -> bool {
        self.context(context).has(name)
    }
}
