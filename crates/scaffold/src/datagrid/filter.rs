use super::{Criterion, Operator};
use indexmap::IndexMap;
use scaffold_core::{Error, FieldDescription, Result, Value};

/// Constructor for a registered filter kind.
pub type FilterCtor = fn(FieldDescription) -> Filter;

/// The concrete behavior of a filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterKind {
    /// Substring match against a text column
    Text,

    /// Exact match against a numeric column
    Number,

    Boolean,
    Date,
    Time,
    DateTime,

    /// Exact match against the target class's identifier; selected for
    /// many-to-one associations
    Identifier,

    /// Membership in a fixed choice set; selected for many-to-many
    /// associations, with one `(identifier, label)` entry per instance of
    /// the target class
    Choice { choices: Vec<(Value, String)> },
}

/// A filter bound to one field of a datagrid.
#[derive(Debug, Clone)]
pub struct Filter {
    /// Field name the filter is keyed by on the datagrid
    pub name: String,

    pub kind: FilterKind,

    /// The finished description the filter was constructed with
    pub description: FieldDescription,

    /// Current filter value, if any
    pub value: Option<Value>,
}

impl Filter {
    pub fn new(kind: FilterKind, description: FieldDescription) -> Self {
        Self {
            name: description.name.clone(),
            value: description.options.filter_value.clone(),
            kind,
            description,
        }
    }

    pub fn text(description: FieldDescription) -> Self {
        Self::new(FilterKind::Text, description)
    }

    pub fn number(description: FieldDescription) -> Self {
        Self::new(FilterKind::Number, description)
    }

    pub fn boolean(description: FieldDescription) -> Self {
        Self::new(FilterKind::Boolean, description)
    }

    pub fn date(description: FieldDescription) -> Self {
        Self::new(FilterKind::Date, description)
    }

    pub fn time(description: FieldDescription) -> Self {
        Self::new(FilterKind::Time, description)
    }

    pub fn datetime(description: FieldDescription) -> Self {
        Self::new(FilterKind::DateTime, description)
    }

    pub fn identifier(description: FieldDescription) -> Self {
        Self::new(FilterKind::Identifier, description)
    }

    pub fn choice(description: FieldDescription, choices: Vec<(Value, String)>) -> Self {
        Self::new(FilterKind::Choice { choices }, description)
    }

    fn empty_choice(description: FieldDescription) -> Self {
        Self::choice(description, Vec::new())
    }

    /// True if the filter currently holds a value.
    pub fn is_active(&self) -> bool {
        matches!(&self.value, Some(value) if !value.is_null())
    }

    /// The predicate this filter contributes to the query, if active.
    pub fn criterion(&self) -> Option<Criterion> {
        let value = match &self.value {
            Some(value) if !value.is_null() => value.clone(),
            _ => return None,
        };

        let op = match &self.kind {
            FilterKind::Text => Operator::Contains,
            FilterKind::Choice { .. } => Operator::In,
            _ => Operator::Eq,
        };

        Some(Criterion {
            field: self.description.field_name.clone(),
            op,
            value,
        })
    }
}

/// The closed set of filter kinds, keyed by name.
///
/// A type table or `filter_field_widget` override resolves through here; an
/// unregistered name is a construction-time configuration error, never a
/// silent fallback.
#[derive(Debug, Clone)]
pub struct FilterRegistry {
    ctors: IndexMap<String, FilterCtor>,
}

impl FilterRegistry {
    pub fn with_defaults() -> Self {
        let mut registry = Self {
            ctors: IndexMap::new(),
        };
        registry
            .register("text", Filter::text)
            .register("number", Filter::number)
            .register("boolean", Filter::boolean)
            .register("date", Filter::date)
            .register("time", Filter::time)
            .register("datetime", Filter::datetime)
            .register("choice", Filter::empty_choice);
        registry
    }

    pub fn register(&mut self, name: impl Into<String>, ctor: FilterCtor) -> &mut Self {
        self.ctors.insert(name.into(), ctor);
        self
    }

    pub fn resolve(&self, name: &str) -> Result<FilterCtor> {
        self.ctors
            .get(name)
            .copied()
            .ok_or_else(|| Error::missing_widget(name))
    }
}
