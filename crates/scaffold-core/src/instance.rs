use crate::metadata::ClassId;
use crate::Value;
use indexmap::IndexMap;

/// A persisted-object record.
///
/// This is the shape the core consumes: scalar values keyed by property name,
/// and related records grouped per association field. A blank instance (no
/// identifier) is one that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    /// The domain class this record belongs to
    pub class: ClassId,

    /// Identifier value; `Null` until persisted
    pub identifier: Value,

    /// Scalar property values
    pub values: IndexMap<String, Value>,

    /// Related records, keyed by association field
    pub related: IndexMap<String, Vec<Instance>>,
}

impl Instance {
    pub fn new(class: ClassId) -> Self {
        Self {
            class,
            identifier: Value::Null,
            values: IndexMap::new(),
            related: IndexMap::new(),
        }
    }

    pub fn with_identifier(mut self, id: impl Into<Value>) -> Self {
        self.identifier = id.into();
        self
    }

    pub fn with_value(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(field.into(), value.into());
    }

    pub fn related(&self, field: &str) -> &[Instance] {
        self.related.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn related_count(&self, field: &str) -> usize {
        self.related.get(field).map(Vec::len).unwrap_or(0)
    }

    /// Appends a related record under an association field.
    ///
    /// This is the "add related instance" accessor the form contractor uses
    /// when pre-populating an inline collection up to its minimum count.
    pub fn add_related(&mut self, field: impl Into<String>, child: Instance) {
        self.related.entry(field.into()).or_default().push(child);
    }
}

/// A label probe: derives a display label from an instance, or declines.
pub type LabelProbe = fn(&Instance) -> Option<String>;

fn probe_title(instance: &Instance) -> Option<String> {
    probe_value(instance, "title")
}

fn probe_name(instance: &Instance) -> Option<String> {
    probe_value(instance, "name")
}

fn probe_value(instance: &Instance, field: &str) -> Option<String> {
    match instance.get(field) {
        Some(Value::Null) | None => None,
        Some(value) => Some(value.to_string()),
    }
}

/// Display-label probes, in priority order. The first probe that produces a
/// label wins; string-conversion of the identifier is the fallback.
pub const LABEL_PROBES: &[LabelProbe] = &[probe_title, probe_name];

/// Derives the human-facing label for an instance.
pub fn display_label(instance: &Instance) -> String {
    for probe in LABEL_PROBES {
        if let Some(label) = probe(instance) {
            return label;
        }
    }
    instance.identifier.to_string()
}

/// Query access to persisted objects.
///
/// Only two operations are needed: enumerate every instance of a class
/// (choice population for the many-to-many filter) and fetch one by
/// identifier (the model ↔ identifier transformer).
pub trait InstanceSource {
    fn all(&self, class: ClassId) -> Vec<Instance>;

    fn find(&self, class: ClassId, id: &Value) -> Option<Instance>;
}

/// An in-memory [`InstanceSource`].
#[derive(Debug, Default)]
pub struct MemorySource {
    instances: IndexMap<ClassId, Vec<Instance>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, instance: Instance) {
        self.instances
            .entry(instance.class)
            .or_default()
            .push(instance);
    }
}

impl InstanceSource for MemorySource {
    fn all(&self, class: ClassId) -> Vec<Instance> {
        self.instances.get(&class).cloned().unwrap_or_default()
    }

    fn find(&self, class: ClassId, id: &Value) -> Option<Instance> {
        self.instances
            .get(&class)?
            .iter()
            .find(|instance| &instance.identifier == id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_prefers_title() {
        let instance = Instance::new(ClassId(0))
            .with_identifier(7)
            .with_value("title", "First post")
            .with_value("name", "ignored");
        assert_eq!(display_label(&instance), "First post");
    }

    #[test]
    fn label_falls_back_to_name() {
        let instance = Instance::new(ClassId(0))
            .with_identifier(7)
            .with_value("name", "tag-a");
        assert_eq!(display_label(&instance), "tag-a");
    }

    #[test]
    fn label_falls_back_to_identifier() {
        let instance = Instance::new(ClassId(0)).with_identifier(7);
        assert_eq!(display_label(&instance), "7");
    }

    #[test]
    fn null_title_declines() {
        let instance = Instance::new(ClassId(0))
            .with_identifier(3)
            .with_value("title", Value::Null)
            .with_value("name", "fallback");
        assert_eq!(display_label(&instance), "fallback");
    }
}
