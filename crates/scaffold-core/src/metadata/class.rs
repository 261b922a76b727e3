use super::{AssociationMapping, FieldMapping, MappingType};
use indexmap::IndexMap;
use std::fmt;

/// Identifies a persisted domain class within the metadata catalog.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassId(pub usize);

/// Persistence metadata for one domain class.
#[derive(Debug, Clone)]
pub struct ClassMetadata {
    /// The class this metadata describes
    pub class: ClassId,

    /// Class name, as surfaced in diagnostics
    pub name: String,

    /// Identifier property names, in declaration order
    pub identifier: Vec<String>,

    /// Mapped scalar properties, keyed by property name
    pub field_mappings: IndexMap<String, FieldMapping>,

    /// Mapped associations, keyed by property name
    pub association_mappings: IndexMap<String, AssociationMapping>,
}

impl ClassMetadata {
    pub fn new(class: ClassId, name: impl Into<String>) -> Self {
        Self {
            class,
            name: name.into(),
            identifier: vec!["id".to_string()],
            field_mappings: IndexMap::new(),
            association_mappings: IndexMap::new(),
        }
    }

    pub fn field_mapping(&self, name: &str) -> Option<&FieldMapping> {
        self.field_mappings.get(name)
    }

    pub fn association_mapping(&self, name: &str) -> Option<&AssociationMapping> {
        self.association_mappings.get(name)
    }

    /// The mapping type for a property, if the property is mapped at all.
    pub fn mapping_type(&self, name: &str) -> Option<MappingType> {
        if let Some(mapping) = self.field_mappings.get(name) {
            return Some(MappingType::Scalar(mapping.kind));
        }
        self.association_mappings
            .get(name)
            .map(|mapping| MappingType::Association(mapping.kind))
    }

    /// The first identifier property name.
    pub fn identifier_field(&self) -> Option<&str> {
        self.identifier.first().map(String::as_str)
    }

    /// Registers a scalar mapping under its property name.
    pub fn map_field(&mut self, mapping: FieldMapping) -> &mut Self {
        self.field_mappings.insert(mapping.name.clone(), mapping);
        self
    }

    /// Registers an association mapping under its property name.
    pub fn map_association(&mut self, mapping: AssociationMapping) -> &mut Self {
        self.association_mappings
            .insert(mapping.name.clone(), mapping);
        self
    }
}

impl From<&Self> for ClassId {
    fn from(src: &Self) -> Self {
        *src
    }
}

impl From<&ClassMetadata> for ClassId {
    fn from(value: &ClassMetadata) -> Self {
        value.class
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ClassId({})", self.0)
    }
}
