use super::ClassId;
use std::fmt;

/// The storage-level type of a mapped scalar property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalarKind {
    Boolean,
    Integer,
    Float,
    Decimal,
    String,
    Text,
    Date,
    Time,
    DateTime,
    Array,
}

/// The cardinality of a mapped association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AssociationKind {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

/// The type of a property as reported by persistence metadata, independent of
/// any user override of the semantic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MappingType {
    Scalar(ScalarKind),
    Association(AssociationKind),
}

/// Persistence metadata for a mapped scalar property.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMapping {
    /// The mapped property name
    pub name: String,

    /// Storage-level type
    pub kind: ScalarKind,

    /// True if the property accepts null
    pub nullable: bool,

    /// True if the property carries a uniqueness constraint
    pub unique: bool,

    /// Maximum length, when the storage type bounds one
    pub length: Option<usize>,

    /// Storage column name, if it differs from the property name
    pub column: Option<String>,
}

/// Persistence metadata for a mapped association.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationMapping {
    /// The mapped property name
    pub name: String,

    /// Association cardinality
    pub kind: AssociationKind,

    /// The class at the far end of the association
    pub target: ClassId,

    /// Property on the target class owning the inverse side, if any
    pub mapped_by: Option<String>,

    /// Storage join column, if the owning side declares one
    pub join_column: Option<String>,
}

impl ScalarKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::String => "string",
            Self::Text => "text",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "datetime",
            Self::Array => "array",
        }
    }
}

impl AssociationKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::OneToOne => "one_to_one",
            Self::OneToMany => "one_to_many",
            Self::ManyToOne => "many_to_one",
            Self::ManyToMany => "many_to_many",
        }
    }

    /// Returns true if the far end of the association is a collection.
    pub fn is_to_many(&self) -> bool {
        matches!(self, Self::OneToMany | Self::ManyToMany)
    }
}

impl MappingType {
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(..))
    }

    pub fn is_association(&self) -> bool {
        matches!(self, Self::Association(..))
    }

    pub fn as_association(&self) -> Option<AssociationKind> {
        match self {
            Self::Association(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Scalar(kind) => kind.name(),
            Self::Association(kind) => kind.name(),
        }
    }
}

impl FieldMapping {
    pub fn new(name: impl Into<String>, kind: ScalarKind) -> Self {
        Self {
            name: name.into(),
            kind,
            nullable: false,
            unique: false,
            length: None,
            column: None,
        }
    }
}

impl AssociationMapping {
    pub fn new(name: impl Into<String>, kind: AssociationKind, target: ClassId) -> Self {
        Self {
            name: name.into(),
            kind,
            target,
            mapped_by: None,
            join_column: None,
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for AssociationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<ScalarKind> for MappingType {
    fn from(kind: ScalarKind) -> Self {
        Self::Scalar(kind)
    }
}

impl From<AssociationKind> for MappingType {
    fn from(kind: AssociationKind) -> Self {
        Self::Association(kind)
    }
}
