use crate::metadata::{AssociationKind, MappingType, ScalarKind};
use crate::Error;
use std::fmt;
use std::str::FromStr;

/// The semantic type of a field, in a display context.
///
/// This is what template lookup and widget selection key on. It usually
/// mirrors the persistence mapping type, but a field declaration may override
/// it, and virtual fields carry one without any mapping at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldType {
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

    /// The synthesized list action column
    Action,

    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl FieldType {
    /// Every field type, in declaration order. Template tables are seeded
    /// from this list.
    pub const ALL: &'static [FieldType] = &[
        Self::Boolean,
        Self::Integer,
        Self::Float,
        Self::Decimal,
        Self::String,
        Self::Text,
        Self::Date,
        Self::Time,
        Self::DateTime,
        Self::Array,
        Self::Action,
        Self::OneToOne,
        Self::OneToMany,
        Self::ManyToOne,
        Self::ManyToMany,
    ];

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
            Self::Action => "action",
            Self::OneToOne => "one_to_one",
            Self::OneToMany => "one_to_many",
            Self::ManyToOne => "many_to_one",
            Self::ManyToMany => "many_to_many",
        }
    }

    pub fn is_association(&self) -> bool {
        matches!(
            self,
            Self::OneToOne | Self::OneToMany | Self::ManyToOne | Self::ManyToMany
        )
    }

    pub fn as_association(&self) -> Option<AssociationKind> {
        match self {
            Self::OneToOne => Some(AssociationKind::OneToOne),
            Self::OneToMany => Some(AssociationKind::OneToMany),
            Self::ManyToOne => Some(AssociationKind::ManyToOne),
            Self::ManyToMany => Some(AssociationKind::ManyToMany),
            _ => None,
        }
    }
}

impl From<ScalarKind> for FieldType {
    fn from(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::Boolean => Self::Boolean,
            ScalarKind::Integer => Self::Integer,
            ScalarKind::Float => Self::Float,
            ScalarKind::Decimal => Self::Decimal,
            ScalarKind::String => Self::String,
            ScalarKind::Text => Self::Text,
            ScalarKind::Date => Self::Date,
            ScalarKind::Time => Self::Time,
            ScalarKind::DateTime => Self::DateTime,
            ScalarKind::Array => Self::Array,
        }
    }
}

impl From<AssociationKind> for FieldType {
    fn from(kind: AssociationKind) -> Self {
        match kind {
            AssociationKind::OneToOne => Self::OneToOne,
            AssociationKind::OneToMany => Self::OneToMany,
            AssociationKind::ManyToOne => Self::ManyToOne,
            AssociationKind::ManyToMany => Self::ManyToMany,
        }
    }
}

impl From<MappingType> for FieldType {
    fn from(mapping: MappingType) -> Self {
        match mapping {
            MappingType::Scalar(kind) => kind.into(),
            MappingType::Association(kind) => kind.into(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|ty| ty.name() == s)
            .ok_or_else(|| crate::err!("unknown field type `{s}`"))
    }
}
