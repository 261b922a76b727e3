use super::FieldOptions;
use crate::metadata::{AssociationKind, AssociationMapping, ClassId, FieldMapping, MappingType};
use crate::{AdminId, FieldType};

/// Describes one field, in one display context.
///
/// A description starts as a raw field request and is normalized by exactly
/// one builder: persistence metadata is merged in, the semantic type is
/// resolved, defaults are filled, and any association admin is bound. After
/// it is published to a registry it is never mutated again by this core.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescription {
    /// Logical field key, unique within a context's registry
    pub name: String,

    /// Underlying persisted-object property name
    pub field_name: String,

    /// Semantic type; mandatory after normalization
    pub ty: Option<FieldType>,

    /// The type as reported by persistence metadata, independent of any user
    /// override of `ty`
    pub mapping_type: Option<MappingType>,

    /// Scalar-property metadata, when the property is a mapped scalar
    pub field_mapping: Option<FieldMapping>,

    /// Association metadata, when the property is a mapped relation
    pub association_mapping: Option<AssociationMapping>,

    /// Association hops crossed when the field is reached through nested
    /// objects, in order
    pub parent_association_mappings: Vec<AssociationMapping>,

    /// Rendering and behavior options
    pub options: FieldOptions,

    /// Resolved rendering template identifier
    pub template: Option<String>,

    /// The owning admin, set once during normalization
    pub admin: Option<AdminId>,

    /// The delegated admin for the related class, when the field describes an
    /// association
    pub association_admin: Option<AdminId>,
}

impl FieldDescription {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        // The property name is the final path segment for dotted names
        let field_name = name.rsplit('.').next().unwrap_or(&name).to_string();

        Self {
            name,
            field_name,
            ty: None,
            mapping_type: None,
            field_mapping: None,
            association_mapping: None,
            parent_association_mappings: Vec::new(),
            options: FieldOptions::new(),
            template: None,
            admin: None,
            association_admin: None,
        }
    }

    pub fn ty(&self) -> Option<FieldType> {
        self.ty
    }

    #[track_caller]
    pub fn expect_ty(&self) -> FieldType {
        match self.ty {
            Some(ty) => ty,
            None => panic!("field `{}` has no resolved type", self.name),
        }
    }

    /// True if persistence metadata reports this field as an association.
    pub fn is_association(&self) -> bool {
        matches!(self.mapping_type, Some(MappingType::Association(..)))
    }

    pub fn association_kind(&self) -> Option<AssociationKind> {
        self.mapping_type.and_then(|mapping| mapping.as_association())
    }

    /// True if the field has no persistence mapping at all (computed,
    /// display-only).
    pub fn is_virtual(&self) -> bool {
        self.field_mapping.is_none() && self.association_mapping.is_none()
    }

    /// The class at the far end of the association, if any.
    pub fn target_class(&self) -> Option<ClassId> {
        self.association_mapping.as_ref().map(|mapping| mapping.target)
    }

    /// Records scalar metadata for the field.
    ///
    /// Clears any association mapping; a property is one or the other.
    pub fn apply_field_mapping(&mut self, mapping: FieldMapping) {
        self.mapping_type = Some(MappingType::Scalar(mapping.kind));
        self.field_mapping = Some(mapping);
        self.association_mapping = None;
    }

    /// Records association metadata for the field.
    ///
    /// Clears any scalar mapping; a property is one or the other.
    pub fn apply_association_mapping(&mut self, mapping: AssociationMapping) {
        self.mapping_type = Some(MappingType::Association(mapping.kind));
        self.association_mapping = Some(mapping);
        self.field_mapping = None;
    }

    pub fn code(&self) -> Option<&str> {
        self.options.code.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.options.label.as_deref()
    }

    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }
}
