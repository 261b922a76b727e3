use indexmap::IndexMap;
use scaffold_core::metadata::{AssociationKind, MappingType};
use scaffold_core::FieldType;

/// An immutable template lookup table for one display context.
///
/// Seeded per context with `<context>_<type>` identifiers; an
/// association-kind entry always wins over the generic per-type entry, so a
/// field whose mapping is an association renders with the association
/// template even when its semantic type was overridden. Tables are
/// constructor-injected into builders; overrides happen per instance, never
/// through ambient state.
#[derive(Debug, Clone)]
pub struct TemplateMap {
    types: IndexMap<FieldType, String>,
    associations: IndexMap<AssociationKind, String>,
}

const ASSOCIATION_KINDS: &[AssociationKind] = &[
    AssociationKind::OneToOne,
    AssociationKind::OneToMany,
    AssociationKind::ManyToOne,
    AssociationKind::ManyToMany,
];

impl TemplateMap {
    /// Builds the default table for a context prefix.
    fn with_prefix(prefix: &str) -> Self {
        let types = FieldType::ALL
            .iter()
            .map(|ty| (*ty, format!("{prefix}_{}", ty.name())))
            .collect();
        let associations = ASSOCIATION_KINDS
            .iter()
            .map(|kind| (*kind, format!("{prefix}_{}", kind.name())))
            .collect();

        Self {
            types,
            associations,
        }
    }

    pub fn for_list() -> Self {
        Self::with_prefix("list")
    }

    pub fn for_show() -> Self {
        Self::with_prefix("show")
    }

    pub fn for_filter() -> Self {
        Self::with_prefix("filter")
    }

    pub fn for_form() -> Self {
        Self::with_prefix("form")
    }

    /// Replaces the template for a semantic type.
    pub fn with_type(mut self, ty: FieldType, template: impl Into<String>) -> Self {
        self.types.insert(ty, template.into());
        self
    }

    /// Replaces the template for an association kind.
    pub fn with_association(mut self, kind: AssociationKind, template: impl Into<String>) -> Self {
        self.associations.insert(kind, template.into());
        self
    }

    /// Resolves the template for a field.
    ///
    /// The association-kind entry takes precedence, keyed by the mapping type
    /// when present (the metadata's word beats a semantic-type override),
    /// falling back to the semantic type when it is itself an association.
    pub fn resolve(&self, ty: FieldType, mapping: Option<MappingType>) -> Option<&str> {
        let kind = mapping
            .and_then(|mapping| mapping.as_association())
            .or_else(|| ty.as_association());

        if let Some(kind) = kind {
            if let Some(template) = self.associations.get(&kind) {
                return Some(template.as_str());
            }
        }

        self.types.get(&ty).map(String::as_str)
    }
}
