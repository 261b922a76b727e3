use super::{AssociationMapping, ClassId, FieldMapping, MappingType, MetadataProvider};

/// The mapping a path resolved to.
#[derive(Debug)]
pub enum MappingRef<'a> {
    Scalar(&'a FieldMapping),
    Association(&'a AssociationMapping),
}

/// Result of resolving a (possibly dotted) field path through persistence
/// metadata.
///
/// For `author.email` on `Post`, `parents` holds the `author` association
/// hop, `class` is the class owning the leaf (`Author`), and `leaf` is the
/// `email` mapping.
#[derive(Debug)]
pub struct ResolvedPath<'a> {
    /// Association hops crossed before the final segment, in order
    pub parents: Vec<&'a AssociationMapping>,

    /// The class owning the final segment
    pub class: ClassId,

    /// The final segment's mapping
    pub leaf: MappingRef<'a>,
}

impl MappingRef<'_> {
    pub fn mapping_type(&self) -> MappingType {
        match self {
            Self::Scalar(mapping) => MappingType::Scalar(mapping.kind),
            Self::Association(mapping) => MappingType::Association(mapping.kind),
        }
    }
}

/// Resolve a field path against a class's metadata, following association
/// hops for dotted names.
///
/// Returns `None` if:
/// - The class carries no metadata
/// - A non-final segment is not a mapped association
/// - The final segment is not mapped at all (a virtual field)
pub fn resolve_path<'a>(
    provider: &'a dyn MetadataProvider,
    class: ClassId,
    path: &str,
) -> Option<ResolvedPath<'a>> {
    let mut current = provider.metadata(class)?;
    let mut parents = Vec::new();

    let mut segments = path.split('.').peekable();
    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            let leaf = if let Some(mapping) = current.field_mapping(segment) {
                MappingRef::Scalar(mapping)
            } else if let Some(mapping) = current.association_mapping(segment) {
                MappingRef::Association(mapping)
            } else {
                return None;
            };

            return Some(ResolvedPath {
                parents,
                class: current.class,
                leaf,
            });
        }

        // Every intermediate segment must be an association hop
        let hop = current.association_mapping(segment)?;
        parents.push(hop);
        current = provider.metadata(hop.target)?;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{AssociationKind, MetadataCatalog, ScalarKind};

    fn catalog() -> (MetadataCatalog, ClassId, ClassId) {
        let mut catalog = MetadataCatalog::new();
        let post = catalog.register("Post");
        let author = catalog.register("Author");

        catalog
            .class_mut(post)
            .map_field(FieldMapping::new("title", ScalarKind::String))
            .map_association(AssociationMapping::new(
                "author",
                AssociationKind::ManyToOne,
                author,
            ));
        catalog
            .class_mut(author)
            .map_field(FieldMapping::new("email", ScalarKind::String));

        (catalog, post, author)
    }

    #[test]
    fn resolve_plain_field() {
        let (catalog, post, _) = catalog();
        let resolved = resolve_path(&catalog, post, "title").unwrap();
        assert!(resolved.parents.is_empty());
        assert_eq!(resolved.class, post);
        assert!(matches!(resolved.leaf, MappingRef::Scalar(_)));
    }

    #[test]
    fn resolve_dotted_path() {
        let (catalog, post, author) = catalog();
        let resolved = resolve_path(&catalog, post, "author.email").unwrap();
        assert_eq!(resolved.parents.len(), 1);
        assert_eq!(resolved.parents[0].name, "author");
        assert_eq!(resolved.class, author);
        assert!(matches!(resolved.leaf, MappingRef::Scalar(_)));
    }

    #[test]
    fn unmapped_leaf_is_none() {
        let (catalog, post, _) = catalog();
        assert!(resolve_path(&catalog, post, "slug").is_none());
    }

    #[test]
    fn scalar_hop_is_none() {
        let (catalog, post, _) = catalog();
        assert!(resolve_path(&catalog, post, "title.length").is_none());
    }
}
