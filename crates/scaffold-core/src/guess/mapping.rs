use super::{TypeGuess, TypeGuesser};
use crate::metadata::{resolve_path, ClassId, MetadataProvider};

/// Guesses a field's semantic type straight from its persistence mapping.
///
/// A mapped scalar guesses the matching scalar type; a mapped association
/// guesses its cardinality type. Both at high confidence, since the mapping
/// is authoritative for persisted properties. Dotted paths resolve hop by
/// hop against each target class's metadata.
#[derive(Debug, Default)]
pub struct MappingTypeGuesser;

impl MappingTypeGuesser {
    pub fn new() -> Self {
        Self
    }
}

impl TypeGuesser for MappingTypeGuesser {
    fn guess(
        &self,
        provider: &dyn MetadataProvider,
        class: ClassId,
        field: &str,
    ) -> Option<TypeGuess> {
        let resolved = resolve_path(provider, class, field)?;
        Some(TypeGuess::high(resolved.leaf.mapping_type().into()))
    }
}
