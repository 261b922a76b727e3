use super::{ClassId, ClassMetadata};
use indexmap::IndexMap;

/// Read access to persistence metadata, keyed by class.
///
/// The builders only ever ask two questions: does a class carry metadata,
/// and what does that metadata say. Implementations are synchronous; their
/// latency is the caller's concern.
pub trait MetadataProvider {
    fn has_metadata(&self, class: ClassId) -> bool;

    fn metadata(&self, class: ClassId) -> Option<&ClassMetadata>;
}

/// An in-memory [`MetadataProvider`].
///
/// Classes are registered up front and their mappings filled in afterwards,
/// since association mappings need the target's `ClassId` to exist first.
#[derive(Debug, Default)]
pub struct MetadataCatalog {
    classes: IndexMap<ClassId, ClassMetadata>,
}

impl MetadataCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a class and returns its id.
    pub fn register(&mut self, name: impl Into<String>) -> ClassId {
        let id = ClassId(self.classes.len());
        self.classes.insert(id, ClassMetadata::new(id, name));
        id
    }

    /// Get a class's metadata by id.
    #[track_caller]
    pub fn class(&self, id: impl Into<ClassId>) -> &ClassMetadata {
        self.classes.get(&id.into()).expect("invalid class ID")
    }

    /// Get a class's metadata by id, mutably.
    #[track_caller]
    pub fn class_mut(&mut self, id: impl Into<ClassId>) -> &mut ClassMetadata {
        self.classes.get_mut(&id.into()).expect("invalid class ID")
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassMetadata> {
        self.classes.values()
    }
}

impl MetadataProvider for MetadataCatalog {
    fn has_metadata(&self, class: ClassId) -> bool {
        self.classes.contains_key(&class)
    }

    fn metadata(&self, class: ClassId) -> Option<&ClassMetadata> {
        self.classes.get(&class)
    }
}
