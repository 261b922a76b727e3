mod catalog;
pub use catalog::{MetadataCatalog, MetadataProvider};

mod class;
pub use class::{ClassId, ClassMetadata};

mod mapping;
pub use mapping::{AssociationKind, AssociationMapping, FieldMapping, MappingType, ScalarKind};

mod path;
pub use path::{resolve_path, MappingRef, ResolvedPath};
