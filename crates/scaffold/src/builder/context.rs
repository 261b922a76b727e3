use crate::form::{FieldFactory, MappingFieldFactory};
use scaffold_core::guess::TypeGuesserChain;
use scaffold_core::instance::InstanceSource;
use scaffold_core::metadata::MetadataProvider;
use std::sync::Arc;

/// The collaborators one context build runs against.
///
/// Builds are synchronous and request-scoped; the context borrows the
/// collaborators for the duration of the build.
pub struct BuildContext<'a> {
    /// Persistence metadata access
    pub provider: &'a dyn MetadataProvider,

    /// Persisted-object query access
    pub instances: &'a dyn InstanceSource,

    /// Type inference for declarations without an explicit type
    pub guesser: &'a TypeGuesserChain,

    /// Generic fallback widget construction
    pub factory: Arc<dyn FieldFactory>,
}

impl<'a> BuildContext<'a> {
    pub fn new(
        provider: &'a dyn MetadataProvider,
        instances: &'a dyn InstanceSource,
        guesser: &'a TypeGuesserChain,
    ) -> Self {
        Self {
            provider,
            instances,
            guesser,
            factory: Arc::new(MappingFieldFactory::new()),
        }
    }

    pub fn with_factory(mut self, factory: Arc<dyn FieldFactory>) -> Self {
        self.factory = factory;
        self
    }
}
