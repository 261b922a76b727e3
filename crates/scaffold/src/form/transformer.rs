use scaffold_core::instance::InstanceSource;
use scaffold_core::metadata::ClassId;
use scaffold_core::{Instance, Value};

/// Converts between a related instance and its identifier.
///
/// Detached association widgets (selects, identifier inputs) edit the
/// identifier; the domain object holds the instance. The transformer maps
/// one onto the other in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelToIdTransformer {
    /// The related class
    pub class: ClassId,
}

impl ModelToIdTransformer {
    pub fn new(class: ClassId) -> Self {
        Self { class }
    }

    /// Instance → identifier.
    pub fn transform(&self, instance: &Instance) -> Value {
        instance.identifier.clone()
    }

    /// Identifier → instance, via the instance source. `Null` maps to no
    /// instance.
    pub fn reverse(&self, source: &dyn InstanceSource, id: &Value) -> Option<Instance> {
        if id.is_null() {
            return None;
        }
        source.find(self.class, id)
    }
}
