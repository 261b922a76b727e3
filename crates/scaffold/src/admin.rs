mod pool;
pub use pool::AdminPool;

pub use scaffold_core::AdminId;

use indexmap::IndexMap;
use scaffold_core::describe::{Context, FieldDescriptionRegistry, FieldRequest};
use scaffold_core::metadata::ClassId;
use scaffold_core::Instance;

/// Administers one persisted domain class.
///
/// An admin owns the declarative field requests for each display context and
/// the registry the builders publish finished descriptions into. Admins live
/// in an [`AdminPool`] and refer to each other by [`AdminId`].
#[derive(Debug)]
pub struct Admin {
    /// Uniquely identifies the admin within the pool
    pub id: AdminId,

    /// The administered class
    pub class: ClassId,

    /// Human-facing label for this admin
    pub label: String,

    /// Finished field descriptions, per context
    pub registry: FieldDescriptionRegistry,

    list_fields: Vec<FieldRequest>,
    filter_fields: Vec<FieldRequest>,
    form_fields: Vec<FieldRequest>,
    show_fields: Vec<FieldRequest>,

    /// Per-field association admin overrides
    association_admins: IndexMap<String, AdminId>,

    /// Builds a blank instance of the administered class
    instance_factory: fn(ClassId) -> Instance,
}

impl Admin {
    pub(crate) fn new(id: AdminId, class: ClassId, label: impl Into<String>) -> Self {
        Self {
            id,
            class,
            label: label.into(),
            registry: FieldDescriptionRegistry::new(),
            list_fields: Vec::new(),
            filter_fields: Vec::new(),
            form_fields: Vec::new(),
            show_fields: Vec::new(),
            association_admins: IndexMap::new(),
            instance_factory: Instance::new,
        }
    }

    /// Declares a field for a display context.
    ///
    /// Declarations are consumed in order by the context's builder.
    pub fn declare(&mut self, context: Context, request: impl Into<FieldRequest>) -> &mut Self {
        self.declared_mut(context).push(request.into());
        self
    }

    pub fn declared(&self, context: Context) -> &[FieldRequest] {
        match context {
            Context::List => &self.list_fields,
            Context::Filter => &self.filter_fields,
            Context::Form => &self.form_fields,
            Context::Show => &self.show_fields,
        }
    }

    fn declared_mut(&mut self, context: Context) -> &mut Vec<FieldRequest> {
        match context {
            Context::List => &mut self.list_fields,
            Context::Filter => &mut self.filter_fields,
            Context::Form => &mut self.form_fields,
            Context::Show => &mut self.show_fields,
        }
    }

    /// Forces a specific association admin for one field, taking precedence
    /// over by-class resolution in the pool.
    pub fn set_association_admin(&mut self, field: impl Into<String>, admin: AdminId) {
        self.association_admins.insert(field.into(), admin);
    }

    pub fn association_admin_override(&self, field: &str) -> Option<AdminId> {
        self.association_admins.get(field).copied()
    }

    pub fn set_instance_factory(&mut self, factory: fn(ClassId) -> Instance) {
        self.instance_factory = factory;
    }

    /// Builds a new blank instance of the administered class.
    pub fn new_instance(&self) -> Instance {
        (self.instance_factory)(self.class)
    }
}
