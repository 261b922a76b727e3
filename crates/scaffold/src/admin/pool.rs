use super::{Admin, AdminId};
use indexmap::IndexMap;
use scaffold_core::metadata::ClassId;
use scaffold_core::FieldDescription;

/// The arena of admins.
///
/// Admins are registered once and addressed by [`AdminId`]; the pool also
/// resolves a class to its default admin (the first one registered for it).
/// Keeping resolution here, rather than as owning pointers between admins,
/// breaks the admin ↔ association-admin reference cycle into two
/// one-directional lookups.
#[derive(Debug, Default)]
pub struct AdminPool {
    admins: IndexMap<AdminId, Admin>,
    by_class: IndexMap<ClassId, AdminId>,
}

impl AdminPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an admin for a class and returns its id.
    ///
    /// The first admin registered for a class becomes the class's default
    /// admin for association resolution.
    pub fn register(&mut self, class: ClassId, label: impl Into<String>) -> AdminId {
        let id = AdminId(self.admins.len());
        self.admins.insert(id, Admin::new(id, class, label));
        self.by_class.entry(class).or_insert(id);
        id
    }

    /// Get an admin by id.
    #[track_caller]
    pub fn admin(&self, id: impl Into<AdminId>) -> &Admin {
        self.admins.get(&id.into()).expect("invalid admin ID")
    }

    /// Get an admin by id, mutably.
    #[track_caller]
    pub fn admin_mut(&mut self, id: impl Into<AdminId>) -> &mut Admin {
        self.admins.get_mut(&id.into()).expect("invalid admin ID")
    }

    pub fn admin_for_class(&self, class: ClassId) -> Option<AdminId> {
        self.by_class.get(&class).copied()
    }

    pub fn admins(&self) -> impl Iterator<Item = &Admin> {
        self.admins.values()
    }

    /// Binds the association admin for an association field description.
    ///
    /// Resolution order: the owning admin's per-field override, then the
    /// target class's default admin. Returns `None` when the field is not an
    /// association or no admin is registered for the target class; the
    /// caller decides whether an unresolved binding is an error for its
    /// context.
    pub fn attach_admin_class(&self, description: &mut FieldDescription) -> Option<AdminId> {
        let target = description.target_class()?;

        let id = description
            .admin
            .and_then(|owner| self.admins.get(&owner))
            .and_then(|admin| admin.association_admin_override(&description.name))
            .or_else(|| self.admin_for_class(target))?;

        description.association_admin = Some(id);
        Some(id)
    }
}
