mod context;
pub use context::BuildContext;

mod datagrid;
pub use datagrid::DatagridBuilder;

mod form;
pub use form::FormContractor;

mod list;
pub use list::ListBuilder;

mod show;
pub use show::ShowBuilder;

use crate::admin::{AdminId, AdminPool};
use crate::templates::TemplateMap;
use scaffold_core::metadata::{resolve_path, ClassId, MappingRef, MetadataProvider};
use scaffold_core::{Error, FieldDescription, FieldType, Result};
use tracing::debug;

// Normalization steps shared by every context builder. Each step is a no-op
// on values that are already present, so re-running `fix_field_description`
// on a normalized description changes nothing.

/// The class name for diagnostics; classes without metadata fall back to
/// their id.
pub(crate) fn class_name(provider: &dyn MetadataProvider, class: ClassId) -> String {
    match provider.metadata(class) {
        Some(metadata) => metadata.name.clone(),
        None => format!("{class:?}"),
    }
}

/// Merges persistence metadata into the description: scalar hits fill the
/// field mapping, association hits the association mapping, and dotted names
/// record the association hops crossed on the way.
pub(crate) fn merge_metadata(
    cx: &BuildContext<'_>,
    pool: &AdminPool,
    admin: AdminId,
    description: &mut FieldDescription,
) {
    if description.admin.is_none() {
        description.admin = Some(admin);
    }

    let class = pool.admin(admin).class;
    let Some(resolved) = resolve_path(cx.provider, class, &description.name) else {
        // No mapping at all: a virtual field
        return;
    };

    description.parent_association_mappings =
        resolved.parents.iter().map(|hop| (*hop).clone()).collect();

    match resolved.leaf {
        MappingRef::Scalar(mapping) => description.apply_field_mapping(mapping.clone()),
        MappingRef::Association(mapping) => {
            description.apply_association_mapping(mapping.clone())
        }
    }
}

/// Resolves the semantic type, consulting the guesser chain when the
/// declaration did not supply one.
pub(crate) fn resolve_type(
    cx: &BuildContext<'_>,
    pool: &AdminPool,
    admin: AdminId,
    description: &mut FieldDescription,
) -> Result<FieldType> {
    if let Some(ty) = description.ty {
        return Ok(ty);
    }

    let class = pool.admin(admin).class;
    match cx.guesser.guess(cx.provider, class, &description.name) {
        Some(guess) => {
            debug!(
                field = %description.name,
                ty = %guess.ty,
                confidence = ?guess.confidence,
                "guessed field type"
            );
            description.ty = Some(guess.ty);
            Ok(guess.ty)
        }
        None => Err(Error::missing_type(
            class_name(cx.provider, class),
            &description.name,
        )),
    }
}

/// Defaults `code` and `label` to the field name. Idempotent.
pub(crate) fn default_code_label(description: &mut FieldDescription) {
    if description.options.code.is_none() {
        description.options.code = Some(description.name.clone());
    }
    if description.options.label.is_none() {
        description.options.label = Some(description.name.clone());
    }
}

/// Resolves the template: an explicit per-field override wins, otherwise the
/// context's table fills an unset template.
pub(crate) fn apply_template(templates: &TemplateMap, description: &mut FieldDescription) {
    if let Some(template) = &description.options.template {
        description.template = Some(template.clone());
        return;
    }

    if description.template.is_none() {
        description.template = templates
            .resolve(description.expect_ty(), description.mapping_type)
            .map(str::to_string);
    }
}

/// Binds the association admin for association fields.
///
/// An unresolved binding is left pending here; contexts that require
/// delegation (inline embeds, embedded lists) turn it into a hard error at
/// the point of use.
pub(crate) fn attach_association(pool: &AdminPool, description: &mut FieldDescription) {
    if !description.is_association() || description.association_admin.is_some() {
        return;
    }

    match pool.attach_admin_class(description) {
        Some(admin) => {
            debug!(field = %description.name, ?admin, "bound association admin")
        }
        None => {
            debug!(field = %description.name, "association admin unresolved, left pending")
        }
    }
}
