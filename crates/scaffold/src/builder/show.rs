use super::BuildContext;
use crate::admin::{AdminId, AdminPool};
use crate::templates::TemplateMap;
use scaffold_core::describe::{Context, FieldDescriptionCollection};
use scaffold_core::{FieldDescription, Result};
use tracing::debug;

/// Builds read-only field descriptions for the detail view.
#[derive(Debug, Clone)]
pub struct ShowBuilder {
    templates: TemplateMap,
}

impl ShowBuilder {
    pub fn new() -> Self {
        Self {
            templates: TemplateMap::for_show(),
        }
    }

    pub fn with_templates(templates: TemplateMap) -> Self {
        Self { templates }
    }

    /// The initial empty show collection.
    pub fn base_show(&self) -> FieldDescriptionCollection {
        FieldDescriptionCollection::new()
    }

    /// Normalizes a description for the show context.
    pub fn fix_field_description(
        &self,
        cx: &BuildContext<'_>,
        pool: &AdminPool,
        admin: AdminId,
        description: &mut FieldDescription,
    ) -> Result<()> {
        super::merge_metadata(cx, pool, admin, description);
        super::resolve_type(cx, pool, admin, description)?;
        super::default_code_label(description);
        super::apply_template(&self.templates, description);
        super::attach_association(pool, description);
        Ok(())
    }

    /// Normalizes a description and appends it to the show collection.
    ///
    /// Association fields with no explicit show handling (no declared type,
    /// no template override) are deferred: the field is skipped and `false`
    /// returned, rather than rendered with a wrong template.
    pub fn add_field(
        &self,
        cx: &BuildContext<'_>,
        pool: &AdminPool,
        admin: AdminId,
        show: &mut FieldDescriptionCollection,
        mut description: FieldDescription,
    ) -> Result<bool> {
        let explicitly_handled =
            description.ty.is_some() || description.options.template.is_some();

        self.fix_field_description(cx, pool, admin, &mut description)?;

        if description.is_association() && !explicitly_handled {
            debug!(field = %description.name, "skipping association without show handling");
            return Ok(false);
        }

        show.add(description);
        Ok(true)
    }

    /// Builds the whole show context from the admin's declarations and
    /// publishes it.
    pub fn build_show(
        &self,
        cx: &BuildContext<'_>,
        pool: &mut AdminPool,
        admin: AdminId,
    ) -> Result<FieldDescriptionCollection> {
        let requests = pool.admin(admin).declared(Context::Show).to_vec();

        let mut show = self.base_show();
        for request in requests {
            self.add_field(cx, pool, admin, &mut show, request.into_description())?;
        }

        pool.admin_mut(admin)
            .registry
            .publish(Context::Show, show.clone());
        Ok(show)
    }
}

impl Default for ShowBuilder {
    fn default() -> Self {
        Self::new()
    }
}
