use super::BuildContext;
use crate::admin::{AdminId, AdminPool};
use crate::templates::TemplateMap;
use scaffold_core::describe::{Context, FieldDescriptionCollection};
use scaffold_core::{FieldDescription, FieldType, Result};
use tracing::debug;

/// The reserved name of the synthesized action column.
pub const ACTION_FIELD: &str = "_action";

/// Builds read-only field descriptions for the list grid.
#[derive(Debug, Clone)]
pub struct ListBuilder {
    templates: TemplateMap,
}

impl ListBuilder {
    pub fn new() -> Self {
        Self {
            templates: TemplateMap::for_list(),
        }
    }

    pub fn with_templates(templates: TemplateMap) -> Self {
        Self { templates }
    }

    /// The initial empty list collection.
    pub fn base_list(&self) -> FieldDescriptionCollection {
        FieldDescriptionCollection::new()
    }

    /// Normalizes a description for the list context.
    pub fn fix_field_description(
        &self,
        cx: &BuildContext<'_>,
        pool: &AdminPool,
        admin: AdminId,
        description: &mut FieldDescription,
    ) -> Result<()> {
        if description.admin.is_none() {
            description.admin = Some(admin);
        }

        // The action column is synthesized, not mapped
        if description.name == ACTION_FIELD {
            description.ty = Some(FieldType::Action);
            if description.template.is_none() {
                description.template = Some("list_action".to_string());
            }
            if description.options.label.is_none() {
                description.options.label = Some("Action".to_string());
            }
            if description.options.code.is_none() {
                description.options.code = Some(description.name.clone());
            }
            return Ok(());
        }

        super::merge_metadata(cx, pool, admin, description);
        super::resolve_type(cx, pool, admin, description)?;
        super::default_code_label(description);
        super::apply_template(&self.templates, description);
        super::attach_association(pool, description);

        debug!(
            field = %description.name,
            ty = %description.expect_ty(),
            template = description.template(),
            "fixed list field"
        );
        Ok(())
    }

    /// Normalizes a description and appends it to the list collection.
    pub fn add_field(
        &self,
        cx: &BuildContext<'_>,
        pool: &AdminPool,
        admin: AdminId,
        list: &mut FieldDescriptionCollection,
        mut description: FieldDescription,
    ) -> Result<()> {
        self.fix_field_description(cx, pool, admin, &mut description)?;
        list.add(description);
        Ok(())
    }

    /// Builds the whole list context from the admin's declarations and
    /// publishes it.
    ///
    /// The registry is only written when every declaration normalized; a
    /// failed build publishes nothing.
    pub fn build_list(
        &self,
        cx: &BuildContext<'_>,
        pool: &mut AdminPool,
        admin: AdminId,
    ) -> Result<FieldDescriptionCollection> {
        let requests = pool.admin(admin).declared(Context::List).to_vec();

        let mut list = self.base_list();
        for request in requests {
            self.add_field(cx, pool, admin, &mut list, request.into_description())?;
        }

        pool.admin_mut(admin)
            .registry
            .publish(Context::List, list.clone());
        Ok(list)
    }
}

impl Default for ListBuilder {
    fn default() -> Self {
        Self::new()
    }
}
