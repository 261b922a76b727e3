use super::BuildContext;
use crate::admin::{AdminId, AdminPool};
use crate::datagrid::{Datagrid, Filter, FilterRegistry, Pager, ProxyQuery, SortOrder};
use crate::templates::TemplateMap;
use indexmap::IndexMap;
use scaffold_core::describe::{Context, FieldDescriptionCollection};
use scaffold_core::instance::display_label;
use scaffold_core::metadata::AssociationKind;
use scaffold_core::{Error, FieldDescription, FieldType, Result, Value};
use tracing::debug;

/// Builds filter descriptors and the base paginated query for the list grid.
#[derive(Debug, Clone)]
pub struct DatagridBuilder {
    templates: TemplateMap,
    filter_types: IndexMap<FieldType, String>,
    filters: FilterRegistry,
}

impl DatagridBuilder {
    pub fn new() -> Self {
        Self {
            templates: TemplateMap::for_filter(),
            filter_types: default_filter_types(),
            filters: FilterRegistry::with_defaults(),
        }
    }

    pub fn with_templates(mut self, templates: TemplateMap) -> Self {
        self.templates = templates;
        self
    }

    /// Replaces the filter kind for a semantic type.
    pub fn with_filter_type(mut self, ty: FieldType, kind: impl Into<String>) -> Self {
        self.filter_types.insert(ty, kind.into());
        self
    }

    pub fn filter_registry_mut(&mut self) -> &mut FilterRegistry {
        &mut self.filters
    }

    /// Normalizes a description for the filter context.
    ///
    /// `filter_value`, `filter_options` and `filter_field_options` are left
    /// exactly as declared; only the shared defaults are filled.
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

    /// Normalizes a description, selects the filter implementation for it,
    /// and registers the filter on the datagrid.
    pub fn add_filter(
        &self,
        cx: &BuildContext<'_>,
        pool: &AdminPool,
        datagrid: &mut Datagrid,
        ty: Option<FieldType>,
        mut description: FieldDescription,
        admin: AdminId,
    ) -> Result<()> {
        if description.ty.is_none() {
            description.ty = ty;
        }

        self.fix_field_description(cx, pool, admin, &mut description)?;

        let filter = match description.association_kind() {
            // Many-to-one filters on the target's identifier
            Some(AssociationKind::ManyToOne) => Filter::identifier(description),

            // Many-to-many filters over the full choice set of the target
            // class, labeled per instance
            Some(AssociationKind::ManyToMany) => {
                let target = description
                    .target_class()
                    .expect("association mapping present");
                let choices = cx
                    .instances
                    .all(target)
                    .iter()
                    .map(|instance| (instance.identifier.clone(), display_label(instance)))
                    .collect();
                debug!(field = %description.name, "populated choice filter");
                Filter::choice(description, choices)
            }

            _ => {
                let ty = description.expect_ty();
                let kind = match &description.options.filter_field_widget {
                    Some(kind) => kind.clone(),
                    None => self
                        .filter_types
                        .get(&ty)
                        .cloned()
                        .ok_or_else(|| Error::unknown_filter_type(&description.name, ty.name()))?,
                };
                let ctor = self.filters.resolve(&kind)?;
                ctor(description)
            }
        };

        datagrid.add_filter(filter);
        Ok(())
    }

    /// Builds the composite the list view depends on: the query scoped to
    /// the admin's class, a pager counting on the class's identifier
    /// field(s), and the current filter values.
    pub fn base_datagrid(
        &self,
        cx: &BuildContext<'_>,
        pool: &AdminPool,
        admin: AdminId,
        values: IndexMap<String, Value>,
    ) -> Datagrid {
        let class = pool.admin(admin).class;

        let count_columns = cx
            .provider
            .metadata(class)
            .map(|metadata| metadata.identifier.clone())
            .unwrap_or_else(|| vec!["id".to_string()]);

        let mut query = ProxyQuery::new(class);
        if let Some(column) = count_columns.first() {
            query.order_by(column.clone(), SortOrder::Asc);
        }

        let pager = Pager::new(count_columns);
        Datagrid::new(class, query, pager, cx.factory.clone(), values)
    }

    /// Builds the whole filter context from the admin's declarations,
    /// publishes the descriptions, and returns the finished datagrid.
    pub fn build_datagrid(
        &self,
        cx: &BuildContext<'_>,
        pool: &mut AdminPool,
        admin: AdminId,
        values: IndexMap<String, Value>,
    ) -> Result<Datagrid> {
        let requests = pool.admin(admin).declared(Context::Filter).to_vec();

        let mut datagrid = self.base_datagrid(cx, pool, admin, values);
        for request in requests {
            let ty = request.ty;
            self.add_filter(cx, pool, &mut datagrid, ty, request.into_description(), admin)?;
        }

        let mut fields = FieldDescriptionCollection::new();
        for filter in datagrid.filters() {
            fields.add(filter.description.clone());
        }
        pool.admin_mut(admin)
            .registry
            .publish(Context::Filter, fields);

        Ok(datagrid)
    }
}

impl Default for DatagridBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn default_filter_types() -> IndexMap<FieldType, String> {
    [
        (FieldType::Boolean, "boolean"),
        (FieldType::Integer, "number"),
        (FieldType::Float, "number"),
        (FieldType::Decimal, "number"),
        (FieldType::String, "text"),
        (FieldType::Text, "text"),
        (FieldType::Date, "date"),
        (FieldType::Time, "time"),
        (FieldType::DateTime, "datetime"),
        (FieldType::Array, "choice"),
    ]
    .into_iter()
    .map(|(ty, kind)| (ty, kind.to_string()))
    .collect()
}
