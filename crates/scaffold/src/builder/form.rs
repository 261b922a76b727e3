use super::BuildContext;
use crate::admin::{AdminId, AdminPool};
use crate::form::{FormField, FormView, ModelToIdTransformer, Widget, WidgetRegistry};
use crate::templates::TemplateMap;
use indexmap::IndexMap;
use scaffold_core::describe::{Context, EditMode, FieldDescriptionCollection};
use scaffold_core::metadata::{AssociationKind, ClassId};
use scaffold_core::{Error, FieldDescription, FieldType, Instance, Result};
use tracing::debug;

/// Builds editable-widget descriptions, including recursive embedding of
/// associated admins' forms.
#[derive(Debug, Clone)]
pub struct FormContractor {
    templates: TemplateMap,
    form_types: IndexMap<FieldType, String>,
    widgets: WidgetRegistry,
}

impl FormContractor {
    pub fn new() -> Self {
        Self {
            templates: TemplateMap::for_form(),
            form_types: default_form_types(),
            widgets: WidgetRegistry::with_defaults(),
        }
    }

    pub fn with_templates(mut self, templates: TemplateMap) -> Self {
        self.templates = templates;
        self
    }

    /// Replaces the widget kind for a semantic type.
    pub fn with_form_type(mut self, ty: FieldType, kind: impl Into<String>) -> Self {
        self.form_types.insert(ty, kind.into());
        self
    }

    pub fn widget_registry_mut(&mut self) -> &mut WidgetRegistry {
        &mut self.widgets
    }

    /// Normalizes a description for the form context.
    ///
    /// The semantic type must be declared explicitly; a form never guesses
    /// which widget edits a field.
    pub fn fix_field_description(
        &self,
        cx: &BuildContext<'_>,
        pool: &AdminPool,
        admin: AdminId,
        description: &mut FieldDescription,
    ) -> Result<()> {
        super::merge_metadata(cx, pool, admin, description);

        if description.ty.is_none() {
            let class = pool.admin(admin).class;
            return Err(Error::missing_type(
                super::class_name(cx.provider, class),
                &description.name,
            ));
        }

        super::default_code_label(description);

        if description.options.edit.is_none() {
            description.options.edit = Some(EditMode::Standard);
        }

        super::apply_template(&self.templates, description);

        // Inline one-to-many collections default to the embeddable widget
        if description.association_kind() == Some(AssociationKind::OneToMany)
            && description.options.edit_mode() == EditMode::Inline
            && description.options.form_field_widget.is_none()
        {
            description.options.form_field_widget = Some("collection".to_string());
        }

        super::attach_association(pool, description);
        Ok(())
    }

    /// The initial empty form for an admin's class.
    pub fn base_form(&self, pool: &AdminPool, admin: AdminId) -> FormView {
        FormView::new(pool.admin(admin).class)
    }

    /// Normalizes a description, resolves its widget, and appends it to the
    /// form.
    ///
    /// `subject` is the object being edited, when there is one; inline
    /// one-to-many fields pre-populate it up to their declared minimum.
    /// `chain` carries the classes already being embedded, so
    /// mutually-referencing inline forms are rejected instead of recursing
    /// without bound.
    pub fn add_field(
        &self,
        cx: &BuildContext<'_>,
        pool: &AdminPool,
        form: &mut FormView,
        mut description: FieldDescription,
        admin: AdminId,
        subject: Option<&mut Instance>,
        chain: &mut Vec<ClassId>,
    ) -> Result<()> {
        self.fix_field_description(cx, pool, admin, &mut description)?;

        let edit = description.options.edit_mode();
        let (widget, transformer) = match description.association_kind() {
            Some(AssociationKind::OneToMany) => {
                if edit == EditMode::Inline {
                    let widget = self.embed(cx, pool, &description, subject, chain, true)?;
                    (widget, None)
                } else {
                    // Detached one-to-many edits like many-to-many
                    (self.association_widget(cx, pool, admin, &description)?, None)
                }
            }

            Some(AssociationKind::ManyToMany) => {
                (self.association_widget(cx, pool, admin, &description)?, None)
            }

            Some(AssociationKind::ManyToOne) | Some(AssociationKind::OneToOne) => match edit {
                EditMode::Inline => {
                    let widget = self.embed(cx, pool, &description, subject, chain, false)?;
                    (widget, None)
                }
                EditMode::List => {
                    let target = description
                        .target_class()
                        .expect("association mapping present");
                    (Widget::ModelReference { class: target }, None)
                }
                EditMode::Standard => {
                    let target = description
                        .target_class()
                        .expect("association mapping present");
                    let widget = self.association_widget(cx, pool, admin, &description)?;
                    (widget, Some(ModelToIdTransformer::new(target)))
                }
            },

            None => (self.scalar_widget(cx, pool, admin, &description)?, None),
        };

        form.add(FormField {
            description,
            widget,
            transformer,
        });
        Ok(())
    }

    /// Builds the whole form context from the admin's declarations and
    /// publishes it.
    pub fn build_form(
        &self,
        cx: &BuildContext<'_>,
        pool: &mut AdminPool,
        admin: AdminId,
        subject: Option<&mut Instance>,
    ) -> Result<FormView> {
        let mut chain = vec![pool.admin(admin).class];
        let form = self.build_fields(cx, pool, admin, subject, &mut chain)?;

        let mut fields = FieldDescriptionCollection::new();
        for field in form.fields() {
            fields.add(field.description.clone());
        }
        pool.admin_mut(admin).registry.publish(Context::Form, fields);

        Ok(form)
    }

    fn build_fields(
        &self,
        cx: &BuildContext<'_>,
        pool: &AdminPool,
        admin: AdminId,
        mut subject: Option<&mut Instance>,
        chain: &mut Vec<ClassId>,
    ) -> Result<FormView> {
        let requests = pool.admin(admin).declared(Context::Form).to_vec();

        let mut form = FormView::new(pool.admin(admin).class);
        for request in requests {
            self.add_field(
                cx,
                pool,
                &mut form,
                request.into_description(),
                admin,
                subject.as_deref_mut(),
                chain,
            )?;
        }
        Ok(form)
    }

    /// Embeds the association admin's form.
    ///
    /// For repeatable collections, the subject is pre-populated first: while
    /// the related count is below the declared minimum, a blank instance is
    /// requested from the association admin and appended through the
    /// "add related" accessor. This happens during form building, before the
    /// collection widget exists.
    fn embed(
        &self,
        cx: &BuildContext<'_>,
        pool: &AdminPool,
        description: &FieldDescription,
        subject: Option<&mut Instance>,
        chain: &mut Vec<ClassId>,
        repeatable: bool,
    ) -> Result<Widget> {
        let assoc_admin = description
            .association_admin
            .ok_or_else(|| Error::missing_association_admin(&description.name))?;

        if repeatable {
            if let Some(subject) = subject {
                let min = description.options.min.unwrap_or(0);
                let have = subject.related_count(&description.field_name);
                if have < min {
                    debug!(
                        field = %description.name,
                        have,
                        min,
                        "synthesizing blank related instances"
                    );
                    for _ in have..min {
                        let child = pool.admin(assoc_admin).new_instance();
                        subject.add_related(&description.field_name, child);
                    }
                }
            }
        }

        let target = pool.admin(assoc_admin).class;
        if chain.contains(&target) {
            return Err(Error::recursive_embed(
                super::class_name(cx.provider, target),
                &description.name,
            ));
        }

        // The embedded form builds against the association admin, so nested
        // names, templates and deeper associations resolve against the
        // target class's metadata
        chain.push(target);
        let embedded = self.build_fields(cx, pool, assoc_admin, None, chain);
        chain.pop();

        Ok(Widget::Collection {
            form: Box::new(embedded?),
            repeatable,
        })
    }

    /// Resolves a detached association widget: the explicit override through
    /// the registry, otherwise the generic field factory.
    fn association_widget(
        &self,
        cx: &BuildContext<'_>,
        pool: &AdminPool,
        admin: AdminId,
        description: &FieldDescription,
    ) -> Result<Widget> {
        match &description.options.form_field_widget {
            Some(kind) => {
                let ctor = self.widgets.resolve(kind)?;
                Ok(ctor(description))
            }
            None => {
                let class = pool.admin(admin).class;
                cx.factory.instance(
                    cx.provider,
                    class,
                    &description.field_name,
                    &description.options,
                )
            }
        }
    }

    /// Resolves a scalar (or virtual) widget: explicit override, then the
    /// type table, then the generic field factory.
    fn scalar_widget(
        &self,
        cx: &BuildContext<'_>,
        pool: &AdminPool,
        admin: AdminId,
        description: &FieldDescription,
    ) -> Result<Widget> {
        if let Some(kind) = &description.options.form_field_widget {
            let ctor = self.widgets.resolve(kind)?;
            return Ok(ctor(description));
        }

        let ty = description.expect_ty();
        if let Some(kind) = self.form_types.get(&ty) {
            let ctor = self.widgets.resolve(kind)?;
            return Ok(ctor(description));
        }

        let class = pool.admin(admin).class;
        cx.factory
            .instance(
                cx.provider,
                class,
                &description.field_name,
                &description.options,
            )
            .map_err(|err| err.context(Error::unknown_form_type(&description.name, ty.name())))
    }
}

impl Default for FormContractor {
    fn default() -> Self {
        Self::new()
    }
}

fn default_form_types() -> IndexMap<FieldType, String> {
    [
        (FieldType::Boolean, "checkbox"),
        (FieldType::Integer, "integer"),
        (FieldType::Float, "number"),
        (FieldType::Decimal, "number"),
        (FieldType::String, "text"),
        (FieldType::Text, "textarea"),
        (FieldType::Date, "date"),
        (FieldType::Time, "time"),
        (FieldType::DateTime, "datetime"),
        (FieldType::Array, "choice"),
    ]
    .into_iter()
    .map(|(ty, kind)| (ty, kind.to_string()))
    .collect()
}
