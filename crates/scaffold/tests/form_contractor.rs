use pretty_assertions::assert_eq;
use scaffold::form::Widget;
use scaffold::{
    AdminId, AdminPool, BuildContext, Context, FieldDescription, FieldOptions, FieldRequest,
    FieldType, FormContractor, Instance,
};
use scaffold_core::describe::EditMode;
use scaffold_core::guess::{MappingTypeGuesser, TypeGuesserChain};
use scaffold_core::instance::MemorySource;
use scaffold_core::metadata::{
    AssociationKind, AssociationMapping, ClassId, FieldMapping, MetadataCatalog, ScalarKind,
};

struct Fixture {
    catalog: MetadataCatalog,
    source: MemorySource,
    chain: TypeGuesserChain,
    pool: AdminPool,
    post: AdminId,
    comment: AdminId,
    post_class: ClassId,
    comment_class: ClassId,
    author_class: ClassId,
}

/// Post { id, title, body, author -> Author, comments -> [Comment],
/// tags -> {Tag} }; Comment { id, body, post -> Post }.
fn fixture() -> Fixture {
    let mut catalog = MetadataCatalog::new();
    let post = catalog.register("Post");
    let author = catalog.register("Author");
    let comment = catalog.register("Comment");
    let tag = catalog.register("Tag");

    catalog
        .class_mut(post)
        .map_field(FieldMapping::new("id", ScalarKind::Integer))
        .map_field(FieldMapping::new("title", ScalarKind::String))
        .map_field(FieldMapping::new("body", ScalarKind::Text))
        .map_association(AssociationMapping::new(
            "author",
            AssociationKind::ManyToOne,
            author,
        ))
        .map_association(AssociationMapping::new(
            "comments",
            AssociationKind::OneToMany,
            comment,
        ))
        .map_association(AssociationMapping::new(
            "tags",
            AssociationKind::ManyToMany,
            tag,
        ));
    catalog
        .class_mut(comment)
        .map_field(FieldMapping::new("body", ScalarKind::Text))
        .map_association(AssociationMapping::new(
            "post",
            AssociationKind::ManyToOne,
            post,
        ));

    let mut chain = TypeGuesserChain::new();
    chain.register(MappingTypeGuesser::new());

    let mut pool = AdminPool::new();
    let post_admin = pool.register(post, "Posts");
    let comment_admin = pool.register(comment, "Comments");
    pool.register(author, "Authors");
    pool.register(tag, "Tags");

    pool.admin_mut(comment_admin)
        .declare(Context::Form, FieldRequest::typed("body", FieldType::Text));

    Fixture {
        catalog,
        source: MemorySource::new(),
        chain,
        pool,
        post: post_admin,
        comment: comment_admin,
        post_class: post,
        comment_class: comment,
        author_class: author,
    }
}

fn inline_request(name: &str, ty: FieldType) -> FieldRequest {
    let mut options = FieldOptions::new();
    options.edit = Some(EditMode::Inline);
    FieldRequest::typed(name, ty).with_options(options)
}

// ---------------------------------------------------------------------------
// Explicit type requirement
// ---------------------------------------------------------------------------

#[test]
fn forms_never_guess_a_type() {
    let f = fixture();
    let cx = BuildContext::new(&f.catalog, &f.source, &f.chain);
    let contractor = FormContractor::new();

    // The field is mapped, a guesser could type it, and the form still
    // refuses to pick a widget silently
    let mut desc = FieldDescription::new("title");
    let err = contractor
        .fix_field_description(&cx, &f.pool, f.post, &mut desc)
        .unwrap_err();
    assert!(err.is_missing_type(), "got: {err}");
}

#[test]
fn edit_mode_defaults_to_standard() {
    let f = fixture();
    let cx = BuildContext::new(&f.catalog, &f.source, &f.chain);
    let contractor = FormContractor::new();

    let mut desc = FieldRequest::typed("title", FieldType::String).into_description();
    contractor
        .fix_field_description(&cx, &f.pool, f.post, &mut desc)
        .unwrap();

    assert_eq!(desc.options.edit, Some(EditMode::Standard));
    assert_eq!(desc.template(), Some("form_string"));
}

// ---------------------------------------------------------------------------
// Scalar widgets
// ---------------------------------------------------------------------------

#[test]
fn scalar_widget_comes_from_the_type_table() {
    let f = fixture();
    let cx = BuildContext::new(&f.catalog, &f.source, &f.chain);
    let contractor = FormContractor::new();

    let mut form = contractor.base_form(&f.pool, f.post);
    let mut chain = vec![f.post_class];
    contractor
        .add_field(
            &cx,
            &f.pool,
            &mut form,
            FieldRequest::typed("body", FieldType::Text).into_description(),
            f.post,
            None,
            &mut chain,
        )
        .unwrap();

    let field = form.field("body").unwrap();
    assert_eq!(field.widget, Widget::Textarea);
    assert_eq!(field.transformer, None);
}

#[test]
fn widget_override_beats_the_type_table() {
    let f = fixture();
    let cx = BuildContext::new(&f.catalog, &f.source, &f.chain);
    let contractor = FormContractor::new();

    let mut options = FieldOptions::new();
    options.form_field_widget = Some("textarea".to_string());

    let mut form = contractor.base_form(&f.pool, f.post);
    let mut chain = vec![f.post_class];
    contractor
        .add_field(
            &cx,
            &f.pool,
            &mut form,
            FieldRequest::typed("title", FieldType::String)
                .with_options(options)
                .into_description(),
            f.post,
            None,
            &mut chain,
        )
        .unwrap();

    assert_eq!(form.field("title").unwrap().widget, Widget::Textarea);
}

#[test]
fn unregistered_override_is_missing_widget() {
    let f = fixture();
    let cx = BuildContext::new(&f.catalog, &f.source, &f.chain);
    let contractor = FormContractor::new();

    let mut options = FieldOptions::new();
    options.form_field_widget = Some("wysiwyg".to_string());

    let mut form = contractor.base_form(&f.pool, f.post);
    let mut chain = vec![f.post_class];
    let err = contractor
        .add_field(
            &cx,
            &f.pool,
            &mut form,
            FieldRequest::typed("body", FieldType::Text)
                .with_options(options)
                .into_description(),
            f.post,
            None,
            &mut chain,
        )
        .unwrap_err();
    assert!(err.is_missing_widget(), "got: {err}");
}

#[test]
fn untabled_virtual_type_is_unknown_form_type() {
    let f = fixture();
    let cx = BuildContext::new(&f.catalog, &f.source, &f.chain);
    let contractor = FormContractor::new();

    let mut form = contractor.base_form(&f.pool, f.post);
    let mut chain = vec![f.post_class];
    let err = contractor
        .add_field(
            &cx,
            &f.pool,
            &mut form,
            FieldRequest::typed("note", FieldType::Action).into_description(),
            f.post,
            None,
            &mut chain,
        )
        .unwrap_err();
    assert!(err.is_unknown_form_type(), "got: {err}");
}

// ---------------------------------------------------------------------------
// Detached association widgets
// ---------------------------------------------------------------------------

#[test]
fn many_to_one_standard_gets_select_and_transformer() {
    let f = fixture();
    let cx = BuildContext::new(&f.catalog, &f.source, &f.chain);
    let contractor = FormContractor::new();

    let mut form = contractor.base_form(&f.pool, f.post);
    let mut chain = vec![f.post_class];
    contractor
        .add_field(
            &cx,
            &f.pool,
            &mut form,
            FieldRequest::typed("author", FieldType::ManyToOne).into_description(),
            f.post,
            None,
            &mut chain,
        )
        .unwrap();

    let field = form.field("author").unwrap();
    assert_eq!(
        field.widget,
        Widget::ModelSelect {
            class: f.author_class,
            multiple: false
        }
    );
    let transformer = field.transformer.unwrap();
    assert_eq!(transformer.class, f.author_class);
}

#[test]
fn many_to_one_list_mode_gets_plain_reference() {
    let f = fixture();
    let cx = BuildContext::new(&f.catalog, &f.source, &f.chain);
    let contractor = FormContractor::new();

    let mut options = FieldOptions::new();
    options.edit = Some(EditMode::List);

    let mut form = contractor.base_form(&f.pool, f.post);
    let mut chain = vec![f.post_class];
    contractor
        .add_field(
            &cx,
            &f.pool,
            &mut form,
            FieldRequest::typed("author", FieldType::ManyToOne)
                .with_options(options)
                .into_description(),
            f.post,
            None,
            &mut chain,
        )
        .unwrap();

    let field = form.field("author").unwrap();
    assert_eq!(
        field.widget,
        Widget::ModelReference {
            class: f.author_class
        }
    );
    assert_eq!(field.transformer, None);
}

#[test]
fn many_to_many_gets_multi_select_without_embedding() {
    let f = fixture();
    let cx = BuildContext::new(&f.catalog, &f.source, &f.chain);
    let contractor = FormContractor::new();

    let mut form = contractor.base_form(&f.pool, f.post);
    let mut chain = vec![f.post_class];
    contractor
        .add_field(
            &cx,
            &f.pool,
            &mut form,
            FieldRequest::typed("tags", FieldType::ManyToMany).into_description(),
            f.post,
            None,
            &mut chain,
        )
        .unwrap();

    let field = form.field("tags").unwrap();
    assert!(matches!(
        field.widget,
        Widget::ModelSelect { multiple: true, .. }
    ));
    assert_eq!(field.transformer, None);
}

// ---------------------------------------------------------------------------
// Inline embedding
// ---------------------------------------------------------------------------

#[test]
fn inline_one_to_many_embeds_the_association_admins_form() {
    let mut f = fixture();
    let contractor = FormContractor::new();

    f.pool
        .admin_mut(f.post)
        .declare(Context::Form, inline_request("comments", FieldType::OneToMany));

    let cx = BuildContext::new(&f.catalog, &f.source, &f.chain);
    let form = contractor
        .build_form(&cx, &mut f.pool, f.post, None)
        .unwrap();

    let field = form.field("comments").unwrap();
    assert_eq!(
        field.description.options.form_field_widget.as_deref(),
        Some("collection")
    );

    let Widget::Collection { form, repeatable } = &field.widget else {
        panic!("expected collection widget, got {:?}", field.widget);
    };
    assert!(*repeatable);
    assert_eq!(form.class(), f.comment_class);
    // The embedded form resolved against the target class's declarations
    assert!(form.has("body"));
    assert_eq!(
        form.field("body").unwrap().description.admin,
        Some(f.comment)
    );
}

#[test]
fn min_count_synthesizes_blank_instances_before_the_widget() {
    let mut f = fixture();
    let contractor = FormContractor::new();

    let mut options = FieldOptions::new();
    options.edit = Some(EditMode::Inline);
    options.min = Some(3);
    f.pool.admin_mut(f.post).declare(
        Context::Form,
        FieldRequest::typed("comments", FieldType::OneToMany).with_options(options),
    );

    let mut subject = Instance::new(f.post_class).with_identifier(1);
    subject.add_related("comments", Instance::new(f.comment_class).with_identifier(10));

    let cx = BuildContext::new(&f.catalog, &f.source, &f.chain);
    contractor
        .build_form(&cx, &mut f.pool, f.post, Some(&mut subject))
        .unwrap();

    // One existing, two synthesized
    assert_eq!(subject.related_count("comments"), 3);
    let related = subject.related("comments");
    assert_eq!(related[0].identifier, scaffold::Value::from(10));
    assert!(related[1].identifier.is_null());
    assert!(related[2].identifier.is_null());
    assert_eq!(related[1].class, f.comment_class);
}

#[test]
fn min_count_is_a_no_op_when_already_met() {
    let mut f = fixture();
    let contractor = FormContractor::new();

    let mut options = FieldOptions::new();
    options.edit = Some(EditMode::Inline);
    options.min = Some(1);
    f.pool.admin_mut(f.post).declare(
        Context::Form,
        FieldRequest::typed("comments", FieldType::OneToMany).with_options(options),
    );

    let mut subject = Instance::new(f.post_class);
    subject.add_related("comments", Instance::new(f.comment_class));
    subject.add_related("comments", Instance::new(f.comment_class));

    let cx = BuildContext::new(&f.catalog, &f.source, &f.chain);
    contractor
        .build_form(&cx, &mut f.pool, f.post, Some(&mut subject))
        .unwrap();

    assert_eq!(subject.related_count("comments"), 2);
}

#[test]
fn inline_without_association_admin_is_a_hard_error() {
    let mut catalog = MetadataCatalog::new();
    let post = catalog.register("Post");
    let comment = catalog.register("Comment");
    catalog.class_mut(post).map_association(AssociationMapping::new(
        "comments",
        AssociationKind::OneToMany,
        comment,
    ));

    let mut chain = TypeGuesserChain::new();
    chain.register(MappingTypeGuesser::new());
    let source = MemorySource::new();

    // No admin registered for Comment
    let mut pool = AdminPool::new();
    let post_admin = pool.register(post, "Posts");
    pool.admin_mut(post_admin)
        .declare(Context::Form, inline_request("comments", FieldType::OneToMany));

    let cx = BuildContext::new(&catalog, &source, &chain);
    let contractor = FormContractor::new();
    let err = contractor
        .build_form(&cx, &mut pool, post_admin, None)
        .unwrap_err();
    assert!(err.is_missing_association_admin(), "got: {err}");
}

#[test]
fn mutually_inline_classes_are_rejected() {
    let mut f = fixture();
    let contractor = FormContractor::new();

    f.pool
        .admin_mut(f.post)
        .declare(Context::Form, inline_request("comments", FieldType::OneToMany));
    f.pool
        .admin_mut(f.comment)
        .declare(Context::Form, inline_request("post", FieldType::ManyToOne));

    let cx = BuildContext::new(&f.catalog, &f.source, &f.chain);
    let err = contractor
        .build_form(&cx, &mut f.pool, f.post, None)
        .unwrap_err();
    assert!(err.is_recursive_embed(), "got: {err}");
}

// ---------------------------------------------------------------------------
// Atomic publication
// ---------------------------------------------------------------------------

#[test]
fn build_form_publishes_the_context() {
    let mut f = fixture();
    let contractor = FormContractor::new();

    f.pool
        .admin_mut(f.post)
        .declare(Context::Form, FieldRequest::typed("title", FieldType::String))
        .declare(Context::Form, FieldRequest::typed("body", FieldType::Text));

    let cx = BuildContext::new(&f.catalog, &f.source, &f.chain);
    contractor
        .build_form(&cx, &mut f.pool, f.post, None)
        .unwrap();

    let registry = &f.pool.admin(f.post).registry;
    let names: Vec<_> = registry.context(Context::Form).names().collect();
    assert_eq!(names, ["title", "body"]);
}

#[test]
fn failed_build_publishes_nothing() {
    let mut f = fixture();
    let contractor = FormContractor::new();

    f.pool
        .admin_mut(f.post)
        .declare(Context::Form, FieldRequest::typed("title", FieldType::String))
        .declare(Context::Form, "body"); // untyped: forms never guess

    let cx = BuildContext::new(&f.catalog, &f.source, &f.chain);
    let err = contractor
        .build_form(&cx, &mut f.pool, f.post, None)
        .unwrap_err();
    assert!(err.is_missing_type());

    let registry = &f.pool.admin(f.post).registry;
    assert!(registry.context(Context::Form).is_empty());
}
