use scaffold_core::guess::{Confidence, TypeGuess, TypeGuesser, TypeGuesserChain};
use scaffold_core::metadata::{ClassId, MetadataCatalog, MetadataProvider};
use scaffold_core::FieldType;

struct Fixed {
    ty: FieldType,
    confidence: Confidence,
}

impl TypeGuesser for Fixed {
    fn guess(
        &self,
        _provider: &dyn MetadataProvider,
        _class: ClassId,
        _field: &str,
    ) -> Option<TypeGuess> {
        Some(TypeGuess::new(self.ty, self.confidence))
    }
}

fn fixed(ty: FieldType, confidence: Confidence) -> Fixed {
    Fixed { ty, confidence }
}

#[test]
fn nested_chain_contributes_guessers_individually() {
    let mut inner = TypeGuesserChain::new();
    inner
        .register(fixed(FieldType::String, Confidence::Medium))
        .register(fixed(FieldType::Integer, Confidence::High));

    let mut outer = TypeGuesserChain::new();
    outer.register(fixed(FieldType::Boolean, Confidence::Low));
    outer.register_chain(inner);

    assert_eq!(outer.len(), 3);

    let catalog = MetadataCatalog::new();
    let guess = outer.guess(&catalog, ClassId(0), "field").unwrap();
    assert_eq!(guess.ty, FieldType::Integer);
}

#[test]
fn flattening_preserves_relative_order_for_ties() {
    // outer: [A(string, medium)], inner: [B(integer, medium), C(date, medium)]
    // After flattening the order is A, B, C; A wins the tie.
    let mut inner = TypeGuesserChain::new();
    inner
        .register(fixed(FieldType::Integer, Confidence::Medium))
        .register(fixed(FieldType::Date, Confidence::Medium));

    let mut outer = TypeGuesserChain::new();
    outer.register(fixed(FieldType::String, Confidence::Medium));
    outer.register_chain(inner);

    let catalog = MetadataCatalog::new();
    let guess = outer.guess(&catalog, ClassId(0), "field").unwrap();
    assert_eq!(guess.ty, FieldType::String);
}

#[test]
fn doubly_nested_chains_flatten() {
    let mut innermost = TypeGuesserChain::new();
    innermost.register(fixed(FieldType::Time, Confidence::Low));

    let mut middle = TypeGuesserChain::new();
    middle.register(fixed(FieldType::Float, Confidence::Low));
    middle.register_chain(innermost);

    let mut outer = TypeGuesserChain::new();
    outer.register_chain(middle);

    assert_eq!(outer.len(), 2);

    let catalog = MetadataCatalog::new();
    let guess = outer.guess(&catalog, ClassId(0), "field").unwrap();
    assert_eq!(guess.ty, FieldType::Float);
}
