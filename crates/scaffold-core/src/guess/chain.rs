use super::TypeGuess;
use crate::metadata::{ClassId, MetadataProvider};

/// Infers a field's semantic type from persistence metadata, when the field
/// declaration does not supply one explicitly.
pub trait TypeGuesser {
    /// Returns a guess for the field, or `None` when this guesser has no
    /// opinion.
    fn guess(
        &self,
        provider: &dyn MetadataProvider,
        class: ClassId,
        field: &str,
    ) -> Option<TypeGuess>;
}

/// Combines guessers and returns the best guess.
///
/// Guessers are consulted in registration order; the highest-confidence guess
/// wins and ties break in favor of the first registered guesser. Registering
/// a chain inside another chain flattens it, so the tie-break stays
/// well-defined regardless of how chains were composed.
#[derive(Default)]
pub struct TypeGuesserChain {
    guessers: Vec<Box<dyn TypeGuesser>>,
}

impl TypeGuesserChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a guesser to the chain.
    pub fn register(&mut self, guesser: impl TypeGuesser + 'static) -> &mut Self {
        self.guessers.push(Box::new(guesser));
        self
    }

    /// Appends another chain's guessers, individually and in order.
    pub fn register_chain(&mut self, chain: TypeGuesserChain) -> &mut Self {
        self.guessers.extend(chain.guessers);
        self
    }

    pub fn len(&self) -> usize {
        self.guessers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guessers.is_empty()
    }

    /// Returns the best guess, or `None` when no guesser had an opinion.
    ///
    /// `None` is the "unknown" guess; callers that require a type must then
    /// fail with a missing-type configuration error rather than defaulting.
    pub fn guess(
        &self,
        provider: &dyn MetadataProvider,
        class: ClassId,
        field: &str,
    ) -> Option<TypeGuess> {
        let mut best: Option<TypeGuess> = None;

        for guesser in &self.guessers {
            let Some(guess) = guesser.guess(provider, class, field) else {
                continue;
            };

            // Strict comparison: an equal-confidence guess from a later
            // guesser never displaces the earlier one
            match &best {
                Some(current) if guess.confidence <= current.confidence => {}
                _ => best = Some(guess),
            }
        }

        best
    }
}

impl std::fmt::Debug for TypeGuesserChain {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt.debug_struct("TypeGuesserChain")
            .field("guessers", &self.guessers.len())
            .finish()
    }
}
