mod chain;
pub use chain::{TypeGuesser, TypeGuesserChain};

mod mapping;
pub use mapping::MappingTypeGuesser;

use crate::FieldType;

/// How certain a guesser is about its guess.
///
/// Ordering matters: the chain keeps the highest-confidence guess and breaks
/// ties in favor of the first registered guesser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Confidence {
    Unknown,
    Low,
    Medium,
    High,
}

/// A single guesser's answer: a semantic type and how sure it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeGuess {
    pub ty: FieldType,
    pub confidence: Confidence,
}

impl TypeGuess {
    pub fn new(ty: FieldType, confidence: Confidence) -> Self {
        Self { ty, confidence }
    }

    pub fn high(ty: FieldType) -> Self {
        Self::new(ty, Confidence::High)
    }
}
