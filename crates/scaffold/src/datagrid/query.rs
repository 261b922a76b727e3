use scaffold_core::metadata::ClassId;
use scaffold_core::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// A comparison operator produced by a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Contains,
    In,
}

/// One predicate contributed to the query by an active filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Criterion {
    pub field: String,
    pub op: Operator,
    pub value: Value,
}

/// A query scoped to one class.
///
/// This is the handle the core hands to the persistence layer; executing it
/// is not this crate's concern.
#[derive(Debug, Clone)]
pub struct ProxyQuery {
    pub class: ClassId,
    criteria: Vec<Criterion>,
    order: Option<(String, SortOrder)>,
}

impl ProxyQuery {
    pub fn new(class: ClassId) -> Self {
        Self {
            class,
            criteria: Vec::new(),
            order: None,
        }
    }

    pub fn filter(&mut self, criterion: Criterion) -> &mut Self {
        self.criteria.push(criterion);
        self
    }

    pub fn order_by(&mut self, field: impl Into<String>, order: SortOrder) -> &mut Self {
        self.order = Some((field.into(), order));
        self
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn order(&self) -> Option<(&str, SortOrder)> {
        self.order
            .as_ref()
            .map(|(field, order)| (field.as_str(), *order))
    }
}
