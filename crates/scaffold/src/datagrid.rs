mod filter;
pub use filter::{Filter, FilterCtor, FilterKind, FilterRegistry};

mod pager;
pub use pager::Pager;

mod query;
pub use query::{Criterion, Operator, ProxyQuery, SortOrder};

use crate::form::FieldFactory;
use indexmap::IndexMap;
use scaffold_core::metadata::ClassId;
use scaffold_core::Value;
use std::fmt;
use std::sync::Arc;

/// The composite backing a list view: the scoped query, the pager, the
/// filters keyed by field name, the widget factory for the filter form, and
/// the current filter values.
///
/// Everything the list rendering layer depends on hangs off this one object.
pub struct Datagrid {
    class: ClassId,
    query: ProxyQuery,
    pager: Pager,
    filters: IndexMap<String, Filter>,
    values: IndexMap<String, Value>,
    factory: Arc<dyn FieldFactory>,
}

impl Datagrid {
    pub(crate) fn new(
        class: ClassId,
        query: ProxyQuery,
        pager: Pager,
        factory: Arc<dyn FieldFactory>,
        values: IndexMap<String, Value>,
    ) -> Self {
        Self {
            class,
            query,
            pager,
            filters: IndexMap::new(),
            values,
            factory,
        }
    }

    pub fn class(&self) -> ClassId {
        self.class
    }

    pub fn query(&self) -> &ProxyQuery {
        &self.query
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut Pager {
        &mut self.pager
    }

    pub fn values(&self) -> &IndexMap<String, Value> {
        &self.values
    }

    pub fn factory(&self) -> &Arc<dyn FieldFactory> {
        &self.factory
    }

    /// Registers a filter, binding any current value for its field.
    pub fn add_filter(&mut self, mut filter: Filter) {
        if let Some(value) = self.values.get(&filter.name) {
            filter.value = Some(value.clone());
        }
        self.filters.insert(filter.name.clone(), filter);
    }

    pub fn filter(&self, name: &str) -> Option<&Filter> {
        self.filters.get(name)
    }

    pub fn has_filter(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    pub fn filters(&self) -> impl Iterator<Item = &Filter> {
        self.filters.values()
    }

    pub fn has_active_filters(&self) -> bool {
        self.filters.values().any(Filter::is_active)
    }

    /// The scoped query with every active filter's predicate applied.
    pub fn build_query(&self) -> ProxyQuery {
        let mut query = self.query.clone();
        for filter in self.filters.values() {
            if let Some(criterion) = filter.criterion() {
                query.filter(criterion);
            }
        }
        query
    }
}

impl fmt::Debug for Datagrid {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Datagrid")
            .field("class", &self.class)
            .field("query", &self.query)
            .field("pager", &self.pager)
            .field("filters", &self.filters.keys().collect::<Vec<_>>())
            .field("values", &self.values)
            .finish()
    }
}
