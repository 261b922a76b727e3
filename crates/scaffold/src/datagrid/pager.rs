const DEFAULT_MAX_PER_PAGE: usize = 25;

/// Paging state for a datagrid.
///
/// Initialized with the administered class's identifier field(s) as the
/// default count column. Result counting itself happens in the persistence
/// layer; the pager only holds the numbers.
#[derive(Debug, Clone)]
pub struct Pager {
    page: usize,
    max_per_page: usize,
    count_columns: Vec<String>,
    nb_results: Option<usize>,
}

impl Pager {
    pub fn new(count_columns: Vec<String>) -> Self {
        Self {
            page: 1,
            max_per_page: DEFAULT_MAX_PER_PAGE,
            count_columns,
            nb_results: None,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn max_per_page(&self) -> usize {
        self.max_per_page
    }

    pub fn set_max_per_page(&mut self, max: usize) {
        self.max_per_page = max.max(1);
    }

    pub fn count_columns(&self) -> &[String] {
        &self.count_columns
    }

    pub fn nb_results(&self) -> Option<usize> {
        self.nb_results
    }

    pub fn set_nb_results(&mut self, nb: usize) {
        self.nb_results = Some(nb);
    }

    /// Offset of the first result on the current page.
    pub fn first_result(&self) -> usize {
        (self.page - 1) * self.max_per_page
    }

    pub fn last_page(&self) -> usize {
        match self.nb_results {
            Some(nb) => nb.div_ceil(self.max_per_page).max(1),
            None => 1,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.last_page()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets() {
        let mut pager = Pager::new(vec!["id".to_string()]);
        assert_eq!(pager.first_result(), 0);

        pager.set_page(3);
        assert_eq!(pager.first_result(), 50);
    }

    #[test]
    fn last_page_rounds_up() {
        let mut pager = Pager::new(vec!["id".to_string()]);
        pager.set_nb_results(51);
        assert_eq!(pager.last_page(), 3);

        pager.set_nb_results(0);
        assert_eq!(pager.last_page(), 1);
    }

    #[test]
    fn page_clamps_to_one() {
        let mut pager = Pager::new(vec!["id".to_string()]);
        pager.set_page(0);
        assert_eq!(pager.page(), 1);
    }
}
