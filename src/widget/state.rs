//! Search state and pagination arithmetic

use crate::catalog::Product;

/// State of the active search. Owned by one controller.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub query: String,
    pub sort: String,
    /// 1-based
    pub page: usize,
    pub results: Vec<Product>,
    pub loading: bool,
}

impl SearchState {
    pub fn new(sort: &str) -> Self {
        Self {
            query: String::new(),
            sort: sort.to_string(),
            page: 1,
            results: Vec::new(),
            loading: false,
        }
    }

    /// Start over for a new query: page 1, no results, loading.
    pub fn reset(&mut self, query: &str) {
        self.query = query.to_string();
        self.page = 1;
        self.results.clear();
        self.loading = true;
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn visible_count(&self, page_size: usize) -> usize {
        self.page.saturating_mul(page_size).min(self.results.len())
    }

    pub fn visible(&self, page_size: usize) -> &[Product] {
        &self.results[..self.visible_count(page_size)]
    }

    pub fn has_more(&self, page_size: usize) -> bool {
        self.visible_count(page_size) < self.results.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(n: usize) -> SearchState {
        let mut state = SearchState::new("title");
        state.results = (0..n)
            .map(|i| Product {
                title: format!("item {}", i),
                ..Default::default()
            })
            .collect();
        state
    }

    #[test]
    fn test_visible_count_caps_at_total() {
        let mut state = state_with(7);
        assert_eq!(state.visible_count(3), 3);
        assert!(state.has_more(3));

        state.page = 3;
        assert_eq!(state.visible_count(3), 7);
        assert!(!state.has_more(3));

        state.page = 10;
        assert_eq!(state.visible(3).len(), 7);
    }

    #[test]
    fn test_empty_results() {
        let state = state_with(0);
        assert_eq!(state.visible_count(5), 0);
        assert!(!state.has_more(5));
    }

    #[test]
    fn test_reset() {
        let mut state = state_with(4);
        state.page = 2;
        state.reset("saw");

        assert_eq!(state.query, "saw");
        assert_eq!(state.page, 1);
        assert_eq!(state.total(), 0);
        assert!(state.loading);
        assert_eq!(state.sort, "title");
    }
}
