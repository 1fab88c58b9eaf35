//! Search controller: query execution and paginated rendering

use crate::catalog::{Catalog, CatalogQuery, Product};
use crate::config::ShopConfig;
use crate::error::CatalogError;

use super::render::{ProductCard, Renderer};
use super::state::SearchState;

/// Identifies one issued search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchTicket(u64);

/// A search that has been started and awaits its response
#[derive(Debug, Clone)]
pub struct PendingSearch {
    pub ticket: SearchTicket,
    pub query: CatalogQuery,
    pub request_id: uuid::Uuid,
}

/// What happened when a response settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Rendered { total: usize },
    Failed(CatalogError),
    /// A newer search was issued; the response was dropped
    Stale,
}

pub struct SearchController {
    state: SearchState,
    page_size: usize,
    api_base: String,
    ignore_stale: bool,
    latest: u64,
}

impl SearchController {
    pub fn new(config: &ShopConfig) -> Self {
        Self {
            state: SearchState::new(&config.sort),
            page_size: config.page_size.max(1),
            api_base: config.api_base_url.clone(),
            ignore_stale: config.ignore_stale_responses,
            latest: 0,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Reset state and the display for a new search.
    pub fn begin_search<R: Renderer>(&mut self, input: &str, renderer: &mut R) -> PendingSearch {
        let query = CatalogQuery::new(input, &self.state.sort);
        if self.state.loading {
            tracing::debug!(previous = %self.state.query, "Previous search still in flight");
        }
        self.state.reset(query.text.as_deref().unwrap_or_default());
        self.latest += 1;

        renderer.set_loading(true);
        renderer.set_result_count(None);
        renderer.render_list(&[]);
        renderer.set_show_more_visible(false);

        let pending = PendingSearch {
            ticket: SearchTicket(self.latest),
            query,
            request_id: uuid::Uuid::new_v4(),
        };
        tracing::info!(
            request_id = %pending.request_id,
            query = ?pending.query.text,
            "Searching catalog"
        );
        pending
    }

    /// Apply the settled response of `pending`.
    pub fn complete_search<R: Renderer>(
        &mut self,
        pending: &PendingSearch,
        result: Result<Vec<Product>, CatalogError>,
        renderer: &mut R,
    ) -> SearchOutcome {
        if self.ignore_stale && pending.ticket.0 != self.latest {
            tracing::debug!(request_id = %pending.request_id, "Dropping stale catalog response");
            return SearchOutcome::Stale;
        }

        let outcome = match result {
            Ok(products) => {
                let total = products.len();
                tracing::info!(request_id = %pending.request_id, query = %self.state.query, total, "Catalog search complete");
                self.state.results = products;
                self.state.page = 1;
                renderer.set_result_count(Some(total));
                self.render(renderer);
                SearchOutcome::Rendered { total }
            }
            Err(err) => {
                tracing::error!(request_id = %pending.request_id, "Catalog search failed: {}", err);
                self.state.results.clear();
                self.state.page = 1;
                renderer.set_result_count(None);
                self.render(renderer);
                SearchOutcome::Failed(err)
            }
        };

        self.state.loading = false;
        renderer.set_loading(false);
        outcome
    }

    /// Begin, fetch and complete in one go.
    pub async fn run_search<R: Renderer>(
        &mut self,
        input: &str,
        catalog: &dyn Catalog,
        renderer: &mut R,
    ) -> SearchOutcome {
        let pending = self.begin_search(input, renderer);
        let result = catalog.search(&pending.query).await;
        self.complete_search(&pending, result, renderer)
    }

    /// Reveal the next page. Never fetches.
    pub fn show_more<R: Renderer>(&mut self, renderer: &mut R) -> bool {
        if !self.state.has_more(self.page_size) {
            return false;
        }
        self.state.page += 1;
        self.render(renderer);
        true
    }

    /// Rebuild every visible card from state.
    pub fn render<R: Renderer>(&self, renderer: &mut R) {
        renderer.render_list(&self.visible_cards());
        renderer.set_show_more_visible(self.state.has_more(self.page_size));
    }

    pub fn visible_cards(&self) -> Vec<ProductCard> {
        self.state
            .visible(self.page_size)
            .iter()
            .map(|product| ProductCard::from_product(product, &self.api_base))
            .collect()
    }
}
