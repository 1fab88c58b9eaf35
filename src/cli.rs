//! Headless search for the terminal
//!
//! Drives the same controller as the window, rendering cards as text.

use std::io::Write;

use crate::catalog::Catalog;
use crate::config::ShopConfig;
use crate::widget::render::result_count_text;
use crate::widget::{ProductCard, Renderer, SearchController, SearchOutcome};

/// Renderer that keeps the latest display state for printing
#[derive(Debug, Default)]
pub struct TerminalRenderer {
    cards: Vec<ProductCard>,
    loading: bool,
    result_count: Option<usize>,
    show_more: bool,
}

impl Renderer for TerminalRenderer {
    fn render_list(&mut self, cards: &[ProductCard]) {
        self.cards = cards.to_vec();
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn set_result_count(&mut self, count: Option<usize>) {
        self.result_count = count;
    }

    fn set_show_more_visible(&mut self, visible: bool) {
        self.show_more = visible;
    }
}

impl TerminalRenderer {
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        if self.loading {
            writeln!(out, "Searching...")?;
        }
        if let Some(count) = self.result_count {
            writeln!(out, "{}\n", result_count_text(count))?;
        }

        for card in &self.cards {
            writeln!(out, "{}  {}", card.title, card.price)?;
            if !card.stars.is_empty() {
                writeln!(out, "  {}", card.stars)?;
            }
            if !card.description.is_empty() {
                writeln!(out, "  {}", card.description)?;
            }
            if let Some(url) = &card.image_url {
                writeln!(out, "  {}", url)?;
            }
            writeln!(out)?;
        }

        if self.show_more {
            writeln!(out, "More results available (use --pages to reveal them)")?;
        }
        Ok(())
    }
}

/// Process exit status for a bad command line
pub const EXIT_USAGE: u8 = 2;

/// Process exit status for a finished search: 0 when results (possibly
/// none) were rendered, 1 when the request failed.
pub fn exit_status(outcome: &SearchOutcome) -> u8 {
    match outcome {
        SearchOutcome::Rendered { .. } | SearchOutcome::Stale => 0,
        SearchOutcome::Failed(_) => 1,
    }
}

/// Run one search and reveal `pages` pages of it.
pub async fn run_search(
    config: &ShopConfig,
    catalog: &dyn Catalog,
    text: &str,
    pages: usize,
) -> (SearchOutcome, TerminalRenderer) {
    let mut controller = SearchController::new(config);
    let mut renderer = TerminalRenderer::default();

    let outcome = controller.run_search(text, catalog, &mut renderer).await;
    if matches!(outcome, SearchOutcome::Rendered { .. }) {
        for _ in 1..pages {
            if !controller.show_more(&mut renderer) {
                break;
            }
        }
        let state = controller.state();
        tracing::debug!(page = state.page, total = state.total(), "Revealed result pages");
    }
    (outcome, renderer)
}
