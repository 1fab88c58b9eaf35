//! Iced host for the search-and-catalog widget
//!
//! Owns the controller and the debouncer, and turns their requests into
//! iced tasks. All state changes happen inside `update`, on the UI loop.

use std::collections::HashMap;
use std::time::Duration;

use iced::task;
use iced::widget::{column, container, image, Space};
use iced::{Element, Length, Task, Theme};

use crate::catalog::{Catalog, CatalogClient, Product};
use crate::config::ShopConfig;
use crate::error::CatalogError;
use crate::ui;
use crate::widget::{
    DebounceTicket, Debouncer, PendingSearch, ProductCard, Renderer, Scheduler, SearchController,
};

// ============================================================================
// Display State
// ============================================================================

/// What the window currently shows; the controller writes it through
/// [`Renderer`], `view` reads it.
#[derive(Debug, Default)]
pub struct CatalogView {
    pub cards: Vec<ProductCard>,
    pub loading: bool,
    pub result_count: Option<usize>,
    pub show_more_visible: bool,
}

impl Renderer for CatalogView {
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
        self.show_more_visible = visible;
    }
}

#[derive(Debug, Clone)]
pub enum ImageState {
    Loading,
    Loaded(image::Handle),
    Failed,
}

// ============================================================================
// Debounce Timer
// ============================================================================

/// Schedules messages as abortable sleep tasks. Tasks queue up here until
/// `update` hands them to the runtime.
#[derive(Default)]
pub struct TaskScheduler {
    queued: Vec<Task<Message>>,
}

impl TaskScheduler {
    pub fn take(&mut self) -> Task<Message> {
        Task::batch(self.queued.drain(..))
    }
}

impl Scheduler for TaskScheduler {
    type Job = Message;
    type Handle = task::Handle;

    fn schedule(&mut self, delay: Duration, job: Message) -> task::Handle {
        let (task, handle) =
            Task::perform(async move { tokio::time::sleep(delay).await }, move |_| job.clone()).abortable();
        self.queued.push(task);
        handle
    }

    fn cancel(&mut self, handle: task::Handle) {
        handle.abort();
    }
}

// ============================================================================
// Application State
// ============================================================================

pub struct Shop {
    input: String,
    controller: SearchController,
    view: CatalogView,
    debouncer: Debouncer<TaskScheduler>,
    client: CatalogClient,
    images: HashMap<String, ImageState>,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Submit,
    DebounceElapsed(DebounceTicket),
    SearchSettled(PendingSearch, Result<Vec<Product>, CatalogError>),
    ShowMore,
    ImageLoaded(String, Result<image::Handle, CatalogError>),
}

impl Shop {
    pub fn new(config: &ShopConfig, client: CatalogClient) -> Self {
        Self {
            input: String::new(),
            controller: SearchController::new(config),
            view: CatalogView::default(),
            debouncer: Debouncer::new(TaskScheduler::default(), config.search_delay()),
            client,
            images: HashMap::new(),
        }
    }

    /// Build the widget and list the full catalog right away.
    pub fn boot(config: &ShopConfig, client: CatalogClient) -> (Self, Task<Message>) {
        let mut shop = Self::new(config, client);
        let task = shop.search();
        (shop, task)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputChanged(value) => {
                self.input = value;
                self.debouncer.trigger(Message::DebounceElapsed);
                self.debouncer.scheduler_mut().take()
            }

            Message::Submit => {
                if self.input.is_empty() {
                    return Task::none();
                }
                self.debouncer.cancel();
                self.search()
            }

            Message::DebounceElapsed(ticket) => {
                if self.debouncer.fire(ticket) {
                    self.search()
                } else {
                    Task::none()
                }
            }

            Message::SearchSettled(pending, result) => {
                self.controller.complete_search(&pending, result, &mut self.view);
                self.load_images()
            }

            Message::ShowMore => {
                self.controller.show_more(&mut self.view);
                self.load_images()
            }

            Message::ImageLoaded(url, result) => {
                let state = match result {
                    Ok(handle) => ImageState::Loaded(handle),
                    Err(err) => {
                        tracing::warn!("Could not load image {}: {}", url, err);
                        ImageState::Failed
                    }
                };
                self.images.insert(url, state);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let search_bar = ui::search_bar::view(
            &self.input,
            !self.input.is_empty(),
            self.view.loading,
            self.view.result_count,
        );
        let products = ui::product_list::view(
            &self.view.cards,
            &self.images,
            self.view.show_more_visible,
        );

        container(column![search_bar, Space::with_height(12), products])
            .padding(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(ui::theme::window)
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    // ========================================================================
    // Effects
    // ========================================================================

    fn search(&mut self) -> Task<Message> {
        let pending = self.controller.begin_search(&self.input, &mut self.view);
        let client = self.client.clone();
        let query = pending.query.clone();

        Task::perform(
            async move { client.search(&query).await },
            move |result| Message::SearchSettled(pending.clone(), result),
        )
    }

    /// Fetch images for visible cards that have not been requested yet.
    fn load_images(&mut self) -> Task<Message> {
        let mut tasks = Vec::new();

        for url in self.view.cards.iter().filter_map(|card| card.image_url.clone()) {
            if self.images.contains_key(&url) {
                continue;
            }
            self.images.insert(url.clone(), ImageState::Loading);

            let client = self.client.clone();
            tasks.push(Task::perform(
                {
                    let url = url.clone();
                    async move { client.fetch_bytes(&url).await.map(image::Handle::from_bytes) }
                },
                move |result| Message::ImageLoaded(url.clone(), result),
            ));
        }

        Task::batch(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::controller::tests::products;

    fn shop(page_size: usize) -> Shop {
        let config = ShopConfig {
            api_base_url: "https://h".to_string(),
            page_size,
            ..Default::default()
        };
        let client = CatalogClient::from_config(&config).unwrap();
        Shop::new(&config, client)
    }

    fn settle(shop: &mut Shop, result: Result<Vec<Product>, CatalogError>) {
        let pending = shop.controller.begin_search(&shop.input, &mut shop.view);
        let _ = shop.update(Message::SearchSettled(pending, result));
    }

    #[test]
    fn test_typing_keeps_one_pending_search() {
        let mut shop = shop(3);
        let _ = shop.update(Message::InputChanged("d".to_string()));
        let first = shop.debouncer.pending_ticket().unwrap();
        let _ = shop.update(Message::InputChanged("dr".to_string()));
        let second = shop.debouncer.pending_ticket().unwrap();

        assert_ne!(first, second);
        assert_eq!(shop.input, "dr");

        // Superseded timer does nothing
        let _ = shop.update(Message::DebounceElapsed(first));
        assert!(!shop.view.loading);
        assert!(shop.debouncer.is_pending());

        let _ = shop.update(Message::DebounceElapsed(second));
        assert!(shop.view.loading);
        assert!(!shop.debouncer.is_pending());
    }

    #[test]
    fn test_scheduled_timer_queues_one_task() {
        let mut scheduler = TaskScheduler::default();
        let handle = scheduler.schedule(Duration::from_millis(5), Message::ShowMore);
        assert_eq!(scheduler.queued.len(), 1);

        scheduler.cancel(handle);
        let _ = scheduler.take();
        assert!(scheduler.queued.is_empty());
    }

    #[test]
    fn test_submit_ignored_for_empty_input() {
        let mut shop = shop(3);
        let _ = shop.update(Message::Submit);
        assert!(!shop.view.loading);
    }

    #[test]
    fn test_submit_cancels_pending_debounce() {
        let mut shop = shop(3);
        let _ = shop.update(Message::InputChanged("drill".to_string()));
        let _ = shop.update(Message::Submit);

        assert!(!shop.debouncer.is_pending());
        assert!(shop.view.loading);
        assert_eq!(shop.view.result_count, None);
    }

    #[test]
    fn test_settled_search_fills_view_and_requests_images() {
        let mut shop = shop(3);
        shop.input = "drill".to_string();
        settle(&mut shop, Ok(products(12)));

        assert_eq!(shop.view.cards.len(), 3);
        assert_eq!(shop.view.result_count, Some(12));
        assert!(shop.view.show_more_visible);
        assert!(!shop.view.loading);
        assert_eq!(shop.images.len(), 3);
        assert!(matches!(shop.images.get("https://h/img/1.png"), Some(ImageState::Loading)));

        let _ = shop.update(Message::ShowMore);
        assert_eq!(shop.view.cards.len(), 6);
        assert_eq!(shop.images.len(), 6);
    }

    #[test]
    fn test_failed_search_leaves_empty_view() {
        let mut shop = shop(3);
        settle(&mut shop, Err(CatalogError::Transport("connection reset".to_string())));

        assert!(shop.view.cards.is_empty());
        assert_eq!(shop.view.result_count, None);
        assert!(!shop.view.loading);
        assert!(!shop.view.show_more_visible);
    }

    #[test]
    fn test_failed_image_is_remembered() {
        let mut shop = shop(3);
        let url = "https://h/img/1.png".to_string();
        let _ = shop.update(Message::ImageLoaded(
            url.clone(),
            Err(CatalogError::Status { status: 404, url: url.clone() }),
        ));
        assert!(matches!(shop.images.get(&url), Some(ImageState::Failed)));
    }
}
