//! Search-and-catalog widget core
//!
//! Independent of the display toolkit: the controller talks to a
//! [`Renderer`] and the debouncer to a [`Scheduler`].

pub mod controller;
pub mod debounce;
pub mod render;
pub mod state;

pub use controller::{PendingSearch, SearchController, SearchOutcome};
pub use debounce::{DebounceTicket, Debouncer, Scheduler};
pub use render::{ProductCard, Renderer};
