//! Client-side pagination of server lists
//!
//! [`PaginationController`] keeps the state of one list and talks to the list
//! endpoint, [`binding`] connects it to Leptos signals, the components in
//! `shared::components::pagination_controls` render it.

pub mod binding;
pub mod config;
pub mod controller;
pub mod error_content;
pub mod fetcher;
pub mod preference;
pub mod ready;
pub mod sort;
pub mod state;

pub use binding::{provide_ready_aggregator, use_pagination, use_ready_aggregator, PaginationHandle, ReadyHandle};
pub use config::{load_config, PaginationConfig};
pub use controller::{FetchOutcome, PaginationController};
pub use fetcher::{FetchError, HttpListFetcher, ListFetcher, ListSource};
pub use preference::{LocalStoragePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use ready::{AggregateStatus, ReadyAggregator};
pub use sort::SortState;
pub use state::{PageDescriptor, PageTarget, PaginationState, Phase};
