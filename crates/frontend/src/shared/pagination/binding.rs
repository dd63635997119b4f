//! Leptos glue: controller state as a signal, actions as spawned tasks

use std::future::Future;
use std::rc::Rc;

use contracts::shared::pagination::PageSize;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::config::PaginationConfig;
use super::controller::{FetchOutcome, PaginationController};
use super::fetcher::ListSource;
use super::ready::{AggregateStatus, ReadyAggregator};
use super::state::{PageTarget, PaginationState};

/// Copyable handle to a controller living in the reactive owner
pub struct PaginationHandle<T: 'static> {
    controller: StoredValue<Rc<PaginationController<T>>, LocalStorage>,
    state: RwSignal<PaginationState<T>>,
}

impl<T: 'static> Clone for PaginationHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for PaginationHandle<T> {}

/// Mirrors `controller` into a signal and starts loading `source`.
///
/// `name` is the key the page position is remembered under.
pub fn use_pagination<T>(
    controller: PaginationController<T>,
    name: impl Into<String>,
    source: ListSource,
) -> PaginationHandle<T>
where
    T: Clone + Send + Sync + 'static,
{
    let state = RwSignal::new(controller.state());
    controller.subscribe(move |current| {
        // the owner may already be gone when a late response arrives
        let _ = state.try_set(current.clone());
    });

    let handle = PaginationHandle {
        controller: StoredValue::new_local(Rc::new(controller)),
        state,
    };

    let name = name.into();
    handle.spawn(move |controller| async move { controller.init(name, source).await });
    handle
}

impl<T> PaginationHandle<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn state(&self) -> ReadSignal<PaginationState<T>> {
        self.state.read_only()
    }

    /// Tracked access to the current state
    pub fn with<R>(&self, f: impl FnOnce(&PaginationState<T>) -> R) -> R {
        self.state.with(f)
    }

    pub fn config(&self) -> PaginationConfig {
        self.controller
            .try_with_value(|controller| controller.config().clone())
            .unwrap_or_default()
    }

    pub fn set_page(&self, page: impl Into<PageTarget>) {
        let page = page.into();
        self.spawn(move |controller| async move { controller.set_page(page, false).await });
    }

    pub fn update_page_size(&self, page_size: PageSize) {
        self.spawn(move |controller| async move { controller.update_page_size(page_size).await });
    }

    /// Raw `<select>` value, `-1` meaning all items
    pub fn update_page_size_from(&self, raw: String) {
        self.spawn(move |controller| async move { controller.update_page_size_from(&raw).await });
    }

    pub fn refresh(&self) {
        self.spawn(|controller| async move { controller.refresh().await });
    }

    pub fn set_sort_column(&self, column: Option<String>, modifier: bool) {
        self.spawn(move |controller| async move {
            controller.set_sort_column(column.as_deref(), modifier).await
        });
    }

    pub fn set_sort_direction(&self, desc: bool) {
        self.spawn(move |controller| async move { controller.set_sort_direction(desc).await });
    }

    pub fn set_sort_default(&self, column: Option<String>, desc: Option<bool>) {
        self.spawn(move |controller| async move {
            controller.set_sort_default(column.as_deref(), desc).await
        });
    }

    fn spawn<F, Fut>(&self, action: F)
    where
        F: FnOnce(Rc<PaginationController<T>>) -> Fut + 'static,
        Fut: Future<Output = FetchOutcome> + 'static,
    {
        let Some(controller) = self.controller.try_get_value() else {
            log::warn!("Pagination action after the list was disposed");
            return;
        };
        spawn_local(async move {
            let outcome = action(controller).await;
            log::debug!("Pagination action finished: {:?}", outcome);
        });
    }
}

/// Readiness of all lists of a page, shared through context
#[derive(Clone, Copy)]
pub struct ReadyHandle {
    aggregator: StoredValue<Rc<ReadyAggregator>, LocalStorage>,
    status: RwSignal<AggregateStatus>,
}

impl ReadyHandle {
    pub fn aggregator(&self) -> Option<Rc<ReadyAggregator>> {
        self.aggregator.try_get_value()
    }

    pub fn status(&self) -> ReadSignal<AggregateStatus> {
        self.status.read_only()
    }
}

/// Creates the aggregator for the current page and makes it available to child lists
pub fn provide_ready_aggregator() -> ReadyHandle {
    let aggregator = ReadyAggregator::new();
    let status = RwSignal::new(aggregator.status());
    aggregator.subscribe(move |current| {
        let _ = status.try_set(current.clone());
    });

    let handle = ReadyHandle {
        aggregator: StoredValue::new_local(aggregator),
        status,
    };
    provide_context(handle);
    handle
}

pub fn use_ready_aggregator() -> Option<ReadyHandle> {
    use_context::<ReadyHandle>()
}
