//! Pagination controller
//!
//! Owns the state of one paginated list and turns user actions into list
//! requests. The endpoint must answer in the format described in
//! [`contracts::shared::pagination`].
//!
//! Every fetch gets a sequence number; only the latest fetch may change the
//! state, responses of older ones are dropped. All operations are `async` and
//! report what happened through [`FetchOutcome`]; failures end up in
//! `error` / `error_message` of the state, never in the return value.

use std::cell::RefCell;
use std::rc::Rc;

use contracts::shared::pagination::{ListRequest, ListResponse, PagePreference, PageSize};

use super::config::PaginationConfig;
use super::error_content::describe_fetch_error;
use super::fetcher::{FetchError, ListFetcher, ListSource};
use super::preference::PreferenceStore;
use super::ready::ReadyAggregator;
use super::sort::SortState;
use super::state::{aligned_start, build_pages, PageTarget, PaginationState};

/// Result of a controller operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Nothing had to be fetched
    Unchanged,
    /// Data was fetched and applied
    Applied,
    /// The fetch failed, the error is in the state
    Failed,
    /// A newer fetch was started meanwhile, the response was dropped
    Superseded,
}

impl FetchOutcome {
    /// The requested page is shown (either already was, or now is)
    pub fn is_settled(self) -> bool {
        matches!(self, FetchOutcome::Unchanged | FetchOutcome::Applied)
    }
}

struct Inner<T> {
    name: Option<String>,
    source: Option<ListSource>,
    state: PaginationState<T>,
    sort_default: SortState,
    latest_seq: u64,
    reported_ready: bool,
}

pub struct PaginationController<T> {
    config: PaginationConfig,
    fetcher: Box<dyn ListFetcher<T>>,
    store: Box<dyn PreferenceStore>,
    aggregator: Option<Rc<ReadyAggregator>>,
    current_url: Box<dyn Fn() -> String>,
    inner: RefCell<Inner<T>>,
    listeners: RefCell<Vec<Box<dyn Fn(&PaginationState<T>)>>>,
}

impl<T: 'static> PaginationController<T> {
    pub fn new(
        config: PaginationConfig,
        fetcher: impl ListFetcher<T> + 'static,
        store: impl PreferenceStore + 'static,
    ) -> Self {
        let state = PaginationState::new(config.default_page_size);
        Self {
            config,
            fetcher: Box::new(fetcher),
            store: Box::new(store),
            aggregator: None,
            current_url: Box::new(|| "/".to_string()),
            inner: RefCell::new(Inner {
                name: None,
                source: None,
                state,
                sort_default: SortState::default(),
                latest_seq: 0,
                reported_ready: false,
            }),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Joins `aggregator` as one more section that has to become ready
    pub fn with_aggregator(mut self, aggregator: Rc<ReadyAggregator>) -> Self {
        aggregator.register_child();
        self.aggregator = Some(aggregator);
        self
    }

    /// Source of the URL that "back" links in error pages should point to
    pub fn with_current_url(mut self, current_url: impl Fn() -> String + 'static) -> Self {
        self.current_url = Box::new(current_url);
        self
    }

    /// Default sort, applied right away (before the first fetch nothing is requested)
    pub fn with_sort_default(self, column: Option<&str>, desc: Option<bool>) -> Self {
        {
            let mut inner = self.inner.borrow_mut();
            inner.sort_default = SortState::new(column, Some(desc.unwrap_or(false)));
            inner.state.sort = inner.sort_default.clone();
        }
        self
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    pub fn name(&self) -> Option<String> {
        self.inner.borrow().name.clone()
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&PaginationState<T>) -> R) -> R {
        f(&self.inner.borrow().state)
    }

    pub fn state(&self) -> PaginationState<T>
    where
        T: Clone,
    {
        self.inner.borrow().state.clone()
    }

    /// Called after every state change. Listeners must not call back into the controller.
    pub fn subscribe(&self, listener: impl Fn(&PaginationState<T>) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Binds the list to `name` (preference key) and `source`, then loads the first page.
    ///
    /// A stored preference restores page size and page index. The section is
    /// reported ready once the restored page is shown.
    ///
    /// When another operation supersedes the first fetch (a page size change
    /// while loading), that operation's page is kept and the stored page index
    /// is not applied; the superseding operation reports readiness.
    pub async fn init(&self, name: impl Into<String>, source: ListSource) -> FetchOutcome {
        let name = name.into();
        let preference = match self.store.get(&name) {
            Ok(preference) => preference,
            Err(e) => {
                log::warn!("Failed to load pagination preference '{}': {}", name, e);
                None
            }
        };

        {
            let mut inner = self.inner.borrow_mut();
            let page_size = preference.map_or(self.config.default_page_size, |p| p.page_size);
            let mut state = PaginationState::new(page_size);
            state.sort = inner.state.sort.clone();
            inner.state = state;
            inner.name = Some(name);
            inner.source = Some(source);
        }
        self.notify();

        let outcome = self.fetch(0, None).await;
        if outcome != FetchOutcome::Applied {
            return outcome;
        }

        if let Some(preference) = preference {
            let restored = self.set_page(preference.page_index, false).await;
            if !restored.is_settled() {
                return restored;
            }
        }
        self.mark_ready();
        FetchOutcome::Applied
    }

    /// Shows page `page` (clamped to the existing pages).
    ///
    /// Returns [`FetchOutcome::Unchanged`] without fetching when the page is
    /// already shown, unless `force_reload` is set.
    pub async fn set_page(&self, page: impl Into<PageTarget>, force_reload: bool) -> FetchOutcome {
        let target = page.into();
        let start = {
            let inner = self.inner.borrow();
            if !force_reload && target.is_current(inner.state.page_index) {
                return FetchOutcome::Unchanged;
            }
            let index = target.clamp(inner.state.pages.len());
            inner.state.pages.get(index).map_or(0, |page| page.start)
        };

        let outcome = self.fetch(start, None).await;
        if outcome == FetchOutcome::Applied {
            self.mark_ready();
            self.store_preference();
        }
        outcome
    }

    /// Switches to `page_size`, staying on the page that contains the first
    /// item of the current page.
    pub async fn update_page_size(&self, page_size: PageSize) -> FetchOutcome {
        let start = {
            let inner = self.inner.borrow();
            let anchor = inner.state.active_page().map_or(0, |page| page.start);
            aligned_start(anchor, page_size)
        };

        let outcome = self.fetch(start, Some(page_size)).await;
        if outcome == FetchOutcome::Applied {
            self.mark_ready();
            self.store_preference();
        }
        outcome
    }

    /// [`update_page_size`](Self::update_page_size) for raw selector values; unparsable input is ignored
    pub async fn update_page_size_from(&self, raw: &str) -> FetchOutcome {
        match raw.parse::<PageSize>() {
            Ok(page_size) => self.update_page_size(page_size).await,
            Err(e) => {
                log::warn!("Ignoring page size {:?}: {}", raw, e);
                FetchOutcome::Unchanged
            }
        }
    }

    /// Fetches the current page again
    pub async fn refresh(&self) -> FetchOutcome {
        let current = self.inner.borrow().state.page_index.unwrap_or(0);
        self.set_page(current, true).await
    }

    /// Column header click, see [`SortState::toggle_column`]
    pub async fn set_sort_column(&self, column: Option<&str>, modifier: bool) -> FetchOutcome {
        self.change_sort(|sort, default| sort.toggle_column(column, modifier, default))
            .await
    }

    /// Direction-only toggle, drops the sort column
    pub async fn set_sort_direction(&self, desc: bool) -> FetchOutcome {
        self.change_sort(|sort, _| sort.set_direction(desc)).await
    }

    /// Replaces the default sort and switches to it
    pub async fn set_sort_default(&self, column: Option<&str>, desc: Option<bool>) -> FetchOutcome {
        self.inner.borrow_mut().sort_default = SortState::new(column, Some(desc.unwrap_or(false)));
        self.set_sort_column(None, false).await
    }

    async fn change_sort(&self, change: impl FnOnce(&mut SortState, &SortState)) -> FetchOutcome {
        let loaded = {
            let mut inner = self.inner.borrow_mut();
            let Inner {
                state, sort_default, ..
            } = &mut *inner;
            change(&mut state.sort, sort_default);
            state.loaded
        };
        self.notify();

        if loaded {
            self.refresh().await
        } else {
            FetchOutcome::Unchanged
        }
    }

    /// Requests items from `start`; `page_size` overrides the current page size
    async fn fetch(&self, start: usize, page_size: Option<PageSize>) -> FetchOutcome {
        let (seq, source, request) = {
            let mut inner = self.inner.borrow_mut();
            let Some(source) = inner.source.clone() else {
                log::warn!("Pagination fetch requested before init()");
                return FetchOutcome::Unchanged;
            };
            let sort = inner.state.sort.clone();
            let request = ListRequest {
                start,
                count: page_size.unwrap_or(inner.state.page_size),
                // a bare direction is sent too, the server applies it to its default column
                sort_desc: match sort.column {
                    Some(_) => Some(sort.desc.unwrap_or(false)),
                    None => sort.desc,
                },
                sort: sort.column,
            };
            inner.latest_seq += 1;
            inner.state.ready = false;
            inner.state.loading = true;
            (inner.latest_seq, source, request)
        };
        self.notify();

        let result = self.fetcher.list(&source, &request).await;

        if seq != self.inner.borrow().latest_seq {
            log::debug!("Dropping response for {} at {}: superseded", source.url, request.start);
            return FetchOutcome::Superseded;
        }

        match result {
            Ok(response) => {
                self.set_data(response, request.count);
                FetchOutcome::Applied
            }
            Err(error) => {
                self.set_error(&source, &error);
                FetchOutcome::Failed
            }
        }
    }

    fn set_data(&self, response: ListResponse<T>, page_size: PageSize) {
        {
            let mut inner = self.inner.borrow_mut();
            let state = &mut inner.state;
            state.error = false;
            state.error_message = None;
            state.sort.adopt(response.sort, response.sort_desc);
            state.page_size = page_size;

            let (pages, active) = build_pages(response.count, page_size, response.start);
            state.pages = pages;
            state.page_index = Some(active);
            state.items = response.items;
            state.total_count = response.count;

            state.loading = false;
            state.ready = true;
            state.loaded = true;
        }
        if let Some(aggregator) = &self.aggregator {
            aggregator.clear_error();
        }
        self.notify();
    }

    fn set_error(&self, source: &ListSource, error: &FetchError) {
        log::warn!("Failed to list {}: {}", source.url, error);
        let message = describe_fetch_error(error, &self.config, &(self.current_url)());
        {
            let mut inner = self.inner.borrow_mut();
            inner.state.loading = false;
            inner.state.error = true;
            inner.state.error_message = Some(message.clone());
        }
        if let Some(aggregator) = &self.aggregator {
            aggregator.set_error(message);
        }
        self.notify();
    }

    fn store_preference(&self) {
        let inner = self.inner.borrow();
        let (Some(name), Some(page_index)) = (&inner.name, inner.state.page_index) else {
            return;
        };
        let preference = PagePreference {
            page_index,
            page_size: inner.state.page_size,
        };
        if let Err(e) = self.store.put(name, &preference) {
            log::warn!("Failed to store pagination preference '{}': {}", name, e);
        }
    }

    /// Reports the first readiness to the aggregator, once
    fn mark_ready(&self) {
        let first = !std::mem::replace(&mut self.inner.borrow_mut().reported_ready, true);
        if first {
            if let Some(aggregator) = &self.aggregator {
                aggregator.child_ready();
            }
        }
    }

    fn notify(&self) {
        let inner = self.inner.borrow();
        for listener in self.listeners.borrow().iter() {
            listener(&inner.state);
        }
    }
}
