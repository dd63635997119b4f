use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_icon, get_sort_title};
use crate::shared::pagination::PaginationHandle;
use contracts::shared::pagination::PageSize;
use leptos::prelude::*;

/// Page links of a paginated list
///
/// The active page is plain text, the others are links. Hidden when the list
/// fits on one page.
#[component]
pub fn PaginationPages<T>(handle: PaginationHandle<T>) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let current_page = move || handle.with(|s| s.page_index.unwrap_or(0));
    let last_page = move || handle.with(|s| s.pages.len().saturating_sub(1));

    view! {
        <Show when=move || !handle.with(|s| s.is_single_page())>
            <div class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| handle.set_page(0usize)
                    disabled=move || current_page() == 0
                    title="Первая страница"
                >
                    {icon("chevrons-left")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| handle.set_page(current_page().saturating_sub(1))
                    disabled=move || current_page() == 0
                    title="Предыдущая страница"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    handle
                        .with(|s| s.pages.clone())
                        .into_iter()
                        .enumerate()
                        .map(|(index, page)| {
                            if page.active {
                                view! {
                                    <span class="pagination-page pagination-page--active">{index + 1}</span>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <a
                                        href="#"
                                        class="pagination-page"
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            handle.set_page(index);
                                        }
                                    >
                                        {index + 1}
                                    </a>
                                }
                                    .into_any()
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| handle.set_page(current_page() + 1)
                    disabled=move || current_page() >= last_page()
                    title="Следующая страница"
                >
                    {icon("chevron-right")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| handle.set_page(last_page())
                    disabled=move || current_page() >= last_page()
                    title="Последняя страница"
                >
                    {icon("chevrons-right")}
                </button>
                <span class="pagination-info">
                    {move || handle.with(|s| format!("Всего: {}", s.total_count))}
                </span>
            </div>
        </Show>
    }
}

/// Page size selector with an optional "all items" entry and refresh button
///
/// Hidden while everything fits on one page of the smallest offered size.
#[component]
pub fn PaginationPageSize<T>(
    handle: PaginationHandle<T>,
    /// Offer "-1" (all items)
    #[prop(optional)]
    unlimited: bool,
    /// Show the refresh button
    #[prop(optional)]
    refresh: bool,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let config = handle.config();
    let smallest = config.smallest_page_size();
    let options = StoredValue::new(config.page_size_options);
    let visible = move || handle.with(|s| !(s.is_single_page() && s.total_count <= smallest));
    let is_selected = move |size: PageSize| handle.with(|s| s.page_size == size);

    view! {
        <Show when=visible>
            <div class="pagination-page-size">
                <span>"Показывать по:"</span>
                <select
                    class="page-size-select"
                    on:change=move |ev| handle.update_page_size_from(event_target_value(&ev))
                    prop:value=move || handle.with(|s| s.page_size.to_string())
                >
                    {options
                        .get_value()
                        .into_iter()
                        .map(|size| {
                            view! {
                                <option value=size.to_string() selected=move || is_selected(size)>
                                    {size.to_string()}
                                </option>
                            }
                        })
                        .collect_view()}
                    {unlimited
                        .then(|| {
                            view! {
                                <option
                                    value=PageSize::Unlimited.to_string()
                                    selected=move || is_selected(PageSize::Unlimited)
                                >
                                    "Все"
                                </option>
                            }
                        })}
                </select>
                {refresh
                    .then(|| {
                        view! {
                            <button
                                class="pagination-btn"
                                on:click=move |_| handle.refresh()
                                disabled=move || handle.with(|s| s.loading)
                                title="Обновить"
                            >
                                {icon("refresh")}
                            </button>
                        }
                    })}
            </div>
        </Show>
    }
}

/// Sortable column header
///
/// Click sorts by `column` or flips the direction, shift-click clears the sort.
#[component]
pub fn PaginationSort<T>(
    handle: PaginationHandle<T>,
    column: &'static str,
    children: Children,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let direction = move || handle.with(|s| s.sort.direction_of(column));

    view! {
        <span
            class=move || get_sort_class(direction())
            title=move || get_sort_title(direction())
            style="cursor: pointer; user-select: none;"
            on:click=move |ev| handle.set_sort_column(Some(column.to_string()), ev.shift_key())
        >
            {children()}
            " "
            {move || icon(get_sort_icon(direction()))}
        </span>
    }
}

/// Ascending/descending toggle without a sort column
#[component]
pub fn PaginationSortDirection<T>(handle: PaginationHandle<T>) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let desc = move || handle.with(|s| s.sort.desc.unwrap_or(false));

    view! {
        <button
            class="pagination-btn"
            on:click=move |_| handle.set_sort_direction(!desc())
            title=move || if desc() { "Сначала новые" } else { "Сначала старые" }
        >
            {move || icon(if desc() { "chevron-down" } else { "chevron-up" })}
        </button>
    }
}

/// Restores the default sort of the list
#[component]
pub fn PaginationSortDefault<T>(handle: PaginationHandle<T>) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    view! {
        <button
            class="pagination-btn"
            on:click=move |_| handle.set_sort_column(None, false)
            title="Сортировка по умолчанию"
        >
            {icon("rotate-ccw")}
        </button>
    }
}

/// Error of the last failed request; may contain markup from the server error page
#[component]
pub fn PaginationError<T>(handle: PaginationHandle<T>) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    view! {
        <Show when=move || handle.with(|s| s.error)>
            <div class="pagination-error">
                {icon("alert-circle")}
                <div inner_html=move || handle.with(|s| s.error_message.clone().unwrap_or_default())></div>
            </div>
        </Show>
    }
}
