use crate::shared::api_utils::current_location;
use crate::shared::components::pagination_controls::{
    PaginationError, PaginationPageSize, PaginationPages, PaginationSort, PaginationSortDirection,
};
use crate::shared::pagination::{
    use_pagination, use_ready_aggregator, HttpListFetcher, ListSource,
    LocalStoragePreferenceStore, PaginationConfig, PaginationController, Phase,
};
use contracts::domain::a002_reservation_request::dto::ReservationRequestSummary;
use leptos::prelude::*;

const LIST_NAME: &str = "a002_reservation_request";
const LIST_URL: &str = "/api/reservation-requests/list";

fn format_date_time(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M").to_string()
}

/// Заявки на бронирование; `room` ограничивает список одной комнатой
#[component]
#[allow(non_snake_case)]
pub fn ReservationRequestList(#[prop(optional, into)] room: Option<String>) -> impl IntoView {
    let config = use_context::<PaginationConfig>().unwrap_or_default();
    let mut controller = PaginationController::<ReservationRequestSummary>::new(
        config,
        HttpListFetcher,
        LocalStoragePreferenceStore,
    )
    .with_current_url(current_location)
    .with_sort_default(Some("dateTime"), Some(true));
    if let Some(aggregator) = use_ready_aggregator().and_then(|ready| ready.aggregator()) {
        controller = controller.with_aggregator(aggregator);
    }

    let mut source = ListSource::new(LIST_URL);
    if let Some(room) = room {
        source = source.with_param("room", room);
    }
    let requests = use_pagination(controller, LIST_NAME, source);

    view! {
        <div class="page" id="a002_reservation_request--list" data-page-category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h2 class="page__title">"Заявки на бронирование"</h2>
                    <span class="badge">{move || requests.with(|s| s.total_count)}</span>
                </div>
                <div class="page__header-right">
                    <PaginationSortDirection handle=requests/>
                    <PaginationPageSize handle=requests/>
                </div>
            </div>

            <div class="page__content">
                <PaginationError handle=requests/>
                <Show when=move || requests.with(|s| s.phase() == Phase::Loading && !s.loaded)>
                    <div class="page__loading">"Загрузка..."</div>
                </Show>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th><PaginationSort handle=requests column="dateTime">"Дата"</PaginationSort></th>
                            <th><PaginationSort handle=requests column="room">"Комната"</PaginationSort></th>
                            <th><PaginationSort handle=requests column="user">"Пользователь"</PaginationSort></th>
                            <th>"Описание"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || requests.with(|s| s.items.clone())
                            key=|request| request.id.clone()
                            children=move |request: ReservationRequestSummary| {
                                let class = if request.writable { "" } else { "row--readonly" };
                                view! {
                                    <tr class=class>
                                        <td>{format_date_time(request.date_time)}</td>
                                        <td>{request.room}</td>
                                        <td>{request.user}</td>
                                        <td>{request.description.unwrap_or_else(|| "-".to_string())}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || requests.with(|s| s.ready && s.items.is_empty())>
                    <div class="page__empty">"Нет заявок"</div>
                </Show>
                <PaginationPages handle=requests/>
            </div>
        </div>
    }
}
