use crate::shared::api_utils::current_location;
use crate::shared::components::pagination_controls::{
    PaginationError, PaginationPageSize, PaginationPages, PaginationSort, PaginationSortDefault,
};
use crate::shared::pagination::{
    use_pagination, use_ready_aggregator, HttpListFetcher, ListSource,
    LocalStoragePreferenceStore, PaginationConfig, PaginationController, Phase,
};
use contracts::domain::a001_room::dto::RoomSummary;
use leptos::prelude::*;

const LIST_NAME: &str = "a001_room";
const LIST_URL: &str = "/api/rooms/list";

#[component]
#[allow(non_snake_case)]
pub fn RoomList() -> impl IntoView {
    let config = use_context::<PaginationConfig>().unwrap_or_default();
    let mut controller =
        PaginationController::<RoomSummary>::new(config, HttpListFetcher, LocalStoragePreferenceStore)
            .with_current_url(current_location)
            .with_sort_default(Some("name"), None);
    if let Some(aggregator) = use_ready_aggregator().and_then(|ready| ready.aggregator()) {
        controller = controller.with_aggregator(aggregator);
    }
    let rooms = use_pagination(controller, LIST_NAME, ListSource::new(LIST_URL));

    view! {
        <div class="page" id="a001_room--list" data-page-category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h2 class="page__title">"Комнаты"</h2>
                    <span class="badge">{move || rooms.with(|s| s.total_count)}</span>
                </div>
                <div class="page__header-right">
                    <PaginationSortDefault handle=rooms/>
                    <PaginationPageSize handle=rooms unlimited=true refresh=true/>
                </div>
            </div>

            <div class="page__content">
                <PaginationError handle=rooms/>
                <Show when=move || rooms.with(|s| s.phase() == Phase::Loading && !s.loaded)>
                    <div class="page__loading">"Загрузка..."</div>
                </Show>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th><PaginationSort handle=rooms column="name">"Название"</PaginationSort></th>
                            <th><PaginationSort handle=rooms column="technology">"Технология"</PaginationSort></th>
                            <th><PaginationSort handle=rooms column="participantCount">"Участники"</PaginationSort></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rooms.with(|s| s.items.clone())
                            key=|room| room.id.clone()
                            children=move |room: RoomSummary| {
                                view! {
                                    <tr>
                                        <td>{room.name}</td>
                                        <td>{room.technology}</td>
                                        <td>{room.participant_count}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || rooms.with(|s| s.ready && s.items.is_empty())>
                    <div class="page__empty">"Нет комнат"</div>
                </Show>
                <PaginationPages handle=rooms/>
            </div>
        </div>
    }
}
