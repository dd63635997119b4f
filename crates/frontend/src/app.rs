use crate::domain::a001_room::ui::list::RoomList;
use crate::domain::a002_reservation_request::ui::list::ReservationRequestList;
use crate::shared::pagination::{load_config, provide_ready_aggregator};
use leptos::prelude::*;

const PAGINATION_CONFIG: &str = include_str!("../pagination.toml");

#[component]
pub fn App() -> impl IntoView {
    // Shared by every paginated list of the page
    provide_context(load_config(PAGINATION_CONFIG));

    let ready = provide_ready_aggregator();
    let status = ready.status();

    view! {
        <div class="app-layout">
            <div class="app-status">
                <Show when=move || !status.with(|s| s.ready)>
                    <span class="app-status__loading">
                        {move || status.with(|s| format!("Загрузка... ({})", s.pending))}
                    </span>
                </Show>
                <Show when=move || status.with(|s| s.error)>
                    <div
                        class="app-status__error"
                        inner_html=move || status.with(|s| s.error_message.clone().unwrap_or_default())
                    ></div>
                </Show>
            </div>
            <RoomList/>
            <ReservationRequestList/>
        </div>
    }
}
