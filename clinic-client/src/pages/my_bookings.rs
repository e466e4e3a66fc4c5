use clinic_common::Booking;
use leptos::*;

use crate::{
    api::SharedApi,
    auth::AuthContext,
    components::{lists::BookingList, notice::Alert},
    task::{spawn_scoped, LoadState},
};

#[component]
pub fn MyBookings(cx: Scope, api: SharedApi, auth: AuthContext) -> impl IntoView {
    let state = create_rw_signal(cx, LoadState::<Vec<Booking>>::Loading);
    let token = auth.token().unwrap_or_default();
    spawn_scoped(
        cx,
        async move { api.my_bookings(&token).await },
        move |result| {
            if let Err(error) = &result {
                log::error!("Bookings failed to load. {error}");
            }
            state.set(result.into());
        },
    );

    view! { cx,
        <h2>"My Bookings"</h2>
        {move || match state.get() {
            LoadState::Loading => view! { cx, <p>"Loading..."</p> }.into_view(cx),
            LoadState::Failed(message) => view! { cx, <Alert message=message/> }.into_view(cx),
            LoadState::Loaded(bookings) => view! { cx, <BookingList bookings=bookings/> }
                .into_view(cx),
        }}
    }
}
