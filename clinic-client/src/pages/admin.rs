use clinic_common::Booking;
use leptos::*;

use crate::{
    api::SharedApi,
    auth::AuthContext,
    components::notice::Alert,
    pages::{navigate_to, Page},
    task::{spawn_scoped, LoadState},
};

/// Display lines for one booking in the admin overview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRow {
    pub id: String,
    pub user: String,
    pub slot: String,
}

impl From<Booking> for BookingRow {
    fn from(booking: Booking) -> Self {
        Self {
            user: format!("User: {}", booking.owner_email()),
            slot: format!("Slot: {}", booking.slot.time),
            id: booking.id,
        }
    }
}

#[component]
pub fn Admin(cx: Scope, api: SharedApi, auth: AuthContext) -> impl IntoView {
    let state = create_rw_signal(cx, LoadState::<Vec<BookingRow>>::Loading);
    let token = auth.token().unwrap_or_default();
    spawn_scoped(
        cx,
        async move { api.all_bookings(&token).await },
        move |result| {
            let result = result.map(|bookings| {
                bookings.into_iter().map(BookingRow::from).collect::<Vec<_>>()
            });
            if let Err(error) = &result {
                log::error!("All bookings failed to load. {error}");
            }
            state.set(result.into());
        },
    );

    let logout = move |_: ev::MouseEvent| {
        auth.logout();
        navigate_to(cx, Page::Login);
    };

    view! { cx,
        <h2>"All Bookings"</h2>
        {move || match state.get() {
            LoadState::Loading => view! { cx, <p>"Loading..."</p> }.into_view(cx),
            LoadState::Failed(message) => view! { cx, <Alert message=message/> }.into_view(cx),
            LoadState::Loaded(rows) if rows.is_empty() => {
                view! { cx, <p class="text-muted">"No bookings yet."</p> }.into_view(cx)
            }
            LoadState::Loaded(rows) => rows
                .into_iter()
                .map(|row| view! { cx,
                    <div class="card mb-2" id=row.id>
                        <div class="card-body">
                            <p>{row.user}</p>
                            <p>{row.slot}</p>
                        </div>
                    </div>
                })
                .collect::<Vec<_>>()
                .into_view(cx),
        }}
        <button class="btn btn-outline-secondary mt-4" on:click=logout>"Logout"</button>
    }
}
