use std::rc::Rc;

use clinic_common::{Booking, Slot};
use leptos::*;

use crate::{
    api::{self, ClinicApi, SharedApi, GENERIC_FAILURE},
    auth::AuthContext,
    components::{
        lists::{BookingList, SlotList},
        notice::{Alert, Notice},
    },
    pages::{navigate_to, Page},
    task::{spawn_scoped, LoadState},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardData {
    pub slots: Vec<Slot>,
    pub bookings: Vec<Booking>,
}

/// Fetch the available slots and the user's bookings concurrently. Both must succeed before
/// either list is shown.
pub async fn load_dashboard(api: &dyn ClinicApi, token: &str) -> api::Result<DashboardData> {
    let (slots, bookings) = futures::try_join!(api.slots(token), api.my_bookings(token))?;
    Ok(DashboardData { slots, bookings })
}

/// Book `slot_id` then reload both lists. Nothing is reloaded when the booking is refused.
pub async fn book_and_reload(
    api: &dyn ClinicApi,
    token: &str,
    slot_id: &str,
) -> api::Result<DashboardData> {
    api.book(token, slot_id).await?;
    log::info!("Booked slot {slot_id}");
    load_dashboard(api, token).await
}

#[component]
pub fn Dashboard(cx: Scope, api: SharedApi, auth: AuthContext) -> impl IntoView {
    let state = create_rw_signal(cx, LoadState::<DashboardData>::Loading);
    let (booking_error, set_booking_error) = create_signal(cx, None::<String>);
    let (booking, set_booking) = create_signal(cx, false);
    let token = auth.token().unwrap_or_default();

    {
        let api = Rc::clone(&api);
        let token = token.clone();
        spawn_scoped(
            cx,
            async move { load_dashboard(api.as_ref(), &token).await },
            move |result| {
                if let Err(error) = &result {
                    log::error!("Dashboard failed to load. {error}");
                }
                state.set(result.into());
            },
        );
    }

    let on_book = move |slot_id: String| {
        let api = Rc::clone(&api);
        let token = token.clone();
        set_booking.set(true);
        set_booking_error.set(None);
        spawn_scoped(
            cx,
            async move {
                let result = book_and_reload(api.as_ref(), &token, &slot_id).await;
                (slot_id, result)
            },
            move |(slot_id, result)| {
                set_booking.set(false);
                match result {
                    Ok(data) => state.set(LoadState::Loaded(data)),
                    Err(error) => {
                        log::error!("Unable to book slot {slot_id}. {error}");
                        set_booking_error.set(Some(GENERIC_FAILURE.to_owned()));
                    }
                }
            },
        );
    };

    let logout = move |_: ev::MouseEvent| {
        auth.logout();
        navigate_to(cx, Page::Login);
    };

    view! { cx,
        <h2>"Available Slots"</h2>
        <Notice message=booking_error.into()/>
        {move || match state.get() {
            LoadState::Loading => view! { cx, <p>"Loading..."</p> }.into_view(cx),
            LoadState::Failed(message) => view! { cx, <Alert message=message/> }.into_view(cx),
            LoadState::Loaded(data) => view! { cx,
                <SlotList slots=data.slots on_book=on_book.clone() disabled=booking.into()/>
                <h2 class="mt-4">"My Bookings"</h2>
                <BookingList bookings=data.bookings/>
            }
            .into_view(cx),
        }}
        <button class="btn btn-outline-secondary mt-4" on:click=logout>"Logout"</button>
    }
}
