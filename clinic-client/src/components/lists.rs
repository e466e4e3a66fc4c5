use clinic_common::{Booking, Slot};
use leptos::*;

pub const NO_SLOTS: &str = "No slots are available right now.";
pub const NO_BOOKINGS: &str = "You have no bookings yet.";

/// What a list renders: either the empty-state message or one entry per row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListContent<T> {
    Empty(&'static str),
    Rows(Vec<T>),
}

impl<T> ListContent<T> {
    fn build<S>(items: Vec<S>, empty: &'static str, row: impl FnMut(S) -> T) -> Self {
        if items.is_empty() {
            return Self::Empty(empty);
        }
        Self::Rows(items.into_iter().map(row).collect())
    }
}

/// One bookable slot: the time shown and the id sent when Book is clicked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRow {
    pub slot_id: String,
    pub time: String,
}

pub fn slot_rows(slots: Vec<Slot>) -> ListContent<SlotRow> {
    ListContent::build(slots, NO_SLOTS, |Slot { id, time }| SlotRow { slot_id: id, time })
}

/// Slot times of the user's bookings
pub fn booking_rows(bookings: Vec<Booking>) -> ListContent<String> {
    ListContent::build(bookings, NO_BOOKINGS, |booking| booking.slot.time)
}

fn empty_notice(cx: Scope, message: &'static str) -> View {
    view! { cx, <p class="text-muted">{message}</p> }.into_view(cx)
}

/// Available slots, one row per slot with a Book button that calls `on_book` with the slot id
#[component]
pub fn SlotList<F>(
    cx: Scope,
    slots: Vec<Slot>,
    on_book: F,
    disabled: Signal<bool>,
) -> impl IntoView
where
    F: Fn(String) + Clone + 'static,
{
    let rows = match slot_rows(slots) {
        ListContent::Empty(message) => return empty_notice(cx, message),
        ListContent::Rows(rows) => rows,
    };
    let rows = rows
        .into_iter()
        .map(|SlotRow { slot_id, time }| {
            let on_book = on_book.clone();
            view! { cx,
                <li class="list-group-item d-flex justify-content-between align-items-center">
                    <span>{time}</span>
                    <button
                        class="btn btn-sm btn-primary"
                        prop:disabled=move || disabled.get()
                        on:click=move |_| on_book(slot_id.clone())
                    >
                        "Book"
                    </button>
                </li>
            }
        })
        .collect::<Vec<_>>();
    view! { cx, <ul class="list-group">{rows}</ul> }.into_view(cx)
}

/// Bookings of the signed in user, showing the slot time of each
#[component]
pub fn BookingList(cx: Scope, bookings: Vec<Booking>) -> impl IntoView {
    let rows = match booking_rows(bookings) {
        ListContent::Empty(message) => return empty_notice(cx, message),
        ListContent::Rows(rows) => rows,
    };
    let rows = rows
        .into_iter()
        .map(|time| view! { cx, <li class="list-group-item">{time}</li> })
        .collect::<Vec<_>>();
    view! { cx, <ul class="list-group">{rows}</ul> }.into_view(cx)
}

#[cfg(test)]
mod test {
    use clinic_common::{Booking, Slot};

    use super::{booking_rows, slot_rows, ListContent, SlotRow, NO_BOOKINGS, NO_SLOTS};

    #[test]
    fn one_slot_and_no_bookings_should_show_one_book_row_and_empty_notice() {
        let slots = vec![Slot {
            id: "s1".to_owned(),
            time: "09:00".to_owned(),
        }];
        let bookings: Vec<Booking> = Vec::new();

        assert_eq!(
            slot_rows(slots),
            ListContent::Rows(vec![SlotRow {
                slot_id: "s1".to_owned(),
                time: "09:00".to_owned(),
            }])
        );
        assert_eq!(booking_rows(bookings), ListContent::Empty(NO_BOOKINGS));
    }

    #[test]
    fn no_slots_should_show_empty_notice() {
        assert_eq!(slot_rows(Vec::new()), ListContent::Empty(NO_SLOTS));
    }

    #[test]
    fn booking_rows_should_list_slot_times_in_order() {
        let booking = |id: &str, time: &str| Booking {
            id: id.to_owned(),
            slot: Slot {
                id: format!("slot-{id}"),
                time: time.to_owned(),
            },
            user: None,
        };

        let rows = booking_rows(vec![booking("b1", "09:00"), booking("b2", "11:30")]);

        assert_eq!(
            rows,
            ListContent::Rows(vec!["09:00".to_owned(), "11:30".to_owned()])
        );
    }
}
