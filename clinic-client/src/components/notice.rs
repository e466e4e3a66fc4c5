use leptos::*;

#[component]
pub fn Alert(cx: Scope, message: String) -> impl IntoView {
    view! { cx, <div class="alert alert-danger" role="alert">{message}</div> }
}

/// Inline alert shown while `message` holds a failure
#[component]
pub fn Notice(cx: Scope, message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|message| view! { cx, <Alert message=message/> })
    }
}
