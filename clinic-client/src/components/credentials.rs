use leptos::*;

use crate::components::notice::Notice;

/// Email and password form shared by the login and register pages. Dispatches `action` with
/// `(email, password)` on submit.
#[component]
pub fn CredentialsForm(
    cx: Scope,
    title: &'static str,
    submit_label: &'static str,
    action: Action<(String, String), ()>,
    error: Signal<Option<String>>,
    disabled: Signal<bool>,
) -> impl IntoView {
    let (email, set_email) = create_signal(cx, String::new());
    let (password, set_password) = create_signal(cx, String::new());
    let dispatch_action = move || action.dispatch((email.get(), password.get()));

    let submit_is_disabled = Signal::derive(cx, move || {
        disabled.get() || email.get().is_empty() || password.get().is_empty()
    });

    view! { cx,
        <section>
            <h3>{title}</h3>
            <form on:submit=move |ev: ev::SubmitEvent| {
                ev.prevent_default();
                if !submit_is_disabled.get_untracked() {
                    dispatch_action();
                }
            }>
                <div class="form-group">
                <label for="email">"Email"</label>
                <input
                    class="form-control"
                    type="email"
                    id="email"
                    name="email"
                    placeholder="Email"
                    required
                    on:input=move |ev| {
                        let val = event_target_value(&ev);
                        set_email.update(|v| *v = val);
                    }
                />
                </div>
                <div class="form-group">
                <label for="password">"Password"</label>
                <input
                    class="form-control"
                    type="password"
                    id="password"
                    name="password"
                    placeholder="Password"
                    required
                    on:input=move |ev| {
                        let val = event_target_value(&ev);
                        set_password.update(|v| *v = val);
                    }
                />
                </div>
                <Notice message=error/>
                <input
                    class="btn btn-primary"
                    value=submit_label
                    type="submit"
                    prop:disabled=move || submit_is_disabled.get()
                />
            </form>
        </section>
    }
}
