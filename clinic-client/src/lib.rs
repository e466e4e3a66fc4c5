//! Browser client for the clinic appointment booking service

pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod pages;
pub mod storage;
pub mod task;

use std::rc::Rc;

use leptos::*;
use leptos_router::*;

use crate::{
    api::{HttpClinicApi, SharedApi},
    auth::AuthContext,
    components::{guard::RequireAuth, nav::NavBar},
    config::ClientConfig,
    pages::{
        admin::Admin, dashboard::Dashboard, login::Login, my_bookings::MyBookings,
        register::Register, Page, DASHBOARD_ALIAS,
    },
    storage::LocalIdentityStore,
};

fn page_content(cx: Scope, page: Page, api: SharedApi, auth: AuthContext) -> View {
    match page {
        Page::Dashboard => view! { cx, <Dashboard api=api auth=auth/> }.into_view(cx),
        Page::Login => view! { cx, <Login api=api auth=auth/> }.into_view(cx),
        Page::Register => view! { cx, <Register api=api auth=auth/> }.into_view(cx),
        Page::MyBookings => view! { cx, <MyBookings api=api auth=auth/> }.into_view(cx),
        Page::Admin => view! { cx, <Admin api=api auth=auth/> }.into_view(cx),
    }
}

/// Route view for `page`, rendered behind the guard for the page's access level
fn page_view(
    page: Page,
    api: &SharedApi,
    auth: &AuthContext,
) -> impl Fn(Scope) -> View + Clone + 'static {
    let api = Rc::clone(api);
    let auth = auth.clone();
    move |cx| {
        let guard_auth = auth.clone();
        let api = Rc::clone(&api);
        let auth = auth.clone();
        view! { cx,
            <RequireAuth auth=guard_auth access=page.access()>
                {page_content(cx, page, Rc::clone(&api), auth.clone())}
            </RequireAuth>
        }
        .into_view(cx)
    }
}

#[component]
pub fn App(cx: Scope, config: ClientConfig) -> impl IntoView {
    let api: SharedApi = Rc::new(HttpClinicApi::new(config.api_url));
    let auth = AuthContext::new(cx, Rc::new(LocalIdentityStore::new(config.storage_key)));

    view! {
        cx,
        <Router>
            <NavBar auth=auth.clone()/>
            <main class="container my-4">
                <Routes>
                    <Route path=Page::Dashboard.path() view=page_view(Page::Dashboard, &api, &auth)/>
                    <Route path=DASHBOARD_ALIAS view=page_view(Page::Dashboard, &api, &auth)/>
                    <Route path=Page::Login.path() view=page_view(Page::Login, &api, &auth)/>
                    <Route path=Page::Register.path() view=page_view(Page::Register, &api, &auth)/>
                    <Route path=Page::MyBookings.path() view=page_view(Page::MyBookings, &api, &auth)/>
                    <Route path=Page::Admin.path() view=page_view(Page::Admin, &api, &auth)/>
                    <Route path="/*any" view=|cx| view! { cx, <h3>"Page not found"</h3> }/>
                </Routes>
            </main>
        </Router>
    }
}

/// Entry point of the WebAssembly bundle: installs logging and mounts [App]
pub fn run() {
    let config = ClientConfig::from_build_env();
    // fails only when a logger is already installed
    if console_log::init_with_level(config.log_level).is_ok() {
        log::debug!("Console logging at {}", config.log_level);
    }
    console_error_panic_hook::set_once();
    log::info!("Clinic client using backend {}", config.api_url);
    mount_to_body(move |cx| view! { cx, <App config=config/> });
}
