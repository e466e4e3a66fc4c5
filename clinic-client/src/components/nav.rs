use leptos::*;
use leptos_router::*;

use crate::{
    auth::AuthContext,
    pages::{navigate_to, Page},
};

#[component]
fn UserContext(cx: Scope, auth: AuthContext) -> impl IntoView {
    move || match auth.identity() {
        None => view! { cx,
            <li class="nav-item">
                <A class="nav-link" href=Page::Login.path()>"Login"</A>
            </li>
            <li class="nav-item">
                <A class="nav-link" href=Page::Register.path()>"Register"</A>
            </li>
        }
        .into_view(cx),
        Some(identity) => {
            let auth = auth.clone();
            view! { cx,
                <li class="nav-item">
                    <span class="navbar-text me-2">{identity.email}</span>
                </li>
                <li class="nav-item">
                    <button
                        class="btn btn-outline-secondary"
                        on:click=move |_| {
                            auth.logout();
                            navigate_to(cx, Page::Login);
                        }
                    >
                        "Logout"
                    </button>
                </li>
            }
            .into_view(cx)
        }
    }
}

#[component]
pub fn NavBar(cx: Scope, auth: AuthContext) -> impl IntoView {
    let links_auth = auth.clone();
    let links = move || {
        let identity = links_auth.identity()?;
        let view = if identity.role.is_admin() {
            view! { cx,
                <li class="nav-item">
                    <A class="nav-link" href=Page::Admin.path()>"All Bookings"</A>
                </li>
            }
            .into_view(cx)
        } else {
            view! { cx,
                <li class="nav-item">
                    <A class="nav-link" href=Page::Dashboard.path()>"Dashboard"</A>
                </li>
                <li class="nav-item">
                    <A class="nav-link" href=Page::MyBookings.path()>"My Bookings"</A>
                </li>
            }
            .into_view(cx)
        };
        Some(view)
    };
    view! { cx,
        <nav class="navbar navbar-expand-lg bg-body-tertiary" id="mainNavBar">
            <div class="container-fluid">
                <span class="navbar-brand">"Clinic Booking"</span>
                <ul class="navbar-nav me-auto">{links}</ul>
                <ul class="navbar-nav ms-auto">
                    <UserContext auth=auth/>
                </ul>
            </div>
        </nav>
    }
}
