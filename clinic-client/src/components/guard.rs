use leptos::*;
use leptos_router::*;

use crate::{
    auth::AuthContext,
    pages::{admit, Access, Admission, Page},
    task::PageScope,
};

/// Route guard for protected pages. Visitors without a session are redirected to the login page
/// and users lacking the role see a forbidden notice. Re-evaluated whenever the identity changes,
/// so signing out on a protected page leaves it. The page gets its own scope, disposed whenever
/// the admission changes, which aborts any request it still has in flight.
#[component]
pub fn RequireAuth(
    cx: Scope,
    auth: AuthContext,
    access: Access,
    children: ChildrenFn,
) -> impl IntoView {
    let admission = create_memo(cx, move |_| admit(auth.identity().as_ref(), access));
    let page = PageScope::default();
    move || {
        page.release();
        match admission.get() {
            Admission::Granted => page.mount(cx, |cx| children(cx).into_view(cx)),
            Admission::Login => {
                log::debug!("No session, redirecting to login");
                view! { cx, <Redirect path=Page::Login.path()/> }.into_view(cx)
            }
            Admission::Forbidden => view! { cx,
                <div class="text-center my-5">
                    <h1>"403"</h1>
                    <p>"You don't have permission to access this page."</p>
                    <A class="btn btn-primary" href=Page::Dashboard.path()>"Go Home"</A>
                </div>
            }
            .into_view(cx),
        }
    }
}
