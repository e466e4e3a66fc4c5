use std::rc::Rc;

use clinic_common::Credentials;
use leptos::*;
use leptos_router::*;

use crate::{
    api::{self, ClinicApi, SharedApi},
    auth::AuthContext,
    components::credentials::CredentialsForm,
    pages::{navigate_to, Page},
};

pub const LOGIN_FAILURE: &str = "Invalid credentials. Please try again.";

/// Sign in with `credentials`, storing the returned identity in `auth`. Returns the page the
/// identity lands on. On failure `auth` is left untouched.
pub async fn authenticate(
    api: &dyn ClinicApi,
    auth: &AuthContext,
    credentials: &Credentials,
) -> api::Result<Page> {
    let identity = api.login(credentials).await?;
    let landing = Page::landing(&identity);
    auth.login(identity);
    Ok(landing)
}

#[component]
pub fn Login(cx: Scope, api: SharedApi, auth: AuthContext) -> impl IntoView {
    let (login_error, set_login_error) = create_signal(cx, None::<String>);
    let login_action = create_action(cx, move |(email, password): &(String, String)| {
        let credentials = Credentials {
            email: email.clone(),
            password: password.clone(),
        };
        let api = Rc::clone(&api);
        let auth = auth.clone();
        async move {
            match authenticate(api.as_ref(), &auth, &credentials).await {
                Ok(page) => {
                    set_login_error.update(|e| *e = None);
                    navigate_to(cx, page);
                }
                Err(err) => {
                    log::error!("Unable to login with {}: {err}", credentials.email);
                    set_login_error.update(|e| *e = Some(LOGIN_FAILURE.to_owned()));
                }
            }
        }
    });
    let disabled = Signal::derive(cx, move || login_action.pending().get());
    view! { cx,
        <CredentialsForm
            title="Login"
            submit_label="Login"
            action=login_action
            error=login_error.into()
            disabled=disabled/>
        <p class="mt-3">
            "Don't have an account? "
            <A href=Page::Register.path()>"Sign up"</A>
        </p>
    }
}

#[cfg(test)]
mod test {
    use std::rc::Rc;

    use clinic_common::{Credentials, Role};
    use futures::executor::block_on;
    use rstest::rstest;

    use super::authenticate;
    use crate::{
        api::{Error, MockClinicApi},
        auth::{
            test::{identity, with_scope},
            AuthContext,
        },
        pages::Page,
        storage::test::MemoryIdentityStore,
    };

    fn credentials() -> Credentials {
        Credentials {
            email: "a@x.com".to_owned(),
            password: "secret".to_owned(),
        }
    }

    #[rstest]
    #[case::admin(Role::Admin, Page::Admin)]
    #[case::user(Role::User, Page::Dashboard)]
    fn authenticate_should_store_identity_and_land_by_role(
        #[case] role: Role,
        #[case] expected: Page,
    ) {
        let mut api = MockClinicApi::new();
        api.expect_login()
            .withf(|credentials| credentials.email == "a@x.com" && credentials.password == "secret")
            .times(1)
            .returning(move |_| Ok(identity(role)));

        let (landing, stored_role) = with_scope(move |cx| {
            let auth = AuthContext::new(cx, Rc::new(MemoryIdentityStore::default()));
            let landing = block_on(authenticate(&api, &auth, &credentials()));
            (landing.ok(), auth.identity_untracked().map(|i| i.role))
        });

        assert_eq!(landing, Some(expected));
        assert_eq!(stored_role, Some(role));
    }

    #[test]
    fn authenticate_should_leave_identity_unchanged_on_failure() {
        let mut api = MockClinicApi::new();
        api.expect_login().times(1).returning(|_| {
            Err(Error::Status {
                code: 401,
                message: "Invalid credentials".to_owned(),
            })
        });

        let (failed, identity) = with_scope(move |cx| {
            let auth = AuthContext::new(cx, Rc::new(MemoryIdentityStore::default()));
            let result = block_on(authenticate(&api, &auth, &credentials()));
            (result.is_err(), auth.identity_untracked())
        });

        assert!(failed, "Expected login to fail");
        assert_eq!(identity, None);
    }
}
