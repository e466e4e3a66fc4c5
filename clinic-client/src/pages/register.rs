use std::rc::Rc;

use clinic_common::Credentials;
use leptos::*;
use leptos_router::*;

use crate::{
    api::{self, ClinicApi, SharedApi, GENERIC_FAILURE},
    auth::AuthContext,
    components::credentials::CredentialsForm,
    pages::{navigate_to, Page},
};

/// Create an account and sign it in. New accounts always land on the dashboard.
pub async fn enroll(
    api: &dyn ClinicApi,
    auth: &AuthContext,
    credentials: &Credentials,
) -> api::Result<Page> {
    let identity = api.register(credentials).await?;
    log::info!("Registered {}", identity.email);
    auth.login(identity);
    Ok(Page::Dashboard)
}

#[component]
pub fn Register(cx: Scope, api: SharedApi, auth: AuthContext) -> impl IntoView {
    let (register_error, set_register_error) = create_signal(cx, None::<String>);
    let register_action = create_action(cx, move |(email, password): &(String, String)| {
        let credentials = Credentials {
            email: email.clone(),
            password: password.clone(),
        };
        let api = Rc::clone(&api);
        let auth = auth.clone();
        async move {
            match enroll(api.as_ref(), &auth, &credentials).await {
                Ok(page) => {
                    set_register_error.update(|e| *e = None);
                    navigate_to(cx, page);
                }
                Err(err) => {
                    log::error!("Unable to register {}: {err}", credentials.email);
                    set_register_error.update(|e| *e = Some(GENERIC_FAILURE.to_owned()));
                }
            }
        }
    });
    let disabled = Signal::derive(cx, move || register_action.pending().get());
    view! { cx,
        <CredentialsForm
            title="Register"
            submit_label="Register"
            action=register_action
            error=register_error.into()
            disabled=disabled/>
        <p class="mt-3">
            "Already registered? "
            <A href=Page::Login.path()>"Login"</A>
        </p>
    }
}

#[cfg(test)]
mod test {
    use std::rc::Rc;

    use clinic_common::{Credentials, Role};
    use futures::executor::block_on;

    use super::enroll;
    use crate::{
        api::{Error, MockClinicApi},
        auth::{
            test::{identity, with_scope},
            AuthContext,
        },
        pages::Page,
        storage::{test::MemoryIdentityStore, IdentityStore},
    };

    fn credentials() -> Credentials {
        Credentials {
            email: "new@x.com".to_owned(),
            password: "secret".to_owned(),
        }
    }

    #[test]
    fn enroll_should_sign_in_and_land_on_dashboard() {
        let mut api = MockClinicApi::new();
        api.expect_register()
            .withf(|credentials| credentials.email == "new@x.com")
            .times(1)
            .returning(|_| Ok(identity(Role::User)));
        let store = Rc::new(MemoryIdentityStore::default());
        let context_store = Rc::clone(&store);

        let landing = with_scope(move |cx| {
            let auth = AuthContext::new(cx, context_store);
            block_on(enroll(&api, &auth, &credentials())).ok()
        });

        assert_eq!(landing, Some(Page::Dashboard));
        assert_eq!(store.load(), Some(identity(Role::User)));
    }

    #[test]
    fn enroll_should_not_sign_in_when_rejected() {
        let mut api = MockClinicApi::new();
        api.expect_register().times(1).returning(|_| {
            Err(Error::Status {
                code: 409,
                message: "Email already registered".to_owned(),
            })
        });

        let authenticated = with_scope(move |cx| {
            let auth = AuthContext::new(cx, Rc::new(MemoryIdentityStore::default()));
            let result = block_on(enroll(&api, &auth, &credentials()));
            result.is_ok() || auth.is_authenticated()
        });

        assert!(!authenticated, "Rejected registration should not create a session");
    }
}
