use clinic_common::Identity;
use leptos::Scope;
use leptos_router::{use_navigate, NavigateOptions};

pub mod admin;
pub mod dashboard;
pub mod login;
pub mod my_bookings;
pub mod register;

/// Capability a visitor needs before a page renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Session,
    Admin,
}

/// Outcome of checking an identity against an [Access] requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Granted,
    Login,
    Forbidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Login,
    Register,
    MyBookings,
    Admin,
}

impl Page {
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::MyBookings => "/my-bookings",
            Self::Admin => "/admin",
        }
    }

    pub const fn access(&self) -> Access {
        match self {
            Self::Login | Self::Register => Access::Public,
            Self::Dashboard | Self::MyBookings => Access::Session,
            Self::Admin => Access::Admin,
        }
    }

    /// Page a freshly signed in identity lands on
    pub const fn landing(identity: &Identity) -> Self {
        if identity.role.is_admin() {
            Self::Admin
        } else {
            Self::Dashboard
        }
    }
}

/// Alias of [Page::Dashboard] that the sign in flows have always navigated to
pub const DASHBOARD_ALIAS: &str = "/dashboard";

/// Client-side navigation to `page`, logging any routing failure
pub fn navigate_to(cx: Scope, page: Page) {
    let navigate = use_navigate(cx);
    if let Err(error) = navigate(page.path(), NavigateOptions::default()) {
        log::error!("Could not navigate to {}. {error:?}", page.path());
    }
}

pub fn admit(identity: Option<&Identity>, access: Access) -> Admission {
    match (access, identity) {
        (Access::Public, _) => Admission::Granted,
        (_, None) => Admission::Login,
        (Access::Admin, Some(identity)) if !identity.role.is_admin() => Admission::Forbidden,
        (Access::Session | Access::Admin, Some(_)) => Admission::Granted,
    }
}

#[cfg(test)]
mod test {
    use clinic_common::Role;
    use rstest::rstest;

    use super::{admit, Access, Admission, Page};
    use crate::auth::test::identity;

    #[rstest]
    #[case::public_anonymous(None, Access::Public, Admission::Granted)]
    #[case::session_anonymous(None, Access::Session, Admission::Login)]
    #[case::admin_anonymous(None, Access::Admin, Admission::Login)]
    #[case::session_user(Some(Role::User), Access::Session, Admission::Granted)]
    #[case::admin_user(Some(Role::User), Access::Admin, Admission::Forbidden)]
    #[case::admin_admin(Some(Role::Admin), Access::Admin, Admission::Granted)]
    #[case::session_admin(Some(Role::Admin), Access::Session, Admission::Granted)]
    fn admit_should_check_capability(
        #[case] role: Option<Role>,
        #[case] access: Access,
        #[case] expected: Admission,
    ) {
        let identity = role.map(identity);

        assert_eq!(admit(identity.as_ref(), access), expected);
    }

    #[rstest]
    #[case::admin(Role::Admin, Page::Admin)]
    #[case::user(Role::User, Page::Dashboard)]
    fn landing_should_depend_on_role(#[case] role: Role, #[case] expected: Page) {
        assert_eq!(Page::landing(&identity(role)), expected);
    }

    #[test]
    fn only_sign_in_pages_should_be_public() {
        let public: Vec<Page> = [
            Page::Dashboard,
            Page::Login,
            Page::Register,
            Page::MyBookings,
            Page::Admin,
        ]
        .into_iter()
        .filter(|page| page.access() == Access::Public)
        .collect();

        assert_eq!(public, vec![Page::Login, Page::Register]);
    }
}
