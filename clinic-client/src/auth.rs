use std::rc::Rc;

use clinic_common::Identity;
use leptos::*;

use crate::storage::IdentityStore;

/// Single source of truth for who is signed in. Created once by the app and handed to every
/// page. The identity is only ever replaced wholesale through [login][AuthContext::login] and
/// [logout][AuthContext::logout].
#[derive(Clone)]
pub struct AuthContext {
    identity: RwSignal<Option<Identity>>,
    store: Rc<dyn IdentityStore>,
}

impl AuthContext {
    /// Create the context, hydrating the identity left by a previous visit (if any)
    pub fn new(cx: Scope, store: Rc<dyn IdentityStore>) -> Self {
        let hydrated = store.load();
        if let Some(identity) = &hydrated {
            log::info!("Restored session for {}", identity.email);
        }
        Self {
            identity: create_rw_signal(cx, hydrated),
            store,
        }
    }

    /// Reactive read of the current identity
    pub fn identity(&self) -> Option<Identity> {
        self.identity.get()
    }

    pub fn identity_untracked(&self) -> Option<Identity> {
        self.identity.get_untracked()
    }

    /// Session token of the current identity, read without subscribing
    pub fn token(&self) -> Option<String> {
        self.identity
            .with_untracked(|identity| identity.as_ref().map(|i| i.token.clone()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.with(Option::is_some)
    }

    pub fn login(&self, identity: Identity) {
        if let Err(error) = self.store.save(&identity) {
            log::warn!("Session for {} will not survive a reload. {error}", identity.email);
        }
        log::info!("Signed in as {}", identity.email);
        self.identity.set(Some(identity));
    }

    pub fn logout(&self) {
        if let Err(error) = self.store.clear() {
            log::warn!("Could not remove the stored session. {error}");
        }
        if let Some(identity) = self.identity_untracked() {
            log::info!("Signed out {}", identity.email);
        }
        self.identity.set(None);
    }
}
