use clinic_common::Identity;
use gloo_storage::{errors::StorageError, LocalStorage, Storage};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Identity storage error\n{0}")]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Durable home of the signed in [Identity] so a page reload does not force a new login
#[cfg_attr(test, mockall::automock)]
pub trait IdentityStore {
    fn load(&self) -> Option<Identity>;
    fn save(&self, identity: &Identity) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// [IdentityStore] persisting the identity as JSON under a single browser local storage key
#[derive(Debug, Clone, Copy)]
pub struct LocalIdentityStore {
    key: &'static str,
}

impl LocalIdentityStore {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl IdentityStore for LocalIdentityStore {
    fn load(&self) -> Option<Identity> {
        match LocalStorage::get::<Identity>(self.key) {
            Ok(identity) => Some(identity),
            Err(StorageError::KeyNotFound(_)) => None,
            Err(error) => {
                log::warn!("Discarding stored identity under `{}`. {error}", self.key);
                LocalStorage::delete(self.key);
                None
            }
        }
    }

    fn save(&self, identity: &Identity) -> Result<()> {
        LocalStorage::set(self.key, identity)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        LocalStorage::delete(self.key);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test {
    use std::cell::RefCell;

    use clinic_common::Identity;

    use super::{IdentityStore, Result};

    /// In-memory stand-in for browser local storage. Survives a simulated reload when the same
    /// instance is handed to a fresh auth context.
    #[derive(Default)]
    pub(crate) struct MemoryIdentityStore {
        slot: RefCell<Option<Identity>>,
    }

    impl MemoryIdentityStore {
        pub(crate) fn holding(identity: Identity) -> Self {
            Self {
                slot: RefCell::new(Some(identity)),
            }
        }
    }

    impl IdentityStore for MemoryIdentityStore {
        fn load(&self) -> Option<Identity> {
            self.slot.borrow().clone()
        }

        fn save(&self, identity: &Identity) -> Result<()> {
            *self.slot.borrow_mut() = Some(identity.clone());
            Ok(())
        }

        fn clear(&self) -> Result<()> {
            *self.slot.borrow_mut() = None;
            Ok(())
        }
    }
}
