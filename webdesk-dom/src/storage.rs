//! localStorage-backed state store.

use web_sys::Storage;

use webdesk_core::{StateStore, StoreError};

/// Durable store over `window.localStorage`. Degrades to a no-op when the
/// host exposes no storage.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn from_page() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            log::info!("localStorage unavailable; geometry writes disabled");
        }
        Self { storage }
    }
}

impl StateStore for LocalStore {
    fn put(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let Some(storage) = &self.storage else {
            return Ok(());
        };
        storage
            .set_item(key, value)
            .map_err(|err| StoreError(format!("{err:?}")))
    }
}
