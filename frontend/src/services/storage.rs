use domain::KeyValueStore;
use gloo::storage::{LocalStorage, Storage};

/// `KeyValueStore` over the browser's local storage. Storage errors are
/// logged and otherwise ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if LocalStorage::raw().set_item(key, value).is_err() {
            log::warn!("Failed to write {} to local storage", key);
        }
    }

    fn remove(&self, key: &str) {
        if LocalStorage::raw().remove_item(key).is_err() {
            log::warn!("Failed to remove {} from local storage", key);
        }
    }
}
