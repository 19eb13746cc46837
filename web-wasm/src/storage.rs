//! localStorage によるキーバリューストア

use gloo::storage::{LocalStorage, Storage};
use movie_lookup_common::{Error, KeyValueStore, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| Error::Storage(format!("読込失敗: {:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("保存失敗: {:?}", e)))
    }
}
