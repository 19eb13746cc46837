//! ファイルベースのキーバリューストア
//!
//! キーごとに `<dir>/<key>.json` を1ファイル持ち、保存時は丸ごと上書きする。

use std::path::{Path, PathBuf};

use movie_lookup_common::{CorruptionPolicy, Error, FavoritesStore, KeyValueStore};
use tracing::{debug, warn};

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> movie_lookup_common::Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = std::fs::read(&path)?;
        let raw = String::from_utf8(bytes).map_err(|e| {
            Error::CorruptFavorites(format!("{}: {}", path.display(), e))
        })?;
        Ok(Some(raw))
    }

    fn set(&mut self, key: &str, value: &str) -> movie_lookup_common::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        std::fs::write(&path, value)?;
        debug!(path = %path.display(), bytes = value.len(), "saved");
        Ok(())
    }
}

/// お気に入りを開く
pub fn open_favorites(dir: &Path, policy: CorruptionPolicy) -> Result<FavoritesStore<FileStore>> {
    let store = FavoritesStore::load(FileStore::new(dir), policy)?;
    if let Some(reason) = store.discarded_reason() {
        warn!(dir = %dir.display(), reason, "favorites data was corrupted and has been reset");
    }
    debug!(count = store.len(), "favorites loaded");
    Ok(store)
}
