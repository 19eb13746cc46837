//! キーバリューストア
//!
//! お気に入りの永続化先。CLIはファイル、WebはlocalStorageで実装する。

use std::collections::HashMap;

use crate::error::Result;

/// 文字列を保存するキーバリューストア
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// 既存の値は丸ごと上書きする
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// メモリ上のストア（テスト用）
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期値入りで作成
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_get_missing() {
        let store = MemoryStore::new();
        assert_eq!(store.get("favorites").unwrap(), None);
    }

    #[test]
    fn test_memory_store_overwrite() {
        let mut store = MemoryStore::with_entry("favorites", "[]");
        store.set("favorites", "[{}]").unwrap();
        assert_eq!(store.get("favorites").unwrap().as_deref(), Some("[{}]"));
        assert_eq!(store.raw("favorites"), Some("[{}]"));
    }
}
