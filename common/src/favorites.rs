//! お気に入りストア
//!
//! 挿入順を保つ映画リスト。キーはimdbIDで、同じキーは1件まで。
//! 変更のたびにリスト全体をシリアライズしてストアへ上書きする。

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::storage::KeyValueStore;
use crate::types::Movie;

/// お気に入りを保存するキー
pub const FAVORITES_KEY: &str = "favorites";

/// 保存データがパースできないときの扱い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptionPolicy {
    /// 空リストから始める
    #[default]
    Discard,
    /// `Error::CorruptFavorites` を返す
    Fail,
}

/// `toggle` の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

#[derive(Debug)]
pub struct FavoritesStore<S: KeyValueStore> {
    storage: S,
    items: Vec<Movie>,
    discarded: Option<String>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// ストアから読み込み
    ///
    /// 未保存なら空。パースできない場合は `policy` に従う。
    pub fn load(storage: S, policy: CorruptionPolicy) -> Result<Self> {
        // ストアが `CorruptFavorites` を返した場合もパース失敗と同じ扱い
        let parsed = match storage.get(FAVORITES_KEY) {
            Ok(None) => Ok(Vec::new()),
            Ok(Some(raw)) => serde_json::from_str::<Vec<Movie>>(&raw)
                .map(dedup_by_key)
                .map_err(|e| e.to_string()),
            Err(Error::CorruptFavorites(reason)) => Err(reason),
            Err(e) => return Err(e),
        };

        let (items, discarded) = match parsed {
            Ok(items) => (items, None),
            Err(reason) => match policy {
                CorruptionPolicy::Discard => (Vec::new(), Some(reason)),
                CorruptionPolicy::Fail => return Err(Error::CorruptFavorites(reason)),
            },
        };

        Ok(Self {
            storage,
            items,
            discarded,
        })
    }

    /// 読み込まずに空で始める（ストアが読めないとき用）
    pub fn empty(storage: S) -> Self {
        Self {
            storage,
            items: Vec::new(),
            discarded: None,
        }
    }

    /// 読み込み時に破棄したデータのパースエラー
    pub fn discarded_reason(&self) -> Option<&str> {
        self.discarded.as_deref()
    }

    pub fn is_favorite(&self, movie: &Movie) -> bool {
        self.contains(&movie.imdb_id)
    }

    pub fn contains(&self, imdb_id: &str) -> bool {
        self.position(imdb_id).is_some()
    }

    /// 登録済みなら削除、未登録なら末尾に追加して保存
    ///
    /// 保存に失敗した場合はメモリ上の変更を戻してエラーを返す。
    pub fn toggle(&mut self, movie: &Movie) -> Result<Toggled> {
        match self.position(&movie.imdb_id) {
            Some(index) => {
                let removed = self.items.remove(index);
                if let Err(e) = self.save() {
                    self.items.insert(index, removed);
                    return Err(e);
                }
                Ok(Toggled::Removed)
            }
            None => {
                self.items.push(movie.clone());
                if let Err(e) = self.save() {
                    self.items.pop();
                    return Err(e);
                }
                Ok(Toggled::Added)
            }
        }
    }

    /// IDで削除（存在しなければ何もしない）
    pub fn remove(&mut self, imdb_id: &str) -> Result<bool> {
        let Some(index) = self.position(imdb_id) else {
            return Ok(false);
        };
        let removed = self.items.remove(index);
        if let Err(e) = self.save() {
            self.items.insert(index, removed);
            return Err(e);
        }
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<()> {
        let previous = std::mem::take(&mut self.items);
        if let Err(e) = self.save() {
            self.items = previous;
            return Err(e);
        }
        Ok(())
    }

    /// リスト全体を保存
    pub fn save(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.items)?;
        self.storage.set(FAVORITES_KEY, &raw)
    }

    pub fn items(&self) -> &[Movie] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn position(&self, imdb_id: &str) -> Option<usize> {
        self.items.iter().position(|m| m.imdb_id == imdb_id)
    }
}

/// 重複キーは最初のものだけ残す
fn dedup_by_key(items: Vec<Movie>) -> Vec<Movie> {
    let mut unique: Vec<Movie> = Vec::with_capacity(items.len());
    for movie in items {
        if !unique.iter().any(|m| m.same_key(&movie)) {
            unique.push(movie);
        }
    }
    unique
}
