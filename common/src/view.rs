//! 表示モデル
//!
//! ローダーの状態とお気に入りから、画面に出すものを1つ選ぶ。
//! 実際の描画はCLI(テキスト)とWeb(Leptos)がそれぞれ行う。

use crate::favorites::FavoritesStore;
use crate::loader::LoadState;
use crate::storage::KeyValueStore;
use crate::types::Movie;

pub const NOT_FOUND_MESSAGE: &str = "Movie not found or invalid IMDb ID.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView<'a> {
    Loading,
    Error(String),
    NotFound,
    Details { movie: &'a Movie, is_favorite: bool },
}

impl<'a> DetailView<'a> {
    pub fn from_state<S: KeyValueStore>(state: &'a LoadState, favorites: &FavoritesStore<S>) -> Self {
        Self::from_state_with(state, |movie| favorites.is_favorite(movie))
    }

    /// お気に入り判定を関数で渡す版（Webのシグナル経由など）
    pub fn from_state_with(state: &'a LoadState, is_favorite: impl Fn(&Movie) -> bool) -> Self {
        match state {
            LoadState::Loading => DetailView::Loading,
            LoadState::Failed(error) => DetailView::Error(error.message().to_string()),
            LoadState::Idle => DetailView::NotFound,
            LoadState::Loaded(movie) => DetailView::Details {
                movie,
                is_favorite: is_favorite(movie),
            },
        }
    }
}

/// お気に入りボタンのラベル
pub fn toggle_label(is_favorite: bool) -> &'static str {
    if is_favorite {
        "Remove from Favorites"
    } else {
        "Add to Favorites"
    }
}
