//! 映画詳細コンポーネント
//!
//! `imdb_id` が変わるたびに取得し直す。取得中に別のIDへ切り替わった場合、
//! 古いレスポンスはローダーのチケット判定で捨てられる。

use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;
use movie_lookup_common::{
    toggle_label, Applied, CorruptionPolicy, DetailLoader, DetailView, FavoritesStore, Movie,
    NOT_FOUND_MESSAGE,
};

use crate::api::omdb;
use crate::components::loading_spinner::LoadingSpinner;
use crate::storage::LocalStorageStore;

fn load_favorites() -> FavoritesStore<LocalStorageStore> {
    match FavoritesStore::load(LocalStorageStore, CorruptionPolicy::Discard) {
        Ok(store) => {
            if let Some(reason) = store.discarded_reason() {
                console::warn!(format!("お気に入りデータが壊れていたため初期化しました: {}", reason));
            }
            store
        }
        Err(e) => {
            console::error!(format!("お気に入りの読込失敗: {}", e));
            FavoritesStore::empty(LocalStorageStore)
        }
    }
}

#[component]
pub fn MovieDetails(
    #[prop(into)] imdb_id: Signal<String>,
    #[prop(into)] api_key: Signal<String>,
) -> impl IntoView {
    let loader = RwSignal::new(DetailLoader::new());
    let favorites = RwSignal::new(load_favorites());

    Effect::new(move |_| {
        let id = imdb_id.get();
        let key = api_key.get_untracked();
        let Some(ticket) = loader.try_update(|l| l.begin(&id)) else {
            return;
        };
        console::log!(format!("fetching movie details: {}", id));

        spawn_local(async move {
            let outcome = omdb::get_movie_details(&key, &id).await;
            if let Err(e) = &outcome {
                console::warn!(format!("fetch failed ({}): {}", id, e));
            }
            if loader.try_update(|l| l.complete(&ticket, outcome)) == Some(Applied::Stale) {
                console::debug!(format!("discarding stale response: {}", id));
            }
        });
    });

    let on_toggle = move |movie: Movie| {
        favorites.update(|store| {
            if let Err(e) = store.toggle(&movie) {
                console::error!(format!("お気に入りの保存失敗: {}", e));
            }
        });
    };

    move || {
        loader.with(|l| {
            favorites.with(|store| match DetailView::from_state(l.state(), store) {
                DetailView::Loading => view! { <LoadingSpinner /> }.into_any(),
                DetailView::Error(message) => view! { <p>"Error: " {message}</p> }.into_any(),
                DetailView::NotFound => view! { <p>{NOT_FOUND_MESSAGE}</p> }.into_any(),
                DetailView::Details { movie, is_favorite } => view! {
                    <MovieCard movie=movie.clone() is_favorite=is_favorite on_toggle=on_toggle.clone() />
                }
                .into_any(),
            })
        })
    }
}

#[component]
fn MovieCard<F>(movie: Movie, is_favorite: bool, on_toggle: F) -> impl IntoView
where
    F: Fn(Movie) + 'static + Clone + Send + Sync,
{
    let ratings = (!movie.ratings.is_empty()).then(|| {
        let items = movie
            .ratings
            .iter()
            .map(|rating| view! { <li>{format!("{}: {}", rating.source, rating.value)}</li> })
            .collect_view();
        view! {
            <div class="ratings">
                <strong>"Ratings:"</strong>
                <ul>{items}</ul>
            </div>
        }
    });
    let target = movie.clone();

    view! {
        <div class="movie-details-container">
            <div class="movie-details">
                <h1>{movie.title.clone()}</h1>
                <div class="movie-poster">
                    <img src=movie.poster.clone() alt=movie.title.clone() />
                </div>
                <div class="movie-info">
                    <p><strong>"Genre:"</strong>" "{movie.genre}</p>
                    <p><strong>"Year:"</strong>" "{movie.year}</p>
                    <p><strong>"Director:"</strong>" "{movie.director}</p>
                    <p><strong>"Actors:"</strong>" "{movie.actors}</p>
                    <p><strong>"Plot:"</strong>" "{movie.plot}</p>
                    <p><strong>"Language:"</strong>" "{movie.language}</p>
                    <p><strong>"Awards:"</strong>" "{movie.awards}</p>
                    {ratings}
                    <p><strong>"imdbRating:"</strong>" "{movie.imdb_rating}" (IMDb)"</p>
                    <button
                        class="favorite-button"
                        on:click=move |_| on_toggle(target.clone())
                    >
                        {toggle_label(is_favorite)}
                    </button>
                </div>
            </div>
        </div>
    }
}
