//! メインアプリケーションコンポーネント

use gloo::console;
use leptos::prelude::*;
use movie_lookup_common::KeyValueStore;

use crate::components::{header::Header, movie_details::MovieDetails};
use crate::storage::LocalStorageStore;

/// APIキーを保存するキー
const API_KEY_STORAGE_KEY: &str = "omdbApiKey";

/// メインアプリケーションコンポーネント
///
/// 入力されたIMDb IDを `MovieDetails` に渡す（ルーティングの代わり）。
#[component]
pub fn App() -> impl IntoView {
    let saved_key = LocalStorageStore
        .get(API_KEY_STORAGE_KEY)
        .ok()
        .flatten()
        .unwrap_or_default();
    let (api_key, set_api_key) = signal(saved_key);
    let (id_input, set_id_input) = signal(String::new());
    let (imdb_id, set_imdb_id) = signal(None::<String>);

    let on_save_api_key = move |_| {
        let mut store = LocalStorageStore;
        if let Err(e) = store.set(API_KEY_STORAGE_KEY, &api_key.get_untracked()) {
            console::error!(format!("APIキーの保存失敗: {}", e));
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let id = id_input.get_untracked().trim().to_string();
        if !id.is_empty() {
            set_imdb_id.set(Some(id));
        }
    };

    view! {
        <div class="container">
            <Header />

            <div class="settings-panel">
                <div class="form-group">
                    <label for="api-key">"OMDb API Key"</label>
                    <input
                        type="password"
                        id="api-key"
                        placeholder="API Keyを入力..."
                        prop:value=move || api_key.get()
                        on:input=move |ev| {
                            set_api_key.set(event_target_value(&ev));
                        }
                    />
                    <button class="btn btn-secondary btn-small" on:click=on_save_api_key>
                        "保存"
                    </button>
                </div>
            </div>

            <form class="search-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="tt0111161"
                    prop:value=move || id_input.get()
                    on:input=move |ev| {
                        set_id_input.set(event_target_value(&ev));
                    }
                />
                <button type="submit" class="btn btn-primary">"表示"</button>
            </form>

            <Show
                when=move || imdb_id.get().is_some()
                fallback=|| view! { <p class="text-muted">"IMDb IDを入力してください"</p> }
            >
                <MovieDetails
                    imdb_id=Signal::derive(move || imdb_id.get().unwrap_or_default())
                    api_key=api_key
                />
            </Show>
        </div>
    }
}
