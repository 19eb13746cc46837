//! 読み込み中表示

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading-spinner" role="status">
            <div class="spinner" />
            <p class="loading-text">"Loading..."</p>
        </div>
    }
}
