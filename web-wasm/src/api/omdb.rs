//! OMDb API連携（ブラウザfetch）

use gloo::net::http::Request;
use movie_lookup_common::{parse_movie_response, FetchError, Movie};

const OMDB_API_URL: &str = "https://www.omdbapi.com/";

/// 映画詳細を取得
///
/// レスポンス本文のパースと失敗の分類は `parse_movie_response` に任せる。
pub async fn get_movie_details(api_key: &str, imdb_id: &str) -> Result<Movie, FetchError> {
    let response = Request::get(OMDB_API_URL)
        .query([("apikey", api_key), ("i", imdb_id), ("plot", "full")])
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let ok = response.ok();
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !ok {
        return Err(match parse_movie_response(&body) {
            Err(e @ (FetchError::NotFound | FetchError::Api(_))) => e,
            _ => FetchError::Transport(format!("API error: {}", status)),
        });
    }

    parse_movie_response(&body)
}
