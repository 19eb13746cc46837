//! OMDb APIレスポンスパーサー
//!
//! CLI(reqwest)とWeb(fetch)の両方がレスポンス本文をここでパースし、
//! 失敗理由を [`FetchError`] に分類する。

use serde_json::Value;
use thiserror::Error;

use crate::types::Movie;

/// OMDbが「該当なし」のときに返すエラーメッセージ
pub const OMDB_NOT_FOUND: &str = "Movie not found!";

/// 映画詳細の取得失敗
///
/// 呼び出し側 (Detail Loader) はこの分類をもとに表示用エラーを決める。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// レスポンスをパースできない
    #[error("Failed to parse movie details. The data may be corrupted. ({0})")]
    Corrupted(String),

    /// 該当するIDの映画が存在しない
    #[error("Movie not found!")]
    NotFound,

    /// APIが `Response: "False"` で返したその他のエラー
    #[error("{0}")]
    Api(String),

    /// 通信エラー・HTTPステータスエラー
    #[error("{0}")]
    Transport(String),
}

/// OMDbレスポンス本文をパース
///
/// # Returns
/// * `Ok(Movie)` - `Response: "True"` で映画としてデシリアライズできた
/// * `Err(FetchError::NotFound)` - `Error: "Movie not found!"`
/// * `Err(FetchError::Api)` - その他の `Response: "False"`
/// * `Err(FetchError::Corrupted)` - JSONとして不正、または形が合わない
///
/// # Examples
/// ```
/// use movie_lookup_common::{parse_movie_response, FetchError};
///
/// let body = r#"{"Response":"False","Error":"Movie not found!"}"#;
/// assert_eq!(parse_movie_response(body), Err(FetchError::NotFound));
/// ```
pub fn parse_movie_response(body: &str) -> Result<Movie, FetchError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| FetchError::Corrupted(e.to_string()))?;

    if value.get("Response").and_then(Value::as_str) == Some("False") {
        let message = value
            .get("Error")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        return Err(if message == OMDB_NOT_FOUND {
            FetchError::NotFound
        } else {
            FetchError::Api(message)
        });
    }

    serde_json::from_value(value).map_err(|e| FetchError::Corrupted(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success() {
        let body = r#"{"Title":"Heat","Year":"1995","imdbID":"tt0113277","Ratings":[],"Response":"True"}"#;
        let movie = parse_movie_response(body).expect("パース失敗");
        assert_eq!(movie.title, "Heat");
        assert_eq!(movie.year, "1995");
        assert_eq!(movie.imdb_id, "tt0113277");
    }

    #[test]
    fn test_parse_not_found() {
        let body = r#"{"Response":"False","Error":"Movie not found!"}"#;
        assert_eq!(parse_movie_response(body), Err(FetchError::NotFound));
    }

    #[test]
    fn test_parse_other_api_error() {
        let body = r#"{"Response":"False","Error":"Incorrect IMDb ID."}"#;
        assert_eq!(
            parse_movie_response(body),
            Err(FetchError::Api("Incorrect IMDb ID.".to_string()))
        );
    }

    #[test]
    fn test_parse_invalid_json_is_corrupted() {
        let result = parse_movie_response("<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(FetchError::Corrupted(_))));
    }

    #[test]
    fn test_parse_wrong_shape_is_corrupted() {
        // Ratingsが配列でない
        let body = r#"{"Title":"X","imdbID":"tt1","Ratings":"none"}"#;
        assert!(matches!(parse_movie_response(body), Err(FetchError::Corrupted(_))));

        // オブジェクトでない
        assert!(matches!(parse_movie_response("[1, 2, 3]"), Err(FetchError::Corrupted(_))));
    }

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(FetchError::NotFound.to_string(), "Movie not found!");
        assert_eq!(FetchError::Transport("timeout".into()).to_string(), "timeout");
        assert!(FetchError::Corrupted("eof".into())
            .to_string()
            .starts_with("Failed to parse movie details."));
    }
}
