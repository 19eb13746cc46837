use thiserror::Error;

#[derive(Error, Debug)]
pub enum MovieLookupError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。`movie-lookup config --set-api-key YOUR_KEY` で設定するか OMDB_API_KEY を指定してください")]
    MissingApiKey,

    #[error("IMDb IDが不正です: {0:?}")]
    InvalidImdbId(String),

    #[error("API呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] movie_lookup_common::Error),
}

pub type Result<T> = std::result::Result<T, MovieLookupError>;
