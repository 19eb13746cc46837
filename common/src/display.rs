//! 表示用エラー
//!
//! 取得失敗をユーザー向けの3分類に変換する。

use crate::parser::FetchError;

pub const CORRUPTED_DATA_MESSAGE: &str =
    "Sorry, the movie details are currently unavailable due to corrupted data. Please try another movie.";
pub const NOT_FOUND_ERROR_MESSAGE: &str = "Sorry, the movie was not found.";
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// 分類済みの表示用エラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    CorruptedData,
    NotFound,
    /// 元のエラーテキスト（空ならNone）
    Unknown(Option<String>),
}

impl DisplayError {
    pub fn classify(error: &FetchError) -> Self {
        match error {
            FetchError::Corrupted(_) => DisplayError::CorruptedData,
            FetchError::NotFound => DisplayError::NotFound,
            FetchError::Api(message) | FetchError::Transport(message) => {
                let message = message.trim();
                DisplayError::Unknown((!message.is_empty()).then(|| message.to_string()))
            }
        }
    }

    /// ユーザーに表示するメッセージ
    pub fn message(&self) -> &str {
        match self {
            DisplayError::CorruptedData => CORRUPTED_DATA_MESSAGE,
            DisplayError::NotFound => NOT_FOUND_ERROR_MESSAGE,
            DisplayError::Unknown(Some(message)) => message,
            DisplayError::Unknown(None) => GENERIC_ERROR_MESSAGE,
        }
    }
}

impl std::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_corrupted() {
        let error = DisplayError::classify(&FetchError::Corrupted("eof".into()));
        assert_eq!(error, DisplayError::CorruptedData);
        assert_eq!(error.message(), CORRUPTED_DATA_MESSAGE);
    }

    #[test]
    fn test_classify_not_found() {
        let error = DisplayError::classify(&FetchError::NotFound);
        assert_eq!(error, DisplayError::NotFound);
        assert_eq!(error.message(), "Sorry, the movie was not found.");
    }

    #[test]
    fn test_classify_unknown_keeps_raw_text() {
        let error = DisplayError::classify(&FetchError::Transport("connection refused".into()));
        assert_eq!(error.message(), "connection refused");

        let error = DisplayError::classify(&FetchError::Api("Invalid API key!".into()));
        assert_eq!(error.to_string(), "Invalid API key!");
    }

    #[test]
    fn test_classify_unknown_without_text() {
        let error = DisplayError::classify(&FetchError::Api("  ".into()));
        assert_eq!(error, DisplayError::Unknown(None));
        assert_eq!(error.message(), GENERIC_ERROR_MESSAGE);
    }
}
