//! 映画データの型定義
//!
//! OMDb APIのフィールド名でシリアライズする。
//! お気に入りの永続化フォーマットも同じ形を使う。

use serde::{Deserialize, Serialize};

/// 評価エントリ（評価元と値）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(rename = "Source", default)]
    pub source: String,

    #[serde(rename = "Value", default)]
    pub value: String,
}

/// 映画詳細
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,

    #[serde(rename = "Title", default)]
    pub title: String,

    #[serde(rename = "Poster", default)]
    pub poster: String,

    #[serde(rename = "Genre", default)]
    pub genre: String,

    #[serde(rename = "Year", default)]
    pub year: String,

    #[serde(rename = "Director", default)]
    pub director: String,

    #[serde(rename = "Actors", default)]
    pub actors: String,           // 出演者

    #[serde(rename = "Plot", default)]
    pub plot: String,             // あらすじ

    #[serde(rename = "Language", default)]
    pub language: String,

    #[serde(rename = "Awards", default)]
    pub awards: String,

    #[serde(rename = "Ratings", default)]
    pub ratings: Vec<Rating>,

    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
}

impl Movie {
    /// 表示に必要な最低限のフィールドが揃っているか
    pub fn is_well_formed(&self) -> bool {
        !self.imdb_id.trim().is_empty() && !self.title.trim().is_empty()
    }

    /// 同じ映画か（imdbIDのみで判定）
    pub fn same_key(&self, other: &Movie) -> bool {
        self.imdb_id == other.imdb_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_default() {
        let movie = Movie::default();
        assert_eq!(movie.imdb_id, "");
        assert!(movie.ratings.is_empty());
        assert!(!movie.is_well_formed());
    }

    #[test]
    fn test_movie_deserialize_omdb_fields() {
        let json = r#"{
            "Title": "The Shawshank Redemption",
            "Year": "1994",
            "Genre": "Drama",
            "Director": "Frank Darabont",
            "Actors": "Tim Robbins, Morgan Freeman, Bob Gunton",
            "Plot": "Two imprisoned men bond over a number of years.",
            "Language": "English",
            "Awards": "Nominated for 7 Oscars.",
            "Poster": "https://example.com/poster.jpg",
            "Ratings": [
                {"Source": "Internet Movie Database", "Value": "9.3/10"},
                {"Source": "Rotten Tomatoes", "Value": "91%"}
            ],
            "imdbRating": "9.3",
            "imdbID": "tt0111161",
            "Response": "True"
        }"#;

        let movie: Movie = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(movie.imdb_id, "tt0111161");
        assert_eq!(movie.title, "The Shawshank Redemption");
        assert_eq!(movie.actors, "Tim Robbins, Morgan Freeman, Bob Gunton");
        assert_eq!(movie.ratings.len(), 2);
        assert_eq!(movie.ratings[0].source, "Internet Movie Database");
        assert_eq!(movie.ratings[1].value, "91%");
        assert_eq!(movie.imdb_rating, "9.3");
        assert!(movie.is_well_formed());
    }

    #[test]
    fn test_movie_serialize_uses_omdb_names() {
        let movie = Movie {
            imdb_id: "tt001".to_string(),
            title: "A".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_string(&movie).expect("シリアライズ失敗");
        assert!(json.contains("\"imdbID\":\"tt001\""));
        assert!(json.contains("\"Title\":\"A\""));
        assert!(json.contains("\"Ratings\":[]"));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let movie: Movie = serde_json::from_str(r#"{"imdbID": "tt002"}"#).unwrap();
        assert_eq!(movie.imdb_id, "tt002");
        assert_eq!(movie.title, "");
        assert!(!movie.is_well_formed());
    }

    #[test]
    fn test_same_key_ignores_other_fields() {
        let a = Movie {
            imdb_id: "tt003".to_string(),
            title: "Original".to_string(),
            ..Default::default()
        };
        let b = Movie {
            imdb_id: "tt003".to_string(),
            title: "Refetched".to_string(),
            imdb_rating: "7.1".to_string(),
            ..Default::default()
        };
        assert!(a.same_key(&b));
        assert_ne!(a, b);
    }
}
