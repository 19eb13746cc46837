//! 映画データAPI

mod omdb;

pub use omdb::OmdbClient;

use async_trait::async_trait;
use movie_lookup_common::{FetchError, Movie};

/// 映画詳細の取得元
#[async_trait]
pub trait MovieApi: Send + Sync {
    async fn get_movie_details(&self, imdb_id: &str) -> Result<Movie, FetchError>;
}
