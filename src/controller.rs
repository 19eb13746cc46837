//! 映画詳細コントローラ
//!
//! APIとローダーをつなぐ。ログはここで出し、ローダー自体には持たせない。

use movie_lookup_common::{Applied, DetailLoader, LoadState};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::api::MovieApi;

pub struct DetailController<A: MovieApi> {
    api: A,
    loader: Mutex<DetailLoader>,
}

impl<A: MovieApi> DetailController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            loader: Mutex::new(DetailLoader::new()),
        }
    }

    /// IDを切り替えて取得する
    ///
    /// 取得中に別のIDで `load` が呼ばれた場合、こちらの結果は破棄される。
    pub async fn load(&self, imdb_id: &str) -> Applied {
        // ロックは取得の await をまたがない
        let ticket = self.loader.lock().await.begin(imdb_id);
        info!(imdb_id, generation = ticket.generation(), "fetching movie details");

        let outcome = self.api.get_movie_details(imdb_id).await;
        match &outcome {
            Ok(movie) => debug!(imdb_id, title = %movie.title, "movie details received"),
            Err(e) => warn!(imdb_id, error = %e, "fetch failed"),
        }

        let mut loader = self.loader.lock().await;
        let applied = loader.complete(&ticket, outcome);
        match applied {
            Applied::Stale => debug!(
                imdb_id,
                current = loader.current_id().unwrap_or_default(),
                "discarding stale response"
            ),
            Applied::Current => {
                if let Some(error) = loader.state().error() {
                    warn!(imdb_id, kind = ?error, message = error.message(), "showing error");
                }
            }
        }
        applied
    }

    pub async fn state(&self) -> LoadState {
        self.loader.lock().await.state().clone()
    }

    pub async fn current_id(&self) -> Option<String> {
        self.loader.lock().await.current_id().map(str::to_string)
    }

    pub fn api(&self) -> &A {
        &self.api
    }
}
