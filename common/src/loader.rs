//! 映画詳細ローダー
//!
//! IDが変わるたびに `begin` でチケットを発行し、取得完了時に
//! `complete` へ渡す。チケットの世代が最新でなければ結果は捨てる
//! （後から来た古いレスポンスで表示を上書きしない）。

use crate::display::DisplayError;
use crate::parser::FetchError;
use crate::types::Movie;

/// ローダーの状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Movie),
    Failed(DisplayError),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn movie(&self) -> Option<&Movie> {
        match self {
            LoadState::Loaded(movie) => Some(movie),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&DisplayError> {
        match self {
            LoadState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// 発行済みリクエストの識別子
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    imdb_id: String,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn imdb_id(&self) -> &str {
        &self.imdb_id
    }
}

/// `complete` の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Current,
    /// 後続のIDに置き換えられたため破棄
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct DetailLoader {
    generation: u64,
    current_id: Option<String>,
    state: LoadState,
}

impl DetailLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// IDの変更（初回マウント含む）
    ///
    /// 状態を `Loading` にし、前回の結果・エラーをクリアする。
    /// 返したチケットで1回だけ取得を行うこと。
    pub fn begin(&mut self, imdb_id: &str) -> Ticket {
        self.generation += 1;
        self.current_id = Some(imdb_id.to_string());
        self.state = LoadState::Loading;
        Ticket {
            generation: self.generation,
            imdb_id: imdb_id.to_string(),
        }
    }

    /// 取得結果を反映
    pub fn complete(&mut self, ticket: &Ticket, outcome: Result<Movie, FetchError>) -> Applied {
        if !self.is_current(ticket) {
            return Applied::Stale;
        }

        self.state = match outcome {
            Ok(movie) if movie.is_well_formed() => LoadState::Loaded(movie),
            Ok(_) => LoadState::Failed(DisplayError::CorruptedData),
            Err(error) => LoadState::Failed(DisplayError::classify(&error)),
        };
        Applied::Current
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.generation == self.generation
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current_id.as_deref()
    }
}
