//! Movie Lookup Common Library
//!
//! CLIとWeb(WASM)で共有される型とコアロジック

pub mod types;
pub mod error;
pub mod parser;
pub mod display;
pub mod loader;
pub mod storage;
pub mod favorites;
pub mod view;

pub use types::{Movie, Rating};
pub use error::{Error, Result};
pub use parser::{parse_movie_response, FetchError};
pub use display::DisplayError;
pub use loader::{Applied, DetailLoader, LoadState, Ticket};
pub use storage::{KeyValueStore, MemoryStore};
pub use favorites::{CorruptionPolicy, FavoritesStore, Toggled, FAVORITES_KEY};
pub use view::{toggle_label, DetailView, NOT_FOUND_MESSAGE};
