//! Movie Lookup CLI
//!
//! OMDbから映画詳細を取得して表示し、お気に入りをローカルに保存する。

pub mod api;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod render;
pub mod storage;
