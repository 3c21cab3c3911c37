use reqwest::StatusCode;
use thiserror::Error;

pub mod client;
pub mod models;

pub use client::NewsApi;
pub use models::{Article, Results, Source};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to reach the news API {0}")]
    Request(#[from] reqwest::Error),
    #[error("News API answered with status {0}")]
    Status(StatusCode),
    #[error("Failed to decode JSON {0}")]
    JsonDecode(#[from] serde_json::Error),
}
