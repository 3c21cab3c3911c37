use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tera::Tera;
use thiserror::Error;
use tower_http::services::ServeDir;

use crate::newsapi::{self, NewsApi};
use crate::AppConfig;

mod routes;

/// Number of articles requested from the news API per page.
const PAGE_SIZE: u32 = 20;

/// Everything a request handler needs. Built once at startup, read-only
/// afterwards.
pub struct AppState {
    news: NewsApi,
    templates: Tera,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid page parameter {0}")]
    InvalidPage(#[from] std::num::ParseIntError),
    #[error("News API request failed {0}")]
    NewsApi(#[from] newsapi::Error),
    #[error("Failed to render template {0}")]
    Render(#[from] tera::Error),
}

impl IntoResponse for Error {
    /// Callers only ever see an opaque 500; the details go to the log.
    fn into_response(self) -> Response {
        log::error!("request failed: {self}");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

pub async fn run(config: AppConfig, api_key: String) -> anyhow::Result<()> {
    let templates = Tera::new("templates/**/*.html")?;
    let news = NewsApi::new(reqwest::Client::new(), config.news_api_url, api_key);

    let app = router(Arc::new(AppState { news, templates }));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;

    log::info!("Listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/search", get(routes::search))
        .nest_service("/assets", ServeDir::new("assets"))
        .with_state(state)
}
