use std::num::NonZeroU32;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;
use tera::Context;

use super::{AppState, Error, PAGE_SIZE};
use crate::newsapi::NewsApi;
use crate::search::Search;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    q: String,
    #[serde(default)]
    page: String,
}

/// The home page: the template without any search state.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, Error> {
    let html = state.templates.render("index.html", &Context::new())?;

    Ok(Html(html))
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, Error> {
    log::debug!("Search request, q: {:?}, page: {:?}", params.q, params.page);

    let search = run_search(&state.news, params).await?;

    let mut context = Context::new();
    context.insert("search", &search);
    context.insert("current_page", &search.current_page());
    context.insert("previous_page", &search.previous_page());
    context.insert("is_last_page", &search.is_last_page());

    let html = state.templates.render("index.html", &context)?;

    Ok(Html(html))
}

/// Parse the page parameter, fetch one page of results and derive the
/// pagination state from it.
async fn run_search(news: &NewsApi, params: SearchParams) -> Result<Search, Error> {
    let page = match params.page.as_str() {
        "" => "1",
        page => page,
    };

    // NonZeroU32 keeps the page cursor at 1 or above
    let next_page = page.parse::<NonZeroU32>()?;

    let mut search = Search::new(params.q, next_page.get());

    let results = news
        .everything(&search.search_key, search.next_page, PAGE_SIZE)
        .await?;

    search.paginate(results, PAGE_SIZE);

    Ok(search)
}
