//! HTML pages: home, catalog browser, placeholders.

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use sentio_core::render::{
    home_body, placeholder_body, render_catalog_view, view_url, PageContent, Refresh, BROWSE_PATH,
};
use sentio_core::{CatalogViewState, TypeFilter};

use super::handlers::ErrorResponse;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct BrowseQuery {
    pub view: Option<String>,
    #[serde(rename = "type")]
    pub wine_type: Option<String>,
}

pub async fn home(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.layout().render(&PageContent::new("/", home_body())))
}

/// Screens that only show a title and a message.
pub async fn placeholder(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let path = uri.path();
    match placeholder_body(path) {
        Some(body) => Html(state.layout().render(&PageContent::new(path, body))).into_response(),
        None => not_found_page(&state, path),
    }
}

/// Catalog browser.
///
/// Without a known `view`, mounts a fresh store, starts its load and
/// redirects to the mounted view. With one, applies `type` (if given) and
/// renders whatever state the store is in. A loading view refreshes itself.
pub async fn browse_wines(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BrowseQuery>,
) -> Response {
    let requested_filter = query.wine_type.as_deref().map(TypeFilter::parse);

    let mounted = query
        .view
        .as_deref()
        .and_then(|v| Uuid::parse_str(v).ok())
        .and_then(|id| state.views().get(&id).map(|store| (id, store)));

    let Some((id, store)) = mounted else {
        let filter = requested_filter.unwrap_or_default();
        let (id, _) = state.mount_view(filter.clone());
        return Redirect::to(&view_url(&id.to_string(), &filter)).into_response();
    };

    if let Some(filter) = requested_filter {
        store.set_filter(filter);
    }

    let snapshot = store.snapshot();
    let view = CatalogViewState::from_snapshot(&snapshot);
    let view_id = id.to_string();
    debug!(view = %view_id, state = view.name(), "Rendering catalog view");

    let mut page = PageContent::new(BROWSE_PATH, render_catalog_view(&view, &view_id));
    if view.is_pending() {
        page = page.with_refresh(Refresh {
            secs: state.config().views.refresh_secs,
            url: view_url(&view_id, &snapshot.filter),
        });
    }

    Html(state.layout().render(&page)).into_response()
}

/// Re-run the load of a mounted view, then go back to it.
pub async fn reload_view(
    State(state): State<Arc<AppState>>,
    Path(view): Path<String>,
) -> Result<Redirect, (StatusCode, Json<ErrorResponse>)> {
    let not_found = || {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("View not found: {}", view),
            }),
        )
    };

    let id = Uuid::parse_str(&view).map_err(|_| not_found())?;
    let store = state.views().get(&id).ok_or_else(not_found)?;
    let filter = store.active_filter();

    if !state.reload_view(&id) {
        return Err(not_found());
    }

    Ok(Redirect::to(&view_url(&id.to_string(), &filter)))
}

pub async fn fallback(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    not_found_page(&state, uri.path())
}

fn not_found_page(state: &AppState, path: &str) -> Response {
    let body = concat!(
        r#"<section class="placeholder"><h1>Page not found</h1>"#,
        r#"<p>The page you are looking for does not exist. <a href="/">Go home</a>.</p></section>"#
    );
    (
        StatusCode::NOT_FOUND,
        Html(state.layout().render(&PageContent::new(path, body))),
    )
        .into_response()
}
