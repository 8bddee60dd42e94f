//! "Discuss this wine" endpoint, the target of every card's discuss form.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Form, Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use sentio_core::DiscussIntent;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DiscussForm {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct DiscussResponse {
    pub status: String,
    pub wine_id: i64,
}

pub async fn discuss_wine(
    State(state): State<Arc<AppState>>,
    Path(wine_id): Path<i64>,
    Form(form): Form<DiscussForm>,
) -> (StatusCode, Json<DiscussResponse>) {
    let intent = DiscussIntent {
        wine_id,
        name: form.name.trim().to_string(),
    };
    debug!(handler = state.discuss().name(), wine_id, "Dispatching discuss intent");
    state.discuss().discuss(&intent);

    (
        StatusCode::ACCEPTED,
        Json(DiscussResponse {
            status: "accepted".to_string(),
            wine_id,
        }),
    )
}
