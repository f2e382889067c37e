//! Grid HTTP routes.
//!
//! A single GET endpoint serves both calls. Data calls name the view with
//! the `tables` parameter and carry the draw/paging/search/order family;
//! an `edit` parameter switches the same endpoint to the inline-edit path.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::grid::{EditCommand, GridError, GridService};

/// State shared across grid handlers
pub struct GridState {
    pub service: GridService,
}

impl GridState {
    pub fn new(service: GridService) -> Self {
        Self { service }
    }
}

/// Create grid routes
pub fn grid_routes(state: Arc<GridState>) -> Router {
    Router::new()
        .route("/grid", get(grid_handler))
        .with_state(state)
}

/// Dispatches one call to the data or edit path
async fn grid_handler(
    State(state): State<Arc<GridState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if EditCommand::is_edit_call(&params) {
        return match EditCommand::from_params(&params)
            .and_then(|command| state.service.edit(&command))
        {
            Ok(response) => Json(response).into_response(),
            Err(error) => error.into_response(),
        };
    }

    let Some(table) = params.get("tables") else {
        return GridError::MissingParam("tables").into_response();
    };

    match state.service.data(table, &params) {
        Ok(response) => Json(response).into_response(),
        Err(error) => error.into_response(),
    }
}
