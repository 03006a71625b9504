// File: crates/dashboard/src/server.rs
// Summary: Axum router: page, layout JSON, control-change updates, and PNG figures.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use launch_core::{
    render_png, ChartSpec, ControlError, ControlId, ControlState, DataSet, DispatchError, Dispatcher, Layout,
    OutputId, RenderOptions, ALL_SITES,
};
use serde::Deserialize;
use thiserror::Error;
use tower_http::trace::TraceLayer;

use crate::page;

/// Shared, read-only server state. The dataset is loaded once before the router is built.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<DataSet>,
    pub dispatcher: Arc<Dispatcher>,
    pub layout: Arc<Layout>,
    pub render: RenderOptions,
}

impl AppState {
    pub fn new(dataset: DataSet, render: RenderOptions) -> Self {
        let layout = Layout::build(&dataset);
        Self {
            dataset: Arc::new(dataset),
            dispatcher: Arc::new(Dispatcher::with_default_bindings()),
            layout: Arc::new(layout),
            render,
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Control(#[from] ControlError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    #[error("render failed: {0}")]
    Render(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Control(_) | ApiError::Dispatch(DispatchError::UnknownControl(_)) => StatusCode::BAD_REQUEST,
            ApiError::Dispatch(DispatchError::UnknownOutput(_)) => StatusCode::NOT_FOUND,
            ApiError::Dispatch(DispatchError::DuplicateOutput(_)) | ApiError::Render(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        tracing::warn!(%status, error = %self, "request rejected");
        (status, self.to_string()).into_response()
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/layout", get(layout))
        .route("/api/update", post(update))
        .route("/api/figure/{output}", get(figure))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(page::render(&state.layout))
}

async fn layout(State(state): State<AppState>) -> Json<Layout> {
    Json(state.layout.as_ref().clone())
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    /// Control that fired; absent on first page load.
    pub changed: Option<String>,
    pub site: String,
    pub payload: [f64; 2],
}

/// Run every binding affected by the change and return the new figures keyed by output id.
async fn update(
    State(state): State<AppState>,
    Json(req): Json<UpdateRequest>,
) -> Result<Json<BTreeMap<&'static str, ChartSpec>>, ApiError> {
    let controls = ControlState::resolve(&state.dataset, &req.site, req.payload)?;
    let updates = match req.changed.as_deref() {
        Some(id) => {
            let changed = id.parse::<ControlId>()?;
            state.dispatcher.on_change(&state.dataset, changed, &controls)
        }
        None => state.dispatcher.initial(&state.dataset, &controls),
    };
    Ok(Json(updates.into_iter().map(|(id, spec)| (id.as_str(), spec)).collect()))
}

#[derive(Debug, Default, Deserialize)]
pub struct FigureQuery {
    pub site: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Render one output as PNG. Missing query values fall back to the initial control state.
async fn figure(
    State(state): State<AppState>,
    Path(output): Path<String>,
    Query(q): Query<FigureQuery>,
) -> Result<Response, ApiError> {
    let output = output.parse::<OutputId>()?;
    let initial = ControlState::initial(&state.dataset);
    let controls = ControlState::resolve(
        &state.dataset,
        q.site.as_deref().unwrap_or(ALL_SITES),
        [
            q.min.unwrap_or(initial.payload.min()),
            q.max.unwrap_or(initial.payload.max()),
        ],
    )?;
    let spec = state.dispatcher.invoke(&state.dataset, output, &controls)?;
    // Rasterizing is CPU-bound; keep it off the single runtime thread.
    let opts = state.render;
    let png = tokio::task::spawn_blocking(move || render_png(&spec, &opts))
        .await
        .map_err(|e| ApiError::Render(e.to_string()))?
        .map_err(|e| ApiError::Render(format!("{e:#}")))?;
    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}
