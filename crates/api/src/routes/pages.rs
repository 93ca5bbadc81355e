//! HTML page handlers

use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::{
    context::RequestContext,
    error::{ApiError, ApiResult},
    render::{NotFound, Region, RenderError, TrainScript},
    state::AppState,
};

pub const TRAIN_SCRIPT_ASSET: &str = "train.js";

/// Landing page
pub async fn index(
    State(state): State<AppState>,
    ctx: RequestContext,
) -> ApiResult<Html<String>> {
    let variant = state
        .page()
        .with_region(Region::Content, state.content.index());

    Ok(Html(state.renderer.render(&variant, &ctx)?))
}

/// Single train page
pub async fn train(
    State(state): State<AppState>,
    Path(train_number): Path<String>,
    ctx: RequestContext,
) -> ApiResult<Response> {
    let Some(content) = state.content.train(&train_number) else {
        return not_found_page(&state, &ctx);
    };

    let src = state.renderer.assets().resolve(TRAIN_SCRIPT_ASSET);
    let script = TrainScript {
        src: &src,
        number: &train_number,
    }
    .render()
    .map_err(RenderError::from)?;

    let variant = state
        .page()
        .with_region(Region::Content, content)
        .with_region(Region::ExtraJs, script);

    Ok(Html(state.renderer.render(&variant, &ctx)?).into_response())
}

/// Body fragment for a train, polled by the train page script
pub async fn train_partial(
    State(state): State<AppState>,
    Path(train_number): Path<String>,
) -> ApiResult<Html<String>> {
    state
        .content
        .train(&train_number)
        .map(Html)
        .ok_or(ApiError::NotFound)
}

/// All trains as JSON
pub async fn trains_json(State(state): State<AppState>) -> Json<Value> {
    Json(state.content.trains_json())
}

/// One train as JSON
pub async fn train_json(
    State(state): State<AppState>,
    Path(train_number): Path<String>,
) -> ApiResult<Json<Value>> {
    state
        .content
        .train_json(&train_number)
        .map(Json)
        .ok_or(ApiError::TrainNotFound)
}

/// Anything not routed elsewhere
pub async fn fallback(State(state): State<AppState>, ctx: RequestContext) -> ApiResult<Response> {
    not_found_page(&state, &ctx)
}

/// Full page with a not-found body, still carrying this host's metadata and mirrors.
fn not_found_page(state: &AppState, ctx: &RequestContext) -> ApiResult<Response> {
    let content = NotFound { path: &ctx.path }
        .render()
        .map_err(RenderError::from)?;
    let variant = state.page().with_region(Region::Content, content);
    let html = state.renderer.render(&variant, ctx)?;

    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}
