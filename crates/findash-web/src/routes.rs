//! Route table and JSON API handlers.
//!
//! Each chart endpoint invokes exactly one core aggregation function with
//! the control values carried in the query string. Handlers never hold
//! state between requests; a failure in one never affects the others.

use std::str::FromStr;

use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use findash_core::{
    aggregate, ChartKind, CompanyPerformance, DatasetSummary, PriceDistribution, SliderDomain,
    TrendSeries, ValueDistribution,
};

use crate::error::ApiError;
use crate::page;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/meta", get(meta))
        .route("/api/price-distribution", get(price_distribution))
        .route("/api/performance", get(performance))
        .route("/api/trends", get(trends))
        .route("/api/value-distribution", get(value_distribution))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}

/// Everything the page needs to populate its controls and summary blocks.
#[derive(Debug, Serialize)]
struct MetaResponse {
    summary: DatasetSummary,
    sectors: Vec<String>,
    slider: Option<SliderDomain>,
}

async fn meta(State(state): State<AppState>) -> Json<MetaResponse> {
    let dataset = state.dataset();
    Json(MetaResponse {
        summary: state.summary(),
        sectors: dataset.sectors().to_vec(),
        slider: dataset.slider().cloned(),
    })
}

#[derive(Debug, Deserialize)]
struct SectorQuery {
    sector: Option<String>,
}

impl SectorQuery {
    /// An absent or empty `sector` parameter means "no filter".
    fn filter(&self) -> Option<&str> {
        self.sector.as_deref().filter(|s| !s.is_empty())
    }
}

async fn price_distribution(
    State(state): State<AppState>,
    Query(query): Query<SectorQuery>,
) -> Json<PriceDistribution> {
    tracing::debug!(sector = ?query.filter(), "price distribution request");
    Json(aggregate::price_distribution(state.dataset(), query.filter()))
}

async fn performance(
    State(state): State<AppState>,
    Query(query): Query<SectorQuery>,
) -> Json<CompanyPerformance> {
    Json(aggregate::performance_comparison(
        state.dataset(),
        query.filter(),
    ))
}

#[derive(Debug, Deserialize)]
struct TrendQuery {
    sector: Option<String>,
    kind: Option<String>,
}

async fn trends(
    State(state): State<AppState>,
    Query(query): Query<TrendQuery>,
) -> Result<Json<TrendSeries>, ApiError> {
    let kind = match query.kind.as_deref() {
        Some(raw) => ChartKind::from_str(raw)?,
        None => ChartKind::default(),
    };
    let sector = query.sector.as_deref().filter(|s| !s.is_empty());

    Ok(Json(aggregate::market_trends(state.dataset(), sector, kind)))
}

#[derive(Debug, Deserialize)]
struct ValueQuery {
    max_value: Option<f64>,
}

async fn value_distribution(
    State(state): State<AppState>,
    Query(query): Query<ValueQuery>,
) -> Json<ValueDistribution> {
    // Absent threshold means the slider default: the dataset maximum.
    let max_value = query
        .max_value
        .or_else(|| state.dataset().slider().map(|domain| domain.max))
        .unwrap_or(f64::INFINITY);

    Json(aggregate::value_distribution(state.dataset(), max_value))
}
