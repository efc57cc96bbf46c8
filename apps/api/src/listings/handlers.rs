//! Axum route handlers for the Listings API.

use axum::{extract::Query, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::listings::generator::{generate_listings, Listing, ListingKind, ListingQuery};

#[derive(Debug, Deserialize)]
pub struct ListingParams {
    #[serde(default)]
    pub role: String,
    pub location: Option<String>,
    /// Comma-separated, e.g. `skills=Rust,SQL`.
    pub skills: Option<String>,
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ListingsResponse {
    pub kind: ListingKind,
    pub generated_at: DateTime<Utc>,
    pub listings: Vec<Listing>,
}

fn respond(kind: ListingKind, params: ListingParams) -> Result<Json<ListingsResponse>, AppError> {
    let query = ListingQuery::new(
        &params.role,
        params.location.as_deref(),
        params.skills.as_deref(),
        params.count,
    )?;
    let listings = generate_listings(kind, &query)?;
    debug!(
        "Generated {} {:?} listings for '{}' in {}",
        listings.len(),
        kind,
        query.role,
        query.location
    );
    Ok(Json(ListingsResponse {
        kind,
        generated_at: Utc::now(),
        listings,
    }))
}

/// GET /api/v1/listings/jobs
pub async fn handle_jobs(
    Query(params): Query<ListingParams>,
) -> Result<Json<ListingsResponse>, AppError> {
    respond(ListingKind::Job, params)
}

/// GET /api/v1/listings/internships
pub async fn handle_internships(
    Query(params): Query<ListingParams>,
) -> Result<Json<ListingsResponse>, AppError> {
    respond(ListingKind::Internship, params)
}

/// GET /api/v1/listings/freelance
pub async fn handle_freelance(
    Query(params): Query<ListingParams>,
) -> Result<Json<ListingsResponse>, AppError> {
    respond(ListingKind::Freelance, params)
}
