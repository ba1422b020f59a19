//! API handlers for the activity endpoints.
//!
//! Handlers carry no business logic of their own: each one resolves the
//! `email` parameter if required, calls the registry, and shapes the outcome
//! into a response. Emails are opaque strings: empty is accepted, and no
//! normalization is performed.

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::response::Redirect;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::registry::Activity;

/// Query parameters for the mutating endpoints.
///
/// `email` is declared optional so its absence maps to a 422 rather than the
/// extractor's generic rejection.
#[derive(Debug, Deserialize)]
pub struct EmailParam {
    email: Option<String>,
}

impl EmailParam {
    fn require(self) -> Result<String, ApiError> {
        self.email.ok_or(ApiError::MissingEmail)
    }
}

/// Confirmation body for successful mutations.
#[derive(Debug, Serialize)]
pub struct Confirmation {
    pub message: String,
}

/// `GET /`: UI bootstrap redirect to the static index page.
pub async fn root() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// `GET /activities`: the full directory, no filtering or pagination.
pub async fn list_activities(
    State(state): State<AppState>,
) -> Json<BTreeMap<String, Activity>> {
    Json(state.registry.snapshot())
}

/// `GET /activities/{name}`
pub async fn get_activity(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Activity>, ApiError> {
    Ok(Json(state.registry.get(&name)?))
}

/// `POST /activities/{name}/signup?email=...`
pub async fn signup(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<EmailParam>,
) -> Result<Json<Confirmation>, ApiError> {
    let email = params.require()?;
    let roster_size = state.registry.enroll(&name, &email)?;

    tracing::info!(
        activity = %name,
        email = %email,
        roster_size,
        "Student signed up"
    );

    Ok(Json(Confirmation {
        message: format!("Signed up {} for {}", email, name),
    }))
}

/// `DELETE /activities/{name}/unregister?email=...`
pub async fn unregister(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<EmailParam>,
) -> Result<Json<Confirmation>, ApiError> {
    let email = params.require()?;
    let roster_size = state.registry.withdraw(&name, &email)?;

    tracing::info!(
        activity = %name,
        email = %email,
        roster_size,
        "Student unregistered"
    );

    Ok(Json(Confirmation {
        message: format!("Unregistered {} from {}", email, name),
    }))
}
