/**
 * Entry HTTP Handlers
 *
 * Thin adapters from HTTP onto [`EntryService`]. All routes sit behind the
 * authentication middleware, so every handler receives the caller as
 * [`AuthUser`].
 */

use axum::{
    extract::State,
    http::{
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
        StatusCode,
    },
    response::{IntoResponse, Json},
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::backend::entries::service::EntryService;
use crate::backend::error::BackendResult;
use crate::backend::middleware::{ApiJson, ApiPath, ApiQuery, AuthUser};
use crate::backend::server::state::AppState;
use crate::shared::analytics::MoodAnalytics;
use crate::shared::export::ExportFormat;
use crate::shared::{ApiResponse, Entry, EntryInput};

type EntryResponse = Json<ApiResponse<Entry>>;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExportParams {
    pub format: Option<String>,
}

/// POST /api/entries
pub async fn create_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(input): ApiJson<EntryInput>,
) -> BackendResult<(StatusCode, EntryResponse)> {
    let entry = EntryService::from_state(&state).create(auth.id(), &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_data("Entry added successfully!", entry)),
    ))
}

/// GET /api/entries
pub async fn list_entries(
    State(state): State<AppState>,
    auth: AuthUser,
) -> BackendResult<Json<ApiResponse<Vec<Entry>>>> {
    let entries = EntryService::from_state(&state).list(auth.id()).await?;
    Ok(Json(ApiResponse::with_data("Entries fetched successfully!", entries)))
}

/// GET /api/entries/{id}
pub async fn get_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(entry_id): ApiPath<Uuid>,
) -> BackendResult<EntryResponse> {
    let entry = EntryService::from_state(&state).get(auth.id(), entry_id).await?;
    Ok(Json(ApiResponse::with_data("Entry fetched successfully!", entry)))
}

/// PUT /api/entries/{id}
pub async fn update_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(entry_id): ApiPath<Uuid>,
    ApiJson(input): ApiJson<EntryInput>,
) -> BackendResult<EntryResponse> {
    let entry = EntryService::from_state(&state)
        .update(auth.id(), entry_id, &input)
        .await?;
    Ok(Json(ApiResponse::with_data("Entry updated successfully!", entry)))
}

/// DELETE /api/entries/{id}
pub async fn delete_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(entry_id): ApiPath<Uuid>,
) -> BackendResult<EntryResponse> {
    let entry = EntryService::from_state(&state).delete(auth.id(), entry_id).await?;
    Ok(Json(ApiResponse::with_data("Entry deleted successfully!", entry)))
}

/// PATCH or POST /api/entries/{id}/favorite
pub async fn toggle_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(entry_id): ApiPath<Uuid>,
) -> BackendResult<EntryResponse> {
    let entry = EntryService::from_state(&state)
        .toggle_favorite(auth.id(), entry_id)
        .await?;
    let message = if entry.is_favorite {
        "Entry added to favorites!"
    } else {
        "Entry removed from favorites!"
    };
    Ok(Json(ApiResponse::with_data(message, entry)))
}

/// GET /api/entries/search?text=
pub async fn search_entries(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> BackendResult<Json<ApiResponse<Vec<Entry>>>> {
    let entries = EntryService::from_state(&state)
        .search(auth.id(), params.text.as_deref())
        .await?;
    let message = if entries.is_empty() {
        "No entries found!"
    } else {
        "Entries fetched successfully!"
    };
    Ok(Json(ApiResponse::with_data(message, entries)))
}

/// GET /api/entries/analytics
pub async fn entry_analytics(
    State(state): State<AppState>,
    auth: AuthUser,
) -> BackendResult<Json<ApiResponse<MoodAnalytics>>> {
    let analytics = EntryService::from_state(&state).analytics(auth.id()).await?;
    Ok(Json(ApiResponse::with_data("Analytics fetched successfully!", analytics)))
}

/// GET /api/entries/export?format=json|text|markdown
pub async fn export_entries(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiQuery(params): ApiQuery<ExportParams>,
) -> BackendResult<impl IntoResponse> {
    let format = match params.format.as_deref() {
        Some(raw) => raw.parse::<ExportFormat>()?,
        None => ExportFormat::default(),
    };
    let file = EntryService::from_state(&state)
        .export(auth.id(), format, Utc::now())
        .await?;

    tracing::info!("Exported entries for {} as {}", auth.id(), file.filename);
    Ok((
        [
            (CONTENT_TYPE, file.content_type.to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.filename),
            ),
        ],
        file.body,
    ))
}
