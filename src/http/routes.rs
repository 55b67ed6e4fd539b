use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::clock::entities::WorldClockEntry;
use crate::clock::helpers as clock_helpers;
use crate::domain::dtos::ListResponse;
use crate::domain::entities::Country;
use crate::domain::{
    add_participant, current_time, find_appointment, list_countries, list_timezones,
    remove_participant, search_countries, submit_appointment, update_draft,
};

use super::core::ApiError;
use super::state::AppState;

#[derive(Deserialize, Debug)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

pub async fn list_countries(
    State(state): State<Arc<AppState>>,
) -> Json<ListResponse<Country>> {
    Json(list_countries::execute(state.countries.clone()).await)
}

pub async fn search_countries(
    State(state): State<Arc<AppState>>,
    Query(payload): Query<search_countries::Request>,
) -> Json<ListResponse<Country>> {
    Json(search_countries::execute(state.countries.clone(), payload).await)
}

pub async fn list_timezones(
    State(state): State<Arc<AppState>>,
) -> Json<ListResponse<String>> {
    Json(list_timezones::execute(state.worldtime.clone()).await)
}

pub async fn current_time(
    State(state): State<Arc<AppState>>,
    Query(payload): Query<current_time::Request>,
) -> Result<Json<current_time::Response>, ApiError> {
    match current_time::execute(state.worldtime.clone(), payload).await {
        Ok(response) => Ok(Json(response)),
        Err(current_time::Error::Unavailable) => Err(ApiError::NotFound(
            "Fuseau horaire indisponible.".to_string(),
        )),
    }
}

pub async fn world_clocks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<WorldClockEntry>> {
    let entries = state.clock.borrow().clone();
    Json(clock_helpers::search(entries, &query.q))
}

pub async fn find_appointment(
    State(state): State<Arc<AppState>>,
) -> Result<Json<find_appointment::Response>, ApiError> {
    match find_appointment::execute(state.repo.clone()).await {
        Ok(response) => Ok(Json(response)),
        Err(..) => Err(internal_error()),
    }
}

pub async fn update_draft(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<update_draft::Request>,
) -> Result<Json<update_draft::Response>, ApiError> {
    match update_draft::execute(state.repo.clone(), payload).await {
        Ok(response) => Ok(Json(response)),
        Err(..) => Err(internal_error()),
    }
}

pub async fn add_participant(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<add_participant::Request>,
) -> Result<Json<add_participant::Response>, ApiError> {
    match add_participant::execute(state.repo.clone(), state.countries.clone(), payload).await {
        Ok(response) => Ok(Json(response)),
        Err(add_participant::Error::BadRequest) => Err(ApiError::UnprocessableEntity(
            "Veuillez renseigner le nom, l'email et un pays valide.".to_string(),
        )),
        Err(add_participant::Error::Unknown) => Err(internal_error()),
    }
}

pub async fn remove_participant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<remove_participant::Response>, ApiError> {
    match remove_participant::execute(state.repo.clone(), remove_participant::Request { id }).await
    {
        Ok(response) => Ok(Json(response)),
        Err(..) => Err(internal_error()),
    }
}

pub async fn submit_appointment(
    State(state): State<Arc<AppState>>,
) -> Result<Json<submit_appointment::Response>, ApiError> {
    match submit_appointment::execute(state.repo.clone()).await {
        Ok(response) => Ok(Json(response)),
        Err(submit_appointment::Error::EmptyRoster) => Err(ApiError::UnprocessableEntity(
            "Veuillez ajouter au moins un participant.".to_string(),
        )),
        Err(submit_appointment::Error::IncompleteDraft) => Err(ApiError::UnprocessableEntity(
            "Veuillez renseigner la date et l'heure du rendez-vous.".to_string(),
        )),
        Err(submit_appointment::Error::Unknown) => Err(internal_error()),
    }
}

fn internal_error() -> ApiError {
    ApiError::InternalServerError("une erreur inattendue est survenue".to_string())
}
