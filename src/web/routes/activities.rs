use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Query, State},
    http::{request::Parts, StatusCode},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::error::SignupError;
use crate::models::{ActivityMap, MessageResponse};
use crate::services::activities_service;
use crate::web::AppState;

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

// Query rejections answer with the same `{"detail": ...}` shape as SignupError.
#[async_trait]
impl<S> FromRequestParts<S> for ParticipantQuery
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<Value>);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<ParticipantQuery>::from_request_parts(parts, state).await {
            Ok(Query(query)) => Ok(query),
            Err(rejection) => {
                tracing::debug!("participant query rejected: {}", rejection.body_text());
                Err((
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(serde_json::json!({ "detail": rejection.body_text() })),
                ))
            }
        }
    }
}

pub async fn list_activities_handler(State(state): State<AppState>) -> Json<ActivityMap> {
    Json(activities_service::list_activities(&state.directory).await)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    State(state): State<AppState>,
    query: ParticipantQuery,
) -> Result<Json<MessageResponse>, SignupError> {
    activities_service::signup(&state.directory, &activity_name, &query.email)
        .await
        .map(Json)
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    State(state): State<AppState>,
    query: ParticipantQuery,
) -> Result<Json<MessageResponse>, SignupError> {
    activities_service::unregister(&state.directory, &activity_name, &query.email)
        .await
        .map(Json)
}
