use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::api::errors::ApiError;
use crate::core::state::AppState;
use crate::repositories;
use crate::schemas::user::{UserRole, UserTypeQuery, UserTypeResponse};

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/userType", get(check_user))
}

/// Stateless membership check: an exact credential match means teacher,
/// anything else means student. No sessions, no tokens.
async fn check_user(
    Query(query): Query<UserTypeQuery>,
    State(state): State<AppState>,
) -> Result<Json<UserTypeResponse>, ApiError> {
    let (Some(user_id), Some(password)) = (query.user_id, query.password) else {
        return Err(ApiError::BadRequest("Missing fields".to_string()));
    };

    let teacher = repositories::teacher_users::find_by_credentials(state.db(), &user_id, &password)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to check credentials"))?;

    let role = if teacher.is_some() { UserRole::Teacher } else { UserRole::Student };

    Ok(Json(UserTypeResponse { role }))
}
