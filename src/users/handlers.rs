use axum::{
    extract::{FromRef, Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::state::AppState;
use crate::users::{
    dto::{AuthResponse, LoginRequest, MessageResponse, RegisterRequest, TokenResponse,
          UpdateUserRequest},
    error::UserError,
    extractors::AuthUser,
    model::User,
    service::UserService,
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(register))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/login", post(login))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

#[instrument(skip(state))]
async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, UserError> {
    let service = UserService::from_ref(&state);
    Ok(Json(service.get_all_users().await?))
}

#[instrument(skip(state))]
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, UserError> {
    let service = UserService::from_ref(&state);
    Ok(Json(service.get_user_by_id(id).await?))
}

#[instrument(skip(state, payload))]
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, UserError> {
    let service = UserService::from_ref(&state);
    let (token, user) = service.register_user(payload).await?;
    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(Json(AuthResponse { token, user }))
}

#[instrument(skip(state, payload))]
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<User>, UserError> {
    let service = UserService::from_ref(&state);
    let user = service.update_user(id, payload).await?;
    info!(user_id = %user.id, "user updated");
    Ok(Json(user))
}

#[instrument(skip(state))]
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, UserError> {
    let service = UserService::from_ref(&state);
    service.delete_user(id).await?;
    info!(user_id = %id, "user deleted");
    Ok(Json(MessageResponse {
        message: "User deleted!".to_string(),
    }))
}

#[instrument(skip(state, payload))]
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, UserError> {
    let service = UserService::from_ref(&state);
    let token = service.login(&payload.email, &payload.password).await?;
    info!(email = %payload.email, "user logged in");
    Ok(Json(TokenResponse { token }))
}

#[instrument(skip(state))]
async fn get_me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<User>, UserError> {
    let service = UserService::from_ref(&state);
    Ok(Json(service.get_user_by_id(user_id).await?))
}
