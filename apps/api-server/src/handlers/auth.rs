//! Authentication handlers: signup and login.

use actix_web::{HttpResponse, web};

use feedline_shared::dto::{AuthResponse, LoginRequest, SignupRequest, SignupResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// PUT /auth/signup
pub async fn signup(
    state: web::Data<AppState>,
    body: web::Json<SignupRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let user = state
        .service
        .register_user(&req.email, &req.name, &req.password)
        .await?;

    Ok(HttpResponse::Created().json(SignupResponse {
        message: "User created".to_string(),
        user_id: user.id.to_string(),
    }))
}

/// POST /auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let auth = state.service.login(&req.email, &req.password).await?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        token: auth.token,
        user_id: auth.user_id.to_string(),
    }))
}
