use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    error::{AppError, AppResult},
    middleware::auth::{bearer_token, CurrentUser},
    middleware::ip::extract_ip_from_headers,
    state::AppState,
    types::{LoginRequest, RefreshRequest, TokenResponse, UserProfileDto},
};

/// POST /auth/login - verify demo credentials and hand out a token pair.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    // Per-endpoint rate limit: "/auth/login"
    let ip = extract_ip_from_headers(&headers, None);
    if let Err((status, body)) = state.rate_limiter.check_endpoint_limit("/auth/login", ip).await {
        return Ok((status, body).into_response());
    }

    if req.email.trim().is_empty() || !req.email.contains('@') {
        return Err(AppError::ValidationError {
            field: "email".to_string(),
            message: "A valid email address is required".to_string(),
        });
    }
    if req.password.is_empty() {
        return Err(AppError::ValidationError {
            field: "password".to_string(),
            message: "Password is required".to_string(),
        });
    }

    match state.auth.login(&req.email, &req.password).await {
        Some((pair, user)) => {
            state.metrics.inc_logins_succeeded();
            tracing::info!(user = %user.email, "login succeeded");
            Ok(Json(TokenResponse {
                access_token: pair.access_token,
                refresh_token: pair.refresh_token,
            })
            .into_response())
        }
        None => {
            state.metrics.inc_logins_failed();
            tracing::warn!(email = %req.email, %ip, "login failed");
            Err(AppError::Unauthorized("Invalid email or password".to_string()))
        }
    }
}

/// POST /auth/refresh-token - rotate a refresh token into a new pair.
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> AppResult<impl IntoResponse> {
    if req.refresh_token.trim().is_empty() {
        return Err(AppError::BadRequest("refresh_token must not be empty".to_string()));
    }
    match state.auth.refresh(&req.refresh_token).await {
        Some(pair) => {
            state.metrics.inc_token_refreshes();
            Ok(Json(TokenResponse {
                access_token: pair.access_token,
                refresh_token: pair.refresh_token,
            }))
        }
        None => Err(AppError::Unauthorized("Invalid or expired refresh token".to_string())),
    }
}

/// GET /auth/profile - the authenticated user's profile.
pub async fn profile(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<UserProfileDto> {
    Json(UserProfileDto::from(&user))
}

/// POST /auth/logout - revoke the presented token pair.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> AppResult<impl IntoResponse> {
    // The middleware has already validated the token; re-extract it to revoke.
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(bearer_token)
        .ok_or_else(|| AppError::Unauthorized("Missing bearer token".to_string()))?;
    state.auth.logout(token).await;
    tracing::info!(user = %user.email, "logout");
    Ok(StatusCode::NO_CONTENT)
}
