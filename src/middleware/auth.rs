use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::auth::DemoUser;
use crate::error::AppError;
use crate::state::AppState;

/// The authenticated user, inserted as a request extension by
/// [`require_auth_middleware`] for downstream handlers.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub DemoUser);

/// Extracts the bearer token from an Authorization header value.
pub fn bearer_token(value: &str) -> Option<&str> {
    value.strip_prefix("Bearer ").filter(|t| !t.is_empty())
}

/// Middleware that enforces a valid bearer access token.
///
/// Expired or unknown tokens answer 401 with the standard error envelope,
/// so clients can attempt a refresh before forcing a logout.
pub async fn require_auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(bearer_token)
        .ok_or_else(|| AppError::Unauthorized("Missing bearer token".to_string()))?;

    match state.auth.authenticate(token).await {
        Some(user) => {
            req.extensions_mut().insert(CurrentUser(user));
            Ok(next.run(req).await)
        }
        None => Err(AppError::Unauthorized("Invalid or expired access token".to_string())),
    }
}
