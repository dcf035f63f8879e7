use app_cryptography::jwt::{Algorithm, Claims, SessionInfo, generate_token, validate_token};
use app_redis::Redis;
use app_state::AppState;
use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::*;

/// Guards the admin router. Expects `Authorization: Bearer <access> <refresh>`;
/// a valid refresh token with a live Redis session re-mints the access token.
pub async fn admin_auth_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Response {
    info!(
        "Authorization middleware running for {} {}",
        req.method(),
        req.uri()
    );

    let redis = state.redis.clone();
    let config = state.config.clone();

    let Some((access_token, refresh_token)) = bearer_tokens(req.headers()) else {
        return unauthorized();
    };

    // 1) Access token valid
    if let Ok(token_data) =
        validate_token::<Claims>(Algorithm::HS256, &config.jwt_access_key, &access_token)
    {
        let claim = token_data.claims;
        info!("User {} approved using access token", claim.email);
        add_req_headers(&mut req, &claim, &access_token);

        let mut res = next.run(req).await;
        add_res_headers(&mut res, &access_token);
        return res;
    }

    // 2) Otherwise try the refresh token against the stored session
    let Ok(token_data) =
        validate_token::<Claims>(Algorithm::HS256, &config.jwt_refresh_key, &refresh_token)
    else {
        return unauthorized();
    };
    let claim = token_data.claims;

    let session_key = format!("{}:{}", claim.email, claim.session);
    let Ok(session_str) = Redis::get::<String>(&redis, &session_key).await else {
        return unauthorized();
    };
    let Ok(session_info) = serde_json::from_str::<SessionInfo>(&session_str) else {
        return unauthorized();
    };
    if refresh_token != session_info.token {
        return unauthorized();
    }

    // Re-mint the access token
    let iat = Utc::now().timestamp();
    let exp = (Utc::now() + Duration::minutes(config.jwt_access_session_minutes)).timestamp();
    let access_claim = Claims {
        iat,
        exp,
        id: claim.id.clone(),
        name: claim.name.clone(),
        email: claim.email.clone(),
        session: claim.session,
    };
    let Ok(new_access_token) =
        generate_token(Algorithm::HS256, &config.jwt_access_key, &access_claim)
    else {
        return unauthorized();
    };

    info!("User {} approved using refresh token", claim.email);
    add_req_headers(&mut req, &claim, &new_access_token);

    let mut res = next.run(req).await;
    add_res_headers(&mut res, &new_access_token);
    res
}

fn unauthorized() -> Response {
    Response::builder()
        .status(StatusCode::UNAUTHORIZED)
        .body(Body::from("Unauthorized"))
        .unwrap_or_default()
}

// Expect: "Bearer <access_token> <refresh_token>"
fn bearer_tokens(headers: &HeaderMap) -> Option<(String, String)> {
    let auth_header = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let parts: Vec<&str> = auth_header.split_whitespace().collect();
    if parts.len() != 3 || !parts[0].eq_ignore_ascii_case("bearer") {
        return None;
    }
    Some((parts[1].to_string(), parts[2].to_string()))
}

/// Session id forwarded by the middleware, read back by logout/change-password.
pub fn get_session(headers: &HeaderMap) -> Option<u64> {
    headers
        .get("x-auth-session")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
}

pub fn get_email(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-auth-email")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}

fn add_req_headers(req: &mut Request, claim: &Claims, access_token: &str) {
    // If any value is invalid for headers, we just skip it (don't panic middleware)
    let _ = req.headers_mut().insert(
        "x-auth-name",
        HeaderValue::from_str(&claim.name).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    let _ = req.headers_mut().insert(
        "x-auth-email",
        HeaderValue::from_str(&claim.email).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    let _ = req.headers_mut().insert(
        "x-auth-id",
        HeaderValue::from_str(&claim.id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    let _ = req.headers_mut().insert(
        "x-auth-session",
        HeaderValue::from_str(&claim.session.to_string())
            .unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    let _ = req.headers_mut().insert(
        "x-auth-access-token",
        HeaderValue::from_str(access_token).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
}

fn add_res_headers(res: &mut Response, access_token: &str) {
    let _ = res.headers_mut().insert(
        "x-auth-access-token",
        HeaderValue::from_str(access_token).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
}
