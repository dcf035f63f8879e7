use app_cryptography::{
    hash::verify,
    jwt::{Algorithm, Claims, SessionInfo, generate_token},
};
use app_dto::auth::login::{PostLoginInput, PostLoginOutput};
use app_error::AppError;
use app_redis::Redis;
use app_schema::auth::users::User;
use app_state::AppState;
use askama::Template;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::Html,
};
use chrono::{Duration, Utc};
use rand::Rng;
use std::sync::Arc;

const AUTH_FAILD_MESSAGE: &str = "Provided information is wrong!";

#[derive(Template)]
#[template(path = "login.html")]
struct LoginPage;

pub async fn get_login() -> Result<Html<String>, AppError> {
    let page = LoginPage;
    Ok(Html(page.render()?))
}

pub async fn post_login(
    State(state): State<Arc<AppState>>,
    Json(args): Json<PostLoginInput>,
) -> Result<Json<PostLoginOutput>, AppError> {
    // Init configs
    let config = state.config.clone();
    let pg = state.pg.clone();
    let redis = state.redis.clone();
    // Search for user
    let user_info =
        match sqlx::query_as::<_, User>(&format!("{} WHERE email = $1", User::select_query()))
            .bind(&args.email)
            .fetch_optional(&pg)
            .await?
        {
            Some(user) => user,
            None => {
                return Err(AppError::new(AUTH_FAILD_MESSAGE, StatusCode::FORBIDDEN, 2));
            }
        };
    if !user_info.is_active || !verify(&args.password, &user_info.password_hash)? {
        return Err(AppError::new(AUTH_FAILD_MESSAGE, StatusCode::FORBIDDEN, 2));
    }
    // User authentication succeeded, generating login
    let session: u64 = {
        let mut rng = rand::thread_rng();
        rng.r#gen()
    };
    let iat = Utc::now().timestamp();
    let id = user_info.id.to_string();
    let name = user_info.name.clone();
    let email = user_info.email.clone();
    // Access Token
    let exp = (Utc::now() + Duration::minutes(config.jwt_access_session_minutes)).timestamp();
    let access_claim = Claims {
        iat,
        exp,
        id: id.clone(),
        name: name.clone(),
        email: email.clone(),
        session,
    };
    // Refresh Token
    let exp = (Utc::now() + Duration::days(config.jwt_refresh_session_days)).timestamp();
    let refresh_claim = Claims {
        iat,
        exp,
        id: id.clone(),
        name: name.clone(),
        email: email.clone(),
        session,
    };
    // Generate Tokens
    let access_token = generate_token(Algorithm::HS256, &config.jwt_access_key, &access_claim)?;
    let refresh_token = generate_token(Algorithm::HS256, &config.jwt_refresh_key, &refresh_claim)?;
    // Saving refresh session in Redis for the lifetime of the refresh token
    let session_key = format!("{}:{}", &email, &session);
    let session_info = SessionInfo {
        id,
        name,
        email,
        session,
        token: refresh_token.clone(),
    };
    let session_str = serde_json::to_string(&session_info)?;
    let session_ttl = (config.jwt_refresh_session_days * 24 * 60 * 60).max(0) as u64;
    Redis::set_ex(&redis, &session_key, &session_str, session_ttl).await?;
    Ok(Json(PostLoginOutput {
        access_token,
        refresh_token,
    }))
}
