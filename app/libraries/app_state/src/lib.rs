use app_config::AppConfig;
use app_error::AppError;
use deadpool_redis::{Pool as RedisPool, Runtime};
use sqlx::Pool as PostgresPool;
use sqlx::postgres::{PgPoolOptions, Postgres};

#[derive(Clone)]
pub struct AppState {
    pub pg: PostgresPool<Postgres>,
    pub redis: RedisPool,
    pub config: AppConfig,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self, AppError> {
        let pg = PgPoolOptions::new()
            .max_connections(config.pg_connection)
            .connect(&config.pg_url)
            .await?;
        let redis = deadpool_redis::Config::from_url(&config.redis_url)
            .create_pool(Some(Runtime::Tokio1))?;
        Ok(Self { pg, redis, config })
    }
}
