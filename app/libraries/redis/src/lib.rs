use app_error::AppError;
use deadpool_redis::{
    Pool,
    redis::{AsyncCommands, FromRedisValue, ToRedisArgs},
};

/// Typed helpers over the shared deadpool connection pool.
pub struct Redis;

impl Redis {
    pub async fn get<T>(pool: &Pool, key: &str) -> Result<T, AppError>
    where
        T: FromRedisValue,
    {
        let mut conn = pool.get().await?;
        let value: T = conn.get(key).await?;
        Ok(value)
    }

    pub async fn set<V>(pool: &Pool, key: &str, value: V) -> Result<(), AppError>
    where
        V: ToRedisArgs + Send + Sync,
    {
        let mut conn = pool.get().await?;
        let _: () = conn.set(key, value).await?;
        Ok(())
    }

    /// Set with a time-to-live in seconds.
    pub async fn set_ex<V>(pool: &Pool, key: &str, value: V, seconds: u64) -> Result<(), AppError>
    where
        V: ToRedisArgs + Send + Sync,
    {
        let mut conn = pool.get().await?;
        let _: () = conn.set_ex(key, value, seconds).await?;
        Ok(())
    }

    pub async fn del(pool: &Pool, keys: Vec<&str>) -> Result<usize, AppError> {
        let mut conn = pool.get().await?;
        let removed: usize = conn.del(keys).await?;
        Ok(removed)
    }
}
