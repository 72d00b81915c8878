use async_trait::async_trait;
use sqlx::PgPool;

use super::{SessionLookup, StoreError};
use crate::models::Session;

#[derive(Clone)]
pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionLookup for PgSessionRepository {
    async fn find_by_token(&self, token: &str) -> Result<Session, StoreError> {
        sqlx::query_as::<_, Session>(
            "SELECT id, user_id, token, created_at, updated_at \
             FROM sessions WHERE token = $1 \
             ORDER BY id DESC LIMIT 1",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound("session"))
    }
}
