use async_trait::async_trait;
use sqlx::PgPool;

use super::{EnrollmentLookup, StoreError};
use crate::models::{Address, Enrollment, EnrollmentWithAddress};

#[derive(Clone)]
pub struct PgEnrollmentRepository {
    pool: PgPool,
}

impl PgEnrollmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentLookup for PgEnrollmentRepository {
    async fn get_one_with_address_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<EnrollmentWithAddress, StoreError> {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            "SELECT id, name, cpf, birthday, phone, user_id, created_at, updated_at \
             FROM enrollments WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound("enrollment"))?;

        let address = sqlx::query_as::<_, Address>(
            "SELECT id, cep, street, city, state, number, neighborhood, address_detail, \
             enrollment_id, created_at, updated_at \
             FROM addresses WHERE enrollment_id = $1",
        )
        .bind(enrollment.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(EnrollmentWithAddress {
            enrollment,
            address,
        })
    }
}
