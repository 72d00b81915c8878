use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use super::{StoreError, TicketLookup};
use crate::models::{Ticket, TicketStatus, TicketType, TicketWithType};

const CURRENT_TICKET_BY_USER: &str = r#"
    SELECT
        t.id, t.ticket_type_id, t.enrollment_id, t.status, t.created_at, t.updated_at,
        tt.id AS type_id,
        tt.name AS type_name,
        tt.price AS type_price,
        tt.is_remote AS type_is_remote,
        tt.includes_hotel AS type_includes_hotel,
        tt.created_at AS type_created_at,
        tt.updated_at AS type_updated_at
    FROM tickets t
    JOIN enrollments e ON e.id = t.enrollment_id
    JOIN ticket_types tt ON tt.id = t.ticket_type_id
    WHERE e.user_id = $1
    ORDER BY t.created_at DESC, t.id DESC
    LIMIT 1
"#;

#[derive(FromRow)]
struct TicketWithTypeRow {
    id: i32,
    ticket_type_id: i32,
    enrollment_id: i32,
    status: TicketStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    type_id: i32,
    type_name: String,
    type_price: Decimal,
    type_is_remote: bool,
    type_includes_hotel: bool,
    type_created_at: DateTime<Utc>,
    type_updated_at: DateTime<Utc>,
}

impl From<TicketWithTypeRow> for TicketWithType {
    fn from(row: TicketWithTypeRow) -> Self {
        Self {
            ticket: Ticket {
                id: row.id,
                ticket_type_id: row.ticket_type_id,
                enrollment_id: row.enrollment_id,
                status: row.status,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            ticket_type: TicketType {
                id: row.type_id,
                name: row.type_name,
                price: row.type_price,
                is_remote: row.type_is_remote,
                includes_hotel: row.type_includes_hotel,
                created_at: row.type_created_at,
                updated_at: row.type_updated_at,
            },
        }
    }
}

#[derive(Clone)]
pub struct PgTicketRepository {
    pool: PgPool,
}

impl PgTicketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketLookup for PgTicketRepository {
    async fn get_ticket_by_user_id(&self, user_id: i32) -> Result<TicketWithType, StoreError> {
        let row = sqlx::query_as::<_, TicketWithTypeRow>(CURRENT_TICKET_BY_USER)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound("ticket"))?;

        Ok(row.into())
    }
}
