//! Storage collaborators consumed by the eligibility gate and the hotel read model.
//!
//! Every trait here is read-only. Postgres implementations take an explicitly
//! passed `PgPool`; the pool's lifecycle belongs to the binary entry point.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{EnrollmentWithAddress, HotelSummary, HotelWithRooms, Session, TicketWithType};

pub mod enrollment_repository;
pub mod health_repository;
pub mod hotel_repository;
pub mod session_repository;
pub mod ticket_repository;

pub use enrollment_repository::PgEnrollmentRepository;
pub use health_repository::PgHealthCheck;
pub use hotel_repository::PgHotelRepository;
pub use session_repository::PgSessionRepository;
pub use ticket_repository::PgTicketRepository;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait EnrollmentLookup: Send + Sync {
    async fn get_one_with_address_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<EnrollmentWithAddress, StoreError>;
}

#[async_trait]
pub trait TicketLookup: Send + Sync {
    /// The user's most recent ticket, with its ticket type.
    async fn get_ticket_by_user_id(&self, user_id: i32) -> Result<TicketWithType, StoreError>;
}

#[async_trait]
pub trait HotelReadStore: Send + Sync {
    async fn list_hotels(&self) -> Result<Vec<HotelSummary>, StoreError>;

    /// Zero or one element: the hotel with `hotel_id` and all of its rooms.
    async fn find_hotel_with_rooms(&self, hotel_id: i32)
        -> Result<Vec<HotelWithRooms>, StoreError>;

    async fn has_hotels(&self) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait SessionLookup: Send + Sync {
    async fn find_by_token(&self, token: &str) -> Result<Session, StoreError>;
}

#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> Result<(), StoreError>;
}
