use std::sync::Arc;

use sqlx::PgPool;

use crate::repositories::{
    EnrollmentLookup, HotelReadStore, PgEnrollmentRepository, PgHealthCheck, PgHotelRepository,
    PgSessionRepository, PgTicketRepository, SessionLookup, StoreHealth, TicketLookup,
};
use crate::services::{EligibilityPipeline, HotelService};

/// Shared, immutable request state. Cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionLookup>,
    pub health: Arc<dyn StoreHealth>,
    pub eligibility: EligibilityPipeline,
    pub hotels: HotelService,
    pub jwt_secret: Arc<str>,
}

impl AppState {
    pub fn new(
        enrollments: Arc<dyn EnrollmentLookup>,
        tickets: Arc<dyn TicketLookup>,
        hotels: Arc<dyn HotelReadStore>,
        sessions: Arc<dyn SessionLookup>,
        health: Arc<dyn StoreHealth>,
        jwt_secret: &str,
    ) -> Self {
        Self {
            sessions,
            health,
            eligibility: EligibilityPipeline::new(enrollments, tickets, hotels.clone()),
            hotels: HotelService::new(hotels),
            jwt_secret: Arc::from(jwt_secret),
        }
    }

    pub fn from_pool(pool: PgPool, jwt_secret: &str) -> Self {
        Self::new(
            Arc::new(PgEnrollmentRepository::new(pool.clone())),
            Arc::new(PgTicketRepository::new(pool.clone())),
            Arc::new(PgHotelRepository::new(pool.clone())),
            Arc::new(PgSessionRepository::new(pool.clone())),
            Arc::new(PgHealthCheck::new(pool)),
            jwt_secret,
        )
    }
}
