use async_trait::async_trait;
use sqlx::PgPool;

use super::{HotelReadStore, StoreError};
use crate::models::{HotelSummary, HotelWithRooms, RoomSummary};

#[derive(Clone)]
pub struct PgHotelRepository {
    pool: PgPool,
}

impl PgHotelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HotelReadStore for PgHotelRepository {
    async fn list_hotels(&self) -> Result<Vec<HotelSummary>, StoreError> {
        let hotels = sqlx::query_as::<_, HotelSummary>("SELECT id, name, image FROM hotels")
            .fetch_all(&self.pool)
            .await?;

        Ok(hotels)
    }

    async fn find_hotel_with_rooms(
        &self,
        hotel_id: i32,
    ) -> Result<Vec<HotelWithRooms>, StoreError> {
        let hotel = sqlx::query_as::<_, HotelSummary>(
            "SELECT id, name, image FROM hotels WHERE id = $1",
        )
        .bind(hotel_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(hotel) = hotel else {
            return Ok(Vec::new());
        };

        let rooms = sqlx::query_as::<_, RoomSummary>(
            "SELECT name, capacity, hotel_id FROM rooms WHERE hotel_id = $1 ORDER BY id",
        )
        .bind(hotel.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vec![HotelWithRooms::new(hotel, rooms)])
    }

    async fn has_hotels(&self) -> Result<bool, StoreError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM hotels)")
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }
}
