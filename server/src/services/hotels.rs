use std::sync::Arc;

use thiserror::Error;

use crate::models::{HotelSummary, HotelWithRooms};
use crate::repositories::{HotelReadStore, StoreError};

#[derive(Debug, Error)]
pub enum HotelServiceError {
    #[error("No hotels found")]
    Empty,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Hotel read model served once a user has passed the eligibility gate.
#[derive(Clone)]
pub struct HotelService {
    hotels: Arc<dyn HotelReadStore>,
}

impl HotelService {
    pub fn new(hotels: Arc<dyn HotelReadStore>) -> Self {
        Self { hotels }
    }

    /// All hotels. An empty table is an error: the gate already promised inventory.
    pub async fn list_hotels(&self) -> Result<Vec<HotelSummary>, HotelServiceError> {
        let hotels = self.hotels.list_hotels().await?;
        if hotels.is_empty() {
            return Err(HotelServiceError::Empty);
        }
        Ok(hotels)
    }

    /// The hotel with its rooms, or an empty list when the id matches nothing.
    pub async fn get_hotel_detail(
        &self,
        hotel_id: i32,
    ) -> Result<Vec<HotelWithRooms>, HotelServiceError> {
        Ok(self.hotels.find_hotel_with_rooms(hotel_id).await?)
    }
}
