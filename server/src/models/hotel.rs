use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing projection of a hotel, without audit timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct HotelSummary {
    pub id: i32,
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummary {
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
}

/// Detail projection: a hotel with the display fields of each of its rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelWithRooms {
    pub id: i32,
    pub name: String,
    pub image: String,
    #[serde(rename = "room")]
    pub rooms: Vec<RoomSummary>,
}

impl HotelWithRooms {
    pub fn new(hotel: HotelSummary, rooms: Vec<RoomSummary>) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name,
            image: hotel.image,
            rooms,
        }
    }
}
