//! Demo data: one event, the two standard ticket types and two hotels with rooms.
//!
//! Each table is only filled when it is empty, so running the seed twice is harmless.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::{Event, Hotel, Room};

const EVENT_TITLE: &str = "Driven.t";
const EVENT_LOGO: &str = "https://files.driveneducation.com.br/images/logo-rounded.png";
const EVENT_BACKGROUND: &str = "linear-gradient(to right, #FA4098, #FFD77F)";
const EVENT_LENGTH_DAYS: i64 = 21;

const HOTELS: [(&str, &str); 2] = [
    (
        "Hotel 1",
        "https://media-cdn.tripadvisor.com/media/photo-s/22/25/ce/ea/kingsford-hotel-manila.jpg",
    ),
    (
        "Hotel 2",
        "https://media-cdn.tripadvisor.com/media/photo-s/16/1a/ea/54/hotel-presidente-4s.jpg",
    ),
];

const ROOMS: [(&str, i32); 3] = [("Suíte", 3), ("Casal", 2), ("Solteiro", 1)];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub events: u64,
    pub ticket_types: u64,
    pub hotels: u64,
    pub rooms: u64,
}

pub async fn seed(pool: &PgPool) -> Result<SeedSummary, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut summary = SeedSummary::default();

    if is_empty(&mut tx, "events").await? {
        let now = Utc::now();
        let event = sqlx::query_as::<_, Event>(
            "INSERT INTO events (title, logo_image_url, background_image_url, starts_at, ends_at) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(EVENT_TITLE)
        .bind(EVENT_LOGO)
        .bind(EVENT_BACKGROUND)
        .bind(now)
        .bind(now + Duration::days(EVENT_LENGTH_DAYS))
        .fetch_one(&mut *tx)
        .await?;
        tracing::info!(event_id = event.id, title = %event.title, "Seeded event");
        summary.events = 1;
    }

    if is_empty(&mut tx, "ticket_types").await? {
        let ticket_types = [
            ("Primeiro tipo", Decimal::new(250, 0), false, true),
            ("Segundo tipo", Decimal::new(140, 0), true, false),
        ];
        for (name, price, is_remote, includes_hotel) in ticket_types {
            sqlx::query(
                "INSERT INTO ticket_types (name, price, is_remote, includes_hotel) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(name)
            .bind(price)
            .bind(is_remote)
            .bind(includes_hotel)
            .execute(&mut *tx)
            .await?;
            summary.ticket_types += 1;
        }
    }

    if is_empty(&mut tx, "hotels").await? {
        for (name, image) in HOTELS {
            sqlx::query("INSERT INTO hotels (name, image) VALUES ($1, $2)")
                .bind(name)
                .bind(image)
                .execute(&mut *tx)
                .await?;
            summary.hotels += 1;
        }
    }

    if is_empty(&mut tx, "rooms").await? {
        let hotels = sqlx::query_as::<_, Hotel>("SELECT * FROM hotels ORDER BY id LIMIT 2")
            .fetch_all(&mut *tx)
            .await?;
        for hotel in &hotels {
            for (name, capacity) in ROOMS {
                let room = sqlx::query_as::<_, Room>(
                    "INSERT INTO rooms (name, capacity, hotel_id) VALUES ($1, $2, $3) RETURNING *",
                )
                .bind(name)
                .bind(capacity)
                .bind(hotel.id)
                .fetch_one(&mut *tx)
                .await?;
                tracing::debug!(room_id = room.id, hotel_id = room.hotel_id, "Seeded room");
                summary.rooms += 1;
            }
        }
    }

    tx.commit().await?;
    Ok(summary)
}

async fn is_empty(tx: &mut Transaction<'_, Postgres>, table: &'static str) -> Result<bool, sqlx::Error> {
    let exists: bool = sqlx::query_scalar(&format!("SELECT EXISTS(SELECT 1 FROM {table})"))
        .fetch_one(&mut **tx)
        .await?;
    Ok(!exists)
}
