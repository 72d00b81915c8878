//! In-memory collaborators for unit and router tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use crate::models::{
    Enrollment, EnrollmentWithAddress, HotelSummary, HotelWithRooms, RoomSummary, Session, Ticket,
    TicketStatus, TicketType, TicketWithType,
};
use crate::repositories::{
    EnrollmentLookup, HotelReadStore, SessionLookup, StoreError, StoreHealth, TicketLookup,
};

#[derive(Default)]
struct State {
    next_id: i32,
    enrollments: HashMap<i32, Enrollment>,
    tickets: HashMap<i32, TicketWithType>,
    hotels: Vec<HotelSummary>,
    rooms: Vec<RoomSummary>,
    sessions: Vec<Session>,
    fail_reads: bool,
}

impl State {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.fail_reads {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enroll(&self, user_id: i32) -> i32 {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        let now = Utc::now();
        state.enrollments.insert(
            user_id,
            Enrollment {
                id,
                name: format!("Attendee {user_id}"),
                cpf: "12345678909".to_string(),
                birthday: now,
                phone: "(21) 98999-9999".to_string(),
                user_id,
                created_at: now,
                updated_at: now,
            },
        );
        id
    }

    pub fn give_ticket(
        &self,
        user_id: i32,
        status: TicketStatus,
        is_remote: bool,
        includes_hotel: bool,
    ) {
        let mut state = self.state.lock().unwrap();
        let ticket_type_id = state.next_id();
        let ticket_id = state.next_id();
        let enrollment_id = state
            .enrollments
            .get(&user_id)
            .map(|enrollment| enrollment.id)
            .unwrap_or_default();
        let now = Utc::now();
        state.tickets.insert(
            user_id,
            TicketWithType {
                ticket: Ticket {
                    id: ticket_id,
                    ticket_type_id,
                    enrollment_id,
                    status,
                    created_at: now,
                    updated_at: now,
                },
                ticket_type: TicketType {
                    id: ticket_type_id,
                    name: "Ticket".to_string(),
                    price: Decimal::new(250, 0),
                    is_remote,
                    includes_hotel,
                    created_at: now,
                    updated_at: now,
                },
            },
        );
    }

    pub fn add_hotel(&self, name: &str) -> i32 {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        state.hotels.push(HotelSummary {
            id,
            name: name.to_string(),
            image: format!("https://images.example.com/hotels/{id}.jpg"),
        });
        id
    }

    pub fn add_room(&self, hotel_id: i32, name: &str, capacity: i32) {
        let mut state = self.state.lock().unwrap();
        state.rooms.push(RoomSummary {
            name: name.to_string(),
            capacity,
            hotel_id,
        });
    }

    pub fn add_session(&self, user_id: i32, token: &str) {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        let now = Utc::now();
        state.sessions.push(Session {
            id,
            user_id,
            token: token.to_string(),
            created_at: now,
            updated_at: now,
        });
    }

    pub fn fail_reads(&self, fail: bool) {
        self.state.lock().unwrap().fail_reads = fail;
    }
}

#[async_trait]
impl EnrollmentLookup for InMemoryStore {
    async fn get_one_with_address_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<EnrollmentWithAddress, StoreError> {
        let state = self.state.lock().unwrap();
        state.check_available()?;
        let enrollment = state
            .enrollments
            .get(&user_id)
            .cloned()
            .ok_or(StoreError::NotFound("enrollment"))?;
        Ok(EnrollmentWithAddress {
            enrollment,
            address: None,
        })
    }
}

#[async_trait]
impl TicketLookup for InMemoryStore {
    async fn get_ticket_by_user_id(&self, user_id: i32) -> Result<TicketWithType, StoreError> {
        let state = self.state.lock().unwrap();
        state.check_available()?;
        state
            .tickets
            .get(&user_id)
            .cloned()
            .ok_or(StoreError::NotFound("ticket"))
    }
}

#[async_trait]
impl HotelReadStore for InMemoryStore {
    async fn list_hotels(&self) -> Result<Vec<HotelSummary>, StoreError> {
        let state = self.state.lock().unwrap();
        state.check_available()?;
        Ok(state.hotels.clone())
    }

    async fn find_hotel_with_rooms(
        &self,
        hotel_id: i32,
    ) -> Result<Vec<HotelWithRooms>, StoreError> {
        let state = self.state.lock().unwrap();
        state.check_available()?;
        Ok(state
            .hotels
            .iter()
            .filter(|hotel| hotel.id == hotel_id)
            .map(|hotel| {
                let rooms = state
                    .rooms
                    .iter()
                    .filter(|room| room.hotel_id == hotel.id)
                    .cloned()
                    .collect();
                HotelWithRooms::new(hotel.clone(), rooms)
            })
            .collect())
    }

    async fn has_hotels(&self) -> Result<bool, StoreError> {
        let state = self.state.lock().unwrap();
        state.check_available()?;
        Ok(!state.hotels.is_empty())
    }
}

#[async_trait]
impl SessionLookup for InMemoryStore {
    async fn find_by_token(&self, token: &str) -> Result<Session, StoreError> {
        let state = self.state.lock().unwrap();
        state.check_available()?;
        state
            .sessions
            .iter()
            .find(|session| session.token == token)
            .cloned()
            .ok_or(StoreError::NotFound("session"))
    }
}

#[async_trait]
impl StoreHealth for InMemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.state.lock().unwrap().check_available()
    }
}
