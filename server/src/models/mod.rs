pub mod enrollment;
pub mod event;
pub mod hotel;
pub mod ticket;
pub mod user;

pub use enrollment::{Address, Enrollment, EnrollmentWithAddress};
pub use event::Event;
pub use hotel::{Hotel, HotelSummary, HotelWithRooms, Room, RoomSummary};
pub use ticket::{Ticket, TicketStatus, TicketType, TicketWithType};
pub use user::{Session, User};
