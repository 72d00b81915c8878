use thiserror::Error;

pub mod eligibility;
pub mod hotels;

pub use eligibility::EligibilityPipeline;
pub use hotels::{HotelService, HotelServiceError};

/// Terminal outcomes of the hotel access gate.
///
/// Lookup failures and genuinely missing records both surface as `NotFound`;
/// callers cannot tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("No enrollment, ticket or hotel inventory available")]
    NotFound,

    #[error("Ticket does not grant hotel access")]
    PaymentRequired,
}
