pub mod auth;
pub mod validate_steps;

pub use auth::{authenticate_token, AuthUser};
pub use validate_steps::validate_steps;
