use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::ok_json;

/// `GET /hotels`
pub async fn show_hotels(State(state): State<AppState>) -> Result<Response, AppError> {
    let hotels = state.hotels.list_hotels().await?;
    Ok(ok_json(hotels))
}

/// `GET /hotels/:hotelsId`
///
/// An id that is not a number is handled like any other failed lookup.
pub async fn show_hotel(
    State(state): State<AppState>,
    Path(hotels_id): Path<String>,
) -> Result<Response, AppError> {
    let hotel_id: i32 = hotels_id
        .parse()
        .map_err(|_| AppError::NotFound(format!("Invalid hotel id '{hotels_id}'")))?;

    let hotel = state.hotels.get_hotel_detail(hotel_id).await?;
    Ok(ok_json(hotel))
}
