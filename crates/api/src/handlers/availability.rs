//! # Availability Handler
//!
//! Exposes the slot availability engine over HTTP. The handler validates
//! the date format, hands the date to the engine together with the
//! configured scheduling constants, and returns the bookable slots in
//! chronological order. All counting and filtering happens in
//! `slotbook_core::availability`; this layer is glue.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use slotbook_core::{
    availability::get_available_slots, errors::BookingError,
    models::appointment::AvailableSlotsResponse,
};
use tracing::debug;

use crate::{middleware::error_handling::AppError, validation, ApiState};

/// Query parameters for the availability endpoint
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    /// Calendar date in DD/MM/YYYY format
    pub date: String,
}

/// Returns the bookable slots for a date
///
/// # Endpoint
///
/// ```text
/// GET /api/availability?date=06/01/2023
/// ```
#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailableSlotsResponse>, AppError> {
    validation::parse_date(&query.date)?;

    let available_slots =
        get_available_slots(state.store.as_ref(), &state.scheduling, &query.date)
            .await
            .map_err(BookingError::Database)?;

    debug!(
        "Availability for {}: {} of {} slots open",
        query.date,
        available_slots.len(),
        slotbook_core::availability::list_all_slots(&state.scheduling).len()
    );

    Ok(Json(AvailableSlotsResponse {
        date: query.date,
        available_slots,
    }))
}
