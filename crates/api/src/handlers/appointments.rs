use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use slotbook_core::{
    availability::get_available_slots,
    errors::BookingError,
    models::appointment::{Appointment, AppointmentListResponse, CreateAppointmentRequest},
};
use tracing::info;

use crate::{middleware::error_handling::AppError, validation, ApiState};

#[derive(Debug, Deserialize)]
pub struct AppointmentListQuery {
    /// Calendar date in DD/MM/YYYY format
    pub date: String,
}

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    validation::validate_booking_date(&payload.date, Utc::now().date_naive())?;
    validation::validate_start_time(&payload.start_time, &state.scheduling)?;

    slotbook_db::repositories::user::get_user_by_id(&state.store, payload.user_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| {
            BookingError::NotFound(format!("User with ID {} not found", payload.user_id))
        })?;

    // Capacity check against a snapshot. Nothing is reserved between this
    // read and the insert below, so two near-simultaneous requests can both
    // pass it and overbook the slot. Closing the gap needs an atomic
    // reserve-or-reject keyed by (date, start_time).
    let available = get_available_slots(state.store.as_ref(), &state.scheduling, &payload.date)
        .await
        .map_err(BookingError::Database)?;
    if !available.contains(&payload.start_time) {
        return Err(AppError(BookingError::Conflict(format!(
            "{} on {} is fully booked",
            payload.start_time, payload.date
        ))));
    }

    let appointment = slotbook_db::repositories::appointment::create_appointment(
        &state.store,
        payload.user_id,
        &payload.date,
        &payload.start_time,
        payload.service_type,
    )
    .await
    .map_err(BookingError::Database)?;

    info!(
        "Booked appointment {} on {} at {}",
        appointment.booking_reference, appointment.date, appointment.start_time
    );

    Ok((StatusCode::CREATED, Json(appointment)))
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AppointmentListQuery>,
) -> Result<Json<AppointmentListResponse>, AppError> {
    validation::parse_date(&query.date)?;

    let appointments =
        slotbook_db::repositories::appointment::get_appointments_by_date(&state.store, &query.date)
            .await
            .map_err(BookingError::Database)?;

    let count = appointments.len();
    Ok(Json(AppointmentListResponse {
        data: appointments,
        count,
    }))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<ApiState>>,
    Path(reference): Path<String>,
) -> Result<Json<Appointment>, AppError> {
    let appointment = slotbook_db::repositories::appointment::get_appointment_by_reference(
        &state.store,
        &reference,
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| BookingError::NotFound(format!("Appointment {reference} not found")))?;

    Ok(Json(appointment))
}

/// Cancels rather than deletes: the row is retained for history and stops
/// counting toward slot capacity.
#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<Arc<ApiState>>,
    Path(reference): Path<String>,
) -> Result<Json<Appointment>, AppError> {
    let appointment =
        slotbook_db::repositories::appointment::cancel_appointment(&state.store, &reference)
            .await
            .map_err(BookingError::Database)?
            .ok_or_else(|| BookingError::NotFound(format!("Appointment {reference} not found")))?;

    info!(
        "Cancelled appointment {} on {} at {}",
        appointment.booking_reference, appointment.date, appointment.start_time
    );

    Ok(Json(appointment))
}
