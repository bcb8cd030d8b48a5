use chrono::Utc;
use eyre::Result;
use rand::Rng;
use slotbook_core::config::BOOKING_REFERENCE_LENGTH;
use slotbook_core::models::appointment::{Appointment, AppointmentStatus, ServiceType};
use uuid::Uuid;

use crate::Store;

// Ambiguous characters (0/O, 1/I/L) are excluded so references survive
// being read over the phone.
const REFERENCE_CHARSET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";

fn generate_booking_reference() -> String {
    let mut rng = rand::thread_rng();
    (0..BOOKING_REFERENCE_LENGTH)
        .map(|_| REFERENCE_CHARSET[rng.gen_range(0..REFERENCE_CHARSET.len())] as char)
        .collect()
}

pub async fn create_appointment(
    store: &Store,
    user_id: Uuid,
    date: &str,
    start_time: &str,
    service_type: ServiceType,
) -> Result<Appointment> {
    let id = Uuid::new_v4();
    let booking_reference = generate_booking_reference();

    tracing::debug!(
        "Creating appointment: id={}, reference={}, date={}, start_time={}",
        id,
        booking_reference,
        date,
        start_time
    );

    let appointment = Appointment {
        id,
        user_id,
        booking_reference,
        date: date.to_string(),
        start_time: start_time.to_string(),
        service_type,
        status: AppointmentStatus::Confirmed,
        created_at: Utc::now(),
    };

    store.appointments.write().await.push(appointment.clone());

    Ok(appointment)
}

pub async fn get_appointment_by_reference(
    store: &Store,
    reference: &str,
) -> Result<Option<Appointment>> {
    let appointments = store.appointments.read().await;

    Ok(appointments
        .iter()
        .find(|a| a.booking_reference == reference)
        .cloned())
}

/// Returns all appointments (any status) for the exact date string, in the
/// order they were booked.
pub async fn get_appointments_by_date(store: &Store, date: &str) -> Result<Vec<Appointment>> {
    let appointments = store.appointments.read().await;

    Ok(appointments
        .iter()
        .filter(|a| a.date == date)
        .cloned()
        .collect())
}

/// Marks the appointment cancelled. The row is kept for history; cancelled
/// appointments no longer count toward slot capacity.
pub async fn cancel_appointment(store: &Store, reference: &str) -> Result<Option<Appointment>> {
    let mut appointments = store.appointments.write().await;

    let Some(appointment) = appointments
        .iter_mut()
        .find(|a| a.booking_reference == reference)
    else {
        return Ok(None);
    };

    appointment.status = AppointmentStatus::Cancelled;

    Ok(Some(appointment.clone()))
}
