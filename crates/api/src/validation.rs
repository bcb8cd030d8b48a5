//! Request validation for the HTTP layer.
//!
//! The availability engine assumes well-formed input, so every date and
//! time string is checked here before it reaches the core.

use chrono::{Datelike, Duration, NaiveDate};
use slotbook_core::availability::list_all_slots;
use slotbook_core::config::{SchedulingConfig, BOOKING_TIME_FRAME_DAYS, WORKING_DAYS};
use slotbook_core::errors::BookingError;

/// Parses a DD/MM/YYYY date string, rejecting anything else.
pub fn parse_date(date: &str) -> Result<NaiveDate, BookingError> {
    NaiveDate::parse_from_str(date, "%d/%m/%Y").map_err(|_| {
        BookingError::Validation(format!("Invalid date '{date}', expected DD/MM/YYYY"))
    })
}

/// Checks a booking date: well-formed, on a working day, not in the past,
/// and within the advance-booking window.
pub fn validate_booking_date(date: &str, today: NaiveDate) -> Result<NaiveDate, BookingError> {
    let parsed = parse_date(date)?;

    if !WORKING_DAYS.contains(&parsed.weekday()) {
        return Err(BookingError::Validation(
            "Appointments are only available Monday to Friday".to_string(),
        ));
    }
    if parsed < today {
        return Err(BookingError::Validation(
            "Appointment date must not be in the past".to_string(),
        ));
    }
    if parsed > today + Duration::days(BOOKING_TIME_FRAME_DAYS) {
        return Err(BookingError::Validation(format!(
            "Appointments can be booked at most {BOOKING_TIME_FRAME_DAYS} days in advance"
        )));
    }

    Ok(parsed)
}

/// Checks that a start time is one of the enumerable slots for the
/// configured working window.
pub fn validate_start_time(start_time: &str, config: &SchedulingConfig) -> Result<(), BookingError> {
    if list_all_slots(config).iter().any(|slot| slot == start_time) {
        Ok(())
    } else {
        Err(BookingError::Validation(format!(
            "'{start_time}' is not a bookable slot"
        )))
    }
}

pub fn validate_email(email: &str) -> Result<(), BookingError> {
    let invalid = || BookingError::Validation("Invalid email address".to_string());

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    match domain.split_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

pub fn validate_name(name: &str) -> Result<(), BookingError> {
    if name.trim().is_empty() {
        return Err(BookingError::Validation("Name is required".to_string()));
    }
    if name.len() > 100 {
        return Err(BookingError::Validation("Name too long".to_string()));
    }
    Ok(())
}

pub fn validate_age(age: Option<u32>) -> Result<(), BookingError> {
    if age == Some(0) {
        return Err(BookingError::Validation(
            "Age must be positive".to_string(),
        ));
    }
    Ok(())
}
