//! # Slot Availability Engine
//!
//! Computes which appointment slots are bookable on a given day. Three
//! small pure components form a pipeline with one branch:
//!
//! 1. **Slot enumeration** ([`list_all_slots`]): every possible slot start
//!    time in the working window, in chronological order.
//! 2. **Unavailability detection** ([`unavailable_slots`] /
//!    [`get_unavailable_slots`]): the start times already saturated by
//!    confirmed appointments.
//! 3. **Availability resolution** ([`get_available_slots`]): the ordered
//!    difference of the two.
//!
//! Every call recomputes from scratch over a snapshot of appointment data;
//! there is no shared mutable state. Note that this also means the result
//! is only as fresh as the snapshot: two concurrent callers can both see a
//! slot as open and both book it. Atomic reserve-or-reject semantics keyed
//! by (date, start time) would be required to close that gap.

use std::collections::HashMap;

use async_trait::async_trait;
use eyre::Result;

use crate::config::SchedulingConfig;
use crate::models::appointment::{Appointment, AppointmentStatus};

/// Read-only appointment lookup the engine depends on
///
/// Implemented by the storage layer. Matching is an exact string comparison
/// on the `DD/MM/YYYY` date; the returned order must be stable (insertion
/// order) because [`unavailable_slots`] reports saturated slots in
/// first-seen order.
#[async_trait]
pub trait AppointmentLookup: Send + Sync {
    /// Returns all appointments (any status) recorded for the given date.
    async fn list_appointments_for_date(&self, date: &str) -> Result<Vec<Appointment>>;
}

/// Enumerates every slot start time in the working window
///
/// Slots start at the opening hour and step by the slot duration. The close
/// hour is exclusive: a slot is emitted as long as it *starts* before the
/// close hour, even if its duration would run past it.
///
/// With the default configuration (30-minute slots, 9..17) this yields
/// exactly 16 slots, "09:00" through "16:30".
pub fn list_all_slots(config: &SchedulingConfig) -> Vec<String> {
    let mut slots = Vec::new();

    // Minutes since midnight; avoids any wall-clock or date dependency.
    let mut current = config.working_hours_start * 60;
    while current / 60 < config.working_hours_end {
        slots.push(format!("{:02}:{:02}", current / 60, current % 60));
        current += config.slot_duration_minutes;
    }

    slots
}

/// Determines which slot start times are saturated
///
/// Confirmed appointments are grouped by start time; any group whose size
/// reaches the configured capacity marks its start time unavailable.
/// Results are emitted in the order each start time was first seen in the
/// input, so the output is deterministic for a given snapshot. Cancelled
/// appointments never count.
pub fn unavailable_slots(appointments: &[Appointment], config: &SchedulingConfig) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    // First-seen order of start times; HashMap iteration order is never
    // observed.
    let mut seen: Vec<&str> = Vec::new();

    for appointment in appointments
        .iter()
        .filter(|a| a.status == AppointmentStatus::Confirmed)
    {
        let count = counts.entry(appointment.start_time.as_str()).or_insert(0);
        if *count == 0 {
            seen.push(appointment.start_time.as_str());
        }
        *count += 1;
    }

    seen.into_iter()
        .filter(|time| counts[time] >= config.slot_capacity)
        .map(str::to_owned)
        .collect()
}

/// Fetches the day's appointments and reports the saturated start times
///
/// A lookup failure propagates untransformed; the engine defines no error
/// kinds of its own.
pub async fn get_unavailable_slots<L>(
    lookup: &L,
    config: &SchedulingConfig,
    date: &str,
) -> Result<Vec<String>>
where
    L: AppointmentLookup + ?Sized,
{
    let appointments = lookup.list_appointments_for_date(date).await?;
    Ok(unavailable_slots(&appointments, config))
}

/// Returns the bookable slots for a date, in chronological order
///
/// The full slot enumeration minus the saturated start times. Ordering
/// always follows [`list_all_slots`], regardless of the order the
/// unavailable set was detected in.
pub async fn get_available_slots<L>(
    lookup: &L,
    config: &SchedulingConfig,
    date: &str,
) -> Result<Vec<String>>
where
    L: AppointmentLookup + ?Sized,
{
    let all_slots = list_all_slots(config);
    let unavailable = get_unavailable_slots(lookup, config, date).await?;

    Ok(all_slots
        .into_iter()
        .filter(|slot| !unavailable.contains(slot))
        .collect())
}
