use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Length of the human-readable booking reference handed to callers.
pub const BOOKING_REFERENCE_LENGTH: usize = 8;

/// How far in advance an appointment may be booked, in days.
pub const BOOKING_TIME_FRAME_DAYS: i64 = 14;

/// Days of the week on which appointments can be booked.
pub const WORKING_DAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Scheduling constants for the availability engine
///
/// These are process-wide configuration in deployment, but passed explicitly
/// so the engine stays free of ambient state and can be configured per test
/// (or per tenant).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// Length of each bookable slot, in minutes (positive)
    pub slot_duration_minutes: u32,

    /// Hour the working day opens, 24-hour clock, 0..=23
    pub working_hours_start: u32,

    /// Hour the working day closes, 24-hour clock, 0..=23 (exclusive:
    /// no slot starts at or after it)
    pub working_hours_end: u32,

    /// Maximum confirmed appointments a single slot may hold before it is
    /// considered unavailable
    pub slot_capacity: usize,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            slot_duration_minutes: 30,
            working_hours_start: 9,
            working_hours_end: 17,
            slot_capacity: 4,
        }
    }
}
