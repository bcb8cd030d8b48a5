use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Appointment lifecycle states
///
/// Only `Confirmed` appointments count toward slot capacity. Cancelled
/// appointments are retained in storage for history but are invisible to
/// the availability engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Passport,
    DrivingLicense,
    Tax,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub user_id: Uuid,
    /// 8-character human-readable reference, unique per appointment
    pub booking_reference: String,
    /// Calendar date in DD/MM/YYYY format
    pub date: String,
    /// Slot start time in HH:MM format, aligned to a slot boundary
    pub start_time: String,
    pub service_type: ServiceType,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub user_id: Uuid,
    pub date: String,
    pub start_time: String,
    pub service_type: ServiceType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentListResponse {
    pub data: Vec<Appointment>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableSlotsResponse {
    pub date: String,
    pub available_slots: Vec<String>,
}
