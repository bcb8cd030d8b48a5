//! # Slotbook Storage
//!
//! In-memory, map-backed storage for users and appointments. This is a
//! prototyping store: swapping it for a real database means replacing the
//! locked collections here with a connection pool and keeping the
//! repository function signatures in [`repositories`] unchanged.
//!
//! Appointments are held in a vector rather than a map: per-date reads must
//! return rows in insertion order, which the availability engine relies on
//! when reporting saturated slots.

pub mod repositories;

use std::collections::HashMap;

use async_trait::async_trait;
use eyre::Result;
use slotbook_core::availability::AppointmentLookup;
use slotbook_core::models::{appointment::Appointment, user::User};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Shared in-memory store
///
/// Cheap to construct, safe to share behind an `Arc`. All access goes
/// through the free functions in [`repositories`].
#[derive(Debug, Default)]
pub struct Store {
    pub(crate) users: RwLock<HashMap<Uuid, User>>,
    pub(crate) appointments: RwLock<Vec<Appointment>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AppointmentLookup for Store {
    async fn list_appointments_for_date(&self, date: &str) -> Result<Vec<Appointment>> {
        repositories::appointment::get_appointments_by_date(self, date).await
    }
}
