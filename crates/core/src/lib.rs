//! # Slotbook Core
//!
//! Domain models, scheduling configuration and the slot availability engine
//! for the Slotbook appointment-booking service.
//!
//! The availability engine is a pure computation: it never touches storage
//! or HTTP. Its only seam to the outside world is the
//! [`availability::AppointmentLookup`] trait, implemented by the storage
//! crate.

/// Slot availability engine and the appointment-lookup seam
pub mod availability;
/// Scheduling configuration and booking constants
pub mod config;
/// Domain error type shared across crates
pub mod errors;
/// Domain models and request/response types
pub mod models;
