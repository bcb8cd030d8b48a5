#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use chrono::{Datelike, Duration, Utc};
use slotbook_api::{app, ApiState};
use slotbook_core::config::{SchedulingConfig, WORKING_DAYS};
use slotbook_db::Store;

pub fn test_state() -> Arc<ApiState> {
    Arc::new(ApiState {
        store: Arc::new(Store::new()),
        scheduling: SchedulingConfig::default(),
    })
}

pub fn test_server(state: Arc<ApiState>) -> TestServer {
    TestServer::new(app(state)).expect("Failed to build test server")
}

/// The next bookable working day, starting tomorrow, as DD/MM/YYYY.
pub fn next_working_day() -> String {
    let mut day = Utc::now().date_naive() + Duration::days(1);
    while !WORKING_DAYS.contains(&day.weekday()) {
        day += Duration::days(1);
    }
    day.format("%d/%m/%Y").to_string()
}

/// The first working day strictly beyond the advance-booking window.
pub fn working_day_beyond_window(window_days: i64) -> String {
    let today = Utc::now().date_naive();
    let mut day = today + Duration::days(window_days + 1);
    while !WORKING_DAYS.contains(&day.weekday()) {
        day += Duration::days(1);
    }
    day.format("%d/%m/%Y").to_string()
}

/// The most recent working day before today.
pub fn previous_working_day() -> String {
    let mut day = Utc::now().date_naive() - Duration::days(1);
    while !WORKING_DAYS.contains(&day.weekday()) {
        day -= Duration::days(1);
    }
    day.format("%d/%m/%Y").to_string()
}

/// The next Saturday on or after tomorrow, as DD/MM/YYYY.
pub fn next_saturday() -> String {
    let mut day = Utc::now().date_naive() + Duration::days(1);
    while day.weekday() != chrono::Weekday::Sat {
        day += Duration::days(1);
    }
    day.format("%d/%m/%Y").to_string()
}
