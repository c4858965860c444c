//! Integration tests for the LibraNet desk

mod lending_tests;
mod menu_tests;

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use libranet::{clock::ManualClock, config::default_catalog, AppState};

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 1, 9, 0, 0).unwrap()
}

/// Desk seeded with the default catalog and a clock the test controls
pub fn desk() -> (AppState, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(start_time()));
    let state = AppState::with_seed(default_catalog(), clock.clone()).expect("seed catalog");
    (state, clock)
}
