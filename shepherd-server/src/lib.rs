//! Shepherd — church-membership management server
//!
//! Member records, GDI and ministry-area rosters, recurring-meeting
//! scheduling and attendance tracking over an in-process data store.

pub mod api;
pub mod core;
pub mod db;
pub mod roster;
pub mod routes;
pub mod scheduling;
pub mod services;
pub mod utils;
