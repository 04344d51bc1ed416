//! Write-side services
//!
//! Handlers stay thin; multi-entity writes (member ↔ roster consistency)
//! live here.

pub mod membership;
