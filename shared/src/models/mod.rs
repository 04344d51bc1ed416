//! Data models
//!
//! Shared between shepherd-server and API consumers. Entities carry opaque
//! string ids; wire names are camelCase.

pub mod attendance;
pub mod gdi;
pub mod meeting;
pub mod meeting_series;
pub mod member;
pub mod ministry_area;

// Re-exports
pub use attendance::*;
pub use gdi::*;
pub use meeting::*;
pub use meeting_series::*;
pub use member::*;
pub use ministry_area::*;
