//! Member roster read-side
//!
//! Pure projections over already-fetched collections: the list query
//! (search / sort / paginate) and cross-reference lookups such as guide
//! name resolution. Nothing here mutates state.

pub mod guide;
pub mod query;

pub use guide::{GuideName, resolve_guide_name};
pub use query::{MemberQuery, SortKey, SortOrder, query_members};
