// oasis/src/query/mod.rs

//! Read-only operations over snapshots. Nothing here touches a store.

pub mod aggregate;
pub mod orders;
pub mod products;
pub mod schedule;

pub use aggregate::{count_where, page, sum_where};
pub use orders::OrderFilter;
pub use schedule::{group_by_time_slot, SeverityTier, SlotGroup};
