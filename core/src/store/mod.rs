// oasis/src/store/mod.rs

pub mod backing;
pub mod entity_store;
pub mod subscription;

pub use backing::{JsonFileBacking, MemoryBacking, StoreBacking};
pub use entity_store::{Edit, EntityStore, Snapshot};
pub use subscription::Subscription;
