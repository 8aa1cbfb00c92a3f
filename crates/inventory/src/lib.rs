//! Inventory loading and expiration classification for Shelfwatch.
//!
//! The loader turns a delimited file into `InventoryRow`s, the classifier
//! partitions them into expiration buckets, and the exporter writes
//! per-bucket CSV slices for operational follow-up.

pub mod classifier;
pub mod export;
pub mod loader;

pub use classifier::classify;
pub use export::export_slices;
pub use loader::{LoaderOptions, load_inventory, read_inventory};
