//! # Shelfwatch Core
//!
//! Domain types, traits, and error definitions for the Shelfwatch inventory
//! reporter. This crate has **zero framework dependencies** — it defines the
//! domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! Every external boundary is defined as a trait here. Implementations live
//! in their respective crates. This enables:
//! - Swapping the narrative backend via configuration
//! - Easy testing with deterministic stub implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod access;
pub mod error;
pub mod inventory;
pub mod narrative;

// Re-export key types at crate root for ergonomics
pub use access::{Action, Authenticator, Authorizer, Role};
pub use error::{AccessError, Error, NarrativeError, Result};
pub use inventory::{Bucket, ExpirationBuckets, InventoryRow};
pub use narrative::{NarrativeProvider, NarrativeRequest, NarrativeResponse, Usage};
