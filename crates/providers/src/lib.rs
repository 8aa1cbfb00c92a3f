//! Narrative provider implementations for Shelfwatch.
//!
//! All providers implement the `shelfwatch_core::NarrativeProvider` trait.
//! The router selects the correct provider based on configuration.

pub mod openai_compat;
pub mod router;
pub mod static_stub;

pub use openai_compat::OpenAiCompatNarrative;
pub use router::NarrativeRouter;
pub use static_stub::{FailingNarrative, StaticNarrative};
