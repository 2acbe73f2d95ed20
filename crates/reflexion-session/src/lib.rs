//! Session bookkeeping for Reflexion.
//!
//! A [`SessionStore`] maps each [`SessionId`] to exactly one [`Transcript`].
//! Transcripts are append-only and live for the lifetime of the store.

pub mod session;
pub mod store;
pub mod transcript;

pub use session::SessionId;
pub use store::SessionStore;
pub use transcript::Transcript;
