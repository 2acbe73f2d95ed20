//! Core types and error definitions for the Reflexion workspace.
//!
//! This crate provides the foundational types shared across all Reflexion
//! crates: the unified error enum and the message (transcript turn) type.
//!
//! # Main types
//!
//! - [`ReflexionError`] — Unified error enum for all Reflexion subsystems.
//! - [`ReflexionResult`] — Convenience alias for `Result<T, ReflexionError>`.
//! - [`ProviderErrorKind`] — Classification of language-model provider failures.
//! - [`Role`] — Message role (user, assistant, system).
//! - [`Message`] — A single turn within a conversation transcript.

/// Error types shared by every crate.
pub mod error;
/// Transcript turn types.
pub mod message;

pub use error::{ProviderErrorKind, ReflexionError, ReflexionResult};
pub use message::{Message, Role};
