//! Shared test utilities for the winrepo workspace.
//!
//! A dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`api`]: [`MockRepositoryApi`], a scripted in-memory server
//! - [`prompt`]: [`RecordingPrompt`], which keeps everything rendered
//! - [`fixtures`]: repository records and argument maps

pub mod api;
pub mod fixtures;
pub mod prompt;

pub use api::{ApiCall, MockRepositoryApi};
pub use prompt::{Rendered, RecordingPrompt};
