//! Neon UI
//!
//! Server-rendered, neon-styled UI components built on Leptos SSR and
//! Tailwind utility classes.
//!
//! # Modules
//!
//! - [`progress`]: Percentage and ring geometry for progress indicators
//! - [`motion`]: Easing curves, CSS transitions and per-frame tweens
//! - [`ui`]: Badge, button, card, progress bar and ring components, plus the gallery page
//! - [`config`]: Layered configuration for the gallery binary
//! - [`error`]: Crate error type

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_fields_in_debug)]

pub mod config;
pub mod error;
pub mod motion;
pub mod progress;
pub mod ui;

pub use error::{Error, Result};
pub use progress::{ProgressReading, RingGeometry, percentage};
