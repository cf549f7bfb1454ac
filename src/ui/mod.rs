//! UI components and page rendering.
//!
//! # Structure
//!
//! - [`components`]: Reusable neon-styled components
//! - [`gallery`]: Showcase page built from every component
//! - [`style`]: Style-table keys and class helpers

pub mod components;
pub mod gallery;
pub mod style;
