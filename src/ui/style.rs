//! String keys for style lookup tables.
//!
//! Every palette and size enum can be named by a short key (`"cyan"`, `"md"`).
//! Parsing through [`FromStr`] is strict; [`StyleKey::from_key`] is what
//! components and configuration use, and it never fails.

use std::str::FromStr;

use tracing::warn;

use crate::error::Error;

/// A style table whose variants are addressable by key.
pub trait StyleKey: Copy + Default + FromStr<Err = Error> {
    /// Table name used in errors and logs.
    const KIND: &'static str;

    /// Canonical key of this variant.
    fn key(self) -> &'static str;

    /// Resolve `key`, falling back to the default variant when it is unknown.
    fn from_key(key: &str) -> Self {
        key.parse().unwrap_or_else(|err: Error| {
            let fallback = Self::default();
            warn!(
                name: "style.key.fallback",
                kind = Self::KIND,
                key = %key,
                fallback = fallback.key(),
                error = %err,
                "Unknown style key, using default"
            );
            fallback
        })
    }
}

/// Build the error for an unrecognized key.
pub(crate) fn unknown_key(kind: &'static str, key: &str) -> Error {
    Error::UnknownKey {
        kind,
        key: key.to_string(),
    }
}

/// Normalize a key before matching: trimmed, ASCII-lowercased.
pub(crate) fn normalize(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}

/// Join class fragments with single spaces, skipping empty ones.
#[must_use]
pub fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
