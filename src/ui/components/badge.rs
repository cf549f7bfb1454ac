//! Badge component for status indicators and tags.

use std::str::FromStr;

use leptos::prelude::*;

use crate::error::Error;
use crate::ui::style::{StyleKey, join_classes, normalize, unknown_key};

/// Badge neon color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeColor {
    /// Cyan badge (default).
    #[default]
    Cyan,
    /// Pink badge.
    Pink,
    /// Green badge.
    Green,
    /// Yellow badge.
    Yellow,
    /// Purple badge.
    Purple,
    /// Muted gray badge.
    Gray,
}

impl BadgeColor {
    /// Get CSS classes for this color.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Cyan => "bg-cyan-500/10 text-cyan-400 border-cyan-500/30",
            Self::Pink => "bg-pink-500/10 text-pink-400 border-pink-500/30",
            Self::Green => "bg-green-500/10 text-green-400 border-green-500/30",
            Self::Yellow => "bg-yellow-500/10 text-yellow-400 border-yellow-500/30",
            Self::Purple => "bg-purple-500/10 text-purple-400 border-purple-500/30",
            Self::Gray => "bg-white/5 text-gray-400 border-white/10",
        }
    }
}

impl FromStr for BadgeColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "cyan" => Ok(Self::Cyan),
            "pink" => Ok(Self::Pink),
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "purple" => Ok(Self::Purple),
            "gray" | "grey" => Ok(Self::Gray),
            _ => Err(unknown_key(Self::KIND, s)),
        }
    }
}

impl StyleKey for BadgeColor {
    const KIND: &'static str = "badge color";

    fn key(self) -> &'static str {
        match self {
            Self::Cyan => "cyan",
            Self::Pink => "pink",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
            Self::Gray => "gray",
        }
    }
}

/// Badge component for displaying status or labels.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Badge color=BadgeColor::Green>"Online"</Badge>
///     <Badge color=BadgeColor::Pink>"Beta"</Badge>
/// }
/// ```
#[component]
pub fn Badge(
    /// Badge color.
    #[prop(default = BadgeColor::Cyan)]
    color: BadgeColor,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Badge content.
    children: Children,
) -> impl IntoView {
    let classes = join_classes(&[
        "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-medium",
        color.classes(),
        class,
    ]);

    view! {
        <span class=classes>
            {children()}
        </span>
    }
}
