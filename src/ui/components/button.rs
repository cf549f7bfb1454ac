//! Button component with variants and sizes.

use std::str::FromStr;

use leptos::prelude::*;

use crate::error::Error;
use crate::ui::style::{StyleKey, join_classes, normalize, unknown_key};

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Cyan-to-pink gradient with a glow on hover.
    #[default]
    Primary,
    /// Glass button with a faint border.
    Secondary,
    /// Text-only button.
    Ghost,
    /// Destructive action button.
    Danger,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => {
                "bg-gradient-to-r from-cyan-500 to-pink-500 text-white \
                 hover:shadow-[0_0_20px_rgba(236,72,153,0.5)]"
            }
            Self::Secondary => "bg-white/5 text-white border border-white/10 hover:bg-white/10",
            Self::Ghost => "bg-transparent text-gray-300 hover:text-white hover:bg-white/5",
            Self::Danger => "bg-red-500/10 text-red-400 border border-red-500/30 hover:bg-red-500/20",
        }
    }
}

impl FromStr for ButtonVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            "ghost" => Ok(Self::Ghost),
            "danger" => Ok(Self::Danger),
            _ => Err(unknown_key(Self::KIND, s)),
        }
    }
}

impl StyleKey for ButtonVariant {
    const KIND: &'static str = "button variant";

    fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Danger => "danger",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button.
    Sm,
    /// Medium button (default).
    #[default]
    Md,
    /// Large button.
    Lg,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "px-3 py-1.5 text-sm",
            Self::Md => "px-5 py-2.5 text-sm",
            Self::Lg => "px-7 py-3 text-base",
        }
    }
}

impl FromStr for ButtonSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "sm" => Ok(Self::Sm),
            "md" => Ok(Self::Md),
            "lg" => Ok(Self::Lg),
            _ => Err(unknown_key(Self::KIND, s)),
        }
    }
}

impl StyleKey for ButtonSize {
    const KIND: &'static str = "button size";

    fn key(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

/// Neon button component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button variant=ButtonVariant::Primary size=ButtonSize::Lg>
///         "Launch"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Whether the button is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center gap-2 rounded-xl font-medium \
                        transition-all duration-300 focus-visible:outline-none \
                        focus-visible:ring-2 focus-visible:ring-cyan-400 \
                        disabled:pointer-events-none disabled:opacity-50";

    let classes = join_classes(&[base_classes, variant.classes(), size.classes(), class]);

    view! {
        <button type=button_type class=classes disabled=disabled>
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variant_and_size() {
        assert_eq!("GHOST".parse::<ButtonVariant>().unwrap(), ButtonVariant::Ghost);
        assert_eq!("lg".parse::<ButtonSize>().unwrap(), ButtonSize::Lg);
        assert!("xl".parse::<ButtonSize>().is_err());
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(ButtonVariant::from_key("outline"), ButtonVariant::Primary);
        assert_eq!(ButtonSize::from_key("xl"), ButtonSize::Md);
    }
}
