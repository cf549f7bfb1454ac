//! Linear progress bar.

use std::str::FromStr;

use leptos::prelude::*;

use crate::error::Error;
use crate::motion::Transition;
use crate::progress::{DEFAULT_MAX, DEFAULT_VALUE, ProgressReading, fmt_num};
use crate::ui::style::{StyleKey, join_classes, normalize, unknown_key};

/// Fill color of a linear bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BarColor {
    /// Solid cyan.
    Cyan,
    /// Solid pink.
    Pink,
    /// Cyan-to-pink gradient (default).
    #[default]
    Gradient,
    /// Solid green.
    Green,
    /// Solid yellow.
    Yellow,
}

impl BarColor {
    /// Get CSS classes for the fill.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Cyan => "bg-cyan-400 shadow-[0_0_10px_rgba(34,211,238,0.6)]",
            Self::Pink => "bg-pink-500 shadow-[0_0_10px_rgba(236,72,153,0.6)]",
            Self::Gradient => {
                "bg-gradient-to-r from-cyan-400 to-pink-500 shadow-[0_0_10px_rgba(168,85,247,0.5)]"
            }
            Self::Green => "bg-green-400 shadow-[0_0_10px_rgba(74,222,128,0.6)]",
            Self::Yellow => "bg-yellow-400 shadow-[0_0_10px_rgba(250,204,21,0.6)]",
        }
    }
}

impl FromStr for BarColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "cyan" => Ok(Self::Cyan),
            "pink" => Ok(Self::Pink),
            "gradient" => Ok(Self::Gradient),
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            _ => Err(unknown_key(Self::KIND, s)),
        }
    }
}

impl StyleKey for BarColor {
    const KIND: &'static str = "bar color";

    fn key(self) -> &'static str {
        match self {
            Self::Cyan => "cyan",
            Self::Pink => "pink",
            Self::Gradient => "gradient",
            Self::Green => "green",
            Self::Yellow => "yellow",
        }
    }
}

/// Track height of a linear bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BarSize {
    /// Thin track.
    Sm,
    /// Regular track (default).
    #[default]
    Md,
    /// Thick track.
    Lg,
}

impl BarSize {
    /// Get CSS classes for the track height.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-1.5",
            Self::Md => "h-2.5",
            Self::Lg => "h-4",
        }
    }
}

impl FromStr for BarSize {
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

impl StyleKey for BarSize {
    const KIND: &'static str = "bar size";

    fn key(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

/// Inline style for the fill element.
fn fill_style(percent: f64, animated: bool) -> String {
    let width = format!("width: {}%;", fmt_num(percent));
    match Transition::bar_fill().css_when(animated) {
        Some(transition) => format!("{width} {transition}"),
        None => width,
    }
}

/// Horizontal progress bar.
///
/// The fill width is the clamped percentage of `value / max`. When `animated`
/// the width eases toward each new value instead of jumping.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <ProgressBar value=42.0 color=BarColor::Cyan size=BarSize::Lg show_label=true />
/// }
/// ```
#[component]
pub fn ProgressBar(
    /// Current progress amount.
    #[prop(default = DEFAULT_VALUE)]
    value: f64,
    /// Denominator for the percentage.
    #[prop(default = DEFAULT_MAX)]
    max: f64,
    /// Fill color.
    #[prop(default = BarColor::Gradient)]
    color: BarColor,
    /// Track height.
    #[prop(default = BarSize::Md)]
    size: BarSize,
    /// Show the rounded percentage above the track.
    #[prop(default = false)]
    show_label: bool,
    /// Ease the fill between values.
    #[prop(default = true)]
    animated: bool,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let reading = ProgressReading::new(value, max);
    let percent = reading.percentage();

    let wrapper_classes = join_classes(&["w-full", class]);
    let track_classes = join_classes(&[
        "w-full overflow-hidden rounded-full bg-white/10",
        size.classes(),
    ]);
    let fill_classes = join_classes(&[
        "h-full rounded-full",
        color.classes(),
        if animated { "progress-animated" } else { "" },
    ]);
    let style = fill_style(percent, animated);
    let label = reading.label();

    view! {
        <div class=wrapper_classes>
            {show_label.then(move || view! {
                <div class="mb-1 flex justify-end text-xs font-medium text-gray-400">
                    <span class="progress-label">{label}</span>
                </div>
            })}
            <div
                class=track_classes
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=reading.rounded().to_string()
            >
                <div class=fill_classes style=style></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_style() {
        assert_eq!(fill_style(50.0, false), "width: 50%;");
        assert_eq!(
            fill_style(33.6, true),
            "width: 33.6%; transition: width 1s cubic-bezier(0, 0, 0.58, 1);"
        );
    }

    #[test]
    fn test_unknown_keys_fall_back() {
        assert_eq!(BarColor::from_key("purple"), BarColor::Gradient);
        assert_eq!(BarSize::from_key("huge"), BarSize::Md);
        assert_eq!(BarColor::from_key("Yellow"), BarColor::Yellow);
    }
}
