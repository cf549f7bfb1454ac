//! Circular progress ring drawn with SVG strokes.

use std::str::FromStr;

use leptos::prelude::*;

use crate::error::Error;
use crate::motion::Transition;
use crate::progress::{
    DEFAULT_MAX, DEFAULT_RING_SIZE, DEFAULT_STROKE_WIDTH, DEFAULT_VALUE, ProgressReading,
    RingGeometry, fmt_num,
};
use crate::ui::style::{StyleKey, join_classes, normalize, unknown_key};

/// Track stroke behind the filled arc.
const TRACK_STROKE: &str = "rgba(255,255,255,0.1)";

/// Stroke color of a ring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RingColor {
    /// Cyan (default).
    #[default]
    Cyan,
    /// Pink.
    Pink,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
}

impl RingColor {
    /// SVG stroke color.
    #[must_use]
    pub fn stroke(self) -> &'static str {
        match self {
            Self::Cyan => "#22d3ee",
            Self::Pink => "#ec4899",
            Self::Green => "#4ade80",
            Self::Yellow => "#facc15",
        }
    }

    /// CSS classes for the center label and arc glow.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Cyan => "text-cyan-400 drop-shadow-[0_0_6px_rgba(34,211,238,0.6)]",
            Self::Pink => "text-pink-400 drop-shadow-[0_0_6px_rgba(236,72,153,0.6)]",
            Self::Green => "text-green-400 drop-shadow-[0_0_6px_rgba(74,222,128,0.6)]",
            Self::Yellow => "text-yellow-400 drop-shadow-[0_0_6px_rgba(250,204,21,0.6)]",
        }
    }
}

impl FromStr for RingColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "cyan" => Ok(Self::Cyan),
            "pink" => Ok(Self::Pink),
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            _ => Err(unknown_key(Self::KIND, s)),
        }
    }
}

impl StyleKey for RingColor {
    const KIND: &'static str = "ring color";

    fn key(self) -> &'static str {
        match self {
            Self::Cyan => "cyan",
            Self::Pink => "pink",
            Self::Green => "green",
            Self::Yellow => "yellow",
        }
    }
}

/// Circular progress indicator.
///
/// The arc starts at 12 o'clock and fills clockwise. Its visible length is
/// controlled by `stroke-dashoffset`, which eases toward each new value when
/// `animated`.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <ProgressRing value=3.0 max=4.0 size=120.0 color=RingColor::Pink />
/// }
/// ```
#[component]
pub fn ProgressRing(
    /// Current progress amount.
    #[prop(default = DEFAULT_VALUE)]
    value: f64,
    /// Denominator for the percentage.
    #[prop(default = DEFAULT_MAX)]
    max: f64,
    /// Outer diameter in pixels.
    #[prop(default = DEFAULT_RING_SIZE)]
    size: f64,
    /// Ring thickness in pixels.
    #[prop(default = DEFAULT_STROKE_WIDTH)]
    stroke_width: f64,
    /// Stroke color.
    #[prop(default = RingColor::Cyan)]
    color: RingColor,
    /// Show the rounded percentage in the center.
    #[prop(default = true)]
    show_value: bool,
    /// Ease the arc between values.
    #[prop(default = true)]
    animated: bool,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let reading = ProgressReading::new(value, max);
    let ring = RingGeometry::new(size, stroke_width);

    let size_str = fmt_num(ring.size());
    let center = fmt_num(ring.center());
    let radius = fmt_num(ring.radius());
    let stroke_str = fmt_num(ring.stroke_width());
    let circumference = fmt_num(ring.circumference());
    let offset = fmt_num(ring.dash_offset(reading.percentage()));

    let wrapper_classes = join_classes(&[
        "relative inline-flex items-center justify-center",
        color.classes(),
        class,
    ]);
    let wrapper_style = format!("width: {size_str}px; height: {size_str}px;");
    let view_box = format!("0 0 {size_str} {size_str}");
    let arc_style = Transition::ring_fill().css_when(animated).unwrap_or_default();
    let label = reading.label();

    view! {
        <div
            class=wrapper_classes
            style=wrapper_style
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=reading.rounded().to_string()
        >
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width=size_str.clone()
                height=size_str
                viewBox=view_box
            >
                <g transform=ring.start_transform()>
                    <circle
                        cx=center.clone()
                        cy=center.clone()
                        r=radius.clone()
                        fill="none"
                        stroke=TRACK_STROKE
                        stroke-width=stroke_str.clone()
                    />
                    <circle
                        class="progress-ring-arc"
                        cx=center.clone()
                        cy=center
                        r=radius
                        fill="none"
                        stroke=color.stroke()
                        stroke-width=stroke_str
                        stroke-linecap="round"
                        stroke-dasharray=circumference
                        stroke-dashoffset=offset
                        style=arc_style
                    />
                </g>
            </svg>
            {show_value.then(move || view! {
                <span class="progress-label absolute text-sm font-semibold">{label}</span>
            })}
        </div>
    }
}
