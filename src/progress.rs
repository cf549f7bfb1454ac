//! Progress math shared by the linear bar and the circular ring.
//!
//! Everything here is a pure function of the caller's props. Nothing is cached
//! between renders, so two readings with the same inputs always produce the
//! same geometry.
//!
//! # Example
//!
//! ```rust
//! use neon_ui::progress::{ProgressReading, RingGeometry};
//!
//! let reading = ProgressReading::new(33.6, 100.0);
//! assert_eq!(reading.label(), "34%");
//!
//! let ring = RingGeometry::new(80.0, 6.0);
//! assert!((ring.dash_offset(0.0) - ring.circumference()).abs() < 1e-9);
//! assert!(ring.dash_offset(100.0).abs() < 1e-9);
//! ```

use std::f64::consts::TAU;

/// Default `value` when a caller does not supply one.
pub const DEFAULT_VALUE: f64 = 0.0;
/// Default `max` when a caller does not supply one.
pub const DEFAULT_MAX: f64 = 100.0;

/// Default ring diameter.
pub const DEFAULT_RING_SIZE: f64 = 80.0;
/// Default ring thickness.
pub const DEFAULT_STROKE_WIDTH: f64 = 6.0;

/// A single `{ value, max }` pair as supplied to a progress component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressReading {
    /// Current progress amount.
    pub value: f64,
    /// Denominator for the percentage.
    pub max: f64,
}

impl Default for ProgressReading {
    fn default() -> Self {
        Self {
            value: DEFAULT_VALUE,
            max: DEFAULT_MAX,
        }
    }
}

impl ProgressReading {
    /// Create a reading.
    #[must_use]
    pub fn new(value: f64, max: f64) -> Self {
        Self { value, max }
    }

    /// Normalized percentage in `[0, 100]`.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        percentage(self.value, self.max)
    }

    /// Percentage rounded to the nearest integer.
    #[must_use]
    pub fn rounded(&self) -> u8 {
        round_percentage(self.percentage())
    }

    /// Display label, e.g. `"34%"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}%", self.rounded())
    }
}

/// Compute `clamp(value / max * 100, 0, 100)`.
///
/// A non-positive or non-finite `max` yields `0.0`, as does a `NaN` value.
/// An infinite value clamps like any other out-of-range value.
#[must_use]
pub fn percentage(value: f64, max: f64) -> f64 {
    if !(max.is_finite() && max > 0.0) || value.is_nan() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// Round an already-clamped percentage for display.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn round_percentage(percent: f64) -> u8 {
    // Clamped first so the cast is lossless.
    percent.clamp(0.0, 100.0).round() as u8
}

/// SVG geometry for a ring of a given diameter and stroke width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    size: f64,
    stroke_width: f64,
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_RING_SIZE, DEFAULT_STROKE_WIDTH)
    }
}

impl RingGeometry {
    /// Geometry for a ring of diameter `size` drawn with `stroke_width`.
    #[must_use]
    pub fn new(size: f64, stroke_width: f64) -> Self {
        Self { size, stroke_width }
    }

    /// Outer diameter (the SVG viewport edge).
    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Stroke thickness.
    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Center coordinate on both axes.
    #[must_use]
    pub fn center(&self) -> f64 {
        self.size / 2.0
    }

    /// `(size - stroke_width) / 2`, never negative.
    #[must_use]
    pub fn radius(&self) -> f64 {
        ((self.size - self.stroke_width) / 2.0).max(0.0)
    }

    /// `2πr`.
    #[must_use]
    pub fn circumference(&self) -> f64 {
        TAU * self.radius()
    }

    /// Dash offset hiding the unfilled part of the ring.
    ///
    /// `percent` is clamped, so the result always lies in `[0, circumference]`.
    #[must_use]
    pub fn dash_offset(&self, percent: f64) -> f64 {
        let percent = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 100.0)
        };
        self.circumference() * (1.0 - percent / 100.0)
    }

    /// SVG transform that moves the ring's start to 12 o'clock.
    #[must_use]
    pub fn start_transform(&self) -> String {
        let c = fmt_num(self.center());
        format!("rotate(-90 {c} {c})")
    }
}

/// Format a number for SVG/CSS output with at most three decimals.
#[must_use]
pub fn fmt_num(n: f64) -> String {
    let s = format!("{n:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_percentage_bounds() {
        for value in [-50.0, -0.1, 0.0, 12.5, 99.9, 100.0, 250.0, f64::INFINITY] {
            for max in [0.5, 1.0, 100.0, 1e6] {
                let p = percentage(value, max);
                assert!((0.0..=100.0).contains(&p), "{value}/{max} -> {p}");
            }
        }
    }

    #[test]
    fn test_percentage_known_points() {
        assert!(close(percentage(0.0, 100.0), 0.0));
        assert!(close(percentage(50.0, 100.0), 50.0));
        assert!(close(percentage(100.0, 100.0), 100.0));
        assert!(close(percentage(140.0, 100.0), 100.0));
        assert!(close(percentage(-3.0, 100.0), 0.0));
        assert!(close(percentage(1.0, 4.0), 25.0));
    }

    #[test]
    fn test_percentage_degenerate_max() {
        assert!(close(percentage(10.0, 0.0), 0.0));
        assert!(close(percentage(10.0, -5.0), 0.0));
        assert!(close(percentage(10.0, f64::NAN), 0.0));
        assert!(close(percentage(f64::NAN, 100.0), 0.0));
    }

    #[test]
    fn test_reading_defaults() {
        let reading = ProgressReading::default();
        assert!(close(reading.max, 100.0));
        assert!(close(reading.percentage(), 0.0));
        assert_eq!(reading.label(), "0%");
    }

    #[test]
    fn test_label_rounding() {
        assert_eq!(ProgressReading::new(33.6, 100.0).label(), "34%");
        assert_eq!(ProgressReading::new(33.4, 100.0).label(), "33%");
        assert_eq!(ProgressReading::new(1.0, 3.0).label(), "33%");
        assert_eq!(ProgressReading::new(500.0, 100.0).label(), "100%");
    }

    #[test]
    fn test_ring_geometry() {
        let ring = RingGeometry::default();
        assert!(close(ring.radius(), 37.0));
        assert!(close(ring.circumference(), TAU * 37.0));
        assert!(close(ring.dash_offset(0.0), ring.circumference()));
        assert!(close(ring.dash_offset(100.0), 0.0));
        assert!(close(ring.dash_offset(50.0), ring.circumference() / 2.0));
        assert!(close(ring.dash_offset(150.0), 0.0));
        assert!(close(ring.dash_offset(-10.0), ring.circumference()));
    }

    #[test]
    fn test_ring_stroke_wider_than_size() {
        let ring = RingGeometry::new(4.0, 10.0);
        assert!(close(ring.radius(), 0.0));
        assert!(close(ring.dash_offset(40.0), 0.0));
    }

    #[test]
    fn test_start_transform() {
        assert_eq!(RingGeometry::default().start_transform(), "rotate(-90 40 40)");
        assert_eq!(RingGeometry::new(45.0, 5.0).start_transform(), "rotate(-90 22.5 22.5)");
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(40.0), "40");
        assert_eq!(fmt_num(232.477_856), "232.478");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(-0.0001), "0");
    }
}
