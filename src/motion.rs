//! Easing curves and fill transitions.
//!
//! Progress components never jump to a new fill. When rendered to HTML the
//! transition is delegated to the browser through a CSS `transition`
//! declaration built from [`Transition`]. Targets that draw frames themselves
//! can drive a [`Tween`] instead, which samples the same curve.

use std::time::Duration;

/// Duration of a fill transition.
pub const FILL_DURATION: Duration = Duration::from_millis(1000);

/// A timing function mapping normalized time to normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Decelerating curve, `cubic-bezier(0, 0, 0.58, 1)`.
    #[default]
    EaseOut,
    /// Arbitrary CSS-style cubic bezier with control points `(x1, y1)` and `(x2, y2)`.
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Control points of this curve.
    #[must_use]
    pub fn control_points(self) -> (f64, f64, f64, f64) {
        match self {
            Self::Linear => (0.0, 0.0, 1.0, 1.0),
            Self::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Self::CubicBezier(x1, y1, x2, y2) => (x1.clamp(0.0, 1.0), y1, x2.clamp(0.0, 1.0), y2),
        }
    }

    /// Evaluate the curve at normalized time `t` (clamped to `[0, 1]`).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            _ => {
                let (x1, y1, x2, y2) = self.control_points();
                UnitBezier::new(x1, y1, x2, y2).solve(t)
            }
        }
    }

    /// CSS timing-function keyword or expression.
    #[must_use]
    pub fn css(self) -> String {
        match self {
            Self::Linear => "linear".to_string(),
            _ => {
                let (x1, y1, x2, y2) = self.control_points();
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

/// Polynomial form of a bezier with endpoints fixed at `(0, 0)` and `(1, 1)`.
struct UnitBezier {
    ax: f64,
    bx: f64,
    cx: f64,
    ay: f64,
    by: f64,
    cy: f64,
}

impl UnitBezier {
    const EPSILON: f64 = 1e-7;

    fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let ax = 1.0 - cx - bx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        let ay = 1.0 - cy - by;
        Self {
            ax,
            bx,
            cx,
            ay,
            by,
            cy,
        }
    }

    fn sample_x(&self, s: f64) -> f64 {
        ((self.ax * s + self.bx) * s + self.cx) * s
    }

    fn sample_y(&self, s: f64) -> f64 {
        ((self.ay * s + self.by) * s + self.cy) * s
    }

    fn sample_dx(&self, s: f64) -> f64 {
        (3.0 * self.ax * s + 2.0 * self.bx) * s + self.cx
    }

    /// Find the curve parameter whose x equals `x`.
    fn solve_param(&self, x: f64) -> f64 {
        // Newton first; falls back to bisection on flat derivatives.
        let mut s = x;
        for _ in 0..8 {
            let err = self.sample_x(s) - x;
            if err.abs() < Self::EPSILON {
                return s;
            }
            let d = self.sample_dx(s);
            if d.abs() < 1e-6 {
                break;
            }
            s -= err / d;
        }

        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        s = x;
        while lo < hi {
            let v = self.sample_x(s);
            if (v - x).abs() < Self::EPSILON {
                return s;
            }
            if x > v {
                lo = s;
            } else {
                hi = s;
            }
            let next = (hi - lo) / 2.0 + lo;
            if (next - s).abs() < f64::EPSILON {
                break;
            }
            s = next;
        }
        s
    }

    fn solve(&self, x: f64) -> f64 {
        self.sample_y(self.solve_param(x))
    }
}

/// A CSS transition on one property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Animated CSS property, e.g. `width`.
    pub property: &'static str,
    /// Total duration.
    pub duration: Duration,
    /// Timing function.
    pub easing: Easing,
}

impl Transition {
    /// Width transition used by the linear bar.
    #[must_use]
    pub fn bar_fill() -> Self {
        Self {
            property: "width",
            duration: FILL_DURATION,
            easing: Easing::EaseOut,
        }
    }

    /// Dash-offset transition used by the ring.
    #[must_use]
    pub fn ring_fill() -> Self {
        Self {
            property: "stroke-dashoffset",
            duration: FILL_DURATION,
            easing: Easing::EaseOut,
        }
    }

    /// `transition: ...;` declaration for an inline style attribute.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "transition: {} {}s {};",
            self.property,
            self.duration.as_secs_f64(),
            self.easing.css()
        )
    }

    /// Declaration when `animated`, nothing otherwise.
    #[must_use]
    pub fn css_when(&self, animated: bool) -> Option<String> {
        animated.then(|| self.css())
    }
}

/// Per-frame interpolation between two fill values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    /// Interpolate from `from` to `to` following `transition`.
    #[must_use]
    pub fn new(from: f64, to: f64, transition: Transition) -> Self {
        Self {
            from,
            to,
            duration: transition.duration,
            easing: transition.easing,
        }
    }

    /// Final value.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Whether the tween has reached its target at `elapsed`.
    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// Displayed value after `elapsed`.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> f64 {
        if self.is_finished(elapsed) {
            return self.to;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Start a new tween toward `to` from wherever this one is at `elapsed`.
    #[must_use]
    pub fn retarget(&self, to: f64, elapsed: Duration) -> Self {
        Self {
            from: self.sample(elapsed),
            to,
            ..*self
        }
    }

    /// Values for each frame at `fps` frames per second, ending on the target.
    pub fn frames(&self, fps: u32) -> impl Iterator<Item = f64> + '_ {
        let step = Duration::from_secs(1) / fps.max(1);
        let count =
            u32::try_from(self.duration.as_nanos() / step.as_nanos().max(1)).unwrap_or(u32::MAX);
        (1..=count)
            .map(move |i| self.sample(step * i))
            .chain(std::iter::once(self.to))
    }
}
