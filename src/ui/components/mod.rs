//! Neon-styled reusable UI components.
//!
//! Components are rendered through Leptos SSR and styled with Tailwind
//! utility classes. Every style table has a string key form, see
//! [`StyleKey`](crate::ui::style::StyleKey).
//!
//! # Components
//!
//! - [`Badge`]: Status badge/tag
//! - [`Button`]: Clickable button with variants and sizes
//! - [`Card`], [`CardHeader`], [`CardContent`], [`CardFooter`]: Glass card container
//! - [`ProgressBar`]: Linear progress indicator
//! - [`ProgressRing`]: Circular progress indicator

mod badge;
mod button;
mod card;
mod progress_bar;
mod progress_ring;

pub use badge::{Badge, BadgeColor};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardFooter, CardHeader};
pub use progress_bar::{BarColor, BarSize, ProgressBar};
pub use progress_ring::{ProgressRing, RingColor};
