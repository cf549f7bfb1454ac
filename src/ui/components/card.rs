//! Glass card component with header, content, and footer.

use leptos::prelude::*;

use crate::ui::style::join_classes;

/// Card container component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Card glow=true hover=true>
///         <CardHeader>
///             <h3>"Throughput"</h3>
///         </CardHeader>
///         <CardContent>
///             <ProgressBar value=72.0 />
///         </CardContent>
///         <CardFooter>
///             <Button>"Details"</Button>
///         </CardFooter>
///     </Card>
/// }
/// ```
#[component]
pub fn Card(
    /// Add a soft neon shadow.
    #[prop(default = false)]
    glow: bool,
    /// Lift the card on hover.
    #[prop(default = false)]
    hover: bool,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Card content.
    children: Children,
) -> impl IntoView {
    let classes = join_classes(&[
        "rounded-2xl border border-white/10 bg-white/5 text-white backdrop-blur-xl",
        if glow {
            "shadow-[0_0_30px_rgba(34,211,238,0.15)]"
        } else {
            ""
        },
        if hover {
            "transition-all duration-300 hover:-translate-y-1 hover:border-cyan-500/30"
        } else {
            ""
        },
        class,
    ]);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

/// Card header section.
#[component]
pub fn CardHeader(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Header content.
    children: Children,
) -> impl IntoView {
    let classes = join_classes(&["flex flex-col space-y-1.5 p-6", class]);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

/// Card content section.
#[component]
pub fn CardContent(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Content.
    children: Children,
) -> impl IntoView {
    let classes = join_classes(&["p-6 pt-0", class]);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

/// Card footer section.
#[component]
pub fn CardFooter(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Footer content.
    children: Children,
) -> impl IntoView {
    let classes = join_classes(&["flex items-center gap-2 p-6 pt-0", class]);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}
