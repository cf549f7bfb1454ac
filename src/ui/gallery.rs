//! Showcase page rendering every component.
//!
//! The page is a standalone HTML document. Tailwind is loaded by the browser
//! from its CDN build, so the output needs no asset pipeline.

use std::fs;
use std::io::Write;

use leptos::prelude::*;
use tracing::{debug, info};

use crate::config::GalleryConfig;
use crate::error::Result;
use crate::progress::ProgressReading;
use crate::ui::components::{
    Badge, BadgeColor, BarSize, Button, ButtonSize, ButtonVariant, Card, CardContent, CardFooter,
    CardHeader, ProgressBar, ProgressRing, RingColor,
};

/// Wrap rendered `content` in the HTML document shell.
#[must_use]
pub fn html_shell(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="dark">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="min-h-screen bg-[#0a0a0f] text-white antialiased">
    <main class="container mx-auto max-w-5xl space-y-10 px-6 py-12">
        <h1 class="bg-gradient-to-r from-cyan-400 to-pink-500 bg-clip-text text-4xl font-bold text-transparent">{title}</h1>
        {content}
    </main>
</body>
</html>"#,
        title = escape_text(title),
    )
}

/// Escape text for HTML element content.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render the component sections of the gallery.
#[must_use]
pub fn render_sections(config: &GalleryConfig) -> String {
    let max = config.max;
    let animated = config.animated;
    let bar_color = config.bar_color();
    let ring_color = config.ring_color();

    let bars = config
        .samples
        .iter()
        .copied()
        .map(move |value| {
            debug!(
                name: "gallery.sample",
                value,
                max,
                percent = ProgressReading::new(value, max).percentage(),
                "Rendering progress sample"
            );
            view! {
                <ProgressBar value=value max=max color=bar_color show_label=true animated=animated />
            }
        })
        .collect_view();

    let rings = config
        .samples
        .iter()
        .copied()
        .map(move |value| {
            view! { <ProgressRing value=value max=max color=ring_color animated=animated /> }
        })
        .collect_view();

    Owner::new().with(move || {
        view! {
            <section class="space-y-4">
                <h2 class="text-xl font-semibold text-gray-300">"Badges"</h2>
                <div class="flex flex-wrap gap-2">
                    <Badge color=BadgeColor::Cyan>"Cyan"</Badge>
                    <Badge color=BadgeColor::Pink>"Pink"</Badge>
                    <Badge color=BadgeColor::Green>"Green"</Badge>
                    <Badge color=BadgeColor::Yellow>"Yellow"</Badge>
                    <Badge color=BadgeColor::Purple>"Purple"</Badge>
                    <Badge color=BadgeColor::Gray>"Gray"</Badge>
                </div>
            </section>
            <section class="space-y-4">
                <h2 class="text-xl font-semibold text-gray-300">"Buttons"</h2>
                <div class="flex flex-wrap items-center gap-3">
                    <Button variant=ButtonVariant::Primary size=ButtonSize::Lg>"Primary"</Button>
                    <Button variant=ButtonVariant::Secondary>"Secondary"</Button>
                    <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm>"Ghost"</Button>
                    <Button variant=ButtonVariant::Danger disabled=true>"Danger"</Button>
                </div>
            </section>
            <section class="grid gap-6 md:grid-cols-2">
                <Card glow=true>
                    <CardHeader>
                        <h2 class="text-lg font-semibold">"Linear"</h2>
                    </CardHeader>
                    <CardContent class="space-y-4">
                        {bars}
                        <ProgressBar value=60.0 size=BarSize::Sm animated=animated />
                        <ProgressBar value=60.0 size=BarSize::Lg animated=animated />
                    </CardContent>
                </Card>
                <Card hover=true>
                    <CardHeader>
                        <h2 class="text-lg font-semibold">"Circular"</h2>
                    </CardHeader>
                    <CardContent class="flex flex-wrap gap-4">
                        {rings}
                    </CardContent>
                    <CardFooter>
                        <ProgressRing value=75.0 size=48.0 stroke_width=4.0 color=RingColor::Pink show_value=false animated=animated />
                        <Badge color=BadgeColor::Gray>"Compact"</Badge>
                    </CardFooter>
                </Card>
            </section>
        }
        .to_html()
    })
}

/// Render the full gallery document.
#[must_use]
pub fn render_gallery(config: &GalleryConfig) -> String {
    let page = html_shell(&config.title, &render_sections(config));
    info!(
        name: "gallery.rendered",
        samples = config.samples.len(),
        bytes = page.len(),
        "Gallery rendered"
    );
    page
}

/// Render the gallery and write it to the configured output, or stdout.
pub fn write_gallery(config: &GalleryConfig) -> Result<()> {
    let page = render_gallery(config);
    match &config.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &page)?;
            info!(name: "gallery.written", path = %path.display(), "Gallery written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(page.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
