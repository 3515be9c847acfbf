//! The HTML document every page is rendered into.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::{
    config::{Analytics, SiteConfig},
    errors::ShellError,
    identity,
    metadata::{build_metadata, render_head},
    structured_data::{build_structured_data, json_ld_script},
};

/// A web font exposed to stylesheets through a CSS custom property.
///
/// Adding `class_name` to an element defines `variable` for it and its descendants.
#[derive(Debug, Clone, Copy)]
pub struct FontFamily {
    pub family: &'static str,
    pub variable: &'static str,
    pub class_name: &'static str,
    pub fallback: &'static str,
}

pub const GEIST_SANS: FontFamily = FontFamily {
    family: "Geist",
    variable: "--font-geist-sans",
    class_name: "geist-sans-variable",
    fallback: "ui-sans-serif, system-ui, sans-serif",
};

pub const GEIST_MONO: FontFamily = FontFamily {
    family: "Geist Mono",
    variable: "--font-geist-mono",
    class_name: "geist-mono-variable",
    fallback: "ui-monospace, SFMono-Regular, monospace",
};

pub const GLOBAL_STYLESHEET: &str = "/globals.css";

const GOOGLE_TAG_URL: &str = "https://www.googletagmanager.com/gtag/js";

impl FontFamily {
    fn css_rule(&self) -> String {
        format!(
            ".{}{{{}:'{}', {}}}",
            self.class_name, self.variable, self.family, self.fallback
        )
    }
}

fn google_fonts_url(fonts: &[FontFamily]) -> String {
    let families = fonts
        .iter()
        .map(|font| format!("family={}:wght@100..900", font.family.replace(' ', "+")))
        .collect::<Vec<_>>()
        .join("&");

    format!("https://fonts.googleapis.com/css2?{}&display=swap", families)
}

/// Font stylesheet links and the class rules binding each font to its CSS variable.
pub fn font_links(fonts: &[FontFamily]) -> Markup {
    let rules = fonts.iter().map(FontFamily::css_rule).collect::<String>();

    html! {
        link rel="preconnect" href="https://fonts.googleapis.com";
        link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
        link rel="stylesheet" href=(google_fonts_url(fonts));
        style { (PreEscaped(rules)) }
    }
}

/// The Google tag for the given measurement ID.
pub fn google_analytics(measurement_id: &str) -> Result<Markup, ShellError> {
    // Quoted through JSON so the ID always ends up as a single string literal.
    let id_literal = serde_json::to_string(measurement_id)?;
    let init = format!(
        "window.dataLayer = window.dataLayer || [];function gtag(){{dataLayer.push(arguments);}}gtag('js', new Date());gtag('config', {});",
        id_literal
    );

    Ok(html! {
        script async src=(format!("{}?id={}", GOOGLE_TAG_URL, measurement_id)) {}
        script id="google-analytics" { (PreEscaped(init)) }
    })
}

/// Renders a full document around `children`.
///
/// The metadata and the structured data are rebuilt on every call from `config`, so both always agree on the base URL.
pub fn render_shell(children: Markup, config: &SiteConfig) -> Result<Markup, ShellError> {
    let metadata = build_metadata(config);
    let organization = build_structured_data(&metadata.base_url);
    let fonts = [GEIST_SANS, GEIST_MONO];

    let body_class = format!(
        "{} {} antialiased",
        GEIST_SANS.class_name, GEIST_MONO.class_name
    );

    let structured_data = json_ld_script(&organization)?;
    let analytics = match &config.analytics {
        Analytics::Enabled(id) => Some(google_analytics(id)?),
        Analytics::Disabled => None,
    };

    Ok(html! {
        (DOCTYPE)
        html lang=(identity::LANGUAGE) {
            head {
                (render_head(&metadata, None))
                (font_links(&fonts))
                link rel="stylesheet" href=(GLOBAL_STYLESHEET);
            }
            body class=(body_class) {
                (structured_data)
                (children)
            }
            @if let Some(analytics) = analytics {
                (analytics)
            }
        }
    })
}
