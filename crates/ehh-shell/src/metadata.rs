//! Page metadata: the descriptor built from the site identity, and its rendering into `<head>` tags.

use maud::{Markup, html};
use serde::Serialize;

use crate::{
    GENERATOR,
    config::SiteConfig,
    identity::{self, absolute_url},
};

/// Default title of the site, and the template applied to the titles of child pages.
#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub default: String,
    pub template: String,
}

impl Title {
    /// Returns the title to display for a page. The root page has no title of its own and uses the default one.
    pub fn resolve(&self, page_title: Option<&str>) -> String {
        match page_title {
            Some(page_title) => self.template.replace("%s", page_title),
            None => self.default.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Author {
    pub name: String,
}

/// Which kinds of text browsers should turn into links on their own.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FormatDetection {
    pub email: bool,
    pub address: bool,
    pub telephone: bool,
}

impl FormatDetection {
    fn content(&self) -> String {
        let flag = |enabled: bool| if enabled { "yes" } else { "no" };
        format!(
            "telephone={}, address={}, email={}",
            flag(self.telephone),
            flag(self.address),
            flag(self.email)
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpenGraph {
    #[serde(rename = "type")]
    pub og_type: &'static str,
    pub locale: String,
    pub url: String,
    pub site_name: String,
    pub title: String,
    pub description: String,
    pub images: Vec<OgImage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub creator: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePreview {
    None,
    Standard,
    Large,
}

impl ImagePreview {
    fn as_str(&self) -> &str {
        match self {
            ImagePreview::None => "none",
            ImagePreview::Standard => "standard",
            ImagePreview::Large => "large",
        }
    }
}

/// Directives addressed to Googlebot. A length of `-1` means no limit.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GoogleBotDirectives {
    pub index: bool,
    pub follow: bool,
    pub max_video_preview: i32,
    pub max_image_preview: ImagePreview,
    pub max_snippet: i32,
}

impl GoogleBotDirectives {
    fn content(&self) -> String {
        format!(
            "{}, {}, max-video-preview:{}, max-image-preview:{}, max-snippet:{}",
            index_directive(self.index),
            follow_directive(self.follow),
            self.max_video_preview,
            self.max_image_preview.as_str(),
            self.max_snippet
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
    pub google_bot: GoogleBotDirectives,
}

impl Robots {
    fn content(&self) -> String {
        format!(
            "{}, {}",
            index_directive(self.index),
            follow_directive(self.follow)
        )
    }
}

fn index_directive(index: bool) -> &'static str {
    if index { "index" } else { "noindex" }
}

fn follow_directive(follow: bool) -> &'static str {
    if follow { "follow" } else { "nofollow" }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Verification {
    pub google: Option<String>,
}

/// Everything needed to render the `<head>` of a page.
#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    pub base_url: String,
    pub title: Title,
    pub description: String,
    pub keywords: Vec<String>,
    pub authors: Vec<Author>,
    pub creator: String,
    pub publisher: String,
    pub format_detection: FormatDetection,
    /// Canonical URL of the page, already resolved against the base URL.
    pub canonical: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: Robots,
    pub verification: Verification,
}

/// The root path resolved against the base URL, without doubling a trailing slash.
fn canonical_url(base_url: &str) -> String {
    if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        absolute_url(base_url, "/")
    }
}

/// Builds the metadata descriptor of the site from its identity and the given configuration.
pub fn build_metadata(config: &SiteConfig) -> Metadata {
    let base_url = config.base_url.as_str();
    let logo_url = absolute_url(base_url, identity::LOGO_PATH);

    Metadata {
        base_url: base_url.to_string(),
        title: Title {
            default: identity::DEFAULT_TITLE.to_string(),
            template: identity::TITLE_TEMPLATE.to_string(),
        },
        description: identity::DESCRIPTION.to_string(),
        keywords: identity::KEYWORDS.iter().map(|k| k.to_string()).collect(),
        authors: vec![Author {
            name: identity::SITE_NAME.to_string(),
        }],
        creator: identity::SITE_NAME.to_string(),
        publisher: identity::SITE_NAME.to_string(),
        format_detection: FormatDetection {
            email: false,
            address: false,
            telephone: false,
        },
        canonical: canonical_url(base_url),
        open_graph: OpenGraph {
            og_type: "website",
            locale: identity::LOCALE.to_string(),
            url: base_url.to_string(),
            site_name: identity::SITE_NAME.to_string(),
            title: identity::DEFAULT_TITLE.to_string(),
            description: identity::DESCRIPTION.to_string(),
            images: vec![OgImage {
                url: logo_url.clone(),
                width: identity::OG_IMAGE_WIDTH,
                height: identity::OG_IMAGE_HEIGHT,
                alt: identity::SITE_NAME.to_string(),
            }],
        },
        twitter: TwitterCard {
            card: "summary_large_image",
            title: identity::DEFAULT_TITLE.to_string(),
            description: identity::DESCRIPTION.to_string(),
            images: vec![logo_url],
            creator: identity::TWITTER_CREATOR.to_string(),
        },
        robots: Robots {
            index: true,
            follow: true,
            google_bot: GoogleBotDirectives {
                index: true,
                follow: true,
                max_video_preview: -1,
                max_image_preview: ImagePreview::Large,
                max_snippet: -1,
            },
        },
        verification: Verification {
            google: config.google_site_verification.clone(),
        },
    }
}

/// Renders the descriptor as the tags that go inside `<head>`.
pub fn render_head(metadata: &Metadata, page_title: Option<&str>) -> Markup {
    let title = metadata.title.resolve(page_title);

    html! {
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1";
        title { (title) }
        meta name="description" content=(metadata.description);
        @for author in &metadata.authors {
            meta name="author" content=(author.name);
        }
        meta name="keywords" content=(metadata.keywords.join(","));
        meta name="creator" content=(metadata.creator);
        meta name="publisher" content=(metadata.publisher);
        meta name="robots" content=(metadata.robots.content());
        meta name="googlebot" content=(metadata.robots.google_bot.content());
        link rel="canonical" href=(metadata.canonical);
        @if let Some(token) = metadata.verification.google.as_deref().filter(|token| !token.is_empty()) {
            meta name="google-site-verification" content=(token);
        }
        meta name="format-detection" content=(metadata.format_detection.content());
        meta name="generator" content=(GENERATOR);

        // Open Graph
        meta property="og:title" content=(metadata.open_graph.title);
        meta property="og:description" content=(metadata.open_graph.description);
        meta property="og:url" content=(metadata.open_graph.url);
        meta property="og:site_name" content=(metadata.open_graph.site_name);
        meta property="og:locale" content=(metadata.open_graph.locale);
        @for image in &metadata.open_graph.images {
            meta property="og:image" content=(image.url);
            meta property="og:image:width" content=(image.width);
            meta property="og:image:height" content=(image.height);
            meta property="og:image:alt" content=(image.alt);
        }
        meta property="og:type" content=(metadata.open_graph.og_type);

        // Twitter
        meta name="twitter:card" content=(metadata.twitter.card);
        meta name="twitter:creator" content=(metadata.twitter.creator);
        meta name="twitter:title" content=(metadata.twitter.title);
        meta name="twitter:description" content=(metadata.twitter.description);
        @for image in &metadata.twitter.images {
            meta name="twitter:image" content=(image);
        }
    }
}
