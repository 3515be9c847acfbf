use std::env;

/// Base URL used when `NEXT_PUBLIC_BASE_URL` is absent or empty.
pub const DEFAULT_BASE_URL: &str = "https://ehheducation.com";

pub const BASE_URL_ENV: &str = "NEXT_PUBLIC_BASE_URL";
pub const ANALYTICS_ID_ENV: &str = "NEXT_PUBLIC_GOOGLE_ANALYTICS_ID";
pub const SITE_VERIFICATION_ENV: &str = "NEXT_PUBLIC_GOOGLE_SITE_VERIFICATION";

/// Whether the Google Analytics integration should be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Analytics {
    /// Render the Google tag for this measurement ID.
    Enabled(String),
    Disabled,
}

impl Analytics {
    /// An empty ID disables analytics, same as a missing one.
    pub fn from_id(id: Option<String>) -> Self {
        match id {
            Some(id) if !id.is_empty() => Analytics::Enabled(id),
            _ => Analytics::Disabled,
        }
    }

    pub fn measurement_id(&self) -> Option<&str> {
        match self {
            Analytics::Enabled(id) => Some(id),
            Analytics::Disabled => None,
        }
    }
}

/// Environment-derived configuration of the site.
///
/// Resolve it once when the process starts and pass it to [`build_metadata`](crate::metadata::build_metadata),
/// [`render_shell`](crate::shell::render_shell) or [`build`](crate::build::build). Nothing else in this crate reads the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Base URL of the site, e.g. `https://ehheducation.com`. Taken as-is, without validation.
    pub base_url: String,
    pub analytics: Analytics,
    /// Token for the `google-site-verification` meta tag. Omitted from the output when `None`.
    pub google_site_verification: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            analytics: Analytics::Disabled,
            google_site_verification: None,
        }
    }
}

impl SiteConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_ENV)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let config = Self {
            base_url,
            analytics: Analytics::from_id(lookup(ANALYTICS_ID_ENV)),
            google_site_verification: lookup(SITE_VERIFICATION_ENV),
        };

        log::debug!(
            target: "config",
            "Resolved base URL {} (analytics: {})",
            config.base_url,
            if config.analytics.measurement_id().is_some() { "enabled" } else { "disabled" }
        );

        config
    }
}
