//! Shared HTML shell of the Ecole Hôtelière Helvétique website.
//!
//! Every page goes through [`render_shell()`](shell::render_shell), which adds the SEO and social metadata, the
//! schema.org description of the school, the fonts and, when configured, Google Analytics.
//!
//! ## Example
//! ```rust
//! use ehh_shell::{SiteConfig, shell::render_shell};
//! use maud::html;
//!
//! let config = SiteConfig::default();
//! let page = render_shell(html! { main { "Welcome" } }, &config).unwrap();
//! assert!(page.into_string().contains("application/ld+json"));
//! ```

// Modules the end-user will interact directly or indirectly with
pub mod config;
pub mod errors;
pub mod identity;
pub mod metadata;
pub mod shell;
pub mod structured_data;

pub mod build;
pub mod logging;

// Exports for end-users
pub use build::build;
pub use build::metadata::{BuildOutput, PageOutput};
pub use build::options::BuildOptions;
pub use config::{Analytics, SiteConfig};
pub use logging::init_logging;

/// Content of the `generator` meta tag added to every page.
pub const GENERATOR: &str = concat!("ehh-shell v", env!("CARGO_PKG_VERSION"));
