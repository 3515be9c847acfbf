use std::{fs, time::Instant};

use colored::Colorize;
use log::{debug, info};
use maud::Markup;

use crate::{
    BuildOptions, BuildOutput,
    config::SiteConfig,
    errors::ShellError,
    logging::{FormatElapsedTimeOptions, format_elapsed_time, print_title},
    shell::render_shell,
};

pub mod metadata;
pub mod options;

/// Renders `children` inside the site shell and writes the result to `index.html` in the output directory.
pub fn build(
    children: Markup,
    config: &SiteConfig,
    options: &BuildOptions,
) -> Result<BuildOutput, ShellError> {
    let mut build_output = BuildOutput::new(Instant::now());

    info!(target: "build", "Output directory: {}", options.output_dir.display());
    info!(target: "build", "Base URL: {}", config.base_url);

    if options.clean_output_dir && options.output_dir.exists() {
        debug!(target: "build", "Cleaning output directory");
        fs::remove_dir_all(&options.output_dir)?;
    }

    fs::create_dir_all(&options.output_dir).map_err(|source| ShellError::CreateDirFailed {
        path: options.output_dir.clone(),
        source,
    })?;

    print_title("generating pages");

    let page_start = Instant::now();
    let document = render_shell(children, config)?;

    let file_path = options.output_dir.join("index.html");
    fs::write(&file_path, document.into_string()).map_err(|source| ShellError::WriteFailed {
        path: file_path.clone(),
        source,
    })?;

    info!(target: "pages", "/ -> {} {}", file_path.to_string_lossy().dimmed(), format_elapsed_time(page_start.elapsed(), &FormatElapsedTimeOptions::default()));
    build_output.add_page("/".to_string(), file_path.to_string_lossy().to_string());

    info!(target: "build", "{}", format!("generated {} pages in {}", build_output.pages.len(), format_elapsed_time(build_output.start_time.elapsed(), &FormatElapsedTimeOptions::default())).bold());

    Ok(build_output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Analytics;
    use maud::html;
    use tempfile::TempDir;

    fn options_for(dir: &TempDir, clean_output_dir: bool) -> BuildOptions {
        BuildOptions {
            output_dir: dir.path().join("dist"),
            clean_output_dir,
        }
    }

    #[test]
    fn test_build_writes_index() {
        let dir = TempDir::new().unwrap();
        let options = options_for(&dir, false);
        let config = SiteConfig {
            analytics: Analytics::Enabled("G-BUILD".to_string()),
            ..Default::default()
        };

        let output = build(html! { h1 { "Hello" } }, &config, &options).unwrap();

        assert!(output.start_time <= Instant::now());
        assert_eq!(output.pages.len(), 1);
        assert_eq!(output.pages[0].route, "/");

        let written = fs::read_to_string(options.output_dir.join("index.html")).unwrap();
        assert!(written.contains(r#"<script type="application/ld+json">"#));
        assert!(written.contains("<h1>Hello</h1>"));
        assert!(written.contains("gtag/js?id=G-BUILD"));
    }

    #[test]
    fn test_clean_output_dir() {
        let dir = TempDir::new().unwrap();
        let stale = dir.path().join("dist").join("stale.html");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, "old").unwrap();

        build(html! {}, &SiteConfig::default(), &options_for(&dir, false)).unwrap();
        assert!(stale.exists());

        build(html! {}, &SiteConfig::default(), &options_for(&dir, true)).unwrap();
        assert!(!stale.exists());
        assert!(dir.path().join("dist").join("index.html").exists());
    }

    #[test]
    fn test_output_dir_is_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("dist");
        fs::write(&blocker, "not a directory").unwrap();

        let error = build(html! {}, &SiteConfig::default(), &options_for(&dir, false)).unwrap_err();
        assert!(matches!(error, ShellError::CreateDirFailed { .. }));
    }
}
