use std::path::PathBuf;

/// Options for [`build()`](crate::build::build).
///
/// ## Example
/// ```rust
/// use ehh_shell::BuildOptions;
///
/// let options = BuildOptions {
///     output_dir: "public".into(),
///     ..Default::default()
/// };
/// assert!(!options.clean_output_dir);
/// ```
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub output_dir: PathBuf,

    /// Whether to remove everything in the output directory before writing pages.
    pub clean_output_dir: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            output_dir: "dist".into(),
            clean_output_dir: false,
        }
    }
}
