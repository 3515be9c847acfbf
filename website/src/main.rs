use std::path::PathBuf;

use clap::Parser;
use ehh_shell::{BuildOptions, BuildOutput, SiteConfig, build, init_logging};

mod home;

#[derive(Parser)]
#[command(author, version, about = "Build the Ecole Hôtelière Helvétique website", long_about = None)]
struct Cli {
    /// Directory to write the generated pages to
    #[arg(long, default_value = "dist")]
    output_dir: PathBuf,

    /// Remove the output directory before building
    #[arg(long)]
    clean: bool,

    /// Silence all log output
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    if !cli.quiet {
        init_logging();
    }

    // Read once, every render works from this value.
    let config = SiteConfig::from_env();

    let output = build(
        home::home(),
        &config,
        &BuildOptions {
            output_dir: cli.output_dir,
            clean_output_dir: cli.clean,
        },
    )?;

    Ok(output)
}
