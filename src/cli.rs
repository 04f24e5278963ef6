use std::path::PathBuf;

/// Generates the static icon assets of the site.
#[derive(clap::Parser)]
#[command(version)]
pub struct Cli {
    /// Sets a custom configuration file path
    #[arg(short, long, env = "SITE_ICONS_CONFIG_FILE", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Writes the icons into DIR instead of the configured directory
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Sets the image converter to run
    #[arg(long, value_name = "PROGRAM")]
    pub converter: Option<PathBuf>,

    /// Prints debug output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub subcommand: Cmd,
}

#[derive(clap::Subcommand)]
pub enum Cmd {
    /// Writes apple-touch-icon.png from the embedded image
    AppleTouchIcon,

    /// Builds favicon.ico
    Favicon(favicon::Cli),

    /// Writes apple-touch-icon.png and builds favicon.ico
    All(favicon::Cli),

    /// Prints the active configuration
    Config,
}

pub mod favicon {
    #[derive(clap::Args)]
    pub struct Cli {
        /// Hand-builds a basic favicon without running the converter
        #[arg(long)]
        pub builtin: bool,
    }
}
