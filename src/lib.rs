use clap::Parser;
use cli::{Cli, Cmd};
use site_icons_core::appconfig::{self, AppConfig};

pub mod cli;
pub mod commands;

fn setup_logger(verbose: bool) -> eyre::Result<()> {
    use tracing::Level;
    use tracing_subscriber::{
        filter::LevelFilter, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, Registry,
    };

    let level = if verbose { Level::DEBUG } else { Level::INFO };
    Registry::default()
        .with(LevelFilter::from(level))
        .with(
            layer()
                .with_ansi(true)
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init()?;
    Ok(())
}

fn load_config(args: &Cli) -> eyre::Result<AppConfig> {
    let mut config = match &args.config_file {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_or_default(appconfig::DEFAULT_FILE_NAME)?,
    };
    if let Some(output_dir) = &args.output_dir {
        config.output_dir = output_dir.clone();
    }
    if let Some(converter) = &args.converter {
        config.converter = converter.clone();
    }
    Ok(config)
}

pub fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();
    setup_logger(args.verbose)?;
    let config = load_config(&args)?;

    match &args.subcommand {
        Cmd::AppleTouchIcon => commands::apple_touch_icon(&config),
        Cmd::Favicon(favicon_args) => commands::favicon(&config, favicon_args),
        Cmd::All(favicon_args) => commands::all(&config, favicon_args),
        Cmd::Config => commands::config(&config),
    }
}
