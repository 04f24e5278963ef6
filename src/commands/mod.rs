use crate::cli;
use site_icons_core::{
    appconfig::AppConfig,
    apple_touch,
    converter::ImageMagick,
    favicon::{FaviconBuilder, Outcome},
};

pub fn apple_touch_icon(config: &AppConfig) -> eyre::Result<()> {
    apple_touch::write_apple_touch_icon(&config.output_dir)?;
    Ok(())
}

pub fn favicon(config: &AppConfig, args: &cli::favicon::Cli) -> eyre::Result<()> {
    let converter = ImageMagick::new(&config.converter)?;
    let outcome = FaviconBuilder::from_config(converter, config)
        .builtin(config.favicon.builtin || args.builtin)
        .build()?;
    if outcome == Outcome::Builtin && !config.favicon.builtin && !args.builtin {
        tracing::info!(
            "install {} to render the favicon from its SVG source",
            config.converter.display()
        );
    }
    Ok(())
}

pub fn all(config: &AppConfig, args: &cli::favicon::Cli) -> eyre::Result<()> {
    apple_touch_icon(config)?;
    favicon(config, args)?;
    Ok(())
}

pub fn config(config: &AppConfig) -> eyre::Result<()> {
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
