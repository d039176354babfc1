use anyhow::Context;
use clap::Parser;
use log::info;
use pinhole_rasterizer::app;
use pinhole_rasterizer::io::cli::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let config = Cli::parse()
        .into_config()
        .context("failed to prepare scene configuration")?;

    let written = app::run(&config).context("rendering failed")?;
    for path in &written {
        info!("Wrote {}", path);
    }
    Ok(())
}
