use anyhow::Context;
use clap::Parser;
use relm4::prelude::*;
use spindle_gtk::config::{self, DemoMode};
use spindle_gtk::gui::app::AppModel;
use spindle_gtk::sys::runtime;
use std::path::PathBuf;

/// Demo window for the spindle wheel pickers.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Which wheels to show: both, circular or finite
    #[arg(long)]
    mode: Option<DemoMode>,

    /// Config file to load and watch
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the default config file if none exists, then exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => config::get_config_path()?,
    };

    if cli.write_config {
        config::write_default_config(&config_path)
            .with_context(|| format!("writing {}", config_path.display()))?;
        println!("{}", config_path.display());
        return Ok(());
    }

    let mut config = config::load_or_default(&config_path);
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    log::debug!("Starting in {} mode", config.mode);

    let (tx, rx) = async_channel::bounded(32);
    runtime::start_background_services(tx, config_path.clone());

    let app = RelmApp::new("org.spindle.demo").with_args(Vec::new());
    app.run::<AppModel>((config, config_path, rx));

    Ok(())
}
