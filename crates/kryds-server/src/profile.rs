use anyhow::Context;
use kryds_config::Config;

use crate::cli::Cli;

/// Config file (or env defaults) with command-line flags on top
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading profile {}", path.display()))?,
        None => Config::new(),
    };

    Ok(apply_overrides(config, cli))
}

fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(dir) = &cli.dir {
        config.storage.data_dir = dir.clone();
    }
    if let Some(static_dir) = &cli.static_dir {
        config.server.static_dir = static_dir.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    config
}
