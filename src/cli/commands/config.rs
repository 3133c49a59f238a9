use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: Option<&Path>) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        force,
    } = cmd
    {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Config::config_file);

        if *init {
            Config::init(&path, *force)?;
            success(format!("Config file: {}", path.display()));
        }

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            print!("{}", cfg.to_yaml()?);
        }

        if !*init && !*print_config {
            info(format!("Config file: {}", path.display()));
        }
    }
    Ok(())
}
