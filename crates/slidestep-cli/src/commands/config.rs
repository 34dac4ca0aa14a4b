use std::path::PathBuf;

use clap::Subcommand;
use slidestep_core::SliderConfig;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as JSON
    Show {
        /// Configuration file (defaults to ~/.config/slidestep/slider.toml)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Validate a configuration file
    Check {
        /// Configuration file
        file: PathBuf,
    },
    /// Get a config value
    Get {
        /// Config key (e.g. "total", "touch_threshold")
        key: String,
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show { file } => {
            let config = SliderConfig::load_or_default(file.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Check { file } => {
            SliderConfig::load(&file)?;
            println!("ok");
        }
        ConfigAction::Get { key, file } => {
            let config = SliderConfig::load_or_default(file.as_deref())?;
            println!("{}", config.get(&key)?);
        }
    }
    Ok(())
}
