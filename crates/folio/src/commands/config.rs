use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> anyhow::Result<()> {
    match command {
        ConfigCommands::Show => {
            let config = Config::load()?;
            match Config::config_path() {
                Some(path) => println!("{} {}", "config:".bold(), path.display()),
                None => println!("{}", "config: no user config directory".yellow()),
            }
            let yaml = serde_yaml::to_string(&config)?;
            print!("{yaml}");
            Ok(())
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            println!("{} {key} = {value}", "set".green().bold());
            Ok(())
        }
    }
}
