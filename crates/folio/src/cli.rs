use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Config;
use crate::render::SectionId;
use crate::source::ContentSource;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about)]
#[command(long_about = "A plain-text portfolio viewer.\n\n\
    Point it at a content directory (texts/*.txt and images/*) and it renders\n\
    a single scrollable portfolio page.\n\n\
    Examples:\n  \
    folio assets                 Open the portfolio (fullscreen)\n  \
    folio assets --windowed      Open in a window\n  \
    folio check assets           Validate the content files\n  \
    folio spec --short           Print the content format quick reference")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Content directory to open
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long, global = false)]
    pub windowed: bool,

    /// Scroll to a section on startup (home, about, projects, experience,
    /// gallery, skills, contact)
    #[arg(long, global = false)]
    pub section: Option<String>,

    /// Fetch content from a base URL instead of a local directory
    #[arg(long, global = false)]
    pub remote: Option<String>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the content files in a directory
    Check {
        /// Content directory to validate
        #[arg(default_value = "assets")]
        dir: PathBuf,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the content file format specification
    Spec {
        /// Print a concise quick-reference card instead of the full spec
        #[arg(long)]
        short: bool,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.theme, defaults.windowed)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Check { dir }) => crate::commands::check::run(&dir),
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Spec { short }) => {
                crate::commands::spec::run(short);
                Ok(())
            }
            Some(Commands::Version) => {
                println!("folio {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
            None => {
                let start_section = match self.section.as_deref() {
                    Some(name) => match SectionId::from_name(name) {
                        Some(id) => Some(id),
                        None => anyhow::bail!("Unknown section: {name}"),
                    },
                    None => None,
                };

                let config = Config::load_or_default();
                let windowed = self.windowed
                    || config
                        .defaults
                        .as_ref()
                        .and_then(|d| d.windowed)
                        .unwrap_or(false);

                let source = if let Some(base) = self.remote {
                    ContentSource::Remote(base)
                } else {
                    let dir = self
                        .dir
                        .or_else(|| {
                            config
                                .defaults
                                .as_ref()
                                .and_then(|d| d.content_dir.clone())
                                .map(PathBuf::from)
                        })
                        .unwrap_or_else(|| PathBuf::from("assets"));
                    if !dir.exists() {
                        anyhow::bail!("Content directory not found: {}", dir.display());
                    }
                    ContentSource::Dir(dir)
                };

                crate::app::run(source, windowed, start_section)
            }
        }
    }
}
