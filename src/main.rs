mod app;
mod config;
mod game;
mod theme;
mod themes;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chainword", version, about = "Word chain puzzle for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start word for this session (overrides the config)
    #[arg(long)]
    start: Option<String>,

    /// Target word for this session (overrides the config)
    #[arg(long)]
    target: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the config file in $EDITOR (default: nvim)
    Config,
    /// Manage color themes
    Themes {
        #[command(subcommand)]
        command: ThemeCommands,
    },
}

#[derive(Subcommand)]
enum ThemeCommands {
    /// Write the built-in themes into the theme directory for editing
    Install,
    /// List available themes
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        match command {
            Commands::Config => return config::open_config_in_editor(),
            Commands::Themes { command } => match command {
                ThemeCommands::Install => {
                    let cfg = config::load_config()?;
                    let (dir, count) = themes::install_builtin_themes(&cfg)?;
                    println!("Wrote {count} themes into {}", dir.display());
                    return Ok(());
                }
                ThemeCommands::List => {
                    let cfg = config::load_config()?;
                    let manager = theme::ThemeManager::load(&cfg)?;
                    for name in manager.theme_names() {
                        println!("{name}");
                    }
                    return Ok(());
                }
            },
        }
    }

    let cfg = config::load_config()?;
    app::run_app(cfg, cli.start, cli.target)
}
