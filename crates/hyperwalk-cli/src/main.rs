mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hyperwalk")]
#[command(about = "Render and navigate a hyperlinked JSON API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API entry point (absolute URL); overrides the config file
    #[arg(long, global = true)]
    api_root: Option<String>,

    /// Config file [default: hyperwalk.toml when present]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print scene trees as JSON instead of an outline
    #[arg(long, global = true)]
    json: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Load one location and print it
    Show {
        /// Location to load, absolute or relative to the API root
        location: String,
    },

    /// Print the navigation menu from the entry point
    Menu,

    /// Load a location, then follow drill-down links depth-first
    Walk {
        location: String,

        /// Number of links to follow after the first load
        #[arg(short, long, default_value = "3")]
        follow: usize,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = config::CliConfig::load(cli.config.as_deref(), cli.api_root)?;
    let session = commands::Session::new(&config, cli.json)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match cli.command {
        Commands::Show { location } => rt.block_on(commands::show::run(&session, &location)),
        Commands::Menu => rt.block_on(commands::menu::run(&session)),
        Commands::Walk { location, follow } => {
            rt.block_on(commands::walk::run(&session, &location, follow))
        }
    }
}
