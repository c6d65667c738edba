mod cli;
mod config;
mod display;
mod error;
mod italic;
mod models;
mod renderer;
mod source;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::SlantPreset;

#[derive(Parser)]
#[command(name = "italicize")]
#[command(about = "Generate italic masters from upright font sources", long_about = None)]
struct Cli {
    /// Log progress at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate an italic master
    Gen {
        /// Font source (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Path to config file (defaults apply when missing)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Source master name or id (repeatable, defaults to the first master)
        #[arg(short, long)]
        master: Vec<String>,

        /// Build an italic for every upright master
        #[arg(long, conflicts_with = "master")]
        all_masters: bool,

        /// Slant preset
        #[arg(long, value_enum)]
        preset: Option<SlantPreset>,

        /// Custom slant angle in degrees (overrides the preset)
        #[arg(long)]
        angle: Option<f64>,

        /// Stem compensation in percent
        #[arg(long)]
        compensation: Option<f64>,

        /// Keep the upright a, g and f
        #[arg(long)]
        no_alternates: bool,

        /// Skip extremes, cleanup and direction correction
        #[arg(long)]
        no_cleanup: bool,

        /// Round coordinates to the pixel grid
        #[arg(long)]
        snap: bool,

        /// Output file (defaults to <input>.italic.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Dry run - print the report without writing the font
        #[arg(long)]
        dry_run: bool,
    },
    /// Generate italics for every font source in a directory
    Batch {
        /// Directory to search for font sources
        #[arg(short, long)]
        dir: PathBuf,

        /// Path to config file (defaults apply when missing)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write results here instead of next to each source
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Show commands
    Show {
        #[command(subcommand)]
        command: ShowCommands,
    },
}

#[derive(Subcommand)]
enum ShowCommands {
    /// List slant presets
    Presets,
    /// List the masters of a font source
    Masters {
        /// Font source (JSON)
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize italicize.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
        Commands::Gen {
            input,
            config,
            master,
            all_masters,
            preset,
            angle,
            compensation,
            no_alternates,
            no_cleanup,
            snap,
            output,
            dry_run,
        } => cli::gen::run(cli::gen::GenArgs {
            input,
            config,
            masters: master,
            all_masters,
            overrides: cli::gen::Overrides {
                preset,
                angle,
                compensation,
                no_alternates,
                no_cleanup,
                snap,
            },
            output,
            dry_run,
        }),
        Commands::Batch {
            dir,
            config,
            output_dir,
        } => cli::batch::run(dir, config, output_dir),
        Commands::Show { command } => match command {
            ShowCommands::Presets => cli::show::presets(),
            ShowCommands::Masters { input } => cli::show::masters(input),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
