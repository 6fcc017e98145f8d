// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use clap::{Parser, Subcommand};
use lualearn_cli::commands;
use lualearn_cli::config::Config;
use lualearn_cli::render::Presentation;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lualearn")]
#[command(author = "Maravilla Labs")]
#[command(version)]
#[command(about = "Lua tutorial lessons with a simulated code editor", long_about = None)]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Print JSON instead of text panels
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a snippet file through the editor and print its output
    Run {
        /// Lua file to run, or "-" for stdin
        file: String,
        /// Print only the output panel, not the code
        #[arg(long)]
        output_only: bool,
    },
    /// List the bundled lessons
    Lessons,
    /// Print a lesson's code samples
    Show {
        /// Lesson slug (see `lualearn lessons`)
        lesson: String,
        /// Only this sample (numbered from 1)
        #[arg(short, long)]
        sample: Option<usize>,
        /// Run each sample and include its output
        #[arg(short, long)]
        run: bool,
    },
    /// Syntax-check Lua files, or every bundled sample when none are given
    Check {
        /// Files to check
        files: Vec<PathBuf>,
    },
    /// Write a practice workspace with every lesson sample
    Init {
        /// Target directory (defaults to the current directory)
        dir: Option<PathBuf>,
    },
    /// Re-run a snippet file every time it is saved
    Watch {
        /// Lua file to watch
        file: String,
        /// Print only the output panel, not the code
        #[arg(long)]
        output_only: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with the specified log level
    let filter = EnvFilter::try_new(&cli.log_level)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;
    let presentation = Presentation::new(&config, cli.json, cli.no_color);

    match cli.command {
        Commands::Run { file, output_only } => {
            commands::run::run(&file, output_only, &config, &presentation)
        }
        Commands::Lessons => commands::lessons::run(&presentation),
        Commands::Show { lesson, sample, run } => {
            commands::show::run(&lesson, sample, run, &presentation)
        }
        Commands::Check { files } => commands::check::run(&files, &presentation),
        Commands::Init { dir } => commands::init::run(dir, &config),
        Commands::Watch { file, output_only } => {
            commands::watch::run(&file, output_only, &config, &presentation).await
        }
    }
}
