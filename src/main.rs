// src/main.rs

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use coursehub::application::commands::{resolve_video, youtube_embed};
use coursehub::application::dto::ResolveVideoDto;
use coursehub::{AppConfig, AppState};

#[derive(Parser)]
#[command(author, version, about = "Resolve lesson video references", long_about = None)]
struct Cli {
    /// Config file (defaults to $COURSEHUB_CONFIG, then the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one video reference and print it as JSON
    Resolve {
        /// Embed markup, a video URL or any lesson video text
        input: String,
    },

    /// Convert a YouTube link to its embed URL; other input is echoed trimmed
    Youtube { input: String },

    /// Resolve every stdin line, printing one JSON object per line
    Batch,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    let state = AppState::from_config(&config);

    match cli.command {
        Commands::Resolve { input } => {
            let reference = resolve_video(&state, ResolveVideoDto { input });
            println!("{}", serde_json::to_string_pretty(&reference)?);
        }
        Commands::Youtube { input } => {
            println!("{}", youtube_embed(&state, ResolveVideoDto { input }));
        }
        Commands::Batch => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let mut count = 0usize;

            for line in stdin.lock().lines() {
                let input = line.context("reading stdin")?;
                let reference = resolve_video(&state, ResolveVideoDto { input });
                writeln!(out, "{}", serde_json::to_string(&reference)?)?;
                count += 1;
            }
            info!("Resolved {} references", count);
        }
    }

    for toast in state.notification_center.active() {
        eprintln!("[{}] {}", toast.kind, toast.message);
    }

    Ok(())
}
