//! Folio theme shell
//!
//! Builds one theme store at start-up from file-backed storage and routes
//! commands into it. `folio shell` keeps the store alive across many commands
//! read from stdin, so undo and redo work the way they do in the browser.

mod config;
mod session;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_theme::{FileStorage, StoreOptions, ThemeStore, THEME_CHANGE_EVENT};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::{FolioConfig, CONFIG_FILE};
use crate::session::{Command, Session};

/// Inspect, customize and publish the portfolio theme
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Inspect, customize and publish the portfolio theme")]
#[command(version)]
struct Args {
    /// Config file or directory containing folio.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the storage directory
    #[arg(long, global = true)]
    storage_dir: Option<PathBuf>,

    /// Override the stylesheet written after each change
    #[arg(long, global = true)]
    stylesheet: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: TopCommand,
}

#[derive(Subcommand, Debug)]
enum TopCommand {
    /// Write a default folio.toml
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// Read commands from stdin, one per line, against a single store
    Shell,
    #[command(flatten)]
    Theme(Command),
}

/// One line of `folio shell` input
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Command,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        TopCommand::Init { path } => init_config(&path),
        TopCommand::Shell => {
            let mut session = open_session(args.config, args.storage_dir, args.stylesheet)?;
            run_shell(&mut session)
        }
        TopCommand::Theme(command) => {
            let mut session = open_session(args.config, args.storage_dir, args.stylesheet)?;
            print!("{}", session.execute(&command)?);
            Ok(())
        }
    }
}

/// Build the store from folio.toml plus command-line overrides
fn open_session(
    config_path: Option<PathBuf>,
    storage_dir: Option<PathBuf>,
    stylesheet: Option<PathBuf>,
) -> Result<Session> {
    let config = FolioConfig::load(config_path.as_deref())?;
    let storage_dir = storage_dir.unwrap_or(config.storage.dir);
    let stylesheet = stylesheet.or(config.output.stylesheet);

    let mut store = ThemeStore::initialize(
        FileStorage::new(&storage_dir),
        StoreOptions {
            history_limit: config.history.limit,
            prefers_dark: config.scheme.prefers_dark,
        },
    );
    store.subscribe(|event| {
        tracing::info!(
            "{THEME_CHANGE_EVENT}: {:?} -> {:?}",
            event.cause,
            event.config
        );
    });
    tracing::debug!("storage at {}", storage_dir.display());

    Ok(Session::new(store, stylesheet))
}

fn init_config(path: &std::path::Path) -> Result<()> {
    let target = path.join(CONFIG_FILE);
    if target.exists() {
        anyhow::bail!("{} already exists", target.display());
    }
    fs::create_dir_all(path)?;
    fs::write(&target, FolioConfig::default().to_toml()?)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    println!("Created {}", target.display());
    Ok(())
}

fn run_shell(session: &mut Session) -> Result<()> {
    session.publish()?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => continue,
            ["exit"] | ["quit"] => break,
            _ => {}
        }

        // Bad input is reported and the session keeps going.
        match ShellLine::try_parse_from(words) {
            Ok(parsed) => match session.execute(&parsed.command) {
                Ok(output) => write!(stdout, "{output}")?,
                Err(e) => writeln!(stdout, "error: {e:#}")?,
            },
            Err(e) => write!(stdout, "{}", e.render())?,
        }
        stdout.flush()?;
    }
    Ok(())
}
