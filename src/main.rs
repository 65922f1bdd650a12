use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use crate::config::Config;
use crate::controller::Controller;
use crate::editor::ExpenseHelper;
use crate::store::TransactionStore;
use crate::view::TableView;

mod common;
mod config;
mod controller;
mod editor;
mod filter;
mod parser;
mod session;
mod store;
mod transaction;
mod view;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// File of commands to run before the prompt starts, one per line
    script: Option<PathBuf>,

    /// Config file path, defaults to <config dir>/expense-tracker/config.toml
    #[clap(long)]
    config: Option<PathBuf>,

    /// Command history file
    #[clap(long)]
    history: Option<PathBuf>,
}

static PROMPT: &str = "$ ";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli: Cli = Cli::parse();

    let config = match cli.config.clone().or_else(Config::default_path) {
        Some(path) => Config::load_from_file(&path)?,
        None => Config::default()
    };

    let view = TableView::new(config.highlight);
    let mut controller = Controller::new(TransactionStore::new(), view)
        .with_allowed_categories(config.categories.clone());

    if let Some(script) = &cli.script {
        if !run_script(&mut controller, script)? {
            return Ok(());
        }
    }

    let mut rl = Editor::<ExpenseHelper, DefaultHistory>::new()?;
    rl.set_helper(Some(ExpenseHelper::new(PROMPT)));
    let history_file = cli.history.unwrap_or_else(|| config.history_path());
    if rl.load_history(&history_file).is_err() {
        info!("No previous history.");
    }

    println!("{}", controller.sink().render());
    println!("Type 'help' for a list of commands.");

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;
                if !session::run_line(&mut controller, line) {
                    break;
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break
            }
        }
    }

    rl.save_history(&history_file)
        .with_context(|| format!("Unable to save history to {}", history_file.display()))?;

    Ok(())
}

/// Run every command in the script file. Returns false if the script asked to quit.
fn run_script(controller: &mut Controller<TableView>, path: &Path) -> anyhow::Result<bool> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Unable to read script {}", path.display()))?;
    info!("Running commands from {}", path.display());

    for line in content.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        println!("{PROMPT}{line}");
        if !session::run_line(controller, line) {
            return Ok(false);
        }
    }

    Ok(true)
}
