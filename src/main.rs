use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

mod commands;
mod frontend;
mod game;
mod output;

use crate::frontend::Frontend;
use crate::game::mode::Mode;
use crate::game::round::CategoryFilter;
use crate::game::settings::Settings;
use crate::game::Game;
use crate::output::terminal::TerminalOutput;

#[derive(Parser)]
#[command(name = "rock-quiz", version, about = "Rock and mineral flashcard quiz")]
struct Cli {
    /// Specimen catalog (.json or .csv). Defaults to rocks_data.json in the user data directory
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Game mode: category, easy or hard
    #[arg(long, default_value = "hard")]
    mode: Mode,

    /// Only ask about specimens of this category ("all" for no filter)
    #[arg(long, default_value = "all")]
    category: CategoryFilter,

    /// Image shown for specimens without a picture
    #[arg(long)]
    placeholder: Option<String>,

    /// Seed for specimen selection, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn into_settings(self) -> Settings {
        let defaults = Settings::default();
        Settings {
            catalog_path: self.catalog,
            mode: self.mode,
            category_filter: self.category,
            placeholder_image: self.placeholder.unwrap_or(defaults.placeholder_image),
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let settings = Cli::parse().into_settings();

    let mut game = Game::new(&settings);
    let catalog_path = settings.get_catalog_path()?;
    info!("Loading specimen catalog from {:?}", catalog_path);
    if let Err(e) = game.open_catalog(&catalog_path) {
        error!("{}", e);
    }

    let mut frontend = Frontend::new(game, TerminalOutput::new());
    frontend.begin().context("Could not start the quiz")?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while !frontend.is_over() {
        print!("{}", frontend.prompt());
        io::stdout().flush()?;
        match lines.next() {
            Some(line) => frontend.handle_line(&line?),
            None => break,
        }
    }

    Ok(())
}
