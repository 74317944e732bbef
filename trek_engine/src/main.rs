#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Trek **
//! A race across campus to gather your things before the exam starts

use trek_engine::data_paths::data_path;
use trek_engine::style::GameStyle;
use trek_engine::{TREK_VERSION, load_session, run_repl};

use anyhow::{Context, Result};
use colored::Colorize;
use textwrap::fill;

use log::{info, warn};

use std::fs;
use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading Trek session (v{TREK_VERSION})...");
    let mut session = load_session().context("while loading Trek session")?;
    info!("Trek session loaded successfully.");

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush().context("while clearing the screen")?;
    info!("Starting the game!");

    println!("{:^84}", "TREK: FINALS MORNING".bright_yellow().underline());
    println!(
        "\nYou have {} moves to get everything to the exam centre.\n",
        session.config.move_budget.to_string().bold().bright_blue()
    );

    let intro_path = data_path("intro.txt");
    match fs::read_to_string(&intro_path) {
        Ok(introduction) => {
            println!("{}\n", fill(introduction.trim(), textwrap::termwidth()).description_style());
        },
        Err(err) => warn!("no introduction shown, couldn't read '{}': {err}", intro_path.display()),
    }

    run_repl(&mut session)
}
