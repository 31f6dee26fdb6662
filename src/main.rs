use std::io::{self, BufRead};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use taskpad::cli::Cli;
use taskpad::config::{Paths, Settings};
use taskpad::error::TaskpadError;
use taskpad::list::{NoteList, TaskList};
use taskpad::storage::Storage;
use taskpad::ui::Ui;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => Paths::with_root(dir),
        None => Paths::new()?,
    };
    paths.ensure_dirs()?;

    let settings = Settings::load(&paths.config_file)?;
    if cli.plain {
        colored::control::set_override(false);
    } else {
        settings.color.apply();
    }

    let storage = Storage::new(&paths);
    let (mut tasks, mut notes) = storage.load()?;
    let ui = Ui::new();

    if let Some(line) = cli.one_shot {
        run_line(line.trim(), &mut tasks, &mut notes, &storage, &ui)?;
        return Ok(());
    }

    ui.banner(settings.greeting.as_deref());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        ui.prompt();
        let Some(line) = lines.next() else { break };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match run_line(line, &mut tasks, &mut notes, &storage, &ui) {
            Ok(true) => break,
            Ok(false) => {}
            // A malformed command never ends the session.
            Err(e) => ui.show_error(&e),
        }
    }

    Ok(())
}

/// Parse and execute one line. Returns whether the session should end.
fn run_line(
    line: &str,
    tasks: &mut TaskList,
    notes: &mut NoteList,
    storage: &Storage,
    ui: &Ui,
) -> Result<bool, TaskpadError> {
    let command = taskpad::parse(line)?;
    let exit = command.is_exit();
    let mutated = command.mutates();

    let message = command.execute(tasks, notes)?;
    ui.show(&message);

    if mutated {
        storage.save(tasks, notes)?;
    }

    Ok(exit)
}
