use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use phonebook_app::{Command, Flow, Options, Session, UreqTransport, HELP};
use phonebook_core::{ContactsClient, Phonebook};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let options = Options::parse();

    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    info!(base_url = %options.base_url, "starting phonebook");
    let book = Phonebook::with_notification_delay(
        ContactsClient::new(&options.base_url),
        options.notification_delay(),
    );
    let mut session = Session::new(book, UreqTransport::new(options.timeout()));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    if let Err(e) = session.refresh() {
        eprintln!("{e}");
    }
    write!(stdout, "{}\n> ", session.render())?;
    stdout.flush()?;

    while let Some(line) = lines.next() {
        let line = line.context("reading command")?;
        match line.parse::<Command>() {
            Ok(command) => match session.run_command(command, |prompt| ask(&mut lines, prompt)) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Help) => writeln!(stdout, "{HELP}")?,
                Ok(Flow::Continue) => {}
                Err(e) => eprintln!("{e}"),
            },
            Err(e) => eprintln!("{e}"),
        }
        write!(stdout, "{}\n> ", session.render())?;
        stdout.flush()?;
    }

    info!("bye");
    Ok(())
}

/// Ask a yes/no question on stdin. Anything but `y`/`yes` is a no.
fn ask<B: BufRead>(lines: &mut io::Lines<B>, prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    match lines.next() {
        Some(Ok(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        _ => false,
    }
}
