//! Interactive lookup session over stdin/stdout.

use std::future;
use std::io::Write;

use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, BufReader},
    sync::mpsc,
};

use crate::{
    core::config::ConfigOverrides, kards::http::StatsClient, session::Session, Result,
};

use super::{build_session, render::render_text};

pub const HELP: &str = "\
Enter `Name#1234` or a 6-digit player id to search.
  :update   ask the server to recompute the loaded player's stats
  :json     print the current snapshot as JSON
  :help     show this help
  :quit     leave the session
Ctrl-C cancels a running request, or leaves the session at the prompt.";

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Search(String),
    Update,
    Json,
    Help,
    Quit,
    Empty,
}

impl SessionCommand {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "" => SessionCommand::Empty,
            ":update" | ":u" => SessionCommand::Update,
            ":json" | ":j" => SessionCommand::Json,
            ":help" | ":h" | "?" => SessionCommand::Help,
            ":quit" | ":q" | ":exit" => SessionCommand::Quit,
            other => SessionCommand::Search(other.to_string()),
        }
    }
}

/// Resolves on the next interrupt. Never resolves once the sender is gone.
async fn interrupted(interrupts: &mut mpsc::UnboundedReceiver<()>) {
    if interrupts.recv().await.is_none() {
        future::pending::<()>().await;
    }
}

/// Forward every Ctrl-C for the rest of the process into one channel.
fn listen_for_interrupts() -> mpsc::UnboundedReceiver<()> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        loop {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "Ctrl-C handling unavailable");
                break;
            }
            if tx.send(()).is_err() {
                break;
            }
        }
    });
    rx
}

/// Drive a session from `input` until EOF, `:quit`, or an interrupt at the prompt.
///
/// An interrupt while a request is running cancels that request instead.
pub async fn run_interactive<C, R, W>(
    session: &mut Session<C>,
    input: R,
    out: &mut W,
    mut interrupts: mpsc::UnboundedReceiver<()>,
) -> Result<()>
where
    C: StatsClient,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    writeln!(out, "{}", HELP)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let line = tokio::select! {
            biased;
            _ = interrupted(&mut interrupts) => {
                writeln!(out)?;
                break;
            }
            line = lines.next_line() => line?,
        };
        let Some(line) = line else {
            break;
        };

        match SessionCommand::parse(&line) {
            SessionCommand::Empty => continue,
            SessionCommand::Quit => break,
            SessionCommand::Help => writeln!(out, "{}", HELP)?,
            SessionCommand::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(&session.view())?)?
            }
            SessionCommand::Update => {
                let result = session
                    .request_update_until(interrupted(&mut interrupts))
                    .await
                    .map(|_| ());
                match result {
                    Ok(()) => write!(out, "{}", render_text(&session.view()))?,
                    Err(e) => writeln!(out, "{}", e)?,
                }
            }
            SessionCommand::Search(text) => {
                session.set_search_text(text);
                session.submit_until(interrupted(&mut interrupts)).await;
                write!(out, "{}", render_text(&session.view()))?;
            }
        }

        // Ctrl-C that raced a finishing request must not end the session.
        while interrupts.try_recv().is_ok() {}
    }

    Ok(())
}

/// Handle the interactive command
pub async fn handle_interactive(overrides: ConfigOverrides) -> Result<()> {
    let mut session = build_session(overrides)?;
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    run_interactive(&mut session, stdin, &mut stdout, listen_for_interrupts()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(SessionCommand::parse("   "), SessionCommand::Empty);
        assert_eq!(SessionCommand::parse(":update"), SessionCommand::Update);
        assert_eq!(SessionCommand::parse(" :q "), SessionCommand::Quit);
        assert_eq!(SessionCommand::parse(":json"), SessionCommand::Json);
        assert_eq!(SessionCommand::parse("?"), SessionCommand::Help);
        assert_eq!(
            SessionCommand::parse(" FuTBoL#3801 "),
            SessionCommand::Search("FuTBoL#3801".to_string())
        );
    }
}
