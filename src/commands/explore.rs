//! `senda explore` command - interactive path exploration
//!
//! Reads selection commands from stdin, one batch per line, applies
//! them, and prints a fresh scene frame after each batch. The initial
//! frame is printed before any input is read. Ctrl-C, `quit`, `exit`,
//! or EOF ends the session.

use std::io::{self, BufRead};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use senda_core::controller::{Selection, SelectionCommand, TraversalController};
use senda_core::error::{Result, SendaError};
use senda_core::graph::Graph;
use senda_core::scene::Scene;

use crate::cli::Cli;
use crate::commands::scene::output_scene;

/// Execute the explore command
pub fn execute(cli: &Cli, graph: &Graph, selection: Selection) -> Result<()> {
    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let interrupted = Arc::clone(&interrupted);
        ctrlc::set_handler(move || {
            interrupted.store(true, Ordering::SeqCst);
        })
        .map_err(|e| SendaError::Other(format!("failed to install signal handler: {}", e)))?;
    }

    let mut controller = TraversalController::new(selection);
    controller.refresh(graph);
    output_scene(cli, &Scene::compose(graph, &controller))?;

    // The interrupt flag is checked between lines, so a Ctrl-C during a
    // blocking read takes effect once the next line (or EOF) arrives.
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if interrupted.load(Ordering::SeqCst) {
            tracing::debug!("interrupted, leaving explore loop");
            break;
        }

        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => break,
            Err(e) => return Err(e.into()),
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if matches!(trimmed, "quit" | "exit" | "q") {
            break;
        }

        for token in trimmed.split_whitespace() {
            match parse_command(token) {
                Some(command) => controller.apply(command),
                None => {
                    if !cli.quiet {
                        eprintln!("unknown command: {}", token);
                    }
                }
            }
        }

        controller.refresh(graph);
        output_scene(cli, &Scene::compose(graph, &controller))?;
    }

    Ok(())
}

/// Map an input token to a selection command. The arrow-key names are
/// aliases so sessions driven from a key-event bridge read naturally.
fn parse_command(token: &str) -> Option<SelectionCommand> {
    match token {
        "src+" | "right" => Some(SelectionCommand::RaiseSource),
        "src-" | "left" => Some(SelectionCommand::LowerSource),
        "dst+" | "up" => Some(SelectionCommand::RaiseDest),
        "dst-" | "down" => Some(SelectionCommand::LowerDest),
        "toggle" | "space" => Some(SelectionCommand::ToggleAlgorithm),
        _ => None,
    }
}
