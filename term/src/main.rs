//! Terminal host for the to-do list view.
//!
//! # Design
//! One task owns the `TodoListView`. Every request it produces runs on the
//! blocking pool and its outcome comes back over a channel, so keyboard input
//! and completions interleave on that single task and the screen is redrawn
//! after each. Nothing orders overlapping requests; whichever completion
//! arrives last is what the list shows.

mod input;
mod transport;

use std::error::Error;
use std::io::{self, Write};
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use todo_core::{
    dispatch, ApiError, ClientConfig, HttpResponse, Notifier, Operation, PendingRequest,
    TodoClient, TodoListView, ViewModel,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::input::Command;
use crate::transport::UreqTransport;

type Completion = (Operation, Result<HttpResponse, ApiError>);

/// Prints notifications straight to the terminal, ahead of the next frame.
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, message: &str) {
        println!("!! {message}");
    }
}

fn spawn_request(
    transport: &Arc<UreqTransport>,
    done: &mpsc::UnboundedSender<Completion>,
    pending: PendingRequest,
) {
    let transport = Arc::clone(transport);
    let done = done.clone();
    tokio::task::spawn_blocking(move || {
        let outcome = transport.execute(&pending.request);
        // The receiver only goes away on shutdown.
        let _ = done.send((pending.op, outcome));
    });
}

fn draw(view: &TodoListView) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out)?;
    write!(out, "{}", ViewModel::from_view(view))?;
    out.flush()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ClientConfig::from_env();
    let client = TodoClient::new(&config.base_url);
    info!(base_url = %client.base_url(), "starting todo view");

    let transport = Arc::new(UreqTransport::new());
    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<Completion>();
    let mut view = TodoListView::new(client);
    let mut notifier = TerminalNotifier;

    spawn_request(&transport, &done_tx, view.init());
    println!("{}", input::HELP);
    draw(&view)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match input::parse(&line, &view) {
                    Command::Quit => break,
                    Command::Invalid(hint) => println!("?? {hint}"),
                    Command::Events(events) => {
                        for event in events {
                            for pending in dispatch(&mut view, event, &mut notifier) {
                                spawn_request(&transport, &done_tx, pending);
                            }
                        }
                    }
                }
            }
            Some((op, outcome)) = done_rx.recv() => {
                // Failures are already logged by the view.
                let _ = view.apply(op, outcome);
            }
        }
        draw(&view)?;
    }

    info!("bye");
    Ok(())
}
