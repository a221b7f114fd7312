//! Keyboard lines to UI events.
//!
//! A plain line replaces the input text and presses Enter. An empty line
//! presses Enter on whatever the input already holds, which is how an edit
//! started with `/edit` is saved unchanged. Row buttons are reached with
//! `/done N`, `/edit N` and `/delete N`, N being the 1-based row shown on
//! screen. A line starting with `//` is text: the first `/` is dropped, so
//! `//usr/bin cleanup` saves `/usr/bin cleanup`.

use todo_core::{Key, TodoListView, UiEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Events(Vec<UiEvent>),
    Quit,
    /// Not understood; the string is a hint for the user.
    Invalid(String),
}

pub const HELP: &str =
    "type text + Enter to save (// for a leading /), /done N, /edit N, /delete N, /quit";

pub fn parse(line: &str, view: &TodoListView) -> Command {
    let trimmed = line.trim_start();
    if let Some(text) = trimmed.strip_prefix('/').filter(|t| t.starts_with('/')) {
        return type_and_enter(text);
    }
    let Some(rest) = trimmed.trim_end().strip_prefix('/') else {
        return type_and_enter(line);
    };

    let mut words = rest.split_whitespace();
    let verb = words.next().unwrap_or_default();
    if matches!(verb, "quit" | "q") {
        return Command::Quit;
    }

    let button: fn(todo_core::TodoId) -> UiEvent = match verb {
        "done" => UiEvent::CompleteClicked,
        "edit" => UiEvent::EditClicked,
        "delete" | "del" => UiEvent::DeleteClicked,
        _ => return Command::Invalid(format!("unknown command, {HELP}")),
    };

    let Some(arg) = words.next() else {
        return Command::Invalid(format!("/{verb} needs a row number"));
    };
    let row = arg
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| view.items().get(i));
    match row {
        Some(item) => Command::Events(vec![button(item.id.clone())]),
        None => Command::Invalid(format!("no row {arg}")),
    }
}

fn type_and_enter(text: &str) -> Command {
    let mut events = Vec::with_capacity(2);
    if !text.is_empty() {
        events.push(UiEvent::Input(text.to_string()));
    }
    events.push(UiEvent::Key(Key::Enter));
    Command::Events(events)
}
