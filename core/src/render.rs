//! Presentation model of the to-do list.
//!
//! `ViewModel` is a snapshot of what the screen shows: heading, input field,
//! submit button and one row per item. Hosts draw it however they like; the
//! `Display` impl is the terminal frame.

use std::fmt;

use crate::types::TodoId;
use crate::view::{InputMode, TodoListView};

pub const HEADING: &str = "To-Do List";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub heading: &'static str,
    pub input: String,
    pub submit_label: &'static str,
    pub rows: Vec<Row>,
}

impl ViewModel {
    pub fn from_view(view: &TodoListView) -> Self {
        let submit_label = match view.mode() {
            InputMode::Creating => "Add",
            InputMode::Editing(_) => "Update",
        };
        Self {
            heading: HEADING,
            input: view.draft().to_string(),
            submit_label,
            rows: view
                .items()
                .iter()
                .map(|item| Row {
                    id: item.id.clone(),
                    text: item.text.clone(),
                    completed: item.completed,
                })
                .collect(),
        }
    }
}

impl fmt::Display for ViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        writeln!(f, "> {}  [{}]", self.input, self.submit_label)?;
        for (n, row) in self.rows.iter().enumerate() {
            let mark = if row.completed { 'x' } else { ' ' };
            writeln!(f, "{:>3}. [{mark}] {}", n + 1, row.text)?;
        }
        Ok(())
    }
}
