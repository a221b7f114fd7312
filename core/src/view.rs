//! Local state of the to-do list and the actions that mutate it.
//!
//! # Design
//! `TodoListView` owns three things: the item list, the draft in the input
//! field, and the item being edited, if any. Actions never perform I/O; they
//! return a `PendingRequest` tagged with the `Operation` that produced it.
//! When the host has a response it calls [`TodoListView::apply`], which
//! reconciles local state. Completions may arrive in any order and are applied
//! as they come, so the last response to land wins. Nothing prevents the same
//! submission from being issued twice.

use tracing::{debug, error};

use crate::client::TodoClient;
use crate::error::{ApiError, SubmitError};
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{validate_text, CreateTodo, TodoId, TodoItem, UpdateTodo};

/// State of the input region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode<'a> {
    Creating,
    Editing(&'a TodoItem),
}

/// What a request was issued for; decides how its response is reconciled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    LoadAll,
    Create,
    Update { id: TodoId },
    ToggleComplete { id: TodoId },
    Delete { id: TodoId },
}

/// A request the host must execute, paired with its operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub op: Operation,
    pub request: HttpRequest,
}

#[derive(Debug, Clone)]
pub struct TodoListView {
    client: TodoClient,
    items: Vec<TodoItem>,
    draft: String,
    editing: Option<TodoItem>,
}

impl TodoListView {
    pub fn new(client: TodoClient) -> Self {
        Self {
            client,
            items: Vec::new(),
            draft: String::new(),
            editing: None,
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn editing(&self) -> Option<&TodoItem> {
        self.editing.as_ref()
    }

    pub fn mode(&self) -> InputMode<'_> {
        match &self.editing {
            Some(item) => InputMode::Editing(item),
            None => InputMode::Creating,
        }
    }

    pub fn find(&self, id: &TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Request for the full list, issued once when the view first renders.
    pub fn init(&self) -> PendingRequest {
        PendingRequest {
            op: Operation::LoadAll,
            request: self.client.build_list(),
        }
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Create or update depending on the input mode.
    ///
    /// A draft shorter than the minimum never yields a request. The draft is
    /// sent as typed, without trimming.
    pub fn submit(&self) -> Result<PendingRequest, SubmitError> {
        validate_text(&self.draft)?;
        let pending = match &self.editing {
            Some(target) => PendingRequest {
                op: Operation::Update {
                    id: target.id.clone(),
                },
                request: self
                    .client
                    .build_update(&target.id, &UpdateTodo::text(self.draft.clone()))?,
            },
            None => PendingRequest {
                op: Operation::Create,
                request: self.client.build_create(&CreateTodo {
                    text: self.draft.clone(),
                })?,
            },
        };
        Ok(pending)
    }

    /// Switch the input to editing `item`, copying its text into the draft.
    pub fn edit(&mut self, item: &TodoItem) {
        self.draft = item.text.clone();
        self.editing = Some(item.clone());
    }

    /// Same as [`edit`](Self::edit) for an item looked up by id. Returns
    /// `false` if no such item is in the list.
    pub fn edit_by_id(&mut self, id: &TodoId) -> bool {
        match self.find(id).cloned() {
            Some(item) => {
                self.edit(&item);
                true
            }
            None => false,
        }
    }

    pub fn delete(&self, id: &TodoId) -> PendingRequest {
        PendingRequest {
            op: Operation::Delete { id: id.clone() },
            request: self.client.build_delete(id),
        }
    }

    pub fn toggle_complete(&self, id: &TodoId, current: bool) -> Result<PendingRequest, ApiError> {
        Ok(PendingRequest {
            op: Operation::ToggleComplete { id: id.clone() },
            request: self
                .client
                .build_update(id, &UpdateTodo::completed(!current))?,
        })
    }

    /// Reconcile local state with the outcome of a request.
    ///
    /// Failures are logged and returned; state is left untouched, including
    /// the draft.
    pub fn apply(
        &mut self,
        op: Operation,
        outcome: Result<HttpResponse, ApiError>,
    ) -> Result<(), ApiError> {
        let result = outcome.and_then(|response| self.reconcile(&op, response));
        if let Err(err) = &result {
            error!(operation = ?op, error = %err.report(), "todo request failed");
        }
        result
    }

    fn reconcile(&mut self, op: &Operation, response: HttpResponse) -> Result<(), ApiError> {
        match op {
            Operation::LoadAll => {
                self.items = self.client.parse_list(response)?;
                debug!(count = self.items.len(), "loaded todos");
            }
            Operation::Create => {
                let created = self.client.parse_create(response)?;
                debug!(id = %created.id, "created todo");
                self.items.push(created);
                self.draft.clear();
            }
            Operation::Update { id } => {
                let updated = self.client.parse_update(response)?;
                debug!(%id, "updated todo");
                for item in self.items.iter_mut().filter(|item| &item.id == id) {
                    *item = updated.clone();
                }
                self.editing = None;
                self.draft.clear();
            }
            Operation::ToggleComplete { id } => {
                let updated = self.client.parse_update(response)?;
                debug!(%id, completed = updated.completed, "toggled todo");
                for item in self.items.iter_mut().filter(|item| &item.id == id) {
                    item.completed = updated.completed;
                }
            }
            Operation::Delete { id } => {
                self.client.parse_delete(response)?;
                debug!(%id, "deleted todo");
                self.items.retain(|item| &item.id != id);
            }
        }
        Ok(())
    }
}
