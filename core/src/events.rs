//! UI events and their wiring to view actions.

use tracing::{error, warn};

use crate::error::SubmitError;
use crate::types::TodoId;
use crate::view::{PendingRequest, TodoListView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The input field now holds this text.
    Input(String),
    /// A key was pressed while the input field had focus.
    Key(Key),
    SubmitClicked,
    CompleteClicked(TodoId),
    EditClicked(TodoId),
    DeleteClicked(TodoId),
}

/// Blocking, user-facing notification (an alert box, a terminal line).
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Route one UI event to the view. Returns the requests the host must run.
pub fn dispatch(
    view: &mut TodoListView,
    event: UiEvent,
    notifier: &mut dyn Notifier,
) -> Vec<PendingRequest> {
    match event {
        UiEvent::Input(text) => {
            view.set_draft(text);
            Vec::new()
        }
        UiEvent::Key(Key::Enter) | UiEvent::SubmitClicked => match view.submit() {
            Ok(pending) => vec![pending],
            Err(SubmitError::Validation(err)) => {
                notifier.notify(&err.to_string());
                Vec::new()
            }
            Err(SubmitError::Api(err)) => {
                error!(error = %err.report(), "could not build save request");
                Vec::new()
            }
        },
        UiEvent::CompleteClicked(id) => {
            let Some(current) = view.find(&id).map(|item| item.completed) else {
                warn!(%id, "complete clicked for unknown todo");
                return Vec::new();
            };
            match view.toggle_complete(&id, current) {
                Ok(pending) => vec![pending],
                Err(err) => {
                    error!(%id, error = %err.report(), "could not build toggle request");
                    Vec::new()
                }
            }
        }
        UiEvent::EditClicked(id) => {
            if !view.edit_by_id(&id) {
                warn!(%id, "edit clicked for unknown todo");
            }
            Vec::new()
        }
        UiEvent::DeleteClicked(id) => vec![view.delete(&id)],
    }
}
