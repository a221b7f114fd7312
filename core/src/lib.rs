//! I/O-free core of the to-do list view.
//!
//! # Overview
//! Builds `HttpRequest` values, parses `HttpResponse` values and keeps the
//! local list state in `TodoListView`. The host executes every network
//! round-trip and hands the outcome back, so the core stays deterministic
//! and testable without a server.
//!
//! # Design
//! - `TodoClient` is stateless and only knows the collection URL.
//! - `TodoListView` turns user actions into `PendingRequest`s and reconciles
//!   local state when the host calls `apply` with the response.
//! - `render` and `events` form the presentation layer: a plain `ViewModel`
//!   plus a `dispatch` function that wires UI events to view actions.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod http;
pub mod render;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use config::ClientConfig;
pub use error::{ApiError, SubmitError, ValidationError};
pub use events::{dispatch, Key, Notifier, UiEvent};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use render::{Row, ViewModel};
pub use types::{CreateTodo, TodoId, TodoItem, UpdateTodo};
pub use view::{InputMode, Operation, PendingRequest, TodoListView};
