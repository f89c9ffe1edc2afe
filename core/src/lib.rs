//! Client core for a single-user todo list backed by a REST API.
//!
//! # Overview
//! The controller owns the canonical list and is the only component that
//! talks to the API. The header composer, the per-item editor, and the
//! list and footer views are headless: they hold local input state, send
//! intents to the controller, and expose plain-data snapshots for a UI
//! layer to draw.
//!
//! # Design
//! - `TodoClient` is stateless and does no I/O: `build_*` produces a request,
//!   `parse_*` consumes a response. A `Transport` performs the exchange.
//! - Local state changes only after the server acknowledges a mutation; the
//!   creation placeholder is the sole optimistic element.
//! - Bulk operations fan out and wait for every outcome; one failure never
//!   cancels its siblings.

pub mod api;
pub mod app;
pub mod banner;
pub mod client;
pub mod composer;
pub mod config;
pub mod controller;
pub mod editor;
pub mod error;
pub mod filter;
pub mod http;
pub mod transport;
pub mod types;
pub mod view;

pub use api::TodoApi;
pub use app::Screen;
pub use banner::{Banner, ErrorMessage, BANNER_TIMEOUT};
pub use client::TodoClient;
pub use composer::{Composer, HeaderView};
pub use config::ClientConfig;
pub use controller::{AppState, BulkOutcome, EditingState, TodoController};
pub use editor::{EditOutcome, TodoItemEditor};
pub use error::{ApiError, ConfigError, TodoError};
pub use filter::{filter_todos, FilterOption};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{ReqwestTransport, Transport};
pub use types::{CreateTodo, Todo, TodoId, TodoSlot, UpdateTodo, UserId, PLACEHOLDER_ID};
pub use view::{footer, list_rows, FooterView, TodoRow};
