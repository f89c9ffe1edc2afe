//! The header: new-todo input and the toggle-all button.

use crate::controller::{AppState, BulkOutcome, TodoController};
use crate::error::TodoError;
use crate::transport::Transport;
use crate::types::Todo;

pub const NEW_TODO_HINT: &str = "What needs to be done?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub value: String,
    pub input_disabled: bool,
    pub input_focused: bool,
    /// The toggle-all button exists only for a non-empty list.
    pub show_toggle_all: bool,
    pub toggle_all_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Composer {
    buffer: String,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn input(&mut self, text: &str) {
        self.buffer = text.to_string();
    }

    /// Creates a todo from the buffer. The buffer is cleared on success and
    /// reset to the trimmed attempt when the server refuses it.
    pub async fn submit<T: Transport>(&mut self, controller: &TodoController<T>) -> Result<Todo, TodoError> {
        let attempted = self.buffer.trim().to_string();
        match controller.create(&attempted).await {
            Ok(todo) => {
                self.buffer.clear();
                Ok(todo)
            }
            Err(err @ TodoError::Api(_)) => {
                self.buffer = attempted;
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Ignored while an inline edit is open or failed.
    pub async fn toggle_all<T: Transport>(
        &self,
        controller: &TodoController<T>,
    ) -> Result<BulkOutcome, TodoError> {
        if controller.editing_state().is_locked() {
            return Err(TodoError::EditLocked);
        }
        Ok(controller.toggle_all().await)
    }

    pub fn view(&self, state: &AppState) -> HeaderView {
        HeaderView {
            value: self.buffer.clone(),
            input_disabled: state.loading,
            input_focused: state.editing.editing.is_none(),
            show_toggle_all: !state.todos.is_empty(),
            toggle_all_active: state.all_completed(),
        }
    }
}
