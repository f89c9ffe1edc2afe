//! Inline editing of a single record.
//!
//! The editor owns only the text buffer and focus. Whether the item is in
//! edit mode, and whether its last save failed, lives in the controller so
//! that at most one item can be edited at a time.

use crate::controller::TodoController;
use crate::error::TodoError;
use crate::transport::Transport;
use crate::types::{Todo, TodoId};

/// Hint shown in the empty edit field.
pub const EDIT_HINT: &str = "Empty todo will be deleted";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The item was not in edit mode; nothing happened.
    NotEditing,
    /// The trimmed buffer matched the saved title; no request was made.
    Unchanged,
    Renamed(Todo),
    /// The buffer was emptied and the record deleted.
    Deleted,
}

#[derive(Debug, Clone)]
pub struct TodoItemEditor {
    id: TodoId,
    buffer: String,
    focused: bool,
}

impl TodoItemEditor {
    pub fn new(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            buffer: todo.title.clone(),
            focused: false,
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Focus only counts while this item is still the one being edited, so an
    /// edit closed elsewhere (a filter switch) drops it.
    pub fn is_focused<T: Transport>(&self, controller: &TodoController<T>) -> bool {
        self.focused && self.is_editing(controller)
    }

    pub fn is_editing<T: Transport>(&self, controller: &TodoController<T>) -> bool {
        controller.editing_state().editing == Some(self.id)
    }

    /// Enters edit mode, seeded with the saved title. Refused while another
    /// edit is open or failed.
    pub fn double_click<T: Transport>(&mut self, controller: &TodoController<T>) -> bool {
        if !controller.start_editing(self.id) {
            return false;
        }
        if let Some(todo) = controller.todo(self.id) {
            self.buffer = todo.title;
        }
        self.focused = true;
        true
    }

    pub fn input(&mut self, text: &str) {
        self.buffer = text.to_string();
    }

    /// Saves the buffer: unchanged closes, empty deletes, anything else
    /// renames. A failed request keeps the field open and focused.
    pub async fn submit<T: Transport>(
        &mut self,
        controller: &TodoController<T>,
    ) -> Result<EditOutcome, TodoError> {
        if !self.is_editing(controller) {
            self.reset(controller);
            return Ok(EditOutcome::NotEditing);
        }
        let Some(current) = controller.todo(self.id) else {
            controller.close_editing(self.id);
            self.focused = false;
            return Err(TodoError::UnknownTodo(self.id));
        };

        let draft = self.buffer.trim().to_string();
        if draft == current.title.trim() {
            controller.close_editing(self.id);
            self.buffer = draft;
            self.focused = false;
            return Ok(EditOutcome::Unchanged);
        }

        if draft.is_empty() {
            return match controller.delete(self.id).await {
                Ok(()) => {
                    controller.close_editing(self.id);
                    self.focused = false;
                    Ok(EditOutcome::Deleted)
                }
                Err(err) => {
                    self.keep_open(controller);
                    Err(err)
                }
            };
        }

        let renamed = Todo {
            title: draft.clone(),
            ..current
        };
        match controller.update(renamed).await {
            Ok(todo) => {
                controller.close_editing(self.id);
                self.buffer = draft;
                self.focused = false;
                Ok(EditOutcome::Renamed(todo))
            }
            Err(err) => {
                self.keep_open(controller);
                Err(err)
            }
        }
    }

    /// Leaving the field saves it.
    pub async fn blur<T: Transport>(
        &mut self,
        controller: &TodoController<T>,
    ) -> Result<EditOutcome, TodoError> {
        self.focused = false;
        self.submit(controller).await
    }

    /// Leaves edit mode, discarding the buffer and any failed save.
    pub fn escape<T: Transport>(&mut self, controller: &TodoController<T>) {
        if !self.is_editing(controller) {
            return;
        }
        controller.close_editing(self.id);
        self.reset(controller);
    }

    pub async fn toggle<T: Transport>(&self, controller: &TodoController<T>) -> Result<Todo, TodoError> {
        if controller.editing_state().is_locked() {
            return Err(TodoError::EditLocked);
        }
        controller.toggle_one(self.id).await
    }

    pub async fn remove<T: Transport>(&self, controller: &TodoController<T>) -> Result<(), TodoError> {
        if controller.editing_state().is_locked() {
            return Err(TodoError::EditLocked);
        }
        controller.delete(self.id).await
    }

    /// After a failed save the field stays open and refocused, unless the
    /// edit was closed while the request was in flight.
    fn keep_open<T: Transport>(&mut self, controller: &TodoController<T>) {
        if controller.mark_save_failed(self.id) {
            self.focused = true;
        } else {
            self.reset(controller);
        }
    }

    /// Drops the draft and focus, back to the saved title.
    fn reset<T: Transport>(&mut self, controller: &TodoController<T>) {
        if let Some(todo) = controller.todo(self.id) {
            self.buffer = todo.title.trim().to_string();
        }
        self.focused = false;
    }
}
