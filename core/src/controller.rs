//! The single owner of list state and the only caller of the API.
//!
//! # Design
//! Local state changes only after the server acknowledges a mutation. The
//! one optimistic element is the placeholder shown while a creation is in
//! flight. State lives behind a mutex that is never held across an `.await`,
//! so every response is applied in one critical section and concurrent
//! operations on different ids interleave freely.
//!
//! Bulk operations fan out one future per id and wait for all of them. A
//! failure surfaces its banner and is reported in the [`BulkOutcome`]
//! without cancelling its siblings; partial success is kept.

use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use futures::future::join_all;

use crate::api::TodoApi;
use crate::banner::{Banner, ErrorMessage};
use crate::error::{ApiError, TodoError};
use crate::filter::{filter_todos, FilterOption};
use crate::transport::Transport;
use crate::types::{CreateTodo, Todo, TodoId, TodoSlot, UpdateTodo};

/// Which item, if any, is in inline-rename mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditingState {
    pub editing: Option<TodoId>,
    /// The last save of `editing` failed; the field stays open.
    pub save_failed: bool,
}

impl EditingState {
    /// Toggle and delete controls across the whole list are disabled while
    /// this holds.
    pub fn is_locked(&self) -> bool {
        self.editing.is_some() || self.save_failed
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Saved records, unique by id, in server order with new ones appended.
    pub todos: Vec<Todo>,
    pub filter: FilterOption,
    /// The in-flight creation, never part of `todos`.
    pub placeholder: Option<Todo>,
    /// A creation is in flight.
    pub loading: bool,
    pub busy: BTreeSet<TodoId>,
    pub editing: EditingState,
    pub banner: Banner,
}

impl AppState {
    fn with_banner(banner: Banner) -> Self {
        Self {
            banner,
            ..Self::default()
        }
    }

    pub fn error_message(&self) -> ErrorMessage {
        self.banner.current()
    }

    pub fn todo(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub fn is_busy(&self, id: TodoId) -> bool {
        self.busy.contains(&id)
    }

    pub fn visible_todos(&self) -> Vec<&Todo> {
        filter_todos(&self.todos, self.filter)
    }

    /// Visible records followed by the placeholder, if any.
    pub fn slots(&self) -> Vec<TodoSlot> {
        self.visible_todos()
            .into_iter()
            .cloned()
            .map(TodoSlot::Saved)
            .chain(self.placeholder.clone().map(TodoSlot::Pending))
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.len() - self.active_count()
    }

    pub fn all_completed(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(|todo| todo.completed)
    }

    fn insert(&mut self, todo: Todo) {
        match self.todos.iter_mut().find(|existing| existing.id == todo.id) {
            Some(existing) => *existing = todo,
            None => self.todos.push(todo),
        }
    }

    fn replace(&mut self, todo: Todo) {
        if let Some(existing) = self.todos.iter_mut().find(|existing| existing.id == todo.id) {
            *existing = todo;
        }
    }
}

/// Per-id results of a fan-out operation.
#[derive(Debug, Default)]
pub struct BulkOutcome {
    pub succeeded: Vec<TodoId>,
    pub failed: Vec<(TodoId, TodoError)>,
}

impl BulkOutcome {
    fn collect<R>(results: impl IntoIterator<Item = (TodoId, Result<R, TodoError>)>) -> Self {
        let mut outcome = Self::default();
        for (id, result) in results {
            match result {
                Ok(_) => outcome.succeeded.push(id),
                Err(err) => outcome.failed.push((id, err)),
            }
        }
        outcome
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct TodoController<T> {
    api: TodoApi<T>,
    state: Mutex<AppState>,
}

impl<T: Transport> TodoController<T> {
    pub fn new(api: TodoApi<T>) -> Self {
        Self::with_banner(api, Banner::default())
    }

    /// Like `new`, with a custom auto-dismiss delay for error banners.
    pub fn with_banner_timeout(api: TodoApi<T>, timeout: Duration) -> Self {
        Self::with_banner(api, Banner::new(timeout))
    }

    fn with_banner(api: TodoApi<T>, banner: Banner) -> Self {
        Self {
            api,
            state: Mutex::new(AppState::with_banner(banner)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, AppState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A copy of the current state for rendering.
    pub fn snapshot(&self) -> AppState {
        self.lock().clone()
    }

    pub fn todo(&self, id: TodoId) -> Option<Todo> {
        self.lock().todo(id).cloned()
    }

    pub fn error_message(&self) -> ErrorMessage {
        self.lock().error_message()
    }

    pub fn dismiss_error(&self) {
        self.lock().banner.dismiss();
    }

    pub fn editing_state(&self) -> EditingState {
        self.lock().editing
    }

    fn surface(&self, message: ErrorMessage, err: &ApiError) {
        tracing::warn!(error = %err, banner = ?message, "request failed");
        self.lock().banner.show(message);
    }

    /// Fetches the whole list for the configured user. Not retried.
    pub async fn load(&self) -> Result<(), TodoError> {
        match self.api.get_todos().await {
            Ok(todos) => {
                tracing::debug!(count = todos.len(), "loaded todos");
                let mut state = self.lock();
                state.todos.clear();
                for todo in todos {
                    state.insert(todo);
                }
                Ok(())
            }
            Err(err) => {
                self.surface(ErrorMessage::LoadFailed, &err);
                self.lock().todos.clear();
                Err(err.into())
            }
        }
    }

    /// Creates a record from `title`, showing a placeholder until the server
    /// answers. Blank titles are refused without a request.
    pub async fn create(&self, title: &str) -> Result<Todo, TodoError> {
        let title = title.trim();
        if title.is_empty() {
            self.lock().banner.show(ErrorMessage::TitleRequired);
            return Err(TodoError::TitleRequired);
        }

        let user_id = self.api.user_id();
        let _pending = self.begin_create(Todo::placeholder(user_id, title))?;

        let input = CreateTodo {
            user_id,
            title: title.to_string(),
            completed: false,
        };
        match self.api.create_todo(&input).await {
            Ok(todo) => {
                self.lock().insert(todo.clone());
                Ok(todo)
            }
            Err(err) => {
                self.surface(ErrorMessage::CreateFailed, &err);
                Err(err.into())
            }
        }
    }

    /// Saves `todo` as a whole and replaces the local record in place on
    /// success.
    pub async fn update(&self, todo: Todo) -> Result<Todo, TodoError> {
        let _busy = self.mark_busy(todo.id)?;
        match self.api.update_todo(todo.id, &UpdateTodo::from(&todo)).await {
            Ok(updated) => {
                self.lock().replace(Todo {
                    id: todo.id,
                    ..updated.clone()
                });
                Ok(updated)
            }
            Err(err) => {
                self.surface(ErrorMessage::UpdateFailed, &err);
                Err(err.into())
            }
        }
    }

    pub async fn delete(&self, id: TodoId) -> Result<(), TodoError> {
        let _busy = self.mark_busy(id)?;
        match self.api.delete_todo(id).await {
            Ok(()) => {
                self.lock().todos.retain(|todo| todo.id != id);
                Ok(())
            }
            Err(err) => {
                self.surface(ErrorMessage::DeleteFailed, &err);
                Err(err.into())
            }
        }
    }

    /// Deletes every completed record concurrently.
    pub async fn delete_completed(&self) -> BulkOutcome {
        let ids: Vec<TodoId> = {
            let state = self.lock();
            state
                .todos
                .iter()
                .filter(|todo| todo.completed)
                .map(|todo| todo.id)
                .collect()
        };
        let results = join_all(ids.iter().map(|&id| self.delete(id))).await;
        BulkOutcome::collect(ids.into_iter().zip(results))
    }

    pub async fn toggle_one(&self, id: TodoId) -> Result<Todo, TodoError> {
        let mut todo = self.todo(id).ok_or(TodoError::UnknownTodo(id))?;
        todo.completed = !todo.completed;
        self.update(todo).await
    }

    /// Completes every incomplete record, or reopens all of them when none is
    /// incomplete.
    pub async fn toggle_all(&self) -> BulkOutcome {
        let ids: Vec<TodoId> = {
            let state = self.lock();
            let any_incomplete = state.todos.iter().any(|todo| !todo.completed);
            state
                .todos
                .iter()
                .filter(|todo| !any_incomplete || !todo.completed)
                .map(|todo| todo.id)
                .collect()
        };
        let results = join_all(ids.iter().map(|&id| self.toggle_one(id))).await;
        BulkOutcome::collect(ids.into_iter().zip(results))
    }

    /// Switches the filter. Any open inline edit is abandoned.
    pub fn set_filter(&self, option: FilterOption) {
        let mut state = self.lock();
        state.filter = option;
        state.editing = EditingState::default();
    }

    /// Opens inline editing for `id` unless another edit holds the lock.
    pub fn start_editing(&self, id: TodoId) -> bool {
        let mut state = self.lock();
        if state.editing.is_locked() || state.todo(id).is_none() {
            return false;
        }
        state.editing = EditingState {
            editing: Some(id),
            save_failed: false,
        };
        true
    }

    /// Closes the edit of `id`. An edit of another item is left alone.
    pub fn close_editing(&self, id: TodoId) {
        let mut state = self.lock();
        if state.editing.editing == Some(id) {
            state.editing = EditingState::default();
        }
    }

    /// Records a failed save of `id`, if `id` is still the item being edited.
    /// Returns whether the edit is still open.
    pub fn mark_save_failed(&self, id: TodoId) -> bool {
        let mut state = self.lock();
        if state.editing.editing != Some(id) {
            return false;
        }
        state.editing.save_failed = true;
        true
    }

    fn begin_create(&self, placeholder: Todo) -> Result<PendingCreateGuard<'_>, TodoError> {
        let mut state = self.lock();
        if state.loading || state.placeholder.is_some() {
            return Err(TodoError::CreateInFlight);
        }
        state.loading = true;
        state.placeholder = Some(placeholder);
        Ok(PendingCreateGuard { state: &self.state })
    }

    fn mark_busy(&self, id: TodoId) -> Result<BusyGuard<'_>, TodoError> {
        if !self.lock().busy.insert(id) {
            return Err(TodoError::Busy(id));
        }
        Ok(BusyGuard {
            state: &self.state,
            id,
        })
    }
}

/// Removes an id from the busy set when the operation ends, however it ends.
struct BusyGuard<'a> {
    state: &'a Mutex<AppState>,
    id: TodoId,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.busy.remove(&self.id);
    }
}

/// Clears the placeholder and loading flag when a creation ends, including
/// when its future is dropped.
struct PendingCreateGuard<'a> {
    state: &'a Mutex<AppState>,
}

impl Drop for PendingCreateGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.placeholder = None;
        state.loading = false;
    }
}
