//! Render-ready snapshots of the list and footer.

use crate::controller::AppState;
use crate::filter::FilterOption;
use crate::types::TodoSlot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub slot: TodoSlot,
    /// Show the loader overlay.
    pub loading: bool,
    pub editing: bool,
    /// Editing with the save request still outstanding.
    pub saving: bool,
    pub save_failed: bool,
    /// Checkbox and delete button accept input.
    pub controls_enabled: bool,
}

pub fn list_rows(state: &AppState) -> Vec<TodoRow> {
    let locked = state.editing.is_locked();
    state
        .slots()
        .into_iter()
        .map(|slot| {
            let id = slot.todo().id;
            let pending = slot.is_pending();
            let editing = !pending && state.editing.editing == Some(id);
            let busy = !pending && state.is_busy(id);
            TodoRow {
                loading: pending || busy,
                editing,
                saving: editing && busy,
                save_failed: editing && state.editing.save_failed,
                controls_enabled: !pending && !locked,
                slot,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterView {
    pub items_left: usize,
    pub selected: FilterOption,
    pub filters: [FilterOption; 3],
    pub clear_completed_enabled: bool,
}

impl FooterView {
    pub fn items_left_label(&self) -> String {
        match self.items_left {
            1 => "1 item left".to_string(),
            n => format!("{n} items left"),
        }
    }
}

/// The footer is hidden while the canonical list is empty.
pub fn footer(state: &AppState) -> Option<FooterView> {
    if state.todos.is_empty() {
        return None;
    }
    Some(FooterView {
        items_left: state.active_count(),
        selected: state.filter,
        filters: FilterOption::ALL,
        clear_completed_enabled: state.completed_count() > 0,
    })
}
