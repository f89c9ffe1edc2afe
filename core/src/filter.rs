use crate::types::Todo;

/// Which subset of the list is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FilterOption {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterOption {
    pub const ALL: [FilterOption; 3] = [FilterOption::All, FilterOption::Active, FilterOption::Completed];

    pub fn label(self) -> &'static str {
        match self {
            FilterOption::All => "All",
            FilterOption::Active => "Active",
            FilterOption::Completed => "Completed",
        }
    }

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            FilterOption::All => true,
            FilterOption::Active => !todo.completed,
            FilterOption::Completed => todo.completed,
        }
    }
}

pub fn filter_todos(todos: &[Todo], option: FilterOption) -> Vec<&Todo> {
    todos.iter().filter(|todo| option.matches(todo)).collect()
}
