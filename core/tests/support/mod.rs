//! In-memory transport standing in for the todo API.
//!
//! Behaves like the real server, records every request, and can be told to
//! answer 500 for a given method and id. An optional gate holds every
//! request until the test releases it, so in-flight state can be inspected.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;
use todoapp_core::{
    ApiError, CreateTodo, HttpMethod, HttpRequest, HttpResponse, Todo, TodoApi, TodoClient,
    TodoController, TodoId, Transport, UpdateTodo,
};

pub const BASE_URL: &str = "http://fake.test";
pub const USER_ID: i64 = 42;

#[derive(Default)]
struct FakeState {
    todos: Vec<Todo>,
    next_id: TodoId,
    failures: HashSet<(HttpMethod, Option<TodoId>)>,
    requests: Vec<(HttpMethod, String)>,
}

#[derive(Default)]
pub struct FakeTransport {
    state: Mutex<FakeState>,
    gate: Option<Arc<Notify>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0);
        Self {
            state: Mutex::new(FakeState {
                todos,
                next_id,
                ..FakeState::default()
            }),
            gate: None,
        }
    }

    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Answer 500 to `method` on `id` (`None` for collection routes).
    pub fn fail(&self, method: HttpMethod, id: Option<TodoId>) {
        self.state.lock().unwrap().failures.insert((method, id));
    }

    pub fn heal(&self) {
        self.state.lock().unwrap().failures.clear();
    }

    pub fn requests(&self) -> Vec<(HttpMethod, String)> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    pub fn server_todos(&self) -> Vec<Todo> {
        self.state.lock().unwrap().todos.clone()
    }

    fn respond(&self, request: &HttpRequest) -> HttpResponse {
        let mut state = self.state.lock().unwrap();
        state
            .requests
            .push((request.method, request.path.clone()));

        let route = request.path.strip_prefix(BASE_URL).unwrap_or(&request.path);
        let id: Option<TodoId> = route.strip_prefix("/todos/").and_then(|s| s.parse().ok());

        if state.failures.contains(&(request.method, id)) {
            return reply(500, "boom".to_string());
        }

        match (request.method, id) {
            (HttpMethod::Get, None) => reply(200, serde_json::to_string(&state.todos).unwrap()),
            (HttpMethod::Get, Some(id)) => match state.todos.iter().find(|t| t.id == id) {
                Some(todo) => reply(200, serde_json::to_string(todo).unwrap()),
                None => reply(404, String::new()),
            },
            (HttpMethod::Post, _) => {
                let input: CreateTodo =
                    serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
                state.next_id += 1;
                let todo = Todo {
                    id: state.next_id,
                    user_id: input.user_id,
                    title: input.title,
                    completed: input.completed,
                };
                state.todos.push(todo.clone());
                reply(201, serde_json::to_string(&todo).unwrap())
            }
            (HttpMethod::Patch, Some(id)) => {
                let input: UpdateTodo =
                    serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
                match state.todos.iter_mut().find(|t| t.id == id) {
                    Some(todo) => {
                        if let Some(title) = input.title {
                            todo.title = title;
                        }
                        if let Some(completed) = input.completed {
                            todo.completed = completed;
                        }
                        reply(200, serde_json::to_string(todo).unwrap())
                    }
                    None => reply(404, String::new()),
                }
            }
            (HttpMethod::Delete, Some(id)) => {
                let before = state.todos.len();
                state.todos.retain(|t| t.id != id);
                if state.todos.len() < before {
                    reply(204, String::new())
                } else {
                    reply(404, String::new())
                }
            }
            _ => reply(405, String::new()),
        }
    }
}

fn reply(status: u16, body: String) -> HttpResponse {
    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

impl Transport for FakeTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        tokio::task::yield_now().await;
        Ok(self.respond(&request))
    }
}

pub fn todo(id: TodoId, title: &str, completed: bool) -> Todo {
    Todo {
        id,
        user_id: USER_ID,
        title: title.to_string(),
        completed,
    }
}

pub fn controller(transport: &Arc<FakeTransport>) -> TodoController<Arc<FakeTransport>> {
    let client = TodoClient::new(BASE_URL, USER_ID);
    TodoController::new(TodoApi::new(client, Arc::clone(transport)))
}

/// A controller whose list is already loaded from `todos`.
pub async fn loaded(todos: Vec<Todo>) -> (Arc<FakeTransport>, TodoController<Arc<FakeTransport>>) {
    let transport = Arc::new(FakeTransport::with_todos(todos));
    let controller = controller(&transport);
    controller.load().await.unwrap();
    (transport, controller)
}
