//! In-memory stand-in for the remote todo API.
//!
//! Ids are assigned by the server starting at 1. Listing is scoped by the
//! `userId` query parameter and ordered by id, so newly created records
//! always come last.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub completed: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    pub user_id: i64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    pub user_id: Option<i64>,
    pub title: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub user_id: Option<i64>,
}

#[derive(Debug, Default)]
pub struct Store {
    next_id: i64,
    todos: BTreeMap<i64, Todo>,
}

impl Store {
    fn insert(&mut self, input: CreateTodo) -> Todo {
        self.next_id += 1;
        let todo = Todo {
            id: self.next_id,
            user_id: input.user_id,
            title: input.title,
            completed: input.completed,
        };
        self.todos.insert(todo.id, todo.clone());
        todo
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    let todos = store
        .todos
        .values()
        .filter(|todo| params.user_id.is_none_or(|user_id| todo.user_id == user_id))
        .cloned()
        .collect();
    Json(todos)
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let todo = db.write().await.insert(input);
    tracing::info!(id = todo.id, user_id = todo.user_id, "created todo");
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Todo>, StatusCode> {
    let store = db.read().await;
    store.todos.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut store = db.write().await;
    let todo = store.todos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(user_id) = input.user_id {
        todo.user_id = user_id;
    }
    if let Some(title) = input.title {
        todo.title = title;
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    tracing::info!(id, completed = todo.completed, "updated todo");
    Ok(Json(todo.clone()))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<i64>) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let removed = store.todos.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    tracing::info!(id = removed.id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}
