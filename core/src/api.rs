//! Async API client: a `TodoClient` paired with a `Transport`.

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo, UserId};

#[derive(Debug, Clone)]
pub struct TodoApi<T> {
    client: TodoClient,
    transport: T,
}

impl<T: Transport> TodoApi<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn user_id(&self) -> UserId {
        self.client.user_id()
    }

    pub async fn get_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let response = self.send(self.client.build_list_todos()).await?;
        self.client.parse_list_todos(response)
    }

    pub async fn get_todo(&self, id: TodoId) -> Result<Todo, ApiError> {
        let response = self.send(self.client.build_get_todo(id)).await?;
        self.client.parse_get_todo(response)
    }

    pub async fn create_todo(&self, input: &CreateTodo) -> Result<Todo, ApiError> {
        let response = self.send(self.client.build_create_todo(input)?).await?;
        self.client.parse_create_todo(response)
    }

    pub async fn update_todo(&self, id: TodoId, input: &UpdateTodo) -> Result<Todo, ApiError> {
        let response = self.send(self.client.build_update_todo(id, input)?).await?;
        self.client.parse_update_todo(response)
    }

    pub async fn delete_todo(&self, id: TodoId) -> Result<(), ApiError> {
        let response = self.send(self.client.build_delete_todo(id)).await?;
        self.client.parse_delete_todo(response)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = %request.method, path = %request.path, "sending request");
        let response = self.transport.execute(request).await?;
        tracing::debug!(status = response.status, "received response");
        Ok(response)
    }
}
