//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only the base url and the user every call is scoped
//! to. Each CRUD operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The exchange itself belongs to a [`Transport`](crate::transport::Transport).

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo, UserId};

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
    user_id: UserId,
}

impl TodoClient {
    pub fn new(base_url: &str, user_id: UserId) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos?userId={}", self.base_url, self.user_id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_todo(&self, id: TodoId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/todos", self.base_url),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_update_todo(&self, id: TodoId, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Patch,
            path: format!("{}/todos/{id}", self.base_url),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_delete_todo(&self, id: TodoId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/todos/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, &[200])?;
        from_json(&response.body)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, &[200])?;
        from_json(&response.body)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, &[200, 201])?;
        from_json(&response.body)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, &[200])?;
        from_json(&response.body)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, &[200, 204])?;
        Ok(())
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json<T: serde::Serialize>(input: &T) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: &[u16]) -> Result<(), ApiError> {
    if expected.contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000", 42)
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_todos_is_scoped_to_user() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/todos?userId=42");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_todo_produces_correct_request() {
        let input = CreateTodo {
            user_id: 42,
            title: "Buy milk".to_string(),
            completed: false,
        };
        let req = client().build_create_todo(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/todos");
        assert_eq!(req.headers, json_headers());
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["userId"], 42);
        assert_eq!(body["title"], "Buy milk");
        assert_eq!(body["completed"], false);
    }

    #[test]
    fn build_update_todo_omits_absent_fields() {
        let input = UpdateTodo {
            completed: Some(true),
            ..UpdateTodo::default()
        };
        let req = client().build_update_todo(7, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.path, "http://localhost:3000/todos/7");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["completed"], true);
        assert!(body.get("title").is_none());
        assert!(body.get("userId").is_none());
    }

    #[test]
    fn build_delete_todo_produces_correct_request() {
        let req = client().build_delete_todo(7);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/todos/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:3000/", 1);
        assert_eq!(client.build_get_todo(3).path, "http://localhost:3000/todos/3");
    }

    #[test]
    fn parse_create_todo_accepts_ok_and_created() {
        let body = r#"{"id":5,"userId":42,"title":"New","completed":false}"#;
        assert_eq!(client().parse_create_todo(response(201, body)).unwrap().id, 5);
        assert_eq!(client().parse_create_todo(response(200, body)).unwrap().id, 5);
    }

    #[test]
    fn parse_create_todo_wrong_status() {
        let err = client()
            .parse_create_todo(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_delete_todo_accepts_no_content_and_ok() {
        assert!(client().parse_delete_todo(response(204, "")).is_ok());
        assert!(client().parse_delete_todo(response(200, "1")).is_ok());
    }

    #[test]
    fn parse_delete_todo_not_found() {
        let err = client().parse_delete_todo(response(404, "")).unwrap_err();
        assert_eq!(err, ApiError::NotFound);
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let err = client().parse_list_todos(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
