//! Task API Bindings
//!
//! REST client for the task service. Every operation returns a structured
//! [`ApiError`] so call sites can route failures into one notification
//! surface instead of ad-hoc alerts.

use chrono::NaiveDateTime;
use gloo_net::http::{Request, Response};
use serde::Serialize;
use thiserror::Error;

use crate::models::{Task, TaskId, TaskPriority, TaskStatus};

const API_BASE: &str = "/api/tasks";

/// Failure taxonomy for API calls: transport, non-2xx, or parse.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {detail}")]
    Status { status: u16, detail: String },
    #[error("malformed response: {0}")]
    Decode(String),
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn decode(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

// ========================
// Request Payloads
// ========================

#[derive(Serialize)]
pub struct NewTask<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub deadline: Option<NaiveDateTime>,
}

/// Partial update. `None` fields are left untouched by the server;
/// `deadline: Some(None)` clears the deadline.
#[derive(Serialize, Default)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Option<NaiveDateTime>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Sort order for the list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ordering {
    /// Most important work first; the board's default view.
    #[default]
    PriorityDesc,
    /// Alternate order the API supports; not currently surfaced in the UI.
    #[allow(dead_code)]
    DeadlineAsc,
}

impl Ordering {
    pub fn as_query(&self) -> &'static str {
        match self {
            Ordering::PriorityDesc => "-priority",
            Ordering::DeadlineAsc => "deadline",
        }
    }
}

// ========================
// URL Builders
// ========================

pub fn list_url(filter: TaskStatus, ordering: Ordering) -> String {
    format!(
        "{API_BASE}/?status={}&ordering={}",
        filter.as_str(),
        ordering.as_query()
    )
}

fn task_url(id: TaskId) -> String {
    format!("{API_BASE}/{id}")
}

fn generate_subtasks_url(id: TaskId) -> String {
    format!("{API_BASE}/{id}/generate-subtasks/")
}

// ========================
// Response Handling
// ========================

/// Pull the `detail` field out of a JSON error body, falling back to the
/// raw body text.
fn detail_from_body(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value.get("detail").map(|detail| match detail {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
        })
        .unwrap_or_else(|| body.trim().to_string())
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let detail = match response.text().await {
        Ok(body) => detail_from_body(&body),
        Err(_) => String::new(),
    };
    Err(ApiError::Status { status, detail })
}

// ========================
// Task Operations
// ========================

pub async fn list_tasks(filter: TaskStatus, ordering: Ordering) -> Result<Vec<Task>, ApiError> {
    let response = Request::get(&list_url(filter, ordering))
        .send()
        .await
        .map_err(network)?;
    ensure_ok(response).await?.json().await.map_err(decode)
}

pub async fn get_task(id: TaskId) -> Result<Task, ApiError> {
    let response = Request::get(&task_url(id)).send().await.map_err(network)?;
    ensure_ok(response).await?.json().await.map_err(decode)
}

pub async fn create_task(task: &NewTask<'_>) -> Result<Task, ApiError> {
    let response = Request::post(&format!("{API_BASE}/"))
        .json(task)
        .map_err(decode)?
        .send()
        .await
        .map_err(network)?;
    ensure_ok(response).await?.json().await.map_err(decode)
}

pub async fn update_task(id: TaskId, patch: &TaskPatch) -> Result<Task, ApiError> {
    let response = Request::patch(&task_url(id))
        .json(patch)
        .map_err(decode)?
        .send()
        .await
        .map_err(network)?;
    ensure_ok(response).await?.json().await.map_err(decode)
}

pub async fn complete_task(id: TaskId) -> Result<Task, ApiError> {
    let patch = TaskPatch {
        completed: Some(true),
        ..TaskPatch::default()
    };
    update_task(id, &patch).await
}

pub async fn delete_task(id: TaskId) -> Result<(), ApiError> {
    let response = Request::delete(&task_url(id))
        .send()
        .await
        .map_err(network)?;
    ensure_ok(response).await?;
    Ok(())
}

// ========================
// Subtask Operations
// ========================

pub async fn generate_subtasks(id: TaskId) -> Result<(), ApiError> {
    let response = Request::post(&generate_subtasks_url(id))
        .send()
        .await
        .map_err(network)?;
    ensure_ok(response).await?;
    Ok(())
}

/// Marks a subtask done. One-directional: the API only ever receives
/// `completed: true` for subtasks.
pub async fn complete_subtask(subtask_id: u32) -> Result<(), ApiError> {
    let patch = TaskPatch {
        completed: Some(true),
        ..TaskPatch::default()
    };
    let response = Request::patch(&task_url(subtask_id))
        .json(&patch)
        .map_err(decode)?
        .send()
        .await
        .map_err(network)?;
    ensure_ok(response).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_url() {
        assert_eq!(
            list_url(TaskStatus::Upcoming, Ordering::default()),
            "/api/tasks/?status=upcoming&ordering=-priority"
        );
        assert_eq!(
            list_url(TaskStatus::Missed, Ordering::DeadlineAsc),
            "/api/tasks/?status=missed&ordering=deadline"
        );
    }

    #[test]
    fn test_item_urls() {
        assert_eq!(task_url(7), "/api/tasks/7");
        assert_eq!(generate_subtasks_url(7), "/api/tasks/7/generate-subtasks/");
    }

    #[test]
    fn test_status_error_mentions_code() {
        let err = ApiError::Status {
            status: 422,
            detail: "title must not be empty".to_string(),
        };
        assert!(err.to_string().contains("422"));
        assert!(err.to_string().contains("title must not be empty"));
    }

    #[test]
    fn test_detail_from_body() {
        assert_eq!(
            detail_from_body(r#"{"detail": "task not found"}"#),
            "task not found"
        );
        // Validation errors arrive as structured detail
        assert_eq!(
            detail_from_body(r#"{"detail": [{"loc": ["title"]}]}"#),
            r#"[{"loc":["title"]}]"#
        );
        // Non-JSON bodies pass through as-is
        assert_eq!(detail_from_body("Internal Server Error"), "Internal Server Error");
    }

    #[test]
    fn test_complete_patch_is_minimal() {
        let patch = TaskPatch {
            completed: Some(true),
            ..TaskPatch::default()
        };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"completed":true}"#
        );
    }

    #[test]
    fn test_patch_can_clear_deadline() {
        let patch = TaskPatch {
            deadline: Some(None),
            ..TaskPatch::default()
        };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"deadline":null}"#
        );
    }
}
