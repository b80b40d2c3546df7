//! Frontend Models
//!
//! Data structures mirroring the task API payloads.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub type TaskId = u32;

/// Status buckets the API sorts tasks into. Doubles as the tab filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Upcoming,
    Completed,
    Missed,
}

impl TaskStatus {
    /// Tab order as shown in the UI.
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Upcoming,
        TaskStatus::Completed,
        TaskStatus::Missed,
    ];

    /// Query-parameter value expected by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Upcoming => "upcoming",
            TaskStatus::Completed => "completed",
            TaskStatus::Missed => "missed",
        }
    }

    /// Human-readable tab label.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Upcoming => "Upcoming",
            TaskStatus::Completed => "Completed",
            TaskStatus::Missed => "Missed",
        }
    }
}

/// Server-assigned priority. Display-only in the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 4] = [
        TaskPriority::Low,
        TaskPriority::Medium,
        TaskPriority::High,
        TaskPriority::Critical,
    ];

    /// Wire value; also used as the CSS class suffix on cards and badges.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
            TaskPriority::Critical => "critical",
        }
    }

    /// Parse a `<select>` value back into a priority.
    pub fn parse(value: &str) -> Option<TaskPriority> {
        match value {
            "low" => Some(TaskPriority::Low),
            "medium" => Some(TaskPriority::Medium),
            "high" => Some(TaskPriority::High),
            "critical" => Some(TaskPriority::Critical),
            _ => None,
        }
    }
}

/// Tag attached to a task (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u32,
    pub name: String,
}

/// Child checklist item under a task, optionally server-generated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deadline: Option<NaiveDateTime>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub completed: bool,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

impl Task {
    /// (completed, total) over the subtask list at render time.
    pub fn subtask_progress(&self) -> (usize, usize) {
        let done = self.subtasks.iter().filter(|s| s.completed).count();
        (done, self.subtasks.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_task() {
        let json = r#"{
            "id": 7,
            "title": "Ship release notes",
            "description": null,
            "deadline": "2026-03-04T09:30:00",
            "status": "upcoming",
            "priority": "high",
            "completed": false,
            "tags": [{"id": 1, "name": "work"}],
            "subtasks": [
                {"id": 11, "title": "Draft", "completed": true},
                {"id": 12, "title": "Review", "completed": false}
            ]
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.status, TaskStatus::Upcoming);
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.tags[0].name, "work");
        assert_eq!(task.subtask_progress(), (1, 2));
    }

    #[test]
    fn test_deserialize_minimal_task() {
        // Older API versions omit tags and subtasks entirely
        let json = r#"{
            "id": 1,
            "title": "Water plants",
            "status": "completed",
            "priority": "low",
            "completed": true
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert!(task.description.is_none());
        assert!(task.deadline.is_none());
        assert!(task.tags.is_empty());
        assert_eq!(task.subtask_progress(), (0, 0));
    }

    #[test]
    fn test_priority_parse_round_trip() {
        for priority in TaskPriority::ALL {
            assert_eq!(TaskPriority::parse(priority.as_str()), Some(priority));
        }
        assert_eq!(TaskPriority::parse("urgent"), None);
    }
}
