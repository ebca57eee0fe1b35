//! Task data model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl TaskPriority {
    /// Parse priority from text
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" | "h" => Some(Self::High),
            "medium" | "med" | "m" => Some(Self::Medium),
            "low" | "l" => Some(Self::Low),
            _ => None,
        }
    }

    /// Get the text label
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Sort rank, most urgent first
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Not done yet
    Pending,
    /// Explicitly marked done
    Complete,
}

impl TaskStatus {
    /// Parse status from text
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" | "open" | "todo" => Some(Self::Pending),
            "complete" | "completed" | "done" => Some(Self::Complete),
            _ => None,
        }
    }

    /// Get the text label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Complete => "complete",
        }
    }

    /// Checkbox marker for table output
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Pending => " ",
            Self::Complete => "✓",
        }
    }

    /// Sort rank, pending first
    pub fn rank(&self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Complete => 1,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id, assigned by the store and stable for the task's lifetime
    pub id: u64,

    /// Task title, never empty once persisted
    pub title: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Priority level
    #[serde(default)]
    pub priority: TaskPriority,

    /// Current status
    pub status: TaskStatus,
}

impl Task {
    /// Create a new pending task
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            priority: TaskPriority::default(),
            status: TaskStatus::Pending,
        }
    }

    /// Mark the task as complete
    pub fn complete(&mut self) {
        self.status = TaskStatus::Complete;
    }
}
