//! Shared REST DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the maintenance server's serializers field-for-field,
//! including its `*_FK` relation names, so serde round-trips stay lossless.
//! Read shapes (nested records) and write shapes (`*Payload`, id lists) are
//! kept separate because the server uses different serializers for each.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Primary key of a server-owned record.
pub type Id = i64;

/// Equipment category lookup record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Id,
    pub name: String,
}

/// Physical environment (room, building, lab) lookup record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub id: Id,
    pub name: String,
}

/// A group membership entry on a user.
///
/// The server sends group names as plain strings (`"Técnico"`), but older
/// endpoints return full group objects; both shapes are accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Group {
    Name(String),
    Record {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<Id>,
        name: String,
    },
}

impl Group {
    /// Group name regardless of wire shape.
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Record { name, .. } => name,
        }
    }
}

/// An application user as returned by `/auth/users/me/` and `/custom-user/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomUser {
    pub id: Id,
    pub name: String,
    pub email: String,
    /// Tax identification number, only present on Djoser user endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nif: Option<String>,
    /// Group memberships; `None` when the endpoint omits the field.
    #[serde(default)]
    pub groups: Option<Vec<Group>>,
}

impl CustomUser {
    /// Iterate over group names, empty when the user carries no groups.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().flatten().map(Group::name)
    }
}

/// A piece of equipment that tasks can be filed against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: Id,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "environment_FK", default)]
    pub environment: Option<Environment>,
    #[serde(rename = "category_FK", default)]
    pub category: Option<Category>,
    /// URL of the server-generated QR code pointing at this equipment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code_image: Option<String>,
}

/// Lifecycle value of a task status event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatusKind {
    Open,
    WaitingResponsible,
    Ongoing,
    Done,
    Finished,
    Cancelled,
}

impl TaskStatusKind {
    /// Every status in lifecycle order.
    pub const ALL: [Self; 6] = [
        Self::Open,
        Self::WaitingResponsible,
        Self::Ongoing,
        Self::Done,
        Self::Finished,
        Self::Cancelled,
    ];

    /// Wire value, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::WaitingResponsible => "WAITING_RESPONSIBLE",
            Self::Ongoing => "ONGOING",
            Self::Done => "DONE",
            Self::Finished => "FINISHED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Parse a wire value; unknown strings yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }

    /// Human-readable label for badges and selects.
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::WaitingResponsible => "Waiting for responsible",
            Self::Ongoing => "Ongoing",
            Self::Done => "Done",
            Self::Finished => "Finished",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Finished and cancelled tasks accept no further work.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Finished | Self::Cancelled)
    }
}

/// An image attached to a status event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatusImage {
    pub id: Id,
    /// Absolute or server-relative image URL.
    pub image: String,
    #[serde(rename = "task_status_FK")]
    pub task_status: Id,
}

/// One status update in a task's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatus {
    pub id: Id,
    pub status: TaskStatusKind,
    /// ISO 8601 timestamp assigned by the server.
    pub status_date: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(rename = "task_FK")]
    pub task: Id,
    #[serde(rename = "user_FK", default)]
    pub user: Option<Id>,
    #[serde(default)]
    pub user_detail: Option<CustomUser>,
    #[serde(default)]
    pub images: Vec<TaskStatusImage>,
}

/// A service ticket as returned by the task read serializer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// ISO 8601 date (`YYYY-MM-DD`), if the requester suggested one.
    #[serde(default)]
    pub suggested_date: Option<String>,
    pub urgency_level: String,
    pub creation_date: String,
    #[serde(default)]
    pub current_status: Option<TaskStatusKind>,
    #[serde(rename = "creator_FK", default)]
    pub creator: Option<CustomUser>,
    #[serde(rename = "equipments_FK", default)]
    pub equipments: Vec<Equipment>,
    #[serde(rename = "responsibles_FK", default)]
    pub responsibles: Vec<CustomUser>,
    #[serde(default)]
    pub status_history: Vec<TaskStatus>,
}

impl Task {
    /// Status to display for this task.
    ///
    /// The list/detail serializers do not always send `current_status`, so
    /// this falls back to the newest history entry by `status_date`.
    pub fn effective_status(&self) -> Option<TaskStatusKind> {
        self.current_status.or_else(|| {
            self.status_history
                .iter()
                .max_by(|a, b| a.status_date.cmp(&b.status_date))
                .map(|entry| entry.status)
        })
    }

    /// Status history ordered newest first.
    pub fn history_newest_first(&self) -> Vec<TaskStatus> {
        let mut history = self.status_history.clone();
        history.sort_by(|a, b| b.status_date.cmp(&a.status_date));
        history
    }
}

/// Urgency values offered by the task form.
///
/// `Task::urgency_level` stays a raw string so values outside this list
/// still round-trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl UrgencyLevel {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

/// Write shape for creating or updating a task.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPayload {
    pub name: String,
    pub description: String,
    pub suggested_date: Option<String>,
    pub urgency_level: String,
    #[serde(rename = "creator_FK")]
    pub creator: Option<Id>,
    #[serde(rename = "equipments_FK")]
    pub equipments: Vec<Id>,
    #[serde(rename = "responsibles_FK")]
    pub responsibles: Vec<Id>,
}

impl TaskPayload {
    /// Build the edit-form payload from an existing task.
    pub fn from_task(task: &Task) -> Self {
        Self {
            name: task.name.clone(),
            description: task.description.clone(),
            suggested_date: task.suggested_date.clone(),
            urgency_level: task.urgency_level.clone(),
            creator: task.creator.as_ref().map(|user| user.id),
            equipments: task.equipments.iter().map(|e| e.id).collect(),
            responsibles: task.responsibles.iter().map(|u| u.id).collect(),
        }
    }
}

/// Write shape for posting a new status event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatusPayload {
    pub status: TaskStatusKind,
    pub comment: Option<String>,
    #[serde(rename = "task_FK")]
    pub task: Id,
    #[serde(rename = "user_FK")]
    pub user: Option<Id>,
}

/// Body of `POST /auth/token/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Response of `POST /auth/token/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub auth_token: String,
}

/// Body of `POST /auth/users/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub nif: String,
    pub password: String,
}
