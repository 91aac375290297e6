use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub id: Uuid,
    pub project_id: Uuid,
    pub content: String,
    pub commenter: String,
    pub created_at: DateTime<Utc>,
}

impl StatusUpdate {
    pub fn new(new: NewStatusUpdate, created_at: DateTime<Utc>) -> Self {
        StatusUpdate {
            id: Uuid::now_v7(),
            project_id: new.project_id,
            content: new.content,
            commenter: new.commenter,
            created_at,
        }
    }
}

/// Request body for posting an update; the project comes from the route.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdateFields {
    pub content: String,
    pub commenter: String,
}

impl StatusUpdateFields {
    pub fn validate(&self) -> Result<(), String> {
        if self.content.trim().is_empty() {
            return Err("Content is required".to_string());
        }
        if self.commenter.trim().is_empty() {
            return Err("Commenter is required".to_string());
        }
        Ok(())
    }

    pub fn for_project(self, project_id: Uuid) -> NewStatusUpdate {
        NewStatusUpdate {
            project_id,
            content: self.content,
            commenter: self.commenter,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewStatusUpdate {
    pub project_id: Uuid,
    pub content: String,
    pub commenter: String,
}
