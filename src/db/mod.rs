pub mod memory;
pub mod seed;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{NewStatusUpdate, Project, ProjectFields, ProjectStatus, StatusUpdate};

pub use memory::MemStorage;

/// Project and status-update collections.
///
/// Reads return owned snapshots. Listings are newest-first by `created_at`.
/// Status updates are append-only: there is no edit or delete.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn list_projects(&self) -> Vec<Project>;

    async fn get_project(&self, id: Uuid) -> Option<Project>;

    /// Assigns a fresh id and the current time.
    async fn create_project(&self, fields: ProjectFields) -> Project;

    /// Full replace of mutable fields. `None` if the project does not exist.
    async fn update_project(&self, id: Uuid, fields: ProjectFields) -> Option<Project>;

    async fn set_project_status(&self, id: Uuid, status: ProjectStatus) -> Option<Project>;

    async fn list_all_status_updates(&self) -> Vec<StatusUpdate>;

    async fn list_status_updates_for_project(&self, project_id: Uuid) -> Vec<StatusUpdate>;

    async fn create_status_update(&self, new: NewStatusUpdate) -> StatusUpdate;
}
