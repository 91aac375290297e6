use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use super::Storage;
use crate::models::{NewStatusUpdate, Project, ProjectFields, ProjectStatus, StatusUpdate};

/// Process-local store backed by concurrent maps. Every read is a full scan.
pub struct MemStorage {
    projects: DashMap<Uuid, Project>,
    status_updates: DashMap<Uuid, StatusUpdate>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            projects: DashMap::new(),
            status_updates: DashMap::new(),
        }
    }

    /// Insert a fully-formed project, keeping its id and timestamp.
    pub fn insert_project(&self, project: Project) {
        self.projects.insert(project.id, project);
    }

    /// Insert a fully-formed status update, keeping its id and timestamp.
    pub fn insert_status_update(&self, update: StatusUpdate) {
        self.status_updates.insert(update.id, update);
    }

    fn sorted_updates<F>(&self, keep: F) -> Vec<StatusUpdate>
    where
        F: Fn(&StatusUpdate) -> bool,
    {
        let mut updates: Vec<StatusUpdate> = self
            .status_updates
            .iter()
            .filter(|entry| keep(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        updates.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        updates
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn list_projects(&self) -> Vec<Project> {
        let mut projects: Vec<Project> = self
            .projects
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        projects
    }

    async fn get_project(&self, id: Uuid) -> Option<Project> {
        self.projects.get(&id).map(|entry| entry.value().clone())
    }

    async fn create_project(&self, fields: ProjectFields) -> Project {
        let project = Project::new(fields, Utc::now());
        self.projects.insert(project.id, project.clone());
        project
    }

    async fn update_project(&self, id: Uuid, fields: ProjectFields) -> Option<Project> {
        let mut entry = self.projects.get_mut(&id)?;
        entry.apply(fields);
        Some(entry.value().clone())
    }

    async fn set_project_status(&self, id: Uuid, status: ProjectStatus) -> Option<Project> {
        let mut entry = self.projects.get_mut(&id)?;
        entry.status = status;
        Some(entry.value().clone())
    }

    async fn list_all_status_updates(&self) -> Vec<StatusUpdate> {
        self.sorted_updates(|_| true)
    }

    async fn list_status_updates_for_project(&self, project_id: Uuid) -> Vec<StatusUpdate> {
        self.sorted_updates(|update| update.project_id == project_id)
    }

    async fn create_status_update(&self, new: NewStatusUpdate) -> StatusUpdate {
        let update = StatusUpdate::new(new, Utc::now());
        self.status_updates.insert(update.id, update.clone());
        update
    }
}
