use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    pub solution_architect: String,
    pub project_lead: String,
    /// Comma-separated names.
    pub team_members: String,
    pub stakeholders: String,
    pub wiki_link: String,
    pub useful_links: String,
    pub modified_date: String,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Build a new record from validated fields, stamping id and creation time.
    pub fn new(fields: ProjectFields, created_at: DateTime<Utc>) -> Self {
        Project {
            id: Uuid::now_v7(),
            title: fields.title,
            project_type: fields.project_type,
            status: fields.status.unwrap_or_default(),
            solution_architect: fields.solution_architect,
            project_lead: fields.project_lead,
            team_members: fields.team_members,
            stakeholders: fields.stakeholders,
            wiki_link: fields.wiki_link,
            useful_links: fields.useful_links,
            modified_date: fields.modified_date,
            created_at,
        }
    }

    /// Replace every mutable field. `id` and `created_at` are never touched;
    /// an omitted status keeps the current one.
    pub fn apply(&mut self, fields: ProjectFields) {
        self.title = fields.title;
        self.project_type = fields.project_type;
        if let Some(status) = fields.status {
            self.status = status;
        }
        self.solution_architect = fields.solution_architect;
        self.project_lead = fields.project_lead;
        self.team_members = fields.team_members;
        self.stakeholders = fields.stakeholders;
        self.wiki_link = fields.wiki_link;
        self.useful_links = fields.useful_links;
        self.modified_date = fields.modified_date;
    }

    pub fn team_member_names(&self) -> Vec<&str> {
        self.team_members
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn is_active(&self) -> bool {
        self.status != ProjectStatus::Archived
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ProjectStatus {
    #[default]
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "On Hold")]
    OnHold,
    Completed,
    Archived,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Archived => "Archived",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProjectType {
    Infrastructure,
    Frontend,
    Backend,
    Mobile,
    Data,
    Security,
    DevOps,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Infrastructure => "Infrastructure",
            ProjectType::Frontend => "Frontend",
            ProjectType::Backend => "Backend",
            ProjectType::Mobile => "Mobile",
            ProjectType::Data => "Data",
            ProjectType::Security => "Security",
            ProjectType::DevOps => "DevOps",
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client-supplied project fields, used for both create and full update.
/// Unknown keys such as `id` or `createdAt` are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFields {
    pub title: String,
    pub project_type: ProjectType,
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    pub solution_architect: String,
    pub project_lead: String,
    #[serde(default)]
    pub team_members: String,
    #[serde(default)]
    pub stakeholders: String,
    #[serde(default)]
    pub wiki_link: String,
    #[serde(default)]
    pub useful_links: String,
    #[serde(default)]
    pub modified_date: String,
}

impl ProjectFields {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".to_string());
        }
        for (name, link) in [("wikiLink", &self.wiki_link), ("usefulLinks", &self.useful_links)] {
            if !link.is_empty() && !(link.starts_with("http://") || link.starts_with("https://")) {
                return Err(format!("Invalid URL format: {name}"));
            }
        }
        Ok(())
    }
}
