//! Monthly digest composition.
//!
//! [`compose`] selects the trailing window of status updates, groups them per
//! project and produces a [`Report`]. The report's `Display` output is the
//! structured text handed to the text generator.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Duration, Local, Utc};
use uuid::Uuid;

use crate::models::{Project, ProjectStatus, ProjectType, StatusUpdate};

pub const WINDOW_DAYS: i64 = 30;
pub const MAX_UPDATES_PER_PROJECT: usize = 5;

#[derive(Debug, Clone)]
pub struct Report {
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
    /// Projects whose status is not Archived.
    pub active_projects: usize,
    /// Every update inside the window, across all projects.
    pub update_count: usize,
    pub sections: Vec<ProjectSection>,
}

#[derive(Debug, Clone)]
pub struct ProjectSection {
    pub project_id: Uuid,
    pub title: String,
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    pub solution_architect: String,
    pub project_lead: String,
    pub team_members: Vec<String>,
    /// Newest first, at most [`MAX_UPDATES_PER_PROJECT`].
    pub updates: Vec<StatusUpdate>,
}

pub fn window_start(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(WINDOW_DAYS)
}

/// Build the report for the window ending at `now`.
///
/// Sections follow the order of `projects`; every project gets one, including
/// those without recent updates. Input update order does not matter.
pub fn compose(projects: &[Project], updates: &[StatusUpdate], now: DateTime<Utc>) -> Report {
    let start = window_start(now);

    let mut recent: Vec<&StatusUpdate> = updates.iter().filter(|u| u.created_at >= start).collect();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

    let mut by_project: HashMap<Uuid, Vec<&StatusUpdate>> = HashMap::new();
    for update in &recent {
        by_project.entry(update.project_id).or_default().push(*update);
    }

    let sections = projects
        .iter()
        .map(|project| ProjectSection {
            project_id: project.id,
            title: project.title.clone(),
            project_type: project.project_type,
            status: project.status,
            solution_architect: project.solution_architect.clone(),
            project_lead: project.project_lead.clone(),
            team_members: project
                .team_member_names()
                .into_iter()
                .map(String::from)
                .collect(),
            updates: by_project
                .get(&project.id)
                .map(|group| {
                    group
                        .iter()
                        .take(MAX_UPDATES_PER_PROJECT)
                        .map(|u| (*u).clone())
                        .collect()
                })
                .unwrap_or_default(),
        })
        .collect();

    Report {
        period_start: start,
        period_end: now,
        active_projects: projects.iter().filter(|p| p.is_active()).count(),
        update_count: recent.len(),
        sections,
    }
}

fn local_date(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%-m/%-d/%Y").to_string()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PROJECT STATUS REPORT")?;
        writeln!(
            f,
            "Reporting period: {} - {}",
            local_date(self.period_start),
            local_date(self.period_end)
        )?;
        writeln!(f, "Active projects: {}", self.active_projects)?;
        writeln!(f, "Status updates in the last {WINDOW_DAYS} days: {}", self.update_count)?;

        for section in &self.sections {
            writeln!(f)?;
            write!(f, "{section}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ProjectSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project: {}", self.title)?;
        writeln!(f, "Type: {}", self.project_type)?;
        writeln!(f, "Status: {}", self.status)?;
        writeln!(f, "Solution Architect: {}", self.solution_architect)?;
        writeln!(f, "Project Lead: {}", self.project_lead)?;
        writeln!(f, "Team Members: {}", self.team_members.join(", "))?;

        if self.updates.is_empty() {
            writeln!(f, "Recent Updates: No updates in the last {WINDOW_DAYS} days")?;
        } else {
            writeln!(f, "Recent Updates:")?;
            for update in &self.updates {
                writeln!(f, "- {}: {}", local_date(update.created_at), update.content)?;
            }
        }
        writeln!(f, "---")
    }
}
