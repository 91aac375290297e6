use chrono::{Duration, Utc};

use super::MemStorage;
use crate::models::{NewStatusUpdate, Project, ProjectFields, ProjectStatus, ProjectType, StatusUpdate};

struct SeedProject {
    title: &'static str,
    project_type: ProjectType,
    status: ProjectStatus,
    architect: &'static str,
    lead: &'static str,
    team: &'static str,
    stakeholders: &'static str,
    age_days: i64,
    /// (days ago, commenter, content)
    updates: &'static [(i64, &'static str, &'static str)],
}

const SEED: &[SeedProject] = &[
    SeedProject {
        title: "Payments Gateway Modernization",
        project_type: ProjectType::Backend,
        status: ProjectStatus::InProgress,
        architect: "Priya Raman",
        lead: "Marcus Lee",
        team: "Ana Souza, Tom Becker, Li Wei",
        stakeholders: "Finance Ops, Merchant Services",
        age_days: 90,
        updates: &[
            (2, "Marcus Lee", "Cut over the sandbox environment to the new routing layer."),
            (9, "Ana Souza", "Load tests passing at 2x peak volume."),
            (45, "Marcus Lee", "Kicked off design review for the retry policy."),
        ],
    },
    SeedProject {
        title: "Mobile Wallet Redesign",
        project_type: ProjectType::Mobile,
        status: ProjectStatus::OnHold,
        architect: "Daniel Okafor",
        lead: "Sofia Marin",
        team: "Jin Park, Elena Petrova",
        stakeholders: "Consumer Products",
        age_days: 60,
        updates: &[(20, "Sofia Marin", "Paused pending brand guideline refresh.")],
    },
    SeedProject {
        title: "Observability Platform",
        project_type: ProjectType::DevOps,
        status: ProjectStatus::Completed,
        architect: "Grace Kim",
        lead: "Omar Haddad",
        team: "Lucas Moreau, Nina Shah",
        stakeholders: "SRE, Platform Engineering",
        age_days: 120,
        updates: &[
            (5, "Omar Haddad", "All services now ship traces to the shared collector."),
            (14, "Nina Shah", "Dashboards handed over to the on-call rotation."),
        ],
    },
    SeedProject {
        title: "Legacy Reporting Sunset",
        project_type: ProjectType::Data,
        status: ProjectStatus::Archived,
        architect: "Henrik Larsen",
        lead: "Maya Cohen",
        team: "Ravi Kumar",
        stakeholders: "Analytics",
        age_days: 400,
        updates: &[(300, "Maya Cohen", "Final exports delivered; system decommissioned.")],
    },
];

/// Load demo projects with backdated timestamps.
pub fn seed(store: &MemStorage) {
    let now = Utc::now();

    for entry in SEED {
        let fields = ProjectFields {
            title: entry.title.to_string(),
            project_type: entry.project_type,
            status: Some(entry.status),
            solution_architect: entry.architect.to_string(),
            project_lead: entry.lead.to_string(),
            team_members: entry.team.to_string(),
            stakeholders: entry.stakeholders.to_string(),
            wiki_link: String::new(),
            useful_links: String::new(),
            modified_date: (now - Duration::days(entry.updates.first().map_or(entry.age_days, |u| u.0)))
                .format("%Y-%m-%d")
                .to_string(),
        };
        let project = Project::new(fields, now - Duration::days(entry.age_days));
        let project_id = project.id;
        store.insert_project(project);

        for (days_ago, commenter, content) in entry.updates {
            let update = StatusUpdate::new(
                NewStatusUpdate {
                    project_id,
                    content: content.to_string(),
                    commenter: commenter.to_string(),
                },
                now - Duration::days(*days_ago),
            );
            store.insert_status_update(update);
        }
    }

    tracing::info!("Seeded {} demo projects", SEED.len());
}
