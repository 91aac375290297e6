use chrono::{Duration, Utc};
use uuid::Uuid;

use statusboard::db::{MemStorage, Storage};
use statusboard::models::{
    NewStatusUpdate, Project, ProjectFields, ProjectStatus, ProjectType, StatusUpdate,
};

fn fields(title: &str) -> ProjectFields {
    ProjectFields {
        title: title.to_string(),
        project_type: ProjectType::Frontend,
        status: None,
        solution_architect: "Daniel Okafor".to_string(),
        project_lead: "Sofia Marin".to_string(),
        team_members: "Jin Park".to_string(),
        stakeholders: "Consumer Products".to_string(),
        wiki_link: String::new(),
        useful_links: String::new(),
        modified_date: String::new(),
    }
}

fn new_update(project_id: Uuid, content: &str) -> NewStatusUpdate {
    NewStatusUpdate {
        project_id,
        content: content.to_string(),
        commenter: "Tester".to_string(),
    }
}

#[tokio::test]
async fn projects_listed_newest_first_regardless_of_insertion_order() {
    let store = MemStorage::new();
    let now = Utc::now();

    for (title, age) in [("middle", 5), ("oldest", 9), ("newest", 1), ("second", 3)] {
        store.insert_project(Project::new(fields(title), now - Duration::days(age)));
    }

    let titles: Vec<String> = store
        .list_projects()
        .await
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, vec!["newest", "second", "middle", "oldest"]);
}

#[tokio::test]
async fn create_assigns_unique_ids_and_defaults_status() {
    let store = MemStorage::new();

    let a = store.create_project(fields("A")).await;
    let b = store.create_project(fields("B")).await;

    assert_ne!(a.id, b.id);
    assert_eq!(a.status, ProjectStatus::InProgress);
    assert_eq!(store.get_project(a.id).await, Some(a));
    assert_eq!(store.get_project(Uuid::now_v7()).await, None);
}

#[tokio::test]
async fn update_preserves_identity() {
    let store = MemStorage::new();
    let original = store.create_project(fields("Wallet")).await;

    let mut changed = fields("Wallet 2");
    changed.status = Some(ProjectStatus::Completed);
    let updated = store.update_project(original.id, changed).await.unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.created_at, original.created_at);
    assert_eq!(updated.title, "Wallet 2");
    assert_eq!(updated.status, ProjectStatus::Completed);

    assert!(store.update_project(Uuid::now_v7(), fields("Ghost")).await.is_none());
}

#[tokio::test]
async fn set_status_touches_only_status() {
    let store = MemStorage::new();
    let original = store.create_project(fields("Wallet")).await;

    let updated = store
        .set_project_status(original.id, ProjectStatus::Archived)
        .await
        .unwrap();

    assert_eq!(updated.status, ProjectStatus::Archived);
    assert_eq!(
        Project {
            status: original.status,
            ..updated
        },
        original
    );
    assert!(store
        .set_project_status(Uuid::now_v7(), ProjectStatus::OnHold)
        .await
        .is_none());
}

#[tokio::test]
async fn status_updates_filtered_and_newest_first() {
    let store = MemStorage::new();
    let project = store.create_project(fields("Wallet")).await;
    let other = store.create_project(fields("Other")).await;
    let now = Utc::now();

    for (content, age) in [("second", 2), ("third", 1), ("first", 3)] {
        store.insert_status_update(StatusUpdate::new(
            new_update(project.id, content),
            now - Duration::hours(age),
        ));
    }
    store.create_status_update(new_update(other.id, "elsewhere")).await;

    let contents: Vec<String> = store
        .list_status_updates_for_project(project.id)
        .await
        .into_iter()
        .map(|u| u.content)
        .collect();
    assert_eq!(contents, vec!["third", "second", "first"]);

    let all = store.list_all_status_updates().await;
    assert_eq!(all.len(), 4);
    assert_eq!(all[0].content, "elsewhere");
}

#[tokio::test]
async fn equal_timestamps_break_ties_by_id() {
    let store = MemStorage::new();
    let created_at = Utc::now();

    for title in ["a", "b", "c", "d"] {
        store.insert_project(Project::new(fields(title), created_at));
    }
    let project = store.list_projects().await[0].clone();
    for content in ["x", "y", "z"] {
        store.insert_status_update(StatusUpdate::new(new_update(project.id, content), created_at));
    }

    let project_ids: Vec<Uuid> = store.list_projects().await.into_iter().map(|p| p.id).collect();
    let mut expected = project_ids.clone();
    expected.sort_by(|a, b| b.cmp(a));
    assert_eq!(project_ids, expected);

    let update_ids: Vec<Uuid> = store
        .list_status_updates_for_project(project.id)
        .await
        .into_iter()
        .map(|u| u.id)
        .collect();
    let mut expected = update_ids.clone();
    expected.sort_by(|a, b| b.cmp(a));
    assert_eq!(update_ids, expected);
}
