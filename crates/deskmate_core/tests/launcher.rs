use deskmate_core::db::open_db_in_memory;
use deskmate_core::{
    LaunchKind, LauncherRepoError, LauncherService, LauncherServiceError,
    SqliteLauncherRepository,
};

#[test]
fn workspaces_list_ordered_by_name() {
    let conn = open_db_in_memory().unwrap();
    let service = LauncherService::new(SqliteLauncherRepository::new(&conn));

    service.add_workspace("Writing").unwrap();
    service.add_workspace("Daily standup").unwrap();

    let names: Vec<String> = service
        .list_workspaces()
        .unwrap()
        .into_iter()
        .map(|workspace| workspace.name)
        .collect();
    assert_eq!(names, vec!["Daily standup", "Writing"]);
}

#[test]
fn duplicate_workspace_name_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let service = LauncherService::new(SqliteLauncherRepository::new(&conn));

    service.add_workspace("Research").unwrap();
    let err = service.add_workspace("Research").unwrap_err();
    assert!(matches!(
        err,
        LauncherServiceError::Repo(LauncherRepoError::DuplicateName(name)) if name == "Research"
    ));
}

#[test]
fn launch_plan_lists_items_ordered_by_name() {
    let conn = open_db_in_memory().unwrap();
    let service = LauncherService::new(SqliteLauncherRepository::new(&conn));

    let workspace = service.add_workspace("Morning").unwrap();
    service
        .add_item("tickets", "https://tracker.example.com", LaunchKind::Url, workspace.id)
        .unwrap();
    service
        .add_item("inbox notes", "/home/me/notes", LaunchKind::Folder, workspace.id)
        .unwrap();
    service
        .add_item("report", "/home/me/report.ods", LaunchKind::File, workspace.id)
        .unwrap();

    let plan = service.launch_plan(workspace.id).unwrap();
    let names: Vec<&str> = plan.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["inbox notes", "report", "tickets"]);
    assert_eq!(plan[2].kind, LaunchKind::Url);
}

#[test]
fn items_require_an_existing_workspace() {
    let conn = open_db_in_memory().unwrap();
    let service = LauncherService::new(SqliteLauncherRepository::new(&conn));

    let err = service
        .add_item("orphan", "/tmp/file", LaunchKind::File, 555)
        .unwrap_err();
    assert!(matches!(
        err,
        LauncherServiceError::Repo(LauncherRepoError::WorkspaceNotFound(555))
    ));
}

#[test]
fn deleting_a_workspace_removes_its_items() {
    let conn = open_db_in_memory().unwrap();
    let service = LauncherService::new(SqliteLauncherRepository::new(&conn));

    let workspace = service.add_workspace("Cleanup").unwrap();
    service
        .add_item("scratch", "/tmp/scratch", LaunchKind::Folder, workspace.id)
        .unwrap();

    service.delete_workspace(workspace.id).unwrap();
    assert!(service.list_workspaces().unwrap().is_empty());

    let leftovers: i64 = conn
        .query_row("SELECT COUNT(*) FROM launcher_items;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(leftovers, 0);
}

#[test]
fn blank_item_fields_are_rejected() {
    let conn = open_db_in_memory().unwrap();
    let service = LauncherService::new(SqliteLauncherRepository::new(&conn));

    let workspace = service.add_workspace("Strict").unwrap();
    assert!(matches!(
        service
            .add_item(" ", "/tmp/x", LaunchKind::File, workspace.id)
            .unwrap_err(),
        LauncherServiceError::EmptyField("item name")
    ));
    assert!(matches!(
        service
            .add_item("x", "  ", LaunchKind::File, workspace.id)
            .unwrap_err(),
        LauncherServiceError::EmptyField("item target")
    ));
}

#[test]
fn launch_kind_parse_round_trips_and_rejects_unknown() {
    for kind in [LaunchKind::File, LaunchKind::Folder, LaunchKind::Url] {
        assert_eq!(LaunchKind::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(LaunchKind::parse("registry"), None);
}
