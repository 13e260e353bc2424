use deskmate_core::db::open_db_in_memory;
use deskmate_core::{
    SqliteTaskRepository, TaskService, TaskServiceError, TaskStatus,
};
use rusqlite::Connection;

fn setup() -> Connection {
    open_db_in_memory().unwrap()
}

#[test]
fn add_trims_content_and_round_trips() {
    let conn = setup();
    let service = TaskService::new(SqliteTaskRepository::try_new(&conn).unwrap());

    let task = service.add("  buy milk  ", None).unwrap();
    assert_eq!(task.content, "buy milk");
    assert_eq!(task.status, TaskStatus::Pending);

    let listed = service.list(None, false).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, task.id);
}

#[test]
fn add_rejects_blank_content_without_inserting() {
    let conn = setup();
    let service = TaskService::new(SqliteTaskRepository::try_new(&conn).unwrap());

    for blank in ["", "   ", "\n\t "] {
        let err = service.add(blank, None).unwrap_err();
        assert!(matches!(err, TaskServiceError::EmptyContent));
    }
    assert!(service.list(None, false).unwrap().is_empty());
}

#[test]
fn add_from_text_drops_blank_lines() {
    let conn = setup();
    let service = TaskService::new(SqliteTaskRepository::try_new(&conn).unwrap());

    let created = service.add_from_text("a\n\nb\n  \nc", None).unwrap();
    assert_eq!(created, 3);

    let contents: Vec<String> = service
        .list(None, false)
        .unwrap()
        .into_iter()
        .map(|task| task.content)
        .collect();
    assert_eq!(contents, vec!["a", "b", "c"]);
}

#[test]
fn add_from_text_can_import_under_a_parent() {
    let conn = setup();
    let service = TaskService::new(SqliteTaskRepository::try_new(&conn).unwrap());

    let parent = service.add("scanned list", None).unwrap();
    let created = service
        .add_from_text("step one\nstep two", Some(parent.id))
        .unwrap();
    assert_eq!(created, 2);

    let tree = service.list_tree(None, false).unwrap();
    assert_eq!(tree.roots().len(), 1);
    let root_index = tree.roots()[0];
    assert_eq!(tree.children_of(root_index).len(), 2);
}

#[test]
fn set_status_on_missing_task_is_not_found() {
    let conn = setup();
    let service = TaskService::new(SqliteTaskRepository::try_new(&conn).unwrap());

    let err = service.set_status(404, TaskStatus::Completed).unwrap_err();
    assert!(matches!(err, TaskServiceError::TaskNotFound(404)));
}

#[test]
fn bulk_status_update_with_no_ids_returns_zero() {
    let conn = setup();
    let service = TaskService::new(SqliteTaskRepository::try_new(&conn).unwrap());

    service.add("untouched", None).unwrap();
    assert_eq!(
        service.set_status_bulk(&[], TaskStatus::Completed).unwrap(),
        0
    );
}

#[test]
fn delete_removes_the_whole_subtree() {
    let conn = setup();
    let service = TaskService::new(SqliteTaskRepository::try_new(&conn).unwrap());

    let root = service.add("project", None).unwrap();
    service.add("subtask", Some(root.id)).unwrap();

    service.delete(root.id).unwrap();
    assert!(service.list(None, false).unwrap().is_empty());
}

#[test]
fn list_tree_orders_siblings_by_reordered_sort_order() {
    let conn = setup();
    let service = TaskService::new(SqliteTaskRepository::try_new(&conn).unwrap());

    let t1 = service.add("one", None).unwrap();
    let t2 = service.add("two", None).unwrap();
    let t3 = service.add("three", None).unwrap();

    service.reorder(None, &[t3.id, t1.id, t2.id]).unwrap();

    let tree = service.list_tree(None, false).unwrap();
    let root_ids: Vec<i64> = tree
        .roots()
        .iter()
        .map(|&index| tree.task(index).id)
        .collect();
    assert_eq!(root_ids, vec![t3.id, t1.id, t2.id]);
}

#[test]
fn list_tree_walk_reports_depths() {
    let conn = setup();
    let service = TaskService::new(SqliteTaskRepository::try_new(&conn).unwrap());

    let root = service.add("root", None).unwrap();
    let child = service.add("child", Some(root.id)).unwrap();
    service.add("grandchild", Some(child.id)).unwrap();

    let tree = service.list_tree(None, false).unwrap();
    assert_eq!(tree.len(), 3);
    assert!(!tree.is_empty());

    let mut visited: Vec<(String, usize)> = Vec::new();
    tree.walk(|task, depth| visited.push((task.content.clone(), depth)));
    assert_eq!(
        visited,
        vec![
            ("root".to_string(), 0),
            ("child".to_string(), 1),
            ("grandchild".to_string(), 2),
        ]
    );

    let rows: Vec<usize> = tree.rows().into_iter().map(|(_, depth)| depth).collect();
    assert_eq!(rows, vec![0, 1, 2]);
}

#[test]
fn archive_via_service_reports_newly_archived_count() {
    let conn = setup();
    let service = TaskService::new(SqliteTaskRepository::try_new(&conn).unwrap());

    let done = service.add("finished ages ago", None).unwrap();
    service.set_status(done.id, TaskStatus::Completed).unwrap();
    conn.execute(
        "UPDATE tasks SET created_at = created_at - 9 * 86400 * 1000 WHERE id = ?1;",
        rusqlite::params![done.id],
    )
    .unwrap();

    assert_eq!(service.archive_completed_older_than(7).unwrap(), 1);
    assert_eq!(service.archive_completed_older_than(7).unwrap(), 0);

    let completed = service.list(Some(TaskStatus::Completed), false).unwrap();
    assert!(completed.is_empty());
}
