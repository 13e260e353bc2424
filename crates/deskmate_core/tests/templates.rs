use deskmate_core::db::open_db_in_memory;
use deskmate_core::{
    SqliteTemplateRepository, TemplateRepoError, TemplateService, TemplateServiceError,
};

#[test]
fn add_get_and_list_ordered_by_title() {
    let conn = open_db_in_memory().unwrap();
    let service = TemplateService::new(SqliteTemplateRepository::new(&conn));

    let meeting = service.add("Meeting follow-up", "Thanks for your time.").unwrap();
    service.add("Absence notice", "I will be out of office.").unwrap();

    let titles: Vec<String> = service
        .list()
        .unwrap()
        .into_iter()
        .map(|template| template.title)
        .collect();
    assert_eq!(titles, vec!["Absence notice", "Meeting follow-up"]);

    let loaded = service.get(meeting).unwrap().unwrap();
    assert_eq!(loaded.content, "Thanks for your time.");
}

#[test]
fn duplicate_title_is_rejected_on_add() {
    let conn = open_db_in_memory().unwrap();
    let service = TemplateService::new(SqliteTemplateRepository::new(&conn));

    service.add("Greeting", "Hello!").unwrap();
    let err = service.add("Greeting", "Hi again!").unwrap_err();
    assert!(matches!(
        err,
        TemplateServiceError::Repo(TemplateRepoError::DuplicateTitle(title)) if title == "Greeting"
    ));

    assert_eq!(service.list().unwrap().len(), 1);
}

#[test]
fn duplicate_title_is_rejected_on_rename() {
    let conn = open_db_in_memory().unwrap();
    let service = TemplateService::new(SqliteTemplateRepository::new(&conn));

    service.add("First", "one").unwrap();
    let second = service.add("Second", "two").unwrap();

    let err = service.update(second, "First", "two").unwrap_err();
    assert!(matches!(
        err,
        TemplateServiceError::Repo(TemplateRepoError::DuplicateTitle(_))
    ));
}

#[test]
fn update_replaces_title_and_content() {
    let conn = open_db_in_memory().unwrap();
    let service = TemplateService::new(SqliteTemplateRepository::new(&conn));

    let id = service.add("Draft", "old body").unwrap();
    service.update(id, "Final", "new body").unwrap();

    let loaded = service.get(id).unwrap().unwrap();
    assert_eq!(loaded.title, "Final");
    assert_eq!(loaded.content, "new body");
}

#[test]
fn blank_fields_are_rejected_before_storage() {
    let conn = open_db_in_memory().unwrap();
    let service = TemplateService::new(SqliteTemplateRepository::new(&conn));

    assert!(matches!(
        service.add("  ", "body").unwrap_err(),
        TemplateServiceError::EmptyField("title")
    ));
    assert!(matches!(
        service.add("Title", "  ").unwrap_err(),
        TemplateServiceError::EmptyField("content")
    ));
    assert!(service.list().unwrap().is_empty());
}

#[test]
fn delete_missing_template_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = TemplateService::new(SqliteTemplateRepository::new(&conn));

    let err = service.delete(77).unwrap_err();
    assert!(matches!(
        err,
        TemplateServiceError::Repo(TemplateRepoError::NotFound(77))
    ));
}
