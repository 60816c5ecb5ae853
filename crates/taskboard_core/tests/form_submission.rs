use chrono::NaiveDate;
use taskboard_core::{
    parse_submission, FormError, MemoryTaskStore, StatusFilter, TaskService, TaskStatus,
    TaskSubmission, ViewOptions,
};
use uuid::Uuid;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 26).unwrap()
}

fn submission(title: &str, status: &str, due_date: &str) -> TaskSubmission {
    TaskSubmission {
        title: title.to_string(),
        description: String::new(),
        status: status.to_string(),
        due_date: due_date.to_string(),
    }
}

#[test]
fn parse_accepts_valid_payload_and_normalizes_description() {
    let payload = TaskSubmission {
        title: "  Write report  ".to_string(),
        description: "  quarterly numbers  ".to_string(),
        status: "In Progress".to_string(),
        due_date: "2099-01-01".to_string(),
    };

    let draft = parse_submission(&payload, today()).unwrap();
    assert_eq!(draft.title, "Write report");
    assert_eq!(draft.description.as_deref(), Some("quarterly numbers"));
    assert_eq!(draft.status, Some(TaskStatus::InProgress));
    assert_eq!(
        draft.due_date,
        Some(NaiveDate::from_ymd_opt(2099, 1, 1).unwrap())
    );
}

#[test]
fn parse_defaults_empty_status_to_pending_and_drops_empty_description() {
    let draft = parse_submission(&submission("X", "", "2099-01-01"), today()).unwrap();
    assert_eq!(draft.status, Some(TaskStatus::Pending));
    assert_eq!(draft.description, None);
}

#[test]
fn parse_rejects_empty_title() {
    let err = parse_submission(&submission("   ", "", "2099-01-01"), today()).unwrap_err();
    assert_eq!(err, FormError::TitleRequired);
    assert_eq!(err.field(), "title");
}

#[test]
fn parse_rejects_missing_due_date() {
    let err = parse_submission(&submission("X", "", ""), today()).unwrap_err();
    assert_eq!(err, FormError::DueDateRequired);
    assert_eq!(err.field(), "due_date");
}

#[test]
fn parse_rejects_malformed_due_date() {
    let err = parse_submission(&submission("X", "", "next tuesday"), today()).unwrap_err();
    assert!(matches!(err, FormError::InvalidDueDate(_)));
    assert_eq!(err.field(), "due_date");
}

#[test]
fn parse_rejects_past_due_date() {
    let err = parse_submission(&submission("X", "", "2000-01-01"), today()).unwrap_err();
    assert!(matches!(err, FormError::DueDateInPast { .. }));
    assert_eq!(err.field(), "due_date");
}

#[test]
fn service_create_rejects_invalid_payload_without_touching_store() {
    let mut service = TaskService::new(MemoryTaskStore::new());

    service
        .create(&submission("", "", "2099-01-01"), today())
        .unwrap_err();
    service
        .create(&submission("X", "", "2000-01-01"), today())
        .unwrap_err();

    assert!(service.tasks().is_empty());
}

#[test]
fn service_write_report_lifecycle() {
    let mut service = TaskService::new(MemoryTaskStore::new());

    let created = service
        .create(&submission("Write report", "", "2099-01-01"), today())
        .unwrap();
    assert_eq!(service.tasks().len(), 1);
    assert_eq!(service.tasks()[0].status, TaskStatus::Pending);

    let updated = service
        .edit(
            created.id,
            &submission("Write report", "Completed", "2099-01-01"),
            today(),
        )
        .unwrap()
        .expect("task should still exist");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.status, TaskStatus::Completed);

    let completed_view = service.dashboard(&ViewOptions::completed_only());
    assert_eq!(completed_view.tasks.len(), 1);
    assert_eq!(completed_view.tasks[0].id, created.id);

    let default_view = service.dashboard(&ViewOptions::default());
    assert_eq!(default_view.summary.completed, 1);
    assert_eq!(default_view.summary.total, 1);
}

#[test]
fn service_edit_of_missing_id_is_a_no_op() {
    let mut service = TaskService::new(MemoryTaskStore::new());
    service
        .create(&submission("Survivor", "", "2099-01-01"), today())
        .unwrap();

    let outcome = service
        .edit(
            Uuid::new_v4(),
            &submission("Ghost", "", "2099-01-01"),
            today(),
        )
        .unwrap();
    assert_eq!(outcome, None);
    assert_eq!(service.tasks().len(), 1);
    assert_eq!(service.tasks()[0].title, "Survivor");
}

#[test]
fn service_delete_reports_whether_anything_was_removed() {
    let mut service = TaskService::new(MemoryTaskStore::new());
    let task = service
        .create(&submission("Disposable", "", "2099-01-01"), today())
        .unwrap();

    assert!(!service.delete(Uuid::new_v4()));
    assert_eq!(service.tasks().len(), 1);

    assert!(service.delete(task.id));
    assert!(service.tasks().is_empty());
}

#[test]
fn service_status_filter_view_matches_labels() {
    let mut service = TaskService::new(MemoryTaskStore::new());
    service
        .create(&submission("A", "Pending", "2099-01-01"), today())
        .unwrap();
    service
        .create(&submission("B", "In Progress", "2099-01-02"), today())
        .unwrap();

    let options = ViewOptions {
        filter: StatusFilter::Only(TaskStatus::InProgress),
        ..ViewOptions::default()
    };
    let view = service.dashboard(&options);
    assert_eq!(view.tasks.len(), 1);
    assert_eq!(view.tasks[0].title, "B");
    assert_eq!(view.summary.total, 2);
}
