//! Integration tests for project commands

mod support;

use devpulse_core::ProjectForm;
use devpulse_domain::FieldErrors;
use devpulse_lib::{create_project, delete_project, get_project, list_projects, update_project};
use support::{empty_context, test_context};

fn valid_form(name: &str) -> ProjectForm {
    ProjectForm {
        name: name.to_string(),
        description: None,
        status: "completed".to_string(),
        color: "#3b82f6".to_string(),
    }
}

#[tokio::test]
async fn valid_submission_is_stored_and_listed() {
    let ctx = test_context();

    let state = create_project(&ctx, valid_form("X")).await;
    assert!(state.success);
    let created = state.project.expect("created project in form state");
    assert_eq!(created.name, "X");

    let listed = list_projects(&ctx).await.unwrap();
    assert_eq!(listed.len(), 6);
    assert!(listed.iter().any(|p| p.project.id == created.id));
}

#[tokio::test]
async fn overlong_name_is_rejected_without_storing() {
    let ctx = test_context();

    let state = create_project(&ctx, valid_form(&"x".repeat(101))).await;

    assert!(!state.success);
    let errors = state.errors.expect("validation errors");
    assert!(errors.get("name").is_some());
    assert!(errors.get("color").is_none());

    assert_eq!(list_projects(&ctx).await.unwrap().len(), 5);
}

#[tokio::test]
async fn named_color_is_rejected_with_color_error() {
    let ctx = test_context();

    let mut form = valid_form("Valid name");
    form.color = "blue".to_string();
    let state = create_project(&ctx, form).await;

    assert!(!state.success);
    let errors = state.errors.expect("validation errors");
    assert!(errors.get("color").is_some());
}

#[tokio::test]
async fn update_changes_fields_and_is_visible_in_reads() {
    let ctx = test_context();

    let mut form = valid_form("Renamed project");
    form.status = "paused".to_string();
    let state = update_project(&ctx, "proj_1", form).await;

    assert!(state.success);
    let fetched = get_project(&ctx, "proj_1").await.unwrap().expect("proj_1 exists");
    assert_eq!(fetched.project.name, "Renamed project");
    assert_eq!(fetched.project.status.label(), "Paused");
}

#[tokio::test]
async fn update_of_unknown_project_reports_not_found() {
    let ctx = test_context();

    let state = update_project(&ctx, "proj_404", valid_form("Ghost")).await;

    assert!(!state.success);
    let errors = state.errors.expect("form errors");
    assert_eq!(
        errors.get(FieldErrors::FORM).map(<[String]>::to_vec),
        Some(vec!["Project not found.".to_string()])
    );
}

#[tokio::test]
async fn invalid_update_is_rejected_before_touching_the_store() {
    let ctx = test_context();
    let before = get_project(&ctx, "proj_1").await.unwrap().expect("proj_1 exists");

    let mut form = valid_form("");
    form.name = String::new();
    let state = update_project(&ctx, "proj_1", form).await;

    assert!(!state.success);
    let after = get_project(&ctx, "proj_1").await.unwrap().expect("proj_1 exists");
    assert_eq!(before.project.name, after.project.name);
    assert_eq!(before.project.updated_at, after.project.updated_at);
}

#[tokio::test]
async fn delete_reports_existence_and_removes_the_record() {
    let ctx = test_context();

    assert!(delete_project(&ctx, "proj_2").await.unwrap());
    assert!(!delete_project(&ctx, "proj_2").await.unwrap());
    assert!(!delete_project(&ctx, "proj_404").await.unwrap());

    assert!(get_project(&ctx, "proj_2").await.unwrap().is_none());
    assert_eq!(list_projects(&ctx).await.unwrap().len(), 4);
}

#[tokio::test]
async fn reads_on_an_empty_store_return_empty_shapes() {
    let ctx = empty_context();

    assert!(list_projects(&ctx).await.unwrap().is_empty());
    assert!(get_project(&ctx, "proj_1").await.unwrap().is_none());
}
