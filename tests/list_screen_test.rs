//! List screen: load, edit navigation and purge with confirmation.

use std::sync::Arc;

use role_admin::api::{QueryParams, View};
use role_admin::config::{AdminConfig, Messages};
use role_admin::router::Route;
use role_admin::screens::list::PURGE_DIALOG_TEMPLATE;
use role_admin::screens::{ListScreen, ListState, PurgeOutcome};

mod common;
use common::*;

fn service() -> Arc<FakeRoleService> {
    FakeRoleService::new(
        vec![role("a", "Clerk"), role("b", "Nurse"), role("x", "Obsolete")],
        vec![],
    )
}

fn list_screen(service: &Arc<FakeRoleService>) -> ListScreen<RecordingNotifier> {
    ListScreen::new(service.clone(), config(), RecordingNotifier::default())
}

fn names(screen: &ListScreen<RecordingNotifier>) -> Vec<&str> {
    screen.roles().iter().map(|r| r.name.as_str()).collect()
}

#[tokio::test]
async fn test_load_binds_all_roles_at_default_view() {
    let service = service();
    let mut screen = list_screen(&service);
    assert_eq!(screen.state(), ListState::Idle);

    assert!(screen.load().await);
    assert_eq!(screen.state(), ListState::Ready);
    assert_eq!(names(&screen), vec!["Clerk", "Nurse", "Obsolete"]);
    assert_eq!(
        *service.role_queries.lock().unwrap(),
        vec![QueryParams::all(View::Default)]
    );
}

#[tokio::test]
async fn test_load_failure_notifies_and_keeps_previous_roles() {
    let service = service();
    let mut screen = list_screen(&service);
    screen.load().await;

    FakeRoleService::fail(&service.fail_query);
    assert!(!screen.load().await);

    assert_eq!(screen.state(), ListState::Error);
    assert_eq!(names(&screen), vec!["Clerk", "Nurse", "Obsolete"]);
    assert_eq!(screen.notifier().errors(), vec![Messages::default().load_roles_error]);
}

#[tokio::test]
async fn test_edit_navigates_with_uuid() {
    let service = service();
    let mut screen = list_screen(&service);
    screen.load().await;

    let route = screen.edit(&screen.roles()[1]);
    assert_eq!(route, Route::Edit { role_uuid: Some("b".into()) });
    assert_eq!(route.path(), "/edit/b");
    assert_eq!(screen.create(), Route::Edit { role_uuid: None });
}

#[tokio::test]
async fn test_purge_prompt_interpolates_role_name() {
    let service = service();
    let mut config = AdminConfig::default();
    config.messages.purge_prompt_template = "Really purge {0}?".to_string();
    let screen = ListScreen::new(service.clone(), Arc::new(config), RecordingNotifier::default());

    let prompt = screen.purge_prompt(&role("x", "Obsolete"));
    assert_eq!(prompt.message, "Really purge Obsolete?");
    assert_eq!(prompt.template, PURGE_DIALOG_TEMPLATE);
    assert_eq!(prompt.subject_uuid, "x");
}

#[tokio::test]
async fn test_confirmed_purge_deletes_and_reloads() {
    let service = service();
    let mut screen = list_screen(&service);
    screen.load().await;

    let target = screen.roles()[2].clone();
    let confirmer = RecordingConfirmer::answering(true);
    let outcome = screen.purge(&target, &confirmer).await;

    assert_eq!(outcome, PurgeOutcome::Purged);
    assert_eq!(service.deleted(), vec![("x".to_string(), true)]);
    assert_eq!(names(&screen), vec!["Clerk", "Nurse"]);
    assert_eq!(screen.state(), ListState::Ready);
    assert_eq!(confirmer.prompts().len(), 1);
    assert_eq!(
        screen.notifier().notices(),
        vec![Notice::Success(Messages::default().purge_success)]
    );
}

#[tokio::test]
async fn test_cancelled_purge_sends_nothing() {
    let service = service();
    let mut screen = list_screen(&service);
    screen.load().await;

    let target = screen.roles()[0].clone();
    let outcome = screen.purge(&target, &RecordingConfirmer::answering(false)).await;

    assert_eq!(outcome, PurgeOutcome::Cancelled);
    assert!(service.deleted().is_empty());
    assert_eq!(names(&screen), vec!["Clerk", "Nurse", "Obsolete"]);
    assert!(screen.notifier().notices().is_empty());
}

#[tokio::test]
async fn test_failed_purge_leaves_list_unchanged() {
    let service = service();
    FakeRoleService::fail(&service.fail_delete);
    let mut screen = list_screen(&service);
    screen.load().await;

    let target = screen.roles()[2].clone();
    let outcome = screen.purge(&target, &RecordingConfirmer::answering(true)).await;

    assert_eq!(outcome, PurgeOutcome::Failed);
    assert_eq!(service.deleted(), vec![("x".to_string(), true)]);
    assert_eq!(names(&screen), vec!["Clerk", "Nurse", "Obsolete"]);
    assert_eq!(screen.state(), ListState::Ready);
    assert_eq!(screen.notifier().errors(), vec![Messages::default().purge_error]);
    // no reload after a failed delete
    assert_eq!(service.role_queries.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_confirm_and_delete_leaves_reload_to_caller() {
    let service = service();
    let mut screen = list_screen(&service);
    screen.load().await;

    let target = screen.roles()[2].clone();
    let outcome = screen
        .confirm_and_delete(&target, &RecordingConfirmer::answering(true))
        .await;

    assert_eq!(outcome, PurgeOutcome::Purged);
    assert_eq!(service.deleted(), vec![("x".to_string(), true)]);
    assert_eq!(service.role_queries.lock().unwrap().len(), 1);
    assert_eq!(screen.state(), ListState::Ready);
    assert_eq!(
        screen.notifier().notices(),
        vec![Notice::Success(Messages::default().purge_success)]
    );
}
