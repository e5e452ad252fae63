//! CreateUser use case tests against the in-memory store.

mod support;

use std::sync::Arc;

use serde_json::json;

use common::AppError;
use domain::{CreateUserRequest, Mailbox, WELCOME_SENDER_ADDRESS, WELCOME_SENDER_NAME, WELCOME_SUBJECT};
use user_service_lib::repository::{InMemoryUserStore, UserRepository};

use support::{wire, RecordingMailer};

#[tokio::test]
async fn test_registration_saves_user_and_sends_welcome() {
    let store = Arc::new(InMemoryUserStore::new());
    let mailer = Arc::new(RecordingMailer::default());
    let create_user = wire(store.clone(), mailer.clone());

    create_user
        .execute(CreateUserRequest::new("Ana", "ana@x.com"))
        .await
        .unwrap();

    let saved = store.find_by_email("ana@x.com").await.unwrap().unwrap();
    assert_eq!(saved.name, "Ana");
    assert_eq!(saved.email, "ana@x.com");

    let sent = mailer.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, Mailbox::new("Ana", "ana@x.com"));
    assert_eq!(sent[0].from, Mailbox::new(WELCOME_SENDER_NAME, WELCOME_SENDER_ADDRESS));
    assert_eq!(sent[0].subject, WELCOME_SUBJECT);
}

#[tokio::test]
async fn test_profile_fields_are_persisted_verbatim() {
    let store = Arc::new(InMemoryUserStore::new());
    let mailer = Arc::new(RecordingMailer::default());
    let create_user = wire(store.clone(), mailer);

    let request = CreateUserRequest::new("  Ana  ", "Ana@X.com").with_field("plan", "pro");
    create_user.execute(request).await.unwrap();

    // No trimming or lowercasing on the way in
    let saved = store.find_by_email("Ana@X.com").await.unwrap().unwrap();
    assert_eq!(saved.name, "  Ana  ");
    assert_eq!(saved.profile.get("plan"), Some(&json!("pro")));
}

#[tokio::test]
async fn test_second_registration_is_rejected() {
    let store = Arc::new(InMemoryUserStore::new());
    let mailer = Arc::new(RecordingMailer::default());
    let create_user = wire(store.clone(), mailer.clone());

    create_user
        .execute(CreateUserRequest::new("Ana", "ana@x.com"))
        .await
        .unwrap();
    let err = create_user
        .execute(CreateUserRequest::new("Another Ana", "ana@x.com"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "User already exists");
    assert_eq!(store.len().await, 1);
    assert_eq!(mailer.sent().await.len(), 1);
}

#[tokio::test]
async fn test_failed_welcome_leaves_user_saved() {
    let store = Arc::new(InMemoryUserStore::new());
    let mailer = Arc::new(RecordingMailer::failing("relay unreachable"));
    let create_user = wire(store.clone(), mailer.clone());

    let result = create_user
        .execute(CreateUserRequest::new("Ana", "ana@x.com"))
        .await;

    assert!(matches!(result, Err(AppError::Notification(ref msg)) if msg == "relay unreachable"));
    assert!(store.find_by_email("ana@x.com").await.unwrap().is_some());
    assert!(mailer.sent().await.is_empty());
}

#[tokio::test]
async fn test_concurrent_duplicates_store_one_user() {
    let store = Arc::new(InMemoryUserStore::new());
    let mailer = Arc::new(RecordingMailer::default());
    let create_user = wire(store.clone(), mailer.clone());

    let (first, second) = tokio::join!(
        create_user.execute(CreateUserRequest::new("Ana", "ana@x.com")),
        create_user.execute(CreateUserRequest::new("Ana", "ana@x.com")),
    );

    // The loser is stopped either by the existence check or by the store's guard
    let outcomes = [first, second];
    assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(outcomes
        .iter()
        .any(|r| matches!(r, Err(AppError::Conflict(_)))));
    assert_eq!(store.len().await, 1);
    assert_eq!(mailer.sent().await.len(), 1);
}

#[tokio::test]
async fn test_store_starts_empty() {
    let store = InMemoryUserStore::new();
    assert!(store.is_empty().await);
}
