use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::{Value, json};
use uuid::Uuid;

use formdesk::db::{MemoryStore, RepositoryError, SubmissionRepository};
use formdesk::models::{FormData, FormType, Submission};
use formdesk::submission::search::SearchTerm;
use formdesk::submission::{self, CreateSubmissionRequest, SubmissionError};

fn new_submission(form_type: &str, data: Value) -> Submission {
    Submission::new(
        FormType::new(form_type).unwrap(),
        FormData::from_value(data).unwrap(),
    )
}

fn ids(submissions: &[Submission]) -> Vec<Uuid> {
    submissions.iter().map(Submission::id).collect()
}

// ── Create / get / exists ───────────────────────────────────────

#[tokio::test]
async fn create_returns_submission_unchanged() {
    let store = MemoryStore::new();
    let sub = new_submission("order", json!({ "fullName": "John Doe" }));

    let created = store.create(sub.clone()).await.unwrap();
    assert_eq!(created, sub);
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn create_rejects_duplicate_id() {
    let store = MemoryStore::new();
    let sub = new_submission("order", json!({}));
    store.create(sub.clone()).await.unwrap();

    let err = store.create(sub.clone()).await.unwrap_err();
    assert!(matches!(err, RepositoryError::DuplicateId(id) if id == sub.id()));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn get_by_id_round_trips() {
    let store = MemoryStore::new();
    let sub = new_submission("order", json!({ "nested": { "list": [1, "two", false] } }));
    store.create(sub.clone()).await.unwrap();

    let found = store.get_by_id(sub.id()).await.unwrap().unwrap();
    assert_eq!(found, sub);
}

#[tokio::test]
async fn get_by_id_unknown_is_none() {
    let store = MemoryStore::new();
    assert!(store.get_by_id(Uuid::now_v7()).await.unwrap().is_none());
}

#[tokio::test]
async fn get_by_id_corrupt_row_is_an_error() {
    let store = MemoryStore::new();
    let id = Uuid::now_v7();
    store.insert_raw(id, "order", "not json", Utc::now());

    let err = store.get_by_id(id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::Corrupt { id: bad, .. } if bad == id));
}

#[tokio::test]
async fn exists_reports_presence() {
    let store = MemoryStore::new();
    let sub = new_submission("order", json!({}));
    store.create(sub.clone()).await.unwrap();

    assert!(store.exists(sub.id()).await.unwrap());
    assert!(!store.exists(Uuid::now_v7()).await.unwrap());
}

// ── List & search ───────────────────────────────────────────────

#[tokio::test]
async fn list_orders_by_timestamp_descending() {
    let store = MemoryStore::new();
    let now = Utc::now();
    let (a, b, c) = (Uuid::now_v7(), Uuid::now_v7(), Uuid::now_v7());
    store.insert_raw(a, "order", "{}", now - Duration::hours(2));
    store.insert_raw(b, "order", "{}", now);
    store.insert_raw(c, "order", "{}", now - Duration::hours(1));

    let listed = store.list(None).await.unwrap();
    assert_eq!(ids(&listed), vec![b, c, a]);
}

#[tokio::test]
async fn equal_timestamps_keep_insertion_order() {
    let store = MemoryStore::new();
    let at = Utc::now();
    let planted: Vec<Uuid> = (0..5).map(|_| Uuid::now_v7()).collect();
    for id in &planted {
        store.insert_raw(*id, "order", "{}", at);
    }

    let listed = store.list(None).await.unwrap();
    assert_eq!(ids(&listed), planted);
}

#[tokio::test]
async fn blank_terms_return_everything() {
    let store = MemoryStore::new();
    store.create(new_submission("order", json!({}))).await.unwrap();
    store.create(new_submission("contact", json!({}))).await.unwrap();

    let all = ids(&store.list(None).await.unwrap());
    assert_eq!(all.len(), 2);
    assert_eq!(ids(&store.list(Some("")).await.unwrap()), all);
    assert_eq!(ids(&store.list(Some("   ")).await.unwrap()), all);
}

#[tokio::test]
async fn search_by_value_returns_only_matches() {
    let store = MemoryStore::new();
    let a = new_submission("order", json!({ "fullName": "John Doe", "product": "laptop" }));
    let b = new_submission("order", json!({ "fullName": "Jane Smith", "product": "phone" }));
    store.create(a.clone()).await.unwrap();
    store.create(b.clone()).await.unwrap();

    assert_eq!(ids(&store.list(Some("laptop")).await.unwrap()), vec![a.id()]);
    assert_eq!(ids(&store.list(Some("SMITH")).await.unwrap()), vec![b.id()]);
    assert!(store.list(Some("tablet")).await.unwrap().is_empty());
}

#[tokio::test]
async fn search_by_form_type() {
    let store = MemoryStore::new();
    let order = new_submission("order", json!({}));
    store.create(order.clone()).await.unwrap();
    store.create(new_submission("contact", json!({}))).await.unwrap();

    assert_eq!(ids(&store.list(Some("ORDER")).await.unwrap()), vec![order.id()]);
}

#[tokio::test]
async fn search_descends_into_nested_values() {
    let store = MemoryStore::new();
    let sub = new_submission(
        "order",
        json!({ "customer": { "address": { "city": "Berlin" } }, "items": [{ "sku": "X-42" }] }),
    );
    store.create(sub.clone()).await.unwrap();

    assert_eq!(ids(&store.list(Some("berlin")).await.unwrap()), vec![sub.id()]);
    assert_eq!(ids(&store.list(Some("x-42")).await.unwrap()), vec![sub.id()]);
}

#[tokio::test]
async fn search_ignores_keys() {
    let store = MemoryStore::new();
    store
        .create(new_submission("order", json!({ "secretKey": "value" })))
        .await
        .unwrap();

    assert!(store.list(Some("secret")).await.unwrap().is_empty());
}

#[tokio::test]
async fn search_matches_numbers_and_booleans() {
    let store = MemoryStore::new();
    let sub = new_submission("order", json!({ "quantity": 42, "agree": true }));
    store.create(sub.clone()).await.unwrap();

    assert_eq!(ids(&store.list(Some("42")).await.unwrap()), vec![sub.id()]);
    assert_eq!(ids(&store.list(Some("TRUE")).await.unwrap()), vec![sub.id()]);
}

#[tokio::test]
async fn corrupt_rows_do_not_fail_the_list() {
    let store = MemoryStore::new();
    let good = new_submission("contact", json!({ "email": "a@b.c" }));
    store.create(good.clone()).await.unwrap();
    let bad = Uuid::now_v7();
    store.insert_raw(bad, "order", "{\"product\": \"laptop\"", Utc::now() + Duration::seconds(1));

    let everything = store.list(None).await.unwrap();
    assert_eq!(ids(&everything), vec![bad, good.id()]);
    assert!(everything[0].data().is_empty());

    assert_eq!(ids(&store.list(Some("laptop")).await.unwrap()), vec![bad]);
    assert_eq!(ids(&store.list(Some("a@b")).await.unwrap()), vec![good.id()]);
}

#[tokio::test]
async fn concurrent_creates_are_all_stored() {
    let store = Arc::new(MemoryStore::new());

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .create(new_submission("order", json!({ "n": i })))
                    .await
                    .unwrap()
                    .id()
            })
        })
        .collect();

    let mut created = Vec::new();
    for handle in handles {
        created.push(handle.await.unwrap());
    }

    let mut listed = ids(&store.list(None).await.unwrap());
    listed.sort();
    created.sort();
    assert_eq!(listed, created);
}

#[test]
fn search_term_parsing() {
    assert!(SearchTerm::parse(None).is_none());
    assert!(SearchTerm::parse(Some("")).is_none());
    assert!(SearchTerm::parse(Some(" \t ")).is_none());
    assert_eq!(SearchTerm::parse(Some("LapTop")).unwrap().as_str(), "laptop");
    assert!(!SearchTerm::parse(Some("x")).unwrap().matches_value(&Value::Null));
}

// ── Use cases ───────────────────────────────────────────────────

#[tokio::test]
async fn create_use_case_maps_to_view() {
    let store = MemoryStore::new();
    let request = CreateSubmissionRequest {
        form_type: " order ".to_string(),
        data: json!({}),
    };

    let view = submission::create::run(&store, request).await.unwrap();
    assert_eq!(view.form_type, "order");
    assert_eq!(view.data, "{}");
    assert!(store.exists(view.id).await.unwrap());
}

#[tokio::test]
async fn create_use_case_surfaces_validation_errors() {
    let store = MemoryStore::new();
    let request = CreateSubmissionRequest {
        form_type: "   ".to_string(),
        data: json!({ "a": 1 }),
    };

    let err = submission::create::run(&store, request).await.unwrap_err();
    assert!(matches!(err, SubmissionError::Validation(_)));
    assert_eq!(err.to_string(), "FormType cannot be empty");
    assert!(store.is_empty());
}

#[tokio::test]
async fn lookup_use_case_distinguishes_missing_from_failure() {
    let store = MemoryStore::new();
    assert!(
        submission::lookup::run(&store, Uuid::now_v7())
            .await
            .unwrap()
            .is_none()
    );

    let bad = Uuid::now_v7();
    store.insert_raw(bad, "order", "{", Utc::now());
    let err = submission::lookup::run(&store, bad).await.unwrap_err();
    assert!(matches!(err, SubmissionError::Repository(_)));
}

#[tokio::test]
async fn listing_use_case_passes_search_through() {
    let store = MemoryStore::new();
    let a = new_submission("order", json!({ "product": "laptop" }));
    store.create(a.clone()).await.unwrap();
    store
        .create(new_submission("order", json!({ "product": "phone" })))
        .await
        .unwrap();

    let views = submission::listing::run(&store, Some("laptop")).await.unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].id, a.id());
    assert_eq!(views[0].data, r#"{"product":"laptop"}"#);
}
