//! End-to-end flows over a real database and an in-memory object store.
//!
//! Each test gets a fresh migrated database from `#[sqlx::test]`, so the
//! assertions cover the full stack: router, services, repositories, and
//! the activity ledger semantics around deletion.

use axum::http::StatusCode;
use sqlx::{PgPool, Row};

use crate::helpers::{
    authed_request, db_app, db_app_with_upload_limit, register_user, send, upload,
};

#[sqlx::test(migrations = "./migrations")]
async fn registering_the_same_email_twice_fails(pool: PgPool) {
    let (app, _storage) = db_app(pool);
    register_user(&app, "dup@example.com").await;

    let (status, body) = send(
        app.clone(),
        crate::helpers::json_request(
            "POST",
            "/api/auth/register",
            serde_json::json!({
                "email": "dup@example.com",
                "password": "another-password",
                "full_name": "Second Try",
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");
    assert_eq!(body["message"], "Email already registered");
}

#[sqlx::test(migrations = "./migrations")]
async fn email_uniqueness_ignores_case(pool: PgPool) {
    let (app, _storage) = db_app(pool);
    register_user(&app, "casing@example.com").await;

    let (status, body) = send(
        app.clone(),
        crate::helpers::json_request(
            "POST",
            "/api/auth/register",
            serde_json::json!({
                "email": "Casing@Example.COM",
                "password": "password123",
                "full_name": "Same Person",
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email already registered");
}

#[sqlx::test(migrations = "./migrations")]
async fn upload_size_ceiling_is_inclusive(pool: PgPool) {
    let (app, storage) = db_app_with_upload_limit(pool, 16);
    let token = register_user(&app, "ceiling@example.com").await;

    let (status, body) = upload(&app, &token, "exact.bin", &[0u8; 16]).await;
    assert_eq!(status, StatusCode::OK, "exact-size upload failed: {body}");
    assert_eq!(body["size_bytes"], 16);
    assert_eq!(storage.object_count(), 1);

    let (status, body) = upload(&app, &token, "over.bin", &[0u8; 17]).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "PAYLOAD_TOO_LARGE");
    assert_eq!(storage.object_count(), 1, "oversized blob must not be stored");
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_detaches_history_and_records_the_deletion(pool: PgPool) {
    let (app, storage) = db_app(pool.clone());
    let token = register_user(&app, "deleter@example.com").await;

    let (status, uploaded) = upload(&app, &token, "doomed.txt", b"contents").await;
    assert_eq!(status, StatusCode::OK);
    let file_id = uploaded["id"].as_str().expect("upload returns an id");

    let (status, body) = send(
        app.clone(),
        authed_request("DELETE", &format!("/api/files/{file_id}"), &token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], file_id);
    assert_eq!(storage.object_count(), 0);

    let (status, files) = send(app.clone(), authed_request("GET", "/api/files", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(files.as_array().map(Vec::len), Some(0));

    // The ledger survives the file row: the upload entry loses its file
    // link, and exactly one delete entry is appended, also unlinked.
    let rows = sqlx::query(
        "SELECT a.action::text AS action, a.file_id IS NULL AS detached, a.filename \
         FROM activities a JOIN users u ON u.id = a.user_id \
         WHERE u.email = $1 ORDER BY a.created_at",
    )
    .bind("deleter@example.com")
    .fetch_all(&pool)
    .await
    .expect("ledger query");

    let actions: Vec<String> = rows.iter().map(|r| r.get("action")).collect();
    assert_eq!(actions, vec!["upload", "delete"]);
    for row in &rows {
        assert!(row.get::<bool, _>("detached"));
        assert_eq!(row.get::<String, _>("filename"), "doomed.txt");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn clearing_history_only_touches_the_caller(pool: PgPool) {
    let (app, _storage) = db_app(pool);
    let token_a = register_user(&app, "clearer@example.com").await;
    let token_b = register_user(&app, "bystander@example.com").await;

    upload(&app, &token_a, "a.txt", b"aaa").await;
    upload(&app, &token_b, "b.txt", b"bbb").await;

    let (status, body) = send(
        app.clone(),
        authed_request("DELETE", "/api/auth/history/clear", &token_a),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cleared"], true);

    let (_, history_a) = send(
        app.clone(),
        authed_request("GET", "/api/auth/history", &token_a),
    )
    .await;
    assert_eq!(history_a.as_array().map(Vec::len), Some(0));

    let (_, history_b) = send(
        app.clone(),
        authed_request("GET", "/api/auth/history", &token_b),
    )
    .await;
    assert_eq!(history_b.as_array().map(Vec::len), Some(1));
    assert_eq!(history_b[0]["action"], "upload");
}

#[sqlx::test(migrations = "./migrations")]
async fn download_never_leaks_across_owners(pool: PgPool) {
    let (app, _storage) = db_app(pool);
    let token_owner = register_user(&app, "owner@example.com").await;
    let token_other = register_user(&app, "other@example.com").await;

    let (_, uploaded) = upload(&app, &token_owner, "private.txt", b"secret").await;
    let file_id = uploaded["id"].as_str().expect("upload returns an id");

    let (status, body) = send(
        app.clone(),
        authed_request(
            "GET",
            &format!("/api/files/{file_id}/download"),
            &token_other,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");

    let (status, body) = send(
        app.clone(),
        authed_request(
            "GET",
            &format!("/api/files/{file_id}/download"),
            &token_owner,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["url"].as_str().is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn storage_usage_sums_only_remaining_files(pool: PgPool) {
    let (app, _storage) = db_app(pool);
    let token = register_user(&app, "usage@example.com").await;

    upload(&app, &token, "one.txt", &[1u8; 100]).await;
    let (_, second) = upload(&app, &token, "two.txt", &[2u8; 200]).await;

    let (status, body) = send(
        app.clone(),
        authed_request("GET", "/api/files/storage", &token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_bytes"], 300);

    let second_id = second["id"].as_str().expect("upload returns an id");
    send(
        app.clone(),
        authed_request("DELETE", &format!("/api/files/{second_id}"), &token),
    )
    .await;

    let (_, body) = send(
        app.clone(),
        authed_request("GET", "/api/files/storage", &token),
    )
    .await;
    assert_eq!(body["total_bytes"], 100);
}
