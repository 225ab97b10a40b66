//! Request lifecycle integration tests: create, status updates,
//! completion, and the notifications they produce.

use http::StatusCode;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_request_starts_pending_and_unassigned() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let requester = Uuid::new_v4();
    let token = app.token(requester, "user", "dreyes");

    let id = app.create_request(&token, "Broken projector mount").await;

    let response = app
        .request("GET", &format!("/api/requests/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data_str("status"), "pending");
    assert!(response.body.pointer("/data/assigned_to").unwrap().is_null());
    assert_eq!(
        response.body.pointer("/data/requester_id").unwrap(),
        &serde_json::json!(requester)
    );
}

#[tokio::test]
async fn test_create_rejects_blank_description() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let token = app.token(Uuid::new_v4(), "user", "dreyes");
    let body = serde_json::json!({
        "requester_name": "Dana Reyes",
        "requester_role": "student",
        "description": "   ",
        "building": "Science Annex",
        "room": "A204",
    });

    let response = app
        .request("POST", "/api/requests", Some(body), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_requests_require_authentication() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let response = app.request("GET", "/api/requests", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_plain_user_cannot_change_status() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let token = app.token(Uuid::new_v4(), "user", "dreyes");
    let id = app.create_request(&token, "Flickering hallway light").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/requests/{id}/status"),
            Some(serde_json::json!({ "status": "in_progress" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_staff_status_update_notifies_requester() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let requester = Uuid::new_v4();
    let user_token = app.token(requester, "user", "dreyes");
    let staff_token = app.token(Uuid::new_v4(), "staff", "jmartin");

    let id = app.create_request(&user_token, "Clogged sink").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/requests/{id}/status"),
            Some(serde_json::json!({ "status": "in_progress" })),
            Some(&staff_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.data_str("status"), "in_progress");

    let list = app
        .request("GET", "/api/notifications", None, Some(&user_token))
        .await;
    assert_eq!(list.status, StatusCode::OK);
    let items = list.body.pointer("/data/items").unwrap().as_array().unwrap();
    assert!(
        items.iter().any(|n| {
            n["message"]
                .as_str()
                .is_some_and(|m| m.contains("status changed to in_progress"))
        }),
        "requester should be notified of the status change: {items:?}"
    );
}

#[tokio::test]
async fn test_reissuing_current_status_notifies_again() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let requester = Uuid::new_v4();
    let user_token = app.token(requester, "user", "dreyes");
    let staff_token = app.token(Uuid::new_v4(), "staff", "jmartin");

    let id = app.create_request(&user_token, "Loose door hinge").await;

    for _ in 0..2 {
        let response = app
            .request(
                "PUT",
                &format!("/api/requests/{id}/status"),
                Some(serde_json::json!({ "status": "on_hold" })),
                Some(&staff_token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let list = app
        .request("GET", "/api/notifications", None, Some(&user_token))
        .await;
    let count = list
        .body
        .pointer("/data/items")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .filter(|n| {
            n["message"]
                .as_str()
                .is_some_and(|m| m.contains("status changed to on_hold"))
        })
        .count();
    assert_eq!(count, 2, "a no-op re-issue still notifies");
}

#[tokio::test]
async fn test_completion_stores_notes_and_notifies() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let requester = Uuid::new_v4();
    let user_token = app.token(requester, "user", "dreyes");
    let staff_token = app.token(Uuid::new_v4(), "staff", "jmartin");

    let id = app.create_request(&user_token, "Cracked window pane").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/requests/{id}/complete"),
            Some(serde_json::json!({ "completion_notes": "Replaced the pane" })),
            Some(&staff_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.data_str("status"), "completed");
    assert_eq!(response.data_str("completion_notes"), "Replaced the pane");

    let list = app
        .request("GET", "/api/notifications", None, Some(&user_token))
        .await;
    let items = list.body.pointer("/data/items").unwrap().as_array().unwrap();
    assert!(
        items.iter().any(|n| {
            n["message"]
                .as_str()
                .is_some_and(|m| m.contains("has been completed"))
        }),
        "requester should be notified of completion: {items:?}"
    );
}

#[tokio::test]
async fn test_status_update_via_completed_keyword_sets_fields() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let user_token = app.token(Uuid::new_v4(), "user", "dreyes");
    let staff_token = app.token(Uuid::new_v4(), "staff", "jmartin");

    let id = app.create_request(&user_token, "Jammed lock").await;

    // The status route accepts "completed" and behaves like /complete.
    let response = app
        .request(
            "PUT",
            &format!("/api/requests/{id}/status"),
            Some(serde_json::json!({
                "status": "completed",
                "completion_notes": "Lubricated and retested",
            })),
            Some(&staff_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data_str("status"), "completed");
    assert_eq!(response.data_str("completion_notes"), "Lubricated and retested");
}

#[tokio::test]
async fn test_unknown_status_is_rejected() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let user_token = app.token(Uuid::new_v4(), "user", "dreyes");
    let staff_token = app.token(Uuid::new_v4(), "staff", "jmartin");

    let id = app.create_request(&user_token, "Peeling paint").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/requests/{id}/status"),
            Some(serde_json::json!({ "status": "resolved" })),
            Some(&staff_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_deleting_request_detaches_rows() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let requester = Uuid::new_v4();
    let user_token = app.token(requester, "user", "dreyes");
    let staff_token = app.token(Uuid::new_v4(), "staff", "jmartin");

    let id = app.create_request(&user_token, "Collapsed shelf bracket").await;

    // Attach a schedule and produce a notification referencing the request.
    let date = chrono::Utc::now()
        .date_naive()
        .checked_add_days(chrono::Days::new(7))
        .unwrap();
    let schedule = app
        .request(
            "PUT",
            &format!("/api/requests/{id}/schedule"),
            Some(serde_json::json!({ "schedule_date": date })),
            Some(&staff_token),
        )
        .await;
    assert_eq!(schedule.status, StatusCode::OK);

    let update = app
        .request(
            "PUT",
            &format!("/api/requests/{id}/status"),
            Some(serde_json::json!({ "status": "in_progress" })),
            Some(&staff_token),
        )
        .await;
    assert_eq!(update.status, StatusCode::OK);

    // Administrative hard delete is repository-level only.
    let repo = campusfix_database::repositories::request::RequestRepository::new(
        app.db_pool.clone(),
    );
    assert!(repo.delete(id).await.unwrap());

    let schedules: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM schedules WHERE request_id = $1")
            .bind(id)
            .fetch_one(&app.db_pool)
            .await
            .unwrap();
    assert_eq!(schedules, 0, "schedules cascade with the request");

    let dangling: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM notifications WHERE recipient = $1 AND request_id IS NULL",
    )
    .bind(requester)
    .fetch_one(&app.db_pool)
    .await
    .unwrap();
    assert!(
        dangling >= 1,
        "notification history survives with a nulled reference"
    );
}

#[tokio::test]
async fn test_missing_request_is_not_found() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let token = app.token(Uuid::new_v4(), "user", "dreyes");
    let response = app
        .request(
            "GET",
            &format!("/api/requests/{}", Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
