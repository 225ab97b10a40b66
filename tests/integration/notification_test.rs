//! Notification endpoint integration tests: listing, unread counts,
//! read flags, and ownership.

use http::StatusCode;
use uuid::Uuid;

use crate::helpers::TestApp;

/// Drive a status change so the requester receives one notification.
async fn notify_once(app: &TestApp, staff_token: &str, request_id: Uuid, status: &str) {
    let response = app
        .request(
            "PUT",
            &format!("/api/requests/{request_id}/status"),
            Some(serde_json::json!({ "status": status })),
            Some(staff_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
}

async fn first_notification_id(app: &TestApp, token: &str) -> Uuid {
    let list = app.request("GET", "/api/notifications", None, Some(token)).await;
    assert_eq!(list.status, StatusCode::OK);
    list.body
        .pointer("/data/items/0/id")
        .and_then(|v| v.as_str())
        .and_then(|s| s.parse().ok())
        .expect("expected at least one notification")
}

async fn unread_count(app: &TestApp, token: &str) -> i64 {
    let response = app
        .request("GET", "/api/notifications/unread-count", None, Some(token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    response
        .body
        .pointer("/data/count")
        .and_then(|v| v.as_i64())
        .expect("No data.count in response")
}

#[tokio::test]
async fn test_unread_count_tracks_deliveries_and_reads() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let requester = Uuid::new_v4();
    let user_token = app.token(requester, "user", "dreyes");
    let staff_token = app.token(Uuid::new_v4(), "staff", "jmartin");

    assert_eq!(unread_count(&app, &user_token).await, 0);

    let id = app.create_request(&user_token, "Buzzing exit sign").await;
    notify_once(&app, &staff_token, id, "in_progress").await;
    notify_once(&app, &staff_token, id, "on_hold").await;

    assert_eq!(unread_count(&app, &user_token).await, 2);

    let notif_id = first_notification_id(&app, &user_token).await;
    let mark = app
        .request(
            "PUT",
            &format!("/api/notifications/{notif_id}/read"),
            None,
            Some(&user_token),
        )
        .await;
    assert_eq!(mark.status, StatusCode::OK);
    assert_eq!(unread_count(&app, &user_token).await, 1);
}

#[tokio::test]
async fn test_mark_read_is_idempotent() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let user_token = app.token(Uuid::new_v4(), "user", "dreyes");
    let staff_token = app.token(Uuid::new_v4(), "staff", "jmartin");

    let id = app.create_request(&user_token, "Loose floor transition strip").await;
    notify_once(&app, &staff_token, id, "in_progress").await;

    let notif_id = first_notification_id(&app, &user_token).await;
    for _ in 0..2 {
        let mark = app
            .request(
                "PUT",
                &format!("/api/notifications/{notif_id}/read"),
                None,
                Some(&user_token),
            )
            .await;
        assert_eq!(mark.status, StatusCode::OK, "marking read twice is a no-op");
    }
}

#[tokio::test]
async fn test_notifications_are_owner_scoped() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let user_token = app.token(Uuid::new_v4(), "user", "dreyes");
    let staff_token = app.token(Uuid::new_v4(), "staff", "jmartin");
    let other_token = app.token(Uuid::new_v4(), "user", "bwong");

    let id = app.create_request(&user_token, "Sticky classroom door").await;
    notify_once(&app, &staff_token, id, "in_progress").await;

    let notif_id = first_notification_id(&app, &user_token).await;

    let foreign_mark = app
        .request(
            "PUT",
            &format!("/api/notifications/{notif_id}/read"),
            None,
            Some(&other_token),
        )
        .await;
    assert_eq!(foreign_mark.status, StatusCode::FORBIDDEN);

    let foreign_delete = app
        .request(
            "DELETE",
            &format!("/api/notifications/{notif_id}"),
            None,
            Some(&other_token),
        )
        .await;
    assert_eq!(foreign_delete.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_mark_all_read_reports_flipped_rows() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let user_token = app.token(Uuid::new_v4(), "user", "dreyes");
    let staff_token = app.token(Uuid::new_v4(), "staff", "jmartin");

    let id = app.create_request(&user_token, "Chipped stair nosing").await;
    notify_once(&app, &staff_token, id, "in_progress").await;
    notify_once(&app, &staff_token, id, "on_hold").await;

    let response = app
        .request("PUT", "/api/notifications/read-all", None, Some(&user_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body.pointer("/data/marked").and_then(|v| v.as_u64()),
        Some(2)
    );
    assert_eq!(unread_count(&app, &user_token).await, 0);
}

#[tokio::test]
async fn test_delete_removes_notification() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let user_token = app.token(Uuid::new_v4(), "user", "dreyes");
    let staff_token = app.token(Uuid::new_v4(), "staff", "jmartin");

    let id = app.create_request(&user_token, "Burned-out lamp post").await;
    notify_once(&app, &staff_token, id, "in_progress").await;

    let notif_id = first_notification_id(&app, &user_token).await;

    let delete = app
        .request(
            "DELETE",
            &format!("/api/notifications/{notif_id}"),
            None,
            Some(&user_token),
        )
        .await;
    assert_eq!(delete.status, StatusCode::OK);

    let again = app
        .request(
            "DELETE",
            &format!("/api/notifications/{notif_id}"),
            None,
            Some(&user_token),
        )
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let user_token = app.token(Uuid::new_v4(), "user", "dreyes");
    let staff_token = app.token(Uuid::new_v4(), "staff", "jmartin");

    let id = app.create_request(&user_token, "Cracked whiteboard tray").await;
    notify_once(&app, &staff_token, id, "in_progress").await;
    notify_once(&app, &staff_token, id, "completed").await;

    let list = app
        .request("GET", "/api/notifications", None, Some(&user_token))
        .await;
    let items = list.body.pointer("/data/items").unwrap().as_array().unwrap();
    assert!(items.len() >= 2);

    let timestamps: Vec<chrono::DateTime<chrono::Utc>> = items
        .iter()
        .filter_map(|n| n["created_at"].as_str())
        .filter_map(|s| s.parse().ok())
        .collect();
    assert!(
        timestamps.windows(2).all(|w| w[0] >= w[1]),
        "notifications are ordered newest first: {timestamps:?}"
    );
}
