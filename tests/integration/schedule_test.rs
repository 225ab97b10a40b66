//! Scheduling integration tests: upsert semantics, date validation,
//! and the month calendar view.

use chrono::{Datelike, Days, NaiveDate, Utc};
use http::StatusCode;
use uuid::Uuid;

use crate::helpers::TestApp;

/// A date far enough ahead that it is never "yesterday" while the test
/// runs, placed on the 10th so adding a few days stays in one month.
fn future_date() -> NaiveDate {
    let today = Utc::now().date_naive();
    NaiveDate::from_ymd_opt(today.year() + 1, 3, 10).unwrap()
}

#[tokio::test]
async fn test_staff_schedules_visit_and_requester_is_notified() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let requester = Uuid::new_v4();
    let user_token = app.token(requester, "user", "dreyes");
    let staff_token = app.token(Uuid::new_v4(), "staff", "jmartin");

    let id = app.create_request(&user_token, "Warped floor tile").await;
    let date = future_date();

    let response = app
        .request(
            "PUT",
            &format!("/api/requests/{id}/schedule"),
            Some(serde_json::json!({
                "schedule_date": date,
                "estimated_duration": "2 hours",
            })),
            Some(&staff_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.data_str("schedule_date"), date.to_string());
    assert_eq!(response.data_str("estimated_duration"), "2 hours");

    let list = app
        .request("GET", "/api/notifications", None, Some(&user_token))
        .await;
    let items = list.body.pointer("/data/items").unwrap().as_array().unwrap();
    assert!(
        items.iter().any(|n| {
            n["message"]
                .as_str()
                .is_some_and(|m| m.contains(&format!("scheduled for {date}")))
        }),
        "requester should be notified of the schedule: {items:?}"
    );
}

#[tokio::test]
async fn test_scheduling_with_staff_notifies_that_staff() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let user_token = app.token(Uuid::new_v4(), "user", "dreyes");
    let admin_token = app.token(Uuid::new_v4(), "admin", "padmin");
    let staff_id = Uuid::new_v4();
    let staff_token = app.token(staff_id, "staff", "jmartin");

    let id = app.create_request(&user_token, "Blocked fire exit sign").await;
    let date = future_date();

    let response = app
        .request(
            "PUT",
            &format!("/api/requests/{id}/schedule"),
            Some(serde_json::json!({
                "schedule_date": date,
                "assigned_staff": staff_id,
            })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let list = app
        .request("GET", "/api/notifications", None, Some(&staff_token))
        .await;
    let items = list.body.pointer("/data/items").unwrap().as_array().unwrap();
    assert!(
        items.iter().any(|n| {
            n["message"]
                .as_str()
                .is_some_and(|m| m.contains("maintenance task scheduled"))
        }),
        "attached staff should be notified: {items:?}"
    );
}

#[tokio::test]
async fn test_past_date_is_rejected() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let user_token = app.token(Uuid::new_v4(), "user", "dreyes");
    let staff_token = app.token(Uuid::new_v4(), "staff", "jmartin");

    let id = app.create_request(&user_token, "Dented locker door").await;
    let yesterday = Utc::now()
        .date_naive()
        .checked_sub_days(Days::new(1))
        .unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/requests/{id}/schedule"),
            Some(serde_json::json!({ "schedule_date": yesterday })),
            Some(&staff_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_plain_user_cannot_schedule() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let user_token = app.token(Uuid::new_v4(), "user", "dreyes");
    let id = app.create_request(&user_token, "Wobbly handrail").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/requests/{id}/schedule"),
            Some(serde_json::json!({ "schedule_date": future_date() })),
            Some(&user_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_rescheduling_overwrites_and_month_view_shows_latest() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let user_token = app.token(Uuid::new_v4(), "user", "dreyes");
    let staff_token = app.token(Uuid::new_v4(), "staff", "jmartin");

    let id = app.create_request(&user_token, "Faded crosswalk paint").await;
    let first = future_date();
    let second = first.checked_add_days(Days::new(3)).unwrap();

    for date in [first, second] {
        let response = app
            .request(
                "PUT",
                &format!("/api/requests/{id}/schedule"),
                Some(serde_json::json!({ "schedule_date": date })),
                Some(&staff_token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let month = app
        .request(
            "GET",
            &format!(
                "/api/schedules?year={}&month={}",
                second.year(),
                second.month()
            ),
            None,
            Some(&staff_token),
        )
        .await;
    assert_eq!(month.status, StatusCode::OK, "{:?}", month.body);

    let entries: Vec<&serde_json::Value> = month
        .body
        .pointer("/data")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .filter(|e| e["request_id"] == serde_json::json!(id))
        .collect();
    assert_eq!(entries.len(), 1, "one schedule per request, latest wins");
    assert_eq!(
        entries[0]["schedule_date"],
        serde_json::json!(second.to_string())
    );
    // The calendar view joins request summary fields.
    assert_eq!(
        entries[0]["description"],
        serde_json::json!("Faded crosswalk paint")
    );
}

#[tokio::test]
async fn test_schedule_for_missing_request_is_not_found() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let staff_token = app.token(Uuid::new_v4(), "staff", "jmartin");
    let response = app
        .request(
            "PUT",
            &format!("/api/requests/{}/schedule", Uuid::new_v4()),
            Some(serde_json::json!({ "schedule_date": future_date() })),
            Some(&staff_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_month_is_rejected() {
    let Some(app) = TestApp::try_new().await else {
        return;
    };

    let staff_token = app.token(Uuid::new_v4(), "staff", "jmartin");
    let response = app
        .request(
            "GET",
            "/api/schedules?year=2025&month=13",
            None,
            Some(&staff_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
