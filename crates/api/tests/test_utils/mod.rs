#![allow(dead_code)]

use std::sync::Arc;

use axum::http::{header, HeaderName, HeaderValue};
use axum_test::TestServer;
use chrono::NaiveDate;
use serde_json::{json, Value};
use timetable_api::{app, middleware::auth::hash_password, ApiState};
use timetable_core::{clock::FixedClock, models::admin::NewAdmin, store::AdminStore};
use timetable_db::InMemoryStore;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

pub struct TestContext {
    pub server: TestServer,
    pub store: Arc<InMemoryStore>,
}

impl TestContext {
    /// A server whose clock reads Wednesday 2024-01-03.
    pub async fn new() -> Self {
        Self::on(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()).await
    }

    pub async fn on(date: NaiveDate) -> Self {
        let store = Arc::new(InMemoryStore::new());
        store
            .insert_admin(NewAdmin {
                username: ADMIN_USERNAME.to_string(),
                password_hash: hash_password(ADMIN_PASSWORD).unwrap(),
                role: "admin".to_string(),
            })
            .await
            .unwrap();

        let state = Arc::new(ApiState::new(
            store.clone(),
            Arc::new(FixedClock(date)),
            chrono::Duration::hours(24),
        ));
        let server = TestServer::new(app(state)).unwrap();

        Self { server, store }
    }

    pub async fn login(&self) -> String {
        let response = self
            .server
            .post("/api/auth/login")
            .json(&json!({ "username": ADMIN_USERNAME, "password": ADMIN_PASSWORD }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        body["data"]["token"].as_str().unwrap().to_string()
    }

    /// Creates an entry as admin and returns its id.
    pub async fn create_entry(&self, token: &str, entry: Value) -> String {
        let response = self
            .server
            .post("/api/timetables")
            .add_header(bearer_name(), bearer(token))
            .json(&entry)
            .await;
        assert_eq!(response.status_code(), 201, "{}", response.text());

        let body: Value = response.json();
        body["data"]["id"].as_str().unwrap().to_string()
    }
}

pub fn bearer_name() -> HeaderName {
    header::AUTHORIZATION
}

pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).unwrap()
}

pub fn lesson(day: &str, period: u8, grade: u8, class: &str, room: &str, teacher: &str) -> Value {
    json!({
        "day": day,
        "period": period,
        "roomNumber": room,
        "teacherName": teacher,
        "teacherSubject": "Mathematics",
        "grade": grade,
        "class": class,
        "isBreak": false
    })
}
