mod test_utils;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_utils::{bearer, bearer_name, TestContext};

async fn create_teacher(ctx: &TestContext, token: &str, name: &str, subject: &str) -> Value {
    let response = ctx
        .server
        .post("/api/teachers")
        .add_header(bearer_name(), bearer(token))
        .json(&json!({ "name": name, "subject": subject }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    body["data"].clone()
}

async fn create_classroom(ctx: &TestContext, token: &str, room: &str) -> Value {
    let response = ctx
        .server
        .post("/api/classrooms")
        .add_header(bearer_name(), bearer(token))
        .json(&json!({ "roomNumber": room }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED, "{}", response.text());
    let body: Value = response.json();
    body["data"].clone()
}

#[tokio::test]
async fn test_teacher_lifecycle() {
    let ctx = TestContext::new().await;
    let token = ctx.login().await;

    let michael = create_teacher(&ctx, &token, "Michael Chen", "Physics").await;
    create_teacher(&ctx, &token, "Emily Davis", "Applied Physics").await;
    create_teacher(&ctx, &token, "Sarah Johnson", "Mathematics").await;

    let body: Value = ctx.server.get("/api/teachers").await.json();
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|teacher| teacher["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Emily Davis", "Michael Chen", "Sarah Johnson"]);

    let body: Value = ctx.server.get("/api/teachers/subject/physics").await.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let id = michael["id"].as_str().unwrap();
    let response = ctx
        .server
        .put(&format!("/api/teachers/{}", id))
        .add_header(bearer_name(), bearer(&token))
        .json(&json!({ "name": "Michael Chen", "subject": "Chemistry" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["subject"], "Chemistry");

    let response = ctx
        .server
        .delete(&format!("/api/teachers/{}", id))
        .add_header(bearer_name(), bearer(&token))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Teacher deleted successfully");
    assert_eq!(body["data"]["isActive"], false);

    // Deactivated teachers leave the listing but stay addressable by id.
    let body: Value = ctx.server.get("/api/teachers").await.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    let body: Value = ctx.server.get(&format!("/api/teachers/{}", id)).await.json();
    assert_eq!(body["data"]["isActive"], false);
}

#[tokio::test]
async fn test_teacher_validation_and_lookup_errors() {
    let ctx = TestContext::new().await;
    let token = ctx.login().await;

    let response = ctx
        .server
        .post("/api/teachers")
        .add_header(bearer_name(), bearer(&token))
        .json(&json!({ "name": "Nobody" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Name and subject are required");

    let response = ctx.server.get("/api/teachers/not-a-uuid").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = ctx
        .server
        .delete("/api/teachers/00000000-0000-0000-0000-000000000000")
        .add_header(bearer_name(), bearer(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "Teacher not found");
}

#[tokio::test]
async fn test_classroom_lifecycle() {
    let ctx = TestContext::new().await;
    let token = ctx.login().await;

    create_classroom(&ctx, &token, "203").await;
    let first = create_classroom(&ctx, &token, "101").await;
    create_classroom(&ctx, &token, "110").await;
    assert_eq!(first["roomNumber"], "101");
    assert_eq!(first["floor"], 1);
    assert_eq!(first["isActive"], true);

    let body: Value = ctx.server.get("/api/classrooms").await.json();
    let rooms: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|room| room["roomNumber"].as_str().unwrap())
        .collect();
    assert_eq!(rooms, vec!["101", "110", "203"]);

    let body: Value = ctx.server.get("/api/classrooms/floor/1").await.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let response = ctx.server.get("/api/classrooms/floor/3").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Floor must be 1 or 2");

    let body: Value = ctx.server.get("/api/classrooms/203").await.json();
    assert_eq!(body["data"]["floor"], 2);

    // A room number can only be registered once.
    let response = ctx
        .server
        .post("/api/classrooms")
        .add_header(bearer_name(), bearer(&token))
        .json(&json!({ "roomNumber": "101" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let id = first["id"].as_str().unwrap();
    let response = ctx
        .server
        .put(&format!("/api/classrooms/{}", id))
        .add_header(bearer_name(), bearer(&token))
        .json(&json!({ "roomNumber": "102" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["roomNumber"], "102");

    let response = ctx
        .server
        .delete(&format!("/api/classrooms/{}", id))
        .add_header(bearer_name(), bearer(&token))
        .await;
    response.assert_status_ok();

    let response = ctx.server.get("/api/classrooms/102").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "Classroom 102 not found");
}

#[tokio::test]
async fn test_classroom_rejects_out_of_range_rooms() {
    let ctx = TestContext::new().await;
    let token = ctx.login().await;

    for room in ["111", "208", "abc"] {
        let response = ctx
            .server
            .post("/api/classrooms")
            .add_header(bearer_name(), bearer(&token))
            .json(&json!({ "roomNumber": room }))
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{}", room);
    }

    let response = ctx
        .server
        .post("/api/classrooms")
        .add_header(bearer_name(), bearer(&token))
        .json(&json!({}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Room number is required");
}

#[tokio::test]
async fn test_stats_count_active_directory_entries() {
    let ctx = TestContext::new().await;
    let token = ctx.login().await;

    create_teacher(&ctx, &token, "Sarah Johnson", "Mathematics").await;
    let leaving = create_teacher(&ctx, &token, "Michael Chen", "Physics").await;
    create_classroom(&ctx, &token, "105").await;

    ctx.server
        .delete(&format!("/api/teachers/{}", leaving["id"].as_str().unwrap()))
        .add_header(bearer_name(), bearer(&token))
        .await
        .assert_status_ok();

    let body: Value = ctx.server.get("/api/timetables/stats").await.json();
    assert_eq!(body["data"]["totalTeachers"], 1);
    assert_eq!(body["data"]["totalClassrooms"], 1);
    assert_eq!(body["data"]["totalEntries"], 0);
}

#[tokio::test]
async fn test_grades_catalog() {
    let ctx = TestContext::new().await;

    let body: Value = ctx.server.get("/api/grades").await.json();
    let grades = body["data"].as_array().unwrap();
    assert_eq!(grades.len(), 7);
    assert_eq!(
        grades[0],
        json!({ "id": 5, "name": "Grade 5", "classes": ["Green", "Blue"] })
    );

    let body: Value = ctx.server.get("/api/grades/11").await.json();
    assert_eq!(body["data"]["name"], "Grade 11");

    for id in ["4", "12", "eleven"] {
        let response = ctx.server.get(&format!("/api/grades/{}", id)).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND, "{}", id);
    }

    let body: Value = ctx.server.get("/api/grades/subjects/list").await.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 20);

    let body: Value = ctx
        .server
        .get("/api/grades/subjects/category/Sciences")
        .await
        .json();
    assert_eq!(
        body["data"],
        json!(["Physics", "Chemistry", "Biology", "Computer Science"])
    );

    let body: Value = ctx
        .server
        .get("/api/grades/subjects/category/unknown")
        .await
        .json();
    assert_eq!(body["data"].as_array().unwrap().len(), 20);
}
