#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use serde_json::json;

use common::{TestContext, class_body};

#[actix_web::test]
async fn create_class_and_list_with_students() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(ctx.configure())).await;

    let (status, class) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/classes")
            .set_json(class_body("10A"))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(class["name"], "10A");
    assert_eq!(class["students"], json!([]));
    let class_id = class["id"].as_str().unwrap().to_string();

    let (status, student) = call_json!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/classes/{class_id}/students"))
            .set_json(json!({ "name": "Asha", "roll": "10A1" }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(student["status"], "Day Scholar");
    assert_eq!(student["email"], "");

    let (status, classes) = call_json!(app, test::TestRequest::get().uri("/api/classes"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(classes.as_array().unwrap().len(), 1);
    assert_eq!(classes[0]["students"][0]["name"], "Asha");
}

#[actix_web::test]
async fn class_validation_and_conflicts() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(ctx.configure())).await;

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/classes")
            .set_json(json!({ "name": "10A" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "coordinatorName is required");

    let _ = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/classes")
            .set_json(class_body("10A"))
    );
    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/classes")
            .set_json(class_body("10A"))
    );
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/classes/c00000000/students")
            .set_json(json!({ "name": "Asha", "roll": "1" }))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/api/classes/bad%21id"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn roster_uses_numeric_aware_roll_order() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(ctx.configure())).await;

    let (_, class) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/classes")
            .set_json(class_body("10A"))
    );
    let class_id = class["id"].as_str().unwrap().to_string();

    for roll in ["10A010", "10A002", "10A1"] {
        let (status, _) = call_json!(
            app,
            test::TestRequest::post()
                .uri(&format!("/api/classes/{class_id}/students"))
                .set_json(json!({ "name": format!("Student {roll}"), "roll": roll }))
        );
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, roster) = call_json!(
        app,
        test::TestRequest::get().uri(&format!("/api/classes/{class_id}/roster"))
    );
    assert_eq!(status, StatusCode::OK);
    let rolls: Vec<&str> = roster
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["roll"].as_str().unwrap())
        .collect();
    assert_eq!(rolls, vec!["10A1", "10A002", "10A010"]);
}

#[actix_web::test]
async fn student_partial_update_and_validation() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(ctx.configure())).await;

    let (_, class) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/classes")
            .set_json(class_body("10A"))
    );
    let class_id = class["id"].as_str().unwrap().to_string();
    let (_, student) = call_json!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/classes/{class_id}/students"))
            .set_json(json!({ "name": "Asha", "roll": "1" }))
    );
    let student_id = student["id"].as_str().unwrap().to_string();

    let (status, updated) = call_json!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/students/{student_id}"))
            .set_json(json!({ "email": "asha@home.test", "status": "Hosteller" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["email"], "asha@home.test");
    assert_eq!(updated["status"], "Hosteller");
    assert_eq!(updated["name"], "Asha");
    assert_eq!(updated["roll"], "1");

    let (status, _) = call_json!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/students/{student_id}"))
            .set_json(json!({ "status": "Boarder" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, noted) = call_json!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/students/{student_id}/notes"))
            .set_json(json!({ "notes": "Needs extra help with fractions" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(noted["notes"], "Needs extra help with fractions");
}

#[actix_web::test]
async fn deleting_class_removes_students() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(ctx.configure())).await;

    let (_, class) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/classes")
            .set_json(class_body("10A"))
    );
    let class_id = class["id"].as_str().unwrap().to_string();
    let (_, student) = call_json!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/classes/{class_id}/students"))
            .set_json(json!({ "name": "Asha", "roll": "1" }))
    );
    let student_id = student["id"].as_str().unwrap().to_string();
    let (_, exam) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/exams")
            .set_json(json!({ "title": "Unit Test", "totalMarks": 25, "classId": class_id }))
    );

    let (status, _) = call_json!(
        app,
        test::TestRequest::delete().uri(&format!("/api/classes/{class_id}"))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call_json!(
        app,
        test::TestRequest::get().uri(&format!("/api/classes/{class_id}"))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call_json!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/students/{student_id}"))
            .set_json(json!({ "phone": "555-0000" }))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, exams) = call_json!(app, test::TestRequest::get().uri("/api/exams"));
    assert!(
        !exams
            .as_array()
            .unwrap()
            .iter()
            .any(|e| e["id"] == exam["id"])
    );

    let (status, _) = call_json!(
        app,
        test::TestRequest::delete().uri(&format!("/api/classes/{class_id}"))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn renaming_class_updates_denormalized_names() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(ctx.configure())).await;

    let (_, class) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/classes")
            .set_json(class_body("10A"))
    );
    let class_id = class["id"].as_str().unwrap().to_string();

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/notifications")
            .set_json(json!({ "message": "Field trip on Friday", "className": "10A" }))
    );
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/timetable")
            .set_json(json!({ "day": "Monday", "time": "09:00", "subject": "10A" }))
    );
    assert_eq!(status, StatusCode::CREATED);

    let (status, renamed) = call_json!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/classes/{class_id}"))
            .set_json(json!({ "name": "10-Alpha" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(renamed["name"], "10-Alpha");

    let (_, notifications) = call_json!(app, test::TestRequest::get().uri("/api/notifications"));
    assert_eq!(notifications[0]["className"], "10-Alpha");
    let (_, timetable) = call_json!(app, test::TestRequest::get().uri("/api/timetable"));
    assert_eq!(timetable[0]["subject"], "10-Alpha");
}
