#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use serde_json::{Value, json};

use common::{TestContext, class_body};

/// 建一个班级并加入指定学号的学生，返回 (班级ID, 学生ID 列表)
macro_rules! seed_class {
    ($app:expr, $name:expr, $rolls:expr) => {{
        let (_, class) = call_json!(
            $app,
            test::TestRequest::post()
                .uri("/api/classes")
                .set_json(class_body($name))
        );
        let class_id = class["id"].as_str().unwrap().to_string();
        let mut student_ids = Vec::new();
        for roll in $rolls {
            let (_, student) = call_json!(
                $app,
                test::TestRequest::post()
                    .uri(&format!("/api/classes/{class_id}/students"))
                    .set_json(json!({ "name": format!("Student {roll}"), "roll": roll }))
            );
            student_ids.push(student["id"].as_str().unwrap().to_string());
        }
        (class_id, student_ids)
    }};
}

fn mark(student_id: &str, class_name: &str, date: &str, status: &str) -> Value {
    json!({ "studentId": student_id, "className": class_name, "date": date, "status": status })
}

#[actix_web::test]
async fn marking_twice_overwrites_same_day() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(ctx.configure())).await;
    let (_, students) = seed_class!(app, "10A", ["1", "2"]);

    let (status, body) = call_json!(
        app,
        test::TestRequest::post().uri("/api/attendance").set_json(json!([
            mark(&students[0], "10A", "03/01/2025", "P"),
            mark(&students[1], "10A", "2025-03-01", "A"),
        ]))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "msg": "Saved", "saved": 2 }));

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/attendance")
            .set_json(json!([mark(&students[1], "10A", "2025-03-01", "P")]))
    );
    assert_eq!(status, StatusCode::CREATED);

    let (status, records) = call_json!(
        app,
        test::TestRequest::get().uri("/api/attendance?date=2025-03-01")
    );
    assert_eq!(status, StatusCode::OK);
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r["status"] == "P"));
    assert!(records.iter().all(|r| r["date"] == "2025-03-01"));
    assert!(records.iter().all(|r| r["period"] == "Period 1"));
    assert_eq!(records[0]["studentName"], "Student 1");

    let (_, summary) = call_json!(
        app,
        test::TestRequest::get().uri("/api/attendance/summary?date=03/01/2025")
    );
    assert_eq!(
        summary,
        json!([{ "className": "10A", "present": 2, "absent": 0 }])
    );
}

#[actix_web::test]
async fn list_without_filters_is_empty() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(ctx.configure())).await;
    let (_, students) = seed_class!(app, "10A", ["1"]);

    let _ = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/attendance")
            .set_json(json!([mark(&students[0], "10A", "2025-03-01", "P")]))
    );

    let (status, records) = call_json!(app, test::TestRequest::get().uri("/api/attendance"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(records, json!([]));

    let (_, by_student) = call_json!(
        app,
        test::TestRequest::get().uri(&format!("/api/attendance?studentId={}", students[0]))
    );
    assert_eq!(by_student.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn class_and_student_references_are_checked() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(ctx.configure())).await;
    let (_, students_a) = seed_class!(app, "10A", ["1"]);
    let (_, students_b) = seed_class!(app, "10B", ["1"]);

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/attendance")
            .set_json(json!([mark(&students_a[0], "10 A", "2025-03-01", "P")]))
    );
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/attendance")
            .set_json(json!([mark(&students_b[0], "10A", "2025-03-01", "P")]))
    );
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/attendance")
            .set_json(json!([mark("s00000000", "10A", "2025-03-01", "P")]))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/attendance")
            .set_json(json!([mark(&students_a[0], "10A", "first of March", "P")]))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // 整批拒绝，没有任何记录写入
    let (_, records) = call_json!(
        app,
        test::TestRequest::get().uri("/api/attendance?date=2025-03-01")
    );
    assert_eq!(records, json!([]));
}

#[actix_web::test]
async fn roster_for_timetable_subject() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(ctx.configure())).await;
    let _ = seed_class!(app, "10A", ["2", "1"]);

    let (status, roster) = call_json!(
        app,
        test::TestRequest::get().uri("/api/attendance/roster?subject=10A")
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(roster[0]["roll"], "1");
    assert_eq!(roster[1]["roll"], "2");

    let (status, body) = call_json!(
        app,
        test::TestRequest::get().uri("/api/attendance/roster?subject=Maths")
    );
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["error"],
        "Class name in Timetable must match Class List name exactly."
    );
}

#[actix_web::test]
async fn analytics_reports_attendance_percentage() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(ctx.configure())).await;
    let (_, students) = seed_class!(app, "10A", ["1"]);
    let student_id = students[0].clone();

    let (_, empty) = call_json!(
        app,
        test::TestRequest::get().uri(&format!("/api/students/{student_id}/analytics"))
    );
    assert_eq!(empty["attendance"]["percentage"], 0);
    assert_eq!(empty["attendance"]["total"], 0);

    let _ = call_json!(
        app,
        test::TestRequest::post().uri("/api/attendance").set_json(json!([
            mark(&student_id, "10A", "2025-03-01", "P"),
        ]))
    );
    let _ = call_json!(
        app,
        test::TestRequest::post().uri("/api/attendance").set_json(json!([
            mark(&student_id, "10A", "2025-03-02", "P"),
        ]))
    );
    let _ = call_json!(
        app,
        test::TestRequest::post().uri("/api/attendance").set_json(json!([
            mark(&student_id, "10A", "2025-03-03", "A"),
        ]))
    );

    let (status, analytics) = call_json!(
        app,
        test::TestRequest::get().uri(&format!("/api/students/{student_id}/analytics"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        analytics["attendance"],
        json!({ "percentage": 67, "present": 2, "total": 3, "belowThreshold": true })
    );
    assert_eq!(analytics["scores"], json!([]));
}
