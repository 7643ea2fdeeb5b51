#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use serde_json::json;

use common::{TestContext, class_body};

/// 建班并加入三名学生：一名有效邮箱、一名无邮箱、一名邮箱缺少 @
macro_rules! seed_class_with_emails {
    ($app:expr, $name:expr) => {{
        let (_, class) = call_json!(
            $app,
            test::TestRequest::post()
                .uri("/api/classes")
                .set_json(class_body($name))
        );
        let class_id = class["id"].as_str().unwrap().to_string();
        for (roll, email) in [("1", "asha@home.test"), ("2", ""), ("3", "not-an-address")] {
            let (_, student) = call_json!(
                $app,
                test::TestRequest::post()
                    .uri(&format!("/api/classes/{class_id}/students"))
                    .set_json(json!({ "name": format!("Student {roll}"), "roll": roll }))
            );
            let student_id = student["id"].as_str().unwrap().to_string();
            let _ = call_json!(
                $app,
                test::TestRequest::put()
                    .uri(&format!("/api/students/{student_id}"))
                    .set_json(json!({ "email": email }))
            );
        }
        class_id
    }};
}

#[actix_web::test]
async fn notification_fans_out_to_deliverable_addresses() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(ctx.configure())).await;
    let _ = seed_class_with_emails!(app, "10A");

    let (status, body) = call_json!(
        app,
        test::TestRequest::post().uri("/api/notifications").set_json(json!({
            "message": "PTM on Saturday",
            "className": "10A",
            "timestamp": "03/01/2025, 09:00:00 AM"
        }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["emailsSent"], 1);
    assert_eq!(body["notification"]["className"], "10A");
    assert_eq!(body["notification"]["timestamp"], "03/01/2025, 09:00:00 AM");

    let sent = ctx.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to_email, "asha@home.test");
    assert_eq!(sent[0].student_name, "Student 1");
    assert_eq!(sent[0].class_name, "10A");
    assert_eq!(sent[0].message, "PTM on Saturday");
}

#[actix_web::test]
async fn all_classes_reaches_every_student() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(ctx.configure())).await;
    let _ = seed_class_with_emails!(app, "10A");
    let _ = seed_class_with_emails!(app, "10B");

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/notifications")
            .set_json(json!({ "message": "School closed tomorrow", "className": "All Classes" }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["emailsSent"], 2);
    // 未提供时间戳时由服务器生成
    assert!(!body["notification"]["timestamp"].as_str().unwrap().is_empty());
}

#[actix_web::test]
async fn notifications_are_listed_in_posting_order() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(ctx.configure())).await;
    let _ = seed_class_with_emails!(app, "10A");

    for message in ["first", "second", "third"] {
        let (status, _) = call_json!(
            app,
            test::TestRequest::post()
                .uri("/api/notifications")
                .set_json(json!({ "message": message, "className": "10A" }))
        );
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, list) = call_json!(app, test::TestRequest::get().uri("/api/notifications"));
    assert_eq!(status, StatusCode::OK);
    let messages: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["message"].as_str().unwrap())
        .collect();
    assert_eq!(messages, vec!["first", "second", "third"]);
}

#[actix_web::test]
async fn invalid_notifications_are_rejected() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(ctx.configure())).await;
    let _ = seed_class_with_emails!(app, "10A");

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/notifications")
            .set_json(json!({ "message": "   ", "className": "10A" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/notifications")
            .set_json(json!({ "message": "Hello", "className": "10a" }))
    );
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/notifications")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert!(ctx.mailer.sent().is_empty());
    let (_, list) = call_json!(app, test::TestRequest::get().uri("/api/notifications"));
    assert_eq!(list, json!([]));
}
