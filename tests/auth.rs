#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use serde_json::json;

use common::{TestContext, signup_body};

#[actix_web::test]
async fn signup_then_login_returns_teacher_without_password() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(ctx.configure())).await;

    let (status, teacher) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/signup")
            .set_json(signup_body("rao@school.test"))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(teacher["email"], "rao@school.test");
    assert!(teacher.get("password").is_none());
    assert!(teacher.get("passwordHash").is_none());

    let (status, logged_in) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "email": "rao@school.test", "password": "chalk-and-board" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(logged_in["id"], teacher["id"]);
}

#[actix_web::test]
async fn login_failures_are_indistinguishable() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(ctx.configure())).await;

    let _ = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/signup")
            .set_json(signup_body("rao@school.test"))
    );

    let (wrong_status, wrong_body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "email": "rao@school.test", "password": "nope" }))
    );
    let (unknown_status, unknown_body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "email": "ghost@school.test", "password": "chalk-and-board" }))
    );

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, unknown_body);
    assert_eq!(wrong_body["error"], "Invalid credentials");
}

#[actix_web::test]
async fn duplicate_and_invalid_signups_are_rejected() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(ctx.configure())).await;

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/signup")
            .set_json(signup_body("rao@school.test"))
    );
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/signup")
            .set_json(signup_body("RAO@school.test"))
    );
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Email already registered");

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/signup")
            .set_json(json!({ "name": " ", "email": "x@school.test", "password": "pw" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/signup")
            .set_json(json!({ "name": "X", "email": "not-an-email", "password": "pw" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn teacher_profile_and_notepad() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(ctx.configure())).await;

    let (_, teacher) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/signup")
            .set_json(signup_body("rao@school.test"))
    );
    let id = teacher["id"].as_str().unwrap().to_string();

    let (status, updated) = call_json!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/teacher/{id}"))
            .set_json(json!({ "subject": "Physics", "phone": "555-0199" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["subject"], "Physics");
    assert_eq!(updated["name"], "Ms. Rao");

    let (status, _) = call_json!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/teacher/{id}"))
            .set_json(json!({ "name": "  " }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call_json!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/teacher/{id}/notepad"))
            .set_json(json!({ "notepad": "Collect lab reports" }))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "msg": "Saved" }));

    let (status, fetched) = call_json!(
        app,
        test::TestRequest::get().uri(&format!("/api/teacher/{id}"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["notepad"], "Collect lab reports");

    let (status, _) = call_json!(
        app,
        test::TestRequest::get().uri("/api/teacher/t00000000")
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
}
