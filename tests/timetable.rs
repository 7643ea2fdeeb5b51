#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use serde_json::json;

use common::{TestContext, class_body};

#[actix_web::test]
async fn subject_must_match_a_class_name() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(ctx.configure())).await;
    let _ = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/classes")
            .set_json(class_body("10A"))
    );

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/timetable")
            .set_json(json!({ "day": "Monday", "time": "09:00", "subject": "Physics" }))
    );
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["error"],
        "Class name in Timetable must match Class List name exactly."
    );

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/timetable")
            .set_json(json!({ "day": "Someday", "time": "09:00", "subject": "10A" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/timetable")
            .set_json(json!({ "day": "Monday", "time": "25:00", "subject": "10A" }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn week_and_grid_views() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(ctx.configure())).await;
    let _ = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/classes")
            .set_json(class_body("10A"))
    );

    for (day, time) in [("Monday", "11:30"), ("monday", "9:00"), ("Friday", "09:00")] {
        let (status, entry) = call_json!(
            app,
            test::TestRequest::post().uri("/api/timetable").set_json(json!({
                "day": day,
                "time": time,
                "subject": "10A",
                "teacher": "Ms. Rao",
                "location": "Room 4"
            }))
        );
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(entry["time"].as_str().unwrap().len(), 5);
    }

    let (status, week) = call_json!(app, test::TestRequest::get().uri("/api/timetable/week"));
    assert_eq!(status, StatusCode::OK);
    let week = week.as_array().unwrap();
    assert_eq!(week.len(), 7);
    assert_eq!(week[0]["day"], "Monday");
    assert_eq!(week[0]["entries"][0]["time"], "09:00");
    assert_eq!(week[0]["entries"][1]["time"], "11:30");
    assert_eq!(week[4]["entries"].as_array().unwrap().len(), 1);
    assert_eq!(week[6]["entries"], json!([]));

    let (status, grid) = call_json!(app, test::TestRequest::get().uri("/api/timetable/grid"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(grid["days"].as_array().unwrap().len(), 7);
    assert_eq!(grid["rows"].as_array().unwrap().len(), 2);
    assert_eq!(grid["rows"][0]["time"], "09:00");
    assert_eq!(grid["rows"][0]["cells"][0]["day"], "Monday");
    assert_eq!(grid["rows"][0]["cells"][1], serde_json::Value::Null);
    assert_eq!(grid["rows"][0]["cells"][4]["day"], "Friday");
}

#[actix_web::test]
async fn delete_entry() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(ctx.configure())).await;
    let _ = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/classes")
            .set_json(class_body("10A"))
    );
    let (_, entry) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/timetable")
            .set_json(json!({ "day": "Tuesday", "time": "10:00", "subject": "10A" }))
    );
    let entry_id = entry["id"].as_str().unwrap().to_string();
    assert_eq!(entry["teacher"], "");

    let (status, _) = call_json!(
        app,
        test::TestRequest::delete().uri(&format!("/api/timetable/{entry_id}"))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call_json!(
        app,
        test::TestRequest::delete().uri(&format!("/api/timetable/{entry_id}"))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, entries) = call_json!(app, test::TestRequest::get().uri("/api/timetable"));
    assert_eq!(entries, json!([]));
}
