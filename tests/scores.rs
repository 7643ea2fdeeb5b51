#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use serde_json::json;

use common::{TestContext, class_body};

#[actix_web::test]
async fn exam_total_marks_accepts_numeric_strings() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(ctx.configure())).await;

    let (status, exam) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/exams")
            .set_json(json!({ "title": "Midterm", "totalMarks": "50" }))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(exam["totalMarks"], 50);
    assert_eq!(exam["classId"], serde_json::Value::Null);

    for bad in [json!(0), json!("fifty"), json!(null)] {
        let (status, _) = call_json!(
            app,
            test::TestRequest::post()
                .uri("/api/exams")
                .set_json(json!({ "title": "Broken", "totalMarks": bad }))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

#[actix_web::test]
async fn scores_are_upserted_and_kept_verbatim() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(ctx.configure())).await;

    let (_, class) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/classes")
            .set_json(class_body("10A"))
    );
    let class_id = class["id"].as_str().unwrap().to_string();
    let mut student_ids = Vec::new();
    for roll in ["2", "1"] {
        let (_, student) = call_json!(
            app,
            test::TestRequest::post()
                .uri(&format!("/api/classes/{class_id}/students"))
                .set_json(json!({ "name": format!("Student {roll}"), "roll": roll }))
        );
        student_ids.push(student["id"].as_str().unwrap().to_string());
    }
    let (_, exam) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/exams")
            .set_json(json!({ "title": "Midterm", "totalMarks": 100, "classId": class_id }))
    );
    let exam_id = exam["id"].as_str().unwrap().to_string();

    let (status, saved) = call_json!(
        app,
        test::TestRequest::post().uri("/api/scores").set_json(json!([
            { "examId": exam_id, "studentId": student_ids[0], "marks": 42 },
            { "examId": exam_id, "studentId": student_ids[1], "marks": " Ab " },
        ]))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["saved"], 2);

    // 同一 (考试, 学生) 再次保存覆盖旧值
    let _ = call_json!(
        app,
        test::TestRequest::post().uri("/api/scores").set_json(json!([
            { "examId": exam_id, "studentId": student_ids[0], "marks": "45.5" },
        ]))
    );

    let (_, scores) = call_json!(
        app,
        test::TestRequest::get().uri(&format!("/api/scores?examId={exam_id}"))
    );
    let scores = scores.as_array().unwrap();
    assert_eq!(scores.len(), 2);
    let marks_for = |student: &str| {
        scores
            .iter()
            .find(|s| s["studentId"] == student)
            .map(|s| s["marks"].clone())
    };
    assert_eq!(marks_for(student_ids[0].as_str()), Some(json!("45.5")));
    assert_eq!(marks_for(student_ids[1].as_str()), Some(json!("Ab")));

    let (status, sheet) = call_json!(
        app,
        test::TestRequest::get().uri(&format!("/api/exams/{exam_id}/sheet"))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sheet["classId"], class_id.as_str());
    assert_eq!(sheet["rows"][0]["roll"], "1");
    assert_eq!(sheet["rows"][0]["marks"], "Ab");
    assert_eq!(sheet["rows"][1]["marks"], "45.5");

    let (_, analytics) = call_json!(
        app,
        test::TestRequest::get().uri(&format!("/api/students/{}/analytics", student_ids[0]))
    );
    assert_eq!(
        analytics["scores"],
        json!([{ "exam": "Midterm", "total": 100, "obtained": "45.5" }])
    );
}

#[actix_web::test]
async fn invalid_scores_are_rejected() {
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
    let (_, exam) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/exams")
            .set_json(json!({ "title": "Quiz", "totalMarks": 10 }))
    );

    let (status, _) = call_json!(
        app,
        test::TestRequest::post().uri("/api/scores").set_json(json!([
            { "examId": exam["id"], "studentId": student["id"], "marks": "  " },
        ]))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call_json!(
        app,
        test::TestRequest::post().uri("/api/scores").set_json(json!([
            { "examId": "e00000000", "studentId": student["id"], "marks": 5 },
        ]))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call_json!(
        app,
        test::TestRequest::post().uri("/api/scores").set_json(json!([
            { "examId": exam["id"], "studentId": "s00000000", "marks": 5 },
        ]))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    // 考试未关联班级且未指定 classId
    let (status, _) = call_json!(
        app,
        test::TestRequest::get().uri(&format!("/api/exams/{}/sheet", exam["id"].as_str().unwrap()))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, empty) = call_json!(app, test::TestRequest::get().uri("/api/scores"));
    assert_eq!(empty, json!([]));
}

#[actix_web::test]
async fn deleting_exam_removes_scores() {
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
    let (_, exam) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/exams")
            .set_json(json!({ "title": "Quiz", "totalMarks": 10 }))
    );
    let exam_id = exam["id"].as_str().unwrap().to_string();
    let _ = call_json!(
        app,
        test::TestRequest::post().uri("/api/scores").set_json(json!([
            { "examId": exam_id, "studentId": student["id"], "marks": 7 },
        ]))
    );

    let (status, _) = call_json!(
        app,
        test::TestRequest::delete().uri(&format!("/api/exams/{exam_id}"))
    );
    assert_eq!(status, StatusCode::OK);

    let (_, scores) = call_json!(
        app,
        test::TestRequest::get().uri(&format!("/api/scores?examId={exam_id}"))
    );
    assert_eq!(scores, json!([]));

    let (status, _) = call_json!(
        app,
        test::TestRequest::delete().uri(&format!("/api/exams/{exam_id}"))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
}
