#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::{App, test};

use common::TestContext;

#[actix_web::test]
async fn system_info_reports_name_and_version() {
    let ctx = TestContext::new().await;
    let app = test::init_service(App::new().configure(ctx.configure())).await;

    let (status, info) = call_json!(app, test::TestRequest::get().uri("/api/system/info"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(info["systemName"], "EduMate");
    assert_eq!(info["version"], env!("CARGO_PKG_VERSION"));
    assert!(info["uptimeSeconds"].as_i64().unwrap() >= 0);
}
