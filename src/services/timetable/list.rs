use actix_web::{HttpRequest, HttpResponse, ResponseError, Result as ActixResult};

use super::TimetableService;
use super::views::{build_grid, build_week};

pub async fn list_entries(
    service: &TimetableService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_timetable().await {
        Ok(entries) => Ok(HttpResponse::Ok().json(entries)),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn week_view(
    service: &TimetableService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_timetable().await {
        Ok(entries) => Ok(HttpResponse::Ok().json(build_week(&entries))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn grid_view(
    service: &TimetableService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_timetable().await {
        Ok(entries) => Ok(HttpResponse::Ok().json(build_grid(&entries))),
        Err(e) => Ok(e.error_response()),
    }
}
