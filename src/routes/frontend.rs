//! 教师端单页应用
//!
//! 页面资源用 rust-embed 编进二进制，`./frontend-custom/` 下的同名文件优先，方便本地调试。
//! 未知的 /api 路径返回 JSON 404；带扩展名但找不到的资源返回 404；
//! 其余路径交给前端路由，统一返回 index.html。

use std::path::Path;

use actix_web::http::header::{CACHE_CONTROL, HeaderValue};
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use rust_embed::Embed;

use crate::config::AppConfig;
use crate::models::{ApiError, ErrorCode};

#[derive(Embed)]
#[folder = "frontend/dist/"]
struct TeacherPortal;

const INDEX: &str = "index.html";
const CUSTOM_DIR: &str = "./frontend-custom";

/// 请求路径解析结果
#[derive(Debug, PartialEq)]
enum Target<'a> {
    Api,
    Asset(&'a str),
    Page,
}

fn classify(path: &str) -> Target<'_> {
    if path == "api" || path.starts_with("api/") {
        return Target::Api;
    }
    match extension(path) {
        Some(_) => Target::Asset(path),
        None => Target::Page,
    }
}

fn extension(path: &str) -> Option<&str> {
    Path::new(path).extension().and_then(|s| s.to_str())
}

fn content_type(path: &str) -> &'static str {
    match extension(path).unwrap_or("") {
        "html" => "text/html; charset=utf-8",
        "js" | "mjs" => "application/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "json" | "map" => "application/json",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "ico" => "image/x-icon",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "txt" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

/// 构建产物 assets/ 下的文件名带 hash，可以长期缓存
fn cache_policy(path: &str) -> &'static str {
    if path.starts_with("assets/") {
        "public, max-age=31536000, immutable"
    } else {
        "no-cache"
    }
}

fn load(path: &str) -> Option<Vec<u8>> {
    std::fs::read(Path::new(CUSTOM_DIR).join(path))
        .ok()
        .or_else(|| TeacherPortal::get(path).map(|f| f.data.into_owned()))
}

/// 在 index.html 中写入系统名称
fn render_index(raw: &[u8], system_name: &str) -> Vec<u8> {
    String::from_utf8_lossy(raw)
        .replace("%BASE_PATH%", "")
        .replace("%SYSTEM_NAME%", system_name)
        .into_bytes()
}

fn respond(path: &str, body: Vec<u8>) -> HttpResponse {
    let mut response = HttpResponse::Ok()
        .content_type(content_type(path))
        .body(body);
    response
        .headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static(cache_policy(path)));
    response
}

pub async fn serve_frontend(req: HttpRequest) -> ActixResult<HttpResponse> {
    let path = req.match_info().query("tail").trim_start_matches('/');

    match classify(path) {
        Target::Api => Ok(HttpResponse::NotFound().json(ApiError::new(
            ErrorCode::NotFound,
            format!("No API route for /{path}"),
        ))),
        Target::Asset(asset) if asset != INDEX => match load(asset) {
            Some(body) => Ok(respond(asset, body)),
            None => Ok(HttpResponse::NotFound().finish()),
        },
        _ => match load(INDEX) {
            Some(raw) => {
                let body = render_index(&raw, &AppConfig::get().app.system_name);
                Ok(respond(INDEX, body))
            }
            None => Ok(HttpResponse::NotFound()
                .content_type("text/plain; charset=utf-8")
                .body("EduMate teacher portal has not been built; the JSON API under /api is available.")),
        },
    }
}

/// 前端兜底路由，必须最后注册
pub fn configure_frontend_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{tail:.*}", web::get().to(serve_frontend));
}
