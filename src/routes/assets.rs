//! 静态资源路由
//!
//! 使用 rust-embed 在编译时嵌入 static/ 目录，页面样式不依赖运行目录。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use rust_embed::Embed;
use std::path::Path;

#[derive(Embed)]
#[folder = "static/"]
struct StaticAssets;

/// 获取文件的 MIME 类型
fn get_mime_type(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    match ext {
        "css" => "text/css; charset=utf-8",
        "js" => "application/javascript; charset=utf-8",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "ico" => "image/x-icon",
        "woff2" => "font/woff2",
        _ => "application/octet-stream",
    }
}

pub async fn serve_asset(req: HttpRequest) -> ActixResult<HttpResponse> {
    let path = req.match_info().query("path").trim_start_matches('/');

    match StaticAssets::get(path) {
        Some(file) => Ok(HttpResponse::Ok()
            .content_type(get_mime_type(path))
            .insert_header(("Cache-Control", "public, max-age=3600"))
            .body(file.data.into_owned())),
        None => Ok(HttpResponse::NotFound()
            .content_type("text/plain; charset=utf-8")
            .body("Not Found")),
    }
}

pub fn configure_asset_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/static/{path:.*}", web::get().to(serve_asset));
}
