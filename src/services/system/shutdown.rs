use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::warn;

use super::SystemService;

pub const FAREWELL: &str = "Tschüss";

/// 返回告别文本，并通知主循环开始优雅关闭
pub async fn end(service: &SystemService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let trigger = service.get_shutdown_trigger(request)?;

    warn!("Shutdown requested by client {:?}", request.peer_addr());
    trigger.trigger();

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(FAREWELL))
}
