use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EvaluationService;
use crate::errors::GraderError;
use crate::views::evaluation_row;

/// 切换计入状态，只返回受影响的表格行
pub async fn toggle_counted(
    service: &EvaluationService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.toggle_counted(id).await {
        Ok(record) => Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(evaluation_row(&record).render())),
        Err(GraderError::RecordNotFound(msg)) => Ok(HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(format!(
                "<tr><td colspan=\"11\">{}</td></tr>",
                crate::views::html::escape_html(&msg)
            ))),
        Err(e) => {
            error!("Toggle of evaluation {} failed: {}", id, e);
            Ok(HttpResponse::InternalServerError()
                .content_type("text/html; charset=utf-8")
                .body("<tr><td colspan=\"11\">Interner Fehler</td></tr>"))
        }
    }
}
