use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EvaluationService;
use crate::config::AppConfig;
use crate::errors::GraderError;
use crate::models::evaluations::requests::IndexQuery;
use crate::views::html::escape_html;
use crate::views::{IndexPage, render_index_page};

pub async fn render_index(
    service: &EvaluationService,
    request: &HttpRequest,
    query: IndexQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let loaded = (
        storage.list_evaluations().await,
        storage.get_weights().await,
    );
    let (records, weights) = match loaded {
        (Ok(records), Ok(weights)) => (records, weights),
        (Err(e), _) | (_, Err(e)) => {
            error!("Failed to load gradebook: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .content_type("text/html; charset=utf-8")
                .body(format!(
                    "<p>Fehler beim Laden: {}</p>",
                    escape_html(&e.to_string())
                )));
        }
    };

    let html = render_index_page(&IndexPage {
        exam_title: &AppConfig::get().grading.exam_title,
        records: &records,
        weights,
        notice: query.rejected.as_deref().map(rejection_notice),
    });

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

/// 根据错误代码生成提示文本
fn rejection_notice(code: &str) -> String {
    match GraderError::type_name_for_code(code) {
        Some(type_name) => format!("Eintrag abgelehnt ({code}): {type_name}"),
        None => "Eintrag abgelehnt".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_notice() {
        assert_eq!(
            rejection_notice("E002"),
            "Eintrag abgelehnt (E002): Duplicate Name"
        );
        assert_eq!(rejection_notice("<script>"), "Eintrag abgelehnt");
    }
}
