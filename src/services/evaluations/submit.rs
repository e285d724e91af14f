use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::EvaluationService;
use crate::models::evaluations::requests::SubmitEvaluationForm;
use crate::models::{ApiResponse, ErrorCode};

/// 提交成绩后总是重定向回首页，被拒绝时附带错误代码
pub async fn submit_evaluation(
    service: &EvaluationService,
    request: &HttpRequest,
    form: SubmitEvaluationForm,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.submit_evaluation(form).await {
        Ok(_) => Ok(see_other("/")),
        Err(e) if e.is_rejection() => {
            info!("Submission rejected: {}", e);
            Ok(see_other(&format!("/?rejected={}", e.code())))
        }
        Err(e) => {
            error!("Submission failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Submission failed: {e}"),
                )),
            )
        }
    }
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
