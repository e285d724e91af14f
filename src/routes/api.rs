use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::EvaluationService;

static EVALUATION_SERVICE: Lazy<EvaluationService> = Lazy::new(EvaluationService::new_lazy);

pub async fn list_evaluations(request: HttpRequest) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.list_evaluations(&request).await
}

pub async fn get_weights(request: HttpRequest) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.get_weights(&request).await
}

// 只读 JSON 接口
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/evaluations", web::get().to(list_evaluations))
            .route("/weights", web::get().to(get_weights)),
    );
}
