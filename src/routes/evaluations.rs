use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::evaluations::requests::{IndexQuery, SubmitEvaluationForm};
use crate::services::EvaluationService;
use crate::utils::SafeRecordId;

// 懒加载的全局 EvaluationService 实例
static EVALUATION_SERVICE: Lazy<EvaluationService> = Lazy::new(EvaluationService::new_lazy);

pub async fn index(
    request: HttpRequest,
    query: web::Query<IndexQuery>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .render_index(&request, query.into_inner())
        .await
}

pub async fn add_evaluation(
    request: HttpRequest,
    form: web::Form<SubmitEvaluationForm>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .submit_evaluation(&request, form.into_inner())
        .await
}

pub async fn toggle_counted(request: HttpRequest, id: SafeRecordId) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.toggle_counted(&request, id.0).await
}

pub async fn export_pdf(request: HttpRequest) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.export_pdf(&request).await
}

// 配置路由
pub fn configure_evaluation_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/add", web::post().to(add_evaluation))
        .route("/toggle/{id}", web::post().to(toggle_counted))
        .route("/export", web::get().to(export_pdf));
}
