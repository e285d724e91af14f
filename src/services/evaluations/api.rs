use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EvaluationService;
use crate::models::evaluations::responses::{EvaluationListResponse, WeightsResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_evaluations(
    service: &EvaluationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_evaluations().await {
        Ok(records) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            EvaluationListResponse::from_records(records),
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询成绩失败: {e}"),
            )),
        ),
    }
}

pub async fn get_weights(
    service: &EvaluationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_weights().await {
        Ok(weights) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            WeightsResponse::from(weights),
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询权重配置失败: {e}"),
            )),
        ),
    }
}
