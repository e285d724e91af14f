use actix_web::error::{InternalError, QueryPayloadError, UrlencodedError};
use actix_web::{HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

/// 表单解析失败时返回统一的错误响应
pub fn form_error_handler(err: UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    debug!("Form payload rejected on {}: {}", req.path(), err);
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid form data: {err}"),
    ));
    InternalError::from_response(err, response).into()
}

/// 查询参数解析失败时返回统一的错误响应
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Query string rejected on {}: {}", req.path(), err);
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid query parameters: {err}"),
    ));
    InternalError::from_response(err, response).into()
}
