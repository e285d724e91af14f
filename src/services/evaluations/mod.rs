pub mod api;
pub mod export;
pub mod index;
pub mod submit;
pub mod toggle;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::evaluations::requests::{IndexQuery, SubmitEvaluationForm};
use crate::storage::Storage;

pub struct EvaluationService {
    storage: Option<Arc<dyn Storage>>,
}

impl EvaluationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        if let Some(storage) = &self.storage {
            return Ok(storage.clone());
        }
        request
            .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
            .map(|data| data.get_ref().clone())
            .ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("Storage not found in app data")
            })
    }

    // 渲染首页
    pub async fn render_index(
        &self,
        request: &HttpRequest,
        query: IndexQuery,
    ) -> ActixResult<HttpResponse> {
        index::render_index(self, request, query).await
    }

    // 提交成绩
    pub async fn submit_evaluation(
        &self,
        request: &HttpRequest,
        form: SubmitEvaluationForm,
    ) -> ActixResult<HttpResponse> {
        submit::submit_evaluation(self, request, form).await
    }

    // 切换是否计入
    pub async fn toggle_counted(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        toggle::toggle_counted(self, request, id).await
    }

    // 导出 PDF
    pub async fn export_pdf(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        export::export_pdf(self, request).await
    }

    // JSON 成绩列表
    pub async fn list_evaluations(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        api::list_evaluations(self, request).await
    }

    // JSON 权重配置
    pub async fn get_weights(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        api::get_weights(self, request).await
    }
}
