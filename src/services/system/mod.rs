pub mod shutdown;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use crate::runtime::lifetime::shutdown::ShutdownTrigger;

pub struct SystemService;

impl SystemService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_shutdown_trigger(
        &self,
        request: &HttpRequest,
    ) -> ActixResult<ShutdownTrigger> {
        request
            .app_data::<web::Data<ShutdownTrigger>>()
            .map(|data| data.get_ref().clone())
            .ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("Shutdown trigger not found in app data")
            })
    }

    // 结束程序
    pub async fn end(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        shutdown::end(self, request).await
    }
}
