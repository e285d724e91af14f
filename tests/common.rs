#![allow(dead_code)]
use actix_web::web;
use std::sync::Arc;

use rust_exam_grader::routes;
use rust_exam_grader::runtime::lifetime::shutdown::ShutdownTrigger;
use rust_exam_grader::storage::{MemoryStorage, Storage};
use rust_exam_grader::utils::{form_error_handler, query_error_handler};

/// 与 main.rs 相同的路由与 app_data，但每个测试使用独立的内存存储
pub fn configure_app(
    storage: Arc<dyn Storage>,
    shutdown: ShutdownTrigger,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::FormConfig::default().error_handler(form_error_handler))
            .app_data(web::Data::new(storage))
            .app_data(web::Data::new(shutdown))
            .configure(routes::configure_evaluation_routes)
            .configure(routes::configure_api_routes)
            .configure(routes::configure_system_routes)
            .configure(routes::configure_asset_routes);
    }
}

pub fn fresh_storage() -> Arc<dyn Storage> {
    Arc::new(MemoryStorage::new())
}

/// 表单中始终带有权重字段 (HV 50/60%, LV 30/40%)，配置完成后这些字段会被忽略
pub fn submission(first: &str, last: &str, hv: &str, lv: &str) -> Vec<(&'static str, String)> {
    vec![
        ("hv_max", "50".to_string()),
        ("hv_gewichtung", "60".to_string()),
        ("lv_max", "30".to_string()),
        ("lv_gewichtung", "40".to_string()),
        ("vorname", first.to_string()),
        ("nachname", last.to_string()),
        ("hv_punkte", hv.to_string()),
        ("lv_punkte", lv.to_string()),
    ]
}
